use dioxus::prelude::*;
use tracing::{error, warn};

use crate::config::GatewayConfig;
use crate::dom::BrowserDom;
use crate::gateway::Gateway;
use crate::page::PageController;
use crate::posts_client::PostsClient;

pub type BrowserPage = PageController<PostsClient, BrowserDom>;

/// Slot holding the page controller between change events.
///
/// The slot is empty until the selector has been populated and while a
/// refresh is running. A change event that finds it empty is dropped.
#[derive(Clone, Copy)]
pub struct PostBoardHandle {
    slot: Signal<Option<BrowserPage>>,
}

pub fn use_post_board() -> PostBoardHandle {
    let slot = use_signal(|| None);
    let board = PostBoardHandle { slot };

    // reads no signals, so this runs once after the first render
    use_effect(move || {
        spawn(async move {
            board.boot().await;
        });
    });

    board
}

impl PostBoardHandle {
    async fn boot(self) {
        let Some(dom) = BrowserDom::from_window() else {
            error!("no browser document, posts page not started");
            return;
        };

        let config = GatewayConfig::from_build_env();
        let gateway = Gateway::new(PostsClient::new(config.base_url));
        let mut page = match PageController::new(gateway, dom) {
            Ok(page) => page,
            Err(e) => {
                error!("posts page not started: {}", e);
                return;
            }
        };

        page.init().await;
        let mut slot = self.slot;
        slot.set(Some(page));
    }

    pub fn select(&self, value: String) {
        let mut slot = self.slot;
        spawn(async move {
            let taken = slot.write().take();
            let Some(mut page) = taken else {
                warn!(%value, "employee selection ignored, page busy or not ready");
                return;
            };

            page.on_selection_change(&value).await;
            slot.set(Some(page));
        });
    }
}
