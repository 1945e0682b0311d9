//! Replaces the rendered post list for a newly selected employee.
//!
//! One cycle runs detach → clear → fetch/render → attach, strictly in that
//! order. Listeners are only attached once every block of the cycle exists.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::dom::RenderSurface;
use crate::gateway::Gateway;
use crate::markup::{self, PostBlock};
use crate::posts_client::PostsApi;
use crate::types::{Post, PostId};

/// What one refresh cycle did, for observation in tests and logs.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshOutcome<N> {
    /// Post ids whose listeners were removed, in key order.
    pub detached: Vec<PostId>,
    /// The container that was emptied and refilled.
    pub cleared: N,
    /// Top-level nodes appended to the container: post articles, or the
    /// placeholder for an empty list.
    pub rendered: Vec<N>,
    /// Post ids that got a click listener, in render order.
    pub attached: Vec<PostId>,
}

struct AttachedListener<S: RenderSurface> {
    button: S::Node,
    listener: S::Listener,
}

/// Owns the post container and the listener registry, keyed by post id.
pub struct PostListRefresher<S: RenderSurface> {
    container: S::Node,
    listeners: BTreeMap<PostId, AttachedListener<S>>,
}

impl<S: RenderSurface> PostListRefresher<S> {
    pub fn new(container: S::Node) -> Self {
        Self {
            container,
            listeners: BTreeMap::new(),
        }
    }

    pub fn container(&self) -> &S::Node {
        &self.container
    }

    /// Post ids with a live click listener.
    pub fn listener_keys(&self) -> Vec<PostId> {
        self.listeners.keys().copied().collect()
    }

    pub async fn refresh<A: PostsApi>(
        &mut self,
        surface: &mut S,
        gateway: &Gateway<A>,
        posts: Option<&[Post]>,
    ) -> Option<RefreshOutcome<S::Node>> {
        let posts = posts?;

        let detached = self.detach_listeners(surface);
        let removed = surface.remove_children(&self.container);
        debug!(listeners = detached.len(), nodes = removed, "cleared post list");

        let mut rendered = Vec::with_capacity(posts.len().max(1));
        let mut blocks = Vec::with_capacity(posts.len());

        if posts.is_empty() {
            let placeholder = markup::placeholder(surface);
            surface.append_child(&self.container, &placeholder);
            rendered.push(placeholder);
        }

        // Sequential on purpose: each block is complete before the next
        // post's reads start.
        for post in posts {
            let author = gateway.get_employee(Some(post.employee_id)).await;
            if author.is_none() {
                warn!(post_id = post.id, employee_id = post.employee_id, "author unavailable");
            }
            let comments = gateway.list_comments_for(Some(post.id)).await;

            let block = markup::post_block(surface, post, author.as_ref(), &comments);
            surface.append_child(&self.container, &block.article);
            rendered.push(block.article.clone());
            blocks.push(block);
        }

        let attached = self.attach_listeners(surface, blocks);
        info!(posts = posts.len(), listeners = attached.len(), "post list refreshed");

        Some(RefreshOutcome {
            detached,
            cleared: self.container.clone(),
            rendered,
            attached,
        })
    }

    fn detach_listeners(&mut self, surface: &mut S) -> Vec<PostId> {
        let listeners = std::mem::take(&mut self.listeners);
        listeners
            .into_iter()
            .map(|(post_id, attached)| {
                surface.unlisten_click(&attached.button, attached.listener);
                post_id
            })
            .collect()
    }

    fn attach_listeners(&mut self, surface: &mut S, blocks: Vec<PostBlock<S::Node>>) -> Vec<PostId> {
        let mut attached = Vec::with_capacity(blocks.len());
        for block in blocks {
            if self.listeners.contains_key(&block.post_id) {
                warn!(post_id = block.post_id, "duplicate post id, button left without listener");
                continue;
            }
            let listener = surface.listen_click(&block.button, block.post_id);
            self.listeners.insert(
                block.post_id,
                AttachedListener {
                    button: block.button,
                    listener,
                },
            );
            attached.push(block.post_id);
        }
        attached
    }
}
