//! Show/hide state of a post's comment panel and its toggle button.
//!
//! Both halves are located by their `data-post-id` attribute. The button
//! label is always derived from the panel's class after the flip, so the two
//! can't drift apart even if a label was edited out of band.

use crate::dom::RenderSurface;
use crate::types::PostId;

pub const POST_ID_ATTR: &str = "data-post-id";
pub const HIDDEN_CLASS: &str = "hide";
pub const SHOW_COMMENTS: &str = "Show Comments";
pub const HIDE_COMMENTS: &str = "Hide Comments";

/// Nodes found for one toggle. Either half may be missing.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentToggle<N> {
    pub panel: Option<N>,
    pub button: Option<N>,
}

pub fn button_label(panel_hidden: bool) -> &'static str {
    if panel_hidden {
        SHOW_COMMENTS
    } else {
        HIDE_COMMENTS
    }
}

/// Flips the comment panel of `post_id` and relabels its button.
///
/// Returns `None` for an absent id. When the panel isn't in the document
/// nothing is mutated, whatever the button lookup found.
pub fn toggle_comments<S: RenderSurface>(
    surface: &mut S,
    post_id: Option<PostId>,
) -> Option<CommentToggle<S::Node>> {
    let post_id = post_id.filter(|id| *id != 0)?;
    let key = post_id.to_string();

    let panel = surface.find_by_attribute("section", POST_ID_ATTR, &key);
    let button = surface.find_by_attribute("button", POST_ID_ATTR, &key);

    if let Some(panel) = &panel {
        let hidden = surface.toggle_class(panel, HIDDEN_CLASS);
        if let Some(button) = &button {
            surface.set_text(button, button_label(hidden));
        }
    }

    Some(CommentToggle { panel, button })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::markup::post_block;
    use crate::types::Post;

    fn rendered(post_ids: &[PostId]) -> MemoryDom {
        let mut dom = MemoryDom::with_page_shell();
        let main = dom.find_by_tag("main").unwrap();
        for id in post_ids {
            let post = Post {
                id: *id,
                employee_id: 1,
                title: format!("post {id}"),
                body: String::new(),
            };
            let block = post_block(&mut dom, &post, None, &[]);
            dom.append_child(&main, &block.article);
        }
        dom
    }

    fn state(dom: &MemoryDom, toggle: &CommentToggle<crate::dom::NodeId>) -> (bool, String) {
        (
            dom.has_class(toggle.panel.as_ref().unwrap(), HIDDEN_CLASS),
            dom.text(toggle.button.as_ref().unwrap()),
        )
    }

    #[test]
    fn first_toggle_shows_comments() {
        let mut dom = rendered(&[1, 2]);
        let toggle = toggle_comments(&mut dom, Some(2)).unwrap();
        assert_eq!(state(&dom, &toggle), (false, HIDE_COMMENTS.to_string()));

        // neighbour untouched
        let other = dom.find_by_attribute("section", POST_ID_ATTR, "1").unwrap();
        assert!(dom.has_class(&other, HIDDEN_CLASS));
    }

    #[test]
    fn toggling_twice_restores_both_halves() {
        let mut dom = rendered(&[5]);
        let panel = dom.find_by_attribute("section", POST_ID_ATTR, "5").unwrap();
        let button = dom.find_by_attribute("button", POST_ID_ATTR, "5").unwrap();
        let before = (dom.has_class(&panel, HIDDEN_CLASS), dom.text(&button));

        toggle_comments(&mut dom, Some(5));
        let toggle = toggle_comments(&mut dom, Some(5)).unwrap();

        assert_eq!(state(&dom, &toggle), before);
    }

    #[test]
    fn unknown_post_finds_nothing() {
        let mut dom = rendered(&[1]);
        let toggle = toggle_comments(&mut dom, Some(99)).unwrap();
        assert_eq!(toggle, CommentToggle { panel: None, button: None });

        let panel = dom.find_by_attribute("section", POST_ID_ATTR, "1").unwrap();
        assert!(dom.has_class(&panel, HIDDEN_CLASS));
    }

    #[test]
    fn absent_id_is_a_no_op() {
        let mut dom = rendered(&[1]);
        assert_eq!(toggle_comments(&mut dom, None), None);
        assert_eq!(toggle_comments(&mut dom, Some(0)), None);
    }

    #[test]
    fn button_without_panel_is_left_alone() {
        let mut dom = MemoryDom::with_page_shell();
        let main = dom.find_by_tag("main").unwrap();
        let button = dom.create_element("button");
        dom.set_attribute(&button, POST_ID_ATTR, "3");
        dom.set_text(&button, SHOW_COMMENTS);
        dom.append_child(&main, &button);

        let toggle = toggle_comments(&mut dom, Some(3)).unwrap();
        assert_eq!(toggle.panel, None);
        assert_eq!(toggle.button, Some(button));
        assert_eq!(dom.text(&button), SHOW_COMMENTS);
    }

    #[test]
    fn drifted_label_is_resynchronised() {
        let mut dom = rendered(&[4]);
        let button = dom.find_by_attribute("button", POST_ID_ATTR, "4").unwrap();
        dom.set_text(&button, HIDE_COMMENTS);

        let toggle = toggle_comments(&mut dom, Some(4)).unwrap();
        assert_eq!(state(&dom, &toggle), (false, HIDE_COMMENTS.to_string()));
    }
}
