//! Render surface: the DOM operations the page needs, behind a trait so the
//! refresh and toggle logic run the same against the browser and in memory.

pub mod browser;
pub mod memory;

pub use browser::BrowserDom;
pub use memory::{ListenerId, MemoryDom, NodeId};

use std::fmt::Debug;

use crate::types::PostId;

pub trait RenderSurface {
    /// Handle to one element. Cloning the handle never clones the element.
    type Node: Clone + PartialEq + Debug;
    /// Handle returned by `listen_click`, needed again to detach.
    type Listener;

    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Replaces all content of `node` with a single text run.
    fn set_text(&mut self, node: &Self::Node, text: &str);
    /// Text of `node` and all its descendants.
    fn text(&self, node: &Self::Node) -> String;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn add_class(&mut self, node: &Self::Node, class: &str);
    /// Returns whether the class is present afterwards.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool;
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_disabled(&mut self, node: &Self::Node, disabled: bool);
    fn is_disabled(&self, node: &Self::Node) -> bool;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    /// Detaches every child of `parent`, returning how many were removed.
    fn remove_children(&mut self, parent: &Self::Node) -> usize;
    fn children(&self, parent: &Self::Node) -> Vec<Self::Node>;

    // Lookups only see nodes attached to the document.
    fn find_by_id(&self, id: &str) -> Option<Self::Node>;
    fn find_by_tag(&self, tag: &str) -> Option<Self::Node>;
    fn find_by_attribute(&self, tag: &str, name: &str, value: &str) -> Option<Self::Node>;

    /// Registers a click handler that toggles the comment panel of `post_id`.
    fn listen_click(&mut self, node: &Self::Node, post_id: PostId) -> Self::Listener;
    /// Removing a listener that is no longer registered is a no-op.
    fn unlisten_click(&mut self, node: &Self::Node, listener: Self::Listener);
}
