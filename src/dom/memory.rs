use std::collections::BTreeMap;

use super::RenderSurface;
use crate::comments::toggle_comments;
use crate::config::{POST_CONTAINER_TAG, SELECT_MENU_ID};
use crate::types::PostId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    text: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<(ListenerId, PostId)>,
}

/// Arena-backed document tree with a `body` root.
///
/// Detached nodes stay in the arena; they just stop being reachable from
/// the root, which is what every lookup walks.
#[derive(Debug)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    next_listener: u64,
}

impl MemoryDom {
    pub fn new() -> Self {
        let body = NodeData {
            tag: "body".to_string(),
            ..NodeData::default()
        };
        Self {
            nodes: vec![body],
            root: NodeId(0),
            next_listener: 0,
        }
    }

    /// The static skeleton the app shell renders: the employee selector and
    /// an empty post container.
    pub fn with_page_shell() -> Self {
        let mut dom = Self::new();
        let root = dom.root;

        let select = dom.create_element("select");
        dom.set_attribute(&select, "id", SELECT_MENU_ID);
        let prompt = dom.create_element("option");
        dom.set_attribute(&prompt, "value", "");
        dom.set_text(&prompt, "Employees");
        dom.append_child(&select, &prompt);
        dom.append_child(&root, &select);

        let main = dom.create_element(POST_CONTAINER_TAG);
        dom.append_child(&root, &main);
        dom
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    /// Post ids of the click listeners registered on `node`.
    pub fn listeners_on(&self, node: NodeId) -> Vec<PostId> {
        self.nodes[node.0]
            .listeners
            .iter()
            .map(|(_, post_id)| *post_id)
            .collect()
    }

    /// Click listeners registered anywhere, attached or not.
    pub fn listener_count(&self) -> usize {
        self.nodes.iter().map(|n| n.listeners.len()).sum()
    }

    /// Dispatches a click on `node`, running each registered handler.
    /// Returns how many handlers ran.
    pub fn click(&mut self, node: NodeId) -> usize {
        let post_ids = self.listeners_on(node);
        for post_id in &post_ids {
            toggle_comments(self, Some(*post_id));
        }
        post_ids.len()
    }

    fn find(&self, matches: impl Fn(&NodeData) -> bool) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let data = &self.nodes[id.0];
            if matches(data) {
                return Some(id);
            }
            // document order: push children reversed so the first child pops first
            stack.extend(data.children.iter().rev().copied());
        }
        None
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != child);
        }
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for MemoryDom {
    type Node = NodeId;
    type Listener = ListenerId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.remove_children(node);
        self.nodes[node.0].text = text.to_string();
    }

    fn text(&self, node: &NodeId) -> String {
        let data = &self.nodes[node.0];
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&self.text(child));
        }
        text
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attrs.get(name).cloned()
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let classes = &mut self.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn toggle_class(&mut self, node: &NodeId, class: &str) -> bool {
        let classes = &mut self.nodes[node.0].classes;
        if let Some(pos) = classes.iter().position(|c| c == class) {
            classes.remove(pos);
            false
        } else {
            classes.push(class.to_string());
            true
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn set_disabled(&mut self, node: &NodeId, disabled: bool) {
        self.nodes[node.0].disabled = disabled;
    }

    fn is_disabled(&self, node: &NodeId) -> bool {
        self.nodes[node.0].disabled
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.detach(*child);
        self.nodes[child.0].parent = Some(*parent);
        self.nodes[parent.0].children.push(*child);
    }

    fn remove_children(&mut self, parent: &NodeId) -> usize {
        let children = std::mem::take(&mut self.nodes[parent.0].children);
        for child in &children {
            self.nodes[child.0].parent = None;
        }
        children.len()
    }

    fn children(&self, parent: &NodeId) -> Vec<NodeId> {
        self.nodes[parent.0].children.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(|n| n.attrs.get("id").is_some_and(|v| v == id))
    }

    fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find(|n| n.tag == tag)
    }

    fn find_by_attribute(&self, tag: &str, name: &str, value: &str) -> Option<NodeId> {
        self.find(|n| n.tag == tag && n.attrs.get(name).is_some_and(|v| v == value))
    }

    fn listen_click(&mut self, node: &NodeId, post_id: PostId) -> ListenerId {
        let listener = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.nodes[node.0].listeners.push((listener, post_id));
        listener
    }

    fn unlisten_click(&mut self, node: &NodeId, listener: ListenerId) {
        self.nodes[node.0].listeners.retain(|(id, _)| *id != listener);
    }
}
