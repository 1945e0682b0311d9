use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::RenderSurface;
use crate::comments::toggle_comments;
use crate::types::PostId;

/// Render surface over the live page document.
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

// Failures are logged rather than thrown from inside an event handler.
fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        tracing::error!("DOM {} failed: {:?}", op, e);
    }
}

impl RenderSurface for BrowserDom {
    type Node = Element;
    type Listener = Closure<dyn FnMut(Event)>;

    fn create_element(&mut self, tag: &str) -> Element {
        // only throws for invalid tag names; the page uses literal tags
        self.document.create_element(tag).unwrap_throw()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        report("setAttribute", node.set_attribute(name, value));
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        report("classList.add", node.class_list().add_1(class));
    }

    fn toggle_class(&mut self, node: &Element, class: &str) -> bool {
        match node.class_list().toggle(class) {
            Ok(present) => present,
            Err(e) => {
                tracing::error!("classList.toggle failed: {:?}", e);
                node.class_list().contains(class)
            }
        }
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_disabled(&mut self, node: &Element, disabled: bool) {
        if disabled {
            report("setAttribute", node.set_attribute("disabled", ""));
        } else {
            report("removeAttribute", node.remove_attribute("disabled"));
        }
    }

    fn is_disabled(&self, node: &Element) -> bool {
        node.has_attribute("disabled")
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        report("appendChild", parent.append_child(child).map(|_| ()));
    }

    fn remove_children(&mut self, parent: &Element) -> usize {
        let mut removed = 0;
        while let Some(child) = parent.last_element_child() {
            if let Err(e) = parent.remove_child(&child) {
                tracing::error!("removeChild failed: {:?}", e);
                break;
            }
            removed += 1;
        }
        removed
    }

    fn children(&self, parent: &Element) -> Vec<Element> {
        let collection = parent.children();
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn find_by_tag(&self, tag: &str) -> Option<Element> {
        self.document.query_selector(tag).ok().flatten()
    }

    fn find_by_attribute(&self, tag: &str, name: &str, value: &str) -> Option<Element> {
        let selector = format!("{tag}[{name}='{value}']");
        self.document.query_selector(&selector).ok().flatten()
    }

    fn listen_click(&mut self, node: &Element, post_id: PostId) -> Self::Listener {
        let document = self.document.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let mut dom = BrowserDom::new(document.clone());
            toggle_comments(&mut dom, Some(post_id));
        });
        report(
            "addEventListener",
            node.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref()),
        );
        listener
    }

    fn unlisten_click(&mut self, node: &Element, listener: Self::Listener) {
        report(
            "removeEventListener",
            node.remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref()),
        );
        // dropping the closure frees the wasm side of the handler
        drop(listener);
    }
}
