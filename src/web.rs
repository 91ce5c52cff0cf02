//! `web-sys`-backed [`Dom`] implementation.
//!
//! Handles are live [`web_sys::Element`] references; equality is element
//! identity. Fallible DOM writes whose failure has no domain meaning are
//! fire-and-forget.

use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlElement};

use crate::dom::Dom;

/// [`Dom`] over the live browser document.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Dom for WebDom {
    type Handle = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn parent(&self, el: &Element) -> Option<Element> {
        el.parent_element()
    }

    fn attr(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attr(&self, el: &Element, name: &str, value: &str) {
        let _ = el.set_attribute(name, value);
    }

    fn add_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().remove_1(class);
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn emit(&self, el: &Element, event: &str) {
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        if let Ok(custom) = CustomEvent::new_with_event_init_dict(event, &init) {
            let _ = el.dispatch_event(&custom);
        }
    }

    fn blur_first_text_input(&self, el: &Element) {
        if let Ok(Some(input)) = el.query_selector("input[type=text], input[type=search]") {
            if let Ok(input) = input.dyn_into::<HtmlElement>() {
                let _ = input.blur();
            }
        }
    }

    fn elements_with_attr(&self, name: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&format!("[{name}]")) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn first_with_class(&self, class: &str) -> Option<Element> {
        self.document.query_selector(&format!(".{class}")).ok().flatten()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn closest_with_attr(&self, name: &str, node: &Element) -> Option<Element> {
        node.closest(&format!("[{name}]")).ok().flatten()
    }
}
