//! In-memory DOM arena for the native test suite.
//!
//! Implements [`Dom`] over a flat element vector and records the side
//! effects the widgets cause (custom events, input blurs) so behavior can
//! be asserted without a browser. Handles are arena indices; insertion
//! order doubles as document order.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::dom::Dom;

#[derive(Default)]
struct ElementData {
    tag: String,
    id: Option<String>,
    parent: Option<usize>,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
}

pub struct TestDom {
    elements: RefCell<Vec<ElementData>>,
    events: RefCell<Vec<(usize, String)>>,
    blurred: RefCell<Vec<usize>>,
}

impl TestDom {
    pub fn new() -> Self {
        let body = ElementData { tag: "body".into(), ..ElementData::default() };
        Self {
            elements: RefCell::new(vec![body]),
            events: RefCell::new(Vec::new()),
            blurred: RefCell::new(Vec::new()),
        }
    }

    /// The root element every test tree hangs off.
    pub fn body(&self) -> usize {
        0
    }

    /// Append a child element, returning its handle.
    pub fn append(&self, parent: usize, tag: &str, id: Option<&str>) -> usize {
        let mut elements = self.elements.borrow_mut();
        let handle = elements.len();
        elements.push(ElementData {
            tag: tag.into(),
            id: id.map(str::to_owned),
            parent: Some(parent),
            ..ElementData::default()
        });
        handle
    }

    /// Custom events emitted on `el`, in emission order.
    pub fn events_for(&self, el: usize) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(handle, _)| *handle == el)
            .map(|(_, event)| event.clone())
            .collect()
    }

    /// Every custom event emitted, in emission order.
    pub fn all_events(&self) -> Vec<(usize, String)> {
        self.events.borrow().clone()
    }

    /// Elements blurred via [`Dom::blur_first_text_input`].
    pub fn blurred(&self) -> Vec<usize> {
        self.blurred.borrow().clone()
    }
}

impl Default for TestDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for TestDom {
    type Handle = usize;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.elements
            .borrow()
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
    }

    fn parent(&self, el: &usize) -> Option<usize> {
        self.elements.borrow()[*el].parent
    }

    fn attr(&self, el: &usize, name: &str) -> Option<String> {
        self.elements.borrow()[*el].attrs.get(name).cloned()
    }

    fn set_attr(&self, el: &usize, name: &str, value: &str) {
        self.elements.borrow_mut()[*el]
            .attrs
            .insert(name.into(), value.into());
    }

    fn add_class(&self, el: &usize, class: &str) {
        self.elements.borrow_mut()[*el].classes.insert(class.into());
    }

    fn remove_class(&self, el: &usize, class: &str) {
        self.elements.borrow_mut()[*el].classes.remove(class);
    }

    fn has_class(&self, el: &usize, class: &str) -> bool {
        self.elements.borrow()[*el].classes.contains(class)
    }

    fn emit(&self, el: &usize, event: &str) {
        self.events.borrow_mut().push((*el, event.into()));
    }

    fn blur_first_text_input(&self, el: &usize) {
        let first = {
            let elements = self.elements.borrow();
            (0..elements.len()).find(|&handle| {
                elements[handle].tag == "input"
                    && matches!(
                        elements[handle].attrs.get("type").map(String::as_str),
                        Some("text" | "search")
                    )
                    && self.contains(el, &handle)
            })
        };
        if let Some(handle) = first {
            self.blurred.borrow_mut().push(handle);
        }
    }

    fn elements_with_attr(&self, name: &str) -> Vec<usize> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, el)| el.attrs.contains_key(name))
            .map(|(handle, _)| handle)
            .collect()
    }

    fn first_with_class(&self, class: &str) -> Option<usize> {
        self.elements
            .borrow()
            .iter()
            .position(|el| el.classes.contains(class))
    }
}
