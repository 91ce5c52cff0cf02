//! DOM capability the widgets are written against.
//!
//! Widget logic never touches `web-sys` directly; it reads and mutates the
//! tree through this trait. The browser implementation is
//! [`crate::web::WebDom`]; the native test suite substitutes an in-memory
//! arena. Handles are cheap element references whose equality is element
//! identity.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

pub trait Dom {
    /// Stable reference to one element in the tree.
    type Handle: Clone + PartialEq;

    /// Look up an element by its id.
    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// Parent element, if any.
    fn parent(&self, el: &Self::Handle) -> Option<Self::Handle>;

    /// Attribute value, if present.
    fn attr(&self, el: &Self::Handle, name: &str) -> Option<String>;

    fn set_attr(&self, el: &Self::Handle, name: &str, value: &str);

    fn add_class(&self, el: &Self::Handle, class: &str);

    fn remove_class(&self, el: &Self::Handle, class: &str);

    fn has_class(&self, el: &Self::Handle, class: &str) -> bool;

    /// Dispatch a bubbling custom event of type `event` on `el`.
    fn emit(&self, el: &Self::Handle, event: &str);

    /// Blur the first text or search input inside `el`, if any.
    fn blur_first_text_input(&self, el: &Self::Handle);

    /// Every element carrying the attribute `name`, in document order.
    fn elements_with_attr(&self, name: &str) -> Vec<Self::Handle>;

    /// First element carrying `class`, in document order.
    fn first_with_class(&self, class: &str) -> Option<Self::Handle>;

    /// Whether `ancestor` contains `node`, inclusive of `node` itself.
    fn contains(&self, ancestor: &Self::Handle, node: &Self::Handle) -> bool {
        let mut current = Some(node.clone());
        while let Some(el) = current {
            if el == *ancestor {
                return true;
            }
            current = self.parent(&el);
        }
        false
    }

    /// Nearest element carrying the attribute `name`, starting from `node`
    /// itself and walking up through its ancestors.
    fn closest_with_attr(&self, name: &str, node: &Self::Handle) -> Option<Self::Handle> {
        let mut current = Some(node.clone());
        while let Some(el) = current {
            if self.attr(&el, name).is_some() {
                return Some(el);
            }
            current = self.parent(&el);
        }
        None
    }
}
