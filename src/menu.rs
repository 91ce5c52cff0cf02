//! Two-state menu toggle for palm-sized viewports.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{ACTIVE_CLASS, ARIA_EXPANDED, ARIA_HASPOPUP};
use crate::cycle::{ClickCycle, Handler};
use crate::dom::Dom;

/// Collapsed/expanded toggle pairing one button with one panel.
///
/// `aria-expanded` on the button mirrors the panel state. Built as a
/// two-entry [`ClickCycle`]: expand, collapse, expand again.
pub struct MenuToggle<D: Dom> {
    button: D::Handle,
    cycle: ClickCycle<D>,
}

impl<D: Dom> MenuToggle<D>
where
    D::Handle: 'static,
{
    /// Pair `button` with `menu` and set the button's initial ARIA state.
    #[must_use]
    pub fn new(dom: &D, button: D::Handle, menu: D::Handle) -> Self {
        dom.set_attr(&button, ARIA_EXPANDED, "false");
        dom.set_attr(&button, ARIA_HASPOPUP, "true");

        let expand = {
            let menu = menu.clone();
            Box::new(move |dom: &D, button: &D::Handle| {
                dom.add_class(&menu, ACTIVE_CLASS);
                dom.add_class(button, ACTIVE_CLASS);
                dom.set_attr(button, ARIA_EXPANDED, "true");
            }) as Handler<D>
        };
        let collapse = Box::new(move |dom: &D, button: &D::Handle| {
            dom.remove_class(&menu, ACTIVE_CLASS);
            dom.remove_class(button, ACTIVE_CLASS);
            dom.set_attr(button, ARIA_EXPANDED, "false");
        }) as Handler<D>;

        Self { button, cycle: ClickCycle::new(vec![expand, collapse]) }
    }

    /// Advance the toggle by one click on the button.
    pub fn click(&mut self, dom: &D) {
        self.cycle.click(dom, &self.button);
    }
}
