//! Disclosure (dropdown) controller.
//!
//! A disclosure is a trigger/target pair: an interactive element carrying
//! the `toggle-visibility` attribute whose value names the element it
//! reveals. The controller is the single authority for which disclosure is
//! currently open. It tracks at most one open pair, swaps sibling
//! disclosures, lets nested disclosures stay open together, and closes on
//! outside clicks and Escape. Triggers carrying
//! `toggle-visibility-drop-down="false"` still show and hide per click but
//! are never tracked, so the outside-click and Escape bookkeeping ignores
//! them.
//!
//! All listener dispatch funnels through [`DisclosureController::handle_document_click`]
//! and [`DisclosureController::handle_escape`]; the browser boundary only
//! translates raw events into these calls.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

use crate::consts::{
    ACTIVE_CLASS, ARIA_CONTROLS, ARIA_EXPANDED, ARIA_HASPOPUP, DROP_DOWN_ATTR, EVENT_HIDE,
    EVENT_HIDE_TARGET, EVENT_SHOW, EVENT_SHOW_TARGET, TARGET_CLASS, TRIGGER_ATTR,
};
use crate::dom::Dom;

/// The tracked open trigger/target pair. Both elements are present or the
/// disclosure is closed; never one without the other.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPair<H> {
    pub trigger: H,
    pub target: H,
}

/// Single-slot disclosure state: either nothing is tracked, or exactly one
/// open pair is.
pub struct DisclosureController<D: Dom> {
    open: Option<OpenPair<D::Handle>>,
}

impl<D: Dom> DisclosureController<D> {
    /// Discover every trigger in the tree and decorate it: ARIA popup
    /// attributes on the trigger, the target marker class on its target.
    ///
    /// A trigger whose declared target id does not resolve is skipped; that
    /// is a markup mistake, not a runtime fault.
    #[must_use]
    pub fn new(dom: &D) -> Self {
        for trigger in dom.elements_with_attr(TRIGGER_ATTR) {
            let Some((target, target_id)) = Self::resolve_target(dom, &trigger) else {
                log::debug!("skipping disclosure trigger with unresolvable target id");
                continue;
            };
            dom.set_attr(&trigger, ARIA_HASPOPUP, "true");
            dom.set_attr(&trigger, ARIA_CONTROLS, &target_id);
            dom.set_attr(&trigger, ARIA_EXPANDED, "false");
            dom.add_class(&target, TARGET_CLASS);
        }
        Self { open: None }
    }

    /// The currently tracked open pair, if any.
    #[must_use]
    pub fn open(&self) -> Option<&OpenPair<D::Handle>> {
        self.open.as_ref()
    }

    /// Show or hide the disclosure owned by `trigger`, depending on whether
    /// its target is currently active. No-op when the target id does not
    /// resolve.
    pub fn toggle(&mut self, dom: &D, trigger: &D::Handle) {
        let Some((target, _)) = Self::resolve_target(dom, trigger) else {
            log::debug!("toggle on a trigger with unresolvable target id");
            return;
        };
        if dom.has_class(&target, ACTIVE_CLASS) {
            self.hide_pair(dom, trigger, &target);
        } else {
            self.show(dom, trigger, &target);
        }
    }

    /// Open a disclosure pair.
    ///
    /// A different open pair is closed first unless the new target is nested
    /// inside it, which lets an inner disclosure open without collapsing its
    /// enclosing one; in the nested case the outermost pair stays tracked.
    /// The new pair becomes the tracked one unless its trigger opts out of
    /// drop-down bookkeeping.
    pub fn show(&mut self, dom: &D, trigger: &D::Handle, target: &D::Handle) {
        let (replace_previous, keep_tracked) = match &self.open {
            Some(open) if open.trigger != *trigger && open.target != *target => {
                if dom.contains(&open.target, target) {
                    (false, true)
                } else {
                    (true, false)
                }
            }
            _ => (false, false),
        };
        if replace_previous {
            if let Some(previous) = self.open.take() {
                Self::deactivate(dom, &previous.trigger, &previous.target);
            }
        }

        dom.add_class(trigger, ACTIVE_CLASS);
        dom.set_attr(trigger, ARIA_EXPANDED, "true");
        dom.add_class(target, ACTIVE_CLASS);
        dom.emit(trigger, EVENT_SHOW);
        dom.emit(target, EVENT_SHOW_TARGET);

        if !keep_tracked && Self::is_drop_down(dom, trigger) {
            self.open = Some(OpenPair { trigger: trigger.clone(), target: target.clone() });
        }
    }

    /// Close the tracked pair. No-op when nothing is open.
    pub fn hide(&mut self, dom: &D) {
        if let Some(open) = self.open.take() {
            Self::deactivate(dom, &open.trigger, &open.target);
        }
    }

    /// Close an explicit pair, untracking it if it is the tracked one.
    pub fn hide_pair(&mut self, dom: &D, trigger: &D::Handle, target: &D::Handle) {
        if self
            .open
            .as_ref()
            .is_some_and(|open| open.trigger == *trigger && open.target == *target)
        {
            self.open = None;
        }
        Self::deactivate(dom, trigger, target);
    }

    /// Close the tracked pair, if any.
    pub fn close_all(&mut self, dom: &D) {
        if self.open.is_some() {
            self.hide(dom);
        }
    }

    /// Delegated document click dispatch.
    ///
    /// Trigger resolution runs first, then the outside-click check against
    /// whatever pair is still tracked, so a trigger click is never undone by
    /// the outside-click path within the same dispatch.
    pub fn handle_document_click(&mut self, dom: &D, clicked: &D::Handle) {
        if let Some(trigger) = dom.closest_with_attr(TRIGGER_ATTR, clicked) {
            self.toggle(dom, &trigger);
        }
        let outside = self.open.as_ref().is_some_and(|open| {
            !dom.contains(&open.trigger, clicked) && !dom.contains(&open.target, clicked)
        });
        if outside {
            self.hide(dom);
        }
    }

    /// Escape dispatch: close the tracked pair, then toggle any trigger
    /// still carrying the active class. The sweep catches untracked
    /// disclosures (nested or opted out) and state left inconsistent by
    /// outside code.
    pub fn handle_escape(&mut self, dom: &D) {
        if self.open.is_some() {
            self.hide(dom);
        }
        for trigger in dom.elements_with_attr(TRIGGER_ATTR) {
            if dom.has_class(&trigger, ACTIVE_CLASS) {
                self.toggle(dom, &trigger);
            }
        }
    }

    fn resolve_target(dom: &D, trigger: &D::Handle) -> Option<(D::Handle, String)> {
        let target_id = dom.attr(trigger, TRIGGER_ATTR)?;
        let target = dom.element_by_id(&target_id)?;
        Some((target, target_id))
    }

    fn is_drop_down(dom: &D, trigger: &D::Handle) -> bool {
        dom.attr(trigger, DROP_DOWN_ATTR).as_deref() != Some("false")
    }

    fn deactivate(dom: &D, trigger: &D::Handle, target: &D::Handle) {
        dom.remove_class(trigger, ACTIVE_CLASS);
        dom.set_attr(trigger, ARIA_EXPANDED, "false");
        dom.remove_class(target, ACTIVE_CLASS);
        dom.blur_first_text_input(target);
        dom.emit(trigger, EVENT_HIDE);
        dom.emit(target, EVENT_HIDE_TARGET);
    }
}
