use super::*;
use crate::testdom::TestDom;

fn setup() -> (TestDom, usize, usize) {
    let dom = TestDom::new();
    let button = dom.append(dom.body(), "button", None);
    let menu = dom.append(dom.body(), "nav", None);
    (dom, button, menu)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn construction_sets_button_aria_defaults() {
    let (dom, button, menu) = setup();
    let _toggle = MenuToggle::new(&dom, button, menu);

    assert_eq!(dom.attr(&button, ARIA_EXPANDED).as_deref(), Some("false"));
    assert_eq!(dom.attr(&button, ARIA_HASPOPUP).as_deref(), Some("true"));
    assert!(!dom.has_class(&menu, ACTIVE_CLASS));
}

// =============================================================
// Click cycling
// =============================================================

#[test]
fn first_click_expands_menu_and_button() {
    let (dom, button, menu) = setup();
    let mut toggle = MenuToggle::new(&dom, button, menu);

    toggle.click(&dom);
    assert!(dom.has_class(&menu, ACTIVE_CLASS));
    assert!(dom.has_class(&button, ACTIVE_CLASS));
    assert_eq!(dom.attr(&button, ARIA_EXPANDED).as_deref(), Some("true"));
}

#[test]
fn second_click_collapses_again() {
    let (dom, button, menu) = setup();
    let mut toggle = MenuToggle::new(&dom, button, menu);

    toggle.click(&dom);
    toggle.click(&dom);
    assert!(!dom.has_class(&menu, ACTIVE_CLASS));
    assert!(!dom.has_class(&button, ACTIVE_CLASS));
    assert_eq!(dom.attr(&button, ARIA_EXPANDED).as_deref(), Some("false"));
}

#[test]
fn clicks_keep_alternating() {
    let (dom, button, menu) = setup();
    let mut toggle = MenuToggle::new(&dom, button, menu);

    for _ in 0..3 {
        toggle.click(&dom);
    }
    assert!(dom.has_class(&menu, ACTIVE_CLASS));
    assert_eq!(dom.attr(&button, ARIA_EXPANDED).as_deref(), Some("true"));
}
