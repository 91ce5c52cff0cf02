//! Page assembly and `wasm-bindgen` exports.
//!
//! [`mount`] is the single entry point for the hosting page: it tags the
//! document root with platform classes, installs the console shim, builds
//! the disclosure controller with its delegated document listeners, and
//! wires the menu toggle when its markup is present. Listener closures are
//! leaked with `forget()`; the wiring is page-lifetime scoped and has no
//! teardown.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent, Window};

use crate::console;
use crate::consts::{MENU_BUTTON_CLASS, MENU_PANEL_CLASS};
use crate::cycle::{ClickCycle, Handler};
use crate::detect;
use crate::disclosure::DisclosureController;
use crate::dom::Dom;
use crate::menu::MenuToggle;
use crate::web::WebDom;

/// Host-facing handle over the mounted disclosure controller.
#[wasm_bindgen]
pub struct ToggleVisibility {
    dom: WebDom,
    controller: Rc<RefCell<DisclosureController<WebDom>>>,
}

#[wasm_bindgen]
impl ToggleVisibility {
    /// Show or hide the disclosure owned by `trigger`.
    pub fn toggle(&self, trigger: &Element) {
        self.controller.borrow_mut().toggle(&self.dom, trigger);
    }

    /// Open a disclosure pair explicitly.
    pub fn show(&self, trigger: &Element, target: &Element) {
        self.controller.borrow_mut().show(&self.dom, trigger, target);
    }

    /// Close the tracked disclosure, if any.
    pub fn hide(&self) {
        self.controller.borrow_mut().hide(&self.dom);
    }

    /// Close the tracked disclosure, if any.
    #[wasm_bindgen(js_name = closeAll)]
    pub fn close_all(&self) {
        self.controller.borrow_mut().close_all(&self.dom);
    }
}

/// Wire the page once: platform root classes, console shim, disclosure
/// controller with delegated document listeners, and the menu toggle.
///
/// # Errors
///
/// Fails when the environment lacks a window or document, or when listener
/// registration is rejected.
#[wasm_bindgen]
pub fn mount() -> Result<ToggleVisibility, JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    apply_platform_classes(&window, &document);
    install_console_shim(&window);

    let dom = WebDom::new(document.clone());
    let controller = Rc::new(RefCell::new(DisclosureController::new(&dom)));

    {
        let dom = dom.clone();
        let controller = Rc::clone(&controller);
        let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(clicked) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            controller.borrow_mut().handle_document_click(&dom, &clicked);
        }) as Box<dyn FnMut(MouseEvent)>);
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    {
        let dom = dom.clone();
        let controller = Rc::clone(&controller);
        let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() != "Escape" {
                return;
            }
            event.stop_propagation();
            controller.borrow_mut().handle_escape(&dom);
        }) as Box<dyn FnMut(KeyboardEvent)>);
        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        on_keydown.forget();
    }

    mount_menu(&dom)?;

    log::debug!("page chrome mounted");
    Ok(ToggleVisibility { dom, controller })
}

/// Bind a round-robin sequence of JS handlers to clicks on `element`.
///
/// Each click invokes the next function with the element as `this`,
/// wrapping after the last. Non-function entries are ignored; an empty
/// sequence binds nothing.
///
/// # Errors
///
/// Fails when the element is detached or listener registration is rejected.
#[wasm_bindgen(js_name = bindToggleClick)]
pub fn bind_toggle_click(element: &Element, handlers: js_sys::Array) -> Result<(), JsValue> {
    let handlers: Vec<Handler<WebDom>> = handlers
        .iter()
        .filter_map(|value| value.dyn_into::<js_sys::Function>().ok())
        .map(|function| {
            Box::new(move |_dom: &WebDom, element: &Element| {
                let _ = function.call0(element);
            }) as Handler<WebDom>
        })
        .collect();
    if handlers.is_empty() {
        return Ok(());
    }

    let document = element
        .owner_document()
        .ok_or_else(|| JsValue::from_str("element has no document"))?;
    let dom = WebDom::new(document);
    let mut cycle = ClickCycle::new(handlers);
    let target = element.clone();
    let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
        cycle.click(&dom, &target);
    }) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Tag the document root with the platform classes once.
fn apply_platform_classes(window: &Window, document: &Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let touch = Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || window.navigator().max_touch_points() > 0;
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    for class in detect::platform_classes(touch, &user_agent) {
        let _ = root.class_list().add_1(class);
    }
}

/// Fill in missing console methods with a shared no-op, creating the
/// console object itself when the environment has none.
fn install_console_shim(window: &Window) {
    let console_key = JsValue::from_str("console");
    let console = Reflect::get(window.as_ref(), &console_key)
        .ok()
        .filter(JsValue::is_object)
        .unwrap_or_else(|| {
            let fresh = js_sys::Object::new();
            let _ = Reflect::set(window.as_ref(), &console_key, fresh.as_ref());
            JsValue::from(fresh)
        });

    let noop = js_sys::Function::new_no_args("");
    console::fill_missing(
        |method| {
            Reflect::get(&console, &JsValue::from_str(method))
                .map(|value| !value.is_undefined() && !value.is_null())
                .unwrap_or(false)
        },
        |method| {
            let _ = Reflect::set(&console, &JsValue::from_str(method), noop.as_ref());
        },
    );
}

/// Pair the menu button with its panel when both are in the markup.
fn mount_menu(dom: &WebDom) -> Result<(), JsValue> {
    let (Some(button), Some(panel)) = (
        dom.first_with_class(MENU_BUTTON_CLASS),
        dom.first_with_class(MENU_PANEL_CLASS),
    ) else {
        return Ok(());
    };

    let toggle = Rc::new(RefCell::new(MenuToggle::new(dom, button.clone(), panel)));
    let dom = dom.clone();
    let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
        toggle.borrow_mut().click(&dom);
    }) as Box<dyn FnMut(MouseEvent)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
