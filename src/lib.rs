//! Browser UI glue for disclosure widgets, compiled to WebAssembly.
//!
//! This crate owns the page-level interaction chrome that server-rendered
//! markup opts into via attribute markers: a dropdown/disclosure controller
//! driven by `toggle-visibility` attributes and ARIA state, a responsive
//! menu toggle, a round-robin click-cycler, platform class tags on the
//! document root, and a console-method shim for hostile environments. The
//! hosting page calls [`page::mount`] once; everything else is wired through
//! delegated DOM listeners.
//!
//! Widget logic is written against the [`dom::Dom`] capability trait rather
//! than `web-sys` directly, so the state machines test natively; the browser
//! implementation lives in [`web`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`disclosure`] | Single-slot open-disclosure controller and dispatch |
//! | [`cycle`] | Round-robin click handler ring |
//! | [`menu`] | Two-state menu toggle built on [`cycle`] |
//! | [`detect`] | Platform/touch classification for root class tags |
//! | [`console`] | Console-method shim (fixed method list, fill-missing) |
//! | [`dom`] | DOM capability trait the widgets are written against |
//! | [`web`] | `web-sys`-backed [`dom::Dom`] implementation |
//! | [`page`] | Page assembly and `wasm-bindgen` exports |
//! | [`consts`] | Shared marker attributes, class names, and event names |

pub mod console;
pub mod consts;
pub mod cycle;
pub mod detect;
pub mod disclosure;
pub mod dom;
pub mod menu;
pub mod page;
pub mod web;

#[cfg(test)]
mod testdom;
