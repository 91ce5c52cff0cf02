//! Shared marker attributes, class names, and event names.
//!
//! These strings are the crate's markup contract: hosts opt elements into
//! the widgets by carrying the markers, and subscribe to the custom events
//! to react to state changes.

// ── Markup markers ──────────────────────────────────────────────

/// Attribute marking a disclosure trigger; its value is the target's id.
pub const TRIGGER_ATTR: &str = "toggle-visibility";

/// Attribute opting a trigger out of drop-down bookkeeping when `"false"`.
pub const DROP_DOWN_ATTR: &str = "toggle-visibility-drop-down";

/// Class added to resolved disclosure targets at initialization.
pub const TARGET_CLASS: &str = "js-toggle-visibility-target";

/// Class marking the menu-toggle button.
pub const MENU_BUTTON_CLASS: &str = "js-menu-toggle-btn";

/// Class marking the menu-toggle panel.
pub const MENU_PANEL_CLASS: &str = "js-menu-toggle-menu";

// ── State classes ───────────────────────────────────────────────

/// Class carried by triggers, targets, and menus while shown.
pub const ACTIVE_CLASS: &str = "is-active";

// ── ARIA attributes ─────────────────────────────────────────────

pub const ARIA_HASPOPUP: &str = "aria-haspopup";
pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_EXPANDED: &str = "aria-expanded";

// ── Custom events ───────────────────────────────────────────────

/// Emitted on a trigger when its disclosure opens.
pub const EVENT_SHOW: &str = "toggle-visibility.show";

/// Emitted on a target when it is revealed.
pub const EVENT_SHOW_TARGET: &str = "toggle-visibility.show-target";

/// Emitted on a trigger when its disclosure closes.
pub const EVENT_HIDE: &str = "toggle-visibility.hide";

/// Emitted on a target when it is concealed.
pub const EVENT_HIDE_TARGET: &str = "toggle-visibility.hide-target";
