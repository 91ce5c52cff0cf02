//! Console-method shim.
//!
//! Some hosting environments ship a partial (or absent) console object, and
//! a stray diagnostic call then throws. The shim guarantees a fixed set of
//! method names exist as safe no-ops. Only absent methods are filled in;
//! running it twice changes nothing.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

/// Method names the shim guarantees to exist on the console object.
pub const METHODS: [&str; 22] = [
    "assert",
    "clear",
    "count",
    "debug",
    "dir",
    "dirxml",
    "error",
    "exception",
    "group",
    "groupCollapsed",
    "groupEnd",
    "info",
    "log",
    "markTimeline",
    "profile",
    "profileEnd",
    "table",
    "time",
    "timeEnd",
    "timeStamp",
    "trace",
    "warn",
];

/// Define every method from [`METHODS`] that `has` reports absent.
pub fn fill_missing(mut has: impl FnMut(&str) -> bool, mut define: impl FnMut(&str)) {
    for method in METHODS {
        if !has(method) {
            define(method);
        }
    }
}
