//! Platform and touch classification for document-root class tags.
//!
//! Stylesheets key off these tags (`html.touch`, `html.ios`, …) instead of
//! sniffing at rule level. Classification runs once at mount; nothing is
//! retained afterward.

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;

/// Classes to tag the document root with: `touch` or `no-touch`, plus
/// `android`, `ios`, and `iphone` from case-insensitive user-agent
/// substrings. iPhone user agents get both `ios` and `iphone`.
#[must_use]
pub fn platform_classes(touch: bool, user_agent: &str) -> Vec<&'static str> {
    let ua = user_agent.to_ascii_lowercase();
    let mut classes = vec![if touch { "touch" } else { "no-touch" }];
    if ua.contains("android") {
        classes.push("android");
    }
    if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
        classes.push("ios");
    }
    if ua.contains("iphone") {
        classes.push("iphone");
    }
    classes
}
