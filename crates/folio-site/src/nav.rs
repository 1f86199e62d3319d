//! Navigation link state.
//!
//! Active-link highlighting is a pure function of the current navigation
//! path and a link target, not component state.

/// Check whether a navigation target matches the page being rendered.
#[must_use]
pub fn is_active(current_path: &str, target_path: &str) -> bool {
    current_path == target_path
}

/// CSS class for a sidebar link.
///
/// Active links get the `active` modifier in addition to the base class.
#[must_use]
pub fn nav_link_class(current_path: &str, target_path: &str) -> &'static str {
    if is_active(current_path, target_path) {
        "nav-link active"
    } else {
        "nav-link"
    }
}
