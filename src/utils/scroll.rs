//! Viewport reads and same-page navigation.
//!
//! Everything here is best-effort: a missing window, document, or section
//! element degrades to a no-op or a `None`, never an error surfaced to the
//! caller.

/// Current vertical scroll offset of the window, in pixels.
#[cfg(target_arch = "wasm32")]
pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_scroll_y() -> f64 {
    0.0
}

/// Document-relative vertical bounds `(top, bottom)` of the element with the
/// given id, or `None` if it is not in the current document.
#[cfg(target_arch = "wasm32")]
pub fn element_bounds(id: &str) -> Option<(f64, f64)> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    // getBoundingClientRect is viewport-relative; shift by the scroll offset
    // to get document coordinates.
    let rect = element.get_bounding_client_rect();
    let scroll_y = window_scroll_y();
    Some((rect.top() + scroll_y, rect.bottom() + scroll_y))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_bounds(_id: &str) -> Option<(f64, f64)> {
    None
}

/// Smooth-scrolls the section with the given id into view. A missing section
/// is skipped.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("scroll target `{id}` not in document, skipping"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_section(_id: &str) {}

/// Smooth-scrolls the window back to the top.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn host_fallbacks_are_inert() {
        assert_eq!(window_scroll_y(), 0.0);
        assert!(element_bounds("about").is_none());
        scroll_to_section("about");
        scroll_to_top();
    }
}
