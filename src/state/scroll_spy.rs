//! Scroll-spy: derives which page section is under the reading position so
//! navigation can highlight it.
//!
//! The pure core works on document-relative bounds and never returns an id
//! outside the list it was given. The reactive wrappers own the window
//! scroll listener: registered at mount, deregistered at unmount, and
//! coalesced so rapid scroll events cost at most one layout read per
//! animation frame.

use leptos::*;

/// Document-relative vertical extent of one candidate section, in list
/// (priority) order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// Returns the first section whose `[top, bottom)` range contains
/// `scroll_y + offset`, or `None` when no section does. Earlier entries win
/// when ranges overlap.
pub fn active_section<'a>(
    sections: &[SectionBounds<'a>],
    scroll_y: f64,
    offset: f64,
) -> Option<&'a str> {
    let probe = scroll_y + offset;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.bottom)
        .map(|s| s.id)
}

/// Tracks the active section among `section_ids` (ids of elements in the
/// document). Ids without a matching element are skipped. When the probe
/// position leaves every section's bounds the signal keeps its last value,
/// so the highlight never goes blank between sections; it starts as `None`
/// until a section first matches.
pub fn use_scroll_spy(
    section_ids: &'static [&'static str],
    offset: f64,
) -> ReadSignal<Option<&'static str>> {
    let (active, set_active) = create_signal(None::<&'static str>);
    let recompute = move || {
        let scroll_y = crate::utils::scroll::window_scroll_y();
        let sections: Vec<SectionBounds<'static>> = section_ids
            .iter()
            .filter_map(|&id| {
                crate::utils::scroll::element_bounds(id)
                    .map(|(top, bottom)| SectionBounds { id, top, bottom })
            })
            .collect();
        if let Some(id) = active_section(&sections, scroll_y, offset) {
            // try_set: a late animation frame after teardown must not write
            // into a disposed signal.
            let _ = set_active.try_set(Some(id));
        }
    };
    recompute();
    listen_to_window_scroll(recompute);
    active
}

/// Tracks the window's vertical scroll offset. Same listener discipline as
/// [`use_scroll_spy`].
pub fn use_scroll_position() -> ReadSignal<f64> {
    let (position, set_position) = create_signal(crate::utils::scroll::window_scroll_y());
    listen_to_window_scroll(move || {
        let _ = set_position.try_set(crate::utils::scroll::window_scroll_y());
    });
    position
}

/// Registers `handler` for window scroll events, coalesced through
/// `requestAnimationFrame`, and removes the listener when the owning scope
/// is disposed.
#[cfg(target_arch = "wasm32")]
fn listen_to_window_scroll(handler: impl Fn() + 'static) {
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let handler = Rc::new(handler);
    let frame_pending = Rc::new(Cell::new(false));

    let frame_cb = Rc::new(Closure::<dyn FnMut()>::new({
        let handler = Rc::clone(&handler);
        let frame_pending = Rc::clone(&frame_pending);
        move || {
            frame_pending.set(false);
            handler();
        }
    }));

    let scroll_cb = Closure::<dyn FnMut()>::new({
        let window = window.clone();
        let frame_cb = Rc::clone(&frame_cb);
        let frame_pending = Rc::clone(&frame_pending);
        let handler = Rc::clone(&handler);
        move || {
            if frame_pending.replace(true) {
                // A recomputation is already queued for this frame.
                return;
            }
            let frame: &Closure<dyn FnMut()> = &frame_cb;
            if window
                .request_animation_frame(frame.as_ref().unchecked_ref())
                .is_err()
            {
                frame_pending.set(false);
                handler();
            }
        }
    });

    if window
        .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("scroll listener not installed");
        return;
    }

    on_cleanup(move || {
        let _ = window
            .remove_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
        drop(scroll_cb);
        drop(frame_cb);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_to_window_scroll(_handler: impl Fn() + 'static) {}
