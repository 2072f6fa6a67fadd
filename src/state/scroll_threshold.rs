use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Strictly past the threshold counts as scrolled.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks whether the window has scrolled past `threshold` pixels.
///
/// The listener is attached on mount, detached on unmount, and evaluated once
/// right away so a page restored mid-scroll starts in the right state.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.setter();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let update = move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(offset) = win.scroll_y() {
                                    scrolled.set(is_scrolled(offset, threshold));
                                }
                            }
                        };
                        update();
                        let callback = Closure::<dyn Fn()>::new(update);
                        if window
                            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("could not attach scroll listener");
                        }
                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            threshold,
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0, 80.0));
        assert!(!is_scrolled(80.0, 80.0));
        assert!(is_scrolled(80.5, 80.0));
        assert!(is_scrolled(301.0, 300.0));
    }
}
