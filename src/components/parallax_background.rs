use log::debug;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::parallax::{self, scroll_progress};

fn current_progress(window: &Window) -> Option<f64> {
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(scroll_progress(scroll_y, scroll_height, viewport_height))
}

/// Fixed backdrop: dark gradient plus two orange glows that drift down,
/// grow and fade as the page scrolls.
#[function_component(ParallaxBackground)]
pub fn parallax_background() -> Html {
    let progress = use_state(|| 0.0_f64);

    // Track scroll progress; resizing changes the scrollable height too
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let progress = progress.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Some(value) = current_progress(&win) {
                                    progress.set(value);
                                }
                            }
                        }
                    });
                    for event in ["scroll", "resize"] {
                        let _ = window.add_event_listener_with_callback(
                            event,
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                    debug!("Parallax listeners attached");
                    // Initial call
                    if let Some(value) = current_progress(&window) {
                        progress.set(value);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            for event in ["scroll", "resize"] {
                                let _ = win.remove_event_listener_with_callback(
                                    event,
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                            debug!("Parallax listeners removed");
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let frame = parallax::frame(*progress);

    html! {
        <div class="parallax-background" aria-hidden="true">
            <div class="backdrop-gradient"></div>
            <div class="glow glow-primary" style={frame.primary.to_css()}></div>
            <div class="glow glow-secondary" style={frame.secondary.to_css()}></div>
            <style>
                {r#"
                .parallax-background {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    z-index: 0;
                }

                .backdrop-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(24, 24, 27, 0.7), #000 45%, #000);
                }

                .glow {
                    position: absolute;
                    left: 50%;
                    border-radius: 9999px;
                    background: oklch(0.63 0.18 49.38);
                    will-change: transform, opacity;
                }

                .glow-primary {
                    top: -8rem;
                    height: 28rem;
                    width: 60rem;
                    filter: blur(120px);
                }

                .glow-secondary {
                    top: 6rem;
                    height: 16rem;
                    width: 36rem;
                    filter: blur(100px);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn first_paint_uses_top_of_page_values() {
        let html = ServerRenderer::<ParallaxBackground>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains(&parallax::frame(0.0).primary.to_css()));
        assert!(html.contains(&parallax::frame(0.0).secondary.to_css()));
    }
}
