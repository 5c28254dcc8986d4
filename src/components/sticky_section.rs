use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::anim::progress::{pin_height, scroll_progress, ImageTransform};

fn measure_progress(node: &NodeRef, window: &Window) -> Option<f64> {
    let element = node.cast::<Element>()?;
    let top = element.get_bounding_client_rect().top();
    let viewport_height = window.inner_height().ok().and_then(|h| h.as_f64())?;
    Some(scroll_progress(top, viewport_height))
}

#[derive(Properties, PartialEq)]
pub struct StickySectionProps {
    pub title: String,
    pub image: String,
    #[prop_or(0.0)]
    pub offset: f64,
    #[prop_or_else(|| "#171717".to_string())]
    pub background: String,
    #[prop_or_else(|| "rgb(30, 30, 30)".to_string())]
    pub title_color: String,
    #[prop_or_default]
    pub children: Children,
}

/// A content block pinned at `offset` pixels from the top of the viewport.
///
/// While the surrounding stack scrolls, the block stays pinned and its image
/// is driven by the section's scroll progress: it drifts upward, tilts to 10
/// degrees and shrinks to 0.9 as the next card slides over this one.
#[function_component(StickySection)]
pub fn sticky_section(props: &StickySectionProps) -> Html {
    let container = use_node_ref();
    let progress = use_state_eq(|| 0.0f64);

    {
        let container = container.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                if let Some(initial) = measure_progress(&container, &window) {
                    progress.set(initial);
                }

                let update = Closure::wrap(Box::new(move || {
                    if let Some(value) = measure_progress(&container, &window_clone) {
                        progress.set(value);
                    }
                }) as Box<dyn FnMut()>);

                // Landmarks depend on the viewport height, so resize has to
                // recompute as well as scroll.
                window
                    .add_event_listener_with_callback("scroll", update.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", update.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        update.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        update.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let section_style = format!(
        "position: sticky; top: {}px; height: {}; background: {}; \
         width: 100%; overflow: hidden; border-radius: 2rem 2rem 0 0; \
         display: flex; flex-direction: column; align-items: center; justify-content: center;",
        props.offset,
        pin_height(props.offset),
        props.background,
    );

    let title_style = format!(
        "position: absolute; top: 2rem; left: 2rem; z-index: 20; margin: 0; \
         font-size: 7.5rem; font-weight: 600; line-height: 1; \
         text-transform: uppercase; letter-spacing: -0.05em; color: {};",
        props.title_color,
    );

    let image_style = format!(
        "position: absolute; top: 2rem; right: 2rem; width: 24rem; z-index: 10; {}",
        ImageTransform::at(*progress).to_css(),
    );

    html! {
        <div ref={container} style={section_style}>
            <h2 style={title_style}>{ &props.title }</h2>
            <div style={image_style}>
                <img
                    src={props.image.clone()}
                    alt={props.title.clone()}
                    style="width: 100%; height: auto; object-fit: cover; box-shadow: 0 25px 50px rgba(0,0,0,0.25);"
                />
            </div>
            <div style="max-width: 40rem; padding: 0 2rem; font-size: 1.125rem; line-height: 1.2; color: #1E1E1E;">
                { for props.children.iter() }
            </div>
        </div>
    }
}
