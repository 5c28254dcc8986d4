use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Seconds to wait after entering the viewport before animating in.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn past_reveal_line(node: &NodeRef, window: &Window) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    element.get_bounding_client_rect().top() < viewport_height * 0.9
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    // The reveal fires once: when `visible` flips, the effect re-runs, the
    // previous run's destructor removes the listener, and nothing new is
    // registered.
    {
        let node = node.clone();
        let visible = visible.clone();
        let already_visible = *visible;
        use_effect_with_deps(
            move |&already_visible| -> Box<dyn FnOnce()> {
                if already_visible {
                    return Box::new(|| ());
                }

                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                // Content already above the fold should not wait for a
                // scroll event.
                if past_reveal_line(&node, &window) {
                    visible.set(true);
                }

                let check = Closure::wrap(Box::new(move || {
                    if past_reveal_line(&node, &window_clone) {
                        visible.set(true);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref())
                    .unwrap();

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        check.as_ref().unchecked_ref(),
                    );
                })
            },
            already_visible,
        );
    }

    let style = format!(
        "transition: opacity 1s ease-out {delay}s, transform 1s ease-out {delay}s; \
         opacity: {opacity}; transform: translateY({shift});",
        delay = props.delay,
        opacity = if *visible { 1 } else { 0 },
        shift = if *visible { "0" } else { "3rem" },
    );

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
