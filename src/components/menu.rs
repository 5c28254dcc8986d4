use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub active: bool,
    /// Emitted when a link is chosen so the owner can close the menu.
    pub on_navigate: Callback<()>,
}

/// Full-screen navigation overlay. The pixel transition sits underneath it;
/// the menu itself only fades, and swallows no input while closed.
#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let close = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    let style = format!(
        "position: fixed; top: 0; left: 0; width: 100%; height: 90vh; z-index: 30; \
         display: flex; flex-direction: column; align-items: center; justify-content: center; \
         transition: opacity 0.4s ease; opacity: {}; pointer-events: {};",
        if props.active { 1 } else { 0 },
        if props.active { "auto" } else { "none" },
    );

    let links = [
        ("Home", Route::Home),
        ("Services", Route::Services),
        ("Work", Route::Work),
        ("About", Route::About),
        ("Contact", Route::Contact),
    ];

    html! {
        <div style={style}>
            { for links.into_iter().map(|(label, route)| html! {
                <div onclick={close.clone()} style="font-size: 5vw; margin: 5px; color: #111; font-weight: 600; cursor: pointer;">
                    <Link<Route> to={route}>{ label }</Link<Route>>
                </div>
            }) }
        </div>
    }
}
