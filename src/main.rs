use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod content;

mod anim {
    pub mod grid;
    pub mod progress;
    pub mod shuffle;
}

mod components {
    pub mod hover_title;
    pub mod menu;
    pub mod reveal;
    pub mod sticky_section;
}

mod transitions {
    pub mod centered;
    pub mod horizontal;
    pub mod vertical;
}

mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
    pub mod work;
}

use components::menu::Menu;
use pages::{
    about::AboutPage, contact::ContactPage, home::Home, services::ServicesPage, work::WorkPage,
};
use transitions::centered::CenteredPixelTransition;
use transitions::horizontal::HorizontalPixelTransition;
use transitions::vertical::VerticalPixelTransition;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/work")]
    Work,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        Route::Work => {
            info!("Rendering Work page");
            html! { <WorkPage /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_active: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let burger_line = |active_transform: &str| {
        format!(
            "width: 28px; height: 2px; background: currentColor; position: relative; \
             transition: transform 0.3s, top 0.3s; {active_transform}",
        )
    };
    let (top_line, bottom_line) = if props.menu_active {
        (
            burger_line("transform: rotate(45deg); top: 1px;"),
            burger_line("transform: rotate(-45deg); top: -1px;"),
        )
    } else {
        (
            burger_line("top: -4px;"),
            burger_line("top: 4px;"),
        )
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{ "N" }</span>
                    { "NovaGrowth" }
                </Link<Route>>

                <div class="nav-links">
                    <Link<Route> to={Route::Services} classes="nav-link">{ "Services" }</Link<Route>>
                    <Link<Route> to={Route::Work} classes="nav-link">{ "Work" }</Link<Route>>
                    <Link<Route> to={Route::About} classes="nav-link">{ "About" }</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="nav-link">{ "Contact" }</Link<Route>>
                </div>

                <button class="burger" onclick={toggle_menu}>
                    <span style={top_line}></span>
                    <span style={bottom_line}></span>
                </button>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="nav-logo" style="margin-bottom: 1.5rem;">
                        <span class="nav-logo-mark">{ "N" }</span>
                        { "NovaGrowth" }
                    </div>
                    <p class="card-copy" style="max-width: 24rem;">
                        { "Performance marketing and design that prints revenue. We help \
                           ambitious brands scale faster than their competition." }
                    </p>
                </div>
                <div>
                    <h4 class="footer-heading">{ "Company" }</h4>
                    <ul class="footer-links">
                        <li><Link<Route> to={Route::Services}>{ "Services" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Work}>{ "Work" }</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{ "About" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{ "Careers" }</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4 class="footer-heading">{ "Legal" }</h4>
                    <ul class="footer-links">
                        <li>{ "Privacy Policy" }</li>
                        <li>{ "Terms of Service" }</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bar">
                <p>{ "© 2024 NovaGrowth Agency. All rights reserved." }</p>
                <p>{ "Designed for Excellence." }</p>
            </div>
        </footer>
    }
}

/// Resets the scroll position whenever the route changes, so every page
/// starts at its top.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );
    html! {}
}

#[derive(Properties, PartialEq)]
struct PixelOverlayProps {
    active: bool,
    width: f64,
    height: f64,
}

/// Picks the wipe variant for the current route: the Work page sweeps
/// horizontally, the About page vertically, everything else uses the
/// centered wipe.
#[function_component(PixelOverlay)]
fn pixel_overlay(props: &PixelOverlayProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);
    match route {
        Route::Work => html! {
            <HorizontalPixelTransition active={props.active} width={props.width} height={props.height} />
        },
        Route::About => html! {
            <VerticalPixelTransition active={props.active} width={props.width} height={props.height} />
        },
        _ => html! {
            <CenteredPixelTransition active={props.active} width={props.width} height={props.height} />
        },
    }
}

#[function_component]
fn App() -> Html {
    let menu_active = use_state_eq(|| false);
    let dimensions = use_state_eq(|| (0.0f64, 0.0f64));

    // Single resize listener owns the viewport dimensions for every
    // transition variant.
    {
        let dimensions = dimensions.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();
                let dims = dimensions.clone();

                let measure = move |w: &web_sys::Window| {
                    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    (width, height)
                };

                dimensions.set(measure(&window));

                let resize_callback = Closure::wrap(Box::new(move || {
                    dims.set(measure(&window_clone));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_active = menu_active.clone();
        Callback::from(move |_| {
            menu_active.set(!*menu_active);
        })
    };

    let close_menu = {
        let menu_active = menu_active.clone();
        Callback::from(move |_| {
            menu_active.set(false);
        })
    };

    let (width, height) = *dimensions;

    html! {
        <BrowserRouter>
            <style>{ SITE_STYLE }</style>
            <ScrollToTop />
            <Nav menu_active={*menu_active} on_toggle={toggle_menu} />
            if height > 0.0 {
                <PixelOverlay active={*menu_active} width={width} height={height} />
            }
            <Menu active={*menu_active} on_navigate={close_menu} />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

const SITE_STYLE: &str = r#"
    .top-nav {
        position: fixed; top: 0; left: 0; right: 0; z-index: 50;
        padding: 1.5rem 0; background: transparent;
        transition: background 0.5s, padding 0.5s;
    }
    .top-nav.scrolled {
        background: rgba(0, 0, 0, 0.8); backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05); padding: 1rem 0;
    }
    .nav-content {
        max-width: 80rem; margin: 0 auto; padding: 0 1.5rem;
        display: flex; justify-content: space-between; align-items: center;
    }
    .nav-logo {
        display: flex; align-items: center; gap: 0.5rem;
        font-size: 1.5rem; font-weight: 700; letter-spacing: -0.04em; color: #fff;
    }
    .nav-logo-mark {
        width: 2rem; height: 2rem; border-radius: 0.5rem;
        background: linear-gradient(135deg, #3b82f6, #9333ea);
        display: inline-flex; align-items: center; justify-content: center;
    }
    .nav-links { display: flex; align-items: center; gap: 2rem; }
    .nav-link { font-size: 0.875rem; font-weight: 500; color: #9ca3af; transition: color 0.2s; }
    .nav-link:hover { color: #fff; }
    .burger {
        display: flex; flex-direction: column; gap: 0; cursor: pointer;
        background: none; border: none; color: #fff; padding: 0.5rem;
    }

    .page { padding: 8rem 0 5rem; }
    .section { max-width: 80rem; margin: 0 auto; padding: 5rem 1.5rem; position: relative; }
    .full-screen {
        height: 100vh; display: flex; align-items: center; justify-content: center;
        background: #000;
    }

    .hero { position: relative; min-height: 100vh; display: flex; align-items: center; }
    .hero-badge {
        display: inline-block; padding: 0.375rem 1rem; border-radius: 9999px;
        border: 1px solid rgba(59, 130, 246, 0.3); background: rgba(59, 130, 246, 0.1);
        color: #60a5fa; font-size: 0.875rem; font-weight: 500; margin-bottom: 1.5rem;
    }
    .hero-title {
        font-size: 4.5rem; font-weight: 700; letter-spacing: -0.03em;
        line-height: 1.1; color: #fff; margin: 0 0 2rem;
    }
    .gradient-text {
        background: linear-gradient(90deg, #60a5fa, #a855f7);
        -webkit-background-clip: text; background-clip: text; color: transparent;
    }
    .hero-copy { font-size: 1.25rem; color: #9ca3af; max-width: 32rem; line-height: 1.6; margin: 0 0 2rem; }
    .button-row { display: flex; flex-wrap: wrap; gap: 1rem; }

    .btn {
        display: inline-flex; align-items: center; justify-content: center;
        padding: 1rem 2rem; font-weight: 600; letter-spacing: 0.02em;
        border-radius: 9999px; border: none; cursor: pointer;
        transition: all 0.3s; font-size: 1rem;
    }
    .btn-primary { background: #fff; color: #000; }
    .btn-primary:hover { background: #e5e7eb; }
    .btn-secondary { background: transparent; border: 1px solid rgba(255,255,255,0.2); color: #fff; }
    .btn-secondary:hover { background: rgba(255,255,255,0.1); }
    .btn-glow { background: linear-gradient(90deg, #2563eb, #9333ea); color: #fff; box-shadow: 0 10px 30px rgba(147, 51, 234, 0.3); }

    .metric-row { margin-top: 3rem; display: flex; gap: 2rem; border-top: 1px solid rgba(255,255,255,0.1); padding-top: 2rem; }
    .metric-value { font-size: 1.875rem; font-weight: 700; color: #fff; margin-bottom: 0.25rem; }
    .metric-label { font-size: 0.875rem; color: #6b7280; }
    .metric-band {
        display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem;
        border-top: 1px solid rgba(255,255,255,0.1); border-bottom: 1px solid rgba(255,255,255,0.1);
        padding: 4rem 0;
    }

    .section-head { display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 4rem; }
    .section-title { font-size: 3rem; font-weight: 700; color: #fff; margin: 0 0 1rem; }
    .section-copy { color: #9ca3af; max-width: 28rem; }

    .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
    .card {
        padding: 2rem; border-radius: 1rem; height: 100%;
        background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.05);
        transition: border-color 0.5s, transform 0.5s;
    }
    .card:hover { border-color: rgba(255,255,255,0.2); transform: translateY(-0.5rem); }
    .card-title { font-size: 1.25rem; font-weight: 700; color: #fff; margin: 0 0 0.75rem; }
    .card-copy { color: #9ca3af; font-size: 0.875rem; line-height: 1.6; margin: 0; }
    .card-category { color: #60a5fa; font-weight: 500; margin-bottom: 1rem; }

    .work-row { display: flex; gap: 3rem; align-items: center; margin-bottom: 6rem; }
    .work-row-reversed { flex-direction: row-reverse; }
    .work-image { flex: 1; border-radius: 1rem; overflow: hidden; aspect-ratio: 4 / 3; }
    .work-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
    .work-image:hover img { transform: scale(1.05); }
    .work-detail { flex: 1; }
    .work-stat {
        font-size: 3.75rem; font-weight: 700; margin-bottom: 2rem;
        background: linear-gradient(90deg, #fff, #6b7280);
        -webkit-background-clip: text; background-clip: text; color: transparent;
    }

    .testimonial-band {
        display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 3rem;
        background: rgba(24, 24, 27, 0.5); border-radius: 1.5rem; margin: 5rem auto;
    }
    .testimonial-text { font-size: 1.25rem; color: #fff; font-weight: 500; margin: 0 0 1.5rem; }
    .testimonial-author { color: #fff; font-weight: 700; }
    .testimonial-role { color: #6b7280; font-size: 0.875rem; }

    .page-title { font-size: 4.5rem; font-weight: 700; color: #fff; margin: 0 0 2rem; }
    .page-lede { font-size: 1.25rem; color: #9ca3af; max-width: 40rem; margin: 0 0 5rem; }

    .service-row {
        display: flex; gap: 2rem; align-items: center;
        background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.05);
        padding: 3rem; border-radius: 1rem; transition: background 0.3s;
    }
    .service-row:hover { background: rgba(255,255,255,0.07); }
    .service-checklist { list-style: none; margin: 0; padding: 0; color: #6b7280; font-size: 0.875rem; }
    .service-checklist li { margin-bottom: 0.5rem; }

    .work-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); gap: 2rem; }
    .work-card { cursor: pointer; }
    .work-card-media {
        position: relative; overflow: hidden; border-radius: 1rem;
        aspect-ratio: 16 / 9; margin-bottom: 1.5rem;
    }
    .work-card-media img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
    .work-card:hover .work-card-media img { transform: scale(1.05); }
    .work-card-tag {
        position: absolute; top: 1rem; right: 1rem; z-index: 20;
        background: rgba(0,0,0,0.6); backdrop-filter: blur(4px);
        color: #fff; font-size: 0.75rem; font-weight: 700;
        padding: 0.25rem 0.75rem; border-radius: 9999px;
    }

    .about-split { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; margin-bottom: 8rem; }

    .contact-split { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; }
    .contact-channels { display: flex; flex-direction: column; gap: 2rem; }
    .contact-channel-title { color: #fff; font-weight: 600; }
    .contact-channel-value { color: #9ca3af; }
    .contact-form {
        background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1);
        padding: 2rem; border-radius: 1rem; display: flex; flex-direction: column; gap: 1.5rem;
    }
    .field-pair { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
    .field { display: flex; flex-direction: column; gap: 0.5rem; }
    .field label { font-size: 0.875rem; color: #9ca3af; }
    .field input, .field select, .field textarea {
        width: 100%; background: rgba(0,0,0,0.4); border: 1px solid rgba(255,255,255,0.1);
        border-radius: 0.5rem; padding: 0.75rem; color: #fff; outline: none;
        font-family: inherit; transition: border-color 0.2s;
    }
    .field input:focus, .field select:focus, .field textarea:focus { border-color: #3b82f6; }
    .form-notice { color: #4ade80; font-size: 0.875rem; margin: 0; text-align: center; }

    .site-footer { background: #09090b; border-top: 1px solid rgba(255,255,255,0.1); padding: 5rem 1.5rem 2.5rem; }
    .footer-grid {
        max-width: 80rem; margin: 0 auto 4rem;
        display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 3rem;
    }
    .footer-heading { color: #fff; font-weight: 600; margin: 0 0 1.5rem; }
    .footer-links { list-style: none; margin: 0; padding: 0; color: #9ca3af; }
    .footer-links li { margin-bottom: 1rem; cursor: pointer; }
    .footer-links li:hover { color: #fff; }
    .footer-bar {
        max-width: 80rem; margin: 0 auto; border-top: 1px solid rgba(255,255,255,0.05);
        padding-top: 2rem; display: flex; justify-content: space-between;
        font-size: 0.875rem; color: #6b7280;
    }

    @media (max-width: 768px) {
        .nav-links { display: none; }
        .hero-title { font-size: 3rem; }
        .page-title { font-size: 3rem; }
        .work-row, .work-row-reversed { flex-direction: column; }
        .about-split, .contact-split, .field-pair { grid-template-columns: 1fr; }
        .metric-band { grid-template-columns: repeat(2, 1fr); }
        .footer-grid { grid-template-columns: 1fr; }
    }
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
