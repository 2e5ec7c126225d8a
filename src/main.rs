use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod theme;
mod components {
    pub mod inquiry_form;
    pub mod reveal;
}
mod pages {
    pub mod brutalist;
    pub mod chooser;
    pub mod cyberpunk;
    pub mod editorial;
}

use pages::{
    brutalist::BrutalistPage,
    chooser::Chooser,
    cyberpunk::CyberpunkPage,
    editorial::EditorialPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Chooser,
    #[at("/brutalist")]
    Brutalist,
    #[at("/cyberpunk")]
    Cyberpunk,
    #[at("/editorial")]
    Editorial,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Chooser => {
            info!("Rendering chooser page");
            html! { <Chooser /> }
        }
        Route::Brutalist => {
            info!("Rendering brutalist page");
            html! { <BrutalistPage /> }
        }
        Route::Cyberpunk => {
            info!("Rendering cyberpunk page");
            html! { <CyberpunkPage /> }
        }
        Route::Editorial => {
            info!("Rendering editorial page");
            html! { <EditorialPage /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 480);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.85);
                    backdrop-filter: blur(8px);
                    border-bottom-color: rgba(255, 255, 255, 0.1);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 900;
                    letter-spacing: -0.02em;
                    text-decoration: none;
                    font-size: 1.25rem;
                }
                .nav-logo span { color: #E31937; }
                .nav-right { display: flex; gap: 1.5rem; }
                .nav-link {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .nav-link:hover { color: #E31937; }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Chooser} classes="nav-logo">
                    {config::BRAND}<span>{" "}{config::BRAND_SUFFIX}</span>
                </Link<Route>>
                <div class="nav-right">
                    <Link<Route> to={Route::Brutalist} classes="nav-link">
                        {"Brutalist"}
                    </Link<Route>>
                    <Link<Route> to={Route::Cyberpunk} classes="nav-link">
                        {"Cyberpunk"}
                    </Link<Route>>
                    <Link<Route> to={Route::Editorial} classes="nav-link">
                        {"Editorial"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
