use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod countdown;
mod links;
mod sequencer {
    pub mod audio;
    pub mod machine;
    pub mod phase;
    pub mod signals;
    pub mod timers;
}
mod pages {
    pub mod invitation;
}
mod components {
    pub mod info_row;
    pub mod snow_layer;
}

use config::EventConfig;
use pages::invitation::Invitation;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Invitation,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<EventConfig>,
}

#[function_component(InvitationRoutes)]
fn routes(props: &AppProps) -> Html {
    let config = props.config.clone();
    let switch = move |route: Route| match route {
        Route::Invitation => {
            info!("Rendering invitation for {}", config.honoree);
            html! { <Invitation config={config.clone()} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Invitation} /> },
    };

    html! { <Switch<Route> render={switch} /> }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| EventConfig::load(), ());

    html! {
        <BrowserRouter>
            <InvitationRoutes config={config} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting invitation");
    yew::Renderer::<App>::new().render();
}
