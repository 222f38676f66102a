use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod parallax;
mod components {
    pub mod icon;
    pub mod parallax_background;
    pub mod section_title;
    pub mod social_button;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing content={props.content.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let content = match SiteContent::embedded() {
        Ok(content) => Rc::new(content),
        Err(e) => {
            error!("Failed to load site content: {}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
