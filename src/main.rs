mod audio;
mod catalog;
mod components;
mod config;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
