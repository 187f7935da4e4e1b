mod app;
mod components;
mod conf;
mod telemetry;

use app::{App, AppProps};
use conf::Conf;
use gloo_console as console;
use telemetry::{init_global_default, ConsoleWriter, TracingSubscriber};

fn main() {
    let conf = match Conf::derive() {
        Ok(conf) => conf,
        Err(e) => {
            // no subscriber yet
            console::error!(format!("{e}, falling back to defaults"));
            Conf::default()
        }
    };
    init_global_default(TracingSubscriber::new(&conf.log).build(ConsoleWriter::make));

    let store = store::app_store(conf.initial_theme.clone());
    tracing::debug!(state = ?store.state(), "store created");

    match gloo_utils::document().get_element_by_id(&conf.mount_id) {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, AppProps { store }).render();
            tracing::info!(mount_id = %conf.mount_id, "app mounted");
        }
        None => tracing::error!(mount_id = %conf.mount_id, "mount point does not exist"),
    }
}
