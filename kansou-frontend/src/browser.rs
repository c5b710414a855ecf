//! Adapters to the browser environment.

use leptos::window;

use kansou_core::{
    gateways::dialog::DialogGateway,
    util::spawn::{LocalTask, Spawner},
};

/// Blocking dialogs of the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl DialogGateway for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Err(err) = window().alert_with_message(message) {
            log::warn!("Unable to show alert: {err:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or_else(|err| {
            log::warn!("Unable to show confirmation dialog: {err:?}");
            false
        })
    }
}

/// Runs tasks on the event loop of the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeptosSpawner;

impl Spawner for LeptosSpawner {
    fn spawn_local(&self, task: LocalTask) {
        leptos::spawn_local(task);
    }
}
