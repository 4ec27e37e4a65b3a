pub mod home;
pub mod balance;
pub mod deploy;
pub mod mint;
pub mod burn;
pub mod newsletter;

use std::fmt::Write;
use std::sync::Arc;
use tokenhub_shared::services::api_client::{TokenApi, TokenHubClient};
use tokenhub_shared::services::notification_services::{Notifier, TerminalNotifier};
use tokenhub_shared::utilities::config;
use tokenhub_shared::utilities::explorer::Explorer;

/// Everything a screen needs besides its own form.
#[derive(Clone)]
pub struct Context {
    pub api: Arc<dyn TokenApi>,
    pub notifier: Arc<dyn Notifier>,
    pub explorer: Explorer,
    pub deployer_wallet: String,
}

impl Context {
    pub fn new(api: Arc<dyn TokenApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            explorer: Explorer::from_env(),
            deployer_wallet: config::get_deployer_wallet(),
        }
    }

    /// Terminal notices and the HTTP client, pointed at `api_url` when given.
    pub fn from_env(api_url: Option<String>) -> Self {
        let client = match api_url {
            Some(url) => TokenHubClient::new(url),
            None => TokenHubClient::from_env(),
        };
        log::info!("Using TokenHub API at {}", client.base_url());
        Self::new(Arc::new(client), Arc::new(TerminalNotifier))
    }
}

/// Copies a flag value into a form field when one was given.
pub(crate) fn fill(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *field = value.clone();
    }
}

pub(crate) fn field_line(out: &mut String, label: &str, value: &str) {
    let shown = if value.is_empty() { "<empty>" } else { value };
    let _ = writeln!(out, "  {:<18} {}", format!("{}:", label), shown);
}

pub(crate) fn status_lines(out: &mut String, loading: bool, error: Option<&str>) {
    if loading {
        let _ = writeln!(out, "  ... working");
    }
    if let Some(error) = error {
        let _ = writeln!(out, "  Error: {}", error);
    }
}

/// A failure the user has already been shown through the notifier.
#[derive(Debug)]
pub struct Reported;

impl std::fmt::Display for Reported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request failed")
    }
}

impl std::error::Error for Reported {}
