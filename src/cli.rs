use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal support tool for looking up a user's course entitlements.
#[derive(Parser, Debug)]
#[command(name = "entdesk", version, about = "Entitlement support desk")]
pub struct Cli {
    /// Alternate config file (default: ~/.config/entdesk/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the entitlement service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the API bearer token
    #[arg(long)]
    pub token: Option<String>,

    /// Prefill the search field with this username and submit once on startup
    #[arg(long)]
    pub user: Option<String>,
}

impl Cli {
    /// Overlay command-line overrides onto the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.service.api_token = Some(token.clone());
        }
    }
}
