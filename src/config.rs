//! Config model and persistence helpers.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

use crate::auth::AuthMode;

/// Top-level configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Runtime behavior of the UI.
    pub app: AppCfg,
    /// Profile shown in the dashboard header.
    pub user: UserCfg,
}

/// UI timing and data source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppCfg {
    /// Delay of the simulated sign-in, in milliseconds.
    pub auth_delay_ms: u64,
    /// How long a toast stays on screen, in milliseconds.
    pub toast_ttl_ms: u64,
    /// Tab the auth modal opens on when no mode is requested.
    pub initial_auth_mode: AuthMode,
    /// Number of jobs listed on the dashboard overview; 0 lists them all.
    pub job_preview_limit: usize,
    /// Log file written next to the binary.
    pub log_file: String,
    /// Path of the page shown at startup ("/", "/dashboard/jobs", ...).
    #[serde(default = "default_start_route")]
    pub start_route: String,
    /// Optional TOML file replacing the built-in mock data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_data: Option<PathBuf>,
}

/// Signed-in user as displayed by the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCfg {
    pub full_name: String,
    pub email: String,
    /// Plan caption under the name ("Professional Plan").
    pub plan_label: String,
}

fn default_start_route() -> String {
    "/".into()
}

impl UserCfg {
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or("there")
    }

    /// Two-letter avatar fallback ("JD").
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl AppCfg {
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}

impl Config {
    /// Load from disk or create defaults when missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)?;
            Ok(toml::from_str(&s)?)
        } else {
            let cfg = Self::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }

    /// Persist the config as pretty TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let s = toml::to_string_pretty(self)?;
        fs::write(path, s)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppCfg {
                auth_delay_ms: 1500,
                toast_ttl_ms: 4000,
                initial_auth_mode: AuthMode::Login,
                job_preview_limit: 3,
                log_file: "smartjobber.log".into(),
                start_route: default_start_route(),
                mock_data: None,
            },
            user: UserCfg {
                full_name: "John Doe".into(),
                email: "john.doe@example.com".into(),
                plan_label: "Professional Plan".into(),
            },
        }
    }
}
