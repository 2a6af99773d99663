use anyhow::{Context, Result};
use dotenv::dotenv;
use std::env;
use tracing::info;

use crate::api_connection::credentials::CredentialSlot;
use crate::api_connection::endpoints::{
    DEFAULT_VISION_MODEL, OPENROUTER_BASE_URL, SPOONACULAR_BASE_URL,
};
use crate::api_connection::spoonacular::SPOONACULAR_API_KEY_ENV_VAR;
use crate::api_connection::vision::{SiteInfo, OPENROUTER_API_KEY_ENV_VAR};

pub const DEFAULT_PORT: u16 = 3000;

/// Settings read from the environment, with `.env` loaded first.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub spoonacular_base_url: String,
    pub spoonacular_key: CredentialSlot,
    pub openrouter_base_url: String,
    pub openrouter_key: CredentialSlot,
    pub vision_model: String,
    pub site: SiteInfo,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value '{}'", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let config = Self {
            port,
            spoonacular_base_url: var_or("SPOONACULAR_BASE_URL", SPOONACULAR_BASE_URL),
            spoonacular_key: CredentialSlot::from_env(SPOONACULAR_API_KEY_ENV_VAR),
            openrouter_base_url: var_or("OPENROUTER_BASE_URL", OPENROUTER_BASE_URL),
            openrouter_key: CredentialSlot::from_env(OPENROUTER_API_KEY_ENV_VAR),
            vision_model: var_or("VISION_MODEL", DEFAULT_VISION_MODEL),
            site: SiteInfo {
                site_url: var_or("SITE_URL", "http://localhost:3000"),
                app_name: var_or("APP_NAME", "PantryMatch"),
            },
        };

        if !config.spoonacular_key.is_configured() {
            info!("{} not set; recipe search will fail until it is", SPOONACULAR_API_KEY_ENV_VAR);
        }
        if !config.openrouter_key.is_configured() {
            info!("{} not set; photo analysis is disabled", OPENROUTER_API_KEY_ENV_VAR);
        }
        Ok(config)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
