use std::sync::LazyLock;

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::session::{DEFAULT_EDITOR_NAME, DEFAULT_MODAL_TITLE};

static CONFIG: LazyLock<Config> = LazyLock::new(|| match Config::load() {
    Ok(config) => config,
    Err(err) => {
        panic!("CONFIG ERROR: {err}");
    }
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub modal_title: String,
    pub editor_name: String,
    /// Path of the skill catalog JSON.
    pub skills: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modal_title: DEFAULT_MODAL_TITLE.to_string(),
            editor_name: DEFAULT_EDITOR_NAME.to_string(),
            skills: None,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file("timebucket.toml"))
            .merge(Env::prefixed("TIMEBUCKET_"))
    }

    pub fn load() -> Result<Self> {
        Self::figment()
            .extract::<Config>()
            .map_err(|err| Error::Config(Box::new(err)))
    }
}

pub fn get_config() -> &'static Config {
    &*CONFIG
}
