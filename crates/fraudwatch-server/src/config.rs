use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::info;

use fraudwatch_core::counter::DEFAULT_GOAL;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    Sqlite { db_path: PathBuf },
    Rest { url: String, api_key: String, timeout: Duration },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub counter_goal: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&std::env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let host = lookup(vars, "FRAUDWATCH_HOST", "0.0.0.0");
        let port = parse(vars, "FRAUDWATCH_PORT", "3000")?;

        let store = match lookup(vars, "FRAUDWATCH_STORE", "sqlite").as_str() {
            "sqlite" => StoreConfig::Sqlite {
                db_path: lookup(vars, "FRAUDWATCH_DB_PATH", "fraudwatch.db").into(),
            },
            "rest" => StoreConfig::Rest {
                url: required(vars, "FRAUDWATCH_STORE_URL")?,
                api_key: required(vars, "FRAUDWATCH_STORE_KEY")?,
                timeout: Duration::from_secs(parse(vars, "FRAUDWATCH_STORE_TIMEOUT_SECS", "10")?),
            },
            other => bail!("FRAUDWATCH_STORE must be 'sqlite' or 'rest', got '{}'", other),
        };

        let counter_goal: u64 = parse(vars, "FRAUDWATCH_COUNTER_GOAL", &DEFAULT_GOAL.to_string())?;
        if counter_goal == 0 {
            bail!("FRAUDWATCH_COUNTER_GOAL must be greater than zero");
        }

        Ok(Self {
            host,
            port,
            store,
            counter_goal,
        })
    }
}

fn lookup(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key).cloned().unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn required(vars: &HashMap<String, String>, key: &str) -> Result<String> {
    vars.get(key)
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .with_context(|| format!("{key} is required for the rest store"))
}

fn parse<T>(vars: &HashMap<String, String>, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(vars, key, default);
    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid {key} value '{raw}': {e}"))
}
