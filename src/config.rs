use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ConfigError};
use crate::models::DEFAULT_CURRENCY;

pub const APP_NAME: &str = "stockroom";

/// 配置文件结构 (config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub log_level: String,
    pub seed_demo_products: bool,
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            log_level: "info".to_string(),
            seed_demo_products: true,
            history_limit: 20,
        }
    }
}

impl Config {
    /// 从TOML文件加载，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// 配置文件路径 (~/.config/stockroom/config.toml)
pub fn config_path() -> Result<PathBuf, AppError> {
    let dir = dirs::config_dir().ok_or(AppError::NoDir("config"))?;
    Ok(dir.join(APP_NAME).join("config.toml"))
}

/// 日志目录 (~/.local/share/stockroom/)
pub fn data_dir() -> Result<PathBuf, AppError> {
    let dir = dirs::data_dir()
        .ok_or(AppError::NoDir("data"))?
        .join(APP_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
