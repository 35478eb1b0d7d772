//! numname 配置模块
//!
//! 从 ~/.config/numname/config.toml 加载

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::check::SanityCase;
use crate::error::{NumnameError, NumnameResult};

/// numname 完整配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumnameConfig {
    /// 日志配置
    pub logging: LoggingConfig,
    /// 自检配置
    pub check: CheckConfig,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 未设置 NUMNAME_LOG 时使用的过滤规则
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// 自检配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// 追加在内置用例之后的自定义用例
    pub cases: Vec<SanityCase>,
}

impl NumnameConfig {
    /// 加载配置文件，不存在时使用默认配置
    pub fn load() -> NumnameResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 从指定路径加载
    pub fn load_from(path: &Path) -> NumnameResult<Self> {
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| NumnameError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("加载配置成功: {:?}", path);
        tracing::debug!(
            "logging.filter={}, check.cases={}",
            config.logging.filter,
            config.check.cases.len()
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> NumnameResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> NumnameResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| NumnameError::ConfigSerialize(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> NumnameResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| NumnameError::ConfigNotFound("无法获取配置目录".to_string()))?;

        Ok(config_dir.join("numname").join("config.toml"))
    }
}
