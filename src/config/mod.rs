use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::export::ExportFormat;
use crate::generator::modules::{ModuleKind, ModuleRegistry};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "cofounder.toml";

/// 凭证环境变量，按优先级排列
pub const API_KEY_ENV_VARS: [&str; 2] = ["COFOUNDER_LLM_API_KEY", "OPENAI_API_KEY"];

/// 默认模型
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// 默认报告标题
pub const DEFAULT_REPORT_TITLE: &str = "🚀 AI Startup Co-Founder Assistant Report";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "missing API credential for provider `{provider}`: set COFOUNDER_LLM_API_KEY or OPENAI_API_KEY, or pass --llm-api-key"
    )]
    MissingApiKey { provider: LLMProvider },

    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("unknown module: {0}")]
    UnknownModule(String),

    #[error("unknown export format: {0}")]
    UnknownFormat(String),
}

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            _ => Err(ConfigError::UnknownProvider(s.to_string())),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 输出路径
    pub output_path: PathBuf,

    /// 报告标题（Markdown一级标题）
    pub report_title: String,

    /// 启用的模块，为空时使用各模块的默认开关
    pub modules: Vec<ModuleKind>,

    /// 导出格式
    pub formats: Vec<ExportFormat>,

    /// 导出前是否逐段编辑结果
    pub edit: bool,

    /// 是否启用详细日志
    pub verbose: bool,

    /// LLM模型配置
    pub llm: LLMConfig,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址，未设置时使用provider的默认地址
    pub api_base_url: Option<String>,

    /// 模型名称
    pub model: String,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 加载配置：显式路径优先，其次当前目录下的默认配置文件，都没有则使用默认值
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let default_path = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// 在任何网络调用之前校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey {
                provider: self.llm.provider,
            });
        }
        Ok(())
    }

    /// 本次运行启用的模块集合
    pub fn enabled_modules(&self) -> HashSet<ModuleKind> {
        if self.modules.is_empty() {
            ModuleRegistry::builtin().default_enabled()
        } else {
            self.modules.iter().copied().collect()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("./cofounder.out"),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
            modules: vec![],
            formats: ExportFormat::ALL.to_vec(),
            edit: false,
            verbose: false,
            llm: LLMConfig::default(),
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: api_key_from_env().unwrap_or_default(),
            api_base_url: None,
            model: String::from(DEFAULT_MODEL),
        }
    }
}

/// 从环境变量读取凭证
fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

// Include tests
#[cfg(test)]
mod tests;
