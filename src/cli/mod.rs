use crate::config::{Config, ConfigError, LLMProvider};
use crate::export::ExportFormat;
use crate::generator::modules::{ModuleKind, ModuleRegistry};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

/// Startup Co-Founder - turn a raw idea into a validated AI startup blueprint
#[derive(Parser, Debug)]
#[command(name = "cofounder")]
#[command(
    about = "Runs a startup idea through a set of AI advisor modules (summary, validation, persona, AI fit, MVP, monetization) and exports the edited report as Markdown, JSON or PDF."
)]
#[command(version)]
pub struct Args {
    /// 想法文本
    #[arg(long, conflicts_with = "idea_file")]
    pub idea: Option<String>,

    /// 从文件读取想法
    #[arg(long)]
    pub idea_file: Option<PathBuf>,

    /// 启用的模块（显示名或短名称，可重复）
    #[arg(short, long = "module", conflicts_with = "all_modules")]
    pub modules: Vec<String>,

    /// 启用全部模块
    #[arg(long)]
    pub all_modules: bool,

    /// 列出可用模块后退出
    #[arg(long)]
    pub list_modules: bool,

    /// 输出路径
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 导出格式 (md, json, pdf)，可重复
    #[arg(short, long = "format")]
    pub formats: Vec<String>,

    /// 报告标题
    #[arg(long)]
    pub title: Option<String>,

    /// 导出前在 $EDITOR 中逐段编辑
    #[arg(long)]
    pub edit: bool,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// LLM Provider (openai, moonshot, deepseek, openrouter, anthropic)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 模型名称
    #[arg(long)]
    pub model: Option<String>,
}

impl Args {
    /// 将CLI参数转换为配置，CLI参数优先于配置文件
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(output_path) = &self.output_path {
            config.output_path = output_path.clone();
        }
        if let Some(title) = &self.title {
            config.report_title = title.clone();
        }

        if self.all_modules {
            config.modules = ModuleKind::ALL.to_vec();
        } else if !self.modules.is_empty() {
            config.modules = self
                .modules
                .iter()
                .map(|name| name.parse::<ModuleKind>())
                .collect::<Result<_, _>>()?;
        }

        if !self.formats.is_empty() {
            config.formats = self
                .formats
                .iter()
                .map(|name| name.parse::<ExportFormat>())
                .collect::<Result<_, _>>()?;
        }

        // 覆盖LLM配置
        if let Some(provider) = &self.llm_provider {
            config.llm.provider = provider.parse::<LLMProvider>()?;
        }
        if let Some(llm_api_key) = &self.llm_api_key {
            config.llm.api_key = llm_api_key.clone();
        }
        if let Some(llm_api_base_url) = &self.llm_api_base_url {
            config.llm.api_base_url = Some(llm_api_base_url.clone());
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }

        config.edit = config.edit || self.edit;
        config.verbose = config.verbose || self.verbose;

        Ok(config)
    }

    /// 读取想法：--idea、--idea-file，否则从标准输入读取
    pub fn read_idea(&self) -> Result<String> {
        if let Some(idea) = &self.idea {
            return Ok(idea.clone());
        }
        if let Some(path) = &self.idea_file {
            return std::fs::read_to_string(path)
                .context(format!("Failed to read idea file: {:?}", path));
        }

        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            println!("📝 Describe your AI startup idea (finish with Ctrl-D):");
        }
        let mut idea = String::new();
        stdin
            .read_to_string(&mut idea)
            .context("Failed to read idea from stdin")?;
        Ok(idea)
    }
}

/// 模块列表，用于 --list-modules
pub fn format_module_list(registry: &ModuleRegistry) -> String {
    let mut output = String::from("🧭 Available modules:\n");
    for descriptor in registry.iter() {
        output.push_str(&format!(
            "  {} {:<22} {:<22} max_tokens={}{}\n",
            descriptor.kind.icon(),
            descriptor.name(),
            descriptor.kind.slug(),
            descriptor.max_tokens,
            if descriptor.enabled_by_default {
                " (default)"
            } else {
                ""
            }
        ));
    }
    output
}

// Include tests
#[cfg(test)]
mod tests;
