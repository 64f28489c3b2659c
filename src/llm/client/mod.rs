//! LLM客户端 - 提供统一的补全服务接口

use anyhow::Result;
use async_trait::async_trait;

use crate::config::LLMConfig;

mod providers;
pub mod types;

use providers::ProviderClient;
pub use types::UpstreamError;

/// 固定的采样温度
pub const TEMPERATURE: f64 = 0.7;

/// 补全能力：一次请求/响应，返回首个候选的文本内容
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        system_message: &str,
        max_tokens: u32,
    ) -> Result<String, UpstreamError>;
}

/// 基于rig provider的LLM客户端
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)?;
        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl CompletionClient for LLMClient {
    async fn complete(
        &self,
        prompt: &str,
        system_message: &str,
        max_tokens: u32,
    ) -> Result<String, UpstreamError> {
        if max_tokens == 0 {
            return Err(UpstreamError::new("max_tokens must be greater than zero"));
        }

        let agent =
            self.client
                .create_agent(&self.config.model, system_message, max_tokens, TEMPERATURE);

        tracing::debug!(
            provider = %self.config.provider,
            model = %self.config.model,
            max_tokens,
            "sending completion request"
        );

        agent.prompt(prompt).await.map_err(UpstreamError::from)
    }
}
