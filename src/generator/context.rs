use std::sync::Arc;

use anyhow::Result;

use crate::{
    config::Config,
    llm::client::{CompletionClient, LLMClient},
};

#[derive(Clone)]
pub struct GeneratorContext {
    /// 补全服务，用于与AI通信。
    pub llm_client: Arc<dyn CompletionClient>,
    /// 配置
    pub config: Config,
}

impl GeneratorContext {
    /// 基于配置创建rig客户端
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.llm.clone())?;
        Ok(Self::with_client(config, Arc::new(llm_client)))
    }

    /// 使用指定的补全客户端
    pub fn with_client(config: Config, llm_client: Arc<dyn CompletionClient>) -> Self {
        Self { llm_client, config }
    }
}
