use std::collections::HashSet;
use std::time::Instant;
use thiserror::Error;

use crate::generator::modules::{ModuleKind, ModuleRegistry};
use crate::llm::client::{CompletionClient, UpstreamError};
use crate::store::ResultStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("please enter your startup idea first")]
    Input,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// 想法不能为空或全为空白
pub fn validate_idea(idea: &str) -> Result<(), PipelineError> {
    if idea.trim().is_empty() {
        return Err(PipelineError::Input);
    }
    Ok(())
}

/// 使用内置注册表执行一次完整运行
pub async fn run(
    client: &dyn CompletionClient,
    idea: &str,
    enabled: &HashSet<ModuleKind>,
) -> Result<ResultStore, PipelineError> {
    run_with_registry(client, &ModuleRegistry::builtin(), idea, enabled).await
}

/// 按注册顺序依次调用每个启用的模块
///
/// 任一模块失败即中止，已得到的结果随之丢弃，错误原样返回。
pub async fn run_with_registry(
    client: &dyn CompletionClient,
    registry: &ModuleRegistry,
    idea: &str,
    enabled: &HashSet<ModuleKind>,
) -> Result<ResultStore, PipelineError> {
    validate_idea(idea)?;

    let mut store = ResultStore::new();
    for descriptor in registry.iter().filter(|d| enabled.contains(&d.kind)) {
        println!("{} Running {}...", descriptor.kind.icon(), descriptor.name());
        let started = Instant::now();

        let prompt = descriptor.build_prompt(idea);
        let content = match client
            .complete(&prompt, descriptor.system_message, descriptor.max_tokens)
            .await
        {
            Ok(content) => content,
            Err(e) => {
                eprintln!("❌ {} failed: {}", descriptor.name(), e);
                return Err(e.into());
            }
        };

        tracing::debug!(
            module = descriptor.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            chars = content.len(),
            "module completed"
        );
        store.insert(descriptor.name(), content);
    }

    Ok(store)
}
