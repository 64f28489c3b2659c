use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::generator::outlet::{DiskOutlet, Outlet, SaveReport};
use crate::generator::pipeline::{self, PipelineError};
use crate::generator::review::{ExternalEditor, SectionEditor, review};
use crate::store::ResultStore;

use anyhow::Result;
use std::time::Instant;

/// 一次运行的结果
#[derive(Debug)]
pub enum RunOutcome {
    /// 想法为空，未发起任何调用
    EmptyIdea,
    Completed {
        store: ResultStore,
        report: SaveReport,
    },
}

/// 启动报告生成工作流
pub async fn launch(config: &Config, idea: &str) -> Result<RunOutcome> {
    // 边界检查先于任何网络调用
    if pipeline::validate_idea(idea).is_err() {
        warn_empty_idea();
        return Ok(RunOutcome::EmptyIdea);
    }
    config.validate()?;

    let context = GeneratorContext::new(config.clone())?;
    execute(&context, idea, &ExternalEditor).await
}

/// 运行模块、可选的人工编辑、导出
pub async fn execute(
    context: &GeneratorContext,
    idea: &str,
    editor: &dyn SectionEditor,
) -> Result<RunOutcome> {
    let config = &context.config;
    let started = Instant::now();
    let enabled = config.enabled_modules();

    println!("\n🚀 AI Startup Co-Founder Assistant");
    println!("🧭 Modules to explore: {}", enabled.len());

    let mut store = match pipeline::run(context.llm_client.as_ref(), idea, &enabled).await {
        Ok(store) => store,
        Err(PipelineError::Input) => {
            warn_empty_idea();
            return Ok(RunOutcome::EmptyIdea);
        }
        Err(e) => return Err(e.into()),
    };

    if config.edit {
        let changed = review(&mut store, editor)?;
        tracing::debug!(changed, "review finished");
    }

    let report = DiskOutlet::from_config(config).save(&store)?;

    println!(
        "⏱️ Finished in {:.2}s",
        started.elapsed().as_secs_f64()
    );

    Ok(RunOutcome::Completed { store, report })
}

fn warn_empty_idea() {
    eprintln!("⚠️ Please enter your startup idea first.");
}
