use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::config::ConfigError;

/// 报告模块类型枚举，顺序即注册顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    IdeaSummary,
    ProblemValidation,
    TargetUserPersona,
    AiUseCaseFit,
    MvpFeatureList,
    MonetizationOptions,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 6] = [
        ModuleKind::IdeaSummary,
        ModuleKind::ProblemValidation,
        ModuleKind::TargetUserPersona,
        ModuleKind::AiUseCaseFit,
        ModuleKind::MvpFeatureList,
        ModuleKind::MonetizationOptions,
    ];

    /// 报告中的段落名称
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleKind::IdeaSummary => "Idea Summary",
            ModuleKind::ProblemValidation => "Problem Validation",
            ModuleKind::TargetUserPersona => "Target User Persona",
            ModuleKind::AiUseCaseFit => "AI Use Case Fit",
            ModuleKind::MvpFeatureList => "MVP Feature List",
            ModuleKind::MonetizationOptions => "Monetization Options",
        }
    }

    /// 命令行使用的短名称
    pub fn slug(&self) -> &'static str {
        match self {
            ModuleKind::IdeaSummary => "idea-summary",
            ModuleKind::ProblemValidation => "problem-validation",
            ModuleKind::TargetUserPersona => "target-user-persona",
            ModuleKind::AiUseCaseFit => "ai-use-case-fit",
            ModuleKind::MvpFeatureList => "mvp-feature-list",
            ModuleKind::MonetizationOptions => "monetization-options",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ModuleKind::IdeaSummary => "💡",
            ModuleKind::ProblemValidation => "🔍",
            ModuleKind::TargetUserPersona => "👤",
            ModuleKind::AiUseCaseFit => "🤖",
            ModuleKind::MvpFeatureList => "🛠️",
            ModuleKind::MonetizationOptions => "💸",
        }
    }
}

impl Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ModuleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ModuleKind::ALL
            .into_iter()
            .find(|kind| {
                kind.slug().eq_ignore_ascii_case(needle)
                    || kind.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ConfigError::UnknownModule(s.to_string()))
    }
}
