//! 内置报告模块注册表

use std::collections::HashSet;

mod types;

pub use types::ModuleKind;

/// 未显式指定时的token上限
pub const DEFAULT_MAX_TOKENS: u32 = 400;

/// 模块描述：一段固定指令 + 用户的想法构成prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub kind: ModuleKind,
    /// 开头的说明性指令，后接两个换行和用户想法
    pub instruction: &'static str,
    /// 系统提示词
    pub system_message: &'static str,
    pub max_tokens: u32,
    pub enabled_by_default: bool,
}

impl ModuleDescriptor {
    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// 构建prompt，想法文本原样插入
    pub fn build_prompt(&self, idea: &str) -> String {
        format!("{}\n\n{}", self.instruction, idea)
    }
}

static BUILTIN_MODULES: [ModuleDescriptor; 6] = [
    ModuleDescriptor {
        kind: ModuleKind::IdeaSummary,
        instruction: "Rewrite the following startup idea clearly and concisely:",
        system_message: "You are a helpful AI startup advisor.",
        max_tokens: 300,
        enabled_by_default: true,
    },
    ModuleDescriptor {
        kind: ModuleKind::ProblemValidation,
        instruction: "Validate if the following startup idea solves a real, significant problem:",
        system_message: "You are a helpful startup mentor who validates ideas.",
        max_tokens: DEFAULT_MAX_TOKENS,
        enabled_by_default: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::TargetUserPersona,
        instruction: "Generate a user persona for this startup idea:",
        system_message: "You are a product strategist who creates detailed user personas.",
        max_tokens: DEFAULT_MAX_TOKENS,
        enabled_by_default: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::AiUseCaseFit,
        instruction: "Is this idea a good use case for AI? If so, which techniques apply?",
        system_message: "You are an AI expert who evaluates startup ideas.",
        max_tokens: DEFAULT_MAX_TOKENS,
        enabled_by_default: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::MvpFeatureList,
        instruction: "Create a lean MVP feature roadmap for this idea:",
        system_message: "You are a product manager defining MVP features.",
        max_tokens: DEFAULT_MAX_TOKENS,
        enabled_by_default: false,
    },
    ModuleDescriptor {
        kind: ModuleKind::MonetizationOptions,
        instruction: "Suggest 3 monetization models for this AI startup:",
        system_message: "You are a startup monetization strategist.",
        max_tokens: DEFAULT_MAX_TOKENS,
        enabled_by_default: false,
    },
];

/// 有序、只读的模块注册表
#[derive(Debug, Clone, Copy)]
pub struct ModuleRegistry {
    descriptors: &'static [ModuleDescriptor],
}

impl ModuleRegistry {
    pub fn builtin() -> Self {
        Self {
            descriptors: &BUILTIN_MODULES,
        }
    }

    /// 按注册顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &'static ModuleDescriptor> {
        self.descriptors.iter()
    }

    pub fn get(&self, kind: ModuleKind) -> Option<&'static ModuleDescriptor> {
        self.descriptors.iter().find(|d| d.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.descriptors.iter().any(|d| d.name() == name)
    }

    pub fn default_enabled(&self) -> HashSet<ModuleKind> {
        self.descriptors
            .iter()
            .filter(|d| d.enabled_by_default)
            .map(|d| d.kind)
            .collect()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
