use crate::config::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.output_path, PathBuf::from("./cofounder.out"));
    assert_eq!(config.report_title, DEFAULT_REPORT_TITLE);
    assert!(config.modules.is_empty());
    assert_eq!(config.formats, ExportFormat::ALL.to_vec());
    assert!(!config.edit);
    assert!(!config.verbose);
}

#[test]
fn test_llm_config_default() {
    let llm = LLMConfig::default();

    assert_eq!(llm.provider, LLMProvider::OpenAI);
    assert_eq!(llm.model, DEFAULT_MODEL);
    assert_eq!(llm.model, "gpt-3.5-turbo");
    assert!(llm.api_base_url.is_none());
}

#[test]
fn test_llm_provider_from_str() {
    assert_eq!(
        "openai".parse::<LLMProvider>().unwrap(),
        LLMProvider::OpenAI
    );
    assert_eq!(
        "Moonshot".parse::<LLMProvider>().unwrap(),
        LLMProvider::Moonshot
    );
    assert_eq!(
        "deepseek".parse::<LLMProvider>().unwrap(),
        LLMProvider::DeepSeek
    );
    assert_eq!(
        "openrouter".parse::<LLMProvider>().unwrap(),
        LLMProvider::OpenRouter
    );
    assert_eq!(
        "ANTHROPIC".parse::<LLMProvider>().unwrap(),
        LLMProvider::Anthropic
    );

    assert!("invalid".parse::<LLMProvider>().is_err());
}

#[test]
fn test_llm_provider_display() {
    assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
    assert_eq!(LLMProvider::Moonshot.to_string(), "moonshot");
    assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
    assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
    assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
}

#[test]
fn test_validate_requires_api_key() {
    let mut config = Config::default();

    config.llm.api_key = String::new();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingApiKey {
            provider: LLMProvider::OpenAI
        })
    ));

    config.llm.api_key = " \t".to_string();
    assert!(config.validate().is_err());

    config.llm.api_key = "sk-test".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_api_key_message_names_env_vars() {
    let err = ConfigError::MissingApiKey {
        provider: LLMProvider::OpenAI,
    };
    let message = err.to_string();
    for name in API_KEY_ENV_VARS {
        assert!(message.contains(name));
    }
}

#[test]
fn test_enabled_modules() {
    let mut config = Config::default();
    assert_eq!(
        config.enabled_modules(),
        HashSet::from([ModuleKind::IdeaSummary])
    );

    config.modules = vec![ModuleKind::AiUseCaseFit, ModuleKind::AiUseCaseFit];
    assert_eq!(
        config.enabled_modules(),
        HashSet::from([ModuleKind::AiUseCaseFit])
    );
}

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cofounder.toml");
    std::fs::write(
        &path,
        r#"
output_path = "reports"
modules = ["idea-summary", "target-user-persona"]
formats = ["md", "pdf"]
edit = true

[llm]
provider = "anthropic"
api_key = "file-key"
model = "claude-3-haiku"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.output_path, PathBuf::from("reports"));
    assert_eq!(
        config.modules,
        vec![ModuleKind::IdeaSummary, ModuleKind::TargetUserPersona]
    );
    assert_eq!(config.formats, vec![ExportFormat::Markdown, ExportFormat::Pdf]);
    assert!(config.edit);
    assert_eq!(config.llm.provider, LLMProvider::Anthropic);
    assert_eq!(config.llm.api_key, "file-key");
    assert_eq!(config.llm.model, "claude-3-haiku");
    // 未出现在文件中的字段取默认值
    assert_eq!(config.report_title, DEFAULT_REPORT_TITLE);
    assert!(config.llm.api_base_url.is_none());
}

#[test]
fn test_config_from_missing_file() {
    let result = Config::from_file(&PathBuf::from("/nonexistent/cofounder.toml"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_config_from_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "modules = [\"not-a-module\"]").unwrap();

    let result = Config::from_file(&path);
    assert!(matches!(result, Err(ConfigError::Parse { path: p, .. }) if p == path));
}

#[test]
fn test_config_load_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("explicit.toml");
    std::fs::write(&path, "report_title = \"Explicit\"").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.report_title, "Explicit");
}

#[test]
fn test_config_serialization_round_trip() {
    let mut config = Config::default();
    config.modules = vec![ModuleKind::MvpFeatureList];
    config.llm.api_key = "k".to_string();

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(parsed.modules, config.modules);
    assert_eq!(parsed.formats, config.formats);
    assert_eq!(parsed.llm.api_key, "k");
}
