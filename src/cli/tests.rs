use crate::cli::{Args, format_module_list};
use crate::config::{ConfigError, LLMProvider};
use crate::export::ExportFormat;
use crate::generator::modules::{ModuleKind, ModuleRegistry};
use clap::Parser;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

/// 指向一个空配置文件，避免读取当前目录下的 cofounder.toml
fn parse_with_empty_config(extra: &[&str]) -> (Args, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("cofounder.toml");
    std::fs::write(&config_path, "").unwrap();

    let mut argv = vec![
        "cofounder".to_string(),
        "--config".to_string(),
        config_path.to_string_lossy().to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    (Args::try_parse_from(argv).unwrap(), temp_dir)
}

#[test]
fn test_args_default_values() {
    let args = Args::try_parse_from(["cofounder"]).unwrap();

    assert!(args.idea.is_none());
    assert!(args.idea_file.is_none());
    assert!(args.modules.is_empty());
    assert!(!args.all_modules);
    assert!(!args.list_modules);
    assert!(args.output_path.is_none());
    assert!(args.formats.is_empty());
    assert!(!args.edit);
    assert!(!args.verbose);
}

#[test]
fn test_args_short_options() {
    let args = Args::try_parse_from([
        "cofounder",
        "-m",
        "idea-summary",
        "-m",
        "AI Use Case Fit",
        "-o",
        "/tmp/report",
        "-f",
        "md",
        "-v",
    ])
    .unwrap();

    assert_eq!(args.modules, vec!["idea-summary", "AI Use Case Fit"]);
    assert_eq!(args.output_path, Some(PathBuf::from("/tmp/report")));
    assert_eq!(args.formats, vec!["md"]);
    assert!(args.verbose);
}

#[test]
fn test_args_idea_conflicts_with_idea_file() {
    let result = Args::try_parse_from([
        "cofounder",
        "--idea",
        "x",
        "--idea-file",
        "idea.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_args_module_conflicts_with_all_modules() {
    let result = Args::try_parse_from(["cofounder", "--all-modules", "-m", "idea-summary"]);
    assert!(result.is_err());
}

#[test]
fn test_to_config_defaults() {
    let (args, _temp_dir) = parse_with_empty_config(&[]);
    let config = args.to_config().unwrap();

    assert_eq!(config.output_path, PathBuf::from("./cofounder.out"));
    assert_eq!(config.formats, ExportFormat::ALL.to_vec());
    assert!(config.modules.is_empty());
    assert_eq!(
        config.enabled_modules().into_iter().collect::<Vec<_>>(),
        vec![ModuleKind::IdeaSummary]
    );
}

#[test]
fn test_to_config_overrides() {
    let (args, _temp_dir) = parse_with_empty_config(&[
        "-m",
        "problem-validation",
        "-m",
        "Monetization Options",
        "-f",
        "json",
        "--title",
        "Parking Report",
        "--edit",
        "--llm-provider",
        "deepseek",
        "--llm-api-key",
        "cli-key",
        "--llm-api-base-url",
        "https://api.deepseek.com",
        "--model",
        "deepseek-chat",
    ]);
    let config = args.to_config().unwrap();

    assert_eq!(
        config.modules,
        vec![
            ModuleKind::ProblemValidation,
            ModuleKind::MonetizationOptions
        ]
    );
    assert_eq!(config.formats, vec![ExportFormat::Json]);
    assert_eq!(config.report_title, "Parking Report");
    assert!(config.edit);
    assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
    assert_eq!(config.llm.api_key, "cli-key");
    assert_eq!(
        config.llm.api_base_url.as_deref(),
        Some("https://api.deepseek.com")
    );
    assert_eq!(config.llm.model, "deepseek-chat");
}

#[test]
fn test_to_config_all_modules() {
    let (args, _temp_dir) = parse_with_empty_config(&["--all-modules"]);
    let config = args.to_config().unwrap();
    assert_eq!(config.enabled_modules().len(), 6);
}

#[test]
fn test_to_config_unknown_values() {
    let (args, _temp_dir) = parse_with_empty_config(&["-m", "pricing"]);
    assert!(matches!(
        args.to_config(),
        Err(ConfigError::UnknownModule(name)) if name == "pricing"
    ));

    let (args, _temp_dir) = parse_with_empty_config(&["-f", "docx"]);
    assert!(matches!(
        args.to_config(),
        Err(ConfigError::UnknownFormat(_))
    ));

    let (args, _temp_dir) = parse_with_empty_config(&["--llm-provider", "skynet"]);
    assert!(matches!(
        args.to_config(),
        Err(ConfigError::UnknownProvider(_))
    ));
}

#[test]
fn test_cli_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(
        &config_path,
        r#"
output_path = "from-file"
report_title = "File Title"
modules = ["mvp-feature-list"]

[llm]
model = "gpt-4o-mini"
"#,
    )
    .unwrap();

    let args = Args::try_parse_from([
        "cofounder",
        "-c",
        config_path.to_str().unwrap(),
        "--title",
        "CLI Title",
    ])
    .unwrap();
    let config = args.to_config().unwrap();

    assert_eq!(config.output_path, PathBuf::from("from-file"));
    assert_eq!(config.report_title, "CLI Title");
    assert_eq!(config.modules, vec![ModuleKind::MvpFeatureList]);
    assert_eq!(config.llm.model, "gpt-4o-mini");
}

#[test]
fn test_read_idea_from_argument_and_file() {
    let args = Args::try_parse_from(["cofounder", "--idea", "Parking marketplace"]).unwrap();
    assert_eq!(args.read_idea().unwrap(), "Parking marketplace");

    let temp_dir = TempDir::new().unwrap();
    let idea_path = temp_dir.path().join("idea.txt");
    std::fs::write(&idea_path, "Drone delivery\nfor islands\n").unwrap();

    let args = Args::try_parse_from(["cofounder", "--idea-file", idea_path.to_str().unwrap()])
        .unwrap();
    assert_eq!(args.read_idea().unwrap(), "Drone delivery\nfor islands\n");
}

#[test]
fn test_read_idea_missing_file() {
    let args = Args::try_parse_from(["cofounder", "--idea-file", "/nonexistent/idea.txt"]).unwrap();
    assert!(args.read_idea().is_err());
}

#[test]
fn test_format_module_list() {
    let listing = format_module_list(&ModuleRegistry::builtin());

    assert_eq!(listing.lines().count(), 7);
    assert!(listing.contains("idea-summary"));
    assert!(listing.contains("max_tokens=300 (default)"));
    assert!(listing.contains("monetization-options"));
}
