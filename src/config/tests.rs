//! Tests for the config module

use super::loader::{load_layered, load_with_warnings, with_env_overrides, PROJECT_CONFIG_FILE};
use super::types::*;
use crate::domain::value_objects::BuildMode;
use crate::error::ForgeError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.build.mode, BuildMode::Include);
    assert_eq!(config.project.entry, "main.asm");
    assert_eq!(config.project.categories.len(), 6);
    assert_eq!(config.project.categories[0].as_str(), "network");
    assert!(!config.tests.continue_on_failure);
    assert_eq!(config.toolchain.assembler, "nasm");
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[project]
name = "implant"
categories = ["network", "crypto"]

[build]
mode = "separate"

[toolchain]
assembler = "yasm"
ld_flags = ["-static"]

[tests]
continue_on_failure = true
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.project.name, "implant");
    assert_eq!(config.project.categories.len(), 2);
    assert_eq!(config.build.mode, BuildMode::Separate);
    assert_eq!(config.toolchain.assembler, "yasm");
    assert_eq!(config.toolchain.ld_flags, vec!["-static".to_string()]);
    // untouched keys keep their defaults
    assert_eq!(config.toolchain.linker, "ld");
    assert!(config.tests.continue_on_failure);
}

#[test]
fn test_config_rejects_invalid_category() {
    let toml = r#"
[project]
categories = ["net work"]
"#;
    assert!(toml::from_str::<Config>(toml).is_err());
}

#[test]
fn test_linker_flags_per_mode() {
    let tc = ToolchainConfig::default();
    assert_eq!(tc.linker_flags(BuildMode::Include), ["-s".to_string()]);
    assert!(tc
        .linker_flags(BuildMode::Separate)
        .contains(&"--gc-sections".to_string()));
}

#[test]
fn test_unknown_key_warning_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[build]\nmdoe = \"separate\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.build.mode, BuildMode::Include);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "mdoe");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("mode"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[build\nmode = ").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, ForgeError::Config { .. }), "{err:?}");
}

#[test]
fn test_layered_prefers_project_over_user() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    fs::write(&user, "[project]\nname = \"from-user\"\n").unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[project]\nname = \"from-project\"\n",
    )
    .unwrap();

    let loaded = load_layered(dir.path(), None, Some(&user)).unwrap();
    assert_eq!(loaded.config.project.name, "from-project");
    assert_eq!(loaded.file, Some(dir.path().join(PROJECT_CONFIG_FILE)));
}

#[test]
fn test_layered_falls_back_to_user_then_defaults() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");

    let loaded = load_layered(dir.path(), None, Some(&user)).unwrap();
    assert!(loaded.file.is_none());
    assert_eq!(loaded.config, Config::default());

    fs::write(&user, "[project]\nname = \"from-user\"\n").unwrap();
    let loaded = load_layered(dir.path(), None, Some(&user)).unwrap();
    assert_eq!(loaded.config.project.name, "from-user");
}

#[test]
fn test_layered_explicit_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_layered(dir.path(), Some(&missing), None).is_err());
}

#[test]
fn test_env_overrides_mode_and_tools() {
    let env = env_of(&[
        ("BUILD_MODE", "Separate"),
        ("AS", "yasm"),
        ("LDFLAGS_SEPARATE", "  -s   --gc-sections -static "),
        ("CONTINUE_ON_TEST_FAILURE", "1"),
    ]);
    let mut warn = Vec::new();

    let config = with_env_overrides(Config::default(), env, &mut warn);

    assert!(warn.is_empty());
    assert_eq!(config.build.mode, BuildMode::Separate);
    assert_eq!(config.toolchain.assembler, "yasm");
    assert_eq!(
        config.toolchain.ld_flags_separate,
        vec!["-s", "--gc-sections", "-static"]
    );
    assert!(config.tests.continue_on_failure);
}

#[test]
fn test_env_invalid_mode_keeps_configured_value() {
    let mut base = Config::default();
    base.build.mode = BuildMode::Separate;
    let mut warn = Vec::new();

    let config = with_env_overrides(base, env_of(&[("BUILD_MODE", "inclde")]), &mut warn);

    assert_eq!(config.build.mode, BuildMode::Separate);
    let msg = String::from_utf8(warn).unwrap();
    assert!(msg.contains("Did you mean 'include'?"), "{msg}");
}

#[test]
fn test_env_empty_tool_is_ignored() {
    let config = with_env_overrides(Config::default(), env_of(&[("LD", "  ")]), &mut Vec::new());
    assert_eq!(config.toolchain.linker, "ld");
}

#[test]
fn test_to_toml_round_trips() {
    let mut config = Config::default();
    config.build.mode = BuildMode::Separate;
    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("mode = \"separate\""), "{rendered}");

    let parsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}
