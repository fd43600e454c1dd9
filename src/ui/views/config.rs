use asmforge::config::{Config, ConfigWarning, LoadedConfig};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// `⚠ asmforge.toml:2: unknown key 'mdoe' (did you mean 'mode'?)`
pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = warning.location();
    let hint = warning
        .suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default();
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(format!(
            "{}: unknown key '{}'{}",
            location, warning.key, hint
        ))
        .render(supports_color)
    )
}

pub fn render_config_toml(
    loaded: &LoadedConfig,
    config: &Config,
    supports_color: bool,
) -> Result<String, toml::ser::Error> {
    let source = match &loaded.file {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    };
    Ok(format!(
        "{}\n{}",
        ColoredText::dim(format!(
            "# loaded from {source}; environment and flag overrides applied"
        ))
        .render(supports_color),
        config.to_toml()?
    ))
}

pub fn config_json(loaded: &LoadedConfig, config: &Config) -> serde_json::Value {
    serde_json::json!({
        "event": "config",
        "file": loaded.file.as_ref().map(|p| p.display().to_string()),
        "config": serde_json::to_value(config).unwrap_or(serde_json::Value::Null),
    })
}
