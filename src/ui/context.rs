use asmforge::config::{ColorMode, Config};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Output decisions for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// `config.output.color` already carries any `--color` / `ASMFORGE_COLOR`
    /// override.
    pub fn new(json: bool, verbose: u8, config: &Config) -> Self {
        Self::from_caps(json, verbose, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = !json
            && match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }

    /// Prompts are only shown on an interactive terminal.
    pub fn can_prompt(&self) -> bool {
        !self.json && self.caps.stdin_tty && self.caps.stdout_tty
    }
}
