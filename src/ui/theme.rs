use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, Theme};
use std::fmt;

/// Design tokens for asmforge terminal output.
///
/// Only the five semantic colors below are used, and every icon and border
/// glyph comes from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const SKIPPED: &str = "○";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const BUILD: &str = "⚙";
    pub const TEST: &str = "▶";
    pub const CLEAN: &str = "🧹";
    pub const INSPECT: &str = "🔍";
    pub const LAYOUT: &str = "▤";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const SKIPPED: &str = "[SKIP]";
    pub const ARROW: &str = "[>]";

    pub const BUILD: &str = "[BUILD]";
    pub const TEST: &str = "[TEST]";
    pub const CLEAN: &str = "[CLEAN]";
    pub const INSPECT: &str = "[INSPECT]";
    pub const LAYOUT: &str = "[LAYOUT]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// dialoguer theme for confirmation prompts.
///
/// Prefixes the question with the warning icon; everything else is
/// `ColorfulTheme`, or plain text when color is off.
pub struct ForgeTheme {
    unicode: bool,
    color: bool,
    inner: ColorfulTheme,
}

impl ForgeTheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            unicode,
            color,
            inner: ColorfulTheme::default(),
        }
    }

    pub fn prompt_icon(&self) -> &'static str {
        if self.unicode {
            icons::WARNING
        } else {
            icons_ascii::WARNING
        }
    }
}

impl Theme for ForgeTheme {
    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        let prompt = format!("{} {}", self.prompt_icon(), prompt);
        if self.color {
            return self.inner.format_confirm_prompt(f, &prompt, default);
        }
        match default {
            Some(true) => write!(f, "{} [Y/n] ", prompt),
            Some(false) => write!(f, "{} [y/N] ", prompt),
            None => write!(f, "{} [y/n] ", prompt),
        }
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        let prompt = format!("{} {}", self.prompt_icon(), prompt);
        if self.color {
            return self
                .inner
                .format_confirm_prompt_selection(f, &prompt, selection);
        }
        let answer = match selection {
            Some(true) => "yes",
            Some(false) => "no",
            None => "",
        };
        write!(f, "{} {}", prompt, answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_confirm_prompt_shows_default() {
        let theme = ForgeTheme::new(false, false);
        let mut out = String::new();
        theme
            .format_confirm_prompt(&mut out, "Remove build/?", Some(false))
            .unwrap();
        assert_eq!(out, "[WARN] Remove build/? [y/N] ");
    }

    #[test]
    fn unicode_prompt_icon() {
        assert_eq!(ForgeTheme::new(true, true).prompt_icon(), "⚠");
    }
}
