use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

/// Text tagged with one of the semantic theme colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<Color>,
    bold: bool,
}

impl ColoredText {
    fn with_color(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_color(text, colors::SUCCESS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_color(text, colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_color(text, colors::WARNING)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::with_color(text, colors::INFO)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_color(text, colors::DIM)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }
        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}
