use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Number of trailing stderr lines kept in the block.
pub const STDERR_EXCERPT_LINES: usize = 20;

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    command: Option<String>,
    stderr: Option<String>,
    hint: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            command: None,
            stderr: None,
            hint: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Blank output is dropped.
    pub fn with_stderr(mut self, stderr: &str) -> Self {
        if !stderr.trim().is_empty() {
            self.stderr = Some(stderr.to_string());
        }
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut b = Box::with_title(ColoredText::error("ERROR").bold().render(supports_color))
            .style(BoxStyle::Error);

        b.add_empty();
        b.add_line(&self.message);

        if let Some(command) = &self.command {
            b.add_empty();
            b.add_line(ColoredText::dim(format!("$ {command}")).render(supports_color));
        }

        if let Some(stderr) = &self.stderr {
            b.add_empty();
            let lines: Vec<&str> = stderr.trim_end().lines().collect();
            let skip = lines.len().saturating_sub(STDERR_EXCERPT_LINES);
            if skip > 0 {
                b.add_line(
                    ColoredText::dim(format!("... {skip} earlier line(s) omitted"))
                        .render(supports_color),
                );
            }
            for line in &lines[skip..] {
                b.add_line(*line);
            }
        }

        if let Some(hint) = &self.hint {
            b.add_empty();
            b.add_line(format!("HINT: {hint}"));
        }

        b.render(supports_color, supports_unicode)
    }
}
