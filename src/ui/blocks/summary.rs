use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed end-of-command summary.
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, String)>,
    rows: Vec<(Icon, String)>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            rows: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, value: impl ToString) {
        self.stats.push((label.into(), value.to_string()));
    }

    /// Icon-prefixed line, e.g. one per test.
    pub fn add_row(&mut self, icon: Icon, text: impl Into<String>) {
        self.rows.push((icon, text.into()));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                BoxStyle::Error,
                Icon::Error,
                ColoredText::error(self.title.as_str()),
            )
        };

        let mut b = Box::with_title(format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        ))
        .style(style);

        if !self.stats.is_empty() {
            b.add_empty();
            let label_width = self.stats.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
            for (label, value) in &self.stats {
                b.add_line(format!("{:<width$}  {}", label, value, width = label_width));
            }
        }

        if !self.rows.is_empty() {
            b.add_empty();
            for (icon, text) in &self.rows {
                b.add_line(format!(
                    "{} {}",
                    icon.colored(supports_color, supports_unicode),
                    text
                ));
            }
        }

        if let Some(next) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
