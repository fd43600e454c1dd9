use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Bordered block of lines. Width follows the widest line.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    rows: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Multi-line input becomes one row per line.
    pub fn add_line(&mut self, line: impl AsRef<str>) {
        self.rows.extend(line.as_ref().lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.rows.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rows: Vec<&str> = self
            .title
            .iter()
            .map(String::as_str)
            .chain(self.rows.iter().map(String::as_str))
            .collect();
        let inner = rows.iter().map(|r| visible_width(r)).max().unwrap_or(0) + 2;

        let glyph = |c: BorderChar| c.render(supports_unicode);
        let paint = |s: &str| self.paint(s, supports_color);
        let rule = glyph(BorderChar::Horizontal).repeat(inner);

        let mut out = String::new();
        out.push_str(&paint(&format!(
            "{}{}{}",
            glyph(BorderChar::TopLeft),
            rule,
            glyph(BorderChar::TopRight)
        )));
        out.push('\n');

        let side = paint(glyph(BorderChar::Vertical));
        for row in rows {
            let pad = inner - 1 - visible_width(row);
            out.push_str(&format!("{side} {row}{}{side}\n", " ".repeat(pad)));
        }

        out.push_str(&paint(&format!(
            "{}{}{}",
            glyph(BorderChar::BottomLeft),
            rule,
            glyph(BorderChar::BottomRight)
        )));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            BoxStyle::Info => colors::INFO,
            BoxStyle::Success => colors::SUCCESS,
            BoxStyle::Warning => colors::WARNING,
            BoxStyle::Error => colors::ERROR,
        };
        s.with(color).to_string()
    }
}

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Remove CSI / OSC escape sequences.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        if matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_padded_to_same_width() {
        let mut b = Box::with_title("Tests");
        b.add_line("network/t1 ok\nutils/t22 failed");
        let rendered = b.render(false, false);

        let widths: Vec<usize> = rendered.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
        assert!(rendered.starts_with("+-"));
    }

    #[test]
    fn color_codes_do_not_count_toward_width() {
        let colored = "\u{1b}[32mok\u{1b}[0m";
        assert_eq!(visible_width(colored), 2);
        assert_eq!(strip_ansi("plain"), "plain");
    }
}
