use crossterm::style::Stylize;

use crate::ui::theme::{self, icons, icons_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Skipped,
    Arrow,
    Build,
    Test,
    Clean,
    Inspect,
    Layout,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Skipped => (icons::SKIPPED, icons_ascii::SKIPPED),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Build => (icons::BUILD, icons_ascii::BUILD),
            Icon::Test => (icons::TEST, icons_ascii::TEST),
            Icon::Clean => (icons::CLEAN, icons_ascii::CLEAN),
            Icon::Inspect => (icons::INSPECT, icons_ascii::INSPECT),
            Icon::Layout => (icons::LAYOUT, icons_ascii::LAYOUT),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Clean => theme::colors::WARNING,
            Icon::Skipped | Icon::Arrow => theme::colors::DIM,
            Icon::Build | Icon::Test | Icon::Inspect | Icon::Layout => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
