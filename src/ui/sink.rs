//! Console rendering of build events.

use std::io::{self, Write};
use std::sync::Mutex;

use asmforge::domain::ports::{BuildEvent, BuildEventSink};

use crate::ui::blocks::step::{render_detail, render_step, StepState};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::tests::outcome_line;

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut w) = self.writer.lock() {
            let _ = writeln!(w, "{}", text);
            let _ = w.flush();
        }
    }

    fn step(&self, state: StepState, label: &str, detail: Option<&str>) {
        self.line(render_step(state, label, detail, self.ui.color, self.ui.unicode));
    }

    fn detail(&self, text: &str) {
        self.line(render_detail(text, self.ui.color, self.ui.unicode));
    }

    fn verbose(&self) -> bool {
        self.ui.verbose > 0
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::StepStarted { step } => self.step(StepState::Running, step.label(), None),
            BuildEvent::StepFinished { step, detail } => {
                self.step(StepState::Done, step.label(), Some(&detail))
            }
            BuildEvent::StepSkipped { step, reason } => {
                self.step(StepState::Skipped, step.label(), Some(&reason))
            }
            BuildEvent::StepFailed { step, error } => {
                self.step(StepState::Failed, step.label(), Some(&error))
            }
            BuildEvent::ToolInvoked { command } => {
                if self.verbose() {
                    self.detail(&command);
                }
            }
            BuildEvent::ObjectUpToDate { path } => {
                if self.verbose() {
                    self.detail(&format!("{} is up to date", path.display()));
                }
            }
            BuildEvent::ManifestWritten {
                path,
                entries,
                fallbacks,
            } => {
                if fallbacks > 0 {
                    self.line(format!(
                        "  {} {}",
                        Icon::Warning.colored(self.ui.color, self.ui.unicode),
                        ColoredText::warning(format!(
                            "{}: {} absolute include path(s)",
                            path.display(),
                            fallbacks
                        ))
                        .render(self.ui.color)
                    ));
                } else if self.verbose() {
                    self.detail(&format!("{} ({} entries)", path.display(), entries));
                }
            }
            BuildEvent::TestStarted { group, name } => {
                if self.verbose() {
                    self.detail(&format!("{group}/{name}"));
                }
            }
            BuildEvent::TestFinished { outcome } => {
                let (icon, text) = outcome_line(&outcome);
                self.line(format!(
                    "  {} {}",
                    icon.colored(self.ui.color, self.ui.unicode),
                    text
                ));
                if !outcome.status.is_pass() {
                    for l in outcome.output.lines() {
                        self.line(format!(
                            "      {}",
                            ColoredText::dim(l).render(self.ui.color)
                        ));
                    }
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}
