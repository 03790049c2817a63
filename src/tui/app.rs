use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};

use crate::capability::{
    AttachOutcome, MediaLibrary, PERMISSION_DENIED_MESSAGE, SubmissionSink, attach_image,
};
use crate::tui::action::Action;
use crate::tui::screens::{ReportEntryState, draw_report_entry};
use crate::tui::widgets::DismissPolicy;

use super::error::AppError;

/// Message shown once the sink has accepted the record.
const SUBMITTED_MESSAGE: &str = "Denuncia enviada correctamente";

/// Top-level application state: the entry screen plus the external
/// boundaries it submits through.
///
/// Everything runs on the event loop's thread. The media capability calls
/// are the only suspension points; they are driven to completion on an owned
/// current-thread runtime, so no two submissions can ever overlap.
pub struct App {
    entry: ReportEntryState,
    media: Box<dyn MediaLibrary>,
    sink: Box<dyn SubmissionSink>,
    runtime: tokio::runtime::Runtime,
    acknowledgment: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh draft and the given boundaries.
    pub fn new(
        media: Box<dyn MediaLibrary>,
        sink: Box<dyn SubmissionSink>,
        policy: DismissPolicy,
    ) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        Ok(Self {
            entry: ReportEntryState::new(policy),
            media,
            sink,
            runtime,
            acknowledgment: None,
            should_quit: false,
        })
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handles a key event: after a successful submission any key
    /// acknowledges and dismisses the screen; otherwise the entry screen
    /// decides and the resulting action is applied.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.acknowledgment.is_some() {
            self.apply(Action::GoBack);
            return;
        }

        let action = self.entry.handle_key(key);
        self.apply(action);
    }

    /// Applies a screen action against the external boundaries.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::GoBack => self.should_quit = true,
            Action::PickImage => {
                let outcome = self
                    .runtime
                    .block_on(attach_image(self.media.as_mut(), self.entry.draft_mut()));
                if outcome == AttachOutcome::PermissionDenied {
                    self.entry.set_notice(PERMISSION_DENIED_MESSAGE.to_string());
                }
            }
            Action::Submit(report) => match self.sink.submit(&report) {
                Ok(()) => self.acknowledgment = Some(SUBMITTED_MESSAGE.to_string()),
                Err(e) => self.entry.set_error(e.to_string()),
            },
        }
    }

    /// Renders the screen, overlaying the acknowledgment once submitted.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let block = Block::default()
            .title(" Nueva Denuncia ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        draw_report_entry(&self.entry, frame, inner);

        if let Some(ack) = &self.acknowledgment {
            let [overlay] = Layout::horizontal([Constraint::Length(40)])
                .flex(Flex::Center)
                .areas(area);
            let [overlay] = Layout::vertical([Constraint::Length(4)])
                .flex(Flex::Center)
                .areas(overlay);
            frame.render_widget(Clear, overlay);

            let lines = vec![
                Line::from(ack.as_str()).centered(),
                Line::from("Presione cualquier tecla para salir").centered(),
            ];
            let paragraph = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
            frame.render_widget(paragraph, overlay);
        }
    }

    /// Returns the entry screen.
    pub fn entry(&self) -> &ReportEntryState {
        &self.entry
    }

    /// Returns the pending acknowledgment message, if any.
    pub fn acknowledgment(&self) -> Option<&str> {
        self.acknowledgment.as_deref()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
