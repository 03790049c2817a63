//! Time-picker overlay: hour/minute spinner plus the platform-dependent
//! dismissal policy for its change events.

use chrono::{NaiveTime, Timelike};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// What happens to the overlay after the picker emits a change event.
///
/// Resolved once at startup from the host platform identity and injected into
/// the screen; the validator and assembler never see it. On stay-open hosts
/// the picker keeps showing after a change and is closed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissPolicy {
    /// The picker hides itself after one change event.
    AutoDismiss,
    /// The picker stays visible until explicitly dismissed.
    StayOpen,
}

impl DismissPolicy {
    /// Resolves the policy for the platform this process runs on.
    pub fn for_host() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Apple hosts keep the inline picker open; everything else dismisses it
    /// after one selection.
    pub(crate) fn for_os(os: &str) -> Self {
        match os {
            "macos" | "ios" => DismissPolicy::StayOpen,
            _ => DismissPolicy::AutoDismiss,
        }
    }

    /// Whether the overlay stays visible after a change event.
    pub fn stays_open(self) -> bool {
        matches!(self, DismissPolicy::StayOpen)
    }
}

/// Which spinner segment the arrow keys currently adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Hour,
    Minute,
}

/// Editing state of the overlay: the hour/minute being composed before the
/// change event fires. Seeded from the draft's current time when opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePickerState {
    hour: u32,
    minute: u32,
    segment: Segment,
}

impl TimePickerState {
    /// Opens the spinner on the given time, hour segment focused.
    pub fn new(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            segment: Segment::Hour,
        }
    }

    /// The time currently composed in the spinner.
    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .expect("hour and minute stay in range")
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Steps the focused segment up, wrapping 23→0 / 59→0.
    pub fn increment(&mut self) {
        match self.segment {
            Segment::Hour => self.hour = (self.hour + 1) % 24,
            Segment::Minute => self.minute = (self.minute + 1) % 60,
        }
    }

    /// Steps the focused segment down, wrapping 0→23 / 0→59.
    pub fn decrement(&mut self) {
        match self.segment {
            Segment::Hour => self.hour = (self.hour + 23) % 24,
            Segment::Minute => self.minute = (self.minute + 59) % 60,
        }
    }

    /// Switches between the hour and minute segments.
    pub fn toggle_segment(&mut self) {
        self.segment = match self.segment {
            Segment::Hour => Segment::Minute,
            Segment::Minute => Segment::Hour,
        };
    }
}

/// Renders the picker as a small centered overlay.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_time_picker(state: &TimePickerState, frame: &mut Frame, area: Rect) {
    let [overlay] = Layout::horizontal([Constraint::Length(26)])
        .flex(Flex::Center)
        .areas(area);
    let [overlay] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(overlay);

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Hora del incidente ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let focused = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let blurred = Style::default().fg(Color::White);
    let (hour_style, minute_style) = match state.segment() {
        Segment::Hour => (focused, blurred),
        Segment::Minute => (blurred, focused),
    };

    let digits = Line::from(vec![
        Span::styled(format!("{:02}", state.hour()), hour_style),
        Span::raw(" : "),
        Span::styled(format!("{:02}", state.minute()), minute_style),
    ])
    .centered();
    let hint = Line::from("↑/↓ ajustar  ←/→ campo").centered();

    let [digits_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(digits), digits_area);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}
