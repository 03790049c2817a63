//! Report entry screen — the single data entry form for a new denuncia.

use chrono::NaiveTime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

use crate::model::{Category, ImageRef, Report, ReportDraft, Sector, format_time};
use crate::tui::action::Action;
use crate::tui::widgets::selector::{cycle_selection, draw_selector};
use crate::tui::widgets::time_picker::{DismissPolicy, TimePickerState, draw_time_picker};

/// The form's focusable fields, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Sector,
    Time,
    Category,
    Street,
    Image,
}

static FIELD_ORDER: &[Field] = &[
    Field::Description,
    Field::Sector,
    Field::Time,
    Field::Category,
    Field::Street,
    Field::Image,
];

/// State for the report entry screen.
///
/// Owns the draft (the field store) for the screen's lifetime. The
/// description is edited through a textarea and mirrored into the draft on
/// every input so the store stays authoritative.
pub struct ReportEntryState {
    draft: ReportDraft,
    description: TextArea<'static>,
    focus: Field,
    picker: TimePickerState,
    policy: DismissPolicy,
    error: Option<String>,
    notice: Option<String>,
}

impl ReportEntryState {
    /// Creates a fresh entry form under the given dismissal policy.
    pub fn new(policy: DismissPolicy) -> Self {
        let draft = ReportDraft::new();
        let mut description = TextArea::default();
        description.set_placeholder_text("Ingrese una descripcion");
        description.set_cursor_line_style(Style::default());

        Self {
            picker: TimePickerState::new(draft.incident_time()),
            draft,
            description,
            focus: Field::Description,
            policy,
            error: None,
            notice: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.draft.time_picker_visible() {
            self.handle_picker_key(key);
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = cycle_field(self.focus, true);
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = cycle_field(self.focus, false);
                return Action::None;
            }
            KeyCode::Esc => return Action::GoBack,
            _ => {}
        }

        match self.focus {
            Field::Description => {
                self.description.input(key);
                self.sync_description();
                Action::None
            }
            Field::Sector => match key.code {
                KeyCode::Right | KeyCode::Down => {
                    self.cycle_sector(true);
                    Action::None
                }
                KeyCode::Left | KeyCode::Up => {
                    self.cycle_sector(false);
                    Action::None
                }
                KeyCode::Enter => self.submit(),
                _ => Action::None,
            },
            Field::Category => match key.code {
                KeyCode::Right | KeyCode::Down => {
                    self.cycle_category(true);
                    Action::None
                }
                KeyCode::Left | KeyCode::Up => {
                    self.cycle_category(false);
                    Action::None
                }
                KeyCode::Enter => self.submit(),
                _ => Action::None,
            },
            Field::Time => match key.code {
                KeyCode::Enter => {
                    self.open_time_picker();
                    Action::None
                }
                _ => Action::None,
            },
            Field::Street => match key.code {
                KeyCode::Char(ch) => {
                    let mut street = self.draft.street().to_string();
                    street.push(ch);
                    self.draft.set_street(street);
                    Action::None
                }
                KeyCode::Backspace => {
                    let mut street = self.draft.street().to_string();
                    street.pop();
                    self.draft.set_street(street);
                    Action::None
                }
                KeyCode::Enter => self.submit(),
                _ => Action::None,
            },
            Field::Image => match key.code {
                KeyCode::Enter => {
                    self.notice = None;
                    Action::PickImage
                }
                _ => Action::None,
            },
        }
    }

    /// The time picker's change callback: a new value replaces the draft's
    /// incident time, no value (cancel) leaves it untouched; either way the
    /// overlay's visibility follows the platform dismissal policy.
    pub fn time_picker_changed(&mut self, selected: Option<NaiveTime>) {
        self.draft.set_time_picker_visible(self.policy.stays_open());
        if let Some(time) = selected {
            self.draft.set_incident_time(time);
        }
    }

    /// Returns the draft (the field store).
    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    /// Mutable draft access for the capability flows the app drives.
    pub fn draft_mut(&mut self) -> &mut ReportDraft {
        &mut self.draft
    }

    /// Returns the currently focused field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Returns the picker overlay's editing state.
    pub fn picker(&self) -> &TimePickerState {
        &self.picker
    }

    /// Returns the blocking validation error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the non-blocking notice (e.g. permission denial), if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Surfaces a non-blocking notice.
    pub fn set_notice(&mut self, msg: String) {
        self.notice = Some(msg);
    }

    /// Surfaces a blocking error from outside the screen (e.g. the sink).
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Keys while the overlay is showing: arrows adjust, Enter fires the
    /// change event, Esc is the explicit dismissal stay-open hosts rely on.
    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.picker.increment(),
            KeyCode::Down => self.picker.decrement(),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => self.picker.toggle_segment(),
            KeyCode::Enter => self.time_picker_changed(Some(self.picker.time())),
            KeyCode::Esc => self.draft.set_time_picker_visible(false),
            _ => {}
        }
    }

    /// Opens the overlay seeded from the draft's current time.
    fn open_time_picker(&mut self) {
        self.picker = TimePickerState::new(self.draft.incident_time());
        self.draft.set_time_picker_visible(true);
    }

    fn cycle_sector(&mut self, forward: bool) {
        self.draft
            .set_sector(cycle_selection(Sector::all(), self.draft.sector(), forward));
    }

    fn cycle_category(&mut self, forward: bool) {
        self.draft.set_category(cycle_selection(
            Category::all(),
            self.draft.category(),
            forward,
        ));
    }

    /// Mirrors the textarea buffer into the draft's description field.
    fn sync_description(&mut self) {
        self.draft.set_description(self.description.lines().join("\n"));
    }

    /// Validates the draft and assembles the record.
    ///
    /// On failure the single first-field message is surfaced and the draft
    /// stays as typed so the user can correct and retry.
    fn submit(&mut self) -> Action {
        self.error = None;
        self.notice = None;

        match Report::from_draft(&self.draft) {
            Ok(report) => Action::Submit(report),
            Err(e) => {
                self.error = Some(e.to_string());
                Action::None
            }
        }
    }
}

/// Cycles through the field order to find the next or previous field.
fn cycle_field(current: Field, forward: bool) -> Field {
    let pos = FIELD_ORDER
        .iter()
        .position(|&f| f == current)
        .unwrap_or(0);
    let next = if forward {
        (pos + 1) % FIELD_ORDER.len()
    } else {
        (pos + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()
    };
    FIELD_ORDER[next]
}

/// Renders the report entry screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_report_entry(state: &ReportEntryState, frame: &mut Frame, area: Rect) {
    let [description_area, sector_area, time_area, category_area, street_area, image_area, message_area, footer_area] =
        Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    // Description: the textarea draws its own cursor inside our border.
    let description_block = Block::default()
        .title("Descripción del incidente *")
        .borders(Borders::ALL)
        .border_style(border_style(state.focus() == Field::Description));
    let description_inner = description_block.inner(description_area);
    frame.render_widget(description_block, description_area);
    frame.render_widget(&state.description, description_inner);

    draw_selector(
        "Módulos policiales *",
        "Seleccione un módulo policial",
        state.draft().sector().map(|s| s.label()),
        state.focus() == Field::Sector,
        frame,
        sector_area,
    );

    let time_block = Block::default()
        .title("Hora del incidente *")
        .borders(Borders::ALL)
        .border_style(border_style(state.focus() == Field::Time));
    let time_value = Paragraph::new(Line::from(format_time(state.draft().incident_time())))
        .block(time_block);
    frame.render_widget(time_value, time_area);

    draw_selector(
        "Tipo de incidente *",
        "Tipo de incidente",
        state.draft().category().map(|c| c.label()),
        state.focus() == Field::Category,
        frame,
        category_area,
    );

    let street_block = Block::default()
        .title("Calle o Avenida *")
        .borders(Borders::ALL)
        .border_style(border_style(state.focus() == Field::Street));
    let mut street_spans = vec![Span::raw(state.draft().street())];
    if state.focus() == Field::Street {
        street_spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(street_spans)).block(street_block),
        street_area,
    );

    let image_block = Block::default()
        .title("Imagen")
        .borders(Borders::ALL)
        .border_style(border_style(state.focus() == Field::Image));
    let image_line = match state.draft().image_ref() {
        Some(image) => Line::from(image.uri().to_string()),
        None => Line::from(Span::styled(
            "Ninguna imagen seleccionada",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(image_line).block(image_block), image_area);

    if let Some(err) = state.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
            message_area,
        );
    } else if let Some(notice) = state.notice() {
        frame.render_widget(
            Paragraph::new(Span::styled(notice, Style::default().fg(Color::Yellow))),
            message_area,
        );
    }

    let footer = Paragraph::new(Line::from(
        "Tab: campo  ←/→: selección  Enter: enviar/abrir  Esc: salir",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if state.draft().time_picker_visible() {
        draw_time_picker(state.picker(), frame, area);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
