use chrono::{Local, NaiveTime};
use serde::Serialize;

use super::category::Category;
use super::sector::Sector;

/// Opaque reference to a locally-picked image resource.
///
/// The form never inspects the contents; it only carries the reference
/// through to the submitted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wraps a picker-provided resource URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Returns the underlying resource URI.
    pub fn uri(&self) -> &str {
        &self.0
    }
}

/// The in-progress incident report: one mutable field store owned by the
/// active form screen for its lifetime.
///
/// Setters replace values without validating; every intermediate state is
/// representable and only [`validate_draft`](super::validate_draft) decides
/// submittability. `sector` and `category` are optional because the selection
/// control carries a placeholder row the user can move back onto.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    description: String,
    sector: Option<Sector>,
    incident_time: NaiveTime,
    category: Option<Category>,
    street: String,
    image_ref: Option<ImageRef>,
    time_picker_visible: bool,
}

impl ReportDraft {
    /// Creates a fresh draft: sector pre-selected to the first catalog entry,
    /// incident time defaulted to the current local wall clock, everything
    /// else empty.
    pub fn new() -> Self {
        Self {
            description: String::new(),
            sector: Some(Sector::default()),
            incident_time: Local::now().time(),
            category: None,
            street: String::new(),
            image_ref: None,
            time_picker_visible: false,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub fn sector(&self) -> Option<Sector> {
        self.sector
    }

    pub fn set_sector(&mut self, sector: Option<Sector>) {
        self.sector = sector;
    }

    pub fn incident_time(&self) -> NaiveTime {
        self.incident_time
    }

    /// Replaces the incident time wholesale; no merging of components.
    pub fn set_incident_time(&mut self, time: NaiveTime) {
        self.incident_time = time;
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn set_street(&mut self, street: String) {
        self.street = street;
    }

    pub fn image_ref(&self) -> Option<&ImageRef> {
        self.image_ref.as_ref()
    }

    pub fn set_image_ref(&mut self, image_ref: Option<ImageRef>) {
        self.image_ref = image_ref;
    }

    /// Whether the time-picker overlay is showing. UI-only; never submitted.
    pub fn time_picker_visible(&self) -> bool {
        self.time_picker_visible
    }

    pub fn set_time_picker_visible(&mut self, visible: bool) {
        self.time_picker_visible = visible;
    }
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self::new()
    }
}
