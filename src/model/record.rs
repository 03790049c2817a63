use chrono::NaiveTime;
use serde::Serialize;

use super::draft::{ImageRef, ReportDraft};
use super::validation::{ValidationError, validate_draft};

/// The assembled, immutable incident report handed to the submission
/// boundary.
///
/// Only constructible through [`Report::from_draft`], which validates first,
/// so a partially-valid record cannot exist. Serialized field names match the
/// record shape the receiving service expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "moduloPolicial")]
    pub sector: String,
    #[serde(rename = "horaIncidente")]
    pub incident_time: String,
    #[serde(rename = "tipoIncidente")]
    pub category: String,
    #[serde(rename = "calleAvenida")]
    pub street: String,
    #[serde(rename = "imagen")]
    pub image: Option<ImageRef>,
}

impl Report {
    /// Validates the draft and assembles the record.
    ///
    /// All fields are copied verbatim except the incident time, which is
    /// rendered through [`format_time`]. Pure: the same draft always yields a
    /// field-identical record, and the draft is left untouched for retry.
    pub fn from_draft(draft: &ReportDraft) -> Result<Self, ValidationError> {
        validate_draft(draft)?;

        // The validator guarantees both selections are present.
        let sector = draft.sector().ok_or(ValidationError::SectorRequired)?;
        let category = draft.category().ok_or(ValidationError::CategoryRequired)?;

        Ok(Self {
            description: draft.description().to_string(),
            sector: sector.code().to_string(),
            incident_time: format_time(draft.incident_time()),
            category: category.code().to_string(),
            street: draft.street().to_string(),
            image: draft.image_ref().cloned(),
        })
    }
}

/// Renders a time of day as the short display string carried by the record:
/// 12-hour clock, no leading zero on the hour, `AM`/`PM` suffix.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
