use thiserror::Error;

use super::draft::ReportDraft;

/// A required field is missing from the draft.
///
/// Display strings are the user-facing messages shown by the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("La descripción del incidente es obligatoria")]
    DescriptionRequired,
    #[error("Debe seleccionar un módulo policial")]
    SectorRequired,
    #[error("Debe seleccionar un tipo de incidente")]
    CategoryRequired,
    #[error("Debe ingresar la calle o avenida")]
    StreetRequired,
}

/// Decides whether the draft is submittable.
///
/// Checks run in the form's top-to-bottom reading order and stop at the first
/// failure, so the reported field is always the first offending one visually:
/// description, sector, category, street. Text fields count as missing when
/// blank after trimming. The image is always optional and the incident time
/// always holds a value, so neither is checked. The draft is never mutated.
pub fn validate_draft(draft: &ReportDraft) -> Result<(), ValidationError> {
    if draft.description().trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if draft.sector().is_none() {
        return Err(ValidationError::SectorRequired);
    }
    if draft.category().is_none() {
        return Err(ValidationError::CategoryRequired);
    }
    if draft.street().trim().is_empty() {
        return Err(ValidationError::StreetRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::{Category, ImageRef, Sector};

    /// A draft that passes every check: the starting point each test breaks.
    fn complete_draft() -> ReportDraft {
        let mut draft = ReportDraft::new();
        draft.set_description("Robo".to_string());
        draft.set_sector(Some(Sector::Alalay));
        draft.set_category(Some(Category::Asalto));
        draft.set_street("Av. X".to_string());
        draft
    }

    #[test]
    fn complete_draft_validates() {
        assert_eq!(validate_draft(&complete_draft()), Ok(()));
    }

    #[test]
    fn empty_description_rejected() {
        let mut draft = complete_draft();
        draft.set_description(String::new());
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::DescriptionRequired)
        );
    }

    #[test]
    fn whitespace_description_counts_as_missing() {
        let mut draft = complete_draft();
        draft.set_description("   \t\n".to_string());
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::DescriptionRequired)
        );
    }

    #[test]
    fn missing_sector_rejected() {
        let mut draft = complete_draft();
        draft.set_sector(None);
        assert_eq!(validate_draft(&draft), Err(ValidationError::SectorRequired));
    }

    #[test]
    fn missing_category_rejected() {
        let mut draft = complete_draft();
        draft.set_category(None);
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::CategoryRequired)
        );
    }

    #[test]
    fn empty_street_rejected() {
        let mut draft = complete_draft();
        draft.set_street(String::new());
        assert_eq!(validate_draft(&draft), Err(ValidationError::StreetRequired));
    }

    #[test]
    fn whitespace_street_counts_as_missing() {
        let mut draft = complete_draft();
        draft.set_street("  ".to_string());
        assert_eq!(validate_draft(&draft), Err(ValidationError::StreetRequired));
    }

    #[test]
    fn first_failure_wins_when_several_fields_missing() {
        // All four missing: description is reported.
        let mut draft = ReportDraft::new();
        draft.set_sector(None);
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::DescriptionRequired)
        );

        // Description fixed: sector is next.
        draft.set_description("Robo".to_string());
        assert_eq!(validate_draft(&draft), Err(ValidationError::SectorRequired));

        // Sector fixed: category is next.
        draft.set_sector(Some(Sector::Central));
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::CategoryRequired)
        );

        // Category fixed: street is last.
        draft.set_category(Some(Category::Otro));
        assert_eq!(validate_draft(&draft), Err(ValidationError::StreetRequired));
    }

    #[test]
    fn image_and_time_never_block_validation() {
        let mut draft = complete_draft();
        draft.set_image_ref(None);
        draft.set_incident_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(validate_draft(&draft), Ok(()));

        draft.set_image_ref(Some(ImageRef::new("file:///tmp/foto.jpg")));
        draft.set_incident_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(validate_draft(&draft), Ok(()));
    }

    #[test]
    fn validation_does_not_mutate_the_draft() {
        let mut draft = complete_draft();
        draft.set_street(String::new());
        let before = draft.clone();
        let _ = validate_draft(&draft);
        assert_eq!(draft, before);
    }

    #[test]
    fn messages_match_the_form_alerts() {
        assert_eq!(
            ValidationError::DescriptionRequired.to_string(),
            "La descripción del incidente es obligatoria"
        );
        assert_eq!(
            ValidationError::SectorRequired.to_string(),
            "Debe seleccionar un módulo policial"
        );
        assert_eq!(
            ValidationError::CategoryRequired.to_string(),
            "Debe seleccionar un tipo de incidente"
        );
        assert_eq!(
            ValidationError::StreetRequired.to_string(),
            "Debe ingresar la calle o avenida"
        );
    }

    #[quickcheck]
    fn four_present_fields_always_validate(description: String, street: String) -> bool {
        // Prefix with a non-blank character so trimming cannot empty them.
        let mut draft = ReportDraft::new();
        draft.set_description(format!("x{description}"));
        draft.set_sector(Some(Sector::Jaihuayco));
        draft.set_category(Some(Category::DisturbioPublico));
        draft.set_street(format!("x{street}"));
        validate_draft(&draft).is_ok()
    }

    #[quickcheck]
    fn blank_description_always_reported_first(sector_missing: bool, street: String) -> bool {
        let mut draft = ReportDraft::new();
        draft.set_description("   ".to_string());
        draft.set_sector((!sector_missing).then_some(Sector::Sur));
        draft.set_street(street);
        validate_draft(&draft) == Err(ValidationError::DescriptionRequired)
    }
}
