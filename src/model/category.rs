use std::fmt;

/// Incident type ("tipo de incidente") selected for a report.
///
/// Unlike [`Sector`](super::Sector) there is no default: the form starts with
/// no category chosen and the validator rejects submission until one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Asesinato,
    Asalto,
    AccidenteTransito,
    ViolenciaDomestica,
    DisturbioPublico,
    Otro,
}

static ALL_CATEGORIES: &[Category] = &[
    Category::Asesinato,
    Category::Asalto,
    Category::AccidenteTransito,
    Category::ViolenciaDomestica,
    Category::DisturbioPublico,
    Category::Otro,
];

impl Category {
    /// Returns the stable catalog code carried in the submitted record.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Asesinato => "ASESINATO",
            Category::Asalto => "ASALTO",
            Category::AccidenteTransito => "ACCIDENTE_TRANSITO",
            Category::ViolenciaDomestica => "VIOLENCIA_DOMESTICA",
            Category::DisturbioPublico => "DISTURBIO_PUBLICO",
            Category::Otro => "OTRO",
        }
    }

    /// Returns the human-readable label shown in the selection control.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Asesinato => "Asesinato",
            Category::Asalto => "Asalto",
            Category::AccidenteTransito => "Accidente de tránsito",
            Category::ViolenciaDomestica => "Violencia doméstica",
            Category::DisturbioPublico => "Disturbio publico",
            Category::Otro => "Otro",
        }
    }

    /// Returns all categories in display order.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }

    /// Looks a category up by its catalog code.
    pub fn from_code(code: &str) -> Option<Category> {
        ALL_CATEGORIES.iter().copied().find(|c| c.code() == code)
    }
}

#[mutants::skip]
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
