use std::fmt;

/// EPI policing module ("módulo policial") a report is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sector {
    #[default]
    Alalay,
    ConaCona,
    Jaihuayco,
    Sur,
    Central,
}

static ALL_SECTORS: &[Sector] = &[
    Sector::Alalay,
    Sector::ConaCona,
    Sector::Jaihuayco,
    Sector::Sur,
    Sector::Central,
];

impl Sector {
    /// Returns the stable catalog code carried in the submitted record.
    pub fn code(&self) -> &'static str {
        match self {
            Sector::Alalay => "EPI_N5_Alalay",
            Sector::ConaCona => "EPI_N1_Coña Coña",
            Sector::Jaihuayco => "EPI_N3_Jaihuayco",
            Sector::Sur => "EPI_N7_Sur",
            Sector::Central => "EPI_N6_Central",
        }
    }

    /// Returns the human-readable label shown in the selection control.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Alalay => "EPI Nº 5 ALALAY",
            Sector::ConaCona => "EPI Nº 1 COÑA COÑA",
            Sector::Jaihuayco => "EPI Nº 3 JAIHUAYCO",
            Sector::Sur => "EPI Nº 7 SUR",
            Sector::Central => "EPI Nº 6 CENTRAL",
        }
    }

    /// Returns all sectors in display order.
    pub fn all() -> &'static [Sector] {
        ALL_SECTORS
    }

    /// Looks a sector up by its catalog code.
    pub fn from_code(code: &str) -> Option<Sector> {
        ALL_SECTORS.iter().copied().find(|s| s.code() == code)
    }
}

#[mutants::skip]
impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
