mod category;
mod draft;
mod record;
mod sector;
mod validation;

pub use category::Category;
pub use draft::{ImageRef, ReportDraft};
pub use record::{Report, format_time};
pub use sector::Sector;
pub use validation::{ValidationError, validate_draft};
