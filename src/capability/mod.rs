//! External capability boundaries: the media library the form picks images
//! from and the sink that receives completed reports.

pub mod media;
pub mod submit;

pub use media::{
    AttachOutcome, MediaLibrary, NullMediaLibrary, PERMISSION_DENIED_MESSAGE, Permission,
    PickOutcome, attach_image,
};
pub use submit::{DiagnosticSink, SubmissionSink, SubmitError};
