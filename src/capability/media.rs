//! Media-library boundary: permission request plus image selection.

use futures::future::BoxFuture;

use crate::model::{ImageRef, ReportDraft};

/// Message surfaced when the media library denies gallery access.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Necesitamos acceso a tu galería para seleccionar imágenes";

/// Outcome of a media-library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Outcome of launching the image picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(ImageRef),
    Cancelled,
}

/// The host's media-library capability.
///
/// Both calls suspend and neither is cancellable once started. Futures are
/// boxed so the app can hold the library as a trait object.
pub trait MediaLibrary {
    fn request_permission(&mut self) -> BoxFuture<'_, Permission>;
    fn pick_image(&mut self) -> BoxFuture<'_, PickOutcome>;
}

/// What [`attach_image`] did to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// A new image reference replaced the draft's previous one.
    Attached,
    /// The user backed out of the picker; the draft is untouched.
    Cancelled,
    /// Gallery access was denied; the draft is untouched and the caller
    /// should surface [`PERMISSION_DENIED_MESSAGE`].
    PermissionDenied,
}

/// Runs the image-selection flow against the draft.
///
/// Permission is resolved before the picker launches. Only a successful pick
/// mutates the draft; a denial or cancellation leaves any previously picked
/// image in place. Image presence never affects submittability, so this flow
/// is invisible to the validator.
pub async fn attach_image<M: MediaLibrary + ?Sized>(
    library: &mut M,
    draft: &mut ReportDraft,
) -> AttachOutcome {
    match library.request_permission().await {
        Permission::Denied => AttachOutcome::PermissionDenied,
        Permission::Granted => match library.pick_image().await {
            PickOutcome::Cancelled => AttachOutcome::Cancelled,
            PickOutcome::Picked(image) => {
                draft.set_image_ref(Some(image));
                AttachOutcome::Attached
            }
        },
    }
}

/// Media library used when no host integration is wired in: access is
/// granted but the picker reports cancellation, so the draft never changes.
/// A real gallery integration replaces this without touching [`attach_image`].
#[derive(Debug, Default)]
pub struct NullMediaLibrary;

impl MediaLibrary for NullMediaLibrary {
    fn request_permission(&mut self) -> BoxFuture<'_, Permission> {
        Box::pin(async { Permission::Granted })
    }

    fn pick_image(&mut self) -> BoxFuture<'_, PickOutcome> {
        Box::pin(async { PickOutcome::Cancelled })
    }
}
