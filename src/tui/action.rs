//! Actions returned by the screen's event handler.

use crate::model::Report;

/// An action the entry screen returns for the [`App`](super::App) to apply.
///
/// The `App` interprets these against the external boundaries: the media
/// library, the submission sink, and the navigation host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed outside the screen.
    None,
    /// Run the media permission + picker flow against the draft.
    PickImage,
    /// Hand a validated, assembled record to the submission sink.
    Submit(Report),
    /// Dismiss the screen; with a single screen this ends the session.
    GoBack,
}
