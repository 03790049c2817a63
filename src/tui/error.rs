/// Errors that can occur in the TUI layer.
///
/// Validation failures and permission denials never reach this type: they are
/// surfaced inline on the screen with the draft intact. Only real terminal
/// and runtime I/O ends up here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, runtime setup).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
