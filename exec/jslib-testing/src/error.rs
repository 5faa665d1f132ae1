use std::str::Utf8Error;
use thiserror::Error;

/// Errors raised when the embedded bundle is handed to a consumer.
///
/// Reading the bundle itself never fails; these only come from views and
/// engine hand-offs built on top of it.
#[derive(Debug, Error)]
pub enum Error {
    /// The bundle bytes are not valid UTF-8.
    #[error("Bundle is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] Utf8Error),
    /// The JavaScript engine rejected or threw while evaluating a script.
    #[cfg(feature = "quickjs")]
    #[error("JavaScript engine error: {0}")]
    Engine(String),
    /// The bundle was evaluated but did not define its global.
    #[cfg(feature = "quickjs")]
    #[error("Bundle did not define the global `{0}`")]
    MissingGlobal(&'static str),
}
