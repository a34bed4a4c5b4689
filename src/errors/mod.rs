//! Errors for printsection

use std::error::Error as IError;
use std::fmt;

use serde_json::Error as JsonError;

/// Plain enum + `From` + pattern matching, no error macros except this one.
///
/// What this macro does is (simplified): `impl From<$a> for $b { $b::$variant(error) }`
macro_rules! impl_from {
    ($from:ident, $to:ident::$variant:ident) => {
        impl From<$from> for $to {
            fn from(err: $from) -> Self {
                $to::$variant(err.to_string())
            }
        }
    };
}

/// Everything that can go wrong while building options or printing a section.
///
/// Only `ContentRootNotFound`, `PopupBlocked` and `DocumentWrite` can come out
/// of a print run, and even those never reach the caller as a `Result`:
/// `PrintAssembler::print` reports them through the log and the warnings list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// `printSectionId` did not resolve to an element in the host document
    ContentRootNotFound { id: String },
    /// The host refused to open a new browsing context (popup blocker)
    PopupBlocked,
    /// The print window was opened, but writing its document failed
    DocumentWrite(String),
    /// Options rejected at construction
    InvalidOptions(String),
    /// External: serde_json::Error (stringified)
    Json(String),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::PrintError::*;
        match self {
            ContentRootNotFound { id } => write!(f, "Print section with id {} not found.", id),
            PopupBlocked => write!(f, "Could not open print window."),
            DocumentWrite(e) => write!(f, "Could not write print document: {}", e),
            InvalidOptions(e) => write!(f, "invalid print options: {}", e),
            Json(e) => write!(f, "failed to parse print options: {}", e),
        }
    }
}

impl IError for PrintError {}

impl_from!(JsonError, PrintError::Json);
