//! Error types produced while importing trusses and rendering reports.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when an import cannot produce a model at all.
///
/// Line-level problems inside a readable file are not errors; they are
/// collected as [`Diagnostic`](crate::Diagnostic) records so the rest of the
/// file still loads.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Returned when the input path is missing or unreadable.
    #[error("cannot read truss description {}: {source}", .path.display())]
    FileAccess {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Error returned when a design report cannot be rendered.
///
/// # Examples
///
/// ```
/// use trusskit::{render_report, ReportError, TrussModel};
///
/// let empty = TrussModel::new();
/// let error = render_report(&empty).expect_err("nothing to report");
/// assert_eq!(error, ReportError::NoMeasuredLinks);
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ReportError {
    /// Returned when no link carries derived geometry, so a longest link
    /// does not exist.
    #[error("no links with derived geometry; nothing to report")]
    NoMeasuredLinks,
}
