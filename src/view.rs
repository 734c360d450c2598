//! Presentation hand-off for imported truss models.

use crate::model::TrussModel;

/// Consumer of a completed import.
///
/// The import pipeline pushes two payloads: the rendered report text and the
/// finished model. Implementations must tolerate a model with zero nodes or
/// links, and should skip links whose derived geometry is unset rather than
/// treating them as resolved.
pub trait TrussPresenter {
    /// Display the textual design report.
    fn show_report(&mut self, report: &str);

    /// Render the truss geometry.
    fn draw_truss(&mut self, model: &TrussModel);
}

/// Presenter that discards both payloads.
///
/// Useful for headless imports and for tests that only care about the model.
///
/// # Examples
/// ```
/// use trusskit::{NullPresenter, TrussModel, TrussPresenter};
///
/// let mut presenter = NullPresenter;
/// presenter.show_report("ignored");
/// presenter.draw_truss(&TrussModel::new());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl TrussPresenter for NullPresenter {
    fn show_report(&mut self, _report: &str) {}

    fn draw_truss(&mut self, _model: &TrussModel) {}
}
