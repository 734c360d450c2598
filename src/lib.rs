#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod errors;
mod geometry;
mod import;
mod model;
mod report;
mod view;

pub use errors::{ImportError, ReportError};
pub use geometry::{position, Position};
pub use import::{
    import_and_present, import_from_file, import_from_str, Diagnostic, ImportOutcome,
};
pub use model::{Link, Material, Node, TrussModel};
pub use report::{longest_link, render_report};
pub use view::{NullPresenter, TrussPresenter};
