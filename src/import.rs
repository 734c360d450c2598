//! Line-oriented import of truss description files.
//!
//! Each line carries a comma-separated directive (`title`, `material`,
//! `static_factor`, `node`, `link`). Blank lines, `#` comments and unknown
//! directives are skipped; a malformed recognized directive abandons that
//! line only and is recorded as a [`Diagnostic`], so a single typo cannot
//! stop the rest of a hand-edited file from loading.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::errors::{ImportError, ReportError};
use crate::geometry::Position;
use crate::model::{Link, Material, Node, TrussModel};
use crate::report::render_report;
use crate::view::TrussPresenter;

/// A malformed line that was skipped during import.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("line {line_number}: {message}: {text:?}")]
pub struct Diagnostic {
    /// 1-based line number in the input.
    pub line_number: usize,
    /// The offending line, trimmed.
    pub text: String,
    /// What went wrong.
    pub message: String,
}

/// A parsed model together with the diagnostics gathered along the way.
#[derive(Debug)]
pub struct ImportOutcome {
    /// The model built from every well-formed line.
    pub model: TrussModel,
    /// One record per skipped line, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Import a truss description from a file.
///
/// The file is read in one scoped pass and released before parsing begins.
/// Parsing itself never fails; see [`import_from_str`].
///
/// # Errors
///
/// Returns [`ImportError::FileAccess`] when the path is missing or
/// unreadable. No partial model is produced in that case.
pub fn import_from_file(path: impl AsRef<Path>) -> Result<ImportOutcome, ImportError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ImportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(import_from_str(&contents))
}

/// Import a truss description from in-memory text.
///
/// The derivation pass runs after the last line, so every link whose
/// endpoints resolve comes back with length and angle populated.
///
/// # Examples
/// ```
/// use trusskit::import_from_str;
///
/// let outcome = import_from_str("node, A, 0, 0\nnode, B, 3, 4\nlink, L1, A, B\n");
/// assert!(outcome.diagnostics.is_empty());
/// assert_eq!(outcome.model.links()[0].length, Some(5.0));
/// ```
#[must_use]
pub fn import_from_str(input: &str) -> ImportOutcome {
    let mut model = TrussModel::new();
    let mut diagnostics = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        log::debug!("processing line {}: {line}", index + 1);
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let outcome = match fields[0].to_ascii_lowercase().as_str() {
            "title" => apply_title(&mut model, line),
            "material" => apply_material(&mut model, &fields),
            "static_factor" => apply_static_factor(&mut model, &fields),
            "node" => apply_node(&mut model, &fields),
            "link" => apply_link(&mut model, &fields),
            // Unknown directives are ignored, not reported.
            _ => Ok(()),
        };
        if let Err(message) = outcome {
            log::warn!("skipping line {}: {message}", index + 1);
            diagnostics.push(Diagnostic {
                line_number: index + 1,
                text: line.to_string(),
                message,
            });
        }
    }
    model.derive_link_geometry();
    ImportOutcome { model, diagnostics }
}

/// Import a file, render its report and hand both payloads to a presenter.
///
/// When no link carries derived geometry there is no report to show; the
/// model is still handed over so the presenter can draw what exists.
///
/// # Errors
///
/// Returns [`ImportError::FileAccess`] when the path is missing or
/// unreadable; the presenter is not called in that case.
pub fn import_and_present(
    path: impl AsRef<Path>,
    presenter: &mut dyn TrussPresenter,
) -> Result<ImportOutcome, ImportError> {
    let outcome = import_from_file(path)?;
    match render_report(&outcome.model) {
        Ok(report) => presenter.show_report(&report),
        Err(ReportError::NoMeasuredLinks) => {
            log::warn!("report skipped: no links with derived geometry");
        }
    }
    presenter.draw_truss(&outcome.model);
    Ok(outcome)
}

/// Store everything after the `title` keyword, without surrounding quotes.
fn apply_title(model: &mut TrussModel, line: &str) -> Result<(), String> {
    let (_, text) = line
        .split_once(',')
        .ok_or_else(|| "missing title text".to_string())?;
    model.title = Some(
        text.trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .to_string(),
    );
    Ok(())
}

/// Replace the model's material from a `material, uts, ys, modulus` line.
///
/// Replacement is wholesale: a static factor set by an earlier line is lost.
fn apply_material(model: &mut TrussModel, fields: &[&str]) -> Result<(), String> {
    let [ultimate, yield_strength, modulus] = parse_numbers(&fields[1..])?;
    model.material = Material::from_strengths(ultimate, yield_strength, modulus);
    Ok(())
}

/// Set the static safety factor on the current material, in place.
fn apply_static_factor(model: &mut TrussModel, fields: &[&str]) -> Result<(), String> {
    let field = fields
        .get(1)
        .ok_or_else(|| "missing factor value".to_string())?;
    model.material.static_safety_factor = Some(parse_number(field)?);
    Ok(())
}

/// Append a node from a `node, name, x, y` line; duplicate names are skipped.
fn apply_node(model: &mut TrussModel, fields: &[&str]) -> Result<(), String> {
    if fields.len() < 2 {
        return Err("missing node name".to_string());
    }
    let name = fields[1];
    let [x, y] = parse_numbers(&fields[2..])?;
    if model.add_node(Node::new(name, Position::planar(x, y))) {
        log::debug!("added node {name:?}");
    } else {
        log::debug!("duplicate node {name:?} skipped");
    }
    Ok(())
}

/// Append a link from a `link, name, node1, node2` line, unconditionally.
fn apply_link(model: &mut TrussModel, fields: &[&str]) -> Result<(), String> {
    if fields.len() < 4 {
        return Err(format!(
            "expected a link name and two node names, found {} fields",
            fields.len() - 1
        ));
    }
    model.add_link(Link::new(fields[1], fields[2], fields[3]));
    log::debug!("added link {:?}", fields[1]);
    Ok(())
}

/// Parse exactly `N` numeric fields.
fn parse_numbers<const N: usize>(fields: &[&str]) -> Result<[f64; N], String> {
    if fields.len() != N {
        return Err(format!(
            "expected {N} numeric fields, found {}",
            fields.len()
        ));
    }
    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = parse_number(field)?;
    }
    Ok(values)
}

/// Parse one floating point field.
fn parse_number(field: &str) -> Result<f64, String> {
    field
        .parse()
        .map_err(|_| format!("cannot parse {field:?} as a number"))
}
