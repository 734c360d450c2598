//! Plain-text design report rendering.

use std::fmt::Write;

use crate::errors::ReportError;
use crate::model::{Link, TrussModel};

/// Find the link with the greatest derived length.
///
/// Links without derived geometry are never candidates. Ties keep the first
/// link encountered in declaration order.
#[must_use]
pub fn longest_link(model: &TrussModel) -> Option<&Link> {
    let mut longest: Option<(&Link, f64)> = None;
    for link in model.links() {
        let Some(length) = link.length else {
            continue;
        };
        if longest.map_or(true, |(_, best)| length > best) {
            longest = Some((link, length));
        }
    }
    longest.map(|(link, _)| link)
}

/// Render the design report for a model.
///
/// The report lists the title, the four material scalars, a tab-separated
/// per-link table in declaration order, and a longest-link callout. Scalars
/// are formatted to two decimal places; values that were never set (and
/// links that were never measured) render as `-`.
///
/// # Errors
///
/// Returns [`ReportError::NoMeasuredLinks`] when no link carries derived
/// geometry, since the longest link would be undefined.
pub fn render_report(model: &TrussModel) -> Result<String, ReportError> {
    let longest = longest_link(model).ok_or(ReportError::NoMeasuredLinks)?;

    let mut output = String::new();
    writeln!(&mut output, "\tTruss Design Report").expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Title:  {}",
        model.title.as_deref().unwrap_or("(untitled)")
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Static Factor of Safety:  {}",
        format_scalar(model.material.static_safety_factor)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Ultimate Strength:  {}",
        format_scalar(model.material.ultimate_strength)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Yield Strength:  {}",
        format_scalar(model.material.yield_strength)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Modulus of Elasticity:  {}",
        format_scalar(model.material.elastic_modulus)
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "_____________Link Summary________________")
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Link\t(1)\t(2)\tLength\tAngle").expect("writing to string cannot fail");
    for link in model.links() {
        writeln!(
            &mut output,
            "{}\t{}\t{}\t{}\t{}",
            link.name,
            link.start_node,
            link.end_node,
            format_scalar(link.length),
            format_scalar(link.angle)
        )
        .expect("writing to string cannot fail");
    }

    writeln!(
        &mut output,
        "Longest link:  {} ({} to {}), length {}",
        longest.name,
        longest.start_node,
        longest.end_node,
        format_scalar(longest.length)
    )
    .expect("writing to string cannot fail");

    Ok(output)
}

/// Format an optional scalar to two decimal places, `-` when unset.
fn format_scalar(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::position;
    use crate::import::import_from_str;
    use crate::model::{Link, Node};

    fn measured_model() -> TrussModel {
        import_from_str(
            "title, 'Demo'\n\
             material, 100, 50, 200000\n\
             static_factor, 4\n\
             node, A, 0, 0\n\
             node, B, 3, 4\n\
             node, C, 1, 0\n\
             link, L1, A, B\n\
             link, L2, A, C\n",
        )
        .model
    }

    #[test]
    fn report_lists_material_links_and_longest() {
        let report = render_report(&measured_model()).expect("report renders");
        assert!(report.contains("\tTruss Design Report"));
        assert!(report.contains("Title:  Demo"));
        assert!(report.contains("Static Factor of Safety:  4.00"));
        assert!(report.contains("Ultimate Strength:  100.00"));
        assert!(report.contains("Yield Strength:  50.00"));
        assert!(report.contains("Modulus of Elasticity:  200000.00"));
        assert!(report.contains("L1\tA\tB\t5.00\t0.93"));
        assert!(report.contains("L2\tA\tC\t1.00\t0.00"));
        assert!(report.contains("Longest link:  L1 (A to B), length 5.00"));
    }

    #[test]
    fn unset_material_scalars_render_as_dashes() {
        let model = import_from_str("node, A, 0, 0\nnode, B, 1, 0\nlink, L1, A, B\n").model;
        let report = render_report(&model).expect("report renders");
        assert!(report.contains("Title:  (untitled)"));
        assert!(report.contains("Static Factor of Safety:  -"));
        assert!(report.contains("Ultimate Strength:  -"));
    }

    #[test]
    fn unmeasured_links_render_placeholders_but_never_win() {
        let model = import_from_str(
            "node, A, 0, 0\nnode, B, 1, 0\nlink, ghost, A, missing\nlink, L1, A, B\n",
        )
        .model;
        let report = render_report(&model).expect("report renders");
        assert!(report.contains("ghost\tA\tmissing\t-\t-"));
        assert!(report.contains("Longest link:  L1"));
    }

    #[test]
    fn empty_model_has_no_report() {
        assert_eq!(
            render_report(&TrussModel::new()),
            Err(ReportError::NoMeasuredLinks)
        );
    }

    #[test]
    fn all_unmeasured_links_have_no_report() {
        let model = import_from_str("link, L1, A, B\n").model;
        assert_eq!(render_report(&model), Err(ReportError::NoMeasuredLinks));
    }

    #[test]
    fn longest_link_ties_keep_the_first_declared() {
        let mut model = TrussModel::new();
        model.add_node(Node::new("A", position(0.0, 0.0, 0.0)));
        model.add_node(Node::new("B", position(1.0, 0.0, 0.0)));
        model.add_node(Node::new("C", position(0.0, 1.0, 0.0)));
        model.add_link(Link::new("first", "A", "B"));
        model.add_link(Link::new("second", "A", "C"));
        model.derive_link_geometry();
        assert_eq!(longest_link(&model).expect("candidate exists").name, "first");
    }

    #[test]
    fn longest_link_ignores_unmeasured_candidates() {
        let mut model = TrussModel::new();
        model.add_link(Link::new("dangling", "A", "B"));
        assert!(longest_link(&model).is_none());
    }
}
