use std::env;
use std::error::Error;
use std::process;

use trusskit::{import_and_present, TrussModel, TrussPresenter};

/// Presenter for terminal use: report to stdout, geometry to the log.
struct ConsolePresenter;

impl TrussPresenter for ConsolePresenter {
    fn show_report(&mut self, report: &str) {
        println!("{report}");
    }

    fn draw_truss(&mut self, model: &TrussModel) {
        log::debug!(
            "imported {} nodes and {} links",
            model.node_count(),
            model.link_count()
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: trusskit <truss-file>");
        process::exit(1);
    };

    let outcome = import_and_present(&path, &mut ConsolePresenter)?;
    for diagnostic in &outcome.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    Ok(())
}
