//! Mesh viewer command-line entry point.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use mesh_viewer::{MeshCatalog, ViewParams, ViewerSession};
use tracing::error;

use crate::cli::{Cli, initialize_tracing};

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.verbose, cli.log_format);

    let mut catalog = MeshCatalog::scan(&cli.directory, &cli.extension)
        .with_context(|| format!("scanning {}", cli.directory.display()))?;
    catalog.select(cli.index)?;

    let options = cli.load_options();
    let params = ViewParams::default();

    if !cli.all {
        let session = ViewerSession::open(catalog, options, params)?;
        println!("{}", session.report());
        println!("  mvp:      {:?}", session.mvp(cli.aspect).as_slice());
        return Ok(());
    }

    let mut failures = 0;
    for _ in 0..catalog.len() {
        match ViewerSession::open(catalog.clone(), options, params) {
            Ok(session) => println!("{}", session.report()),
            Err(e) => {
                failures += 1;
                error!(file = catalog.current_name(), error = %e, "Failed to load mesh");
            }
        }
        catalog.next_mesh();
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} meshes failed to load", catalog.len());
    }
    Ok(())
}
