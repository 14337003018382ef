//! Visualize command: project the decision space to 2D.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use caddie_io::{write_json, write_json_file};
use caddie_recommend::visualize_for_user;

use crate::cli::VisualizeArgs;
use crate::convert;
use crate::recommend_cmd::raw_query;
use crate::source;

/// Build and write the visualization payload.
pub fn run(args: VisualizeArgs) -> Result<()> {
    let _cmd = info_span!("visualize").entered();

    let mut loaded = source::load(&args.source)?;
    convert::apply_model_overrides(&args.model, &mut loaded.config.model);
    let config = convert::build_recommend_config(&loaded.config)?;

    let raw = raw_query(&args.query);
    let payload = visualize_for_user(&loaded.log, &loaded.user, &raw, &config)
        .with_context(|| format!("cannot build visualization for user '{}'", loaded.user))?;
    info!(
        points = payload.points.len(),
        neighbors = payload.neighbors().count(),
        "payload built"
    );

    match args.output {
        Some(ref path) => write_json_file(path, &payload)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => write_json(std::io::stdout().lock(), &payload)?,
    }
    Ok(())
}
