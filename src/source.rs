//! Shared loading of config and shot log for every subcommand.

use anyhow::{Context, Result};
use tracing::{info, warn};

use caddie_io::{ShotLog, read_shots_csv};

use crate::cli::SourceArgs;
use crate::config::CaddieConfig;

/// Everything a subcommand needs before it can answer.
pub struct Loaded {
    pub config: CaddieConfig,
    pub log: ShotLog,
    pub user: String,
}

/// Reads the TOML config (defaults when the file is absent), applies CLI
/// overrides and imports the shot log.
pub fn load(args: &SourceArgs) -> Result<Loaded> {
    let mut config: CaddieConfig = if args.config.exists() {
        let toml_str = std::fs::read_to_string(&args.config)
            .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")?
    } else {
        info!(path = %args.config.display(), "no config file, using defaults");
        CaddieConfig::default()
    };

    if let Some(ref shots) = args.shots {
        config.io.shots = shots.clone();
    }
    if let Some(ref user) = args.user {
        config.io.user = user.clone();
    }

    info!(path = %config.io.shots.display(), "reading shot log");
    let (log, summary) = read_shots_csv(&config.io.shots)
        .with_context(|| format!("failed to read shot log: {}", config.io.shots.display()))?;
    if summary.skipped > 0 {
        warn!(
            skipped = summary.skipped,
            total = summary.total_records,
            "some shot log rows were invalid and ignored"
        );
    }

    let user = config.io.user.clone();
    Ok(Loaded { config, log, user })
}
