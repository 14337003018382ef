//! Clubs command: per-club distance statistics.

use anyhow::{Context, Result};
use tracing::info_span;

use caddie_shot::{BucketAverage, ClubStats, DEFAULT_BAG, ShotSource, bag_order};

use crate::cli::ClubsArgs;
use crate::source;

/// Print statistics for every club in the bag plus any other club with
/// recorded shots.
pub fn run(args: ClubsArgs) -> Result<()> {
    let _cmd = info_span!("clubs").entered();

    let loaded = source::load(&args.source)?;
    let shots = loaded
        .log
        .shots_for_user(&loaded.user)
        .with_context(|| format!("failed to load shots for user '{}'", loaded.user))?;
    let stats = ClubStats::from_shots(&shots);

    if args.json {
        caddie_io::write_json(std::io::stdout().lock(), &stats)?;
        return Ok(());
    }

    println!("{} shots for '{}'", shots.len(), loaded.user);
    println!();
    println!(
        "  {:<16} {:>5} {:>7} {:>7} {:>5} {:>14} {:>14}",
        "Club", "Shots", "Avg", "StdDev", "Max", "Fairway/Tee", "Rough"
    );
    let names = bag_order(DEFAULT_BAG.into_iter().chain(stats.iter().map(|s| s.club.as_str())));
    for name in names {
        match stats.get(name) {
            Some(s) => println!(
                "  {:<16} {:>5} {:>7.1} {:>7} {:>5} {:>14} {:>14}",
                s.club,
                s.shot_count,
                s.average,
                s.std_dev.map(|d| format!("{d:.1}")).unwrap_or_else(|| "-".to_string()),
                s.max_distance,
                bucket_cell(&s.fairway_or_tee),
                bucket_cell(&s.rough),
            ),
            None => println!("  {name:<16} {:>5}", 0),
        }
    }
    Ok(())
}

fn bucket_cell(b: &BucketAverage) -> String {
    match b.average {
        Some(avg) => format!("{avg:.1} ({})", b.count),
        None => "-".to_string(),
    }
}
