//! Recommend command: rank clubs for one shot.

use anyhow::{Context, Result};
use tracing::info_span;

use caddie_recommend::{Recommendation, recommend_for_user};
use caddie_shot::RawQuery;

use crate::cli::{QueryArgs, RecommendArgs};
use crate::convert;
use crate::source;

/// Builds the unparsed query from CLI arguments.
pub fn raw_query(args: &QueryArgs) -> RawQuery {
    let raw = RawQuery::new(&args.distance, &args.lie, &args.bend);
    match args.shape {
        Some(ref shape) => raw.with_shot_shape(shape),
        None => raw,
    }
}

/// Run the recommendation.
pub fn run(args: RecommendArgs) -> Result<()> {
    let _cmd = info_span!("recommend").entered();

    let mut loaded = source::load(&args.source)?;
    convert::apply_model_overrides(&args.model, &mut loaded.config.model);
    let config = convert::build_recommend_config(&loaded.config)?;

    let raw = raw_query(&args.query);
    let rec = recommend_for_user(&loaded.log, &loaded.user, &raw, &config)
        .with_context(|| format!("cannot recommend a club for user '{}'", loaded.user))?;

    if args.json {
        caddie_io::write_json(std::io::stdout().lock(), &rec)?;
    } else {
        print_table(&raw, &rec);
    }
    Ok(())
}

fn print_table(raw: &RawQuery, rec: &Recommendation) {
    println!(
        "{} yds from {} ({})",
        raw.distance.trim(),
        raw.lie.trim(),
        raw.bend.trim()
    );
    println!();
    println!(
        "  {:<16} {:>10} {:>8}  {:<6} {:>7}",
        "Club", "Avg (lie)", "Prob", "Tier", "Agree"
    );
    for c in rec.candidates() {
        let avg = c
            .average_distance_for_lie()
            .map(|d| format!("{d:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<16} {:>10} {:>7.1}%  {:<6} {:>6.1}%",
            c.club(),
            avg,
            c.probability() * 100.0,
            c.confidence_tier(),
            c.agreement_percentage()
        );
    }
    println!();
    println!(
        "k used: {}   shots analyzed: {}",
        rec.k_used(),
        rec.total_shots_analyzed()
    );
    if let Some(w) = rec.warning() {
        println!("Warning: {w}");
    }
}
