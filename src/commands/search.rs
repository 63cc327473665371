use crate::datasets::{DatasetBundle, Result};
use crate::engine::{find_best_coalitions, ScoringOptions, SearchOptions};
use crate::util::write_serialized;
use colored::Colorize;
use std::path::Path;

/// Search for the most harmonious majority coalitions and print the
/// ranking. Optionally writes the ranked list as JSON for the UI layer.
pub fn search(
    seats_file: &Path,
    statements_file: &Path,
    require: Option<&str>,
    options: &SearchOptions,
    output: Option<&Path>,
) -> Result<()> {
    let bundle = DatasetBundle::load(seats_file, statements_file)?;
    let scoring = ScoringOptions::default();

    if bundle.statements.is_empty() {
        println!(
            "{}",
            "⚠️  Statement set is empty; every coalition will score 0".yellow()
        );
    }

    println!(
        "🔍 Searching coalitions of up to {} parties ({} parties, {} statements)",
        options.max_coalition_size.to_string().cyan(),
        bundle.roster().len(),
        bundle.statements().len()
    );
    if let Some(name) = require {
        println!("   Required party: {}", name.cyan());
    }

    let ranked = find_best_coalitions(
        bundle.roster(),
        bundle.statements(),
        require,
        options,
        &scoring,
    );

    if ranked.is_empty() {
        println!(
            "{}",
            format!(
                "No coalition of up to {} parties reaches {} seats",
                options.max_coalition_size, options.majority_threshold
            )
            .yellow()
        );
        return Ok(());
    }

    println!();
    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "{}. [{} parties] {}: {} seats, {}% agreement",
            i + 1,
            entry.score.coalition_size,
            entry.coalition.to_string().bright_white().bold(),
            entry.score.seats.to_string().bright_yellow(),
            format!("{:.1}", entry.score.agreement_rate).bright_green()
        );
    }

    if let Some(path) = output {
        write_serialized(path, &ranked)?;
        println!();
        println!("✅ Wrote ranking to {}", path.display());
    }

    Ok(())
}
