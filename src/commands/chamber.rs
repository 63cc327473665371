use super::print_statement_lines;
use crate::datasets::{DatasetBundle, Result};
use crate::engine::scorer::{self, CohesionSummary};
use crate::engine::ScoringOptions;
use colored::Colorize;
use std::path::Path;

/// Per-statement cohesion across the full chamber, the baseline the UI
/// shows next to the current coalition.
pub fn chamber(seats_file: &Path, statements_file: &Path) -> Result<()> {
    let bundle = DatasetBundle::load(seats_file, statements_file)?;
    let scoring = ScoringOptions::default();

    println!(
        "🏛  {} ({} parties, {} seats)",
        "Full chamber".bright_cyan().bold(),
        bundle.roster().len(),
        bundle.seats.total_seats()
    );
    println!();

    let breakdowns = scorer::statement_breakdowns(bundle.roster(), bundle.statements(), &scoring);
    print_statement_lines(&breakdowns, bundle.statements());

    let summary = CohesionSummary::from_breakdowns(&breakdowns);
    println!();
    println!(
        "   {} unified / {} moderate / {} divided of {}",
        summary.unified.to_string().green(),
        summary.moderate.to_string().yellow(),
        summary.divided.to_string().red(),
        breakdowns.len()
    );

    Ok(())
}
