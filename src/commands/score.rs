use super::print_statement_lines;
use crate::datasets::{DatasetBundle, Result};
use crate::engine::scorer::{self, CohesionSummary};
use crate::engine::{ScoringOptions, MAJORITY_THRESHOLD};
use crate::selection::Selection;
use colored::Colorize;
use std::path::Path;

/// Score a hand-picked coalition the way the UI does while the user drags
/// parties in and out.
pub fn score(
    seats_file: &Path,
    statements_file: &Path,
    parties: &[String],
    per_statement: bool,
) -> Result<()> {
    let bundle = DatasetBundle::load(seats_file, statements_file)?;
    let scoring = ScoringOptions::default();

    let mut selection = Selection::new();
    selection.replace(parties.iter().cloned());
    let coalition = selection.snapshot(bundle.roster())?;

    let result = scorer::score_coalition(&coalition, bundle.statements(), &scoring);

    println!("🏛  {}", coalition.to_string().bright_white().bold());
    if result.seats >= MAJORITY_THRESHOLD {
        println!(
            "   {} seats {}",
            result.seats.to_string().bright_green(),
            "✅ majority".green()
        );
    } else {
        println!(
            "   {} seats {}",
            result.seats.to_string().bright_red(),
            format!("❌ {} short of {}", MAJORITY_THRESHOLD - result.seats, MAJORITY_THRESHOLD)
                .red()
        );
    }

    println!();
    println!(
        "   Agreement rate:     {}%",
        format!("{:.1}", result.agreement_rate).bright_green().bold()
    );
    println!("   Average agreement:  {:.3}", result.average_agreement);
    println!(
        "   Size penalty:       {:.3} ({} parties)",
        scoring.size_penalty(result.coalition_size),
        result.coalition_size
    );
    println!("   Adjusted agreement: {:.3}", result.adjusted_agreement);

    let breakdowns =
        scorer::statement_breakdowns(coalition.parties(), bundle.statements(), &scoring);
    let summary = CohesionSummary::from_breakdowns(&breakdowns);
    println!();
    println!(
        "   Statements: {} unified / {} moderate / {} divided of {}",
        summary.unified.to_string().green(),
        summary.moderate.to_string().yellow(),
        summary.divided.to_string().red(),
        result.total_statements
    );

    if per_statement {
        println!();
        print_statement_lines(&breakdowns, bundle.statements());
    }

    Ok(())
}
