use crate::datasets::{DatasetBundle, Result};
use crate::engine::CHAMBER_SEATS;
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::Path;

/// Validate both datasets and dump a summary.
pub fn info(seats_file: &Path, statements_file: &Path) -> Result<()> {
    let bundle = DatasetBundle::load(seats_file, statements_file)?;

    println!("📋 {}", "Seat dataset".bright_cyan().bold());
    let metadata = &bundle.seats.metadata;
    if let Some(election) = &metadata.election {
        println!("  Election: {}", election);
    }
    if let Some(source) = &metadata.source {
        println!("  Source:   {}", source);
    }
    if let Some(date) = metadata.date {
        println!("  Date:     {}", date);
    }
    if let Some(status) = &metadata.status {
        println!("  Status:   {}", status);
    }
    if let Some(turnout) = metadata.turnout_percentage {
        println!("  Turnout:  {:.1}%", turnout);
    }

    println!("  Parties:  {}", bundle.roster().len());
    for party in bundle.roster() {
        println!("    {:<10} {:>3} seats", party.name, party.seats);
    }

    let total = bundle.seats.total_seats();
    if total == CHAMBER_SEATS {
        println!(
            "  Total:    {} seats {}",
            total.to_string().bright_green(),
            "(full chamber)".green()
        );
    } else {
        println!(
            "  Total:    {} seats {}",
            total.to_string().bright_yellow(),
            format!("(expected {})", CHAMBER_SEATS).yellow()
        );
    }

    println!();
    println!("📋 {}", "Statement dataset".bright_cyan().bold());
    if let Some(source) = &bundle.statements.metadata.source {
        println!("  Source:     {}", source);
    }
    println!("  Statements: {}", bundle.statements().len());

    // Names appearing in positions but missing from the seat roster, and
    // roster parties with incomplete position coverage.
    let roster_names: BTreeSet<&str> =
        bundle.roster().iter().map(|p| p.name.as_str()).collect();
    let mut position_names: BTreeSet<&str> = BTreeSet::new();
    for statement in bundle.statements() {
        position_names.extend(statement.positions.keys().map(|n| n.as_str()));
    }

    let unseated: Vec<&&str> = position_names.difference(&roster_names).collect();
    if !unseated.is_empty() {
        println!(
            "  {} parties with positions but no seats: {}",
            "⚠️".yellow(),
            unseated
                .iter()
                .map(|n| **n)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let total_statements = bundle.statements().len();
    for party in bundle.roster() {
        let covered = bundle
            .statements()
            .iter()
            .filter(|s| s.stance_of(&party.name).is_some())
            .count();
        if covered < total_statements {
            println!(
                "  {} {} has positions on {}/{} statements",
                "⚠️".yellow(),
                party.name,
                covered,
                total_statements
            );
        }
    }

    println!();
    println!("✅ Datasets loaded");
    Ok(())
}
