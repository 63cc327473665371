use crate::datasets::{DatasetBundle, Result};
use crate::engine::pairwise::AgreementMatrix;
use colored::Colorize;
use std::path::Path;

/// Pairwise agreement matrix between all roster parties.
pub fn matrix(seats_file: &Path, statements_file: &Path) -> Result<()> {
    let bundle = DatasetBundle::load(seats_file, statements_file)?;
    let matrix = AgreementMatrix::compute(bundle.roster(), bundle.statements());

    let width = matrix
        .parties()
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    println!("📊 {}", "Pairwise agreement (%)".bright_cyan().bold());
    println!();

    print!("{:>w$} ", "", w = width);
    for name in matrix.parties() {
        print!("{:>w$} ", name, w = width);
    }
    println!();

    for (row, name) in matrix.parties().iter().enumerate() {
        print!("{:>w$} ", name, w = width);
        for col in 0..matrix.parties().len() {
            print!("{:>w$.1} ", matrix.rate(row, col), w = width);
        }
        println!();
    }

    Ok(())
}
