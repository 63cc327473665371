mod chamber;
mod info;
mod matrix;
mod score;
mod search;

pub use chamber::chamber;
pub use info::info;
pub use matrix::matrix;
pub use score::score;
pub use search::search;

use crate::engine::scorer::StatementBreakdown;
use crate::model::Statement;

/// One line per statement: badge, id, agree/neutral/disagree seat tallies,
/// truncated text.
pub(crate) fn print_statement_lines(breakdowns: &[StatementBreakdown], statements: &[Statement]) {
    for (breakdown, statement) in breakdowns.iter().zip(statements) {
        let text: String = statement.text.chars().take(60).collect();
        let ellipsis = if statement.text.chars().count() > 60 {
            "..."
        } else {
            ""
        };
        println!(
            "  {} {:<8} {:<4} {:>3}/{:>3}/{:>3}  {}{}",
            breakdown.cohesion.symbol(),
            breakdown.cohesion.label(),
            breakdown.statement_id,
            breakdown.tally.agree_seats,
            breakdown.tally.neutral_seats,
            breakdown.tally.disagree_seats,
            text,
            ellipsis
        );
    }
}
