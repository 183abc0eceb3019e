//! Self-play driver: pits two computer skills against each other.

use std::fmt::Write;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ttt_engine::{Board, Error, Mark, MatchRunner, MatchSettings, RoundResult, Skill};

/// Play a tic-tac-toe match between two computer players
#[derive(Parser, Debug)]
#[command(name = "ttt-selfplay")]
#[command(about = "Play a tic-tac-toe match between two computer players", long_about = None)]
#[command(version)]
struct Cli {
    /// Skill of the X player (dumb, reasonable, optimal or 1-3)
    #[arg(long, default_value = "optimal")]
    x_skill: Skill,

    /// Skill of the O player (dumb, reasonable, optimal or 1-3)
    #[arg(long, default_value = "reasonable")]
    o_skill: Skill,

    /// Mark that opens every round
    #[arg(long, default_value = "X")]
    starting: Mark,

    /// Round wins needed to take the match
    #[arg(long, default_value = "2")]
    rounds_to_win: u32,

    /// Give up after this many rounds without a winner (0 = unlimited)
    #[arg(long, default_value = "1000")]
    max_rounds: u32,

    /// Seed for the random and threat-aware players
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let settings = MatchSettings::new()
        .with_skill(Mark::X, cli.x_skill)
        .with_skill(Mark::O, cli.o_skill)
        .with_starting_mark(cli.starting)
        .with_rounds_to_win(cli.rounds_to_win)
        .with_max_rounds(cli.max_rounds)
        .with_seed(cli.seed);

    let mut runner = MatchRunner::new(settings)?;

    match runner.play_match() {
        Ok(summary) => {
            print!("{}", render_rounds(&summary.rounds)?);
            println!(
                "Match winner: {} (X {} - O {}, {} ties)",
                summary.winner,
                summary.scores[Mark::X],
                summary.scores[Mark::O],
                summary.ties
            );
            info!(winner = %summary.winner, "done");
        }
        Err(Error::MatchUndecided { rounds }) => {
            print!("{}", render_rounds(runner.rounds())?);
            warn!(rounds, "no match winner");
            println!("No match winner after {} rounds.", rounds);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Each round's result line, move list and final board.
fn render_rounds(rounds: &[RoundResult]) -> Result<String> {
    let mut out = String::new();
    for (i, round) in rounds.iter().enumerate() {
        let result = match round.winner {
            Some(mark) => format!("{} wins", mark),
            None => "tie".to_string(),
        };
        let moves: Vec<String> = round.moves.iter().map(|m| m.to_string()).collect();
        let board = Board::from_moves(round.moves.iter().copied())?;

        writeln!(out, "Round {}: {} ({})", i + 1, result, moves.join(" "))?;
        writeln!(out, "{}", board)?;
        writeln!(out)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_round_board_rendered() {
        let settings = MatchSettings::new()
            .with_skill(Mark::X, Skill::Optimal)
            .with_skill(Mark::O, Skill::Optimal)
            .with_max_rounds(2);
        let mut runner = MatchRunner::new(settings).unwrap();
        assert!(runner.play_match().is_err());

        let out = render_rounds(runner.rounds()).unwrap();

        assert!(out.contains("Round 1: tie"));
        assert!(out.contains("Round 2: tie"));
        assert_eq!(out.matches("-----------").count(), 4);
    }
}
