mod coords;
mod report;

use anyhow::Context;
use chess_core::NotationPolicy;
use chess_history::{ChessBoard, HistoryConfig};
use clap::Parser;
use report::HistoryReport;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "history-replay")]
#[command(about = "Replay moves on the chess board and print the recorded history")]
struct Cli {
    /// Moves to replay, as coordinate pairs like e2e4
    moves: Vec<String>,
    /// Configuration file (defaults to history.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Treat moves as notations and record them without moving pieces
    #[arg(long)]
    notation: bool,
    /// Only accept whole, case-sensitive notations
    #[arg(long)]
    strict: bool,
    /// Print the history as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => HistoryConfig::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => HistoryConfig::load().context("loading history.toml")?,
    };
    if cli.strict {
        config.notation = NotationPolicy::Strict;
    }

    let mut board = ChessBoard::new(config);
    let config_path = cli.config.clone().unwrap_or_else(HistoryConfig::config_path);
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Notation policy: {}", board.config().notation);
    replay(&mut board, &cli.moves, cli.notation)?;

    let report = HistoryReport::from_board(&board);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Plays `moves` on `board` in order, stopping at the first one refused.
fn replay(board: &mut ChessBoard, moves: &[String], notation: bool) -> anyhow::Result<()> {
    for mv in moves {
        let key = if notation {
            board
                .submit_move(mv)
                .with_context(|| format!("recording {mv}"))?
        } else {
            let (from, to) = coords::parse_coordinates(mv)?;
            board
                .play(from, to)
                .with_context(|| format!("playing {mv}"))?
        };
        tracing::info!("Replayed {} as {}", mv, key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn replays_coordinate_moves() {
        let mut board = ChessBoard::default();
        replay(&mut board, &moves(&["e2e4", "e7e5", "g1f3"]), false).unwrap();
        assert_eq!(board.moves(), ["e4", "e5", "Nf3"]);
        assert_eq!(
            board.current_board_state(),
            Some("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R")
        );
    }

    #[test]
    fn replays_notations_without_moving_pieces() {
        let mut board = ChessBoard::default();
        replay(&mut board, &moves(&["e4", "e5"]), true).unwrap();
        assert_eq!(board.moves(), ["e4", "e5"]);
        assert_eq!(board.board_state("1b"), board.board_state("start"));
    }

    #[test]
    fn stops_at_first_refused_move() {
        let mut board = ChessBoard::default();
        let err = replay(&mut board, &moves(&["d2d4", "c2c4", "d7d5"]), false).unwrap_err();
        assert!(err.to_string().contains("playing c2c4"));
        assert_eq!(board.moves(), ["d4"]);
    }

    #[test]
    fn strict_config_is_applied_to_notations() {
        let config = HistoryConfig {
            notation: NotationPolicy::Strict,
            ..HistoryConfig::default()
        };
        let mut board = ChessBoard::new(config);
        assert_eq!(board.config().notation, NotationPolicy::Strict);
        let err = replay(&mut board, &moves(&["e4", "pawn e5"]), true).unwrap_err();
        assert!(err.to_string().contains("recording pawn e5"));
        assert_eq!(board.moves(), ["e4"]);
    }
}
