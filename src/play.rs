//! Terminal front end for a play session.

use crate::client::MoveSource;
use crate::session::{PlaySession, SessionError};
use anyhow::Result;
use oracle_tictactoe::{GameStatus, Player, Position};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{instrument, warn};

fn outcome_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(Player::X) => Some("You win!"),
        GameStatus::Won(Player::O) => Some("The engine wins."),
        GameStatus::Draw => Some("Draw."),
    }
}

/// Plays games on stdin/stdout until the player quits or input ends.
#[instrument(skip(source))]
pub async fn run(source: &dyn MoveSource) -> Result<()> {
    let mut session = PlaySession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("You are X. Enter a square (0-8 or a name like \"center\"), 'new' or 'quit'.");
    loop {
        println!("\n{}\n", session.board().display());
        if let Some(message) = outcome_message(session.status()) {
            println!("{message} Type 'new' to play again.");
        }

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        let input = line.trim();
        match input {
            "quit" | "q" | "exit" => return Ok(()),
            "new" | "reset" => {
                session.reset();
                continue;
            }
            _ => {}
        }

        let Some(pos) = Position::from_label_or_number(input) else {
            println!("Not a square: {input:?}");
            continue;
        };

        match session.play_turn(pos, source).await {
            Ok(_) => {
                if let Some(last) = session.history().last()
                    && session.to_move() == Player::X
                {
                    println!("Engine plays {} ({})", last.to_index(), last);
                }
            }
            Err(SessionError::Transport(e)) => {
                warn!(error = %e, "Engine unreachable");
                println!("{}", session.notice().unwrap_or("Could not reach the engine"));
            }
            Err(e) => println!("{e}"),
        }
    }
}
