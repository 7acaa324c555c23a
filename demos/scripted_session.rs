//! Plays seeded sessions with a simple "hit below 17" policy and tallies results.

use bjvs::{Game, GameOptions, OptionsError, Winner};

const SESSIONS: u64 = 1_000;

fn main() -> Result<(), OptionsError> {
    let mut game = Game::new(GameOptions::default(), 2024)?;
    let (mut wins, mut losses, mut draws) = (0_u32, 0_u32, 0_u32);

    for session in 0..SESSIONS {
        if session > 0 {
            game.start_session();
        }

        while !game.is_over() && game.player_hand().value() < 17 {
            if game.hit().is_err() {
                break;
            }
        }

        let outcome = match game.outcome() {
            Some(outcome) => outcome,
            None => match game.stand() {
                Ok(outcome) => outcome,
                Err(err) => {
                    println!("session {session}: {err}");
                    continue;
                }
            },
        };

        match outcome.winner {
            Winner::Player => wins += 1,
            Winner::Ai => losses += 1,
            Winner::Draw => draws += 1,
        }
    }

    println!("{SESSIONS} sessions: {wins} won, {losses} lost, {draws} drawn");
    Ok(())
}
