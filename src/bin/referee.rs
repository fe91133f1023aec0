//! Console referee: three rounds on stdin/stdout.

use std::io::{self, BufRead, Write};

use rps_plus::referee::{bomb_status, final_summary, round_report, rules_text, GameSession};

fn main() -> io::Result<()> {
    env_logger::init();

    let seed = rand::random::<u64>();
    let mut session = GameSession::new(seed);

    println!("Rock-Paper-Scissors-Plus Game Referee\n");
    println!("{}", rules_text());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.is_active() {
        let round = session.state().round_number;
        println!("\n>>> ROUND {round} <<<");
        println!("{}", bomb_status(session.state()));

        print!("Your move (rock/paper/scissors/bomb): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed mid-game; nothing left to referee.
            println!();
            return Ok(());
        };
        let input = line?;

        if input.trim().is_empty() {
            println!("Please enter a move.");
            continue;
        }

        match session.play(&input) {
            Ok(state) => println!("\n{}", round_report(state)),
            // Unreachable while the loop checks is_active, but the policy is
            // explicit: a finished game rejects further moves.
            Err(err) => {
                println!("{err}");
                break;
            }
        }
    }

    println!("\n{}", final_summary(session.state()));
    Ok(())
}
