use std::io::{self, BufRead, Write};

use colored::Colorize;

use dg_core::Game;

use crate::GameArgs;

const HELP: &str = "Commands:
  play, p     roll all dice and score the round
  end, e      finish the game and show the final results
  help, h, ?  show this message
  quit, q     leave without a summary";

pub fn run(args: &GameArgs) -> Result<(), String> {
    let mut game = super::start_game(args)?;
    let (lower, upper) = game.dice().bounds();

    println!("  {} Dice Game", "Starting".bold());
    println!(
        "  Dice: {} | Faces: {lower}-{upper} | Seed: {}",
        game.dice().count(),
        game.config().seed
    );
    println!("  Play to roll, End to stop the game.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "play" | "p" => play_round(&mut game),
            "end" | "e" => {
                end_game(&game);
                break;
            }
            "help" | "h" | "?" => println!("{HELP}\n"),
            "quit" | "q" => break,
            other => println!(
                "{}\n",
                format!("unknown command: {other} (type 'help')").yellow()
            ),
        }
    }

    Ok(())
}

fn play_round(game: &mut Game) {
    let record = game.play_round();
    println!(
        "  {} {} = {} ({})",
        "Last Roll".bold(),
        super::format_roll(&record.roll),
        record.sum,
        record.category
    );
    println!("{}\n", super::round_table(game, &record));
}

fn end_game(game: &Game) {
    println!("  {}", "Final Results".bold().underline());
    println!("{}\n", super::final_table(&game.summary()));
}
