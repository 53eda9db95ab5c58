use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dg_core::{Category, History};

use crate::GameArgs;

pub fn run(
    args: &GameArgs,
    rounds: u32,
    verbose_rounds: bool,
    export: Option<&Path>,
) -> Result<(), String> {
    let mut game = super::start_game(args)?;
    for _ in 0..rounds {
        game.play_round();
    }

    let (lower, upper) = game.dice().bounds();
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({rounds} rounds, {} dice, faces {lower}-{upper}, seed={}, {} die)",
            game.dice().count(),
            game.config().seed,
            game.config().sampling
        )
        .dimmed()
    );
    println!();

    if verbose_rounds {
        println!("  {}", "Rounds".bold().underline());
        println!();
        println!("{}", rounds_table(game.history()));
        println!();
    }

    println!("  {}", "Final Results".bold().underline());
    println!();
    println!("{}", super::final_table(&game.summary()));
    println!();

    if let Some(path) = export {
        write_export(game.history(), path)?;
        println!("  Exported {} rounds to {}", game.rounds(), path.display());
    }

    Ok(())
}

fn rounds_table(history: &History) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Round", "Roll", "Sum", "Category", "Points"]);

    for record in history.rounds() {
        table.add_row(vec![
            record.round.to_string(),
            super::format_roll(&record.roll),
            record.sum.to_string(),
            colorize_category(record.category),
            record.points.to_string(),
        ]);
    }
    table
}

fn colorize_category(category: Category) -> String {
    let label = category.to_string();
    match category {
        Category::AllSame => label.green().bold().to_string(),
        Category::NMinusOne => label.green().to_string(),
        Category::Run => label.cyan().to_string(),
        Category::AllDifferent => label.normal().to_string(),
        Category::NoScore => label.dimmed().to_string(),
    }
}

fn write_export(history: &History, path: &Path) -> Result<(), String> {
    let is_markdown = path
        .extension()
        .is_some_and(|ext| ext == "md" || ext == "markdown");
    let content = if is_markdown {
        history.to_markdown()
    } else {
        history.to_json().map_err(|e| e.to_string())?
    };
    std::fs::write(path, content).map_err(|e| format!("{}: {e}", path.display()))
}
