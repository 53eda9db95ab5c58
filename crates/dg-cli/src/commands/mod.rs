pub mod play;
pub mod score;
pub mod simulate;

use comfy_table::{ContentArrangement, Table};

use dg_core::{Game, GameConfig, RoundRecord, Sampling, Summary};

use crate::GameArgs;

/// Resolve the config file and flags, then start a game.
fn start_game(args: &GameArgs) -> Result<Game, String> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.legacy_die {
        config = config.with_sampling(Sampling::Legacy);
    }

    Game::new(args.dice, config).map_err(|e| e.to_string())
}

/// Two-column table of label/value rows.
fn key_value_table(rows: &[(&str, String)]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value.clone()]);
    }
    table
}

/// Mid-game results after a round.
fn round_table(game: &Game, record: &RoundRecord) -> Table {
    key_value_table(&[
        ("Rounds Played", game.rounds().to_string()),
        ("Points Won", record.points.to_string()),
        ("Total Points", game.total_points().to_string()),
    ])
}

/// End-of-game results.
fn final_table(summary: &Summary) -> Table {
    key_value_table(&[
        ("Rounds Played", summary.rounds.to_string()),
        ("Total Points", summary.total_points.to_string()),
        ("Points Per Round", format_average(summary.average_points)),
    ])
}

fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "-".to_string(), |a| a.to_string())
}

fn format_roll(roll: &[i32]) -> String {
    let faces: Vec<String> = roll.iter().map(|v| v.to_string()).collect();
    format!("[{}]", faces.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_formatting() {
        assert_eq!(format_average(Some(33.3)), "33.3");
        assert_eq!(format_average(Some(72.0)), "72");
        assert_eq!(format_average(None), "-");
    }

    #[test]
    fn roll_formatting() {
        assert_eq!(format_roll(&[4, 4, 4]), "[4, 4, 4]");
    }

    #[test]
    fn start_game_applies_flags() {
        let args = GameArgs {
            dice: 4,
            seed: Some(9),
            legacy_die: true,
            config: None,
        };
        let game = start_game(&args).unwrap();
        assert_eq!(game.config().seed, 9);
        assert_eq!(game.config().sampling, Sampling::Legacy);
        assert_eq!(game.dice().count(), 4);
    }

    #[test]
    fn start_game_reports_bad_count() {
        let args = GameArgs {
            dice: 1,
            seed: None,
            legacy_die: false,
            config: None,
        };
        let err = start_game(&args).unwrap_err();
        assert!(err.contains("between 3 and 6"));
    }
}
