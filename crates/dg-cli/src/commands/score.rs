use colored::Colorize;

use dg_core::scoring;

pub fn run(faces: &[i32]) -> Result<(), String> {
    let sum = scoring::roll_sum(faces);
    let score = scoring::score(faces, sum);

    println!("  {} = {sum}", super::format_roll(faces));
    println!(
        "  {}: {} points",
        score.category.to_string().bold(),
        score.points
    );
    Ok(())
}
