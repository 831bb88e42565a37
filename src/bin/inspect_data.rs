use clap::Parser;
use mvp_scorer_rust::{SeasonData, DEFAULT_MIN_GAMES};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inspect_data")]
#[command(about = "Show what the loader sees in a season CSV", long_about = None)]
struct Args {
    #[arg(default_value = "NBA_2024_per_game.csv")]
    input: PathBuf,

    #[arg(long, default_value_t = DEFAULT_MIN_GAMES)]
    min_games: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let args = Args::parse();
    let data = SeasonData::load(&args.input)?;

    println!("\n=== INSPECTING {} ===\n", args.input.display());
    println!("Rows: {}", data.rows.len());
    println!("Recognized columns ({}): {}", data.recognized_columns.len(), data.recognized_columns.join(", "));
    if data.dropped_columns.is_empty() {
        println!("Dropped columns: none");
    } else {
        println!("Dropped columns ({}): {}", data.dropped_columns.len(), data.dropped_columns.join(", "));
    }

    let missing_games = data.rows.iter().filter(|r| r.games.is_none()).count();
    println!("Rows without a games value: {}", missing_games);
    println!(
        "Rows with {}+ games: {}",
        args.min_games,
        data.eligible_rows(args.min_games)
    );

    // Show a few rows the way the filter will see them
    println!("\nFirst rows:");
    for row in data.rows.iter().take(5) {
        println!(
            "  {:<25} {:<4} {:<6} G={:?} PTS={:?}",
            row.player.as_deref().unwrap_or("?"),
            row.team.as_deref().unwrap_or("?"),
            row.pos.as_deref().unwrap_or("?"),
            row.games,
            row.pts
        );
    }

    Ok(())
}
