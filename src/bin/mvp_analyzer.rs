// MVP Analyzer Binary Entry Point
//
// Purpose: Rank a season's players by composite MVP score and export results
// Usage: cargo run --release --bin mvp_analyzer -- --input NBA_2024_per_game.csv

use anyhow::Result;
use clap::Parser;
use mvp_scorer_rust::analysis::{position_average_composite, stat_correlations, team_average_composite};
use mvp_scorer_rust::export::{
    format_top_candidates, write_basic_candidates_csv, write_candidates_csv, write_summary_json,
    write_view_csv, write_view_json, AnalysisSummary, ViewExport,
};
use mvp_scorer_rust::query::distinct_teams;
use mvp_scorer_rust::{
    filter_records, AnalyzerConfig, MvpRanking, MvpScorer, PlayerQuery, PositionBlend,
    SeasonData, SortKey, ViewStats,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "mvp_analyzer")]
#[command(about = "Rank players by a blended MVP score", long_about = None)]
struct Cli {
    /// Per-game season CSV
    #[arg(short, long, default_value = "NBA_2024_per_game.csv")]
    input: PathBuf,

    /// Number of top candidates to show and summarize
    #[arg(short, long)]
    top: Option<usize>,

    /// Minimum games played to be ranked
    #[arg(long)]
    min_games: Option<u32>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Multi-position rule: precedence or average
    #[arg(long)]
    position_blend: Option<PositionBlend>,

    /// Write exports without printing the candidate table
    #[arg(long)]
    export_only: bool,

    #[arg(long, default_value = "mvp_candidates_enhanced.csv")]
    csv_out: PathBuf,

    #[arg(long, default_value = "mvp_analysis.json")]
    json_out: PathBuf,

    /// Rank by the Basic score only and write mvp_candidates.csv
    #[arg(long)]
    basic: bool,

    /// Player name substring (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Exact team code
    #[arg(long)]
    team: Option<String>,

    /// Player view order: score, points, assists, rebounds, steals, blocks, name
    #[arg(long)]
    sort: Option<SortKey>,

    #[arg(long)]
    ascending: bool,

    /// Export the player view as <stem>.csv and <stem>.json
    #[arg(long, num_args = 0..=1, default_missing_value = "mvp_analysis_export")]
    view_out: Option<PathBuf>,

    /// Print team, position and correlation aggregates
    #[arg(long)]
    dashboard: bool,

    /// Run the four calculators concurrently
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::load(path)?,
            None => AnalyzerConfig::default(),
        };

        if let Some(top) = self.top {
            config.top_n = top;
        }
        if let Some(min_games) = self.min_games {
            config.min_games = min_games;
        }
        if let Some(blend) = self.position_blend {
            config.position_blend = blend;
        }

        config.validate()?;
        Ok(config)
    }

    fn wants_view(&self) -> bool {
        self.search.is_some() || self.team.is_some() || self.sort.is_some() || self.ascending
    }

    fn query(&self) -> PlayerQuery {
        PlayerQuery {
            search: self.search.clone(),
            team: self.team.clone(),
            position: None,
            sort_by: self.sort.unwrap_or_default(),
            ascending: self.ascending,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mvp_scorer_rust=info,mvp_analyzer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let start = Instant::now();
    let data = SeasonData::load(&cli.input)?;
    let records = filter_records(data.rows, config.min_games);
    tracing::info!("Loaded and filtered in {:.3?}", start.elapsed());

    let scorer = MvpScorer::new(config.clone());

    if cli.basic {
        let ranked = scorer.rank_basic(records);
        write_basic_candidates_csv(&PathBuf::from("mvp_candidates.csv"), &ranked, config.top_n)?;

        if !cli.export_only {
            println!("\nTop {} MVP Candidates:", config.top_n);
            for (i, (record, score)) in ranked.iter().take(config.top_n).enumerate() {
                println!("{:2}. {:<25} {:<4} {:.2}", i + 1, record.player, record.team, score);
            }
        }
        return Ok(());
    }

    let start = Instant::now();
    let ranking = if cli.parallel {
        scorer.score_parallel(records)
    } else {
        scorer.score(records)
    };
    tracing::info!("Scored {} players in {:.3?}", ranking.len(), start.elapsed());

    write_candidates_csv(&cli.csv_out, &ranking)?;
    let summary = AnalysisSummary::from_ranking(&ranking, config.top_n);
    write_summary_json(&cli.json_out, &summary)?;

    if let Some(stem) = &cli.view_out {
        let view = cli.query().apply(&ranking);
        write_view_csv(&stem.with_extension("csv"), &view)?;
        write_view_json(&stem.with_extension("json"), &ViewExport::from_view(&view))?;
    }

    if cli.export_only {
        return Ok(());
    }

    println!();
    print!("{}", format_top_candidates(&ranking, config.top_n));

    if cli.wants_view() {
        print_view(&ranking, &cli.query(), config.top_n);
    }
    if cli.dashboard {
        print_dashboard(&ranking);
    }

    for warning in &ranking.warnings {
        println!("Warning: {}", warning);
    }

    Ok(())
}

fn print_view(ranking: &MvpRanking, query: &PlayerQuery, limit: usize) {
    let view = query.apply(ranking);
    let stats = ViewStats::from_players(&view);

    println!("\n=== PLAYER VIEW (sorted by {}) ===", query.sort_by);
    println!(
        "Players: {}  Avg MVP score: {:.1}  Top: {}",
        stats.count,
        stats.average_composite,
        stats.top_player.as_deref().unwrap_or("-")
    );
    for player in view.iter().take(limit) {
        let r = &player.record;
        println!(
            "  {:<25} {:<4} {:<6} {:6.1}  {:4.1}P {:4.1}A {:4.1}R {:3.1}S {:3.1}B",
            r.player, r.team, r.pos, player.composite, r.pts, r.ast, r.trb, r.stl, r.blk
        );
    }
    if view.len() > limit {
        println!("  ... {} more", view.len() - limit);
    }
}

fn print_dashboard(ranking: &MvpRanking) {
    println!("\n=== TEAM AVERAGES ({} teams) ===", distinct_teams(ranking).len());
    for team in team_average_composite(ranking) {
        println!("  {:<4} {:6.1}  ({} players)", team.label, team.average_composite, team.players);
    }

    println!("\n=== POSITION AVERAGES ===");
    for pos in position_average_composite(ranking) {
        println!("  {:<6} {:6.1}  ({} players)", pos.label, pos.average_composite, pos.players);
    }

    let corr = stat_correlations(ranking);
    println!("\n=== CORRELATION WITH MVP SCORE ===");
    for (label, value) in [
        ("PTS", corr.pts),
        ("AST", corr.ast),
        ("TRB", corr.trb),
        ("STL", corr.stl),
        ("BLK", corr.blk),
    ] {
        match value {
            Some(r) => println!("  {}: {:+.3}", label, r),
            None => println!("  {}: n/a", label),
        }
    }
}
