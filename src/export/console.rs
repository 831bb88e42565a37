use crate::scorer::MvpRanking;

/// Render the top `n` candidates as a fixed-width text table
pub fn format_top_candidates(ranking: &MvpRanking, n: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("TOP {} MVP CANDIDATES (Composite Score)\n", n));
    out.push_str(&format!("{}\n", "=".repeat(80)));

    for (i, player) in ranking.top(n).iter().enumerate() {
        let r = &player.record;
        out.push_str(&format!(
            "{:2}. {:<25} {:<4} Score: {:6.1} ({:4.0}P {:3.0}A {:3.0}R)\n",
            i + 1,
            r.player,
            r.team,
            player.composite,
            r.pts,
            r.ast,
            r.trb
        ));
    }

    out
}
