//! Human-readable rendering of leaderboards and player stats.

use orient_board::{entry_rank_change, entry_score, LeaderboardView};
use orient_core::types::{LeaderboardEntry, SortField, WeightedStats};
use orient_score::{stats_score, ScoreEngine};

const SEGMENT_SEPARATOR: &str = "   ...";

fn speed_cell(speed_ms: u32) -> String {
    if speed_ms == 0 {
        "-".to_string()
    } else {
        format!("{speed_ms} ms")
    }
}

fn write_row(out: &mut String, entry: &LeaderboardEntry, field: SortField) {
    let player = &entry.player;
    let score = entry_score(player, &ScoreEngine);
    out.push_str(&format!(
        "{:>4}  {:<24} {:>4}%  {:>9}  {:>9.3}  {:>4}\n",
        entry.rank,
        player.display_name,
        player.accuracy_percent,
        speed_cell(player.speed_ms),
        score,
        entry_rank_change(entry, field).to_string(),
    ));
}

/// Render a leaderboard view as a fixed-width table.
pub fn render_view(view: &LeaderboardView, field: SortField) -> String {
    let mut out = format!(
        "{:>4}  {:<24} {:>5}  {:>9}  {:>9}  {:>4}\n",
        "rank", "player", "acc", "speed", "score", "move"
    );

    match view {
        LeaderboardView::Full { ranked } => {
            for entry in ranked {
                write_row(&mut out, entry, field);
            }
        }
        LeaderboardView::Windowed { top, user_window } => {
            for entry in top {
                write_row(&mut out, entry, field);
            }
            if let Some(window) = user_window {
                out.push_str(SEGMENT_SEPARATOR);
                out.push('\n');
                for entry in window {
                    write_row(&mut out, entry, field);
                }
            }
        }
    }

    if view.is_empty() {
        out.push_str("(no qualified players)\n");
    }
    out
}

/// Render one player's weighted stats.
pub fn render_stats(user_id: &str, stats: &WeightedStats) -> String {
    if !stats.is_qualified() {
        return format!("{user_id}: no attempts in the last 120 days\n");
    }
    format!(
        "{user_id}\n  accuracy:  {}%\n  speed:     {}\n  score:     {:.3}\n  weight:    {:.2} ({:.2} correct)\n",
        stats.accuracy_percent,
        speed_cell(stats.speed_ms),
        stats_score(stats),
        stats.effective_total,
        stats.effective_correct,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use orient_core::types::{PlayerEntry, SortDirection};

    fn entry(rank: u32, name: &str, previous_rank: Option<u32>) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            player: PlayerEntry {
                user_id: name.to_lowercase(),
                display_name: name.to_string(),
                accuracy_percent: 50,
                speed_ms: 1000,
                previous_rank,
                profile_image_ref: None,
            },
        }
    }

    #[test]
    fn full_view_lists_every_row() {
        let view = LeaderboardView::Full {
            ranked: vec![entry(1, "Ada", Some(3)), entry(2, "Bo", None)],
        };
        let text = render_view(&view, SortField::Combined);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Ada"));
        assert!(text.contains("1.000"));
        assert!(text.contains("+2"));
        assert!(!text.contains(SEGMENT_SEPARATOR));
    }

    #[test]
    fn windowed_view_has_separator() {
        let view = LeaderboardView::Windowed {
            top: vec![entry(1, "Ada", None)],
            user_window: Some(vec![entry(14, "Me", None)]),
        };
        let text = render_view(&view, SortField::Accuracy);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], SEGMENT_SEPARATOR);
        assert!(lines[3].contains("Me"));
    }

    #[test]
    fn reversed_windowed_view_keeps_top_segment_first() {
        let view = LeaderboardView::Windowed {
            top: vec![entry(1, "Ada", None), entry(2, "Bo", None)],
            user_window: Some(vec![entry(14, "Me", None), entry(15, "Cy", None)]),
        }
        .in_direction(SortField::Accuracy, SortDirection::Asc);
        let lines: Vec<String> = render_view(&view, SortField::Accuracy).lines().map(str::to_string).collect();
        assert!(lines[1].contains("Bo"));
        assert!(lines[2].contains("Ada"));
        assert_eq!(lines[3], SEGMENT_SEPARATOR);
        assert!(lines[4].contains("Cy"));
        assert!(lines[5].contains("Me"));
    }

    #[test]
    fn empty_view_says_so() {
        let view = LeaderboardView::Full { ranked: Vec::new() };
        assert!(render_view(&view, SortField::Combined).contains("no qualified players"));
    }

    #[test]
    fn missing_speed_is_a_dash() {
        assert_eq!(speed_cell(0), "-");
        assert_eq!(speed_cell(812), "812 ms");
    }

    #[test]
    fn stats_for_unqualified_player() {
        let text = render_stats("u1", &WeightedStats::ZERO);
        assert!(text.contains("no attempts"));
    }

    #[test]
    fn stats_for_qualified_player() {
        let stats = WeightedStats {
            accuracy_percent: 50,
            speed_ms: 1000,
            effective_total: 2.0,
            effective_correct: 1.0,
        };
        let text = render_stats("u1", &stats);
        assert!(text.contains("accuracy:  50%"));
        assert!(text.contains("score:     1.000"));
    }
}
