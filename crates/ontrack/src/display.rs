//! Plain-text rendering of snapshots for the terminal.

use ontrack_core::geometry::{DeviationColor, DisplaySnapshot};
use ontrack_core::refresh::{CycleOutcome, Timeline};
use ontrack_core::stats::BudgetStat;

const BAR_WIDTH: usize = 30;

/// Horizontal stand-in for the ring: `=` spent, `+`/`!` deviation, `.` remaining.
///
/// Cells are sampled at their midpoints. Fractions outside `[0, 1]` are
/// simply not visible on the bar.
pub fn progress_bar(snapshot: &DisplaySnapshot, width: usize) -> String {
    let deviation_mark = match snapshot.deviation_color {
        DeviationColor::Positive => '+',
        DeviationColor::Negative => '!',
    };
    let deviation_end = snapshot.deviation_arc_start + snapshot.deviation_fraction;

    (0..width)
        .map(|i| {
            let at = (i as f64 + 0.5) / width as f64;
            if at >= snapshot.deviation_arc_start && at < deviation_end {
                deviation_mark
            } else if at < snapshot.spent_fraction {
                '='
            } else {
                '.'
            }
        })
        .collect()
}

pub fn format_snapshot(snapshot: &DisplaySnapshot) -> String {
    let pace = match snapshot.deviation_color {
        DeviationColor::Positive => "ahead",
        DeviationColor::Negative => "behind",
    };

    format!(
        "{}  {}\n[{}]\nspent {:.1}%  deviation {:.1}% ({})\n{}",
        snapshot.total_balance_label,
        snapshot.deviation_label,
        progress_bar(snapshot, BAR_WIDTH),
        snapshot.spent_fraction * 100.0,
        snapshot.deviation_fraction * 100.0,
        pace,
        snapshot.days_left_caption()
    )
}

pub fn format_timeline(timeline: &Timeline) -> String {
    let mut out = String::new();
    if let Some(entry) = timeline.current() {
        out.push_str(&format_snapshot(&entry.snapshot));
        if entry.outcome == CycleOutcome::RenderedWithFallback {
            out.push_str("\n(no data)");
        }
        out.push_str(&format!(
            "\nupdated {}",
            entry.date.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    out.push_str(&format!(
        "\nnext refresh after {}",
        timeline.next_eligible().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out
}

pub fn format_stat(stat: &BudgetStat) -> String {
    let rows = [
        ("budget_amount", stat.budget_amount.to_string()),
        ("budget_started_at", stat.budget_started_at.to_string()),
        ("budget_expires_at", stat.budget_expires_at.to_string()),
        (
            "budget_days_to_expiration",
            stat.budget_days_to_expiration.to_string(),
        ),
        ("account_balance", stat.account_balance.to_string()),
        ("cash_balance", stat.cash_balance.to_string()),
        ("total_balance", stat.total_balance.to_string()),
        ("estimated_balance", stat.estimated_balance.to_string()),
        ("balance_deviation", stat.balance_deviation.to_string()),
    ];

    rows.iter()
        .map(|(name, value)| format!("{:<27} {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}
