//! Text rendering of per-organisation statistics.

use super::aggregate::{GroupStats, GroupedStats};

/// Repositories listed per organisation before the rest are summarised.
pub const MAX_LISTED_REPOS: usize = 5;

const RULE: &str = "========================================";

/// Renders a summary with the busiest organisations first.
///
/// Organisations with equal counts keep their first-seen order.
#[must_use]
pub fn summary_report(stats: &GroupedStats<'_>) -> String {
    if stats.is_empty() {
        return "No notifications\n".to_owned();
    }

    let mut ordered: Vec<(&str, &GroupStats<'_>)> = stats.iter().collect();
    ordered.sort_by(|left, right| right.1.count.cmp(&left.1.count));

    let mut lines = vec![
        RULE.to_owned(),
        format!(
            "Total: {} notifications | {} organisations",
            stats.total(),
            stats.len()
        ),
        RULE.to_owned(),
    ];

    for (rank, (owner, group)) in ordered.into_iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {owner}", rank + 1));
        lines.push(format!(
            "   Count: {} (unread: {})",
            group.count, group.unread_count
        ));
        lines.push(format!("   Types: {}", type_summary(group)));
        lines.push(format!("   Repos: {}", repo_summary(group)));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn type_summary(group: &GroupStats<'_>) -> String {
    group
        .type_counts
        .iter()
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn repo_summary(group: &GroupStats<'_>) -> String {
    let listed = group
        .repos
        .iter()
        .take(MAX_LISTED_REPOS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let hidden = group.repos.len().saturating_sub(MAX_LISTED_REPOS);
    if hidden == 0 {
        listed
    } else {
        format!("{listed} ... (+{hidden})")
    }
}
