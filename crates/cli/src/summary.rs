//! Plain-text rendering of the dashboard

use issue_infographic_core::DashboardView;
use std::fmt::Write;

/// Number of cells a 100% bar occupies
pub const BAR_CELLS: u32 = 40;

/// Render every dashboard section as text, in on-screen order
pub fn render_summary(view: &DashboardView<'_>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_summary(&mut out, view);
    out
}

fn write_summary(out: &mut String, view: &DashboardView<'_>) -> std::fmt::Result {
    let hero = &view.hero;
    writeln!(out, "# {}\n", hero.heading)?;
    writeln!(out, "{}\n", hero.summary)?;
    writeln!(out, "  {}: {}", hero.most_mentioned.label, hero.most_mentioned.value)?;
    writeln!(out, "  {}: {}\n", hero.top_blocker.label, hero.top_blocker.value)?;

    let buttons: Vec<String> = view
        .filter_buttons()
        .iter()
        .map(|b| {
            if b.active {
                format!("[*{}*]", b.label)
            } else {
                format!("[{}]", b.label)
            }
        })
        .collect();
    writeln!(out, "Filter: {}\n", buttons.join(" "))?;

    if view.issues.is_empty() {
        writeln!(out, "No issues reported in this tier.\n")?;
    }

    writeln!(out, "## Mentions\n")?;
    let label_width = view.issues.iter().map(|i| i.title.len()).max().unwrap_or(0);
    for row in view.bar_rows() {
        writeln!(
            out,
            "  {:<label_width$}  {:<cells$}  {:>3}%",
            row.title,
            bar(row.width_percent),
            row.width_percent,
            cells = BAR_CELLS as usize,
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## What members are saying\n")?;
    for issue in view.cards() {
        writeln!(out, "### {} ({})", issue.title, issue.severity_label)?;
        writeln!(out, "{} mentions · {} of reviews", issue.mentions, issue.prevalence)?;
        writeln!(out, "> {}\n", issue.quote)?;
    }

    writeln!(out, "## All issues\n")?;
    writeln!(out, "| Issue | Severity | Mentions | Prevalence |")?;
    writeln!(out, "|-------|----------|----------|------------|")?;
    for row in view.table_rows() {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            row.title, row.severity_name, row.mentions, row.prevalence
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", view.footer)
}

fn bar(width_percent: u32) -> String {
    let cells = (width_percent.min(100) * BAR_CELLS + 50) / 100;
    "█".repeat(cells as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use issue_infographic_core::{filtered_issues_by_key, SeverityTier, ISSUES};

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar(100).chars().count(), BAR_CELLS as usize);
        assert_eq!(bar(10).chars().count(), 4);
        assert_eq!(bar(0), "");
    }

    #[test]
    fn test_unfiltered_summary_lists_everything() {
        let text = render_summary(&DashboardView::new(ISSUES, None));
        assert!(text.contains("Most mentioned issue: Login & authentication failures"));
        assert!(text.contains("Filter: [Critical] [Major] [Moderate] [Downstream]"));
        for issue in ISSUES {
            assert!(text.contains(issue.quote), "missing card for {}", issue.id);
        }
        assert_eq!(text.matches("| Critical |").count(), 3);
        assert!(text.contains(" 100%"));
        assert!(text.contains("  10%"));
    }

    #[test]
    fn test_filtered_summary_marks_active_button() {
        let text = render_summary(&DashboardView::new(ISSUES, Some(SeverityTier::Sev4)));
        assert!(text.contains("[*Downstream*]"));
        assert!(text.contains("Members relying on workarounds"));
        assert!(!text.contains("Login & authentication failures |"));
    }

    #[test]
    fn test_unknown_key_renders_empty_sections() {
        let view = DashboardView::from_filtered(ISSUES, None, filtered_issues_by_key(ISSUES, "sev-9"));
        let text = render_summary(&view);
        assert!(text.contains("No issues reported in this tier."));
        assert!(!text.contains("| Critical |"));
    }
}
