//! Renderer-neutral view model
//!
//! Everything a front end needs to draw the dashboard, derived from the
//! dataset and the current filter. The Dioxus dashboard and the terminal
//! summary both render from these rows.

use crate::data::{Hero, IssueRecord, SeverityTier, FOOTER, HERO};
use crate::filter::{bar_width_percent, filtered_issues, max_mentions};
use serde::Serialize;

/// One filter-bar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub tier: SeverityTier,
    pub label: &'static str,
    pub active: bool,
}

/// One row of the bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarRow {
    pub id: &'static str,
    pub title: &'static str,
    pub tier: SeverityTier,
    pub width_percent: u32,
}

/// One row of the data table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: &'static str,
    pub title: &'static str,
    pub severity_name: &'static str,
    pub mentions: u32,
    pub prevalence: &'static str,
}

/// Complete derived state for one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView<'a> {
    pub hero: Hero,
    pub filter: Option<SeverityTier>,
    pub max_mentions: u32,
    pub issues: Vec<&'a IssueRecord>,
    pub footer: &'static str,
}

impl<'a> DashboardView<'a> {
    /// Derive the view for `filter` over `dataset`
    pub fn new(dataset: &'a [IssueRecord], filter: Option<SeverityTier>) -> Self {
        Self::from_filtered(dataset, filter, filtered_issues(dataset, filter))
    }

    /// Build from an already filtered subset. `max_mentions` is still taken
    /// over the whole dataset.
    pub fn from_filtered(
        dataset: &'a [IssueRecord],
        filter: Option<SeverityTier>,
        issues: Vec<&'a IssueRecord>,
    ) -> Self {
        Self {
            hero: HERO,
            filter,
            max_mentions: max_mentions(dataset),
            issues,
            footer: FOOTER,
        }
    }

    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        filter_buttons(self.filter)
    }

    pub fn bar_rows(&self) -> Vec<BarRow> {
        self.issues
            .iter()
            .map(|issue| bar_row(issue, self.max_mentions))
            .collect()
    }

    /// Cards carry the full record
    pub fn cards(&self) -> &[&'a IssueRecord] {
        &self.issues
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        self.issues.iter().map(|issue| table_row(issue)).collect()
    }
}

/// Buttons in tier order, marking the selected one active
pub fn filter_buttons(filter: Option<SeverityTier>) -> Vec<FilterButton> {
    SeverityTier::ALL
        .into_iter()
        .map(|tier| FilterButton {
            tier,
            label: tier.display_name(),
            active: filter == Some(tier),
        })
        .collect()
}

pub fn bar_row(issue: &IssueRecord, max_mentions: u32) -> BarRow {
    BarRow {
        id: issue.id,
        title: issue.title,
        tier: issue.severity,
        width_percent: bar_width_percent(issue.mentions, max_mentions),
    }
}

pub fn table_row(issue: &IssueRecord) -> TableRow {
    TableRow {
        id: issue.id,
        title: issue.title,
        severity_name: issue.severity.display_name(),
        mentions: issue.mentions,
        prevalence: issue.prevalence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ISSUES;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unfiltered_view_renders_every_record() {
        let view = DashboardView::new(ISSUES, None);
        assert_eq!(view.bar_rows().len(), 10);
        assert_eq!(view.cards().len(), 10);
        assert_eq!(view.table_rows().len(), 10);
        assert!(view.filter_buttons().iter().all(|b| !b.active));
    }

    #[test]
    fn test_unfiltered_bar_widths() {
        let view = DashboardView::new(ISSUES, None);
        let rows = view.bar_rows();
        let auth = rows.iter().find(|r| r.id == "auth").unwrap();
        let workarounds = rows.iter().find(|r| r.id == "workarounds").unwrap();
        assert_eq!(auth.width_percent, 100);
        assert_eq!(workarounds.width_percent, 10);
    }

    #[test]
    fn test_max_mentions_unchanged_by_filter() {
        for tier in SeverityTier::ALL {
            assert_eq!(DashboardView::new(ISSUES, Some(tier)).max_mentions, 150);
        }
        // sev-4 only holds workarounds, which still scales against auth
        let view = DashboardView::new(ISSUES, Some(SeverityTier::Sev4));
        assert_eq!(view.bar_rows()[0].width_percent, 10);
    }

    #[test]
    fn test_sev2_toggle_scenario() {
        let mut filter = None;
        filter = crate::filter::toggle_filter(filter, SeverityTier::Sev2);
        let view = DashboardView::new(ISSUES, filter);
        let ids: Vec<_> = view.table_rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["offers", "biometrics", "connectivity", "points"]);
        assert_eq!(view.bar_rows().len(), 4);

        let active: Vec<_> = view
            .filter_buttons()
            .into_iter()
            .filter(|b| b.active)
            .map(|b| b.tier)
            .collect();
        assert_eq!(active, vec![SeverityTier::Sev2]);

        filter = crate::filter::toggle_filter(filter, SeverityTier::Sev2);
        assert_eq!(DashboardView::new(ISSUES, filter).bar_rows().len(), 10);
    }

    #[test]
    fn test_table_row_uses_display_name() {
        let row = table_row(&ISSUES[0]);
        assert_eq!(
            row,
            TableRow {
                id: "auth",
                title: "Login & authentication failures",
                severity_name: "Critical",
                mentions: 150,
                prevalence: "18%",
            }
        );
    }

    #[test]
    fn test_empty_dataset_view_is_empty_not_a_panic() {
        let view = DashboardView::new(&[], None);
        assert_eq!(view.max_mentions, 0);
        assert!(view.bar_rows().is_empty());
        assert_eq!(view.filter_buttons().len(), 4);
    }

    #[test]
    fn test_hero_is_static() {
        let view = DashboardView::new(ISSUES, Some(SeverityTier::Sev4));
        assert_eq!(view.hero, HERO);
        assert_eq!(view.footer, FOOTER);
    }
}
