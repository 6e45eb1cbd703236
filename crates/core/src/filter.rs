//! Filter state and the values derived from it

use crate::data::{IssueRecord, SeverityTier};
use serde::Serialize;

/// The single piece of interactive state: which tier is shown, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    selected: Option<SeverityTier>,
}

impl FilterState {
    /// Unfiltered state, as on mount
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<SeverityTier> {
        self.selected
    }

    pub fn is_active(&self, tier: SeverityTier) -> bool {
        self.selected == Some(tier)
    }

    /// Select `tier`, or clear the filter if `tier` is already selected
    pub fn toggle(&mut self, tier: SeverityTier) {
        self.selected = toggle_filter(self.selected, tier);
    }
}

/// Pure form of [`FilterState::toggle`], usable directly on a signal's value
pub fn toggle_filter(current: Option<SeverityTier>, tier: SeverityTier) -> Option<SeverityTier> {
    if current == Some(tier) {
        None
    } else {
        Some(tier)
    }
}

/// Largest `mentions` over the whole dataset, 0 when empty
pub fn max_mentions(issues: &[IssueRecord]) -> u32 {
    issues.iter().map(|i| i.mentions).max().unwrap_or(0)
}

/// Records matching `filter`, in dataset order. `None` keeps everything.
pub fn filtered_issues(issues: &[IssueRecord], filter: Option<SeverityTier>) -> Vec<&IssueRecord> {
    issues
        .iter()
        .filter(|issue| filter.map_or(true, |tier| issue.severity == tier))
        .collect()
}

/// Filter by raw tier key. Only exact key matches are kept, so an unknown
/// key yields an empty list.
pub fn filtered_issues_by_key<'a>(issues: &'a [IssueRecord], key: &str) -> Vec<&'a IssueRecord> {
    issues
        .iter()
        .filter(|issue| issue.severity.as_str() == key)
        .collect()
}

/// Bar width in whole percent: round(100 * mentions / max). A zero max gives 0.
pub fn bar_width_percent(mentions: u32, max_mentions: u32) -> u32 {
    if max_mentions == 0 {
        return 0;
    }
    (100.0 * f64::from(mentions) / f64::from(max_mentions)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ISSUES;

    fn ids(issues: &[&IssueRecord]) -> Vec<&'static str> {
        issues.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_filter_keeps_only_matching_tier_in_order() {
        for tier in SeverityTier::ALL {
            let filtered = filtered_issues(ISSUES, Some(tier));
            assert!(filtered.iter().all(|i| i.severity == tier));

            let expected: Vec<_> = ISSUES.iter().filter(|i| i.severity == tier).map(|i| i.id).collect();
            assert_eq!(ids(&filtered), expected);
        }
    }

    #[test]
    fn test_unfiltered_returns_whole_dataset() {
        assert_eq!(filtered_issues(ISSUES, None).len(), 10);
    }

    #[test]
    fn test_sev1_and_sev4_scenarios() {
        assert_eq!(
            ids(&filtered_issues(ISSUES, Some(SeverityTier::Sev1))),
            vec!["auth", "crash", "barcode"]
        );
        assert_eq!(
            ids(&filtered_issues(ISSUES, Some(SeverityTier::Sev4))),
            vec!["workarounds"]
        );
    }

    #[test]
    fn test_toggle_twice_returns_to_unfiltered() {
        for tier in SeverityTier::ALL {
            let mut state = FilterState::new();
            state.toggle(tier);
            assert_eq!(state.selected(), Some(tier));
            state.toggle(tier);
            assert_eq!(state, FilterState::new());
        }
    }

    #[test]
    fn test_toggle_other_tier_switches_selection() {
        let mut state = FilterState::new();
        state.toggle(SeverityTier::Sev1);
        state.toggle(SeverityTier::Sev3);
        assert!(state.is_active(SeverityTier::Sev3));
        assert!(!state.is_active(SeverityTier::Sev1));
    }

    #[test]
    fn test_max_mentions_uses_full_dataset() {
        assert_eq!(max_mentions(ISSUES), 150);
        assert_eq!(max_mentions(&[]), 0);
    }

    #[test]
    fn test_bar_width_normalization() {
        assert_eq!(bar_width_percent(150, 150), 100);
        assert_eq!(bar_width_percent(15, 150), 10);
        assert_eq!(bar_width_percent(0, 150), 0);
        // 1/3 rounds down, 2/3 rounds up
        assert_eq!(bar_width_percent(50, 150), 33);
        assert_eq!(bar_width_percent(100, 150), 67);
    }

    #[test]
    fn test_bar_width_guards_zero_max() {
        assert_eq!(bar_width_percent(0, 0), 0);
        assert_eq!(bar_width_percent(5, 0), 0);
    }

    #[test]
    fn test_unknown_key_yields_empty_list() {
        assert!(filtered_issues_by_key(ISSUES, "sev-9").is_empty());
        assert!(filtered_issues_by_key(ISSUES, "").is_empty());
        assert_eq!(filtered_issues_by_key(ISSUES, "sev-2").len(), 4);
    }
}
