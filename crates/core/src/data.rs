//! The issue dataset and its severity tiers
//!
//! The dataset is authored once and never mutated; every view over it is a
//! projection computed from `&'static [IssueRecord]`.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Severity tier, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SeverityTier {
    #[serde(rename = "sev-1")]
    Sev1,
    #[serde(rename = "sev-2")]
    Sev2,
    #[serde(rename = "sev-3")]
    Sev3,
    #[serde(rename = "sev-4")]
    Sev4,
}

impl SeverityTier {
    /// All tiers in filter-bar order
    pub const ALL: [SeverityTier; 4] = [Self::Sev1, Self::Sev2, Self::Sev3, Self::Sev4];

    /// Stable key, also used as the style variable suffix
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sev1 => "sev-1",
            Self::Sev2 => "sev-2",
            Self::Sev3 => "sev-3",
            Self::Sev4 => "sev-4",
        }
    }

    /// Human-readable name shown on filter buttons and in the table
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Sev1 => "Critical",
            Self::Sev2 => "Major",
            Self::Sev3 => "Moderate",
            Self::Sev4 => "Downstream",
        }
    }

    /// CSS custom property holding this tier's color. Defined by the host page.
    pub fn css_var(self) -> &'static str {
        match self {
            Self::Sev1 => "var(--sev-1)",
            Self::Sev2 => "var(--sev-2)",
            Self::Sev3 => "var(--sev-3)",
            Self::Sev4 => "var(--sev-4)",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| Error::UnknownSeverity(s.to_string()))
    }
}

/// A single user-reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    /// Short unique identifier, used as a render key
    pub id: &'static str,
    /// Human-readable issue name
    pub title: &'static str,
    /// Severity tier
    pub severity: SeverityTier,
    /// Free-text impact class of the tier
    pub severity_label: &'static str,
    /// How often the issue was raised. Only used for relative bar widths.
    pub mentions: u32,
    /// Pre-formatted share of all reviews (e.g. "18%"). Authored, not derived.
    pub prevalence: &'static str,
    /// Representative user quotation
    pub quote: &'static str,
}

/// One of the hero section's highlighted facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroFact {
    pub label: &'static str,
    pub value: &'static str,
    /// Record the fact is written about; only consulted by dataset validation
    pub issue_id: &'static str,
}

/// Static hero copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub heading: &'static str,
    pub summary: &'static str,
    pub most_mentioned: HeroFact,
    pub top_blocker: HeroFact,
}

pub const HERO: Hero = Hero {
    heading: "What's breaking the rewards app",
    summary: "Ten recurring problems pulled from app store reviews and support tickets. \
              Three of them stop members from earning or redeeming at all.",
    most_mentioned: HeroFact {
        label: "Most mentioned issue",
        value: "Login & authentication failures (150 mentions)",
        issue_id: "auth",
    },
    top_blocker: HeroFact {
        label: "Top critical blocker",
        value: "Loyalty barcode won't scan at the till",
        issue_id: "barcode",
    },
};

pub const FOOTER: &str =
    "Source: public app store reviews and support tickets, aggregated and paraphrased by the product research team.";

/// The full dataset, in display order
pub static ISSUES: &[IssueRecord] = &[
    IssueRecord {
        id: "auth",
        title: "Login & authentication failures",
        severity: SeverityTier::Sev1,
        severity_label: "Blocker: cannot access account",
        mentions: 150,
        prevalence: "18%",
        quote: "It logs me out every single time and then says my password is wrong.",
    },
    IssueRecord {
        id: "crash",
        title: "App crashes on launch or checkout",
        severity: SeverityTier::Sev1,
        severity_label: "Blocker: app unusable",
        mentions: 120,
        prevalence: "14%",
        quote: "Opens, shows the logo, closes. Every time I'm at the counter.",
    },
    IssueRecord {
        id: "barcode",
        title: "Loyalty barcode won't scan",
        severity: SeverityTier::Sev1,
        severity_label: "Blocker: cannot earn in store",
        mentions: 95,
        prevalence: "11%",
        quote: "The cashier tried three times and gave up. No points for me.",
    },
    IssueRecord {
        id: "offers",
        title: "Offers not loading or not applying",
        severity: SeverityTier::Sev2,
        severity_label: "Major: core value missing",
        mentions: 110,
        prevalence: "13%",
        quote: "I clipped the coupon and it still charged me full price.",
    },
    IssueRecord {
        id: "biometrics",
        title: "Face ID / fingerprint login broken",
        severity: SeverityTier::Sev2,
        severity_label: "Major: sign-in friction",
        mentions: 70,
        prevalence: "8%",
        quote: "Face ID worked for a year and now it asks for my password every time.",
    },
    IssueRecord {
        id: "connectivity",
        title: "Fails on weak in-store signal",
        severity: SeverityTier::Sev2,
        severity_label: "Major: unusable where needed",
        mentions: 65,
        prevalence: "8%",
        quote: "There's no signal inside the store, so the card never loads.",
    },
    IssueRecord {
        id: "points",
        title: "Points missing or delayed",
        severity: SeverityTier::Sev2,
        severity_label: "Major: trust in rewards",
        mentions: 90,
        prevalence: "11%",
        quote: "Two weeks later and my points from that shop still aren't there.",
    },
    IssueRecord {
        id: "updates",
        title: "Forced updates and re-login",
        severity: SeverityTier::Sev3,
        severity_label: "Moderate: recurring friction",
        mentions: 45,
        prevalence: "5%",
        quote: "Every update logs me out and I have to find my password again.",
    },
    IssueRecord {
        id: "navigation",
        title: "Cluttered navigation",
        severity: SeverityTier::Sev3,
        severity_label: "Moderate: hard to find the card",
        mentions: 40,
        prevalence: "5%",
        quote: "Three menus deep just to show my card. It should be the home screen.",
    },
    IssueRecord {
        id: "workarounds",
        title: "Members relying on workarounds",
        severity: SeverityTier::Sev4,
        severity_label: "Downstream: eroding trust",
        mentions: 15,
        prevalence: "2%",
        quote: "I just keep a screenshot of the barcode now because the app is useless.",
    },
];

/// Serialize a dataset to JSON
pub fn dataset_json(issues: &[IssueRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(issues)?
    } else {
        serde_json::to_string(issues)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_cardinality_and_unique_ids() {
        assert_eq!(ISSUES.len(), 10);
        let ids: HashSet<_> = ISSUES.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), ISSUES.len());
    }

    #[test]
    fn test_tier_round_trip_through_str() {
        for tier in SeverityTier::ALL {
            assert_eq!(tier.as_str().parse::<SeverityTier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let err = "sev-9".parse::<SeverityTier>().unwrap_err();
        assert!(matches!(err, Error::UnknownSeverity(ref s) if s == "sev-9"));
    }

    #[test]
    fn test_tiers_are_ordered_most_severe_first() {
        assert!(SeverityTier::Sev1 < SeverityTier::Sev4);
        assert_eq!(SeverityTier::ALL[0], SeverityTier::Sev1);
    }

    #[test]
    fn test_record_serializes_tier_key() {
        let json = serde_json::to_value(ISSUES[0]).unwrap();
        assert_eq!(json["severity"], "sev-1");
        assert_eq!(json["mentions"], 150);
    }

    #[test]
    fn test_dataset_json_keeps_order() {
        let json = dataset_json(ISSUES, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let ids: Vec<_> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids.first().map(String::as_str), Some("auth"));
        assert_eq!(ids.last().map(String::as_str), Some("workarounds"));
        assert!(!json.contains('\n'));
        assert!(dataset_json(ISSUES, true).unwrap().contains('\n'));
    }
}
