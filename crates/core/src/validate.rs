//! Dataset validation
//!
//! Hard failures make the dataset unusable for display. Notices flag
//! editorial drift, such as hero copy that no longer matches the numbers,
//! without changing what is rendered.

use crate::data::{Hero, HeroFact, IssueRecord};
use crate::error::{Error, Result};
use crate::filter::max_mentions;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

const PREVALENCE_PATTERN: &str = r"^\d+(\.\d+)?%$";

/// Advisory finding from [`validate_dataset`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// A hero fact refers to an id not present in the dataset
    MissingHeroRecord { label: String, issue_id: String },
    /// The "most mentioned" fact does not name the top record by mentions
    StaleMostMentioned { stated: String, actual: Vec<String> },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MissingHeroRecord { label, issue_id } => {
                write!(f, "{label}: refers to '{issue_id}', which is not in the dataset")
            }
            Notice::StaleMostMentioned { stated, actual } => write!(
                f,
                "Most mentioned issue states '{stated}' but the highest count belongs to {}",
                actual.join(", ")
            ),
        }
    }
}

/// Check the dataset and hero copy.
///
/// Returns the first hard error (empty dataset, duplicate id, malformed
/// prevalence), otherwise the list of notices.
pub fn validate_dataset(issues: &[IssueRecord], hero: &Hero) -> Result<Vec<Notice>> {
    if issues.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut seen = HashSet::new();
    for issue in issues {
        if !seen.insert(issue.id) {
            return Err(Error::DuplicateId(issue.id.to_string()));
        }
    }

    let prevalence = Regex::new(PREVALENCE_PATTERN)?;
    if let Some(bad) = issues.iter().find(|i| !prevalence.is_match(i.prevalence)) {
        return Err(Error::InvalidPrevalence {
            id: bad.id.to_string(),
            value: bad.prevalence.to_string(),
        });
    }

    let mut notices = Vec::new();
    for fact in [&hero.most_mentioned, &hero.top_blocker] {
        if !seen.contains(fact.issue_id) {
            notices.push(missing(fact));
        }
    }

    let max = max_mentions(issues);
    let top: Vec<String> = issues
        .iter()
        .filter(|i| i.mentions == max)
        .map(|i| i.id.to_string())
        .collect();
    if seen.contains(hero.most_mentioned.issue_id)
        && !top.iter().any(|id| id == hero.most_mentioned.issue_id)
    {
        notices.push(Notice::StaleMostMentioned {
            stated: hero.most_mentioned.issue_id.to_string(),
            actual: top,
        });
    }

    Ok(notices)
}

fn missing(fact: &HeroFact) -> Notice {
    Notice::MissingHeroRecord {
        label: fact.label.to_string(),
        issue_id: fact.issue_id.to_string(),
    }
}
