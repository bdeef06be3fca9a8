use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Item, Trip};

/// Structured result from `trip check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A dataset error. A trip with any of these is refused at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// The same item id appears more than once
    #[serde(rename = "duplicate_id")]
    DuplicateId {
        item_id: String,
        /// Day label for every occurrence, in dataset order
        day_labels: Vec<String>,
    },
    /// An item has an empty id
    #[serde(rename = "empty_id")]
    EmptyId { day_label: String, title: String },
}

/// A non-critical dataset issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    #[serde(rename = "empty_day")]
    EmptyDay { day_label: String },
    #[serde(rename = "blank_title")]
    BlankTitle { item_id: String },
    /// A link entry with no URL to open
    #[serde(rename = "empty_link")]
    EmptyLink { item_id: String, label: String },
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::DuplicateId {
                item_id,
                day_labels,
            } => write!(
                f,
                "duplicate item id {} (in {})",
                item_id,
                day_labels.join(", ")
            ),
            CheckError::EmptyId { day_label, title } => {
                write!(f, "item \"{}\" in {} has no id", title, day_label)
            }
        }
    }
}

impl std::fmt::Display for CheckWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckWarning::EmptyDay { day_label } => write!(f, "{} has no items", day_label),
            CheckWarning::BlankTitle { item_id } => write!(f, "{} has a blank title", item_id),
            CheckWarning::EmptyLink { item_id, label } => {
                write!(f, "{}: link \"{}\" has no url", item_id, label)
            }
        }
    }
}

/// Validate a trip dataset. Read-only.
///
/// Errors: duplicate or empty item ids.
/// Warnings: days without items, blank titles, links without a URL.
pub fn check_trip(trip: &Trip) -> CheckResult {
    let mut result = CheckResult::default();

    for (item_id, day_labels) in find_duplicate_ids(trip) {
        result.errors.push(CheckError::DuplicateId {
            item_id,
            day_labels,
        });
    }

    for day in &trip.days {
        if day.items.is_empty() {
            result.warnings.push(CheckWarning::EmptyDay {
                day_label: day.day_label.clone(),
            });
        }
        for item in &day.items {
            check_item(item, &day.day_label, &mut result);
        }
    }

    result.valid = result.errors.is_empty();
    result
}

fn check_item(item: &Item, day_label: &str, result: &mut CheckResult) {
    if item.id.trim().is_empty() {
        result.errors.push(CheckError::EmptyId {
            day_label: day_label.to_string(),
            title: item.title.clone(),
        });
    }
    if item.title.trim().is_empty() {
        result.warnings.push(CheckWarning::BlankTitle {
            item_id: item.id.clone(),
        });
    }
    for link in item.links() {
        if link.url.trim().is_empty() {
            result.warnings.push(CheckWarning::EmptyLink {
                item_id: item.id.clone(),
                label: link.label,
            });
        }
    }
}

/// Ids that occur more than once, with the day label of every occurrence.
/// Ordered by first occurrence.
fn find_duplicate_ids(trip: &Trip) -> Vec<(String, Vec<String>)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut occurrences: Vec<(String, Vec<String>)> = Vec::new();

    for day in &trip.days {
        for item in &day.items {
            if item.id.trim().is_empty() {
                continue;
            }
            match seen.get(item.id.as_str()) {
                Some(&idx) => occurrences[idx].1.push(day.day_label.clone()),
                None => {
                    seen.insert(item.id.as_str(), occurrences.len());
                    occurrences.push((item.id.clone(), vec![day.day_label.clone()]));
                }
            }
        }
    }

    occurrences
        .into_iter()
        .filter(|(_, days)| days.len() > 1)
        .collect()
}
