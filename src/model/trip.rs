use serde::{Deserialize, Serialize};

use super::day::Day;
use super::item::Item;
use super::reference::{Contact, Essential, Flight, Hotel};

/// Header labels for the trip
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TripInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub year: String,
}

/// The whole dataset: days in chronological order plus reference data.
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "trip", default)]
    pub info: TripInfo,
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(default)]
    pub essentials: Vec<Essential>,
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Trip {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn day(&self, index: usize) -> Option<&Day> {
        self.days.get(index)
    }

    /// Find an item anywhere in the trip, returning its day index
    pub fn find_item(&self, item_id: &str) -> Option<(usize, &Item)> {
        self.days.iter().enumerate().find_map(|(day_idx, day)| {
            day.items
                .iter()
                .find(|i| i.id == item_id)
                .map(|item| (day_idx, item))
        })
    }

    /// Resolve a day reference: 1-based index, day label (`D2`) or date (`1/25`)
    pub fn resolve_day(&self, reference: &str) -> Option<usize> {
        let reference = reference.trim();
        if let Ok(n) = reference.parse::<usize>() {
            return (n >= 1 && n <= self.days.len()).then(|| n - 1);
        }
        self.days.iter().position(|d| {
            d.day_label.eq_ignore_ascii_case(reference) || d.date == reference
        })
    }

    /// All items in day order, paired with their day index
    pub fn items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.days
            .iter()
            .enumerate()
            .flat_map(|(idx, day)| day.items.iter().map(move |item| (idx, item)))
    }
}
