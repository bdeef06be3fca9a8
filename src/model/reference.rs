use serde::{Deserialize, Serialize};

/// A must-have external service (entry forms, tickets) shown at the top of
/// the reference panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Essential {
    #[serde(default)]
    pub badge: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub url: String,
}

/// Emergency or support contact. `phone` is display text and may not be a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub code: String,
    pub route: String,
    pub time: String,
    pub date: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    /// Date-range label, e.g. `1/25 - 1/26`
    pub dates: String,
    pub address: String,
    #[serde(default)]
    pub note: String,
}
