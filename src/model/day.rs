use serde::{Deserialize, Serialize};

use super::item::Item;

/// Weather glyph reference for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    #[default]
    Cloud,
    Snow,
    Sun,
    Rain,
}

impl WeatherIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Cloud => "\u{2601}",
            WeatherIcon::Snow => "\u{2744}",
            WeatherIcon::Sun => "\u{2600}",
            WeatherIcon::Rain => "\u{2602}",
        }
    }
}

/// Display-only weather summary
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Weather {
    pub temp: String,
    pub condition: String,
    #[serde(default)]
    pub icon: WeatherIcon,
}

/// One calendar day of the trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// e.g. `1/24`
    pub date: String,
    /// e.g. `D1`
    pub day_label: String,
    pub weekday: String,
    #[serde(default)]
    pub weather: Weather,
    /// Display order, also the order used for "next item"
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Day {
    /// Day-of-month part of the date label (`1/24` -> `24`)
    pub fn day_of_month(&self) -> &str {
        self.date
            .split_once('/')
            .map_or(self.date.as_str(), |(_, day)| day)
    }

    /// Position of an item in this day by id
    pub fn position_of(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == item_id)
    }
}
