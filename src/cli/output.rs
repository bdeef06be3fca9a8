use serde::Serialize;

use crate::model::{Contact, Day, Essential, Flight, Hotel, Item, Trip, Weather};
use crate::ops::check::CheckResult;
use crate::ops::search::SearchHit;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct DaySummaryJson<'a> {
    /// 1-based, as accepted by `trip show`
    pub index: usize,
    pub day_label: &'a str,
    pub date: &'a str,
    pub weekday: &'a str,
    pub weather: &'a Weather,
    pub item_count: usize,
}

#[derive(Serialize)]
pub struct DayJson<'a> {
    pub index: usize,
    pub day_label: &'a str,
    pub date: &'a str,
    pub weekday: &'a str,
    pub weather: &'a Weather,
    pub items: &'a [Item],
}

#[derive(Serialize)]
pub struct NextItemJson<'a> {
    pub id: &'a str,
    pub time: &'a str,
    pub title: &'a str,
}

#[derive(Serialize)]
pub struct ItemDetailJson<'a> {
    pub day_label: &'a str,
    #[serde(flatten)]
    pub item: &'a Item,
    pub next: Option<NextItemJson<'a>>,
}

#[derive(Serialize)]
pub struct ReferenceJson<'a> {
    pub essentials: &'a [Essential],
    pub contacts: &'a [Contact],
    pub flights: &'a [Flight],
    pub hotels: &'a [Hotel],
}

#[derive(Serialize)]
pub struct SearchHitJson<'a> {
    pub day_label: &'a str,
    pub item_id: &'a str,
    pub time: &'a str,
    pub title: &'a str,
    pub fields: Vec<&'static str>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn day_summary_to_json(index: usize, day: &Day) -> DaySummaryJson<'_> {
    DaySummaryJson {
        index: index + 1,
        day_label: &day.day_label,
        date: &day.date,
        weekday: &day.weekday,
        weather: &day.weather,
        item_count: day.items.len(),
    }
}

pub fn day_to_json(index: usize, day: &Day) -> DayJson<'_> {
    DayJson {
        index: index + 1,
        day_label: &day.day_label,
        date: &day.date,
        weekday: &day.weekday,
        weather: &day.weather,
        items: &day.items,
    }
}

pub fn item_to_json<'a>(day: &'a Day, item: &'a Item, next: Option<&'a Item>) -> ItemDetailJson<'a> {
    ItemDetailJson {
        day_label: &day.day_label,
        item,
        next: next.map(|n| NextItemJson {
            id: &n.id,
            time: &n.time,
            title: &n.title,
        }),
    }
}

pub fn reference_to_json(trip: &Trip) -> ReferenceJson<'_> {
    ReferenceJson {
        essentials: &trip.essentials,
        contacts: &trip.contacts,
        flights: &trip.flights,
        hotels: &trip.hotels,
    }
}

pub fn search_hit_to_json<'a>(trip: &'a Trip, hit: &SearchHit<'a>) -> SearchHitJson<'a> {
    SearchHitJson {
        day_label: trip
            .day(hit.day_index)
            .map(|d| d.day_label.as_str())
            .unwrap_or_default(),
        item_id: &hit.item.id,
        time: &hit.item.time,
        title: &hit.item.title,
        fields: hit.fields.iter().map(|(f, _)| f.label()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per day: `D1  1/24 SAT  ☁ 6°C Cloudy  (7 items)`
pub fn format_day_line(day: &Day) -> String {
    format!(
        "{}  {} {}  {} {} {}  ({} items)",
        day.day_label,
        day.date,
        day.weekday,
        day.weather.icon.glyph(),
        day.weather.temp,
        day.weather.condition,
        day.items.len()
    )
}

/// One-line item summary: `15:20 [other] d1-1 Title #tag`
pub fn format_item_line(item: &Item) -> String {
    let tags = if item.tags.is_empty() {
        String::new()
    } else {
        format!(" {}", format_tags(&item.tags))
    };
    let star = if item.is_highlight() { " ★" } else { "" };
    format!(
        "{} [{}] {} {}{}{}",
        item.time,
        item.category.label(),
        item.id,
        item.title,
        star,
        tags
    )
}

/// A day's schedule
pub fn format_day_schedule(day: &Day) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", format_day_line(day)), String::new()];
    for item in &day.items {
        lines.push(format_item_line(item));
    }
    lines
}

fn push_block(lines: &mut Vec<String>, heading: &str, text: &str) {
    lines.push(format!("{}:", heading));
    for line in text.lines() {
        lines.push(format!("  {}", line));
    }
}

/// Full item view. Opaque text blocks keep their line breaks.
pub fn format_item_detail(day: &Day, item: &Item, next: Option<&Item>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("{} {} ({})", item.time, item.title, day.day_label));
    lines.push(format!("category: {}", item.category.label()));
    if let Some(loc) = &item.location {
        lines.push(format!("location: {}", loc));
    }
    if !item.tags.is_empty() {
        lines.push(format!("tags: {}", format_tags(&item.tags)));
    }
    if let Some(guide) = &item.guide_highlight {
        push_block(&mut lines, "guide", guide);
    }
    if let Some(staff) = &item.staff_instructions {
        push_block(&mut lines, "staff", staff);
    }
    if let Some(note) = &item.note {
        push_block(&mut lines, "note", note);
    }
    for link in item.links() {
        lines.push(format!("link: {} <{}>", link.label, link.url));
    }
    match next {
        Some(n) => lines.push(format!("next: {} {}", n.time, n.title)),
        None => lines.push("next: (last stop of the day)".to_string()),
    }
    lines
}

pub fn format_reference(trip: &Trip) -> Vec<String> {
    let mut lines = Vec::new();

    if !trip.essentials.is_empty() {
        lines.push("== Essentials ==".to_string());
        for e in &trip.essentials {
            lines.push(format!("  [{}] {} - {} <{}>", e.badge, e.title, e.subtitle, e.url));
        }
        lines.push(String::new());
    }

    lines.push("== Emergency contacts ==".to_string());
    for c in &trip.contacts {
        lines.push(format!("  {}: {}", c.name, c.phone));
    }

    if !trip.flights.is_empty() {
        lines.push(String::new());
        lines.push("== Flights ==".to_string());
        for f in &trip.flights {
            lines.push(format!("  {} {}  {} {}", f.code, f.route, f.date, f.time));
            if !f.detail.is_empty() {
                lines.push(format!("    {}", f.detail));
            }
        }
    }

    if !trip.hotels.is_empty() {
        lines.push(String::new());
        lines.push("== Hotels ==".to_string());
        for h in &trip.hotels {
            lines.push(format!("  {} ({})", h.name, h.dates));
            lines.push(format!("    {}", h.address));
            if !h.note.is_empty() {
                lines.push(format!("    {}", h.note));
            }
        }
    }

    lines
}

pub fn format_search_hit(trip: &Trip, hit: &SearchHit<'_>) -> String {
    let label = trip
        .day(hit.day_index)
        .map(|d| d.day_label.as_str())
        .unwrap_or_default();
    let fields = hit
        .fields
        .iter()
        .map(|(f, _)| f.label())
        .collect::<Vec<_>>()
        .join(", ");
    if fields.is_empty() {
        format!("[{}] {}", label, format_item_line(hit.item))
    } else {
        format!("[{}] {} (in {})", label, format_item_line(hit.item), fields)
    }
}

pub fn format_check_result(result: &CheckResult) -> Vec<String> {
    let mut lines = Vec::new();
    if !result.errors.is_empty() {
        lines.push("Errors:".to_string());
        for err in &result.errors {
            lines.push(format!("  {}", err));
        }
    }
    if !result.warnings.is_empty() {
        if !result.errors.is_empty() {
            lines.push(String::new());
        }
        lines.push("Warnings:".to_string());
        for warn in &result.warnings {
            lines.push(format!("  {}", warn));
        }
    }
    if result.valid {
        lines.push("✓ trip data is valid".to_string());
    } else {
        lines.push("✗ trip data has errors".to_string());
    }
    lines
}
