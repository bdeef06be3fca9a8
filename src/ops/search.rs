use std::ops::Range;

use regex::Regex;

use crate::model::{Category, Item, Trip};

/// Which field of an item matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Note,
    Location,
    Highlight,
    Tag,
}

impl MatchField {
    pub fn label(self) -> &'static str {
        match self {
            MatchField::Title => "title",
            MatchField::Note => "note",
            MatchField::Location => "location",
            MatchField::Highlight => "highlight",
            MatchField::Tag => "tag",
        }
    }
}

/// Optional restrictions applied before matching
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub category: Option<Category>,
    pub tag: Option<String>,
}

impl SearchFilter {
    fn accepts(&self, item: &Item) -> bool {
        self.category.is_none_or(|c| item.category == c)
            && self.tag.as_deref().is_none_or(|t| item.has_tag(t))
    }
}

/// A search hit for one item. `fields` lists every field that matched, in
/// display order.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub day_index: usize,
    pub item: &'a Item,
    pub fields: Vec<(MatchField, Vec<Range<usize>>)>,
}

/// Build a case-insensitive regex, falling back to a literal match when the
/// pattern is not a valid regex
pub fn build_regex(pattern: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){}", pattern))
        .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
        .ok()
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

/// Search every item of the trip in day order.
///
/// Without a regex every item the filter accepts is a hit.
pub fn search_items<'a>(
    trip: &'a Trip,
    re: Option<&Regex>,
    filter: &SearchFilter,
) -> Vec<SearchHit<'a>> {
    let mut hits = Vec::new();

    for (day_index, item) in trip.items() {
        if !filter.accepts(item) {
            continue;
        }
        let Some(re) = re else {
            hits.push(SearchHit {
                day_index,
                item,
                fields: Vec::new(),
            });
            continue;
        };
        let fields = search_item(re, item);
        if !fields.is_empty() {
            hits.push(SearchHit {
                day_index,
                item,
                fields,
            });
        }
    }

    hits
}

fn search_item(re: &Regex, item: &Item) -> Vec<(MatchField, Vec<Range<usize>>)> {
    let mut fields = Vec::new();

    let mut check = |field: MatchField, text: &str| {
        let spans = find_matches(re, text);
        if !spans.is_empty() {
            fields.push((field, spans));
        }
    };

    check(MatchField::Title, &item.title);
    if let Some(note) = &item.note {
        check(MatchField::Note, note);
    }
    if let Some(location) = &item.location {
        check(MatchField::Location, location);
    }
    if let Some(highlight) = &item.guide_highlight {
        check(MatchField::Highlight, highlight);
    }
    for tag in &item.tags {
        check(MatchField::Tag, tag);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Day, Weather};

    fn trip() -> Trip {
        let mut onsen = Item::new("a", "18:40", "Check in at the onsen", Category::Hotel);
        onsen.note = Some("Apple juice on tap\nOpen-air bath".into());
        onsen.tags = vec!["spa".into()];
        let mut lunch = Item::new("b", "11:00", "Ramen lunch", Category::Food);
        lunch.tags = vec!["must-eat".into()];
        lunch.location = Some("Terminal 3".into());
        let mut market = Item::new("c", "08:30", "Fish market", Category::Food);
        market.guide_highlight = Some("Build your own rice bowl".into());

        Trip {
            days: vec![
                Day {
                    date: "1/25".into(),
                    day_label: "D2".into(),
                    weekday: "SUN".into(),
                    weather: Weather::default(),
                    items: vec![lunch, onsen],
                },
                Day {
                    date: "1/27".into(),
                    day_label: "D4".into(),
                    weekday: "TUE".into(),
                    weather: Weather::default(),
                    items: vec![market],
                },
            ],
            ..Default::default()
        }
    }

    fn ids(hits: &[SearchHit]) -> Vec<String> {
        hits.iter().map(|h| h.item.id.clone()).collect()
    }

    #[test]
    fn matches_title_case_insensitively() {
        let trip = trip();
        let hits = search_items(&trip, build_regex("RAMEN").as_ref(), &SearchFilter::default());
        assert_eq!(ids(&hits), vec!["b"]);
        assert_eq!(hits[0].fields[0].0, MatchField::Title);
        assert_eq!(hits[0].fields[0].1, vec![0..5]);
    }

    #[test]
    fn matches_multiline_note_and_highlight() {
        let trip = trip();
        let hits = search_items(&trip, build_regex("bath|bowl").as_ref(), &SearchFilter::default());
        assert_eq!(ids(&hits), vec!["a", "c"]);
        assert_eq!(hits[0].fields[0].0, MatchField::Note);
        assert_eq!(hits[1].fields[0].0, MatchField::Highlight);
        assert_eq!(hits[1].day_index, 1);
    }

    #[test]
    fn one_hit_per_item_with_every_matching_field() {
        let trip = trip();
        let hits = search_items(&trip, build_regex("spa|onsen").as_ref(), &SearchFilter::default());
        assert_eq!(hits.len(), 1);
        let fields: Vec<MatchField> = hits[0].fields.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![MatchField::Title, MatchField::Tag]);
    }

    #[test]
    fn invalid_regex_falls_back_to_literal() {
        let trip = trip();
        let hits = search_items(&trip, build_regex("(").as_ref(), &SearchFilter::default());
        assert!(hits.is_empty());
        let re = build_regex("Terminal (3").unwrap();
        assert!(re.is_match("terminal (3"));
    }

    #[test]
    fn category_and_tag_filters_restrict_results() {
        let trip = trip();
        let food = SearchFilter {
            category: Some(Category::Food),
            tag: None,
        };
        assert_eq!(ids(&search_items(&trip, None, &food)), vec!["b", "c"]);

        let must_eat = SearchFilter {
            category: Some(Category::Food),
            tag: Some("must-eat".into()),
        };
        assert_eq!(ids(&search_items(&trip, None, &must_eat)), vec!["b"]);

        let hotels = SearchFilter {
            category: Some(Category::Hotel),
            tag: None,
        };
        assert!(search_items(&trip, build_regex("ramen").as_ref(), &hotels).is_empty());
    }
}
