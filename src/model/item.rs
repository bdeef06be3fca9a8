use serde::{Deserialize, Serialize};

/// Label shown on the primary link when the item does not name one
pub const DEFAULT_PRIMARY_LINK_LABEL: &str = "查看參考網頁";

/// What kind of event an item is. Drives the badge and glyph only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Food,
    Activity,
    Hotel,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Transport,
        Category::Food,
        Category::Activity,
        Category::Hotel,
        Category::Shopping,
        Category::Other,
    ];

    /// Lowercase name, as written in the dataset
    pub fn label(self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Food => "food",
            Category::Activity => "activity",
            Category::Hotel => "hotel",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }

    /// Single-cell glyph used in list rows
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Transport => "\u{2708}",
            Category::Food => "\u{25C9}",
            Category::Activity => "\u{2691}",
            Category::Hotel => "\u{2302}",
            Category::Shopping => "\u{2666}",
            Category::Other => "\u{2139}",
        }
    }

    /// Parse a category name (case-insensitive)
    pub fn parse(s: &str) -> Option<Category> {
        let lower = s.trim().to_ascii_lowercase();
        Category::ALL.into_iter().find(|c| c.label() == lower)
    }
}

/// A labelled external URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// One scheduled event in a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique across the whole trip
    pub id: String,
    /// Display label, never parsed
    pub time: String,
    pub title: String,
    pub category: Category,
    /// Free text, shown verbatim with its line breaks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_link_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Marks the item as a "special experience" card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide_highlight: Option<String>,
    /// Text meant to be shown to a third party (ticket desk, front desk).
    /// Displayed exactly as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_instructions: Option<String>,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        time: impl Into<String>,
        title: impl Into<String>,
        category: Category,
    ) -> Self {
        Item {
            id: id.into(),
            time: time.into(),
            title: title.into(),
            category,
            note: None,
            location: None,
            map_link: None,
            primary_link: None,
            primary_link_label: None,
            additional_links: Vec::new(),
            tags: Vec::new(),
            guide_highlight: None,
            staff_instructions: None,
        }
    }

    /// Whether the item renders as a highlighted card instead of a plain row
    pub fn is_highlight(&self) -> bool {
        self.guide_highlight.is_some()
    }

    /// Label for the primary link, falling back to the default label
    pub fn primary_link_label(&self) -> &str {
        self.primary_link_label
            .as_deref()
            .unwrap_or(DEFAULT_PRIMARY_LINK_LABEL)
    }

    /// Every openable link in display order: map, primary, then additional
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        if let Some(url) = &self.map_link {
            links.push(Link {
                label: "Google Maps".to_string(),
                url: url.clone(),
            });
        }
        if let Some(url) = &self.primary_link {
            links.push(Link {
                label: self.primary_link_label().to_string(),
                url: url.clone(),
            });
        }
        links.extend(self.additional_links.iter().cloned());
        links
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
