//! The nine main groups that partition the category catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NewsdeskError;

/// Top-level classification key.
///
/// The set is closed: the catalog can add or rename sub-categories, but the
/// main groups are fixed by the site's navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MainGroup {
    #[serde(rename = "live-world")]
    LiveWorld,
    #[serde(rename = "counties")]
    Counties,
    #[serde(rename = "politics")]
    Politics,
    #[serde(rename = "business")]
    Business,
    #[serde(rename = "opinion")]
    Opinion,
    #[serde(rename = "sports")]
    Sports,
    #[serde(rename = "lifestyle")]
    Lifestyle,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "tech")]
    Tech,
}

impl MainGroup {
    /// All main groups in display order.
    pub const ALL: [MainGroup; 9] = [
        MainGroup::LiveWorld,
        MainGroup::Counties,
        MainGroup::Politics,
        MainGroup::Business,
        MainGroup::Opinion,
        MainGroup::Sports,
        MainGroup::Lifestyle,
        MainGroup::Entertainment,
        MainGroup::Tech,
    ];

    /// Stable key used in URLs, slugs and on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            MainGroup::LiveWorld => "live-world",
            MainGroup::Counties => "counties",
            MainGroup::Politics => "politics",
            MainGroup::Business => "business",
            MainGroup::Opinion => "opinion",
            MainGroup::Sports => "sports",
            MainGroup::Lifestyle => "lifestyle",
            MainGroup::Entertainment => "entertainment",
            MainGroup::Tech => "tech",
        }
    }

    /// Human-readable label used in navigation.
    pub fn label(&self) -> &'static str {
        match self {
            MainGroup::LiveWorld => "Live & World",
            MainGroup::Counties => "Counties",
            MainGroup::Politics => "Politics",
            MainGroup::Business => "Business",
            MainGroup::Opinion => "Opinion",
            MainGroup::Sports => "Sports",
            MainGroup::Lifestyle => "Life & Style",
            MainGroup::Entertainment => "Entertainment",
            MainGroup::Tech => "Technology",
        }
    }

    /// Icon shown next to the group in pickers and filter panels.
    pub fn icon(&self) -> &'static str {
        match self {
            MainGroup::LiveWorld => "🌍",
            MainGroup::Counties => "🏢",
            MainGroup::Politics => "🏛️",
            MainGroup::Business => "💼",
            MainGroup::Opinion => "💭",
            MainGroup::Sports => "⚽",
            MainGroup::Lifestyle => "🎭",
            MainGroup::Entertainment => "🎉",
            MainGroup::Tech => "💻",
        }
    }

    /// Accent colour paired with the icon in group headers.
    pub fn color(&self) -> &'static str {
        match self {
            MainGroup::LiveWorld => "#2563eb",
            MainGroup::Counties => "#0d9488",
            MainGroup::Politics => "#dc2626",
            MainGroup::Business => "#16a34a",
            MainGroup::Opinion => "#9333ea",
            MainGroup::Sports => "#ea580c",
            MainGroup::Lifestyle => "#db2777",
            MainGroup::Entertainment => "#ca8a04",
            MainGroup::Tech => "#0891b2",
        }
    }

    /// Position in [`MainGroup::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for MainGroup {
    type Err = NewsdeskError;

    /// Accepts the key, the display label, and a few aliases seen in
    /// category records (`technology`, `life-style`, `live & world`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let group = match normalized.as_str() {
            "live-world" | "live & world" | "live and world" | "live_world" => MainGroup::LiveWorld,
            "counties" => MainGroup::Counties,
            "politics" => MainGroup::Politics,
            "business" => MainGroup::Business,
            "opinion" => MainGroup::Opinion,
            "sports" => MainGroup::Sports,
            "lifestyle" | "life & style" | "life-style" | "life and style" => MainGroup::Lifestyle,
            "entertainment" => MainGroup::Entertainment,
            "tech" | "technology" => MainGroup::Tech,
            _ => return Err(NewsdeskError::UnknownGroup(s.to_string())),
        };
        Ok(group)
    }
}

impl fmt::Display for MainGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
