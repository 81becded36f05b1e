use std::fmt;

use serde::Serialize;

/// A named hue from the closed color vocabulary.
///
/// Each hue carries its own swatch values so downstream stages never have
/// to compute color math: a base hex, a pale wash for light surfaces, and
/// a companion hue used as the accent when this hue is the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hue {
    Red,
    Crimson,
    Orange,
    Gold,
    Yellow,
    Green,
    HunterGreen,
    ForestGreen,
    Teal,
    Blue,
    Navy,
    Purple,
    Pink,
    Brown,
    Black,
    White,
    Gray,
}

impl Hue {
    /// Kebab-case name, as it appears in `hue:<name>` tags.
    pub fn name(&self) -> &'static str {
        match self {
            Hue::Red => "red",
            Hue::Crimson => "crimson",
            Hue::Orange => "orange",
            Hue::Gold => "gold",
            Hue::Yellow => "yellow",
            Hue::Green => "green",
            Hue::HunterGreen => "hunter-green",
            Hue::ForestGreen => "forest-green",
            Hue::Teal => "teal",
            Hue::Blue => "blue",
            Hue::Navy => "navy",
            Hue::Purple => "purple",
            Hue::Pink => "pink",
            Hue::Brown => "brown",
            Hue::Black => "black",
            Hue::White => "white",
            Hue::Gray => "gray",
        }
    }

    /// Base swatch value.
    pub fn hex(&self) -> &'static str {
        match self {
            Hue::Red => "#b91c1c",
            Hue::Crimson => "#dc143c",
            Hue::Orange => "#ea580c",
            Hue::Gold => "#d4a017",
            Hue::Yellow => "#eab308",
            Hue::Green => "#16a34a",
            Hue::HunterGreen => "#355e3b",
            Hue::ForestGreen => "#228b22",
            Hue::Teal => "#0d9488",
            Hue::Blue => "#2563eb",
            Hue::Navy => "#1f3a5f",
            Hue::Purple => "#7c3aed",
            Hue::Pink => "#db2777",
            Hue::Brown => "#8b5e3c",
            Hue::Black => "#111111",
            Hue::White => "#fafafa",
            Hue::Gray => "#6b7280",
        }
    }

    /// Pale tint of the hue, used for light page surfaces.
    pub fn wash(&self) -> &'static str {
        match self {
            Hue::Red => "#fdf2f2",
            Hue::Crimson => "#fdf0f3",
            Hue::Orange => "#fff4ec",
            Hue::Gold => "#fdf8e9",
            Hue::Yellow => "#fefce8",
            Hue::Green => "#f0faf3",
            Hue::HunterGreen => "#eef4ef",
            Hue::ForestGreen => "#eff7ef",
            Hue::Teal => "#ecfaf8",
            Hue::Blue => "#eff4fe",
            Hue::Navy => "#eef1f6",
            Hue::Purple => "#f5f1fe",
            Hue::Pink => "#fdf0f7",
            Hue::Brown => "#f8f3ee",
            Hue::Black => "#f2f2f2",
            Hue::White => "#ffffff",
            Hue::Gray => "#f4f5f7",
        }
    }

    /// Companion hue used as the accent when this hue becomes the primary.
    pub fn companion(&self) -> Hue {
        match self {
            Hue::Red => Hue::Gold,
            Hue::Crimson => Hue::ForestGreen,
            Hue::Orange => Hue::Teal,
            Hue::Gold => Hue::Crimson,
            Hue::Yellow => Hue::Purple,
            Hue::Green => Hue::Gold,
            Hue::HunterGreen => Hue::Gold,
            Hue::ForestGreen => Hue::Crimson,
            Hue::Teal => Hue::Orange,
            Hue::Blue => Hue::Orange,
            Hue::Navy => Hue::Gold,
            Hue::Purple => Hue::Green,
            Hue::Pink => Hue::Teal,
            Hue::Brown => Hue::Gold,
            Hue::Black => Hue::Gold,
            Hue::White => Hue::Navy,
            Hue::Gray => Hue::Blue,
        }
    }

    /// Whether text placed on this hue needs dark ink instead of white.
    pub fn is_light(&self) -> bool {
        matches!(self, Hue::Gold | Hue::Yellow | Hue::White)
    }
}

/// An explicit theme family detected in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeTag {
    Bauhaus,
    ModernTech,
    Glassy,
    RetroGaming,
    Festive,
}

impl ThemeTag {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeTag::Bauhaus => "bauhaus",
            ThemeTag::ModernTech => "modern-tech",
            ThemeTag::Glassy => "glassy",
            ThemeTag::RetroGaming => "retro-gaming",
            ThemeTag::Festive => "festive",
        }
    }
}

/// A mood word detected in the prompt. Moods rank below explicit themes
/// when deciding which template supplies structural properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodTag {
    Minimalist,
    Playful,
    Elegant,
    Dark,
}

impl MoodTag {
    pub fn name(&self) -> &'static str {
        match self {
            MoodTag::Minimalist => "minimalist",
            MoodTag::Playful => "playful",
            MoodTag::Elegant => "elegant",
            MoodTag::Dark => "dark",
        }
    }
}

/// A stylistic intent detected in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum StyleTag {
    Theme(ThemeTag),
    Mood(MoodTag),
    Hue(Hue),
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleTag::Theme(t) => write!(f, "theme:{}", t.name()),
            StyleTag::Mood(m) => write!(f, "mood:{}", m.name()),
            StyleTag::Hue(h) => write!(f, "hue:{}", h.name()),
        }
    }
}

/// An insertion-ordered, deduplicated set of style tags.
///
/// Detection order is the classifier's left-to-right scan order and is
/// the only ordering the resolver may rely on for tie-breaking.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<StyleTag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, preserving first-detection order.
    /// Returns `false` if the tag was already present.
    pub fn insert(&mut self, tag: StyleTag) -> bool {
        if self.tags.contains(&tag) {
            false
        } else {
            self.tags.push(tag);
            true
        }
    }

    pub fn contains(&self, tag: &StyleTag) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Tags in detection order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleTag> {
        self.tags.iter()
    }

    /// First theme tag in detection order, if any.
    pub fn first_theme(&self) -> Option<ThemeTag> {
        self.tags.iter().find_map(|t| match t {
            StyleTag::Theme(theme) => Some(*theme),
            _ => None,
        })
    }

    /// First mood tag in detection order, if any.
    pub fn first_mood(&self) -> Option<MoodTag> {
        self.tags.iter().find_map(|t| match t {
            StyleTag::Mood(mood) => Some(*mood),
            _ => None,
        })
    }

    /// First explicit hue in detection order, if any. When a prompt names
    /// conflicting hues, this is the one that wins.
    pub fn first_hue(&self) -> Option<Hue> {
        self.tags.iter().find_map(|t| match t {
            StyleTag::Hue(hue) => Some(*hue),
            _ => None,
        })
    }

    /// All mood tags in detection order.
    pub fn moods(&self) -> impl Iterator<Item = MoodTag> + '_ {
        self.tags.iter().filter_map(|t| match t {
            StyleTag::Mood(mood) => Some(*mood),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a StyleTag;
    type IntoIter = std::slice::Iter<'a, StyleTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_preserves_order() {
        let mut set = TagSet::new();
        set.insert(StyleTag::Hue(Hue::Green));
        set.insert(StyleTag::Theme(ThemeTag::Festive));
        set.insert(StyleTag::Hue(Hue::Red));

        let tags: Vec<_> = set.iter().copied().collect();
        assert_eq!(
            tags,
            vec![
                StyleTag::Hue(Hue::Green),
                StyleTag::Theme(ThemeTag::Festive),
                StyleTag::Hue(Hue::Red),
            ]
        );
    }

    #[test]
    fn test_insert_dedupes() {
        let mut set = TagSet::new();
        assert!(set.insert(StyleTag::Mood(MoodTag::Dark)));
        assert!(!set.insert(StyleTag::Mood(MoodTag::Dark)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_first_hue_is_detection_order() {
        let mut set = TagSet::new();
        set.insert(StyleTag::Hue(Hue::HunterGreen));
        set.insert(StyleTag::Hue(Hue::Crimson));
        assert_eq!(set.first_hue(), Some(Hue::HunterGreen));
    }

    #[test]
    fn test_first_theme_skips_other_kinds() {
        let mut set = TagSet::new();
        set.insert(StyleTag::Hue(Hue::Navy));
        set.insert(StyleTag::Mood(MoodTag::Elegant));
        set.insert(StyleTag::Theme(ThemeTag::Glassy));
        assert_eq!(set.first_theme(), Some(ThemeTag::Glassy));
        assert_eq!(set.first_mood(), Some(MoodTag::Elegant));
        assert_eq!(set.first_hue(), Some(Hue::Navy));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            StyleTag::Theme(ThemeTag::RetroGaming).to_string(),
            "theme:retro-gaming"
        );
        assert_eq!(StyleTag::Mood(MoodTag::Minimalist).to_string(), "mood:minimalist");
        assert_eq!(StyleTag::Hue(Hue::HunterGreen).to_string(), "hue:hunter-green");
    }

    #[test]
    fn test_every_hue_has_distinct_companion() {
        // A hue must never accent itself, otherwise hover states vanish.
        let all = [
            Hue::Red,
            Hue::Crimson,
            Hue::Orange,
            Hue::Gold,
            Hue::Yellow,
            Hue::Green,
            Hue::HunterGreen,
            Hue::ForestGreen,
            Hue::Teal,
            Hue::Blue,
            Hue::Navy,
            Hue::Purple,
            Hue::Pink,
            Hue::Brown,
            Hue::Black,
            Hue::White,
            Hue::Gray,
        ];
        for hue in all {
            assert_ne!(hue.companion(), hue, "{} accents itself", hue.name());
            assert!(hue.hex().starts_with('#'));
            assert!(hue.wash().starts_with('#'));
        }
    }

    #[test]
    fn test_empty_set() {
        let set = TagSet::new();
        assert!(set.is_empty());
        assert_eq!(set.first_theme(), None);
        assert_eq!(set.first_mood(), None);
        assert_eq!(set.first_hue(), None);
    }
}
