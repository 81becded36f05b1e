use restyle_classifier::{MoodTag, TagSet, ThemeTag};

use crate::registry::{Registry, DEFAULT_TEMPLATE, HUE_TEMPLATE};
use crate::template::{Decoration, FontStack, ResolvedStyle, Scheme, ShadowLevel};

/// Resolve a tag set into exactly one style.
///
/// Selection order for the structural template:
/// 1. first theme tag in detection order,
/// 2. else first mood tag,
/// 3. else the generic hue template when only hues were detected,
/// 4. else the default template.
///
/// After structural selection, every mood tag applies its modifier and
/// the first-detected hue (if any) overrides the primary color, with the
/// accent re-derived from that hue's companion. Total: never fails.
pub fn resolve(registry: &Registry, tags: &TagSet) -> ResolvedStyle {
    let template = structural_template(registry, tags);
    let mut params = template.params;

    // Mood modifiers commute: each touches a distinct parameter, so
    // applying them in any order produces the same result.
    for mood in tags.moods() {
        match mood {
            MoodTag::Minimalist => {
                params.shadow = ShadowLevel::None;
                params.decoration = Decoration::None;
            }
            MoodTag::Playful => {
                params.radius_px = params.radius_px.max(12);
            }
            MoodTag::Elegant => {
                params.heading_font = FontStack::Serif;
            }
            MoodTag::Dark => {
                params.scheme = Scheme::Dark;
            }
        }
    }

    // Hue override beats whichever template won structurally.
    if let Some(hue) = tags.first_hue() {
        params.primary = hue;
        params.accent = hue.companion();
    }

    ResolvedStyle {
        template: template.name,
        params,
    }
}

fn structural_template<'a>(
    registry: &'a Registry,
    tags: &TagSet,
) -> &'a crate::template::Template {
    let name = if let Some(theme) = tags.first_theme() {
        theme_template(theme)
    } else if let Some(mood) = tags.first_mood() {
        mood_template(mood)
    } else if tags.first_hue().is_some() {
        HUE_TEMPLATE
    } else {
        DEFAULT_TEMPLATE
    };

    // Builtin names only; falls back rather than failing if a catalog
    // variant ever drops one.
    registry
        .get(name)
        .unwrap_or_else(|_| registry.default_template())
}

/// Which template supplies structure for each theme tag.
fn theme_template(theme: ThemeTag) -> &'static str {
    match theme {
        ThemeTag::Bauhaus => "bauhaus",
        ThemeTag::ModernTech => "modern-tech",
        ThemeTag::Glassy => "glassy",
        ThemeTag::RetroGaming => "retro-gaming",
        ThemeTag::Festive => "festive",
    }
}

/// Which template supplies structure when a mood wins.
fn mood_template(mood: MoodTag) -> &'static str {
    match mood {
        MoodTag::Minimalist => "minimal",
        MoodTag::Playful => "modern-tech",
        MoodTag::Elegant => "elegant",
        MoodTag::Dark => "midnight",
    }
}
