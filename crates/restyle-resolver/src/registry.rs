use restyle_classifier::Hue;

use crate::template::{
    Decoration, Density, FontStack, Scheme, ShadowLevel, StyleParams, Template,
};
use crate::RegistryError;

/// Names of the templates every registry must provide. The resolver
/// reaches these by name, so `builtin()` and this list move together.
pub const DEFAULT_TEMPLATE: &str = "default";
pub const HUE_TEMPLATE: &str = "hue";

/// The read-only catalog of style templates.
///
/// Populated once at startup; immutable thereafter, so shared references
/// can cross threads freely with no locking.
#[derive(Debug, Clone)]
pub struct Registry {
    templates: Vec<Template>,
}

impl Registry {
    /// Build the fixed builtin catalog.
    pub fn builtin() -> Self {
        let templates = vec![
            Template {
                name: DEFAULT_TEMPLATE,
                params: StyleParams {
                    primary: Hue::Blue,
                    accent: Hue::Orange,
                    scheme: Scheme::Light,
                    heading_font: FontStack::SystemSans,
                    body_font: FontStack::SystemSans,
                    radius_px: 8,
                    density: Density::Comfortable,
                    shadow: ShadowLevel::Soft,
                    decoration: Decoration::None,
                },
            },
            Template {
                name: "bauhaus",
                params: StyleParams {
                    primary: Hue::Red,
                    accent: Hue::Gold,
                    scheme: Scheme::Light,
                    heading_font: FontStack::Geometric,
                    body_font: FontStack::Geometric,
                    radius_px: 0,
                    density: Density::Compact,
                    shadow: ShadowLevel::Hard,
                    decoration: Decoration::AccentBar,
                },
            },
            Template {
                name: "modern-tech",
                params: StyleParams {
                    primary: Hue::Blue,
                    accent: Hue::Teal,
                    scheme: Scheme::Light,
                    heading_font: FontStack::Rounded,
                    body_font: FontStack::SystemSans,
                    radius_px: 12,
                    density: Density::Comfortable,
                    shadow: ShadowLevel::Soft,
                    decoration: Decoration::None,
                },
            },
            Template {
                name: "glassy",
                params: StyleParams {
                    primary: Hue::Teal,
                    accent: Hue::Blue,
                    scheme: Scheme::Light,
                    heading_font: FontStack::SystemSans,
                    body_font: FontStack::SystemSans,
                    radius_px: 16,
                    density: Density::Spacious,
                    shadow: ShadowLevel::Glow,
                    decoration: Decoration::Frosted,
                },
            },
            Template {
                name: "retro-gaming",
                params: StyleParams {
                    primary: Hue::Purple,
                    accent: Hue::Green,
                    scheme: Scheme::Dark,
                    heading_font: FontStack::Pixel,
                    body_font: FontStack::Monospace,
                    radius_px: 0,
                    density: Density::Compact,
                    shadow: ShadowLevel::Hard,
                    decoration: Decoration::Scanlines,
                },
            },
            Template {
                name: "festive",
                params: StyleParams {
                    primary: Hue::Crimson,
                    accent: Hue::ForestGreen,
                    scheme: Scheme::Light,
                    heading_font: FontStack::Serif,
                    body_font: FontStack::SystemSans,
                    radius_px: 10,
                    density: Density::Comfortable,
                    shadow: ShadowLevel::Soft,
                    decoration: Decoration::CandyStripe,
                },
            },
            // Generic single-hue theme: structure stays neutral, the
            // prompt's explicit color carries the whole look. Defaults to
            // hunter green when no hue tag is present.
            Template {
                name: HUE_TEMPLATE,
                params: StyleParams {
                    primary: Hue::HunterGreen,
                    accent: Hue::Gold,
                    scheme: Scheme::Light,
                    heading_font: FontStack::SystemSans,
                    body_font: FontStack::SystemSans,
                    radius_px: 8,
                    density: Density::Comfortable,
                    shadow: ShadowLevel::Soft,
                    decoration: Decoration::None,
                },
            },
            Template {
                name: "minimal",
                params: StyleParams {
                    primary: Hue::Black,
                    accent: Hue::Gray,
                    scheme: Scheme::Light,
                    heading_font: FontStack::SystemSans,
                    body_font: FontStack::SystemSans,
                    radius_px: 2,
                    density: Density::Spacious,
                    shadow: ShadowLevel::None,
                    decoration: Decoration::None,
                },
            },
            Template {
                name: "elegant",
                params: StyleParams {
                    primary: Hue::Black,
                    accent: Hue::Gold,
                    scheme: Scheme::Light,
                    heading_font: FontStack::Serif,
                    body_font: FontStack::Serif,
                    radius_px: 4,
                    density: Density::Spacious,
                    shadow: ShadowLevel::Soft,
                    decoration: Decoration::AccentBar,
                },
            },
            Template {
                name: "midnight",
                params: StyleParams {
                    primary: Hue::Purple,
                    accent: Hue::Teal,
                    scheme: Scheme::Dark,
                    heading_font: FontStack::SystemSans,
                    body_font: FontStack::SystemSans,
                    radius_px: 8,
                    density: Density::Comfortable,
                    shadow: ShadowLevel::Glow,
                    decoration: Decoration::None,
                },
            },
        ];

        Self { templates }
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Result<&Template, RegistryError> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| RegistryError::NotFound { name: name.into() })
    }

    /// All templates, in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// The fallback template. Guaranteed present in the builtin catalog;
    /// the resolver relies on this never failing.
    pub fn default_template(&self) -> &Template {
        self.get(DEFAULT_TEMPLATE)
            .unwrap_or(&self.templates[0])
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
