use restyle_classifier::Hue;
use serde::Serialize;

/// A font stack a template can assign to headings or body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStack {
    SystemSans,
    Geometric,
    Rounded,
    Serif,
    Monospace,
    Pixel,
}

impl FontStack {
    /// The `font-family` value for this stack. Self-contained: only
    /// locally-resolvable family names, no webfont references.
    pub fn css(&self) -> &'static str {
        match self {
            FontStack::SystemSans => {
                "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif"
            }
            FontStack::Geometric => "Futura, 'Century Gothic', 'Avant Garde', sans-serif",
            FontStack::Rounded => "'Varela Round', 'Comfortaa', 'Arial Rounded MT Bold', sans-serif",
            FontStack::Serif => "Georgia, 'Times New Roman', serif",
            FontStack::Monospace => "'SF Mono', 'Fira Code', Consolas, monospace",
            FontStack::Pixel => "'Press Start 2P', 'VT323', monospace",
        }
    }
}

/// Spacing density of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Density {
    Compact,
    Comfortable,
    Spacious,
}

impl Density {
    /// Base spacing unit in pixels.
    pub fn gap_px(&self) -> u8 {
        match self {
            Density::Compact => 12,
            Density::Comfortable => 16,
            Density::Spacious => 24,
        }
    }
}

/// Light or dark surface scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Light,
    Dark,
}

/// Elevation treatment for raised surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowLevel {
    None,
    Soft,
    /// Offset block shadow with no blur.
    Hard,
    /// Colored glow derived from the accent hue.
    Glow,
}

impl ShadowLevel {
    /// The `box-shadow` value, parameterized on the accent hue for glows.
    pub fn css(&self, accent: Hue) -> String {
        match self {
            ShadowLevel::None => "none".into(),
            ShadowLevel::Soft => "0 2px 8px rgba(17, 24, 39, 0.08)".into(),
            ShadowLevel::Hard => "4px 4px 0 rgba(17, 24, 39, 0.85)".into(),
            ShadowLevel::Glow => format!("0 0 18px {}55", accent.hex()),
        }
    }
}

/// Per-template decorative treatment beyond color and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    None,
    /// Translucent surfaces with backdrop blur.
    Frosted,
    /// Striped accent border along card tops.
    CandyStripe,
    /// CRT-style scanline overlay on the page background.
    Scanlines,
    /// Solid accent bar on headings.
    AccentBar,
}

/// The parameter set a template fills in.
///
/// This is the whole vocabulary the emitter works from; templates differ
/// only in how they populate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleParams {
    pub primary: Hue,
    pub accent: Hue,
    pub scheme: Scheme,
    pub heading_font: FontStack,
    pub body_font: FontStack,
    pub radius_px: u8,
    pub density: Density,
    pub shadow: ShadowLevel,
    pub decoration: Decoration,
}

/// A named, immutable style preset. Registered once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub params: StyleParams,
}

/// The concrete parameter set chosen for one generation request.
/// Lives only for the duration of the request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyle {
    /// Name of the template that supplied the structural properties.
    pub template: &'static str,
    pub params: StyleParams,
}
