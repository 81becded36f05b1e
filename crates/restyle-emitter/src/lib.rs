//! Restyle Emitter
//!
//! Serializes a [`ResolvedStyle`] into a self-contained CSS string that
//! overrides the demo page's base component styles.
//!
//! Specificity policy:
//! - doubled-class compound selectors (`.card.card`, `.btn.btn`) beat the
//!   single-class base styles without touching component internals;
//! - `!important` appears on exactly one declaration, the body
//!   `font-family` (base styles commonly pin families per element);
//! - no id selectors: the style element the caller injects into the
//!   document owns its own id and must never be targeted from here.
//!
//! Emission is deterministic and idempotent: equal input, byte-identical
//! output. No randomness, timestamps, or external references.

use restyle_resolver::{Decoration, ResolvedStyle, Scheme};

/// The only property allowed to carry `!important`, per the declared
/// specificity policy.
pub const IMPORTANT_PROPERTY: &str = "font-family";

/// Emit a stylesheet for a resolved style.
pub fn emit(style: &ResolvedStyle) -> String {
    let p = &style.params;
    let mut css = String::new();

    css.push_str(&format!("/* restyle — template: {} */\n\n", style.template));

    // Surface palette depends on the scheme; everything else flows from
    // the resolved parameters.
    let (surface, raised, ink, muted, edge) = match p.scheme {
        Scheme::Light => (
            p.primary.wash(),
            "#ffffff",
            "#1f2933",
            "#52606d",
            "rgba(31, 41, 51, 0.10)",
        ),
        Scheme::Dark => (
            "#0d1117",
            "#161b22",
            "#e6edf3",
            "#8b949e",
            "rgba(230, 237, 243, 0.12)",
        ),
    };
    let on_primary = if p.primary.is_light() { "#1f2933" } else { "#ffffff" };
    let radius = format!("{}px", p.radius_px);
    let gap = format!("{}px", p.density.gap_px());
    let shadow = p.shadow.css(p.accent);

    rule(
        &mut css,
        ":root",
        &[
            ("--rs-primary", p.primary.hex()),
            ("--rs-accent", p.accent.hex()),
            ("--rs-on-primary", on_primary),
            ("--rs-surface", surface),
            ("--rs-surface-raised", raised),
            ("--rs-ink", ink),
            ("--rs-ink-muted", muted),
            ("--rs-edge", edge),
            ("--rs-radius", &radius),
            ("--rs-gap", &gap),
            ("--rs-shadow", &shadow),
            ("--rs-font-heading", p.heading_font.css()),
            ("--rs-font-body", p.body_font.css()),
        ],
    );

    rule(
        &mut css,
        "body",
        &[
            ("background", "var(--rs-surface)"),
            ("color", "var(--rs-ink)"),
            ("font-family", "var(--rs-font-body) !important"),
        ],
    );

    rule(
        &mut css,
        "h1, h2, h3, h4",
        &[
            ("font-family", "var(--rs-font-heading)"),
            ("color", "var(--rs-ink)"),
            ("margin-bottom", "var(--rs-gap)"),
        ],
    );

    rule(
        &mut css,
        ".card.card",
        &[
            ("background", "var(--rs-surface-raised)"),
            ("border", "1px solid var(--rs-edge)"),
            ("border-radius", "var(--rs-radius)"),
            ("box-shadow", "var(--rs-shadow)"),
            ("padding", "var(--rs-gap)"),
        ],
    );
    rule(
        &mut css,
        ".card .card-title",
        &[
            ("color", "var(--rs-primary)"),
            ("font-family", "var(--rs-font-heading)"),
        ],
    );
    rule(&mut css, ".card .card-description", &[("color", "var(--rs-ink-muted)")]);

    rule(
        &mut css,
        ".btn.btn, button.btn",
        &[
            ("background", "var(--rs-primary)"),
            ("color", "var(--rs-on-primary)"),
            ("border", "none"),
            ("border-radius", "var(--rs-radius)"),
            ("padding", "calc(var(--rs-gap) / 2) var(--rs-gap)"),
            ("font-family", "var(--rs-font-body)"),
            ("box-shadow", "var(--rs-shadow)"),
            ("cursor", "pointer"),
        ],
    );
    rule(
        &mut css,
        ".btn.btn:hover, button.btn:hover",
        &[("background", "var(--rs-accent)")],
    );

    rule(
        &mut css,
        ".input.input, .textarea.textarea, .select.select",
        &[
            ("background", "var(--rs-surface-raised)"),
            ("color", "var(--rs-ink)"),
            ("border", "1px solid var(--rs-ink-muted)"),
            ("border-radius", "var(--rs-radius)"),
            ("padding", "calc(var(--rs-gap) / 2)"),
            ("font-family", "var(--rs-font-body)"),
        ],
    );
    rule(
        &mut css,
        ".input.input:focus, .textarea.textarea:focus, .select.select:focus",
        &[
            ("border-color", "var(--rs-primary)"),
            ("outline", "none"),
        ],
    );

    emit_decoration(&mut css, style);

    css
}

/// Append the per-template decorative treatment.
fn emit_decoration(css: &mut String, style: &ResolvedStyle) {
    let p = &style.params;
    match p.decoration {
        Decoration::None => {}
        Decoration::Frosted => {
            let glass = match p.scheme {
                Scheme::Light => "rgba(255, 255, 255, 0.55)",
                Scheme::Dark => "rgba(22, 27, 34, 0.55)",
            };
            rule(
                css,
                ".card.card",
                &[
                    ("background", glass),
                    ("backdrop-filter", "blur(14px)"),
                    ("-webkit-backdrop-filter", "blur(14px)"),
                    ("border", "1px solid rgba(255, 255, 255, 0.40)"),
                ],
            );
        }
        Decoration::CandyStripe => {
            rule(css, ".card.card", &[("border-top", "6px solid var(--rs-accent)")]);
            let stripes = format!(
                "repeating-linear-gradient(45deg, transparent, transparent 24px, {0}14 24px, {0}14 48px)",
                p.accent.hex()
            );
            rule(css, "body", &[("background-image", &stripes)]);
        }
        Decoration::Scanlines => {
            rule(
                css,
                "body",
                &[(
                    "background-image",
                    "repeating-linear-gradient(0deg, rgba(0, 0, 0, 0.18) 0, rgba(0, 0, 0, 0.18) 1px, transparent 1px, transparent 3px)",
                )],
            );
            rule(
                css,
                ".btn.btn, button.btn",
                &[
                    ("box-shadow", "3px 3px 0 var(--rs-accent)"),
                    ("text-transform", "uppercase"),
                ],
            );
        }
        Decoration::AccentBar => {
            rule(
                css,
                "h1, h2, h3",
                &[
                    ("border-left", "6px solid var(--rs-accent)"),
                    ("padding-left", "var(--rs-gap)"),
                ],
            );
        }
    }
}

/// Append one rule block. Declarations keep their given order.
fn rule(out: &mut String, selector: &str, decls: &[(&str, &str)]) {
    out.push_str(selector);
    out.push_str(" {\n");
    for (prop, value) in decls {
        out.push_str(&format!("  {prop}: {value};\n"));
    }
    out.push_str("}\n\n");
}
