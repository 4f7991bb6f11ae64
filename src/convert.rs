use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::types::{Bucket, SourceUnit, TargetUnit, ViewportContext};

/// Fixed rem/em equivalence in reference pixels (1rem = 1em = 16px).
/// A design constant, never read from a document's root font size.
pub const REFERENCE_PX_PER_FONT_UNIT: f64 = 16.0;

/// Properties whose lengths scale with the viewport height
pub const HEIGHT_PROPERTIES: &[&str] = &[
    "height",
    "min-height",
    "max-height",
    "top",
    "bottom",
    "margin-top",
    "margin-bottom",
    "padding-top",
    "padding-bottom",
    "line-height",
];

/// Fine-detail properties left in their original units
pub const PASSTHROUGH_PROPERTIES: &[&str] = &[
    "border-width",
    "border-radius",
    "box-shadow",
    "text-shadow",
    "letter-spacing",
    "word-spacing",
    "outline-width",
];

/// Properties whose lengths scale with the viewport width. Every property
/// absent from all three tables lands in the width bucket as well.
pub const WIDTH_PROPERTIES: &[&str] = &[
    "width",
    "max-width",
    "min-width",
    "left",
    "right",
    "margin-left",
    "margin-right",
    "padding-left",
    "padding-right",
    "font-size",
    "border-left-width",
    "border-right-width",
];

// Token patterns capture an unsigned decimal magnitude directly followed by
// the unit suffix. A leading minus sign stays in the surrounding text, so
// negative lengths keep their sign through the rewrite.
static PX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)px").expect("valid pattern"));
static REM_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)rem").expect("valid pattern"));
static EM_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)em").expect("valid pattern"));

// Permissive `property: value;` pattern. Braces are excluded from the value
// so a pseudo-class selector followed by a rule body never reads as one
// giant declaration.
static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z-]+):\s*([^;{}]+);").expect("valid pattern"));

/// Maps a property name to its conversion bucket.
/// Case-sensitive and total; unknown names scale with the viewport width.
#[must_use]
pub fn classify(property: &str) -> Bucket {
    if HEIGHT_PROPERTIES.contains(&property) {
        return Bucket::Height;
    }
    if PASSTHROUGH_PROPERTIES.contains(&property) {
        return Bucket::Passthrough;
    }
    Bucket::Width
}

/// Converts one magnitude from an absolute unit to a viewport percentage
#[must_use]
pub fn convert(
    magnitude: f64,
    source: SourceUnit,
    target: TargetUnit,
    ctx: &ViewportContext,
) -> f64 {
    let px = match source {
        SourceUnit::Px => magnitude,
        SourceUnit::Rem | SourceUnit::Em => magnitude * REFERENCE_PX_PER_FONT_UNIT,
    };
    px / ctx.base_for(target) * 100.0
}

/// Converts one magnitude and renders it in the fixed 4-decimal output form
#[must_use]
pub fn render_converted(
    magnitude: f64,
    source: SourceUnit,
    target: TargetUnit,
    ctx: &ViewportContext,
) -> String {
    format!("{:.4}{target}", convert(magnitude, source, target, ctx))
}

/// Rewrites one declaration value toward its bucket's target unit.
///
/// Only the first unit kind present is rewritten (precedence px, rem, em);
/// tokens of other kinds in the same value stay as written. Passthrough
/// properties and values without a recognised token come back unchanged.
#[must_use]
pub fn rewrite(property: &str, value: &str, ctx: &ViewportContext) -> String {
    let Some(target) = classify(property).target_unit() else {
        return value.to_string();
    };
    let Some(source) = detect_unit(value) else {
        return value.to_string();
    };

    token_pattern(source)
        .replace_all(value, |caps: &Captures<'_>| {
            // the capture is an unsigned decimal, so the parse cannot fail
            let magnitude: f64 = caps[1].parse().unwrap_or(0.0);
            render_converted(magnitude, source, target, ctx)
        })
        .into_owned()
}

/// Rewrites every `property: value;` declaration found in a stylesheet,
/// leaving selectors, braces, comments and at-rule preludes as written.
///
/// Declarations the rewrite actually changed are reserialised in the
/// normalised `property: value;` form; everything else keeps its exact
/// original span.
#[must_use]
pub fn convert_stylesheet(css: &str, ctx: &ViewportContext) -> String {
    DECLARATION
        .replace_all(css, |caps: &Captures<'_>| {
            let property = &caps[1];
            let value = caps[2].trim();
            let rewritten = rewrite(property, value, ctx);
            if rewritten == value {
                caps[0].to_string()
            } else {
                format!("{property}: {rewritten};")
            }
        })
        .into_owned()
}

/// Finds the first unit kind a value should be rewritten from
pub(crate) fn detect_unit(value: &str) -> Option<SourceUnit> {
    [SourceUnit::Px, SourceUnit::Rem, SourceUnit::Em]
        .into_iter()
        .find(|unit| token_pattern(*unit).is_match(value))
}

/// Returns the token pattern for an absolute unit
pub(crate) fn token_pattern(unit: SourceUnit) -> &'static Regex {
    match unit {
        SourceUnit::Px => &PX_TOKEN,
        SourceUnit::Rem => &REM_TOKEN,
        SourceUnit::Em => &EM_TOKEN,
    }
}
