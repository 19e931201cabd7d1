//! Exact string formatting for each output format, plus the CSS preview
//! string and the bundle of derived representations.
//!
//! The output strings are a stable contract: external form fields and
//! stored preferences round-trip through them, so their shape (comma
//! spacing, percent rounding, alpha decimals) must not drift.

use crate::color::{
    hsva_to_hsla, hsva_to_rgba, rgba_to_cmyk, rgba_to_hex, Cmyk, Hsla, Hsva, Rgba,
};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// The externally visible serialization format for a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Hex,
    Rgba,
    Hsla,
    Cmyk,
}

impl OutputFormat {
    /// Resolves a format name, accepting the legacy `rgb`/`hsl` aliases.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name.to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "rgba" | "rgb" => Ok(OutputFormat::Rgba),
            "hsla" | "hsl" => Ok(OutputFormat::Hsla),
            "cmyk" => Ok(OutputFormat::Cmyk),
            other => Err(ColorError::UnknownFormat(other.to_string())),
        }
    }

    /// The canonical lowercase name of this format.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Hex => "hex",
            OutputFormat::Rgba => "rgba",
            OutputFormat::Hsla => "hsla",
            OutputFormat::Cmyk => "cmyk",
        }
    }
}

/// Alpha as at most two decimals with trailing zeros dropped:
/// `1`, `0.5`, `0.23`, `0`.
fn format_alpha(a: f64) -> String {
    format!("{}", (a * 100.0).round() / 100.0)
}

/// Integer percent, rounded half away from zero.
fn percent(x: f64) -> f64 {
    (x * 100.0).round()
}

/// Formats a color in the given output format.
///
/// `use_alpha` only affects hex output, where it appends the alpha byte as
/// two more hex digits; `rgba` and `hsla` always carry their alpha
/// component and `cmyk` never does.
pub fn format(hsva: Hsva, output: OutputFormat, use_alpha: bool) -> String {
    match output {
        OutputFormat::Hex => rgba_to_hex(hsva_to_rgba(hsva), use_alpha),
        OutputFormat::Rgba => {
            let rgba = hsva_to_rgba(hsva);
            format!(
                "rgba({},{},{},{})",
                rgba.r,
                rgba.g,
                rgba.b,
                format_alpha(rgba.a)
            )
        }
        OutputFormat::Hsla => {
            let hsla = hsva_to_hsla(hsva);
            format!(
                "hsla({},{}%,{}%,{})",
                hsla.h.round(),
                percent(hsla.s),
                percent(hsla.l),
                format_alpha(hsla.a)
            )
        }
        OutputFormat::Cmyk => {
            let cmyk = rgba_to_cmyk(hsva_to_rgba(hsva));
            format!(
                "cmyk({}%,{}%,{}%,{}%)",
                percent(cmyk.c),
                percent(cmyk.m),
                percent(cmyk.y),
                percent(cmyk.k)
            )
        }
    }
}

/// CSS style-attribute preview string, always derived from RGBA:
/// `rgb(R, G, B)` when opaque, `rgba(R, G, B, A)` otherwise.
pub fn preview_string(hsva: Hsva) -> String {
    let rgba = hsva_to_rgba(hsva);
    if rgba.a >= 1.0 {
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            rgba.r,
            rgba.g,
            rgba.b,
            format_alpha(rgba.a)
        )
    }
}

/// Every derived representation of one canonical color.
///
/// Built on demand after any color change; nothing here is independently
/// mutable, the HSVA field is the source the rest were derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorViews {
    pub hsva: Hsva,
    pub rgba: Rgba,
    pub hsla: Hsla,
    pub cmyk: Cmyk,
    pub hex: String,
}

impl ColorViews {
    /// Derives all representations from a canonical HSVA color.
    ///
    /// The hex field is the 6-digit form; alpha stays visible in the
    /// `rgba`/`hsla` fields.
    pub fn derive(hsva: Hsva) -> Self {
        let rgba = hsva_to_rgba(hsva);
        Self {
            hsva,
            rgba,
            hsla: hsva_to_hsla(hsva),
            cmyk: rgba_to_cmyk(rgba),
            hex: rgba_to_hex(rgba, false),
        }
    }
}
