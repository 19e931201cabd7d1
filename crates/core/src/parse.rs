//! Tolerant string parser: any recognized color notation into [`Hsva`].
//!
//! The parser is an ordered sequence of independent pattern attempts (hex,
//! then `rgb`/`rgba`, then `hsl`/`hsla`, then `cmyk`), each returning
//! success or failure, so adding a new notation is additive. Failure is a
//! typed [`ColorError::InvalidColor`], never a panic; the caller decides
//! any fallback behavior.
//!
//! Out-of-range numeric components are clamped or wrapped, not rejected:
//! interactive editing routinely produces transient out-of-range values.
//! Only a malformed *string* is rejected.

use crate::color::{
    cmyk_to_rgba, hex_to_rgba, hsla_to_hsva, rgba_to_hsva, Cmyk, Hsla, Hsva, Rgba,
};
use crate::error::ColorError;

/// Whether hex strings carry an alpha byte.
///
/// `Hex6` is the default: 8-digit hex input is rejected and hex output has
/// no alpha digits. `Hex8` enables the `#rrggbbaa` form on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaChannel {
    #[default]
    Hex6,
    Hex8,
}

/// Parses a color string into the canonical HSVA representation.
///
/// Equivalent to [`parse_with_alpha`] with [`AlphaChannel::Hex6`].
pub fn parse(input: &str) -> Result<Hsva, ColorError> {
    parse_with_alpha(input, AlphaChannel::Hex6)
}

/// Parses a color string into HSVA with an explicit hex alpha mode.
///
/// Recognized notations, tried in order:
/// 1. Hex: optional `#`, then 3, 6, or (in `Hex8` mode) 8 hex digits.
/// 2. `rgb(r,g,b)` / `rgba(r,g,b[,a])` — integer channels clamped to
///    [0, 255], alpha a float clamped to [0, 1] (default 1).
/// 3. `hsl(h,s%,l%)` / `hsla(h,s%,l%[,a])` — integer degrees wrapped
///    modulo 360, percentages clamped.
/// 4. `cmyk(c%,m%,y%,k%)` — four percentages, no alpha.
///
/// Whitespace around delimiters is tolerated. Component counts must match
/// the notation exactly (`rgb` with four components is invalid).
pub fn parse_with_alpha(input: &str, alpha: AlphaChannel) -> Result<Hsva, ColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::InvalidColor("empty string".into()));
    }

    try_hex(s, alpha)
        .or_else(|| try_rgb(s))
        .or_else(|| try_hsl(s))
        .or_else(|| try_cmyk(s))
        .ok_or_else(|| {
            ColorError::InvalidColor(format!("'{s}' does not match any supported notation"))
        })
}

/// Splits `name(a, b, c)` into trimmed argument slices.
///
/// The function name match is case insensitive; returns `None` when the
/// string is not a call of that exact name.
fn call_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let prefix = s.get(..name.len())?;
    if !prefix.eq_ignore_ascii_case(name) {
        return None;
    }
    let body = s[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .trim_end()
        .strip_suffix(')')?;
    Some(body.split(',').map(str::trim).collect())
}

/// Integer channel in [0, 255]; out-of-range values clamp.
fn parse_channel(s: &str) -> Option<u8> {
    s.parse::<i64>().ok().map(|v| v.clamp(0, 255) as u8)
}

/// Float alpha in [0, 1]; out-of-range values clamp.
fn parse_alpha(s: &str) -> Option<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
}

/// Percentage with a required `%` suffix, clamped to [0, 100], as [0, 1].
fn parse_percent(s: &str) -> Option<f64> {
    s.strip_suffix('%')?
        .trim_end()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 100.0) / 100.0)
}

fn try_hex(s: &str, alpha: AlphaChannel) -> Option<Hsva> {
    hex_to_rgba(s, alpha == AlphaChannel::Hex8)
        .ok()
        .map(rgba_to_hsva)
}

fn try_rgb(s: &str) -> Option<Hsva> {
    let (args, alpha_form) = match call_args(s, "rgba") {
        Some(args) => (args, true),
        None => (call_args(s, "rgb")?, false),
    };
    let arity_ok = args.len() == 3 || (alpha_form && args.len() == 4);
    if !arity_ok {
        return None;
    }

    let r = parse_channel(args[0])?;
    let g = parse_channel(args[1])?;
    let b = parse_channel(args[2])?;
    let a = match args.get(3) {
        Some(arg) => parse_alpha(arg)?,
        None => 1.0,
    };
    Some(rgba_to_hsva(Rgba::new(r, g, b, a)))
}

fn try_hsl(s: &str) -> Option<Hsva> {
    let (args, alpha_form) = match call_args(s, "hsla") {
        Some(args) => (args, true),
        None => (call_args(s, "hsl")?, false),
    };
    let arity_ok = args.len() == 3 || (alpha_form && args.len() == 4);
    if !arity_ok {
        return None;
    }

    let h = args[0].parse::<i64>().ok()? as f64;
    let s_pct = parse_percent(args[1])?;
    let l_pct = parse_percent(args[2])?;
    let a = match args.get(3) {
        Some(arg) => parse_alpha(arg)?,
        None => 1.0,
    };
    // Hsla::new wraps the degree value modulo 360
    Some(hsla_to_hsva(Hsla::new(h, s_pct, l_pct, a)))
}

fn try_cmyk(s: &str) -> Option<Hsva> {
    let args = call_args(s, "cmyk")?;
    if args.len() != 4 {
        return None;
    }

    let c = parse_percent(args[0])?;
    let m = parse_percent(args[1])?;
    let y = parse_percent(args[2])?;
    let k = parse_percent(args[3])?;
    Some(rgba_to_hsva(cmyk_to_rgba(Cmyk::new(c, m, y, k))))
}
