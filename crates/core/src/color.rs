//! Color value types and conversion functions for the swatch core.
//!
//! Provides four color types (`Hsva`, `Rgba`, `Hsla`, `Cmyk`) and pure
//! conversion functions between them, with `Hsva` as the hub: every other
//! representation is derived from it and every input is normalized into it.
//! Uses `f64` throughout for precision.
//!
//! Round-tripping RGBA through HSVA is exact for integer channels; hex
//! round-trips have 8-bit quantization (1/255 precision loss), which is
//! acceptable since hex colors are inherently 8-bit.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// Hue/saturation/value/alpha color, the canonical representation.
///
/// `h` is in degrees [0, 360); `s`, `v`, and `a` are in [0, 1].
/// Values are immutable snapshots: construct a new one on every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

/// Red/green/blue/alpha color with 8-bit channels and alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Hue/saturation/lightness/alpha color.
///
/// `h` is in degrees [0, 360); `s`, `l`, and `a` are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// Cyan/magenta/yellow/key color, components in [0, 1].
///
/// Subtractive model with no alpha channel; formatted as 0-100%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// Wraps a hue in degrees into [0, 360). NaN collapses to 0.
fn wrap_hue(h: f64) -> f64 {
    if h.is_nan() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative can land exactly on 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamps a unit-interval component to [0, 1]. NaN collapses to 0.
fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Rounds a unit-interval channel to an 8-bit value, half away from zero.
fn to_channel(x: f64) -> u8 {
    (clamp_unit(x) * 255.0).round() as u8
}

impl Hsva {
    /// Creates an HSVA color, wrapping hue modulo 360 and clamping the
    /// other components to [0, 1].
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
            a: clamp_unit(a),
        }
    }
}

impl Rgba {
    /// Creates an RGBA color, clamping alpha to [0, 1].
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_unit(a),
        }
    }
}

impl Hsla {
    /// Creates an HSLA color, wrapping hue modulo 360 and clamping the
    /// other components to [0, 1].
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
            a: clamp_unit(a),
        }
    }
}

impl Cmyk {
    /// Creates a CMYK color with all components clamped to [0, 1].
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self {
            c: clamp_unit(c),
            m: clamp_unit(m),
            y: clamp_unit(y),
            k: clamp_unit(k),
        }
    }
}

/// Converts RGBA to HSVA via the max/min-channel algorithm.
///
/// Achromatic colors (max == min) get hue 0 by convention; black gets
/// saturation 0.
pub fn rgba_to_hsva(rgba: Rgba) -> Hsva {
    let r = rgba.r as f64 / 255.0;
    let g = rgba.g as f64 / 255.0;
    let b = rgba.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsva::new(h, s, v, rgba.a)
}

/// Converts HSVA to RGBA via the six 60-degree hue sectors.
///
/// Channel outputs are rounded half away from zero to [0, 255].
pub fn hsva_to_rgba(hsva: Hsva) -> Rgba {
    let sector = hsva.h / 60.0;
    let f = sector - sector.floor();
    let v = hsva.v;
    let p = v * (1.0 - hsva.s);
    let q = v * (1.0 - f * hsva.s);
    let t = v * (1.0 - (1.0 - f) * hsva.s);

    // hue is in [0, 360), so the sector index is in 0..=5
    let (r, g, b) = match sector.floor() as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgba::new(to_channel(r), to_channel(g), to_channel(b), hsva.a)
}

/// Converts HSVA to HSLA.
///
/// Lightness is `v - v*s/2`; HSL saturation is re-derived from it.
/// Achromatic extremes (`l == 0` or `l == 1`) force saturation 0.
pub fn hsva_to_hsla(hsva: Hsva) -> Hsla {
    let l = hsva.v * (1.0 - hsva.s / 2.0);
    let s = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (hsva.v - l) / l.min(1.0 - l)
    };
    Hsla::new(hsva.h, s, l, hsva.a)
}

/// Converts HSLA to HSVA (inverse of [`hsva_to_hsla`]).
pub fn hsla_to_hsva(hsla: Hsla) -> Hsva {
    let v = hsla.l + hsla.s * hsla.l.min(1.0 - hsla.l);
    let s = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - hsla.l / v) };
    Hsva::new(hsla.h, s, v, hsla.a)
}

/// Converts RGBA to CMYK. Alpha is not representable and is dropped.
///
/// Pure black (`k == 1`) yields `c = m = y = 0` to avoid division by zero.
pub fn rgba_to_cmyk(rgba: Rgba) -> Cmyk {
    let r = rgba.r as f64 / 255.0;
    let g = rgba.g as f64 / 255.0;
    let b = rgba.b as f64 / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    Cmyk::new(c, m, y, k)
}

/// Converts CMYK to RGBA (inverse of [`rgba_to_cmyk`]), opaque alpha.
pub fn cmyk_to_rgba(cmyk: Cmyk) -> Rgba {
    let r = (1.0 - cmyk.c) * (1.0 - cmyk.k);
    let g = (1.0 - cmyk.m) * (1.0 - cmyk.k);
    let b = (1.0 - cmyk.y) * (1.0 - cmyk.k);
    Rgba::new(to_channel(r), to_channel(g), to_channel(b), 1.0)
}

/// Parses a hex color string like `"#1a2b3c"`, `"1a2b3c"`, or `"#abc"`
/// (case insensitive).
///
/// Accepts 3 hex digits (each digit doubled), 6 digits, and, when
/// `alpha_expected` is true, 8 digits with the last byte as alpha.
///
/// Returns `ColorError::InvalidColor` for any other length or for
/// non-hex characters.
pub fn hex_to_rgba(hex: &str, alpha_expected: bool) -> Result<Rgba, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColor(format!(
            "non-hex character in '{hex}'"
        )));
    }

    let byte = |range: std::ops::Range<usize>| -> Result<u8, ColorError> {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid hex component: {e}")))
    };

    match digits.len() {
        3 => {
            let nibble = |range: std::ops::Range<usize>| byte(range).map(|n| n * 17);
            Ok(Rgba::new(
                nibble(0..1)?,
                nibble(1..2)?,
                nibble(2..3)?,
                1.0,
            ))
        }
        6 => Ok(Rgba::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, 1.0)),
        8 if alpha_expected => Ok(Rgba::new(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)? as f64 / 255.0,
        )),
        len if alpha_expected => Err(ColorError::InvalidColor(format!(
            "expected 3, 6, or 8 hex digits, got {len}"
        ))),
        len => Err(ColorError::InvalidColor(format!(
            "expected 3 or 6 hex digits, got {len}"
        ))),
    }
}

/// Formats a color as a lowercase hex string like `"#1a2b3c"`.
///
/// Appends the alpha channel as two more hex digits (0-255 scale) only
/// when `include_alpha` is true.
pub fn rgba_to_hex(rgba: Rgba, include_alpha: bool) -> String {
    let mut hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    if include_alpha {
        let a = (rgba.a * 255.0).round() as u8;
        hex.push_str(&format!("{a:02x}"));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Constructor clamping --

    #[test]
    fn hsva_new_wraps_hue_past_360() {
        let c = Hsva::new(400.0, 0.5, 0.5, 1.0);
        assert!(approx_eq(c.h, 40.0), "expected 40, got {}", c.h);
    }

    #[test]
    fn hsva_new_wraps_negative_hue() {
        let c = Hsva::new(-30.0, 0.5, 0.5, 1.0);
        assert!(approx_eq(c.h, 330.0), "expected 330, got {}", c.h);
    }

    #[test]
    fn hsva_new_clamps_out_of_range_components() {
        let c = Hsva::new(10.0, 1.5, -0.5, 2.0);
        assert_eq!(c.s, 1.0);
        assert_eq!(c.v, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hsva_new_collapses_nan_to_zero() {
        let c = Hsva::new(f64::NAN, f64::NAN, 0.5, 1.0);
        assert_eq!(c.h, 0.0);
        assert_eq!(c.s, 0.0);
    }

    #[test]
    fn rgba_new_clamps_alpha() {
        assert_eq!(Rgba::new(0, 0, 0, 1.5).a, 1.0);
        assert_eq!(Rgba::new(0, 0, 0, -0.5).a, 0.0);
    }

    // -- RGBA <-> HSVA --

    #[test]
    fn pure_red_has_hue_zero_full_saturation() {
        let hsva = rgba_to_hsva(Rgba::new(255, 0, 0, 1.0));
        assert!(approx_eq(hsva.h, 0.0));
        assert!(approx_eq(hsva.s, 1.0));
        assert!(approx_eq(hsva.v, 1.0));
    }

    #[test]
    fn pure_green_has_hue_120() {
        let hsva = rgba_to_hsva(Rgba::new(0, 255, 0, 1.0));
        assert!(approx_eq(hsva.h, 120.0), "got {}", hsva.h);
    }

    #[test]
    fn pure_blue_has_hue_240() {
        let hsva = rgba_to_hsva(Rgba::new(0, 0, 255, 1.0));
        assert!(approx_eq(hsva.h, 240.0), "got {}", hsva.h);
    }

    #[test]
    fn achromatic_gray_has_zero_hue_and_saturation() {
        let hsva = rgba_to_hsva(Rgba::new(128, 128, 128, 1.0));
        assert_eq!(hsva.h, 0.0, "achromatic hue must be 0 by convention");
        assert_eq!(hsva.s, 0.0);
        assert!(approx_eq(hsva.v, 128.0 / 255.0));
    }

    #[test]
    fn black_has_zero_saturation_and_value() {
        let hsva = rgba_to_hsva(Rgba::new(0, 0, 0, 1.0));
        assert_eq!(hsva.h, 0.0);
        assert_eq!(hsva.s, 0.0);
        assert_eq!(hsva.v, 0.0);
    }

    #[test]
    fn hue_sectors_map_to_primaries_and_secondaries() {
        let cases = [
            (0.0, (255, 0, 0)),
            (60.0, (255, 255, 0)),
            (120.0, (0, 255, 0)),
            (180.0, (0, 255, 255)),
            (240.0, (0, 0, 255)),
            (300.0, (255, 0, 255)),
        ];
        for (h, (r, g, b)) in cases {
            let rgba = hsva_to_rgba(Hsva::new(h, 1.0, 1.0, 1.0));
            assert_eq!((rgba.r, rgba.g, rgba.b), (r, g, b), "hue {h}");
        }
    }

    #[test]
    fn rgba_round_trip_known_colors() {
        let colors = [
            Rgba::new(189, 64, 64, 1.0),
            Rgba::new(40, 137, 229, 1.0),
            Rgba::new(18, 52, 86, 0.5),
            Rgba::new(0, 0, 0, 0.0),
            Rgba::new(255, 255, 255, 1.0),
            Rgba::new(1, 2, 3, 0.25),
        ];
        for color in colors {
            let round_tripped = hsva_to_rgba(rgba_to_hsva(color));
            assert_eq!(round_tripped, color);
        }
    }

    #[test]
    fn rgba_to_hsva_preserves_alpha() {
        let hsva = rgba_to_hsva(Rgba::new(10, 20, 30, 0.42));
        assert!(approx_eq(hsva.a, 0.42));
    }

    // -- HSVA <-> HSLA --

    #[test]
    fn hsva_to_hsla_known_color() {
        // #123456: hue 210, HSL saturation ~65.4%, lightness ~20.4%
        let hsva = rgba_to_hsva(Rgba::new(18, 52, 86, 1.0));
        let hsla = hsva_to_hsla(hsva);
        assert!(approx_eq(hsla.h, 210.0), "h: {}", hsla.h);
        assert!((hsla.s - 0.6538).abs() < 1e-3, "s: {}", hsla.s);
        assert!((hsla.l - 0.2039).abs() < 1e-3, "l: {}", hsla.l);
    }

    #[test]
    fn hsva_to_hsla_black_forces_zero_saturation() {
        let hsla = hsva_to_hsla(Hsva::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(hsla.s, 0.0);
        assert_eq!(hsla.l, 0.0);
    }

    #[test]
    fn hsva_to_hsla_white_forces_zero_saturation() {
        let hsla = hsva_to_hsla(Hsva::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(hsla.s, 0.0);
        assert_eq!(hsla.l, 1.0);
    }

    #[test]
    fn hsla_round_trip_preserves_components() {
        let original = Hsva::new(210.0, 0.7907, 0.3373, 0.8);
        let round_tripped = hsla_to_hsva(hsva_to_hsla(original));
        assert!(approx_eq(round_tripped.h, original.h), "h: {}", round_tripped.h);
        assert!(approx_eq(round_tripped.s, original.s), "s: {}", round_tripped.s);
        assert!(approx_eq(round_tripped.v, original.v), "v: {}", round_tripped.v);
        assert!(approx_eq(round_tripped.a, original.a), "a: {}", round_tripped.a);
    }

    #[test]
    fn hsla_to_hsva_full_lightness_is_white() {
        let hsva = hsla_to_hsva(Hsla::new(120.0, 1.0, 1.0, 1.0));
        let rgba = hsva_to_rgba(hsva);
        assert_eq!((rgba.r, rgba.g, rgba.b), (255, 255, 255));
    }

    // -- CMYK --

    #[test]
    fn rgba_to_cmyk_known_color() {
        // #654321 -> cmyk(0%, 34%, 67%, 60%) after percent rounding
        let cmyk = rgba_to_cmyk(Rgba::new(101, 67, 33, 1.0));
        assert!(approx_eq(cmyk.c, 0.0), "c: {}", cmyk.c);
        assert!((cmyk.m * 100.0).round() == 34.0, "m: {}", cmyk.m);
        assert!((cmyk.y * 100.0).round() == 67.0, "y: {}", cmyk.y);
        assert!((cmyk.k * 100.0).round() == 60.0, "k: {}", cmyk.k);
    }

    #[test]
    fn pure_black_yields_zero_cmy() {
        let cmyk = rgba_to_cmyk(Rgba::new(0, 0, 0, 1.0));
        assert_eq!(cmyk.c, 0.0);
        assert_eq!(cmyk.m, 0.0);
        assert_eq!(cmyk.y, 0.0);
        assert_eq!(cmyk.k, 1.0);
    }

    #[test]
    fn white_has_zero_key() {
        let cmyk = rgba_to_cmyk(Rgba::new(255, 255, 255, 1.0));
        assert_eq!(cmyk.k, 0.0);
        assert_eq!(cmyk.c, 0.0);
    }

    #[test]
    fn cmyk_round_trip_known_color() {
        let original = Rgba::new(101, 67, 33, 1.0);
        let round_tripped = cmyk_to_rgba(rgba_to_cmyk(original));
        assert_eq!(round_tripped, original);
    }

    // -- Hex parsing --

    #[test]
    fn hex3_doubles_each_digit() {
        let rgba = hex_to_rgba("#BC4", false).unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (187, 204, 68));
        assert!(approx_eq(rgba.a, 1.0));
    }

    #[test]
    fn hex6_parses_with_hash() {
        let rgba = hex_to_rgba("#bff666", false).unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (191, 246, 102));
    }

    #[test]
    fn hex6_parses_without_hash() {
        let rgba = hex_to_rgba("2889e5", false).unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (40, 137, 229));
    }

    #[test]
    fn hex_is_case_insensitive() {
        let upper = hex_to_rgba("#BFF666", false).unwrap();
        let lower = hex_to_rgba("#bff666", false).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn hex8_carries_alpha_when_expected() {
        let rgba = hex_to_rgba("#12345680", true).unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (18, 52, 86));
        assert!((rgba.a - 128.0 / 255.0).abs() < EPSILON, "a: {}", rgba.a);
    }

    #[test]
    fn hex8_rejected_when_alpha_not_expected() {
        assert!(hex_to_rgba("#12345680", false).is_err());
    }

    #[test]
    fn hex_rejects_wrong_lengths() {
        assert!(hex_to_rgba("#12345", false).is_err());
        assert!(hex_to_rgba("#1234567", true).is_err());
        assert!(hex_to_rgba("", false).is_err());
        assert!(hex_to_rgba("#", false).is_err());
    }

    #[test]
    fn hex_rejects_non_hex_characters() {
        assert!(hex_to_rgba("#gggggg", false).is_err());
        assert!(hex_to_rgba("#12x456", false).is_err());
        assert!(hex_to_rgba("#+1234", false).is_err());
        assert!(hex_to_rgba("#ффффф", false).is_err());
    }

    // -- Hex formatting --

    #[test]
    fn rgba_to_hex_is_lowercase_with_hash() {
        assert_eq!(rgba_to_hex(Rgba::new(189, 64, 64, 1.0), false), "#bd4040");
    }

    #[test]
    fn rgba_to_hex_appends_alpha_when_requested() {
        assert_eq!(
            rgba_to_hex(Rgba::new(18, 52, 86, 128.0 / 255.0), true),
            "#12345680"
        );
    }

    #[test]
    fn rgba_to_hex_omits_alpha_by_default() {
        assert_eq!(rgba_to_hex(Rgba::new(18, 52, 86, 0.5), false), "#123456");
    }

    #[test]
    fn hex6_round_trip() {
        let original = "#c0ffee";
        let rgba = hex_to_rgba(original, false).unwrap();
        assert_eq!(rgba_to_hex(rgba, false), original);
    }

    // -- Serde --

    #[test]
    fn hsva_json_round_trip() {
        let original = Hsva::new(210.0, 0.65, 0.34, 0.5);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Hsva = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn rgba_json_contains_expected_keys() {
        let v = serde_json::to_value(Rgba::new(40, 137, 229, 1.0)).unwrap();
        assert_eq!(v.get("r").and_then(|x| x.as_u64()), Some(40));
        assert_eq!(v.get("g").and_then(|x| x.as_u64()), Some(137));
        assert_eq!(v.get("b").and_then(|x| x.as_u64()), Some(229));
        assert!(v.get("a").is_some());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgba_hsva_round_trip_is_exact(
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
                a in 0.0f64..=1.0,
            ) {
                let original = Rgba::new(r, g, b, a);
                let round_tripped = hsva_to_rgba(rgba_to_hsva(original));
                prop_assert_eq!(round_tripped.r, original.r);
                prop_assert_eq!(round_tripped.g, original.g);
                prop_assert_eq!(round_tripped.b, original.b);
                prop_assert!((round_tripped.a - original.a).abs() < 1e-12);
            }

            #[test]
            fn rgba_to_hsva_hue_is_in_range(
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
            ) {
                let hsva = rgba_to_hsva(Rgba::new(r, g, b, 1.0));
                prop_assert!(hsva.h >= 0.0 && hsva.h < 360.0, "hue: {}", hsva.h);
                prop_assert!(hsva.s >= 0.0 && hsva.s <= 1.0);
                prop_assert!(hsva.v >= 0.0 && hsva.v <= 1.0);
            }

            #[test]
            fn hsla_round_trip_within_epsilon(
                h in 0.0f64..360.0,
                s in 0.0f64..=1.0,
                v in 0.0f64..=1.0,
            ) {
                let original = Hsva::new(h, s, v, 1.0);
                let round_tripped = hsla_to_hsva(hsva_to_hsla(original));
                // Saturation is indeterminate when value is 0, hue when
                // saturation is 0; those collapse by convention instead.
                prop_assert!((round_tripped.v - original.v).abs() < 1e-9,
                    "v: {} vs {}", round_tripped.v, original.v);
                if original.v > 1e-9 && original.s > 1e-9 {
                    prop_assert!((round_tripped.s - original.s).abs() < 1e-9,
                        "s: {} vs {}", round_tripped.s, original.s);
                }
            }

            #[test]
            fn hex6_round_trip_lowercased(
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
            ) {
                let hex = rgba_to_hex(Rgba::new(r, g, b, 1.0), false);
                let parsed = hex_to_rgba(&hex, false).unwrap();
                prop_assert_eq!(rgba_to_hex(parsed, false), hex);
            }

            #[test]
            fn cmyk_components_stay_in_unit_range(
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
            ) {
                let cmyk = rgba_to_cmyk(Rgba::new(r, g, b, 1.0));
                for x in [cmyk.c, cmyk.m, cmyk.y, cmyk.k] {
                    prop_assert!((0.0..=1.0).contains(&x), "component: {x}");
                }
            }
        }
    }
}
