//! Stateless geometry mapping pointer positions on picker surfaces to
//! color components and back.
//!
//! Three surfaces exist: a horizontal hue strip, a horizontal alpha strip,
//! and a 2-D saturation/lightness pad. The forward direction turns a
//! pointer position into the component value(s) that surface controls; the
//! inverse places the selection indicator for a given color. Nothing here
//! knows about drag state or widget coordinates: the caller passes the
//! latest position and surface bounds on every pointer move.

use crate::color::Hsva;
use serde::{Deserialize, Serialize};

/// Width and height of an input surface in pixels.
///
/// Negative or NaN extents collapse to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderDimension {
    pub width: f64,
    pub height: f64,
}

impl SliderDimension {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Pixel offsets within a surface, not required to be pre-clamped.
///
/// Positions outside the surface are legal input: drags routinely
/// overshoot the bounds and are clamped during mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderPosition {
    pub x: f64,
    pub y: f64,
}

impl SliderPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The three pointer-input surfaces of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    /// 1-D horizontal strip controlling hue.
    Hue,
    /// 1-D horizontal strip controlling alpha.
    Alpha,
    /// 2-D pad controlling saturation (x) and value (y, inverted).
    SaturationLightness,
}

/// The component value(s) a surface produced from a pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceValue {
    /// Hue in degrees [0, 360].
    Hue(f64),
    /// Alpha in [0, 1].
    Alpha(f64),
    /// Saturation and value, each in [0, 1].
    SaturationValue { saturation: f64, value: f64 },
}

impl SurfaceValue {
    /// Merges this single updated component into a held color, leaving
    /// every other component untouched.
    pub fn apply_to(self, color: Hsva) -> Hsva {
        match self {
            SurfaceValue::Hue(h) => Hsva::new(h, color.s, color.v, color.a),
            SurfaceValue::Alpha(a) => Hsva::new(color.h, color.s, color.v, a),
            SurfaceValue::SaturationValue { saturation, value } => {
                Hsva::new(color.h, saturation, value, color.a)
            }
        }
    }
}

/// Fraction of `extent` covered by `offset`, clamped to the surface.
///
/// Degenerate surfaces (zero extent) and NaN offsets yield 0 rather than
/// dividing by zero.
fn ratio(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 || offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, extent) / extent
}

/// Maps a pointer position on a surface to the component value(s) that
/// surface controls.
///
/// The position is clamped to the surface bounds first, so a drag that
/// overshoots still yields a valid in-range component.
pub fn value_from_position(
    surface: Surface,
    position: SliderPosition,
    dimension: SliderDimension,
) -> SurfaceValue {
    match surface {
        Surface::Hue => SurfaceValue::Hue(ratio(position.x, dimension.width) * 360.0),
        Surface::Alpha => SurfaceValue::Alpha(ratio(position.x, dimension.width)),
        Surface::SaturationLightness => SurfaceValue::SaturationValue {
            saturation: ratio(position.x, dimension.width),
            value: 1.0 - ratio(position.y, dimension.height),
        },
    }
}

/// Maps a color to the indicator position on a surface (inverse of
/// [`value_from_position`]).
///
/// 1-D strips report `y = 0`.
pub fn position_from_value(
    surface: Surface,
    color: Hsva,
    dimension: SliderDimension,
) -> SliderPosition {
    match surface {
        Surface::Hue => SliderPosition::new(color.h / 360.0 * dimension.width, 0.0),
        Surface::Alpha => SliderPosition::new(color.a * dimension.width, 0.0),
        Surface::SaturationLightness => SliderPosition::new(
            color.s * dimension.width,
            (1.0 - color.v) * dimension.height,
        ),
    }
}
