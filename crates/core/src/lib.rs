#![deny(unsafe_code)]
//! Core color model for the swatch picker.
//!
//! Provides the color value types (`Hsva`, `Rgba`, `Hsla`, `Cmyk`) with
//! `Hsva` as the canonical hub, pure conversion functions between them,
//! a tolerant string parser, byte-exact output formatting, and the
//! stateless geometry mapping picker surfaces to color components.
//!
//! Everything is a pure computation over immutable inputs: no shared
//! state, no blocking, no I/O. The one fallible operation is parsing,
//! which returns [`ColorError::InvalidColor`]; ownership of "the current
//! color" belongs to the caller.

pub mod color;
pub mod error;
pub mod format;
pub mod parse;
pub mod slider;

pub use color::{
    cmyk_to_rgba, hex_to_rgba, hsla_to_hsva, hsva_to_hsla, hsva_to_rgba, rgba_to_cmyk,
    rgba_to_hex, rgba_to_hsva, Cmyk, Hsla, Hsva, Rgba,
};
pub use error::ColorError;
pub use format::{format, preview_string, ColorViews, OutputFormat};
pub use parse::{parse, parse_with_alpha, AlphaChannel};
pub use slider::{
    position_from_value, value_from_position, SliderDimension, SliderPosition, Surface,
    SurfaceValue,
};
