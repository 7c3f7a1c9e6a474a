//! Color value model

use std::fmt;

use super::names::lookup_name;
use crate::canvas::Color;
use crate::errors::ColorError;

/// A color as attached to a drawable object
///
/// Mirrors the shapes a plotting host hands out: the `"none"` sentinel, a
/// named token, a bare RGB or RGBA tuple, or an ordered sequence of those
/// (per-element colors of a collection).
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// Nothing is painted
    None,
    /// Named or hex token, resolved through [`lookup_name`]
    Name(String),
    Rgb([f64; 3]),
    Rgba([f64; 4]),
    Seq(Vec<ColorValue>),
}

impl ColorValue {
    pub fn name(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "none" {
            ColorValue::None
        } else {
            ColorValue::Name(name)
        }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        ColorValue::Rgb([r, g, b])
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        ColorValue::Rgba([r, g, b, a])
    }

    /// The "none" sentinel, including a raw `Name("none")`
    pub fn is_none(&self) -> bool {
        match self {
            ColorValue::None => true,
            ColorValue::Name(name) => name == "none",
            _ => false,
        }
    }

    /// Number of colors carried (1 for scalars, 0 for "none")
    pub fn len(&self) -> usize {
        match self {
            none if none.is_none() => 0,
            ColorValue::Seq(items) => items.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a single color to an RGBA quadruple
    ///
    /// RGB tuples get an opaque alpha. Sequences and "none" are not single
    /// colors and are rejected.
    pub fn to_rgba(&self) -> Result<[f64; 4], ColorError> {
        match self {
            ColorValue::Name(name) if name != "none" => lookup_name(name),
            ColorValue::None | ColorValue::Name(_) => {
                Err(ColorError::invalid("\"none\" has no RGBA value"))
            }
            ColorValue::Rgb([r, g, b]) => {
                check_components(&[*r, *g, *b])?;
                Ok([*r, *g, *b, 1.0])
            }
            ColorValue::Rgba(rgba) => {
                check_components(rgba)?;
                Ok(*rgba)
            }
            ColorValue::Seq(items) => Err(ColorError::invalid(format!(
                "sequence of {} colors is not a single color",
                items.len()
            ))),
        }
    }

    /// Resolve every color carried, in order
    pub fn to_rgba_list(&self) -> Result<Vec<[f64; 4]>, ColorError> {
        match self {
            none if none.is_none() => Ok(Vec::new()),
            ColorValue::Seq(items) => items.iter().map(ColorValue::to_rgba).collect(),
            single => Ok(vec![single.to_rgba()?]),
        }
    }

    /// Resolve to the canvas pixel type
    pub fn to_pixel(&self) -> Result<Option<Color>, ColorError> {
        if self.is_none() {
            return Ok(None);
        }
        let rgba = self.to_rgba()?;
        Ok(Some(Color::from_unit(rgba)))
    }
}

fn check_components(components: &[f64]) -> Result<(), ColorError> {
    match components
        .iter()
        .find(|c| !c.is_finite() || **c < 0.0 || **c > 1.0)
    {
        Some(bad) => Err(ColorError::invalid(format!(
            "component {bad} outside [0, 1]"
        ))),
        None => Ok(()),
    }
}

impl From<&str> for ColorValue {
    fn from(name: &str) -> Self {
        ColorValue::name(name)
    }
}

impl From<[f64; 3]> for ColorValue {
    fn from(rgb: [f64; 3]) -> Self {
        ColorValue::Rgb(rgb)
    }
}

impl From<[f64; 4]> for ColorValue {
    fn from(rgba: [f64; 4]) -> Self {
        ColorValue::Rgba(rgba)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::None => f.write_str("none"),
            ColorValue::Name(name) => write!(f, "{name:?}"),
            ColorValue::Rgb([r, g, b]) => write!(f, "({r}, {g}, {b})"),
            ColorValue::Rgba([r, g, b, a]) => write!(f, "({r}, {g}, {b}, {a})"),
            ColorValue::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_sentinel_from_str() {
        assert_eq!(ColorValue::from("none"), ColorValue::None);
        assert_eq!(ColorValue::from("red"), ColorValue::Name("red".into()));
    }

    #[test]
    fn test_rgb_gets_opaque_alpha() {
        let c = ColorValue::rgb(0.25, 0.5, 0.75);
        assert_eq!(c.to_rgba().unwrap(), [0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_out_of_range_component_rejected() {
        assert!(ColorValue::rgb(1.5, 0.0, 0.0).to_rgba().is_err());
        assert!(ColorValue::rgba(0.0, f64::NAN, 0.0, 1.0).to_rgba().is_err());
    }

    #[test]
    fn test_sequence_is_not_single_color() {
        let seq = ColorValue::Seq(vec![ColorValue::rgb(0.0, 0.0, 0.0)]);
        assert!(seq.to_rgba().is_err());
        assert_eq!(seq.to_rgba_list().unwrap().len(), 1);
    }

    #[test]
    fn test_display() {
        let seq = ColorValue::Seq(vec![ColorValue::None, "k".into()]);
        assert_eq!(seq.to_string(), "[none, \"k\"]");
    }
}
