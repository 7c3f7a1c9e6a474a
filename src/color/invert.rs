//! Reverse-video color inversion

use tracing::warn;

use super::value::ColorValue;
use crate::errors::ColorError;

/// Reverse-video a color, or return it unchanged if that is not possible
///
/// Each channel becomes `1 - value` and alpha is preserved (RGB inputs come
/// back as opaque RGBA). Names are resolved first. `"none"` is returned as is
/// and sequences are inverted element by element. A color that cannot be
/// resolved is reported and handed back untouched.
pub fn invert(value: &ColorValue) -> ColorValue {
    match try_invert(value) {
        Ok(inverted) => inverted,
        Err(e) => {
            warn!("cannot reverse color {}: {}", value, e);
            value.clone()
        }
    }
}

/// Strict form of [`invert`]
pub fn try_invert(value: &ColorValue) -> Result<ColorValue, ColorError> {
    match value {
        none if none.is_none() => Ok(none.clone()),
        ColorValue::Seq(items) => items
            .iter()
            .map(reverse_one)
            .collect::<Result<Vec<_>, _>>()
            .map(ColorValue::Seq),
        single => reverse_one(single),
    }
}

fn reverse_one(color: &ColorValue) -> Result<ColorValue, ColorError> {
    match color {
        ColorValue::Rgba([r, g, b, a]) => Ok(ColorValue::rgba(1.0 - r, 1.0 - g, 1.0 - b, *a)),
        ColorValue::Rgb([r, g, b]) => Ok(ColorValue::rgba(1.0 - r, 1.0 - g, 1.0 - b, 1.0)),
        ColorValue::Name(_) if !color.is_none() => {
            let [r, g, b, a] = color.to_rgba()?;
            Ok(ColorValue::rgba(1.0 - r, 1.0 - g, 1.0 - b, a))
        }
        ColorValue::None | ColorValue::Name(_) => {
            Err(ColorError::invalid("\"none\" inside a color sequence"))
        }
        ColorValue::Seq(_) => Err(ColorError::invalid("nested color sequence")),
    }
}
