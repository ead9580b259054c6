// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::PathBuf;

use serde::Deserialize;
use tiny_skia::{Color, Pixmap};

use crate::{Error, Orientation, PolygonAttributes, Theme};

/// A declarative view style.
///
/// All fields are optional. Missing fields use the defaults from [`PolygonAttributes`].
///
/// # Examples
///
/// ```
/// use polygon_view::{PolygonStyle, Theme};
///
/// let style = PolygonStyle::from_toml_str(r##"
///     num_of_sides = 6
///     border_colour = "#FF0000"
///     dash_width = 4.0
///     dash_gap = 2.0
/// "##).unwrap();
///
/// let attrs = style.into_attributes(&Theme::default()).unwrap();
/// assert_eq!(attrs.sides, 6);
/// ```
#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolygonStyle {
    /// `horizontal` or `vertical`.
    pub orientation: Option<Orientation>,
    #[allow(missing_docs)]
    pub border_radius: Option<f32>,
    /// `#RRGGBB` or `#AARRGGBB`.
    pub border_colour: Option<String>,
    #[allow(missing_docs)]
    pub border_width: Option<f32>,
    #[allow(missing_docs)]
    pub shadow: Option<f32>,
    /// `#RRGGBB` or `#AARRGGBB`.
    pub shadow_colour: Option<String>,
    /// A path to a PNG image.
    pub background_bitmap: Option<PathBuf>,
    /// `#RRGGBB` or `#AARRGGBB`.
    pub background_colour: Option<String>,
    #[allow(missing_docs)]
    pub num_of_sides: Option<u32>,
    #[allow(missing_docs)]
    pub padding: Option<f32>,
    #[allow(missing_docs)]
    pub dash_width: Option<f32>,
    #[allow(missing_docs)]
    pub dash_gap: Option<f32>,
    #[allow(missing_docs)]
    pub bitmap_rotation: Option<i32>,
}

impl PolygonStyle {
    /// Parses a style from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Converts a style into attributes.
    ///
    /// Colours are parsed and the background image is loaded here.
    pub fn into_attributes(self, theme: &Theme) -> Result<PolygonAttributes, Error> {
        let mut attrs = PolygonAttributes::with_theme(theme);

        if let Some(v) = self.orientation {
            attrs.orientation = v;
        }

        if let Some(v) = self.border_radius {
            attrs.border_radius = v;
        }

        if let Some(ref v) = self.border_colour {
            attrs.border_colour = parse_colour(v)?;
        }

        if let Some(v) = self.border_width {
            attrs.border_width = v;
        }

        if let Some(v) = self.shadow {
            attrs.shadow = v;
        }

        if let Some(ref v) = self.shadow_colour {
            attrs.shadow_colour = parse_colour(v)?;
        }

        if let Some(ref v) = self.background_colour {
            attrs.background_colour = parse_colour(v)?;
        }

        if let Some(v) = self.num_of_sides {
            attrs.sides = v;
        }

        if let Some(v) = self.padding {
            attrs.padding = v;
        }

        if let Some(v) = self.dash_width {
            attrs.dash_width = v;
        }

        if let Some(v) = self.dash_gap {
            attrs.dash_gap = v;
        }

        if let Some(v) = self.bitmap_rotation {
            attrs.bitmap_rotation = v;
        }

        if let Some(path) = self.background_bitmap {
            let image = match Pixmap::load_png(&path) {
                Ok(v) => v,
                Err(source) => return Err(Error::Image { path, source }),
            };

            tracing::debug!("loaded a {}x{} background image", image.width(), image.height());
            attrs.background_image = Some(image);
        }

        Ok(attrs)
    }
}

/// Parses a `#RRGGBB` or `#AARRGGBB` colour.
///
/// Alpha goes first, just like in Android colour resources.
pub fn parse_colour(text: &str) -> Result<Color, Error> {
    let invalid = || Error::InvalidColour(text.to_string());

    let hex = text.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

    match hex.len() {
        6 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Ok(Color::from_rgba8(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colour() {
        assert_eq!(
            parse_colour("#FF8000").unwrap(),
            Color::from_rgba8(255, 128, 0, 255)
        );
    }

    #[test]
    fn argb_colour() {
        assert_eq!(
            parse_colour("#80ff0000").unwrap(),
            Color::from_rgba8(255, 0, 0, 128)
        );
    }

    #[test]
    fn invalid_colours() {
        for text in &["", "FF0000", "#FF00", "#GG0000", "#FF00000", "#+F0000", "#ÿÿÿ"] {
            assert!(
                matches!(parse_colour(text), Err(Error::InvalidColour(_))),
                "{}",
                text
            );
        }
    }

    #[test]
    fn empty_style() {
        let style = PolygonStyle::from_toml_str("").unwrap();
        assert_eq!(style, PolygonStyle::default());

        let attrs = style.into_attributes(&Theme::default()).unwrap();
        assert_eq!(attrs, PolygonAttributes::default());
    }

    #[test]
    fn full_style() {
        let style = PolygonStyle::from_toml_str(
            r##"
            orientation = "horizontal"
            border_radius = 4.0
            border_colour = "#000000"
            border_width = 2.5
            shadow = 3.0
            shadow_colour = "#40000000"
            background_colour = "#FF00FF00"
            num_of_sides = 8
            padding = 5.0
            dash_width = 6.0
            dash_gap = 3.0
            bitmap_rotation = 45
            "##,
        )
        .unwrap();

        let attrs = style.into_attributes(&Theme::default()).unwrap();
        assert_eq!(attrs.orientation, Orientation::Horizontal);
        assert_eq!(attrs.border_radius, 4.0);
        assert_eq!(attrs.border_colour, Color::BLACK);
        assert_eq!(attrs.border_width, 2.5);
        assert_eq!(attrs.shadow, 3.0);
        assert_eq!(attrs.shadow_colour, Color::from_rgba8(0, 0, 0, 64));
        assert_eq!(attrs.background_colour, Color::from_rgba8(0, 255, 0, 255));
        assert_eq!(attrs.sides, 8);
        assert_eq!(attrs.padding, 5.0);
        assert_eq!(attrs.dash_width, 6.0);
        assert_eq!(attrs.dash_gap, 3.0);
        assert_eq!(attrs.bitmap_rotation, 45);
        assert!(attrs.background_image.is_none());
    }

    #[test]
    fn unknown_field() {
        let err = PolygonStyle::from_toml_str("sides = 6").unwrap_err();
        assert!(matches!(err, Error::Style(_)));
    }

    #[test]
    fn invalid_orientation() {
        let err = PolygonStyle::from_toml_str("orientation = \"diagonal\"").unwrap_err();
        assert!(matches!(err, Error::Style(_)));
    }

    #[test]
    fn invalid_colour_in_style() {
        let style = PolygonStyle::from_toml_str("border_colour = \"red\"").unwrap();
        let err = style.into_attributes(&Theme::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidColour(ref s) if s == "red"));
    }

    #[test]
    fn missing_image() {
        let style = PolygonStyle::from_toml_str(
            "background_bitmap = \"does-not-exist/background.png\"",
        )
        .unwrap();

        let err = style.into_attributes(&Theme::default()).unwrap_err();
        match err {
            Error::Image { path, .. } => {
                assert_eq!(path, PathBuf::from("does-not-exist/background.png"))
            }
            _ => panic!("expected an image error"),
        }
    }
}
