// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::{Color, Pixmap};

/// A view orientation.
///
/// Stored and reported back, but doesn't affect the geometry or drawing.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[allow(missing_docs)]
    Horizontal,
    #[allow(missing_docs)]
    Vertical,
}

impl Default for Orientation {
    #[inline]
    fn default() -> Self {
        Orientation::Vertical
    }
}


/// Colours used when a view doesn't specify its own.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Theme {
    /// Default border colour.
    ///
    /// Default: #808080
    pub border_colour: Color,

    /// Colour of the border shadow.
    ///
    /// Default: #808080
    pub shadow_colour: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let grey = Color::from_rgba8(128, 128, 128, 255);
        Theme {
            border_colour: grey,
            shadow_colour: grey,
        }
    }
}


/// Polygon rendering attributes.
///
/// Values are not validated. Anything that cannot be drawn is skipped during drawing.
#[derive(Clone, PartialEq, Debug)]
pub struct PolygonAttributes {
    /// Number of polygon sides.
    ///
    /// Values less than 4 are drawn as a horizontal line through the view center.
    ///
    /// Default: 0
    pub sides: u32,

    /// View orientation.
    ///
    /// Default: Vertical
    pub orientation: Orientation,

    /// Corner rounding radius used by both the fill and the border.
    ///
    /// Default: 0
    pub border_radius: f32,

    /// Border stroke width.
    ///
    /// Zero width means a hairline stroke.
    ///
    /// Default: 0
    pub border_width: f32,

    /// Border colour.
    ///
    /// Default: `Theme::border_colour`
    pub border_colour: Color,

    /// Colour of the polygon fill, drawn under the background image.
    ///
    /// Default: transparent
    pub background_colour: Color,

    /// An image clipped to the polygon shape.
    ///
    /// Stretched to the view size before rotation.
    ///
    /// Default: None
    pub background_image: Option<Pixmap>,

    /// Background image rotation in degrees.
    ///
    /// Default: 0
    pub bitmap_rotation: i32,

    /// Border shadow blur radius.
    ///
    /// Default: 0
    pub shadow: f32,

    /// Shadow colour.
    ///
    /// Default: `Theme::shadow_colour`
    pub shadow_colour: Color,

    /// An inset subtracted from the polygon radius.
    ///
    /// Default: 0
    pub padding: f32,

    /// Length of a border dash.
    ///
    /// Default: 0
    pub dash_width: f32,

    /// Length of a gap between border dashes.
    ///
    /// Default: 0
    pub dash_gap: f32,
}

impl Default for PolygonAttributes {
    fn default() -> Self {
        Self::with_theme(&Theme::default())
    }
}

impl PolygonAttributes {
    /// Creates default attributes using colours from the `theme`.
    pub fn with_theme(theme: &Theme) -> Self {
        PolygonAttributes {
            sides: 0,
            orientation: Orientation::default(),
            border_radius: 0.0,
            border_width: 0.0,
            border_colour: theme.border_colour,
            background_colour: Color::TRANSPARENT,
            background_image: None,
            bitmap_rotation: 0,
            shadow: 0.0,
            shadow_colour: theme.shadow_colour,
            padding: 0.0,
            dash_width: 0.0,
            dash_gap: 0.0,
        }
    }

    /// Checks that the attributes describe a polygon and not a line.
    #[inline]
    pub fn is_polygon(&self) -> bool {
        self.sides >= polygon_view_path::MIN_SIDES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let attrs = PolygonAttributes::default();
        assert_eq!(attrs.sides, 0);
        assert_eq!(attrs.orientation, Orientation::Vertical);
        assert_eq!(attrs.border_colour, Color::from_rgba8(128, 128, 128, 255));
        assert_eq!(attrs.background_colour, Color::TRANSPARENT);
        assert!(attrs.background_image.is_none());
        assert!(!attrs.is_polygon());
    }

    #[test]
    fn themed() {
        let theme = Theme {
            border_colour: Color::BLACK,
            shadow_colour: Color::WHITE,
        };

        let attrs = PolygonAttributes::with_theme(&theme);
        assert_eq!(attrs.border_colour, Color::BLACK);
        assert_eq!(attrs.shadow_colour, Color::WHITE);
    }
}
