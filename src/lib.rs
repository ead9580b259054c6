/*!
`polygon-view` is a regular polygon view rendered with [tiny-skia](https://github.com/RazrFalcon/tiny-skia).

A view draws, from bottom to top: a background colour fill, an optional background image
clipped to the polygon, a blurred border shadow and a dashed border with rounded corners.
Views with less than 4 sides draw a horizontal line through the center instead.

See [`PolygonView`] for usage.
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::excessive_precision)]

mod attributes;
mod blur;
mod error;
mod paint;
mod render;
mod style;
mod view;

pub use attributes::{Orientation, PolygonAttributes, Theme};
pub use error::Error;
pub use paint::{BorderStyle, FillStyle, ShadowStyle};
pub use render::{draw, Shape};
pub use style::{parse_colour, PolygonStyle};
pub use view::PolygonView;

pub use polygon_view_path::{round_corners, Outline, FIXED_INSET_RATIO, MIN_SIDES, START_ANGLE};

pub use tiny_skia;
