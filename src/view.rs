// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::{Color, Pixmap, PixmapMut};

use crate::render::{self, Shape};
use crate::{Error, Orientation, PolygonAttributes};

/// A view that draws a regular polygon.
///
/// Every setter requests a redraw. A host checks [`PolygonView::needs_redraw`]
/// (or takes the request with [`PolygonView::take_redraw_request`]) and calls
/// [`PolygonView::draw`] with a surface of the view size.
///
/// # Examples
///
/// ```
/// use polygon_view::PolygonView;
/// use tiny_skia::Color;
///
/// let mut view = PolygonView::default();
/// view.set_sides(6);
/// view.set_background_colour(Color::from_rgba8(50, 127, 150, 255));
/// view.set_border_width(2.0);
///
/// let pixmap = view.render(200, 200).unwrap();
/// assert!(!view.needs_redraw());
/// # let _ = pixmap;
/// ```
#[derive(Clone, Debug)]
pub struct PolygonView {
    attrs: PolygonAttributes,
    redraw_requested: bool,
}

impl Default for PolygonView {
    fn default() -> Self {
        PolygonView::new(PolygonAttributes::default())
    }
}

impl From<PolygonAttributes> for PolygonView {
    fn from(attrs: PolygonAttributes) -> Self {
        PolygonView::new(attrs)
    }
}

impl PolygonView {
    /// Creates a new view.
    ///
    /// A new view always requests its first redraw.
    pub fn new(attrs: PolygonAttributes) -> Self {
        PolygonView {
            attrs,
            redraw_requested: true,
        }
    }

    /// Returns all view attributes.
    pub fn attributes(&self) -> &PolygonAttributes {
        &self.attrs
    }

    /// Replaces all view attributes.
    pub fn set_attributes(&mut self, attrs: PolygonAttributes) {
        self.attrs = attrs;
        self.invalidate();
    }

    /// Checks that the view has to be redrawn.
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Returns the pending redraw request and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::replace(&mut self.redraw_requested, false)
    }

    fn invalidate(&mut self) {
        if !self.redraw_requested {
            tracing::trace!("redraw requested");
        }

        self.redraw_requested = true;
    }

    /// Returns what the view would draw on a `width` x `height` surface.
    pub fn shape(&self, width: f32, height: f32) -> Option<Shape> {
        Shape::new(width, height, self.attrs.sides, self.attrs.padding)
    }

    /// Draws the view onto a pixmap.
    ///
    /// The whole pixmap is treated as the view area.
    /// Clears the pending redraw request.
    pub fn draw(&mut self, pixmap: &mut PixmapMut) {
        render::draw(&self.attrs, pixmap);
        self.redraw_requested = false;
    }

    /// Draws the view onto a new transparent pixmap.
    pub fn render(&mut self, width: u32, height: u32) -> Result<Pixmap, Error> {
        let mut pixmap = Pixmap::new(width, height).ok_or(Error::InvalidSize { width, height })?;
        self.draw(&mut pixmap.as_mut());
        Ok(pixmap)
    }

    /// Returns the number of sides.
    pub fn sides(&self) -> u32 {
        self.attrs.sides
    }

    /// Sets the number of sides.
    ///
    /// Anything less than 4 draws a horizontal line.
    pub fn set_sides(&mut self, sides: u32) {
        self.attrs.sides = sides;
        self.invalidate();
    }

    /// Returns the orientation.
    pub fn orientation(&self) -> Orientation {
        self.attrs.orientation
    }

    /// Sets the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.attrs.orientation = orientation;
        self.invalidate();
    }

    /// Returns the corner rounding radius.
    pub fn border_radius(&self) -> f32 {
        self.attrs.border_radius
    }

    /// Sets the corner rounding radius.
    pub fn set_border_radius(&mut self, radius: f32) {
        self.attrs.border_radius = radius;
        self.invalidate();
    }

    /// Returns the border width.
    pub fn border_width(&self) -> f32 {
        self.attrs.border_width
    }

    /// Sets the border width.
    pub fn set_border_width(&mut self, width: f32) {
        self.attrs.border_width = width;
        self.invalidate();
    }

    /// Returns the border colour.
    pub fn border_colour(&self) -> Color {
        self.attrs.border_colour
    }

    /// Sets the border colour.
    pub fn set_border_colour(&mut self, colour: Color) {
        self.attrs.border_colour = colour;
        self.invalidate();
    }

    /// Returns the fill colour.
    pub fn background_colour(&self) -> Color {
        self.attrs.background_colour
    }

    /// Sets the fill colour.
    pub fn set_background_colour(&mut self, colour: Color) {
        self.attrs.background_colour = colour;
        self.invalidate();
    }

    /// Returns the background image.
    pub fn background_image(&self) -> Option<&Pixmap> {
        self.attrs.background_image.as_ref()
    }

    /// Sets the background image.
    pub fn set_background_image(&mut self, image: Option<Pixmap>) {
        self.attrs.background_image = image;
        self.invalidate();
    }

    /// Returns the background image rotation in degrees.
    pub fn bitmap_rotation(&self) -> i32 {
        self.attrs.bitmap_rotation
    }

    /// Sets the background image rotation in degrees.
    pub fn set_bitmap_rotation(&mut self, degrees: i32) {
        self.attrs.bitmap_rotation = degrees;
        self.invalidate();
    }

    /// Returns the shadow blur radius.
    pub fn shadow(&self) -> f32 {
        self.attrs.shadow
    }

    /// Sets the shadow blur radius.
    pub fn set_shadow(&mut self, radius: f32) {
        self.attrs.shadow = radius;
        self.invalidate();
    }

    /// Returns the shadow colour.
    pub fn shadow_colour(&self) -> Color {
        self.attrs.shadow_colour
    }

    /// Sets the shadow colour.
    pub fn set_shadow_colour(&mut self, colour: Color) {
        self.attrs.shadow_colour = colour;
        self.invalidate();
    }

    /// Returns the padding.
    pub fn padding(&self) -> f32 {
        self.attrs.padding
    }

    /// Sets the padding.
    pub fn set_padding(&mut self, padding: f32) {
        self.attrs.padding = padding;
        self.invalidate();
    }

    /// Returns the dash length.
    pub fn dash_width(&self) -> f32 {
        self.attrs.dash_width
    }

    /// Sets the dash length.
    pub fn set_dash_width(&mut self, width: f32) {
        self.attrs.dash_width = width;
        self.invalidate();
    }

    /// Returns the gap length between dashes.
    pub fn dash_gap(&self) -> f32 {
        self.attrs.dash_gap
    }

    /// Sets the gap length between dashes.
    pub fn set_dash_gap(&mut self, gap: f32) {
        self.attrs.dash_gap = gap;
        self.invalidate();
    }
}
