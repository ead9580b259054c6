// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::{Color, Paint, Stroke, StrokeDash};

use crate::PolygonAttributes;

/// Converts a blur radius into a Gaussian sigma, just like Skia.
const BLUR_SIGMA_SCALE: f32 = 0.57735;


/// How the polygon interior is painted.
#[derive(Clone, Debug)]
pub struct FillStyle {
    /// A solid colour paint.
    pub paint: Paint<'static>,

    /// Corner rounding radius applied to the outline before filling.
    pub corner_radius: f32,
}

impl FillStyle {
    /// Creates a fill style from view attributes.
    pub fn new(attrs: &PolygonAttributes) -> Self {
        let mut paint = Paint::default();
        paint.set_color(attrs.background_colour);
        paint.anti_alias = true;

        FillStyle {
            paint,
            corner_radius: attrs.border_radius,
        }
    }
}


/// How the border is painted.
#[derive(Clone, Debug)]
pub struct BorderStyle {
    /// A solid colour paint.
    pub paint: Paint<'static>,

    /// Stroke properties, including the dash pattern.
    pub stroke: Stroke,

    /// Corner rounding radius applied before dashing.
    pub corner_radius: f32,

    /// Border shadow.
    pub shadow: Option<ShadowStyle>,
}

impl BorderStyle {
    /// Creates a border style from view attributes.
    ///
    /// An unusable dash pattern produces a solid stroke.
    /// A non-positive shadow radius disables the shadow.
    pub fn new(attrs: &PolygonAttributes) -> Self {
        let mut paint = Paint::default();
        paint.set_color(attrs.border_colour);
        paint.anti_alias = true;

        let mut stroke = Stroke::default();
        stroke.width = attrs.border_width;
        stroke.dash = dash(attrs.dash_width, attrs.dash_gap);

        BorderStyle {
            paint,
            stroke,
            corner_radius: attrs.border_radius,
            shadow: ShadowStyle::new(attrs.shadow, attrs.shadow_colour),
        }
    }
}

fn dash(width: f32, gap: f32) -> Option<StrokeDash> {
    if width == 0.0 && gap == 0.0 {
        return None;
    }

    let dash = StrokeDash::new(vec![width, gap], 0.0);
    if dash.is_none() {
        tracing::debug!("dash pattern [{}, {}] is not usable, using a solid border", width, gap);
    }

    dash
}


/// A blurred border shadow.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ShadowStyle {
    /// Gaussian blur sigma.
    pub sigma: f32,

    /// Shadow colour.
    pub colour: Color,
}

impl ShadowStyle {
    /// Creates a shadow for a blur `radius`.
    ///
    /// Returns `None` when `radius` is not positive or not finite.
    pub fn new(radius: f32, colour: Color) -> Option<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return None;
        }

        Some(ShadowStyle {
            sigma: radius * BLUR_SIGMA_SCALE + 0.5,
            colour,
        })
    }
}
