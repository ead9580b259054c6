// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// A Gaussian blur approximated by three box blurs.
// Pixels outside the pixmap are treated as transparent.

use tiny_skia::{Pixmap, BYTES_PER_PIXEL};

const PASSES: usize = 3;

/// Blurs premultiplied pixels in place.
///
/// Does nothing when `sigma` is not positive or not finite.
/// A sigma larger than the pixmap is limited to the pixmap size.
pub fn blur(pixmap: &mut Pixmap, sigma: f32) {
    if !(sigma > 0.0 && sigma.is_finite()) {
        return;
    }

    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let sigma = sigma.min(width.max(height) as f32);
    let mut tmp = vec![0u8; pixmap.data().len()];

    for radius in box_radii(sigma).iter().copied() {
        let radius = radius.min(width.max(height));
        if radius == 0 {
            continue;
        }

        let data = pixmap.data_mut();
        box_blur_horizontal(data, &mut tmp, width, height, radius);
        box_blur_vertical(&tmp, data, width, height, radius);
    }
}

// See "Fast Almost-Gaussian Filtering" by Peter Kovesi.
fn box_radii(sigma: f32) -> [usize; PASSES] {
    let n = PASSES as f32;
    let ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();

    let mut lower = ideal.floor() as usize;
    if lower % 2 == 0 {
        lower = lower.saturating_sub(1);
    }
    let lower = lower.max(1);
    let upper = lower.saturating_add(2);

    let l = lower as f32;
    let m = ((12.0 * sigma * sigma - n * l * l - 4.0 * n * l - 3.0 * n) / (-4.0 * l - 4.0)).round();
    let m = m.max(0.0) as usize;

    let mut radii = [0; PASSES];
    for (i, r) in radii.iter_mut().enumerate() {
        let size = if i < m { lower } else { upper };
        *r = size / 2;
    }

    radii
}

fn box_blur_horizontal(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let div = (radius * 2 + 1) as u64;
    for y in 0..height {
        let row = y * width;
        for c in 0..BYTES_PER_PIXEL {
            let at = |x: usize| (row + x) * BYTES_PER_PIXEL + c;

            let mut sum = 0u64;
            for x in 0..=radius.min(width - 1) {
                sum += u64::from(src[at(x)]);
            }

            for x in 0..width {
                dst[at(x)] = ((sum + div / 2) / div) as u8;

                if x + radius + 1 < width {
                    sum += u64::from(src[at(x + radius + 1)]);
                }

                if x >= radius {
                    sum -= u64::from(src[at(x - radius)]);
                }
            }
        }
    }
}

fn box_blur_vertical(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let div = (radius * 2 + 1) as u64;
    for x in 0..width {
        for c in 0..BYTES_PER_PIXEL {
            let at = |y: usize| (y * width + x) * BYTES_PER_PIXEL + c;

            let mut sum = 0u64;
            for y in 0..=radius.min(height - 1) {
                sum += u64::from(src[at(y)]);
            }

            for y in 0..height {
                dst[at(y)] = ((sum + div / 2) / div) as u8;

                if y + radius + 1 < height {
                    sum += u64::from(src[at(y + radius + 1)]);
                }

                if y >= radius {
                    sum -= u64::from(src[at(y - radius)]);
                }
            }
        }
    }
}
