// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Geometry for [polygon-view](https://github.com/RazrFalcon/polygon-view).
//!
//! Provides a regular polygon outline builder and a corner rounding path effect.
//! Paths are [tiny-skia-path](https://docs.rs/tiny-skia-path) paths, so they can be
//! filled, stroked and dashed by tiny-skia directly.
//!
//! Note that all types use single precision floats (`f32`), just like tiny-skia.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::excessive_precision)]

#[cfg(not(any(feature = "std", feature = "no-std-float")))]
compile_error!("You have to activate either the `std` or the `no-std-float` feature.");

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod corner;
mod outline;

pub use corner::round_corners;
pub use outline::{Outline, FIXED_INSET_RATIO, MIN_SIDES, START_ANGLE};

pub use tiny_skia_path::{Path, PathBuilder, Point};
