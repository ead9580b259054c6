// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::PathBuf;

/// A polygon view error.
///
/// Drawing itself never fails. Errors are only produced when allocating
/// a surface or loading a style.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A surface cannot be allocated for the requested size.
    #[error("cannot allocate a {width}x{height} surface")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A colour string is not in the `#RRGGBB` or `#AARRGGBB` format.
    #[error("'{0}' is not a valid colour")]
    InvalidColour(String),

    /// A style cannot be parsed.
    #[error("failed to parse a style")]
    Style(#[from] toml::de::Error),

    /// A background image cannot be loaded.
    #[error("failed to load a background image from '{}'", .path.display())]
    Image {
        /// Image path.
        path: PathBuf,
        /// Decoding error.
        #[source]
        source: png::DecodingError,
    },
}
