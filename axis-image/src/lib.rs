/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

extern crate axis_color as color;
extern crate axis_math as math;
extern crate byteorder;
#[cfg(feature = "crc32fast")]
extern crate crc32fast;
#[cfg(feature = "flate2")]
extern crate flate2;
#[cfg(feature = "peekread")]
extern crate peekread;

/// Support for image codecs as optional cargo features.
pub mod codec;

mod channel;
mod convert;
mod doc;
mod error;
mod format;
mod io;
mod packed;
mod palette;
mod pixel_buffer;
mod quant;

pub use channel::{ChannelOrder, ChannelRole};
pub use convert::ConvertOptions;
pub use doc::{FrameBlend, FrameDisposal, Image, ImageFrame, ImageMeta};
pub use error::Error;
pub use format::FormatTag;
pub use palette::Palette;
pub use pixel_buffer::PixelBuffer;
pub use quant::{map_to_palette, quantize, NeuQuantOptions, Quantized};
