/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

mod chunk;
mod compress;
mod decode;
mod encode;
mod filter;
mod interlace;

pub use self::chunk::{ChunkId, ChunkReader, ChunkWriter, ProgressiveChunkReader};
pub use self::compress::CompressionMethod;
pub use self::decode::{decode, is_valid_file, PngDecoder};
pub use self::encode::{encode, EncodeOptions, PngEncoder};
pub use self::filter::{FilterChoice, FilterMethod};
pub use self::interlace::InterlaceMethod;

use std::fmt::{Display, Formatter};

use math::Vector2;

use crate::channel::ChannelOrder;

const IHDR_LENGTH: u32 = 13;
const MAX_DIMENSION: u32 = 0x7fff_ffff;
const MAX_PALETTE_LEN: usize = 256;

/// Enumeration of PNG color types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum ColorType {
    Gray = 0,
    Rgb = 2,
    Index = 3,
    GrayAlpha = 4,
    RgbAlpha = 6,
}

impl ColorType {
    /// Returns the number of channels in each color.
    pub const fn channel_count(self) -> usize {
        match self {
            ColorType::Gray => 1,
            ColorType::Rgb => 3,
            ColorType::Index => 1,
            ColorType::GrayAlpha => 2,
            ColorType::RgbAlpha => 4,
        }
    }

    /// Determines whether the specified bit depth is allowed for this color type.
    pub fn check_bit_depth(self, bit_depth: u8) -> Result<u8, Error> {
        match self {
            ColorType::Gray => match bit_depth {
                1 | 2 | 4 | 8 | 16 => return Ok(bit_depth),
                _ => (),
            },
            ColorType::Rgb => match bit_depth {
                8 | 16 => return Ok(bit_depth),
                _ => (),
            },
            ColorType::Index => match bit_depth {
                1 | 2 | 4 | 8 => return Ok(bit_depth),
                _ => (),
            },
            ColorType::GrayAlpha => match bit_depth {
                8 | 16 => return Ok(bit_depth),
                _ => (),
            },
            ColorType::RgbAlpha => match bit_depth {
                8 | 16 => return Ok(bit_depth),
                _ => (),
            },
        }

        Err(Error::BitDepth {
            bit_depth,
            color_type: self,
        })
    }

    /// Maps this color type onto the [`ChannelOrder`] the rest of the crate uses once the pixel
    /// data has left the PNG-specific encoding.
    pub const fn to_channel_order(self) -> ChannelOrder {
        match self {
            ColorType::Gray => ChannelOrder::L,
            ColorType::Rgb => ChannelOrder::Rgb,
            ColorType::Index => ChannelOrder::Index,
            ColorType::GrayAlpha => ChannelOrder::La,
            ColorType::RgbAlpha => ChannelOrder::Rgba,
        }
    }

    /// The color type that losslessly carries a given [`ChannelOrder`], if PNG has one. Byte-order
    /// variants that PNG has no native representation for (`Bgr`/`Bgra`/`Argb`/`Abgr`) return
    /// `None`; callers are expected to convert to `Rgb`/`Rgba` first (see `crate::convert`).
    pub const fn from_channel_order(order: ChannelOrder) -> Option<ColorType> {
        match order {
            ChannelOrder::L => Some(ColorType::Gray),
            ChannelOrder::La => Some(ColorType::GrayAlpha),
            ChannelOrder::Index => Some(ColorType::Index),
            ChannelOrder::Rgb => Some(ColorType::Rgb),
            ChannelOrder::Rgba => Some(ColorType::RgbAlpha),
            ChannelOrder::Bgr | ChannelOrder::Bgra | ChannelOrder::Argb | ChannelOrder::Abgr => None,
        }
    }
}

impl ColorType {
    const fn description(self) -> &'static str {
        match self {
            ColorType::Gray => "gray",
            ColorType::Rgb => "rgb",
            ColorType::Index => "index",
            ColorType::GrayAlpha => "gray alpha",
            ColorType::RgbAlpha => "rgb alpha",
        }
    }
}

impl Display for ColorType {
    fn fmt(&self, fmt: &mut Formatter) -> std::fmt::Result {
        fmt.write_str(self.description())
    }
}

impl TryFrom<u8> for ColorType {
    type Error = Error;

    fn try_from(raw: u8) -> Result<ColorType, Error> {
        match raw {
            0 => Ok(ColorType::Gray),
            2 => Ok(ColorType::Rgb),
            3 => Ok(ColorType::Index),
            4 => Ok(ColorType::GrayAlpha),
            6 => Ok(ColorType::RgbAlpha),
            _ => Err(Error::ColorType { raw }),
        }
    }
}

/// PNG header data for the `IHDR` chunk.
#[derive(Clone, Copy, Debug)]
pub struct Header {
    pub bit_depth: u8,
    pub color_type: ColorType,
    pub compression_method: CompressionMethod,
    pub filter_method: FilterMethod,
    pub image_size: Vector2<usize>,
    pub interlace_method: Option<InterlaceMethod>,
}

/// How a frame is disposed of and blended, used only while assembling/emitting APNG frames.
/// Mirrors `fcTL`'s `dispose_op`/`blend_op` byte values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FrameControl {
    pub sequence_number: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
    pub delay_num: u16,
    pub delay_den: u16,
    pub dispose_op: u8,
    pub blend_op: u8,
}

/// PNG encoder/decoder error type.
#[derive(Debug)]
pub enum Error {
    Arithmetic { source: Box<dyn 'static + Send + Sync + std::error::Error> },
    BitDepth { bit_depth: u8, color_type: ColorType },
    Crc,
    ChunkId { bytes: [u8; 4] },
    ChunkIdLen { len: usize },
    ChunkLen { chunk_id: ChunkId, len: u32 },
    ColorType { raw: u8 },
    CompressionMethod { raw: u8 },
    CriticalChunk { chunk_id: ChunkId },
    DuplicateChunk { chunk_id: ChunkId },
    FilterByte { raw: u8 },
    FilterMethod { raw: u8 },
    ImageSize { size: Vector2<usize> },
    InterlaceMethod { raw: u8 },
    InvalidArgument { detail: &'static str },
    Io { source: std::io::Error },
    MissingChunk { chunk_id: ChunkId },
    MissingPalette,
    PaletteLen { len: usize },
    Signature,
    UnexpectedChunk { chunk_id: ChunkId, detail: &'static str },
    UnsupportedChannelOrder { channel_order: ChannelOrder },
    WrongChunk { expected: ChunkId, found: ChunkId },
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> std::fmt::Result {
        match *self {
            Error::Arithmetic { ref source } => write!(fmt, "arithmetic error: {}", source),
            Error::BitDepth { bit_depth, color_type } => {
                write!(fmt, "invalid png bit depth: {} {}", color_type, bit_depth)
            },
            Error::Crc => fmt.write_str("chunk crc mismatch"),
            Error::ChunkId { bytes } => {
                write!(fmt, "invalid png chunk id: {:02x} {:02x} {:02x} {:02x}",
                       bytes[0], bytes[1], bytes[2], bytes[3])
            },
            Error::ChunkIdLen { len } => write!(fmt, "invalid png chunk id length: {}", len),
            Error::ChunkLen { chunk_id, len } => {
                write!(fmt, "invalid/unexpected png chunk length: {}, {} bytes", chunk_id, len)
            },
            Error::ColorType { raw } => write!(fmt, "invalid png color type: {}", raw),
            Error::CompressionMethod { raw } => {
                write!(fmt, "invalid png compression method: {}", raw)
            },
            Error::CriticalChunk { chunk_id } => {
                write!(fmt, "unhandled critical png chunk: {}", chunk_id)
            },
            Error::DuplicateChunk { chunk_id } => write!(fmt, "duplicate png chunk: {}", chunk_id),
            Error::FilterByte { raw } => write!(fmt, "invalid png filter row byte: {}", raw),
            Error::FilterMethod { raw } => write!(fmt, "invalid png filter method: {}", raw),
            Error::ImageSize { size } => {
                write!(fmt, "invalid png image size: {}x{}", size.x, size.y)
            },
            Error::InterlaceMethod { raw } => write!(fmt, "invalid png interlace method: {}", raw),
            Error::InvalidArgument { detail } => write!(fmt, "invalid argument: {}", detail),
            Error::Io { ref source } => write!(fmt, "i/o error: {}", source),
            Error::MissingChunk { chunk_id } => write!(fmt, "missing png chunk: {}", chunk_id),
            Error::MissingPalette => fmt.write_str("missing palette"),
            Error::PaletteLen { len } => write!(fmt, "invalid png palette length: {}", len),
            Error::Signature => fmt.write_str("invalid png signature"),
            Error::UnexpectedChunk { chunk_id, detail } => {
                write!(fmt, "unexpected png chunk ({}): {}", chunk_id, detail)
            },
            Error::UnsupportedChannelOrder { channel_order } => {
                write!(fmt, "png has no native color type for channel order: {}", channel_order)
            },
            Error::WrongChunk { expected, found } => {
                write!(fmt, "wrong chunk id: expected {}, found {}", expected, found)
            },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Error {
        Error::Io { source }
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(source: std::num::TryFromIntError) -> Error {
        Error::Arithmetic {
            source: Box::new(source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn 'static + std::error::Error)> {
        match *self {
            Error::Arithmetic { ref source } => Some(&**source),
            Error::Io { ref source } => Some(source),
            _ => None,
        }
    }
}
