/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! GIF87a/GIF89a decoding and encoding: Logical Screen Descriptor, Global/Local Color Tables,
//! Graphic Control/Application/Comment extensions, LZW-compressed image data, and the Netscape
//! looping convention. Unlike PNG, GIF has no external compression crate to lean on — its LZW
//! variant is specific enough (LSB-first code packing, a 4096-entry dictionary cap, codes that
//! widen mid-stream) that it's implemented directly in [`lzw`], the same way `quant`'s NeuQuant
//! implementation is hand-rolled rather than pulled from a crate.

mod block;
mod decode;
mod encode;
mod lzw;

pub use self::decode::{decode, is_valid_file, GifDecoder};
pub use self::encode::{encode, EncodeOptions, GifEncoder};

use std::fmt::{Display, Formatter};

/// GIF decoder/encoder error type. Kept small relative to [`crate::codec::png::Error`] — GIF
/// decoding here never touches a fallible I/O stream (everything runs over in-memory byte
/// slices), so unlike PNG's there is no `Io` variant to carry.
#[derive(Debug)]
pub enum Error {
    BlockSize { expected: u8, found: u8 },
    LzwCode { code: u16 },
    MissingColorTable,
    Signature,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> std::fmt::Result {
        match *self {
            Error::BlockSize { expected, found } => {
                write!(fmt, "unexpected gif extension block size: expected {}, found {}", expected, found)
            },
            Error::LzwCode { code } => write!(fmt, "invalid gif lzw code: {}", code),
            Error::MissingColorTable => fmt.write_str("gif image has no color table"),
            Error::Signature => fmt.write_str("invalid gif signature"),
        }
    }
}

impl std::error::Error for Error {}
