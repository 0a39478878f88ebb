/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Format-level codecs, gated behind cargo features (`png`, `gif`, `all`). Everything here deals
//! in whole files: bytes in, [`crate::Image`] out (and back). Per-format details — chunk framing,
//! LZW, whatever a given format needs — live in the format's own submodule.

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "gif")]
pub mod gif;

use crate::Image;

/// The raw 8-byte PNG file signature every PNG stream begins with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

/// The two GIF version signatures a file's first 6 bytes may carry.
#[cfg(feature = "gif")]
pub const GIF87A_SIGNATURE: [u8; 6] = *b"GIF87a";
#[cfg(feature = "gif")]
pub const GIF89A_SIGNATURE: [u8; 6] = *b"GIF89a";

/// What a [`Decoder`] can report about a file before (or instead of) decoding any pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormatInfo {
    pub width: usize,
    pub height: usize,
    pub frame_count: usize,
}

/// Options an [`Encoder`] may honor, gathered from every format this crate supports. A given
/// encoder ignores fields it has no use for — PNG never looks at `sampling_factor`, GIF never
/// looks at `filter`. Fields left `None` fall back to the format's own default.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeOptions {
    /// PNG: deflate level, `0..=9`. Default 6.
    pub level: Option<u32>,
    /// PNG: per-row filter choice. Default is adaptive (minimum sum of absolute values per row).
    #[cfg(feature = "png")]
    pub filter: Option<png::FilterChoice>,
    /// PNG: physical pixel dimensions to emit as `pHYs`, `(pixels_per_meter_x, pixels_per_meter_y)`.
    pub pixel_dimensions: Option<(u32, u32)>,
    /// GIF: color quantization sampling factor, `1..=30`. Default 10 for a single image, 30 for an
    /// animation (coarser sampling trades palette fidelity for encode speed across many frames).
    pub sampling_factor: Option<u8>,
    /// GIF: force single-frame output even if the source image carries more than one frame.
    pub single_frame: Option<bool>,
}

/// A format decoder, driven in two stages: [`Decoder::start_decode`] parses just enough of the
/// file to report [`FormatInfo`] (and caches whatever the format needs to produce frames on
/// demand), then [`Decoder::decode_frame`] or [`Decoder::decode`] produce actual [`Image`]s.
///
/// Every method here follows the crate's two-tier error convention: a malformed file is `None`,
/// not an `Err` — see [`crate::Error`]'s own doc comment for why library-level errors are kept
/// separate from format errors.
pub trait Decoder {
    /// Short machine-readable name of the format this decoder reads (`"png"`, `"gif"`). Distinct
    /// from `crate::FormatTag`, which names a pixel *storage* representation, not a file format.
    fn format_name(&self) -> &'static str;

    /// Number of frames in the most recently started/decoded file, or 0 if none has been.
    fn num_frames(&self) -> usize;

    /// Cheaply checks whether `bytes` could plausibly be this format, typically by checking a
    /// magic number. Doesn't validate the rest of the file.
    fn is_valid_file(bytes: &[u8]) -> bool
    where
        Self: Sized;

    /// Parses `bytes` enough to report size/frame-count information, caching whatever is needed
    /// to serve later [`Decoder::decode_frame`] calls.
    fn start_decode(&mut self, bytes: &[u8]) -> Option<FormatInfo>;

    /// Decodes `bytes` in one call. `frame_index` selects a single animation frame; `None` decodes
    /// the whole image (frame 0, or every frame folded into `Image::frames()`, depending on the
    /// format).
    fn decode(&mut self, bytes: &[u8], frame_index: Option<usize>) -> Option<Image>;

    /// Decodes frame `frame_index` from the file most recently passed to `start_decode`.
    fn decode_frame(&mut self, frame_index: usize) -> Option<Image>;
}

/// A format encoder. [`Encoder::encode`] handles the common case (encode a whole, possibly
/// animated, [`Image`] in one call); [`Encoder::start`]/[`add_frame`](Encoder::add_frame)/
/// [`finish`](Encoder::finish) support streaming frames in one at a time without holding every
/// frame's pixels in memory at once, for formats (like GIF) that can interleave frame output with
/// frame encoding.
pub trait Encoder {
    /// Whether this encoder can emit more than one frame. An encoder that returns `false` ignores
    /// `image.frames()` entirely, encoding only the primary buffer.
    fn supports_animation(&self) -> bool;

    /// Encodes a complete image (including any animation frames) in one call.
    fn encode(&self, image: &Image, options: &EncodeOptions) -> Vec<u8>;

    /// Begins a streaming encode of `num_frames` frames.
    fn start(&mut self, num_frames: usize, options: &EncodeOptions);

    /// Appends one frame to a streaming encode started with [`Encoder::start`].
    fn add_frame(&mut self, image: &Image);

    /// Finishes a streaming encode, returning the complete file.
    fn finish(&mut self) -> Vec<u8>;
}

/// Probes `bytes` against every format this crate implements and returns a decoder for the first
/// match. Detection is by magic number only — the spec's broader signature table also lists
/// formats (JPEG, TIFF, BMP, TGA, ICO, PSD, PNM, PVR, WebP) this crate has no decoder for, so
/// those magics are simply not recognized here rather than matched and then failing to decode.
#[allow(unreachable_code)]
pub fn find_decoder_for(bytes: &[u8]) -> Option<Box<dyn Decoder>> {
    #[cfg(feature = "png")]
    if png::is_valid_file(bytes) {
        return Some(Box::new(png::PngDecoder::new()));
    }

    #[cfg(feature = "gif")]
    if gif::is_valid_file(bytes) {
        return Some(Box::new(gif::GifDecoder::new()));
    }

    let _ = bytes;
    None
}

/// Decodes `bytes` using the named format's decoder (`"png"`, `"gif"`), or `None` if the name
/// isn't recognized (or its feature isn't enabled) or the bytes aren't valid for that format.
pub fn decode_by_name(bytes: &[u8], name: &str) -> Option<Image> {
    match name {
        #[cfg(feature = "png")]
        "png" => png::decode(bytes),
        #[cfg(feature = "gif")]
        "gif" => gif::decode(bytes),
        _ => None,
    }
}

/// Encodes `image` using the named format's encoder, or `None` if the name isn't recognized (or
/// its feature isn't enabled).
pub fn encode_by_name(image: &Image, name: &str, options: &EncodeOptions) -> Option<Vec<u8>> {
    match name {
        #[cfg(feature = "png")]
        "png" => Some(png::PngEncoder::new().encode(image, options)),
        #[cfg(feature = "gif")]
        "gif" => Some(gif::GifEncoder::new().encode(image, options)),
        _ => None,
    }
}

/// Zlib-wrapped (RFC 1950) DEFLATE (RFC 1951) compression, independent of any particular codec's
/// own chunked compressor — this is §4.F's standalone `deflate`/`inflate` pair, called directly by
/// callers that just want to shrink a byte array rather than build a PNG. PNG's own `IDAT`/`fdAT`
/// streams go through `png::compress::Compressor` instead, since those need to interleave with
/// chunk framing rather than produce one complete buffer. `level` is `0..=9`, matching
/// `flate2::Compression`'s range.
#[cfg(feature = "png")]
pub fn deflate(bytes: &[u8], level: u32) -> Vec<u8> {
    use std::io::Write;
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::new(level.min(9)));
    encoder.write_all(bytes).expect("writing to an in-memory Vec cannot fail");
    encoder.finish().expect("finishing an in-memory Vec encoder cannot fail")
}

/// Reverses [`deflate`]. Returns `None` if `bytes` isn't a valid zlib stream. Tolerates truncated
/// input per §4.F: whatever was successfully produced before truncation is returned rather than
/// treated as an all-or-nothing failure, since `flate2` yields the decompressed prefix on an
/// `UnexpectedEof` read error.
#[cfg(feature = "png")]
pub fn inflate(bytes: &[u8]) -> Option<Vec<u8>> {
    use std::io::Read;
    let mut decoder = flate2::read::ZlibDecoder::new(bytes);
    let mut out = Vec::new();
    match decoder.read_to_end(&mut out) {
        Ok(_) => Some(out),
        Err(_) if !out.is_empty() => Some(out),
        Err(_) => None,
    }
}

#[cfg(all(test, feature = "png"))]
mod tests {
    use super::*;

    #[test]
    fn deflate_inflate_round_trips() {
        let data = b"the quick brown fox jumps over the lazy dog".repeat(8);
        for level in [0, 1, 6, 9] {
            let compressed = deflate(&data, level);
            let decompressed = inflate(&compressed).expect("valid zlib stream");
            assert_eq!(decompressed, data);
        }
    }

    #[test]
    fn inflate_rejects_garbage() {
        assert!(inflate(&[0xff, 0x00, 0x01, 0x02]).is_none());
    }
}
