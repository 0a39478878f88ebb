/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::io::Write;

use byteorder::{WriteBytesExt, BE};
use math::Vector2;

use crate::codec::png::chunk::{ChunkId, ChunkWriter};
use crate::codec::png::compress::{CompressionMethod, Compressor};
use crate::codec::png::filter::{FilterChoice, Filterer};
use crate::codec::png::interlace::InterlaceMethod;
use crate::codec::png::{ColorType, Error, Header};
use crate::codec::Encoder;
use crate::convert::convert_buffer;
use crate::doc::{FrameBlend, FrameDisposal, Image};
use crate::format::FormatTag;
use crate::palette::Palette;
use crate::pixel_buffer::PixelBuffer;

pub use crate::codec::EncodeOptions;

const MAX_IDAT_SIZE: usize = 64 * 1024;

/// Encodes a complete [`Image`] (including any APNG animation frames) as a PNG byte stream.
/// Infallible given a valid [`Image`] — see [`crate::Error`]'s doc comment for why PNG has no
/// fallible top-level encode entry point.
pub fn encode(image: &Image, options: &EncodeOptions) -> Vec<u8> {
    PngEncoder::new().encode(image, options)
}

/// Stateful [`Encoder`] over a PNG/APNG output stream. PNG has no true incremental write path (the
/// `acTL` frame count must be known before the first `fcTL`), so `start`/`add_frame`/`finish` just
/// accumulate frames and build the real APNG via [`write`] once `finish` is called.
#[derive(Default)]
pub struct PngEncoder {
    options: EncodeOptions,
    frames: Vec<Image>,
}

impl PngEncoder {
    pub fn new() -> PngEncoder {
        PngEncoder::default()
    }
}

impl Encoder for PngEncoder {
    fn supports_animation(&self) -> bool {
        true
    }

    fn encode(&self, image: &Image, options: &EncodeOptions) -> Vec<u8> {
        write(image, options).expect("writing to an in-memory Vec cannot fail")
    }

    fn start(&mut self, num_frames: usize, options: &EncodeOptions) {
        self.options = *options;
        self.frames = Vec::with_capacity(num_frames);
    }

    fn add_frame(&mut self, image: &Image) {
        self.frames.push(image.clone());
    }

    fn finish(&mut self) -> Vec<u8> {
        let frames = std::mem::take(&mut self.frames);
        let mut iter = frames.into_iter();
        let mut image = match iter.next() {
            Some(image) => image,
            None => return write(&Image::new(PixelBuffer::new(0, 0, FormatTag::Uint8, crate::ChannelOrder::Rgba)), &self.options)
                .expect("writing to an in-memory Vec cannot fail"),
        };
        for frame in iter {
            let duration_ms = frame.meta.first_frame_duration_ms.unwrap_or(100);
            let disposal = frame.meta.first_frame_disposal.unwrap_or(FrameDisposal::None);
            let blend = frame.meta.first_frame_blend.unwrap_or(FrameBlend::Source);
            image
                .add_frame(frame.buffer().clone(), duration_ms, disposal, blend)
                .expect("streamed frames must share the first frame's geometry");
        }
        self.encode(&image, &self.options)
    }
}

/// Picks the PNG-native buffer (format, channel order) a source buffer should be written as,
/// converting away from the channel orders PNG has no color type for (`Bgr`/`Bgra`/`Argb`/`Abgr`)
/// and from bit depths PNG doesn't support (anything but `Uint1`/`2`/`4`/`8`/`16`).
fn png_native_buffer(src: &PixelBuffer) -> PixelBuffer {
    let channels = src.channel_order();
    let needs_channel_fixup = ColorType::from_channel_order(channels).is_none();
    let needs_format_fixup = !matches!(
        src.format(),
        FormatTag::Uint1 | FormatTag::Uint2 | FormatTag::Uint4 | FormatTag::Uint8 | FormatTag::Uint16
    );

    if !needs_channel_fixup && !needs_format_fixup {
        return src.clone();
    }

    let target_channels = if needs_channel_fixup {
        match channels {
            crate::ChannelOrder::Bgr | crate::ChannelOrder::Argb | crate::ChannelOrder::Abgr => {
                crate::ChannelOrder::Rgb
            }
            crate::ChannelOrder::Bgra => crate::ChannelOrder::Rgba,
            other => other,
        }
    } else {
        channels
    };
    let target_format = if needs_format_fixup { FormatTag::Uint8 } else { src.format() };

    if channels.is_indexed() {
        // Indexed buffers are never reformatted; PNG's own bit-depth set already covers every
        // index width this crate supports (1/2/4/8).
        return src.clone();
    }

    convert_buffer(src, None, target_format, target_channels)
}

/// Converts a normalized RGBA-space `[u8; 4]` color into the palette's packed representation.
fn latin1(s: &str) -> Vec<u8> {
    s.chars().map(|c| if (c as u32) < 256 { c as u8 } else { b'?' }).collect()
}

fn bit_depth_for(format: FormatTag) -> u8 {
    match format {
        FormatTag::Uint1 => 1,
        FormatTag::Uint2 => 2,
        FormatTag::Uint4 => 4,
        FormatTag::Uint8 => 8,
        FormatTag::Uint16 => 16,
        _ => unreachable!("png_native_buffer only ever produces PNG-supported formats"),
    }
}

fn header_for(buffer: &PixelBuffer) -> Header {
    let color_type =
        ColorType::from_channel_order(buffer.channel_order()).expect("png_native_buffer guarantees a PNG color type");
    Header {
        bit_depth: bit_depth_for(buffer.format()),
        color_type,
        compression_method: CompressionMethod::Zlib,
        filter_method: crate::codec::png::FilterMethod::Base,
        image_size: Vector2::new(buffer.width(), buffer.height()),
        interlace_method: None,
    }
}

/// Deflates one frame's already-PNG-native pixel bytes through the base filterer, returning the
/// compressed stream ready to be split across `IDAT`/`fdAT` chunks.
fn compress_pixels(buffer: &PixelBuffer, header: &Header, level: u32, filter: FilterChoice) -> Result<Vec<u8>, Error> {
    let compress = Compressor::with_level(Vec::new(), header.compression_method, level);
    let mut filterer = Filterer::with_choice(
        crate::codec::png::FilterMethod::Base,
        compress,
        header.image_size,
        header.bit_depth,
        header.color_type,
        filter,
    );
    filterer.write_all(&buffer.get_bytes())?;
    let compress = filterer.into_inner();
    Ok(compress.finish()?)
}

#[allow(non_snake_case)]
fn write_IHDR<W: Write>(w: &mut W, header: &Header) -> Result<(), Error> {
    let size = Vector2::new(u32::try_from(header.image_size.x)?, u32::try_from(header.image_size.y)?);
    let mut chunk = ChunkWriter::new(w, ChunkId::IHDR);
    chunk.write_u32::<BE>(size.x)?;
    chunk.write_u32::<BE>(size.y)?;
    chunk.write_u8(header.bit_depth)?;
    chunk.write_u8(header.color_type as u8)?;
    chunk.write_u8(header.compression_method as u8)?;
    chunk.write_u8(header.filter_method as u8)?;
    chunk.write_u8(InterlaceMethod::as_byte(header.interlace_method))?;
    chunk.finish()?;
    Ok(())
}

#[allow(non_snake_case)]
fn write_PLTE_tRNS<W: Write>(w: &mut W, palette: &Palette) -> Result<(), Error> {
    if palette.is_empty() || palette.len() > crate::codec::png::MAX_PALETTE_LEN {
        return Err(Error::PaletteLen { len: palette.len() });
    }

    let mut plte = ChunkWriter::new(&mut *w, ChunkId::PLTE);
    for &[r, g, b, _] in palette.entries() {
        plte.write_all(&[r, g, b])?;
    }
    plte.finish()?;

    if palette.entries().iter().any(|&[_, _, _, a]| a != 255) {
        let mut trns = ChunkWriter::new(&mut *w, ChunkId::tRNS);
        for &[_, _, _, a] in palette.entries() {
            trns.write_u8(a)?;
        }
        trns.finish()?;
    }
    Ok(())
}

#[allow(non_snake_case)]
fn write_iCCP<W: Write>(w: &mut W, profile: &[u8]) -> Result<(), Error> {
    let mut zlib = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    zlib.write_all(profile)?;
    let compressed = zlib.finish()?;

    let mut chunk = ChunkWriter::new(w, ChunkId::iCCP);
    chunk.write_all(b"icc")?;
    chunk.write_u8(0)?;
    chunk.write_u8(CompressionMethod::Zlib as u8)?;
    chunk.write_all(&compressed)?;
    chunk.finish()?;
    Ok(())
}

#[allow(non_snake_case)]
fn write_tEXt<W: Write>(w: &mut W, keyword: &str, text: &str) -> Result<(), Error> {
    let mut chunk = ChunkWriter::new(w, ChunkId::tEXt);
    chunk.write_all(&latin1(keyword))?;
    chunk.write_u8(0)?;
    chunk.write_all(&latin1(text))?;
    chunk.finish()?;
    Ok(())
}

#[allow(non_snake_case)]
fn write_pHYs<W: Write>(w: &mut W, ppu_x: u32, ppu_y: u32) -> Result<(), Error> {
    let mut chunk = ChunkWriter::new(w, ChunkId::pHYs);
    chunk.write_u32::<BE>(ppu_x)?;
    chunk.write_u32::<BE>(ppu_y)?;
    chunk.write_u8(1)?; // unit: meter
    chunk.finish()?;
    Ok(())
}

#[allow(non_snake_case)]
fn write_acTL<W: Write>(w: &mut W, num_frames: u32, num_plays: u32) -> Result<(), Error> {
    let mut chunk = ChunkWriter::new(w, ChunkId::acTL);
    chunk.write_u32::<BE>(num_frames)?;
    chunk.write_u32::<BE>(num_plays)?;
    chunk.finish()?;
    Ok(())
}

fn disposal_byte(disposal: FrameDisposal) -> u8 {
    match disposal {
        FrameDisposal::None => 0,
        FrameDisposal::Background => 1,
        FrameDisposal::Previous => 2,
    }
}

fn blend_byte(blend: FrameBlend) -> u8 {
    match blend {
        FrameBlend::Source => 0,
        FrameBlend::Over => 1,
    }
}

#[allow(non_snake_case)]
fn write_fcTL<W: Write>(
    w: &mut W, seq: u32, size: Vector2<usize>, duration_ms: u32, disposal: FrameDisposal, blend: FrameBlend,
) -> Result<(), Error> {
    let mut chunk = ChunkWriter::new(w, ChunkId::fcTL);
    chunk.write_u32::<BE>(seq)?;
    chunk.write_u32::<BE>(u32::try_from(size.x)?)?;
    chunk.write_u32::<BE>(u32::try_from(size.y)?)?;
    chunk.write_u32::<BE>(0)?; // x_offset
    chunk.write_u32::<BE>(0)?; // y_offset
    chunk.write_u16::<BE>((duration_ms / 10).min(u16::MAX as u32) as u16)?;
    chunk.write_u16::<BE>(100)?; // delay_den
    chunk.write_u8(disposal_byte(disposal))?;
    chunk.write_u8(blend_byte(blend))?;
    chunk.finish()?;
    Ok(())
}

/// Writes a pixel stream as one or more `IDAT` chunks, splitting every [`MAX_IDAT_SIZE`] bytes the
/// way real-world PNG encoders do so no single chunk need hold an entire large image.
fn write_idat_like<W: Write>(w: &mut W, chunk_id: ChunkId, compressed: &[u8]) -> Result<(), Error> {
    for piece in compressed.chunks(MAX_IDAT_SIZE) {
        let mut chunk = ChunkWriter::new(&mut *w, chunk_id);
        chunk.write_all(piece)?;
        chunk.finish()?;
    }
    Ok(())
}

#[allow(non_snake_case)]
fn write_fdAT<W: Write>(w: &mut W, seq: u32, compressed: &[u8]) -> Result<(), Error> {
    let mut chunk = ChunkWriter::new(w, ChunkId::fdAT);
    chunk.write_u32::<BE>(seq)?;
    chunk.write_all(compressed)?;
    chunk.finish()?;
    Ok(())
}

fn write(image: &Image, options: &EncodeOptions) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    out.extend_from_slice(&crate::codec::PNG_SIGNATURE);

    let primary = png_native_buffer(image.buffer());
    let header = header_for(&primary);
    write_IHDR(&mut out, &header)?;

    if header.color_type == ColorType::Index {
        let palette = image.palette().ok_or(Error::MissingPalette)?;
        write_PLTE_tRNS(&mut out, palette)?;
    }

    if let Some(profile) = image.meta.icc_profile.as_deref() {
        write_iCCP(&mut out, profile)?;
    }
    if let Some((ppu_x, ppu_y)) = options.pixel_dimensions.or(image.meta.pixels_per_meter) {
        write_pHYs(&mut out, ppu_x, ppu_y)?;
    }
    for (keyword, text) in &image.meta.text {
        write_tEXt(&mut out, keyword, text)?;
    }

    let level = options.level.unwrap_or(6);
    let filter = options.filter.unwrap_or(FilterChoice::Adaptive);

    if image.frames().is_empty() {
        let compressed = compress_pixels(&primary, &header, level, filter)?;
        write_idat_like(&mut out, ChunkId::IDAT, &compressed)?;
    } else {
        write_acTL(&mut out, image.frame_count() as u32, image.meta.loop_count.unwrap_or(0))?;

        let mut seq = 0u32;
        write_fcTL(
            &mut out,
            seq,
            header.image_size,
            image.meta.first_frame_duration_ms.unwrap_or(100),
            image.meta.first_frame_disposal.unwrap_or(FrameDisposal::None),
            image.meta.first_frame_blend.unwrap_or(FrameBlend::Source),
        )?;
        seq += 1;
        let compressed = compress_pixels(&primary, &header, level, filter)?;
        write_idat_like(&mut out, ChunkId::IDAT, &compressed)?;

        for frame in image.frames() {
            let native = png_native_buffer(&frame.buffer);
            write_fcTL(&mut out, seq, header.image_size, frame.duration_ms, frame.disposal, frame.blend)?;
            seq += 1;
            let compressed = compress_pixels(&native, &header, level, filter)?;
            write_fdAT(&mut out, seq, &compressed)?;
            seq += 1;
        }
    }

    let mut iend = ChunkWriter::new(&mut out, ChunkId::IEND);
    iend.finish()?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelOrder;
    use crate::codec::png::decode;

    #[test]
    fn round_trips_a_small_rgb_image() {
        let mut buf = PixelBuffer::new(4, 4, FormatTag::Uint8, ChannelOrder::Rgb);
        for y in 0..4 {
            for x in 0..4 {
                buf.set_pixel_rgb(x, y, x as f64 / 3.0, y as f64 / 3.0, 0.0);
            }
        }
        let image = Image::new(buf);
        let bytes = encode(&image, &EncodeOptions::default());
        let decoded = decode::decode(&bytes).expect("valid png");
        assert_eq!((decoded.width(), decoded.height()), (4, 4));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(decoded.get_pixel_rgba(x, y), image.get_pixel_rgba(x, y));
            }
        }
    }

    #[test]
    fn round_trips_text_metadata() {
        let buf = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgba);
        let mut image = Image::new(buf);
        image.meta.text.insert("foo".to_string(), "bar".to_string());
        let bytes = encode(&image, &EncodeOptions::default());
        let decoded = decode::decode(&bytes).unwrap();
        assert_eq!(decoded.meta.text.get("foo").map(String::as_str), Some("bar"));
    }

    #[test]
    fn round_trips_an_indexed_palette_image() {
        let mut palette = Palette::with_len(4);
        palette.set(0, [0, 0, 0, 255]);
        palette.set(1, [255, 0, 0, 255]);
        palette.set(2, [0, 255, 0, 255]);
        palette.set(3, [0, 0, 255, 255]);
        let mut buf = PixelBuffer::new(2, 2, FormatTag::Uint2, ChannelOrder::Index);
        buf.set_pixel_index(0, 0, 0);
        buf.set_pixel_index(1, 0, 1);
        buf.set_pixel_index(0, 1, 2);
        buf.set_pixel_index(1, 1, 3);
        let image = Image::with_palette(buf, palette);
        let bytes = encode(&image, &EncodeOptions::default());
        let decoded = decode::decode(&bytes).unwrap();
        assert_eq!(decoded.buffer().get_pixel_index(1, 1), 3);
    }

    #[test]
    fn round_trips_an_apng_animation() {
        let buf = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb);
        let mut image = Image::new(buf);
        image.meta.loop_count = Some(3);
        image
            .add_frame(
                PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb),
                50,
                FrameDisposal::None,
                FrameBlend::Source,
            )
            .unwrap();
        let bytes = encode(&image, &EncodeOptions::default());
        let decoded = decode::decode(&bytes).unwrap();
        assert_eq!(decoded.frame_count(), 2);
        assert_eq!(decoded.meta.loop_count, Some(3));
    }
}
