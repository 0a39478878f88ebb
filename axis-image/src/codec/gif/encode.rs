/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::channel::ChannelOrder;
use crate::codec::gif::{block, lzw};
use crate::codec::{Encoder, GIF89A_SIGNATURE};
use crate::doc::{FrameDisposal, Image};
use crate::palette::Palette;
use crate::pixel_buffer::PixelBuffer;
use crate::quant::{self, NeuQuantOptions};

pub use crate::codec::EncodeOptions;

pub fn encode(image: &Image, options: &EncodeOptions) -> Vec<u8> {
    GifEncoder::new().encode(image, options)
}

/// Stateful [`Encoder`] over a GIF output stream. Like PNG's, GIF's "streaming" mode just
/// accumulates frames (the logical screen descriptor and Netscape loop extension both need to be
/// written before any frame data) and defers to [`write`] at `finish`.
#[derive(Default)]
pub struct GifEncoder {
    options: EncodeOptions,
    frames: Vec<Image>,
}

impl GifEncoder {
    pub fn new() -> GifEncoder {
        GifEncoder::default()
    }
}

impl Encoder for GifEncoder {
    fn supports_animation(&self) -> bool {
        true
    }

    fn encode(&self, image: &Image, options: &EncodeOptions) -> Vec<u8> {
        write(image, options)
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
            None => return write(&Image::new(PixelBuffer::new(0, 0, crate::format::FormatTag::Uint8, ChannelOrder::Rgba)), &self.options),
        };
        for frame in iter {
            let duration_ms = frame.meta.first_frame_duration_ms.unwrap_or(100);
            let disposal = frame.meta.first_frame_disposal.unwrap_or(FrameDisposal::None);
            image
                .add_frame(frame.buffer().clone(), duration_ms, disposal, crate::doc::FrameBlend::Source)
                .expect("streamed frames must share the first frame's geometry");
        }
        self.encode(&image, &self.options)
    }
}

/// Smallest `2..=8` bit depth whose color table size (`2^bits`) can hold `len` colors.
fn color_table_bits(len: usize) -> u8 {
    let mut bits = 2u8;
    while (1usize << bits) < len && bits < 8 {
        bits += 1;
    }
    bits
}

fn write_u16_le(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Resolves `buffer`'s colors down to a palette GIF can index (`<= 256` entries): reuses an
/// already-indexed buffer's own palette outright, otherwise quantizes via NeuQuant.
fn gif_colors_for(buffer: &PixelBuffer, palette: Option<&Palette>, sample_factor: u32) -> (Palette, Vec<u8>) {
    if buffer.channel_order().is_indexed() {
        if let Some(p) = palette {
            if p.len() <= 256 {
                let mut indices = Vec::with_capacity(buffer.width() * buffer.height());
                for y in 0..buffer.height() {
                    for x in 0..buffer.width() {
                        indices.push(buffer.get_pixel_index(x, y) as u8);
                    }
                }
                return (p.clone(), indices);
            }
        }
    }

    let quantized =
        quant::quantize(buffer, palette, &NeuQuantOptions { color_count: 256, sample_factor });
    let mut indices = Vec::with_capacity(buffer.width() * buffer.height());
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            indices.push(quantized.buffer.get_pixel_index(x, y) as u8);
        }
    }
    (quantized.palette, indices)
}

fn write_netscape_loop(out: &mut Vec<u8>, loop_count: u32) {
    out.push(0x21);
    out.push(0xff);
    out.push(11);
    out.extend_from_slice(b"NETSCAPE2.0");
    out.push(3);
    out.push(0x01);
    write_u16_le(out, loop_count.min(u16::MAX as u32) as u16);
    out.push(0);
}

fn write_graphic_control(out: &mut Vec<u8>, disposal: FrameDisposal, delay_cs: u16) {
    out.push(0x21);
    out.push(0xf9);
    out.push(4);
    let disposal_bits: u8 = match disposal {
        FrameDisposal::None => 0,
        FrameDisposal::Background => 2,
        FrameDisposal::Previous => 3,
    };
    out.push(disposal_bits << 2);
    write_u16_le(out, delay_cs);
    out.push(0); // transparent color index, unused: this encoder never marks one transparent
    out.push(0);
}

fn write_image(out: &mut Vec<u8>, width: usize, height: usize, palette: &Palette, indices: &[u8]) {
    out.push(0x2c);
    write_u16_le(out, 0); // left
    write_u16_le(out, 0); // top
    write_u16_le(out, width as u16);
    write_u16_le(out, height as u16);

    let bits = color_table_bits(palette.len().max(1));
    out.push(0x80 | (bits - 1)); // local color table present, not interlaced, not sorted

    let table_size = 1usize << bits;
    for i in 0..table_size {
        let [r, g, b, _a] = palette.get(i as u32);
        out.push(r);
        out.push(g);
        out.push(b);
    }

    out.push(bits); // lzw minimum code size
    let lzw_data = lzw::encode(bits, indices);
    block::write_sub_blocks(out, &lzw_data);
}

fn write(image: &Image, options: &EncodeOptions) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&GIF89A_SIGNATURE);

    write_u16_le(&mut out, image.width() as u16);
    write_u16_le(&mut out, image.height() as u16);
    out.push(0x00); // no global color table
    out.push(0x00); // background color index
    out.push(0x00); // pixel aspect ratio

    let single_frame = options.single_frame.unwrap_or(false) || image.frames().is_empty();
    let sample_factor = options
        .sampling_factor
        .map(|f| f as u32)
        .unwrap_or(if image.frames().is_empty() { 10 } else { 30 });

    if !single_frame {
        write_netscape_loop(&mut out, image.meta.loop_count.unwrap_or(0));
    }

    struct Frame<'a> {
        buffer: &'a PixelBuffer,
        duration_ms: u32,
        disposal: FrameDisposal,
    }

    let mut frames = vec![Frame {
        buffer: image.buffer(),
        duration_ms: image.meta.first_frame_duration_ms.unwrap_or(100),
        disposal: image.meta.first_frame_disposal.unwrap_or(FrameDisposal::None),
    }];
    if !single_frame {
        for f in image.frames() {
            frames.push(Frame { buffer: &f.buffer, duration_ms: f.duration_ms, disposal: f.disposal });
        }
    }

    for frame in frames {
        let (palette, indices) = gif_colors_for(frame.buffer, image.palette(), sample_factor);
        let delay_cs = (frame.duration_ms / 10).min(u16::MAX as u32) as u16;
        write_graphic_control(&mut out, frame.disposal, delay_cs);
        write_image(&mut out, image.width(), image.height(), &palette, &indices);
    }

    out.push(0x3b); // trailer
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelOrder;
    use crate::codec::gif;
    use crate::format::FormatTag;

    #[test]
    fn round_trips_a_small_rgb_image() {
        let mut buffer = PixelBuffer::new(4, 4, FormatTag::Uint8, ChannelOrder::Rgb);
        for y in 0..4 {
            for x in 0..4 {
                if x < 2 {
                    buffer.set_pixel_rgb(x, y, 1.0, 0.0, 0.0);
                } else {
                    buffer.set_pixel_rgb(x, y, 0.0, 0.0, 1.0);
                }
            }
        }
        let image = Image::new(buffer);
        let bytes = encode(&image, &EncodeOptions::default());

        assert!(gif::is_valid_file(&bytes));
        let decoded = gif::decode(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 4));
        let (r, _, b, _) = decoded.get_pixel_rgba(0, 0);
        assert!(r > 0.9 && b < 0.1);
        let (r, _, b, _) = decoded.get_pixel_rgba(3, 0);
        assert!(b > 0.9 && r < 0.1);
    }

    #[test]
    fn round_trips_an_animation_with_loop_count() {
        let mut buffer = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb);
        buffer.clear(1.0, 0.0, 0.0, 1.0);
        let mut image = Image::new(buffer);
        image.meta.loop_count = Some(0);
        image.meta.first_frame_duration_ms = Some(100);

        let mut next = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb);
        next.clear(0.0, 1.0, 0.0, 1.0);
        image.add_frame(next, 150, FrameDisposal::None, crate::doc::FrameBlend::Source).unwrap();

        let bytes = encode(&image, &EncodeOptions::default());
        let decoded = gif::decode(&bytes).unwrap();
        assert_eq!(decoded.frame_count(), 2);
        assert_eq!(decoded.meta.loop_count, Some(0));

        let (r0, g0, _, _) = decoded.get_pixel_rgba(0, 0);
        assert!(r0 > 0.9 && g0 < 0.1);
        let frame1 = decoded.get_frame(1).unwrap();
        let (r1, g1, _, _) = frame1.get_pixel_rgba(0, 0);
        assert!(g1 > 0.9 && r1 < 0.1);
    }

    #[test]
    fn reuses_an_existing_palette_instead_of_requantizing() {
        let mut palette = Palette::with_len(2);
        palette.set(0, [10, 20, 30, 255]);
        palette.set(1, [200, 210, 220, 255]);
        let mut buffer = PixelBuffer::new(2, 1, FormatTag::Uint8, ChannelOrder::Index);
        buffer.set_pixel_index(0, 0, 0);
        buffer.set_pixel_index(1, 0, 1);
        let image = Image::with_palette(buffer, palette);

        let bytes = encode(&image, &EncodeOptions::default());
        let decoded = gif::decode(&bytes).unwrap();
        let (r, g, b, _) = decoded.get_pixel_rgba(0, 0);
        assert_eq!((r * 255.0).round() as u8, 10);
        assert_eq!((g * 255.0).round() as u8, 20);
        assert_eq!((b * 255.0).round() as u8, 30);
    }
}
