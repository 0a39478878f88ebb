/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::channel::ChannelOrder;
use crate::codec::gif::{block, lzw, Error};
use crate::codec::{FormatInfo, GIF87A_SIGNATURE, GIF89A_SIGNATURE};
use crate::doc::{FrameBlend, FrameDisposal, Image};
use crate::format::FormatTag;
use crate::io::{ByteCursor, Endian};
use crate::palette::Palette;
use crate::pixel_buffer::PixelBuffer;

const EXTENSION_INTRODUCER: u8 = 0x21;
const IMAGE_SEPARATOR: u8 = 0x2c;
const TRAILER: u8 = 0x3b;

const GRAPHIC_CONTROL_LABEL: u8 = 0xf9;
const APPLICATION_LABEL: u8 = 0xff;

/// Returns true if `bytes` begins with either GIF version signature.
pub fn is_valid_file(bytes: &[u8]) -> bool {
    bytes.starts_with(&GIF87A_SIGNATURE) || bytes.starts_with(&GIF89A_SIGNATURE)
}

/// Decodes a whole GIF stream in one call.
pub fn decode(bytes: &[u8]) -> Option<Image> {
    read(bytes).ok()
}

#[derive(Clone, Copy)]
struct GraphicControl {
    disposal: FrameDisposal,
    transparent_index: Option<u8>,
    delay_cs: u16,
}

fn read_color_table(cursor: &mut ByteCursor, size: usize) -> Palette {
    let mut palette = Palette::with_len(size);
    for i in 0..size {
        let r = cursor.read_u8();
        let g = cursor.read_u8();
        let b = cursor.read_u8();
        palette.set(i as u32, [r, g, b, 255]);
    }
    palette
}

fn read_graphic_control(cursor: &mut ByteCursor) -> Result<GraphicControl, Error> {
    let block_size = cursor.read_u8();
    if block_size != 4 {
        return Err(Error::BlockSize { expected: 4, found: block_size });
    }
    let packed = cursor.read_u8();
    let delay_cs = cursor.read_u16();
    let transparent_color_index = cursor.read_u8();
    cursor.read_u8(); // block terminator
    let disposal = match (packed >> 2) & 0x07 {
        2 => FrameDisposal::Background,
        3 => FrameDisposal::Previous,
        _ => FrameDisposal::None,
    };
    let transparent_index = if packed & 0x01 != 0 { Some(transparent_color_index) } else { None };
    Ok(GraphicControl { disposal, transparent_index, delay_cs })
}

/// Reads a Netscape looping Application Extension's sub-block payload, if `identifier`/`auth_code`
/// match, returning the loop count it carries.
fn parse_netscape_loop(payload: &[u8]) -> Option<u32> {
    if payload.len() >= 3 && payload[0] == 0x01 {
        Some(u16::from_le_bytes([payload[1], payload[2]]) as u32)
    } else {
        None
    }
}

fn composite_rect(
    canvas: &mut PixelBuffer, left: usize, top: usize, width: usize, height: usize, indices: &[u8],
    palette: &Palette, transparent_index: Option<u8>,
) {
    for y in 0..height {
        for x in 0..width {
            let idx = indices[y * width + x];
            if Some(idx) == transparent_index {
                continue;
            }
            let [r, g, b, a] = palette.get(idx as u32);
            canvas.set_pixel_rgba(
                left + x,
                top + y,
                r as f64 / 255.0,
                g as f64 / 255.0,
                b as f64 / 255.0,
                a as f64 / 255.0,
            );
        }
    }
}

fn clear_rect(canvas: &mut PixelBuffer, left: usize, top: usize, width: usize, height: usize) {
    for y in 0..height {
        for x in 0..width {
            canvas.set_pixel_rgba(left + x, top + y, 0.0, 0.0, 0.0, 0.0);
        }
    }
}

/// De-interleaves a 4-pass interlaced GIF image's `indices` (rows in pass order) into row-major
/// order, matching the disjoint groups of rows Adam7-style interlacing writes.
fn deinterlace(indices: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut out = vec![0u8; width * height];
    let mut src_row = 0;
    for &(start, step) in &[(0, 8), (4, 8), (2, 4), (1, 2)] {
        let mut dst_row = start;
        while dst_row < height {
            let src_off = src_row * width;
            let dst_off = dst_row * width;
            out[dst_off..dst_off + width].copy_from_slice(&indices[src_off..src_off + width]);
            src_row += 1;
            dst_row += step;
        }
    }
    out
}

struct DecodedFrame {
    buffer: PixelBuffer,
    duration_ms: u32,
    disposal: FrameDisposal,
}

fn read(bytes: &[u8]) -> Result<Image, Error> {
    if !is_valid_file(bytes) {
        return Err(Error::Signature);
    }
    let mut cursor = ByteCursor::with_endian(bytes, Endian::Little);
    cursor.skip(6); // signature

    let screen_width = cursor.read_u16() as usize;
    let screen_height = cursor.read_u16() as usize;
    let packed = cursor.read_u8();
    cursor.read_u8(); // background color index, unused: canvas starts transparent
    cursor.read_u8(); // pixel aspect ratio, not modeled

    let global_color_table = if packed & 0x80 != 0 {
        let size = 1usize << ((packed & 0x07) + 1);
        Some(read_color_table(&mut cursor, size))
    } else {
        None
    };

    let mut canvas = PixelBuffer::new(screen_width, screen_height, FormatTag::Uint8, ChannelOrder::Rgba);
    let mut frames: Vec<DecodedFrame> = Vec::new();
    let mut pending_gce: Option<GraphicControl> = None;
    let mut loop_count: Option<u32> = None;

    loop {
        if cursor.is_end() {
            break;
        }
        match cursor.read_u8() {
            TRAILER => break,
            EXTENSION_INTRODUCER => {
                let label = cursor.read_u8();
                match label {
                    GRAPHIC_CONTROL_LABEL => {
                        pending_gce = Some(read_graphic_control(&mut cursor)?);
                    },
                    APPLICATION_LABEL => {
                        let block_size = cursor.read_u8();
                        let app_id = cursor.read_bytes(block_size as usize).to_vec();
                        let payload = block::read_sub_blocks(&mut cursor);
                        if app_id == b"NETSCAPE2.0" {
                            if let Some(lc) = parse_netscape_loop(&payload) {
                                loop_count = Some(lc);
                            }
                        }
                    },
                    _ => {
                        // Comment, Plain Text, or an extension this decoder doesn't interpret: the
                        // sub-block reader skips it uniformly regardless of label.
                        block::skip_sub_blocks(&mut cursor);
                    },
                }
            },
            IMAGE_SEPARATOR => {
                let left = cursor.read_u16() as usize;
                let top = cursor.read_u16() as usize;
                let width = cursor.read_u16() as usize;
                let height = cursor.read_u16() as usize;
                let img_packed = cursor.read_u8();
                let local_color_table = if img_packed & 0x80 != 0 {
                    let size = 1usize << ((img_packed & 0x07) + 1);
                    Some(read_color_table(&mut cursor, size))
                } else {
                    None
                };
                let interlaced = img_packed & 0x40 != 0;

                let palette = local_color_table
                    .as_ref()
                    .or(global_color_table.as_ref())
                    .ok_or(Error::MissingColorTable)?;

                let min_code_size = cursor.read_u8();
                let lzw_data = block::read_sub_blocks(&mut cursor);
                let mut indices =
                    lzw::decode(min_code_size, &lzw_data).ok_or(Error::LzwCode { code: min_code_size as u16 })?;
                indices.resize(width * height, 0);
                if interlaced {
                    indices = deinterlace(&indices, width, height);
                }

                let gce = pending_gce.take();
                let disposal = gce.map(|g| g.disposal).unwrap_or(FrameDisposal::None);
                let transparent_index = gce.and_then(|g| g.transparent_index);
                let duration_ms = gce.map(|g| g.delay_cs as u32 * 10).unwrap_or(0);

                let pre_canvas = if disposal == FrameDisposal::Previous { Some(canvas.clone()) } else { None };

                composite_rect(&mut canvas, left, top, width, height, &indices, palette, transparent_index);
                frames.push(DecodedFrame { buffer: canvas.clone(), duration_ms, disposal });

                match disposal {
                    FrameDisposal::Background => clear_rect(&mut canvas, left, top, width, height),
                    FrameDisposal::Previous => canvas = pre_canvas.expect("captured above"),
                    FrameDisposal::None => {},
                }
            },
            _ => {
                // Unrecognized block introducer: nothing more can be reliably parsed.
                break;
            },
        }
    }

    let mut frames_iter = frames.into_iter();
    let first = match frames_iter.next() {
        Some(f) => f,
        None => return Err(Error::MissingColorTable),
    };

    let mut image = Image::new(first.buffer);
    image.meta.loop_count = loop_count;
    image.meta.first_frame_duration_ms = Some(first.duration_ms);
    image.meta.first_frame_disposal = Some(first.disposal);
    image.meta.first_frame_blend = Some(FrameBlend::Source);

    for f in frames_iter {
        image
            .add_frame(f.buffer, f.duration_ms, f.disposal, FrameBlend::Source)
            .expect("every decoded frame shares the logical screen's geometry");
    }

    Ok(image)
}

/// Stateful GIF [`crate::codec::Decoder`]. GIF decoding is eager (the whole file is parsed and
/// composited in one pass through [`read`]), so `start_decode`/`decode_frame` simply cache the
/// already-decoded image rather than supporting true incremental frame-by-frame decoding.
#[derive(Default)]
pub struct GifDecoder {
    image: Option<Image>,
}

impl GifDecoder {
    pub fn new() -> GifDecoder {
        GifDecoder { image: None }
    }
}

impl crate::codec::Decoder for GifDecoder {
    fn format_name(&self) -> &'static str {
        "gif"
    }

    fn num_frames(&self) -> usize {
        self.image.as_ref().map(|i| i.frame_count()).unwrap_or(0)
    }

    fn is_valid_file(bytes: &[u8]) -> bool {
        is_valid_file(bytes)
    }

    fn start_decode(&mut self, bytes: &[u8]) -> Option<FormatInfo> {
        let image = decode(bytes)?;
        let info = FormatInfo { width: image.width(), height: image.height(), frame_count: image.frame_count() };
        self.image = Some(image);
        Some(info)
    }

    fn decode(&mut self, bytes: &[u8], frame_index: Option<usize>) -> Option<Image> {
        self.start_decode(bytes)?;
        match frame_index {
            None => self.image.clone(),
            Some(i) => self.decode_frame(i),
        }
    }

    fn decode_frame(&mut self, frame_index: usize) -> Option<Image> {
        let source = self.image.as_ref()?;
        let buffer = source.get_frame(frame_index).ok()?.clone();
        let mut out = Image::new(buffer);
        out.meta = source.meta.clone();
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_file_without_the_gif_signature() {
        assert!(decode(b"not a gif").is_none());
    }

    #[test]
    fn deinterlace_reassembles_adam7_style_gif_passes() {
        // A 1x8 image, one byte per row, written in 4-pass order: rows 0, 4, 2, 6, 1, 3, 5, 7.
        let source_order = [0u8, 4, 2, 6, 1, 3, 5, 7];
        let out = deinterlace(&source_order, 1, 8);
        assert_eq!(out, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn decodes_a_minimal_single_frame_gif() {
        // Hand-built 2x1 GIF: global color table of 2 colors (red, blue), one opaque frame.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&GIF89A_SIGNATURE);
        bytes.extend_from_slice(&2u16.to_le_bytes()); // width
        bytes.extend_from_slice(&1u16.to_le_bytes()); // height
        bytes.push(0x80); // global color table flag, 2 entries
        bytes.push(0);
        bytes.push(0);
        bytes.extend_from_slice(&[255, 0, 0]); // index 0: red
        bytes.extend_from_slice(&[0, 0, 255]); // index 1: blue
        bytes.push(IMAGE_SEPARATOR);
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.push(0); // no local color table, not interlaced
        let lzw_data = lzw::encode(2, &[0, 1]);
        bytes.push(2); // min code size
        block::write_sub_blocks(&mut bytes, &lzw_data);
        bytes.push(TRAILER);

        let image = decode(&bytes).unwrap();
        assert_eq!((image.width(), image.height()), (2, 1));
        let (r0, _, _, a0) = image.get_pixel_rgba(0, 0);
        assert!(r0 > 0.9 && a0 > 0.9);
        let (r1, _, b1, _) = image.get_pixel_rgba(1, 0);
        assert!(b1 > 0.9 && r1 < 0.1);
    }
}
