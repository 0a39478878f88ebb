/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use byteorder::{ReadBytesExt, BE};
use math::Vector2;

use crate::codec::png::chunk::{ChunkId, ChunkReader};
use crate::codec::png::compress::{CompressionMethod, Decompressor};
use crate::codec::png::filter::Defilterer;
use crate::codec::png::interlace::{Interlacer, InterlacerItem};
use crate::codec::png::{ColorType, Error, FrameControl, Header};
use crate::codec::{Decoder, FormatInfo};
use crate::{FormatTag, FrameBlend, FrameDisposal, Image, Palette, PixelBuffer};

/// Decodes a complete PNG byte stream into an [`Image`]. `None` means the bytes aren't a valid
/// PNG — malformed files are reported through `Option`, not `Result`, matching every other codec
/// entry point in this crate (see `crate::Error`'s doc comment).
pub fn decode(bytes: &[u8]) -> Option<Image> {
    read(&mut Cursor::new(bytes)).ok()
}

/// Cheaply checks whether `bytes` begins with the PNG signature.
pub fn is_valid_file(bytes: &[u8]) -> bool {
    bytes.len() >= crate::codec::PNG_SIGNATURE.len()
        && bytes[..crate::codec::PNG_SIGNATURE.len()] == crate::codec::PNG_SIGNATURE
}

/// Stateful [`Decoder`] over a PNG file. `start_decode` eagerly decodes every frame: both
/// de-interlacing and APNG frame compositing need the whole pixel stream regardless of which
/// frame a caller ultimately asks for, so there's no cheaper partial parse to do here.
#[derive(Default)]
pub struct PngDecoder {
    image: Option<Image>,
}

impl PngDecoder {
    pub fn new() -> PngDecoder {
        PngDecoder::default()
    }
}

impl Decoder for PngDecoder {
    fn format_name(&self) -> &'static str {
        "png"
    }

    fn num_frames(&self) -> usize {
        self.image.as_ref().map(Image::frame_count).unwrap_or(0)
    }

    fn is_valid_file(bytes: &[u8]) -> bool {
        is_valid_file(bytes)
    }

    fn start_decode(&mut self, bytes: &[u8]) -> Option<FormatInfo> {
        let image = decode(bytes)?;
        let info = FormatInfo {
            width: image.width(),
            height: image.height(),
            frame_count: image.frame_count(),
        };
        self.image = Some(image);
        Some(info)
    }

    fn decode(&mut self, bytes: &[u8], frame_index: Option<usize>) -> Option<Image> {
        match frame_index {
            None => decode(bytes),
            Some(index) => {
                self.start_decode(bytes)?;
                self.decode_frame(index)
            }
        }
    }

    fn decode_frame(&mut self, frame_index: usize) -> Option<Image> {
        let full = self.image.as_ref()?;
        let buffer = full.get_frame(frame_index).ok()?.clone();
        let mut out = match full.palette() {
            Some(palette) => Image::with_palette(buffer, palette.clone()),
            None => Image::new(buffer),
        };
        out.meta = full.meta.clone();
        Some(out)
    }
}

/// Reads to the end of a chunk and checks its CRC, but treats a CRC mismatch as a non-fatal
/// condition rather than aborting the whole decode — real-world PNGs occasionally carry a bad CRC
/// on an otherwise-fine chunk, and refusing to show the image over it is needlessly strict.
fn finish_soft<R: Read>(chunk: ChunkReader<R>) -> Result<(), Error> {
    match chunk.finish() {
        Ok(_) => Ok(()),
        Err(Error::Crc) => Ok(()),
        Err(err) => Err(err),
    }
}

fn read_whole_chunk<R: Read>(mut chunk: ChunkReader<R>) -> Result<Vec<u8>, Error> {
    let mut data = vec![0u8; chunk.remaining() as usize];
    chunk.read_exact(&mut data)?;
    finish_soft(chunk)?;
    Ok(data)
}

fn format_for_bit_depth(bit_depth: u8, color_type: ColorType) -> Result<FormatTag, Error> {
    Ok(match bit_depth {
        1 => FormatTag::Uint1,
        2 => FormatTag::Uint2,
        4 => FormatTag::Uint4,
        8 => FormatTag::Uint8,
        16 => FormatTag::Uint16,
        _ => return Err(Error::BitDepth { bit_depth, color_type }),
    })
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[allow(non_snake_case)]
fn read_tEXt(data: &[u8]) -> (String, String) {
    match data.iter().position(|&b| b == 0) {
        Some(pos) => (latin1_to_string(&data[..pos]), latin1_to_string(&data[pos + 1..])),
        None => (latin1_to_string(data), String::new()),
    }
}

#[allow(non_snake_case)]
fn read_iCCP(data: &[u8]) -> Result<Vec<u8>, Error> {
    let name_end = data
        .iter()
        .position(|&b| b == 0)
        .ok_or(Error::ChunkLen { chunk_id: ChunkId::iCCP, len: data.len() as u32 })?;
    let compressed = data
        .get(name_end + 2..)
        .ok_or(Error::ChunkLen { chunk_id: ChunkId::iCCP, len: data.len() as u32 })?;
    let mut decompressor = Decompressor::new(Cursor::new(compressed), CompressionMethod::Zlib);
    let mut profile = Vec::new();
    decompressor.read_to_end(&mut profile)?;
    Ok(profile)
}

#[allow(non_snake_case)]
fn read_pHYs(mut data: &[u8]) -> Result<(u32, u32), Error> {
    let ppu_x = data.read_u32::<BE>()?;
    let ppu_y = data.read_u32::<BE>()?;
    Ok((ppu_x, ppu_y))
}

#[allow(non_snake_case)]
fn read_acTL(mut data: &[u8]) -> Result<u32, Error> {
    let _num_frames = data.read_u32::<BE>()?;
    let num_plays = data.read_u32::<BE>()?;
    Ok(num_plays)
}

#[allow(non_snake_case)]
fn read_fcTL(mut data: &[u8]) -> Result<FrameControl, Error> {
    Ok(FrameControl {
        sequence_number: data.read_u32::<BE>()?,
        width: data.read_u32::<BE>()?,
        height: data.read_u32::<BE>()?,
        x_offset: data.read_u32::<BE>()?,
        y_offset: data.read_u32::<BE>()?,
        delay_num: data.read_u16::<BE>()?,
        delay_den: data.read_u16::<BE>()?,
        dispose_op: data.read_u8()?,
        blend_op: data.read_u8()?,
    })
}

impl FrameControl {
    fn disposal(&self) -> FrameDisposal {
        match self.dispose_op {
            1 => FrameDisposal::Background,
            2 => FrameDisposal::Previous,
            _ => FrameDisposal::None,
        }
    }

    fn blend(&self) -> FrameBlend {
        match self.blend_op {
            0 => FrameBlend::Source,
            _ => FrameBlend::Over,
        }
    }

    fn delay_ms(&self) -> u32 {
        let den = if self.delay_den == 0 { 100 } else { self.delay_den as u32 };
        (self.delay_num as u32 * 1000) / den
    }
}

/// Alpha-composites (or, for `Source`, overwrites) `frame` onto a copy of `base` at
/// `(x_off, y_off)`, producing a canvas-sized buffer. Indexed buffers have no meaningful notion of
/// blending a palette index, so they always behave as `Source` regardless of `blend`.
fn composite_frame(
    base: &PixelBuffer, frame: &PixelBuffer, x_off: usize, y_off: usize, blend: FrameBlend,
) -> PixelBuffer {
    let mut out = base.clone();
    let source_only = blend == FrameBlend::Source || base.channel_order().is_indexed();

    for ly in 0..frame.height() {
        for lx in 0..frame.width() {
            let (x, y) = (x_off + lx, y_off + ly);
            if source_only {
                for c in 0..frame.channel_count() {
                    out.set_raw(x, y, c, frame.get_raw(lx, ly, c));
                }
                continue;
            }

            let (fr, fg, fb, fa) = frame.get_pixel_rgba(lx, ly);
            if fa <= 0.0 {
                continue;
            } else if fa >= 1.0 {
                out.set_pixel_rgba(x, y, fr, fg, fb, fa);
                continue;
            }
            let (br, bg, bb, ba) = out.get_pixel_rgba(x, y);
            let a_out = fa + ba * (1.0 - fa);
            if a_out <= 0.0 {
                continue;
            }
            let r = (fr * fa + br * ba * (1.0 - fa)) / a_out;
            let g = (fg * fa + bg * ba * (1.0 - fa)) / a_out;
            let b = (fb * fa + bb * ba * (1.0 - fa)) / a_out;
            out.set_pixel_rgba(x, y, r, g, b, a_out);
        }
    }

    out
}

/// Computes the canvas the *next* frame composites onto, given what was just rendered and the
/// canvas as it stood before this frame (needed for `FrameDisposal::Previous`).
fn apply_disposal(
    rendered: &PixelBuffer, base_before: &PixelBuffer, x_off: usize, y_off: usize, width: usize,
    height: usize, disposal: FrameDisposal, background: Option<[u8; 4]>,
) -> PixelBuffer {
    match disposal {
        FrameDisposal::None => rendered.clone(),
        FrameDisposal::Previous => base_before.clone(),
        FrameDisposal::Background => {
            let mut out = rendered.clone();
            let [r, g, b, a] = background.unwrap_or([0, 0, 0, 0]);
            let indexed = out.channel_order().is_indexed();
            let (rf, gf, bf, af) =
                (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, a as f64 / 255.0);
            for ly in 0..height {
                for lx in 0..width {
                    let (x, y) = (x_off + lx, y_off + ly);
                    if indexed {
                        out.set_pixel_index(x, y, 0);
                    } else {
                        out.set_pixel_rgba(x, y, rf, gf, bf, af);
                    }
                }
            }
            out
        }
    }
}

/// Decodes one `IDAT`/`fdAT` pixel stream (already concatenated across however many physical
/// chunks carried it) into a [`PixelBuffer`] of the given size.
///
/// Adam7-interlaced images are handled by decoding each of the 7 passes into its own small
/// sub-buffer (sized to that pass's `BeginPass` dimensions) and scattering its pixels into the
/// main buffer by position; a non-interlaced image is just a single degenerate "pass" the size of
/// the whole image, in which case the decoded bytes are written straight into the main buffer
/// with no scattering at all.
fn decode_pixels(header: &Header, size: Vector2<usize>, compressed: &[u8]) -> Result<PixelBuffer, Error> {
    let format = format_for_bit_depth(header.bit_depth, header.color_type)?;
    let channel_order = header.color_type.to_channel_order();
    let channel_count = channel_order.channel_count();
    let mut buffer = PixelBuffer::new(size.x, size.y, format, channel_order);

    let mut decompressor = Some(Decompressor::new(Cursor::new(compressed), header.compression_method));
    let mut interlacer = Interlacer::new(size, header.interlace_method);
    // `Some((sub_buffer, pass_width, next_index))` while scattering a non-trivial pass; `None`
    // while the pass's bytes went straight into `buffer` (the non-interlaced fast path) or the
    // pass is empty.
    let mut scatter: Option<(PixelBuffer, usize, usize)> = None;

    loop {
        match interlacer.next() {
            None => break,

            Some(InterlacerItem::BeginPass { size: pass_size }) => {
                let inner = decompressor.take().expect("decompressor taken without being restored");
                if pass_size.x == 0 || pass_size.y == 0 {
                    decompressor = Some(inner);
                    scatter = None;
                    continue;
                }

                let mut defilterer =
                    Defilterer::new(header.filter_method, inner, pass_size, header.bit_depth, header.color_type);
                let mut pass_bytes = Vec::new();
                defilterer.read_to_end(&mut pass_bytes)?;
                decompressor = Some(defilterer.into_inner());

                if pass_size == size {
                    buffer.set_bytes(&pass_bytes);
                    scatter = None;
                } else {
                    let mut sub = PixelBuffer::new(pass_size.x, pass_size.y, format, channel_order);
                    sub.set_bytes(&pass_bytes);
                    scatter = Some((sub, pass_size.x, 0));
                }
            }

            Some(InterlacerItem::Pixel { pos }) => {
                let Some((sub, pass_width, index)) = scatter.as_mut() else {
                    continue;
                };
                let lx = *index % *pass_width;
                let ly = *index / *pass_width;
                for c in 0..channel_count {
                    let value = sub.get_raw(lx, ly, c);
                    buffer.set_raw(pos.x, pos.y, c, value);
                }
                *index += 1;
            }
        }
    }

    Ok(buffer)
}

/// Reads a whole PNG stream: signature, then chunks in order, assembling the primary image and
/// any APNG animation frames. Unknown critical chunks fail the decode; unknown ancillary chunks
/// are silently skipped, per the PNG spec's own extensibility rule.
fn read<R: Read>(r: &mut R) -> Result<Image, Error> {
    read_signature(r)?;

    let mut header: Option<Header> = None;
    let mut plte: Option<Vec<[u8; 3]>> = None;
    let mut trns: Option<Vec<u8>> = None;
    let mut icc_profile: Option<Vec<u8>> = None;
    let mut text: BTreeMap<String, String> = BTreeMap::new();
    let mut pixels_per_meter: Option<(u32, u32)> = None;
    let mut loop_count: Option<u32> = None;
    let background: Option<[u8; 4]> = None;

    let mut pending_fctl: Option<FrameControl> = None;
    let mut first_fctl: Option<FrameControl> = None;
    let mut idat_accum: Vec<u8> = Vec::new();
    let mut fdat_accum: Vec<u8> = Vec::new();
    let mut primary: Option<PixelBuffer> = None;
    let mut canvas: Option<PixelBuffer> = None;
    let mut anim_frames: Vec<(FrameControl, PixelBuffer)> = Vec::new();

    loop {
        let chunk = ChunkReader::new(&mut *r)?;
        let chunk_id = chunk.chunk_id();

        if chunk_id != ChunkId::IDAT && !idat_accum.is_empty() {
            let header_ref = header.as_ref().ok_or(Error::MissingChunk { chunk_id: ChunkId::IHDR })?;
            let buf = decode_pixels(header_ref, header_ref.image_size, &idat_accum)?;
            idat_accum.clear();
            if let Some(fctl) = pending_fctl.take() {
                let disposal = match fctl.disposal() {
                    FrameDisposal::Previous => FrameDisposal::None,
                    other => other,
                };
                let next_base = apply_disposal(
                    &buf, &buf, 0, 0, header_ref.image_size.x, header_ref.image_size.y, disposal, background,
                );
                canvas = Some(next_base);
                first_fctl = Some(fctl);
            }
            primary = Some(buf);
        }
        if chunk_id != ChunkId::fdAT && !fdat_accum.is_empty() {
            let header_ref = header.as_ref().ok_or(Error::MissingChunk { chunk_id: ChunkId::IHDR })?;
            let fctl = pending_fctl
                .take()
                .ok_or(Error::UnexpectedChunk { chunk_id: ChunkId::fdAT, detail: "fdAT without fcTL" })?;
            let frame_size = Vector2::new(fctl.width as usize, fctl.height as usize);
            let cropped = decode_pixels(header_ref, frame_size, &fdat_accum)?;
            fdat_accum.clear();

            let base = canvas
                .take()
                .ok_or(Error::UnexpectedChunk { chunk_id: ChunkId::fdAT, detail: "animation frame with no canvas" })?;
            let (x_off, y_off) = (fctl.x_offset as usize, fctl.y_offset as usize);
            let rendered = composite_frame(&base, &cropped, x_off, y_off, fctl.blend());
            let next_base = apply_disposal(
                &rendered, &base, x_off, y_off, fctl.width as usize, fctl.height as usize, fctl.disposal(),
                background,
            );
            canvas = Some(next_base);
            anim_frames.push((fctl, rendered));
        }

        match chunk_id {
            ChunkId::IEND => break,

            ChunkId::IHDR => {
                if header.is_some() {
                    return Err(Error::DuplicateChunk { chunk_id });
                }
                header = Some(read_IHDR(chunk)?);
            }

            ChunkId::PLTE => {
                if plte.is_some() {
                    return Err(Error::DuplicateChunk { chunk_id });
                }
                plte = Some(read_PLTE(chunk)?);
            }

            ChunkId::tRNS => {
                if header.is_none() {
                    return Err(Error::WrongChunk { expected: ChunkId::IHDR, found: chunk_id });
                }
                trns = Some(read_whole_chunk(chunk)?);
            }

            ChunkId::iCCP => {
                let data = read_whole_chunk(chunk)?;
                icc_profile = Some(read_iCCP(&data)?);
            }

            ChunkId::tEXt => {
                let data = read_whole_chunk(chunk)?;
                let (keyword, value) = read_tEXt(&data);
                text.insert(keyword, value);
            }

            ChunkId::pHYs => {
                let data = read_whole_chunk(chunk)?;
                pixels_per_meter = Some(read_pHYs(&data)?);
            }

            ChunkId::acTL => {
                let data = read_whole_chunk(chunk)?;
                loop_count = Some(read_acTL(&data)?);
            }

            ChunkId::fcTL => {
                let data = read_whole_chunk(chunk)?;
                pending_fctl = Some(read_fcTL(&data)?);
            }

            ChunkId::IDAT => {
                if header.is_none() {
                    return Err(Error::WrongChunk { expected: ChunkId::IHDR, found: chunk_id });
                }
                if primary.is_some() {
                    return Err(Error::DuplicateChunk { chunk_id });
                }
                idat_accum.extend(read_whole_chunk(chunk)?);
            }

            ChunkId::fdAT => {
                let data = read_whole_chunk(chunk)?;
                if data.len() < 4 {
                    return Err(Error::ChunkLen { chunk_id, len: data.len() as u32 });
                }
                fdat_accum.extend_from_slice(&data[4..]);
            }

            _ => {
                if chunk_id.is_critical() {
                    return Err(Error::CriticalChunk { chunk_id });
                }
                finish_soft(chunk)?;
            }
        }
    }

    let header = header.ok_or(Error::MissingChunk { chunk_id: ChunkId::IHDR })?;
    let primary = primary.ok_or(Error::MissingChunk { chunk_id: ChunkId::IDAT })?;

    let palette = match header.color_type {
        ColorType::Index => {
            let rgb = plte.ok_or(Error::MissingPalette)?;
            let mut palette = Palette::with_len(rgb.len());
            for (i, c) in rgb.iter().enumerate() {
                let a = trns.as_ref().and_then(|t| t.get(i)).copied().unwrap_or(255);
                palette.set(i as u32, [c[0], c[1], c[2], a]);
            }
            Some(palette)
        }
        _ => None,
    };

    let mut image = match palette {
        Some(palette) => Image::with_palette(primary, palette),
        None => Image::new(primary),
    };
    image.meta.text = text;
    image.meta.icc_profile = icc_profile;
    image.meta.pixels_per_meter = pixels_per_meter;
    image.meta.loop_count = loop_count;
    if let Some(fctl) = first_fctl {
        image.meta.first_frame_duration_ms = Some(fctl.delay_ms());
        image.meta.first_frame_disposal = Some(fctl.disposal());
        image.meta.first_frame_blend = Some(fctl.blend());
    }

    anim_frames.sort_by_key(|(fctl, _)| fctl.sequence_number);
    for (fctl, buf) in anim_frames {
        image
            .add_frame(buf, fctl.delay_ms(), fctl.disposal(), fctl.blend())
            .map_err(|_| Error::UnexpectedChunk { chunk_id: ChunkId::fcTL, detail: "frame geometry mismatch" })?;
    }

    Ok(image)
}

/// Reads the contents of a PNG `IHDR` chunk.
#[allow(non_snake_case)]
fn read_IHDR<R: Read>(mut chunk: ChunkReader<R>) -> Result<Header, Error> {
    let chunk_id = chunk.chunk_id();
    if chunk_id != ChunkId::IHDR {
        return Err(Error::WrongChunk { expected: ChunkId::IHDR, found: chunk_id });
    }
    if chunk.chunk_len() != crate::codec::png::IHDR_LENGTH {
        return Err(Error::ChunkLen { chunk_id, len: chunk.chunk_len() });
    }

    let width = chunk.read_u32::<BE>()?;
    let height = chunk.read_u32::<BE>()?;
    let size = Vector2::new(usize::try_from(width)?, usize::try_from(height)?);
    if width == 0 || width > crate::codec::png::MAX_DIMENSION || height == 0
        || height > crate::codec::png::MAX_DIMENSION
    {
        return Err(Error::ImageSize { size });
    }
    let bit_depth = chunk.read_u8()?;
    let color_type = ColorType::try_from(chunk.read_u8()?)?;
    color_type.check_bit_depth(bit_depth)?;
    let compression_method = CompressionMethod::try_from(chunk.read_u8()?)?;
    let filter_method = crate::codec::png::FilterMethod::try_from(chunk.read_u8()?)?;
    let interlace_method = crate::codec::png::InterlaceMethod::from_byte(chunk.read_u8()?)?;

    finish_soft(chunk)?;

    Ok(Header {
        bit_depth,
        color_type,
        compression_method,
        filter_method,
        image_size: size,
        interlace_method,
    })
}

/// Reads the contents of a PNG `PLTE` chunk into raw `(r, g, b)` triples.
#[allow(non_snake_case)]
fn read_PLTE<R: Read>(mut chunk: ChunkReader<R>) -> Result<Vec<[u8; 3]>, Error> {
    let chunk_id = chunk.chunk_id();
    if chunk_id != ChunkId::PLTE {
        return Err(Error::WrongChunk { expected: ChunkId::PLTE, found: chunk_id });
    }
    let chunk_len = chunk.chunk_len();
    if chunk_len == 0 || chunk_len > crate::codec::png::MAX_PALETTE_LEN as u32 * 3 || chunk_len % 3 != 0 {
        return Err(Error::ChunkLen { chunk_id, len: chunk_len });
    }

    let mut entries = Vec::new();
    let mut rgb = [0u8; 3];
    for _ in 0..(chunk_len / 3) {
        chunk.read_exact(&mut rgb)?;
        entries.push(rgb);
    }

    finish_soft(chunk)?;

    Ok(entries)
}

/// Reads and checks the PNG file signature.
fn read_signature<R: Read>(r: &mut R) -> Result<(), Error> {
    let mut signature = [0; crate::codec::PNG_SIGNATURE.len()];
    r.read_exact(&mut signature)?;
    if signature != crate::codec::PNG_SIGNATURE {
        return Err(Error::Signature);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_chunk(out: &mut Vec<u8>, id: &[u8; 4], data: &[u8]) {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(id);
        hasher.update(data);
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(id);
        out.extend_from_slice(data);
        out.extend_from_slice(&hasher.finalize().to_be_bytes());
    }

    fn tiny_rgb_png(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
        use std::io::Write as _;

        let mut ihdr = Vec::new();
        ihdr.extend_from_slice(&width.to_be_bytes());
        ihdr.extend_from_slice(&height.to_be_bytes());
        ihdr.extend_from_slice(&[8, 2, 0, 0, 0]); // bit depth 8, RGB, zlib, base filter, no interlace

        let mut raw = Vec::new();
        for row in pixels.chunks((width as usize) * 3) {
            raw.push(0); // filter type None
            raw.extend_from_slice(row);
        }
        let mut zlib = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
        zlib.write_all(&raw).unwrap();
        let idat = zlib.finish().unwrap();

        let mut bytes = crate::codec::PNG_SIGNATURE.to_vec();
        write_chunk(&mut bytes, b"IHDR", &ihdr);
        write_chunk(&mut bytes, b"IDAT", &idat);
        write_chunk(&mut bytes, b"IEND", &[]);
        bytes
    }

    #[test]
    fn decodes_a_minimal_non_interlaced_rgb_image() {
        let pixels = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 0];
        let bytes = tiny_rgb_png(2, 2, &pixels);
        let image = decode(&bytes).expect("valid png");
        assert_eq!((image.width(), image.height()), (2, 2));
        assert_eq!(image.get_pixel_rgba(0, 0), (1.0, 0.0, 0.0, 1.0));
        assert_eq!(image.get_pixel_rgba(1, 1), (1.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn rejects_bytes_without_the_png_signature() {
        assert!(decode(b"not a png").is_none());
        assert!(!is_valid_file(b"not a png"));
    }

    #[test]
    fn is_valid_file_checks_just_the_signature() {
        let bytes = tiny_rgb_png(1, 1, &[1, 2, 3]);
        assert!(is_valid_file(&bytes));
    }
}
