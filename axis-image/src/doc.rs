/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::BTreeMap;

use crate::channel::ChannelOrder;
use crate::error::Error;
use crate::format::FormatTag;
use crate::palette::Palette;
use crate::pixel_buffer::PixelBuffer;

/// How a frame's pixels are disposed of before the next frame is composited, mirroring APNG's
/// `fcTL` disposal op and GIF's Graphic Control Extension disposal method.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameDisposal {
    /// Leave the frame's pixels as the starting point for the next frame.
    None,
    /// Clear the frame's region to the background color before the next frame.
    Background,
    /// Restore the region to what it was before this frame was rendered.
    Previous,
}

/// How a frame's pixels are combined with the canvas they're drawn onto, mirroring APNG's `fcTL`
/// blend op. GIF has no equivalent concept (frames always overwrite); GIF-decoded frames are
/// always tagged `Source`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameBlend {
    /// Overwrite the canvas region outright.
    Source,
    /// Alpha-composite over the existing canvas contents.
    Over,
}

/// A single frame of a (possibly animated) image, beyond the implicit frame 0 carried by
/// [`Image`]'s own pixel buffer.
#[derive(Clone, Debug)]
pub struct ImageFrame {
    pub buffer: PixelBuffer,
    pub duration_ms: u32,
    pub disposal: FrameDisposal,
    pub blend: FrameBlend,
}

/// Metadata that travels with an [`Image`] but isn't pixel data: text key/value pairs (PNG
/// `tEXt`/`iTXt`), an embedded ICC color profile, raw EXIF bytes (carried through for decoders this
/// crate doesn't implement — see the design notes), physical pixel density, animation loop count,
/// and background color.
#[derive(Clone, Debug, Default)]
pub struct ImageMeta {
    pub text: BTreeMap<String, String>,
    pub icc_profile: Option<Vec<u8>>,
    pub exif: Option<Vec<u8>>,
    /// Pixels per meter, horizontal and vertical (PNG `pHYs`).
    pub pixels_per_meter: Option<(u32, u32)>,
    /// Number of times an animation repeats; `Some(0)` means "loop forever".
    pub loop_count: Option<u32>,
    pub background_color: Option<[u8; 4]>,
    /// Duration of the implicit frame 0, for animated images. `Image`'s primary buffer has no
    /// `ImageFrame` of its own to carry this (only `frames()` entries do), so an animated PNG/GIF
    /// decoder stashes frame 0's own delay and disposal/blend here instead of leaving it
    /// unrepresentable.
    pub first_frame_duration_ms: Option<u32>,
    pub first_frame_disposal: Option<FrameDisposal>,
    pub first_frame_blend: Option<FrameBlend>,
}

/// A raster image: one primary pixel buffer, an optional palette, zero or more additional frames
/// for animation, and metadata. This is the crate's top-level unit of work — what `Decoder`/
/// `Encoder` implementations produce and consume.
///
/// All frames (the implicit frame 0 and every entry in `frames()`) share the same width, height,
/// [`FormatTag`], and [`ChannelOrder`] as the primary buffer; [`Image::add_frame`] enforces this.
#[derive(Clone, Debug)]
pub struct Image {
    primary: PixelBuffer,
    palette: Option<Palette>,
    frames: Vec<ImageFrame>,
    pub meta: ImageMeta,
}

impl Image {
    /// Creates a single-frame image from a pixel buffer, with no palette and empty metadata.
    pub fn new(buffer: PixelBuffer) -> Image {
        Image {
            primary: buffer,
            palette: None,
            frames: Vec::new(),
            meta: ImageMeta::default(),
        }
    }

    /// Creates a single-frame indexed image with an explicit palette.
    pub fn with_palette(buffer: PixelBuffer, palette: Palette) -> Image {
        Image {
            primary: buffer,
            palette: Some(palette),
            frames: Vec::new(),
            meta: ImageMeta::default(),
        }
    }

    pub fn format(&self) -> FormatTag {
        self.primary.format()
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.primary.channel_order()
    }

    pub fn width(&self) -> usize {
        self.primary.width()
    }

    pub fn height(&self) -> usize {
        self.primary.height()
    }

    /// The primary (frame 0) pixel buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.primary
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.primary
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn palette_mut(&mut self) -> Option<&mut Palette> {
        self.palette.as_mut()
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = Some(palette);
    }

    /// Additional frames beyond the primary buffer, in playback order.
    pub fn frames(&self) -> &[ImageFrame] {
        &self.frames
    }

    /// Total number of frames, including the implicit frame 0.
    pub fn frame_count(&self) -> usize {
        1 + self.frames.len()
    }

    /// Gets frame `index`, where `0` is the primary buffer and `1..` index into `frames()`.
    pub fn get_frame(&self, index: usize) -> Result<&PixelBuffer, Error> {
        if index == 0 {
            Ok(&self.primary)
        } else {
            self.frames
                .get(index - 1)
                .map(|f| &f.buffer)
                .ok_or(Error::FrameIndexOutOfRange { index, frame_count: self.frame_count() })
        }
    }

    /// Appends an animation frame. The frame's buffer must share this image's width, height,
    /// format, and channel order.
    pub fn add_frame(
        &mut self, buffer: PixelBuffer, duration_ms: u32, disposal: FrameDisposal, blend: FrameBlend,
    ) -> Result<(), Error> {
        if buffer.width() != self.width()
            || buffer.height() != self.height()
            || buffer.format() != self.format()
            || buffer.channel_order() != self.channel_order()
        {
            return Err(Error::MismatchedFrameGeometry);
        }
        self.frames.push(ImageFrame { buffer, duration_ms, disposal, blend });
        Ok(())
    }

    /// Drops every frame beyond the primary buffer.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// Reads the resolved `(r, g, b, a)` color at `(x, y)` in the primary buffer, following
    /// through the palette if this image is indexed. Unlike [`PixelBuffer::get_pixel_rgba`], which
    /// is palette-unaware and returns the raw index, this always returns an actual color.
    pub fn get_pixel_rgba(&self, x: usize, y: usize) -> (f64, f64, f64, f64) {
        if self.channel_order().is_indexed() {
            let index = self.primary.get_pixel_index(x, y);
            let palette = match &self.palette {
                Some(p) => p,
                None => return (0.0, 0.0, 0.0, 0.0),
            };
            let [r, g, b, a] = palette.get(index);
            (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, a as f64 / 255.0)
        } else {
            self.primary.get_pixel_rgba(x, y)
        }
    }

    /// Sets a pixel's color in the primary buffer. On an indexed image this writes the index
    /// directly (matching [`PixelBuffer::set_pixel_rgb`]'s documented behavior) rather than
    /// resolving the color against the palette — callers that want color-based painting on an
    /// indexed image should quantize first.
    pub fn set_pixel_rgb(&mut self, x: usize, y: usize, r: f64, g: f64, b: f64) {
        self.primary.set_pixel_rgb(x, y, r, g, b);
    }

    pub fn set_pixel_rgba(&mut self, x: usize, y: usize, r: f64, g: f64, b: f64, a: f64) {
        self.primary.set_pixel_rgba(x, y, r, g, b, a);
    }

    /// Serializes the primary buffer to bytes, resolving the palette first if this image is
    /// indexed. `None` returns the primary buffer's own bytes verbatim (raw index bytes, for an
    /// indexed image); `Some(order)` resolves every pixel's actual color (through the palette, via
    /// [`Image::get_pixel_rgba`]) into a buffer of that channel order before serializing, so an
    /// indexed image can be exported as e.g. straight RGBA bytes.
    pub fn get_bytes(&self, order: Option<ChannelOrder>) -> Vec<u8> {
        let order = match order {
            Some(order) => order,
            None => return self.primary.get_bytes(),
        };
        if !self.channel_order().is_indexed() && order == self.channel_order() {
            return self.primary.get_bytes();
        }
        let mut remapped = PixelBuffer::new(self.width(), self.height(), self.format(), order);
        for (x, y) in self.primary.positions() {
            let (r, g, b, a) = self.get_pixel_rgba(x, y);
            remapped.set_pixel_rgba(x, y, r, g, b, a);
        }
        remapped.get_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatTag;

    #[test]
    fn single_frame_image_has_frame_count_one() {
        let img = Image::new(PixelBuffer::new(4, 4, FormatTag::Uint8, ChannelOrder::Rgb));
        assert_eq!(img.frame_count(), 1);
        assert!(img.frames().is_empty());
    }

    #[test]
    fn add_frame_rejects_mismatched_geometry() {
        let mut img = Image::new(PixelBuffer::new(4, 4, FormatTag::Uint8, ChannelOrder::Rgb));
        let bad = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb);
        assert_eq!(
            img.add_frame(bad, 100, FrameDisposal::None, FrameBlend::Source),
            Err(Error::MismatchedFrameGeometry)
        );
    }

    #[test]
    fn add_frame_accepts_matching_geometry_and_is_retrievable() {
        let mut img = Image::new(PixelBuffer::new(4, 4, FormatTag::Uint8, ChannelOrder::Rgb));
        let next = PixelBuffer::new(4, 4, FormatTag::Uint8, ChannelOrder::Rgb);
        img.add_frame(next, 50, FrameDisposal::Background, FrameBlend::Over).unwrap();
        assert_eq!(img.frame_count(), 2);
        assert!(img.get_frame(1).is_ok());
        assert_eq!(
            img.get_frame(2),
            Err(Error::FrameIndexOutOfRange { index: 2, frame_count: 2 })
        );
    }

    #[test]
    fn indexed_image_resolves_colors_through_palette() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Index);
        buf.set_pixel_index(0, 0, 2);
        let mut palette = Palette::with_len(4);
        palette.set(2, [10, 20, 30, 255]);
        let img = Image::with_palette(buf, palette);
        let (r, g, b, a) = img.get_pixel_rgba(0, 0);
        assert!((r - 10.0 / 255.0).abs() < 1e-9);
        assert!((g - 20.0 / 255.0).abs() < 1e-9);
        assert!((b - 30.0 / 255.0).abs() < 1e-9);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn get_bytes_with_no_order_returns_the_primary_buffer_bytes() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Rgb);
        buf.set_pixel_rgb(0, 0, 1.0, 0.5, 0.0);
        let img = Image::new(buf.clone());
        assert_eq!(img.get_bytes(None), buf.get_bytes());
    }

    #[test]
    fn get_bytes_with_order_resolves_indexed_colors_through_the_palette() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Index);
        buf.set_pixel_index(0, 0, 1);
        let mut palette = Palette::with_len(2);
        palette.set(1, [10, 20, 30, 255]);
        let img = Image::with_palette(buf, palette);
        let bytes = img.get_bytes(Some(ChannelOrder::Rgb));
        assert_eq!(bytes, vec![10, 20, 30]);
    }
}
