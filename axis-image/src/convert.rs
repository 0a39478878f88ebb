/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::channel::ChannelOrder;
use crate::doc::{FrameBlend, FrameDisposal, Image};
use crate::format::FormatTag;
use crate::palette::Palette;
use crate::pixel_buffer::PixelBuffer;
use crate::quant::{self, NeuQuantOptions};

/// Standard ITU-R BT.601 luma weights, used whenever a conversion drops color channels down to a
/// single luminance channel (`L`/`La` targets).
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Options controlling [`convert_image`]. Tunables live in a per-call struct rather than method
/// arguments, the same way the PNG codec's `Header`/future `EncodeOptions` are shaped. Mirrors
/// spec §4.E's `convert(src, target_format, target_channels, default_alpha, with_palette,
/// no_animation)` signature.
#[derive(Clone, Copy, Debug)]
pub struct ConvertOptions {
    /// If true, only the primary frame is converted; animation frames are dropped. Useful when a
    /// caller only wants a still thumbnail out of an animated source.
    pub no_animation: bool,
    /// Alpha value synthesized for pixels read from a source channel order that carries no alpha
    /// channel of its own (`Rgb`/`Bgr`/`L`), in `0.0..=1.0`. Has no effect when the source already
    /// has an alpha channel, or when the target channel order has none to write into.
    pub default_alpha: f64,
    /// If true, the converted result is quantized down to an indexed buffer with a fresh palette
    /// (via [`crate::quant::quantize`]) instead of a direct channel/format reinterpretation.
    /// Animation frames beyond the first are mapped onto that same palette
    /// ([`crate::quant::map_to_palette`]) rather than each training their own, so the result still
    /// satisfies `Image::add_frame`'s "every frame shares one palette" invariant.
    pub with_palette: bool,
}

impl Default for ConvertOptions {
    fn default() -> ConvertOptions {
        ConvertOptions { no_animation: false, default_alpha: 1.0, with_palette: false }
    }
}

fn resolve_rgba(
    buffer: &PixelBuffer, palette: Option<&Palette>, x: usize, y: usize, default_alpha: f64,
) -> (f64, f64, f64, f64) {
    if buffer.channel_order().is_indexed() {
        let index = buffer.get_pixel_index(x, y);
        match palette {
            Some(p) => {
                let [r, g, b, a] = p.get(index);
                (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, a as f64 / 255.0)
            }
            None => (0.0, 0.0, 0.0, default_alpha),
        }
    } else {
        let (r, g, b, a) = buffer.get_pixel_rgba(x, y);
        let a = if buffer.channel_order().has_alpha() { a } else { default_alpha };
        (r, g, b, a)
    }
}

/// Converts a single pixel buffer to a new format and channel order, synthesizing `default_alpha`
/// for any source pixel that has no alpha channel of its own. Color is resolved against `palette`
/// first if `src` is indexed. Converting *to* [`ChannelOrder::Index`] is not handled here — that
/// requires quantization (see [`crate::quant`]) to choose a palette, which is a decision this
/// function has no way to make on its own; see [`convert_image`]'s `with_palette` option.
pub fn convert_buffer(
    src: &PixelBuffer, palette: Option<&Palette>, format: FormatTag, channels: ChannelOrder,
) -> PixelBuffer {
    convert_buffer_with_alpha(src, palette, format, channels, 1.0)
}

fn convert_buffer_with_alpha(
    src: &PixelBuffer, palette: Option<&Palette>, format: FormatTag, channels: ChannelOrder, default_alpha: f64,
) -> PixelBuffer {
    assert!(!channels.is_indexed(), "convert_buffer cannot target Index; quantize instead");
    let mut dst = PixelBuffer::new(src.width(), src.height(), format, channels);
    let wants_luma = matches!(channels, ChannelOrder::L | ChannelOrder::La);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b, a) = resolve_rgba(src, palette, x, y, default_alpha);
            if wants_luma {
                let lum = LUMA_R * r + LUMA_G * g + LUMA_B * b;
                dst.set_pixel_rgba(x, y, lum, lum, lum, a);
            } else {
                dst.set_pixel_rgba(x, y, r, g, b, a);
            }
        }
    }
    dst
}

/// Converts a whole [`Image`] — primary buffer, metadata, and (unless `options.no_animation`) every
/// additional frame — to a new format and channel order. The source's palette (if any) is consulted
/// while reading. When `options.with_palette` is set, the target is quantized to an indexed buffer
/// instead of carrying the requested `format`/`channels` directly; otherwise the result never
/// carries a palette.
pub fn convert_image(src: &Image, format: FormatTag, channels: ChannelOrder, options: &ConvertOptions) -> Image {
    if options.with_palette {
        return convert_image_indexed(src, options);
    }

    let primary = convert_buffer_with_alpha(src.buffer(), src.palette(), format, channels, options.default_alpha);
    let mut out = Image::new(primary);
    out.meta = src.meta.clone();

    if !options.no_animation {
        for frame in src.frames() {
            let converted =
                convert_buffer_with_alpha(&frame.buffer, src.palette(), format, channels, options.default_alpha);
            out.add_frame(converted, frame.duration_ms, frame.disposal, frame.blend)
                .expect("convert_image always produces matching frame geometry");
        }
    }

    out
}

fn convert_image_indexed(src: &Image, options: &ConvertOptions) -> Image {
    let quantized = quant::quantize(src.buffer(), src.palette(), &NeuQuantOptions::default());
    let mut out = Image::with_palette(quantized.buffer, quantized.palette.clone());
    out.meta = src.meta.clone();

    if !options.no_animation {
        for frame in src.frames() {
            let mapped = quant::map_to_palette(&frame.buffer, src.palette(), &quantized.palette);
            out.add_frame(mapped, frame.duration_ms, frame.disposal, frame.blend)
                .expect("convert_image always produces matching frame geometry");
        }
    }

    out
}

/// Synthesizes an alpha channel for a buffer that doesn't have one, by reading per-pixel opacity
/// from a same-size `L` or `Uint8` mask buffer. Mirrors the teacher's `with_mask` combinator
/// (`map.rs`) but as a concrete operation over [`PixelBuffer`] rather than a lazy adapter type.
pub fn with_mask(src: &PixelBuffer, mask: &PixelBuffer, palette: Option<&Palette>) -> PixelBuffer {
    assert_eq!(src.size(), mask.size(), "with_mask requires matching dimensions");
    let channels = match src.channel_order() {
        ChannelOrder::L => ChannelOrder::La,
        ChannelOrder::Rgb | ChannelOrder::Bgr => ChannelOrder::Rgba,
        already_has_alpha => already_has_alpha,
    };
    let mut dst = PixelBuffer::new(src.width(), src.height(), src.format(), channels);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b, _) = resolve_rgba(src, palette, x, y, 1.0);
            let (a, _, _, _) = mask.get_pixel_rgba(x, y);
            dst.set_pixel_rgba(x, y, r, g, b, a);
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_luminance_uses_bt601_weights() {
        let mut src = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Rgb);
        src.set_pixel_rgb(0, 0, 1.0, 0.0, 0.0);
        let dst = convert_buffer(&src, None, FormatTag::Uint8, ChannelOrder::L);
        let (r, _, _, _) = dst.get_pixel_rgba(0, 0);
        assert!((r - LUMA_R).abs() < 0.01);
    }

    #[test]
    fn indexed_source_resolves_through_palette_before_converting() {
        let mut src = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Index);
        src.set_pixel_index(0, 0, 1);
        let mut palette = Palette::with_len(2);
        palette.set(1, [0, 255, 0, 255]);
        let dst = convert_buffer(&src, Some(&palette), FormatTag::Uint8, ChannelOrder::Rgb);
        let (r, g, b, _) = dst.get_pixel_rgba(0, 0);
        assert_eq!((r, g, b), (0.0, 1.0, 0.0));
    }

    #[test]
    fn no_animation_drops_extra_frames() {
        let mut img = Image::new(PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb));
        img.add_frame(
            PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb),
            100,
            FrameDisposal::None,
            FrameBlend::Source,
        )
        .unwrap();
        let out = convert_image(
            &img,
            FormatTag::Uint8,
            ChannelOrder::Rgba,
            &ConvertOptions { no_animation: true, ..ConvertOptions::default() },
        );
        assert_eq!(out.frame_count(), 1);
    }

    #[test]
    fn default_alpha_fills_in_for_an_alpha_less_source() {
        let mut src = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Rgb);
        src.set_pixel_rgb(0, 0, 1.0, 1.0, 1.0);
        let dst = convert_buffer_with_alpha(&src, None, FormatTag::Uint8, ChannelOrder::Rgba, 0.5);
        let (_, _, _, a) = dst.get_pixel_rgba(0, 0);
        assert!((a - 0.5).abs() < 1e-9);
    }

    #[test]
    fn with_palette_quantizes_every_frame_against_the_first_frames_palette() {
        let mut primary = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb);
        primary.clear(1.0, 0.0, 0.0, 1.0);
        let mut img = Image::new(primary);
        let mut next = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb);
        next.clear(0.0, 0.0, 1.0, 1.0);
        img.add_frame(next, 50, FrameDisposal::None, FrameBlend::Source).unwrap();

        let out = convert_image(
            &img,
            FormatTag::Uint8,
            ChannelOrder::Rgba,
            &ConvertOptions { with_palette: true, ..ConvertOptions::default() },
        );
        assert!(out.channel_order().is_indexed());
        assert!(out.palette().is_some());
        assert_eq!(out.frame_count(), 2);
        let (r0, _, b0, _) = out.get_pixel_rgba(0, 0);
        assert!(r0 > 0.9 && b0 < 0.1);
        let frame1 = out.get_frame(1).unwrap();
        assert!(frame1.channel_order().is_indexed());
    }
}
