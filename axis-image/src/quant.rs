/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::channel::ChannelOrder;
use crate::format::FormatTag;
use crate::palette::Palette;
use crate::pixel_buffer::PixelBuffer;

/// Options for [`quantize`]'s NeuQuant color reduction.
#[derive(Clone, Copy, Debug)]
pub struct NeuQuantOptions {
    /// Target palette size, clamped to `1..=256`.
    pub color_count: usize,
    /// Classic NeuQuant "sample factor": 1 trains on every pixel (best quality, slowest), 30
    /// trains on roughly one in thirty (fastest, coarsest). Matches the parameter name the
    /// algorithm's original public-domain implementation uses.
    pub sample_factor: u32,
}

impl Default for NeuQuantOptions {
    fn default() -> NeuQuantOptions {
        NeuQuantOptions {
            color_count: 256,
            sample_factor: 10,
        }
    }
}

/// The result of [`quantize`]: an indexed pixel buffer plus the palette it indexes into.
#[derive(Clone, Debug)]
pub struct Quantized {
    pub buffer: PixelBuffer,
    pub palette: Palette,
}

/// A single NeuQuant network neuron: a color the network has learned, stored at higher precision
/// than the `u8` output so small training steps don't get lost to rounding.
#[derive(Clone, Copy, Debug)]
struct Neuron {
    r: f64,
    g: f64,
    b: f64,
}

impl Neuron {
    fn dist_sq(&self, r: f64, g: f64, b: f64) -> f64 {
        let dr = self.r - r;
        let dg = self.g - g;
        let db = self.b - b;
        dr * dr + dg * dg + db * db
    }
}

/// Picks a deterministic sampling stride, coprime with `pixel_count`, so that repeatedly advancing
/// by `stride` (mod `pixel_count`) visits every pixel exactly once but in a spatially-scattered
/// order — the same trick the original NeuQuant implementation uses to avoid training on runs of
/// identical or spatially-correlated pixels without pulling in an RNG.
fn sampling_stride(pixel_count: usize) -> usize {
    if pixel_count < 2 {
        return 1;
    }
    // Search downward from a value near 5/9 of the pixel count (NeuQuant's traditional constant)
    // for the first odd candidate coprime with pixel_count.
    let mut candidate = (pixel_count * 5 / 9) | 1;
    loop {
        if gcd(candidate, pixel_count) == 1 {
            return candidate;
        }
        if candidate <= 1 {
            return 1;
        }
        candidate -= 2;
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Runs NeuQuant color quantization over `src`'s resolved RGB colors (through `palette` if `src`
/// is already indexed) and returns a new `Index`/`Uint8` buffer plus the palette it was built from.
pub fn quantize(src: &PixelBuffer, palette: Option<&Palette>, options: &NeuQuantOptions) -> Quantized {
    let netsize = options.color_count.clamp(1, 256);
    let pixel_count = src.width() * src.height();

    let mut samples = Vec::with_capacity(pixel_count.min(1_000_000));
    {
        let stride = sampling_stride(pixel_count).max(1);
        let step = (options.sample_factor.max(1)) as usize;
        let mut i = 0usize;
        let mut taken = 0usize;
        let target = pixel_count.max(1);
        while taken < target {
            let x = i % src.width().max(1);
            let y = i / src.width().max(1);
            if y < src.height() {
                if taken % step == 0 {
                    let (r, g, b, _) = resolve(src, palette, x, y);
                    samples.push([r * 255.0, g * 255.0, b * 255.0]);
                }
                taken += 1;
            }
            i = (i + stride) % pixel_count.max(1);
            if i == 0 && taken > 0 {
                break;
            }
        }
    }
    if samples.is_empty() {
        samples.push([0.0, 0.0, 0.0]);
    }

    let mut network: Vec<Neuron> = (0..netsize)
        .map(|i| {
            let v = (i * 256 / netsize.max(1)) as f64;
            Neuron { r: v, g: v, b: v }
        })
        .collect();

    let initial_radius = (netsize / 8).max(1) as f64;
    let initial_alpha = 0.2;
    let total_cycles = samples.len().min(samples.len() * 1); // one pass over the sample set
    for (iter, sample) in samples.iter().cycle().take(total_cycles.max(1)).enumerate() {
        let progress = iter as f64 / total_cycles.max(1) as f64;
        let alpha = initial_alpha * (1.0 - progress);
        let radius = initial_radius * (1.0 - progress);

        let (best, _) = network
            .iter()
            .enumerate()
            .map(|(idx, n)| (idx, n.dist_sq(sample[0], sample[1], sample[2])))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap();

        let radius_i = radius.round().max(0.0) as usize;
        let lo = best.saturating_sub(radius_i);
        let hi = (best + radius_i).min(network.len() - 1);
        for i in lo..=hi {
            let dist = (i as isize - best as isize).unsigned_abs() as f64;
            let falloff = if radius_i == 0 { 1.0 } else { 1.0 - (dist * dist) / (radius.max(1.0) * radius.max(1.0)) };
            if falloff <= 0.0 {
                continue;
            }
            let a = alpha * falloff;
            let n = &mut network[i];
            n.r += a * (sample[0] - n.r);
            n.g += a * (sample[1] - n.g);
            n.b += a * (sample[2] - n.b);
        }
    }

    let mut out_palette = Palette::with_len(netsize);
    for (i, n) in network.iter().enumerate() {
        out_palette.set(
            i as u32,
            [
                n.r.round().clamp(0.0, 255.0) as u8,
                n.g.round().clamp(0.0, 255.0) as u8,
                n.b.round().clamp(0.0, 255.0) as u8,
                255,
            ],
        );
    }

    let mut out = PixelBuffer::new(src.width(), src.height(), FormatTag::Uint8, ChannelOrder::Index);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b, _) = resolve(src, palette, x, y);
            let (r, g, b) = (r * 255.0, g * 255.0, b * 255.0);
            let (best, _) = network
                .iter()
                .enumerate()
                .map(|(idx, n)| (idx, n.dist_sq(r, g, b)))
                .min_by(|a, b2| a.1.partial_cmp(&b2.1).unwrap())
                .unwrap();
            out.set_pixel_index(x, y, best as u32);
        }
    }

    Quantized { buffer: out, palette: out_palette }
}

/// Maps `src`'s resolved colors onto the nearest entry of an already-built `target_palette`, with
/// no training pass of its own. Used to re-index an animation's later frames against frame 0's
/// freshly-quantized palette, so every frame of one [`crate::Image`] shares the single palette slot
/// invariant (`Image::add_frame`) instead of each frame picking its own.
pub fn map_to_palette(src: &PixelBuffer, palette: Option<&Palette>, target_palette: &Palette) -> PixelBuffer {
    let mut out = PixelBuffer::new(src.width(), src.height(), FormatTag::Uint8, ChannelOrder::Index);
    if target_palette.is_empty() {
        return out;
    }
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b, _) = resolve(src, palette, x, y);
            let (r, g, b) = (r * 255.0, g * 255.0, b * 255.0);
            let (best, _) = target_palette
                .entries()
                .iter()
                .enumerate()
                .map(|(idx, &[pr, pg, pb, _])| {
                    let (dr, dg, db) = (r - pr as f64, g - pg as f64, b - pb as f64);
                    (idx, dr * dr + dg * dg + db * db)
                })
                .min_by(|a, b2| a.1.partial_cmp(&b2.1).unwrap())
                .unwrap();
            out.set_pixel_index(x, y, best as u32);
        }
    }
    out
}

fn resolve(buffer: &PixelBuffer, palette: Option<&Palette>, x: usize, y: usize) -> (f64, f64, f64, f64) {
    if buffer.channel_order().is_indexed() {
        let index = buffer.get_pixel_index(x, y);
        match palette {
            Some(p) => {
                let [r, g, b, a] = p.get(index);
                (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, a as f64 / 255.0)
            }
            None => (0.0, 0.0, 0.0, 0.0),
        }
    } else {
        buffer.get_pixel_rgba(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_stride_is_coprime_with_pixel_count() {
        for n in [1, 2, 3, 16, 100, 257, 1024] {
            let stride = sampling_stride(n);
            assert_eq!(gcd(stride, n.max(1)), 1);
        }
    }

    #[test]
    fn quantizing_a_two_color_image_yields_a_usable_palette() {
        let mut src = PixelBuffer::new(4, 4, FormatTag::Uint8, ChannelOrder::Rgb);
        for y in 0..4 {
            for x in 0..4 {
                if x < 2 {
                    src.set_pixel_rgb(x, y, 1.0, 0.0, 0.0);
                } else {
                    src.set_pixel_rgb(x, y, 0.0, 0.0, 1.0);
                }
            }
        }
        let result = quantize(&src, None, &NeuQuantOptions { color_count: 4, sample_factor: 1 });
        assert_eq!(result.palette.len(), 4);
        assert!(result.buffer.channel_order().is_indexed());
        let idx_a = result.buffer.get_pixel_index(0, 0);
        let idx_b = result.buffer.get_pixel_index(3, 0);
        let color_a = result.palette.get(idx_a);
        let color_b = result.palette.get(idx_b);
        assert!(color_a[0] > color_a[2]);
        assert!(color_b[2] > color_b[0]);
    }

    #[test]
    fn color_count_is_clamped_to_256() {
        let src = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Rgb);
        let result = quantize(&src, None, &NeuQuantOptions { color_count: 99999, sample_factor: 1 });
        assert_eq!(result.palette.len(), 256);
    }

    #[test]
    fn map_to_palette_picks_the_nearest_existing_entry() {
        let mut palette = Palette::with_len(2);
        palette.set(0, [255, 0, 0, 255]);
        palette.set(1, [0, 0, 255, 255]);
        let mut src = PixelBuffer::new(2, 1, FormatTag::Uint8, ChannelOrder::Rgb);
        src.set_pixel_rgb(0, 0, 0.9, 0.1, 0.0);
        src.set_pixel_rgb(1, 0, 0.0, 0.1, 0.9);
        let mapped = map_to_palette(&src, None, &palette);
        assert_eq!(mapped.get_pixel_index(0, 0), 0);
        assert_eq!(mapped.get_pixel_index(1, 0), 1);
    }
}
