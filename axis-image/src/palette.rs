/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// A table of up to 256 RGBA colors that an [`ChannelOrder::Index`](crate::ChannelOrder::Index)
/// [`crate::PixelBuffer`] indexes into. Backed by a flat `Vec<u8>` the same way a 1-row,
/// `N`-column `Uint8`/`Rgba` pixel buffer would be, rather than a `Vec<(u8,u8,u8,u8)>`, so the same
/// byte-oriented codec helpers (`get_bytes`) work on it unchanged.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Palette {
    entries: Vec<[u8; 4]>,
}

impl Palette {
    /// An empty palette.
    pub fn new() -> Palette {
        Palette { entries: Vec::new() }
    }

    /// A palette of `len` fully-opaque black entries.
    pub fn with_len(len: usize) -> Palette {
        Palette {
            entries: vec![[0, 0, 0, 255]; len],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias for [`Palette::len`] matching the spec's `num_colors` accessor name.
    pub fn num_colors(&self) -> usize {
        self.len()
    }

    /// Number of channels a palette entry carries. This palette is always RGBA8 internally (see
    /// the type's own doc comment), so this is always `4`; the accessor exists so callers written
    /// against the spec's generic `(num_colors, num_channels)` pair don't need a special case for
    /// this crate's one concrete palette representation.
    pub fn num_channels(&self) -> usize {
        4
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the RGBA color at `index`, or fully-transparent black if out of range.
    pub fn get(&self, index: u32) -> [u8; 4] {
        self.entries.get(index as usize).copied().unwrap_or([0, 0, 0, 0])
    }

    /// Gets a single channel (`0=r, 1=g, 2=b, 3=a`) of the color at `index`, or `0` if either is out
    /// of range. The spec's per-channel palette accessor; [`Palette::get`] remains the primary API
    /// since every call site in this crate wants the whole color at once.
    pub fn get_channel(&self, index: u32, channel: usize) -> u8 {
        self.get(index).get(channel).copied().unwrap_or(0)
    }

    /// Sets the RGBA color at `index`. Growing the palette (the spec explicitly allows this) zero-
    /// fills (opaque black) any newly created entries below `index`.
    pub fn set(&mut self, index: u32, color: [u8; 4]) {
        let index = index as usize;
        if index >= self.entries.len() {
            self.entries.resize(index + 1, [0, 0, 0, 255]);
        }
        self.entries[index] = color;
    }

    /// Sets an opaque RGB color at `index` (alpha 255), matching the spec's `set_rgb`.
    pub fn set_rgb(&mut self, index: u32, r: u8, g: u8, b: u8) {
        self.set(index, [r, g, b, 255]);
    }

    /// Sets an RGBA color at `index`, matching the spec's `set_rgba`.
    pub fn set_rgba(&mut self, index: u32, r: u8, g: u8, b: u8, a: u8) {
        self.set(index, [r, g, b, a]);
    }

    /// Appends a color, returning its index.
    pub fn push(&mut self, color: [u8; 4]) -> u32 {
        self.entries.push(color);
        (self.entries.len() - 1) as u32
    }

    /// Resizes the palette. Entries beyond the old length are opaque black; entries beyond the new
    /// length are dropped. Existing indices below `new_len` are preserved exactly, per spec.
    pub fn resize(&mut self, new_len: usize) {
        self.entries.resize(new_len, [0, 0, 0, 255]);
    }

    pub fn entries(&self) -> &[[u8; 4]] {
        &self.entries
    }

    /// Finds the index of an exact color match, if any. Used by encoders that already quantized
    /// their source image and just need to resolve colors back to palette slots.
    pub fn find_exact(&self, color: [u8; 4]) -> Option<u32> {
        self.entries.iter().position(|&c| c == color).map(|i| i as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growing_via_set_fills_intermediate_entries() {
        let mut p = Palette::new();
        p.set(2, [10, 20, 30, 255]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.get(0), [0, 0, 0, 255]);
        assert_eq!(p.get(2), [10, 20, 30, 255]);
    }

    #[test]
    fn out_of_range_get_is_transparent_black() {
        let p = Palette::with_len(4);
        assert_eq!(p.get(99), [0, 0, 0, 0]);
    }

    #[test]
    fn set_rgb_and_set_rgba_match_the_equivalent_set_call() {
        let mut p = Palette::with_len(2);
        p.set_rgb(0, 1, 2, 3);
        p.set_rgba(1, 4, 5, 6, 7);
        assert_eq!(p.get(0), [1, 2, 3, 255]);
        assert_eq!(p.get(1), [4, 5, 6, 7]);
    }

    #[test]
    fn get_channel_reads_individual_components() {
        let mut p = Palette::with_len(1);
        p.set(0, [10, 20, 30, 40]);
        assert_eq!(p.get_channel(0, 0), 10);
        assert_eq!(p.get_channel(0, 3), 40);
        assert_eq!(p.get_channel(0, 9), 0);
    }

    #[test]
    fn num_colors_and_num_channels_match_spec_naming() {
        let p = Palette::with_len(5);
        assert_eq!(p.num_colors(), 5);
        assert_eq!(p.num_channels(), 4);
    }

    #[test]
    fn shrinking_then_growing_preserves_surviving_indices() {
        let mut p = Palette::with_len(8);
        p.set(3, [1, 2, 3, 4]);
        p.resize(4);
        p.resize(8);
        assert_eq!(p.get(3), [1, 2, 3, 4]);
        assert_eq!(p.get(7), [0, 0, 0, 255]);
    }
}
