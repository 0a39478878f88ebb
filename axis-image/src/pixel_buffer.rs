/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use color::f16;
use math::Vector2;

use crate::channel::{ChannelOrder, ChannelRole};
use crate::format::FormatTag;
use crate::packed::PackedRows;

/// The per-format backing array of a [`PixelBuffer`]. Each variant holds one flat, row-major array
/// of `width * height * channels.channel_count()` elements (or, for the packed formats, the
/// equivalent bit-packed row layout) — the same "one `VecImage<T>` per concrete pixel type" shape
/// the PNG decoder already used for its fixed `Gray8`/`Rgba16`/etc. set, generalized to a closed sum
/// type over every [`FormatTag`] instead of nine hand-enumerated combinations.
#[derive(Clone, Debug)]
enum Storage {
    Packed(PackedRows),
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    F16(Vec<f16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// An in-memory raster of pixels stored in one of the twelve [`FormatTag`] representations, with a
/// fixed [`ChannelOrder`]. This is the "pixel buffer" substrate: it knows nothing about file
/// formats, palettes, or animation; those live one layer up in [`crate::Image`] and
/// [`crate::Palette`].
///
/// Reads outside the buffer's bounds return the format's zero value; writes outside the bounds are
/// silently ignored. Callers that need to know whether a coordinate is in range should check
/// `width()`/`height()` themselves — this mirrors the buffer's role as a dumb storage substrate, not
/// a bounds-enforcing API.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    format: FormatTag,
    channels: ChannelOrder,
    width: usize,
    height: usize,
    storage: Storage,
}

impl PixelBuffer {
    /// Creates a new buffer of the given size, format, and channel order, with every element
    /// initialized to zero.
    pub fn new(width: usize, height: usize, format: FormatTag, channels: ChannelOrder) -> PixelBuffer {
        let elem_count = width * height * channels.channel_count();
        let storage = match format {
            FormatTag::Uint1 | FormatTag::Uint2 | FormatTag::Uint4 => {
                Storage::Packed(PackedRows::new(format.bits(), width * channels.channel_count(), height))
            }
            FormatTag::Uint8 => Storage::U8(vec![0; elem_count]),
            FormatTag::Uint16 => Storage::U16(vec![0; elem_count]),
            FormatTag::Uint32 => Storage::U32(vec![0; elem_count]),
            FormatTag::Int8 => Storage::I8(vec![0; elem_count]),
            FormatTag::Int16 => Storage::I16(vec![0; elem_count]),
            FormatTag::Int32 => Storage::I32(vec![0; elem_count]),
            FormatTag::Float16 => Storage::F16(vec![f16::from_f32(0.0); elem_count]),
            FormatTag::Float32 => Storage::F32(vec![0.0; elem_count]),
            FormatTag::Float64 => Storage::F64(vec![0.0; elem_count]),
        };
        PixelBuffer {
            format,
            channels,
            width,
            height,
            storage,
        }
    }

    /// Builds a buffer from an existing byte array, laid out row-major with `row_stride` bytes
    /// between the start of one row and the next (which may exceed the tight
    /// [`PixelBuffer::row_stride_bytes`] this crate itself would use, to account for e.g. a
    /// caller's own padding convention). `num_channels` must match `channel_order`'s own channel
    /// count; it is accepted as a parameter (rather than derived) to let a caller's mismatch
    /// surface as an assertion instead of a silently wrong read.
    ///
    /// Unlike some pixel-buffer designs, this crate's [`PixelBuffer`] stores pixels natively in
    /// whatever [`ChannelOrder`] it is given — `r`/`g`/`b`/`a` accessors already resolve through
    /// [`ChannelOrder::slot_of`] regardless of physical order — so there is no separate "canonical
    /// RGBA" remap step here: the bytes are simply copied (row by row, to strip any stride padding)
    /// into a buffer already tagged with `channel_order`.
    pub fn from_bytes(
        width: usize, height: usize, bytes: &[u8], row_stride: usize, channel_order: ChannelOrder,
        format: FormatTag, num_channels: usize,
    ) -> PixelBuffer {
        assert_eq!(
            num_channels,
            channel_order.channel_count(),
            "num_channels must match channel_order's channel count"
        );
        let mut buffer = PixelBuffer::new(width, height, format, channel_order);
        let tight_stride = buffer.row_stride_bytes();
        let mut tight = Vec::with_capacity(tight_stride * height);
        for y in 0..height {
            let start = y * row_stride;
            tight.extend_from_slice(&bytes[start..start + tight_stride]);
        }
        buffer.set_bytes(&tight);
        buffer
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.channels
    }

    pub fn channel_count(&self) -> usize {
        self.channels.channel_count()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Vector2<usize> {
        Vector2::new(self.width, self.height)
    }

    fn in_bounds(&self, x: usize, y: usize, c: usize) -> bool {
        x < self.width && y < self.height && c < self.channel_count()
    }

    fn elem_index(&self, x: usize, y: usize, c: usize) -> usize {
        (y * self.width + x) * self.channel_count() + c
    }

    /// Reads the raw stored value of channel `c` at `(x, y)` as an `f64`, with no normalization.
    /// Out-of-bounds coordinates return `0.0`.
    pub fn get_raw(&self, x: usize, y: usize, c: usize) -> f64 {
        if !self.in_bounds(x, y, c) {
            return 0.0;
        }
        match &self.storage {
            Storage::Packed(rows) => {
                let elems_per_row = self.width * self.channel_count();
                let index = y * elems_per_row + x * self.channel_count() + c;
                let row = index / rows.elems_per_row();
                let col = index % rows.elems_per_row();
                rows.get(row, col) as f64
            }
            Storage::U8(v) => v[self.elem_index(x, y, c)] as f64,
            Storage::U16(v) => v[self.elem_index(x, y, c)] as f64,
            Storage::U32(v) => v[self.elem_index(x, y, c)] as f64,
            Storage::I8(v) => v[self.elem_index(x, y, c)] as f64,
            Storage::I16(v) => v[self.elem_index(x, y, c)] as f64,
            Storage::I32(v) => v[self.elem_index(x, y, c)] as f64,
            Storage::F16(v) => v[self.elem_index(x, y, c)].to_f64(),
            Storage::F32(v) => v[self.elem_index(x, y, c)] as f64,
            Storage::F64(v) => v[self.elem_index(x, y, c)],
        }
    }

    /// Writes the raw value of channel `c` at `(x, y)`, saturating to the format's representable
    /// range. Out-of-bounds writes are silently ignored.
    pub fn set_raw(&mut self, x: usize, y: usize, c: usize, value: f64) {
        if !self.in_bounds(x, y, c) {
            return;
        }
        let max = self.format.max_value();
        let min = self.format.min_value();
        match &mut self.storage {
            Storage::Packed(rows) => {
                let elems_per_row = self.width * self.channels.channel_count();
                let index = y * elems_per_row + x * self.channels.channel_count() + c;
                let row = index / rows.elems_per_row();
                let col = index % rows.elems_per_row();
                rows.set(row, col, value.clamp(min, max).round() as u8);
            }
            Storage::U8(v) => v[self.elem_index(x, y, c)] = value.clamp(min, max).round() as u8,
            Storage::U16(v) => v[self.elem_index(x, y, c)] = value.clamp(min, max).round() as u16,
            Storage::U32(v) => v[self.elem_index(x, y, c)] = value.clamp(min, max).round() as u32,
            Storage::I8(v) => {
                let i = self.elem_index(x, y, c);
                v[i] = value.clamp(min, max).round() as i8
            }
            Storage::I16(v) => {
                let i = self.elem_index(x, y, c);
                v[i] = value.clamp(min, max).round() as i16
            }
            Storage::I32(v) => {
                let i = self.elem_index(x, y, c);
                v[i] = value.clamp(min, max).round() as i32
            }
            Storage::F16(v) => {
                let i = self.elem_index(x, y, c);
                v[i] = f16::from_f64(value)
            }
            Storage::F32(v) => {
                let i = self.elem_index(x, y, c);
                v[i] = value as f32
            }
            Storage::F64(v) => {
                let i = self.elem_index(x, y, c);
                v[i] = value
            }
        }
    }

    /// Reads channel `c` at `(x, y)` normalized into `0.0 ..= 1.0` for bounded formats, or the raw
    /// floating-point value for the extended-range formats (signed int, float).
    pub fn get_normalized(&self, x: usize, y: usize, c: usize) -> f64 {
        self.get_raw(x, y, c) / self.format.max_value()
    }

    /// Writes a normalized value to channel `c` at `(x, y)`, rescaling into the format's raw range.
    pub fn set_normalized(&mut self, x: usize, y: usize, c: usize, value: f64) {
        self.set_raw(x, y, c, value * self.format.max_value());
    }

    /// Returns the normalized `(r, g, b, a)` color at `(x, y)`, synthesizing channels the storage
    /// doesn't carry (luminance is broadcast to r/g/b; missing alpha reads as fully opaque). On an
    /// [`ChannelOrder::Index`] buffer this returns the raw index (normalized) broadcast across r/g/b,
    /// matching [`PixelBuffer::set_pixel_rgb`]'s symmetric write-the-index behavior.
    pub fn get_pixel_rgba(&self, x: usize, y: usize) -> (f64, f64, f64, f64) {
        use ChannelRole::*;
        match self.channels {
            ChannelOrder::L | ChannelOrder::La | ChannelOrder::Index => {
                let lum = self.get_normalized(x, y, 0);
                let a = self
                    .channels
                    .slot_of(Alpha)
                    .map(|c| self.get_normalized(x, y, c))
                    .unwrap_or(1.0);
                (lum, lum, lum, a)
            }
            order => {
                let r = order.slot_of(Red).map(|c| self.get_normalized(x, y, c)).unwrap_or(0.0);
                let g = order.slot_of(Green).map(|c| self.get_normalized(x, y, c)).unwrap_or(0.0);
                let b = order.slot_of(Blue).map(|c| self.get_normalized(x, y, c)).unwrap_or(0.0);
                let a = order.slot_of(Alpha).map(|c| self.get_normalized(x, y, c)).unwrap_or(1.0);
                (r, g, b, a)
            }
        }
    }

    /// Sets the pixel at `(x, y)` from a normalized `(r, g, b)` triple. On a luminance buffer this
    /// stores the (unweighted) average of the three channels; on an [`ChannelOrder::Index`] buffer
    /// this writes `r` directly into the index channel — preserved exactly as documented, since a
    /// plain RGB setter has no palette to resolve a color into an index against.
    pub fn set_pixel_rgb(&mut self, x: usize, y: usize, r: f64, g: f64, b: f64) {
        use ChannelRole::*;
        match self.channels {
            ChannelOrder::Index => self.set_normalized(x, y, 0, r),
            ChannelOrder::L | ChannelOrder::La => {
                self.set_normalized(x, y, 0, (r + g + b) / 3.0)
            }
            order => {
                if let Some(c) = order.slot_of(Red) {
                    self.set_normalized(x, y, c, r);
                }
                if let Some(c) = order.slot_of(Green) {
                    self.set_normalized(x, y, c, g);
                }
                if let Some(c) = order.slot_of(Blue) {
                    self.set_normalized(x, y, c, b);
                }
            }
        }
    }

    /// Sets the pixel at `(x, y)` from a normalized `(r, g, b, a)` quadruple; alpha is dropped if
    /// the channel order doesn't carry one.
    pub fn set_pixel_rgba(&mut self, x: usize, y: usize, r: f64, g: f64, b: f64, a: f64) {
        self.set_pixel_rgb(x, y, r, g, b);
        if let Some(c) = self.channels.slot_of(ChannelRole::Alpha) {
            self.set_normalized(x, y, c, a);
        }
    }

    /// Sets just the red channel at `(x, y)`, leaving every other channel untouched. On an
    /// [`ChannelOrder::Index`] buffer this writes the index directly, matching
    /// [`PixelBuffer::set_pixel_rgb`]'s treatment of indexed buffers; on a luminance buffer it
    /// writes the sole luminance channel.
    pub fn set_pixel_r(&mut self, x: usize, y: usize, r: f64) {
        use ChannelRole::*;
        match self.channels {
            ChannelOrder::Index | ChannelOrder::L | ChannelOrder::La => self.set_normalized(x, y, 0, r),
            order => {
                if let Some(c) = order.slot_of(Red) {
                    self.set_normalized(x, y, c, r);
                }
            }
        }
    }

    /// Reads the palette index at `(x, y)` on an [`ChannelOrder::Index`] buffer. Panics if this
    /// buffer isn't indexed — callers are expected to check [`ChannelOrder::is_indexed`] first.
    pub fn get_pixel_index(&self, x: usize, y: usize) -> u32 {
        assert!(self.channels.is_indexed(), "get_pixel_index on a non-indexed buffer");
        self.get_raw(x, y, 0) as u32
    }

    /// Writes a palette index at `(x, y)` on an [`ChannelOrder::Index`] buffer.
    pub fn set_pixel_index(&mut self, x: usize, y: usize, index: u32) {
        assert!(self.channels.is_indexed(), "set_pixel_index on a non-indexed buffer");
        self.set_raw(x, y, 0, index as f64);
    }

    /// Reorders this buffer's storage in place to a new [`ChannelOrder`] carrying the same number of
    /// channels (e.g. `Rgba` <-> `Bgra`, or `Rgb` <-> `Bgr`). Values are moved role-by-role (red stays
    /// red, alpha stays alpha) through [`PixelBuffer::get_raw`]/[`PixelBuffer::set_raw`] rather than a
    /// blind byte shuffle.
    pub fn remap_channels(&mut self, order: ChannelOrder) {
        if order == self.channels {
            return;
        }
        assert_eq!(
            order.channel_count(),
            self.channels.channel_count(),
            "remap_channels requires a channel-count-compatible order"
        );
        use ChannelRole::*;
        const ROLES: [ChannelRole; 5] = [Red, Green, Blue, Alpha, Luminance];
        for y in 0..self.height {
            for x in 0..self.width {
                let mut values = [0.0f64; ROLES.len()];
                for (i, &role) in ROLES.iter().enumerate() {
                    if let Some(c) = self.channels.slot_of(role) {
                        values[i] = self.get_raw(x, y, c);
                    }
                }
                for (i, &role) in ROLES.iter().enumerate() {
                    if let Some(c) = order.slot_of(role) {
                        self.set_raw(x, y, c, values[i]);
                    }
                }
            }
        }
        self.channels = order;
    }

    /// Iterates over every `(x, y)` coordinate in the sub-rectangle starting at `(x0, y0)` with size
    /// `w x h`, clamped to the buffer's own bounds. Mirrors [`PixelBuffer::positions`], which is the
    /// unclamped whole-buffer case of the same shape.
    pub fn get_range(&self, x0: usize, y0: usize, w: usize, h: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let x0 = x0.min(self.width);
        let y0 = y0.min(self.height);
        let x_end = (x0 + w).min(self.width);
        let y_end = (y0 + h).min(self.height);
        (y0..y_end).flat_map(move |y| (x0..x_end).map(move |x| (x, y)))
    }

    /// Fills every pixel with the given normalized `(r, g, b, a)` color.
    pub fn clear(&mut self, r: f64, g: f64, b: f64, a: f64) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel_rgba(x, y, r, g, b, a);
            }
        }
    }

    /// Serializes the buffer to a big-endian byte stream: one byte per channel for the 8-bit and
    /// sub-byte formats (sub-byte formats keep their MSB-first bit packing with no widening), two
    /// bytes per channel for 16-bit formats, four for 32-bit, eight for [`FormatTag::Float64`]. This
    /// is the layout PNG scanlines and other codecs expect before filtering/compression.
    pub fn get_bytes(&self) -> Vec<u8> {
        match &self.storage {
            Storage::Packed(rows) => rows.buf().to_vec(),
            Storage::U8(v) => v.clone(),
            Storage::U16(v) => v.iter().flat_map(|x| x.to_be_bytes()).collect(),
            Storage::U32(v) => v.iter().flat_map(|x| x.to_be_bytes()).collect(),
            Storage::I8(v) => v.iter().map(|x| *x as u8).collect(),
            Storage::I16(v) => v.iter().flat_map(|x| x.to_be_bytes()).collect(),
            Storage::I32(v) => v.iter().flat_map(|x| x.to_be_bytes()).collect(),
            Storage::F16(v) => v.iter().flat_map(|x| x.to_be_bytes()).collect(),
            Storage::F32(v) => v.iter().flat_map(|x| x.to_be_bytes()).collect(),
            Storage::F64(v) => v.iter().flat_map(|x| x.to_be_bytes()).collect(),
        }
    }

    /// Like [`PixelBuffer::get_bytes`], but first reorders into `order` if given (and different from
    /// this buffer's own order) rather than mutating `self`: resolves every pixel through
    /// [`PixelBuffer::get_pixel_rgba`]/[`PixelBuffer::set_pixel_rgba`] into a freshly allocated
    /// buffer of the requested order, then serializes that. `None` (or `Some` of the buffer's own
    /// order) returns exactly what [`PixelBuffer::get_bytes`] would.
    pub fn get_bytes_ordered(&self, order: Option<ChannelOrder>) -> Vec<u8> {
        let order = match order {
            Some(order) if order != self.channels => order,
            _ => return self.get_bytes(),
        };
        let mut remapped = PixelBuffer::new(self.width, self.height, self.format, order);
        for (x, y) in self.positions() {
            let (r, g, b, a) = self.get_pixel_rgba(x, y);
            remapped.set_pixel_rgba(x, y, r, g, b, a);
        }
        remapped.get_bytes()
    }

    /// Overwrites the buffer from a flat big-endian byte stream in the layout [`PixelBuffer::get_bytes`]
    /// produces. `bytes` must be exactly as long as the current storage. Used by codecs that decode
    /// whole scanlines at a time (e.g. after PNG defiltering) rather than pixel-by-pixel.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        match &mut self.storage {
            Storage::Packed(rows) => rows.buf_mut().copy_from_slice(bytes),
            Storage::U8(v) => v.copy_from_slice(bytes),
            Storage::U16(v) => {
                for (dst, chunk) in v.iter_mut().zip(bytes.chunks_exact(2)) {
                    *dst = u16::from_be_bytes([chunk[0], chunk[1]]);
                }
            }
            Storage::U32(v) => {
                for (dst, chunk) in v.iter_mut().zip(bytes.chunks_exact(4)) {
                    *dst = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
            }
            Storage::I8(v) => {
                for (dst, &b) in v.iter_mut().zip(bytes.iter()) {
                    *dst = b as i8;
                }
            }
            Storage::I16(v) => {
                for (dst, chunk) in v.iter_mut().zip(bytes.chunks_exact(2)) {
                    *dst = i16::from_be_bytes([chunk[0], chunk[1]]);
                }
            }
            Storage::I32(v) => {
                for (dst, chunk) in v.iter_mut().zip(bytes.chunks_exact(4)) {
                    *dst = i32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
            }
            Storage::F16(v) => {
                for (dst, chunk) in v.iter_mut().zip(bytes.chunks_exact(2)) {
                    *dst = f16::from_be_bytes([chunk[0], chunk[1]]);
                }
            }
            Storage::F32(v) => {
                for (dst, chunk) in v.iter_mut().zip(bytes.chunks_exact(4)) {
                    *dst = f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
            }
            Storage::F64(v) => {
                for (dst, chunk) in v.iter_mut().zip(bytes.chunks_exact(8)) {
                    *dst = f64::from_be_bytes([
                        chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
                    ]);
                }
            }
        }
    }

    /// The byte length one fully-packed row occupies, as used by [`crate::codec::png`]'s scanline
    /// filtering (which operates on whole rows before they're interleaved into IDAT).
    pub fn row_stride_bytes(&self) -> usize {
        match &self.storage {
            Storage::Packed(rows) => rows.row_stride(),
            _ => self.width * self.channel_count() * (self.format.bits() as usize / 8),
        }
    }

    /// Iterates over every `(x, y)` coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed_and_reads_as_black_opaque() {
        let buf = PixelBuffer::new(4, 3, FormatTag::Uint8, ChannelOrder::Rgba);
        assert_eq!(buf.get_pixel_rgba(0, 0), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn rgb_round_trip_through_normalized_accessors() {
        let mut buf = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::Rgb);
        buf.set_pixel_rgb(1, 1, 1.0, 0.5, 0.0);
        let (r, g, b, a) = buf.get_pixel_rgba(1, 1);
        assert_eq!(r, 1.0);
        assert!((g - 0.5).abs() < 0.01);
        assert_eq!(b, 0.0);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn sub_byte_uint2_round_trip() {
        let mut buf = PixelBuffer::new(5, 1, FormatTag::Uint2, ChannelOrder::L);
        for x in 0..5 {
            buf.set_raw(x, 0, 0, (x % 4) as f64);
        }
        for x in 0..5 {
            assert_eq!(buf.get_raw(x, 0, 0), (x % 4) as f64);
        }
    }

    #[test]
    fn out_of_bounds_read_is_zero_and_write_is_noop() {
        let mut buf = PixelBuffer::new(2, 2, FormatTag::Uint8, ChannelOrder::L);
        assert_eq!(buf.get_raw(5, 5, 0), 0.0);
        buf.set_raw(5, 5, 0, 42.0);
        assert_eq!(buf.get_raw(5, 5, 0), 0.0);
    }

    #[test]
    fn indexed_set_pixel_rgb_writes_the_index() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Index);
        buf.set_pixel_rgb(0, 0, 7.0 / 255.0, 0.0, 0.0);
        assert_eq!(buf.get_pixel_index(0, 0), 7);
    }

    #[test]
    fn signed_int_raw_values_can_be_negative() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Int16, ChannelOrder::L);
        buf.set_raw(0, 0, 0, -100.0);
        assert_eq!(buf.get_raw(0, 0, 0), -100.0);
    }

    #[test]
    fn signed_int_saturates_at_two_s_complement_bounds() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Int8, ChannelOrder::L);
        buf.set_raw(0, 0, 0, -1000.0);
        assert_eq!(buf.get_raw(0, 0, 0), -128.0);
        buf.set_raw(0, 0, 0, 1000.0);
        assert_eq!(buf.get_raw(0, 0, 0), 127.0);
    }

    #[test]
    fn set_pixel_r_leaves_other_channels_alone() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Rgba);
        buf.set_pixel_rgba(0, 0, 0.0, 0.5, 1.0, 1.0);
        buf.set_pixel_r(0, 0, 1.0);
        let (r, g, b, _) = buf.get_pixel_rgba(0, 0);
        assert_eq!(r, 1.0);
        assert!((g - 0.5).abs() < 0.01);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn set_pixel_r_on_indexed_buffer_writes_the_index() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Index);
        buf.set_pixel_r(0, 0, 9.0 / 255.0);
        assert_eq!(buf.get_pixel_index(0, 0), 9);
    }

    #[test]
    fn from_bytes_strips_row_stride_padding() {
        // 1x2 RGB image, each row padded to 4 bytes (tight row is 3 bytes)
        let bytes = [10, 20, 30, 0, 40, 50, 60, 0];
        let buf = PixelBuffer::from_bytes(1, 2, &bytes, 4, ChannelOrder::Rgb, FormatTag::Uint8, 3);
        assert_eq!(buf.get_raw(0, 0, 0), 10.0);
        assert_eq!(buf.get_raw(0, 1, 2), 60.0);
    }

    #[test]
    fn remap_channels_swaps_red_and_blue_in_place() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Rgb);
        buf.set_pixel_rgb(0, 0, 1.0, 0.5, 0.0);
        buf.remap_channels(ChannelOrder::Bgr);
        assert_eq!(buf.channel_order(), ChannelOrder::Bgr);
        let (r, g, b, _) = buf.get_pixel_rgba(0, 0);
        assert_eq!(r, 1.0);
        assert!((g - 0.5).abs() < 0.01);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn get_range_clamps_to_buffer_bounds() {
        let buf = PixelBuffer::new(3, 3, FormatTag::Uint8, ChannelOrder::L);
        let coords: Vec<_> = buf.get_range(2, 2, 5, 5).collect();
        assert_eq!(coords, vec![(2, 2)]);
    }

    #[test]
    fn get_bytes_ordered_reorders_without_mutating_the_original() {
        let mut buf = PixelBuffer::new(1, 1, FormatTag::Uint8, ChannelOrder::Rgb);
        buf.set_pixel_rgb(0, 0, 1.0, 0.5, 0.0);
        let reordered = buf.get_bytes_ordered(Some(ChannelOrder::Bgr));
        assert_eq!(reordered[0], buf.get_bytes()[2]);
        assert_eq!(reordered[2], buf.get_bytes()[0]);
        assert_eq!(buf.channel_order(), ChannelOrder::Rgb);
    }
}
