/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Tag identifying how a single channel's raw value is stored in a [`crate::PixelBuffer`]. This is
/// the same kind of closed, `TryFrom<u8>`-able enum the PNG codec uses for `ColorType`, generalized
/// from "which color model" to "which numeric storage".
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FormatTag {
    Uint1,
    Uint2,
    Uint4,
    Uint8,
    Uint16,
    Uint32,
    Int8,
    Int16,
    Int32,
    Float16,
    Float32,
    Float64,
}

impl FormatTag {
    /// All format tags, in ascending bit-width order within each numeric kind.
    pub const ALL: [FormatTag; 12] = [
        FormatTag::Uint1,
        FormatTag::Uint2,
        FormatTag::Uint4,
        FormatTag::Uint8,
        FormatTag::Uint16,
        FormatTag::Uint32,
        FormatTag::Int8,
        FormatTag::Int16,
        FormatTag::Int32,
        FormatTag::Float16,
        FormatTag::Float32,
        FormatTag::Float64,
    ];

    /// Number of bits a single channel occupies in memory.
    pub const fn bits(self) -> u32 {
        match self {
            FormatTag::Uint1 => 1,
            FormatTag::Uint2 => 2,
            FormatTag::Uint4 => 4,
            FormatTag::Uint8 | FormatTag::Int8 => 8,
            FormatTag::Uint16 | FormatTag::Int16 | FormatTag::Float16 => 16,
            FormatTag::Uint32 | FormatTag::Int32 | FormatTag::Float32 => 32,
            FormatTag::Float64 => 64,
        }
    }

    /// True for formats that pack more than one channel per byte (sub-byte storage).
    pub const fn is_packed(self) -> bool {
        matches!(self, FormatTag::Uint1 | FormatTag::Uint2 | FormatTag::Uint4)
    }

    /// True for the signed integer formats.
    pub const fn is_signed_int(self) -> bool {
        matches!(self, FormatTag::Int8 | FormatTag::Int16 | FormatTag::Int32)
    }

    /// True for the unsigned integer formats, including the sub-byte packed ones.
    pub const fn is_unsigned_int(self) -> bool {
        matches!(
            self,
            FormatTag::Uint1
                | FormatTag::Uint2
                | FormatTag::Uint4
                | FormatTag::Uint8
                | FormatTag::Uint16
                | FormatTag::Uint32
        )
    }

    /// True for the floating-point formats.
    pub const fn is_float(self) -> bool {
        matches!(self, FormatTag::Float16 | FormatTag::Float32 | FormatTag::Float64)
    }

    /// True for the formats wide enough to be used as high-dynamic-range storage: the float
    /// formats and the two 32-bit integer formats. Matches the PNG codec's own `bit_depth == 32`
    /// cutoff for when a channel stops being expressible as plain `0..=max` display range.
    pub const fn is_hdr(self) -> bool {
        matches!(
            self,
            FormatTag::Uint32 | FormatTag::Int32 | FormatTag::Float16 | FormatTag::Float32 | FormatTag::Float64
        )
    }

    /// The maximum representable raw value, as an `f64`, used to normalize a raw channel value
    /// into `0.0 ..= 1.0` (or beyond, for extended-range formats). For floating point formats this
    /// is always `1.0`, matching `axis_color::Component`'s convention.
    pub const fn max_value(self) -> f64 {
        match self {
            FormatTag::Uint1 => 1.0,
            FormatTag::Uint2 => 3.0,
            FormatTag::Uint4 => 15.0,
            FormatTag::Uint8 => 255.0,
            FormatTag::Uint16 => 65535.0,
            FormatTag::Uint32 => 4294967295.0,
            FormatTag::Int8 => 127.0,
            FormatTag::Int16 => 32767.0,
            FormatTag::Int32 => 2147483647.0,
            FormatTag::Float16 | FormatTag::Float32 | FormatTag::Float64 => 1.0,
        }
    }

    /// The minimum representable raw value, as an `f64`. Zero for every unsigned and float format;
    /// `-(max_value() + 1.0)` for the signed integer formats, matching two's-complement range
    /// (`Int8` is `-128 ..= 127`, not the symmetric `-127 ..= 127` `max_value()` alone would imply).
    pub const fn min_value(self) -> f64 {
        match self {
            FormatTag::Int8 => -128.0,
            FormatTag::Int16 => -32768.0,
            FormatTag::Int32 => -2147483648.0,
            _ => 0.0,
        }
    }

    /// A short machine-readable name, used by `Display` and by codec option parsing.
    pub const fn name(self) -> &'static str {
        match self {
            FormatTag::Uint1 => "uint1",
            FormatTag::Uint2 => "uint2",
            FormatTag::Uint4 => "uint4",
            FormatTag::Uint8 => "uint8",
            FormatTag::Uint16 => "uint16",
            FormatTag::Uint32 => "uint32",
            FormatTag::Int8 => "int8",
            FormatTag::Int16 => "int16",
            FormatTag::Int32 => "int32",
            FormatTag::Float16 => "float16",
            FormatTag::Float32 => "float32",
            FormatTag::Float64 => "float64",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for FormatTag {
    type Error = ();

    fn try_from(s: &str) -> Result<FormatTag, ()> {
        FormatTag::ALL.into_iter().find(|tag| tag.name() == s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_match_storage_width() {
        assert_eq!(FormatTag::Uint1.bits(), 1);
        assert_eq!(FormatTag::Uint4.bits(), 4);
        assert_eq!(FormatTag::Int16.bits(), 16);
        assert_eq!(FormatTag::Float64.bits(), 64);
    }

    #[test]
    fn signed_int_max_is_two_to_the_n_minus_one_minus_one() {
        assert_eq!(FormatTag::Int8.max_value(), 127.0);
        assert_eq!(FormatTag::Int16.max_value(), 32767.0);
        assert_eq!(FormatTag::Int32.max_value(), 2147483647.0);
    }

    #[test]
    fn hdr_flag_covers_32_bit_ints_and_all_floats() {
        assert!(FormatTag::Uint32.is_hdr());
        assert!(FormatTag::Int32.is_hdr());
        assert!(FormatTag::Float32.is_hdr());
        assert!(!FormatTag::Uint16.is_hdr());
        assert!(!FormatTag::Int16.is_hdr());
        assert!(!FormatTag::Uint8.is_hdr());
    }

    #[test]
    fn name_round_trips_through_try_from() {
        for tag in FormatTag::ALL {
            assert_eq!(FormatTag::try_from(tag.name()), Ok(tag));
        }
    }
}
