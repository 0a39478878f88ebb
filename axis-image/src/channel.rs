/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Logical role of a channel slot within a pixel, used to look up the physical channel index for
/// `r`/`g`/`b`/`a`/`l` accessors regardless of storage order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChannelRole {
    Red,
    Green,
    Blue,
    Alpha,
    Luminance,
}

/// The physical order in which channels are interleaved in a [`crate::PixelBuffer`]'s storage.
/// `Index` is its own order: exactly one channel, carrying a palette index rather than a color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChannelOrder {
    /// Single luminance/gray channel.
    L,
    /// Luminance + alpha.
    La,
    /// Single palette-index channel.
    Index,
    Rgb,
    Rgba,
    Bgr,
    Bgra,
    Argb,
    Abgr,
}

impl ChannelOrder {
    /// Number of channels this order interleaves.
    pub const fn channel_count(self) -> usize {
        match self {
            ChannelOrder::L | ChannelOrder::Index => 1,
            ChannelOrder::La => 2,
            ChannelOrder::Rgb | ChannelOrder::Bgr => 3,
            ChannelOrder::Rgba | ChannelOrder::Bgra | ChannelOrder::Argb | ChannelOrder::Abgr => 4,
        }
    }

    /// True if this order carries an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            ChannelOrder::La | ChannelOrder::Rgba | ChannelOrder::Bgra | ChannelOrder::Argb | ChannelOrder::Abgr
        )
    }

    /// True if this order is a palette index rather than a direct color.
    pub const fn is_indexed(self) -> bool {
        matches!(self, ChannelOrder::Index)
    }

    /// The physical storage slot (0-based) for a given logical role, or `None` if this order
    /// doesn't carry that role at all (e.g. `Blue` in [`ChannelOrder::L`]).
    pub const fn slot_of(self, role: ChannelRole) -> Option<usize> {
        use ChannelOrder::*;
        use ChannelRole::*;
        match (self, role) {
            (L, Luminance) | (La, Luminance) | (Index, _) => Some(0),
            (La, Alpha) => Some(1),
            (Rgb, Red) | (Rgba, Red) => Some(0),
            (Rgb, Green) | (Rgba, Green) => Some(1),
            (Rgb, Blue) | (Rgba, Blue) => Some(2),
            (Rgba, Alpha) => Some(3),
            (Bgr, Blue) | (Bgra, Blue) => Some(0),
            (Bgr, Green) | (Bgra, Green) => Some(1),
            (Bgr, Red) | (Bgra, Red) => Some(2),
            (Bgra, Alpha) => Some(3),
            (Argb, Alpha) => Some(0),
            (Argb, Red) => Some(1),
            (Argb, Green) => Some(2),
            (Argb, Blue) => Some(3),
            (Abgr, Alpha) => Some(0),
            (Abgr, Blue) => Some(1),
            (Abgr, Green) => Some(2),
            (Abgr, Red) => Some(3),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ChannelOrder::L => "l",
            ChannelOrder::La => "la",
            ChannelOrder::Index => "index",
            ChannelOrder::Rgb => "rgb",
            ChannelOrder::Rgba => "rgba",
            ChannelOrder::Bgr => "bgr",
            ChannelOrder::Bgra => "bgra",
            ChannelOrder::Argb => "argb",
            ChannelOrder::Abgr => "abgr",
        }
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_and_bgra_agree_on_alpha_slot() {
        assert_eq!(ChannelOrder::Rgba.slot_of(ChannelRole::Alpha), Some(3));
        assert_eq!(ChannelOrder::Bgra.slot_of(ChannelRole::Alpha), Some(3));
        assert_eq!(ChannelOrder::Argb.slot_of(ChannelRole::Alpha), Some(0));
    }

    #[test]
    fn rgb_and_bgr_swap_red_and_blue_slots() {
        assert_eq!(ChannelOrder::Rgb.slot_of(ChannelRole::Red), Some(0));
        assert_eq!(ChannelOrder::Bgr.slot_of(ChannelRole::Red), Some(2));
        assert_eq!(ChannelOrder::Rgb.slot_of(ChannelRole::Blue), Some(2));
        assert_eq!(ChannelOrder::Bgr.slot_of(ChannelRole::Blue), Some(0));
    }

    #[test]
    fn l_has_no_color_slots() {
        assert_eq!(ChannelOrder::L.slot_of(ChannelRole::Red), None);
        assert_eq!(ChannelOrder::L.slot_of(ChannelRole::Luminance), Some(0));
    }

    #[test]
    fn channel_counts_match_names() {
        assert_eq!(ChannelOrder::Rgb.channel_count(), 3);
        assert_eq!(ChannelOrder::Rgba.channel_count(), 4);
        assert_eq!(ChannelOrder::La.channel_count(), 2);
        assert_eq!(ChannelOrder::Index.channel_count(), 1);
    }
}
