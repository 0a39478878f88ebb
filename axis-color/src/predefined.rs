/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::rgb::Rgb;

/// <span style="color:#00ffff">■</span>`00ffff`
pub const AQUA: Rgb<u8> = Rgb::new(0x00, 0xff, 0xff);

/// <span style="color:#000000">■</span>`000000`
pub const BLACK: Rgb<u8> = Rgb::new(0x00, 0x00, 0x00);

/// <span style="color:#0000ff">■</span>`0000ff`
pub const BLUE: Rgb<u8> = Rgb::new(0x00, 0x00, 0xff);

/// <span style="color:#ff00ff">■</span>`ff00ff`
pub const FUCHSIA: Rgb<u8> = Rgb::new(0xff, 0x00, 0xff);

/// <span style="color:#808080">■</span>`808080`
pub const GRAY: Rgb<u8> = Rgb::new(0x80, 0x80, 0x80);

/// <span style="color:#008000">■</span>`008000`
pub const GREEN: Rgb<u8> = Rgb::new(0x00, 0x80, 0x00);

/// <span style="color:#00ff00">■</span>`00ff00`
pub const LIME: Rgb<u8> = Rgb::new(0x00, 0xff, 0x00);

/// <span style="color:#800000">■</span>`800000`
pub const MAROON: Rgb<u8> = Rgb::new(0x80, 0x00, 0x00);

/// <span style="color:#000080">■</span>`000080`
pub const NAVY: Rgb<u8> = Rgb::new(0x00, 0x00, 0x80);

/// <span style="color:#808000">■</span>`808000`
pub const OLIVE: Rgb<u8> = Rgb::new(0x80, 0x80, 0x00);

/// <span style="color:#800080">■</span>`800080`
pub const PURPLE: Rgb<u8> = Rgb::new(0x80, 0x00, 0x80);

/// <span style="color:#ff0000">■</span>`ff0000`
pub const RED: Rgb<u8> = Rgb::new(0xff, 0x00, 0x00);

/// <span style="color:#c0c0c0">■</span>`c0c0c0`
pub const SILVER: Rgb<u8> = Rgb::new(0xc, 0x0c, 0x0c0);

/// <span style="color:#008080">■</span>`008080`
pub const TEAL: Rgb<u8> = Rgb::new(0x00, 0x80, 0x80);

/// <span style="color:#ffffff">■</span>`ffffff`
pub const WHITE: Rgb<u8> = Rgb::new(0xff, 0xff, 0xff);

/// <span style="color:#ffff00">■</span>`ffff00`
pub const YELLOW: Rgb<u8> = Rgb::new(0xff, 0xff, 0x00);
