/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Display, Formatter};

/// Library-level usage errors: the caller asked this crate's API to do something that isn't a
/// malformed file (that's `codec::png::Error`/`codec::gif::Error`'s job), but is still invalid —
/// a frame index past the end of an animation, a frame whose geometry doesn't match the rest of
/// the animation, or an option combination a codec doesn't support. Shaped the same way as the PNG
/// codec's own `Error` enum: flat, `Display` by hand, `std::error::Error` with no wrapped source
/// (these are always local, not I/O or arithmetic in origin).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A requested frame index doesn't exist.
    FrameIndexOutOfRange { index: usize, frame_count: usize },
    /// A frame being added doesn't share (width, height, format, channel order) with frame 0.
    MismatchedFrameGeometry,
    /// An encode/decode option was invalid for the codec it was passed to (e.g. a quality level
    /// outside the accepted range).
    InvalidOption(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::FrameIndexOutOfRange { index, frame_count } => {
                write!(f, "frame index {} out of range (image has {} frames)", index, frame_count)
            }
            Error::MismatchedFrameGeometry => {
                f.write_str("frame geometry does not match the image's first frame")
            }
            Error::InvalidOption(what) => write!(f, "invalid option: {}", what),
        }
    }
}

impl std::error::Error for Error {}
