/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! GIF's "data sub-block" framing: every block of payload (LZW image data, extension data) is
//! chopped into runs of up to 255 bytes, each prefixed with its own length byte, terminated by a
//! zero-length block.

use crate::io::ByteCursor;

/// Reads a sub-block sequence starting at the cursor's current position and returns the
/// concatenated payload. Stops at the first zero-length block (or the end of the stream).
pub fn read_sub_blocks(cursor: &mut ByteCursor) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let len = cursor.read_u8();
        if len == 0 {
            break;
        }
        out.extend_from_slice(cursor.read_bytes(len as usize));
        if cursor.is_end() {
            break;
        }
    }
    out
}

/// Skips a sub-block sequence without collecting its payload.
pub fn skip_sub_blocks(cursor: &mut ByteCursor) {
    loop {
        let len = cursor.read_u8();
        if len == 0 {
            break;
        }
        cursor.skip(len as usize);
        if cursor.is_end() {
            break;
        }
    }
}

/// Writes `data` as a sub-block sequence, followed by the zero-length terminator.
pub fn write_sub_blocks(out: &mut Vec<u8>, data: &[u8]) {
    if data.is_empty() {
        out.push(0);
        return;
    }
    for chunk in data.chunks(255) {
        out.push(chunk.len() as u8);
        out.extend_from_slice(chunk);
    }
    out.push(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_data_spanning_multiple_blocks() {
        let data: Vec<u8> = (0..600).map(|i| (i % 251) as u8).collect();
        let mut out = Vec::new();
        write_sub_blocks(&mut out, &data);
        let mut cursor = ByteCursor::new(&out);
        let read_back = read_sub_blocks(&mut cursor);
        assert_eq!(read_back, data);
    }

    #[test]
    fn empty_data_writes_just_the_terminator() {
        let mut out = Vec::new();
        write_sub_blocks(&mut out, &[]);
        assert_eq!(out, vec![0]);
    }
}
