/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! GIF's LZW variant: codes are packed LSB-first (the opposite of [`crate::io::BitReader`], which
//! is MSB-first for PNG's sub-byte rows), code words start one bit wider than the color table's
//! index width to make room for the Clear and End-of-Information codes, and the dictionary is
//! capped at 4096 entries (12-bit codes) — once full, an encoder must emit a Clear code before
//! adding further entries, and a decoder must stop growing its dictionary at the same point.

use std::collections::HashMap;

const MAX_CODE_SIZE: u32 = 12;
const MAX_DICT_LEN: usize = 1 << MAX_CODE_SIZE;

struct BitWriter {
    bytes: Vec<u8>,
    buf: u32,
    count: u32,
}

impl BitWriter {
    fn new() -> BitWriter {
        BitWriter { bytes: Vec::new(), buf: 0, count: 0 }
    }

    fn write_code(&mut self, code: u16, size: u32) {
        self.buf |= (code as u32) << self.count;
        self.count += size;
        while self.count >= 8 {
            self.bytes.push((self.buf & 0xff) as u8);
            self.buf >>= 8;
            self.count -= 8;
        }
    }

    fn finish(mut self) -> Vec<u8> {
        if self.count > 0 {
            self.bytes.push((self.buf & 0xff) as u8);
        }
        self.bytes
    }
}

struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    buf: u32,
    count: u32,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> BitReader<'a> {
        BitReader { bytes, pos: 0, buf: 0, count: 0 }
    }

    fn read_code(&mut self, size: u32) -> Option<u16> {
        while self.count < size {
            let byte = *self.bytes.get(self.pos)?;
            self.pos += 1;
            self.buf |= (byte as u32) << self.count;
            self.count += 8;
        }
        let value = self.buf & ((1u32 << size) - 1);
        self.buf >>= size;
        self.count -= size;
        Some(value as u16)
    }
}

/// Decodes a stream of GIF LZW-compressed `data` (already reassembled from its sub-blocks) back
/// into raw color table indices. `min_code_size` is the value stored just before the sub-block
/// sequence in an Image Descriptor. Returns `None` on a malformed or truncated stream.
pub fn decode(min_code_size: u8, data: &[u8]) -> Option<Vec<u8>> {
    if !(2..=8).contains(&min_code_size) {
        return None;
    }
    let clear_code = 1u16 << min_code_size;
    let end_code = clear_code + 1;

    let initial_dict: Vec<Vec<u8>> = (0..clear_code).map(|i| vec![i as u8]).collect();
    let mut dict = initial_dict.clone();
    // Codes `clear_code` and `end_code` occupy code space but carry no dictionary entry; padding
    // the vector keeps `dict.len()` equal to the next code value that will be assigned.
    dict.push(Vec::new());
    dict.push(Vec::new());

    let mut code_size = min_code_size as u32 + 1;
    let mut reader = BitReader::new(data);
    let mut out = Vec::new();
    let mut prev: Option<Vec<u8>> = None;

    loop {
        let code = reader.read_code(code_size)?;
        if code == clear_code {
            dict.truncate(0);
            dict.extend(initial_dict.iter().cloned());
            dict.push(Vec::new());
            dict.push(Vec::new());
            code_size = min_code_size as u32 + 1;
            prev = None;
            continue;
        }
        if code == end_code {
            break;
        }

        let entry = if (code as usize) < dict.len() {
            dict[code as usize].clone()
        } else if code as usize == dict.len() {
            let mut e = prev.clone()?;
            let first = e[0];
            e.push(first);
            e
        } else {
            return None;
        };

        out.extend_from_slice(&entry);

        if let Some(p) = prev {
            if dict.len() < MAX_DICT_LEN {
                let mut new_entry = p;
                new_entry.push(entry[0]);
                dict.push(new_entry);
                if dict.len() == (1usize << code_size) && code_size < MAX_CODE_SIZE {
                    code_size += 1;
                }
            }
        }
        prev = Some(entry);
    }

    Some(out)
}

/// Encodes raw color table `indices` into a GIF LZW stream. `min_code_size` must match what's
/// written before the sub-blocks in the Image Descriptor (and is also the index bit depth the
/// color table was sized for).
pub fn encode(min_code_size: u8, indices: &[u8]) -> Vec<u8> {
    let clear_code = 1u16 << min_code_size;
    let end_code = clear_code + 1;

    let make_initial_dict = || -> HashMap<Vec<u8>, u16> {
        (0..clear_code).map(|i| (vec![i as u8], i)).collect()
    };

    let mut dict = make_initial_dict();
    let mut next_code = end_code + 1;
    let mut code_size = min_code_size as u32 + 1;
    let mut writer = BitWriter::new();

    writer.write_code(clear_code, code_size);

    if indices.is_empty() {
        writer.write_code(end_code, code_size);
        return writer.finish();
    }

    let mut current = vec![indices[0]];
    for &sym in &indices[1..] {
        let mut candidate = current.clone();
        candidate.push(sym);

        if dict.contains_key(&candidate) {
            current = candidate;
            continue;
        }

        let code = *dict.get(&current).expect("every prefix seen so far is in the dictionary");
        writer.write_code(code, code_size);

        if next_code as usize >= MAX_DICT_LEN {
            writer.write_code(clear_code, code_size);
            dict = make_initial_dict();
            next_code = end_code + 1;
            code_size = min_code_size as u32 + 1;
        } else {
            dict.insert(candidate, next_code);
            next_code += 1;
            if next_code as usize == (1usize << code_size) && code_size < MAX_CODE_SIZE {
                code_size += 1;
            }
        }

        current = vec![sym];
    }

    let code = *dict.get(&current).expect("final run is in the dictionary");
    writer.write_code(code, code_size);
    writer.write_code(end_code, code_size);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_short_run() {
        let indices = [0u8, 0, 1, 1, 1, 2, 0, 1, 2, 2, 2, 2, 2];
        let encoded = encode(3, &indices);
        let decoded = decode(3, &encoded).unwrap();
        assert_eq!(decoded, indices);
    }

    #[test]
    fn round_trips_enough_data_to_widen_code_size() {
        let indices: Vec<u8> = (0..2000).map(|i| (i % 17) as u8).collect();
        let encoded = encode(5, &indices);
        let decoded = decode(5, &encoded).unwrap();
        assert_eq!(decoded, indices);
    }

    #[test]
    fn round_trips_a_single_repeated_value() {
        let indices = vec![4u8; 500];
        let encoded = encode(3, &indices);
        let decoded = decode(3, &encoded).unwrap();
        assert_eq!(decoded, indices);
    }

    #[test]
    fn decode_rejects_a_code_too_far_ahead_of_the_dictionary() {
        // A code of `clear_code + 2` (the first fresh-dictionary code) immediately after a clear,
        // with no preceding entry, is a KwK reference to a `prev` that doesn't exist.
        let mut writer = BitWriter::new();
        writer.write_code(4, 3); // clear code for min_code_size 2
        writer.write_code(6, 3); // first fresh code: invalid with no prior entry
        let bytes = writer.finish();
        assert!(decode(2, &bytes).is_none());
    }
}
