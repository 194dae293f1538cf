use std::io;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Concatenate the code of every character of `text` and pack the bits
/// MSB first, zero-padding the final byte.
///
/// Fails with [`Error::MissingCode`] if a character has no code.
pub fn pack(text: &str, codes: &CodeTable) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);
    for ch in text.chars() {
        let code = codes.get(ch).ok_or(Error::MissingCode(ch))?;
        for &bit in code.bits() {
            writer.write_bit(bit)?;
        }
    }
    writer.byte_align()?;
    Ok(writer.into_writer())
}

/// Decode exactly `total` characters from `payload` by walking `tree`.
///
/// Bits left over after the last character are padding and are ignored.
/// A single-leaf tree emits its character `total` times without reading any
/// bits, but the payload must still be long enough to hold `total` packed bits.
pub fn unpack(payload: &[u8], tree: &HuffmanTree, total: u64) -> Result<String> {
    let root = tree.root();

    if let Node::Leaf { ch, .. } = *tree.node(root) {
        let available = payload.len() as u64 * 8;
        if available < total {
            return Err(Error::TruncatedPayload {
                decoded: available,
                expected: total,
            });
        }
        return Ok(std::iter::repeat_n(ch, total as usize).collect());
    }

    let mut reader = BitReader::endian(payload, BigEndian);
    // total comes from the header; never reserve more than the payload can encode
    let mut text = String::with_capacity(total.min(payload.len() as u64 * 8) as usize);
    let mut decoded = 0;
    let mut cursor = root;

    while decoded < total {
        let bit = match reader.read_bit() {
            Ok(bit) => bit,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(Error::TruncatedPayload {
                    decoded,
                    expected: total,
                });
            }
            Err(e) => return Err(e.into()),
        };

        // cursor is reset on every leaf, so it is always internal here
        cursor = tree.child(cursor, bit).unwrap_or(root);

        if let Node::Leaf { ch, .. } = *tree.node(cursor) {
            text.push(ch);
            decoded += 1;
            cursor = root;
        }
    }

    Ok(text)
}
