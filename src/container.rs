//! Container layout: `[u32 BE header length][JSON header][packed payload]`.
//!
//! Empty text is stored as a zero-byte container and never carries a header.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bits;
use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

const LENGTH_FIELD: usize = 4;

/// Metadata needed to rebuild the tree and stop decoding at the right character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub frequencies: FrequencyTable,
    pub total_chars: u64,
}

impl Header {
    fn validate(&self) -> Result<()> {
        if self.frequencies.is_empty() {
            return Err(Error::corrupt("frequency table is empty"));
        }
        if self.frequencies.has_zero_count() {
            return Err(Error::corrupt("frequency table has a zero count"));
        }
        let sum = self
            .frequencies
            .checked_total()
            .ok_or_else(|| Error::corrupt("frequency total overflows"))?;
        if sum != self.total_chars {
            return Err(Error::corrupt(format!(
                "character count {} does not match frequency total {}",
                self.total_chars, sum
            )));
        }
        Ok(())
    }
}

/// Split a container into its parsed header and the payload that follows it.
pub fn read_header(data: &[u8]) -> Result<(Header, &[u8])> {
    let (length_field, rest) = data
        .split_first_chunk::<LENGTH_FIELD>()
        .ok_or_else(|| Error::corrupt("truncated header length"))?;
    let header_len = u32::from_be_bytes(*length_field) as usize;

    if rest.len() < header_len {
        return Err(Error::corrupt(format!(
            "header declares {} bytes but only {} follow",
            header_len,
            rest.len()
        )));
    }
    let (header_bytes, payload) = rest.split_at(header_len);

    let header: Header = serde_json::from_slice(header_bytes)
        .map_err(|e| Error::corrupt(format!("malformed header: {e}")))?;
    header.validate()?;

    Ok((header, payload))
}

/// Encode `text` into a container. Empty text gives an empty container.
pub fn compress(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let frequencies = FrequencyTable::from_text(text);
    let tree = HuffmanTree::build(&frequencies);
    let codes = CodeTable::generate(tree.as_ref());
    let payload = bits::pack(text, &codes)?;

    let header = Header {
        total_chars: frequencies.total(),
        frequencies,
    };
    let header_bytes = serde_json::to_vec(&header)
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;
    let header_len = u32::try_from(header_bytes.len())
        .map_err(|_| Error::Io(std::io::Error::other("header exceeds 4 GiB")))?;

    debug!(
        chars = header.total_chars,
        distinct = header.frequencies.len(),
        header_bytes = header_bytes.len(),
        payload_bytes = payload.len(),
        "compressed"
    );

    let mut container = Vec::with_capacity(LENGTH_FIELD + header_bytes.len() + payload.len());
    container.extend_from_slice(&header_len.to_be_bytes());
    container.extend_from_slice(&header_bytes);
    container.extend_from_slice(&payload);
    Ok(container)
}

/// Decode a container back into the original text. A zero-byte container gives empty text.
///
/// The tree is always rebuilt from the stored frequencies.
pub fn decompress(data: &[u8]) -> Result<String> {
    if data.is_empty() {
        return Ok(String::new());
    }

    let (header, payload) = read_header(data)?;
    let tree = HuffmanTree::build(&header.frequencies)
        .ok_or_else(|| Error::corrupt("frequency table is empty"))?;

    debug!(
        chars = header.total_chars,
        distinct = header.frequencies.len(),
        payload_bytes = payload.len(),
        "decompressing"
    );

    bits::unpack(payload, &tree, header.total_chars)
}
