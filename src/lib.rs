//! # huffpack
//!
//! Huffman compression for UTF-8 text. Characters (not bytes) are the coding
//! symbols, so a multi-byte character gets a single code.
//!
//! ```rust
//! let container = huffpack::compress("banana bandada")?;
//! assert_eq!(huffpack::decompress(&container)?, "banana bandada");
//! # Ok::<(), huffpack::Error>(())
//! ```
//!
//! The pipeline is frequency table -> tree -> code table -> packed bits.
//! Only the frequency table is stored; decoding rebuilds the same tree from it.

pub mod bits;
pub mod codes;
pub mod container;
pub mod display;
pub mod error;
pub mod files;
pub mod frequency;
pub mod journal;
pub mod session;
pub mod tree;

pub use codes::{Code, CodeTable};
pub use container::{compress, decompress};
pub use error::{Error, Result};
pub use files::{compress_file, decompress_file, FileReport};
pub use frequency::FrequencyTable;
pub use session::Session;
pub use tree::{HuffmanTree, Node};
