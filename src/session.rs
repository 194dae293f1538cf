use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::files;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

/// Loaded text plus the values derived from it, computed on first use.
///
/// Loading new text drops everything derived from the previous one.
#[derive(Debug, Default)]
pub struct Session {
    source: Option<PathBuf>,
    text: Option<String>,
    frequencies: Option<FrequencyTable>,
    tree: Option<Option<HuffmanTree>>,
    codes: Option<CodeTable>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a UTF-8 text file and make it the current input.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let text = files::read_text(path)?;
        debug!(path = %path.display(), chars = text.chars().count(), "loaded");
        self.set_text(Some(path.to_path_buf()), text);
        Ok(())
    }

    /// Use in-memory text as the current input.
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.set_text(None, text.into());
    }

    fn set_text(&mut self, source: Option<PathBuf>, text: String) {
        *self = Session {
            source,
            text: Some(text),
            ..Session::default()
        };
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn frequencies(&mut self) -> Result<&FrequencyTable> {
        let table = match self.frequencies.take() {
            Some(table) => table,
            None => FrequencyTable::from_text(self.text.as_deref().ok_or(Error::NothingLoaded)?),
        };
        Ok(self.frequencies.insert(table))
    }

    /// `Ok(None)` when the loaded text is empty.
    pub fn tree(&mut self) -> Result<Option<&HuffmanTree>> {
        let tree = match self.tree.take() {
            Some(tree) => tree,
            None => HuffmanTree::build(self.frequencies()?),
        };
        Ok(self.tree.insert(tree).as_ref())
    }

    pub fn codes(&mut self) -> Result<&CodeTable> {
        let codes = match self.codes.take() {
            Some(codes) => codes,
            None => CodeTable::generate(self.tree()?),
        };
        Ok(self.codes.insert(codes))
    }
}
