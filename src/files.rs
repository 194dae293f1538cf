// File-level compress/decompress on a path pair.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::info;

use crate::container;
use crate::error::{Error, Result};

pub const CONTAINER_EXT: &str = "huff";
const RECOVERED_SUFFIX: &str = "_recovered";

/// Sizes observed by one file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    pub chars: u64,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

fn not_found_as_input(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::InputNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    }
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(not_found_as_input(path))
}

// Write to a uniquely named temp file in the target's directory, then rename it
// over the target. The temp name never collides with an existing file.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Compress the text file at `input` into a container at `output`.
pub fn compress_file(input: &Path, output: &Path) -> Result<FileReport> {
    let text = read_text(input)?;
    let container = container::compress(&text)?;
    write_atomic(output, &container)?;

    let report = FileReport {
        chars: text.chars().count() as u64,
        input_bytes: text.len() as u64,
        output_bytes: container.len() as u64,
    };
    info!(input = %input.display(), output = %output.display(), ?report, "file compressed");
    Ok(report)
}

/// Decompress the container at `input` into a UTF-8 text file at `output`.
pub fn decompress_file(input: &Path, output: &Path) -> Result<FileReport> {
    let data = fs::read(input).map_err(not_found_as_input(input))?;
    let text = container::decompress(&data)?;
    write_atomic(output, text.as_bytes())?;

    let report = FileReport {
        chars: text.chars().count() as u64,
        input_bytes: data.len() as u64,
        output_bytes: text.len() as u64,
    };
    info!(input = %input.display(), output = %output.display(), ?report, "file decompressed");
    Ok(report)
}

/// `dir/name.ext` -> `dir/name.huff`.
pub fn default_compressed_path(input: &Path) -> PathBuf {
    input.with_extension(CONTAINER_EXT)
}

/// `dir/name.huff` -> `dir/name_recovered.txt`. Anything without the `.huff`
/// extension is rejected.
pub fn default_recovered_path(input: &Path) -> Result<PathBuf> {
    let is_container = input
        .extension()
        .is_some_and(|ext| ext == CONTAINER_EXT);
    let stem = input.file_stem().filter(|_| is_container).ok_or_else(|| {
        Error::UnexpectedExtension {
            path: input.to_path_buf(),
            expected: CONTAINER_EXT,
        }
    })?;

    let mut name = stem.to_os_string();
    name.push(RECOVERED_SUFFIX);
    name.push(".txt");
    Ok(input.with_file_name(name))
}
