//! Loading and saving documents.
//!
//! [`FileService`] moves document text between a [`DocumentBuffer`] and the
//! filesystem. Reads go through a scoped `File` handle; writes go to a
//! temporary file next to the target which is renamed over it once fully
//! written, so a failed save leaves the previous file intact.
//!
//! UTF-8 is assumed unless a byte-order mark says otherwise (UTF-8 BOM,
//! UTF-16 LE/BE). Content that does not decode, contains NUL bytes, or
//! exceeds the size limit is rejected with an [`Error::Io`]. The detected
//! encoding is reported in [`FileMeta`] and reused when saving.

use crate::error::{Error, Result};
use crate::text::{DocumentBuffer, EditCommandStack};
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Default maximum file size accepted by `load` (50 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// On-disk text encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// Short label for status displays.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf8Bom => "UTF-8 BOM",
            Self::Utf16Le => "UTF-16 LE",
            Self::Utf16Be => "UTF-16 BE",
        }
    }
}

/// Line terminator convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    /// The terminator itself.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }

    /// Short label for status displays.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lf => "LF",
            Self::CrLf => "CRLF",
            Self::Cr => "CR",
        }
    }

    /// The most common terminator in `text`, or `None` if it has no line
    /// breaks. Ties go to LF, then CRLF.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let (mut lf, mut crlf, mut cr) = (0usize, 0usize, 0usize);
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => lf += 1,
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    crlf += 1;
                    i += 1;
                }
                b'\r' => cr += 1,
                _ => {}
            }
            i += 1;
        }

        if lf + crlf + cr == 0 {
            None
        } else if lf >= crlf && lf >= cr {
            Some(Self::Lf)
        } else if crlf >= cr {
            Some(Self::CrLf)
        } else {
            Some(Self::Cr)
        }
    }
}

/// Properties of a file detected on load and reused on save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileMeta {
    pub encoding: TextEncoding,
    pub line_ending: LineEnding,
}

/// A decoded file, ready to be swapped into a buffer.
///
/// Produced by [`FileService::read`], which touches no editor state, so a
/// host may read on a worker and apply the result on the owning thread.
#[derive(Clone, Debug)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub text: String,
    pub meta: FileMeta,
}

/// Reads and writes document files.
#[derive(Clone, Copy, Debug)]
pub struct FileService {
    max_file_size: u64,
    default_line_ending: LineEnding,
}

impl Default for FileService {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            default_line_ending: LineEnding::default(),
        }
    }
}

impl FileService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject files larger than `bytes`.
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Line ending reported for files without any line break.
    #[must_use]
    pub fn with_default_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.default_line_ending = line_ending;
        self
    }

    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Read and decode `path` without touching any buffer.
    pub fn read(&self, path: &Path) -> Result<LoadedDocument> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let metadata = file.metadata().map_err(|e| Error::io(path, e))?;
        if metadata.is_dir() {
            return Err(Error::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            ));
        }
        if metadata.len() > self.max_file_size {
            return Err(Error::io(path, too_large(metadata.len(), self.max_file_size)));
        }

        // The file may have grown since the metadata was taken.
        let bytes = read_capped(BufReader::new(file), self.max_file_size, metadata.len())
            .map_err(|e| Error::io(path, e))?;

        let (text, encoding) = decode(&bytes).map_err(|e| Error::io(path, e))?;
        let line_ending = LineEnding::detect(&text).unwrap_or(self.default_line_ending);
        tracing::info!(
            path = %path.display(),
            bytes = bytes.len(),
            encoding = encoding.label(),
            line_ending = line_ending.label(),
            "read document"
        );

        Ok(LoadedDocument {
            path: path.to_path_buf(),
            text,
            meta: FileMeta {
                encoding,
                line_ending,
            },
        })
    }

    /// Replace `buffer` with the contents of `path` and reset `history`.
    ///
    /// On failure neither is touched.
    pub fn load(
        &self,
        path: &Path,
        buffer: &mut DocumentBuffer,
        history: &mut EditCommandStack,
    ) -> Result<FileMeta> {
        let loaded = self.read(path)?;
        buffer.replace_all(&loaded.text);
        history.clear();
        Ok(loaded.meta)
    }

    /// Write `buffer` to `path` using `meta.encoding` and clear its
    /// modified flag.
    ///
    /// Returns the number of bytes written.
    pub fn save(&self, path: &Path, buffer: &mut DocumentBuffer, meta: FileMeta) -> Result<u64> {
        let written = self.write(path, buffer, meta)?;
        buffer.mark_saved();
        Ok(written)
    }

    /// Write `buffer` to `path` without changing any state.
    pub fn write(&self, path: &Path, buffer: &DocumentBuffer, meta: FileMeta) -> Result<u64> {
        let bytes = encode(buffer, meta.encoding).map_err(|e| Error::io(path, e))?;
        write_atomic(path, &bytes).map_err(|e| Error::io(path, e))?;
        tracing::info!(
            path = %path.display(),
            bytes = bytes.len(),
            encoding = meta.encoding.label(),
            "wrote document"
        );
        Ok(bytes.len() as u64)
    }
}

fn too_large(len: u64, limit: u64) -> io::Error {
    io::Error::other(format!("file too large ({len} bytes, limit {limit})"))
}

/// Read all of `reader`, failing once more than `limit` bytes arrive.
fn read_capped<R: Read>(reader: R, limit: u64, size_hint: u64) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(size_hint.min(limit) as usize);
    reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
    let len = bytes.len() as u64;
    if len > limit {
        return Err(too_large(len, limit));
    }
    Ok(bytes)
}

/// Refuse to replace a read-only file.
///
/// The rename in [`write_atomic`] only needs directory permissions, so the
/// target's own mode has to be checked by hand.
fn check_writable(path: &Path) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.permissions().readonly() => Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        )),
        _ => Ok(()),
    }
}

fn invalid_data(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_string())
}

fn decode(bytes: &[u8]) -> io::Result<(String, TextEncoding)> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        let text = std::str::from_utf8(rest).map_err(|_| invalid_data("invalid UTF-8"))?;
        return Ok((text.to_string(), TextEncoding::Utf8Bom));
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return Ok((decode_utf16(rest, u16::from_le_bytes)?, TextEncoding::Utf16Le));
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return Ok((decode_utf16(rest, u16::from_be_bytes)?, TextEncoding::Utf16Be));
    }

    if bytes.contains(&0) {
        return Err(invalid_data("binary file"));
    }
    let text = std::str::from_utf8(bytes).map_err(|_| invalid_data("invalid UTF-8"))?;
    Ok((text.to_string(), TextEncoding::Utf8))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> io::Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(invalid_data("truncated UTF-16"));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| invalid_data("invalid UTF-16"))
}

fn encode(buffer: &DocumentBuffer, encoding: TextEncoding) -> io::Result<Vec<u8>> {
    let rope = buffer.rope();
    let mut out = Vec::with_capacity(rope.len_bytes() + 3);
    match encoding {
        TextEncoding::Utf8 => rope.write_to(&mut out)?,
        TextEncoding::Utf8Bom => {
            out.extend_from_slice(UTF8_BOM);
            rope.write_to(&mut out)?;
        }
        TextEncoding::Utf16Le => {
            out.extend_from_slice(UTF16_LE_BOM);
            for chunk in rope.chunks() {
                for unit in chunk.encode_utf16() {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
            }
        }
        TextEncoding::Utf16Be => {
            out.extend_from_slice(UTF16_BE_BOM);
            for chunk in rope.chunks() {
                for unit in chunk.encode_utf16() {
                    out.extend_from_slice(&unit.to_be_bytes());
                }
            }
        }
    }
    Ok(out)
}

/// Write `bytes` to a temp file beside `path`, then rename it into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    check_writable(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
