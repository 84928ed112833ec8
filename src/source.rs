// 📂 Line Sources - where raw records come from
//
// The loader only sees the LineSource trait, so files and in-memory lists
// are interchangeable.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

// ============================================================================
// CORE TRAIT
// ============================================================================

/// LineSource - yields every raw line of one source, in order
pub trait LineSource {
    /// Human-readable name used in logs and errors (usually a path)
    fn name(&self) -> String;

    /// Read all lines, blank ones included
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - lines without their terminators
    /// * `Err(io::Error)` - if the source cannot be opened or read
    fn read_lines(&self) -> io::Result<Vec<String>>;

    /// Location reported when the source is unavailable
    fn path(&self) -> PathBuf {
        PathBuf::from(self.name())
    }
}

// ============================================================================
// FILE SOURCE
// ============================================================================

/// Plain-text file, one record per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        read_lines(&self.path)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Read a file line by line; `\n` and `\r\n` terminators are stripped
///
/// Bytes that are not valid UTF-8 become U+FFFD, so one badly encoded line
/// never hides the rest of the file.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}

// ============================================================================
// INLINE SOURCE
// ============================================================================

/// In-memory lines, handy for tests and embedding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineSource {
    name: String,
    lines: Vec<String>,
}

impl InlineSource {
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InlineSource {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for InlineSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================
