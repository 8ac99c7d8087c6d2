// logtally - platform/fs.rs
//
// Line-oriented file access. `LineSource` owns the open file handle for
// exactly as long as lines remain to be read; the handle is dropped on EOF,
// on the first read error, or when the source itself is dropped.

use crate::util::error::SourceError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One raw line as read from the source, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number.
    pub number: u64,

    /// Line text including its original `\n` / `\r\n` (absent on a final
    /// unterminated line).
    pub text: String,
}

/// Lazy, fused sequence of lines from a file (or any buffered reader).
#[derive(Debug)]
pub struct LineSource<R = BufReader<File>> {
    path: PathBuf,
    reader: Option<R>,
    lines_read: u64,
}

impl LineSource<BufReader<File>> {
    /// Open `path` for line-by-line reading.
    ///
    /// Fails with `SourceError::NotFound` if the path is missing or is not a
    /// regular file. No content is read or validated here.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                return Err(SourceError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        if !metadata.is_file() {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| SourceError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(
            path = %path.display(),
            size = metadata.len(),
            "Opened log file"
        );

        Ok(Self::from_reader(path, BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    /// Wrap an already-open reader. `path` is only used in error messages.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader: Some(reader),
            lines_read: 0,
        }
    }

    /// Path (or label) this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once EOF or a read error has been reached and the underlying
    /// reader released.
    pub fn is_exhausted(&self) -> bool {
        self.reader.is_none()
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<SourceLine, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;

        let mut text = String::new();
        match reader.read_line(&mut text) {
            Ok(0) => {
                self.reader = None;
                tracing::trace!(
                    path = %self.path.display(),
                    lines = self.lines_read,
                    "Reached end of file; handle released"
                );
                None
            }
            Ok(_) => {
                self.lines_read += 1;
                Some(Ok(SourceLine {
                    number: self.lines_read,
                    text,
                }))
            }
            Err(e) => {
                self.reader = None;
                Some(Err(SourceError::Io {
                    path: self.path.clone(),
                    source: e,
                }))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineSource<R> {}
