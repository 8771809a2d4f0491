use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::{debug, warn};

use super::error::SourceError;
use super::parse::SourceFormat;
use crate::domain::Record;
use crate::streaming::Observer;

/// Line counters for one pass over a source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Lines scanned after decompression
    pub lines: usize,
    /// Lines that produced a record
    pub records: usize,
    /// Lines dropped as malformed or irrelevant
    pub skipped: usize,
    /// Source could not be opened or decompressed
    pub failed: bool,
}

/// Reads one gzip-compressed catalogue file and pushes parsed records to an observer
///
/// The file handle and decoder are owned by a single `read` call and dropped
/// on every exit path.
#[derive(Debug, Clone)]
pub struct SourceReader {
    path: PathBuf,
    format: SourceFormat,
}

impl SourceReader {
    /// Create a reader for the given file and line format
    pub fn new(path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Reader for a navigation aid catalogue
    pub fn navaids(path: impl Into<PathBuf>) -> Self {
        Self::new(path, SourceFormat::Navaids)
    }

    /// Reader for an airport and runway catalogue
    pub fn airports(path: impl Into<PathBuf>) -> Self {
        Self::new(path, SourceFormat::Airports)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Open the file and prime the gzip decoder
    ///
    /// Filling the first buffer forces the gzip header to be read, so a
    /// non-gzip file fails here rather than midway through the scan.
    fn open(&self) -> Result<BufReader<GzDecoder<File>>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Open {
            path: self.path.clone(),
            source,
        })?;

        let mut reader = BufReader::new(GzDecoder::new(file));
        reader.fill_buf().map_err(|source| SourceError::Decompress {
            path: self.path.clone(),
            source,
        })?;

        Ok(reader)
    }

    /// Scan the whole file synchronously, invoking the observer in file order
    ///
    /// Calls `on_next` once per parsed record, then exactly one of
    /// `on_error` (open or decompression failed, no records delivered) or
    /// `on_complete`.
    pub fn read<O>(&self, observer: &mut O) -> ReadStats
    where
        O: Observer<Record> + ?Sized,
    {
        let mut stats = ReadStats::default();

        let mut reader = match self.open() {
            Ok(reader) => reader,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Source unavailable");
                stats.failed = true;
                observer.on_error(e);
                return stats;
            }
        };

        debug!(path = %self.path.display(), format = self.format.name(), "Scanning source");

        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    stats.lines += 1;
                    let line = String::from_utf8_lossy(&buf);
                    match self.format.parse_line(&line) {
                        Some(record) => {
                            stats.records += 1;
                            observer.on_next(record);
                        }
                        None => stats.skipped += 1,
                    }
                }
                Err(e) => {
                    // Records already delivered stand; the scan ends as a completion
                    warn!(
                        path = %self.path.display(),
                        line = stats.lines + 1,
                        error = %e,
                        "Read failed mid-stream, ending scan"
                    );
                    break;
                }
            }
        }

        debug!(
            path = %self.path.display(),
            lines = stats.lines,
            records = stats.records,
            skipped = stats.skipped,
            "Source exhausted"
        );
        observer.on_complete();
        stats
    }
}
