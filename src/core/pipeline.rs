use std::cell::Cell;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::rc::Rc;

use flate2::read::{GzDecoder, GzEncoder};
use flate2::Compression;
use log::debug;
use sha2::{Digest, Sha256};

const CHUNK_SIZE: usize = 64 * 1024;

/// Optional byte transform between source and sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Compress,
    Decompress,
}

/// Where the byte stream ends up.
pub enum Sink<'a> {
    /// Write to a file. `overwrite: false` is an exclusive create and fails
    /// if the destination already exists.
    File { path: &'a Path, overwrite: bool },
    /// Write raw bytes to standard output.
    Stdout,
    /// Accumulate a SHA-256 digest instead of writing anywhere.
    Digest,
}

/// Pipeline failures, tagged by the stage that failed. `Source` means the
/// source was never opened; everything else happened mid-transfer.
#[derive(Debug)]
pub enum PipelineError {
    Source(io::Error),
    Read(io::Error),
    Codec(io::Error),
    Sink(io::Error),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Source(e) => write!(f, "cannot open source file: {}", e),
            PipelineError::Read(e) => write!(f, "error while reading source: {}", e),
            PipelineError::Codec(e) => write!(f, "codec error: {}", e),
            PipelineError::Sink(e) => write!(f, "cannot write destination: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {}

/// Result of a completed run: bytes delivered to the sink, plus the
/// finalized hex digest when the sink was `Sink::Digest`.
#[derive(Debug)]
pub struct Outcome {
    pub bytes: u64,
    pub digest: Option<String>,
}

/// Byte-stream runner: source file, optional transform, sink. The source is
/// opened first; a failure there never opens the transform or the sink.
/// Mid-stream failures abort the run and leave any partial sink output in
/// place; nothing is rolled back.
pub struct StreamPipeline;

impl StreamPipeline {
    pub fn run(
        source: &Path,
        transform: Option<Transform>,
        sink: Sink<'_>,
    ) -> Result<Outcome, PipelineError> {
        let file = File::open(source).map_err(PipelineError::Source)?;

        // A codec surfaces source failures through its own read call; the
        // tap remembers whether the file itself faulted so the error is
        // tagged to the right stage.
        let source_fault = Rc::new(Cell::new(false));
        let tap = SourceTap {
            inner: file,
            fault: Rc::clone(&source_fault),
        };

        let mut reader: Box<dyn Read> = match transform {
            Some(Transform::Compress) => Box::new(GzEncoder::new(tap, Compression::default())),
            Some(Transform::Decompress) => Box::new(GzDecoder::new(tap)),
            None => Box::new(tap),
        };
        let transformed = transform.is_some();

        let outcome = match sink {
            Sink::File { path, overwrite } => {
                let dest = if overwrite {
                    File::create(path)
                } else {
                    OpenOptions::new().write(true).create_new(true).open(path)
                }
                .map_err(PipelineError::Sink)?;
                let mut writer = BufWriter::new(dest);
                let bytes = pump(&mut reader, &mut writer, transformed, &source_fault)?;
                Outcome {
                    bytes,
                    digest: None,
                }
            }
            Sink::Stdout => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                let bytes = pump(&mut reader, &mut lock, transformed, &source_fault)?;
                Outcome {
                    bytes,
                    digest: None,
                }
            }
            Sink::Digest => {
                let mut hasher = Sha256::new();
                let bytes = pump(&mut reader, &mut hasher, transformed, &source_fault)?;
                Outcome {
                    bytes,
                    digest: Some(hex::encode(hasher.finalize())),
                }
            }
        };

        debug!(
            "pipeline done: {} -> {} bytes",
            source.display(),
            outcome.bytes
        );
        Ok(outcome)
    }
}

/// Tracks whether the underlying source faulted, independent of any codec
/// layered on top of it.
struct SourceTap<R> {
    inner: R,
    fault: Rc<Cell<bool>>,
}

impl<R: Read> Read for SourceTap<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = self.inner.read(buf);
        if result.is_err() {
            self.fault.set(true);
        }
        result
    }
}

/// Fixed-size chunked copy so a slow sink never buffers the whole source.
/// Read-side failures are tagged `Read` when the source itself faulted and
/// `Codec` when a transform failed on valid reads; write-side failures are
/// always `Sink`.
fn pump<W: Write>(
    reader: &mut dyn Read,
    writer: &mut W,
    transformed: bool,
    source_fault: &Cell<bool>,
) -> Result<u64, PipelineError> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = reader.read(&mut buf).map_err(|e| {
            if !transformed || source_fault.get() {
                PipelineError::Read(e)
            } else {
                PipelineError::Codec(e)
            }
        })?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n]).map_err(PipelineError::Sink)?;
        total += n as u64;
    }
    writer.flush().map_err(PipelineError::Sink)?;
    Ok(total)
}
