//! Input loading from files and streams.
//!
//! Both sources are read completely into one owned byte buffer before
//! parsing. Allocation failures surface as
//! [`Error::ResourceExhausted`] instead of aborting the process.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Initial capacity of the buffer used to read a stream.
pub const INITIAL_CAPACITY: usize = 1024;

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Input {
    /// Standard input when no path is given, otherwise the file at `path`.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Input::File(path),
            None => Input::Stdin,
        }
    }

    /// Read the entire input.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Input::Stdin => read_stream(io::stdin().lock()),
            Input::File(path) => read_file(path),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read a whole file.
///
/// The buffer is sized from the file's metadata up front.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let open_error = |source: io::Error| Error::Open {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(open_error)?;
    let size = file.metadata().map_err(open_error)?.len();
    let size = usize::try_from(size).map_err(|_| Error::CapacityOverflow)?;

    let mut buffer = Vec::new();
    buffer.try_reserve_exact(size).map_err(|_| {
        Error::exhausted(format!("allocating {size} bytes for {}", path.display()))
    })?;
    file.read_to_end(&mut buffer).map_err(open_error)?;

    log::debug!("read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

/// Read a stream to its end.
///
/// The buffer starts at [`INITIAL_CAPACITY`] bytes and doubles whenever it
/// fills. Interrupted reads are retried.
pub fn read_stream<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    grow_to(&mut buffer, INITIAL_CAPACITY)?;
    let mut len = 0;

    loop {
        if len == buffer.len() {
            let capacity = next_capacity(buffer.len())?;
            log::trace!("growing stream buffer to {capacity} bytes");
            grow_to(&mut buffer, capacity)?;
        }

        match reader.read(&mut buffer[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Io(e)),
        }
    }

    buffer.truncate(len);
    log::debug!("read {len} bytes from stream");
    Ok(buffer)
}

/// Capacity after one doubling step.
pub fn next_capacity(current: usize) -> Result<usize> {
    current.checked_mul(2).ok_or(Error::CapacityOverflow)
}

fn grow_to(buffer: &mut Vec<u8>, capacity: usize) -> Result<()> {
    let additional = capacity - buffer.len();
    buffer.try_reserve_exact(additional).map_err(|_| {
        Error::exhausted(format!("growing the input buffer to {capacity} bytes"))
    })?;
    buffer.resize(capacity, 0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Reader that hands out data in small chunks and fails once with
    /// `Interrupted`.
    struct ChunkedReader {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
        interrupted: bool,
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_read_stream_small() {
        let data = read_stream(&b"hello\n"[..]).unwrap();
        assert_eq!(data, b"hello\n");
    }

    #[test]
    fn test_read_stream_empty() {
        let data = read_stream(io::empty()).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_read_stream_grows_past_initial_capacity() {
        let payload: Vec<u8> = (0..5000u32).map(|i| b'a' + (i % 26) as u8).collect();
        let reader = ChunkedReader {
            data: payload.clone(),
            pos: 0,
            chunk: 333,
            interrupted: false,
        };
        let data = read_stream(reader).unwrap();
        assert_eq!(data, payload);
    }

    #[test]
    fn test_read_stream_exact_capacity() {
        let payload = vec![b'x'; INITIAL_CAPACITY];
        let data = read_stream(&payload[..]).unwrap();
        assert_eq!(data.len(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_read_stream_error() {
        let result = read_stream(FailingReader);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_next_capacity() {
        assert_eq!(next_capacity(1024).unwrap(), 2048);
        assert!(matches!(
            next_capacity(usize::MAX),
            Err(Error::CapacityOverflow)
        ));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("日本\n\nhi\n".as_bytes()).unwrap();

        let data = read_file(file.path()).unwrap();
        assert_eq!(data, "日本\n\nhi\n".as_bytes());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let result = read_file(&missing);
        match result {
            Err(Error::Open { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn test_input_from_path() {
        assert_eq!(Input::from_path(None), Input::Stdin);
        assert_eq!(
            Input::from_path(Some(PathBuf::from("a.txt"))),
            Input::File(PathBuf::from("a.txt"))
        );
        assert_eq!(Input::Stdin.to_string(), "<stdin>");
        assert_eq!(Input::File(PathBuf::from("a.txt")).to_string(), "a.txt");
    }
}
