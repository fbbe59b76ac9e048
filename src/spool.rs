//! # File Spooler
//!
//! Copies a local file, unmodified, to a printer's raw print port. The
//! printer must natively understand the file format (PCL, PostScript, or a
//! pre-rendered job captured from a driver); no translation happens here.
//!
//! The copy is chunked at the transport read granularity. There is no
//! retry and no resumption: an interrupted spool must be restarted from
//! the beginning.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::JetpokeError;
use crate::transport::tcp::CHUNK_SIZE;
use crate::transport::TcpTransport;

/// Copy `src` to `dst` in fixed-size chunks until end of input.
///
/// Performs ceil(len / [`CHUNK_SIZE`]) writes whose payloads concatenate
/// to exactly the input, in order. Returns the total number of bytes
/// copied.
pub fn copy_chunks<R: Read, W: Write>(src: &mut R, dst: &mut W) -> Result<u64, JetpokeError> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;
    loop {
        // A signal (Ctrl-C handler) can interrupt the read mid-spool;
        // retry instead of aborting the copy
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        dst.write_all(&buf[..n])?;
        total += n as u64;
    }
    dst.flush()?;
    Ok(total)
}

/// Spool the file at `path` to the printer at `host:port`.
///
/// Opens the file and a fresh connection, copies the bytes and returns the
/// total sent. File handle and socket are released on every path.
///
/// ## Errors
///
/// Returns [`JetpokeError::Io`] if the path does not exist or reading
/// fails, [`JetpokeError::Connection`] if the printer is unreachable and
/// [`JetpokeError::Io`] on socket write failures mid-copy.
pub fn spool_file<P: AsRef<Path>>(host: &str, port: u16, path: P) -> Result<u64, JetpokeError> {
    let mut file = File::open(path.as_ref())?;
    let mut transport = TcpTransport::open(host, port)?;
    copy_chunks(&mut file, &mut transport)
}

// ============================================================================
// TESTS
// ============================================================================
