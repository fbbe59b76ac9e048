//! # Raw TCP Transport (JetDirect)
//!
//! This module provides communication with network printers over the raw
//! TCP print protocol, also known as JetDirect or AppSocket. It is the
//! simplest protocol printers speak: open a socket to port 9100 and
//! exchange bytes. No negotiation, no job tracking, no framing.
//!
//! ## Connection Model
//!
//! One connection per operation. The transport is opened, used for a single
//! send (plus optional readback) and dropped. `TcpStream` closes the socket
//! on drop, so every exit path - including errors mid-read - releases the
//! connection.
//!
//! ## Read Modes
//!
//! Printers answer PJL readback directives on the same connection:
//!
//! - [`read_burst`](TcpTransport::read_burst) blocks for the first reply
//!   bytes, drains whatever else is immediately available, and returns.
//!   Used for one-shot queries (INFO, ECHO).
//! - [`read_until_cancelled`](TcpTransport::read_until_cancelled) keeps
//!   reading until a cancellation flag is raised or the printer closes the
//!   connection. Used for unsolicited status streams, which have no
//!   natural end.
//!
//! All reads are bounded by timeouts; an unreachable or mute printer can
//! never block the process indefinitely.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::JetpokeError;

/// Default raw print port (HP JetDirect).
pub const DEFAULT_PORT: u16 = 9100;

/// Read granularity (bytes). Replies larger than one chunk arrive across
/// multiple reads and are concatenated losslessly.
pub const CHUNK_SIZE: usize = 1024;

/// Timeout for establishing the connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long to wait for the first reply bytes in a burst read.
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(15);

/// How long to wait for further bytes once a burst has started.
const DRAIN_TIMEOUT: Duration = Duration::from_millis(200);

/// Poll interval for the cancellation flag during continuous reads.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// # Raw TCP Printer Transport
///
/// Manages a single connection to a printer's raw print port.
///
/// ## Example
///
/// ```no_run
/// use jetpoke::transport::TcpTransport;
/// use jetpoke::protocol::commands;
///
/// let mut transport = TcpTransport::open("192.168.1.50", 9100)?;
/// transport.send(commands::info("ID").as_bytes())?;
///
/// let mut reply = Vec::new();
/// transport.read_burst(&mut reply)?;
///
/// # Ok::<(), jetpoke::error::JetpokeError>(())
/// ```
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Open a connection to `host:port`.
    ///
    /// The host may be an IPv4/IPv6 address or a name; every resolved
    /// address is tried in order with a connect timeout.
    ///
    /// ## Errors
    ///
    /// Returns [`JetpokeError::Connection`] if the name does not resolve or
    /// no resolved address accepts the connection within the timeout.
    pub fn open(host: &str, port: u16) -> Result<Self, JetpokeError> {
        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|e| JetpokeError::Connection(format!("Failed to resolve {host}: {e}")))?
            .collect();

        let mut last_err = JetpokeError::Connection(format!("{host} resolved to no addresses"));
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
                Ok(stream) => return Ok(Self { stream }),
                Err(e) => {
                    last_err =
                        JetpokeError::Connection(format!("Failed to connect to {addr}: {e}"));
                }
            }
        }
        Err(last_err)
    }

    /// Write the full command bytes to the printer.
    ///
    /// Delivery-or-error: `write_all` retries short writes internally, but
    /// there is no application-level retry on failure.
    pub fn send(&mut self, data: &[u8]) -> Result<(), JetpokeError> {
        self.stream
            .write_all(data)
            .map_err(|e| JetpokeError::Transport(format!("Write failed: {e}")))?;
        self.stream
            .flush()
            .map_err(|e| JetpokeError::Transport(format!("Flush failed: {e}")))?;
        Ok(())
    }

    /// Read one burst of reply bytes into `sink`.
    ///
    /// Blocks until the first bytes arrive (bounded by the response
    /// timeout), then keeps reading until the printer pauses for longer
    /// than the drain timeout. Each read appends exactly the bytes
    /// received, so bursts larger than [`CHUNK_SIZE`] are concatenated
    /// without loss or duplication.
    ///
    /// Returns the total number of bytes read. A printer that closes the
    /// connection without replying yields `Ok(0)`.
    ///
    /// ## Errors
    ///
    /// Returns [`JetpokeError::Transport`] if no bytes arrive within the
    /// response timeout or the read fails outright.
    pub fn read_burst<W: Write>(&mut self, sink: &mut W) -> Result<usize, JetpokeError> {
        let mut buf = [0u8; CHUNK_SIZE];

        self.set_read_timeout(RESPONSE_TIMEOUT)?;
        let n = match self.stream.read(&mut buf) {
            Ok(0) => return Ok(0),
            Ok(n) => n,
            Err(ref e) if is_timeout(e) => {
                return Err(JetpokeError::Transport(format!(
                    "No response within {}s",
                    RESPONSE_TIMEOUT.as_secs()
                )));
            }
            Err(e) => return Err(JetpokeError::Transport(format!("Read failed: {e}"))),
        };
        sink.write_all(&buf[..n])?;
        let mut total = n;

        // Drain whatever the printer sends on the heels of the first chunk
        self.set_read_timeout(DRAIN_TIMEOUT)?;
        loop {
            match self.stream.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    sink.write_all(&buf[..n])?;
                    total += n;
                }
                Err(ref e) if is_timeout(e) => break,
                Err(e) => return Err(JetpokeError::Transport(format!("Read failed: {e}"))),
            }
        }
        sink.flush()?;
        Ok(total)
    }

    /// Read reply bytes into `sink` until cancelled.
    ///
    /// Emits each chunk as it arrives. Returns when `cancel` becomes true
    /// (checked at least every poll interval) or the printer closes the
    /// connection. Intended for unsolicited status streams, which have no
    /// termination of their own.
    pub fn read_until_cancelled<W: Write>(
        &mut self,
        sink: &mut W,
        cancel: &AtomicBool,
    ) -> Result<(), JetpokeError> {
        let mut buf = [0u8; CHUNK_SIZE];

        self.set_read_timeout(POLL_INTERVAL)?;
        loop {
            if cancel.load(Ordering::Relaxed) {
                return Ok(());
            }
            match self.stream.read(&mut buf) {
                Ok(0) => return Ok(()),
                Ok(n) => {
                    sink.write_all(&buf[..n])?;
                    sink.flush()?;
                }
                Err(ref e) if is_timeout(e) => continue,
                Err(e) => return Err(JetpokeError::Transport(format!("Read failed: {e}"))),
            }
        }
    }

    fn set_read_timeout(&mut self, timeout: Duration) -> Result<(), JetpokeError> {
        self.stream
            .set_read_timeout(Some(timeout))
            .map_err(|e| JetpokeError::Transport(format!("Failed to set read timeout: {e}")))
    }
}

/// `io::Write` passthrough so the transport can sit at the end of a
/// reader-to-writer copy (file spooling).
impl Write for TcpTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

/// A read timeout surfaces as `WouldBlock` on Unix and `TimedOut` on
/// Windows.
fn is_timeout(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    /// Bind a listener on an ephemeral port and return it with its port.
    fn local_listener() -> (TcpListener, u16) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        (listener, port)
    }

    #[test]
    fn test_default_port() {
        assert_eq!(DEFAULT_PORT, 9100);
    }

    #[test]
    fn test_open_refused() {
        // Bind then immediately drop to get a port nothing listens on
        let (listener, port) = local_listener();
        drop(listener);

        let err = TcpTransport::open("127.0.0.1", port).unwrap_err();
        assert!(matches!(err, JetpokeError::Connection(_)));
    }

    #[test]
    fn test_open_unresolvable() {
        let err = TcpTransport::open("no.such.host.invalid", DEFAULT_PORT).unwrap_err();
        assert!(matches!(err, JetpokeError::Connection(_)));
    }

    #[test]
    fn test_send_and_read_burst() {
        let (listener, port) = local_listener();
        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut buf = [0u8; 64];
            let n = socket.read(&mut buf).unwrap();
            socket.write_all(b"@PJL INFO ID\r\nLASERJET\r\n\x0C").unwrap();
            buf[..n].to_vec()
        });

        let mut transport = TcpTransport::open("127.0.0.1", port).unwrap();
        transport.send(b"hello printer").unwrap();

        let mut reply = Vec::new();
        let total = transport.read_burst(&mut reply).unwrap();
        drop(transport);

        assert_eq!(server.join().unwrap(), b"hello printer");
        assert_eq!(reply, b"@PJL INFO ID\r\nLASERJET\r\n\x0C");
        assert_eq!(total, reply.len());
    }

    #[test]
    fn test_read_burst_multi_chunk() {
        // A reply larger than CHUNK_SIZE arrives across several reads and
        // must concatenate losslessly
        let payload: Vec<u8> = (0..3000u32).map(|i| (i % 251) as u8).collect();
        let expected = payload.clone();

        let (listener, port) = local_listener();
        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            socket.write_all(&payload).unwrap();
        });

        let mut transport = TcpTransport::open("127.0.0.1", port).unwrap();
        let mut reply = Vec::new();
        let total = transport.read_burst(&mut reply).unwrap();

        server.join().unwrap();
        assert_eq!(total, expected.len());
        assert_eq!(reply, expected);
    }

    #[test]
    fn test_read_burst_peer_closed() {
        let (listener, port) = local_listener();
        let server = thread::spawn(move || {
            let (socket, _) = listener.accept().unwrap();
            drop(socket);
        });

        let mut transport = TcpTransport::open("127.0.0.1", port).unwrap();
        let mut reply = Vec::new();
        let total = transport.read_burst(&mut reply).unwrap();

        server.join().unwrap();
        assert_eq!(total, 0);
        assert!(reply.is_empty());
    }

    #[test]
    fn test_read_until_cancelled_stops_on_flag() {
        use std::sync::Arc;
        use std::time::Instant;

        let (listener, port) = local_listener();
        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            socket.write_all(b"@PJL USTATUS DEVICE\r\nCODE=10001\r\n").unwrap();
            // Hold the connection open; the client must stop on its own
            thread::sleep(Duration::from_secs(3));
        });

        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(300));
            flag.store(true, Ordering::Relaxed);
        });

        let mut transport = TcpTransport::open("127.0.0.1", port).unwrap();
        let mut reply = Vec::new();
        let start = Instant::now();
        transport.read_until_cancelled(&mut reply, &cancel).unwrap();

        assert!(start.elapsed() < Duration::from_secs(2));
        assert_eq!(reply, b"@PJL USTATUS DEVICE\r\nCODE=10001\r\n");
        server.join().unwrap();
    }

    #[test]
    fn test_read_until_cancelled_stops_on_close() {
        let (listener, port) = local_listener();
        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            socket.write_all(b"CODE=40000 ONLINE\r\n").unwrap();
        });

        let cancel = AtomicBool::new(false);
        let mut transport = TcpTransport::open("127.0.0.1", port).unwrap();
        let mut reply = Vec::new();
        transport.read_until_cancelled(&mut reply, &cancel).unwrap();

        server.join().unwrap();
        assert_eq!(reply, b"CODE=40000 ONLINE\r\n");
    }
}
