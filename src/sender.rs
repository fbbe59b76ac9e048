//! # Command Sender
//!
//! Sends one PJL command to a printer over its own connection and
//! optionally reads the reply back.
//!
//! The readback behavior is selected per command with [`ReadMode`], since
//! some directives answer once (INFO, ECHO), some stream forever (USTATUS)
//! and some answer nothing at all (RDYMSG).

use std::io::Write;
use std::sync::atomic::AtomicBool;

use crate::error::JetpokeError;
use crate::transport::TcpTransport;

/// How to treat the printer's side of the conversation after a command is
/// sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Send and close; any reply is discarded.
    Ignore,
    /// Block for the first reply burst, emit it, then close.
    Once,
    /// Emit reply chunks until the cancellation flag is raised or the
    /// printer closes the connection.
    Continuous,
}

/// Send `command` to `host:port` and handle the reply per `mode`.
///
/// Opens a fresh connection, writes the full command in one send, reads
/// according to the mode and emits received bytes to `sink`. The
/// connection is released on every path, including errors.
///
/// A zero-length command is legal and sent as-is (the connection is opened
/// and closed without payload).
///
/// ## Errors
///
/// Propagates [`JetpokeError::Connection`] when the host is unreachable
/// and [`JetpokeError::Transport`] on send/read failures.
pub fn send_command<W: Write>(
    host: &str,
    port: u16,
    command: &str,
    mode: ReadMode,
    cancel: &AtomicBool,
    sink: &mut W,
) -> Result<(), JetpokeError> {
    let mut transport = TcpTransport::open(host, port)?;
    transport.send(command.as_bytes())?;

    match mode {
        ReadMode::Ignore => {}
        ReadMode::Once => {
            transport.read_burst(sink)?;
        }
        ReadMode::Continuous => {
            transport.read_until_cancelled(sink, cancel)?;
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_ignore_mode_sends_and_returns() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).unwrap();
            received
        });

        let cancel = AtomicBool::new(false);
        let mut sink = Vec::new();
        send_command(
            "127.0.0.1",
            port,
            "\x1B%-12345X\x1B%-12345X",
            ReadMode::Ignore,
            &cancel,
            &mut sink,
        )
        .unwrap();

        assert_eq!(server.join().unwrap(), b"\x1B%-12345X\x1B%-12345X");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_once_mode_emits_first_burst() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut buf = [0u8; 256];
            socket.read(&mut buf).unwrap();
            socket.write_all(b"pong\r\n").unwrap();
        });

        let cancel = AtomicBool::new(false);
        let mut sink = Vec::new();
        send_command("127.0.0.1", port, "ping", ReadMode::Once, &cancel, &mut sink).unwrap();

        server.join().unwrap();
        assert_eq!(sink, b"pong\r\n");
    }

    #[test]
    fn test_connection_error_propagates() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let cancel = AtomicBool::new(false);
        let mut sink = Vec::new();
        let err = send_command("127.0.0.1", port, "x", ReadMode::Ignore, &cancel, &mut sink)
            .unwrap_err();
        assert!(matches!(err, JetpokeError::Connection(_)));
    }
}
