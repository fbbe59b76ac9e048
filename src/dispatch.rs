//! # Directive Dispatch
//!
//! Runs the requested printer directives as an ordered sequence of
//! optional steps. The directives are independent toggles, not modes:
//! any combination may be requested in one invocation and each fires
//! unconditionally, in a fixed order, over its own connection.
//!
//! Execution order: status, info, custom, echo, memory, file spool.

use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use crate::error::JetpokeError;
use crate::protocol::commands;
use crate::sender::{send_command, ReadMode};
use crate::spool::spool_file;

/// The set of directives requested for one invocation.
///
/// `value` is shared by the info, custom and echo directives, matching the
/// single generic value flag on the command line.
#[derive(Debug, Default, Clone)]
pub struct Directives {
    /// Subscribe to unsolicited device status (continuous read).
    pub status: bool,
    /// Request the info category named by `value`.
    pub info: bool,
    /// Send `value` as a raw command after escape substitution.
    pub custom: bool,
    /// Ask the printer to echo `value` back.
    pub echo: bool,
    /// Request free-memory status.
    pub memory: bool,
    /// Skip the readback for the custom directive.
    pub ignore_response: bool,
    /// Generic value consumed by info, custom and echo.
    pub value: String,
    /// Spool this file to the printer after the directives.
    pub file: Option<PathBuf>,
}

impl Directives {
    /// True if no directive and no file was requested.
    pub fn is_empty(&self) -> bool {
        !(self.status || self.info || self.custom || self.echo || self.memory)
            && self.file.is_none()
    }

    /// Execute every requested directive against `host:port`, in the fixed
    /// order, each over an independent connection.
    ///
    /// Reply bytes are emitted raw to `sink`; progress lines go to stdout.
    /// The first failing step aborts the remainder.
    pub fn execute<W: Write>(
        &self,
        host: &str,
        port: u16,
        cancel: &AtomicBool,
        sink: &mut W,
    ) -> Result<(), JetpokeError> {
        if self.status {
            println!("Reading device status (Ctrl-C to stop)...");
            let cmd = commands::ustatus_device_on();
            send_command(host, port, &cmd, ReadMode::Continuous, cancel, sink)?;
        }

        if self.info {
            println!("Requesting info {}...", self.value);
            let cmd = commands::info(&self.value);
            send_command(host, port, &cmd, ReadMode::Once, cancel, sink)?;
        }

        if self.custom {
            println!("Sending custom command...");
            let cmd = commands::custom(&self.value);
            let mode = if self.ignore_response {
                ReadMode::Ignore
            } else {
                ReadMode::Once
            };
            send_command(host, port, &cmd, mode, cancel, sink)?;
        }

        if self.echo {
            println!("Requesting echo...");
            let cmd = commands::echo(&self.value);
            send_command(host, port, &cmd, ReadMode::Once, cancel, sink)?;
        }

        if self.memory {
            println!("Requesting memory status...");
            let cmd = commands::memory_status();
            send_command(host, port, &cmd, ReadMode::Once, cancel, sink)?;
        }

        if let Some(path) = &self.file {
            println!("Spooling {}...", path.display());
            let total = spool_file(host, port, path)?;
            println!("Spooled {total} bytes");
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
