//! # Jetpoke - PJL Printer Prodding Library
//!
//! Jetpoke is a Rust library for poking at network printers over the raw
//! TCP print protocol (JetDirect, port 9100). It provides:
//!
//! - **Protocol implementation**: PJL directive builders (status, info,
//!   echo, display message, memory)
//! - **Transport**: connection-per-operation raw TCP with bounded reads
//! - **Sending**: one-shot and continuous readback of printer replies
//! - **Spooling**: raw file-to-printer byte copies
//!
//! ## Quick Start
//!
//! ```no_run
//! use jetpoke::{
//!     protocol::commands,
//!     sender::{self, ReadMode},
//!     spool,
//! };
//! use std::sync::atomic::AtomicBool;
//!
//! let cancel = AtomicBool::new(false);
//! let mut out = std::io::stdout();
//!
//! // Ask the printer to identify itself and print the reply
//! let cmd = commands::info("ID");
//! sender::send_command("192.168.1.50", 9100, &cmd, ReadMode::Once, &cancel, &mut out)?;
//!
//! // Spool a captured print job
//! let sent = spool::spool_file("192.168.1.50", 9100, "job.pcl")?;
//! println!("sent {sent} bytes");
//!
//! # Ok::<(), jetpoke::error::JetpokeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | PJL directive builders |
//! | [`transport`] | Raw TCP communication |
//! | [`sender`] | Send a command, read the reply |
//! | [`spool`] | File-to-printer spooling |
//! | [`dispatch`] | Ordered execution of requested directives |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Anything listening on the raw print port and speaking PJL, which covers
//! most HP LaserJets and the many printers that clone their firmware
//! behavior. Directives a printer does not understand are silently ignored
//! on its side.

pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod sender;
pub mod spool;
pub mod transport;

// Re-exports for convenience
pub use dispatch::Directives;
pub use error::JetpokeError;
pub use sender::ReadMode;
pub use transport::TcpTransport;
