//! # PJL Protocol Implementation
//!
//! This module provides command builders for the Printer Job Language (PJL)
//! dialect understood by most network laser printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: PJL directive builders (status, info, echo, display, memory)
//!
//! ## Usage Example
//!
//! ```
//! use jetpoke::protocol::commands;
//!
//! // Ask the printer to identify itself
//! let cmd = commands::info("ID");
//! assert_eq!(cmd, "\x1B%-12345X@PJL INFO ID\r\n\x1B%-12345X");
//!
//! // Set the front panel message
//! let cmd = commands::ready_message("FEED ME").unwrap();
//!
//! // Send `cmd` to the printer via transport...
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation follows the "Printer Job Language Technical Reference
//! Manual" by Hewlett-Packard Co.

pub mod commands;
