//! # Printer Transport Layer
//!
//! This module provides communication backends for exchanging data with
//! printers.
//!
//! ## Available Transports
//!
//! - [`tcp`]: Raw TCP (JetDirect, port 9100)
//!
//! ## Future Transports
//!
//! - LPR (port 515)
//! - IPP over HTTP

pub mod tcp;

pub use tcp::TcpTransport;
