//! # PJL Command Builders
//!
//! This module builds the Printer Job Language (PJL) directives sent to
//! network printers on the raw (JetDirect) port.
//!
//! ## Protocol Overview
//!
//! PJL is a line-oriented ASCII protocol embedded in print job data streams.
//! Commands are delimited from page data by the Universal Exit Language (UEL)
//! sequence, and each directive line ends with CR LF:
//!
//! ```text
//! ESC %-12345X @PJL INFO STATUS <CR><LF> ESC %-12345X
//! ```
//!
//! Every builder in this module returns the complete wire string including
//! the UEL prologue and epilogue, ready for a single socket write.
//!
//! ## Command Structure
//!
//! Commands follow these patterns:
//! - UEL only: `ESC %-12345X` (job boundary)
//! - PJL line: `@PJL <directive> [args] CR LF`
//! - Raw PCL: escape sequences such as `ESC *s1M` (free memory query)
//!
//! ## Reference
//!
//! Based on "Printer Job Language Technical Reference Manual"
//! by Hewlett-Packard Co.

use crate::error::JetpokeError;

// ============================================================================
// WIRE CONSTANTS
// ============================================================================

/// ESC (Escape) - Control sequence prefix character
///
/// PJL framing and PCL directives begin with ESC (0x1B).
pub const ESC: char = '\x1B';

/// Universal Exit Language sequence (ESC %-12345X)
///
/// Marks the boundary between raw job data and printer-language command
/// blocks. Used as both prologue and epilogue around every directive so the
/// printer drops back to its default personality afterwards.
pub const UEL: &str = "\x1B%-12345X";

/// Maximum length of a front-panel ready message, in characters.
///
/// Typical HP panels are a single 16-character line; longer values are
/// rejected by [`ready_message`] before any network traffic happens.
pub const DISPLAY_MAX_CHARS: usize = 16;

/// The info categories printers conventionally understand.
///
/// Documented for help text only. [`info`] sends whatever category it is
/// given without validating against this set, since firmware vendors add
/// their own categories.
pub const INFO_CATEGORIES: &[&str] = &[
    "ID",
    "CONFIG",
    "FILESYS",
    "MEMORY",
    "PAGECOUNT",
    "STATUS",
    "VARIABLES",
    "USTATUS",
];

// ============================================================================
// FRAMING
// ============================================================================

/// Wrap a command body in the UEL prologue/epilogue pair.
///
/// A zero-length body is legal and produces back-to-back UEL sequences,
/// which a printer treats as an empty command block.
///
/// ## Example
///
/// ```
/// use jetpoke::protocol::commands;
///
/// assert_eq!(commands::wrap("@PJL\r\n"), "\x1B%-12345X@PJL\r\n\x1B%-12345X");
/// ```
#[inline]
pub fn wrap(body: &str) -> String {
    format!("{UEL}{body}{UEL}")
}

// ============================================================================
// DIRECTIVE BUILDERS
// ============================================================================

/// # Unsolicited Device Status (@PJL USTATUS DEVICE = ON)
///
/// Subscribes to unsolicited status reporting. After this directive the
/// printer pushes a status block over the open connection every time its
/// state changes (cover opened, paper out, job done, ...).
///
/// ## Protocol Details
///
/// | Format | Line                        |
/// |--------|-----------------------------|
/// | ASCII  | @PJL USTATUS DEVICE = ON    |
///
/// ## Behavior
///
/// The printer keeps pushing status lines for as long as the connection is
/// held open, so this directive pairs with a continuous read. Note that a
/// held-open status connection blocks other jobs on most printers.
#[inline]
pub fn ustatus_device_on() -> String {
    wrap("@PJL USTATUS DEVICE = ON\r\n")
}

/// # Info Request (@PJL INFO category)
///
/// Requests one of the printer's info categories. The reply is a free-form
/// ASCII block terminated by form feed.
///
/// ## Protocol Details
///
/// | Format | Line                  |
/// |--------|-----------------------|
/// | ASCII  | @PJL INFO \<category\> |
///
/// ## Parameters
///
/// - `category`: conventionally one of [`INFO_CATEGORIES`], but sent
///   unvalidated - vendor firmware often understands more.
///
/// ## Example
///
/// ```
/// use jetpoke::protocol::commands;
///
/// let cmd = commands::info("PAGECOUNT");
/// assert_eq!(cmd, "\x1B%-12345X@PJL INFO PAGECOUNT\r\n\x1B%-12345X");
/// ```
#[inline]
pub fn info(category: &str) -> String {
    wrap(&format!("@PJL INFO {category}\r\n"))
}

/// # Echo Request (@PJL ECHO value)
///
/// Asks the printer to echo the value back on the same connection. Useful
/// as a liveness probe and for delimiting replies in a mixed stream.
///
/// ## Protocol Details
///
/// | Format | Line                |
/// |--------|---------------------|
/// | ASCII  | @PJL ECHO \<value\> |
#[inline]
pub fn echo(value: &str) -> String {
    wrap(&format!("@PJL ECHO {value}\r\n"))
}

/// # Free Memory Query (ESC *s1M)
///
/// A raw PCL status readback directive requesting the amount of free
/// memory. Unlike the PJL lines this is a bare escape sequence with no
/// CR LF terminator.
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC * s 1 M    |
/// | Hex     | 1B 2A 73 31 4D |
#[inline]
pub fn memory_status() -> String {
    wrap(&format!("{ESC}*s1M"))
}

/// # Set Ready Message (@PJL RDYMSG DISPLAY = "value")
///
/// Sets the printer's front-panel message. The panel shows the value in
/// place of "READY" until cleared or power-cycled.
///
/// ## Protocol Details
///
/// | Format | Line                              |
/// |--------|-----------------------------------|
/// | ASCII  | @PJL RDYMSG DISPLAY = "\<value\>" |
///
/// ## Errors
///
/// Returns [`JetpokeError::InvalidCommand`] if the value is longer than
/// [`DISPLAY_MAX_CHARS`] characters (the panel is a single 16-char line).
///
/// ## Example
///
/// ```
/// use jetpoke::protocol::commands;
///
/// let cmd = commands::ready_message("INSERT COIN").unwrap();
/// assert_eq!(
///     cmd,
///     "\x1B%-12345X@PJL RDYMSG DISPLAY = \"INSERT COIN\"\r\n\x1B%-12345X"
/// );
///
/// assert!(commands::ready_message("THIS IS WAY TOO LONG").is_err());
/// ```
#[inline]
pub fn ready_message(value: &str) -> Result<String, JetpokeError> {
    let len = value.chars().count();
    if len > DISPLAY_MAX_CHARS {
        return Err(JetpokeError::InvalidCommand(format!(
            "display message is {len} chars, panel fits {DISPLAY_MAX_CHARS}"
        )));
    }
    Ok(wrap(&format!("@PJL RDYMSG DISPLAY = \"{value}\"\r\n")))
}

/// # Custom Command
///
/// Wraps a caller-supplied raw command after applying the escape
/// substitutions of [`unescape`]. The caller is responsible for the body
/// being something the printer understands.
#[inline]
pub fn custom(value: &str) -> String {
    wrap(&unescape(value))
}

/// Replace literal escape spellings with their control characters.
///
/// Applied to custom command values so control bytes can be typed on a
/// shell command line. Exactly three substitutions, every occurrence,
/// left-to-right, in this fixed order:
///
/// 1. `\x1B` -> ESC (0x1B), case-sensitive (lowercase `\x1b` passes through)
/// 2. `\r` -> CR (0x0D)
/// 3. `\n` -> LF (0x0A)
///
/// ## Example
///
/// ```
/// use jetpoke::protocol::commands;
///
/// assert_eq!(commands::unescape(r"@PJL\r\n"), "@PJL\r\n");
/// assert_eq!(commands::unescape(r"\x1BE"), "\x1BE");
/// ```
pub fn unescape(value: &str) -> String {
    value
        .replace(r"\x1B", "\x1B")
        .replace(r"\r", "\r")
        .replace(r"\n", "\n")
}

// ============================================================================
// TESTS
// ============================================================================
