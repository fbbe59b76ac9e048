//! # Jetpoke CLI
//!
//! Command-line interface for poking at network printers over raw TCP.
//!
//! ## Usage
//!
//! ```bash
//! # Ask a printer to identify itself
//! jetpoke -H 192.168.1.50 --info -v ID
//!
//! # Watch unsolicited status reports (Ctrl-C to stop)
//! jetpoke -H 192.168.1.50 --status
//!
//! # Set the front panel message
//! jetpoke -H 192.168.1.50 --display -v "INSERT COIN"
//!
//! # Send a raw PJL line
//! jetpoke -H 192.168.1.50 --custom -v '@PJL INFO USTATUS\r\n'
//!
//! # Spool a captured print job
//! jetpoke -H 192.168.1.50 -f job.pcl
//! ```

use clap::{CommandFactory, Parser};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use jetpoke::{
    dispatch::Directives,
    error::JetpokeError,
    protocol::commands,
    sender::{self, ReadMode},
    transport::tcp,
};

/// Jetpoke - a tool for finding and playing with printers
#[derive(Parser, Debug)]
#[command(name = "jetpoke")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer host (IPv4 address or name)
    #[arg(short = 'H', long, value_name = "HOST")]
    host: Option<String>,

    /// Raw print port
    #[arg(long, value_name = "PORT", default_value_t = tcp::DEFAULT_PORT)]
    port: u16,

    /// Spool FILE to the printer
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Generic value consumed by --info, --custom, --echo and --display
    #[arg(short, long, value_name = "VALUE", default_value = "")]
    value: String,

    /// Enter status read mode (blocks the printer; Ctrl-C to stop)
    #[arg(short, long)]
    status: bool,

    /// Send a PJL info request with VALUE as the category
    #[arg(short, long, long_help = info_long_help())]
    info: bool,

    /// Send VALUE as a custom command (literal \x1B, \r and \n are
    /// replaced with their control characters)
    #[arg(short, long)]
    custom: bool,

    /// Request an echo of VALUE
    #[arg(short, long)]
    echo: bool,

    /// Request memory information
    #[arg(short, long)]
    memory: bool,

    /// Set the printer display to VALUE (16 characters max)
    #[arg(short, long)]
    display: bool,

    /// Ignore the response to a custom command
    #[arg(short = 'I', long)]
    ignore_response: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), JetpokeError> {
    let cli = Cli::parse();

    // Ctrl-C raises the cancellation flag observed by continuous reads
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
        eprintln!("Warning: no Ctrl-C handler, continuous reads won't stop cleanly: {e}");
    }

    // Display set is an early path: validate, send once, done
    if cli.display {
        let Some(host) = &cli.host else {
            return usage("--display needs --host");
        };
        if cli.value.is_empty() {
            return usage("--display needs --value");
        }
        let cmd = match commands::ready_message(&cli.value) {
            Ok(cmd) => cmd,
            Err(e) => return usage(&e.to_string()),
        };
        println!("Setting display to \"{}\"...", cli.value);
        sender::send_command(
            host,
            cli.port,
            &cmd,
            ReadMode::Ignore,
            &cancel,
            &mut io::stdout(),
        )?;
        return Ok(());
    }

    let Some(host) = &cli.host else {
        return usage("no printer host given");
    };

    let directives = Directives {
        status: cli.status,
        info: cli.info,
        custom: cli.custom,
        echo: cli.echo,
        memory: cli.memory,
        ignore_response: cli.ignore_response,
        value: cli.value,
        file: cli.file,
    };

    if directives.is_empty() {
        return usage("nothing to do");
    }

    directives.execute(host, cli.port, &cancel, &mut io::stdout())
}

/// Long help for --info, listing the conventional info categories.
fn info_long_help() -> String {
    format!(
        "Send a PJL info request with VALUE as the category.\nKnown categories: {}",
        commands::INFO_CATEGORIES.join(", ")
    )
}

/// Print a hint plus the usage text. Usage problems are reported, not
/// treated as failures: the process exits zero.
fn usage(hint: &str) -> Result<(), JetpokeError> {
    println!("{hint}\n");
    Cli::command().print_help()?;
    println!();
    Ok(())
}
