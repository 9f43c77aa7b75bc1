//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use otp_field::{OtpConfig, OtpLength};

use crate::{app, logging};

#[derive(Parser)]
#[command(name = "otp-demo")]
#[command(about = "Interactive demo for the boxed OTP input widget")]
struct Cli {
    /// Number of passcode slots
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(4..=8))]
    length: u8,

    /// Character shown in unfilled slots
    #[arg(long, default_value = " ")]
    placeholder: char,

    /// Focus the hidden input as soon as the demo starts
    #[arg(long)]
    autofocus: bool,

    /// Write debug logs to this file (stdout belongs to the TUI)
    #[arg(long, value_name = "PATH")]
    log_file: Option<std::path::PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _guard = cli
        .log_file
        .as_deref()
        .map(logging::init)
        .transpose()
        .context("Failed to initialize logging")?;

    let length = OtpLength::from_usize(usize::from(cli.length))
        .context("length must be between 4 and 8")?;
    let config = OtpConfig::new(length)
        .placeholder(cli.placeholder)
        .activate_on_mount(cli.autofocus);

    app::run(config)
}
