//! Interactive student records session.
//!
//! Collects student details from the terminal, validates them, keeps them in
//! memory for the lifetime of the session, and exports them on request.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
