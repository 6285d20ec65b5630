#![deny(warnings)]

use anyhow::Result;
use clap::Parser;
use locksim_core::config::Config;
use locksim_core::{samples, Simulator};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "locksim",
    about = "Safe ransomware simulation (harmless): renames files and restores them from a manifest"
)]
struct Cli {
    /// Target folder to simulate on
    #[arg(short, long)]
    target: PathBuf,
    /// Create sample test files if they don't exist
    #[arg(short, long)]
    create: bool,
    /// Restore files from the last simulation session
    #[arg(short, long)]
    restore: bool,
    /// Path to a text file with a custom ransom note
    #[arg(long)]
    note: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sim = Simulator::new(Config::new())?;

    if cli.create {
        samples::create_sample_files(&cli.target, 3)?;
    }

    let note_text = cli.note.and_then(|path| match fs::read_to_string(&path) {
        Ok(text) => Some(text),
        Err(e) => {
            eprintln!(
                "Could not read custom note file {}: {}. Using default note.",
                path.display(),
                e
            );
            None
        }
    });

    if cli.restore {
        let report = sim.restore(&cli.target)?;
        match report.session_id {
            Some(id) => println!(
                "Restore complete. {} file(s) restored from session {}.",
                report.restored, id
            ),
            None => println!("No sessions found in manifest. Nothing to restore."),
        }
    } else {
        let report = sim.attack(&cli.target, note_text.as_deref())?;
        println!(
            "Simulation complete. {} file(s) renamed. Manifest updated.",
            report.locked
        );
    }

    Ok(())
}
