use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use ls8::emu::cpu::Cpu;
use ls8::loader;

/// Emulator for the LS-8 8-bit computer.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the program to run (one base-2 instruction byte per line)
    program: PathBuf,

    /// Enable instruction-level trace output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let program = loader::read_program(&args.program)
        .with_context(|| format!("failed to load {}", args.program.display()))?;
    log::info!("loaded {} bytes from {}", program.len(), args.program.display());

    let mut cpu = Cpu::new();
    cpu.load(&program)?;
    cpu.run()?;
    log::info!("machine halted");
    Ok(())
}
