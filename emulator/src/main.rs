use std::{path::PathBuf, process::exit};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use libemulator::{config::Variant, output::stdout::StdoutOutput, Emulator, ExecuteErr};
use libisa::program::{self, LoadError, Radix};
use log::info;
use thiserror::Error;

mod command;
mod debugger;

const EXIT_USAGE: i32 = 1;
const EXIT_LOAD: i32 = 2;
const EXIT_FAULT: i32 = 3;

/// LS-8 register machine.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    #[command(subcommand)]
    mode: Mode,

    /// Log more, repeatable (-v info, -vv every instruction, -vvv full state traces).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Run a program until it halts.
    Run(MachineArgs),
    /// Step through a program interactively.
    Debug(MachineArgs),
}

#[derive(clap::Args, Debug)]
struct MachineArgs {
    program_path: PathBuf,

    #[arg(long, value_enum, default_value_t = VariantArg::Full)]
    variant: VariantArg,

    /// How words in the program file are written.
    #[arg(long, value_enum, default_value_t = RadixArg::Binary)]
    radix: RadixArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum VariantArg {
    /// 256 words of memory, full instruction set.
    Full,
    /// 32 words of memory, HLT/LDI/PRN/MUL only.
    Simple,
}

impl From<VariantArg> for Variant {
    fn from(variant: VariantArg) -> Self {
        match variant {
            VariantArg::Full => Variant::Full,
            VariantArg::Simple => Variant::Simple,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum RadixArg {
    Binary,
    Decimal,
}

impl From<RadixArg> for Radix {
    fn from(radix: RadixArg) -> Self {
        match radix {
            RadixArg::Binary => Radix::Binary,
            RadixArg::Decimal => Radix::Decimal,
        }
    }
}

#[derive(Debug, Error)]
enum Failure {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{0:#}")]
    Setup(anyhow::Error),

    #[error(transparent)]
    Execute(#[from] ExecuteErr),

    #[error("Debugger failed: {0:#}")]
    Debugger(anyhow::Error),
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Load(_) | Self::Setup(_) => EXIT_LOAD,
            Self::Execute(_) => EXIT_FAULT,
            Self::Debugger(_) => EXIT_USAGE,
        }
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            exit(EXIT_USAGE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    init_logging(args.verbose);

    let result = match args.mode {
        Mode::Run(machine_args) => run(&machine_args),
        Mode::Debug(machine_args) => debug(&machine_args),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        exit(e.exit_code());
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load(args: &MachineArgs) -> Result<Emulator<StdoutOutput>, Failure> {
    info!("Loading program '{}'...", args.program_path.display());

    let program = program::load_program(&args.program_path, args.radix.into())?;
    let config = Variant::from(args.variant).config();

    Emulator::new(config, program, StdoutOutput).map_err(Failure::Setup)
}

fn run(args: &MachineArgs) -> Result<(), Failure> {
    let mut emulator = load(args)?;

    info!("Executing program...");
    let reason = emulator.run()?;
    info!("Stopped: {:?}", reason);

    Ok(())
}

fn debug(args: &MachineArgs) -> Result<(), Failure> {
    let mut emulator = load(args)?;

    debugger::debug(&mut emulator).map_err(Failure::Debugger)
}
