use std::{path::PathBuf, process::exit};

use clap::Parser;
use libdeassembler::Deassembler;
use libisa::program::{self, LoadError, Radix};

/// Prints the instructions in an LS-8 program file.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    program_path: PathBuf,

    /// Read words as decimal instead of binary.
    #[arg(short, long)]
    decimal: bool,
}

fn main() {
    let args = Args::parse();
    let radix = if args.decimal {
        Radix::Decimal
    } else {
        Radix::Binary
    };

    let program = match program::load_program(&args.program_path, radix) {
        Ok(program) => program,
        Err(e @ LoadError::ProgramNotFound(_)) => {
            eprintln!("{}", e);
            exit(2);
        }
        Err(e) => {
            eprintln!("Error reading program file: {}", e);
            exit(1);
        }
    };

    let deassembler = Deassembler::new(&program);
    println!("{}", deassembler.deassemble_text());
}
