use std::time::{Duration, Instant};

use libdeassembler::Deassembler;
use libemulator::{output::Output, Emulator, ExecuteOk, HaltReason};
use libisa::{instruction::kind::InstructionKind, Address};

use crate::command::{Command, CommandError};

const DEFAULT_INSTRUCTION_LIMIT: usize = 1_000_000;
const DEFAULT_DUMP_LENGTH: usize = 16;
const DEFAULT_DEASSEMBLY_COUNT: usize = 8;

enum Flow {
    Continue,
    Quit,
}

/// Interactive stepping session. Faults are reported and leave the machine inspectable.
pub fn debug<O>(emulator: &mut Emulator<O>) -> anyhow::Result<()>
where
    O: Output,
{
    let mut last_cmd_time = Duration::ZERO;

    loop {
        println!(
            "<<<   PC: {:02X}, FL: {:02X}, GPRs: {:02X?}, {} ms ({} ns)   >>>",
            emulator.pc,
            emulator.alu.flags.bits(),
            emulator.reg_file.array_clone(),
            last_cmd_time.as_millis(),
            last_cmd_time.as_nanos(),
        );

        let Some(cmd) = Command::prompt()? else {
            return Ok(());
        };

        let start_time = Instant::now();

        match execute_command(&cmd, emulator) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(e) => eprintln!("!> {}", e),
        }

        last_cmd_time = start_time.elapsed();
    }
}

fn execute_command<O>(cmd: &Command, emulator: &mut Emulator<O>) -> anyhow::Result<Flow>
where
    O: Output,
{
    let mut args = cmd.args();

    let name = args.next().map_err(|_| CommandError::Empty)?;

    match name {
        "e" => {
            let instruction_count = args.next_parsed_or(1usize)?;

            for _ in 0..instruction_count {
                if let ExecuteOk::Halted(reason) = emulator.execute_instruction()? {
                    print_halted(reason);
                    break;
                }
            }
        }
        "eb" => {
            let break_pc: Address = args.next_parsed()?;
            let instruction_limit = args.next_parsed_or(DEFAULT_INSTRUCTION_LIMIT)?;

            let mut executed_instructions = 0;
            while emulator.pc != break_pc {
                if executed_instructions >= instruction_limit {
                    eprintln!(
                        "Didn't reach breakpoint by {} executed instructions",
                        executed_instructions
                    );
                    return Ok(Flow::Continue);
                }

                if let ExecuteOk::Halted(reason) = emulator.execute_instruction()? {
                    print_halted(reason);
                    break;
                }
                executed_instructions += 1;
            }

            println!("Executed {} instructions", executed_instructions);
        }
        "c" => {
            let reason = emulator.run()?;
            print_halted(reason);
        }
        "r" => {
            for (index, value) in emulator.reg_file.iter().enumerate() {
                println!("R{}: {:02X} ({})", index, value, value);
            }
            println!("FL: {:08b}", emulator.alu.flags.bits());
        }
        "d" => {
            let begin: Address = args.next_parsed_or(0)?;
            let length = args.next_parsed_or(DEFAULT_DUMP_LENGTH)?;

            let dump = emulator.memory.slice(begin..begin.saturating_add(length));
            println!("{:02X}: {:02X?}", begin, dump);
        }
        "u" => {
            let begin = args.next_parsed_or(emulator.pc)?;
            let count = args.next_parsed_or(DEFAULT_DEASSEMBLY_COUNT)?;

            let enabled = |kind: InstructionKind| emulator.dispatch.contains(kind);
            let mut deassembler = Deassembler::starting_at(emulator.memory.as_slice(), begin)
                .with_enabled(&enabled);

            for _ in 0..count {
                if deassembler.is_done() {
                    break;
                }
                println!("{}", deassembler.deassemble_instruction_text());
            }
        }
        "jmp" => {
            emulator.pc = args.next_parsed()?;
        }
        "q" => return Ok(Flow::Quit),
        other => Err(CommandError::UnknownCommand(other.to_string()))?,
    }

    let unused_arg_count = args.remaining();
    if unused_arg_count != 0 {
        eprintln!("{} unused command arguments!", unused_arg_count);
    }

    Ok(Flow::Continue)
}

fn print_halted(reason: HaltReason) {
    match reason {
        HaltReason::Halt => println!("Halted"),
        HaltReason::EndOfMemory => println!("Ran off the end of memory"),
    }
}
