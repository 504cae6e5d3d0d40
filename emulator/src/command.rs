use std::{
    error::Error,
    io::{self, Write},
    str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("No command specified")]
    Empty,

    #[error("Missing argument {0}")]
    MissingArgument(usize),

    #[error("Bad argument {0} ({1})")]
    ParseError(usize, String),
}

pub struct Command(String);

impl Command {
    /// Reads one line from stdin. `None` once stdin is closed.
    pub fn prompt() -> io::Result<Option<Self>> {
        print!("> ");
        io::stdout().flush()?;

        io::stdin()
            .lines()
            .next()
            .transpose()
            .map(|line| line.map(Self))
    }

    pub fn args(&self) -> CommandArgs<impl Iterator<Item = &str>> {
        CommandArgs {
            iter: self.0.split_whitespace(),
            index: 0,
        }
    }
}

pub struct CommandArgs<I> {
    iter: I,
    index: usize,
}

impl<'a, I> CommandArgs<I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn next(&mut self) -> Result<&'a str, CommandError> {
        self.index += 1;

        self.iter
            .next()
            .ok_or(CommandError::MissingArgument(self.index))
    }

    pub fn next_parsed<T>(&mut self) -> Result<T, CommandError>
    where
        T: FromStr,
        <T as FromStr>::Err: Error + 'static,
    {
        let arg_str = self.next()?;
        self.parse(arg_str)
    }

    /// Like `next_parsed`, but a missing argument yields `default`. A malformed one is still an error.
    pub fn next_parsed_or<T>(&mut self, default: T) -> Result<T, CommandError>
    where
        T: FromStr,
        <T as FromStr>::Err: Error + 'static,
    {
        match self.next() {
            Ok(arg_str) => self.parse(arg_str),
            Err(CommandError::MissingArgument(_)) => Ok(default),
            Err(e) => Err(e),
        }
    }

    pub fn remaining(self) -> usize {
        self.iter.count()
    }

    fn parse<T>(&self, arg_str: &str) -> Result<T, CommandError>
    where
        T: FromStr,
        <T as FromStr>::Err: Error + 'static,
    {
        T::from_str(arg_str).map_err(|e| CommandError::ParseError(self.index, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandError};

    fn command(line: &str) -> Command {
        Command(line.to_string())
    }

    #[test]
    fn missing_arguments_use_defaults() {
        let cmd = command("d 10");
        let mut args = cmd.args();

        assert_eq!(args.next().unwrap(), "d");
        assert_eq!(args.next_parsed_or(0usize).unwrap(), 10);
        assert_eq!(args.next_parsed_or(16usize).unwrap(), 16);
        assert_eq!(args.remaining(), 0);
    }

    #[test]
    fn malformed_argument_reports_its_position() {
        let cmd = command("eb 4 lots");
        let mut args = cmd.args();

        args.next().unwrap();
        assert_eq!(args.next_parsed::<usize>().unwrap(), 4);
        assert!(matches!(
            args.next_parsed_or(1usize),
            Err(CommandError::ParseError(3, _))
        ));
    }

    #[test]
    fn required_argument_missing() {
        let cmd = command("jmp");
        let mut args = cmd.args();

        args.next().unwrap();
        assert!(matches!(
            args.next_parsed::<usize>(),
            Err(CommandError::MissingArgument(2))
        ));
    }

    #[test]
    fn leftover_arguments_are_counted() {
        let cmd = command("e 2 extra words");
        let mut args = cmd.args();

        args.next().unwrap();
        args.next_parsed_or(1usize).unwrap();

        assert_eq!(args.remaining(), 2);
    }

    #[test]
    fn blank_line_has_no_command() {
        let cmd = command("   ");

        assert!(matches!(cmd.args().next(), Err(CommandError::MissingArgument(1))));
    }
}
