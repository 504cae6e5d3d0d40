//! Text program images: one word per line, `#` comments, blank lines ignored.

use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Binary,
    Decimal,
}

impl Radix {
    pub fn base(&self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
        })
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File '{}' not found", .0.display())]
    ProgramNotFound(PathBuf),

    #[error("Couldn't read program file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: '{token}' isn't a valid {radix} word")]
    BadToken {
        line: usize,
        token: String,
        radix: Radix,
    },
}

pub fn load_program(path: &Path, radix: Radix) -> Result<Vec<Word>, LoadError> {
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::ProgramNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse_program(&source, radix)
}

pub fn parse_program(source: &str, radix: Radix) -> Result<Vec<Word>, LoadError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            // Everything after the first '#' is a comment.
            let token = line.split('#').next().unwrap_or_default().trim();
            (!token.is_empty()).then_some((index + 1, token))
        })
        .map(|(line, token)| {
            Word::from_str_radix(token, radix.base()).map_err(|_| LoadError::BadToken {
                line,
                token: token.to_string(),
                radix,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let source = "\
# print8.ls8
10000010 # LDI R0,8
00000000

00001000
   # just a comment
01000111 # PRN R0
00000000
00000001 # HLT
";

        let program = parse_program(source, Radix::Binary).unwrap();
        assert_eq!(program, [0b1000_0010, 0, 8, 0b0100_0111, 0, 1]);
    }

    #[test]
    fn decimal_radix() {
        let program = parse_program("130\n0\n42 # value\n1\n", Radix::Decimal).unwrap();
        assert_eq!(program, [130, 0, 42, 1]);
    }

    #[test]
    fn reports_bad_token_line() {
        let err = parse_program("00000001\n\n0000002\n", Radix::Binary).unwrap_err();

        match err {
            LoadError::BadToken { line, token, radix } => {
                assert_eq!(line, 3);
                assert_eq!(token, "0000002");
                assert_eq!(radix, Radix::Binary);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_values_wider_than_a_word() {
        assert!(parse_program("256", Radix::Decimal).is_err());
        assert!(parse_program("100000000", Radix::Binary).is_err());
    }

    #[test]
    fn missing_file_is_program_not_found() {
        let path = Path::new("this/program/does/not/exist.ls8");

        assert!(matches!(
            load_program(path, Radix::Binary),
            Err(LoadError::ProgramNotFound(p)) if p == path
        ));
    }
}
