//! Shell command parsing
//!
//! Lines are split on whitespace. The first token is looked up in the fixed
//! builtin table; anything else names a program on the medium.

use thiserror::Error;

/// Builtin commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Leave the shell
    Exit,
    /// List the working directory, unfiltered
    Ls,
    /// Print the working directory
    Pwd,
    /// `mode <n>`: re-initialise the display in text mode n
    Mode,
    /// `font <n>`: select font n (0 to 3)
    Font,
}

/// Builtin command table
pub static BUILTINS: [(&str, Builtin); 5] = [
    ("exit", Builtin::Exit),
    ("ls", Builtin::Ls),
    ("pwd", Builtin::Pwd),
    ("mode", Builtin::Mode),
    ("font", Builtin::Font),
];

impl Builtin {
    /// Looks a command name up in [`BUILTINS`]
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTINS
            .iter()
            .find(|(builtin_name, _)| *builtin_name == name)
            .map(|(_, builtin)| *builtin)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Ls => "ls",
            Self::Pwd => "pwd",
            Self::Mode => "mode",
            Self::Font => "font",
        }
    }

    /// Number of arguments the builtin requires, if it checks them
    pub fn required_args(self) -> Option<usize> {
        match self {
            Self::Mode | Self::Font => Some(1),
            Self::Exit | Self::Ls | Self::Pwd => None,
        }
    }
}

/// Command errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid number of arguments")]
    WrongArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },
}

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank line
    Empty,
    /// A builtin with its arguments
    Builtin { builtin: Builtin, args: Vec<&'a str> },
    /// A program stem to run from the working directory
    External { stem: &'a str, args: Vec<&'a str> },
}

impl<'a> Command<'a> {
    /// Tokenizes and classifies a line
    pub fn parse(line: &'a str) -> Self {
        let mut tokens = tokenize(line).into_iter();
        let Some(first) = tokens.next() else {
            return Self::Empty;
        };
        let args: Vec<&str> = tokens.collect();
        match Builtin::lookup(first) {
            Some(builtin) => Self::Builtin { builtin, args },
            None => Self::External { stem: first, args },
        }
    }
}

/// Splits a line into whitespace-separated tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Checks the argument count of a builtin
pub fn check_args(builtin: Builtin, args: &[&str]) -> Result<(), CommandError> {
    match builtin.required_args() {
        Some(expected) if args.len() != expected => Err(CommandError::WrongArgumentCount {
            command: builtin.name(),
            expected,
            found: args.len(),
        }),
        _ => Ok(()),
    }
}
