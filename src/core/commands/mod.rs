use std::collections::BTreeMap;
use std::path::PathBuf;

mod archive;
mod digest;
mod file;
mod list;
mod nav;
mod os;
mod transfer;

pub use archive::{CompressCommand, DecompressCommand};
pub use digest::HashCommand;
pub use file::{AddCommand, CatCommand, RmCommand, RnCommand};
pub use list::LsCommand;
pub use nav::{CdCommand, UpCommand};
pub use os::OsCommand;
pub use transfer::{CpCommand, MvCommand};

use crate::console::Console;
use crate::core::pipeline::PipelineError;
use crate::core::state::Session;

#[derive(Debug)]
pub enum CommandError {
    /// Unknown verb or wrong arity: the line was rejected before any
    /// operation ran. Never touches the filesystem.
    InvalidInput,
    /// A dispatched command was handed a flag outside its table (`os`).
    /// Reported as invalid input, but the command did run.
    UnknownFlag,
    DirectoryNotFound,
    SourceNotFound,
    AlreadyExists,
    DestinationExists(PathBuf),
    NotFound,
    OperationFailed,
    Pipeline(PipelineError),
    Io(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidInput => write!(f, "Invalid input"),
            CommandError::UnknownFlag => write!(f, "Invalid input"),
            CommandError::DirectoryNotFound => write!(f, "No such directory"),
            CommandError::SourceNotFound => write!(f, "Source file not found"),
            CommandError::AlreadyExists => write!(f, "File already exists"),
            CommandError::DestinationExists(path) => {
                write!(f, "Destination file {} already exists", path.display())
            }
            CommandError::NotFound => write!(f, "File not found"),
            CommandError::OperationFailed => write!(f, "Operation failed"),
            CommandError::Pipeline(e) => write!(f, "Operation failed: {}", e),
            CommandError::Io(e) => write!(f, "Operation failed: {}", e),
        }
    }
}

impl From<PipelineError> for CommandError {
    fn from(err: PipelineError) -> Self {
        CommandError::Pipeline(err)
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl std::error::Error for CommandError {}

/// One input line, split into a verb and its whitespace-separated
/// arguments. No quoting: an argument containing spaces cannot be
/// expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub verb: String,
    pub args: Vec<String>,
}

pub fn parse_line(line: &str) -> Option<ParsedCommand> {
    let mut parts = line.split_whitespace().map(String::from);
    let verb = parts.next()?;
    Some(ParsedCommand {
        verb,
        args: parts.collect(),
    })
}

pub trait Command {
    /// Required argument count, validated centrally before `execute`.
    fn min_args(&self) -> usize {
        0
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        console: &Console,
    ) -> Result<(), CommandError>;
}

enum CommandType {
    Ls(LsCommand),
    Up(UpCommand),
    Cd(CdCommand),
    Add(AddCommand),
    Cat(CatCommand),
    Rn(RnCommand),
    Rm(RmCommand),
    Cp(CpCommand),
    Mv(MvCommand),
    Hash(HashCommand),
    Compress(CompressCommand),
    Decompress(DecompressCommand),
    Os(OsCommand),
}

impl Command for CommandType {
    fn min_args(&self) -> usize {
        match self {
            CommandType::Ls(cmd) => cmd.min_args(),
            CommandType::Up(cmd) => cmd.min_args(),
            CommandType::Cd(cmd) => cmd.min_args(),
            CommandType::Add(cmd) => cmd.min_args(),
            CommandType::Cat(cmd) => cmd.min_args(),
            CommandType::Rn(cmd) => cmd.min_args(),
            CommandType::Rm(cmd) => cmd.min_args(),
            CommandType::Cp(cmd) => cmd.min_args(),
            CommandType::Mv(cmd) => cmd.min_args(),
            CommandType::Hash(cmd) => cmd.min_args(),
            CommandType::Compress(cmd) => cmd.min_args(),
            CommandType::Decompress(cmd) => cmd.min_args(),
            CommandType::Os(cmd) => cmd.min_args(),
        }
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        console: &Console,
    ) -> Result<(), CommandError> {
        match self {
            CommandType::Ls(cmd) => cmd.execute(session, args, console),
            CommandType::Up(cmd) => cmd.execute(session, args, console),
            CommandType::Cd(cmd) => cmd.execute(session, args, console),
            CommandType::Add(cmd) => cmd.execute(session, args, console),
            CommandType::Cat(cmd) => cmd.execute(session, args, console),
            CommandType::Rn(cmd) => cmd.execute(session, args, console),
            CommandType::Rm(cmd) => cmd.execute(session, args, console),
            CommandType::Cp(cmd) => cmd.execute(session, args, console),
            CommandType::Mv(cmd) => cmd.execute(session, args, console),
            CommandType::Hash(cmd) => cmd.execute(session, args, console),
            CommandType::Compress(cmd) => cmd.execute(session, args, console),
            CommandType::Decompress(cmd) => cmd.execute(session, args, console),
            CommandType::Os(cmd) => cmd.execute(session, args, console),
        }
    }
}

/// Verb table plus central arity validation. Unknown verbs and missing
/// arguments are rejected before any operation runs.
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("ls".to_string(), CommandType::Ls(LsCommand::new()));
        commands.insert("up".to_string(), CommandType::Up(UpCommand::new()));
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("add".to_string(), CommandType::Add(AddCommand::new()));
        commands.insert("cat".to_string(), CommandType::Cat(CatCommand::new()));
        commands.insert("rn".to_string(), CommandType::Rn(RnCommand::new()));
        commands.insert("rm".to_string(), CommandType::Rm(RmCommand::new()));
        commands.insert("cp".to_string(), CommandType::Cp(CpCommand::new()));
        commands.insert("mv".to_string(), CommandType::Mv(MvCommand::new()));
        commands.insert("hash".to_string(), CommandType::Hash(HashCommand::new()));
        commands.insert(
            "compress".to_string(),
            CommandType::Compress(CompressCommand::new()),
        );
        commands.insert(
            "decompress".to_string(),
            CommandType::Decompress(DecompressCommand::new()),
        );
        commands.insert("os".to_string(), CommandType::Os(OsCommand::new()));

        Self { commands }
    }

    pub fn execute(
        &self,
        verb: &str,
        args: &[String],
        session: &mut Session,
        console: &Console,
    ) -> Result<(), CommandError> {
        let command = self
            .commands
            .get(verb)
            .ok_or(CommandError::InvalidInput)?;
        if args.len() < command.min_args() {
            return Err(CommandError::InvalidInput);
        }
        command.execute(session, args, console)
    }

    pub fn is_known(&self, verb: &str) -> bool {
        self.commands.contains_key(verb)
    }
}
