use super::{Command, CommandError};
use crate::console::Console;
use crate::core::host;
use crate::core::state::Session;

/// `os <flag>`: read-only host queries. Any flag outside the table is
/// reported as invalid input, as an operation-level failure rather than a
/// parse rejection.
#[derive(Clone, Default)]
pub struct OsCommand;

impl OsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for OsCommand {
    fn min_args(&self) -> usize {
        1
    }

    fn execute(
        &self,
        _session: &mut Session,
        args: &[String],
        console: &Console,
    ) -> Result<(), CommandError> {
        match args[0].as_str() {
            "--EOL" => {
                console.info(&host::EOL.escape_debug().to_string());
                Ok(())
            }
            "--cpus" => {
                let cpus = host::cpus();
                console.info(&format!("{} CPU(s)", cpus.len()));
                for cpu in cpus {
                    console.info(&cpu.to_string());
                }
                Ok(())
            }
            "--homedir" => {
                let home = host::home_dir().ok_or(CommandError::OperationFailed)?;
                console.info(&home.display().to_string());
                Ok(())
            }
            "--username" => {
                console.info(&host::username());
                Ok(())
            }
            "--architecture" => {
                console.info(&host::architecture());
                Ok(())
            }
            _ => Err(CommandError::UnknownFlag),
        }
    }
}
