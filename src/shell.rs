use crate::console::Console;
use crate::core::commands::{self, CommandError, CommandExecutor};
use crate::core::state::Session;
use crate::error::FmError;
use crate::flags::Flags;
use log::debug;
use rustyline::DefaultEditor;
use std::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The REPL: reads one line at a time, hands it to the command executor,
/// and announces the cursor after every dispatched command. `.exit`,
/// end-of-input, and interrupt all end the session with the farewell.
pub struct Shell {
    editor: DefaultEditor,
    executor: CommandExecutor,
    session: Session,
    console: Console,
}

impl Shell {
    pub fn new(flags: &Flags) -> Result<Self, FmError> {
        let editor = DefaultEditor::new()?;
        let session = Session::new(
            flags.get_value("username").map(String::as_str),
            validated_start_dir(flags)?,
        );

        Ok(Shell {
            editor,
            executor: CommandExecutor::new(),
            session,
            console: Console::new(),
        })
    }

    pub fn run(&mut self) -> Result<(), FmError> {
        self.install_interrupt_handler()?;

        self.console.info(&format!(
            "Welcome to the File Manager, {}!",
            self.session.username()
        ));
        self.announce_location();

        loop {
            let prompt = format!("{} > ", self.session.current_dir().display());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        eprintln!("Warning: Couldn't add to history: {}", e);
                    }
                    if self.handle_line(&line) == Flow::Exit {
                        break;
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted)
                | Err(rustyline::error::ReadlineError::Eof) => {
                    self.farewell();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let parsed = match commands::parse_line(line) {
            Some(parsed) => parsed,
            None => return Flow::Continue,
        };

        if parsed.verb == ".exit" {
            self.farewell();
            return Flow::Exit;
        }

        debug!("dispatching {} ({} args)", parsed.verb, parsed.args.len());
        match self
            .executor
            .execute(&parsed.verb, &parsed.args, &mut self.session, &self.console)
        {
            Ok(()) => self.announce_location(),
            // Unknown verb or bad arity: no operation ran, no location line.
            Err(CommandError::InvalidInput) => {
                self.console.error(&CommandError::InvalidInput.to_string())
            }
            // Everything else (including a bad flag on a dispatched verb)
            // still gets the post-condition announcement.
            Err(e) => {
                self.console.error(&e.to_string());
                self.announce_location();
            }
        }
        Flow::Continue
    }

    fn announce_location(&self) {
        self.console.info(&format!(
            "You are currently in {}",
            self.session.current_dir().display()
        ));
    }

    fn farewell(&self) {
        print_farewell(&self.console, self.session.username());
    }

    /// An interrupt outside the prompt (e.g. mid-pipeline) still ends the
    /// session cleanly with a success status. rustyline reports a Ctrl-C at
    /// the prompt itself as `ReadlineError::Interrupted`.
    fn install_interrupt_handler(&self) -> Result<(), FmError> {
        let console = self.console;
        let username = self.session.username().to_string();
        ctrlc::set_handler(move || {
            print_farewell(&console, &username);
            std::process::exit(0);
        })?;
        Ok(())
    }
}

fn print_farewell(console: &Console, username: &str) {
    console.info(&format!(
        "Thank you for using File Manager, {}, goodbye!",
        username
    ));
}

/// The starting-directory override gets the same readable-directory probe
/// `cd` applies, so the cursor starts out valid.
fn validated_start_dir(flags: &Flags) -> Result<Option<&str>, FmError> {
    match flags.get_value("dir") {
        Some(dir) => {
            fs::read_dir(dir)
                .map_err(|e| FmError::FlagError(format!("--dir {}: {}", dir, e)))?;
            Ok(Some(dir.as_str()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn flags_with_dir(dir: &str) -> Flags {
        let mut flags = Flags::new();
        flags
            .parse(&[format!("--dir={}", dir)])
            .expect("parse failed");
        flags
    }

    #[test]
    fn test_start_dir_accepts_existing_directory() {
        let dir = tempdir().unwrap();
        let flags = flags_with_dir(&dir.path().to_string_lossy());
        let validated = validated_start_dir(&flags).unwrap();
        assert_eq!(validated, dir.path().to_str());
    }

    #[test]
    fn test_start_dir_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("gone");
        let flags = flags_with_dir(&gone.to_string_lossy());
        let result = validated_start_dir(&flags);
        assert!(matches!(result, Err(FmError::FlagError(_))));
    }

    #[test]
    fn test_start_dir_rejects_plain_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"").unwrap();
        let flags = flags_with_dir(&file.to_string_lossy());
        let result = validated_start_dir(&flags);
        assert!(matches!(result, Err(FmError::FlagError(_))));
    }

    #[test]
    fn test_no_override_is_fine() {
        let flags = Flags::new();
        assert_eq!(validated_start_dir(&flags).unwrap(), None);
    }
}
