use crate::error::FmError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "username".to_string(),
            Flag {
                short: "-u".to_string(),
                long: "--username".to_string(),
                description: "Display name for the session (default: anonymous)".to_string(),
                takes_value: true,
                value: None,
            },
        );

        flags.insert(
            "dir".to_string(),
            Flag {
                short: "-C".to_string(),
                long: "--dir".to_string(),
                description: "Starting directory (default: home directory)".to_string(),
                takes_value: true,
                value: None,
            },
        );

        Flags { flags }
    }

    /// Accepts both `--flag value` and `--flag=value` forms. Unrecognized
    /// arguments are ignored, matching how the startup argv is scanned.
    pub fn parse(&mut self, args: &[String]) -> Result<(), FmError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            let (name, inline_value) = match arg.split_once('=') {
                Some((n, v)) => (n, Some(v.to_string())),
                None => (arg.as_str(), None),
            };

            for flag in self.flags.values_mut() {
                if name != flag.short && name != flag.long {
                    continue;
                }
                if !flag.takes_value {
                    flag.value = Some("true".to_string());
                } else if let Some(v) = inline_value.clone() {
                    flag.value = Some(v);
                } else if i + 1 < args.len() {
                    flag.value = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    return Err(FmError::FlagError(format!(
                        "Flag {} requires a value",
                        arg
                    )));
                }
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: fman [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
