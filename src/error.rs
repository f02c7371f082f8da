#[derive(Debug)]
pub enum FmError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    FlagError(String),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for FmError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        FmError::Readline(err)
    }
}

impl From<std::io::Error> for FmError {
    fn from(err: std::io::Error) -> Self {
        FmError::Io(err)
    }
}

impl From<ctrlc::Error> for FmError {
    fn from(err: ctrlc::Error) -> Self {
        FmError::CtrlC(err.to_string())
    }
}

impl std::fmt::Display for FmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FmError::Readline(e) => write!(f, "Readline error: {}", e),
            FmError::Io(e) => write!(f, "IO error: {}", e),
            FmError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            FmError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for FmError {}
