use std::path::PathBuf;

/// Read-only host introspection backing the `os` command.

#[cfg(windows)]
pub const EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const EOL: &str = "\n";

#[derive(Debug, Clone)]
pub struct CpuInfo {
    pub model: String,
    pub mhz: String,
}

impl std::fmt::Display for CpuInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mhz.is_empty() {
            write!(f, "{}", self.model)
        } else {
            write!(f, "{} @ {} MHz", self.model, self.mhz)
        }
    }
}

pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

pub fn username() -> String {
    whoami::username()
}

pub fn architecture() -> String {
    whoami::arch().to_string()
}

/// CPU model and clock per logical core, from /proc/cpuinfo.
#[cfg(target_os = "linux")]
pub fn cpus() -> Vec<CpuInfo> {
    let raw = match std::fs::read_to_string("/proc/cpuinfo") {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };

    let mut out = Vec::new();
    let mut model: Option<String> = None;
    let mut mhz: Option<String> = None;
    for line in raw.lines() {
        if line.trim().is_empty() {
            if let Some(m) = model.take() {
                out.push(CpuInfo {
                    model: m,
                    mhz: mhz.take().unwrap_or_default(),
                });
            }
            mhz = None;
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            match key.trim() {
                "model name" => model = Some(value.trim().to_string()),
                "cpu MHz" => mhz = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }
    if let Some(m) = model.take() {
        out.push(CpuInfo {
            model: m,
            mhz: mhz.take().unwrap_or_default(),
        });
    }
    out
}

/// Without /proc there is no portable model/clock source; report the
/// architecture once per logical core.
#[cfg(not(target_os = "linux"))]
pub fn cpus() -> Vec<CpuInfo> {
    let count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (0..count)
        .map(|_| CpuInfo {
            model: architecture(),
            mhz: String::new(),
        })
        .collect()
}
