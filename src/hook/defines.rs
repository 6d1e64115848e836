use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One preprocessor definition. Values are always integers; the downstream
/// firmware consumes them as compile-time constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: String,
    pub value: i64,
}

impl Define {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Append-only capability on the build configuration artifact. The hook never
/// reads or validates a sink's prior contents.
pub trait DefineSink {
    fn append(&mut self, defines: &[Define]) -> Result<()>;
}

/// Writes a generated C header the firmware includes directly. The header is
/// regenerated wholesale each run and written atomically so a killed build
/// never leaves a half-written include.
#[derive(Debug)]
pub struct HeaderSink {
    path: PathBuf,
}

impl HeaderSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DefineSink for HeaderSink {
    fn append(&mut self, defines: &[Define]) -> Result<()> {
        write_atomic(&self.path, &render_header(defines))
            .with_context(|| format!("failed to write header {}", self.path.display()))
    }
}

/// Appends one line of `-DNAME=VALUE` tokens to a flags file the orchestrator
/// splices into the compiler argv. Prior lines are left untouched.
#[derive(Debug)]
pub struct FlagSink {
    path: PathBuf,
}

impl FlagSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DefineSink for FlagSink {
    fn append(&mut self, defines: &[Define]) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open flags file {}", self.path.display()))?;
        writeln!(file, "{}", render_flags(defines))
            .with_context(|| format!("failed to append to {}", self.path.display()))
    }
}

pub fn render_header(defines: &[Define]) -> String {
    let mut out = String::new();
    out.push_str("// Generated by counter-inject. Do not edit.\n");
    out.push_str("#ifndef COUNTER_INJECT_DEFINES_H\n");
    out.push_str("#define COUNTER_INJECT_DEFINES_H\n\n");
    for define in defines {
        out.push_str(&format!("#define {} {}\n", define.name, define.value));
    }
    out.push_str("\n#endif\n");
    out
}

pub fn render_flags(defines: &[Define]) -> String {
    defines
        .iter()
        .map(|define| format!("-D{}={}", define.name, define.value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path)?;
    Ok(())
}

/// Collects appended defines in memory; unit-test stand-in for the real sinks.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub defines: Vec<Define>,
}

#[cfg(test)]
impl DefineSink for MemorySink {
    fn append(&mut self, defines: &[Define]) -> Result<()> {
        self.defines.extend_from_slice(defines);
        Ok(())
    }
}
