//! Where exported cards end up.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use super::ExportArtifact;
use crate::error::CardResult;

/// Receives a finished artifact and hands it to the user.
pub trait ArtifactSink: Send + Sync {
    /// Returns the saved path, or `None` if the user declined the download.
    fn deliver(&self, artifact: &ExportArtifact) -> CardResult<Option<PathBuf>>;
}

/// Saves artifacts straight into a directory, like a browser download.
///
/// Existing files are never replaced: a taken name gets a ` (1)`, ` (2)`, ...
/// suffix before the extension.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&self, artifact: &ExportArtifact) -> CardResult<Option<PathBuf>> {
        fs::create_dir_all(&self.dir)?;
        let target = reserve_free_path(&self.dir, &sanitize_file_name(&artifact.file_name))?;
        if let Err(e) = write_atomically(&target, &artifact.png) {
            let _ = fs::remove_file(&target);
            return Err(e);
        }
        Ok(Some(target))
    }
}

/// `name`, or `stem (n).ext` for the first `n` that is free.
fn numbered_name(name: &str, n: u32) -> String {
    if n == 0 {
        return name.to_string();
    }
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{} ({}){}", &name[..dot], n, &name[dot..]),
        _ => format!("{} ({})", name, n),
    }
}

/// Claim the first unused name in `dir` by creating an empty file there.
///
/// Creation is exclusive, so two exports racing for the same name end up in
/// different files.
fn reserve_free_path(dir: &Path, name: &str) -> io::Result<PathBuf> {
    for n in 0.. {
        let candidate = dir.join(numbered_name(name, n));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(_) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(io::ErrorKind::AlreadyExists, "no free file name"))
}

/// Replace characters that cannot appear in a file name.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Write `bytes` to a sibling `.part` file, then rename over `target`.
///
/// Either the complete file appears at `target` or nothing does.
pub fn write_atomically(target: &Path, bytes: &[u8]) -> CardResult<()> {
    let mut part = target.as_os_str().to_owned();
    part.push(".part");
    let part = PathBuf::from(part);

    let written = fs::write(&part, bytes).and_then(|()| fs::rename(&part, target));
    if let Err(e) = written {
        let _ = fs::remove_file(&part);
        return Err(e.into());
    }
    Ok(())
}
