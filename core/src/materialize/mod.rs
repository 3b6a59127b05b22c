use crate::determinism::digest::sha256_hex;
use crate::determinism::json_pretty;
use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively copy every file under `source_dir` into `dest_dir`, creating
/// directories as needed and overwriting existing files. Returns the number
/// of files copied.
pub fn copy_tree(source_dir: &Path, dest_dir: &Path) -> CoreResult<usize> {
    if !source_dir.is_dir() {
        return Err(CoreError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("asset source directory missing: {}", source_dir.display()),
        )));
    }
    fs::create_dir_all(dest_dir)?;

    let mut copied = 0;
    for e in WalkDir::new(source_dir).sort_by_file_name() {
        let e = e?;
        let p = e.path();
        if p == source_dir {
            continue;
        }
        let rel = p.strip_prefix(source_dir).map_err(|_| {
            CoreError::InvalidInput(format!("walked outside source dir: {}", p.display()))
        })?;
        let target = dest_dir.join(rel);
        if e.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if p.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(p, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Serialize `value` as pretty JSON and write it to `path`.
///
/// Bytes go to a sibling temp file first and are renamed over `path`, so a
/// failed write never leaves a truncated manifest behind. Returns the SHA-256
/// of the written bytes.
pub fn write_manifest<T: Serialize>(path: &Path, value: &T) -> CoreResult<String> {
    let bytes = json_pretty::to_pretty_bytes(value)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = temp_sibling(path);
    let written = (|| -> CoreResult<()> {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(&bytes)?;
        f.sync_all()?;
        fs::rename(&tmp, path)?;
        Ok(())
    })();
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(sha256_hex(&bytes))
}

/// Delete the upstream checkout. A missing directory is not an error.
pub fn remove_checkout(dir: &Path) -> CoreResult<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
