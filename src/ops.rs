//! Terminal operations applied to individual targets.

use encoding_rs::WINDOWS_1252;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single target's failure. Expected per-file conditions (permissions,
/// undecodable content, a path that vanished between discovery and apply)
/// are values collected by the apply loop, never panics.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path}: not decodable as windows-1252")]
    Undecodable { path: PathBuf },
}

impl OpError {
    fn io(path: &Path, source: io::Error) -> Self {
        OpError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Remove a target: regular files with `remove_file`, directories with
/// `remove_dir_all`.
///
/// When a directory removal fails with a permission error, owner write
/// permission is granted over the whole tree and the removal retried once.
/// Any other failure is the operation's failure.
pub fn delete(path: &Path) -> Result<(), OpError> {
    let metadata = fs::symlink_metadata(path).map_err(|err| OpError::io(path, err))?;

    if metadata.is_dir() {
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                grant_owner_write(path);
                fs::remove_dir_all(path).map_err(|err| OpError::io(path, err))
            }
            Err(err) => Err(OpError::io(path, err)),
        }
    } else {
        fs::remove_file(path).map_err(|err| OpError::io(path, err))
    }
}

/// Best-effort: make `path` and everything below it writable by the owner so
/// a retried removal can proceed. Errors here are ignored; the retry itself
/// reports the definitive failure.
fn grant_owner_write(path: &Path) {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        let mut perms = metadata.permissions();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            perms.set_mode(perms.mode() | 0o200);
        }
        #[cfg(not(unix))]
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        let _ = fs::set_permissions(path, perms);

        if metadata.is_dir() {
            if let Ok(entries) = fs::read_dir(path) {
                for entry in entries.flatten() {
                    grant_owner_write(&entry.path());
                }
            }
        }
    }
}

/// Rewrite a file with Unix line endings: every line loses its trailing
/// whitespace (carriage returns included) and gains a single `\n`.
///
/// The file is decoded as windows-1252 and rewritten as UTF-8 regardless of
/// its original encoding, mirroring the tool this one replaces. That means an
/// already-UTF-8 file with multi-byte sequences gets transcoded through
/// windows-1252, and bytes undefined in that codepage fail the operation.
/// The original content is overwritten in place, no backup.
pub fn normalize_endings(path: &Path) -> Result<(), OpError> {
    let bytes = fs::read(path).map_err(|err| OpError::io(path, err))?;

    // encoding_rs follows the WHATWG mapping, where every byte decodes.
    // The strict codec this mirrors leaves these five bytes undefined, so
    // reject them up front instead of silently rewriting the file.
    const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];
    if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
        return Err(OpError::Undecodable {
            path: path.to_path_buf(),
        });
    }

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&bytes);

    let mut cleaned = String::with_capacity(text.len());
    for line in text.lines() {
        cleaned.push_str(line.trim_end());
        cleaned.push('\n');
    }

    fs::write(path, cleaned).map_err(|err| OpError::io(path, err))
}
