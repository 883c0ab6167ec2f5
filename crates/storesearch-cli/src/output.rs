//! Writing the collected records to disk.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use storesearch_core::StoreRecord;

/// Export file name for a query: `<store_name>_in_<city>.json`.
pub(crate) fn output_file_name(store_name: &str, city_name: &str) -> String {
    format!("{store_name}_in_{city_name}.json")
}

/// Serializes `stores` as one compact JSON array and writes it to
/// `dir/file_name`, replacing any previous export. On Unix the file is
/// created with mode `0644`.
///
/// The bytes go to `<file_name>.tmp` first and are renamed into place after
/// `sync_all`. If writing or renaming fails the temp file is removed, so a
/// failed export leaves nothing behind.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be created,
/// written, or renamed.
pub(crate) fn write_output(
    dir: &Path,
    file_name: &str,
    stores: &[StoreRecord],
) -> anyhow::Result<PathBuf> {
    let json = serde_json::to_vec(stores).context("failed to serialize store records")?;

    let path = dir.join(file_name);
    let tmp_path = dir.join(format!("{file_name}.tmp"));

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options
        .open(&tmp_path)
        .with_context(|| format!("failed to create {}", tmp_path.display()))?;
    let written = file
        .write_all(&json)
        .and_then(|()| file.sync_all())
        .with_context(|| format!("failed to write {}", tmp_path.display()));
    drop(file);

    let moved = written.and_then(|()| {
        fs::rename(&tmp_path, &path).with_context(|| {
            format!(
                "failed to move {} to {}",
                tmp_path.display(),
                path.display()
            )
        })
    });
    if let Err(err) = moved {
        discard_temp(&tmp_path);
        return Err(err);
    }

    Ok(path)
}

fn discard_temp(tmp_path: &Path) {
    if let Err(err) = fs::remove_file(tmp_path) {
        if err.kind() != io::ErrorKind::NotFound {
            tracing::warn!(path = %tmp_path.display(), error = %err, "failed to remove temp file");
        }
    }
}
