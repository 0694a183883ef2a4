use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Overwrite `target` with `contents`.
///
/// With `atomic` set, the bytes go to a sibling temporary file first and are
/// renamed over the target, so a failed write never leaves a half-written
/// translation behind. The previous contents are not kept.
pub fn replace_file(target: &Path, contents: &[u8], atomic: bool) -> io::Result<()> {
    if !atomic {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(target)?;
        file.write_all(contents)?;
        return Ok(());
    }

    let temp_path = build_temp_path(target);
    if let Err(err) = write_synced(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    #[cfg(target_os = "windows")]
    {
        if let Err(err) = fs::rename(&temp_path, target) {
            if err.kind() == io::ErrorKind::AlreadyExists {
                fs::remove_file(target)?;
                fs::rename(&temp_path, target)?;
            } else {
                let _ = fs::remove_file(&temp_path);
                return Err(err);
            }
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        if let Err(err) = fs::rename(&temp_path, target) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }
    }

    Ok(())
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn build_temp_path(target: &Path) -> PathBuf {
    let mut temp = target.to_path_buf();
    let suffix = format!(".__tmp__pid_{}", std::process::id());
    match temp.file_name() {
        Some(name) => {
            let mut os_string = name.to_os_string();
            os_string.push(suffix);
            temp.set_file_name(os_string);
        }
        None => {
            temp.push(format!("temp_{}", std::process::id()));
        }
    }
    temp
}
