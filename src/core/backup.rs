use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{info, warning};
use flate2::Compression;
use flate2::write::GzEncoder;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database at `db_path` to `dest`, optionally compressing it
    /// (zip on Windows, tar.gz elsewhere). Returns the final backup path.
    pub fn backup(db_path: &str, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "Database not found: {}",
                src.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Ask before overwriting
        ensure_writable(dest, force)?;

        // 4️⃣ Copy database
        fs::copy(src, dest)?;
        info(format!("Database copied to {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = if cfg!(target_os = "windows") {
                compress_zip(dest)?
            } else {
                compress_tar_gz(dest)?
            };

            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Log in DB
        if let Ok(conn) = Connection::open(src)
            && let Err(e) = ttlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(final_path)
    }
}

fn entry_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup(format!("Invalid backup path: {}", path.display())))
}

/// Compress a backup using .zip
fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name(path)?, options)
        .map_err(|e| AppError::Backup(format!("zip start_file: {e}")))?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish()
        .map_err(|e| AppError::Backup(format!("zip finish: {e}")))?;

    Ok(zip_path)
}

/// Compress a backup using .tar.gz
fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let mut gz_name = path.as_os_str().to_owned();
    gz_name.push(".tar.gz");
    let gz_path = PathBuf::from(gz_name);

    let file = fs::File::create(&gz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut archive = tar::Builder::new(encoder);

    archive.append_path_with_name(path, entry_name(path)?)?;
    archive.into_inner()?.finish()?;

    Ok(gz_path)
}
