use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(pool: &mut DbPool, cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination needs explicit confirmation
        if dest.exists()
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                dest.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(());
        }

        // 4️⃣ Plain copy or zip archive
        if compress {
            let file = File::create(dest)?;
            let mut zip = ZipWriter::new(file);

            let options: FileOptions<'_, ()> =
                FileOptions::default().compression_method(CompressionMethod::Deflated);

            zip.start_file("database.sqlite", options)
                .map_err(|e| std::io::Error::other(format!("Backup failed (start_file): {e}")))?;

            let db_content = fs::read(src)?;
            zip.write_all(&db_content)?;

            zip.finish()
                .map_err(|e| std::io::Error::other(format!("Backup failed (finish): {e}")))?;
        } else {
            fs::copy(src, dest)?;
        }

        ttlog(
            &pool.conn,
            "backup",
            &dest.display().to_string(),
            if compress {
                "Compressed backup created"
            } else {
                "Backup copy created"
            },
        )?;

        success(format!("📦 Backup created: {}", dest.display()));
        Ok(())
    }
}
