//! Timestamped text export of encounter logs

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::core::Result;

/// `yyyy-MM-dd_HH-mm-ss`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `<prefix>_<yyyy-MM-dd_HH-mm-ss>.txt`
pub fn export_file_name(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.txt", prefix, at.format(TIMESTAMP_FORMAT))
}

/// Writes log lines to timestamped files in one directory
#[derive(Debug, Clone)]
pub struct LogExporter {
    dir: PathBuf,
}

impl LogExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one line per entry to `<dir>/<prefix>_<now>.txt`
    ///
    /// Never overwrites: a second log in the same second gets `_2`, `_3`...
    pub fn write<'a>(
        &self,
        prefix: &str,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<PathBuf> {
        self.write_at(prefix, Local::now().naive_local(), lines)
    }

    fn write_at<'a>(
        &self,
        prefix: &str,
        at: NaiveDateTime,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<PathBuf> {
        let base = export_file_name(prefix, at);
        let stem = base.trim_end_matches(".txt");

        let mut attempt = 1u32;
        let (path, file) = loop {
            let path = match attempt {
                1 => self.dir.join(&base),
                n => self.dir.join(format!("{}_{}.txt", stem, n)),
            };
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => break (path, file),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(err) => return Err(err.into()),
            }
        };

        let mut out = BufWriter::new(file);
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        tracing::info!(path = %path.display(), "Exported log");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_file_name_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 2))
            .unwrap();
        assert_eq!(
            export_file_name("FightLog", at),
            "FightLog_2024-03-07_09-05-02.txt"
        );
    }

    #[test]
    fn test_write_lines() {
        let dir = std::env::temp_dir().join(format!("skirmish-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let exporter = LogExporter::new(&dir);

        let path = exporter.write("TeamFight", ["one", "two"]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "one\ntwo\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_same_second_exports_do_not_overwrite() {
        let dir = std::env::temp_dir().join(format!("skirmish-collide-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let exporter = LogExporter::new(&dir);
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 2))
            .unwrap();

        let first = exporter.write_at("FightLog", at, ["first"]).unwrap();
        let second = exporter.write_at("FightLog", at, ["second"]).unwrap();
        let third = exporter.write_at("FightLog", at, ["third"]).unwrap();

        assert!(first.ends_with("FightLog_2024-03-07_09-05-02.txt"));
        assert!(second.ends_with("FightLog_2024-03-07_09-05-02_2.txt"));
        assert!(third.ends_with("FightLog_2024-03-07_09-05-02_3.txt"));
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "first\n");
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let exporter = LogExporter::new("/definitely/not/a/real/dir");
        assert!(exporter.write("FightLog", ["x"]).is_err());
    }
}
