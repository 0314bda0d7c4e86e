use std::{fs, path::PathBuf};

use anyhow::anyhow;

/// Per-user cache directory, used only as the home of the log file.
#[derive(Debug, Clone)]
pub struct DataDir {
    data_dir: PathBuf,
}

impl DataDir {
    /// Resolves `~/.cache/holler`, creating it if missing.
    pub fn new() -> anyhow::Result<Self> {
        let home_dir = dirs::home_dir();
        if let Some(home) = home_dir {
            let data_dir = home.join(".cache").join("holler");

            if !data_dir.exists() {
                fs::create_dir_all(&data_dir)?;
            }

            Ok(Self { data_dir })
        } else {
            Err(anyhow!("Could not create data directory."))
        }
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }
}
