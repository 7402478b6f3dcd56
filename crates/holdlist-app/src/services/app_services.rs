// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application services — persisted list settings and writing finished lists.
//
// Settings live in a small JSON file in the data directory. Reading is
// forgiving: a missing, unreadable or corrupt file yields the defaults, and
// the file is only ever written when the user asks for it.

use std::path::{Path, PathBuf};

use holdlist_core::ListSettings;
use holdlist_core::error::Result;
use holdlist_core::types::Audience;
use tracing::{debug, info, warn};

use super::data_dir;

const SETTINGS_FILE: &str = "settings.json";

pub struct AppServices {
    data_dir: PathBuf,
}

impl AppServices {
    /// Services rooted in the platform data directory.
    pub fn init() -> Self {
        let dir = data_dir::data_dir();
        debug!(path = %dir.display(), "Using data directory");
        Self::with_data_dir(dir)
    }

    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// Stored settings, or the defaults when nothing usable is stored.
    pub fn load_settings(&self) -> ListSettings {
        let path = self.settings_path();
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                debug!(path = %path.display(), "No stored settings: {e}");
                return ListSettings::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "Ignoring corrupt settings file: {e}");
                ListSettings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &ListSettings) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(self.settings_path(), json)?;
        info!(path = %self.settings_path().display(), "Settings saved");
        Ok(())
    }
}

/// Write a rendered list as `<out_dir>/<audience> list.pdf`.
pub fn write_list(out_dir: &Path, audience: Audience, pdf: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{}.pdf", audience.file_stem()));
    std::fs::write(&path, pdf)?;
    info!(audience = %audience, path = %path.display(), bytes = pdf.len(), "List written");
    Ok(path)
}
