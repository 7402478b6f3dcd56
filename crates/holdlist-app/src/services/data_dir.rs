// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

const APP_DIR: &str = "holdlist";

/// The application data directory. Not created here; writers create it on
/// first save so that read-only runs leave no trace.
pub fn data_dir() -> PathBuf {
    data_root().join(APP_DIR)
}

fn data_root() -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME")
        && !xdg.is_empty()
    {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    // Last resort
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_named_for_the_app() {
        assert_eq!(data_dir().file_name().and_then(|n| n.to_str()), Some(APP_DIR));
    }
}
