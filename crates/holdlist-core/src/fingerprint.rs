// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run fingerprints — SHA-256 over the report text and layout settings, used to
// tell whether a cached sort still matches what the user is looking at.

use sha2::{Digest, Sha256};

use crate::config::LayoutConfig;
use crate::error::{HoldlistError, Result};

/// Fingerprint of one sort run: the report text plus every layout setting.
///
/// The two parts are length-prefixed so that moving bytes between them always
/// changes the digest.
pub fn run_fingerprint(report: &str, layout: &LayoutConfig) -> Result<String> {
    let layout_json = serde_json::to_vec(layout)?;
    let mut hasher = Sha256::new();
    hasher.update((report.len() as u64).to_le_bytes());
    hasher.update(report.as_bytes());
    hasher.update((layout_json.len() as u64).to_le_bytes());
    hasher.update(&layout_json);
    Ok(hex::encode(hasher.finalize()))
}

/// Check that a cached fingerprint still matches the current inputs.
pub fn verify_fingerprint(report: &str, layout: &LayoutConfig, expected: &str) -> Result<()> {
    if run_fingerprint(report, layout)? == expected {
        Ok(())
    } else {
        Err(HoldlistError::StaleResult)
    }
}
