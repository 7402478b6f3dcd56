// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — drawing surfaces and the printpdf-backed writer.

pub mod surface;
pub mod writer;

pub use surface::{DrawSurface, render_layout};
pub use writer::{PdfSurface, PdfWriter};
