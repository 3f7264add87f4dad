// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by models and catalog logic.

pub mod display;

/// Join labels with `", "` for display.
pub use display::join_labels;
