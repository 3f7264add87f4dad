// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Edition type records for the home-office library: the value object itself,
//! an ordered catalog with JSON import/export, and display helpers.

pub mod logic;
pub mod models;
pub mod utils;

pub use logic::catalog::EditionCatalog;
pub use models::EditionType;
