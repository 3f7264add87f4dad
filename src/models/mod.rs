// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: plain data types exchanged between the service and presentation layers.

pub mod edition_type;

pub use edition_type::EditionType;
