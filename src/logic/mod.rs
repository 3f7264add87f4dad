// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Catalog logic built on top of the domain models.

pub mod catalog;
