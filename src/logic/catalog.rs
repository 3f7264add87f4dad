// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Edition type catalog: the ordered list of edition types offered to the
//! library views, with JSON import/export.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::edition_type::EditionType;
use crate::utils::join_labels;

/// Ordered edition types as served to the front-end.
///
/// Order follows insertion (or the payload order when parsed). Duplicate
/// names are kept; lookups return the first match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditionCatalog {
    items: Vec<EditionType>,
}

impl EditionCatalog {
    pub fn new(items: Vec<EditionType>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[EditionType] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<EditionType> {
        self.items
    }

    pub fn push(&mut self, edition: EditionType) {
        self.items.push(edition);
    }

    /// First edition type whose name matches exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&EditionType> {
        self.items.iter().find(|e| e.name() == name)
    }

    /// Presentation label for the edition type called `name`.
    pub fn view_name_for(&self, name: &str) -> Option<&str> {
        self.find(name).map(EditionType::view_name)
    }

    /// All view names joined with `", "`, in catalog order.
    pub fn display_view_names(&self) -> String {
        join_labels(self.items.iter().map(EditionType::view_name))
    }

    /// Parse a JSON array of `{"name", "viewName"}` objects.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not valid JSON or not an array of
    /// edition type objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use homeoffice_library::logic::catalog::EditionCatalog;
    ///
    /// let json = r#"[{"name":"Hardcover","viewName":"Twarda okładka"}]"#;
    /// let catalog = EditionCatalog::from_json(json).unwrap();
    /// assert_eq!(catalog.view_name_for("Hardcover"), Some("Twarda okładka"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<EditionType> =
            serde_json::from_str(json).context("Failed to parse edition types JSON")?;
        Ok(Self { items })
    }

    /// Serialize as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.items).context("Failed to serialize edition types")
    }

    /// Read a catalog from a JSON file.
    ///
    /// ```rust,ignore
    /// let catalog = EditionCatalog::load(Path::new("edition_types.json"))?;
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read edition types file: {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Invalid edition types file: {:?}", path))
    }

    /// Write the catalog as JSON, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write edition types file: {:?}", path))
    }
}

impl FromIterator<EditionType> for EditionCatalog {
    fn from_iter<T: IntoIterator<Item = EditionType>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EditionCatalog {
    type Item = &'a EditionType;
    type IntoIter = std::slice::Iter<'a, EditionType>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
