// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Presentation helpers for lists of labels.

/// Join labels for display, separated by `", "`.
///
/// An empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use homeoffice_library::utils::join_labels;
///
/// assert_eq!(join_labels(["Hardcover", "Paperback"]), "Hardcover, Paperback");
/// ```
pub fn join_labels<I, S>(labels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(label.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::join_labels;

    #[test]
    fn join_labels_separates_with_comma_space() {
        assert_eq!(join_labels(["a", "b", "c"]), "a, b, c");
    }

    #[test]
    fn join_labels_handles_empty_and_single_inputs() {
        assert_eq!(join_labels(Vec::<String>::new()), "");
        assert_eq!(join_labels(vec!["Ebook".to_string()]), "Ebook");
    }

    // Empty labels still take a slot so positions stay recognizable.
    #[test]
    fn join_labels_keeps_empty_labels() {
        assert_eq!(join_labels(["Ebook", "", "Audiobook"]), "Ebook, , Audiobook");
    }
}
