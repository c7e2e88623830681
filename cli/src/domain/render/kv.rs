//! Primitive formatters shared by every renderer.

use std::fmt::Display;

/// Render `key=value` pairs joined by `delimiter`, ordered by key.
///
/// Input order is irrelevant: any map or iterator of pairs works, and the
/// value domain is anything `Display` (strings, integers, sysctl values).
/// An empty input yields an empty string with no trailing delimiter.
#[must_use]
pub fn sorted_key_value_pairs<I, K, V>(pairs: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut entries: Vec<(K, V)> = pairs.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));
    entries
        .iter()
        .map(|(k, v)| format!("{}={v}", k.as_ref()))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Join a string list with `delimiter`.
#[must_use]
pub fn stringified_array<S: AsRef<str>>(items: &[S], delimiter: &str) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Value behind an optional reference, or the type's zero value when absent.
#[must_use]
pub fn deref<T: Clone + Default>(value: Option<&T>) -> T {
    value.cloned().unwrap_or_default()
}
