//! Display names for raw identifiers.

/// Placeholder shown for entries with no identity.
pub const UNKNOWN_LABEL: &str = "Неизвестно";

/// Turn a raw identifier into a display label.
///
/// Strips everything up to the last `:` and the last `/`, splits on `_`, and
/// upper-cases the first character of each word:
/// `infinity_cave:refs/forest/rare_gear` becomes `Rare Gear`.
/// Empty input, or an empty final segment, yields [`UNKNOWN_LABEL`].
pub fn display_name(raw: &str) -> String {
    display_name_or(Some(raw), UNKNOWN_LABEL)
}

/// Like [`display_name`], with a caller-chosen placeholder for absent input
/// or an empty final segment.
pub fn display_name_or(raw: Option<&str>, placeholder: &str) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return placeholder.to_string();
    };

    let tail = raw.rsplit(':').next().unwrap_or(raw);
    let tail = tail.rsplit('/').next().unwrap_or(tail);
    if tail.is_empty() {
        return placeholder.to_string();
    }

    tail.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_item() {
        assert_eq!(display_name("minecraft:rotten_flesh"), "Rotten Flesh");
    }

    #[test]
    fn reference_path() {
        assert_eq!(display_name("infinity_cave:refs/forest/rare_gear"), "Rare Gear");
        assert_eq!(display_name("infinity_cave/loot_table/refs/epic_gear"), "Epic Gear");
    }

    #[test]
    fn bare_word() {
        assert_eq!(display_name("common"), "Common");
        assert_eq!(display_name("dark_forest"), "Dark Forest");
    }

    #[test]
    fn empty_input() {
        assert_eq!(display_name(""), UNKNOWN_LABEL);
        assert_eq!(display_name_or(None, "Nothing"), "Nothing");
        assert_eq!(display_name_or(Some("ns:refs/"), "Nothing"), "Nothing");
    }

    #[test]
    fn doubled_underscore_keeps_empty_word() {
        assert_eq!(display_name("a__b"), "A  B");
    }

    #[test]
    fn non_ascii() {
        assert_eq!(display_name("ns:ёлка_зелёная"), "Ёлка Зелёная");
    }
}
