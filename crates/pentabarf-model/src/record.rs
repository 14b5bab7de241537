//! Flat input records.

/// Source keys every record must supply, in lookup order.
pub const RECORD_FIELDS: [&str; 10] = [
    "uid", "linea", "orario", "durata", "titolo", "lingua", "abstract", "autore", "giorno", "data",
];

/// One conference talk as it appears in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub uid: String,
    /// Room selector; `"1"` is the first room, anything else the second.
    pub linea: String,
    /// Start time, `HH:MM:SS`.
    pub orario: String,
    /// Duration in minutes, kept as text.
    pub durata: String,
    pub titolo: String,
    pub lingua: String,
    /// Source key `abstract`.
    pub abstract_text: String,
    pub autore: String,
    /// Day key.
    pub giorno: String,
    /// ISO date or datetime.
    pub data: String,
}

impl EventRecord {
    /// Date part of `data` (its first ten characters).
    pub fn date_prefix(&self) -> &str {
        char_prefix(&self.data, 10)
    }
}

/// Returns at most the first `count` characters of `value`.
pub fn char_prefix(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Returns `value` without its first character, or `None` when it is empty.
pub fn strip_first_char(value: &str) -> Option<&str> {
    let mut chars = value.chars();
    chars.next()?;
    Some(chars.as_str())
}
