//! Name normalization for display

/// Suffixes that already mark a name as honorific
const HONORIFIC_SUFFIXES: [&str; 6] = ["さん", "様", "くん", "君", "ちゃん", "氏"];

/// Suffix appended when a name carries none
pub const DEFAULT_HONORIFIC: &str = "さん";

/// Trim and collapse runs of whitespace into single spaces
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized name with an honorific suffix, unless it already has one
pub fn with_honorific(raw: &str) -> String {
    let name = normalize_name(raw);
    if name.is_empty() {
        return name;
    }
    if HONORIFIC_SUFFIXES.iter().any(|sfx| name.ends_with(sfx)) {
        return name;
    }
    format!("{name}{DEFAULT_HONORIFIC}")
}
