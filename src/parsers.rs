// src/parsers.rs

/// Accept a file-name suffix as given; only the empty string is rejected.
pub fn parse_suffix(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("suffix must not be empty".to_string());
    }
    Ok(s.to_string())
}
