// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

pub fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// "Club Atlético Vélez" → "Club_Atlético_Vélez" for output filenames.
pub fn filename_stem(name: &str) -> String {
    normalize_ws(name).replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \t b\n c  "), "a b c");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn filename_stem_underscores_spaces() {
        assert_eq!(filename_stem("River Plate"), "River_Plate");
        assert_eq!(filename_stem("  Boca   Juniors "), "Boca_Juniors");
    }
}
