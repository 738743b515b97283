use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `[:punct:]` is the ASCII punctuation class: !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
    static ref PUNCT: Regex = Regex::new(r"[[:punct:]]+").expect("valid regex");
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Tokenize text by deleting ASCII punctuation, lowercasing, and splitting on whitespace.
///
/// Punctuation is removed rather than replaced, so `"don't"` becomes `"dont"`.
/// No stemming, stopword removal or length filtering is applied.
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped = PUNCT.replace_all(text, "");
    stripped
        .to_lowercase()
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The cat, the HAT!");
        assert_eq!(t, vec!["the", "cat", "the", "hat"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t ").is_empty());
        assert!(tokenize("?!...").is_empty());
    }

    #[test]
    fn ascii_information_separators_split() {
        assert_eq!(tokenize("a\x1cb\x1dc\x1ed\x1fe"), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(tokenize("x\u{85}y\u{3000}z"), vec!["x", "y", "z"]);
    }
}
