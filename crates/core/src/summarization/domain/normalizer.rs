use regex::Regex;

/// Canonicalizes raw text before sentence splitting: newlines become spaces,
/// anything that is not a word character, whitespace, or a period is dropped,
/// and whitespace runs collapse to a single space.
pub struct TextNormalizer {
    newlines: Regex,
    specials: Regex,
    spaces: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            newlines: Regex::new(r"\n+").unwrap(),
            specials: Regex::new(r"[^\w\s.]").unwrap(),
            spaces: Regex::new(r"\s+").unwrap(),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let text = self.newlines.replace_all(text, " ");
        let text = self.specials.replace_all(&text, " ");
        let text = self.spaces.replace_all(&text, " ");
        text.trim().to_string()
    }
}
