/// Splits cleaned text into sentences at periods followed by whitespace and
/// an ASCII uppercase letter, guarding a fixed abbreviation list against
/// false splits.
///
/// The heuristic is deliberately lossy: a sentence not followed by
/// "whitespace + uppercase" (the last sentence of a text, lowercase
/// continuations) is not split off, and abbreviations outside the guard list
/// do mis-split. Fragments are trimmed and get a trailing period restored.
pub struct SentenceSplitter {
    abbreviations: Vec<String>,
}

impl SentenceSplitter {
    pub fn new(abbreviations: Vec<String>) -> Self {
        Self { abbreviations }
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        let protected = self.protect(text);

        split_at_boundaries(&protected)
            .into_iter()
            .map(|fragment| {
                let restored = self.restore(&fragment);
                let trimmed = restored.trim();
                if trimmed.ends_with('.') {
                    trimmed.to_string()
                } else {
                    format!("{trimmed}.")
                }
            })
            .collect()
    }

    fn protect(&self, text: &str) -> String {
        let mut out = text.to_string();
        for abbr in &self.abbreviations {
            out = out.replace(abbr.as_str(), &placeholder(abbr));
        }
        out
    }

    fn restore(&self, text: &str) -> String {
        let mut out = text.to_string();
        for abbr in &self.abbreviations {
            out = out.replace(&placeholder(abbr), abbr);
        }
        out
    }
}

fn placeholder(abbr: &str) -> String {
    format!("{}_DOT_", abbr.trim_end_matches('.'))
}

/// Split at every period followed by whitespace and then an ASCII uppercase
/// letter. The period is consumed; the whitespace stays with the following
/// fragment (callers trim).
fn split_at_boundaries(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut fragments = Vec::new();
    let mut start = 0;

    for (i, &(pos, ch)) in chars.iter().enumerate() {
        if ch != '.' {
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && chars[j].1.is_whitespace() {
            j += 1;
        }
        if j > i + 1 && j < chars.len() && chars[j].1.is_ascii_uppercase() {
            fragments.push(text[start..pos].to_string());
            start = pos + 1;
        }
    }

    fragments.push(text[start..].to_string());
    fragments
}
