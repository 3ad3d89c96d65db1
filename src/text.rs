//! Small string helpers shared by the synthesis stages.

/// Collapse every run of whitespace, newlines included, to one space
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip trailing sentence punctuation so the text can sit inside a sentence
pub fn clause(text: &str) -> &str {
    text.trim().trim_end_matches(['.', '!', '?', ';', ':']).trim_end()
}

/// End the text with sentence punctuation, leaving its casing alone
pub fn terminate(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

/// Make sure the text reads as a complete sentence
pub fn sentence(text: &str) -> String {
    capitalize(&terminate(text))
}

/// Push only if an identical string is not already present
pub fn push_unique(items: &mut Vec<String>, candidate: String) -> bool {
    if candidate.trim().is_empty() || items.contains(&candidate) {
        return false;
    }
    items.push(candidate);
    true
}

/// Join a list as "a", "a and b" or "a, b and c"
pub fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

/// Lowercase ASCII slug: runs of non-alphanumerics collapse to one dash
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Hashtag built from the words of a phrase, e.g. "customer proof" -> "#CustomerProof"
pub fn hashtag(phrase: &str) -> Option<String> {
    let body: String = phrase
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();

    if body.is_empty() {
        None
    } else {
        Some(format!("#{body}"))
    }
}

/// Cut text at a word boundary so it fits within `max_chars`, adding an ellipsis
pub fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut out = String::new();
    for word in text.split_whitespace() {
        let extra = if out.is_empty() { 0 } else { 1 };
        if out.chars().count() + extra + word.chars().count() > max_chars {
            break;
        }
        if extra == 1 {
            out.push(' ');
        }
        out.push_str(word);
    }

    if out.is_empty() {
        out = text.chars().take(max_chars).collect();
    }
    format!("{}…", clause(&out))
}

/// First sentence of a paragraph
pub fn first_sentence(paragraph: &str) -> &str {
    let trimmed = paragraph.trim();
    let bytes = trimmed.as_bytes();
    for (i, c) in trimmed.char_indices() {
        if matches!(c, '.' | '!' | '?') && bytes.get(i + 1) == Some(&b' ') {
            return &trimmed[..=i];
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("  First idea.\n\nSecond\tidea.\n## Not "), "First idea. Second idea. ## Not");
        assert_eq!(single_line(" \n "), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("product leaders"), "Product leaders");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_sentence_adds_period_once() {
        assert_eq!(sentence("book a call"), "Book a call.");
        assert_eq!(sentence("Ready?"), "Ready?");
        assert_eq!(clause("Book a strategy lab."), "Book a strategy lab");
        assert_eq!(terminate("iPhone launch"), "iPhone launch.");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("LinkedIn"), "linkedin");
        assert_eq!(slugify("Twitter/X"), "twitter-x");
        assert_eq!(slugify("  Partner Newsletter! "), "partner-newsletter");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_hashtag() {
        assert_eq!(
            hashtag("go-to-market momentum").as_deref(),
            Some("#GoToMarketMomentum")
        );
        assert_eq!(hashtag(" -- "), None);
    }

    #[test]
    fn test_join_natural() {
        assert_eq!(join_natural(&["a"]), "a");
        assert_eq!(join_natural(&["a", "b"]), "a and b");
        assert_eq!(join_natural(&["a", "b", "c"]), "a, b and c");
    }

    #[test]
    fn test_truncate_words() {
        let text = "Show how Supernova Studio turns momentum into a story";
        let cut = truncate_words(text, 20);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 21);
        assert_eq!(truncate_words("short", 20), "short");
    }

    #[test]
    fn test_push_unique_and_first_sentence() {
        let mut items = vec!["a".to_string()];
        assert!(!push_unique(&mut items, "a".to_string()));
        assert!(!push_unique(&mut items, "  ".to_string()));
        assert!(push_unique(&mut items, "b".to_string()));
        assert_eq!(first_sentence("One. Two."), "One.");
        assert_eq!(first_sentence("Ready? Go. Now."), "Ready?");
        assert_eq!(first_sentence("Only one"), "Only one");
    }
}
