/// Canonical owner name: whitespace collapsed, every token's tail lowercased.
///
/// The first character of each token is left untouched, so `"JOHN SMITH"`
/// becomes `"John Smith"` while `"john smith"` stays as it is.
pub fn normalize_owner_name(raw: &str) -> Option<String> {
    let tokens: Vec<String> = raw
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(token.len());
                    out.push(first);
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect();

    if tokens.is_empty() {
        return None;
    }
    Some(tokens.join(" "))
}

/// Lowercased whitespace-delimited tokens, as used by keyword screening.
pub fn name_tokens(name: &str) -> impl Iterator<Item = String> + '_ {
    name.split_whitespace().map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::{name_tokens, normalize_owner_name};

    #[test]
    fn normalize_owner_name_collapses_whitespace() {
        let value = normalize_owner_name("  JOHN   SMITH ").unwrap();
        assert_eq!(value, "John Smith");
    }

    #[test]
    fn normalize_owner_name_keeps_leading_character() {
        assert_eq!(normalize_owner_name("john SMITH").unwrap(), "john Smith");
        assert_eq!(normalize_owner_name("J. SMITH").unwrap(), "J. Smith");
    }

    #[test]
    fn normalize_owner_name_rejects_blank() {
        assert!(normalize_owner_name("").is_none());
        assert!(normalize_owner_name(" \t ").is_none());
    }

    #[test]
    fn name_tokens_lowercase_each_word() {
        let tokens: Vec<String> = name_tokens("Emirates Bank  LLC").collect();
        assert_eq!(tokens, vec!["emirates", "bank", "llc"]);
    }
}
