//! Slug and nickname derivation
//!
//! Items derive a slug from their title (`"About Us"` -> `"about-us"`) and a
//! camel-cased nickname from the slug (`"about-us"` -> `"aboutUs"`). The
//! nickname is the key used by name-based lookups.

/// Derive a URL-friendly slug from a title.
///
/// Underscores and whitespace become dashes, `@` becomes `at`, any other
/// punctuation is dropped, letters are lowercased and dash runs collapse.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_dash = true;

    let push_dash = |out: &mut String, last_dash: &mut bool| {
        if !*last_dash {
            out.push('-');
            *last_dash = true;
        }
    };

    for ch in title.chars() {
        if ch == '@' {
            push_dash(&mut out, &mut last_dash);
            out.push_str("at");
            last_dash = false;
            push_dash(&mut out, &mut last_dash);
        } else if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_dash = false;
        } else if ch == '-' || ch == '_' || ch.is_whitespace() {
            push_dash(&mut out, &mut last_dash);
        }
    }

    out.trim_matches('-').to_string()
}

/// Camel-case a slug: words split on dashes, underscores and whitespace,
/// each capitalized, joined, then the first character lowercased.
pub fn camel_case(value: &str) -> String {
    let studly: String = value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();

    let mut chars = studly.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("About Us"), "about-us");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Tom's Page!"), "toms-page");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Hello __ World -- "), "hello-world");
    }

    #[test]
    fn slugify_at_sign() {
        assert_eq!(slugify("mail@home"), "mail-at-home");
    }

    #[test]
    fn slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Über Uns"), "über-uns");
    }

    #[test]
    fn slugify_markup_title() {
        assert_eq!(slugify(r#"<i class="fa"></i> Home"#), "i-classfai-home");
    }

    #[test]
    fn camel_case_slug() {
        assert_eq!(camel_case("about-us"), "aboutUs");
        assert_eq!(camel_case("home"), "home");
        assert_eq!(camel_case("user_settings-page"), "userSettingsPage");
    }

    #[test]
    fn camel_case_empty() {
        assert_eq!(camel_case(""), "");
        assert_eq!(camel_case("--"), "");
    }
}
