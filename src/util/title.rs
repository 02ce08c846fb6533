use regex::Regex;

/// Generate a sort key from a display title: strip leading articles,
/// remove a trailing year suffix, lowercase.
pub fn make_sort_title(title: &str) -> String {
    let mut title = title.trim().to_lowercase();

    for prefix in &["the ", "a ", "an "] {
        if title.starts_with(prefix) {
            title = title[prefix.len()..].trim_start().to_string();
            break;
        }
    }

    title = title
        .trim_start_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .to_string();

    remove_year_suffix(&title)
}

/// URL slug for a title, e.g. "The Dark Knight (2008)" -> "the-dark-knight".
pub fn make_slug(title: &str) -> String {
    let base = remove_year_suffix(title.trim()).to_lowercase();

    let mut slug = String::with_capacity(base.len());
    let mut last_dash = true;
    for c in base.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

fn remove_year_suffix(title: &str) -> String {
    // Match patterns like " (1999)" or " (2022)" at the end
    let re = Regex::new(r"\s*\(\d{4}\)\s*$").unwrap();
    re.replace(title, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_sort_title() {
        assert_eq!(make_sort_title("The Dark Knight"), "dark knight");
        assert_eq!(make_sort_title("A Beautiful Mind"), "beautiful mind");
        assert_eq!(make_sort_title("An Inconvenient Truth"), "inconvenient truth");
        assert_eq!(make_sort_title("Goodfellas (1990)"), "goodfellas");
    }

    #[test]
    fn test_make_slug() {
        assert_eq!(make_slug("The Dark Knight (2008)"), "the-dark-knight");
        assert_eq!(make_slug("Spirited Away"), "spirited-away");
        assert_eq!(make_slug("WALL·E"), "wall-e");
    }
}
