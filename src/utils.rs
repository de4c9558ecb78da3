

/// Single-line, char-safe preview for logs and titles.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > max_chars {
        format!("{}...", flat.chars().take(max_chars).collect::<String>())
    } else {
        flat
    }
}

/// Text of the first level-one Markdown heading, if any.
pub fn first_heading(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("# "))
        .map(str::trim)
        .find(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short() {
        assert_eq!(preview("hi", 10), "hi");
    }

    #[test]
    fn test_preview_flattens_and_truncates() {
        assert_eq!(preview("hello\n  world", 20), "hello world");
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn test_preview_cyrillic() {
        assert_eq!(preview("Привет мир", 6), "Привет...");
    }

    #[test]
    fn test_first_heading() {
        assert_eq!(first_heading("## Sub\n# Title \nbody"), Some("Title"));
        assert_eq!(first_heading("no headings"), None);
        assert_eq!(first_heading("#\n# \n"), None);
    }
}
