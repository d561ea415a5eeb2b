use owo_colors::OwoColorize;

const MAX_RULE_WIDTH: usize = 80;

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 1 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}

/// Horizontal rule: markdown `---` without color, a dimmed line with color
pub fn rule(width: usize, enable_color: bool) -> String {
    if !enable_color {
        return "---".to_string();
    }
    "─".repeat(width.clamp(3, MAX_RULE_WIDTH)).dimmed().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Schrödinger", 20), "Schrödinger");
        assert_eq!(truncate("Schrödinger", 6), "Schrö…");
        assert_eq!(truncate("abc", 1), "a");
    }

    #[test]
    fn test_plain_rule_is_markdown() {
        assert_eq!(rule(120, false), "---");
    }

    #[test]
    fn test_colored_rule_is_bounded() {
        let r = rule(500, true);
        assert_eq!(r.matches('─').count(), MAX_RULE_WIDTH);
    }
}
