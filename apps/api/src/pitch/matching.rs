//! Match-response parsing — turns the model's free-text journalist list
//! into a fixed-shape ordered list of names.

/// The match prompt asks for exactly 3 names; the cap keeps the result
/// shape fixed when the model over-answers.
const MAX_SUGGESTIONS: usize = 3;

/// Splits a match response into candidate names, one per line, stripping
/// leading bullet markers and surrounding whitespace and dropping blank
/// lines. Order is preserved: the first entry is the default selection.
pub fn parse_suggested_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_start_matches(['-', '•', '*', ' ', '\t']).trim())
        .filter(|name| !name.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_each_bullet_marker() {
        let raw = "- A. Writer\n• B. Reporter\n* C. Analyst";
        assert_eq!(
            parse_suggested_names(raw),
            vec!["A. Writer", "B. Reporter", "C. Analyst"]
        );
    }

    #[test]
    fn test_strips_indentation_and_trailing_whitespace() {
        let raw = "   - A. Writer  \n\t• B. Reporter\t";
        assert_eq!(parse_suggested_names(raw), vec!["A. Writer", "B. Reporter"]);
    }

    #[test]
    fn test_drops_blank_lines() {
        let raw = "A. Writer\n\n   \nB. Reporter\n";
        assert_eq!(parse_suggested_names(raw), vec!["A. Writer", "B. Reporter"]);
    }

    #[test]
    fn test_caps_at_three_names_in_order() {
        let raw = "One\nTwo\nThree\nFour\nFive";
        assert_eq!(parse_suggested_names(raw), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_empty_and_whitespace_input_yield_empty_list() {
        assert!(parse_suggested_names("").is_empty());
        assert!(parse_suggested_names("  \n \t \n").is_empty());
    }

    #[test]
    fn test_names_never_start_with_bullet_or_whitespace() {
        let raw = "-• A. Writer\n * \tB. Reporter";
        for name in parse_suggested_names(raw) {
            let first = name.chars().next().unwrap();
            assert!(!['-', '•', '*', ' ', '\t'].contains(&first));
        }
    }
}
