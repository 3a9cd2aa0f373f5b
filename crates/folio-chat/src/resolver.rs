//! Option resolution with fuzzy matching.

use strsim::jaro_winkler;

use crate::dialogue::ChatOption;

/// Minimum similarity score for fuzzy matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Map free-form input onto one of the displayed options.
///
/// Accepts a 1-based button number, an exact label (case-insensitive), or the
/// closest fuzzy match above the threshold. Returns the option's index.
pub fn resolve_option(options: &[ChatOption], input: &str) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).filter(|&i| i < options.len());
    }

    let input_lower = input.to_lowercase();
    if let Some(i) = options
        .iter()
        .position(|o| o.label.to_lowercase() == input_lower)
    {
        return Some(i);
    }

    options
        .iter()
        .enumerate()
        .map(|(i, o)| (i, jaro_winkler(&input_lower, &o.label.to_lowercase())))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

/// Suggest option labels that start with, contain, or resemble the partial input.
pub fn suggest_options<'a>(options: &'a [ChatOption], partial: &str, limit: usize) -> Vec<&'a str> {
    let partial_lower = partial.trim().to_lowercase();
    let mut suggestions: Vec<(&str, f64)> = options
        .iter()
        .filter_map(|option| {
            let label_lower = option.label.to_lowercase();
            if label_lower.starts_with(&partial_lower) {
                Some((option.label.as_str(), 2.0))
            } else if label_lower.contains(&partial_lower) {
                Some((option.label.as_str(), 1.0))
            } else {
                let score = jaro_winkler(&partial_lower, &label_lower);
                (score >= 0.6).then_some((option.label.as_str(), score))
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    suggestions
        .into_iter()
        .take(limit)
        .map(|(label, _)| label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<ChatOption> {
        vec![
            ChatOption::new("View Technical Skills", "skills_overview"),
            ChatOption::new("View Key Projects", "projects_overview"),
            ChatOption::new("View Contact Info", "contact"),
        ]
    }

    #[test]
    fn number_selects_button() {
        assert_eq!(resolve_option(&options(), "1"), Some(0));
        assert_eq!(resolve_option(&options(), " 3 "), Some(2));
        assert_eq!(resolve_option(&options(), "0"), None);
        assert_eq!(resolve_option(&options(), "4"), None);
    }

    #[test]
    fn exact_label_case_insensitive() {
        assert_eq!(resolve_option(&options(), "view key projects"), Some(1));
    }

    #[test]
    fn fuzzy_label() {
        assert_eq!(resolve_option(&options(), "View Contact Inf"), Some(2));
        assert_eq!(resolve_option(&options(), "View Technical Skils"), Some(0));
    }

    #[test]
    fn nonsense_rejected() {
        assert_eq!(resolve_option(&options(), "xyzzy"), None);
        assert_eq!(resolve_option(&options(), ""), None);
        assert_eq!(resolve_option(&[], "1"), None);
    }

    #[test]
    fn suggestions_rank_substring_matches() {
        let opts = options();
        let suggestions = suggest_options(&opts, "contact", 2);
        assert_eq!(suggestions[0], "View Contact Info");

        let suggestions = suggest_options(&opts, "view", 5);
        assert_eq!(suggestions.len(), 3);
    }
}
