use inquire::{
    CustomUserError,
    autocompletion::{Autocomplete, Replacement},
};
use skycast_core::{POPULAR_CITIES, filtered_suggestions};

/// Feeds the prompt dropdown from the city catalog, using the same matching
/// rules as the dashboard search box.
#[derive(Debug, Clone, Default)]
pub struct CitySuggester;

impl Autocomplete for CitySuggester {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(filtered_suggestions(input, POPULAR_CITIES).into_iter().map(str::to_string).collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_follow_catalog_rules() {
        let mut suggester = CitySuggester;

        assert!(suggester.get_suggestions("").unwrap().is_empty());
        let found = suggester.get_suggestions("lo").unwrap();
        assert_eq!(found.first().map(String::as_str), Some("London"));
        assert!(found.len() <= skycast_core::autocomplete::MAX_SUGGESTIONS);
    }

    #[test]
    fn completion_takes_highlighted_suggestion() {
        let mut suggester = CitySuggester;

        let completion = suggester.get_completion("lo", Some("London".into())).unwrap();
        assert_eq!(completion, Some("London".into()));
        assert_eq!(suggester.get_completion("lo", None).unwrap(), None);
    }
}
