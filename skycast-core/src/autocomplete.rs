//! Search-box suggestion state.
//!
//! The controller is a pure state machine: [`transition`] takes the current
//! [`AutocompleteState`] and one [`Event`] and returns the next state plus an
//! optional committed city. [`AutocompleteController`] is a thin owner of that
//! state for callers that prefer method calls.

/// Upper bound on the suggestions shown in the dropdown.
pub const MAX_SUGGESTIONS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteState {
    pub query: String,
    pub open: bool,
    /// Index into the current suggestions; `None` means nothing highlighted.
    pub highlighted: Option<usize>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TextChanged(String),
    Focus,
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Pointer interaction outside the search box.
    OutsideInteraction,
    /// Form submission with the raw text of the input.
    Submit(String),
    /// Click on the suggestion at this index.
    Select(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AutocompleteState,
    pub commit: Option<String>,
}

impl Transition {
    fn stay(state: &AutocompleteState) -> Self {
        Self { state: state.clone(), commit: None }
    }

    fn to(state: AutocompleteState) -> Self {
        Self { state, commit: None }
    }

    fn commit(city: impl Into<String>) -> Self {
        Self { state: AutocompleteState::new(), commit: Some(city.into()) }
    }
}

/// Catalog entries containing `query`, ignoring case, in catalog order and at
/// most [`MAX_SUGGESTIONS`] long. A blank query matches nothing.
pub fn filtered_suggestions<'a>(query: &str, catalog: &[&'a str]) -> Vec<&'a str> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

pub fn transition(state: &AutocompleteState, event: Event, catalog: &[&str]) -> Transition {
    match event {
        Event::TextChanged(text) => {
            Transition::to(AutocompleteState { query: text, open: true, highlighted: None })
        }
        Event::Focus => {
            if state.query.trim().is_empty() {
                Transition::stay(state)
            } else {
                Transition::to(AutocompleteState { open: true, ..state.clone() })
            }
        }
        Event::OutsideInteraction => {
            Transition::to(AutocompleteState { open: false, ..state.clone() })
        }
        Event::Submit(raw) => {
            let city = raw.trim();
            if city.is_empty() {
                Transition::stay(state)
            } else {
                Transition::commit(city)
            }
        }
        Event::Select(index) => match filtered_suggestions(&state.query, catalog).get(index) {
            Some(city) => Transition::commit(*city),
            None => Transition::stay(state),
        },
        Event::ArrowDown | Event::ArrowUp | Event::Enter | Event::Escape => {
            key_transition(state, event, catalog)
        }
    }
}

// Keyboard handling only applies while the dropdown is actually showing.
fn key_transition(state: &AutocompleteState, event: Event, catalog: &[&str]) -> Transition {
    let suggestions = filtered_suggestions(&state.query, catalog);
    if !state.open || suggestions.is_empty() {
        return Transition::stay(state);
    }

    let last = suggestions.len() - 1;
    match event {
        Event::ArrowDown => {
            let next = match state.highlighted {
                None => 0,
                Some(i) => (i + 1).min(last),
            };
            Transition::to(AutocompleteState { highlighted: Some(next), ..state.clone() })
        }
        Event::ArrowUp => {
            let next = match state.highlighted {
                Some(i) if i > 0 => Some(i - 1),
                _ => None,
            };
            Transition::to(AutocompleteState { highlighted: next, ..state.clone() })
        }
        Event::Enter => match state.highlighted.and_then(|i| suggestions.get(i)) {
            Some(city) => Transition::commit(*city),
            None => Transition::stay(state),
        },
        Event::Escape => Transition::to(AutocompleteState {
            open: false,
            highlighted: None,
            ..state.clone()
        }),
        _ => Transition::stay(state),
    }
}

/// Owns the suggestion state of a single search box.
#[derive(Debug, Clone)]
pub struct AutocompleteController<'c> {
    catalog: &'c [&'c str],
    state: AutocompleteState,
}

impl<'c> AutocompleteController<'c> {
    pub fn new(catalog: &'c [&'c str]) -> Self {
        Self { catalog, state: AutocompleteState::new() }
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    pub fn suggestions(&self) -> Vec<&'c str> {
        filtered_suggestions(&self.state.query, self.catalog)
    }

    /// The dropdown is drawn only when open and something matches.
    pub fn dropdown_visible(&self) -> bool {
        self.state.open && !self.suggestions().is_empty()
    }

    /// Apply one event; returns the committed city, if the event committed one.
    pub fn handle(&mut self, event: Event) -> Option<String> {
        let Transition { state, commit } = transition(&self.state, event, self.catalog);
        self.state = state;
        commit
    }

    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.handle(Event::TextChanged(text.into()));
    }

    pub fn on_focus(&mut self) {
        self.handle(Event::Focus);
    }

    pub fn on_arrow_down(&mut self) {
        self.handle(Event::ArrowDown);
    }

    pub fn on_arrow_up(&mut self) {
        self.handle(Event::ArrowUp);
    }

    pub fn on_enter(&mut self) -> Option<String> {
        self.handle(Event::Enter)
    }

    pub fn on_escape(&mut self) {
        self.handle(Event::Escape);
    }

    pub fn on_outside_interaction(&mut self) {
        self.handle(Event::OutsideInteraction);
    }

    pub fn on_submit(&mut self, raw: &str) -> Option<String> {
        self.handle(Event::Submit(raw.to_string()))
    }

    pub fn on_select(&mut self, index: usize) -> Option<String> {
        self.handle(Event::Select(index))
    }
}
