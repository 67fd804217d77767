use tracing::debug;

use crate::autocomplete::{AutocompleteController, Event};

/// A search box: suggestion state plus the callbacks it reports to.
///
/// `on_search` is invoked exactly once per commit (Enter on a highlighted
/// suggestion, a suggestion click, or a non-blank submit) and never for
/// anything else.
pub struct SearchBar<'c, S, L>
where
    S: FnMut(&str),
    L: FnMut(),
{
    controller: AutocompleteController<'c>,
    on_search: S,
    on_location_search: L,
}

impl<'c, S, L> SearchBar<'c, S, L>
where
    S: FnMut(&str),
    L: FnMut(),
{
    pub fn new(catalog: &'c [&'c str], on_search: S, on_location_search: L) -> Self {
        Self { controller: AutocompleteController::new(catalog), on_search, on_location_search }
    }

    pub fn controller(&self) -> &AutocompleteController<'c> {
        &self.controller
    }

    /// Route one input event; returns whether it produced a search.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match self.controller.handle(event) {
            Some(city) => {
                debug!(%city, "search committed");
                (self.on_search)(&city);
                true
            }
            None => false,
        }
    }

    pub fn submit(&mut self, raw: &str) -> bool {
        self.dispatch(Event::Submit(raw.to_string()))
    }

    /// The "use my location" button; it bypasses the suggestion state.
    pub fn use_current_location(&mut self) {
        (self.on_location_search)();
    }
}
