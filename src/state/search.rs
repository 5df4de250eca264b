//! Search state machine.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: No search active
//! - Typing: User is entering a query
//! - Active: Search submitted, matches known
//!
//! Transitions return the model index to jump to; the caller hands it to
//! [`ListContext::on_search_select`](super::list_context::ListContext::on_search_select).

use crate::model::list::{ListModel, ListSource};

// ===== SearchState =====

/// Search state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No active search.
    #[default]
    Inactive,
    /// User is typing a query.
    Typing {
        /// Query typed so far.
        query: String,
    },
    /// Search submitted.
    Active {
        /// Submitted query.
        query: SearchQuery,
        /// Matching model indices in ascending order.
        matches: Vec<usize>,
        /// Position in `matches` of the current match.
        current: usize,
    },
}

// ===== SearchQuery =====

/// Validated search query. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` if the query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Search Execution =====

/// Model indices whose display strings contain `query`, case-insensitively.
pub fn execute_search<S>(list: &S, query: &SearchQuery) -> Vec<usize>
where
    S: ListModel + ListSource + ?Sized,
{
    let needle = query.as_str().to_lowercase();
    list.display_strings(0, list.len())
        .iter()
        .enumerate()
        .filter(|(_, columns)| {
            columns
                .iter()
                .any(|column| column.to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

// ===== Transitions =====

impl SearchState {
    /// Begin typing a new query.
    pub fn start(&mut self) {
        *self = SearchState::Typing {
            query: String::new(),
        };
    }

    /// Whether a query is being typed.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }

    /// Append to the query being typed.
    pub fn push_char(&mut self, c: char) {
        if let SearchState::Typing { query } = self {
            query.push(c);
        }
    }

    /// Delete the last typed character.
    pub fn pop_char(&mut self) {
        if let SearchState::Typing { query } = self {
            query.pop();
        }
    }

    /// Submit the typed query against `list`.
    ///
    /// Returns the first match at or after the selection, wrapping to the
    /// first match. An empty query returns to `Inactive`.
    pub fn submit<S>(&mut self, list: &S) -> Option<usize>
    where
        S: ListModel + ListSource + ?Sized,
    {
        let SearchState::Typing { query } = self else {
            return None;
        };
        let Some(query) = SearchQuery::new(std::mem::take(query)) else {
            *self = SearchState::Inactive;
            return None;
        };

        let matches = execute_search(list, &query);
        let selected = list.selected_index();
        let current = matches.iter().position(|&m| m >= selected).unwrap_or(0);
        let target = matches.get(current).copied();

        tracing::debug!(
            query = query.as_str(),
            matches = matches.len(),
            "Search submitted"
        );

        *self = SearchState::Active {
            query,
            matches,
            current,
        };
        target
    }

    /// Advance to the next match, wrapping.
    pub fn next_match(&mut self) -> Option<usize> {
        self.step(|current, len| (current + 1) % len)
    }

    /// Go back to the previous match, wrapping.
    pub fn prev_match(&mut self) -> Option<usize> {
        self.step(|current, len| (current + len - 1) % len)
    }

    /// Leave search mode.
    pub fn cancel(&mut self) {
        *self = SearchState::Inactive;
    }

    /// One-line status for the prompt area.
    pub fn status(&self) -> Option<String> {
        match self {
            SearchState::Inactive => None,
            SearchState::Typing { query } => Some(format!("/{}", query)),
            SearchState::Active { query, matches, .. } if matches.is_empty() => {
                Some(format!("No matches for '{}'", query.as_str()))
            }
            SearchState::Active {
                query,
                matches,
                current,
            } => Some(format!(
                "'{}' match {} of {}",
                query.as_str(),
                current + 1,
                matches.len()
            )),
        }
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) -> Option<usize> {
        let SearchState::Active {
            matches, current, ..
        } = self
        else {
            return None;
        };
        if matches.is_empty() {
            return None;
        }
        *current = advance(*current, matches.len());
        matches.get(*current).copied()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
