use crate::types::VoteChoice;

/// Local vote state owned by a single widget instance.
///
/// `choice` holds the last-known vote for the `(record, user)` pair, or
/// `None` when the user has not voted. `is_loading` is presentational
/// busy-state only; it never gates a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub choice: Option<VoteChoice>,
    pub is_loading: bool,
}

impl WidgetState {
    /// Creates the initial state: no known vote, initial read pending.
    pub fn new() -> Self {
        Self {
            choice: None,
            is_loading: true,
        }
    }

    /// Returns whether the upvote affordance should render as selected.
    ///
    /// Pure projection of `choice`; never stored independently.
    pub fn upvote_selected(&self) -> bool {
        self.choice == Some(VoteChoice::Upvote)
    }

    /// Returns whether the downvote affordance should render as selected.
    pub fn downvote_selected(&self) -> bool {
        self.choice == Some(VoteChoice::Downvote)
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = WidgetState::new();
        assert_eq!(state.choice, None);
        assert!(state.is_loading);
        assert!(!state.upvote_selected());
        assert!(!state.downvote_selected());
    }

    #[test]
    fn test_projections_follow_choice() {
        let mut state = WidgetState::new();
        state.choice = Some(VoteChoice::Upvote);
        assert!(state.upvote_selected());
        assert!(!state.downvote_selected());

        state.choice = Some(VoteChoice::Downvote);
        assert!(!state.upvote_selected());
        assert!(state.downvote_selected());
    }

    #[test]
    fn test_projections_cannot_both_be_set() {
        for choice in [None, Some(VoteChoice::Upvote), Some(VoteChoice::Downvote)] {
            let state = WidgetState {
                choice,
                is_loading: false,
            };
            assert!(!(state.upvote_selected() && state.downvote_selected()));
        }
    }
}
