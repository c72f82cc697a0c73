//! Loading indicator state.

/// User-visible load progress.
///
/// `is_loading` goes up when a load starts and is cleared exactly once per
/// outcome, success or failure. `last_error` holds the most recent failure
/// message for the error channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl LoadState {
    /// Mark a load as started and clear any stale error.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.last_error = None;
    }

    /// Mark an outcome: the indicator clears on both paths.
    pub fn finish(&mut self, error: Option<String>) {
        self.is_loading = false;
        self.last_error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_error() {
        let mut state = LoadState::default();
        state.finish(Some("network error: 404".into()));
        assert!(!state.is_loading);
        state.begin();
        assert!(state.is_loading);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn finish_clears_indicator_on_both_paths() {
        let mut state = LoadState::default();
        state.begin();
        state.finish(None);
        assert!(!state.is_loading);

        state.begin();
        state.finish(Some("corrupt world stream: bad header".into()));
        assert!(!state.is_loading);
        assert!(state.last_error.is_some());
    }
}
