/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Typed state for optional content requests.
//!
//! Every content section is optional: a failed or empty request renders
//! nothing. [`FetchState`] keeps that behavior but makes it explicit, so a
//! failure becomes "absent" in one place instead of being swallowed by each
//! caller.

use std::fmt::Display;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// The request has not completed.
    Loading,
    /// The request completed; the API may have returned nothing.
    Ready(Option<T>),
    /// The request failed. Rendered as absent.
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    /// Record the outcome of a request. Errors are logged and kept as text.
    pub fn from_result<E: Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(e) => {
                debug!(error = %e, "optional content request failed");
                FetchState::Failed(e.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The content, when the request succeeded and returned something.
    pub fn present(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => value.as_ref(),
            FetchState::Loading | FetchState::Failed(_) => None,
        }
    }

    pub fn into_present(self) -> Option<T> {
        match self {
            FetchState::Ready(value) => value,
            FetchState::Loading | FetchState::Failed(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(value) => FetchState::Ready(value.map(f)),
            FetchState::Failed(e) => FetchState::Failed(e),
        }
    }
}

impl<T, E: Display> From<Result<Option<T>, E>> for FetchState<T> {
    fn from(result: Result<Option<T>, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> FetchState<Vec<T>> {
    /// The items of a list request; empty unless it succeeded.
    pub fn items(&self) -> &[T] {
        self.present().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_is_absent() {
        let state: FetchState<String> = Err::<Option<String>, _>("HTTP 502").into();
        assert_eq!(state.present(), None);
        assert_eq!(state, FetchState::Failed("HTTP 502".to_string()));
    }

    #[test]
    fn test_ready_with_nothing_is_absent() {
        let state: FetchState<String> = FetchState::from_result(Ok::<_, String>(None));
        assert!(!state.is_loading());
        assert_eq!(state.into_present(), None);
    }

    #[test]
    fn test_loading_list_has_no_items() {
        let state: FetchState<Vec<u8>> = FetchState::default();
        assert!(state.is_loading());
        assert!(state.items().is_empty());

        let state = FetchState::Ready(Some(vec![1u8, 2]));
        assert_eq!(state.items(), &[1, 2]);
        assert_eq!(state.map(|v| v.len()).into_present(), Some(2));
    }
}
