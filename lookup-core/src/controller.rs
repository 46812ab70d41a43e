//! The request/response/display state machine behind the lookup widget.
//!
//! A submission runs in two halves: [`QueryController::dispatch`] validates
//! the input and marks a request in flight, [`QueryController::resolve`]
//! applies the outcome. Each dispatch carries a monotonically increasing
//! sequence number and a resolution is applied only when its number matches
//! the latest dispatch, so a stale response from an overlapped request is
//! discarded instead of racing last-write-wins.

use crate::model::WeatherSnapshot;
use crate::provider::{QueryError, WeatherProvider};

/// The single piece of view state. Owned by the controller, mutated only by
/// input changes and request resolution, never persisted.
///
/// `result` and `error_message` are never both `Some`. `loading` is true
/// only strictly between a dispatch and its resolution.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub city_text: String,
    pub loading: bool,
    pub error_message: Option<String>,
    pub result: Option<WeatherSnapshot>,
}

/// An accepted submission: the trimmed city to query and the sequence
/// number its resolution must present.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub seq: u64,
    pub city: String,
}

#[derive(Debug)]
pub struct QueryController {
    provider: Box<dyn WeatherProvider>,
    state: QueryState,
    latest_seq: u64,
}

impl QueryController {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            state: QueryState::default(),
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Input-change handler.
    pub fn set_city_text(&mut self, text: impl Into<String>) {
        self.state.city_text = text.into();
    }

    /// Validate the current input and mark a request in flight.
    ///
    /// Empty or whitespace-only input short-circuits into the validation
    /// error with no network activity; `None` is returned and nothing is
    /// in flight. Otherwise the prior error is cleared, `loading` is set,
    /// and the caller must eventually feed the returned [`Dispatch`] back
    /// through [`resolve`](Self::resolve).
    pub fn dispatch(&mut self) -> Option<Dispatch> {
        let city = self.state.city_text.trim();
        if city.is_empty() {
            self.state.error_message = Some(QueryError::EmptyCity.to_string());
            self.state.result = None;
            return None;
        }

        self.state.loading = true;
        self.state.error_message = None;
        self.latest_seq += 1;

        Some(Dispatch {
            seq: self.latest_seq,
            city: city.to_string(),
        })
    }

    /// Apply the outcome of a dispatched request.
    ///
    /// A resolution whose sequence number is not the latest dispatched is
    /// stale and dropped without touching the state. Every applied
    /// resolution clears `loading`, whichever branch ran.
    pub fn resolve(&mut self, seq: u64, outcome: Result<WeatherSnapshot, QueryError>) {
        if seq != self.latest_seq {
            return;
        }

        self.state.loading = false;
        match outcome {
            Ok(snapshot) => {
                self.state.result = Some(snapshot);
                self.state.error_message = None;
            }
            Err(err) => {
                self.state.result = None;
                self.state.error_message = Some(err.to_string());
            }
        }
    }

    /// One full submission: dispatch, fetch through the provider, resolve.
    /// This is the button/Enter path; both triggers go through here.
    pub async fn submit(&mut self) {
        let Some(dispatch) = self.dispatch() else {
            return;
        };

        let outcome = self.provider.fetch_current_weather(&dispatch.city).await;
        self.resolve(dispatch.seq, outcome);
    }
}
