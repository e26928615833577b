//! Event operations
//!
//! Events record state changes on charges. Listings come back one page at a
//! time; the pagination cursors in the response are for the caller to use,
//! this client never follows them itself.

use reqwest::Method;

use crate::client::CommerceClient;
use crate::types::{EventDetailResponse, EventResponse};
use crate::{CommerceError, Result};

/// Path of the events endpoint
pub(crate) const EVENTS_ENDPOINT: &str = "/events";

impl CommerceClient {
    /// List events, newest first
    pub async fn list_events(&self) -> Result<EventResponse> {
        self.execute(self.request(Method::GET, EVENTS_ENDPOINT)).await
    }

    /// Retrieve a single event by id
    ///
    /// An empty id is rejected locally before any network activity.
    pub async fn get_event(&self, event_id: &str) -> Result<EventDetailResponse> {
        if event_id.is_empty() {
            return Err(CommerceError::invalid_request(
                "eventId is required to fetch an event",
            ));
        }

        let path = format!("{}/{}", EVENTS_ENDPOINT, event_id);
        self.execute(self.request(Method::GET, &path)).await
    }
}
