//! Worker list payload.
//!
//! The worker store answers a list request with
//! `{"workers": [{"id": .., "name": .., "roles": [..], "availability": [..]}]}`.

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use super::Worker;
use crate::error::RosterError;

/// Body of the worker store's list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerList {
    /// All known workers, in store order.
    pub workers: Vec<Worker>,
}

impl WorkerList {
    /// Parses a list response body.
    ///
    /// Malformed availability bounds are tolerated (they become `None`);
    /// only a body that is not a worker list at all is an error.
    pub fn from_json(body: &str) -> Result<Self, RosterError> {
        let list: Self = serde_json::from_str(body)?;
        event!(Level::DEBUG, workers = list.workers.len(), "parsed worker list");
        Ok(list)
    }

    /// Serializes back to the store's wire shape.
    pub fn to_json(&self) -> Result<String, RosterError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of workers.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Whether the list has no workers.
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

impl From<Vec<Worker>> for WorkerList {
    fn from(workers: Vec<Worker>) -> Self {
        Self { workers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let body = r#"{"workers": [
            {"id": 1, "name": "Ada", "roles": ["MT"],
             "availability": [{"start": "2026-10-16T08:00:00Z", "end": "2026-10-16T16:00:00Z"}]},
            {"id": 2, "name": "Bea", "roles": [], "availability": []}
        ]}"#;

        let list = WorkerList::from_json(body).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.workers[0].name, "Ada");
        assert!(list.workers[1].availability.is_empty());
    }

    #[test]
    fn test_from_json_tolerates_bad_dates() {
        let body = r#"{"workers": [
            {"id": 1, "name": "Ada", "roles": ["MT"],
             "availability": [{"start": "", "end": "not a date"}, {"start": 12, "end": false}]}
        ]}"#;

        let list = WorkerList::from_json(body).unwrap();
        let ranges = &list.workers[0].availability;
        assert_eq!(ranges.len(), 2);
        assert!(ranges.iter().all(|r| r.end.is_none()));
        assert!(ranges[0].start.is_none());
        assert!(ranges[1].start.is_some()); // 12 ms after the epoch
    }

    #[test]
    fn test_from_json_tolerates_bad_entries() {
        let body = r#"{"workers": [
            {"id": 1, "name": "Ada", "roles": ["MT"],
             "availability": [null, {"start": "2026-10-16T08:00:00Z", "end": "2026-10-16T16:00:00Z"}]},
            {"id": 2, "name": "Bea", "roles": [], "availability": ["tomorrow"]},
            {"id": 3, "name": "Cal", "roles": [], "availability": null},
            {"id": 4, "name": "Dee", "roles": []}
        ]}"#;

        let list = WorkerList::from_json(body).unwrap();
        assert_eq!(list.len(), 4);

        let ada = &list.workers[0].availability;
        assert_eq!(ada.len(), 2);
        assert!(!ada[0].is_well_formed());
        assert!(ada[1].is_well_formed());

        let bea = &list.workers[1].availability;
        assert_eq!(bea.len(), 1);
        assert_eq!((bea[0].start, bea[0].end), (None, None));

        assert!(list.workers[2].availability.is_empty());
        assert!(list.workers[3].availability.is_empty());
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        assert!(matches!(
            WorkerList::from_json(r#"{"error": "db down"}"#),
            Err(RosterError::Payload(_))
        ));
        assert!(WorkerList::from_json("not json").is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_absent_bounds() {
        let body = r#"{"workers": [{"id": 1, "name": "Ada", "roles": [],
            "availability": [{"start": "2026-10-16T08:00:00Z", "end": null}]}]}"#;
        let list = WorkerList::from_json(body).unwrap();
        let again = WorkerList::from_json(&list.to_json().unwrap()).unwrap();
        assert_eq!(again.workers, list.workers);
    }
}
