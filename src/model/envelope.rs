//! Response envelope for the remote FlashFood backend.
//!
//! Every backend endpoint, read or write, answers with the same envelope shape:
//! `{ "EC": <code>, "EM": <message>, "data": <payload> }` where an `EC` of zero
//! signals success. The envelope is deserialized leniently: a missing message or a
//! missing/odd-shaped `data` field never fails parsing, since the orchestrator
//! coerces malformed data to an empty pool rather than erroring.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// The backend's success sentinel for the envelope `EC` field.
pub const SUCCESS_CODE: i64 = 0;

/// Wire envelope returned by every backend endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct ResponseEnvelope {
    /// Error code; `0` means success.
    #[serde(rename = "EC")]
    pub error_code: i64,
    /// Optional human-readable error message.
    #[serde(rename = "EM", default)]
    pub error_message: Option<String>,
    /// Payload; a single record for writes, an array for list reads.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.error_code == SUCCESS_CODE
    }

    /// Interprets `data` as a list of records.
    ///
    /// Returns `None` when the envelope is not a success or `data` is not an array;
    /// the caller decides whether that is an error or a degraded-empty pool.
    pub fn as_list<T: DeserializeOwned>(&self) -> Option<Vec<T>> {
        if !self.is_success() {
            return None;
        }
        match &self.data {
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| serde_json::from_value(item.clone()).ok())
                .collect::<Option<Vec<T>>>(),
            _ => None,
        }
    }

    /// Interprets `data` as a single created record.
    ///
    /// Returns `None` when the envelope is not a success or `data` is absent/null,
    /// which is how the backend signals a creation that did not take effect.
    pub fn as_record<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.is_success() || self.data.is_null() {
            return None;
        }
        serde_json::from_value(self.data.clone()).ok()
    }

    pub fn message(&self) -> String {
        self.error_message.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn parses_success_list() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({ "EC": 0, "data": [{ "name": "a" }, { "name": "b" }] }))
                .unwrap();

        assert!(envelope.is_success());
        let items: Vec<Item> = envelope.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "a");
    }

    #[test]
    fn non_zero_code_is_not_success() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({ "EC": 3, "EM": "boom", "data": [] })).unwrap();

        assert!(!envelope.is_success());
        assert!(envelope.as_list::<Item>().is_none());
        assert_eq!(envelope.message(), "boom");
    }

    #[test]
    fn missing_data_field_still_parses() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({ "EC": 0 })).unwrap();

        assert!(envelope.is_success());
        // Null data is not a list and not a record
        assert!(envelope.as_list::<Item>().is_none());
        assert!(envelope.as_record::<Item>().is_none());
    }

    #[test]
    fn non_array_data_is_not_a_list() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({ "EC": 0, "data": { "name": "solo" } })).unwrap();

        assert!(envelope.as_list::<Item>().is_none());
        let record: Item = envelope.as_record().unwrap();
        assert_eq!(record.name, "solo");
    }
}
