use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub service: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub datetime: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub comment: String,
    // Fields the form sent beyond the known ones, stored as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookingRequest {
    pub const REQUIRED_FIELDS: [&'static str; 3] = ["name", "phone", "datetime"];

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [&self.name, &self.phone, &self.datetime];
        Self::REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn drop_extra(&mut self, keys: &[&str]) {
        for key in keys {
            self.extra.remove(*key);
        }
    }
}

// An id of 0 means the record never had a usable one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(flatten)]
    pub request: BookingRequest,
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub received_at: String,
}

impl Booking {
    pub const ASSIGNED_KEYS: [&'static str; 2] = ["id", "receivedAt"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBooking {
    #[serde(flatten)]
    pub request: BookingRequest,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submitted_at: String,
}

impl PendingBooking {
    pub fn new(mut request: BookingRequest) -> Self {
        request.drop_extra(&["submittedAt"]);
        Self {
            request,
            submitted_at: iso_timestamp(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub ok: bool,
    pub booking: Booking,
}

// Current UTC time as `2025-01-01T10:00:00.000Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn is_zero(id: &u64) -> bool {
    *id == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, phone: &str, datetime: &str) -> BookingRequest {
        BookingRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            service: "oil".to_string(),
            datetime: datetime.to_string(),
            comment: String::new(),
            ..BookingRequest::default()
        }
    }

    #[test]
    fn test_missing_fields_none() {
        assert!(request("Ion", "06911111", "2025-01-01T10:00").is_complete());
    }

    #[test]
    fn test_missing_fields_whitespace_counts_as_empty() {
        let req = request("  ", "06911111", " ");
        assert_eq!(req.missing_fields(), vec!["name", "datetime"]);
    }

    #[test]
    fn test_service_and_comment_are_optional() {
        let mut req = request("Ion", "06911111", "2025-01-01T10:00");
        req.service.clear();
        assert!(req.is_complete());
    }

    #[test]
    fn test_booking_json_shape() {
        let booking = Booking {
            request: request("Ion", "06911111", "2025-01-01T10:00"),
            id: 1,
            received_at: "2025-01-01T09:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["name"], "Ion");
        assert_eq!(json["id"], 1);
        assert_eq!(json["receivedAt"], "2025-01-01T09:00:00.000Z");
        assert!(json.get("request").is_none());
    }

    #[test]
    fn test_booking_without_id_loads() {
        let booking: Booking =
            serde_json::from_str(r#"{"name":"Ion","phone":"1","datetime":"x"}"#).unwrap();
        assert_eq!(booking.id, 0);
        assert_eq!(booking.request.service, "");
    }

    #[test]
    fn test_pending_booking_has_submitted_at() {
        let pending = PendingBooking::new(request("Ion", "06911111", "2025-01-01T10:00"));
        let json = serde_json::to_value(&pending).unwrap();
        assert!(json["submittedAt"].as_str().unwrap().ends_with('Z'));
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_iso_timestamp_format() {
        let ts = iso_timestamp();
        assert_eq!(ts.len(), "2025-01-01T10:00:00.000Z".len());
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_damaged_fields_load_leniently() {
        let booking: Booking = serde_json::from_str(
            r#"{"name":"Ion","phone":6911111,"datetime":"x","comment":null,"id":null}"#,
        )
        .unwrap();
        assert_eq!(booking.id, 0);
        assert_eq!(booking.request.phone, "6911111");
        assert_eq!(booking.request.comment, "");

        let booking: Booking =
            serde_json::from_str(r#"{"name":"Ion","phone":"1","datetime":"x","id":"7"}"#).unwrap();
        assert_eq!(booking.id, 7);
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = r#"{"name":"Ion","phone":"1","datetime":"x","car":"Logan","id":3,"receivedAt":"t"}"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(booking.request.extra["car"], "Logan");
        assert!(!booking.request.extra.contains_key("id"));

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["car"], "Logan");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn test_pending_booking_replaces_submitted_at() {
        let mut req = request("Ion", "06911111", "2025-01-01T10:00");
        req.extra.insert("submittedAt".to_string(), Value::from("old"));
        let pending = PendingBooking::new(req);

        let json = serde_json::to_string(&pending).unwrap();
        assert_eq!(json.matches("submittedAt").count(), 1);
        assert!(!json.contains("\"old\""));
    }
}
