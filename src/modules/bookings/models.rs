use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Initial (and only) booking status the service ever writes.
pub const STATUS_CONFIRMED: &str = "confirmed";

/// A customer reservation against a trip package.
///
/// `trip_id` is not checked against the trips collection. `travel_date` is
/// free text, not a validated calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub trip_id: String,
    pub trip_title: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub travel_date: String,
    pub guests: i64,
    pub meal_preference: String,
    pub total_amount: f64,
    #[serde(with = "booking_date")]
    pub booking_date: DateTime<Utc>,
    pub status: String,
}

/// Creation payload for a booking. The id, booking timestamp, and status
/// are server-generated and cannot be supplied by the client. Unknown keys
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingCreate {
    pub trip_id: String,
    pub trip_title: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub travel_date: String,
    pub guests: i64,
    pub meal_preference: String,
    pub total_amount: f64,
}

impl Booking {
    /// Build a full record from a creation payload: generated id, booking
    /// timestamp taken once at construction (UTC), status "confirmed".
    pub fn create(input: BookingCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id: input.trip_id,
            trip_title: input.trip_title,
            customer_name: input.customer_name,
            customer_email: input.customer_email,
            customer_phone: input.customer_phone,
            travel_date: input.travel_date,
            guests: input.guests,
            meal_preference: input.meal_preference,
            total_amount: input.total_amount,
            booking_date: Utc::now(),
            status: STATUS_CONFIRMED.to_string(),
        }
    }
}

/// Booking timestamps are written as RFC 3339 strings. Older records may
/// hold a structured BSON datetime instead, so reads accept either form.
mod booking_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Stored {
            Text(String),
            Structured(yatra_db::bson::DateTime),
        }

        match Stored::deserialize(deserializer)? {
            Stored::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(serde::de::Error::custom),
            Stored::Structured(datetime) => Ok(datetime.to_chrono()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use yatra_db::bson;

    fn sample_input() -> BookingCreate {
        BookingCreate {
            trip_id: "trip-1".to_string(),
            trip_title: "Gangtok Paradise - 5 Days".to_string(),
            customer_name: "Rina Das".to_string(),
            customer_email: "rina@example.com".to_string(),
            customer_phone: "+91 90000 00000".to_string(),
            travel_date: "2026-10-12".to_string(),
            guests: 2,
            meal_preference: "veg".to_string(),
            total_amount: 37000.0,
        }
    }

    #[test]
    fn create_fills_generated_fields() {
        let before = Utc::now();
        let booking = Booking::create(sample_input());
        let after = Utc::now();

        assert!(!booking.id.is_empty());
        assert_eq!(booking.status, STATUS_CONFIRMED);
        assert!(booking.booking_date >= before && booking.booking_date <= after);
    }

    #[test]
    fn timestamp_round_trips_through_string_form() {
        let booking = Booking::create(sample_input());

        let stored = serde_json::to_value(&booking).unwrap();
        assert!(stored["booking_date"].is_string());

        let reread: Booking = serde_json::from_value(stored).unwrap();
        assert_eq!(reread.booking_date, booking.booking_date);
    }

    #[test]
    fn timestamp_accepts_structured_datetime() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

        let mut document = bson::to_document(&Booking::create(sample_input())).unwrap();
        document.insert("booking_date", bson::DateTime::from_chrono(instant));

        let reread: Booking = bson::from_document(document).unwrap();
        assert_eq!(reread.booking_date, instant);
    }

    #[test]
    fn client_cannot_supply_generated_fields() {
        let payload = serde_json::json!({
            "trip_id": "trip-9",
            "trip_title": "Ghost trip",
            "customer_name": "A",
            "customer_email": "a@example.com",
            "customer_phone": "1",
            "travel_date": "tomorrow",
            "guests": 1,
            "meal_preference": "veg",
            "total_amount": 1.0,
            "status": "cancelled",
            "booking_date": "1970-01-01T00:00:00+00:00"
        });

        let input: BookingCreate = serde_json::from_value(payload).unwrap();
        let booking = Booking::create(input);

        assert_eq!(booking.status, STATUS_CONFIRMED);
        assert!(booking.booking_date.timestamp() > 0);
    }

    #[test]
    fn dangling_trip_reference_is_accepted() {
        let mut input = sample_input();
        input.trip_id = "no-such-trip".to_string();

        let booking = Booking::create(input);
        assert_eq!(booking.trip_id, "no-such-trip");
    }
}
