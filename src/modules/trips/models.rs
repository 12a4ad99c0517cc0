use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable itinerary tied to a destination.
///
/// `destination_id` is not checked against the destinations collection;
/// the reference is advisory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPackage {
    pub id: String,
    pub destination_id: String,
    pub destination_name: String,
    pub title: String,
    pub duration: String,
    pub price_veg: f64,
    pub price_non_veg: f64,
    pub pickup_time: String,
    pub itinerary: Vec<String>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub image_url: String,
}

/// Creation payload for a trip package. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TripPackageCreate {
    pub destination_id: String,
    pub destination_name: String,
    pub title: String,
    pub duration: String,
    pub price_veg: f64,
    pub price_non_veg: f64,
    pub pickup_time: String,
    pub itinerary: Vec<String>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub image_url: String,
}

impl TripPackage {
    /// Build a full record from a creation payload, generating the id.
    pub fn create(input: TripPackageCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            destination_id: input.destination_id,
            destination_name: input.destination_name,
            title: input.title,
            duration: input.duration,
            price_veg: input.price_veg,
            price_non_veg: input.price_non_veg,
            pickup_time: input.pickup_time,
            itinerary: input.itinerary,
            inclusions: input.inclusions,
            exclusions: input.exclusions,
            image_url: input.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> TripPackageCreate {
        TripPackageCreate {
            destination_id: "dest-1".to_string(),
            destination_name: "Gangtok".to_string(),
            title: "Gangtok Paradise - 5 Days".to_string(),
            duration: "5 Days / 4 Nights".to_string(),
            price_veg: 18500.0,
            price_non_veg: 21000.0,
            pickup_time: "8:00 AM".to_string(),
            itinerary: vec!["Day 1: Arrival".to_string()],
            inclusions: vec!["Accommodation".to_string()],
            exclusions: vec!["Personal expenses".to_string()],
            image_url: "http://x".to_string(),
        }
    }

    #[test]
    fn create_generates_nonempty_unique_ids() {
        let first = TripPackage::create(sample_input());
        let second = TripPackage::create(sample_input());

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(first.destination_id, "dest-1");
    }

    #[test]
    fn dangling_destination_reference_is_accepted() {
        let mut input = sample_input();
        input.destination_id = "no-such-destination".to_string();

        let trip = TripPackage::create(input);
        assert_eq!(trip.destination_id, "no-such-destination");
    }

    #[test]
    fn unknown_payload_keys_are_ignored() {
        let payload = serde_json::json!({
            "destination_id": "dest-1",
            "destination_name": "Gangtok",
            "title": "Gangtok Paradise - 5 Days",
            "duration": "5 Days / 4 Nights",
            "price_veg": 18500.0,
            "price_non_veg": 21000.0,
            "pickup_time": "8:00 AM",
            "itinerary": ["Day 1: Arrival"],
            "inclusions": ["Accommodation"],
            "exclusions": ["Personal expenses"],
            "image_url": "http://x",
            "discount_code": "SUMMER25"
        });

        let input: TripPackageCreate = serde_json::from_value(payload).unwrap();
        let stored = serde_json::to_value(TripPackage::create(input)).unwrap();
        assert!(stored.get("discount_code").is_none());
    }
}
