use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A travel location in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub region: String,
    pub description: String,
    pub image_url: String,
    pub highlights: Vec<String>,
    pub best_season: String,
}

/// Creation payload for a destination. Unknown keys are ignored on
/// deserialization; clients may send more than we store.
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationCreate {
    pub name: String,
    pub region: String,
    pub description: String,
    pub image_url: String,
    pub highlights: Vec<String>,
    pub best_season: String,
}

impl Destination {
    /// Build a full record from a creation payload, generating the id.
    pub fn create(input: DestinationCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            region: input.region,
            description: input.description,
            image_url: input.image_url,
            highlights: input.highlights,
            best_season: input.best_season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> DestinationCreate {
        DestinationCreate {
            name: "Kohima".to_string(),
            region: "Nagaland".to_string(),
            description: "d".to_string(),
            image_url: "http://x".to_string(),
            highlights: vec!["A".to_string()],
            best_season: "Oct".to_string(),
        }
    }

    #[test]
    fn create_generates_nonempty_id_and_echoes_fields() {
        let destination = Destination::create(sample_input());

        assert!(!destination.id.is_empty());
        assert_eq!(destination.name, "Kohima");
        assert_eq!(destination.region, "Nagaland");
        assert_eq!(destination.highlights, vec!["A".to_string()]);
    }

    #[test]
    fn identical_inputs_get_distinct_ids() {
        let first = Destination::create(sample_input());
        let second = Destination::create(sample_input());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn unknown_payload_keys_are_ignored() {
        let payload = serde_json::json!({
            "name": "Kohima",
            "region": "Nagaland",
            "description": "d",
            "image_url": "http://x",
            "highlights": ["A"],
            "best_season": "Oct",
            "rating": 4.9,
            "internal_note": "should vanish"
        });

        let input: DestinationCreate = serde_json::from_value(payload).unwrap();
        let destination = Destination::create(input);

        let stored = serde_json::to_value(&destination).unwrap();
        assert!(stored.get("rating").is_none());
        assert!(stored.get("internal_note").is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let payload = serde_json::json!({
            "name": "Kohima",
            "region": "Nagaland"
        });

        assert!(serde_json::from_value::<DestinationCreate>(payload).is_err());
    }
}
