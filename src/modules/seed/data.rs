//! Fixed dataset installed by the seed operation: four destinations and
//! one trip package per destination, with stable identifiers.

use crate::modules::destinations::models::Destination;
use crate::modules::trips::models::TripPackage;

pub fn destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: "dest-1".into(),
            name: "Gangtok".into(),
            region: "Sikkim".into(),
            description: "The capital of Sikkim, nestled in the Himalayas with stunning mountain views and rich Buddhist culture.".into(),
            image_url: "https://images.unsplash.com/photo-1761820228515-b79043c31856?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDN8MHwxfHNlYXJjaHwxfHxIaW1hbGF5YW4lMjBtb3VudGFpbiUyMHZpc3RhfGVufDB8fHx8MTc2MjEwNDgwNXww&ixlib=rb-4.1.0&q=85".into(),
            highlights: vec![
                "Tsomgo Lake".into(),
                "Nathula Pass".into(),
                "Rumtek Monastery".into(),
                "MG Marg".into(),
            ],
            best_season: "March to June, September to December".into(),
        },
        Destination {
            id: "dest-2".into(),
            name: "Darjeeling".into(),
            region: "West Bengal".into(),
            description: "Famous for its tea gardens, toy train, and breathtaking views of Kanchenjunga.".into(),
            image_url: "https://images.unsplash.com/photo-1742286087572-937f08b947b8?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2Mzl8MHwxfHNlYXJjaHwxfHx0ZWElMjBnYXJkZW4lMjBsYW5kc2NhcGV8ZW58MHx8fHwxNzYyMTA0ODA1fDA&ixlib=rb-4.1.0&q=85".into(),
            highlights: vec![
                "Tiger Hill".into(),
                "Darjeeling Himalayan Railway".into(),
                "Tea Gardens".into(),
                "Batasia Loop".into(),
            ],
            best_season: "April to June, September to November".into(),
        },
        Destination {
            id: "dest-3".into(),
            name: "Tawang".into(),
            region: "Arunachal Pradesh".into(),
            description: "Home to India's largest monastery and spectacular mountain landscapes.".into(),
            image_url: "https://images.unsplash.com/photo-1633538028057-838fd4e027a4?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NjZ8MHwxfHNlYXJjaHwxfHxCdWRkaGlzdCUyMG1vbmFzdGVyeXxlbnwwfHx8fDE3NjIxMDQ4MDZ8MA&ixlib=rb-4.1.0&q=85".into(),
            highlights: vec![
                "Tawang Monastery".into(),
                "Sela Pass".into(),
                "Madhuri Lake".into(),
                "Bumla Pass".into(),
            ],
            best_season: "March to October".into(),
        },
        Destination {
            id: "dest-4".into(),
            name: "Shillong".into(),
            region: "Meghalaya".into(),
            description: "The 'Scotland of the East' with rolling hills, waterfalls, and pleasant weather.".into(),
            image_url: "https://images.unsplash.com/photo-1752063497357-4a9e0b765771?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDN8MHwxfHNlYXJjaHwyfHxIaW1hbGF5YW4lMjBtb3VudGFpbiUyMHZpc3RhfGVufDB8fHx8MTc2MjEwNDgwNXww&ixlib=rb-4.1.0&q=85".into(),
            highlights: vec![
                "Elephant Falls".into(),
                "Shillong Peak".into(),
                "Ward's Lake".into(),
                "Don Bosco Museum".into(),
            ],
            best_season: "October to May".into(),
        },
    ]
}

pub fn trips() -> Vec<TripPackage> {
    vec![
        TripPackage {
            id: "trip-1".into(),
            destination_id: "dest-1".into(),
            destination_name: "Gangtok".into(),
            title: "Gangtok Paradise - 5 Days".into(),
            duration: "5 Days / 4 Nights".into(),
            price_veg: 18500.0,
            price_non_veg: 21000.0,
            pickup_time: "8:00 AM from Bagdogra Airport/NJP Station".into(),
            itinerary: vec![
                "Day 1: Arrival in Gangtok, check-in, MG Marg evening walk".into(),
                "Day 2: Tsomgo Lake & Baba Mandir excursion".into(),
                "Day 3: Nathula Pass visit (subject to permit)".into(),
                "Day 4: Rumtek Monastery, Hanuman Tok, Tashi View Point".into(),
                "Day 5: Departure to Bagdogra/NJP".into(),
            ],
            inclusions: vec![
                "Accommodation".into(),
                "Daily breakfast, lunch & dinner".into(),
                "All transfers".into(),
                "Sightseeing as per itinerary".into(),
                "Permit fees".into(),
            ],
            exclusions: vec![
                "Personal expenses".into(),
                "Travel insurance".into(),
                "Any meals not mentioned".into(),
            ],
            image_url: "https://images.unsplash.com/photo-1761820228515-b79043c31856?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDN8MHwxfHNlYXJjaHwxfHxIaW1hbGF5YW4lMjBtb3VudGFpbiUyMHZpc3RhfGVufDB8fHx8MTc2MjEwNDgwNXww&ixlib=rb-4.1.0&q=85".into(),
        },
        TripPackage {
            id: "trip-2".into(),
            destination_id: "dest-2".into(),
            destination_name: "Darjeeling".into(),
            title: "Darjeeling Delight - 4 Days".into(),
            duration: "4 Days / 3 Nights".into(),
            price_veg: 14500.0,
            price_non_veg: 16500.0,
            pickup_time: "7:00 AM from Bagdogra Airport/NJP Station".into(),
            itinerary: vec![
                "Day 1: Arrival in Darjeeling, check-in, Mall Road exploration".into(),
                "Day 2: Tiger Hill sunrise, Ghoom Monastery, Batasia Loop, toy train ride".into(),
                "Day 3: Tea garden visit, Happy Valley, Himalayan Mountaineering Institute".into(),
                "Day 4: Departure to Bagdogra/NJP".into(),
            ],
            inclusions: vec![
                "Accommodation".into(),
                "Daily breakfast, lunch & dinner".into(),
                "All transfers".into(),
                "Sightseeing".into(),
                "Toy train tickets".into(),
            ],
            exclusions: vec![
                "Personal expenses".into(),
                "Camera fees".into(),
                "Tips".into(),
            ],
            image_url: "https://images.unsplash.com/photo-1742286087572-937f08b947b8?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2Mzl8MHwxfHNlYXJjaHwxfHx0ZWElMjBnYXJkZW4lMjBsYW5kc2NhcGV8ZW58MHx8fHwxNzYyMTA0ODA1fDA&ixlib=rb-4.1.0&q=85".into(),
        },
        TripPackage {
            id: "trip-3".into(),
            destination_id: "dest-3".into(),
            destination_name: "Tawang".into(),
            title: "Tawang Tranquility - 6 Days".into(),
            duration: "6 Days / 5 Nights".into(),
            price_veg: 25500.0,
            price_non_veg: 28500.0,
            pickup_time: "6:00 AM from Guwahati Airport/Station".into(),
            itinerary: vec![
                "Day 1: Guwahati to Bomdila (overnight journey)".into(),
                "Day 2: Bomdila to Tawang via Sela Pass".into(),
                "Day 3: Tawang Monastery, War Memorial, local market".into(),
                "Day 4: Bumla Pass & Madhuri Lake excursion".into(),
                "Day 5: Tawang to Bomdila".into(),
                "Day 6: Bomdila to Guwahati, departure".into(),
            ],
            inclusions: vec![
                "Accommodation".into(),
                "All meals".into(),
                "Permits & entry fees".into(),
                "Transfers".into(),
                "Guide services".into(),
            ],
            exclusions: vec![
                "Personal expenses".into(),
                "Travel insurance".into(),
                "Medical expenses".into(),
                "Laundry".into(),
            ],
            image_url: "https://images.unsplash.com/photo-1633538028057-838fd4e027a4?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NjZ8MHwxfHNlYXJjaHwxfHxCdWRkaGlzdCUyMG1vbmFzdGVyeXxlbnwwfHx8fDE3NjIxMDQ4MDZ8MA&ixlib=rb-4.1.0&q=85".into(),
        },
        TripPackage {
            id: "trip-4".into(),
            destination_id: "dest-4".into(),
            destination_name: "Shillong".into(),
            title: "Shillong Explorer - 4 Days".into(),
            duration: "4 Days / 3 Nights".into(),
            price_veg: 15400.0,
            price_non_veg: 17400.0,
            pickup_time: "9:00 AM from Guwahati Airport/Station".into(),
            itinerary: vec![
                "Day 1: Guwahati to Shillong, Umiam Lake visit".into(),
                "Day 2: Cherrapunji day trip - Nohkalikai Falls, Seven Sisters Falls, Mawsmai Cave".into(),
                "Day 3: Elephant Falls, Shillong Peak, Ward's Lake, Police Bazaar".into(),
                "Day 4: Departure to Guwahati".into(),
            ],
            inclusions: vec![
                "Accommodation".into(),
                "Breakfast, lunch & dinner".into(),
                "Transfers".into(),
                "Sightseeing".into(),
                "Entry tickets".into(),
            ],
            exclusions: vec![
                "Personal expenses".into(),
                "Camera fees".into(),
                "Adventure activities".into(),
            ],
            image_url: "https://images.unsplash.com/photo-1752063497357-4a9e0b765771?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDN8MHwxfHNlYXJjaHwyfHxIaW1hbGF5YW4lMjBtb3VudGFpbiUyMHZpc3RhfGVufDB8fHx8MTc2MjEwNDgwNXww&ixlib=rb-4.1.0&q=85".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dataset_has_four_of_each() {
        assert_eq!(destinations().len(), 4);
        assert_eq!(trips().len(), 4);
    }

    #[test]
    fn identifiers_are_fixed_and_unique() {
        let destination_ids: Vec<String> =
            destinations().into_iter().map(|d| d.id).collect();
        assert_eq!(
            destination_ids,
            vec!["dest-1", "dest-2", "dest-3", "dest-4"]
        );

        let trip_ids: HashSet<String> = trips().into_iter().map(|t| t.id).collect();
        assert_eq!(trip_ids.len(), 4);
    }

    #[test]
    fn every_trip_references_a_seeded_destination() {
        let destination_ids: HashSet<String> =
            destinations().into_iter().map(|d| d.id).collect();

        for trip in trips() {
            assert!(
                destination_ids.contains(&trip.destination_id),
                "trip {} points at unknown destination {}",
                trip.id,
                trip.destination_id
            );
        }
    }

    #[test]
    fn one_trip_per_destination() {
        let referenced: HashSet<String> =
            trips().into_iter().map(|t| t.destination_id).collect();
        assert_eq!(referenced.len(), 4);
    }

    #[test]
    fn denormalized_names_match_destinations() {
        let destinations = destinations();
        for trip in trips() {
            let destination = destinations
                .iter()
                .find(|d| d.id == trip.destination_id)
                .unwrap();
            assert_eq!(trip.destination_name, destination.name);
        }
    }
}
