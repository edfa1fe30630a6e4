//! Deterministic demo catalog for local runs against the in-memory store
//!
//! Mirrors the shape of production data, including its inconsistencies:
//! roughly a third of hotels have no `to` field and carry their city only in
//! the subtitle.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use uuid::Uuid;

use super::persistence::TravelItemMapper;
use crate::modules::catalog::domain::{Category, TravelItem};
use crate::modules::store::InMemoryDocumentStore;
use crate::shared::errors::StoreResult;

const SEED: u64 = 0x5741_5946;

const CITIES: [&str; 8] = [
    "Mumbai",
    "New Delhi",
    "Goa",
    "Bengaluru",
    "Jaipur",
    "Chennai",
    "Kolkata",
    "Pune",
];

const AIRLINES: [&str; 4] = ["IndiGo", "Air India", "Vistara", "Akasa Air"];
const HOTEL_NAMES: [&str; 5] = ["Grand Palace", "Sea Breeze", "Heritage Inn", "Skyline Suites", "Lotus Residency"];
const HOTEL_AREAS: [&str; 4] = ["City Center", "Beachfront", "Airport Road", "Old Town"];
const TRAINS: [&str; 4] = ["Rajdhani Express", "Shatabdi Express", "Duronto Express", "Vande Bharat"];
const BUS_OPERATORS: [&str; 3] = ["VRL Travels", "SRS Travels", "Orange Tours"];
const CAB_MODELS: [&str; 5] = ["Swift Dzire", "Toyota Innova", "Honda City", "Maruti Ertiga", "Hyundai Aura"];

fn item_id(category: Category, index: usize) -> String {
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("{}:{}", category.collection_name(), index).as_bytes(),
    )
    .to_string()
}

fn rating(rng: &mut StdRng) -> f32 {
    (rng.gen_range(30..=50) as f32) / 10.0
}

fn route(rng: &mut StdRng) -> (&'static str, &'static str) {
    let mut pair = CITIES.choose_multiple(rng, 2);
    let from = pair.next().copied().unwrap_or(CITIES[0]);
    let to = pair.next().copied().unwrap_or(CITIES[1]);
    (from, to)
}

/// Build `per_category` items for every category
pub fn demo_catalog(per_category: usize) -> Vec<(Category, TravelItem)> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut items = Vec::with_capacity(per_category * Category::ALL.len());

    for category in Category::ALL {
        for index in 0..per_category {
            let item = match category {
                Category::Flights => {
                    let (from, to) = route(&mut rng);
                    let airline = AIRLINES[index % AIRLINES.len()];
                    TravelItem {
                        id: item_id(category, index),
                        item_type: category.item_type(),
                        title: format!("{} {}-{}", airline, &airline[..2].to_uppercase(), 100 + index),
                        subtitle: format!("{} → {} • Non-stop", from, to),
                        price: rng.gen_range(2500..12000) as f64,
                        rating: rating(&mut rng),
                        details: vec!["Economy".to_string(), "15kg check-in".to_string()],
                        from: Some(from.to_string()),
                        to: Some(to.to_string()),
                        image: None,
                    }
                }
                Category::Hotels => {
                    let city = CITIES[index % CITIES.len()];
                    let area = HOTEL_AREAS[index % HOTEL_AREAS.len()];
                    TravelItem {
                        id: item_id(category, index),
                        item_type: category.item_type(),
                        title: format!("{} {}", HOTEL_NAMES[index % HOTEL_NAMES.len()], city),
                        subtitle: format!("{}, India • {}", city, area),
                        price: rng.gen_range(1800..15000) as f64,
                        rating: rating(&mut rng),
                        details: vec!["Free Wifi".to_string(), "Breakfast".to_string(), "Pool".to_string()],
                        from: None,
                        to: (index % 3 != 0).then(|| city.to_string()),
                        image: None,
                    }
                }
                Category::Trains => {
                    let (from, to) = route(&mut rng);
                    TravelItem {
                        id: item_id(category, index),
                        item_type: category.item_type(),
                        title: format!("{} {}", TRAINS[index % TRAINS.len()], 12000 + index),
                        subtitle: format!("{} to {}", from, to),
                        price: rng.gen_range(600..4500) as f64,
                        rating: rating(&mut rng),
                        details: vec!["3A".to_string(), "2A".to_string(), "Pantry".to_string()],
                        from: Some(from.to_string()),
                        to: Some(to.to_string()),
                        image: None,
                    }
                }
                Category::Buses => {
                    let (from, to) = route(&mut rng);
                    TravelItem {
                        id: item_id(category, index),
                        item_type: category.item_type(),
                        title: format!("{} AC Sleeper", BUS_OPERATORS[index % BUS_OPERATORS.len()]),
                        subtitle: format!("{} to {} • Overnight", from, to),
                        price: rng.gen_range(700..2500) as f64,
                        rating: rating(&mut rng),
                        details: vec!["Blanket".to_string(), "Charging point".to_string()],
                        from: Some(from.to_string()),
                        to: Some(to.to_string()),
                        image: None,
                    }
                }
                Category::Cabs => {
                    let city = CITIES[index % CITIES.len()];
                    let model = CAB_MODELS[index % CAB_MODELS.len()];
                    TravelItem {
                        id: item_id(category, index),
                        item_type: category.item_type(),
                        title: format!("{} • {} seats", model, if model.contains("Innova") || model.contains("Ertiga") { 6 } else { 4 }),
                        subtitle: format!("{}, India • Outstation", city),
                        price: rng.gen_range(900..6000) as f64,
                        rating: rating(&mut rng),
                        details: vec![model.to_string(), "AC".to_string()],
                        from: Some(city.to_string()),
                        to: None,
                        image: None,
                    }
                }
            };
            items.push((category, item));
        }
    }

    items
}

/// Load the demo catalog into an in-memory store; returns the item count
pub fn seed_demo_catalog(store: &InMemoryDocumentStore, per_category: usize) -> StoreResult<usize> {
    let items = demo_catalog(per_category);
    for (category, item) in &items {
        store.insert(category.collection_name(), TravelItemMapper::to_document(item)?);
    }
    log::info!("Seeded {} demo catalog items", items.len());
    Ok(items.len())
}
