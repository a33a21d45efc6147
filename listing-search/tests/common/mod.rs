//! Shared fixtures for the listing-search integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use listing_search::{
    ContactInfo, FuelType, Listing, ListingCatalog, Transmission, VehicleType,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Evaluation year used wherever the condition bucket matters
pub const CURRENT_YEAR: i32 = 2026;

/// Eight listings across all vehicle types; l2 and l5 are promoted, l4 has no location
pub const SAMPLE_LISTINGS_JSON: &str = r#"[
  {"id": "l1", "title": "Volkswagen Golf 1.5 TSI", "brand": "Volkswagen", "model": "Golf",
   "description": "One owner, full service history", "type": "car", "fuelType": "petrol",
   "transmission": "manual", "price": 12000, "year": 2019, "mileage": 60000,
   "contactInfo": {"location": "Berlin", "phone": "+49 30 1234"}, "isPromoted": false,
   "createdAt": "2024-01-10T09:00:00Z", "approvedAt": "2024-01-12T09:00:00Z"},
  {"id": "l2", "title": "BMW 320d Touring", "brand": "BMW", "model": "320d",
   "type": "car", "fuelType": "diesel", "transmission": "automatic",
   "price": 28000, "year": 2025, "mileage": 5000,
   "contactInfo": {"location": "Munich"}, "isPromoted": true,
   "createdAt": "2024-03-01T12:00:00Z"},
  {"id": "l3", "title": "Honda CB500F", "brand": "Honda", "model": "CB500F",
   "type": "bike", "fuelType": "petrol", "transmission": "manual",
   "price": 6500, "year": 2021, "mileage": 12000,
   "contactInfo": {"location": "Hamburg"}, "isPromoted": false,
   "createdAt": "2024-02-01T08:00:00Z", "approvedAt": "2024-02-20T08:00:00Z"},
  {"id": "l4", "title": "Ford Transit Custom", "brand": "Ford", "model": "Transit",
   "type": "van", "fuelType": "diesel", "transmission": "manual",
   "price": 9000, "year": 2016, "mileage": 180000, "isPromoted": false,
   "createdAt": "2023-12-01T08:00:00Z", "approvedAt": "2024-02-15T08:00:00Z"},
  {"id": "l5", "title": "Tesla Model 3 Long Range", "brand": "Tesla", "model": "Model 3",
   "type": "car", "fuelType": "electric", "transmission": "automatic",
   "price": 41000, "year": 2026, "mileage": 100,
   "contactInfo": {"location": "Berlin"}, "isPromoted": true,
   "createdAt": "2024-04-01T10:00:00Z", "approvedAt": "2024-04-02T10:00:00Z"},
  {"id": "l6", "title": "MAN TGX 18.500", "brand": "MAN", "model": "TGX",
   "type": "truck", "fuelType": "diesel", "transmission": "automatic",
   "price": 75000, "year": 2018, "mileage": 400000,
   "contactInfo": {"location": "Rotterdam"}, "isPromoted": false,
   "createdAt": "2024-01-05T10:00:00Z", "approvedAt": "2024-03-10T10:00:00Z"},
  {"id": "l7", "title": "Toyota Prius", "brand": "Toyota", "model": "Prius",
   "description": "Low fuel consumption, city car", "type": "car", "fuelType": "hybrid",
   "transmission": "automatic", "price": 15500, "year": 2017, "mileage": 90000,
   "contactInfo": {"location": "berlin-Spandau"}, "isPromoted": false,
   "createdAt": "2024-05-01T10:00:00Z"},
  {"id": "l8", "title": "Fiat Panda", "brand": "Fiat", "model": "Panda",
   "type": "car", "fuelType": "petrol", "transmission": "manual",
   "price": 4500, "year": 2012, "mileage": 140000,
   "contactInfo": {"location": "Naples"}, "isPromoted": false,
   "createdAt": "2024-02-10T10:00:00Z", "approvedAt": "2024-02-11T10:00:00Z"}
]"#;

/// Two usable records mixed with junk the catalog has to skip
pub const MIXED_RECORDS_JSON: &str = r#"[
  {"id": "ok-1", "title": "Skoda Octavia", "price": 9900, "rating": 5},
  "not a listing",
  {"title": "missing id"},
  {"id": 77, "title": "Numeric id", "type": "spaceship"}
]"#;

pub fn sample_listings() -> Vec<Listing> {
    ListingCatalog::from_json(SAMPLE_LISTINGS_JSON)
        .unwrap()
        .listings()
        .to_vec()
}

pub fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.to_string()).collect()
}

pub fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Minimal listing with a price and promoted flag
pub fn priced(id: &str, price: f64, promoted: bool) -> Listing {
    Listing {
        price: Some(price),
        is_promoted: promoted,
        ..Listing::new(id)
    }
}

/// Deterministic pseudo-random listings covering every field, including gaps
pub fn random_listings(seed: u64, count: usize) -> Vec<Listing> {
    let mut rng = StdRng::seed_from_u64(seed);
    let types = [
        VehicleType::Car,
        VehicleType::Bike,
        VehicleType::Van,
        VehicleType::Truck,
        VehicleType::Other,
    ];
    let fuels = [FuelType::Petrol, FuelType::Diesel, FuelType::Electric];
    let brands = ["Audi", "BMW", "Ford", "Honda", "Volvo"];
    let cities = ["Berlin", "Paris", "Oslo"];

    (0..count)
        .map(|i| {
            let created = ts(2023, 1, 1) + chrono::Duration::hours(rng.random_range(0..20_000));
            Listing {
                title: format!("{} listing {}", brands[i % brands.len()], i),
                brand: brands[rng.random_range(0..brands.len())].to_string(),
                model: format!("M{}", rng.random_range(1..5)),
                description: rng.random_bool(0.5).then(|| "well kept".to_string()),
                vehicle_type: rng
                    .random_bool(0.9)
                    .then(|| types[rng.random_range(0..types.len())]),
                fuel_type: Some(fuels[rng.random_range(0..fuels.len())]),
                transmission: rng.random_bool(0.5).then_some(Transmission::Manual),
                price: rng
                    .random_bool(0.95)
                    .then(|| f64::from(rng.random_range(0..50u32)) * 1000.0),
                year: rng.random_bool(0.95).then(|| rng.random_range(2005..=2027)),
                mileage: rng
                    .random_bool(0.95)
                    .then(|| f64::from(rng.random_range(0..300u32)) * 1000.0),
                contact_info: rng.random_bool(0.8).then(|| ContactInfo {
                    location: Some(cities[rng.random_range(0..cities.len())].to_string()),
                }),
                is_promoted: rng.random_bool(0.3),
                created_at: Some(created),
                approved_at: rng
                    .random_bool(0.7)
                    .then(|| created + chrono::Duration::hours(rng.random_range(1..200))),
                ..Listing::new(format!("r{i}"))
            }
        })
        .collect()
}
