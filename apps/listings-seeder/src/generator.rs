//! Mock listing generation.
//!
//! Produces randomized but internally consistent property records:
//! prices track the neighborhood and area, bedroom counts fit the
//! floor plan, and amenities are sampled without repetition.

use domain_listings::models::{
    BusinessType, PropertyData, PropertyFeatures, PropertyLocation, PropertyPrices,
    PropertyRecord, PropertyType,
};
use rand::seq::IndexedRandom;
use rand::{Rng, RngExt};

/// Neighborhood catalog with rough sale prices per square meter
const NEIGHBORHOODS: &[(&str, &str, &str, f64)] = &[
    ("Jardins", "São Paulo", "SP", 14_000.0),
    ("Pinheiros", "São Paulo", "SP", 12_500.0),
    ("Moema", "São Paulo", "SP", 13_000.0),
    ("Vila Madalena", "São Paulo", "SP", 11_500.0),
    ("Tatuapé", "São Paulo", "SP", 8_500.0),
    ("Ipanema", "Rio de Janeiro", "RJ", 22_000.0),
    ("Leblon", "Rio de Janeiro", "RJ", 24_000.0),
    ("Botafogo", "Rio de Janeiro", "RJ", 13_500.0),
    ("Barra da Tijuca", "Rio de Janeiro", "RJ", 10_500.0),
    ("Savassi", "Belo Horizonte", "MG", 9_000.0),
    ("Batel", "Curitiba", "PR", 9_500.0),
    ("Moinhos de Vento", "Porto Alegre", "RS", 10_000.0),
];

const AMENITIES: &[&str] = &[
    "pool",
    "gym",
    "barbecue area",
    "playground",
    "party room",
    "24h concierge",
    "rooftop terrace",
    "sauna",
    "garden",
    "home office",
    "pet area",
    "bike storage",
    "electric car charger",
    "sports court",
];

const PROPERTY_TYPES: &[PropertyType] = &[
    PropertyType::Apartment,
    PropertyType::Apartment,
    PropertyType::Apartment,
    PropertyType::House,
    PropertyType::House,
    PropertyType::Studio,
    PropertyType::Penthouse,
];

const BUSINESS_TYPES: &[BusinessType] = &[
    BusinessType::Sale,
    BusinessType::Sale,
    BusinessType::Rent,
    BusinessType::Rent,
    BusinessType::Both,
];

const DESCRIPTIONS_SMALL: &[&str] = &[
    "Compact and well laid out, with excellent natural light.",
    "Smart floor plan close to public transport and cafes.",
    "Recently renovated, move-in ready.",
];

const DESCRIPTIONS_LARGE: &[&str] = &[
    "Generous living spaces and a dedicated service area.",
    "Wide balcony with an unobstructed view.",
    "Quiet tree-lined street, steps from the neighborhood park.",
    "High ceilings and plenty of storage throughout.",
];

/// Generate `count` randomized property records with sequential ids
pub fn generate_records(count: usize) -> Vec<PropertyRecord> {
    let mut rng = rand::rng();
    (0..count)
        .map(|index| generate_record(&mut rng, index))
        .collect()
}

fn generate_record<R: Rng>(rng: &mut R, index: usize) -> PropertyRecord {
    let property_type = *PROPERTY_TYPES.choose(rng).unwrap();
    let business_type = *BUSINESS_TYPES.choose(rng).unwrap();
    let (neighborhood, city, state, price_per_m2) = *NEIGHBORHOODS.choose(rng).unwrap();

    let area_m2: u32 = match property_type {
        PropertyType::Studio => rng.random_range(25..=55),
        PropertyType::Apartment => rng.random_range(45..=180),
        PropertyType::House => rng.random_range(120..=450),
        PropertyType::Penthouse => rng.random_range(150..=400),
    };

    let bedrooms = match area_m2 {
        0..=55 => 1,
        56..=90 => rng.random_range(1..=2),
        91..=150 => rng.random_range(2..=3),
        151..=250 => rng.random_range(3..=4),
        _ => rng.random_range(4..=5),
    };
    let suites = rng.random_range(0..=bedrooms.min(3));
    let bathrooms = suites + rng.random_range(1..=2);
    let parking_spaces = match area_m2 {
        0..=55 => rng.random_range(0..=1),
        56..=150 => rng.random_range(1..=2),
        _ => rng.random_range(2..=4),
    };

    // Price tracks neighborhood and size with +-15% noise
    let noise: f64 = rng.random_range(0.85..=1.15);
    let base_sale = price_per_m2 * f64::from(area_m2) * noise;
    let sale_price = (base_sale / 1_000.0).round() * 1_000.0;
    // Monthly rent around 0.4% of the sale value
    let rent_price = (sale_price * 0.004 / 50.0).round() * 50.0;

    let prices = PropertyPrices {
        sale_price: matches!(business_type, BusinessType::Sale | BusinessType::Both)
            .then_some(sale_price),
        rent_price: matches!(business_type, BusinessType::Rent | BusinessType::Both)
            .then_some(rent_price),
        condo_fee: f64::from(area_m2) * rng.random_range(8.0..=16.0),
        property_tax: sale_price * 0.0003,
    };

    let amenity_count = rng.random_range(3..=6);
    let amenities: Vec<String> = AMENITIES
        .choose_multiple(rng, amenity_count)
        .map(|a| a.to_string())
        .collect();

    let descriptions = if area_m2 <= 90 {
        DESCRIPTIONS_SMALL
    } else {
        DESCRIPTIONS_LARGE
    };
    let description = descriptions.choose(rng).unwrap().to_string();

    let title = match property_type {
        PropertyType::Studio => format!("Studio in {neighborhood}"),
        _ => format!(
            "{bedrooms}-bedroom {property_type} in {neighborhood}",
        ),
    };

    PropertyRecord {
        id: format!("property_{:04}", index + 1),
        data: PropertyData {
            title,
            property_type,
            business_type,
            features: PropertyFeatures {
                area_m2,
                bedrooms,
                suites,
                parking_spaces,
                bathrooms,
            },
            location: PropertyLocation {
                neighborhood: neighborhood.to_string(),
                city: city.to_string(),
                state: state.to_string(),
            },
            prices,
            amenities,
            description,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count_with_unique_ids() {
        let records = generate_records(40);
        assert_eq!(records.len(), 40);

        let ids: HashSet<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 40);
        assert!(ids.contains("property_0001"));
        assert!(ids.contains("property_0040"));
    }

    #[test]
    fn test_prices_match_business_type() {
        for record in generate_records(100) {
            let prices = &record.data.prices;
            match record.data.business_type {
                BusinessType::Sale => {
                    assert!(prices.sale_price.is_some());
                    assert!(prices.rent_price.is_none());
                }
                BusinessType::Rent => {
                    assert!(prices.sale_price.is_none());
                    assert!(prices.rent_price.is_some());
                }
                BusinessType::Both => {
                    assert!(prices.sale_price.is_some());
                    assert!(prices.rent_price.is_some());
                }
            }
        }
    }

    #[test]
    fn test_floor_plans_are_consistent() {
        for record in generate_records(100) {
            let features = &record.data.features;
            assert!(features.bedrooms >= 1);
            assert!(features.suites <= features.bedrooms);
            assert!(features.bathrooms >= features.suites);
            assert!(features.area_m2 >= 25);
        }
    }

    #[test]
    fn test_amenities_are_unique_per_listing() {
        for record in generate_records(50) {
            let unique: HashSet<_> = record.data.amenities.iter().collect();
            assert_eq!(unique.len(), record.data.amenities.len());
            assert!((3..=6).contains(&record.data.amenities.len()));
        }
    }

    #[test]
    fn test_studio_titles_skip_bedroom_count() {
        let records = generate_records(200);
        for record in records {
            if record.data.property_type == PropertyType::Studio {
                assert!(record.data.title.starts_with("Studio in "));
            }
        }
    }
}
