//! Prompt templates for listing-copy generation and search summaries.

use crate::models::{BusinessType, PropertyRecord, ScoredDocument};

/// System prompt for generating marketing copy for a single listing
pub const LISTING_COPY_SYSTEM: &str =
    "You are a real estate marketing specialist. Write engaging, accurate listing copy \
     that highlights the strengths of each property without inventing details.";

/// System prompt for summarizing a set of search results
pub const SUMMARY_SYSTEM: &str =
    "You are a real estate assistant. Summarize the properties below for a prospective \
     buyer in plain text. Do not use markup, bullet points, or any special formatting.";

/// Build the user prompt for generating a listing's marketing copy
pub fn listing_copy_prompt(record: &PropertyRecord) -> String {
    let data = &record.data;
    let features = &data.features;
    let location = &data.location;

    let price = match data.business_type {
        BusinessType::Sale | BusinessType::Both => data
            .prices
            .sale_price
            .map(|p| format!("sale price R$ {p:.0}")),
        BusinessType::Rent => data
            .prices
            .rent_price
            .map(|p| format!("monthly rent R$ {p:.0}")),
    }
    .unwrap_or_else(|| "price on request".to_string());

    let highlights: Vec<&str> = data.amenities.iter().take(3).map(String::as_str).collect();

    format!(
        "Write a short marketing description for this property:\n\
         Type: {property_type} for {business_type}\n\
         Title: {title}\n\
         Area: {area} m2, {bedrooms} bedrooms ({suites} suites), {bathrooms} bathrooms, \
         {parking} parking spaces\n\
         Location: {neighborhood}, {city}/{state}\n\
         Price: {price}\n\
         Highlights: {highlights}\n\
         Notes: {description}",
        property_type = data.property_type,
        business_type = data.business_type,
        title = data.title,
        area = features.area_m2,
        bedrooms = features.bedrooms,
        suites = features.suites,
        bathrooms = features.bathrooms,
        parking = features.parking_spaces,
        neighborhood = location.neighborhood,
        city = location.city,
        state = location.state,
        price = price,
        highlights = highlights.join(", "),
        description = data.description,
    )
}

/// Build the user prompt for summarizing search matches
pub fn summary_prompt(query: &str, matches: &[ScoredDocument]) -> String {
    let mut prompt = format!(
        "A buyer searched for: \"{query}\". Summarize how these {count} properties fit \
         the search:\n",
        count = matches.len(),
    );
    for doc in matches {
        let location = &doc.data.location;
        prompt.push_str(&format!(
            "- {title} ({neighborhood}, {city}): {copy}\n",
            title = doc.data.title,
            neighborhood = location.neighborhood,
            city = location.city,
            copy = doc.listing_copy,
        ));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        PropertyData, PropertyFeatures, PropertyLocation, PropertyPrices, PropertyType,
    };

    fn sample_record(business_type: BusinessType) -> PropertyRecord {
        PropertyRecord {
            id: "property_001".to_string(),
            data: PropertyData {
                title: "House in Moema".to_string(),
                property_type: PropertyType::House,
                business_type,
                features: PropertyFeatures {
                    area_m2: 250,
                    bedrooms: 4,
                    suites: 2,
                    parking_spaces: 3,
                    bathrooms: 4,
                },
                location: PropertyLocation {
                    neighborhood: "Moema".to_string(),
                    city: "São Paulo".to_string(),
                    state: "SP".to_string(),
                },
                prices: PropertyPrices {
                    sale_price: Some(2_100_000.0),
                    rent_price: Some(9_500.0),
                    condo_fee: 0.0,
                    property_tax: 1_200.0,
                },
                amenities: vec![
                    "pool".to_string(),
                    "barbecue area".to_string(),
                    "garden".to_string(),
                    "home office".to_string(),
                ],
                description: "Quiet street near the park".to_string(),
            },
        }
    }

    #[test]
    fn test_listing_prompt_uses_sale_price_for_sale() {
        let prompt = listing_copy_prompt(&sample_record(BusinessType::Sale));
        assert!(prompt.contains("sale price R$ 2100000"));
        assert!(prompt.contains("Moema, São Paulo/SP"));
    }

    #[test]
    fn test_listing_prompt_uses_rent_price_for_rent() {
        let prompt = listing_copy_prompt(&sample_record(BusinessType::Rent));
        assert!(prompt.contains("monthly rent R$ 9500"));
    }

    #[test]
    fn test_listing_prompt_caps_highlights_at_three() {
        let prompt = listing_copy_prompt(&sample_record(BusinessType::Sale));
        assert!(prompt.contains("pool, barbecue area, garden"));
        assert!(!prompt.contains("home office"));
    }

    #[test]
    fn test_summary_prompt_mentions_query_and_titles() {
        let record = sample_record(BusinessType::Sale);
        let matches = vec![ScoredDocument {
            id: record.id.clone(),
            score: 0.91,
            data: record.data,
            listing_copy: "A family home with a pool".to_string(),
        }];
        let prompt = summary_prompt("house with pool", &matches);
        assert!(prompt.contains("house with pool"));
        assert!(prompt.contains("House in Moema"));
        assert!(prompt.contains("A family home with a pool"));
    }
}
