//! Deterministic garden derivation.
//!
//! Every visual choice is a pure function of entry data, so the same journal
//! always renders the same garden. Both UI variants compute this shape; the
//! hashes here must keep producing the values the client's plant art was
//! assigned under.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CATEGORY;
use crate::entries::GratitudeEntry;

/// Plant silhouette assigned to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Tree,
    Flower,
    Bush,
    Oak,
    Cypress,
    Lollipop,
    Citrus,
    Shrub,
    Willow,
    Magnolia,
}

const PLANT_TYPES: [PlantType; 10] = [
    PlantType::Tree,
    PlantType::Flower,
    PlantType::Bush,
    PlantType::Oak,
    PlantType::Cypress,
    PlantType::Lollipop,
    PlantType::Citrus,
    PlantType::Shrub,
    PlantType::Willow,
    PlantType::Magnolia,
];

/// How far a category's plant has grown, by entry count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Seed,
    Sprout,
    Sapling,
    #[serde(rename = "full")]
    FullBloom,
}

/// One plant in the garden: a category with its entries and visuals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlantGroup {
    pub category: String,
    pub entries: Vec<GratitudeEntry>,
    pub stage: GrowthStage,
    pub plant_type: PlantType,
}

/// Multiplicative character hash over UTF-16 code units, truncated to
/// 32 bits. Matches the client's `(hash * 31 + charCodeAt) & 0xffffffff`.
fn category_hash(category: &str, multiplier: i32) -> u32 {
    let mut hash: i32 = 0;
    for unit in category.encode_utf16() {
        hash = hash.wrapping_mul(multiplier).wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}

/// Deterministically assigns a plant type based on the category name.
pub fn plant_type(category: &str) -> PlantType {
    PLANT_TYPES[(category_hash(category, 31) % PLANT_TYPES.len() as u32) as usize]
}

/// Deterministically assigns a flower variety index (0..5) per category.
pub fn flower_variety(category: &str) -> usize {
    (category_hash(category, 37) % 5) as usize
}

/// Growth stage thresholds: 0 entries is a seed, up to 2 a sprout,
/// up to 5 a sapling, anything more full bloom.
pub fn growth_stage(entry_count: usize) -> GrowthStage {
    match entry_count {
        0 => GrowthStage::Seed,
        1..=2 => GrowthStage::Sprout,
        3..=5 => GrowthStage::Sapling,
        _ => GrowthStage::FullBloom,
    }
}

/// Groups entries by category into plants, preserving the order in which
/// categories first appear. Uncategorized entries land in the default bucket.
pub fn group_entries(entries: &[GratitudeEntry]) -> Vec<PlantGroup> {
    let mut groups: Vec<(String, Vec<GratitudeEntry>)> = Vec::new();

    for entry in entries {
        let category = entry.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        match groups.iter_mut().find(|(c, _)| c == category) {
            Some((_, bucket)) => bucket.push(entry.clone()),
            None => groups.push((category.to_string(), vec![entry.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(category, bucket)| PlantGroup {
            stage: growth_stage(bucket.len()),
            plant_type: plant_type(&category),
            entries: bucket,
            category,
        })
        .collect()
}
