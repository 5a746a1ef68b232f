use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub height_cm: i64,
    /// Whole feet of the height
    pub height_ft: String,
    /// Inches remaining after whole feet
    pub height_in: f64,
}

/// A page of characters with totals computed over every character matching the filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterListDto {
    pub characters: Vec<CharacterDto>,
    pub total_count: u64,
    pub total_cm: i64,
    pub total_ft: String,
    pub total_in: f64,
}
