//! Garden module - pure rules deriving the garden view from entries.

mod garden_model;


pub use garden_model::{
    flower_variety, group_entries, growth_stage, plant_type, GrowthStage, PlantGroup, PlantType,
};
