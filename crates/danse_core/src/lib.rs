pub mod ability;
pub mod core_api;
pub mod normalize;
pub mod rules;
pub mod sheet;
pub mod skill;
