//! Achievement catalog, threshold matching and personalized weight goals

pub mod catalog;
pub mod matcher;
pub mod weight_goals;

pub use catalog::{
    assess_catalog, default_catalog, default_weight_goals, ensure_catalog, replace_weight_goals,
    total_points, CatalogStatus,
};
pub use matcher::check_and_unlock;
pub use weight_goals::generate_weight_goals;
