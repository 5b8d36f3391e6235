pub mod chart;
pub mod comparison;
pub mod court;
pub mod landing;
