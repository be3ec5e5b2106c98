pub mod error;
pub mod params;
pub mod report;
pub mod state;
