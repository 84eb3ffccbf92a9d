pub mod dataset;
pub mod derive;
pub mod error;
pub mod fields;
pub mod filter;
pub mod record;
