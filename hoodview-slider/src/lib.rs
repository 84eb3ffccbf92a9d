pub mod bank;
pub mod domain;
pub mod error;
pub mod layout;
pub mod mapping;
pub mod slider;
pub mod state;
