//! SeaORM entities for the bot list database.

pub mod prelude;

pub mod bot;
pub mod user;
