//! Form payloads and template view models shared by the controllers.

pub mod bot;
pub mod user;
