pub use super::bot::Entity as Bot;
pub use super::user::Entity as User;
