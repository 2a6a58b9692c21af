use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserDto {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub admin: bool,
}
