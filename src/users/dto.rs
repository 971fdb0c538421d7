use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::users::repo_types::User;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Request body for creating or replacing a user.
#[derive(Debug, Deserialize)]
pub struct SaveUserRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    pub phone: String,
    pub occupation: String,
    pub email: String,
    pub password: String, // plaintext, hashed before it reaches the repository
}

/// Query for `GET /users/lookup`.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// User as returned to clients; the password hash is never exposed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    pub phone: String,
    pub occupation: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            date_of_birth: u.date_of_birth,
            phone: u.phone,
            occupation: u.occupation,
            email: u.email,
        }
    }
}
