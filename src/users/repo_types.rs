use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

pub type UserId = Uuid;

/// User as the rest of the application sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<UserId>,     // absent until first save
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub phone: String,
    pub occupation: String,
    pub email: String,
    pub password: String,       // already hashed, stored as-is
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: Date,
        phone: impl Into<String>,
        occupation: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            phone: phone.into(),
            occupation: occupation.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Row in the `users` table.
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub phone: String,
    pub occupation: String,
    pub email: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            id: Some(r.id),
            first_name: r.first_name,
            last_name: r.last_name,
            date_of_birth: r.date_of_birth,
            phone: r.phone,
            occupation: r.occupation,
            email: r.email,
            password: r.password,
        }
    }
}
