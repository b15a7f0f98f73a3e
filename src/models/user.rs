use chrono::{DateTime, Local};
use serde::Serialize;

pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Local>,
}
