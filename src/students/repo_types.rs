use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// A row of the `students` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: OffsetDateTime,
}

impl Student {
    /// Column labels, in natural field order.
    pub const COLUMNS: [&'static str; 4] = ["id", "name", "email", "created_at"];

    /// Cell values in column order, each rendered via its `Display` form.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.created_at.to_string(),
        ]
    }
}
