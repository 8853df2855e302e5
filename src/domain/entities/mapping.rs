//! Mapping entity representing a short alias and its destination.

/// A persisted alias mapping.
///
/// Mappings are never updated in place: they are created by a save and
/// removed by an owner-matched delete.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    #[sqlx(rename = "url")]
    pub destination: String,
    #[sqlx(rename = "user")]
    pub owner: String,
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub alias: String,
    pub destination: String,
    pub owner: String,
}

impl NewMapping {
    pub fn new(
        alias: impl Into<String>,
        destination: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            destination: destination.into(),
            owner: owner.into(),
        }
    }
}
