use serde::Serialize;

// Persisted row of the `schools` table. Validated before insertion, so every
// stored row has non-empty name/address and in-range coordinates.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SchoolRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

// View-model for listing responses: a school plus its distance from the
// query point. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSchool {
    #[serde(flatten)]
    pub school: SchoolRow,
    #[serde(rename = "distance")]
    pub distance_km: f64,
}
