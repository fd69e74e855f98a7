use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::school_repo;
use crate::models::RankedSchool;
use crate::services::geo;
use crate::services::validation::{self, RawCoord, ValidationError};

/// `POST /addSchool` body. Fields stay optional here so absence is reported
/// through the validator instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct AddSchoolBody {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<RawCoord>,
    pub longitude: Option<RawCoord>,
}

#[derive(Debug, Deserialize)]
pub struct ListSchoolsQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug)]
pub enum SchoolServiceError {
    Invalid(ValidationError),
    Store(sqlx::Error),
}

impl From<ValidationError> for SchoolServiceError {
    fn from(err: ValidationError) -> Self {
        SchoolServiceError::Invalid(err)
    }
}

impl From<sqlx::Error> for SchoolServiceError {
    fn from(err: sqlx::Error) -> Self {
        SchoolServiceError::Store(err)
    }
}

/// Validates and persists a new school, returning its assigned id. The store
/// only ever sees trimmed fields and in-range coordinates.
pub async fn add_school(
    pool: &SqlitePool,
    body: &AddSchoolBody,
) -> Result<i64, SchoolServiceError> {
    let name = validation::require_field(body.name.as_deref())?;
    let address = validation::require_field(body.address.as_deref())?;
    let (lat, lon) = validation::parse_coordinates(body.latitude.as_ref(), body.longitude.as_ref())?;

    let school_id = school_repo::insert_school(pool, name, address, lat, lon).await?;
    tracing::info!(school_id, name, "school added");
    Ok(school_id)
}

/// Validates the query coordinates, then returns all schools nearest-first.
/// The store is never queried when validation fails.
pub async fn list_schools_ranked(
    pool: &SqlitePool,
    query: &ListSchoolsQuery,
) -> Result<Vec<RankedSchool>, SchoolServiceError> {
    let lat_raw = query.latitude.clone().map(RawCoord::Text);
    let lon_raw = query.longitude.clone().map(RawCoord::Text);
    let (lat, lon) = validation::parse_coordinates(lat_raw.as_ref(), lon_raw.as_ref())?;

    let rows = school_repo::list_schools(pool).await?;
    Ok(geo::rank_by_distance(lat, lon, rows))
}
