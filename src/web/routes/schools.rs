use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::models::RankedSchool;
use crate::services::school_service::{
    self, AddSchoolBody, ListSchoolsQuery, SchoolServiceError,
};

fn error_response(err: SchoolServiceError) -> (StatusCode, Json<Value>) {
    match err {
        SchoolServiceError::Invalid(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.message() })),
        ),
        SchoolServiceError::Store(e) => {
            // Internal details go to the log, never to the client.
            tracing::error!("Store failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Internal server error" })),
            )
        }
    }
}

pub async fn add_school_handler(
    State(pool): State<SqlitePool>,
    Json(body): Json<AddSchoolBody>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let school_id = school_service::add_school(&pool, &body)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "School added successfully",
            "schoolId": school_id
        })),
    ))
}

pub async fn list_schools_handler(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListSchoolsQuery>,
) -> Result<Json<Vec<RankedSchool>>, (StatusCode, Json<Value>)> {
    school_service::list_schools_ranked(&pool, &query)
        .await
        .map(Json)
        .map_err(error_response)
}
