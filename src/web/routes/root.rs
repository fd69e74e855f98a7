use axum::Json;
use serde_json::Value;

pub async fn index_handler() -> Json<Value> {
    Json(serde_json::json!({
        "message": "School Management API",
        "endpoints": {
            "addSchool": "POST /addSchool",
            "listSchools": "GET /listSchools?latitude=NUM&longitude=NUM"
        }
    }))
}
