use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{NameResult, process_name};

#[derive(Deserialize)]
pub struct ProcessBody {
    pub name: Option<String>,
}

/// Name used when the request carries no `name` field (or an explicit null).
/// An empty string is a supplied value and is processed as-is.
const DEFAULT_NAME: &str = "Guest";

#[tracing::instrument(
    name = "Processing a name",
    skip(body),
    fields(
        request_id = %Uuid::new_v4(),
        name_supplied = body.name.is_some()
    )
)]
pub async fn process(Json(body): Json<ProcessBody>) -> Json<NameResult> {
    let name = body.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
    Json(process_name(&name))
}
