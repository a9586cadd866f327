//! Demo data seeding route handler.

use axum::{Json, extract::State};

use crate::error::Result;
use crate::models::Message;
use crate::services::seed;
use crate::state::AppState;

/// Insert the demo catalog, or report that data is already present.
///
/// Unauthenticated by design: seeding is only useful on a fresh store, and
/// repeated calls are no-ops once any category exists.
pub async fn seed_data(State(state): State<AppState>) -> Result<Json<Message>> {
    let seeded = seed::seed_if_empty(state.pool()).await?;

    let message = if seeded {
        "Sample data seeded successfully"
    } else {
        "Data already seeded"
    };

    Ok(Json(Message::new(message)))
}
