use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/schedule", get(handlers::schedule::get_scheduled_appointments))
        .route("/schedule", post(handlers::schedule::create_appointment))
}
