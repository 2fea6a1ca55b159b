use axum::{Json, extract::State};
use serde_json::{Value, json};

use fraudwatch_core::counter::{Counter, CounterSnapshot};

use crate::state::AppState;

/// GET /api/stats — public counter. Never fails; an unreachable store reads as zero.
pub async fn get_stats(State(state): State<AppState>) -> Json<CounterSnapshot> {
    let mut counter = Counter::new(state.counter_goal, state.clock.clone());
    counter.initialize(&state.store).await;
    Json(counter.snapshot().await)
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "store": state.store.kind() }))
}
