mod booking_flow;
mod engine_properties;

use crate::demo_data::{seed, DemoData};
use crate::AppState;

pub async fn seeded_state() -> (AppState, DemoData) {
    let state = AppState::new();
    let demo = seed(&state).await.expect("Expected demo data to seed");
    (state, demo)
}
