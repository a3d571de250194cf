//! Card Router

use crate::application::config::CardConfig;
use crate::domain::clock::{Clock, SystemClock};
use crate::presentation::handlers::{self, CardAppState};
use axum::{Router, routing::post};
use std::sync::Arc;

/// Create the card router backed by the host's local clock
pub fn card_router(config: CardConfig) -> Router {
    card_router_generic(SystemClock, config)
}

/// Create a card router for any clock implementation
pub fn card_router_generic<C>(clock: C, config: CardConfig) -> Router
where
    C: Clock + Clone + 'static,
{
    let state = CardAppState {
        clock: Arc::new(clock),
        config: Arc::new(config),
    };

    Router::new()
        .route("/check", post(handlers::check_card::<C>))
        .route("/format", post(handlers::format::<C>))
        .route("/expiry", post(handlers::check_expiry::<C>))
        .route("/form", post(handlers::check_payment_form::<C>))
        .with_state(state)
}
