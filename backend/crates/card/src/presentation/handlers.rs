//! HTTP Handlers

use crate::application::check_card::CheckCardUseCase;
use crate::application::check_expiry::CheckExpiryUseCase;
use crate::application::check_payment_form::{CheckPaymentFormUseCase, PaymentFormInput};
use crate::application::config::CardConfig;
use crate::application::format_card::{FormatCardInput, FormatCardUseCase};
use crate::domain::clock::Clock;
use crate::error::CardResult;
use crate::presentation::dto::{
    CheckCardRequest, CheckCardResponse, CheckExpiryRequest, CheckExpiryResponse, FormatRequest,
    FormatResponse, PaymentFormRequest, PaymentFormResponse,
};
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

/// Shared state for card handlers
#[derive(Clone)]
pub struct CardAppState<C>
where
    C: Clock + Clone + 'static,
{
    pub clock: Arc<C>,
    pub config: Arc<CardConfig>,
}

/// POST /api/card/check
pub async fn check_card<C>(
    State(state): State<CardAppState<C>>,
    Json(req): Json<CheckCardRequest>,
) -> CardResult<Json<CheckCardResponse>>
where
    C: Clock + Clone + 'static,
{
    let use_case = CheckCardUseCase::new(state.config.clone());
    let output = use_case.execute(&req.number)?;

    Ok(Json(output.into()))
}

/// POST /api/card/format
pub async fn format<C>(
    State(state): State<CardAppState<C>>,
    Json(req): Json<FormatRequest>,
) -> CardResult<Json<FormatResponse>>
where
    C: Clock + Clone + 'static,
{
    let use_case = FormatCardUseCase::new(state.config.clone());
    let output = use_case.execute(FormatCardInput {
        number: req.number,
        expiry: req.expiry,
    })?;

    Ok(Json(output.into()))
}

/// POST /api/card/expiry
pub async fn check_expiry<C>(
    State(state): State<CardAppState<C>>,
    Json(req): Json<CheckExpiryRequest>,
) -> CardResult<Json<CheckExpiryResponse>>
where
    C: Clock + Clone + 'static,
{
    let use_case = CheckExpiryUseCase::new(state.clock.clone(), state.config.clone());
    let output = use_case.execute(&req.expiry)?;

    Ok(Json(output.into()))
}

/// POST /api/card/form
pub async fn check_payment_form<C>(
    State(state): State<CardAppState<C>>,
    Json(req): Json<PaymentFormRequest>,
) -> CardResult<Json<PaymentFormResponse>>
where
    C: Clock + Clone + 'static,
{
    let use_case = CheckPaymentFormUseCase::new(state.clock.clone(), state.config.clone());
    let input = PaymentFormInput {
        card_number: req.card_number,
        expiry: req.expiry,
        cardholder_name: req.cardholder_name,
    };

    let output = use_case.execute(&input)?;

    if !output.is_valid() {
        tracing::info!(
            error_count = output.errors.len(),
            "Payment form rejected"
        );
    }

    Ok(Json(output.into()))
}
