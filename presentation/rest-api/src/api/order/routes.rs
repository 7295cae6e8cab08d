use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::order::use_cases::latest_bill::{LatestBillParams, LatestBillUseCase};
use business::domain::order::use_cases::order_history::{OrderHistoryParams, OrderHistoryUseCase};
use business::domain::order::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{
    LatestBillResponse, OrderHistoryResponse, OrderPlacedResponse, PlaceOrderRequest,
};
use crate::api::security::session_user;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    latest_bill_use_case: Arc<dyn LatestBillUseCase>,
    order_history_use_case: Arc<dyn OrderHistoryUseCase>,
}

impl OrderApi {
    pub fn new(
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
        latest_bill_use_case: Arc<dyn LatestBillUseCase>,
        order_history_use_case: Arc<dyn OrderHistoryUseCase>,
    ) -> Self {
        Self {
            place_order_use_case,
            latest_bill_use_case,
            order_history_use_case,
        }
    }
}

/// Order API
///
/// Order submission, the latest bill, and order history. Every endpoint
/// requires a logged-in session.
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Matched items become order rows and one bill; names not on the menu
    /// come back in `unmatched_items`.
    #[oai(path = "/order", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(&self, session: &Session, body: Json<PlaceOrderRequest>) -> PlaceOrderResponse {
        let Some(user_id) = session_user(session) else {
            return PlaceOrderResponse::Unauthorized(ErrorResponse::unauthorized());
        };

        let params = PlaceOrderParams {
            user_id,
            items: body.0.items,
            quantities: body.0.quantities,
        };

        match self.place_order_use_case.execute(params).await {
            Ok(receipt) => PlaceOrderResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Fetch the latest bill
    #[oai(path = "/latest_bill", method = "get", tag = "ApiTags::Orders")]
    async fn latest_bill(&self, session: &Session) -> GetLatestBillResponse {
        let Some(user_id) = session_user(session) else {
            return GetLatestBillResponse::Unauthorized(ErrorResponse::unauthorized());
        };

        match self
            .latest_bill_use_case
            .execute(LatestBillParams { user_id })
            .await
        {
            Ok(bill) => GetLatestBillResponse::Ok(Json(bill.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetLatestBillResponse::NotFound(json),
                    _ => GetLatestBillResponse::InternalError(json),
                }
            }
        }
    }

    /// List past orders, newest first
    #[oai(path = "/order_history", method = "get", tag = "ApiTags::Orders")]
    async fn order_history(&self, session: &Session) -> GetOrderHistoryResponse {
        let Some(user_id) = session_user(session) else {
            return GetOrderHistoryResponse::Unauthorized(ErrorResponse::unauthorized());
        };

        match self
            .order_history_use_case
            .execute(OrderHistoryParams { user_id })
            .await
        {
            Ok(entries) => GetOrderHistoryResponse::Ok(Json(OrderHistoryResponse {
                order_history: entries.into_iter().map(|entry| entry.into()).collect(),
            })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetOrderHistoryResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderPlacedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetLatestBillResponse {
    #[oai(status = 200)]
    Ok(Json<LatestBillResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<OrderHistoryResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
