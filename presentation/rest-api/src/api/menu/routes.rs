use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::menu::use_cases::export_names::ListExportNamesUseCase;
use business::domain::menu::use_cases::recommend::{RecommendItemsUseCase, RecommendParams};
use business::domain::menu::use_cases::stored_names::ListStoredNamesUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::menu::dto::{
    ExportNamesResponse, RecommendRequest, RecommendResponse, StoredNamesResponse,
    UniqueValuesResponse,
};
use crate::api::security::session_user;
use crate::api::tags::ApiTags;

pub struct MenuApi {
    recommend_use_case: Arc<dyn RecommendItemsUseCase>,
    export_names_use_case: Arc<dyn ListExportNamesUseCase>,
    stored_names_use_case: Arc<dyn ListStoredNamesUseCase>,
}

impl MenuApi {
    pub fn new(
        recommend_use_case: Arc<dyn RecommendItemsUseCase>,
        export_names_use_case: Arc<dyn ListExportNamesUseCase>,
        stored_names_use_case: Arc<dyn ListStoredNamesUseCase>,
    ) -> Self {
        Self {
            recommend_use_case,
            export_names_use_case,
            stored_names_use_case,
        }
    }
}

/// Menu API
///
/// Recommendations and item-name listings from the store and the raw export.
#[OpenApi]
impl MenuApi {
    /// Recommend menu items
    ///
    /// Returns the most popular items. Requires a logged-in session.
    #[oai(path = "/recommend", method = "post", tag = "ApiTags::Menu")]
    async fn recommend(&self, session: &Session, body: Json<RecommendRequest>) -> RecommendPayload {
        if session_user(session).is_none() {
            return RecommendPayload::Unauthorized(ErrorResponse::unauthorized());
        }

        if body.0.selected_item.trim().is_empty() {
            return RecommendPayload::BadRequest(Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "menu.selected_item_required".to_string(),
            }));
        }

        let params = RecommendParams {
            selected_item: Some(body.0.selected_item),
        };

        match self.recommend_use_case.execute(params).await {
            Ok(items) => RecommendPayload::Ok(Json(RecommendResponse {
                recommendations: items.into_iter().map(|item| item.name).collect(),
            })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                RecommendPayload::InternalError(json)
            }
        }
    }

    /// List unique item names from both sources
    #[oai(path = "/unique_values", method = "get", tag = "ApiTags::Menu")]
    async fn unique_values(&self) -> UniqueValuesPayload {
        let export = match self.export_names_use_case.execute().await {
            Ok(names) => names,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return UniqueValuesPayload::InternalError(json);
            }
        };
        match self.stored_names_use_case.execute().await {
            Ok(stored) => UniqueValuesPayload::Ok(Json(UniqueValuesResponse {
                csv_unique_values: export,
                db_unique_values: stored,
            })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                UniqueValuesPayload::InternalError(json)
            }
        }
    }

    /// List unique item names from the CSV export
    #[oai(path = "/unique_values/csv", method = "get", tag = "ApiTags::Menu")]
    async fn unique_values_csv(&self) -> ExportNamesPayload {
        match self.export_names_use_case.execute().await {
            Ok(names) => ExportNamesPayload::Ok(Json(ExportNamesResponse {
                unique_values: names,
            })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ExportNamesPayload::InternalError(json)
            }
        }
    }

    /// List distinct item names from the store
    #[oai(path = "/unique_values/db", method = "get", tag = "ApiTags::Menu")]
    async fn unique_values_db(&self) -> StoredNamesPayload {
        match self.stored_names_use_case.execute().await {
            Ok(names) => StoredNamesPayload::Ok(Json(StoredNamesResponse {
                unique_items: names,
            })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                StoredNamesPayload::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendPayload {
    #[oai(status = 200)]
    Ok(Json<RecommendResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UniqueValuesPayload {
    #[oai(status = 200)]
    Ok(Json<UniqueValuesResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExportNamesPayload {
    #[oai(status = 200)]
    Ok(Json<ExportNamesResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum StoredNamesPayload {
    #[oai(status = 200)]
    Ok(Json<StoredNamesResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
