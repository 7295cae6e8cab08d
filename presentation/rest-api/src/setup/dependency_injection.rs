use std::sync::Arc;

use logger::TracingLogger;
use persistence::menu::repository::MenuRepositorySqlite;
use persistence::menu_csv::CsvMenuExport;
use persistence::order::repository::OrderRepositorySqlite;
use persistence::user::repository::UserRepositorySqlite;

use business::application::chat::respond::ChatUseCaseImpl;
use business::application::menu::export_names::ListExportNamesUseCaseImpl;
use business::application::menu::recommend::RecommendItemsUseCaseImpl;
use business::application::menu::stored_names::ListStoredNamesUseCaseImpl;
use business::application::order::latest_bill::LatestBillUseCaseImpl;
use business::application::order::order_history::OrderHistoryUseCaseImpl;
use business::application::order::place_order::PlaceOrderUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::user::reset_password::ResetPasswordUseCaseImpl;

use crate::config::menu_config::MenuConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub menu_api: crate::api::menu::routes::MenuApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub chat_api: crate::api::chat::routes::ChatApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositorySqlite::new(pool.clone()));
        let menu_repository = Arc::new(MenuRepositorySqlite::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositorySqlite::new(pool));

        let menu_config = MenuConfig::from_env();
        let menu_export = Arc::new(CsvMenuExport::new(menu_config.export_path));

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let reset_password_use_case = Arc::new(ResetPasswordUseCaseImpl {
            repository: user_repository,
            logger: logger.clone(),
        });

        // Menu use cases
        let recommend_use_case = Arc::new(RecommendItemsUseCaseImpl {
            repository: menu_repository.clone(),
            logger: logger.clone(),
        });
        let export_names_use_case = Arc::new(ListExportNamesUseCaseImpl {
            export: menu_export,
            logger: logger.clone(),
        });
        let stored_names_use_case = Arc::new(ListStoredNamesUseCaseImpl {
            repository: menu_repository.clone(),
        });

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            menu_repository: menu_repository.clone(),
            order_repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let latest_bill_use_case = Arc::new(LatestBillUseCaseImpl {
            repository: order_repository.clone(),
        });
        let order_history_use_case = Arc::new(OrderHistoryUseCaseImpl {
            repository: order_repository,
        });

        // Chat use case
        let chat_use_case = Arc::new(ChatUseCaseImpl {
            menu_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(
            register_use_case,
            login_use_case,
            reset_password_use_case,
        );
        let menu_api = crate::api::menu::routes::MenuApi::new(
            recommend_use_case,
            export_names_use_case,
            stored_names_use_case,
        );
        let order_api = crate::api::order::routes::OrderApi::new(
            place_order_use_case,
            latest_bill_use_case,
            order_history_use_case,
        );
        let chat_api = crate::api::chat::routes::ChatApi::new(chat_use_case);

        Self {
            health_api,
            auth_api,
            menu_api,
            order_api,
            chat_api,
        }
    }
}
