use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::cart::Cart;
use crate::domain::chat::command::ChatCommand;
use crate::domain::chat::errors::ChatError;
use crate::domain::chat::use_cases::respond::{ChatParams, ChatReply, ChatUseCase};
use crate::domain::logger::Logger;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::menu::use_cases::recommend::RECOMMENDATION_LIMIT;

const HELP_REPLY: &str = "I'm sorry, I didn't understand that. \
You can ask for recommendations, menu, bill, or place an order.";

pub struct ChatUseCaseImpl {
    pub menu_repository: Arc<dyn MenuRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ChatUseCase for ChatUseCaseImpl {
    async fn execute(&self, params: ChatParams) -> Result<ChatReply, ChatError> {
        let mut cart = params.cart;

        let reply = match ChatCommand::parse(&params.message) {
            ChatCommand::Recommend { query } => {
                self.logger
                    .debug(&format!("Chat recommendation request: '{query}'"));
                let items = self
                    .menu_repository
                    .top_by_popularity(RECOMMENDATION_LIMIT)
                    .await?;
                let names: Vec<String> = items.into_iter().map(|i| i.name).collect();
                format!(
                    "Here are some recommendations for you: {}",
                    names.join(", ")
                )
            }
            ChatCommand::Menu => {
                let items = self.menu_repository.get_all().await?;
                items
                    .iter()
                    .map(|item| format!("{}: ${:.2}", item.name, item.price))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            ChatCommand::Bill => {
                let total = self.cart_total(&cart).await?;
                if total > 0.0 {
                    format!("Your total bill is: ${total:.2}")
                } else {
                    "You have no items in your order.".to_string()
                }
            }
            ChatCommand::Order { items } => {
                for name in &items {
                    cart.add(name);
                }
                let total = self.cart_total(&cart).await?;
                let names: Vec<String> =
                    cart.entries().map(|entry| entry.name.clone()).collect();
                format!(
                    "You have ordered: {}. Total cost: ${total:.2}",
                    names.join(", ")
                )
            }
            ChatCommand::Unknown => HELP_REPLY.to_string(),
        };

        Ok(ChatReply { reply, cart })
    }
}

impl ChatUseCaseImpl {
    /// Prices the cart against the current menu. Cart names are free text:
    /// the lookup is case-insensitive and names without a menu match simply
    /// contribute nothing.
    async fn cart_total(&self, cart: &Cart) -> Result<f64, ChatError> {
        let mut total = 0.0;
        for entry in cart.entries() {
            if let Some(item) = self
                .menu_repository
                .find_by_name_ignoring_case(&entry.name)
                .await?
            {
                total += item.price * entry.quantity as f64;
            }
        }
        Ok(total)
    }
}
