/// A chat message reduced to one of the dispatcher's commands.
///
/// Parsing is a pure function so the keyword matching can be tested without
/// a store or a cart. Matching is case-insensitive substring search with
/// fixed first-match precedence: recommend, then menu, then bill, then
/// order. "show me the bill for my order" is therefore a bill request, not
/// an order.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    Recommend { query: String },
    Menu,
    Bill,
    Order { items: Vec<String> },
    Unknown,
}

impl ChatCommand {
    pub fn parse(message: &str) -> Self {
        let message = message.to_lowercase();

        if message.contains("recommend") {
            let query = message.replace("recommend", "").trim().to_string();
            ChatCommand::Recommend { query }
        } else if message.contains("menu") {
            ChatCommand::Menu
        } else if message.contains("bill") {
            ChatCommand::Bill
        } else if message.contains("order") {
            let items = message
                .replace("order", "")
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect();
            ChatCommand::Order { items }
        } else {
            ChatCommand::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_parse_recommend_with_query() {
        assert_eq!(
            ChatCommand::parse("Recommend something like pilau rice"),
            ChatCommand::Recommend {
                query: "something like pilau rice".to_string()
            }
        );
    }

    #[test]
    fn should_parse_bare_keywords() {
        assert_eq!(ChatCommand::parse("menu"), ChatCommand::Menu);
        assert_eq!(ChatCommand::parse("show my BILL"), ChatCommand::Bill);
    }

    #[test]
    fn should_split_order_items_on_commas() {
        assert_eq!(
            ChatCommand::parse("order Burger, Fries , ,Coke"),
            ChatCommand::Order {
                items: vec![
                    "burger".to_string(),
                    "fries".to_string(),
                    "coke".to_string()
                ]
            }
        );
    }

    #[test]
    fn should_prefer_bill_over_order() {
        assert_eq!(
            ChatCommand::parse("the bill for my order please"),
            ChatCommand::Bill
        );
    }

    #[test]
    fn should_prefer_recommend_over_everything() {
        assert_eq!(
            ChatCommand::parse("recommend something from the menu"),
            ChatCommand::Recommend {
                query: "something from the menu".to_string()
            }
        );
    }

    #[test]
    fn should_fall_back_on_unrecognized_input() {
        assert_eq!(ChatCommand::parse("hello there"), ChatCommand::Unknown);
        assert_eq!(ChatCommand::parse(""), ChatCommand::Unknown);
    }

    proptest! {
        #[test]
        fn parse_never_panics(message in ".{0,200}") {
            let _ = ChatCommand::parse(&message);
        }
    }
}
