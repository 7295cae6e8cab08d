pub mod application {
    pub mod chat {
        pub mod respond;
    }
    pub mod menu {
        pub mod export_names;
        pub mod recommend;
        pub mod stored_names;
    }
    pub mod order {
        pub mod latest_bill;
        pub mod order_history;
        pub mod place_order;
    }
    pub mod user {
        pub mod login;
        pub mod register;
        pub mod reset_password;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod chat {
        pub mod cart;
        pub mod command;
        pub mod errors;
        pub mod use_cases {
            pub mod respond;
        }
    }
    pub mod menu {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod export_names;
            pub mod recommend;
            pub mod stored_names;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod latest_bill;
            pub mod order_history;
            pub mod place_order;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod password;
        pub mod repository;
        pub mod use_cases {
            pub mod login;
            pub mod register;
            pub mod reset_password;
        }
    }
}
