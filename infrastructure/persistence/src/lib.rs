pub mod db;
pub mod menu_csv;
pub mod schema;
pub mod menu {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
