use sqlx::FromRow;

use business::domain::menu::model::MenuItem;

#[derive(Debug, FromRow)]
pub struct MenuItemEntity {
    pub item_id: i64,
    pub name: String,
    pub price: f64,
    pub popularity: i64,
}

impl MenuItemEntity {
    pub fn into_domain(self) -> MenuItem {
        MenuItem::from_repository(self.item_id, self.name, self.price, self.popularity)
    }
}
