use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub user_id: i64,
    pub username: String,
    pub password: String,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(UserId::new(self.user_id), self.username, self.password)
    }
}
