pub use super::advertisement::Entity as Advertisement;
pub use super::category::Entity as Category;
pub use super::condition::Entity as Condition;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
