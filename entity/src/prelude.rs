pub use super::item_counter::Entity as ItemCounter;
pub use super::order::Entity as Order;
pub use super::order_log::Entity as OrderLog;
pub use super::product::Entity as Product;
pub use super::push_token::Entity as PushToken;
pub use super::user::Entity as User;
