pub use super::addresses::Entity as Addresses;
pub use super::users::Entity as Users;
