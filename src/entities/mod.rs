pub mod prelude;

pub mod addresses;
pub mod users;
