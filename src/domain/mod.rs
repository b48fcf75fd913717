pub mod user;
pub mod response;

pub use user::*;
pub use response::*;
