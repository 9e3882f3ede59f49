pub mod application;
pub mod receipt;
pub mod review;
pub mod scholarship;
pub mod user;

pub use application::*;
pub use receipt::*;
pub use review::*;
pub use scholarship::*;
pub use user::*;
