//! Domain types

mod user;

pub use user::{NewUser, User};
