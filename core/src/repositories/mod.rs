pub mod user;

pub use user::{IdentityFilter, InMemoryUserRepository, UserRepository};
