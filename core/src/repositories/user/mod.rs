pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
mod filter;
mod memory;


pub use filter::IdentityFilter;
pub use memory::InMemoryUserRepository;
pub use r#trait::UserRepository;
