pub mod activity_registry;

pub use activity_registry::{ActivityRegistry, SharedRegistry, SignupError};
