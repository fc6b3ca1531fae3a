//! Items used by `#[derive(Schema)]`. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use crate::registry::AutoRegistration;
    pub use inventory;
}
