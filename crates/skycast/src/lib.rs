//! Top-level facade crate for skycast.
//!
//! Re-exports the core domain and the server library so users can depend on
//! a single crate.

pub mod core {
    pub use skycast_core::*;
}

pub mod server {
    pub use skycast_server::*;
}
