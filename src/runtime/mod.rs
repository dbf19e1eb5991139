//! Remote runtime layer
//!
//! The seam between the typed DOM layer and the wrapped automation client:
//! abstract traits, the chromiumoxide-backed implementation, and a scripted
//! mock for tests.

pub mod client;
pub mod mock;
pub mod traits;

pub use client::PageRuntime;
pub use mock::MockRuntime;
pub use traits::{CallArg, RemoteProperty, RemoteRuntime, RemoteValue};
