//! Built-in z/OSMF REST backends, registered under the `zosmf` profile type.

pub mod client;
pub mod jes;
pub mod mvs;
pub mod session;
pub mod uss;

pub use client::ZosmfClient;
pub use jes::ZosmfJesApi;
pub use mvs::ZosmfMvsApi;
pub use session::ZosmfSession;
pub use uss::ZosmfUssApi;

/// Profile type served by the built-in backends.
pub const ZOSMF_PROFILE_TYPE: &str = "zosmf";
