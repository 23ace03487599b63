//! # Zowe Explorer API register
//!
//! A directory of z/OS access implementations keyed by connection profile
//! type. Extensions contribute USS, MVS and JES implementations for their
//! own profile types (an FTP backend alongside z/OSMF, for instance); core
//! code asks the register for the implementation matching a profile and
//! gets back a handle bound to that profile.
//!
//! ## Features
//!
//! - **Capability contracts**: [`UssApi`], [`MvsApi`], [`JesApi`]
//! - **Register**: per-capability tables, overwrite on re-registration,
//!   fail-closed lookups, optional process-wide instance
//! - **Profile binding**: every lookup yields a fresh [`BoundApi`]
//! - **z/OSMF backends**: REST files and jobs services, seeded by default
//!
//! ## Example
//!
//! ```rust,no_run
//! use zowe_explorer_api::{ApiRegister, Profile};
//!
//! # async fn example() -> zowe_explorer_api::Result<()> {
//! let register = ApiRegister::new();
//! let profile = Profile::new("lpar1", "zosmf")
//!     .with("host", "mvs.example.com")
//!     .with("user", "IBMUSER")
//!     .with("password", "SYS1");
//!
//! let mvs = register.get_mvs_api(&profile)?;
//! for ds in mvs.data_set("IBMUSER.*").await?.items {
//!     println!("{}", ds.dsname);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod capability;
pub mod config;
pub mod error;
pub mod profile;
pub mod registry;
pub mod types;
pub mod zosmf;

pub use api::{
    BoundApi, BoundJesApi, BoundMvsApi, BoundUssApi, CommonApi, JesApi, MvsApi, UssApi,
};
pub use capability::Capability;
pub use config::{ExplorerConfig, ZosmfClientConfig};
pub use error::ApiError;
pub use profile::Profile;
pub use registry::{ApiRegister, Implementation};
pub use zosmf::{ZosmfJesApi, ZosmfMvsApi, ZosmfUssApi, ZOSMF_PROFILE_TYPE};

/// Convenience result type for register and backend operations.
pub type Result<T> = std::result::Result<T, ApiError>;
