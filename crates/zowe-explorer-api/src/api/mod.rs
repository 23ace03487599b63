//! Capability contracts and profile-bound API handles.
//!
//! Extensions implement [`UssApi`], [`MvsApi`] and [`JesApi`] once per
//! profile type. Implementations are shared and stateless with respect to
//! profiles: every method receives the profile it acts against. The register
//! hands callers a [`BoundApi`], which pairs a shared implementation with one
//! profile and injects it into every call.

pub mod jes;
pub mod mvs;
pub mod uss;

use std::fmt;
use std::sync::Arc;

pub use jes::JesApi;
pub use mvs::MvsApi;
pub use uss::UssApi;

use crate::profile::Profile;

/// Contract shared by every capability implementation.
pub trait CommonApi: Send + Sync {
    /// Profile type this implementation serves, e.g. `zosmf`.
    ///
    /// The register keys implementations on this name; an empty name is
    /// rejected at registration.
    fn profile_type_name(&self) -> &str;
}

/// A shared implementation bound to one caller-owned profile.
///
/// Each lookup produces a fresh handle with its own copy of the profile.
pub struct BoundApi<A: ?Sized> {
    api: Arc<A>,
    profile: Profile,
}

/// USS handle returned by the register.
pub type BoundUssApi = BoundApi<dyn UssApi>;
/// MVS handle returned by the register.
pub type BoundMvsApi = BoundApi<dyn MvsApi>;
/// JES handle returned by the register.
pub type BoundJesApi = BoundApi<dyn JesApi>;

impl<A: ?Sized> BoundApi<A> {
    /// Bind `api` to `profile`.
    pub fn new(api: Arc<A>, profile: Profile) -> Self {
        Self { api, profile }
    }

    /// The bound profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Mutable access to this handle's profile. Other handles are unaffected.
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// The shared implementation behind this handle.
    pub fn implementation(&self) -> &Arc<A> {
        &self.api
    }

    /// Unbind, returning the profile.
    pub fn into_profile(self) -> Profile {
        self.profile
    }
}

impl<A: CommonApi + ?Sized> BoundApi<A> {
    pub fn profile_type_name(&self) -> &str {
        self.api.profile_type_name()
    }
}

impl<A: ?Sized> Clone for BoundApi<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            profile: self.profile.clone(),
        }
    }
}

impl<A: CommonApi + ?Sized> fmt::Debug for BoundApi<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundApi")
            .field("profile_type", &self.api.profile_type_name())
            .field("profile", &self.profile.name)
            .finish()
    }
}
