//! The API register: profile type → implementation, per capability.
//!
//! Three independent tables map a profile type name to a shared
//! implementation. Lookups bind the implementation to the caller's profile
//! and never fall back to another type.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::api::{BoundApi, BoundJesApi, BoundMvsApi, BoundUssApi, CommonApi, JesApi, MvsApi, UssApi};
use crate::capability::Capability;
use crate::config::ExplorerConfig;
use crate::error::ApiError;
use crate::profile::Profile;
use crate::zosmf::{ZosmfJesApi, ZosmfMvsApi, ZosmfUssApi};
use crate::Result;

type Table<T> = RwLock<HashMap<String, Arc<T>>>;

static GLOBAL: LazyLock<ApiRegister> = LazyLock::new(ApiRegister::new);

/// An implementation of one capability, ready to register.
#[derive(Clone)]
pub enum Implementation {
    Uss(Arc<dyn UssApi>),
    Mvs(Arc<dyn MvsApi>),
    Jes(Arc<dyn JesApi>),
}

impl Implementation {
    /// Capability this implementation provides.
    pub fn capability(&self) -> Capability {
        match self {
            Implementation::Uss(_) => Capability::Uss,
            Implementation::Mvs(_) => Capability::Mvs,
            Implementation::Jes(_) => Capability::Jes,
        }
    }

    /// Profile type the implementation reports.
    pub fn profile_type_name(&self) -> &str {
        match self {
            Implementation::Uss(api) => api.profile_type_name(),
            Implementation::Mvs(api) => api.profile_type_name(),
            Implementation::Jes(api) => api.profile_type_name(),
        }
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementation")
            .field("capability", &self.capability())
            .field("profile_type", &self.profile_type_name())
            .finish()
    }
}

/// Directory of USS, MVS and JES implementations keyed by profile type.
///
/// Hosts normally construct one register at startup and pass it by
/// reference; [`ApiRegister::global`] offers a process-wide instance for
/// code that cannot be handed one.
pub struct ApiRegister {
    uss: Table<dyn UssApi>,
    mvs: Table<dyn MvsApi>,
    jes: Table<dyn JesApi>,
}

impl Default for ApiRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ApiRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRegister")
            .field("uss", &self.registered_uss_api_types())
            .field("mvs", &self.registered_mvs_api_types())
            .field("jes", &self.registered_jes_api_types())
            .finish()
    }
}

impl ApiRegister {
    /// Create a register seeded with the z/OSMF implementations.
    pub fn new() -> Self {
        Self::with_config(&ExplorerConfig::default())
    }

    /// Create a register seeded with z/OSMF implementations built from `config`.
    pub fn with_config(config: &ExplorerConfig) -> Self {
        let register = Self::empty();
        register.seed(config);
        register
    }

    /// Create a register with no implementations at all.
    pub fn empty() -> Self {
        Self {
            uss: RwLock::new(HashMap::new()),
            mvs: RwLock::new(HashMap::new()),
            jes: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide register, created and seeded on first access.
    pub fn global() -> &'static ApiRegister {
        &GLOBAL
    }

    fn seed(&self, config: &ExplorerConfig) {
        let defaults = [
            Implementation::Uss(Arc::new(ZosmfUssApi::new(config.zosmf.clone()))),
            Implementation::Mvs(Arc::new(ZosmfMvsApi::new(config.zosmf.clone()))),
            Implementation::Jes(Arc::new(ZosmfJesApi::new(config.zosmf.clone()))),
        ];
        for implementation in defaults {
            // The z/OSMF implementations always report a type name.
            if let Err(e) = self.register(implementation) {
                warn!(error = %e, "Failed to seed default implementation");
            }
        }
    }

    /// Register an implementation, replacing any previous one for the same
    /// capability and profile type.
    pub fn register(&self, implementation: Implementation) -> Result<()> {
        let capability = implementation.capability();
        match implementation {
            Implementation::Uss(api) => insert(&self.uss, capability, api),
            Implementation::Mvs(api) => insert(&self.mvs, capability, api),
            Implementation::Jes(api) => insert(&self.jes, capability, api),
        }
    }

    pub fn register_uss_api(&self, api: Arc<dyn UssApi>) -> Result<()> {
        self.register(Implementation::Uss(api))
    }

    pub fn register_mvs_api(&self, api: Arc<dyn MvsApi>) -> Result<()> {
        self.register(Implementation::Mvs(api))
    }

    pub fn register_jes_api(&self, api: Arc<dyn JesApi>) -> Result<()> {
        self.register(Implementation::Jes(api))
    }

    /// Profile types registered for one capability, sorted.
    pub fn registered_types(&self, capability: Capability) -> Vec<String> {
        match capability {
            Capability::Uss => keys(&self.uss),
            Capability::Mvs => keys(&self.mvs),
            Capability::Jes => keys(&self.jes),
        }
    }

    pub fn registered_uss_api_types(&self) -> Vec<String> {
        self.registered_types(Capability::Uss)
    }

    pub fn registered_mvs_api_types(&self) -> Vec<String> {
        self.registered_types(Capability::Mvs)
    }

    pub fn registered_jes_api_types(&self) -> Vec<String> {
        self.registered_types(Capability::Jes)
    }

    /// Union of the profile types of all capabilities, without duplicates.
    pub fn registered_api_types(&self) -> Vec<String> {
        Capability::ALL
            .iter()
            .flat_map(|&capability| self.registered_types(capability))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether `profile_type` has an implementation for `capability`.
    pub fn is_registered(&self, capability: Capability, profile_type: &str) -> bool {
        match capability {
            Capability::Uss => contains(&self.uss, profile_type),
            Capability::Mvs => contains(&self.mvs, profile_type),
            Capability::Jes => contains(&self.jes, profile_type),
        }
    }

    /// USS implementation for the profile's type, bound to the profile.
    pub fn get_uss_api(&self, profile: &Profile) -> Result<BoundUssApi> {
        lookup(&self.uss, Capability::Uss, profile)
    }

    /// MVS implementation for the profile's type, bound to the profile.
    pub fn get_mvs_api(&self, profile: &Profile) -> Result<BoundMvsApi> {
        lookup(&self.mvs, Capability::Mvs, profile)
    }

    /// JES implementation for the profile's type, bound to the profile.
    pub fn get_jes_api(&self, profile: &Profile) -> Result<BoundJesApi> {
        lookup(&self.jes, Capability::Jes, profile)
    }

    /// [`get_uss_api`](Self::get_uss_api) on the global register.
    pub fn uss_api_for(profile: &Profile) -> Result<BoundUssApi> {
        Self::global().get_uss_api(profile)
    }

    /// [`get_mvs_api`](Self::get_mvs_api) on the global register.
    pub fn mvs_api_for(profile: &Profile) -> Result<BoundMvsApi> {
        Self::global().get_mvs_api(profile)
    }

    /// [`get_jes_api`](Self::get_jes_api) on the global register.
    pub fn jes_api_for(profile: &Profile) -> Result<BoundJesApi> {
        Self::global().get_jes_api(profile)
    }
}

// Each write is a single insert, so a poisoned table is still consistent.

fn insert<T: CommonApi + ?Sized>(
    table: &Table<T>,
    capability: Capability,
    api: Arc<T>,
) -> Result<()> {
    let profile_type = api.profile_type_name().to_string();
    if profile_type.is_empty() {
        warn!(%capability, "Rejected implementation without a profile type name");
        return Err(ApiError::InvalidImplementation { capability });
    }

    let previous = table
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(profile_type.clone(), api);
    info!(
        %capability,
        profile_type = %profile_type,
        replaced = previous.is_some(),
        "API implementation registered"
    );
    Ok(())
}

fn lookup<T: ?Sized>(
    table: &Table<T>,
    capability: Capability,
    profile: &Profile,
) -> Result<BoundApi<T>> {
    let api = if profile.profile_type.is_empty() {
        None
    } else {
        table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&profile.profile_type)
            .cloned()
    };

    match api {
        Some(api) => {
            debug!(
                %capability,
                profile_type = %profile.profile_type,
                profile = %profile.name,
                "Bound API to profile"
            );
            Ok(BoundApi::new(api, profile.clone()))
        }
        None => {
            warn!(
                %capability,
                profile_type = %profile.profile_type,
                "No API registered for profile type"
            );
            Err(ApiError::UnregisteredProfileType {
                capability,
                profile_type: profile.profile_type.clone(),
            })
        }
    }
}

fn keys<T: ?Sized>(table: &Table<T>) -> Vec<String> {
    let mut keys: Vec<String> = table
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

fn contains<T: ?Sized>(table: &Table<T>, profile_type: &str) -> bool {
    table
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(profile_type)
}
