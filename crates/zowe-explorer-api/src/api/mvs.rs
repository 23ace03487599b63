//! MVS data set contract.

use async_trait::async_trait;

use super::{BoundApi, CommonApi};
use crate::profile::Profile;
use crate::types::{DatasetCreateParams, DatasetListResponse, MemberListResponse};
use crate::Result;

/// Access to data sets and members for one profile type.
///
/// Data set names may carry a member in parentheses, `HLQ.PDS(MEMBER)`,
/// wherever a method reads or writes content.
#[async_trait]
pub trait MvsApi: CommonApi {
    /// List data sets matching a level pattern such as `IBMUSER.*`.
    async fn data_set(&self, profile: &Profile, pattern: &str) -> Result<DatasetListResponse>;

    /// List the members of a partitioned data set.
    async fn all_members(&self, profile: &Profile, dsn: &str) -> Result<MemberListResponse>;

    async fn get_contents(&self, profile: &Profile, dsn: &str, binary: bool) -> Result<Vec<u8>>;

    async fn put_contents(
        &self,
        profile: &Profile,
        dsn: &str,
        content: Vec<u8>,
        binary: bool,
    ) -> Result<()>;

    /// Allocate a new data set.
    async fn create_data_set(
        &self,
        profile: &Profile,
        dsn: &str,
        params: &DatasetCreateParams,
    ) -> Result<()>;

    /// Create an empty member; `dsn` must name the member.
    async fn create_data_set_member(&self, profile: &Profile, dsn: &str) -> Result<()>;

    /// Allocate `dsn` with the attributes of `like`.
    async fn allocate_like_data_set(&self, profile: &Profile, dsn: &str, like: &str)
        -> Result<()>;

    /// Copy member `from` to member `to`, both given as `DSN(MEMBER)`.
    async fn copy_data_set_member(
        &self,
        profile: &Profile,
        from: &str,
        to: &str,
        replace: bool,
    ) -> Result<()>;

    async fn rename_data_set(&self, profile: &Profile, old_dsn: &str, new_dsn: &str)
        -> Result<()>;

    async fn rename_data_set_member(
        &self,
        profile: &Profile,
        dsn: &str,
        old_member: &str,
        new_member: &str,
    ) -> Result<()>;

    /// Ask HSM to migrate the data set.
    async fn h_migrate_data_set(&self, profile: &Profile, dsn: &str) -> Result<()>;

    /// Delete a data set, or a member when `dsn` names one.
    async fn delete_data_set(&self, profile: &Profile, dsn: &str) -> Result<()>;
}

impl BoundApi<dyn MvsApi> {
    pub async fn data_set(&self, pattern: &str) -> Result<DatasetListResponse> {
        self.api.data_set(&self.profile, pattern).await
    }

    pub async fn all_members(&self, dsn: &str) -> Result<MemberListResponse> {
        self.api.all_members(&self.profile, dsn).await
    }

    pub async fn get_contents(&self, dsn: &str, binary: bool) -> Result<Vec<u8>> {
        self.api.get_contents(&self.profile, dsn, binary).await
    }

    pub async fn put_contents(&self, dsn: &str, content: Vec<u8>, binary: bool) -> Result<()> {
        self.api.put_contents(&self.profile, dsn, content, binary).await
    }

    pub async fn create_data_set(&self, dsn: &str, params: &DatasetCreateParams) -> Result<()> {
        self.api.create_data_set(&self.profile, dsn, params).await
    }

    pub async fn create_data_set_member(&self, dsn: &str) -> Result<()> {
        self.api.create_data_set_member(&self.profile, dsn).await
    }

    pub async fn allocate_like_data_set(&self, dsn: &str, like: &str) -> Result<()> {
        self.api.allocate_like_data_set(&self.profile, dsn, like).await
    }

    pub async fn copy_data_set_member(&self, from: &str, to: &str, replace: bool) -> Result<()> {
        self.api
            .copy_data_set_member(&self.profile, from, to, replace)
            .await
    }

    pub async fn rename_data_set(&self, old_dsn: &str, new_dsn: &str) -> Result<()> {
        self.api.rename_data_set(&self.profile, old_dsn, new_dsn).await
    }

    pub async fn rename_data_set_member(
        &self,
        dsn: &str,
        old_member: &str,
        new_member: &str,
    ) -> Result<()> {
        self.api
            .rename_data_set_member(&self.profile, dsn, old_member, new_member)
            .await
    }

    pub async fn h_migrate_data_set(&self, dsn: &str) -> Result<()> {
        self.api.h_migrate_data_set(&self.profile, dsn).await
    }

    pub async fn delete_data_set(&self, dsn: &str) -> Result<()> {
        self.api.delete_data_set(&self.profile, dsn).await
    }
}
