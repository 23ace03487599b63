//! Data sets over the z/OSMF REST files service.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::json;

use super::client::{content_type, data_type, ZosmfClient, DATA_TYPE_HEADER};
use super::ZOSMF_PROFILE_TYPE;
use crate::api::{CommonApi, MvsApi};
use crate::config::ZosmfClientConfig;
use crate::error::ApiError;
use crate::profile::Profile;
use crate::types::{
    single_segment, DatasetCopyRequest, DatasetCreateParams, DatasetListResponse, DatasetRef,
    DatasetRenameRequest, MemberListResponse,
};
use crate::Result;

const DS: &str = "/zosmf/restfiles/ds";
const ATTRIBUTES_HEADER: &str = "X-IBM-Attributes";

/// Default MVS implementation.
#[derive(Debug)]
pub struct ZosmfMvsApi {
    client: ZosmfClient,
}

impl ZosmfMvsApi {
    pub fn new(config: ZosmfClientConfig) -> Self {
        Self {
            client: ZosmfClient::new(config),
        }
    }

    pub fn client(&self) -> &ZosmfClient {
        &self.client
    }
}

fn ds_url(dsn: &str) -> Result<String> {
    let qualified = DatasetRef::parse(dsn).qualified();
    Ok(format!("{DS}/{}", single_segment(&qualified, "data set name")?))
}

fn require_member(dsn: &str) -> Result<DatasetRef> {
    let reference = DatasetRef::parse(dsn);
    if reference.member.is_none() {
        return Err(ApiError::InvalidArgument(format!(
            "'{dsn}' does not name a member"
        )));
    }
    Ok(reference)
}

impl CommonApi for ZosmfMvsApi {
    fn profile_type_name(&self) -> &str {
        ZOSMF_PROFILE_TYPE
    }
}

#[async_trait]
impl MvsApi for ZosmfMvsApi {
    async fn data_set(&self, profile: &Profile, pattern: &str) -> Result<DatasetListResponse> {
        let request = self
            .client
            .request(profile, Method::GET, DS, &[("dslevel", pattern.trim())])?
            .header(ATTRIBUTES_HEADER, "base");
        self.client.json(request).await
    }

    async fn all_members(&self, profile: &Profile, dsn: &str) -> Result<MemberListResponse> {
        let path = format!("{}/member", ds_url(dsn)?);
        let request = self
            .client
            .request(profile, Method::GET, &path, &[])?
            .header(ATTRIBUTES_HEADER, "base");
        self.client.json(request).await
    }

    async fn get_contents(&self, profile: &Profile, dsn: &str, binary: bool) -> Result<Vec<u8>> {
        let request = self
            .client
            .request(profile, Method::GET, &ds_url(dsn)?, &[])?
            .header(DATA_TYPE_HEADER, data_type(binary));
        self.client.bytes(request).await
    }

    async fn put_contents(
        &self,
        profile: &Profile,
        dsn: &str,
        content: Vec<u8>,
        binary: bool,
    ) -> Result<()> {
        let request = self
            .client
            .request(profile, Method::PUT, &ds_url(dsn)?, &[])?
            .header(DATA_TYPE_HEADER, data_type(binary))
            .header(CONTENT_TYPE, content_type(binary))
            .body(content);
        self.client.execute(request).await
    }

    async fn create_data_set(
        &self,
        profile: &Profile,
        dsn: &str,
        params: &DatasetCreateParams,
    ) -> Result<()> {
        let request = self
            .client
            .request(profile, Method::POST, &ds_url(dsn)?, &[])?
            .json(params);
        self.client.execute(request).await
    }

    async fn create_data_set_member(&self, profile: &Profile, dsn: &str) -> Result<()> {
        let reference = require_member(dsn)?;
        self.put_contents(profile, &reference.qualified(), Vec::new(), false)
            .await
    }

    async fn allocate_like_data_set(
        &self,
        profile: &Profile,
        dsn: &str,
        like: &str,
    ) -> Result<()> {
        let params = DatasetCreateParams {
            like: Some(like.trim().to_string()),
            ..DatasetCreateParams::default()
        };
        self.create_data_set(profile, dsn, &params).await
    }

    async fn copy_data_set_member(
        &self,
        profile: &Profile,
        from: &str,
        to: &str,
        replace: bool,
    ) -> Result<()> {
        let source = require_member(from)?;
        let target = require_member(to)?;
        let request = self
            .client
            .request(profile, Method::PUT, &ds_url(&target.qualified())?, &[])?
            .json(&DatasetCopyRequest::new(source, replace));
        self.client.execute(request).await
    }

    async fn rename_data_set(
        &self,
        profile: &Profile,
        old_dsn: &str,
        new_dsn: &str,
    ) -> Result<()> {
        let from = DatasetRef {
            dsn: old_dsn.trim().to_string(),
            member: None,
        };
        let request = self
            .client
            .request(profile, Method::PUT, &ds_url(new_dsn)?, &[])?
            .json(&DatasetRenameRequest::new(from));
        self.client.execute(request).await
    }

    async fn rename_data_set_member(
        &self,
        profile: &Profile,
        dsn: &str,
        old_member: &str,
        new_member: &str,
    ) -> Result<()> {
        let dsn = DatasetRef::parse(dsn).dsn;
        let from = DatasetRef {
            dsn: dsn.clone(),
            member: Some(old_member.trim().to_string()),
        };
        let target = DatasetRef {
            dsn,
            member: Some(new_member.trim().to_string()),
        };
        let request = self
            .client
            .request(profile, Method::PUT, &ds_url(&target.qualified())?, &[])?
            .json(&DatasetRenameRequest::new(from));
        self.client.execute(request).await
    }

    async fn h_migrate_data_set(&self, profile: &Profile, dsn: &str) -> Result<()> {
        let request = self
            .client
            .request(profile, Method::PUT, &ds_url(dsn)?, &[])?
            .json(&json!({ "request": "hmigrate" }));
        self.client.execute(request).await
    }

    async fn delete_data_set(&self, profile: &Profile, dsn: &str) -> Result<()> {
        let request = self
            .client
            .request(profile, Method::DELETE, &ds_url(dsn)?, &[])?;
        self.client.execute(request).await
    }
}
