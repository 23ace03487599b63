//! USS over the z/OSMF REST files service.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use super::client::{content_type, data_type, ZosmfClient, DATA_TYPE_HEADER};
use super::ZOSMF_PROFILE_TYPE;
use crate::api::{CommonApi, UssApi};
use crate::config::ZosmfClientConfig;
use crate::profile::Profile;
use crate::types::{
    tag_is_binary_or_mixed, UssActionRequest, UssCreateRequest, UssListResponse, UssNodeKind,
    UssUtilityResponse,
};
use crate::Result;

const FS: &str = "/zosmf/restfiles/fs";

/// Default USS implementation.
#[derive(Debug)]
pub struct ZosmfUssApi {
    client: ZosmfClient,
}

impl ZosmfUssApi {
    pub fn new(config: ZosmfClientConfig) -> Self {
        Self {
            client: ZosmfClient::new(config),
        }
    }

    pub fn client(&self) -> &ZosmfClient {
        &self.client
    }
}

fn file_url(path: &str) -> String {
    format!("{FS}/{}", path.trim_start_matches('/'))
}

impl CommonApi for ZosmfUssApi {
    fn profile_type_name(&self) -> &str {
        ZOSMF_PROFILE_TYPE
    }
}

#[async_trait]
impl UssApi for ZosmfUssApi {
    async fn file_list(&self, profile: &Profile, path: &str) -> Result<UssListResponse> {
        let request = self
            .client
            .request(profile, Method::GET, FS, &[("path", path)])?;
        self.client.json(request).await
    }

    async fn is_file_tag_bin_or_ascii(&self, profile: &Profile, path: &str) -> Result<bool> {
        let request = self
            .client
            .request(profile, Method::PUT, &file_url(path), &[])?
            .json(&UssActionRequest::chtag_list());
        let response: UssUtilityResponse = self.client.json(request).await?;
        Ok(response
            .stdout
            .first()
            .is_some_and(|line| tag_is_binary_or_mixed(line)))
    }

    async fn get_contents(&self, profile: &Profile, path: &str, binary: bool) -> Result<Vec<u8>> {
        let request = self
            .client
            .request(profile, Method::GET, &file_url(path), &[])?
            .header(DATA_TYPE_HEADER, data_type(binary));
        self.client.bytes(request).await
    }

    async fn put_contents(
        &self,
        profile: &Profile,
        path: &str,
        content: Vec<u8>,
        binary: bool,
    ) -> Result<()> {
        let request = self
            .client
            .request(profile, Method::PUT, &file_url(path), &[])?
            .header(DATA_TYPE_HEADER, data_type(binary))
            .header(CONTENT_TYPE, content_type(binary))
            .body(content);
        self.client.execute(request).await
    }

    async fn create(
        &self,
        profile: &Profile,
        path: &str,
        kind: UssNodeKind,
        mode: Option<&str>,
    ) -> Result<()> {
        let body = UssCreateRequest {
            kind,
            mode: mode.map(str::to_string),
        };
        let request = self
            .client
            .request(profile, Method::POST, &file_url(path), &[])?
            .json(&body);
        self.client.execute(request).await
    }

    async fn delete(&self, profile: &Profile, path: &str, recursive: bool) -> Result<()> {
        let mut request = self
            .client
            .request(profile, Method::DELETE, &file_url(path), &[])?;
        if recursive {
            request = request.header("X-IBM-Option", "recursive");
        }
        self.client.execute(request).await
    }

    async fn rename(&self, profile: &Profile, from: &str, to: &str) -> Result<()> {
        let request = self
            .client
            .request(profile, Method::PUT, &file_url(to), &[])?
            .json(&UssActionRequest::move_from(from));
        self.client.execute(request).await
    }
}
