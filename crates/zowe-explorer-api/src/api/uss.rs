//! USS file system contract.

use async_trait::async_trait;

use super::{BoundApi, CommonApi};
use crate::profile::Profile;
use crate::types::{UssListResponse, UssNodeKind};
use crate::Result;

/// Access to z/OS UNIX files for one profile type.
#[async_trait]
pub trait UssApi: CommonApi {
    /// List the entries of a directory.
    async fn file_list(&self, profile: &Profile, path: &str) -> Result<UssListResponse>;

    /// `true` when the file is tagged binary or mixed, `false` for text or
    /// untagged files.
    async fn is_file_tag_bin_or_ascii(&self, profile: &Profile, path: &str) -> Result<bool>;

    /// Read a file. Text mode lets the host convert from EBCDIC.
    async fn get_contents(&self, profile: &Profile, path: &str, binary: bool) -> Result<Vec<u8>>;

    /// Replace a file's contents, creating it if needed.
    async fn put_contents(
        &self,
        profile: &Profile,
        path: &str,
        content: Vec<u8>,
        binary: bool,
    ) -> Result<()>;

    /// Create a file or directory with an optional permission string.
    async fn create(
        &self,
        profile: &Profile,
        path: &str,
        kind: UssNodeKind,
        mode: Option<&str>,
    ) -> Result<()>;

    /// Delete a file, or a directory tree when `recursive` is set.
    async fn delete(&self, profile: &Profile, path: &str, recursive: bool) -> Result<()>;

    /// Move `from` to `to`.
    async fn rename(&self, profile: &Profile, from: &str, to: &str) -> Result<()>;
}

impl BoundApi<dyn UssApi> {
    pub async fn file_list(&self, path: &str) -> Result<UssListResponse> {
        self.api.file_list(&self.profile, path).await
    }

    pub async fn is_file_tag_bin_or_ascii(&self, path: &str) -> Result<bool> {
        self.api.is_file_tag_bin_or_ascii(&self.profile, path).await
    }

    pub async fn get_contents(&self, path: &str, binary: bool) -> Result<Vec<u8>> {
        self.api.get_contents(&self.profile, path, binary).await
    }

    pub async fn put_contents(&self, path: &str, content: Vec<u8>, binary: bool) -> Result<()> {
        self.api.put_contents(&self.profile, path, content, binary).await
    }

    pub async fn create(&self, path: &str, kind: UssNodeKind, mode: Option<&str>) -> Result<()> {
        self.api.create(&self.profile, path, kind, mode).await
    }

    pub async fn delete(&self, path: &str, recursive: bool) -> Result<()> {
        self.api.delete(&self.profile, path, recursive).await
    }

    pub async fn rename(&self, from: &str, to: &str) -> Result<()> {
        self.api.rename(&self.profile, from, to).await
    }
}
