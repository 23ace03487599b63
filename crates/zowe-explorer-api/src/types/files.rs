//! USS file records and request bodies.

use serde::{Deserialize, Serialize};

/// USS directory entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UssEntry {
    /// File or directory name.
    pub name: String,
    /// Permission string (e.g. `-rwxr-xr-x`, `drwxr-xr-x`).
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub uid: u32,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub gid: u32,
    #[serde(default)]
    pub group: String,
    /// Last modification time.
    #[serde(default)]
    pub mtime: String,
    /// Codeset tag, e.g. `t ISO8859-1`, `b`, `untagged`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl UssEntry {
    pub fn is_directory(&self) -> bool {
        self.mode.starts_with('d')
    }

    pub fn is_symlink(&self) -> bool {
        self.mode.starts_with('l')
    }
}

/// USS directory listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UssListResponse {
    #[serde(default)]
    pub items: Vec<UssEntry>,
    #[serde(default)]
    pub returned_rows: usize,
    #[serde(default)]
    pub total_rows: usize,
    #[serde(rename = "JSONversion", default)]
    pub json_version: i32,
}

/// Kind of USS node to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UssNodeKind {
    File,
    Directory,
}

/// Body of a USS create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UssCreateRequest {
    #[serde(rename = "type")]
    pub kind: UssNodeKind,
    /// Permission string such as `rwxr-xr-x`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Body of a USS utility request (`move`, `chtag`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UssActionRequest {
    pub request: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
}

impl UssActionRequest {
    /// Move `from` onto the request's target path.
    pub fn move_from(from: impl Into<String>) -> Self {
        Self {
            request: "move".to_string(),
            from: Some(from.into()),
            ..Self::default()
        }
    }

    /// List the codeset tag of the target path.
    pub fn chtag_list() -> Self {
        Self {
            request: "chtag".to_string(),
            action: Some("list".to_string()),
            ..Self::default()
        }
    }
}

/// Output of a USS utility request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UssUtilityResponse {
    #[serde(default)]
    pub stdout: Vec<String>,
}

/// Whether a `chtag -p` line describes binary or mixed content.
///
/// Lines look like `b binary  T=off /u/user/file` or
/// `t ISO8859-1 T=on /u/user/file`; `-` marks an untagged file.
pub fn tag_is_binary_or_mixed(line: &str) -> bool {
    matches!(line.split_whitespace().next(), Some("b") | Some("m"))
}
