//! Connection details read from a `zosmf` profile.

use reqwest::Url;

use crate::error::ApiError;
use crate::profile::Profile;
use crate::Result;

const DEFAULT_PORT: u16 = 443;

/// Everything needed to reach one z/OSMF instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZosmfSession {
    /// `scheme://host:port[/basePath]`.
    pub base_url: Url,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Verify the server certificate.
    pub reject_unauthorized: bool,
}

impl ZosmfSession {
    /// Read `host`, `port`, `protocol`, `basePath`, `user`, `password` and
    /// `rejectUnauthorized` from the profile.
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        let host = profile.string("host").ok_or_else(|| ApiError::MissingProfileField {
            profile: profile.name.clone(),
            field: "host",
        })?;
        let port = profile.u16("port").unwrap_or(DEFAULT_PORT);
        let protocol = profile
            .string("protocol")
            .unwrap_or_else(|| "https".to_string())
            .to_ascii_lowercase();
        if protocol != "https" && protocol != "http" {
            return Err(ApiError::InvalidArgument(format!(
                "profile '{}' has unsupported protocol '{}'",
                profile.name, protocol
            )));
        }
        let base_path = profile
            .string("basePath")
            .map(|p| format!("/{}", p.trim_matches('/')))
            .unwrap_or_default();

        let raw = format!("{protocol}://{host}:{port}{base_path}");
        let base_url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            base_url,
            user: profile.string("user"),
            password: profile.string("password"),
            reject_unauthorized: profile.bool("rejectUnauthorized").unwrap_or(true),
        })
    }

    /// Absolute URL for a REST path. Each `/`-separated part of `path` is
    /// percent-encoded as one segment.
    ///
    /// `.` and `..` parts are rejected rather than resolved, so a request
    /// always targets the path the caller named.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        if let Some(dots) = path.split('/').find(|p| *p == "." || *p == "..") {
            return Err(ApiError::InvalidArgument(format!(
                "path '{path}' contains a '{dots}' segment"
            )));
        }
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "URL cannot be a base".to_string(),
            })?;
            segments.pop_if_empty();
            for part in path.split('/').filter(|p| !p.is_empty()) {
                segments.push(part);
            }
        }
        Ok(url)
    }
}
