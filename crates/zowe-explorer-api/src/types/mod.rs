//! Records exchanged through the capability contracts.
//!
//! Shapes follow the z/OSMF REST JSON so the default backend can decode
//! responses directly; other backends map their own data onto them.

pub mod datasets;
pub mod error;
pub mod files;
pub mod jobs;

pub use datasets::{
    DatasetCopyRequest, DatasetCreateParams, DatasetListItem, DatasetListResponse, DatasetRef,
    DatasetRenameRequest, MemberListItem, MemberListResponse,
};
pub use error::ZosmfErrorBody;
pub use files::{
    tag_is_binary_or_mixed, UssActionRequest, UssCreateRequest, UssEntry, UssListResponse,
    UssNodeKind, UssUtilityResponse,
};
pub use jobs::{JobFeedback, JobResponse, JobStepData, SpoolFile, SubmitFileRequest};

use std::path::{Component, Path};

use crate::error::ApiError;
use crate::Result;

/// Check that `value` is usable as exactly one URL path segment or local
/// file name.
///
/// Rejects empty names, `.`, `..`, absolute paths and anything containing a
/// `/` or `\` separator. `what` names the value in the error message.
pub fn single_segment<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let mut components = Path::new(value).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || value.contains(['/', '\\']) {
        return Err(ApiError::InvalidArgument(format!(
            "{what} '{value}' is not a single path segment"
        )));
    }
    Ok(value)
}
