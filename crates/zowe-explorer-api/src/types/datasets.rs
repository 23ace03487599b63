//! Data set records and request bodies.

use serde::{Deserialize, Serialize};

/// Result of a data set list by level pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetListResponse {
    /// Matching data sets.
    #[serde(default)]
    pub items: Vec<DatasetListItem>,
    /// Number of rows returned.
    #[serde(default)]
    pub returned_rows: usize,
    /// Total rows matching the query.
    #[serde(default)]
    pub total_rows: usize,
    #[serde(rename = "JSONversion", default)]
    pub json_version: i32,
}

/// A single data set with base attributes.
///
/// Numeric attributes arrive as JSON strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetListItem {
    /// Data set name.
    pub dsname: String,
    /// Organization (PS, PO, PO-E, VS).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsorg: Option<String>,
    /// Record format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recfm: Option<String>,
    /// Logical record length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lrecl: Option<String>,
    /// Block size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blksz: Option<String>,
    /// Volume serial. `MIGRAT` when migrated by HSM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catnm: Option<String>,
    /// Migrated flag (`YES`/`NO`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migr: Option<String>,
}

impl DatasetListItem {
    /// Partitioned data sets (PDS and PDSE) hold members.
    pub fn is_partitioned(&self) -> bool {
        self.dsorg.as_deref().is_some_and(|o| o.starts_with("PO"))
    }

    /// Whether HSM has migrated the data set.
    pub fn is_migrated(&self) -> bool {
        self.migr.as_deref() == Some("YES") || self.vol.as_deref() == Some("MIGRAT")
    }
}

/// Result of a member list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberListResponse {
    #[serde(default)]
    pub items: Vec<MemberListItem>,
    #[serde(default)]
    pub returned_rows: usize,
    #[serde(default)]
    pub total_rows: usize,
    #[serde(rename = "JSONversion", default)]
    pub json_version: i32,
}

/// A PDS member entry with optional ISPF statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberListItem {
    /// Member name.
    pub member: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vers: Option<u32>,
    #[serde(rename = "mod", default, skip_serializing_if = "Option::is_none")]
    pub modification: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c4date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m4date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnorc: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inorc: Option<u32>,
    /// Last user to modify the member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Allocation attributes for a new data set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetCreateParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsorg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recfm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lrecl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blksize: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<u32>,
    /// Directory blocks, partitioned data sets only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirblk: Option<u32>,
    /// Allocation unit (TRK, CYL, BLK).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcunit: Option<String>,
    /// `LIBRARY` for a PDSE, `PDS` for a classic PDS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsntype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volser: Option<String>,
    /// Model data set for allocate-like.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like: Option<String>,
}

impl DatasetCreateParams {
    /// Defaults for a sequential FB 80 data set.
    pub fn sequential() -> Self {
        Self {
            dsorg: Some("PS".to_string()),
            recfm: Some("FB".to_string()),
            lrecl: Some(80),
            blksize: Some(6160),
            primary: Some(1),
            secondary: Some(1),
            alcunit: Some("CYL".to_string()),
            ..Self::default()
        }
    }

    /// Defaults for a partitioned FB 80 data set.
    pub fn partitioned() -> Self {
        Self {
            dsorg: Some("PO".to_string()),
            dirblk: Some(25),
            ..Self::sequential()
        }
    }
}

/// Reference to a data set, optionally a member of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRef {
    pub dsn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

impl DatasetRef {
    /// Split `HLQ.PDS(MEMBER)` into its data set and member parts.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match name.split_once('(') {
            Some((dsn, rest)) => Self {
                dsn: dsn.to_string(),
                member: Some(rest.trim_end_matches(')').to_string()).filter(|m| !m.is_empty()),
            },
            None => Self {
                dsn: name.to_string(),
                member: None,
            },
        }
    }

    /// Render back to `DSN` or `DSN(MEMBER)`.
    pub fn qualified(&self) -> String {
        match &self.member {
            Some(member) => format!("{}({})", self.dsn, member),
            None => self.dsn.clone(),
        }
    }
}

/// `rename` action body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRenameRequest {
    pub request: String,
    #[serde(rename = "from-dataset")]
    pub from_dataset: DatasetRef,
}

impl DatasetRenameRequest {
    pub fn new(from: DatasetRef) -> Self {
        Self {
            request: "rename".to_string(),
            from_dataset: from,
        }
    }
}

/// `copy` action body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetCopyRequest {
    pub request: String,
    #[serde(rename = "from-dataset")]
    pub from_dataset: DatasetRef,
    /// Overwrite an existing target member.
    #[serde(default)]
    pub replace: bool,
}

impl DatasetCopyRequest {
    pub fn new(from: DatasetRef, replace: bool) -> Self {
        Self {
            request: "copy".to_string(),
            from_dataset: from,
            replace,
        }
    }
}
