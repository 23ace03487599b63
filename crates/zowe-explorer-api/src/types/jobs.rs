//! Job and spool records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::single_segment;
use crate::Result;

/// A job as returned by list, status and submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobResponse {
    /// Job ID (e.g. JOB00042).
    pub jobid: String,
    pub jobname: String,
    #[serde(default)]
    pub owner: String,
    /// INPUT, ACTIVE or OUTPUT.
    #[serde(default)]
    pub status: String,
    /// JOB, STC or TSU.
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub class: String,
    /// Return code (e.g. "CC 0000"), null while active.
    #[serde(default)]
    pub retcode: Option<String>,
    #[serde(default)]
    pub subsystem: String,
    #[serde(rename = "job-correlator", default)]
    pub job_correlator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "files-url", default, skip_serializing_if = "Option::is_none")]
    pub files_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<i32>,
    #[serde(rename = "phase-name", default, skip_serializing_if = "Option::is_none")]
    pub phase_name: Option<String>,
    #[serde(rename = "exec-started", default, skip_serializing_if = "Option::is_none")]
    pub exec_started: Option<String>,
    #[serde(rename = "exec-ended", default, skip_serializing_if = "Option::is_none")]
    pub exec_ended: Option<String>,
    #[serde(rename = "exec-member", default, skip_serializing_if = "Option::is_none")]
    pub exec_member: Option<String>,
    #[serde(rename = "exec-submitted", default, skip_serializing_if = "Option::is_none")]
    pub exec_submitted: Option<String>,
    #[serde(rename = "exec-system", default, skip_serializing_if = "Option::is_none")]
    pub exec_system: Option<String>,
    #[serde(rename = "reason-not-running", default, skip_serializing_if = "Option::is_none")]
    pub reason_not_running: Option<String>,
    #[serde(rename = "step-data", default, skip_serializing_if = "Option::is_none")]
    pub step_data: Option<Vec<JobStepData>>,
}

/// Step data for a job execution step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStepData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smfid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,
    #[serde(rename = "step-name", default, skip_serializing_if = "Option::is_none")]
    pub step_name: Option<String>,
    #[serde(rename = "proc-step-name", default, skip_serializing_if = "Option::is_none")]
    pub proc_step_name: Option<String>,
    #[serde(rename = "program-name", default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// A spool file of a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpoolFile {
    pub jobid: String,
    pub jobname: String,
    /// Spool file numeric ID.
    pub id: u32,
    pub ddname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stepname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procstep: Option<String>,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub recfm: String,
    #[serde(default)]
    pub lrecl: u32,
    #[serde(rename = "byte-count", default)]
    pub byte_count: u64,
    #[serde(rename = "record-count", default)]
    pub record_count: u64,
    #[serde(rename = "job-correlator", default)]
    pub job_correlator: String,
    #[serde(default)]
    pub subsystem: String,
    #[serde(rename = "records-url", default, skip_serializing_if = "Option::is_none")]
    pub records_url: Option<String>,
}

impl SpoolFile {
    /// Relative download path `<jobid>[/<procstep>][/<stepname>]/<ddname>.txt`.
    ///
    /// Every part must be a single plain path segment, so the result always
    /// stays below the download directory.
    pub fn download_path(&self) -> Result<PathBuf> {
        let mut path = PathBuf::from(single_segment(&self.jobid, "job ID")?);
        for step in [&self.procstep, &self.stepname].into_iter().flatten() {
            if !step.is_empty() {
                path.push(single_segment(step, "step name")?);
            }
        }
        path.push(format!("{}.txt", single_segment(&self.ddname, "DD name")?));
        Ok(path)
    }
}

/// Feedback for job actions (purge, cancel, hold, release).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFeedback {
    pub jobid: String,
    pub jobname: String,
    /// 0 on success.
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "original-jobid", default, skip_serializing_if = "Option::is_none")]
    pub original_jobid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sysname: Option<String>,
    #[serde(rename = "job-correlator", default, skip_serializing_if = "Option::is_none")]
    pub job_correlator: Option<String>,
    #[serde(rename = "internal-code", default, skip_serializing_if = "Option::is_none")]
    pub internal_code: Option<String>,
}

/// Body of a submit-from-data-set request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFileRequest {
    /// `//'DSN'` reference to the JCL.
    pub file: String,
}

impl SubmitFileRequest {
    pub fn for_dataset(dsn: &str) -> Self {
        Self {
            file: format!("//'{}'", dsn.trim()),
        }
    }
}
