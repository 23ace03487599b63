//! JES job contract.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{BoundApi, CommonApi};
use crate::profile::Profile;
use crate::types::{JobFeedback, JobResponse, SpoolFile};
use crate::Result;

/// Access to batch jobs and their spool for one profile type.
#[async_trait]
pub trait JesApi: CommonApi {
    /// Jobs filtered by owner and job name prefix; both accept `*`.
    async fn get_jobs_by_owner_and_prefix(
        &self,
        profile: &Profile,
        owner: &str,
        prefix: &str,
    ) -> Result<Vec<JobResponse>>;

    /// Status of a single job by ID.
    async fn get_job(&self, profile: &Profile, jobid: &str) -> Result<JobResponse>;

    async fn get_spool_files(
        &self,
        profile: &Profile,
        jobname: &str,
        jobid: &str,
    ) -> Result<Vec<SpoolFile>>;

    async fn get_spool_content_by_id(
        &self,
        profile: &Profile,
        jobname: &str,
        jobid: &str,
        spool_id: u32,
    ) -> Result<String>;

    /// Write every spool file of the job below `dir`, returning the paths
    /// written.
    async fn download_spool_content(
        &self,
        profile: &Profile,
        jobname: &str,
        jobid: &str,
        dir: &Path,
    ) -> Result<Vec<PathBuf>>;

    /// The JCL the job was submitted with.
    async fn get_jcl_for_job(&self, profile: &Profile, job: &JobResponse) -> Result<String>;

    /// Submit inline JCL.
    async fn submit_jcl(&self, profile: &Profile, jcl: &str) -> Result<JobResponse>;

    /// Submit the JCL stored in a data set or member.
    async fn submit_job(&self, profile: &Profile, dsn: &str) -> Result<JobResponse>;

    /// Purge a job and its output.
    async fn delete_job(&self, profile: &Profile, jobname: &str, jobid: &str)
        -> Result<JobFeedback>;
}

impl BoundApi<dyn JesApi> {
    pub async fn get_jobs_by_owner_and_prefix(
        &self,
        owner: &str,
        prefix: &str,
    ) -> Result<Vec<JobResponse>> {
        self.api
            .get_jobs_by_owner_and_prefix(&self.profile, owner, prefix)
            .await
    }

    pub async fn get_job(&self, jobid: &str) -> Result<JobResponse> {
        self.api.get_job(&self.profile, jobid).await
    }

    pub async fn get_spool_files(&self, jobname: &str, jobid: &str) -> Result<Vec<SpoolFile>> {
        self.api.get_spool_files(&self.profile, jobname, jobid).await
    }

    pub async fn get_spool_content_by_id(
        &self,
        jobname: &str,
        jobid: &str,
        spool_id: u32,
    ) -> Result<String> {
        self.api
            .get_spool_content_by_id(&self.profile, jobname, jobid, spool_id)
            .await
    }

    pub async fn download_spool_content(
        &self,
        jobname: &str,
        jobid: &str,
        dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        self.api
            .download_spool_content(&self.profile, jobname, jobid, dir)
            .await
    }

    pub async fn get_jcl_for_job(&self, job: &JobResponse) -> Result<String> {
        self.api.get_jcl_for_job(&self.profile, job).await
    }

    pub async fn submit_jcl(&self, jcl: &str) -> Result<JobResponse> {
        self.api.submit_jcl(&self.profile, jcl).await
    }

    pub async fn submit_job(&self, dsn: &str) -> Result<JobResponse> {
        self.api.submit_job(&self.profile, dsn).await
    }

    pub async fn delete_job(&self, jobname: &str, jobid: &str) -> Result<JobFeedback> {
        self.api.delete_job(&self.profile, jobname, jobid).await
    }
}
