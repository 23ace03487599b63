//! Jobs over the z/OSMF REST jobs service.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::{debug, info};

use super::client::ZosmfClient;
use super::ZOSMF_PROFILE_TYPE;
use crate::api::{CommonApi, JesApi};
use crate::config::ZosmfClientConfig;
use crate::error::ApiError;
use crate::profile::Profile;
use crate::types::{single_segment, JobFeedback, JobResponse, SpoolFile, SubmitFileRequest};
use crate::Result;

const JOBS: &str = "/zosmf/restjobs/jobs";

/// Default JES implementation.
#[derive(Debug)]
pub struct ZosmfJesApi {
    client: ZosmfClient,
}

impl ZosmfJesApi {
    pub fn new(config: ZosmfClientConfig) -> Self {
        Self {
            client: ZosmfClient::new(config),
        }
    }

    pub fn client(&self) -> &ZosmfClient {
        &self.client
    }

    async fn list(&self, profile: &Profile, query: &[(&str, &str)]) -> Result<Vec<JobResponse>> {
        let max_jobs = self.client.config().max_jobs.to_string();
        let mut query: Vec<(&str, &str)> = query.to_vec();
        if self.client.config().max_jobs > 0 {
            query.push(("max-jobs", max_jobs.as_str()));
        }
        let request = self.client.request(profile, Method::GET, JOBS, &query)?;
        self.client.json(request).await
    }
}

fn job_url(jobname: &str, jobid: &str) -> Result<String> {
    let jobname = single_segment(jobname.trim(), "job name")?;
    let jobid = single_segment(jobid.trim(), "job ID")?;
    Ok(format!("{JOBS}/{jobname}/{jobid}"))
}

impl CommonApi for ZosmfJesApi {
    fn profile_type_name(&self) -> &str {
        ZOSMF_PROFILE_TYPE
    }
}

#[async_trait]
impl JesApi for ZosmfJesApi {
    async fn get_jobs_by_owner_and_prefix(
        &self,
        profile: &Profile,
        owner: &str,
        prefix: &str,
    ) -> Result<Vec<JobResponse>> {
        self.list(profile, &[("owner", owner), ("prefix", prefix)])
            .await
    }

    async fn get_job(&self, profile: &Profile, jobid: &str) -> Result<JobResponse> {
        let jobid = jobid.trim().to_ascii_uppercase();
        let jobs = self
            .list(profile, &[("owner", "*"), ("jobid", jobid.as_str())])
            .await?;
        jobs.into_iter()
            .find(|job| job.jobid == jobid)
            .ok_or(ApiError::JobNotFound { jobid })
    }

    async fn get_spool_files(
        &self,
        profile: &Profile,
        jobname: &str,
        jobid: &str,
    ) -> Result<Vec<SpoolFile>> {
        let path = format!("{}/files", job_url(jobname, jobid)?);
        let request = self.client.request(profile, Method::GET, &path, &[])?;
        self.client.json(request).await
    }

    async fn get_spool_content_by_id(
        &self,
        profile: &Profile,
        jobname: &str,
        jobid: &str,
        spool_id: u32,
    ) -> Result<String> {
        let path = format!("{}/files/{spool_id}/records", job_url(jobname, jobid)?);
        let request = self.client.request(profile, Method::GET, &path, &[])?;
        self.client.text(request).await
    }

    async fn download_spool_content(
        &self,
        profile: &Profile,
        jobname: &str,
        jobid: &str,
        dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let files = self.get_spool_files(profile, jobname, jobid).await?;
        let targets = files
            .iter()
            .map(|file| -> Result<_> { Ok((file, dir.join(file.download_path()?))) })
            .collect::<Result<Vec<_>>>()?;

        let mut written = Vec::with_capacity(targets.len());
        for (file, target) in targets {
            let content = self
                .get_spool_content_by_id(profile, jobname, jobid, file.id)
                .await?;
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&target, content).await?;
            debug!(path = %target.display(), ddname = %file.ddname, "Spool file written");
            written.push(target);
        }
        info!(jobid, files = written.len(), dir = %dir.display(), "Spool downloaded");
        Ok(written)
    }

    async fn get_jcl_for_job(&self, profile: &Profile, job: &JobResponse) -> Result<String> {
        let path = format!("{}/files/JCL/records", job_url(&job.jobname, &job.jobid)?);
        let request = self.client.request(profile, Method::GET, &path, &[])?;
        self.client.text(request).await
    }

    async fn submit_jcl(&self, profile: &Profile, jcl: &str) -> Result<JobResponse> {
        let request = self
            .client
            .request(profile, Method::PUT, JOBS, &[])?
            .header(CONTENT_TYPE, "text/plain")
            .header("X-IBM-Intrdr-Class", "A")
            .header("X-IBM-Intrdr-Recfm", "F")
            .header("X-IBM-Intrdr-Lrecl", "80")
            .header("X-IBM-Intrdr-Mode", "TEXT")
            .body(jcl.to_string());
        let job: JobResponse = self.client.json(request).await?;
        info!(jobid = %job.jobid, jobname = %job.jobname, "Job submitted");
        Ok(job)
    }

    async fn submit_job(&self, profile: &Profile, dsn: &str) -> Result<JobResponse> {
        let request = self
            .client
            .request(profile, Method::PUT, JOBS, &[])?
            .json(&SubmitFileRequest::for_dataset(dsn));
        let job: JobResponse = self.client.json(request).await?;
        info!(jobid = %job.jobid, jobname = %job.jobname, dsn, "Job submitted");
        Ok(job)
    }

    async fn delete_job(
        &self,
        profile: &Profile,
        jobname: &str,
        jobid: &str,
    ) -> Result<JobFeedback> {
        let request = self
            .client
            .request(profile, Method::DELETE, &job_url(jobname, jobid)?, &[])?;
        self.client.json(request).await
    }
}
