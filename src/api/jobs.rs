// src/api/jobs.rs
use tracing::{error, info};

use crate::error::StoreError;
use crate::query::JobFilter;
use crate::store::JobBoardStore;
use crate::types::requests::{JobCreateRequest, SavedJobRequest};
use crate::types::{Job, JobDetail, JobListing, JobWithCompany, SavedJob, SavedJobRow};

/// Fetch jobs matching the filter, with saved-state and company card joined.
pub async fn get_jobs<S: JobBoardStore>(store: &S, filter: &JobFilter) -> Option<Vec<JobListing>> {
    match store.list_jobs(filter).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to fetch jobs: {}", e);
            None
        }
    }
}

/// Fetch one job with its company and applications. Also `None` when the id
/// does not resolve.
pub async fn get_single_job<S: JobBoardStore>(store: &S, job_id: i64) -> Option<JobDetail> {
    match store.get_job(job_id).await {
        Ok(row) => row,
        Err(e) => {
            error!("failed to fetch job {}: {}", job_id, e);
            None
        }
    }
}

/// Saved jobs visible to the current caller.
pub async fn get_saved_jobs<S: JobBoardStore>(store: &S) -> Option<Vec<SavedJobRow>> {
    match store.list_saved_jobs().await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to fetch saved jobs: {}", e);
            None
        }
    }
}

/// Jobs created by the given recruiter.
pub async fn get_my_jobs<S: JobBoardStore>(
    store: &S,
    recruiter_id: &str,
) -> Option<Vec<JobWithCompany>> {
    match store.list_jobs_by_recruiter(recruiter_id).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to fetch jobs for recruiter {}: {}", recruiter_id, e);
            None
        }
    }
}

/// Create a job. Critical path: the caller must halt on error.
pub async fn add_new_job<S: JobBoardStore>(
    store: &S,
    request: &JobCreateRequest,
) -> Result<Vec<Job>, StoreError> {
    let rows = store.insert_job(request).await?;
    if let Some(job) = rows.first() {
        info!("created job {} ({})", job.id, job.title);
    }
    Ok(rows)
}

pub async fn delete_job<S: JobBoardStore>(store: &S, job_id: i64) -> Option<Vec<Job>> {
    match store.delete_job(job_id).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to delete job {}: {}", job_id, e);
            None
        }
    }
}

pub async fn update_hiring_status<S: JobBoardStore>(
    store: &S,
    job_id: i64,
    is_open: bool,
) -> Option<Vec<Job>> {
    match store.update_hiring_status(job_id, is_open).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to update hiring status for job {}: {}", job_id, e);
            None
        }
    }
}

/// Add or remove a job bookmark.
///
/// The branch is selected by the caller's `already_saved` flag, taken from a
/// previously fetched listing; the relation is not re-checked here, so
/// concurrent toggles from the same caller can duplicate a row or delete
/// nothing. Failures are logged and surface only as `None`.
pub async fn save_job<S: JobBoardStore>(
    store: &S,
    already_saved: bool,
    request: &SavedJobRequest,
) -> Option<Vec<SavedJob>> {
    if already_saved {
        match store.delete_saved_job(request.job_id).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("failed to remove saved job {}: {}", request.job_id, e);
                None
            }
        }
    } else {
        match store.insert_saved_job(request).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("failed to save job {}: {}", request.job_id, e);
                None
            }
        }
    }
}
