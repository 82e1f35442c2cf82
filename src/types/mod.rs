// src/types/mod.rs
//! Row records as persisted by the remote store, plus the fixed nested
//! shapes each read operation selects.

pub mod requests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub logo_url: Option<String>,
}

/// Display subset of a company joined onto job reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCard {
    pub name: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub requirements: String,
    pub company_id: i64,
    pub recruiter_id: String,
    // Column is camel-cased in the store schema.
    #[serde(rename = "isOpen")]
    pub is_open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedJob {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub job_id: i64,
}

/// Bare id of a saved-job row, joined onto listings so the caller can tell
/// whether it already bookmarked a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRef {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub job_id: i64,
    pub candidate_id: String,
    pub name: String,
    pub status: String,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub job_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub assessment_id: i64,
    pub question_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub question_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
}

// ===== Nested read shapes =====
//
// Each read operation always joins the same child objects; these mirror the
// store's embedded-resource output one to one.

/// Job listing row: saved-state plus company display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub saved: Vec<SavedRef>,
    pub company: Option<CompanyCard>,
}

/// Recruiter-owned job row: company display fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobWithCompany {
    #[serde(flatten)]
    pub job: Job,
    pub company: Option<CompanyCard>,
}

/// Single-job fetch: company plus every application for the job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    pub company: Option<CompanyCard>,
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Saved-job row joined with the bookmarked job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedJobRow {
    #[serde(flatten)]
    pub saved: SavedJob,
    pub job: Option<JobWithCompany>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// Assessment with its full question/answer tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentDetail {
    #[serde(flatten)]
    pub assessment: Assessment,
    #[serde(default)]
    pub questions: Vec<QuestionDetail>,
}
