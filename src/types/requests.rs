// src/types/requests.rs
//! Write payloads. Each create request carries its foreign key as a
//! required field instead of being merged in at call time, so a payload
//! can never reach the store without its parent id.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobCreateRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub requirements: String,
    pub company_id: i64,
    pub recruiter_id: String,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
}

impl JobCreateRequest {
    /// New job payload; hiring status starts open.
    pub fn new(
        title: &str,
        description: &str,
        location: &str,
        requirements: &str,
        company_id: i64,
        recruiter_id: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            requirements: requirements.to_string(),
            company_id,
            recruiter_id: recruiter_id.to_string(),
            is_open: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedJobRequest {
    pub job_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentCreateRequest {
    pub job_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionCreateRequest {
    pub assessment_id: i64,
    pub question_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerCreateRequest {
    pub question_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
}

// ===== Patch payloads for the simple by-id mutations =====

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssessmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

// ===== Cascade workflow input =====

/// Caller-supplied answer: `is_correct` arrives as the raw form string
/// ("true"/"false") and is only coerced inside the cascade.
#[derive(Debug, Clone)]
pub struct AnswerInput {
    pub answer_text: String,
    pub is_correct: String,
}

#[derive(Debug, Clone)]
pub struct QuestionInput {
    pub question_text: String,
    pub answers: Vec<AnswerInput>,
}

/// Full post-job submission: the job itself plus one assessment with its
/// question/answer tree.
#[derive(Debug, Clone)]
pub struct PostJobInput {
    pub job: JobCreateRequest,
    pub assessment_name: String,
    pub questions: Vec<QuestionInput>,
}

/// A new assessment attached to an already existing job.
#[derive(Debug, Clone)]
pub struct AppendAssessmentInput {
    pub name: String,
    pub questions: Vec<QuestionInput>,
}
