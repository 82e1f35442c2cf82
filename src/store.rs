// src/store.rs
//! Entity repository surface over the remote store.
//!
//! `JobBoardStore` is the seam between the data-access layer and the wire:
//! `StoreClient` implements it over HTTP, and tests drive the same surface
//! with an in-memory implementation. Every method is one remote round trip
//! and every write returns the affected rows, since the cascade workflow
//! depends on generated ids.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::query::{
    JobFilter, ASSESSMENT_SELECT, JOB_DETAIL_SELECT, JOB_LISTING_SELECT, RECRUITER_JOBS_SELECT,
    SAVED_JOBS_SELECT,
};
use crate::types::requests::{
    AnswerCreateRequest, AnswerPatch, AssessmentCreateRequest, AssessmentPatch, JobCreateRequest,
    QuestionCreateRequest, QuestionPatch, SavedJobRequest,
};
use crate::types::{
    Answer, Assessment, AssessmentDetail, Job, JobDetail, JobListing, JobWithCompany, Question,
    SavedJob, SavedJobRow,
};

fn id_param(id: i64) -> Vec<(String, String)> {
    vec![("id".to_string(), format!("eq.{}", id))]
}

#[allow(async_fn_in_trait)]
pub trait JobBoardStore {
    // ----- reads -----
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobListing>, StoreError>;
    async fn get_job(&self, job_id: i64) -> Result<Option<JobDetail>, StoreError>;
    async fn list_jobs_by_recruiter(
        &self,
        recruiter_id: &str,
    ) -> Result<Vec<JobWithCompany>, StoreError>;
    async fn list_saved_jobs(&self) -> Result<Vec<SavedJobRow>, StoreError>;
    async fn list_assessments(&self, job_id: i64) -> Result<Vec<AssessmentDetail>, StoreError>;
    async fn get_assessment(
        &self,
        assessment_id: i64,
    ) -> Result<Option<AssessmentDetail>, StoreError>;

    // ----- job writes -----
    async fn insert_job(&self, request: &JobCreateRequest) -> Result<Vec<Job>, StoreError>;
    async fn delete_job(&self, job_id: i64) -> Result<Vec<Job>, StoreError>;
    async fn update_hiring_status(
        &self,
        job_id: i64,
        is_open: bool,
    ) -> Result<Vec<Job>, StoreError>;

    // ----- saved-job writes -----
    async fn insert_saved_job(
        &self,
        request: &SavedJobRequest,
    ) -> Result<Vec<SavedJob>, StoreError>;
    async fn delete_saved_job(&self, job_id: i64) -> Result<Vec<SavedJob>, StoreError>;

    // ----- assessment tree writes -----
    async fn insert_assessment(
        &self,
        request: &AssessmentCreateRequest,
    ) -> Result<Vec<Assessment>, StoreError>;
    async fn update_assessment(
        &self,
        assessment_id: i64,
        patch: &AssessmentPatch,
    ) -> Result<Vec<Assessment>, StoreError>;
    async fn delete_assessment(&self, assessment_id: i64) -> Result<Vec<Assessment>, StoreError>;

    async fn insert_question(
        &self,
        request: &QuestionCreateRequest,
    ) -> Result<Vec<Question>, StoreError>;
    async fn update_question(
        &self,
        question_id: i64,
        patch: &QuestionPatch,
    ) -> Result<Vec<Question>, StoreError>;
    async fn delete_question(&self, question_id: i64) -> Result<Vec<Question>, StoreError>;

    async fn insert_answer(
        &self,
        request: &AnswerCreateRequest,
    ) -> Result<Vec<Answer>, StoreError>;
    async fn update_answer(
        &self,
        answer_id: i64,
        patch: &AnswerPatch,
    ) -> Result<Vec<Answer>, StoreError>;
    async fn delete_answer(&self, answer_id: i64) -> Result<Vec<Answer>, StoreError>;
}

impl JobBoardStore for StoreClient {
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobListing>, StoreError> {
        self.select("jobs", JOB_LISTING_SELECT, &filter.to_params())
            .await
    }

    async fn get_job(&self, job_id: i64) -> Result<Option<JobDetail>, StoreError> {
        let rows: Vec<JobDetail> = self
            .select("jobs", JOB_DETAIL_SELECT, &id_param(job_id))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn list_jobs_by_recruiter(
        &self,
        recruiter_id: &str,
    ) -> Result<Vec<JobWithCompany>, StoreError> {
        let params = vec![(
            "recruiter_id".to_string(),
            format!("eq.{}", recruiter_id),
        )];
        self.select("jobs", RECRUITER_JOBS_SELECT, &params).await
    }

    async fn list_saved_jobs(&self) -> Result<Vec<SavedJobRow>, StoreError> {
        // Row visibility for the current caller comes from the store's
        // access policy on the forwarded token.
        self.select("saved_jobs", SAVED_JOBS_SELECT, &[]).await
    }

    async fn list_assessments(&self, job_id: i64) -> Result<Vec<AssessmentDetail>, StoreError> {
        let params = vec![("job_id".to_string(), format!("eq.{}", job_id))];
        self.select("assessments", ASSESSMENT_SELECT, &params).await
    }

    async fn get_assessment(
        &self,
        assessment_id: i64,
    ) -> Result<Option<AssessmentDetail>, StoreError> {
        let rows: Vec<AssessmentDetail> = self
            .select("assessments", ASSESSMENT_SELECT, &id_param(assessment_id))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_job(&self, request: &JobCreateRequest) -> Result<Vec<Job>, StoreError> {
        self.insert("jobs", request).await
    }

    async fn delete_job(&self, job_id: i64) -> Result<Vec<Job>, StoreError> {
        self.delete("jobs", &id_param(job_id)).await
    }

    async fn update_hiring_status(
        &self,
        job_id: i64,
        is_open: bool,
    ) -> Result<Vec<Job>, StoreError> {
        let patch = serde_json::json!({ "isOpen": is_open });
        self.update("jobs", &id_param(job_id), &patch).await
    }

    async fn insert_saved_job(
        &self,
        request: &SavedJobRequest,
    ) -> Result<Vec<SavedJob>, StoreError> {
        self.insert("saved_jobs", request).await
    }

    async fn delete_saved_job(&self, job_id: i64) -> Result<Vec<SavedJob>, StoreError> {
        let params = vec![("job_id".to_string(), format!("eq.{}", job_id))];
        self.delete("saved_jobs", &params).await
    }

    async fn insert_assessment(
        &self,
        request: &AssessmentCreateRequest,
    ) -> Result<Vec<Assessment>, StoreError> {
        self.insert("assessments", request).await
    }

    async fn update_assessment(
        &self,
        assessment_id: i64,
        patch: &AssessmentPatch,
    ) -> Result<Vec<Assessment>, StoreError> {
        self.update("assessments", &id_param(assessment_id), patch)
            .await
    }

    async fn delete_assessment(&self, assessment_id: i64) -> Result<Vec<Assessment>, StoreError> {
        self.delete("assessments", &id_param(assessment_id)).await
    }

    async fn insert_question(
        &self,
        request: &QuestionCreateRequest,
    ) -> Result<Vec<Question>, StoreError> {
        self.insert("questions", request).await
    }

    async fn update_question(
        &self,
        question_id: i64,
        patch: &QuestionPatch,
    ) -> Result<Vec<Question>, StoreError> {
        self.update("questions", &id_param(question_id), patch).await
    }

    async fn delete_question(&self, question_id: i64) -> Result<Vec<Question>, StoreError> {
        self.delete("questions", &id_param(question_id)).await
    }

    async fn insert_answer(
        &self,
        request: &AnswerCreateRequest,
    ) -> Result<Vec<Answer>, StoreError> {
        self.insert("answers", request).await
    }

    async fn update_answer(
        &self,
        answer_id: i64,
        patch: &AnswerPatch,
    ) -> Result<Vec<Answer>, StoreError> {
        self.update("answers", &id_param(answer_id), patch).await
    }

    async fn delete_answer(&self, answer_id: i64) -> Result<Vec<Answer>, StoreError> {
        self.delete("answers", &id_param(answer_id)).await
    }
}
