// src/api/assessments.rs
use tracing::error;

use crate::error::StoreError;
use crate::store::JobBoardStore;
use crate::types::requests::{
    AnswerCreateRequest, AnswerPatch, AssessmentCreateRequest, AssessmentPatch,
    QuestionCreateRequest, QuestionPatch,
};
use crate::types::{Answer, Assessment, AssessmentDetail, Question};

/// Assessments for a job, with the full question/answer tree.
pub async fn get_assessments<S: JobBoardStore>(
    store: &S,
    job_id: i64,
) -> Option<Vec<AssessmentDetail>> {
    match store.list_assessments(job_id).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to fetch assessments for job {}: {}", job_id, e);
            None
        }
    }
}

pub async fn get_single_assessment<S: JobBoardStore>(
    store: &S,
    assessment_id: i64,
) -> Option<AssessmentDetail> {
    match store.get_assessment(assessment_id).await {
        Ok(row) => row,
        Err(e) => {
            error!("failed to fetch assessment {}: {}", assessment_id, e);
            None
        }
    }
}

// Creation of the assessment tree is critical: the cascade needs the
// generated ids and must stop when a parent insert fails.

pub async fn add_assessment<S: JobBoardStore>(
    store: &S,
    request: &AssessmentCreateRequest,
) -> Result<Vec<Assessment>, StoreError> {
    store.insert_assessment(request).await
}

pub async fn add_question<S: JobBoardStore>(
    store: &S,
    request: &QuestionCreateRequest,
) -> Result<Vec<Question>, StoreError> {
    store.insert_question(request).await
}

pub async fn add_answer<S: JobBoardStore>(
    store: &S,
    request: &AnswerCreateRequest,
) -> Result<Vec<Answer>, StoreError> {
    store.insert_answer(request).await
}

// By-id patches and deletes are independent, non-cascading from the core's
// point of view; child cleanup on delete is the store's foreign keys.

pub async fn update_assessment<S: JobBoardStore>(
    store: &S,
    assessment_id: i64,
    patch: &AssessmentPatch,
) -> Option<Vec<Assessment>> {
    match store.update_assessment(assessment_id, patch).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to update assessment {}: {}", assessment_id, e);
            None
        }
    }
}

pub async fn delete_assessment<S: JobBoardStore>(
    store: &S,
    assessment_id: i64,
) -> Option<Vec<Assessment>> {
    match store.delete_assessment(assessment_id).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to delete assessment {}: {}", assessment_id, e);
            None
        }
    }
}

pub async fn update_question<S: JobBoardStore>(
    store: &S,
    question_id: i64,
    patch: &QuestionPatch,
) -> Option<Vec<Question>> {
    match store.update_question(question_id, patch).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to update question {}: {}", question_id, e);
            None
        }
    }
}

pub async fn delete_question<S: JobBoardStore>(
    store: &S,
    question_id: i64,
) -> Option<Vec<Question>> {
    match store.delete_question(question_id).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to delete question {}: {}", question_id, e);
            None
        }
    }
}

pub async fn update_answer<S: JobBoardStore>(
    store: &S,
    answer_id: i64,
    patch: &AnswerPatch,
) -> Option<Vec<Answer>> {
    match store.update_answer(answer_id, patch).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to update answer {}: {}", answer_id, e);
            None
        }
    }
}

pub async fn delete_answer<S: JobBoardStore>(store: &S, answer_id: i64) -> Option<Vec<Answer>> {
    match store.delete_answer(answer_id).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            error!("failed to delete answer {}: {}", answer_id, e);
            None
        }
    }
}
