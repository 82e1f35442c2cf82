// src/workflow.rs
//! Cascading creation of a job with its assessment tree.
//!
//! The remote store has no multi-row transaction, so the cascade is an
//! ordered sequence of dependent writes: job, then assessment, then all
//! questions concurrently, then all answers of the committed questions
//! concurrently. No stage starts before its parent id is known, and nothing
//! is rolled back: whatever committed before a failure stays visible.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::{error, info, warn};

use crate::error::StoreError;
use crate::store::JobBoardStore;
use crate::types::requests::{
    AnswerCreateRequest, AppendAssessmentInput, AssessmentCreateRequest, PostJobInput,
    QuestionCreateRequest, QuestionInput,
};
use crate::types::{Answer, Assessment, Job, Question};

/// Per-input ledger of the cascade, so callers can reconcile which children
/// exist after a partial failure.
#[derive(Debug)]
pub struct CascadeOutcome {
    pub job: Job,
    pub assessment: Result<Assessment, StoreError>,
    /// One entry per caller question, in input order. Empty when the
    /// assessment insert failed, since no question was attempted.
    pub questions: Vec<QuestionOutcome>,
}

#[derive(Debug)]
pub struct QuestionOutcome {
    pub input: QuestionInput,
    pub result: Result<CreatedQuestion, StoreError>,
}

#[derive(Debug)]
pub struct CreatedQuestion {
    pub question: Question,
    pub answers: Vec<AnswerOutcome>,
}

#[derive(Debug)]
pub struct AnswerOutcome {
    pub answer_text: String,
    pub result: Result<Answer, StoreError>,
}

impl CascadeOutcome {
    /// True when the assessment and every question and answer committed.
    pub fn is_complete(&self) -> bool {
        self.assessment.is_ok() && questions_complete(&self.questions)
    }

    /// Every failure in the tree, in input order.
    pub fn errors(&self) -> Vec<&StoreError> {
        let mut errors: Vec<&StoreError> = self.assessment.as_ref().err().into_iter().collect();
        errors.extend(question_errors(&self.questions));
        errors
    }
}

/// Result of appending an assessment to an existing job.
#[derive(Debug)]
pub struct AssessmentOutcome {
    pub assessment: Assessment,
    pub questions: Vec<QuestionOutcome>,
}

impl AssessmentOutcome {
    pub fn is_complete(&self) -> bool {
        questions_complete(&self.questions)
    }

    pub fn errors(&self) -> Vec<&StoreError> {
        question_errors(&self.questions)
    }
}

fn questions_complete(questions: &[QuestionOutcome]) -> bool {
    questions.iter().all(|q| match &q.result {
        Ok(created) => created.answers.iter().all(|a| a.result.is_ok()),
        Err(_) => false,
    })
}

fn question_errors(questions: &[QuestionOutcome]) -> Vec<&StoreError> {
    let mut errors = Vec::new();
    for outcome in questions {
        match &outcome.result {
            Ok(created) => {
                errors.extend(created.answers.iter().filter_map(|a| a.result.as_ref().err()))
            }
            Err(e) => errors.push(e),
        }
    }
    errors
}

/// Coerce the caller-supplied `is_correct` string. Anything other than the
/// two literal forms is a caller-input defect, rejected rather than guessed.
pub fn parse_is_correct(raw: &str) -> Result<bool, StoreError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(StoreError::Validation(format!(
            "is_correct must be \"true\" or \"false\", got {:?}",
            other
        ))),
    }
}

/// Create a job together with its assessment, questions, and answers.
///
/// `Err` means the job insert itself failed and nothing was created. `Ok`
/// means the job committed; the outcome's ledger says how far the rest of
/// the tree got, and callers treat an incomplete outcome as a failed
/// submission even though the committed prefix remains in the store.
pub async fn post_job_with_assessment<S: JobBoardStore>(
    store: &S,
    input: PostJobInput,
) -> Result<CascadeOutcome, StoreError> {
    let job = first_row(store.insert_job(&input.job).await?)?;
    info!("cascade: created job {} ({})", job.id, job.title);

    let request = AssessmentCreateRequest {
        job_id: job.id,
        name: input.assessment_name,
    };
    let assessment = match store.insert_assessment(&request).await.and_then(first_row) {
        Ok(assessment) => assessment,
        Err(e) => {
            // Job already committed; there is no compensating delete.
            error!("cascade: assessment insert failed for job {}: {}", job.id, e);
            return Ok(CascadeOutcome {
                job,
                assessment: Err(e),
                questions: Vec::new(),
            });
        }
    };

    let questions = run_question_fanout(store, assessment.id, input.questions).await;
    let outcome = CascadeOutcome {
        job,
        assessment: Ok(assessment),
        questions,
    };
    if !outcome.is_complete() {
        warn!(
            "cascade: job {} committed with {} failed child insert(s)",
            outcome.job.id,
            outcome.errors().len()
        );
    }
    Ok(outcome)
}

/// Attach a new assessment with its questions and answers to an existing
/// job. Same cascade minus the job stage; an assessment insert failure is
/// raised and nothing else is attempted.
pub async fn append_assessment<S: JobBoardStore>(
    store: &S,
    job_id: i64,
    input: AppendAssessmentInput,
) -> Result<AssessmentOutcome, StoreError> {
    let request = AssessmentCreateRequest {
        job_id,
        name: input.name,
    };
    let assessment = first_row(store.insert_assessment(&request).await?)?;
    info!("cascade: created assessment {} for job {}", assessment.id, job_id);

    let questions = run_question_fanout(store, assessment.id, input.questions).await;
    Ok(AssessmentOutcome {
        assessment,
        questions,
    })
}

/// Question stage then answer stage, each fan-out/wait-all.
///
/// All question inserts are in flight together; siblings are independent,
/// so one failure never blocks the others. Answers fan out afterwards for
/// every question that committed, concurrently across questions as well.
/// Insert order inside a stage is unspecified.
async fn run_question_fanout<S: JobBoardStore>(
    store: &S,
    assessment_id: i64,
    questions: Vec<QuestionInput>,
) -> Vec<QuestionOutcome> {
    let inserted: Vec<Result<Question, StoreError>> =
        join_all(questions.iter().map(|question| async move {
            let request = QuestionCreateRequest {
                assessment_id,
                question_text: question.question_text.clone(),
            };
            store.insert_question(&request).await.and_then(first_row)
        }))
        .await;

    let answer_stages: Vec<_> = inserted
        .iter()
        .enumerate()
        .filter_map(|(idx, result)| {
            let question_id = result.as_ref().ok()?.id;
            let answers = &questions[idx].answers;
            Some(async move {
                let settled = join_all(answers.iter().map(|answer| async move {
                    let is_correct = match parse_is_correct(&answer.is_correct) {
                        Ok(flag) => flag,
                        Err(e) => {
                            return AnswerOutcome {
                                answer_text: answer.answer_text.clone(),
                                result: Err(e),
                            }
                        }
                    };
                    let request = AnswerCreateRequest {
                        question_id,
                        answer_text: answer.answer_text.clone(),
                        is_correct,
                    };
                    AnswerOutcome {
                        answer_text: answer.answer_text.clone(),
                        result: store.insert_answer(&request).await.and_then(first_row),
                    }
                }))
                .await;
                (idx, settled)
            })
        })
        .collect();
    let mut answers_by_question: HashMap<usize, Vec<AnswerOutcome>> =
        join_all(answer_stages).await.into_iter().collect();

    questions
        .into_iter()
        .zip(inserted)
        .enumerate()
        .map(|(idx, (input, result))| {
            let result = match result {
                Ok(question) => Ok(CreatedQuestion {
                    question,
                    answers: answers_by_question.remove(&idx).unwrap_or_default(),
                }),
                Err(e) => {
                    error!("cascade: question insert failed: {}", e);
                    Err(e)
                }
            };
            QuestionOutcome { input, result }
        })
        .collect()
}

fn first_row<T>(rows: Vec<T>) -> Result<T, StoreError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::Validation("insert returned no rows".to_string()))
}
