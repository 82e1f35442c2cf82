// tests/common/mod.rs
//! In-memory implementation of the store surface, with per-table and
//! per-row fault injection so the cascade's partial-failure behavior can be
//! exercised without a live remote.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::Utc;
use hirewire::error::StoreError;
use hirewire::query::JobFilter;
use hirewire::store::JobBoardStore;
use hirewire::types::requests::{
    AnswerCreateRequest, AnswerPatch, AssessmentCreateRequest, AssessmentPatch, JobCreateRequest,
    QuestionCreateRequest, QuestionPatch, SavedJobRequest,
};
use hirewire::types::{
    Answer, Application, Assessment, AssessmentDetail, Company, CompanyCard, Job, JobDetail,
    JobListing, JobWithCompany, Question, QuestionDetail, SavedJob, SavedJobRow, SavedRef,
};

/// Install the fmt subscriber once per test binary so workflow logging is
/// visible under `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    companies: Vec<Company>,
    jobs: Vec<Job>,
    saved: Vec<SavedJob>,
    applications: Vec<Application>,
    assessments: Vec<Assessment>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    failing_tables: HashSet<String>,
    failing_question_texts: HashSet<String>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check(&self, table: &str) -> Result<(), StoreError> {
        if self.failing_tables.contains(table) {
            Err(StoreError::Transport(format!(
                "injected failure on {}",
                table
            )))
        } else {
            Ok(())
        }
    }

    fn company_card(&self, company_id: i64) -> Option<CompanyCard> {
        self.companies
            .iter()
            .find(|c| c.id == company_id)
            .map(|c| CompanyCard {
                name: c.name.clone(),
                logo_url: c.logo_url.clone(),
            })
    }
}

pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        init_tracing();
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn seed_company(&self, name: &str, logo_url: Option<&str>) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        inner.companies.push(Company {
            id,
            name: name.to_string(),
            logo_url: logo_url.map(str::to_string),
        });
        id
    }

    pub fn seed_application(&self, job_id: i64, candidate_id: &str, name: &str) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        inner.applications.push(Application {
            id,
            created_at: Utc::now(),
            job_id,
            candidate_id: candidate_id.to_string(),
            name: name.to_string(),
            status: "applied".to_string(),
            resume: None,
        });
        id
    }

    /// Make every operation touching `table` fail.
    pub fn fail_table(&self, table: &str) {
        self.inner
            .lock()
            .unwrap()
            .failing_tables
            .insert(table.to_string());
    }

    /// Make the insert of one specific question fail while its siblings
    /// proceed.
    pub fn fail_question(&self, question_text: &str) {
        self.inner
            .lock()
            .unwrap()
            .failing_question_texts
            .insert(question_text.to_string());
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.inner.lock().unwrap().jobs.clone()
    }

    pub fn saved_jobs(&self) -> Vec<SavedJob> {
        self.inner.lock().unwrap().saved.clone()
    }

    pub fn assessments(&self) -> Vec<Assessment> {
        self.inner.lock().unwrap().assessments.clone()
    }

    pub fn questions(&self) -> Vec<Question> {
        self.inner.lock().unwrap().questions.clone()
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.inner.lock().unwrap().answers.clone()
    }
}

impl JobBoardStore for MemoryStore {
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobListing>, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner.check("jobs")?;
        Ok(inner
            .jobs
            .iter()
            .filter(|job| filter.matches(job))
            .map(|job| JobListing {
                job: job.clone(),
                saved: inner
                    .saved
                    .iter()
                    .filter(|s| s.job_id == job.id)
                    .map(|s| SavedRef { id: s.id })
                    .collect(),
                company: inner.company_card(job.company_id),
            })
            .collect())
    }

    async fn get_job(&self, job_id: i64) -> Result<Option<JobDetail>, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner.check("jobs")?;
        Ok(inner.jobs.iter().find(|j| j.id == job_id).map(|job| JobDetail {
            job: job.clone(),
            company: inner.company_card(job.company_id),
            applications: inner
                .applications
                .iter()
                .filter(|a| a.job_id == job_id)
                .cloned()
                .collect(),
        }))
    }

    async fn list_jobs_by_recruiter(
        &self,
        recruiter_id: &str,
    ) -> Result<Vec<JobWithCompany>, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner.check("jobs")?;
        Ok(inner
            .jobs
            .iter()
            .filter(|j| j.recruiter_id == recruiter_id)
            .map(|job| JobWithCompany {
                job: job.clone(),
                company: inner.company_card(job.company_id),
            })
            .collect())
    }

    async fn list_saved_jobs(&self) -> Result<Vec<SavedJobRow>, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner.check("saved_jobs")?;
        Ok(inner
            .saved
            .iter()
            .map(|saved| SavedJobRow {
                saved: saved.clone(),
                job: inner.jobs.iter().find(|j| j.id == saved.job_id).map(|job| {
                    JobWithCompany {
                        job: job.clone(),
                        company: inner.company_card(job.company_id),
                    }
                }),
            })
            .collect())
    }

    async fn list_assessments(&self, job_id: i64) -> Result<Vec<AssessmentDetail>, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner.check("assessments")?;
        Ok(inner
            .assessments
            .iter()
            .filter(|a| a.job_id == job_id)
            .map(|assessment| assessment_detail(&inner, assessment))
            .collect())
    }

    async fn get_assessment(
        &self,
        assessment_id: i64,
    ) -> Result<Option<AssessmentDetail>, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner.check("assessments")?;
        Ok(inner
            .assessments
            .iter()
            .find(|a| a.id == assessment_id)
            .map(|assessment| assessment_detail(&inner, assessment)))
    }

    async fn insert_job(&self, request: &JobCreateRequest) -> Result<Vec<Job>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("jobs")?;
        let job = Job {
            id: inner.next_id(),
            created_at: Utc::now(),
            title: request.title.clone(),
            description: request.description.clone(),
            location: request.location.clone(),
            requirements: request.requirements.clone(),
            company_id: request.company_id,
            recruiter_id: request.recruiter_id.clone(),
            is_open: request.is_open,
        };
        inner.jobs.push(job.clone());
        Ok(vec![job])
    }

    async fn delete_job(&self, job_id: i64) -> Result<Vec<Job>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("jobs")?;
        let (removed, kept): (Vec<Job>, Vec<Job>) =
            inner.jobs.drain(..).partition(|j| j.id == job_id);
        inner.jobs = kept;
        Ok(removed)
    }

    async fn update_hiring_status(
        &self,
        job_id: i64,
        is_open: bool,
    ) -> Result<Vec<Job>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("jobs")?;
        let mut updated = Vec::new();
        for job in inner.jobs.iter_mut().filter(|j| j.id == job_id) {
            job.is_open = is_open;
            updated.push(job.clone());
        }
        Ok(updated)
    }

    async fn insert_saved_job(
        &self,
        request: &SavedJobRequest,
    ) -> Result<Vec<SavedJob>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("saved_jobs")?;
        let saved = SavedJob {
            id: inner.next_id(),
            created_at: Utc::now(),
            job_id: request.job_id,
        };
        inner.saved.push(saved.clone());
        Ok(vec![saved])
    }

    async fn delete_saved_job(&self, job_id: i64) -> Result<Vec<SavedJob>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("saved_jobs")?;
        let (removed, kept): (Vec<SavedJob>, Vec<SavedJob>) =
            inner.saved.drain(..).partition(|s| s.job_id == job_id);
        inner.saved = kept;
        Ok(removed)
    }

    async fn insert_assessment(
        &self,
        request: &AssessmentCreateRequest,
    ) -> Result<Vec<Assessment>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("assessments")?;
        let assessment = Assessment {
            id: inner.next_id(),
            created_at: Utc::now(),
            job_id: request.job_id,
            name: request.name.clone(),
        };
        inner.assessments.push(assessment.clone());
        Ok(vec![assessment])
    }

    async fn update_assessment(
        &self,
        assessment_id: i64,
        patch: &AssessmentPatch,
    ) -> Result<Vec<Assessment>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("assessments")?;
        let name = patch.name.clone();
        let mut updated = Vec::new();
        for assessment in inner.assessments.iter_mut().filter(|a| a.id == assessment_id) {
            if let Some(name) = &name {
                assessment.name = name.clone();
            }
            updated.push(assessment.clone());
        }
        Ok(updated)
    }

    async fn delete_assessment(&self, assessment_id: i64) -> Result<Vec<Assessment>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("assessments")?;
        let (removed, kept): (Vec<Assessment>, Vec<Assessment>) = inner
            .assessments
            .drain(..)
            .partition(|a| a.id == assessment_id);
        inner.assessments = kept;
        // The real store cascades to children through foreign keys.
        let removed_ids: Vec<i64> = removed.iter().map(|a| a.id).collect();
        let orphaned: Vec<i64> = inner
            .questions
            .iter()
            .filter(|q| removed_ids.contains(&q.assessment_id))
            .map(|q| q.id)
            .collect();
        inner.questions.retain(|q| !removed_ids.contains(&q.assessment_id));
        inner.answers.retain(|a| !orphaned.contains(&a.question_id));
        Ok(removed)
    }

    async fn insert_question(
        &self,
        request: &QuestionCreateRequest,
    ) -> Result<Vec<Question>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("questions")?;
        if inner.failing_question_texts.contains(&request.question_text) {
            return Err(StoreError::Transport(format!(
                "injected failure on question {:?}",
                request.question_text
            )));
        }
        let question = Question {
            id: inner.next_id(),
            created_at: Utc::now(),
            assessment_id: request.assessment_id,
            question_text: request.question_text.clone(),
        };
        inner.questions.push(question.clone());
        Ok(vec![question])
    }

    async fn update_question(
        &self,
        question_id: i64,
        patch: &QuestionPatch,
    ) -> Result<Vec<Question>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("questions")?;
        let text = patch.question_text.clone();
        let mut updated = Vec::new();
        for question in inner.questions.iter_mut().filter(|q| q.id == question_id) {
            if let Some(text) = &text {
                question.question_text = text.clone();
            }
            updated.push(question.clone());
        }
        Ok(updated)
    }

    async fn delete_question(&self, question_id: i64) -> Result<Vec<Question>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("questions")?;
        let (removed, kept): (Vec<Question>, Vec<Question>) =
            inner.questions.drain(..).partition(|q| q.id == question_id);
        inner.questions = kept;
        inner.answers.retain(|a| a.question_id != question_id);
        Ok(removed)
    }

    async fn insert_answer(
        &self,
        request: &AnswerCreateRequest,
    ) -> Result<Vec<Answer>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("answers")?;
        let answer = Answer {
            id: inner.next_id(),
            created_at: Utc::now(),
            question_id: request.question_id,
            answer_text: request.answer_text.clone(),
            is_correct: request.is_correct,
        };
        inner.answers.push(answer.clone());
        Ok(vec![answer])
    }

    async fn update_answer(
        &self,
        answer_id: i64,
        patch: &AnswerPatch,
    ) -> Result<Vec<Answer>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("answers")?;
        let (text, is_correct) = (patch.answer_text.clone(), patch.is_correct);
        let mut updated = Vec::new();
        for answer in inner.answers.iter_mut().filter(|a| a.id == answer_id) {
            if let Some(text) = &text {
                answer.answer_text = text.clone();
            }
            if let Some(flag) = is_correct {
                answer.is_correct = flag;
            }
            updated.push(answer.clone());
        }
        Ok(updated)
    }

    async fn delete_answer(&self, answer_id: i64) -> Result<Vec<Answer>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check("answers")?;
        let (removed, kept): (Vec<Answer>, Vec<Answer>) =
            inner.answers.drain(..).partition(|a| a.id == answer_id);
        inner.answers = kept;
        Ok(removed)
    }
}

fn assessment_detail(inner: &Inner, assessment: &Assessment) -> AssessmentDetail {
    AssessmentDetail {
        assessment: assessment.clone(),
        questions: inner
            .questions
            .iter()
            .filter(|q| q.assessment_id == assessment.id)
            .map(|question| QuestionDetail {
                question: question.clone(),
                answers: inner
                    .answers
                    .iter()
                    .filter(|a| a.question_id == question.id)
                    .cloned()
                    .collect(),
            })
            .collect(),
    }
}
