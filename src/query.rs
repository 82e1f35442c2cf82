// src/query.rs
//! Filter and selection composition for job-board reads.
//!
//! Filters combine additively: every present field contributes exactly one
//! AND-ed predicate, an absent field contributes nothing, and the result is
//! the same whichever subset is supplied.

use crate::types::Job;

// Nested selections are fixed per read operation.
pub const JOB_LISTING_SELECT: &str = "*,saved:saved_jobs(id),company:companies(name,logo_url)";
pub const JOB_DETAIL_SELECT: &str = "*,company:companies(name,logo_url),applications:applications(*)";
pub const RECRUITER_JOBS_SELECT: &str = "*,company:companies(name,logo_url)";
pub const SAVED_JOBS_SELECT: &str = "*,job:jobs(*,company:companies(name,logo_url))";
pub const ASSESSMENT_SELECT: &str = "*,questions:questions(*,answers:answers(*))";

/// Optional predicates for the job listing.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub location: Option<String>,
    pub company_id: Option<i64>,
    pub search_query: Option<String>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_company(mut self, company_id: i64) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn with_search(mut self, search_query: &str) -> Self {
        self.search_query = Some(search_query.to_string());
        self
    }

    /// Wire-format predicates: exact match on location and company,
    /// case-insensitive substring match on title.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(location) = &self.location {
            params.push(("location".to_string(), format!("eq.{}", location)));
        }

        if let Some(company_id) = self.company_id {
            params.push(("company_id".to_string(), format!("eq.{}", company_id)));
        }

        if let Some(search_query) = &self.search_query {
            params.push(("title".to_string(), format!("ilike.*{}*", search_query)));
        }

        params
    }

    /// The same predicate semantics evaluated locally, for in-process store
    /// implementations.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(location) = &self.location {
            if &job.location != location {
                return false;
            }
        }

        if let Some(company_id) = self.company_id {
            if job.company_id != company_id {
                return false;
            }
        }

        if let Some(search_query) = &self.search_query {
            if !job
                .title
                .to_lowercase()
                .contains(&search_query.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}
