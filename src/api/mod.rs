// src/api/mod.rs
//! Operation surface consumed by the presentation layer.
//!
//! Two failure tiers, split by criticality:
//! - creation paths the caller must react to (`add_new_job`,
//!   `add_assessment`, `add_question`, `add_answer`) raise `StoreError`;
//! - everything else logs the failure and returns `None`, which callers
//!   treat as "operation did not take effect".

pub mod assessments;
pub mod jobs;

pub use assessments::*;
pub use jobs::*;
