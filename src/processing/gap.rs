//! Keyword gap analysis between resume and job description rankings

use crate::processing::keywords::KeywordEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Set overlap between the two keyword rankings: `matched` is the
/// intersection, `missing` is the job set minus the resume set. Both lists
/// preserve the job ranking order so rendered output is stable across runs.
pub fn analyze(resume_keywords: &[KeywordEntry], job_keywords: &[KeywordEntry]) -> GapAnalysis {
    let resume_set: HashSet<&str> = resume_keywords
        .iter()
        .map(|entry| entry.token.as_str())
        .collect();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for entry in job_keywords {
        if resume_set.contains(entry.token.as_str()) {
            matched_skills.push(entry.token.clone());
        } else {
            missing_skills.push(entry.token.clone());
        }
    }

    GapAnalysis {
        matched_skills,
        missing_skills,
    }
}
