//! Analysis engine: one-shot pipeline from raw text to structured result

use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::gap;
use crate::processing::keywords::{self, KeywordEntry};
use crate::processing::normalizer::normalize;
use crate::processing::similarity::similarity_score;
use crate::processing::tokenizer::{Lexicon, Tokenizer};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// A captured input document. Request-scoped; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub source: DocumentSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSource {
    UploadedFile,
    DirectEntry,
}

impl Document {
    pub fn new(content: String, source: DocumentSource) -> Self {
        Self { content, source }
    }
}

/// Structured output of one analysis cycle.
///
/// `matched_skills` and `missing_skills` are in job-ranking order;
/// identical inputs produce bit-identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// TF-IDF cosine similarity scaled to 0-100, two decimals.
    pub similarity_score: f64,
    pub resume_keywords: Vec<KeywordEntry>,
    pub job_keywords: Vec<KeywordEntry>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Coordinates normalization, tokenization, scoring and gap analysis.
///
/// All per-request data stays on the stack of `analyze`; the engine itself
/// only holds the read-only stopword lexicon, so one instance can serve
/// concurrent analyses.
pub struct AnalysisEngine {
    tokenizer: Tokenizer,
}

impl AnalysisEngine {
    /// Build an engine from configuration. Loading the stopword reference
    /// data happens here, once, before any request is served.
    pub fn new(config: &Config) -> Result<Self> {
        let tokenizer = match &config.processing.stopword_file {
            Some(path) => {
                info!("Loading custom stopword list from {}", path.display());
                Tokenizer::with_lexicon(Lexicon::from_file(path)?)
            }
            None => Tokenizer::english()?,
        };

        Ok(Self { tokenizer })
    }

    /// Engine with the built-in English stopword set.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::english()?,
        })
    }

    /// Run one analysis cycle over raw resume and job description text.
    ///
    /// Fails with `EmptyInput` if either side yields zero tokens after
    /// normalization and filtering, and with `InvalidInput` for a zero
    /// keyword limit. A failure at any stage aborts the whole request.
    pub fn analyze(
        &self,
        resume_text: &str,
        job_text: &str,
        keyword_limit: usize,
    ) -> Result<AnalysisResult> {
        if keyword_limit == 0 {
            return Err(ResumeAnalyzerError::InvalidInput(
                "Keyword limit must be at least 1".to_string(),
            ));
        }

        let resume_tokens = self.tokenizer.tokenize(&normalize(resume_text));
        let job_tokens = self.tokenizer.tokenize(&normalize(job_text));
        debug!(
            "Tokenized inputs: {} resume tokens, {} job tokens",
            resume_tokens.len(),
            job_tokens.len()
        );

        if resume_tokens.is_empty() {
            return Err(ResumeAnalyzerError::EmptyInput(
                "No resume tokens survive normalization and filtering".to_string(),
            ));
        }
        if job_tokens.is_empty() {
            return Err(ResumeAnalyzerError::EmptyInput(
                "No job description tokens survive normalization and filtering".to_string(),
            ));
        }

        let similarity_score = similarity_score(&resume_tokens.join(" "), &job_tokens.join(" "));

        let resume_keywords = keywords::rank(&resume_tokens, keyword_limit);
        let job_keywords = keywords::rank(&job_tokens, keyword_limit);
        let gap = gap::analyze(&resume_keywords, &job_keywords);

        info!(
            "Analysis complete: score {:.2}, {} matched, {} missing",
            similarity_score,
            gap.matched_skills.len(),
            gap.missing_skills.len()
        );

        Ok(AnalysisResult {
            similarity_score,
            resume_keywords,
            job_keywords,
            matched_skills: gap.matched_skills,
            missing_skills: gap.missing_skills,
        })
    }

    /// Analyze captured documents; same contract as [`analyze`](Self::analyze).
    pub fn analyze_documents(
        &self,
        resume: &Document,
        job: &Document,
        keyword_limit: usize,
    ) -> Result<AnalysisResult> {
        self.analyze(&resume.content, &job.content, keyword_limit)
    }

    /// Extract text from a PDF payload and analyze it against the job
    /// description. Malformed PDF bytes fail with `PdfExtraction`; pages
    /// without an embedded text layer contribute nothing.
    pub fn analyze_pdf(
        &self,
        resume_pdf: &[u8],
        job_text: &str,
        keyword_limit: usize,
    ) -> Result<AnalysisResult> {
        let resume_text = crate::input::text_extractor::extract_pdf_bytes(resume_pdf)?;
        self.analyze(&resume_text, job_text, keyword_limit)
    }
}
