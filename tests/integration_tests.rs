//! Integration tests for the resume analyzer

use resume_analyzer::input::manager::InputManager;
use resume_analyzer::processing::analyzer::AnalysisEngine;
use resume_analyzer::{AnalysisResult, ResumeAnalyzerError};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("SQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("SQL"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(
        result,
        Err(ResumeAnalyzerError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_document_size_limit() {
    let mut manager = InputManager::new().with_max_document_bytes(16);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_full_pipeline_over_fixtures() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::with_defaults().unwrap();
    let result = engine.analyze(&resume_text, &job_text, 15).unwrap();

    assert!(result.similarity_score > 0.0);
    assert!(result.similarity_score <= 100.0);

    for expected in ["python", "sql", "backend"] {
        assert!(
            result.matched_skills.iter().any(|s| s == expected),
            "{} should be matched",
            expected
        );
    }
    for expected in ["kubernetes", "terraform"] {
        assert!(
            result.missing_skills.iter().any(|s| s == expected),
            "{} should be missing",
            expected
        );
    }
}

#[tokio::test]
async fn test_pipeline_is_deterministic() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::with_defaults().unwrap();
    let first = engine.analyze(&resume_text, &job_text, 15).unwrap();
    let second = engine.analyze(&resume_text, &job_text, 15).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.similarity_score.to_bits(),
        second.similarity_score.to_bits()
    );
}

#[tokio::test]
async fn test_markdown_and_txt_resumes_agree() {
    let mut manager = InputManager::new();
    let txt_resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let md_resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::with_defaults().unwrap();
    let from_txt = engine.analyze(&txt_resume, &job_text, 15).unwrap();
    let from_md = engine.analyze(&md_resume, &job_text, 15).unwrap();

    // Same underlying content, so the keyword gap comes out identical.
    assert_eq!(from_txt.matched_skills, from_md.matched_skills);
    assert_eq!(from_txt.missing_skills, from_md.missing_skills);
}

#[test]
fn test_result_json_round_trip() {
    let engine = AnalysisEngine::with_defaults().unwrap();
    let result = engine
        .analyze(
            "Developed backend services using Python and SQL",
            "Looking for a Python developer with SQL experience",
            10,
        )
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_save_report_to_file() {
    use resume_analyzer::config::OutputFormat;
    use resume_analyzer::output::formatter;

    let engine = AnalysisEngine::with_defaults().unwrap();
    let result = engine
        .analyze(
            "Developed backend services using Python and SQL",
            "Looking for a Python developer with SQL experience",
            10,
        )
        .unwrap();

    let rendered = formatter::format_result(&result, OutputFormat::Markdown, false, true).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");
    formatter::save_to_file(&rendered, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, rendered);
    assert!(written.contains("# Resume Analysis"));
}
