//! Two-document TF-IDF cosine similarity

use std::collections::BTreeMap;

/// Documents in the vector space. The IDF is computed over exactly these
/// two, never a wider corpus.
const CORPUS_SIZE: f64 = 2.0;

/// Cosine similarity between two whitespace-joined token streams, scaled to
/// a 0-100 score with two-decimal precision.
///
/// Term weights follow scikit-learn's `TfidfVectorizer` defaults over a
/// corpus of exactly these two documents: raw term counts for TF, smoothed
/// IDF `ln((1 + n) / (1 + df)) + 1` with `n = 2`, and L2-normalized
/// vectors. A term appearing in both documents gets the minimal weight
/// factor of 1.0 while a term unique to one side is amplified; substituting
/// a corpus-wide IDF silently changes the scores. Either side empty yields
/// 0.0 rather than a division by zero.
pub fn similarity_score(resume: &str, job: &str) -> f64 {
    let resume_counts = term_counts(resume);
    let job_counts = term_counts(job);

    if resume_counts.is_empty() || job_counts.is_empty() {
        return 0.0;
    }

    let resume_vector = tfidf_vector(&resume_counts, &job_counts);
    let job_vector = tfidf_vector(&job_counts, &resume_counts);

    // Both vectors are unit length, so the dot product is the cosine.
    let cosine: f64 = resume_vector
        .iter()
        .filter_map(|(term, weight)| job_vector.get(term).map(|other| weight * other))
        .sum();

    round_two_decimals(cosine * 100.0)
}

fn term_counts(text: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for term in text.split_whitespace() {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// TF-IDF vector for one document, L2-normalized. `other` supplies the
/// document-frequency contribution of the second corpus member.
fn tfidf_vector<'a>(
    own: &BTreeMap<&'a str, usize>,
    other: &BTreeMap<&str, usize>,
) -> BTreeMap<&'a str, f64> {
    let mut vector: BTreeMap<&str, f64> = own
        .iter()
        .map(|(&term, &count)| {
            let doc_frequency = if other.contains_key(term) { 2.0 } else { 1.0 };
            let idf = ((1.0 + CORPUS_SIZE) / (1.0 + doc_frequency)).ln() + 1.0;
            (term, count as f64 * idf)
        })
        .collect();

    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }

    vector
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
