//! The composite search pipeline.
//!
//! Wires the pure components together around the external collaborators:
//! analyze → expand → fan out candidate queries to the record sources →
//! merge with semantic results → dedupe by set id → rank.
//!
//! The collaborators are trait seams implemented elsewhere (HTTP clients, a
//! database, a vector store, an LLM); this crate ships only the local
//! JSONL-backed [`local::LocalCatalog`] used by the CLI and tests.
//!
//! A failed candidate search never aborts a request: the failure is logged
//! and contributes zero results. A request that matches nothing returns an
//! empty ranked list, which is a "no results" state distinct from an error.

pub mod local;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::analysis::analyzer::QueryAnalyzer;
use crate::analysis::intent::QueryIntent;
use crate::catalog::record::{CatalogRecord, dedupe_by_id};
use crate::catalog::result::SearchResult;
use crate::error::Result;
use crate::expand::expand;
use crate::rank::rank;

/// A text-searchable source of catalog records, e.g. a remote catalog API or
/// a database. Implementations must be safe to call from multiple threads;
/// the pipeline may fan out candidate queries in parallel.
pub trait RecordSource: Send + Sync {
    /// Search records matching a free-text query. May return an empty list.
    fn search_by_text(&self, query: &str) -> Result<Vec<CatalogRecord>>;

    /// Fetch one record by its set id. Used for on-demand detail retrieval,
    /// not on the ranking path.
    fn fetch_by_id(&self, set_id: &str) -> Result<CatalogRecord>;
}

/// A semantic (embedding) similarity source: nearest records to a text.
pub trait SemanticSource: Send + Sync {
    /// Records semantically closest to the query, best first.
    fn semantic_search(&self, query: &str) -> Result<Vec<CatalogRecord>>;
}

/// Black-box text completion used to turn assembled context into prose.
pub trait ResponseGenerator: Send + Sync {
    /// Complete the given prompt.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// The composite query-understanding and ranking operation.
///
/// # Examples
///
/// ```
/// use brickseek::analysis::QueryAnalyzer;
/// use brickseek::pipeline::SearchPipeline;
///
/// let pipeline = SearchPipeline::new(QueryAnalyzer::new());
/// // With no sources configured every query yields "no results".
/// assert!(pipeline.process_and_rank("oldest star wars sets").is_empty());
/// ```
pub struct SearchPipeline {
    analyzer: QueryAnalyzer,
    sources: Vec<Box<dyn RecordSource>>,
    semantic: Option<Box<dyn SemanticSource>>,
    generator: Option<Box<dyn ResponseGenerator>>,
    parallel: bool,
}

impl SearchPipeline {
    /// Create a pipeline with no collaborators configured.
    pub fn new(analyzer: QueryAnalyzer) -> Self {
        SearchPipeline {
            analyzer,
            sources: Vec::new(),
            semantic: None,
            generator: None,
            parallel: false,
        }
    }

    /// Add a record source. Sources are queried in registration order.
    pub fn with_source(mut self, source: Box<dyn RecordSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Set the semantic similarity source.
    pub fn with_semantic(mut self, semantic: Box<dyn SemanticSource>) -> Self {
        self.semantic = Some(semantic);
        self
    }

    /// Set the response generator for [`SearchPipeline::assist`].
    pub fn with_generator(mut self, generator: Box<dyn ResponseGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Fan out candidate queries across threads instead of sequentially.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The analyzer used by this pipeline.
    pub fn analyzer(&self) -> &QueryAnalyzer {
        &self.analyzer
    }

    /// The first half of the pipeline: analyze the raw text and generate the
    /// candidate query list. Exposed separately so callers can control the
    /// fan-out themselves and feed the collected records to
    /// [`crate::rank::rank`] with the returned intent.
    pub fn build_candidate_queries(&self, raw_text: &str) -> (QueryIntent, Vec<String>) {
        let intent = self.analyzer.analyze(raw_text);
        let candidates = expand(&intent);
        (intent, candidates)
    }

    /// Run the full pipeline: analyze, expand, search, dedupe, rank.
    ///
    /// Collaborator failures are tolerated per candidate; this operation
    /// itself cannot fail. An empty return is "no results".
    pub fn process_and_rank(&self, raw_text: &str) -> Vec<CatalogRecord> {
        let (intent, candidates) = self.build_candidate_queries(raw_text);

        let mut collected = self.collect_candidates(&candidates);

        if let Some(semantic) = &self.semantic {
            match semantic.semantic_search(raw_text) {
                Ok(records) => collected.extend(records),
                Err(e) => warn!(query = raw_text, error = %e, "semantic search failed"),
            }
        }

        let deduped = dedupe_by_id(collected);
        debug!(
            query = raw_text,
            candidates = candidates.len(),
            records = deduped.len(),
            "collected candidate results"
        );

        rank(deduped, &intent)
    }

    /// Run the full pipeline and generate an assistant response from the
    /// ranked records, if a generator is configured.
    ///
    /// # Errors
    ///
    /// Returns an error only if the response generator itself fails; search
    /// failures degrade to fewer (or zero) records as in
    /// [`SearchPipeline::process_and_rank`].
    pub fn assist(&self, raw_text: &str) -> Result<SearchResult> {
        let sets = self.process_and_rank(raw_text);

        let assistant_response = match &self.generator {
            Some(generator) => Some(generator.complete(&build_prompt(raw_text, &sets)?)?),
            None => None,
        };

        Ok(SearchResult {
            sets,
            assistant_response,
        })
    }

    /// Submit every candidate query to every source, flattening results in
    /// candidate order then source order. A failed search logs a warning and
    /// contributes nothing.
    fn collect_candidates(&self, candidates: &[String]) -> Vec<CatalogRecord> {
        let search_one = |candidate: &String| -> Vec<CatalogRecord> {
            let mut records = Vec::new();
            for source in &self.sources {
                match source.search_by_text(candidate) {
                    Ok(found) => records.extend(found),
                    Err(e) => {
                        warn!(candidate = candidate.as_str(), error = %e,
                              "candidate search failed, treating as empty");
                    }
                }
            }
            records
        };

        if self.parallel {
            // Collect preserves candidate order at the join point.
            candidates
                .par_iter()
                .map(search_one)
                .flatten()
                .collect()
        } else {
            candidates.iter().flat_map(search_one).collect()
        }
    }
}

/// Assemble the completion prompt from the query and the ranked records.
fn build_prompt(query: &str, sets: &[CatalogRecord]) -> Result<String> {
    let context = serde_json::to_string_pretty(sets)?;
    Ok(format!(
        "You are a LEGO expert assistant. Use the following ranked catalog \
         records to answer the user's query.\n\
         Records: {context}\n\
         User query: {query}\n\
         Provide a concise, informative response for collectors."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrickseekError;

    struct StaticSource {
        records: Vec<CatalogRecord>,
    }

    impl RecordSource for StaticSource {
        fn search_by_text(&self, query: &str) -> Result<Vec<CatalogRecord>> {
            let query_lower = query.to_lowercase();
            Ok(self
                .records
                .iter()
                .filter(|r| r.name().to_lowercase().contains(&query_lower))
                .cloned()
                .collect())
        }

        fn fetch_by_id(&self, set_id: &str) -> Result<CatalogRecord> {
            self.records
                .iter()
                .find(|r| r.set_id() == set_id)
                .cloned()
                .ok_or_else(|| BrickseekError::not_found(set_id.to_string()))
        }
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn search_by_text(&self, _query: &str) -> Result<Vec<CatalogRecord>> {
            Err(BrickseekError::provider("boom"))
        }

        fn fetch_by_id(&self, _set_id: &str) -> Result<CatalogRecord> {
            Err(BrickseekError::provider("boom"))
        }
    }

    struct EchoGenerator;

    impl ResponseGenerator for EchoGenerator {
        fn complete(&self, prompt: &str) -> Result<String> {
            Ok(format!("echo: {} chars", prompt.len()))
        }
    }

    fn falcon() -> CatalogRecord {
        CatalogRecord::builder()
            .set_id("75192")
            .name("Millennium Falcon")
            .theme("Star Wars")
            .piece_count(7541)
            .release_year(2017)
            .build()
            .unwrap()
    }

    #[test]
    fn test_no_sources_means_no_results() {
        let pipeline = SearchPipeline::new(QueryAnalyzer::new());
        assert!(pipeline.process_and_rank("star wars").is_empty());
    }

    #[test]
    fn test_failed_source_does_not_abort() {
        let pipeline = SearchPipeline::new(QueryAnalyzer::new())
            .with_source(Box::new(FailingSource))
            .with_source(Box::new(StaticSource {
                records: vec![falcon()],
            }));

        let ranked = pipeline.process_and_rank("millennium falcon");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].set_id(), "75192");
    }

    #[test]
    fn test_duplicate_hits_are_deduplicated() {
        // The same record will match several candidate queries.
        let pipeline = SearchPipeline::new(QueryAnalyzer::new()).with_source(Box::new(
            StaticSource {
                records: vec![falcon()],
            },
        ));

        let ranked = pipeline.process_and_rank("millennium falcon");
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let make = |parallel| {
            SearchPipeline::new(QueryAnalyzer::new())
                .with_source(Box::new(StaticSource {
                    records: vec![falcon()],
                }))
                .parallel(parallel)
        };

        let sequential = make(false).process_and_rank("millennium falcon");
        let parallel = make(true).process_and_rank("millennium falcon");
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_blank_query_yields_no_results() {
        let pipeline = SearchPipeline::new(QueryAnalyzer::new()).with_source(Box::new(
            StaticSource {
                records: vec![falcon()],
            },
        ));

        assert!(pipeline.process_and_rank("   ").is_empty());
    }

    #[test]
    fn test_assist_without_generator() {
        let pipeline = SearchPipeline::new(QueryAnalyzer::new());
        let result = pipeline.assist("star wars").unwrap();
        assert!(result.is_empty());
        assert!(result.assistant_response.is_none());
    }

    #[test]
    fn test_assist_with_generator() {
        let pipeline = SearchPipeline::new(QueryAnalyzer::new())
            .with_source(Box::new(StaticSource {
                records: vec![falcon()],
            }))
            .with_generator(Box::new(EchoGenerator));

        let result = pipeline.assist("millennium falcon").unwrap();
        assert_eq!(result.sets.len(), 1);
        assert!(result.assistant_response.unwrap().starts_with("echo:"));
    }
}
