use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::{ListingError, ListingResult};
use crate::llm::LlmProvider;
use crate::models::{
    EnrichmentReport, PropertyRecord, PropertyResult, SearchRequest, SearchResponse,
};
use crate::prompts;
use crate::repository::ListingRepository;

/// Tuning knobs for semantic search
#[derive(Debug, Clone, Copy)]
pub struct SearchSettings {
    /// Minimum similarity score a hit must reach to be returned
    pub score_threshold: f64,
    /// Candidate pool size as a multiple of the requested limit
    pub candidate_multiplier: i64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            score_threshold: 0.7,
            candidate_multiplier: 10,
        }
    }
}

/// Business logic for semantic listing search and offline enrichment
pub struct ListingService<R, L> {
    repository: Arc<R>,
    llm: Arc<L>,
    settings: SearchSettings,
}

impl<R, L> ListingService<R, L>
where
    R: ListingRepository,
    L: LlmProvider,
{
    pub fn new(repository: R, llm: L) -> Self {
        Self::with_settings(repository, llm, SearchSettings::default())
    }

    pub fn with_settings(repository: R, llm: L, settings: SearchSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            llm: Arc::new(llm),
            settings,
        }
    }

    /// Semantic search: embed the query, run the vector search, drop
    /// hits below the score threshold, and summarize the survivors.
    pub async fn search(&self, request: SearchRequest) -> ListingResult<SearchResponse> {
        request.validate()?;

        let query_vector = self.llm.embed(&request.query).await?;
        let num_candidates = request.limit * self.settings.candidate_multiplier;
        let hits = self
            .repository
            .vector_search(&query_vector, request.limit, num_candidates)
            .await?;

        let matches: Vec<_> = hits
            .into_iter()
            .filter(|hit| hit.score >= self.settings.score_threshold)
            .collect();
        debug!(
            query = %request.query,
            matches = matches.len(),
            threshold = self.settings.score_threshold,
            "Vector search complete"
        );

        let summary = if matches.is_empty() {
            None
        } else {
            let prompt = prompts::summary_prompt(&request.query, &matches);
            Some(self.llm.generate(prompts::SUMMARY_SYSTEM, &prompt).await?)
        };

        Ok(SearchResponse {
            results: matches.into_iter().map(PropertyResult::from).collect(),
            summary,
        })
    }

    /// Fetch a single listing by id
    pub async fn get_property(&self, id: &str) -> ListingResult<PropertyResult> {
        let document = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ListingError::NotFound(id.to_string()))?;
        Ok(PropertyResult::from(document))
    }

    /// Generate marketing copy and an embedding for one record, then
    /// upsert the enriched document. Copy and embedding are always
    /// regenerated together so they never drift apart.
    pub async fn enrich_property(&self, record: PropertyRecord) -> ListingResult<()> {
        let prompt = prompts::listing_copy_prompt(&record);
        let listing_copy = self
            .llm
            .generate(prompts::LISTING_COPY_SYSTEM, &prompt)
            .await?;
        let embedding = self.llm.embed(&listing_copy).await?;

        let document =
            crate::models::PropertyDocument::new(record, listing_copy, embedding);
        self.repository.upsert(&document).await?;
        debug!(id = %document.id, "Enriched property");
        Ok(())
    }

    /// Enrich records in sequential batches of `batch_size`, logging
    /// progress after every batch. A failure on one record is logged
    /// and counted; the run continues with the rest.
    pub async fn enrich_all(
        &self,
        records: Vec<PropertyRecord>,
        batch_size: usize,
    ) -> EnrichmentReport {
        let batch_size = batch_size.max(1);
        let total = records.len();
        let batches = total.div_ceil(batch_size);
        let mut report = EnrichmentReport::default();

        for (index, batch) in records.chunks(batch_size).enumerate() {
            for record in batch {
                let id = record.id.clone();
                match self.enrich_property(record.clone()).await {
                    Ok(()) => report.enriched += 1,
                    Err(err) => {
                        warn!(id = %id, error = %err, "Failed to enrich property");
                        report.failed += 1;
                    }
                }
            }
            info!(
                batch = index + 1,
                batches,
                enriched = report.enriched,
                failed = report.failed,
                "Enrichment batch complete"
            );
        }

        info!(
            total,
            enriched = report.enriched,
            failed = report.failed,
            "Enrichment run finished"
        );
        report
    }
}
