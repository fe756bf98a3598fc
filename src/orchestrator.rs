use crate::ai::client::CompletionGateway;
use crate::ai::prompts::PromptBuilder;
use crate::core::classifier::Classifier;
use crate::core::domain::{Catalog, Domain};
use crate::core::normalizer;
use crate::error::GeoIntError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What one successful invocation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub domain: Domain,
    pub url: String,
}

pub struct Orchestrator<G> {
    classifier: Classifier,
    prompts: PromptBuilder,
    gateway: G,
}

impl<G: CompletionGateway> Orchestrator<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_catalog(gateway, Catalog::builtin())
    }

    pub fn with_catalog(gateway: G, catalog: Catalog) -> Self {
        Self {
            classifier: Classifier::new(catalog),
            prompts: PromptBuilder::new(catalog),
            gateway,
        }
    }

    /// classify -> build prompt -> complete -> normalize. Only the completion
    /// step can fail, and its error is returned untouched.
    pub async fn run(&self, query: &str) -> Result<QueryOutcome, GeoIntError> {
        let run_id = Uuid::new_v4();

        log::info!("[{run_id}] 🧭 Phase 1: Classification");
        let domain = self.classifier.classify(query);
        log::info!("[{run_id}]    -> Query analyzed as {domain} data");

        log::info!("[{run_id}] 📝 Phase 2: Prompt");
        let prompt = self.prompts.build(domain, query);
        log::debug!(
            "[{run_id}]    -> system {} chars, user {} chars",
            prompt.system.len(),
            prompt.user.len()
        );

        log::info!("[{run_id}] 🤖 Phase 3: Completion ({})", self.gateway.model_name());
        let raw = self
            .gateway
            .complete(&prompt.system, &prompt.user)
            .await
            .inspect_err(|e| log::error!("[{run_id}]    -> Completion failed: {e}"))?;

        log::info!("[{run_id}] 🔧 Phase 4: Normalization");
        let url = normalizer::normalize(&raw);
        log::info!("[{run_id}]    -> {url}");

        Ok(QueryOutcome { domain, url })
    }

    /// Runs the pipeline and overwrites `last` only when it succeeds.
    pub async fn run_and_remember(
        &self,
        query: &str,
        last: &mut Option<QueryOutcome>,
    ) -> Result<QueryOutcome, GeoIntError> {
        let outcome = self.run(query).await?;
        *last = Some(outcome.clone());
        Ok(outcome)
    }
}
