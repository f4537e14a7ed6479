use adivina_data::{
    api::{HintResponse, MAX_HINTS},
    WordCatalog,
};
use rand::Rng;
use std::{sync::Arc, time::Duration};
use tokio::time;
use tracing::debug;

/// Serves authored hints with a short artificial "thinking" delay
pub struct HintService {
    catalog: Arc<WordCatalog>,
    ai_enabled: bool,
    delay_ms: u64,
}

impl HintService {
    pub fn new(catalog: Arc<WordCatalog>, ai_enabled: bool, delay_ms: u64) -> Self {
        Self {
            catalog,
            ai_enabled,
            delay_ms,
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// N-th hint for a word, 1-based
    pub async fn hint(&self, word: &str, index: u32) -> HintResponse {
        if self.ai_enabled {
            // TODO: generate the hint with the configured AI backend instead
            // of the catalog
            debug!("ai_hints is set, serving an authored hint");
        }
        self.think().await;
        HintResponse {
            hint: self.catalog.hint_for(word, index).to_string(),
            used: index,
            max: MAX_HINTS,
        }
    }

    async fn think(&self) {
        if self.delay_ms == 0 {
            return;
        }
        let ms = rand::thread_rng().gen_range(self.delay_ms..=self.delay_ms * 2);
        time::sleep(Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adivina_data::WORD_NOT_FOUND;

    fn service() -> HintService {
        HintService::new(Arc::new(WordCatalog::builtin()), false, 0)
    }

    #[tokio::test]
    async fn serves_the_authored_sequence() {
        let service = service();
        let first = service.hint("chocolate", 1).await;
        assert_eq!(first.hint, "Es un producto derivado de una semilla tropical.");
        assert_eq!(first.used, 1);
        assert_eq!(first.max, MAX_HINTS);

        let third = service.hint("Chocolate", 3).await;
        assert_eq!(third.hint, "Es dulce, viene en presentaciones con leche, negro o blanco.");
    }

    #[tokio::test]
    async fn unknown_words_get_the_lookup_sentinel() {
        let response = service().hint("zeppelin", 1).await;
        assert_eq!(response.hint, WORD_NOT_FOUND);
        assert_eq!(response.used, 1);
    }
}
