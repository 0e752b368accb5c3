use contracts::domain::a001_sales_summary::aggregate::SalesSummary;
use once_cell::sync::Lazy;
use std::sync::RwLock;

/// Append-only, process-local store of upload summaries.
///
/// Nothing survives a restart; list order is upload order, oldest first.
pub struct SummaryStore {
    summaries: RwLock<Vec<SalesSummary>>,
}

impl SummaryStore {
    pub fn new() -> Self {
        Self {
            summaries: RwLock::new(Vec::new()),
        }
    }

    pub fn insert(&self, summary: SalesSummary) {
        let mut guard = self
            .summaries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.push(summary);
    }

    pub fn list_all(&self) -> Vec<SalesSummary> {
        let guard = self
            .summaries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone()
    }

    pub fn len(&self) -> usize {
        let guard = self
            .summaries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SummaryStore {
    fn default() -> Self {
        Self::new()
    }
}

static STORE: Lazy<SummaryStore> = Lazy::new(SummaryStore::new);

/// Process-wide store instance used by the service layer.
pub fn store() -> &'static SummaryStore {
    &STORE
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sales_summary::aggregate::SaleDetail;

    fn summary(file_name: &str) -> SalesSummary {
        SalesSummary::from_details(
            file_name.to_string(),
            vec![SaleDetail::new("Widget".to_string(), 1, 1.0)],
        )
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let store = SummaryStore::new();
        assert!(store.is_empty());

        store.insert(summary("first.csv"));
        store.insert(summary("second.csv"));
        store.insert(summary("third.csv"));

        let all = store.list_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].file_name, "first.csv");
        assert_eq!(all[1].file_name, "second.csv");
        assert_eq!(all[2].file_name, "third.csv");
    }

    #[test]
    fn listing_returns_detached_copies() {
        let store = SummaryStore::new();
        store.insert(summary("only.csv"));

        let mut all = store.list_all();
        all.clear();
        assert_eq!(store.len(), 1);
    }
}
