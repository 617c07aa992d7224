//! In-process short URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Short URL store backed by a concurrent map.
///
/// Used when no database is configured. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryShortUrlRepository {
    records: DashMap<String, ShortUrl>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.records.get(key).map(|r| r.value().clone()))
    }

    async fn save(&self, record: ShortUrl) -> Result<ShortUrl, AppError> {
        match self.records.entry(record.key.clone()) {
            Entry::Occupied(_) => Err(AppError::key_already_exists(record.key)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn update_reachability_status(&self, key: &str, status: u16) -> Result<(), AppError> {
        if let Some(mut record) = self.records.get_mut(key) {
            record.reachability_status = Some(status);
        }
        Ok(())
    }

    async fn find_reachability_status(&self, key: &str) -> Result<Option<u16>, AppError> {
        Ok(self
            .records
            .get(key)
            .and_then(|r| r.reachability_status))
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.records.remove(key).is_some())
    }
}
