use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use openchart_model::{Concept, ConceptService, Location, LocationService, ServiceError};

#[derive(Debug, Default)]
pub struct InMemoryLocationService {
    locations: RwLock<HashMap<String, Location>>,
}

impl InMemoryLocationService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_location(&self, location: Location) {
        self.locations
            .write()
            .await
            .insert(location.uuid.clone(), location);
    }
}

#[async_trait]
impl LocationService for InMemoryLocationService {
    async fn get_by_uuid(&self, uuid: &str) -> Result<Option<Location>, ServiceError> {
        Ok(self.locations.read().await.get(uuid).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryConceptService {
    concepts: RwLock<HashMap<String, Concept>>,
}

impl InMemoryConceptService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_concept(&self, concept: Concept) {
        self.concepts
            .write()
            .await
            .insert(concept.uuid.clone(), concept);
    }
}

#[async_trait]
impl ConceptService for InMemoryConceptService {
    async fn get_by_uuid(&self, uuid: &str) -> Result<Option<Concept>, ServiceError> {
        Ok(self.concepts.read().await.get(uuid).cloned())
    }
}
