use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use openchart_model::{Program, ProgramService, ServiceError};

#[derive(Debug, Default)]
pub struct InMemoryProgramService {
    programs: RwLock<HashMap<String, Program>>,
}

impl InMemoryProgramService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_program(&self, program: Program) {
        self.programs
            .write()
            .await
            .insert(program.uuid.clone(), program);
    }

    fn sorted_by_name(mut programs: Vec<Program>) -> Vec<Program> {
        programs.sort_by(|a, b| a.name.cmp(&b.name));
        programs
    }
}

#[async_trait]
impl ProgramService for InMemoryProgramService {
    async fn get_by_uuid(&self, uuid: &str) -> Result<Option<Program>, ServiceError> {
        Ok(self.programs.read().await.get(uuid).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Program>, ServiceError> {
        Ok(self
            .programs
            .read()
            .await
            .values()
            .find(|program| program.name == name)
            .cloned())
    }

    async fn save(&self, program: &Program) -> Result<Program, ServiceError> {
        self.programs
            .write()
            .await
            .insert(program.uuid.clone(), program.clone());
        Ok(program.clone())
    }

    async fn retire(&self, program: &Program, reason: &str) -> Result<Program, ServiceError> {
        let mut retired = program.clone();
        retired.retire(reason);
        self.save(&retired).await
    }

    async fn purge(&self, program: &Program) -> Result<(), ServiceError> {
        self.programs.write().await.remove(&program.uuid);
        Ok(())
    }

    async fn get_all(&self, include_retired: bool) -> Result<Vec<Program>, ServiceError> {
        let programs = self.programs.read().await;
        let selected = programs
            .values()
            .filter(|program| include_retired || !program.retired)
            .cloned()
            .collect();
        Ok(Self::sorted_by_name(selected))
    }

    async fn search(&self, query: &str) -> Result<Vec<Program>, ServiceError> {
        let needle = query.to_lowercase();
        let programs = self.programs.read().await;
        let matched = programs
            .values()
            .filter(|program| program.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(Self::sorted_by_name(matched))
    }
}
