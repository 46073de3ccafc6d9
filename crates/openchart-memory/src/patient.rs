use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use openchart_model::{
    IdentifierType, Patient, PatientIdentifier, PatientService, ServiceError,
};

/// Patients and identifier types in `RwLock`'d maps.
///
/// Identifier records live inside their patient aggregate; identifier
/// lookups scan the aggregates.
#[derive(Debug, Default)]
pub struct InMemoryPatientService {
    patients: RwLock<HashMap<String, Patient>>,
    identifier_types: RwLock<HashMap<String, IdentifierType>>,
}

impl InMemoryPatientService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a patient aggregate.
    pub async fn add_patient(&self, patient: Patient) {
        self.patients
            .write()
            .await
            .insert(patient.uuid.clone(), patient);
    }

    /// Seeds an identifier type.
    pub async fn add_identifier_type(&self, identifier_type: IdentifierType) {
        self.identifier_types
            .write()
            .await
            .insert(identifier_type.uuid.clone(), identifier_type);
    }
}

#[async_trait]
impl PatientService for InMemoryPatientService {
    async fn get_patient(&self, uuid: &str) -> Result<Option<Patient>, ServiceError> {
        Ok(self.patients.read().await.get(uuid).cloned())
    }

    async fn save_patient(&self, patient: &Patient) -> Result<Patient, ServiceError> {
        self.patients
            .write()
            .await
            .insert(patient.uuid.clone(), patient.clone());
        Ok(patient.clone())
    }

    async fn get_identifier_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<PatientIdentifier>, ServiceError> {
        let patients = self.patients.read().await;
        Ok(patients
            .values()
            .flat_map(|patient| patient.identifiers.iter())
            .find(|identifier| identifier.uuid == uuid)
            .cloned())
    }

    async fn save_identifier(
        &self,
        identifier: &PatientIdentifier,
    ) -> Result<PatientIdentifier, ServiceError> {
        let patient_uuid = identifier
            .patient_uuid
            .as_deref()
            .ok_or_else(|| ServiceError::backend("identifier has no owning patient"))?;
        let mut patients = self.patients.write().await;
        let patient = patients
            .get_mut(patient_uuid)
            .ok_or_else(|| ServiceError::backend(format!("no patient {patient_uuid}")))?;
        match patient
            .identifiers
            .iter_mut()
            .find(|existing| existing.uuid == identifier.uuid)
        {
            Some(existing) => *existing = identifier.clone(),
            None => patient.identifiers.push(identifier.clone()),
        }
        Ok(identifier.clone())
    }

    async fn void_identifier(
        &self,
        identifier: &PatientIdentifier,
        reason: &str,
    ) -> Result<PatientIdentifier, ServiceError> {
        let mut voided = identifier.clone();
        voided.void(reason);
        self.save_identifier(&voided).await
    }

    async fn get_identifier_type_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<IdentifierType>, ServiceError> {
        Ok(self.identifier_types.read().await.get(uuid).cloned())
    }

    async fn get_identifier_type_by_name(
        &self,
        name: &str,
    ) -> Result<Option<IdentifierType>, ServiceError> {
        Ok(self
            .identifier_types
            .read()
            .await
            .values()
            .find(|t| t.name == name)
            .cloned())
    }
}
