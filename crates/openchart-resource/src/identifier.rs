//! Sub-resource adapter for patient identifiers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use openchart_core::{
    Page, Representation, RequestContext, ResourceDescription, RestConfig, RestError, Result,
};
use openchart_model::{LocationService, Patient, PatientIdentifier, PatientService};

use crate::convert::{
    audit_json, identifier_type_json, location_json, reference_name, reference_uuid,
};
use crate::resource::{CrudResource, SubResource};
use crate::to_representation;

/// Adapter mapping `PatientIdentifier` to its wire representation, scoped
/// under the owning patient (`.../patient/{parent}/identifier/{uuid}`).
pub struct PatientIdentifierResource {
    patients: Arc<dyn PatientService>,
    locations: Arc<dyn LocationService>,
    config: RestConfig,
    default_description: ResourceDescription,
    full_description: ResourceDescription,
    creatable: ResourceDescription,
}

impl PatientIdentifierResource {
    pub fn new(
        patients: Arc<dyn PatientService>,
        locations: Arc<dyn LocationService>,
        config: RestConfig,
    ) -> Self {
        let mut default_description = ResourceDescription::new();
        default_description
            .add_property("display")
            .add_property("uuid")
            .add_property("identifier")
            .add_property_with("identifierType", Representation::Ref)
            .add_property_with("location", Representation::Ref)
            .add_property("preferred")
            .add_property("voided")
            .add_self_link()
            .add_link("full", ".?v=full");

        let mut full_description = ResourceDescription::new();
        full_description
            .add_property("display")
            .add_property("uuid")
            .add_property("identifier")
            .add_property_with("identifierType", Representation::Default)
            .add_property_with("location", Representation::Default)
            .add_property("preferred")
            .add_property("voided")
            .add_property("auditInfo")
            .add_self_link();

        let mut creatable = ResourceDescription::new();
        creatable
            .add_required_property("identifier")
            .add_required_property("identifierType")
            .add_property("location")
            .add_property("preferred");

        Self {
            patients,
            locations,
            config,
            default_description,
            full_description,
            creatable,
        }
    }

    /// Resolves a loosely-specified identifier-type reference against the
    /// store: uuid first, then name. When neither matches, the entity's
    /// current type stays unchanged.
    async fn apply_identifier_type(
        &self,
        entity: &mut PatientIdentifier,
        value: &Value,
    ) -> Result<()> {
        if let Some(uuid) = reference_uuid(value) {
            if let Some(resolved) = self
                .patients
                .get_identifier_type_by_uuid(uuid)
                .await
                .map_err(RestError::service)?
            {
                entity.identifier_type = Some(resolved);
                return Ok(());
            }
        }
        if let Some(name) = reference_name(value) {
            if let Some(resolved) = self
                .patients
                .get_identifier_type_by_name(name)
                .await
                .map_err(RestError::service)?
            {
                entity.identifier_type = Some(resolved);
            }
        }
        Ok(())
    }

    /// Resolves a location reference by uuid; an unknown uuid leaves the
    /// current location unchanged.
    async fn apply_location(&self, entity: &mut PatientIdentifier, value: &Value) -> Result<()> {
        if let Some(uuid) = reference_uuid(value) {
            if let Some(resolved) = self
                .locations
                .get_by_uuid(uuid)
                .await
                .map_err(RestError::service)?
            {
                entity.location = Some(resolved);
            }
        }
        Ok(())
    }

    fn owning_patient_uuid(entity: &PatientIdentifier) -> Result<&str> {
        entity
            .patient_uuid
            .as_deref()
            .ok_or_else(|| RestError::invalid_value("patient", "owning patient reference"))
    }
}

#[async_trait]
impl CrudResource for PatientIdentifierResource {
    type Entity = PatientIdentifier;

    fn name(&self) -> &'static str {
        "patientidentifier"
    }

    fn describe(&self, representation: Representation) -> Result<&ResourceDescription> {
        match representation {
            Representation::Default => Ok(&self.default_description),
            Representation::Full => Ok(&self.full_description),
            Representation::Ref => Err(RestError::unsupported_representation(
                self.name(),
                representation.as_str(),
            )),
        }
    }

    fn creatable_properties(&self) -> &ResourceDescription {
        &self.creatable
    }

    fn new_entity(&self) -> PatientIdentifier {
        PatientIdentifier::new()
    }

    /// Identifier type plus value, for concise display purposes; empty when
    /// the type is unset.
    fn display(&self, entity: &PatientIdentifier) -> String {
        match &entity.identifier_type {
            Some(t) => format!("{} = {}", t.name, entity.identifier),
            None => String::new(),
        }
    }

    fn uri_of(&self, entity: &PatientIdentifier) -> String {
        let parent = entity.patient_uuid.as_deref().unwrap_or_default();
        format!(
            "{}/patient/{}/identifier/{}",
            self.config.base_uri, parent, entity.uuid
        )
    }

    fn read_property(
        &self,
        entity: &PatientIdentifier,
        name: &str,
        nested: Option<Representation>,
    ) -> Result<Value> {
        let nested = nested.unwrap_or(Representation::Ref);
        match name {
            "display" => Ok(json!(self.display(entity))),
            "uuid" => Ok(json!(entity.uuid)),
            "identifier" => Ok(json!(entity.identifier)),
            "identifierType" => Ok(entity
                .identifier_type
                .as_ref()
                .map(|t| identifier_type_json(t, nested))
                .unwrap_or(Value::Null)),
            "location" => Ok(entity
                .location
                .as_ref()
                .map(|l| location_json(l, nested))
                .unwrap_or(Value::Null)),
            "preferred" => Ok(json!(entity.preferred)),
            "voided" => Ok(json!(entity.voided)),
            "auditInfo" => audit_json(&entity.audit),
            other => Err(RestError::unknown_property(other)),
        }
    }

    async fn apply_property(
        &self,
        entity: &mut PatientIdentifier,
        name: &str,
        value: &Value,
    ) -> Result<()> {
        match name {
            "identifier" => {
                entity.identifier = value
                    .as_str()
                    .ok_or_else(|| RestError::invalid_value("identifier", "string"))?
                    .to_string();
                Ok(())
            }
            "identifierType" => self.apply_identifier_type(entity, value).await,
            "location" => self.apply_location(entity, value).await,
            "preferred" => {
                entity.preferred = value
                    .as_bool()
                    .ok_or_else(|| RestError::invalid_value("preferred", "boolean"))?;
                Ok(())
            }
            other => Err(RestError::unknown_property(other)),
        }
    }

    async fn get_by_unique_id(&self, unique_id: &str) -> Result<Option<PatientIdentifier>> {
        self.patients
            .get_identifier_by_uuid(unique_id)
            .await
            .map_err(RestError::service)
    }

    /// Saving first makes sure the identifier is a member of the patient's
    /// active collection; a repeated save must not add it twice.
    async fn save(&self, entity: PatientIdentifier) -> Result<PatientIdentifier> {
        let parent_uuid = Self::owning_patient_uuid(&entity)?.to_string();
        let mut patient = self
            .patients
            .get_patient(&parent_uuid)
            .await
            .map_err(RestError::service)?
            .ok_or_else(|| RestError::not_found("patient", &parent_uuid))?;
        let already_member = patient
            .active_identifiers()
            .any(|existing| *existing == entity);
        if !already_member {
            patient.add_identifier(entity.clone());
            self.patients
                .save_patient(&patient)
                .await
                .map_err(RestError::service)?;
            debug!(
                patient_uuid = %parent_uuid,
                identifier_uuid = %entity.uuid,
                "added identifier to patient"
            );
        }
        self.patients
            .save_identifier(&entity)
            .await
            .map_err(RestError::service)
    }

    async fn void(&self, entity: PatientIdentifier, reason: &str) -> Result<PatientIdentifier> {
        self.patients
            .void_identifier(&entity, reason)
            .await
            .map_err(RestError::service)
    }

    /// Purging detaches the identifier from the owning patient and saves the
    /// patient once; identifiers have no independent delete operation.
    async fn purge(&self, entity: PatientIdentifier) -> Result<()> {
        let parent_uuid = Self::owning_patient_uuid(&entity)?;
        let mut patient = self
            .patients
            .get_patient(parent_uuid)
            .await
            .map_err(RestError::service)?
            .ok_or_else(|| RestError::not_found("patient", parent_uuid))?;
        patient.remove_identifier(&entity);
        self.patients
            .save_patient(&patient)
            .await
            .map_err(RestError::service)?;
        Ok(())
    }
}

#[async_trait]
impl SubResource for PatientIdentifierResource {
    type Parent = Patient;

    fn parent_uuid_of(&self, entity: &PatientIdentifier) -> Option<String> {
        entity.patient_uuid.clone()
    }

    fn set_parent(&self, entity: &mut PatientIdentifier, parent: &Patient) {
        entity.patient_uuid = Some(parent.uuid.clone());
    }

    async fn get_parent(&self, parent_uuid: &str) -> Result<Patient> {
        self.patients
            .get_patient(parent_uuid)
            .await
            .map_err(RestError::service)?
            .ok_or_else(|| RestError::not_found("patient", parent_uuid))
    }

    async fn list_children(
        &self,
        parent: &Patient,
        context: &RequestContext,
    ) -> Result<Page<Value>> {
        let active: Vec<PatientIdentifier> =
            parent.active_identifiers().cloned().collect();
        Page::of(active, context)
            .try_map(|identifier| to_representation(self, &identifier, context.representation))
    }
}
