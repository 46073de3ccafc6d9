//! Resource adapter for care programs.
//!
//! Program is metadata: soft delete retires it, and a ref representation is
//! supported so other resources can point at programs cheaply.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use openchart_core::{
    Page, Representation, RequestContext, ResourceDescription, RestConfig, RestError, Result,
    SearchOutcome,
};
use openchart_model::{ConceptService, Program, ProgramService};

use crate::convert::{audit_json, concept_json, reference_uuid, workflow_json};
use crate::resource::CrudResource;
use crate::to_representation;

pub struct ProgramResource {
    programs: Arc<dyn ProgramService>,
    concepts: Arc<dyn ConceptService>,
    config: RestConfig,
    ref_description: ResourceDescription,
    default_description: ResourceDescription,
    full_description: ResourceDescription,
    creatable: ResourceDescription,
}

impl ProgramResource {
    pub fn new(
        programs: Arc<dyn ProgramService>,
        concepts: Arc<dyn ConceptService>,
        config: RestConfig,
    ) -> Self {
        let mut ref_description = ResourceDescription::new();
        ref_description
            .add_property("uuid")
            .add_property("display")
            .add_property("retired")
            .add_property_with("allWorkflows", Representation::Ref)
            .add_self_link();

        let mut default_description = ResourceDescription::new();
        default_description
            .add_property("uuid")
            .add_property("name")
            .add_property("description")
            .add_property("retired")
            .add_property_with("allWorkflows", Representation::Default)
            .add_property_with("concept", Representation::Ref)
            .add_self_link()
            .add_link("full", ".?v=full");

        let mut full_description = ResourceDescription::new();
        full_description
            .add_property("uuid")
            .add_property("name")
            .add_property("description")
            .add_property("retired")
            .add_property_with("allWorkflows", Representation::Full)
            .add_property("concept")
            .add_property("auditInfo")
            .add_self_link();

        let mut creatable = ResourceDescription::new();
        creatable
            .add_required_property("name")
            .add_required_property("description")
            .add_required_property("concept")
            .add_property("retired");

        Self {
            programs,
            concepts,
            config,
            ref_description,
            default_description,
            full_description,
            creatable,
        }
    }

    /// Resolves the program's defining concept. The concept is a required
    /// relation, so a reference that names nothing is an error rather than
    /// a silent no-op.
    async fn apply_concept(&self, entity: &mut Program, value: &Value) -> Result<()> {
        let uuid = reference_uuid(value)
            .ok_or_else(|| RestError::invalid_value("concept", "reference with uuid"))?;
        let concept = self
            .concepts
            .get_by_uuid(uuid)
            .await
            .map_err(RestError::service)?
            .ok_or_else(|| RestError::not_found("concept", uuid))?;
        entity.concept = Some(concept);
        Ok(())
    }
}

#[async_trait]
impl CrudResource for ProgramResource {
    type Entity = Program;

    fn name(&self) -> &'static str {
        "program"
    }

    fn describe(&self, representation: Representation) -> Result<&ResourceDescription> {
        match representation {
            Representation::Ref => Ok(&self.ref_description),
            Representation::Default => Ok(&self.default_description),
            Representation::Full => Ok(&self.full_description),
        }
    }

    fn creatable_properties(&self) -> &ResourceDescription {
        &self.creatable
    }

    fn new_entity(&self) -> Program {
        Program::new()
    }

    /// Metadata displays as its name.
    fn display(&self, entity: &Program) -> String {
        entity.name.clone()
    }

    fn uri_of(&self, entity: &Program) -> String {
        format!("{}/program/{}", self.config.base_uri, entity.uuid)
    }

    fn read_property(
        &self,
        entity: &Program,
        name: &str,
        nested: Option<Representation>,
    ) -> Result<Value> {
        let nested = nested.unwrap_or(Representation::Ref);
        match name {
            "uuid" => Ok(json!(entity.uuid)),
            "display" => Ok(json!(self.display(entity))),
            "name" => Ok(json!(entity.name)),
            "description" => Ok(json!(entity.description)),
            "retired" => Ok(json!(entity.retired)),
            "allWorkflows" => Ok(Value::Array(
                entity
                    .workflows
                    .iter()
                    .map(|workflow| workflow_json(workflow, nested))
                    .collect(),
            )),
            "concept" => Ok(entity
                .concept
                .as_ref()
                .map(concept_json)
                .unwrap_or(Value::Null)),
            "auditInfo" => audit_json(&entity.audit),
            other => Err(RestError::unknown_property(other)),
        }
    }

    async fn apply_property(&self, entity: &mut Program, name: &str, value: &Value) -> Result<()> {
        match name {
            "name" => {
                entity.name = value
                    .as_str()
                    .ok_or_else(|| RestError::invalid_value("name", "string"))?
                    .to_string();
                Ok(())
            }
            "description" => {
                entity.description = Some(
                    value
                        .as_str()
                        .ok_or_else(|| RestError::invalid_value("description", "string"))?
                        .to_string(),
                );
                Ok(())
            }
            "concept" => self.apply_concept(entity, value).await,
            "retired" => {
                entity.retired = value
                    .as_bool()
                    .ok_or_else(|| RestError::invalid_value("retired", "boolean"))?;
                Ok(())
            }
            other => Err(RestError::unknown_property(other)),
        }
    }

    /// Looks the program up by uuid first; when that yields nothing the
    /// caller is assumed to have passed a name instead. This fallback is
    /// specific to programs — identifiers resolve by uuid only.
    async fn get_by_unique_id(&self, unique_id: &str) -> Result<Option<Program>> {
        let by_uuid = self
            .programs
            .get_by_uuid(unique_id)
            .await
            .map_err(RestError::service)?;
        match by_uuid {
            Some(program) => Ok(Some(program)),
            None => self
                .programs
                .get_by_name(unique_id)
                .await
                .map_err(RestError::service),
        }
    }

    async fn save(&self, entity: Program) -> Result<Program> {
        self.programs.save(&entity).await.map_err(RestError::service)
    }

    async fn void(&self, entity: Program, reason: &str) -> Result<Program> {
        self.programs
            .retire(&entity, reason)
            .await
            .map_err(RestError::service)
    }

    /// Programs own a purge endpoint, so purging is a direct service call
    /// rather than a detach from some parent aggregate.
    async fn purge(&self, entity: Program) -> Result<()> {
        self.programs.purge(&entity).await.map_err(RestError::service)
    }

    async fn get_all(&self, context: &RequestContext) -> Result<Page<Value>> {
        let programs = self
            .programs
            .get_all(false)
            .await
            .map_err(RestError::service)?;
        Page::of(programs, context)
            .try_map(|program| to_representation(self, &program, context.representation))
    }

    async fn search(&self, context: &RequestContext) -> Result<SearchOutcome<Value>> {
        let Some(query) = context.query.as_deref() else {
            return Ok(SearchOutcome::NotSearched);
        };
        let matches = self
            .programs
            .search(query)
            .await
            .map_err(RestError::service)?;
        let page = Page::of(matches, context)
            .try_map(|program| to_representation(self, &program, context.representation))?;
        Ok(SearchOutcome::Paged(page))
    }
}
