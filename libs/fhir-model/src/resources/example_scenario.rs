//! The ExampleScenario resource: a worked example of how resources flow
//! between actors in a workflow.

use crate::codes::{ExampleScenarioActorType, PublicationStatus};
use crate::datatypes::{
    CodeableConcept, ContactDetail, Extension, Identifier, Meta, Narrative, UsageContext,
};
use crate::error::{Error, Result};
use crate::primitives::{Canonical, Code, DateTime, Id, Markdown, Uri};
use crate::visitor::{
    accept_list, primitive_list, visit_backbone_base, PrimitiveValue, Visit, Visitor,
};
use serde::{Deserialize, Serialize};

/// An example of workflow instance: the actors involved, the resource
/// instances they exchange and the processes that drive the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleScenario {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    implicit_rules: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Code>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Narrative>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Canonical identifier for this example scenario
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Uri>,
    /// Additional identifier for the example scenario
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    identifier: Vec<Identifier>,
    /// Business version of the example scenario
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    /// Name for this example scenario (computer friendly)
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// draft | active | retired | unknown
    status: PublicationStatus,
    /// For testing purposes, not real usage
    #[serde(skip_serializing_if = "Option::is_none")]
    experimental: Option<bool>,
    /// Date last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<DateTime>,
    /// Name of the publisher
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<String>,
    /// Contact details for the publisher
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    contact: Vec<ContactDetail>,
    /// The context that the content is intended to support
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    use_context: Vec<UsageContext>,
    /// Intended jurisdiction for example scenario
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    jurisdiction: Vec<CodeableConcept>,
    /// Use and/or publishing restrictions
    #[serde(skip_serializing_if = "Option::is_none")]
    copyright: Option<Markdown>,
    /// The purpose of the example, e.g. to illustrate a scenario
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<Markdown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    actor: Vec<ExampleScenarioActor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    instance: Vec<ExampleScenarioInstance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    process: Vec<ExampleScenarioProcess>,
    /// Another nested workflow referenced by this scenario
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    workflow: Vec<Canonical>,
}

impl ExampleScenario {
    pub fn builder() -> ExampleScenarioBuilder {
        ExampleScenarioBuilder::default()
    }

    pub fn to_builder(&self) -> ExampleScenarioBuilder {
        ExampleScenarioBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            text: self.text.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            url: self.url.clone(),
            identifier: self.identifier.clone(),
            version: self.version.clone(),
            name: self.name.clone(),
            status: Some(self.status),
            experimental: self.experimental,
            date: self.date.clone(),
            publisher: self.publisher.clone(),
            contact: self.contact.clone(),
            use_context: self.use_context.clone(),
            jurisdiction: self.jurisdiction.clone(),
            copyright: self.copyright.clone(),
            purpose: self.purpose.clone(),
            actor: self.actor.clone(),
            instance: self.instance.clone(),
            process: self.process.clone(),
            workflow: self.workflow.clone(),
        }
    }

    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    pub fn implicit_rules(&self) -> Option<&Uri> {
        self.implicit_rules.as_ref()
    }

    pub fn language(&self) -> Option<&Code> {
        self.language.as_ref()
    }

    pub fn text(&self) -> Option<&Narrative> {
        self.text.as_ref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn status(&self) -> PublicationStatus {
        self.status
    }

    pub fn experimental(&self) -> Option<bool> {
        self.experimental
    }

    pub fn date(&self) -> Option<&DateTime> {
        self.date.as_ref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn contact(&self) -> &[ContactDetail] {
        &self.contact
    }

    pub fn use_context(&self) -> &[UsageContext] {
        &self.use_context
    }

    pub fn jurisdiction(&self) -> &[CodeableConcept] {
        &self.jurisdiction
    }

    pub fn copyright(&self) -> Option<&Markdown> {
        self.copyright.as_ref()
    }

    pub fn purpose(&self) -> Option<&Markdown> {
        self.purpose.as_ref()
    }

    pub fn actor(&self) -> &[ExampleScenarioActor] {
        &self.actor
    }

    pub fn instance(&self) -> &[ExampleScenarioInstance] {
        &self.instance
    }

    pub fn process(&self) -> &[ExampleScenarioProcess] {
        &self.process
    }

    pub fn workflow(&self) -> &[Canonical] {
        &self.workflow
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExampleScenarioBuilder {
    id: Option<Id>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    text: Option<Narrative>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    url: Option<Uri>,
    identifier: Vec<Identifier>,
    version: Option<String>,
    name: Option<String>,
    status: Option<PublicationStatus>,
    experimental: Option<bool>,
    date: Option<DateTime>,
    publisher: Option<String>,
    contact: Vec<ContactDetail>,
    use_context: Vec<UsageContext>,
    jurisdiction: Vec<CodeableConcept>,
    copyright: Option<Markdown>,
    purpose: Option<Markdown>,
    actor: Vec<ExampleScenarioActor>,
    instance: Vec<ExampleScenarioInstance>,
    process: Vec<ExampleScenarioProcess>,
    workflow: Vec<Canonical>,
}

impl ExampleScenarioBuilder {
    pub fn id(mut self, value: Id) -> Self {
        self.id = Some(value);
        self
    }

    pub fn meta(mut self, value: Meta) -> Self {
        self.meta = Some(value);
        self
    }

    pub fn implicit_rules(mut self, value: Uri) -> Self {
        self.implicit_rules = Some(value);
        self
    }

    pub fn language(mut self, value: Code) -> Self {
        self.language = Some(value);
        self
    }

    pub fn text(mut self, value: Narrative) -> Self {
        self.text = Some(value);
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn url(mut self, value: Uri) -> Self {
        self.url = Some(value);
        self
    }

    pub fn identifier(mut self, value: Identifier) -> Self {
        self.identifier.push(value);
        self
    }

    pub fn set_identifier(mut self, values: Vec<Identifier>) -> Self {
        self.identifier = values;
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn status(mut self, value: PublicationStatus) -> Self {
        self.status = Some(value);
        self
    }

    pub fn experimental(mut self, value: bool) -> Self {
        self.experimental = Some(value);
        self
    }

    pub fn date(mut self, value: DateTime) -> Self {
        self.date = Some(value);
        self
    }

    pub fn publisher(mut self, value: impl Into<String>) -> Self {
        self.publisher = Some(value.into());
        self
    }

    pub fn contact(mut self, value: ContactDetail) -> Self {
        self.contact.push(value);
        self
    }

    pub fn set_contact(mut self, values: Vec<ContactDetail>) -> Self {
        self.contact = values;
        self
    }

    pub fn use_context(mut self, value: UsageContext) -> Self {
        self.use_context.push(value);
        self
    }

    pub fn set_use_context(mut self, values: Vec<UsageContext>) -> Self {
        self.use_context = values;
        self
    }

    pub fn jurisdiction(mut self, value: CodeableConcept) -> Self {
        self.jurisdiction.push(value);
        self
    }

    pub fn set_jurisdiction(mut self, values: Vec<CodeableConcept>) -> Self {
        self.jurisdiction = values;
        self
    }

    pub fn copyright(mut self, value: Markdown) -> Self {
        self.copyright = Some(value);
        self
    }

    pub fn purpose(mut self, value: Markdown) -> Self {
        self.purpose = Some(value);
        self
    }

    pub fn actor(mut self, value: ExampleScenarioActor) -> Self {
        self.actor.push(value);
        self
    }

    pub fn set_actor(mut self, values: Vec<ExampleScenarioActor>) -> Self {
        self.actor = values;
        self
    }

    pub fn instance(mut self, value: ExampleScenarioInstance) -> Self {
        self.instance.push(value);
        self
    }

    pub fn set_instance(mut self, values: Vec<ExampleScenarioInstance>) -> Self {
        self.instance = values;
        self
    }

    pub fn process(mut self, value: ExampleScenarioProcess) -> Self {
        self.process.push(value);
        self
    }

    pub fn set_process(mut self, values: Vec<ExampleScenarioProcess>) -> Self {
        self.process = values;
        self
    }

    pub fn workflow(mut self, value: Canonical) -> Self {
        self.workflow.push(value);
        self
    }

    pub fn set_workflow(mut self, values: Vec<Canonical>) -> Self {
        self.workflow = values;
        self
    }

    pub fn build(self) -> Result<ExampleScenario> {
        Ok(ExampleScenario {
            id: self.id,
            meta: self.meta,
            implicit_rules: self.implicit_rules,
            language: self.language,
            text: self.text,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            url: self.url,
            identifier: self.identifier,
            version: self.version,
            name: self.name,
            status: self
                .status
                .ok_or(Error::MissingField("ExampleScenario.status"))?,
            experimental: self.experimental,
            date: self.date,
            publisher: self.publisher,
            contact: self.contact,
            use_context: self.use_context,
            jurisdiction: self.jurisdiction,
            copyright: self.copyright,
            purpose: self.purpose,
            actor: self.actor,
            instance: self.instance,
            process: self.process,
            workflow: self.workflow,
        })
    }
}

/// An actor taking part in the scenario: a person or a system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleScenarioActor {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// ID or acronym of the actor, referenced by operation initiator/receiver
    actor_id: String,
    /// person | entity
    #[serde(rename = "type")]
    type_: ExampleScenarioActorType,
    /// The name of the actor as shown in the page
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// The description of the actor
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Markdown>,
}

impl ExampleScenarioActor {
    pub fn builder() -> ExampleScenarioActorBuilder {
        ExampleScenarioActorBuilder::default()
    }

    pub fn to_builder(&self) -> ExampleScenarioActorBuilder {
        ExampleScenarioActorBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            actor_id: Some(self.actor_id.clone()),
            type_: Some(self.type_),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    pub fn type_(&self) -> ExampleScenarioActorType {
        self.type_
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&Markdown> {
        self.description.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExampleScenarioActorBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    actor_id: Option<String>,
    type_: Option<ExampleScenarioActorType>,
    name: Option<String>,
    description: Option<Markdown>,
}

impl ExampleScenarioActorBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn actor_id(mut self, value: impl Into<String>) -> Self {
        self.actor_id = Some(value.into());
        self
    }

    pub fn type_(mut self, value: ExampleScenarioActorType) -> Self {
        self.type_ = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn description(mut self, value: Markdown) -> Self {
        self.description = Some(value);
        self
    }

    pub fn build(self) -> Result<ExampleScenarioActor> {
        Ok(ExampleScenarioActor {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            actor_id: self
                .actor_id
                .ok_or(Error::MissingField("ExampleScenario.actor.actorId"))?,
            type_: self
                .type_
                .ok_or(Error::MissingField("ExampleScenario.actor.type"))?,
            name: self.name,
            description: self.description,
        })
    }
}

/// A resource instance the scenario's actors exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleScenarioInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// The id of the resource for referencing
    resource_id: String,
    /// The type of the resource
    resource_type: Code,
    /// A short name for the resource instance
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Human-friendly description of the resource instance
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Markdown>,
    /// A specific version of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    version: Vec<InstanceVersion>,
    /// Resources contained in the instance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    contained_instance: Vec<InstanceContainedInstance>,
}

impl ExampleScenarioInstance {
    pub fn builder() -> ExampleScenarioInstanceBuilder {
        ExampleScenarioInstanceBuilder::default()
    }

    pub fn to_builder(&self) -> ExampleScenarioInstanceBuilder {
        ExampleScenarioInstanceBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            resource_id: Some(self.resource_id.clone()),
            resource_type: Some(self.resource_type.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            contained_instance: self.contained_instance.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    pub fn resource_type(&self) -> &Code {
        &self.resource_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&Markdown> {
        self.description.as_ref()
    }

    pub fn version(&self) -> &[InstanceVersion] {
        &self.version
    }

    pub fn contained_instance(&self) -> &[InstanceContainedInstance] {
        &self.contained_instance
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExampleScenarioInstanceBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    resource_id: Option<String>,
    resource_type: Option<Code>,
    name: Option<String>,
    description: Option<Markdown>,
    version: Vec<InstanceVersion>,
    contained_instance: Vec<InstanceContainedInstance>,
}

impl ExampleScenarioInstanceBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn resource_id(mut self, value: impl Into<String>) -> Self {
        self.resource_id = Some(value.into());
        self
    }

    pub fn resource_type(mut self, value: Code) -> Self {
        self.resource_type = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn description(mut self, value: Markdown) -> Self {
        self.description = Some(value);
        self
    }

    pub fn version(mut self, value: InstanceVersion) -> Self {
        self.version.push(value);
        self
    }

    pub fn set_version(mut self, values: Vec<InstanceVersion>) -> Self {
        self.version = values;
        self
    }

    pub fn contained_instance(mut self, value: InstanceContainedInstance) -> Self {
        self.contained_instance.push(value);
        self
    }

    pub fn set_contained_instance(mut self, values: Vec<InstanceContainedInstance>) -> Self {
        self.contained_instance = values;
        self
    }

    pub fn build(self) -> Result<ExampleScenarioInstance> {
        Ok(ExampleScenarioInstance {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            resource_id: self
                .resource_id
                .ok_or(Error::MissingField("ExampleScenario.instance.resourceId"))?,
            resource_type: self
                .resource_type
                .ok_or(Error::MissingField("ExampleScenario.instance.resourceType"))?,
            name: self.name,
            description: self.description,
            version: self.version,
            contained_instance: self.contained_instance,
        })
    }
}

/// A specific version of a resource instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// The identifier of a specific version of a resource
    version_id: String,
    /// The description of the resource version
    description: Markdown,
}

impl InstanceVersion {
    pub fn builder() -> InstanceVersionBuilder {
        InstanceVersionBuilder::default()
    }

    pub fn to_builder(&self) -> InstanceVersionBuilder {
        InstanceVersionBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            version_id: Some(self.version_id.clone()),
            description: Some(self.description.clone()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    pub fn description(&self) -> &Markdown {
        &self.description
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstanceVersionBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    version_id: Option<String>,
    description: Option<Markdown>,
}

impl InstanceVersionBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn version_id(mut self, value: impl Into<String>) -> Self {
        self.version_id = Some(value.into());
        self
    }

    pub fn description(mut self, value: Markdown) -> Self {
        self.description = Some(value);
        self
    }

    pub fn build(self) -> Result<InstanceVersion> {
        Ok(InstanceVersion {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            version_id: self.version_id.ok_or(Error::MissingField(
                "ExampleScenario.instance.version.versionId",
            ))?,
            description: self.description.ok_or(Error::MissingField(
                "ExampleScenario.instance.version.description",
            ))?,
        })
    }
}

/// A reference to another instance (optionally a specific version of it)
/// contained within this one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceContainedInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Each resource contained in the instance
    resource_id: String,
    /// A specific version of a resource contained in the instance
    #[serde(skip_serializing_if = "Option::is_none")]
    version_id: Option<String>,
}

impl InstanceContainedInstance {
    pub fn builder() -> InstanceContainedInstanceBuilder {
        InstanceContainedInstanceBuilder::default()
    }

    pub fn to_builder(&self) -> InstanceContainedInstanceBuilder {
        InstanceContainedInstanceBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            resource_id: Some(self.resource_id.clone()),
            version_id: self.version_id.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstanceContainedInstanceBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    resource_id: Option<String>,
    version_id: Option<String>,
}

impl InstanceContainedInstanceBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn resource_id(mut self, value: impl Into<String>) -> Self {
        self.resource_id = Some(value.into());
        self
    }

    pub fn version_id(mut self, value: impl Into<String>) -> Self {
        self.version_id = Some(value.into());
        self
    }

    pub fn build(self) -> Result<InstanceContainedInstance> {
        Ok(InstanceContainedInstance {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            resource_id: self.resource_id.ok_or(Error::MissingField(
                "ExampleScenario.instance.containedInstance.resourceId",
            ))?,
            version_id: self.version_id,
        })
    }
}

/// A group of steps with a common goal within the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleScenarioProcess {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// The diagram title of the group of operations
    title: String,
    /// A longer description of the group of operations
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Markdown>,
    /// Description of the initial status before the process starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pre_conditions: Option<Markdown>,
    /// Description of the final status after the process ends
    #[serde(skip_serializing_if = "Option::is_none")]
    post_conditions: Option<Markdown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    step: Vec<ProcessStep>,
}

impl ExampleScenarioProcess {
    pub fn builder() -> ExampleScenarioProcessBuilder {
        ExampleScenarioProcessBuilder::default()
    }

    pub fn to_builder(&self) -> ExampleScenarioProcessBuilder {
        ExampleScenarioProcessBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            title: Some(self.title.clone()),
            description: self.description.clone(),
            pre_conditions: self.pre_conditions.clone(),
            post_conditions: self.post_conditions.clone(),
            step: self.step.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&Markdown> {
        self.description.as_ref()
    }

    pub fn pre_conditions(&self) -> Option<&Markdown> {
        self.pre_conditions.as_ref()
    }

    pub fn post_conditions(&self) -> Option<&Markdown> {
        self.post_conditions.as_ref()
    }

    pub fn step(&self) -> &[ProcessStep] {
        &self.step
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExampleScenarioProcessBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    title: Option<String>,
    description: Option<Markdown>,
    pre_conditions: Option<Markdown>,
    post_conditions: Option<Markdown>,
    step: Vec<ProcessStep>,
}

impl ExampleScenarioProcessBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn description(mut self, value: Markdown) -> Self {
        self.description = Some(value);
        self
    }

    pub fn pre_conditions(mut self, value: Markdown) -> Self {
        self.pre_conditions = Some(value);
        self
    }

    pub fn post_conditions(mut self, value: Markdown) -> Self {
        self.post_conditions = Some(value);
        self
    }

    pub fn step(mut self, value: ProcessStep) -> Self {
        self.step.push(value);
        self
    }

    pub fn set_step(mut self, values: Vec<ProcessStep>) -> Self {
        self.step = values;
        self
    }

    pub fn build(self) -> Result<ExampleScenarioProcess> {
        Ok(ExampleScenarioProcess {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            title: self
                .title
                .ok_or(Error::MissingField("ExampleScenario.process.title"))?,
            description: self.description,
            pre_conditions: self.pre_conditions,
            post_conditions: self.post_conditions,
            step: self.step,
        })
    }
}

/// One step of a process: a nested process, a pause, or an operation, with
/// optional alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Nested process
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    process: Vec<ExampleScenarioProcess>,
    /// If there is a pause in the flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pause: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<StepOperation>,
    /// Alternate non-typical step action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    alternative: Vec<StepAlternative>,
}

impl ProcessStep {
    pub fn builder() -> ProcessStepBuilder {
        ProcessStepBuilder::default()
    }

    pub fn to_builder(&self) -> ProcessStepBuilder {
        ProcessStepBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            process: self.process.clone(),
            pause: self.pause,
            operation: self.operation.clone(),
            alternative: self.alternative.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn process(&self) -> &[ExampleScenarioProcess] {
        &self.process
    }

    pub fn pause(&self) -> Option<bool> {
        self.pause
    }

    pub fn operation(&self) -> Option<&StepOperation> {
        self.operation.as_ref()
    }

    pub fn alternative(&self) -> &[StepAlternative] {
        &self.alternative
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessStepBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    process: Vec<ExampleScenarioProcess>,
    pause: Option<bool>,
    operation: Option<StepOperation>,
    alternative: Vec<StepAlternative>,
}

impl ProcessStepBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn process(mut self, value: ExampleScenarioProcess) -> Self {
        self.process.push(value);
        self
    }

    pub fn set_process(mut self, values: Vec<ExampleScenarioProcess>) -> Self {
        self.process = values;
        self
    }

    pub fn pause(mut self, value: bool) -> Self {
        self.pause = Some(value);
        self
    }

    pub fn operation(mut self, value: StepOperation) -> Self {
        self.operation = Some(value);
        self
    }

    pub fn alternative(mut self, value: StepAlternative) -> Self {
        self.alternative.push(value);
        self
    }

    pub fn set_alternative(mut self, values: Vec<StepAlternative>) -> Self {
        self.alternative = values;
        self
    }

    pub fn build(self) -> Result<ProcessStep> {
        Ok(ProcessStep {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            process: self.process,
            pause: self.pause,
            operation: self.operation,
            alternative: self.alternative,
        })
    }
}

/// The exchange of a resource instance between two actors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// The sequential number of the interaction, e.g. 1.2.5
    number: String,
    /// The type of operation, e.g. new
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<String>,
    /// The human-friendly name of the interaction
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Who starts the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    initiator: Option<String>,
    /// Who receives the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    receiver: Option<String>,
    /// A comment to be inserted in the diagram
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Markdown>,
    /// Whether the initiator is deactivated right after the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    initiator_active: Option<bool>,
    /// Whether the receiver is deactivated right after the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    receiver_active: Option<bool>,
    /// Each resource instance used by the initiator
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<InstanceContainedInstance>,
    /// Each resource instance used by the responder
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<InstanceContainedInstance>,
}

impl StepOperation {
    pub fn builder() -> StepOperationBuilder {
        StepOperationBuilder::default()
    }

    pub fn to_builder(&self) -> StepOperationBuilder {
        StepOperationBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            number: Some(self.number.clone()),
            type_: self.type_.clone(),
            name: self.name.clone(),
            initiator: self.initiator.clone(),
            receiver: self.receiver.clone(),
            description: self.description.clone(),
            initiator_active: self.initiator_active,
            receiver_active: self.receiver_active,
            request: self.request.clone(),
            response: self.response.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn initiator(&self) -> Option<&str> {
        self.initiator.as_deref()
    }

    pub fn receiver(&self) -> Option<&str> {
        self.receiver.as_deref()
    }

    pub fn description(&self) -> Option<&Markdown> {
        self.description.as_ref()
    }

    pub fn initiator_active(&self) -> Option<bool> {
        self.initiator_active
    }

    pub fn receiver_active(&self) -> Option<bool> {
        self.receiver_active
    }

    pub fn request(&self) -> Option<&InstanceContainedInstance> {
        self.request.as_ref()
    }

    pub fn response(&self) -> Option<&InstanceContainedInstance> {
        self.response.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StepOperationBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    number: Option<String>,
    type_: Option<String>,
    name: Option<String>,
    initiator: Option<String>,
    receiver: Option<String>,
    description: Option<Markdown>,
    initiator_active: Option<bool>,
    receiver_active: Option<bool>,
    request: Option<InstanceContainedInstance>,
    response: Option<InstanceContainedInstance>,
}

impl StepOperationBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn number(mut self, value: impl Into<String>) -> Self {
        self.number = Some(value.into());
        self
    }

    pub fn type_(mut self, value: impl Into<String>) -> Self {
        self.type_ = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn initiator(mut self, value: impl Into<String>) -> Self {
        self.initiator = Some(value.into());
        self
    }

    pub fn receiver(mut self, value: impl Into<String>) -> Self {
        self.receiver = Some(value.into());
        self
    }

    pub fn description(mut self, value: Markdown) -> Self {
        self.description = Some(value);
        self
    }

    pub fn initiator_active(mut self, value: bool) -> Self {
        self.initiator_active = Some(value);
        self
    }

    pub fn receiver_active(mut self, value: bool) -> Self {
        self.receiver_active = Some(value);
        self
    }

    pub fn request(mut self, value: InstanceContainedInstance) -> Self {
        self.request = Some(value);
        self
    }

    pub fn response(mut self, value: InstanceContainedInstance) -> Self {
        self.response = Some(value);
        self
    }

    pub fn build(self) -> Result<StepOperation> {
        Ok(StepOperation {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            number: self.number.ok_or(Error::MissingField(
                "ExampleScenario.process.step.operation.number",
            ))?,
            type_: self.type_,
            name: self.name,
            initiator: self.initiator,
            receiver: self.receiver,
            description: self.description,
            initiator_active: self.initiator_active,
            receiver_active: self.receiver_active,
            request: self.request,
            response: self.response,
        })
    }
}

/// An alternative action that can be taken at a step instead of the
/// nominal flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepAlternative {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Label for alternative
    title: String,
    /// A human-readable description of the alternative
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Markdown>,
    /// What happens in each alternative option
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    step: Vec<ProcessStep>,
}

impl StepAlternative {
    pub fn builder() -> StepAlternativeBuilder {
        StepAlternativeBuilder::default()
    }

    pub fn to_builder(&self) -> StepAlternativeBuilder {
        StepAlternativeBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            title: Some(self.title.clone()),
            description: self.description.clone(),
            step: self.step.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&Markdown> {
        self.description.as_ref()
    }

    pub fn step(&self) -> &[ProcessStep] {
        &self.step
    }
}

#[derive(Debug, Clone, Default)]
pub struct StepAlternativeBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    title: Option<String>,
    description: Option<Markdown>,
    step: Vec<ProcessStep>,
}

impl StepAlternativeBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn extension(mut self, value: Extension) -> Self {
        self.extension.push(value);
        self
    }

    pub fn set_extension(mut self, values: Vec<Extension>) -> Self {
        self.extension = values;
        self
    }

    pub fn modifier_extension(mut self, value: Extension) -> Self {
        self.modifier_extension.push(value);
        self
    }

    pub fn set_modifier_extension(mut self, values: Vec<Extension>) -> Self {
        self.modifier_extension = values;
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn description(mut self, value: Markdown) -> Self {
        self.description = Some(value);
        self
    }

    pub fn step(mut self, value: ProcessStep) -> Self {
        self.step.push(value);
        self
    }

    pub fn set_step(mut self, values: Vec<ProcessStep>) -> Self {
        self.step = values;
        self
    }

    pub fn build(self) -> Result<StepAlternative> {
        Ok(StepAlternative {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            title: self.title.ok_or(Error::MissingField(
                "ExampleScenario.process.step.alternative.title",
            ))?,
            description: self.description,
            step: self.step,
        })
    }
}

impl Visit for ExampleScenario {
    fn type_name(&self) -> &'static str {
        "ExampleScenario"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        if let Some(id) = &self.id {
            visitor.primitive("id", PrimitiveValue::Str(id.as_str()));
        }
        if let Some(meta) = &self.meta {
            meta.accept("meta", visitor);
        }
        if let Some(implicit_rules) = &self.implicit_rules {
            visitor.primitive("implicitRules", PrimitiveValue::Str(implicit_rules.as_str()));
        }
        if let Some(language) = &self.language {
            visitor.primitive("language", PrimitiveValue::Str(language.as_str()));
        }
        if let Some(text) = &self.text {
            text.accept("text", visitor);
        }
        accept_list("extension", &self.extension, visitor);
        accept_list("modifierExtension", &self.modifier_extension, visitor);
        if let Some(url) = &self.url {
            visitor.primitive("url", PrimitiveValue::Str(url.as_str()));
        }
        accept_list("identifier", &self.identifier, visitor);
        if let Some(version) = &self.version {
            visitor.primitive("version", PrimitiveValue::Str(version));
        }
        if let Some(scenario_name) = &self.name {
            visitor.primitive("name", PrimitiveValue::Str(scenario_name));
        }
        visitor.primitive("status", PrimitiveValue::Str(self.status.as_str()));
        if let Some(experimental) = self.experimental {
            visitor.primitive("experimental", PrimitiveValue::Bool(experimental));
        }
        if let Some(date) = &self.date {
            visitor.primitive("date", PrimitiveValue::Str(date.as_str()));
        }
        if let Some(publisher) = &self.publisher {
            visitor.primitive("publisher", PrimitiveValue::Str(publisher));
        }
        accept_list("contact", &self.contact, visitor);
        accept_list("useContext", &self.use_context, visitor);
        accept_list("jurisdiction", &self.jurisdiction, visitor);
        if let Some(copyright) = &self.copyright {
            visitor.primitive("copyright", PrimitiveValue::Str(copyright.as_str()));
        }
        if let Some(purpose) = &self.purpose {
            visitor.primitive("purpose", PrimitiveValue::Str(purpose.as_str()));
        }
        accept_list("actor", &self.actor, visitor);
        accept_list("instance", &self.instance, visitor);
        accept_list("process", &self.process, visitor);
        primitive_list("workflow", &self.workflow, visitor, |w| {
            PrimitiveValue::Str(w.as_str())
        });
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for ExampleScenarioActor {
    fn type_name(&self) -> &'static str {
        "ExampleScenario.Actor"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        visitor.primitive("actorId", PrimitiveValue::Str(&self.actor_id));
        visitor.primitive("type", PrimitiveValue::Str(self.type_.as_str()));
        if let Some(actor_name) = &self.name {
            visitor.primitive("name", PrimitiveValue::Str(actor_name));
        }
        if let Some(description) = &self.description {
            visitor.primitive("description", PrimitiveValue::Str(description.as_str()));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for ExampleScenarioInstance {
    fn type_name(&self) -> &'static str {
        "ExampleScenario.Instance"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        visitor.primitive("resourceId", PrimitiveValue::Str(&self.resource_id));
        visitor.primitive(
            "resourceType",
            PrimitiveValue::Str(self.resource_type.as_str()),
        );
        if let Some(instance_name) = &self.name {
            visitor.primitive("name", PrimitiveValue::Str(instance_name));
        }
        if let Some(description) = &self.description {
            visitor.primitive("description", PrimitiveValue::Str(description.as_str()));
        }
        accept_list("version", &self.version, visitor);
        accept_list("containedInstance", &self.contained_instance, visitor);
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for InstanceVersion {
    fn type_name(&self) -> &'static str {
        "ExampleScenario.Instance.Version"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        visitor.primitive("versionId", PrimitiveValue::Str(&self.version_id));
        visitor.primitive("description", PrimitiveValue::Str(self.description.as_str()));
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for InstanceContainedInstance {
    fn type_name(&self) -> &'static str {
        "ExampleScenario.Instance.ContainedInstance"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        visitor.primitive("resourceId", PrimitiveValue::Str(&self.resource_id));
        if let Some(version_id) = &self.version_id {
            visitor.primitive("versionId", PrimitiveValue::Str(version_id));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for ExampleScenarioProcess {
    fn type_name(&self) -> &'static str {
        "ExampleScenario.Process"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        visitor.primitive("title", PrimitiveValue::Str(&self.title));
        if let Some(description) = &self.description {
            visitor.primitive("description", PrimitiveValue::Str(description.as_str()));
        }
        if let Some(pre_conditions) = &self.pre_conditions {
            visitor.primitive("preConditions", PrimitiveValue::Str(pre_conditions.as_str()));
        }
        if let Some(post_conditions) = &self.post_conditions {
            visitor.primitive(
                "postConditions",
                PrimitiveValue::Str(post_conditions.as_str()),
            );
        }
        accept_list("step", &self.step, visitor);
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for ProcessStep {
    fn type_name(&self) -> &'static str {
        "ExampleScenario.Process.Step"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        accept_list("process", &self.process, visitor);
        if let Some(pause) = self.pause {
            visitor.primitive("pause", PrimitiveValue::Bool(pause));
        }
        if let Some(operation) = &self.operation {
            operation.accept("operation", visitor);
        }
        accept_list("alternative", &self.alternative, visitor);
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for StepOperation {
    fn type_name(&self) -> &'static str {
        "ExampleScenario.Process.Step.Operation"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        visitor.primitive("number", PrimitiveValue::Str(&self.number));
        if let Some(type_) = &self.type_ {
            visitor.primitive("type", PrimitiveValue::Str(type_));
        }
        if let Some(operation_name) = &self.name {
            visitor.primitive("name", PrimitiveValue::Str(operation_name));
        }
        if let Some(initiator) = &self.initiator {
            visitor.primitive("initiator", PrimitiveValue::Str(initiator));
        }
        if let Some(receiver) = &self.receiver {
            visitor.primitive("receiver", PrimitiveValue::Str(receiver));
        }
        if let Some(description) = &self.description {
            visitor.primitive("description", PrimitiveValue::Str(description.as_str()));
        }
        if let Some(initiator_active) = self.initiator_active {
            visitor.primitive("initiatorActive", PrimitiveValue::Bool(initiator_active));
        }
        if let Some(receiver_active) = self.receiver_active {
            visitor.primitive("receiverActive", PrimitiveValue::Bool(receiver_active));
        }
        if let Some(request) = &self.request {
            request.accept("request", visitor);
        }
        if let Some(response) = &self.response {
            response.accept("response", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for StepAlternative {
    fn type_name(&self) -> &'static str {
        "ExampleScenario.Process.Step.Alternative"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        visitor.primitive("title", PrimitiveValue::Str(&self.title));
        if let Some(description) = &self.description {
            visitor.primitive("description", PrimitiveValue::Str(description.as_str()));
        }
        accept_list("step", &self.step, visitor);
        visitor.leave_element(name, self.type_name());
    }
}
