//! The SubstanceSourceMaterial resource: source material of a herbal or
//! biological substance, down to the taxonomy of the organism it came from.

use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative};
use crate::error::Result;
use crate::primitives::{Code, Id, Uri};
use crate::visitor::{
    accept_list, primitive_list, visit_backbone_base, PrimitiveValue, Visit, Visitor,
};
use serde::{Deserialize, Serialize};

/// Source material shall capture information on the taxonomic and anatomical
/// origins as well as the fraction of a material that can result in or can be
/// modified to form a substance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstanceSourceMaterial {
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
    /// Anatomical origin of the source material within an organism
    #[serde(skip_serializing_if = "Option::is_none")]
    source_material_class: Option<CodeableConcept>,
    /// The type of the source material
    #[serde(skip_serializing_if = "Option::is_none")]
    source_material_type: Option<CodeableConcept>,
    /// The state of the source material when extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    source_material_state: Option<CodeableConcept>,
    /// The unique identifier associated with the source material
    #[serde(skip_serializing_if = "Option::is_none")]
    organism_id: Option<Identifier>,
    /// The organism accepted Scientific name
    #[serde(skip_serializing_if = "Option::is_none")]
    organism_name: Option<String>,
    /// The parent of the herbal drug
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parent_substance_id: Vec<Identifier>,
    /// The parent substance of the Herbal Drug, or Herbal preparation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parent_substance_name: Vec<String>,
    /// The country where the plant material is harvested or the countries
    /// where the plasma is sourced from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    country_of_origin: Vec<CodeableConcept>,
    /// The place/region where the plant is harvested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    geographical_location: Vec<String>,
    /// Stage of life for animals, plants, insects and microorganisms
    #[serde(skip_serializing_if = "Option::is_none")]
    development_stage: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fraction_description: Vec<SourceMaterialFractionDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organism: Option<SourceMaterialOrganism>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    part_description: Vec<SourceMaterialPartDescription>,
}

impl SubstanceSourceMaterial {
    pub fn builder() -> SubstanceSourceMaterialBuilder {
        SubstanceSourceMaterialBuilder::default()
    }

    pub fn to_builder(&self) -> SubstanceSourceMaterialBuilder {
        SubstanceSourceMaterialBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            text: self.text.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            source_material_class: self.source_material_class.clone(),
            source_material_type: self.source_material_type.clone(),
            source_material_state: self.source_material_state.clone(),
            organism_id: self.organism_id.clone(),
            organism_name: self.organism_name.clone(),
            parent_substance_id: self.parent_substance_id.clone(),
            parent_substance_name: self.parent_substance_name.clone(),
            country_of_origin: self.country_of_origin.clone(),
            geographical_location: self.geographical_location.clone(),
            development_stage: self.development_stage.clone(),
            fraction_description: self.fraction_description.clone(),
            organism: self.organism.clone(),
            part_description: self.part_description.clone(),
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

    pub fn source_material_class(&self) -> Option<&CodeableConcept> {
        self.source_material_class.as_ref()
    }

    pub fn source_material_type(&self) -> Option<&CodeableConcept> {
        self.source_material_type.as_ref()
    }

    pub fn source_material_state(&self) -> Option<&CodeableConcept> {
        self.source_material_state.as_ref()
    }

    pub fn organism_id(&self) -> Option<&Identifier> {
        self.organism_id.as_ref()
    }

    pub fn organism_name(&self) -> Option<&str> {
        self.organism_name.as_deref()
    }

    pub fn parent_substance_id(&self) -> &[Identifier] {
        &self.parent_substance_id
    }

    pub fn parent_substance_name(&self) -> &[String] {
        &self.parent_substance_name
    }

    pub fn country_of_origin(&self) -> &[CodeableConcept] {
        &self.country_of_origin
    }

    pub fn geographical_location(&self) -> &[String] {
        &self.geographical_location
    }

    pub fn development_stage(&self) -> Option<&CodeableConcept> {
        self.development_stage.as_ref()
    }

    pub fn fraction_description(&self) -> &[SourceMaterialFractionDescription] {
        &self.fraction_description
    }

    pub fn organism(&self) -> Option<&SourceMaterialOrganism> {
        self.organism.as_ref()
    }

    pub fn part_description(&self) -> &[SourceMaterialPartDescription] {
        &self.part_description
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubstanceSourceMaterialBuilder {
    id: Option<Id>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    text: Option<Narrative>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    source_material_class: Option<CodeableConcept>,
    source_material_type: Option<CodeableConcept>,
    source_material_state: Option<CodeableConcept>,
    organism_id: Option<Identifier>,
    organism_name: Option<String>,
    parent_substance_id: Vec<Identifier>,
    parent_substance_name: Vec<String>,
    country_of_origin: Vec<CodeableConcept>,
    geographical_location: Vec<String>,
    development_stage: Option<CodeableConcept>,
    fraction_description: Vec<SourceMaterialFractionDescription>,
    organism: Option<SourceMaterialOrganism>,
    part_description: Vec<SourceMaterialPartDescription>,
}

impl SubstanceSourceMaterialBuilder {
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

    pub fn source_material_class(mut self, value: CodeableConcept) -> Self {
        self.source_material_class = Some(value);
        self
    }

    pub fn source_material_type(mut self, value: CodeableConcept) -> Self {
        self.source_material_type = Some(value);
        self
    }

    pub fn source_material_state(mut self, value: CodeableConcept) -> Self {
        self.source_material_state = Some(value);
        self
    }

    pub fn organism_id(mut self, value: Identifier) -> Self {
        self.organism_id = Some(value);
        self
    }

    pub fn organism_name(mut self, value: impl Into<String>) -> Self {
        self.organism_name = Some(value.into());
        self
    }

    pub fn parent_substance_id(mut self, value: Identifier) -> Self {
        self.parent_substance_id.push(value);
        self
    }

    pub fn set_parent_substance_id(mut self, values: Vec<Identifier>) -> Self {
        self.parent_substance_id = values;
        self
    }

    pub fn parent_substance_name(mut self, value: impl Into<String>) -> Self {
        self.parent_substance_name.push(value.into());
        self
    }

    pub fn set_parent_substance_name(mut self, values: Vec<String>) -> Self {
        self.parent_substance_name = values;
        self
    }

    pub fn country_of_origin(mut self, value: CodeableConcept) -> Self {
        self.country_of_origin.push(value);
        self
    }

    pub fn set_country_of_origin(mut self, values: Vec<CodeableConcept>) -> Self {
        self.country_of_origin = values;
        self
    }

    pub fn geographical_location(mut self, value: impl Into<String>) -> Self {
        self.geographical_location.push(value.into());
        self
    }

    pub fn set_geographical_location(mut self, values: Vec<String>) -> Self {
        self.geographical_location = values;
        self
    }

    pub fn development_stage(mut self, value: CodeableConcept) -> Self {
        self.development_stage = Some(value);
        self
    }

    pub fn fraction_description(mut self, value: SourceMaterialFractionDescription) -> Self {
        self.fraction_description.push(value);
        self
    }

    pub fn set_fraction_description(
        mut self,
        values: Vec<SourceMaterialFractionDescription>,
    ) -> Self {
        self.fraction_description = values;
        self
    }

    pub fn organism(mut self, value: SourceMaterialOrganism) -> Self {
        self.organism = Some(value);
        self
    }

    pub fn part_description(mut self, value: SourceMaterialPartDescription) -> Self {
        self.part_description.push(value);
        self
    }

    pub fn set_part_description(mut self, values: Vec<SourceMaterialPartDescription>) -> Self {
        self.part_description = values;
        self
    }

    pub fn build(self) -> Result<SubstanceSourceMaterial> {
        Ok(SubstanceSourceMaterial {
            id: self.id,
            meta: self.meta,
            implicit_rules: self.implicit_rules,
            language: self.language,
            text: self.text,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            source_material_class: self.source_material_class,
            source_material_type: self.source_material_type,
            source_material_state: self.source_material_state,
            organism_id: self.organism_id,
            organism_name: self.organism_name,
            parent_substance_id: self.parent_substance_id,
            parent_substance_name: self.parent_substance_name,
            country_of_origin: self.country_of_origin,
            geographical_location: self.geographical_location,
            development_stage: self.development_stage,
            fraction_description: self.fraction_description,
            organism: self.organism,
            part_description: self.part_description,
        })
    }
}

/// Many complex materials are fractions of parent materials; this captures
/// one fraction and the kind of fraction it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMaterialFractionDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// This element is capturing information about the fraction of a plant part
    #[serde(skip_serializing_if = "Option::is_none")]
    fraction: Option<String>,
    /// The specific type of the material constituting the component
    #[serde(skip_serializing_if = "Option::is_none")]
    material_type: Option<CodeableConcept>,
}

impl SourceMaterialFractionDescription {
    pub fn builder() -> SourceMaterialFractionDescriptionBuilder {
        SourceMaterialFractionDescriptionBuilder::default()
    }

    pub fn to_builder(&self) -> SourceMaterialFractionDescriptionBuilder {
        SourceMaterialFractionDescriptionBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            fraction: self.fraction.clone(),
            material_type: self.material_type.clone(),
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

    pub fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    pub fn material_type(&self) -> Option<&CodeableConcept> {
        self.material_type.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceMaterialFractionDescriptionBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    fraction: Option<String>,
    material_type: Option<CodeableConcept>,
}

impl SourceMaterialFractionDescriptionBuilder {
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

    pub fn fraction(mut self, value: impl Into<String>) -> Self {
        self.fraction = Some(value.into());
        self
    }

    pub fn material_type(mut self, value: CodeableConcept) -> Self {
        self.material_type = Some(value);
        self
    }

    pub fn build(self) -> Result<SourceMaterialFractionDescription> {
        Ok(SourceMaterialFractionDescription {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            fraction: self.fraction,
            material_type: self.material_type,
        })
    }
}

/// The taxonomic classification of the organism the material came from,
/// including hybrid parentage when relevant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMaterialOrganism {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    family: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    genus: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    species: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intraspecific_type: Option<CodeableConcept>,
    /// The intraspecific description of an organism
    #[serde(skip_serializing_if = "Option::is_none")]
    intraspecific_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    author: Vec<OrganismAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hybrid: Option<OrganismHybrid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organism_general: Option<OrganismGeneral>,
}

impl SourceMaterialOrganism {
    pub fn builder() -> SourceMaterialOrganismBuilder {
        SourceMaterialOrganismBuilder::default()
    }

    pub fn to_builder(&self) -> SourceMaterialOrganismBuilder {
        SourceMaterialOrganismBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            family: self.family.clone(),
            genus: self.genus.clone(),
            species: self.species.clone(),
            intraspecific_type: self.intraspecific_type.clone(),
            intraspecific_description: self.intraspecific_description.clone(),
            author: self.author.clone(),
            hybrid: self.hybrid.clone(),
            organism_general: self.organism_general.clone(),
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

    pub fn family(&self) -> Option<&CodeableConcept> {
        self.family.as_ref()
    }

    pub fn genus(&self) -> Option<&CodeableConcept> {
        self.genus.as_ref()
    }

    pub fn species(&self) -> Option<&CodeableConcept> {
        self.species.as_ref()
    }

    pub fn intraspecific_type(&self) -> Option<&CodeableConcept> {
        self.intraspecific_type.as_ref()
    }

    pub fn intraspecific_description(&self) -> Option<&str> {
        self.intraspecific_description.as_deref()
    }

    pub fn author(&self) -> &[OrganismAuthor] {
        &self.author
    }

    pub fn hybrid(&self) -> Option<&OrganismHybrid> {
        self.hybrid.as_ref()
    }

    pub fn organism_general(&self) -> Option<&OrganismGeneral> {
        self.organism_general.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceMaterialOrganismBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    family: Option<CodeableConcept>,
    genus: Option<CodeableConcept>,
    species: Option<CodeableConcept>,
    intraspecific_type: Option<CodeableConcept>,
    intraspecific_description: Option<String>,
    author: Vec<OrganismAuthor>,
    hybrid: Option<OrganismHybrid>,
    organism_general: Option<OrganismGeneral>,
}

impl SourceMaterialOrganismBuilder {
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

    pub fn family(mut self, value: CodeableConcept) -> Self {
        self.family = Some(value);
        self
    }

    pub fn genus(mut self, value: CodeableConcept) -> Self {
        self.genus = Some(value);
        self
    }

    pub fn species(mut self, value: CodeableConcept) -> Self {
        self.species = Some(value);
        self
    }

    pub fn intraspecific_type(mut self, value: CodeableConcept) -> Self {
        self.intraspecific_type = Some(value);
        self
    }

    pub fn intraspecific_description(mut self, value: impl Into<String>) -> Self {
        self.intraspecific_description = Some(value.into());
        self
    }

    pub fn author(mut self, value: OrganismAuthor) -> Self {
        self.author.push(value);
        self
    }

    pub fn set_author(mut self, values: Vec<OrganismAuthor>) -> Self {
        self.author = values;
        self
    }

    pub fn hybrid(mut self, value: OrganismHybrid) -> Self {
        self.hybrid = Some(value);
        self
    }

    pub fn organism_general(mut self, value: OrganismGeneral) -> Self {
        self.organism_general = Some(value);
        self
    }

    pub fn build(self) -> Result<SourceMaterialOrganism> {
        Ok(SourceMaterialOrganism {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            family: self.family,
            genus: self.genus,
            species: self.species,
            intraspecific_type: self.intraspecific_type,
            intraspecific_description: self.intraspecific_description,
            author: self.author,
            hybrid: self.hybrid,
            organism_general: self.organism_general,
        })
    }
}

/// Who authored the organism's taxonomic name, and at which rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganismAuthor {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_description: Option<String>,
}

impl OrganismAuthor {
    pub fn builder() -> OrganismAuthorBuilder {
        OrganismAuthorBuilder::default()
    }

    pub fn to_builder(&self) -> OrganismAuthorBuilder {
        OrganismAuthorBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            author_type: self.author_type.clone(),
            author_description: self.author_description.clone(),
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

    pub fn author_type(&self) -> Option<&CodeableConcept> {
        self.author_type.as_ref()
    }

    pub fn author_description(&self) -> Option<&str> {
        self.author_description.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrganismAuthorBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    author_type: Option<CodeableConcept>,
    author_description: Option<String>,
}

impl OrganismAuthorBuilder {
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

    pub fn author_type(mut self, value: CodeableConcept) -> Self {
        self.author_type = Some(value);
        self
    }

    pub fn author_description(mut self, value: impl Into<String>) -> Self {
        self.author_description = Some(value.into());
        self
    }

    pub fn build(self) -> Result<OrganismAuthor> {
        Ok(OrganismAuthor {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            author_type: self.author_type,
            author_description: self.author_description,
        })
    }
}

/// Parentage of a hybrid organism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganismHybrid {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maternal_organism_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maternal_organism_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paternal_organism_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paternal_organism_name: Option<String>,
    /// The hybrid type of an organism
    #[serde(skip_serializing_if = "Option::is_none")]
    hybrid_type: Option<CodeableConcept>,
}

impl OrganismHybrid {
    pub fn builder() -> OrganismHybridBuilder {
        OrganismHybridBuilder::default()
    }

    pub fn to_builder(&self) -> OrganismHybridBuilder {
        OrganismHybridBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            maternal_organism_id: self.maternal_organism_id.clone(),
            maternal_organism_name: self.maternal_organism_name.clone(),
            paternal_organism_id: self.paternal_organism_id.clone(),
            paternal_organism_name: self.paternal_organism_name.clone(),
            hybrid_type: self.hybrid_type.clone(),
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

    pub fn maternal_organism_id(&self) -> Option<&str> {
        self.maternal_organism_id.as_deref()
    }

    pub fn maternal_organism_name(&self) -> Option<&str> {
        self.maternal_organism_name.as_deref()
    }

    pub fn paternal_organism_id(&self) -> Option<&str> {
        self.paternal_organism_id.as_deref()
    }

    pub fn paternal_organism_name(&self) -> Option<&str> {
        self.paternal_organism_name.as_deref()
    }

    pub fn hybrid_type(&self) -> Option<&CodeableConcept> {
        self.hybrid_type.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrganismHybridBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    maternal_organism_id: Option<String>,
    maternal_organism_name: Option<String>,
    paternal_organism_id: Option<String>,
    paternal_organism_name: Option<String>,
    hybrid_type: Option<CodeableConcept>,
}

impl OrganismHybridBuilder {
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

    pub fn maternal_organism_id(mut self, value: impl Into<String>) -> Self {
        self.maternal_organism_id = Some(value.into());
        self
    }

    pub fn maternal_organism_name(mut self, value: impl Into<String>) -> Self {
        self.maternal_organism_name = Some(value.into());
        self
    }

    pub fn paternal_organism_id(mut self, value: impl Into<String>) -> Self {
        self.paternal_organism_id = Some(value.into());
        self
    }

    pub fn paternal_organism_name(mut self, value: impl Into<String>) -> Self {
        self.paternal_organism_name = Some(value.into());
        self
    }

    pub fn hybrid_type(mut self, value: CodeableConcept) -> Self {
        self.hybrid_type = Some(value);
        self
    }

    pub fn build(self) -> Result<OrganismHybrid> {
        Ok(OrganismHybrid {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            maternal_organism_id: self.maternal_organism_id,
            maternal_organism_name: self.maternal_organism_name,
            paternal_organism_id: self.paternal_organism_id,
            paternal_organism_name: self.paternal_organism_name,
            hybrid_type: self.hybrid_type,
        })
    }
}

/// Higher ranks of the organism's taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganismGeneral {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kingdom: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phylum: Option<CodeableConcept>,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    class_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<CodeableConcept>,
}

impl OrganismGeneral {
    pub fn builder() -> OrganismGeneralBuilder {
        OrganismGeneralBuilder::default()
    }

    pub fn to_builder(&self) -> OrganismGeneralBuilder {
        OrganismGeneralBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            kingdom: self.kingdom.clone(),
            phylum: self.phylum.clone(),
            class_: self.class_.clone(),
            order: self.order.clone(),
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

    pub fn kingdom(&self) -> Option<&CodeableConcept> {
        self.kingdom.as_ref()
    }

    pub fn phylum(&self) -> Option<&CodeableConcept> {
        self.phylum.as_ref()
    }

    pub fn class_(&self) -> Option<&CodeableConcept> {
        self.class_.as_ref()
    }

    pub fn order(&self) -> Option<&CodeableConcept> {
        self.order.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrganismGeneralBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    kingdom: Option<CodeableConcept>,
    phylum: Option<CodeableConcept>,
    class_: Option<CodeableConcept>,
    order: Option<CodeableConcept>,
}

impl OrganismGeneralBuilder {
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

    pub fn kingdom(mut self, value: CodeableConcept) -> Self {
        self.kingdom = Some(value);
        self
    }

    pub fn phylum(mut self, value: CodeableConcept) -> Self {
        self.phylum = Some(value);
        self
    }

    pub fn class_(mut self, value: CodeableConcept) -> Self {
        self.class_ = Some(value);
        self
    }

    pub fn order(mut self, value: CodeableConcept) -> Self {
        self.order = Some(value);
        self
    }

    pub fn build(self) -> Result<OrganismGeneral> {
        Ok(OrganismGeneral {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            kingdom: self.kingdom,
            phylum: self.phylum,
            class_: self.class_,
            order: self.order,
        })
    }
}

/// An anatomical part of the organism and where within the organism it sits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMaterialPartDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Entity of anatomical origin of source material within an organism
    #[serde(skip_serializing_if = "Option::is_none")]
    part: Option<CodeableConcept>,
    /// The detailed anatomic location when the part can be extracted from
    /// different anatomical locations of the organism
    #[serde(skip_serializing_if = "Option::is_none")]
    part_location: Option<CodeableConcept>,
}

impl SourceMaterialPartDescription {
    pub fn builder() -> SourceMaterialPartDescriptionBuilder {
        SourceMaterialPartDescriptionBuilder::default()
    }

    pub fn to_builder(&self) -> SourceMaterialPartDescriptionBuilder {
        SourceMaterialPartDescriptionBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            part: self.part.clone(),
            part_location: self.part_location.clone(),
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

    pub fn part(&self) -> Option<&CodeableConcept> {
        self.part.as_ref()
    }

    pub fn part_location(&self) -> Option<&CodeableConcept> {
        self.part_location.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceMaterialPartDescriptionBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    part: Option<CodeableConcept>,
    part_location: Option<CodeableConcept>,
}

impl SourceMaterialPartDescriptionBuilder {
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

    pub fn part(mut self, value: CodeableConcept) -> Self {
        self.part = Some(value);
        self
    }

    pub fn part_location(mut self, value: CodeableConcept) -> Self {
        self.part_location = Some(value);
        self
    }

    pub fn build(self) -> Result<SourceMaterialPartDescription> {
        Ok(SourceMaterialPartDescription {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            part: self.part,
            part_location: self.part_location,
        })
    }
}

impl Visit for SubstanceSourceMaterial {
    fn type_name(&self) -> &'static str {
        "SubstanceSourceMaterial"
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
        if let Some(class) = &self.source_material_class {
            class.accept("sourceMaterialClass", visitor);
        }
        if let Some(type_) = &self.source_material_type {
            type_.accept("sourceMaterialType", visitor);
        }
        if let Some(state) = &self.source_material_state {
            state.accept("sourceMaterialState", visitor);
        }
        if let Some(organism_id) = &self.organism_id {
            organism_id.accept("organismId", visitor);
        }
        if let Some(organism_name) = &self.organism_name {
            visitor.primitive("organismName", PrimitiveValue::Str(organism_name));
        }
        accept_list("parentSubstanceId", &self.parent_substance_id, visitor);
        primitive_list("parentSubstanceName", &self.parent_substance_name, visitor, |s| {
            PrimitiveValue::Str(s)
        });
        accept_list("countryOfOrigin", &self.country_of_origin, visitor);
        primitive_list(
            "geographicalLocation",
            &self.geographical_location,
            visitor,
            |s| PrimitiveValue::Str(s),
        );
        if let Some(development_stage) = &self.development_stage {
            development_stage.accept("developmentStage", visitor);
        }
        accept_list("fractionDescription", &self.fraction_description, visitor);
        if let Some(organism) = &self.organism {
            organism.accept("organism", visitor);
        }
        accept_list("partDescription", &self.part_description, visitor);
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for SourceMaterialFractionDescription {
    fn type_name(&self) -> &'static str {
        "SubstanceSourceMaterial.FractionDescription"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(fraction) = &self.fraction {
            visitor.primitive("fraction", PrimitiveValue::Str(fraction));
        }
        if let Some(material_type) = &self.material_type {
            material_type.accept("materialType", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for SourceMaterialOrganism {
    fn type_name(&self) -> &'static str {
        "SubstanceSourceMaterial.Organism"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(family) = &self.family {
            family.accept("family", visitor);
        }
        if let Some(genus) = &self.genus {
            genus.accept("genus", visitor);
        }
        if let Some(species) = &self.species {
            species.accept("species", visitor);
        }
        if let Some(intraspecific_type) = &self.intraspecific_type {
            intraspecific_type.accept("intraspecificType", visitor);
        }
        if let Some(description) = &self.intraspecific_description {
            visitor.primitive("intraspecificDescription", PrimitiveValue::Str(description));
        }
        accept_list("author", &self.author, visitor);
        if let Some(hybrid) = &self.hybrid {
            hybrid.accept("hybrid", visitor);
        }
        if let Some(organism_general) = &self.organism_general {
            organism_general.accept("organismGeneral", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for OrganismAuthor {
    fn type_name(&self) -> &'static str {
        "SubstanceSourceMaterial.Organism.Author"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(author_type) = &self.author_type {
            author_type.accept("authorType", visitor);
        }
        if let Some(author_description) = &self.author_description {
            visitor.primitive("authorDescription", PrimitiveValue::Str(author_description));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for OrganismHybrid {
    fn type_name(&self) -> &'static str {
        "SubstanceSourceMaterial.Organism.Hybrid"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(v) = &self.maternal_organism_id {
            visitor.primitive("maternalOrganismId", PrimitiveValue::Str(v));
        }
        if let Some(v) = &self.maternal_organism_name {
            visitor.primitive("maternalOrganismName", PrimitiveValue::Str(v));
        }
        if let Some(v) = &self.paternal_organism_id {
            visitor.primitive("paternalOrganismId", PrimitiveValue::Str(v));
        }
        if let Some(v) = &self.paternal_organism_name {
            visitor.primitive("paternalOrganismName", PrimitiveValue::Str(v));
        }
        if let Some(hybrid_type) = &self.hybrid_type {
            hybrid_type.accept("hybridType", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for OrganismGeneral {
    fn type_name(&self) -> &'static str {
        "SubstanceSourceMaterial.Organism.OrganismGeneral"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(kingdom) = &self.kingdom {
            kingdom.accept("kingdom", visitor);
        }
        if let Some(phylum) = &self.phylum {
            phylum.accept("phylum", visitor);
        }
        if let Some(class) = &self.class_ {
            class.accept("class", visitor);
        }
        if let Some(order) = &self.order {
            order.accept("order", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for SourceMaterialPartDescription {
    fn type_name(&self) -> &'static str {
        "SubstanceSourceMaterial.PartDescription"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(part) = &self.part {
            part.accept("part", visitor);
        }
        if let Some(part_location) = &self.part_location {
            part_location.accept("partLocation", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}
