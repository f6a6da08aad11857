//! The NutritionOrder resource: a request for a diet, oral nutritional
//! supplement or enteral formula to supply to a patient.

use crate::codes::{RequestIntent, RequestStatus};
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Ratio, Reference,
    SimpleQuantity, Timing,
};
use crate::error::{Error, Result};
use crate::primitives::{Canonical, Code, DateTime, Id, Uri};
use crate::visitor::{
    accept_list, primitive_list, visit_backbone_base, PrimitiveValue, Visit, Visitor,
};
use serde::{Deserialize, Serialize};

/// A request to supply a diet, formula feeding (enteral) or oral nutritional
/// supplement to a patient/resident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrder {
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
    /// Identifiers assigned to this order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    identifier: Vec<Identifier>,
    /// Instantiates FHIR protocol or definition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    instantiates_canonical: Vec<Canonical>,
    /// Instantiates external protocol or definition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    instantiates_uri: Vec<Uri>,
    /// Instantiates protocol or definition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    instantiates: Vec<Uri>,
    /// Workflow status of the order
    status: RequestStatus,
    /// Intent of the order: proposal, plan or order
    intent: RequestIntent,
    /// The person who requires the diet, formula or supplement
    patient: Reference,
    /// The encounter associated with this order
    #[serde(skip_serializing_if = "Option::is_none")]
    encounter: Option<Reference>,
    /// Date and time the order was requested
    date_time: DateTime,
    /// Who ordered the diet, formula or supplement
    #[serde(skip_serializing_if = "Option::is_none")]
    orderer: Option<Reference>,
    /// List of the patient's food and nutrition-related allergies and
    /// intolerances
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    allergy_intolerance: Vec<Reference>,
    /// Order-specific modifier about the type of food that should be given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    food_preference_modifier: Vec<CodeableConcept>,
    /// Order-specific modifier about the type of food that should not be given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    exclude_food_modifier: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oral_diet: Option<NutritionOrderOralDiet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    supplement: Vec<NutritionOrderSupplement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enteral_formula: Option<NutritionOrderEnteralFormula>,
    /// Comments made about the order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    note: Vec<Annotation>,
}

impl NutritionOrder {
    pub fn builder() -> NutritionOrderBuilder {
        NutritionOrderBuilder::default()
    }

    pub fn to_builder(&self) -> NutritionOrderBuilder {
        NutritionOrderBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            text: self.text.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            instantiates_canonical: self.instantiates_canonical.clone(),
            instantiates_uri: self.instantiates_uri.clone(),
            instantiates: self.instantiates.clone(),
            status: Some(self.status),
            intent: Some(self.intent),
            patient: Some(self.patient.clone()),
            encounter: self.encounter.clone(),
            date_time: Some(self.date_time.clone()),
            orderer: self.orderer.clone(),
            allergy_intolerance: self.allergy_intolerance.clone(),
            food_preference_modifier: self.food_preference_modifier.clone(),
            exclude_food_modifier: self.exclude_food_modifier.clone(),
            oral_diet: self.oral_diet.clone(),
            supplement: self.supplement.clone(),
            enteral_formula: self.enteral_formula.clone(),
            note: self.note.clone(),
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

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    pub fn instantiates_canonical(&self) -> &[Canonical] {
        &self.instantiates_canonical
    }

    pub fn instantiates_uri(&self) -> &[Uri] {
        &self.instantiates_uri
    }

    pub fn instantiates(&self) -> &[Uri] {
        &self.instantiates
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn intent(&self) -> RequestIntent {
        self.intent
    }

    pub fn patient(&self) -> &Reference {
        &self.patient
    }

    pub fn encounter(&self) -> Option<&Reference> {
        self.encounter.as_ref()
    }

    pub fn date_time(&self) -> &DateTime {
        &self.date_time
    }

    pub fn orderer(&self) -> Option<&Reference> {
        self.orderer.as_ref()
    }

    pub fn allergy_intolerance(&self) -> &[Reference] {
        &self.allergy_intolerance
    }

    pub fn food_preference_modifier(&self) -> &[CodeableConcept] {
        &self.food_preference_modifier
    }

    pub fn exclude_food_modifier(&self) -> &[CodeableConcept] {
        &self.exclude_food_modifier
    }

    pub fn oral_diet(&self) -> Option<&NutritionOrderOralDiet> {
        self.oral_diet.as_ref()
    }

    pub fn supplement(&self) -> &[NutritionOrderSupplement] {
        &self.supplement
    }

    pub fn enteral_formula(&self) -> Option<&NutritionOrderEnteralFormula> {
        self.enteral_formula.as_ref()
    }

    pub fn note(&self) -> &[Annotation] {
        &self.note
    }
}

#[derive(Debug, Clone, Default)]
pub struct NutritionOrderBuilder {
    id: Option<Id>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    text: Option<Narrative>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    instantiates_canonical: Vec<Canonical>,
    instantiates_uri: Vec<Uri>,
    instantiates: Vec<Uri>,
    status: Option<RequestStatus>,
    intent: Option<RequestIntent>,
    patient: Option<Reference>,
    encounter: Option<Reference>,
    date_time: Option<DateTime>,
    orderer: Option<Reference>,
    allergy_intolerance: Vec<Reference>,
    food_preference_modifier: Vec<CodeableConcept>,
    exclude_food_modifier: Vec<CodeableConcept>,
    oral_diet: Option<NutritionOrderOralDiet>,
    supplement: Vec<NutritionOrderSupplement>,
    enteral_formula: Option<NutritionOrderEnteralFormula>,
    note: Vec<Annotation>,
}

impl NutritionOrderBuilder {
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

    pub fn identifier(mut self, value: Identifier) -> Self {
        self.identifier.push(value);
        self
    }

    pub fn set_identifier(mut self, values: Vec<Identifier>) -> Self {
        self.identifier = values;
        self
    }

    pub fn instantiates_canonical(mut self, value: Canonical) -> Self {
        self.instantiates_canonical.push(value);
        self
    }

    pub fn set_instantiates_canonical(mut self, values: Vec<Canonical>) -> Self {
        self.instantiates_canonical = values;
        self
    }

    pub fn instantiates_uri(mut self, value: Uri) -> Self {
        self.instantiates_uri.push(value);
        self
    }

    pub fn set_instantiates_uri(mut self, values: Vec<Uri>) -> Self {
        self.instantiates_uri = values;
        self
    }

    pub fn instantiates(mut self, value: Uri) -> Self {
        self.instantiates.push(value);
        self
    }

    pub fn set_instantiates(mut self, values: Vec<Uri>) -> Self {
        self.instantiates = values;
        self
    }

    pub fn status(mut self, value: RequestStatus) -> Self {
        self.status = Some(value);
        self
    }

    pub fn intent(mut self, value: RequestIntent) -> Self {
        self.intent = Some(value);
        self
    }

    pub fn patient(mut self, value: Reference) -> Self {
        self.patient = Some(value);
        self
    }

    pub fn encounter(mut self, value: Reference) -> Self {
        self.encounter = Some(value);
        self
    }

    pub fn date_time(mut self, value: DateTime) -> Self {
        self.date_time = Some(value);
        self
    }

    pub fn orderer(mut self, value: Reference) -> Self {
        self.orderer = Some(value);
        self
    }

    pub fn allergy_intolerance(mut self, value: Reference) -> Self {
        self.allergy_intolerance.push(value);
        self
    }

    pub fn set_allergy_intolerance(mut self, values: Vec<Reference>) -> Self {
        self.allergy_intolerance = values;
        self
    }

    pub fn food_preference_modifier(mut self, value: CodeableConcept) -> Self {
        self.food_preference_modifier.push(value);
        self
    }

    pub fn set_food_preference_modifier(mut self, values: Vec<CodeableConcept>) -> Self {
        self.food_preference_modifier = values;
        self
    }

    pub fn exclude_food_modifier(mut self, value: CodeableConcept) -> Self {
        self.exclude_food_modifier.push(value);
        self
    }

    pub fn set_exclude_food_modifier(mut self, values: Vec<CodeableConcept>) -> Self {
        self.exclude_food_modifier = values;
        self
    }

    pub fn oral_diet(mut self, value: NutritionOrderOralDiet) -> Self {
        self.oral_diet = Some(value);
        self
    }

    pub fn supplement(mut self, value: NutritionOrderSupplement) -> Self {
        self.supplement.push(value);
        self
    }

    pub fn set_supplement(mut self, values: Vec<NutritionOrderSupplement>) -> Self {
        self.supplement = values;
        self
    }

    pub fn enteral_formula(mut self, value: NutritionOrderEnteralFormula) -> Self {
        self.enteral_formula = Some(value);
        self
    }

    pub fn note(mut self, value: Annotation) -> Self {
        self.note.push(value);
        self
    }

    pub fn set_note(mut self, values: Vec<Annotation>) -> Self {
        self.note = values;
        self
    }

    pub fn build(self) -> Result<NutritionOrder> {
        Ok(NutritionOrder {
            id: self.id,
            meta: self.meta,
            implicit_rules: self.implicit_rules,
            language: self.language,
            text: self.text,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            identifier: self.identifier,
            instantiates_canonical: self.instantiates_canonical,
            instantiates_uri: self.instantiates_uri,
            instantiates: self.instantiates,
            status: self
                .status
                .ok_or(Error::MissingField("NutritionOrder.status"))?,
            intent: self
                .intent
                .ok_or(Error::MissingField("NutritionOrder.intent"))?,
            patient: self
                .patient
                .ok_or(Error::MissingField("NutritionOrder.patient"))?,
            encounter: self.encounter,
            date_time: self
                .date_time
                .ok_or(Error::MissingField("NutritionOrder.dateTime"))?,
            orderer: self.orderer,
            allergy_intolerance: self.allergy_intolerance,
            food_preference_modifier: self.food_preference_modifier,
            exclude_food_modifier: self.exclude_food_modifier,
            oral_diet: self.oral_diet,
            supplement: self.supplement,
            enteral_formula: self.enteral_formula,
            note: self.note,
        })
    }
}

/// Diet given orally in contrast to enteral (tube) feeding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderOralDiet {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Type of oral diet or diet restrictions that describe what can be
    /// consumed orally
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    type_: Vec<CodeableConcept>,
    /// Scheduled frequency of diet
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    schedule: Vec<Timing>,
    /// Required nutrient modifications
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nutrient: Vec<OralDietNutrient>,
    /// Required texture modifications
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    texture: Vec<OralDietTexture>,
    /// The required consistency of fluids and liquids provided to the patient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fluid_consistency_type: Vec<CodeableConcept>,
    /// Instructions or additional information about the oral diet
    #[serde(skip_serializing_if = "Option::is_none")]
    instruction: Option<String>,
}

impl NutritionOrderOralDiet {
    pub fn builder() -> NutritionOrderOralDietBuilder {
        NutritionOrderOralDietBuilder::default()
    }

    pub fn to_builder(&self) -> NutritionOrderOralDietBuilder {
        NutritionOrderOralDietBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            type_: self.type_.clone(),
            schedule: self.schedule.clone(),
            nutrient: self.nutrient.clone(),
            texture: self.texture.clone(),
            fluid_consistency_type: self.fluid_consistency_type.clone(),
            instruction: self.instruction.clone(),
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

    pub fn type_(&self) -> &[CodeableConcept] {
        &self.type_
    }

    pub fn schedule(&self) -> &[Timing] {
        &self.schedule
    }

    pub fn nutrient(&self) -> &[OralDietNutrient] {
        &self.nutrient
    }

    pub fn texture(&self) -> &[OralDietTexture] {
        &self.texture
    }

    pub fn fluid_consistency_type(&self) -> &[CodeableConcept] {
        &self.fluid_consistency_type
    }

    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NutritionOrderOralDietBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    type_: Vec<CodeableConcept>,
    schedule: Vec<Timing>,
    nutrient: Vec<OralDietNutrient>,
    texture: Vec<OralDietTexture>,
    fluid_consistency_type: Vec<CodeableConcept>,
    instruction: Option<String>,
}

impl NutritionOrderOralDietBuilder {
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

    pub fn type_(mut self, value: CodeableConcept) -> Self {
        self.type_.push(value);
        self
    }

    pub fn set_type_(mut self, values: Vec<CodeableConcept>) -> Self {
        self.type_ = values;
        self
    }

    pub fn schedule(mut self, value: Timing) -> Self {
        self.schedule.push(value);
        self
    }

    pub fn set_schedule(mut self, values: Vec<Timing>) -> Self {
        self.schedule = values;
        self
    }

    pub fn nutrient(mut self, value: OralDietNutrient) -> Self {
        self.nutrient.push(value);
        self
    }

    pub fn set_nutrient(mut self, values: Vec<OralDietNutrient>) -> Self {
        self.nutrient = values;
        self
    }

    pub fn texture(mut self, value: OralDietTexture) -> Self {
        self.texture.push(value);
        self
    }

    pub fn set_texture(mut self, values: Vec<OralDietTexture>) -> Self {
        self.texture = values;
        self
    }

    pub fn fluid_consistency_type(mut self, value: CodeableConcept) -> Self {
        self.fluid_consistency_type.push(value);
        self
    }

    pub fn set_fluid_consistency_type(mut self, values: Vec<CodeableConcept>) -> Self {
        self.fluid_consistency_type = values;
        self
    }

    pub fn instruction(mut self, value: impl Into<String>) -> Self {
        self.instruction = Some(value.into());
        self
    }

    pub fn build(self) -> Result<NutritionOrderOralDiet> {
        Ok(NutritionOrderOralDiet {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            type_: self.type_,
            schedule: self.schedule,
            nutrient: self.nutrient,
            texture: self.texture,
            fluid_consistency_type: self.fluid_consistency_type,
            instruction: self.instruction,
        })
    }
}

/// A required adjustment to the quantity of a nutrient, e.g. sodium capped
/// at 2 grams per day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OralDietNutrient {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Type of nutrient that is being modified
    #[serde(skip_serializing_if = "Option::is_none")]
    modifier: Option<CodeableConcept>,
    /// Quantity of the specified nutrient
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<SimpleQuantity>,
}

impl OralDietNutrient {
    pub fn builder() -> OralDietNutrientBuilder {
        OralDietNutrientBuilder::default()
    }

    pub fn to_builder(&self) -> OralDietNutrientBuilder {
        OralDietNutrientBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            modifier: self.modifier.clone(),
            amount: self.amount.clone(),
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

    pub fn modifier(&self) -> Option<&CodeableConcept> {
        self.modifier.as_ref()
    }

    pub fn amount(&self) -> Option<&SimpleQuantity> {
        self.amount.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OralDietNutrientBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    modifier: Option<CodeableConcept>,
    amount: Option<SimpleQuantity>,
}

impl OralDietNutrientBuilder {
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

    pub fn modifier(mut self, value: CodeableConcept) -> Self {
        self.modifier = Some(value);
        self
    }

    pub fn amount(mut self, value: SimpleQuantity) -> Self {
        self.amount = Some(value);
        self
    }

    pub fn build(self) -> Result<OralDietNutrient> {
        Ok(OralDietNutrient {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            modifier: self.modifier,
            amount: self.amount,
        })
    }
}

/// A required texture modification of food, e.g. pureed meat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OralDietTexture {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Code to indicate how to alter the texture of the foods
    #[serde(skip_serializing_if = "Option::is_none")]
    modifier: Option<CodeableConcept>,
    /// Concepts that are used to identify an entity that is ingested for
    /// nutritional purposes
    #[serde(skip_serializing_if = "Option::is_none")]
    food_type: Option<CodeableConcept>,
}

impl OralDietTexture {
    pub fn builder() -> OralDietTextureBuilder {
        OralDietTextureBuilder::default()
    }

    pub fn to_builder(&self) -> OralDietTextureBuilder {
        OralDietTextureBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            modifier: self.modifier.clone(),
            food_type: self.food_type.clone(),
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

    pub fn modifier(&self) -> Option<&CodeableConcept> {
        self.modifier.as_ref()
    }

    pub fn food_type(&self) -> Option<&CodeableConcept> {
        self.food_type.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OralDietTextureBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    modifier: Option<CodeableConcept>,
    food_type: Option<CodeableConcept>,
}

impl OralDietTextureBuilder {
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

    pub fn modifier(mut self, value: CodeableConcept) -> Self {
        self.modifier = Some(value);
        self
    }

    pub fn food_type(mut self, value: CodeableConcept) -> Self {
        self.food_type = Some(value);
        self
    }

    pub fn build(self) -> Result<OralDietTexture> {
        Ok(OralDietTexture {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            modifier: self.modifier,
            food_type: self.food_type,
        })
    }
}

/// Oral nutritional products given to add further nutritional value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderSupplement {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Type of supplement product requested
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<CodeableConcept>,
    /// Product or brand name of the nutritional supplement
    #[serde(skip_serializing_if = "Option::is_none")]
    product_name: Option<String>,
    /// Scheduled frequency of supplement
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    schedule: Vec<Timing>,
    /// Amount of the nutritional supplement
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<SimpleQuantity>,
    /// Instructions or additional information about the oral supplement
    #[serde(skip_serializing_if = "Option::is_none")]
    instruction: Option<String>,
}

impl NutritionOrderSupplement {
    pub fn builder() -> NutritionOrderSupplementBuilder {
        NutritionOrderSupplementBuilder::default()
    }

    pub fn to_builder(&self) -> NutritionOrderSupplementBuilder {
        NutritionOrderSupplementBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            type_: self.type_.clone(),
            product_name: self.product_name.clone(),
            schedule: self.schedule.clone(),
            quantity: self.quantity.clone(),
            instruction: self.instruction.clone(),
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

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    pub fn schedule(&self) -> &[Timing] {
        &self.schedule
    }

    pub fn quantity(&self) -> Option<&SimpleQuantity> {
        self.quantity.as_ref()
    }

    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NutritionOrderSupplementBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    type_: Option<CodeableConcept>,
    product_name: Option<String>,
    schedule: Vec<Timing>,
    quantity: Option<SimpleQuantity>,
    instruction: Option<String>,
}

impl NutritionOrderSupplementBuilder {
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

    pub fn type_(mut self, value: CodeableConcept) -> Self {
        self.type_ = Some(value);
        self
    }

    pub fn product_name(mut self, value: impl Into<String>) -> Self {
        self.product_name = Some(value.into());
        self
    }

    pub fn schedule(mut self, value: Timing) -> Self {
        self.schedule.push(value);
        self
    }

    pub fn set_schedule(mut self, values: Vec<Timing>) -> Self {
        self.schedule = values;
        self
    }

    pub fn quantity(mut self, value: SimpleQuantity) -> Self {
        self.quantity = Some(value);
        self
    }

    pub fn instruction(mut self, value: impl Into<String>) -> Self {
        self.instruction = Some(value.into());
        self
    }

    pub fn build(self) -> Result<NutritionOrderSupplement> {
        Ok(NutritionOrderSupplement {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            type_: self.type_,
            product_name: self.product_name,
            schedule: self.schedule,
            quantity: self.quantity,
            instruction: self.instruction,
        })
    }
}

/// Feeding provided through the gastrointestinal tract via a tube, catheter
/// or stoma.
///
/// The wire key for the route element is `routeofAdministration`, with a
/// lowercase "of", matching the published R4 definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOrderEnteralFormula {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    /// Type of enteral or infant formula
    #[serde(skip_serializing_if = "Option::is_none")]
    base_formula_type: Option<CodeableConcept>,
    /// Product or brand name of the enteral or infant formula
    #[serde(skip_serializing_if = "Option::is_none")]
    base_formula_product_name: Option<String>,
    /// Type of modular component to add to the feeding
    #[serde(skip_serializing_if = "Option::is_none")]
    additive_type: Option<CodeableConcept>,
    /// Product or brand name of the modular additive
    #[serde(skip_serializing_if = "Option::is_none")]
    additive_product_name: Option<String>,
    /// Amount of energy per specified volume that is required
    #[serde(skip_serializing_if = "Option::is_none")]
    caloric_density: Option<SimpleQuantity>,
    /// How the formula should enter the patient's gastrointestinal tract
    #[serde(rename = "routeofAdministration", skip_serializing_if = "Option::is_none")]
    route_of_administration: Option<CodeableConcept>,
    /// Formula feeding instruction as structured data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    administration: Vec<EnteralFormulaAdministration>,
    /// Upper limit on formula volume per unit of time
    #[serde(skip_serializing_if = "Option::is_none")]
    max_volume_to_deliver: Option<SimpleQuantity>,
    /// Formula feeding instructions expressed as text
    #[serde(skip_serializing_if = "Option::is_none")]
    administration_instruction: Option<String>,
}

impl NutritionOrderEnteralFormula {
    pub fn builder() -> NutritionOrderEnteralFormulaBuilder {
        NutritionOrderEnteralFormulaBuilder::default()
    }

    pub fn to_builder(&self) -> NutritionOrderEnteralFormulaBuilder {
        NutritionOrderEnteralFormulaBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            base_formula_type: self.base_formula_type.clone(),
            base_formula_product_name: self.base_formula_product_name.clone(),
            additive_type: self.additive_type.clone(),
            additive_product_name: self.additive_product_name.clone(),
            caloric_density: self.caloric_density.clone(),
            route_of_administration: self.route_of_administration.clone(),
            administration: self.administration.clone(),
            max_volume_to_deliver: self.max_volume_to_deliver.clone(),
            administration_instruction: self.administration_instruction.clone(),
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

    pub fn base_formula_type(&self) -> Option<&CodeableConcept> {
        self.base_formula_type.as_ref()
    }

    pub fn base_formula_product_name(&self) -> Option<&str> {
        self.base_formula_product_name.as_deref()
    }

    pub fn additive_type(&self) -> Option<&CodeableConcept> {
        self.additive_type.as_ref()
    }

    pub fn additive_product_name(&self) -> Option<&str> {
        self.additive_product_name.as_deref()
    }

    pub fn caloric_density(&self) -> Option<&SimpleQuantity> {
        self.caloric_density.as_ref()
    }

    pub fn route_of_administration(&self) -> Option<&CodeableConcept> {
        self.route_of_administration.as_ref()
    }

    pub fn administration(&self) -> &[EnteralFormulaAdministration] {
        &self.administration
    }

    pub fn max_volume_to_deliver(&self) -> Option<&SimpleQuantity> {
        self.max_volume_to_deliver.as_ref()
    }

    pub fn administration_instruction(&self) -> Option<&str> {
        self.administration_instruction.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NutritionOrderEnteralFormulaBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    base_formula_type: Option<CodeableConcept>,
    base_formula_product_name: Option<String>,
    additive_type: Option<CodeableConcept>,
    additive_product_name: Option<String>,
    caloric_density: Option<SimpleQuantity>,
    route_of_administration: Option<CodeableConcept>,
    administration: Vec<EnteralFormulaAdministration>,
    max_volume_to_deliver: Option<SimpleQuantity>,
    administration_instruction: Option<String>,
}

impl NutritionOrderEnteralFormulaBuilder {
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

    pub fn base_formula_type(mut self, value: CodeableConcept) -> Self {
        self.base_formula_type = Some(value);
        self
    }

    pub fn base_formula_product_name(mut self, value: impl Into<String>) -> Self {
        self.base_formula_product_name = Some(value.into());
        self
    }

    pub fn additive_type(mut self, value: CodeableConcept) -> Self {
        self.additive_type = Some(value);
        self
    }

    pub fn additive_product_name(mut self, value: impl Into<String>) -> Self {
        self.additive_product_name = Some(value.into());
        self
    }

    pub fn caloric_density(mut self, value: SimpleQuantity) -> Self {
        self.caloric_density = Some(value);
        self
    }

    pub fn route_of_administration(mut self, value: CodeableConcept) -> Self {
        self.route_of_administration = Some(value);
        self
    }

    pub fn administration(mut self, value: EnteralFormulaAdministration) -> Self {
        self.administration.push(value);
        self
    }

    pub fn set_administration(mut self, values: Vec<EnteralFormulaAdministration>) -> Self {
        self.administration = values;
        self
    }

    pub fn max_volume_to_deliver(mut self, value: SimpleQuantity) -> Self {
        self.max_volume_to_deliver = Some(value);
        self
    }

    pub fn administration_instruction(mut self, value: impl Into<String>) -> Self {
        self.administration_instruction = Some(value.into());
        self
    }

    pub fn build(self) -> Result<NutritionOrderEnteralFormula> {
        Ok(NutritionOrderEnteralFormula {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            base_formula_type: self.base_formula_type,
            base_formula_product_name: self.base_formula_product_name,
            additive_type: self.additive_type,
            additive_product_name: self.additive_product_name,
            caloric_density: self.caloric_density,
            route_of_administration: self.route_of_administration,
            administration: self.administration,
            max_volume_to_deliver: self.max_volume_to_deliver,
            administration_instruction: self.administration_instruction,
        })
    }
}

/// A single formula feeding event: schedule, volume and rate of delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "EnteralFormulaAdministrationWire",
    into = "EnteralFormulaAdministrationWire"
)]
pub struct EnteralFormulaAdministration {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    schedule: Option<Timing>,
    quantity: Option<SimpleQuantity>,
    rate: Option<EnteralFormulaAdministrationRate>,
}

/// `NutritionOrder.enteralFormula.administration.rate[x]`: SimpleQuantity or
/// Ratio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnteralFormulaAdministrationRate {
    Quantity(SimpleQuantity),
    Ratio(Ratio),
}

impl EnteralFormulaAdministration {
    pub fn builder() -> EnteralFormulaAdministrationBuilder {
        EnteralFormulaAdministrationBuilder::default()
    }

    pub fn to_builder(&self) -> EnteralFormulaAdministrationBuilder {
        EnteralFormulaAdministrationBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            schedule: self.schedule.clone(),
            quantity: self.quantity.clone(),
            rate: self.rate.clone(),
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

    pub fn schedule(&self) -> Option<&Timing> {
        self.schedule.as_ref()
    }

    pub fn quantity(&self) -> Option<&SimpleQuantity> {
        self.quantity.as_ref()
    }

    pub fn rate(&self) -> Option<&EnteralFormulaAdministrationRate> {
        self.rate.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnteralFormulaAdministrationBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    schedule: Option<Timing>,
    quantity: Option<SimpleQuantity>,
    rate: Option<EnteralFormulaAdministrationRate>,
}

impl EnteralFormulaAdministrationBuilder {
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

    pub fn schedule(mut self, value: Timing) -> Self {
        self.schedule = Some(value);
        self
    }

    pub fn quantity(mut self, value: SimpleQuantity) -> Self {
        self.quantity = Some(value);
        self
    }

    pub fn rate(mut self, value: EnteralFormulaAdministrationRate) -> Self {
        self.rate = Some(value);
        self
    }

    pub fn build(self) -> Result<EnteralFormulaAdministration> {
        Ok(EnteralFormulaAdministration {
            id: self.id,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
            schedule: self.schedule,
            quantity: self.quantity,
            rate: self.rate,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnteralFormulaAdministrationWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    modifier_extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<Timing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate_quantity: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate_ratio: Option<Ratio>,
}

impl TryFrom<EnteralFormulaAdministrationWire> for EnteralFormulaAdministration {
    type Error = Error;

    fn try_from(wire: EnteralFormulaAdministrationWire) -> Result<Self> {
        let rate = match (wire.rate_quantity, wire.rate_ratio) {
            (Some(_), Some(_)) => {
                return Err(Error::invalid(
                    "NutritionOrder.enteralFormula.administration.rate[x]",
                    "more than one rate[x] element present",
                ))
            }
            (Some(q), None) => Some(EnteralFormulaAdministrationRate::Quantity(q)),
            (None, Some(r)) => Some(EnteralFormulaAdministrationRate::Ratio(r)),
            (None, None) => None,
        };
        Ok(EnteralFormulaAdministration {
            id: wire.id,
            extension: wire.extension,
            modifier_extension: wire.modifier_extension,
            schedule: wire.schedule,
            quantity: wire.quantity,
            rate,
        })
    }
}

impl From<EnteralFormulaAdministration> for EnteralFormulaAdministrationWire {
    fn from(administration: EnteralFormulaAdministration) -> Self {
        let (rate_quantity, rate_ratio) = match administration.rate {
            Some(EnteralFormulaAdministrationRate::Quantity(q)) => (Some(q), None),
            Some(EnteralFormulaAdministrationRate::Ratio(r)) => (None, Some(r)),
            None => (None, None),
        };
        EnteralFormulaAdministrationWire {
            id: administration.id,
            extension: administration.extension,
            modifier_extension: administration.modifier_extension,
            schedule: administration.schedule,
            quantity: administration.quantity,
            rate_quantity,
            rate_ratio,
        }
    }
}

impl Visit for NutritionOrder {
    fn type_name(&self) -> &'static str {
        "NutritionOrder"
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
        accept_list("identifier", &self.identifier, visitor);
        primitive_list(
            "instantiatesCanonical",
            &self.instantiates_canonical,
            visitor,
            |c| PrimitiveValue::Str(c.as_str()),
        );
        primitive_list("instantiatesUri", &self.instantiates_uri, visitor, |u| {
            PrimitiveValue::Str(u.as_str())
        });
        primitive_list("instantiates", &self.instantiates, visitor, |u| {
            PrimitiveValue::Str(u.as_str())
        });
        visitor.primitive("status", PrimitiveValue::Str(self.status.as_str()));
        visitor.primitive("intent", PrimitiveValue::Str(self.intent.as_str()));
        self.patient.accept("patient", visitor);
        if let Some(encounter) = &self.encounter {
            encounter.accept("encounter", visitor);
        }
        visitor.primitive("dateTime", PrimitiveValue::Str(self.date_time.as_str()));
        if let Some(orderer) = &self.orderer {
            orderer.accept("orderer", visitor);
        }
        accept_list("allergyIntolerance", &self.allergy_intolerance, visitor);
        accept_list(
            "foodPreferenceModifier",
            &self.food_preference_modifier,
            visitor,
        );
        accept_list("excludeFoodModifier", &self.exclude_food_modifier, visitor);
        if let Some(oral_diet) = &self.oral_diet {
            oral_diet.accept("oralDiet", visitor);
        }
        accept_list("supplement", &self.supplement, visitor);
        if let Some(enteral_formula) = &self.enteral_formula {
            enteral_formula.accept("enteralFormula", visitor);
        }
        accept_list("note", &self.note, visitor);
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for NutritionOrderOralDiet {
    fn type_name(&self) -> &'static str {
        "NutritionOrder.OralDiet"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        accept_list("type", &self.type_, visitor);
        accept_list("schedule", &self.schedule, visitor);
        accept_list("nutrient", &self.nutrient, visitor);
        accept_list("texture", &self.texture, visitor);
        accept_list("fluidConsistencyType", &self.fluid_consistency_type, visitor);
        if let Some(instruction) = &self.instruction {
            visitor.primitive("instruction", PrimitiveValue::Str(instruction));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for OralDietNutrient {
    fn type_name(&self) -> &'static str {
        "NutritionOrder.OralDiet.Nutrient"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(modifier) = &self.modifier {
            modifier.accept("modifier", visitor);
        }
        if let Some(amount) = &self.amount {
            amount.accept("amount", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for OralDietTexture {
    fn type_name(&self) -> &'static str {
        "NutritionOrder.OralDiet.Texture"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(modifier) = &self.modifier {
            modifier.accept("modifier", visitor);
        }
        if let Some(food_type) = &self.food_type {
            food_type.accept("foodType", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for NutritionOrderSupplement {
    fn type_name(&self) -> &'static str {
        "NutritionOrder.Supplement"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(type_) = &self.type_ {
            type_.accept("type", visitor);
        }
        if let Some(product_name) = &self.product_name {
            visitor.primitive("productName", PrimitiveValue::Str(product_name));
        }
        accept_list("schedule", &self.schedule, visitor);
        if let Some(quantity) = &self.quantity {
            quantity.accept("quantity", visitor);
        }
        if let Some(instruction) = &self.instruction {
            visitor.primitive("instruction", PrimitiveValue::Str(instruction));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for NutritionOrderEnteralFormula {
    fn type_name(&self) -> &'static str {
        "NutritionOrder.EnteralFormula"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(base_formula_type) = &self.base_formula_type {
            base_formula_type.accept("baseFormulaType", visitor);
        }
        if let Some(base_formula_product_name) = &self.base_formula_product_name {
            visitor.primitive(
                "baseFormulaProductName",
                PrimitiveValue::Str(base_formula_product_name),
            );
        }
        if let Some(additive_type) = &self.additive_type {
            additive_type.accept("additiveType", visitor);
        }
        if let Some(additive_product_name) = &self.additive_product_name {
            visitor.primitive(
                "additiveProductName",
                PrimitiveValue::Str(additive_product_name),
            );
        }
        if let Some(caloric_density) = &self.caloric_density {
            caloric_density.accept("caloricDensity", visitor);
        }
        if let Some(route_of_administration) = &self.route_of_administration {
            route_of_administration.accept("routeofAdministration", visitor);
        }
        accept_list("administration", &self.administration, visitor);
        if let Some(max_volume_to_deliver) = &self.max_volume_to_deliver {
            max_volume_to_deliver.accept("maxVolumeToDeliver", visitor);
        }
        if let Some(administration_instruction) = &self.administration_instruction {
            visitor.primitive(
                "administrationInstruction",
                PrimitiveValue::Str(administration_instruction),
            );
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for EnteralFormulaAdministration {
    fn type_name(&self) -> &'static str {
        "NutritionOrder.EnteralFormula.Administration"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_backbone_base(&self.id, &self.extension, &self.modifier_extension, visitor);
        if let Some(schedule) = &self.schedule {
            schedule.accept("schedule", visitor);
        }
        if let Some(quantity) = &self.quantity {
            quantity.accept("quantity", visitor);
        }
        match &self.rate {
            Some(EnteralFormulaAdministrationRate::Quantity(q)) => q.accept("rate", visitor),
            Some(EnteralFormulaAdministrationRate::Ratio(r)) => r.accept("rate", visitor),
            None => {}
        }
        visitor.leave_element(name, self.type_name());
    }
}
