//! Resource definitions, one module per resource type. Backbone elements
//! live alongside the resource they belong to.

mod example_scenario;
mod nutrition_order;
mod substance_source_material;

pub use example_scenario::{
    ExampleScenario, ExampleScenarioActor, ExampleScenarioActorBuilder, ExampleScenarioBuilder,
    ExampleScenarioInstance, ExampleScenarioInstanceBuilder, ExampleScenarioProcess,
    ExampleScenarioProcessBuilder, InstanceContainedInstance, InstanceContainedInstanceBuilder,
    InstanceVersion, InstanceVersionBuilder, ProcessStep, ProcessStepBuilder, StepAlternative,
    StepAlternativeBuilder, StepOperation, StepOperationBuilder,
};
pub use nutrition_order::{
    EnteralFormulaAdministration, EnteralFormulaAdministrationBuilder,
    EnteralFormulaAdministrationRate, NutritionOrder, NutritionOrderBuilder,
    NutritionOrderEnteralFormula, NutritionOrderEnteralFormulaBuilder, NutritionOrderOralDiet,
    NutritionOrderOralDietBuilder, NutritionOrderSupplement, NutritionOrderSupplementBuilder,
    OralDietNutrient, OralDietNutrientBuilder, OralDietTexture, OralDietTextureBuilder,
};
pub use substance_source_material::{
    OrganismAuthor, OrganismAuthorBuilder, OrganismGeneral, OrganismGeneralBuilder,
    OrganismHybrid, OrganismHybridBuilder, SourceMaterialFractionDescription,
    SourceMaterialFractionDescriptionBuilder, SourceMaterialOrganism,
    SourceMaterialOrganismBuilder, SourceMaterialPartDescription,
    SourceMaterialPartDescriptionBuilder, SubstanceSourceMaterial,
    SubstanceSourceMaterialBuilder,
};
