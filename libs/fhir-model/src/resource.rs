//! The polymorphic resource container.

use crate::primitives::Id;
use crate::resources::{ExampleScenario, NutritionOrder, SubstanceSourceMaterial};
use crate::visitor::{Visit, Visitor};
use serde::{Deserialize, Serialize};

/// Any resource this model supports, discriminated by the `resourceType`
/// JSON property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    ExampleScenario(ExampleScenario),
    NutritionOrder(NutritionOrder),
    SubstanceSourceMaterial(SubstanceSourceMaterial),
}

impl Resource {
    /// The resource type name as it appears in `resourceType`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::ExampleScenario(_) => "ExampleScenario",
            Resource::NutritionOrder(_) => "NutritionOrder",
            Resource::SubstanceSourceMaterial(_) => "SubstanceSourceMaterial",
        }
    }

    /// The logical id of the resource, when it has one.
    pub fn id(&self) -> Option<&Id> {
        match self {
            Resource::ExampleScenario(r) => r.id(),
            Resource::NutritionOrder(r) => r.id(),
            Resource::SubstanceSourceMaterial(r) => r.id(),
        }
    }
}

impl From<ExampleScenario> for Resource {
    fn from(resource: ExampleScenario) -> Self {
        Resource::ExampleScenario(resource)
    }
}

impl From<NutritionOrder> for Resource {
    fn from(resource: NutritionOrder) -> Self {
        Resource::NutritionOrder(resource)
    }
}

impl From<SubstanceSourceMaterial> for Resource {
    fn from(resource: SubstanceSourceMaterial) -> Self {
        Resource::SubstanceSourceMaterial(resource)
    }
}

impl Visit for Resource {
    fn type_name(&self) -> &'static str {
        Resource::type_name(self)
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        match self {
            Resource::ExampleScenario(r) => r.accept(name, visitor),
            Resource::NutritionOrder(r) => r.accept(name, visitor),
            Resource::SubstanceSourceMaterial(r) => r.accept(name, visitor),
        }
    }
}
