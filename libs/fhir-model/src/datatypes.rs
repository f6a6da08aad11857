//! General-purpose FHIR complex datatypes.
//!
//! Every type here is immutable after construction: fields are private and
//! instances are created through the type's builder. Elements that the R4
//! definitions declare as `[x]` choices are closed enums; their serde form
//! uses the FHIR wire keys (`authorString`, `boundsPeriod`, ...) through a
//! mirror struct, so a payload carrying two variants of the same choice is
//! rejected at parse time.

use crate::codes::{
    ContactPointSystem, ContactPointUse, DayOfWeek, EventTiming, IdentifierUse, NarrativeStatus,
    QuantityComparator, UnitsOfTime,
};
use crate::error::{Error, Result};
use crate::primitives::{
    Canonical, Code, Date, DateTime, Decimal, Id, Instant, Markdown, PositiveInt, Time,
    UnsignedInt, Uri, Xhtml,
};
use crate::visitor::{accept_list, primitive_list, PrimitiveValue, Visit, Visitor};
use serde::{Deserialize, Serialize};

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    /// Identity of the terminology system
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<Uri>,
    /// Version of the system, if relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    /// Symbol in syntax defined by the system
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<Code>,
    /// Representation defined by the system
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<String>,
    /// If this coding was chosen directly by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    user_selected: Option<bool>,
}

impl Coding {
    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    pub fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
            user_selected: self.user_selected,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn user_selected(&self) -> Option<bool> {
        self.user_selected
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodingBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    system: Option<Uri>,
    version: Option<String>,
    code: Option<Code>,
    display: Option<String>,
    user_selected: Option<bool>,
}

impl CodingBuilder {
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

    pub fn system(mut self, value: Uri) -> Self {
        self.system = Some(value);
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn code(mut self, value: Code) -> Self {
        self.code = Some(value);
        self
    }

    pub fn display(mut self, value: impl Into<String>) -> Self {
        self.display = Some(value.into());
        self
    }

    pub fn user_selected(mut self, value: bool) -> Self {
        self.user_selected = Some(value);
        self
    }

    pub fn build(self) -> Result<Coding> {
        Ok(Coding {
            id: self.id,
            extension: self.extension,
            system: self.system,
            version: self.version,
            code: self.code,
            display: self.display,
            user_selected: self.user_selected,
        })
    }
}

/// A concept, potentially drawn from multiple code systems, plus plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    /// Codes defined by terminology systems
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    coding: Vec<Coding>,
    /// Plain text representation of the concept
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl CodeableConcept {
    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            coding: self.coding.clone(),
            text: self.text.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn coding(&self) -> &[Coding] {
        &self.coding
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeableConceptBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    coding: Vec<Coding>,
    text: Option<String>,
}

impl CodeableConceptBuilder {
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

    pub fn coding(mut self, value: Coding) -> Self {
        self.coding.push(value);
        self
    }

    pub fn set_coding(mut self, values: Vec<Coding>) -> Self {
        self.coding = values;
        self
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    pub fn build(self) -> Result<CodeableConcept> {
        Ok(CodeableConcept {
            id: self.id,
            extension: self.extension,
            coding: self.coding,
            text: self.text,
        })
    }
}

/// A time period defined by a start and end dateTime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<DateTime>,
}

impl Period {
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn start(&self) -> Option<&DateTime> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&DateTime> {
        self.end.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl PeriodBuilder {
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

    pub fn start(mut self, value: DateTime) -> Self {
        self.start = Some(value);
        self
    }

    pub fn end(mut self, value: DateTime) -> Self {
        self.end = Some(value);
        self
    }

    pub fn build(self) -> Result<Period> {
        Ok(Period {
            id: self.id,
            extension: self.extension,
            start: self.start,
            end: self.end,
        })
    }
}

/// A measured amount: value plus unit, optionally qualified by a comparator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    /// Numerical value (with implicit precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Decimal>,
    /// How to understand the value
    #[serde(skip_serializing_if = "Option::is_none")]
    comparator: Option<QuantityComparator>,
    /// Unit representation
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    /// System that defines the coded unit form
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<Uri>,
    /// Coded form of the unit
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<Code>,
}

impl Quantity {
    pub fn builder() -> QuantityBuilder {
        QuantityBuilder::default()
    }

    pub fn to_builder(&self) -> QuantityBuilder {
        QuantityBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value,
            comparator: self.comparator,
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn comparator(&self) -> Option<QuantityComparator> {
        self.comparator
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantityBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<Decimal>,
    comparator: Option<QuantityComparator>,
    unit: Option<String>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl QuantityBuilder {
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

    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn comparator(mut self, value: QuantityComparator) -> Self {
        self.comparator = Some(value);
        self
    }

    pub fn unit(mut self, value: impl Into<String>) -> Self {
        self.unit = Some(value.into());
        self
    }

    pub fn system(mut self, value: Uri) -> Self {
        self.system = Some(value);
        self
    }

    pub fn code(mut self, value: Code) -> Self {
        self.code = Some(value);
        self
    }

    pub fn build(self) -> Result<Quantity> {
        Ok(Quantity {
            id: self.id,
            extension: self.extension,
            value: self.value,
            comparator: self.comparator,
            unit: self.unit,
            system: self.system,
            code: self.code,
        })
    }
}

/// A fixed quantity: no comparator allowed. Used where the value must be
/// exact (dose amounts, delivery volumes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleQuantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<Code>,
}

impl SimpleQuantity {
    pub fn builder() -> SimpleQuantityBuilder {
        SimpleQuantityBuilder::default()
    }

    pub fn to_builder(&self) -> SimpleQuantityBuilder {
        SimpleQuantityBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value,
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimpleQuantityBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<Decimal>,
    unit: Option<String>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl SimpleQuantityBuilder {
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

    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn unit(mut self, value: impl Into<String>) -> Self {
        self.unit = Some(value.into());
        self
    }

    pub fn system(mut self, value: Uri) -> Self {
        self.system = Some(value);
        self
    }

    pub fn code(mut self, value: Code) -> Self {
        self.code = Some(value);
        self
    }

    pub fn build(self) -> Result<SimpleQuantity> {
        Ok(SimpleQuantity {
            id: self.id,
            extension: self.extension,
            value: self.value,
            unit: self.unit,
            system: self.system,
            code: self.code,
        })
    }
}

/// A length of time, with the same shape as [`Quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparator: Option<QuantityComparator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<Code>,
}

impl Duration {
    pub fn builder() -> DurationBuilder {
        DurationBuilder::default()
    }

    pub fn to_builder(&self) -> DurationBuilder {
        DurationBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value,
            comparator: self.comparator,
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn comparator(&self) -> Option<QuantityComparator> {
        self.comparator
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DurationBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<Decimal>,
    comparator: Option<QuantityComparator>,
    unit: Option<String>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl DurationBuilder {
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

    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn comparator(mut self, value: QuantityComparator) -> Self {
        self.comparator = Some(value);
        self
    }

    pub fn unit(mut self, value: impl Into<String>) -> Self {
        self.unit = Some(value.into());
        self
    }

    pub fn system(mut self, value: Uri) -> Self {
        self.system = Some(value);
        self
    }

    pub fn code(mut self, value: Code) -> Self {
        self.code = Some(value);
        self
    }

    pub fn build(self) -> Result<Duration> {
        Ok(Duration {
            id: self.id,
            extension: self.extension,
            value: self.value,
            comparator: self.comparator,
            unit: self.unit,
            system: self.system,
            code: self.code,
        })
    }
}

/// A set of ordered quantities defined by a low and high limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    low: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    high: Option<SimpleQuantity>,
}

impl Range {
    pub fn builder() -> RangeBuilder {
        RangeBuilder::default()
    }

    pub fn to_builder(&self) -> RangeBuilder {
        RangeBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            low: self.low.clone(),
            high: self.high.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn low(&self) -> Option<&SimpleQuantity> {
        self.low.as_ref()
    }

    pub fn high(&self) -> Option<&SimpleQuantity> {
        self.high.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RangeBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    low: Option<SimpleQuantity>,
    high: Option<SimpleQuantity>,
}

impl RangeBuilder {
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

    pub fn low(mut self, value: SimpleQuantity) -> Self {
        self.low = Some(value);
        self
    }

    pub fn high(mut self, value: SimpleQuantity) -> Self {
        self.high = Some(value);
        self
    }

    pub fn build(self) -> Result<Range> {
        Ok(Range {
            id: self.id,
            extension: self.extension,
            low: self.low,
            high: self.high,
        })
    }
}

/// A relationship between two quantities expressed as numerator/denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    numerator: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    denominator: Option<Quantity>,
}

impl Ratio {
    pub fn builder() -> RatioBuilder {
        RatioBuilder::default()
    }

    pub fn to_builder(&self) -> RatioBuilder {
        RatioBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn numerator(&self) -> Option<&Quantity> {
        self.numerator.as_ref()
    }

    pub fn denominator(&self) -> Option<&Quantity> {
        self.denominator.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RatioBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    numerator: Option<Quantity>,
    denominator: Option<Quantity>,
}

impl RatioBuilder {
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

    pub fn numerator(mut self, value: Quantity) -> Self {
        self.numerator = Some(value);
        self
    }

    pub fn denominator(mut self, value: Quantity) -> Self {
        self.denominator = Some(value);
        self
    }

    pub fn build(self) -> Result<Ratio> {
        Ok(Ratio {
            id: self.id,
            extension: self.extension,
            numerator: self.numerator,
            denominator: self.denominator,
        })
    }
}

/// A business identifier: a value unique within the scope of its system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    use_: Option<IdentifierUse>,
    /// Description of the identifier
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<CodeableConcept>,
    /// Namespace for the value
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<Uri>,
    /// The value, unique within the system
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    /// Time period when the identifier is/was valid
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<Period>,
    /// Organization that issued the identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    assigner: Option<Box<Reference>>,
}

impl Identifier {
    pub fn builder() -> IdentifierBuilder {
        IdentifierBuilder::default()
    }

    pub fn to_builder(&self) -> IdentifierBuilder {
        IdentifierBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            use_: self.use_,
            type_: self.type_.clone(),
            system: self.system.clone(),
            value: self.value.clone(),
            period: self.period.clone(),
            assigner: self.assigner.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn use_(&self) -> Option<IdentifierUse> {
        self.use_
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn assigner(&self) -> Option<&Reference> {
        self.assigner.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    use_: Option<IdentifierUse>,
    type_: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<String>,
    period: Option<Period>,
    assigner: Option<Box<Reference>>,
}

impl IdentifierBuilder {
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

    pub fn use_(mut self, value: IdentifierUse) -> Self {
        self.use_ = Some(value);
        self
    }

    pub fn type_(mut self, value: CodeableConcept) -> Self {
        self.type_ = Some(value);
        self
    }

    pub fn system(mut self, value: Uri) -> Self {
        self.system = Some(value);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn period(mut self, value: Period) -> Self {
        self.period = Some(value);
        self
    }

    pub fn assigner(mut self, value: Reference) -> Self {
        self.assigner = Some(Box::new(value));
        self
    }

    pub fn build(self) -> Result<Identifier> {
        Ok(Identifier {
            id: self.id,
            extension: self.extension,
            use_: self.use_,
            type_: self.type_,
            system: self.system,
            value: self.value,
            period: self.period,
            assigner: self.assigner,
        })
    }
}

/// A reference from one resource to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    /// Literal reference: relative, internal or absolute URL
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    /// Type the reference refers to, as a resource type name
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<Uri>,
    /// Logical reference, when a literal reference is not known
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<Box<Identifier>>,
    /// Text alternative for the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<String>,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    pub fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            reference: self.reference.clone(),
            type_: self.type_.clone(),
            identifier: self.identifier.clone(),
            display: self.display.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn type_(&self) -> Option<&Uri> {
        self.type_.as_ref()
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_deref()
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    reference: Option<String>,
    type_: Option<Uri>,
    identifier: Option<Box<Identifier>>,
    display: Option<String>,
}

impl ReferenceBuilder {
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

    pub fn reference(mut self, value: impl Into<String>) -> Self {
        self.reference = Some(value.into());
        self
    }

    pub fn type_(mut self, value: Uri) -> Self {
        self.type_ = Some(value);
        self
    }

    pub fn identifier(mut self, value: Identifier) -> Self {
        self.identifier = Some(Box::new(value));
        self
    }

    pub fn display(mut self, value: impl Into<String>) -> Self {
        self.display = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Reference> {
        Ok(Reference {
            id: self.id,
            extension: self.extension,
            reference: self.reference,
            type_: self.type_,
            identifier: self.identifier,
            display: self.display,
        })
    }
}

/// Additional content defined by an implementation.
///
/// The value, when present, is one of the types in [`ExtensionValue`]; the
/// wire form uses the `value{Type}` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ExtensionWire", into = "ExtensionWire")]
pub struct Extension {
    id: Option<String>,
    extension: Vec<Extension>,
    url: Uri,
    value: Option<ExtensionValue>,
}

/// The closed set of types an extension value can take in this model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtensionValue {
    Boolean(bool),
    Canonical(Canonical),
    Code(Code),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Id(Id),
    Identifier(Identifier),
    Instant(Instant),
    Integer(i32),
    Markdown(Markdown),
    Period(Period),
    PositiveInt(PositiveInt),
    Quantity(Quantity),
    Range(Range),
    Ratio(Ratio),
    Reference(Reference),
    String(String),
    Time(Time),
    UnsignedInt(UnsignedInt),
    Uri(Uri),
}

impl Extension {
    pub fn builder(url: Uri) -> ExtensionBuilder {
        ExtensionBuilder {
            id: None,
            extension: Vec::new(),
            url,
            value: None,
        }
    }

    pub fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            url: self.url.clone(),
            value: self.value.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    /// Source of the definition for the extension code.
    pub fn url(&self) -> &Uri {
        &self.url
    }

    pub fn value(&self) -> Option<&ExtensionValue> {
        self.value.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct ExtensionBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    url: Uri,
    value: Option<ExtensionValue>,
}

impl ExtensionBuilder {
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

    pub fn url(mut self, value: Uri) -> Self {
        self.url = value;
        self
    }

    pub fn value(mut self, value: ExtensionValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn build(self) -> Result<Extension> {
        Ok(Extension {
            id: self.id,
            extension: self.extension,
            url: self.url,
            value: self.value,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtensionWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_boolean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_canonical: Option<Canonical>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_code: Option<Code>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_codeable_concept: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_coding: Option<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_date_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_decimal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_instant: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_integer: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_markdown: Option<Markdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_positive_int: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_ratio: Option<Ratio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_reference: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_time: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_unsigned_int: Option<UnsignedInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_uri: Option<Uri>,
}

impl TryFrom<ExtensionWire> for Extension {
    type Error = Error;

    fn try_from(wire: ExtensionWire) -> Result<Self> {
        let mut values = Vec::new();
        if let Some(v) = wire.value_boolean {
            values.push(ExtensionValue::Boolean(v));
        }
        if let Some(v) = wire.value_canonical {
            values.push(ExtensionValue::Canonical(v));
        }
        if let Some(v) = wire.value_code {
            values.push(ExtensionValue::Code(v));
        }
        if let Some(v) = wire.value_codeable_concept {
            values.push(ExtensionValue::CodeableConcept(v));
        }
        if let Some(v) = wire.value_coding {
            values.push(ExtensionValue::Coding(v));
        }
        if let Some(v) = wire.value_date {
            values.push(ExtensionValue::Date(v));
        }
        if let Some(v) = wire.value_date_time {
            values.push(ExtensionValue::DateTime(v));
        }
        if let Some(v) = wire.value_decimal {
            values.push(ExtensionValue::Decimal(v));
        }
        if let Some(v) = wire.value_id {
            values.push(ExtensionValue::Id(v));
        }
        if let Some(v) = wire.value_identifier {
            values.push(ExtensionValue::Identifier(v));
        }
        if let Some(v) = wire.value_instant {
            values.push(ExtensionValue::Instant(v));
        }
        if let Some(v) = wire.value_integer {
            values.push(ExtensionValue::Integer(v));
        }
        if let Some(v) = wire.value_markdown {
            values.push(ExtensionValue::Markdown(v));
        }
        if let Some(v) = wire.value_period {
            values.push(ExtensionValue::Period(v));
        }
        if let Some(v) = wire.value_positive_int {
            values.push(ExtensionValue::PositiveInt(v));
        }
        if let Some(v) = wire.value_quantity {
            values.push(ExtensionValue::Quantity(v));
        }
        if let Some(v) = wire.value_range {
            values.push(ExtensionValue::Range(v));
        }
        if let Some(v) = wire.value_ratio {
            values.push(ExtensionValue::Ratio(v));
        }
        if let Some(v) = wire.value_reference {
            values.push(ExtensionValue::Reference(v));
        }
        if let Some(v) = wire.value_string {
            values.push(ExtensionValue::String(v));
        }
        if let Some(v) = wire.value_time {
            values.push(ExtensionValue::Time(v));
        }
        if let Some(v) = wire.value_unsigned_int {
            values.push(ExtensionValue::UnsignedInt(v));
        }
        if let Some(v) = wire.value_uri {
            values.push(ExtensionValue::Uri(v));
        }
        if values.len() > 1 {
            return Err(Error::invalid(
                "Extension.value[x]",
                "more than one value[x] element present",
            ));
        }
        Ok(Extension {
            id: wire.id,
            extension: wire.extension,
            url: wire.url.ok_or(Error::MissingField("Extension.url"))?,
            value: values.pop(),
        })
    }
}

impl From<Extension> for ExtensionWire {
    fn from(ext: Extension) -> Self {
        let mut wire = ExtensionWire {
            id: ext.id,
            extension: ext.extension,
            url: Some(ext.url),
            ..ExtensionWire::default()
        };
        match ext.value {
            Some(ExtensionValue::Boolean(v)) => wire.value_boolean = Some(v),
            Some(ExtensionValue::Canonical(v)) => wire.value_canonical = Some(v),
            Some(ExtensionValue::Code(v)) => wire.value_code = Some(v),
            Some(ExtensionValue::CodeableConcept(v)) => wire.value_codeable_concept = Some(v),
            Some(ExtensionValue::Coding(v)) => wire.value_coding = Some(v),
            Some(ExtensionValue::Date(v)) => wire.value_date = Some(v),
            Some(ExtensionValue::DateTime(v)) => wire.value_date_time = Some(v),
            Some(ExtensionValue::Decimal(v)) => wire.value_decimal = Some(v),
            Some(ExtensionValue::Id(v)) => wire.value_id = Some(v),
            Some(ExtensionValue::Identifier(v)) => wire.value_identifier = Some(v),
            Some(ExtensionValue::Instant(v)) => wire.value_instant = Some(v),
            Some(ExtensionValue::Integer(v)) => wire.value_integer = Some(v),
            Some(ExtensionValue::Markdown(v)) => wire.value_markdown = Some(v),
            Some(ExtensionValue::Period(v)) => wire.value_period = Some(v),
            Some(ExtensionValue::PositiveInt(v)) => wire.value_positive_int = Some(v),
            Some(ExtensionValue::Quantity(v)) => wire.value_quantity = Some(v),
            Some(ExtensionValue::Range(v)) => wire.value_range = Some(v),
            Some(ExtensionValue::Ratio(v)) => wire.value_ratio = Some(v),
            Some(ExtensionValue::Reference(v)) => wire.value_reference = Some(v),
            Some(ExtensionValue::String(v)) => wire.value_string = Some(v),
            Some(ExtensionValue::Time(v)) => wire.value_time = Some(v),
            Some(ExtensionValue::UnsignedInt(v)) => wire.value_unsigned_int = Some(v),
            Some(ExtensionValue::Uri(v)) => wire.value_uri = Some(v),
            None => {}
        }
        wire
    }
}

/// A text note with attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AnnotationWire", into = "AnnotationWire")]
pub struct Annotation {
    id: Option<String>,
    extension: Vec<Extension>,
    author: Option<AnnotationAuthor>,
    time: Option<DateTime>,
    text: Markdown,
}

/// `Annotation.author[x]`: Reference or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationAuthor {
    Reference(Reference),
    String(String),
}

impl Annotation {
    pub fn builder() -> AnnotationBuilder {
        AnnotationBuilder::default()
    }

    pub fn to_builder(&self) -> AnnotationBuilder {
        AnnotationBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            author: self.author.clone(),
            time: self.time.clone(),
            text: Some(self.text.clone()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn author(&self) -> Option<&AnnotationAuthor> {
        self.author.as_ref()
    }

    pub fn time(&self) -> Option<&DateTime> {
        self.time.as_ref()
    }

    pub fn text(&self) -> &Markdown {
        &self.text
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnnotationBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    author: Option<AnnotationAuthor>,
    time: Option<DateTime>,
    text: Option<Markdown>,
}

impl AnnotationBuilder {
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

    pub fn author(mut self, value: AnnotationAuthor) -> Self {
        self.author = Some(value);
        self
    }

    pub fn time(mut self, value: DateTime) -> Self {
        self.time = Some(value);
        self
    }

    pub fn text(mut self, value: Markdown) -> Self {
        self.text = Some(value);
        self
    }

    pub fn build(self) -> Result<Annotation> {
        Ok(Annotation {
            id: self.id,
            extension: self.extension,
            author: self.author,
            time: self.time,
            text: self.text.ok_or(Error::MissingField("Annotation.text"))?,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotationWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_reference: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Markdown>,
}

impl TryFrom<AnnotationWire> for Annotation {
    type Error = Error;

    fn try_from(wire: AnnotationWire) -> Result<Self> {
        let author = match (wire.author_reference, wire.author_string) {
            (Some(_), Some(_)) => {
                return Err(Error::invalid(
                    "Annotation.author[x]",
                    "more than one author[x] element present",
                ))
            }
            (Some(r), None) => Some(AnnotationAuthor::Reference(r)),
            (None, Some(s)) => Some(AnnotationAuthor::String(s)),
            (None, None) => None,
        };
        Ok(Annotation {
            id: wire.id,
            extension: wire.extension,
            author,
            time: wire.time,
            text: wire.text.ok_or(Error::MissingField("Annotation.text"))?,
        })
    }
}

impl From<Annotation> for AnnotationWire {
    fn from(annotation: Annotation) -> Self {
        let (author_reference, author_string) = match annotation.author {
            Some(AnnotationAuthor::Reference(r)) => (Some(r), None),
            Some(AnnotationAuthor::String(s)) => (None, Some(s)),
            None => (None, None),
        };
        AnnotationWire {
            id: annotation.id,
            extension: annotation.extension,
            author_reference,
            author_string,
            time: annotation.time,
            text: Some(annotation.text),
        }
    }
}

/// Human-readable summary of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    status: NarrativeStatus,
    div: Xhtml,
}

impl Narrative {
    pub fn builder() -> NarrativeBuilder {
        NarrativeBuilder::default()
    }

    pub fn to_builder(&self) -> NarrativeBuilder {
        NarrativeBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            status: Some(self.status),
            div: Some(self.div.clone()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn status(&self) -> NarrativeStatus {
        self.status
    }

    pub fn div(&self) -> &Xhtml {
        &self.div
    }
}

#[derive(Debug, Clone, Default)]
pub struct NarrativeBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    status: Option<NarrativeStatus>,
    div: Option<Xhtml>,
}

impl NarrativeBuilder {
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

    pub fn status(mut self, value: NarrativeStatus) -> Self {
        self.status = Some(value);
        self
    }

    pub fn div(mut self, value: Xhtml) -> Self {
        self.div = Some(value);
        self
    }

    pub fn build(self) -> Result<Narrative> {
        Ok(Narrative {
            id: self.id,
            extension: self.extension,
            status: self
                .status
                .ok_or(Error::MissingField("Narrative.status"))?,
            div: self.div.ok_or(Error::MissingField("Narrative.div"))?,
        })
    }
}

/// Metadata maintained by the infrastructure about a resource instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<Uri>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    profile: Vec<Canonical>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    security: Vec<Coding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tag: Vec<Coding>,
}

impl Meta {
    pub fn builder() -> MetaBuilder {
        MetaBuilder::default()
    }

    pub fn to_builder(&self) -> MetaBuilder {
        MetaBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            source: self.source.clone(),
            profile: self.profile.clone(),
            security: self.security.clone(),
            tag: self.tag.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn version_id(&self) -> Option<&Id> {
        self.version_id.as_ref()
    }

    pub fn last_updated(&self) -> Option<&Instant> {
        self.last_updated.as_ref()
    }

    pub fn source(&self) -> Option<&Uri> {
        self.source.as_ref()
    }

    pub fn profile(&self) -> &[Canonical] {
        &self.profile
    }

    pub fn security(&self) -> &[Coding] {
        &self.security
    }

    pub fn tag(&self) -> &[Coding] {
        &self.tag
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetaBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    version_id: Option<Id>,
    last_updated: Option<Instant>,
    source: Option<Uri>,
    profile: Vec<Canonical>,
    security: Vec<Coding>,
    tag: Vec<Coding>,
}

impl MetaBuilder {
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

    pub fn version_id(mut self, value: Id) -> Self {
        self.version_id = Some(value);
        self
    }

    pub fn last_updated(mut self, value: Instant) -> Self {
        self.last_updated = Some(value);
        self
    }

    pub fn source(mut self, value: Uri) -> Self {
        self.source = Some(value);
        self
    }

    pub fn profile(mut self, value: Canonical) -> Self {
        self.profile.push(value);
        self
    }

    pub fn set_profile(mut self, values: Vec<Canonical>) -> Self {
        self.profile = values;
        self
    }

    pub fn security(mut self, value: Coding) -> Self {
        self.security.push(value);
        self
    }

    pub fn set_security(mut self, values: Vec<Coding>) -> Self {
        self.security = values;
        self
    }

    pub fn tag(mut self, value: Coding) -> Self {
        self.tag.push(value);
        self
    }

    pub fn set_tag(mut self, values: Vec<Coding>) -> Self {
        self.tag = values;
        self
    }

    pub fn build(self) -> Result<Meta> {
        Ok(Meta {
            id: self.id,
            extension: self.extension,
            version_id: self.version_id,
            last_updated: self.last_updated,
            source: self.source,
            profile: self.profile,
            security: self.security,
            tag: self.tag,
        })
    }
}

/// Details for technology-mediated contact (phone, email, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<ContactPointSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    use_: Option<ContactPointUse>,
    /// Preference order, 1 = highest
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<Period>,
}

impl ContactPoint {
    pub fn builder() -> ContactPointBuilder {
        ContactPointBuilder::default()
    }

    pub fn to_builder(&self) -> ContactPointBuilder {
        ContactPointBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            system: self.system,
            value: self.value.clone(),
            use_: self.use_,
            rank: self.rank,
            period: self.period.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn system(&self) -> Option<ContactPointSystem> {
        self.system
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn use_(&self) -> Option<ContactPointUse> {
        self.use_
    }

    pub fn rank(&self) -> Option<PositiveInt> {
        self.rank
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPointBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    system: Option<ContactPointSystem>,
    value: Option<String>,
    use_: Option<ContactPointUse>,
    rank: Option<PositiveInt>,
    period: Option<Period>,
}

impl ContactPointBuilder {
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

    pub fn system(mut self, value: ContactPointSystem) -> Self {
        self.system = Some(value);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn use_(mut self, value: ContactPointUse) -> Self {
        self.use_ = Some(value);
        self
    }

    pub fn rank(mut self, value: PositiveInt) -> Self {
        self.rank = Some(value);
        self
    }

    pub fn period(mut self, value: Period) -> Self {
        self.period = Some(value);
        self
    }

    pub fn build(self) -> Result<ContactPoint> {
        Ok(ContactPoint {
            id: self.id,
            extension: self.extension,
            system: self.system,
            value: self.value,
            use_: self.use_,
            rank: self.rank,
            period: self.period,
        })
    }
}

/// Contact information for a person or organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    telecom: Vec<ContactPoint>,
}

impl ContactDetail {
    pub fn builder() -> ContactDetailBuilder {
        ContactDetailBuilder::default()
    }

    pub fn to_builder(&self) -> ContactDetailBuilder {
        ContactDetailBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            name: self.name.clone(),
            telecom: self.telecom.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn telecom(&self) -> &[ContactPoint] {
        &self.telecom
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactDetailBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    name: Option<String>,
    telecom: Vec<ContactPoint>,
}

impl ContactDetailBuilder {
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

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn telecom(mut self, value: ContactPoint) -> Self {
        self.telecom.push(value);
        self
    }

    pub fn set_telecom(mut self, values: Vec<ContactPoint>) -> Self {
        self.telecom = values;
        self
    }

    pub fn build(self) -> Result<ContactDetail> {
        Ok(ContactDetail {
            id: self.id,
            extension: self.extension,
            name: self.name,
            telecom: self.telecom,
        })
    }
}

/// Describes the context a conformance artifact is intended for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UsageContextWire", into = "UsageContextWire")]
pub struct UsageContext {
    id: Option<String>,
    extension: Vec<Extension>,
    code: Coding,
    value: UsageContextValue,
}

/// `UsageContext.value[x]`: the closed set of value representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsageContextValue {
    CodeableConcept(CodeableConcept),
    Quantity(Quantity),
    Range(Range),
    Reference(Reference),
}

impl UsageContext {
    pub fn builder() -> UsageContextBuilder {
        UsageContextBuilder::default()
    }

    pub fn to_builder(&self) -> UsageContextBuilder {
        UsageContextBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            code: Some(self.code.clone()),
            value: Some(self.value.clone()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    /// Type of context being specified.
    pub fn code(&self) -> &Coding {
        &self.code
    }

    /// Value that defines the context.
    pub fn value(&self) -> &UsageContextValue {
        &self.value
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsageContextBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    code: Option<Coding>,
    value: Option<UsageContextValue>,
}

impl UsageContextBuilder {
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

    pub fn code(mut self, value: Coding) -> Self {
        self.code = Some(value);
        self
    }

    pub fn value(mut self, value: UsageContextValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn build(self) -> Result<UsageContext> {
        Ok(UsageContext {
            id: self.id,
            extension: self.extension,
            code: self.code.ok_or(Error::MissingField("UsageContext.code"))?,
            value: self
                .value
                .ok_or(Error::MissingField("UsageContext.value[x]"))?,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageContextWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_codeable_concept: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_reference: Option<Reference>,
}

impl TryFrom<UsageContextWire> for UsageContext {
    type Error = Error;

    fn try_from(wire: UsageContextWire) -> Result<Self> {
        let mut values = Vec::new();
        if let Some(v) = wire.value_codeable_concept {
            values.push(UsageContextValue::CodeableConcept(v));
        }
        if let Some(v) = wire.value_quantity {
            values.push(UsageContextValue::Quantity(v));
        }
        if let Some(v) = wire.value_range {
            values.push(UsageContextValue::Range(v));
        }
        if let Some(v) = wire.value_reference {
            values.push(UsageContextValue::Reference(v));
        }
        if values.len() > 1 {
            return Err(Error::invalid(
                "UsageContext.value[x]",
                "more than one value[x] element present",
            ));
        }
        Ok(UsageContext {
            id: wire.id,
            extension: wire.extension,
            code: wire.code.ok_or(Error::MissingField("UsageContext.code"))?,
            value: values
                .pop()
                .ok_or(Error::MissingField("UsageContext.value[x]"))?,
        })
    }
}

impl From<UsageContext> for UsageContextWire {
    fn from(context: UsageContext) -> Self {
        let mut wire = UsageContextWire {
            id: context.id,
            extension: context.extension,
            code: Some(context.code),
            ..UsageContextWire::default()
        };
        match context.value {
            UsageContextValue::CodeableConcept(v) => wire.value_codeable_concept = Some(v),
            UsageContextValue::Quantity(v) => wire.value_quantity = Some(v),
            UsageContextValue::Range(v) => wire.value_range = Some(v),
            UsageContextValue::Reference(v) => wire.value_reference = Some(v),
        }
        wire
    }
}

/// Specifies an event that may occur multiple times: a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    /// When the event occurs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    event: Vec<DateTime>,
    /// When the event is to occur
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat: Option<TimingRepeat>,
    /// A named timing pattern (BID, QD, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<CodeableConcept>,
}

impl Timing {
    pub fn builder() -> TimingBuilder {
        TimingBuilder::default()
    }

    pub fn to_builder(&self) -> TimingBuilder {
        TimingBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            event: self.event.clone(),
            repeat: self.repeat.clone(),
            code: self.code.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn event(&self) -> &[DateTime] {
        &self.event
    }

    pub fn repeat(&self) -> Option<&TimingRepeat> {
        self.repeat.as_ref()
    }

    pub fn code(&self) -> Option<&CodeableConcept> {
        self.code.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimingBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    event: Vec<DateTime>,
    repeat: Option<TimingRepeat>,
    code: Option<CodeableConcept>,
}

impl TimingBuilder {
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

    pub fn event(mut self, value: DateTime) -> Self {
        self.event.push(value);
        self
    }

    pub fn set_event(mut self, values: Vec<DateTime>) -> Self {
        self.event = values;
        self
    }

    pub fn repeat(mut self, value: TimingRepeat) -> Self {
        self.repeat = Some(value);
        self
    }

    pub fn code(mut self, value: CodeableConcept) -> Self {
        self.code = Some(value);
        self
    }

    pub fn build(self) -> Result<Timing> {
        Ok(Timing {
            id: self.id,
            extension: self.extension,
            event: self.event,
            repeat: self.repeat,
            code: self.code,
        })
    }
}

/// The repeating part of a [`Timing`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimingRepeatWire", into = "TimingRepeatWire")]
pub struct TimingRepeat {
    id: Option<String>,
    extension: Vec<Extension>,
    bounds: Option<TimingRepeatBounds>,
    count: Option<PositiveInt>,
    count_max: Option<PositiveInt>,
    duration: Option<Decimal>,
    duration_max: Option<Decimal>,
    duration_unit: Option<UnitsOfTime>,
    frequency: Option<PositiveInt>,
    frequency_max: Option<PositiveInt>,
    period: Option<Decimal>,
    period_max: Option<Decimal>,
    period_unit: Option<UnitsOfTime>,
    day_of_week: Vec<DayOfWeek>,
    time_of_day: Vec<Time>,
    when: Vec<EventTiming>,
    offset: Option<UnsignedInt>,
}

/// `Timing.repeat.bounds[x]`: Duration, Range or Period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimingRepeatBounds {
    Duration(Duration),
    Range(Range),
    Period(Period),
}

impl TimingRepeat {
    pub fn builder() -> TimingRepeatBuilder {
        TimingRepeatBuilder::default()
    }

    pub fn to_builder(&self) -> TimingRepeatBuilder {
        TimingRepeatBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            bounds: self.bounds.clone(),
            count: self.count,
            count_max: self.count_max,
            duration: self.duration,
            duration_max: self.duration_max,
            duration_unit: self.duration_unit,
            frequency: self.frequency,
            frequency_max: self.frequency_max,
            period: self.period,
            period_max: self.period_max,
            period_unit: self.period_unit,
            day_of_week: self.day_of_week.clone(),
            time_of_day: self.time_of_day.clone(),
            when: self.when.clone(),
            offset: self.offset,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn bounds(&self) -> Option<&TimingRepeatBounds> {
        self.bounds.as_ref()
    }

    pub fn count(&self) -> Option<PositiveInt> {
        self.count
    }

    pub fn count_max(&self) -> Option<PositiveInt> {
        self.count_max
    }

    pub fn duration(&self) -> Option<Decimal> {
        self.duration
    }

    pub fn duration_max(&self) -> Option<Decimal> {
        self.duration_max
    }

    pub fn duration_unit(&self) -> Option<UnitsOfTime> {
        self.duration_unit
    }

    pub fn frequency(&self) -> Option<PositiveInt> {
        self.frequency
    }

    pub fn frequency_max(&self) -> Option<PositiveInt> {
        self.frequency_max
    }

    pub fn period(&self) -> Option<Decimal> {
        self.period
    }

    pub fn period_max(&self) -> Option<Decimal> {
        self.period_max
    }

    pub fn period_unit(&self) -> Option<UnitsOfTime> {
        self.period_unit
    }

    pub fn day_of_week(&self) -> &[DayOfWeek] {
        &self.day_of_week
    }

    pub fn time_of_day(&self) -> &[Time] {
        &self.time_of_day
    }

    pub fn when(&self) -> &[EventTiming] {
        &self.when
    }

    pub fn offset(&self) -> Option<UnsignedInt> {
        self.offset
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimingRepeatBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    bounds: Option<TimingRepeatBounds>,
    count: Option<PositiveInt>,
    count_max: Option<PositiveInt>,
    duration: Option<Decimal>,
    duration_max: Option<Decimal>,
    duration_unit: Option<UnitsOfTime>,
    frequency: Option<PositiveInt>,
    frequency_max: Option<PositiveInt>,
    period: Option<Decimal>,
    period_max: Option<Decimal>,
    period_unit: Option<UnitsOfTime>,
    day_of_week: Vec<DayOfWeek>,
    time_of_day: Vec<Time>,
    when: Vec<EventTiming>,
    offset: Option<UnsignedInt>,
}

impl TimingRepeatBuilder {
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

    pub fn bounds(mut self, value: TimingRepeatBounds) -> Self {
        self.bounds = Some(value);
        self
    }

    pub fn count(mut self, value: PositiveInt) -> Self {
        self.count = Some(value);
        self
    }

    pub fn count_max(mut self, value: PositiveInt) -> Self {
        self.count_max = Some(value);
        self
    }

    pub fn duration(mut self, value: Decimal) -> Self {
        self.duration = Some(value);
        self
    }

    pub fn duration_max(mut self, value: Decimal) -> Self {
        self.duration_max = Some(value);
        self
    }

    pub fn duration_unit(mut self, value: UnitsOfTime) -> Self {
        self.duration_unit = Some(value);
        self
    }

    pub fn frequency(mut self, value: PositiveInt) -> Self {
        self.frequency = Some(value);
        self
    }

    pub fn frequency_max(mut self, value: PositiveInt) -> Self {
        self.frequency_max = Some(value);
        self
    }

    pub fn period(mut self, value: Decimal) -> Self {
        self.period = Some(value);
        self
    }

    pub fn period_max(mut self, value: Decimal) -> Self {
        self.period_max = Some(value);
        self
    }

    pub fn period_unit(mut self, value: UnitsOfTime) -> Self {
        self.period_unit = Some(value);
        self
    }

    pub fn day_of_week(mut self, value: DayOfWeek) -> Self {
        self.day_of_week.push(value);
        self
    }

    pub fn set_day_of_week(mut self, values: Vec<DayOfWeek>) -> Self {
        self.day_of_week = values;
        self
    }

    pub fn time_of_day(mut self, value: Time) -> Self {
        self.time_of_day.push(value);
        self
    }

    pub fn set_time_of_day(mut self, values: Vec<Time>) -> Self {
        self.time_of_day = values;
        self
    }

    pub fn when(mut self, value: EventTiming) -> Self {
        self.when.push(value);
        self
    }

    pub fn set_when(mut self, values: Vec<EventTiming>) -> Self {
        self.when = values;
        self
    }

    pub fn offset(mut self, value: UnsignedInt) -> Self {
        self.offset = Some(value);
        self
    }

    pub fn build(self) -> Result<TimingRepeat> {
        Ok(TimingRepeat {
            id: self.id,
            extension: self.extension,
            bounds: self.bounds,
            count: self.count,
            count_max: self.count_max,
            duration: self.duration,
            duration_max: self.duration_max,
            duration_unit: self.duration_unit,
            frequency: self.frequency,
            frequency_max: self.frequency_max,
            period: self.period,
            period_max: self.period_max,
            period_unit: self.period_unit,
            day_of_week: self.day_of_week,
            time_of_day: self.time_of_day,
            when: self.when,
            offset: self.offset,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimingRepeatWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds_duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds_range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count_max: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_unit: Option<UnitsOfTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_max: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period_max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period_unit: Option<UnitsOfTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    day_of_week: Vec<DayOfWeek>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    time_of_day: Vec<Time>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    when: Vec<EventTiming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<UnsignedInt>,
}

impl TryFrom<TimingRepeatWire> for TimingRepeat {
    type Error = Error;

    fn try_from(wire: TimingRepeatWire) -> Result<Self> {
        let mut bounds = Vec::new();
        if let Some(v) = wire.bounds_duration {
            bounds.push(TimingRepeatBounds::Duration(v));
        }
        if let Some(v) = wire.bounds_range {
            bounds.push(TimingRepeatBounds::Range(v));
        }
        if let Some(v) = wire.bounds_period {
            bounds.push(TimingRepeatBounds::Period(v));
        }
        if bounds.len() > 1 {
            return Err(Error::invalid(
                "Timing.repeat.bounds[x]",
                "more than one bounds[x] element present",
            ));
        }
        Ok(TimingRepeat {
            id: wire.id,
            extension: wire.extension,
            bounds: bounds.pop(),
            count: wire.count,
            count_max: wire.count_max,
            duration: wire.duration,
            duration_max: wire.duration_max,
            duration_unit: wire.duration_unit,
            frequency: wire.frequency,
            frequency_max: wire.frequency_max,
            period: wire.period,
            period_max: wire.period_max,
            period_unit: wire.period_unit,
            day_of_week: wire.day_of_week,
            time_of_day: wire.time_of_day,
            when: wire.when,
            offset: wire.offset,
        })
    }
}

impl From<TimingRepeat> for TimingRepeatWire {
    fn from(repeat: TimingRepeat) -> Self {
        let mut wire = TimingRepeatWire {
            id: repeat.id,
            extension: repeat.extension,
            count: repeat.count,
            count_max: repeat.count_max,
            duration: repeat.duration,
            duration_max: repeat.duration_max,
            duration_unit: repeat.duration_unit,
            frequency: repeat.frequency,
            frequency_max: repeat.frequency_max,
            period: repeat.period,
            period_max: repeat.period_max,
            period_unit: repeat.period_unit,
            day_of_week: repeat.day_of_week,
            time_of_day: repeat.time_of_day,
            when: repeat.when,
            offset: repeat.offset,
            ..TimingRepeatWire::default()
        };
        match repeat.bounds {
            Some(TimingRepeatBounds::Duration(v)) => wire.bounds_duration = Some(v),
            Some(TimingRepeatBounds::Range(v)) => wire.bounds_range = Some(v),
            Some(TimingRepeatBounds::Period(v)) => wire.bounds_period = Some(v),
            None => {}
        }
        wire
    }
}

// --- visitor dispatch ------------------------------------------------------

fn visit_id_extension(id: &Option<String>, extension: &[Extension], visitor: &mut dyn Visitor) {
    if let Some(id) = id {
        visitor.primitive("id", PrimitiveValue::Str(id));
    }
    accept_list("extension", extension, visitor);
}

impl Visit for Coding {
    fn type_name(&self) -> &'static str {
        "Coding"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(system) = &self.system {
            visitor.primitive("system", PrimitiveValue::Str(system.as_str()));
        }
        if let Some(version) = &self.version {
            visitor.primitive("version", PrimitiveValue::Str(version));
        }
        if let Some(code) = &self.code {
            visitor.primitive("code", PrimitiveValue::Str(code.as_str()));
        }
        if let Some(display) = &self.display {
            visitor.primitive("display", PrimitiveValue::Str(display));
        }
        if let Some(user_selected) = self.user_selected {
            visitor.primitive("userSelected", PrimitiveValue::Bool(user_selected));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for CodeableConcept {
    fn type_name(&self) -> &'static str {
        "CodeableConcept"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        accept_list("coding", &self.coding, visitor);
        if let Some(text) = &self.text {
            visitor.primitive("text", PrimitiveValue::Str(text));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Period {
    fn type_name(&self) -> &'static str {
        "Period"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(start) = &self.start {
            visitor.primitive("start", PrimitiveValue::Str(start.as_str()));
        }
        if let Some(end) = &self.end {
            visitor.primitive("end", PrimitiveValue::Str(end.as_str()));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Quantity {
    fn type_name(&self) -> &'static str {
        "Quantity"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(value) = &self.value {
            visitor.primitive("value", PrimitiveValue::Decimal(value));
        }
        if let Some(comparator) = self.comparator {
            visitor.primitive("comparator", PrimitiveValue::Str(comparator.as_str()));
        }
        if let Some(unit) = &self.unit {
            visitor.primitive("unit", PrimitiveValue::Str(unit));
        }
        if let Some(system) = &self.system {
            visitor.primitive("system", PrimitiveValue::Str(system.as_str()));
        }
        if let Some(code) = &self.code {
            visitor.primitive("code", PrimitiveValue::Str(code.as_str()));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for SimpleQuantity {
    fn type_name(&self) -> &'static str {
        "SimpleQuantity"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(value) = &self.value {
            visitor.primitive("value", PrimitiveValue::Decimal(value));
        }
        if let Some(unit) = &self.unit {
            visitor.primitive("unit", PrimitiveValue::Str(unit));
        }
        if let Some(system) = &self.system {
            visitor.primitive("system", PrimitiveValue::Str(system.as_str()));
        }
        if let Some(code) = &self.code {
            visitor.primitive("code", PrimitiveValue::Str(code.as_str()));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Duration {
    fn type_name(&self) -> &'static str {
        "Duration"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(value) = &self.value {
            visitor.primitive("value", PrimitiveValue::Decimal(value));
        }
        if let Some(comparator) = self.comparator {
            visitor.primitive("comparator", PrimitiveValue::Str(comparator.as_str()));
        }
        if let Some(unit) = &self.unit {
            visitor.primitive("unit", PrimitiveValue::Str(unit));
        }
        if let Some(system) = &self.system {
            visitor.primitive("system", PrimitiveValue::Str(system.as_str()));
        }
        if let Some(code) = &self.code {
            visitor.primitive("code", PrimitiveValue::Str(code.as_str()));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Range {
    fn type_name(&self) -> &'static str {
        "Range"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(low) = &self.low {
            low.accept("low", visitor);
        }
        if let Some(high) = &self.high {
            high.accept("high", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Ratio {
    fn type_name(&self) -> &'static str {
        "Ratio"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(numerator) = &self.numerator {
            numerator.accept("numerator", visitor);
        }
        if let Some(denominator) = &self.denominator {
            denominator.accept("denominator", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Identifier {
    fn type_name(&self) -> &'static str {
        "Identifier"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(use_) = self.use_ {
            visitor.primitive("use", PrimitiveValue::Str(use_.as_str()));
        }
        if let Some(type_) = &self.type_ {
            type_.accept("type", visitor);
        }
        if let Some(system) = &self.system {
            visitor.primitive("system", PrimitiveValue::Str(system.as_str()));
        }
        if let Some(value) = &self.value {
            visitor.primitive("value", PrimitiveValue::Str(value));
        }
        if let Some(period) = &self.period {
            period.accept("period", visitor);
        }
        if let Some(assigner) = &self.assigner {
            assigner.accept("assigner", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Reference {
    fn type_name(&self) -> &'static str {
        "Reference"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(reference) = &self.reference {
            visitor.primitive("reference", PrimitiveValue::Str(reference));
        }
        if let Some(type_) = &self.type_ {
            visitor.primitive("type", PrimitiveValue::Str(type_.as_str()));
        }
        if let Some(identifier) = &self.identifier {
            identifier.accept("identifier", visitor);
        }
        if let Some(display) = &self.display {
            visitor.primitive("display", PrimitiveValue::Str(display));
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Extension {
    fn type_name(&self) -> &'static str {
        "Extension"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        visitor.primitive("url", PrimitiveValue::Str(self.url.as_str()));
        if let Some(value) = &self.value {
            match value {
                ExtensionValue::Boolean(v) => visitor.primitive("value", PrimitiveValue::Bool(*v)),
                ExtensionValue::Canonical(v) => {
                    visitor.primitive("value", PrimitiveValue::Str(v.as_str()))
                }
                ExtensionValue::Code(v) => {
                    visitor.primitive("value", PrimitiveValue::Str(v.as_str()))
                }
                ExtensionValue::CodeableConcept(v) => v.accept("value", visitor),
                ExtensionValue::Coding(v) => v.accept("value", visitor),
                ExtensionValue::Date(v) => {
                    visitor.primitive("value", PrimitiveValue::Str(v.as_str()))
                }
                ExtensionValue::DateTime(v) => {
                    visitor.primitive("value", PrimitiveValue::Str(v.as_str()))
                }
                ExtensionValue::Decimal(v) => {
                    visitor.primitive("value", PrimitiveValue::Decimal(v))
                }
                ExtensionValue::Id(v) => visitor.primitive("value", PrimitiveValue::Str(v.as_str())),
                ExtensionValue::Identifier(v) => v.accept("value", visitor),
                ExtensionValue::Instant(v) => visitor.primitive("value", PrimitiveValue::Instant(v)),
                ExtensionValue::Integer(v) => visitor.primitive("value", PrimitiveValue::Int(*v)),
                ExtensionValue::Markdown(v) => {
                    visitor.primitive("value", PrimitiveValue::Str(v.as_str()))
                }
                ExtensionValue::Period(v) => v.accept("value", visitor),
                ExtensionValue::PositiveInt(v) => {
                    visitor.primitive("value", PrimitiveValue::UInt(v.get()))
                }
                ExtensionValue::Quantity(v) => v.accept("value", visitor),
                ExtensionValue::Range(v) => v.accept("value", visitor),
                ExtensionValue::Ratio(v) => v.accept("value", visitor),
                ExtensionValue::Reference(v) => v.accept("value", visitor),
                ExtensionValue::String(v) => visitor.primitive("value", PrimitiveValue::Str(v)),
                ExtensionValue::Time(v) => {
                    visitor.primitive("value", PrimitiveValue::Str(v.as_str()))
                }
                ExtensionValue::UnsignedInt(v) => {
                    visitor.primitive("value", PrimitiveValue::UInt(v.get()))
                }
                ExtensionValue::Uri(v) => {
                    visitor.primitive("value", PrimitiveValue::Str(v.as_str()))
                }
            }
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Annotation {
    fn type_name(&self) -> &'static str {
        "Annotation"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        match &self.author {
            Some(AnnotationAuthor::Reference(r)) => r.accept("author", visitor),
            Some(AnnotationAuthor::String(s)) => {
                visitor.primitive("author", PrimitiveValue::Str(s))
            }
            None => {}
        }
        if let Some(time) = &self.time {
            visitor.primitive("time", PrimitiveValue::Str(time.as_str()));
        }
        visitor.primitive("text", PrimitiveValue::Str(self.text.as_str()));
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Narrative {
    fn type_name(&self) -> &'static str {
        "Narrative"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        visitor.primitive("status", PrimitiveValue::Str(self.status.as_str()));
        visitor.primitive("div", PrimitiveValue::Str(self.div.as_str()));
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Meta {
    fn type_name(&self) -> &'static str {
        "Meta"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(version_id) = &self.version_id {
            visitor.primitive("versionId", PrimitiveValue::Str(version_id.as_str()));
        }
        if let Some(last_updated) = &self.last_updated {
            visitor.primitive("lastUpdated", PrimitiveValue::Instant(last_updated));
        }
        if let Some(source) = &self.source {
            visitor.primitive("source", PrimitiveValue::Str(source.as_str()));
        }
        primitive_list("profile", &self.profile, visitor, |c| {
            PrimitiveValue::Str(c.as_str())
        });
        accept_list("security", &self.security, visitor);
        accept_list("tag", &self.tag, visitor);
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for ContactPoint {
    fn type_name(&self) -> &'static str {
        "ContactPoint"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(system) = self.system {
            visitor.primitive("system", PrimitiveValue::Str(system.as_str()));
        }
        if let Some(value) = &self.value {
            visitor.primitive("value", PrimitiveValue::Str(value));
        }
        if let Some(use_) = self.use_ {
            visitor.primitive("use", PrimitiveValue::Str(use_.as_str()));
        }
        if let Some(rank) = self.rank {
            visitor.primitive("rank", PrimitiveValue::UInt(rank.get()));
        }
        if let Some(period) = &self.period {
            period.accept("period", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for ContactDetail {
    fn type_name(&self) -> &'static str {
        "ContactDetail"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        if let Some(name_field) = &self.name {
            visitor.primitive("name", PrimitiveValue::Str(name_field));
        }
        accept_list("telecom", &self.telecom, visitor);
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for UsageContext {
    fn type_name(&self) -> &'static str {
        "UsageContext"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        self.code.accept("code", visitor);
        match &self.value {
            UsageContextValue::CodeableConcept(v) => v.accept("value", visitor),
            UsageContextValue::Quantity(v) => v.accept("value", visitor),
            UsageContextValue::Range(v) => v.accept("value", visitor),
            UsageContextValue::Reference(v) => v.accept("value", visitor),
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for Timing {
    fn type_name(&self) -> &'static str {
        "Timing"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        primitive_list("event", &self.event, visitor, |e| {
            PrimitiveValue::Str(e.as_str())
        });
        if let Some(repeat) = &self.repeat {
            repeat.accept("repeat", visitor);
        }
        if let Some(code) = &self.code {
            code.accept("code", visitor);
        }
        visitor.leave_element(name, self.type_name());
    }
}

impl Visit for TimingRepeat {
    fn type_name(&self) -> &'static str {
        "Timing.Repeat"
    }

    fn accept(&self, name: &str, visitor: &mut dyn Visitor) {
        if !visitor.enter_element(name, self.type_name()) {
            return;
        }
        visit_id_extension(&self.id, &self.extension, visitor);
        match &self.bounds {
            Some(TimingRepeatBounds::Duration(v)) => v.accept("bounds", visitor),
            Some(TimingRepeatBounds::Range(v)) => v.accept("bounds", visitor),
            Some(TimingRepeatBounds::Period(v)) => v.accept("bounds", visitor),
            None => {}
        }
        if let Some(count) = self.count {
            visitor.primitive("count", PrimitiveValue::UInt(count.get()));
        }
        if let Some(count_max) = self.count_max {
            visitor.primitive("countMax", PrimitiveValue::UInt(count_max.get()));
        }
        if let Some(duration) = &self.duration {
            visitor.primitive("duration", PrimitiveValue::Decimal(duration));
        }
        if let Some(duration_max) = &self.duration_max {
            visitor.primitive("durationMax", PrimitiveValue::Decimal(duration_max));
        }
        if let Some(duration_unit) = self.duration_unit {
            visitor.primitive("durationUnit", PrimitiveValue::Str(duration_unit.as_str()));
        }
        if let Some(frequency) = self.frequency {
            visitor.primitive("frequency", PrimitiveValue::UInt(frequency.get()));
        }
        if let Some(frequency_max) = self.frequency_max {
            visitor.primitive("frequencyMax", PrimitiveValue::UInt(frequency_max.get()));
        }
        if let Some(period) = &self.period {
            visitor.primitive("period", PrimitiveValue::Decimal(period));
        }
        if let Some(period_max) = &self.period_max {
            visitor.primitive("periodMax", PrimitiveValue::Decimal(period_max));
        }
        if let Some(period_unit) = self.period_unit {
            visitor.primitive("periodUnit", PrimitiveValue::Str(period_unit.as_str()));
        }
        primitive_list("dayOfWeek", &self.day_of_week, visitor, |d| {
            PrimitiveValue::Str(d.as_str())
        });
        primitive_list("timeOfDay", &self.time_of_day, visitor, |t| {
            PrimitiveValue::Str(t.as_str())
        });
        primitive_list("when", &self.when, visitor, |w| {
            PrimitiveValue::Str(w.as_str())
        });
        if let Some(offset) = self.offset {
            visitor.primitive("offset", PrimitiveValue::UInt(offset.get()));
        }
        visitor.leave_element(name, self.type_name());
    }
}
