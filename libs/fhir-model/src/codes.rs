//! Code enums for required terminology bindings.
//!
//! Each enum is the closed value set of a code system a model element binds
//! to with `required` strength. The serde form is the wire-level code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a conformance artifact (`publication-status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Draft,
    Active,
    Retired,
    Unknown,
}

impl PublicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PublicationStatus::Draft => "draft",
            PublicationStatus::Active => "active",
            PublicationStatus::Retired => "retired",
            PublicationStatus::Unknown => "unknown",
        }
    }
}

/// Kind of actor in an ExampleScenario (`examplescenario-actor-type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleScenarioActorType {
    Person,
    Entity,
}

impl ExampleScenarioActorType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExampleScenarioActorType::Person => "person",
            ExampleScenarioActorType::Entity => "entity",
        }
    }
}

/// Status of a request-pattern resource (`request-status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Draft,
    Active,
    OnHold,
    Revoked,
    Completed,
    EnteredInError,
    Unknown,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Draft => "draft",
            RequestStatus::Active => "active",
            RequestStatus::OnHold => "on-hold",
            RequestStatus::Revoked => "revoked",
            RequestStatus::Completed => "completed",
            RequestStatus::EnteredInError => "entered-in-error",
            RequestStatus::Unknown => "unknown",
        }
    }
}

/// Intent of a request-pattern resource (`request-intent`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestIntent {
    Proposal,
    Plan,
    Directive,
    Order,
    OriginalOrder,
    ReflexOrder,
    FillerOrder,
    InstanceOrder,
    Option,
}

impl RequestIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestIntent::Proposal => "proposal",
            RequestIntent::Plan => "plan",
            RequestIntent::Directive => "directive",
            RequestIntent::Order => "order",
            RequestIntent::OriginalOrder => "original-order",
            RequestIntent::ReflexOrder => "reflex-order",
            RequestIntent::FillerOrder => "filler-order",
            RequestIntent::InstanceOrder => "instance-order",
            RequestIntent::Option => "option",
        }
    }
}

/// How a narrative was produced (`narrative-status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeStatus {
    Generated,
    Extensions,
    Additional,
    Empty,
}

impl NarrativeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NarrativeStatus::Generated => "generated",
            NarrativeStatus::Extensions => "extensions",
            NarrativeStatus::Additional => "additional",
            NarrativeStatus::Empty => "empty",
        }
    }
}

/// Purpose of an identifier (`identifier-use`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierUse {
    Usual,
    Official,
    Temp,
    Secondary,
    Old,
}

impl IdentifierUse {
    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierUse::Usual => "usual",
            IdentifierUse::Official => "official",
            IdentifierUse::Temp => "temp",
            IdentifierUse::Secondary => "secondary",
            IdentifierUse::Old => "old",
        }
    }
}

/// How a quantity value should be understood (`quantity-comparator`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityComparator {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
}

impl QuantityComparator {
    pub fn as_str(self) -> &'static str {
        match self {
            QuantityComparator::LessThan => "<",
            QuantityComparator::LessOrEqual => "<=",
            QuantityComparator::GreaterOrEqual => ">=",
            QuantityComparator::GreaterThan => ">",
        }
    }
}

/// UCUM time units used by Timing (`units-of-time`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitsOfTime {
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "min")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "wk")]
    Week,
    #[serde(rename = "mo")]
    Month,
    #[serde(rename = "a")]
    Year,
}

impl UnitsOfTime {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitsOfTime::Second => "s",
            UnitsOfTime::Minute => "min",
            UnitsOfTime::Hour => "h",
            UnitsOfTime::Day => "d",
            UnitsOfTime::Week => "wk",
            UnitsOfTime::Month => "mo",
            UnitsOfTime::Year => "a",
        }
    }
}

/// Days of the week (`days-of-week`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "mon",
            DayOfWeek::Tue => "tue",
            DayOfWeek::Wed => "wed",
            DayOfWeek::Thu => "thu",
            DayOfWeek::Fri => "fri",
            DayOfWeek::Sat => "sat",
            DayOfWeek::Sun => "sun",
        }
    }
}

/// Real-world events a Timing can be anchored to (`event-timing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTiming {
    #[serde(rename = "MORN")]
    Morning,
    #[serde(rename = "MORN.early")]
    EarlyMorning,
    #[serde(rename = "MORN.late")]
    LateMorning,
    #[serde(rename = "NOON")]
    Noon,
    #[serde(rename = "AFT")]
    Afternoon,
    #[serde(rename = "AFT.early")]
    EarlyAfternoon,
    #[serde(rename = "AFT.late")]
    LateAfternoon,
    #[serde(rename = "EVE")]
    Evening,
    #[serde(rename = "EVE.early")]
    EarlyEvening,
    #[serde(rename = "EVE.late")]
    LateEvening,
    #[serde(rename = "NIGHT")]
    Night,
    #[serde(rename = "PHS")]
    AfterSleep,
    #[serde(rename = "HS")]
    BeforeSleep,
    #[serde(rename = "WAKE")]
    OnWaking,
    #[serde(rename = "C")]
    WithMeal,
    #[serde(rename = "CM")]
    WithBreakfast,
    #[serde(rename = "CD")]
    WithLunch,
    #[serde(rename = "CV")]
    WithDinner,
    #[serde(rename = "AC")]
    BeforeMeal,
    #[serde(rename = "ACM")]
    BeforeBreakfast,
    #[serde(rename = "ACD")]
    BeforeLunch,
    #[serde(rename = "ACV")]
    BeforeDinner,
    #[serde(rename = "PC")]
    AfterMeal,
    #[serde(rename = "PCM")]
    AfterBreakfast,
    #[serde(rename = "PCD")]
    AfterLunch,
    #[serde(rename = "PCV")]
    AfterDinner,
}

impl EventTiming {
    pub fn as_str(self) -> &'static str {
        match self {
            EventTiming::Morning => "MORN",
            EventTiming::EarlyMorning => "MORN.early",
            EventTiming::LateMorning => "MORN.late",
            EventTiming::Noon => "NOON",
            EventTiming::Afternoon => "AFT",
            EventTiming::EarlyAfternoon => "AFT.early",
            EventTiming::LateAfternoon => "AFT.late",
            EventTiming::Evening => "EVE",
            EventTiming::EarlyEvening => "EVE.early",
            EventTiming::LateEvening => "EVE.late",
            EventTiming::Night => "NIGHT",
            EventTiming::AfterSleep => "PHS",
            EventTiming::BeforeSleep => "HS",
            EventTiming::OnWaking => "WAKE",
            EventTiming::WithMeal => "C",
            EventTiming::WithBreakfast => "CM",
            EventTiming::WithLunch => "CD",
            EventTiming::WithDinner => "CV",
            EventTiming::BeforeMeal => "AC",
            EventTiming::BeforeBreakfast => "ACM",
            EventTiming::BeforeLunch => "ACD",
            EventTiming::BeforeDinner => "ACV",
            EventTiming::AfterMeal => "PC",
            EventTiming::AfterBreakfast => "PCM",
            EventTiming::AfterLunch => "PCD",
            EventTiming::AfterDinner => "PCV",
        }
    }
}

/// Telecommunications form for a contact point (`contact-point-system`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointSystem {
    Phone,
    Fax,
    Email,
    Pager,
    Url,
    Sms,
    Other,
}

impl ContactPointSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactPointSystem::Phone => "phone",
            ContactPointSystem::Fax => "fax",
            ContactPointSystem::Email => "email",
            ContactPointSystem::Pager => "pager",
            ContactPointSystem::Url => "url",
            ContactPointSystem::Sms => "sms",
            ContactPointSystem::Other => "other",
        }
    }
}

/// Use of a contact point (`contact-point-use`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointUse {
    Home,
    Work,
    Temp,
    Old,
    Mobile,
}

impl ContactPointUse {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactPointUse::Home => "home",
            ContactPointUse::Work => "work",
            ContactPointUse::Temp => "temp",
            ContactPointUse::Old => "old",
            ContactPointUse::Mobile => "mobile",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ident),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    PublicationStatus,
    ExampleScenarioActorType,
    RequestStatus,
    RequestIntent,
    NarrativeStatus,
    IdentifierUse,
    QuantityComparator,
    UnitsOfTime,
    DayOfWeek,
    EventTiming,
    ContactPointSystem,
    ContactPointUse,
);
