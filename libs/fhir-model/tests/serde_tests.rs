use cuprum_model::codes::{QuantityComparator, RequestIntent, RequestStatus};
use cuprum_model::datatypes::{
    Annotation, AnnotationAuthor, Extension, ExtensionValue, Quantity, Ratio, Reference,
    SimpleQuantity, Timing, TimingRepeat, TimingRepeatBounds,
};
use cuprum_model::primitives::{Code, DateTime, Decimal, Markdown, Uri};
use cuprum_model::resources::{
    EnteralFormulaAdministration, EnteralFormulaAdministrationRate, NutritionOrder,
    NutritionOrderEnteralFormula,
};
use cuprum_model::Resource;
use serde_json::json;

fn simple_order() -> NutritionOrder {
    NutritionOrder::builder()
        .status(RequestStatus::Active)
        .intent(RequestIntent::Order)
        .patient(
            Reference::builder()
                .reference("Patient/example")
                .build()
                .expect("reference"),
        )
        .date_time("2021-03-17T12:00:00Z".parse::<DateTime>().expect("dateTime"))
        .build()
        .expect("order")
}

#[test]
fn resource_serializes_with_resource_type_tag() {
    let value = serde_json::to_value(Resource::from(simple_order())).expect("serialize");

    assert_eq!(value["resourceType"], "NutritionOrder");
    assert_eq!(value["status"], "active");
    assert_eq!(value["intent"], "order");
    assert_eq!(value["dateTime"], "2021-03-17T12:00:00Z");
    assert_eq!(value["patient"]["reference"], "Patient/example");

    // Absent optional and repeating elements are omitted entirely.
    let object = value.as_object().expect("object");
    assert!(!object.contains_key("identifier"));
    assert!(!object.contains_key("encounter"));
    assert!(!object.contains_key("note"));
}

#[test]
fn resource_round_trips_through_json() {
    let original = Resource::from(simple_order());
    let text = serde_json::to_string(&original).expect("serialize");
    let parsed: Resource = serde_json::from_str(&text).expect("parse");
    assert_eq!(original, parsed);
    assert_eq!(parsed.type_name(), "NutritionOrder");
}

#[test]
fn parse_rejects_missing_required_field() {
    let result: Result<Resource, _> = serde_json::from_value(json!({
        "resourceType": "NutritionOrder",
        "intent": "order",
        "patient": { "reference": "Patient/example" },
        "dateTime": "2021-03-17T12:00:00Z"
    }));
    assert!(result.is_err());
}

#[test]
fn parse_rejects_unknown_resource_type() {
    let result: Result<Resource, _> = serde_json::from_value(json!({
        "resourceType": "Observation",
        "status": "final"
    }));
    assert!(result.is_err());
}

#[test]
fn enteral_formula_uses_the_lowercase_route_key() {
    let formula = NutritionOrderEnteralFormula::builder()
        .base_formula_product_name("Acme High Protein Formula")
        .route_of_administration(
            cuprum_model::datatypes::CodeableConcept::builder()
                .text("Instillation, nasogastric tube")
                .build()
                .expect("concept"),
        )
        .build()
        .expect("formula");
    let order = simple_order()
        .to_builder()
        .enteral_formula(formula)
        .build()
        .expect("order");

    let value = serde_json::to_value(&order).expect("serialize");
    let formula_object = value["enteralFormula"].as_object().expect("object");
    assert!(formula_object.contains_key("routeofAdministration"));
    assert!(!formula_object.contains_key("routeOfAdministration"));

    let parsed: NutritionOrder = serde_json::from_value(value).expect("parse");
    assert_eq!(order, parsed);
}

#[test]
fn administration_rate_uses_choice_specific_keys() {
    let with_quantity = EnteralFormulaAdministration::builder()
        .rate(EnteralFormulaAdministrationRate::Quantity(
            SimpleQuantity::builder()
                .value(Decimal::new(60, 0))
                .unit("ml/hr")
                .build()
                .expect("quantity"),
        ))
        .build()
        .expect("administration");

    let value = serde_json::to_value(&with_quantity).expect("serialize");
    let object = value.as_object().expect("object");
    assert!(object.contains_key("rateQuantity"));
    assert!(!object.contains_key("rateRatio"));
    assert!(!object.contains_key("rate"));

    let parsed: EnteralFormulaAdministration = serde_json::from_value(value).expect("parse");
    assert_eq!(with_quantity, parsed);
}

#[test]
fn administration_rejects_two_rate_variants() {
    let result: Result<EnteralFormulaAdministration, _> = serde_json::from_value(json!({
        "rateQuantity": { "value": 60, "unit": "ml/hr" },
        "rateRatio": {
            "numerator": { "value": 60 },
            "denominator": { "value": 1 }
        }
    }));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("rate[x]"));
}

#[test]
fn administration_rate_ratio_round_trips() {
    let with_ratio = EnteralFormulaAdministration::builder()
        .rate(EnteralFormulaAdministrationRate::Ratio(
            Ratio::builder()
                .numerator(
                    Quantity::builder()
                        .value(Decimal::new(60, 0))
                        .unit("ml")
                        .build()
                        .expect("quantity"),
                )
                .denominator(
                    Quantity::builder()
                        .value(Decimal::new(1, 0))
                        .unit("hr")
                        .build()
                        .expect("quantity"),
                )
                .build()
                .expect("ratio"),
        ))
        .build()
        .expect("administration");

    let value = serde_json::to_value(&with_ratio).expect("serialize");
    assert!(value.as_object().expect("object").contains_key("rateRatio"));
    let parsed: EnteralFormulaAdministration = serde_json::from_value(value).expect("parse");
    assert_eq!(with_ratio, parsed);
}

#[test]
fn annotation_author_choice_round_trips() {
    let annotation = Annotation::builder()
        .author(AnnotationAuthor::String("Dieticians".into()))
        .text("Check tolerance daily".parse::<Markdown>().expect("markdown"))
        .build()
        .expect("annotation");

    let value = serde_json::to_value(&annotation).expect("serialize");
    assert_eq!(value["authorString"], "Dieticians");
    assert_eq!(value["text"], "Check tolerance daily");

    let parsed: Annotation = serde_json::from_value(value).expect("parse");
    assert_eq!(annotation, parsed);
}

#[test]
fn annotation_rejects_two_author_variants() {
    let result: Result<Annotation, _> = serde_json::from_value(json!({
        "authorString": "Dieticians",
        "authorReference": { "reference": "Practitioner/example" },
        "text": "note"
    }));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("author[x]"));
}

#[test]
fn annotation_parse_requires_text() {
    let result: Result<Annotation, _> =
        serde_json::from_value(json!({ "authorString": "Dieticians" }));
    assert!(result.is_err());
}

#[test]
fn extension_value_choice_round_trips() {
    let extension = Extension::builder(
        "http://example.org/fhir/StructureDefinition/preferred"
            .parse::<Uri>()
            .expect("uri"),
    )
    .value(ExtensionValue::Boolean(true))
    .build()
    .expect("extension");

    let value = serde_json::to_value(&extension).expect("serialize");
    assert_eq!(value["valueBoolean"], true);
    assert_eq!(
        value["url"],
        "http://example.org/fhir/StructureDefinition/preferred"
    );

    let parsed: Extension = serde_json::from_value(value).expect("parse");
    assert_eq!(extension, parsed);
}

#[test]
fn extension_rejects_two_values() {
    let result: Result<Extension, _> = serde_json::from_value(json!({
        "url": "http://example.org/ext",
        "valueBoolean": true,
        "valueString": "also set"
    }));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("value[x]"));
}

#[test]
fn extension_parse_requires_url() {
    let result: Result<Extension, _> = serde_json::from_value(json!({ "valueBoolean": true }));
    assert!(result.is_err());
}

#[test]
fn timing_bounds_choice_round_trips() {
    let timing = Timing::builder()
        .repeat(
            TimingRepeat::builder()
                .bounds(TimingRepeatBounds::Period(
                    cuprum_model::datatypes::Period::builder()
                        .start("2021-03-17".parse::<DateTime>().expect("dateTime"))
                        .build()
                        .expect("period"),
                ))
                .frequency(3.try_into().expect("positiveInt"))
                .period(Decimal::new(1, 0))
                .period_unit(cuprum_model::codes::UnitsOfTime::Day)
                .build()
                .expect("repeat"),
        )
        .build()
        .expect("timing");

    let value = serde_json::to_value(&timing).expect("serialize");
    let repeat = value["repeat"].as_object().expect("object");
    assert!(repeat.contains_key("boundsPeriod"));
    assert_eq!(value["repeat"]["frequency"], 3);
    assert_eq!(value["repeat"]["periodUnit"], "d");

    let parsed: Timing = serde_json::from_value(value).expect("parse");
    assert_eq!(timing, parsed);
}

#[test]
fn quantity_comparator_uses_symbol_codes() {
    let quantity = Quantity::builder()
        .value(Decimal::new(2, 0))
        .comparator(QuantityComparator::LessThan)
        .unit("g")
        .build()
        .expect("quantity");

    let value = serde_json::to_value(&quantity).expect("serialize");
    assert_eq!(value["comparator"], "<");

    let parsed: Quantity = serde_json::from_value(value).expect("parse");
    assert_eq!(quantity, parsed);
}

#[test]
fn parse_rejects_malformed_primitives() {
    // dateTime with a time but no zone offset
    let result: Result<NutritionOrder, _> = serde_json::from_value(json!({
        "status": "active",
        "intent": "order",
        "patient": { "reference": "Patient/example" },
        "dateTime": "2021-03-17T12:00:00"
    }));
    assert!(result.is_err());

    // code with embedded double space
    assert!("not  a code".parse::<Code>().is_err());
}

#[test]
fn parse_accepts_real_world_example() {
    let order: NutritionOrder = serde_json::from_value(json!({
        "id": "enteralcontinuous",
        "status": "active",
        "intent": "order",
        "patient": { "reference": "Patient/example", "display": "Peter Chalmers" },
        "dateTime": "2014-09-17",
        "enteralFormula": {
            "baseFormulaType": {
                "coding": [{
                    "system": "http://snomed.info/sct",
                    "code": "6547210000124112",
                    "display": "Diabetic specialty enteral formula"
                }]
            },
            "baseFormulaProductName": "Acme Diabetes Formula",
            "routeofAdministration": {
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/v3-RouteOfAdministration",
                    "code": "NGT",
                    "display": "Instillation, nasogastric tube"
                }]
            },
            "administration": [{
                "schedule": {
                    "repeat": {
                        "boundsPeriod": { "start": "2014-09-17T16:00:00Z" }
                    }
                },
                "rateQuantity": {
                    "value": 60,
                    "unit": "ml/hr",
                    "system": "http://unitsofmeasure.org",
                    "code": "mL/h"
                }
            }],
            "maxVolumeToDeliver": {
                "value": 1440,
                "unit": "milliliter/day",
                "system": "http://unitsofmeasure.org",
                "code": "mL/d"
            }
        }
    }))
    .expect("parse");

    let formula = order.enteral_formula().expect("enteralFormula");
    assert_eq!(
        formula.base_formula_product_name(),
        Some("Acme Diabetes Formula")
    );
    assert_eq!(formula.administration().len(), 1);
    match formula.administration()[0].rate().expect("rate") {
        EnteralFormulaAdministrationRate::Quantity(q) => {
            assert_eq!(q.unit(), Some("ml/hr"));
        }
        other => panic!("expected rateQuantity, got {other:?}"),
    }
}
