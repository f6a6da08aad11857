use cuprum_model::codes::{
    ExampleScenarioActorType, PublicationStatus, RequestIntent, RequestStatus,
};
use cuprum_model::datatypes::{Annotation, CodeableConcept, Coding, Narrative, Reference};
use cuprum_model::error::Error;
use cuprum_model::primitives::{Code, DateTime, Markdown, Uri};
use cuprum_model::resources::{
    ExampleScenario, ExampleScenarioActor, ExampleScenarioInstance, ExampleScenarioProcess,
    InstanceVersion, NutritionOrder, ProcessStep, StepOperation, SubstanceSourceMaterial,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn patient_ref() -> Reference {
    Reference::builder()
        .reference("Patient/example")
        .display("Example Patient")
        .build()
        .expect("reference")
}

fn order_date() -> DateTime {
    "2021-03-17T12:00:00Z".parse().expect("dateTime")
}

#[test]
fn nutrition_order_requires_status_intent_patient_and_date() {
    let err = NutritionOrder::builder().build().unwrap_err();
    assert!(matches!(err, Error::MissingField("NutritionOrder.status")));

    let err = NutritionOrder::builder()
        .status(RequestStatus::Active)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingField("NutritionOrder.intent")));

    let err = NutritionOrder::builder()
        .status(RequestStatus::Active)
        .intent(RequestIntent::Order)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingField("NutritionOrder.patient")));

    let err = NutritionOrder::builder()
        .status(RequestStatus::Active)
        .intent(RequestIntent::Order)
        .patient(patient_ref())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField("NutritionOrder.dateTime")
    ));
    assert_eq!(
        err.to_string(),
        "Missing required field: NutritionOrder.dateTime"
    );
}

#[test]
fn nutrition_order_builds_with_required_fields_only() {
    let order = NutritionOrder::builder()
        .status(RequestStatus::Active)
        .intent(RequestIntent::Order)
        .patient(patient_ref())
        .date_time(order_date())
        .build()
        .expect("order");

    assert_eq!(order.status(), RequestStatus::Active);
    assert_eq!(order.intent(), RequestIntent::Order);
    assert_eq!(order.patient().reference(), Some("Patient/example"));
    assert_eq!(order.date_time().as_str(), "2021-03-17T12:00:00Z");

    // Absent repeating elements come back as empty slices, never panics.
    assert!(order.identifier().is_empty());
    assert!(order.supplement().is_empty());
    assert!(order.note().is_empty());
    assert!(order.oral_diet().is_none());
}

#[test]
fn example_scenario_requires_status() {
    let err = ExampleScenario::builder().build().unwrap_err();
    assert!(matches!(err, Error::MissingField("ExampleScenario.status")));
}

#[test]
fn actor_requires_actor_id_and_type() {
    let err = ExampleScenarioActor::builder()
        .name("Nurse")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField("ExampleScenario.actor.actorId")
    ));

    let err = ExampleScenarioActor::builder()
        .actor_id("nurse")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField("ExampleScenario.actor.type")
    ));
}

#[test]
fn instance_version_requires_both_fields() {
    let err = InstanceVersion::builder()
        .version_id("v1")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField("ExampleScenario.instance.version.description")
    ));
}

#[test]
fn operation_requires_number() {
    let err = StepOperation::builder().name("send").build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField("ExampleScenario.process.step.operation.number")
    ));
}

#[test]
fn annotation_requires_text() {
    let err = Annotation::builder().build().unwrap_err();
    assert!(matches!(err, Error::MissingField("Annotation.text")));
}

fn example_scenario() -> ExampleScenario {
    ExampleScenario::builder()
        .url("http://example.org/fhir/ExampleScenario/admission".parse::<Uri>().expect("uri"))
        .name("Admission")
        .status(PublicationStatus::Active)
        .experimental(false)
        .actor(
            ExampleScenarioActor::builder()
                .actor_id("nurse")
                .type_(ExampleScenarioActorType::Person)
                .name("Nurse")
                .build()
                .expect("actor"),
        )
        .instance(
            ExampleScenarioInstance::builder()
                .resource_id("order-1")
                .resource_type("NutritionOrder".parse::<Code>().expect("code"))
                .version(
                    InstanceVersion::builder()
                        .version_id("v1")
                        .description("Initial version".parse::<Markdown>().expect("markdown"))
                        .build()
                        .expect("version"),
                )
                .build()
                .expect("instance"),
        )
        .process(
            ExampleScenarioProcess::builder()
                .title("Admission flow")
                .step(
                    ProcessStep::builder()
                        .operation(
                            StepOperation::builder()
                                .number("1")
                                .initiator("nurse")
                                .build()
                                .expect("operation"),
                        )
                        .build()
                        .expect("step"),
                )
                .build()
                .expect("process"),
        )
        .build()
        .expect("scenario")
}

#[test]
fn to_builder_round_trips_unchanged() {
    let scenario = example_scenario();
    let copy = scenario.to_builder().build().expect("rebuild");
    assert_eq!(scenario, copy);
}

#[test]
fn to_builder_supports_modified_copies() {
    let scenario = example_scenario();
    let retired = scenario
        .to_builder()
        .status(PublicationStatus::Retired)
        .build()
        .expect("rebuild");

    assert_eq!(scenario.status(), PublicationStatus::Active);
    assert_eq!(retired.status(), PublicationStatus::Retired);
    assert_ne!(scenario, retired);
    // Everything else carried over.
    assert_eq!(scenario.actor(), retired.actor());
    assert_eq!(scenario.instance(), retired.instance());
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_values_hash_equal() {
    let a = example_scenario();
    let b = a.to_builder().build().expect("rebuild");
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = a.to_builder().version("2.0.0").build().expect("rebuild");
    assert_ne!(a, c);
}

#[test]
fn structural_equality_covers_nested_elements() {
    let concept = |code: &str| {
        CodeableConcept::builder()
            .coding(
                Coding::builder()
                    .system("http://snomed.info/sct".parse::<Uri>().expect("uri"))
                    .code(code.parse::<Code>().expect("code"))
                    .build()
                    .expect("coding"),
            )
            .build()
            .expect("concept")
    };

    let a = SubstanceSourceMaterial::builder()
        .organism_name("Ginkgo biloba")
        .country_of_origin(concept("223498002"))
        .build()
        .expect("material");
    let b = SubstanceSourceMaterial::builder()
        .organism_name("Ginkgo biloba")
        .country_of_origin(concept("223498002"))
        .build()
        .expect("material");
    let c = SubstanceSourceMaterial::builder()
        .organism_name("Ginkgo biloba")
        .country_of_origin(concept("223366002"))
        .build()
        .expect("material");

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
}

#[test]
fn substance_source_material_builds_fully_optional() {
    let material = SubstanceSourceMaterial::builder().build().expect("material");
    assert!(material.organism().is_none());
    assert!(material.fraction_description().is_empty());
    assert!(material.text().is_none());
}

#[test]
fn narrative_requires_status_and_div() {
    let err = Narrative::builder().build().unwrap_err();
    assert!(matches!(err, Error::MissingField("Narrative.status")));
}
