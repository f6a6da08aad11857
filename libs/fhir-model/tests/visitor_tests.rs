use cuprum_model::codes::{RequestIntent, RequestStatus};
use cuprum_model::datatypes::{CodeableConcept, Coding, Reference};
use cuprum_model::primitives::{Code, DateTime, Id, Uri};
use cuprum_model::resources::{NutritionOrder, NutritionOrderOralDiet};
use cuprum_model::{PrimitiveValue, Visit, Visitor};

/// Records the traversal as a flat list of event strings.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    skip_elements: Vec<&'static str>,
    skip_lists: Vec<&'static str>,
}

impl Visitor for Recorder {
    fn enter_element(&mut self, name: &str, type_name: &'static str) -> bool {
        if self.skip_elements.contains(&name) {
            self.events.push(format!("skip {name}"));
            return false;
        }
        self.events.push(format!("enter {name}:{type_name}"));
        true
    }

    fn leave_element(&mut self, name: &str, _type_name: &'static str) {
        self.events.push(format!("leave {name}"));
    }

    fn enter_list(&mut self, name: &str, len: usize) -> bool {
        if self.skip_lists.contains(&name) {
            self.events.push(format!("skip list {name}"));
            return false;
        }
        self.events.push(format!("enter list {name}[{len}]"));
        true
    }

    fn leave_list(&mut self, name: &str) {
        self.events.push(format!("leave list {name}"));
    }

    fn primitive(&mut self, name: &str, value: PrimitiveValue<'_>) {
        match value {
            PrimitiveValue::Str(s) => self.events.push(format!("{name}={s}")),
            PrimitiveValue::Bool(b) => self.events.push(format!("{name}={b}")),
            PrimitiveValue::Int(i) => self.events.push(format!("{name}={i}")),
            PrimitiveValue::UInt(u) => self.events.push(format!("{name}={u}")),
            PrimitiveValue::Decimal(d) => self.events.push(format!("{name}={d}")),
            PrimitiveValue::Instant(i) => self.events.push(format!("{name}={i}")),
        }
    }
}

fn order_with_diet() -> NutritionOrder {
    NutritionOrder::builder()
        .id("order-1".parse::<Id>().expect("id"))
        .status(RequestStatus::Active)
        .intent(RequestIntent::Order)
        .patient(
            Reference::builder()
                .reference("Patient/example")
                .build()
                .expect("reference"),
        )
        .date_time("2021-03-17T12:00:00Z".parse::<DateTime>().expect("dateTime"))
        .oral_diet(
            NutritionOrderOralDiet::builder()
                .type_(
                    CodeableConcept::builder()
                        .coding(
                            Coding::builder()
                                .system("http://snomed.info/sct".parse::<Uri>().expect("uri"))
                                .code("160670007".parse::<Code>().expect("code"))
                                .build()
                                .expect("coding"),
                        )
                        .build()
                        .expect("concept"),
                )
                .instruction("Starting day 2")
                .build()
                .expect("diet"),
        )
        .build()
        .expect("order")
}

#[test]
fn traversal_follows_declaration_order() {
    let order = order_with_diet();
    let mut recorder = Recorder::default();
    order.accept("NutritionOrder", &mut recorder);

    assert_eq!(
        recorder.events,
        vec![
            "enter NutritionOrder:NutritionOrder",
            "id=order-1",
            "status=active",
            "intent=order",
            "enter patient:Reference",
            "reference=Patient/example",
            "leave patient",
            "dateTime=2021-03-17T12:00:00Z",
            "enter oralDiet:NutritionOrder.OralDiet",
            "enter list type[1]",
            "enter type:CodeableConcept",
            "enter list coding[1]",
            "enter coding:Coding",
            "system=http://snomed.info/sct",
            "code=160670007",
            "leave coding",
            "leave list coding",
            "leave type",
            "leave list type",
            "instruction=Starting day 2",
            "leave oralDiet",
            "leave NutritionOrder",
        ]
    );
}

#[test]
fn returning_false_from_enter_element_prunes_the_subtree() {
    let order = order_with_diet();
    let mut recorder = Recorder {
        skip_elements: vec!["oralDiet"],
        ..Recorder::default()
    };
    order.accept("NutritionOrder", &mut recorder);

    assert!(recorder.events.contains(&"skip oralDiet".to_string()));
    // Nothing under the pruned element was visited, and no leave event fired.
    assert!(!recorder.events.iter().any(|e| e.contains("coding")));
    assert!(!recorder.events.iter().any(|e| e.starts_with("instruction")));
    assert!(!recorder.events.contains(&"leave oralDiet".to_string()));
    // Siblings after the pruned element still were.
    assert!(recorder
        .events
        .contains(&"dateTime=2021-03-17T12:00:00Z".to_string()));
}

#[test]
fn returning_false_from_enter_list_skips_the_items() {
    let order = order_with_diet();
    let mut recorder = Recorder {
        skip_lists: vec!["type"],
        ..Recorder::default()
    };
    order.accept("NutritionOrder", &mut recorder);

    assert!(recorder.events.contains(&"skip list type".to_string()));
    assert!(!recorder.events.iter().any(|e| e.contains("coding")));
    // The rest of the oralDiet element is unaffected.
    assert!(recorder
        .events
        .contains(&"instruction=Starting day 2".to_string()));
}

#[test]
fn empty_lists_produce_no_events() {
    let order = order_with_diet();
    let mut recorder = Recorder::default();
    order.accept("NutritionOrder", &mut recorder);

    assert!(!recorder.events.iter().any(|e| e.contains("identifier")));
    assert!(!recorder.events.iter().any(|e| e.contains("note")));
}

#[test]
fn resource_dispatches_to_the_wrapped_variant() {
    let resource = cuprum_model::Resource::from(order_with_diet());
    let mut recorder = Recorder::default();
    resource.accept(resource.type_name(), &mut recorder);

    assert_eq!(resource.type_name(), "NutritionOrder");
    assert_eq!(
        recorder.events.first().map(String::as_str),
        Some("enter NutritionOrder:NutritionOrder")
    );
    assert_eq!(
        recorder.events.last().map(String::as_str),
        Some("leave NutritionOrder")
    );
}
