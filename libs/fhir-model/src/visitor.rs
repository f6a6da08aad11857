//! Double-dispatch traversal over the model object graph.
//!
//! External consumers (serializers, analyzers) implement [`Visitor`]; every
//! model type implements [`Visit`]. `accept` notifies the visitor when it
//! enters and leaves an element and dispatches to each child in field
//! declaration order, so a visitor can reproduce the wire ordering without
//! knowing any type's shape.

use crate::datatypes::Extension;
use crate::primitives::{Decimal, Instant};

/// A borrowed primitive leaf handed to a visitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveValue<'a> {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Decimal(&'a Decimal),
    Str(&'a str),
    Instant(&'a Instant),
}

/// Traversal consumer. Every method has a no-op default, so implementations
/// override only what they care about.
pub trait Visitor {
    /// Called before an element's children are visited. Return `false` to
    /// skip the element's subtree; `leave_element` is not called for a
    /// skipped element.
    fn enter_element(&mut self, name: &str, type_name: &'static str) -> bool {
        let _ = (name, type_name);
        true
    }

    fn leave_element(&mut self, name: &str, type_name: &'static str) {
        let _ = (name, type_name);
    }

    /// Called before the elements of a non-empty repeating field. Return
    /// `false` to skip the list.
    fn enter_list(&mut self, name: &str, len: usize) -> bool {
        let _ = (name, len);
        true
    }

    fn leave_list(&mut self, name: &str) {
        let _ = name;
    }

    fn primitive(&mut self, name: &str, value: PrimitiveValue<'_>) {
        let _ = (name, value);
    }
}

/// Implemented by every resource, backbone element and complex datatype.
pub trait Visit {
    /// The FHIR type name, e.g. `"NutritionOrder"` or `"Coding"`.
    fn type_name(&self) -> &'static str;

    /// Walk this node. `name` is the field name this node occupies in its
    /// parent (the type name for a root resource).
    fn accept(&self, name: &str, visitor: &mut dyn Visitor);
}

pub(crate) fn accept_list<T: Visit>(name: &str, items: &[T], visitor: &mut dyn Visitor) {
    if items.is_empty() {
        return;
    }
    if !visitor.enter_list(name, items.len()) {
        return;
    }
    for item in items {
        item.accept(name, visitor);
    }
    visitor.leave_list(name);
}

/// Dispatches the fields every backbone element starts with.
pub(crate) fn visit_backbone_base(
    id: &Option<String>,
    extension: &[Extension],
    modifier_extension: &[Extension],
    visitor: &mut dyn Visitor,
) {
    if let Some(id) = id {
        visitor.primitive("id", PrimitiveValue::Str(id));
    }
    accept_list("extension", extension, visitor);
    accept_list("modifierExtension", modifier_extension, visitor);
}

pub(crate) fn primitive_list<'a, T, F>(
    name: &str,
    items: &'a [T],
    visitor: &mut dyn Visitor,
    to_value: F,
) where
    F: Fn(&'a T) -> PrimitiveValue<'a>,
{
    if items.is_empty() {
        return;
    }
    if !visitor.enter_list(name, items.len()) {
        return;
    }
    for item in items {
        visitor.primitive(name, to_value(item));
    }
    visitor.leave_list(name);
}
