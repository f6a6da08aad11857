//! Strongly-typed FHIR R4 data models.
//!
//! This crate provides immutable Rust representations of FHIR resources and
//! data types, generated in the shape of the R4 structure definitions.
//!
//! # Module Organization
//!
//! - `primitives`: validated newtypes for the FHIR primitive types
//! - `codes`: code enums for required terminology bindings
//! - `datatypes`: general-purpose complex types (Coding, Quantity, Timing, ...)
//! - `resources`: one module per resource, backbone elements alongside
//! - `visitor`: double-dispatch traversal over the object graph
//!
//! # Design
//!
//! - **Immutable**: fields are private; instances are constructed through
//!   builders and never change afterwards.
//! - **Fail-fast**: required fields are checked when `build()` runs, and
//!   primitive values are checked against the R4 lexical grammars when they
//!   are created.
//! - **Closed choices**: `[x]` elements are Rust enums, so a disallowed
//!   variant is unrepresentable.
//! - **Wire-compatible**: serde produces and accepts FHIR R4 JSON.
//!
//! # Example
//!
//! ```rust
//! use cuprum_model::codes::{RequestIntent, RequestStatus};
//! use cuprum_model::datatypes::Reference;
//! use cuprum_model::primitives::DateTime;
//! use cuprum_model::resources::NutritionOrder;
//!
//! let order = NutritionOrder::builder()
//!     .status(RequestStatus::Active)
//!     .intent(RequestIntent::Order)
//!     .patient(
//!         Reference::builder()
//!             .reference("Patient/example")
//!             .build()
//!             .unwrap(),
//!     )
//!     .date_time("2021-03-17T12:00:00Z".parse::<DateTime>().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(order.status(), RequestStatus::Active);
//! assert!(order.identifier().is_empty());
//! ```

pub mod codes;
pub mod datatypes;
pub mod error;
pub mod primitives;
pub mod resource;
pub mod resources;
pub mod visitor;

// Re-export commonly used types
pub use codes::*;
pub use datatypes::*;
pub use error::{Error, Result};
pub use primitives::*;
pub use resource::Resource;
pub use resources::*;
pub use visitor::{PrimitiveValue, Visit, Visitor};
