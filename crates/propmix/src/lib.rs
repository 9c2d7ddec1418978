#![forbid(unsafe_code)]

//! Own-property descriptor mixing over a minimal ES-style object model.
//!
//! The crate's single operation is [`mix`]: copy every own property of a
//! source object onto a target object — accessors, non-enumerable
//! properties, and symbol-keyed properties included — preserving each
//! property's exact descriptor (value or getter/setter identity, plus the
//! writable/enumerable/configurable flags).
//!
//! Rust has no implicit property interception, so the property-bearing
//! objects the mixer operates on are explicit:
//!
//! - [`ObjectHeap`] — arena of objects addressed by [`ObjectHandle`], plus
//!   the native function table behind accessor properties
//! - [`PropertyObject`] — insertion-ordered own properties and the
//!   extensibility flag
//! - [`PropertyDescriptor`] — data vs accessor, with flags
//! - [`PropertyKey`] — string or symbol, with integer indices ordered
//!   numerically first
//!
//! ```
//! use propmix::{mix, ObjectHeap, PropertyDescriptor, Value};
//!
//! let mut heap = ObjectHeap::new();
//! let source = heap.alloc();
//! let target = heap.alloc();
//! heap.define_property_or_throw(
//!     source,
//!     "a".into(),
//!     PropertyDescriptor::data(Value::Int(1)),
//! )?;
//!
//! mix(&mut heap, Value::Object(source), Value::Object(target))?;
//! assert_eq!(heap.get_value(target, &"a".into())?, Value::Int(1));
//! # Ok::<(), propmix::ObjectError>(())
//! ```

pub mod error;
pub mod heap;
pub mod mixin;
pub mod model;
pub mod object;

pub use error::{DefineRejection, ObjectError};
pub use heap::ObjectHeap;
pub use mixin::mix;
pub use model::{FnId, ObjectHandle, PropertyDescriptor, PropertyKey, SymbolId, Value};
pub use object::PropertyObject;
