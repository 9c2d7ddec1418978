//! Own-property descriptor mixing.
//!
//! [`mix`] copies every own property of a source object onto a target
//! object — accessors, non-enumerable properties, and symbol-keyed
//! properties included — preserving each property's exact descriptor.

use crate::error::ObjectError;
use crate::heap::ObjectHeap;
use crate::model::Value;

/// Copy all own properties of `source` onto `target`, descriptor and all.
///
/// Keys are visited in the source's enumeration order: integer indices
/// ascending numerically, then string keys in insertion order, then symbol
/// keys in insertion order.  Colliding keys on the target are overwritten;
/// target keys absent from the source are untouched; the source is never
/// mutated.  Copied accessor descriptors keep their getter/setter function
/// identity, so reads and writes through either object act on the same
/// captured state.
///
/// Both arguments must be objects; anything else fails with the type error
/// raised by the object coercion.  A definition rejected by the target
/// (non-extensible target gaining a key, or an incompatible non-configurable
/// property) surfaces as a type error naming the offending key, and keys
/// copied before that point stay copied.
pub fn mix(heap: &mut ObjectHeap, source: Value, target: Value) -> Result<(), ObjectError> {
    let from = heap.expect_object(&source)?;
    let to = heap.expect_object(&target)?;
    for (key, desc) in heap.own_property_descriptors(from)? {
        heap.define_property_or_throw(to, key, desc)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
