//! The property-bearing object: insertion-ordered own properties plus the
//! extensibility flag.
//!
//! There is no prototype link.  Every operation here touches own, direct
//! properties only.

use serde::{Deserialize, Serialize};

use crate::error::DefineRejection;
use crate::model::{PropertyDescriptor, PropertyKey};

/// An object holding own properties with full descriptors.
///
/// Properties are stored in insertion order; [`own_property_keys`] derives
/// the enumeration order (integer indices ascending, then string keys in
/// insertion order, then symbol keys in insertion order) from it.
///
/// [`own_property_keys`]: PropertyObject::own_property_keys
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyObject {
    extensible: bool,
    slots: Vec<(PropertyKey, PropertyDescriptor)>,
}

impl Default for PropertyObject {
    fn default() -> Self {
        Self {
            extensible: true,
            slots: Vec::new(),
        }
    }
}

impl PropertyObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    /// Makes this object non-extensible.  Irreversible.
    pub fn prevent_extensions(&mut self) {
        self.extensible = false;
    }

    fn position(&self, key: &PropertyKey) -> Option<usize> {
        self.slots.iter().position(|(k, _)| k == key)
    }

    /// The own property descriptor for `key`, if present.
    pub fn get_own_property(&self, key: &PropertyKey) -> Option<&PropertyDescriptor> {
        self.slots
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| d)
    }

    pub fn has_own_property(&self, key: &PropertyKey) -> bool {
        self.position(key).is_some()
    }

    /// Define or update a property, validating against the current
    /// descriptor.
    ///
    /// Rejections (`Err`) leave the object unchanged: a new key on a
    /// non-extensible object, or any incompatible change to a
    /// non-configurable property — configurability or enumerability flips,
    /// data/accessor kind changes, value changes on non-writable data
    /// properties, getter/setter identity changes on accessors.  Redefining
    /// a non-configurable property with an identical descriptor is allowed.
    pub fn define_own_property(
        &mut self,
        key: PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<(), DefineRejection> {
        match self.position(&key) {
            Some(i) => {
                let current = &self.slots[i].1;
                if !current.is_configurable() {
                    if desc.is_configurable() {
                        return Err(DefineRejection::NonConfigurable);
                    }
                    if desc.is_enumerable() != current.is_enumerable() {
                        return Err(DefineRejection::NonConfigurable);
                    }
                    if current.is_data() != desc.is_data() {
                        return Err(DefineRejection::KindMismatch);
                    }
                    match (current, &desc) {
                        (
                            PropertyDescriptor::Data {
                                writable: false,
                                value: current_value,
                                ..
                            },
                            PropertyDescriptor::Data {
                                writable, value, ..
                            },
                        ) => {
                            if *writable || !current_value.same_value(value) {
                                return Err(DefineRejection::NonWritableValue);
                            }
                        }
                        (
                            PropertyDescriptor::Accessor {
                                get: current_get,
                                set: current_set,
                                ..
                            },
                            PropertyDescriptor::Accessor { get, set, .. },
                        ) => {
                            if get != current_get || set != current_set {
                                return Err(DefineRejection::AccessorIdentity);
                            }
                        }
                        _ => {}
                    }
                }
                self.slots[i].1 = desc;
                Ok(())
            }
            None => {
                if !self.extensible {
                    return Err(DefineRejection::NotExtensible);
                }
                self.slots.push((key, desc));
                Ok(())
            }
        }
    }

    /// Delete a property.  Returns `false` if the property exists and is
    /// non-configurable; deleting an absent key is vacuously `true`.
    pub fn delete(&mut self, key: &PropertyKey) -> bool {
        match self.position(key) {
            Some(i) => {
                if !self.slots[i].1.is_configurable() {
                    return false;
                }
                self.slots.remove(i);
                true
            }
            None => true,
        }
    }

    /// Own keys in enumeration order: canonical integer indices sorted
    /// numerically, then string keys in insertion order, then symbol keys
    /// in insertion order.
    pub fn own_property_keys(&self) -> Vec<PropertyKey> {
        let mut index_keys: Vec<(u64, PropertyKey)> = Vec::new();
        let mut string_keys: Vec<PropertyKey> = Vec::new();
        let mut symbol_keys: Vec<PropertyKey> = Vec::new();

        for (key, _) in &self.slots {
            match key.integer_index() {
                Some(n) => index_keys.push((n, key.clone())),
                None => match key {
                    PropertyKey::String(_) => string_keys.push(key.clone()),
                    PropertyKey::Symbol(_) => symbol_keys.push(key.clone()),
                },
            }
        }

        index_keys.sort_by_key(|(n, _)| *n);
        let mut keys: Vec<PropertyKey> = index_keys.into_iter().map(|(_, k)| k).collect();
        keys.extend(string_keys);
        keys.extend(symbol_keys);
        keys
    }

    /// All own `(key, descriptor)` pairs in enumeration order.
    pub fn own_property_descriptors(&self) -> Vec<(PropertyKey, PropertyDescriptor)> {
        self.own_property_keys()
            .into_iter()
            .filter_map(|k| self.get_own_property(&k).cloned().map(|d| (k, d)))
            .collect()
    }

    /// Make all own properties non-configurable and data properties
    /// non-writable, and prevent extensions.
    pub fn freeze(&mut self) {
        self.extensible = false;
        for (_, desc) in &mut self.slots {
            desc.set_non_configurable();
            desc.set_non_writable();
        }
    }

    /// Make all own properties non-configurable and prevent extensions,
    /// leaving writability unchanged.
    pub fn seal(&mut self) {
        self.extensible = false;
        for (_, desc) in &mut self.slots {
            desc.set_non_configurable();
        }
    }

    pub fn is_frozen(&self) -> bool {
        !self.extensible
            && self.slots.iter().all(|(_, d)| {
                !d.is_configurable() && (d.is_accessor() || !d.is_writable())
            })
    }

    pub fn is_sealed(&self) -> bool {
        !self.extensible && self.slots.iter().all(|(_, d)| !d.is_configurable())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
