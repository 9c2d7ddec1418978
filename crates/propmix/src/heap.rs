//! The object heap: arena of property objects plus the native function
//! table backing accessor properties.
//!
//! Objects are addressed by [`ObjectHandle`]; getters and setters are plain
//! Rust closures registered once and addressed by [`FnId`].  Descriptors
//! reference functions by id, so copying a descriptor preserves function
//! identity: an accessor mixed onto another object invokes the same closure
//! over the same captured state.

use std::fmt;

use crate::error::ObjectError;
use crate::model::{FnId, ObjectHandle, PropertyDescriptor, PropertyKey, SymbolId, Value};
use crate::object::PropertyObject;

type NativeFn = Box<dyn Fn(&[Value]) -> Value>;

/// Arena of property objects and registered native functions.
pub struct ObjectHeap {
    objects: Vec<PropertyObject>,
    functions: Vec<NativeFn>,
    next_symbol: u32,
}

impl fmt::Debug for ObjectHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHeap")
            .field("objects", &self.objects)
            .field("functions", &self.functions.len())
            .field("next_symbol", &self.next_symbol)
            .finish()
    }
}

impl Default for ObjectHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectHeap {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            functions: Vec::new(),
            next_symbol: 0,
        }
    }

    // -- allocation ---------------------------------------------------------

    /// Allocate a new empty, extensible object.
    pub fn alloc(&mut self) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len() as u32);
        self.objects.push(PropertyObject::new());
        handle
    }

    /// Allocate a new unique symbol id.
    pub fn alloc_symbol(&mut self) -> SymbolId {
        let id = SymbolId(self.next_symbol);
        self.next_symbol += 1;
        id
    }

    /// Register a native function and return its identity.
    pub fn register_native<F>(&mut self, f: F) -> FnId
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        let id = FnId(self.functions.len() as u32);
        self.functions.push(Box::new(f));
        id
    }

    // -- access -------------------------------------------------------------

    pub fn get(&self, handle: ObjectHandle) -> Result<&PropertyObject, ObjectError> {
        self.objects
            .get(handle.0 as usize)
            .ok_or(ObjectError::ObjectNotFound(handle))
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> Result<&mut PropertyObject, ObjectError> {
        self.objects
            .get_mut(handle.0 as usize)
            .ok_or(ObjectError::ObjectNotFound(handle))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Invoke a registered native function.
    pub fn call(&self, id: FnId, args: &[Value]) -> Result<Value, ObjectError> {
        let f = self
            .functions
            .get(id.0 as usize)
            .ok_or(ObjectError::FunctionNotFound(id))?;
        Ok(f(args))
    }

    /// Coerce a value to an object handle, or fail with the type error that
    /// every reflective primitive raises on primitives, null, and undefined.
    pub fn expect_object(&self, value: &Value) -> Result<ObjectHandle, ObjectError> {
        match value {
            Value::Object(handle) => Ok(*handle),
            other => Err(ObjectError::NotAnObject {
                type_name: other.type_name().to_string(),
            }),
        }
    }

    // -- reflective primitives ----------------------------------------------

    /// Own keys of an object in enumeration order.
    pub fn own_keys(&self, handle: ObjectHandle) -> Result<Vec<PropertyKey>, ObjectError> {
        Ok(self.get(handle)?.own_property_keys())
    }

    /// The own property descriptor for `key`, if present.
    pub fn get_own_property_descriptor(
        &self,
        handle: ObjectHandle,
        key: &PropertyKey,
    ) -> Result<Option<PropertyDescriptor>, ObjectError> {
        Ok(self.get(handle)?.get_own_property(key).cloned())
    }

    /// All own `(key, descriptor)` pairs in enumeration order.
    pub fn own_property_descriptors(
        &self,
        handle: ObjectHandle,
    ) -> Result<Vec<(PropertyKey, PropertyDescriptor)>, ObjectError> {
        Ok(self.get(handle)?.own_property_descriptors())
    }

    /// Define a property.  Returns `Ok(false)` on rejection without
    /// reporting why; use [`define_property_or_throw`] for the raising form.
    ///
    /// [`define_property_or_throw`]: ObjectHeap::define_property_or_throw
    pub fn define_property(
        &mut self,
        handle: ObjectHandle,
        key: PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<bool, ObjectError> {
        Ok(self.get_mut(handle)?.define_own_property(key, desc).is_ok())
    }

    /// Define a property, surfacing a rejection as a type error carrying
    /// the offending key.
    pub fn define_property_or_throw(
        &mut self,
        handle: ObjectHandle,
        key: PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<(), ObjectError> {
        self.get_mut(handle)?
            .define_own_property(key.clone(), desc)
            .map_err(|reason| ObjectError::DefineRejected { key, reason })
    }

    pub fn has_own(&self, handle: ObjectHandle, key: &PropertyKey) -> Result<bool, ObjectError> {
        Ok(self.get(handle)?.has_own_property(key))
    }

    /// Delete a property.  `Ok(false)` if it exists and is non-configurable.
    pub fn delete_property(
        &mut self,
        handle: ObjectHandle,
        key: &PropertyKey,
    ) -> Result<bool, ObjectError> {
        Ok(self.get_mut(handle)?.delete(key))
    }

    pub fn freeze(&mut self, handle: ObjectHandle) -> Result<(), ObjectError> {
        self.get_mut(handle)?.freeze();
        Ok(())
    }

    pub fn seal(&mut self, handle: ObjectHandle) -> Result<(), ObjectError> {
        self.get_mut(handle)?.seal();
        Ok(())
    }

    // -- value-level access -------------------------------------------------

    /// Read `handle[key]`: the data value, the getter invocation result, or
    /// `Undefined` for an absent key or a getter-less accessor.
    pub fn get_value(&self, handle: ObjectHandle, key: &PropertyKey) -> Result<Value, ObjectError> {
        let desc = self.get(handle)?.get_own_property(key).cloned();
        match desc {
            None => Ok(Value::Undefined),
            Some(PropertyDescriptor::Data { value, .. }) => Ok(value),
            Some(PropertyDescriptor::Accessor { get: None, .. }) => Ok(Value::Undefined),
            Some(PropertyDescriptor::Accessor { get: Some(f), .. }) => self.call(f, &[]),
        }
    }

    /// Write `handle[key] = value`: invoke the setter, update a writable
    /// data property, or insert a fresh data property on an extensible
    /// object.  Returns `Ok(false)` when the write is rejected.
    pub fn set_value(
        &mut self,
        handle: ObjectHandle,
        key: PropertyKey,
        value: Value,
    ) -> Result<bool, ObjectError> {
        let desc = self.get(handle)?.get_own_property(&key).cloned();
        match desc {
            Some(PropertyDescriptor::Accessor { set: Some(f), .. }) => {
                self.call(f, &[value])?;
                Ok(true)
            }
            Some(PropertyDescriptor::Accessor { set: None, .. }) => Ok(false),
            Some(PropertyDescriptor::Data { writable: false, .. }) => Ok(false),
            Some(PropertyDescriptor::Data {
                writable: true,
                enumerable,
                configurable,
                ..
            }) => {
                let updated = PropertyDescriptor::Data {
                    value,
                    writable: true,
                    enumerable,
                    configurable,
                };
                Ok(self
                    .get_mut(handle)?
                    .define_own_property(key, updated)
                    .is_ok())
            }
            None => {
                let obj = self.get_mut(handle)?;
                if !obj.is_extensible() {
                    return Ok(false);
                }
                Ok(obj
                    .define_own_property(key, PropertyDescriptor::data(value))
                    .is_ok())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
