//! Typed failures for object and mixing operations.
//!
//! Failures surface in the `TypeError:` register and carry the offending
//! key where one exists.  There is no retry or recovery layer: callers
//! decide what a failed definition means.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{FnId, ObjectHandle, PropertyKey};

/// Why a property definition was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefineRejection {
    /// New key on a non-extensible object.
    NotExtensible,
    /// Reconfiguring a non-configurable property (configurability or
    /// enumerability change).
    NonConfigurable,
    /// Data/accessor kind change on a non-configurable property.
    KindMismatch,
    /// Writability upgrade or value change on a non-writable
    /// non-configurable data property.
    NonWritableValue,
    /// Getter/setter identity change on a non-configurable accessor.
    AccessorIdentity,
}

impl DefineRejection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotExtensible => "object is not extensible",
            Self::NonConfigurable => "property is not configurable",
            Self::KindMismatch => "cannot change property kind on non-configurable property",
            Self::NonWritableValue => "property is not writable",
            Self::AccessorIdentity => "cannot replace accessor on non-configurable property",
        }
    }
}

impl fmt::Display for DefineRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Errors from object model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ObjectError {
    /// A reflective primitive was applied to a non-object value.
    #[error("TypeError: {type_name} is not an object")]
    NotAnObject { type_name: String },
    /// Handle does not resolve to a live heap object.
    #[error("object#{0} not found")]
    ObjectNotFound(ObjectHandle),
    /// Reference does not resolve to a registered native function.
    #[error("function#{0} not found")]
    FunctionNotFound(FnId),
    /// The target object rejected a property definition.
    #[error("TypeError: cannot define property '{key}': {reason}")]
    DefineRejected {
        key: PropertyKey,
        reason: DefineRejection,
    },
}
