//! Keys, values, and property descriptors.
//!
//! - **Property keys**: strings or opaque-identity symbols.  A string key
//!   whose text is the canonical decimal form of a `u64` is an integer
//!   index for enumeration-order purposes.
//! - **Property descriptors**: data vs accessor, with the
//!   configurable/enumerable/writable flags.  Accessor descriptors hold
//!   [`FnId`] references into the heap's native function table, so copying
//!   a descriptor copies function *identity*.
//! - **Values**: the small runtime value set the descriptors range over.
//!
//! Everything here is pure data and serde-serializable; the function bodies
//! behind `FnId` live only in the heap.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Id newtypes
// ---------------------------------------------------------------------------

/// Unique symbol identifier, allocated by the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// Opaque handle referencing an object in the heap arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectHandle(pub u32);

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference into the heap's native function table.  Two equal `FnId`s are
/// the same function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FnId(pub u32);

impl fmt::Display for FnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// PropertyKey — string or symbol
// ---------------------------------------------------------------------------

/// A property key: either a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    /// String key.
    String(String),
    /// Symbol key.
    Symbol(SymbolId),
}

impl PropertyKey {
    /// The canonical integer index, if this key is one: the key text is
    /// exactly the decimal form of a `u64` (so `"10"` is an index, `"01"`
    /// and `"a"` are not).
    pub fn integer_index(&self) -> Option<u64> {
        match self {
            Self::String(s) => s.parse::<u64>().ok().filter(|n| n.to_string() == *s),
            Self::Symbol(_) => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Symbol(id) => write!(f, "Symbol({})", id.0),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<SymbolId> for PropertyKey {
    fn from(id: SymbolId) -> Self {
        Self::Symbol(id)
    }
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// Runtime value the object model ranges over.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Symbol(SymbolId),
    Object(ObjectHandle),
    Function(FnId),
}

impl Value {
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "number",
            Self::Str(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// SameValue comparison.  There is no float arm, so derived equality
    /// is exact.
    pub fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Symbol(id) => write!(f, "Symbol({})", id.0),
            Self::Object(h) => write!(f, "[object#{h}]"),
            Self::Function(id) => write!(f, "[function#{id}]"),
        }
    }
}

// ---------------------------------------------------------------------------
// PropertyDescriptor
// ---------------------------------------------------------------------------

/// Complete metadata for one own property.
///
/// Structural equality on descriptors is the contract the mixer preserves:
/// same value (or same getter/setter function identity) and same flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyDescriptor {
    /// Data descriptor: has `value` and `writable`.
    Data {
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    /// Accessor descriptor: has `get` and/or `set`.
    Accessor {
        get: Option<FnId>,
        set: Option<FnId>,
        enumerable: bool,
        configurable: bool,
    },
}

impl PropertyDescriptor {
    /// Default data descriptor (writable, enumerable, configurable).
    pub fn data(value: Value) -> Self {
        Self::Data {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Non-writable, non-enumerable, non-configurable data descriptor.
    pub fn data_frozen(value: Value) -> Self {
        Self::Data {
            value,
            writable: false,
            enumerable: false,
            configurable: false,
        }
    }

    /// Enumerable, configurable accessor descriptor.
    pub fn accessor(get: Option<FnId>, set: Option<FnId>) -> Self {
        Self::Accessor {
            get,
            set,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn is_configurable(&self) -> bool {
        match self {
            Self::Data { configurable, .. } | Self::Accessor { configurable, .. } => *configurable,
        }
    }

    pub fn is_enumerable(&self) -> bool {
        match self {
            Self::Data { enumerable, .. } | Self::Accessor { enumerable, .. } => *enumerable,
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self, Self::Accessor { .. })
    }

    /// The value, if this is a data descriptor.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Data { value, .. } => Some(value),
            Self::Accessor { .. } => None,
        }
    }

    /// The getter reference, if this is an accessor descriptor with one.
    pub fn getter(&self) -> Option<FnId> {
        match self {
            Self::Accessor { get, .. } => *get,
            Self::Data { .. } => None,
        }
    }

    /// The setter reference, if this is an accessor descriptor with one.
    pub fn setter(&self) -> Option<FnId> {
        match self {
            Self::Accessor { set, .. } => *set,
            Self::Data { .. } => None,
        }
    }

    /// Is this a data descriptor with `writable: true`?
    pub fn is_writable(&self) -> bool {
        match self {
            Self::Data { writable, .. } => *writable,
            Self::Accessor { .. } => false,
        }
    }

    pub fn set_non_configurable(&mut self) {
        match self {
            Self::Data { configurable, .. } | Self::Accessor { configurable, .. } => {
                *configurable = false;
            }
        }
    }

    /// No-op for accessors.
    pub fn set_non_writable(&mut self) {
        if let Self::Data { writable, .. } = self {
            *writable = false;
        }
    }

    pub fn set_non_enumerable(&mut self) {
        match self {
            Self::Data { enumerable, .. } | Self::Accessor { enumerable, .. } => {
                *enumerable = false;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
