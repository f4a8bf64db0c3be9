//! Call values and generic type arguments.
//!
//! Arguments, results, and generic type arguments cross the
//! interceptor boundary in type-erased form. A [`CallValue`] owns one
//! boxed value; [`TypeArg`] captures the identity and name of one
//! generic type argument supplied at a call site.

use std::any::{Any, TypeId};
use std::fmt;

/// Ordered argument list for one intercepted call.
pub type CallArgs = Vec<CallValue>;

/// Generic type arguments supplied at the call site, in declared
/// parameter order. Empty for non-generic methods.
pub type TypeArgs = Vec<TypeArg>;

/// A single type-erased value.
pub struct CallValue(Box<dyn Any>);

impl CallValue {
    /// Box a value.
    pub fn new<T: Any>(value: T) -> Self {
        CallValue(Box::new(value))
    }

    /// The unit value, for handlers answering a no-value method.
    pub fn unit() -> Self {
        CallValue::new(())
    }

    /// Whether the boxed value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Borrow the boxed value as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Take the boxed value as a `T`, returning the original value on
    /// a type mismatch.
    pub fn try_take<T: Any>(self) -> Result<T, CallValue> {
        match self.0.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(original) => Err(CallValue(original)),
        }
    }

    /// Take the boxed value as a `T`.
    ///
    /// Panics on a type mismatch. Generated forwarding bodies use this
    /// as the return-conversion step: a handler answering with an
    /// incompatible value is a dispatch error surfaced at the call
    /// site, the analogue of a failed cast.
    pub fn take<T: Any>(self) -> T {
        match self.try_take::<T>() {
            Ok(value) => value,
            Err(_) => panic!(
                "interceptor result cannot be converted to {}",
                std::any::type_name::<T>()
            ),
        }
    }
}

impl fmt::Debug for CallValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallValue({:?})", self.0.type_id())
    }
}

/// Identity of one generic type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeArg {
    id: TypeId,
    name: &'static str,
}

impl TypeArg {
    /// Capture the type argument `T`.
    pub fn of<T: Any>() -> Self {
        TypeArg {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The captured `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The captured type name (diagnostic form, e.g. `i32`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the argument is the type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
