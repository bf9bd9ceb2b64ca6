use std::{fmt, io::Write};

use tracing::debug;

use crate::error::{DispatchError, Result};
use crate::hierarchy::{ClassTable, ROOT};

/// The three classes of the demo. `B` inherits from `A` and `C` from `B`, and every one of them
/// overrides `call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    A,
    B,
    C,
}

impl Class {
    pub const ALL: [Class; 3] = [Class::A, Class::B, Class::C];

    /// Name of the one method every class defines.
    pub const METHOD: &'static str = "call";

    pub fn name(self) -> &'static str {
        match self {
            Class::A => "A",
            Class::B => "B",
            Class::C => "C",
        }
    }

    pub fn superclass_name(self) -> &'static str {
        match self {
            Class::A => ROOT,
            Class::B => "A",
            Class::C => "B",
        }
    }

    /// Runs this class's `call`. Every override prints its own class name and ignores `x`.
    pub fn call<W: Write>(self, x: i32, out: &mut W) -> std::io::Result<()> {
        match self {
            Class::A => {
                debug!(x, "A.call");
                writeln!(out, "A")
            }
            Class::B => {
                debug!(x, "B.call");
                writeln!(out, "B")
            }
            Class::C => {
                debug!(x, "C.call");
                writeln!(out, "C")
            }
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An instance of a [`Class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Object {
    class: Class,
}

impl Object {
    pub fn new(class: Class) -> Self {
        Self { class }
    }

    /// The runtime class of the object.
    pub fn class(&self) -> Class {
        self.class
    }
}

/// A named variable with a declared class that may or may not hold an [`Object`].
///
/// Calls go to the class of the object held, whatever the declared class is:
///
/// ```
/// use duet_dispatch::class::{Class, Handle, Object};
/// use duet_dispatch::hierarchy::ClassTable;
///
/// let table = ClassTable::demo();
/// let mut handle = Handle::new("h", Class::A);
/// handle.assign(Object::new(Class::C), &table).unwrap();
///
/// let mut out = Vec::new();
/// handle.call(1, &mut out).unwrap();
/// assert_eq!(out, b"C\n");
/// ```
#[derive(Debug, Clone)]
pub struct Handle {
    name: String,
    declared: Class,
    referent: Option<Object>,
}

impl Handle {
    /// A handle that starts out holding nothing.
    pub fn new(name: impl Into<String>, declared: Class) -> Self {
        Self {
            name: name.into(),
            declared,
            referent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared(&self) -> Class {
        self.declared
    }

    pub fn referent(&self) -> Option<&Object> {
        self.referent.as_ref()
    }

    /// Stores `object` in the handle if its class conforms to the declared class in `table`.
    pub fn assign(&mut self, object: Object, table: &ClassTable) -> Result<()> {
        if !table.conforms(object.class().name(), self.declared.name()) {
            return Err(DispatchError::NotConforming {
                handle: self.name.clone(),
                declared: self.declared.to_string(),
                class: object.class().to_string(),
            });
        }

        self.referent = Some(object);
        Ok(())
    }

    /// Calls `call(x)` on the object held by the handle.
    ///
    /// # Errors
    ///
    /// [`DispatchError::OperationOnNone`] if the handle holds nothing. Nothing is written to
    /// `out` in that case.
    pub fn call<W: Write>(&self, x: i32, out: &mut W) -> Result<()> {
        match self.referent {
            Some(object) => {
                debug!(
                    handle = %self.name,
                    declared = %self.declared,
                    runtime = %object.class(),
                    "dispatching {}",
                    Class::METHOD
                );
                object.class().call(x, out)?;
                Ok(())
            }
            None => {
                debug!(handle = %self.name, "{} on None", Class::METHOD);
                Err(DispatchError::OperationOnNone {
                    handle: self.name.clone(),
                })
            }
        }
    }
}
