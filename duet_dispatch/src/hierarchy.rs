//! Inheritance relationships between classes, and the method tables they produce.
//!
//! A [`ClassTable`] maps every class to its immediate superclass. All chains end at [`ROOT`].
//! On top of that it answers subtyping questions ([`conforms`](ClassTable::conforms)), computes
//! least upper bounds ([`join`](ClassTable::join)) and resolves which class's definition of a
//! method an instance actually runs ([`resolve`](ClassTable::resolve)).
//!
//! ```
//! use duet_dispatch::hierarchy::ClassTable;
//!
//! let mut table = ClassTable::new();
//! table.extend("A", "object");
//! table.extend("B", "A");
//! table.define_method("A", "call");
//!
//! assert!(table.conforms("B", "A"));
//! assert_eq!(table.resolve("B", "call"), Some("A"));
//! ```

use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};

use crate::class::Class;

/// The root of every class hierarchy.
pub const ROOT: &str = "object";

#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    // subclass -> immediate superclass
    parents: HashMap<String, String>,
    // class -> methods it defines itself, in definition order
    methods: IndexMap<String, IndexSet<String>>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table for the three demo classes, `A <- B <- C`, each defining `call`.
    pub fn demo() -> Self {
        let mut table = Self::new();
        for class in Class::ALL {
            table.extend(class.name(), class.superclass_name());
            table.define_method(class.name(), Class::METHOD);
        }
        table
    }

    /// Records that `subclass` directly inherits from `superclass`.
    ///
    /// Redefining a class replaces its superclass. No check is made that `superclass` exists.
    pub fn extend(&mut self, subclass: impl Into<String>, superclass: impl Into<String>) {
        let subclass = subclass.into();
        if subclass != ROOT {
            self.parents.insert(subclass, superclass.into());
        }
    }

    /// Records that `class` defines (or overrides) `method`.
    pub fn define_method(&mut self, class: impl Into<String>, method: impl Into<String>) {
        self.methods
            .entry(class.into())
            .or_default()
            .insert(method.into());
    }

    /// Returns true if `name` has been given a superclass, or is the root.
    pub fn contains(&self, name: &str) -> bool {
        name == ROOT || self.parents.contains_key(name)
    }

    /// The immediate superclass of `name`. Unknown classes, and the root itself, map to the root.
    pub fn superclass<'a>(&'a self, name: &str) -> &'a str {
        self.parents.get(name).map_or(ROOT, String::as_str)
    }

    /// `name` followed by all of its superclasses, nearest first. Always ends with [`ROOT`].
    ///
    /// A cyclic chain is cut at the first repeated class.
    pub fn ancestry<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();

        let mut current = name;
        while current != ROOT && seen.insert(current) {
            chain.push(current);
            current = self.superclass(current);
        }
        chain.push(ROOT);

        chain
    }

    /// Returns true if `sub` is `sup` or one of its subclasses.
    pub fn conforms(&self, sub: &str, sup: &str) -> bool {
        sub == sup || sup == ROOT || self.ancestry(sub).contains(&sup)
    }

    /// The least upper bound of `t1` and `t2`.
    ///
    /// If one conforms to the other the more general of the two is returned. Otherwise the
    /// nearest common superclass, which is at worst the root.
    pub fn join<'a>(&'a self, t1: &'a str, t2: &'a str) -> &'a str {
        if self.conforms(t1, t2) {
            return t2;
        }
        if self.conforms(t2, t1) {
            return t1;
        }

        let supertypes_of_t1 = self.ancestry(t1).into_iter().collect::<HashSet<_>>();
        self.ancestry(t2)
            .into_iter()
            .find(|t| supertypes_of_t1.contains(t))
            .unwrap_or(ROOT)
    }

    /// The nearest class in the ancestry of `class` that defines `method`.
    pub fn resolve<'a>(&'a self, class: &'a str, method: &str) -> Option<&'a str> {
        self.ancestry(class).into_iter().find(|c| {
            self.methods
                .get(*c)
                .is_some_and(|defined| defined.contains(method))
        })
    }

    /// The dispatch table of `class`: every method an instance responds to, mapped to the class
    /// whose definition runs.
    ///
    /// Slots are laid out root first. An inherited method keeps the slot its parent gave it and
    /// an override only replaces the defining class. Methods new to a class are appended.
    pub fn method_table(&self, class: &str) -> IndexMap<String, String> {
        let mut table = IndexMap::new();

        for ancestor in self.ancestry(class).into_iter().rev() {
            if let Some(defined) = self.methods.get(ancestor) {
                for method in defined {
                    table.insert(method.clone(), ancestor.to_string());
                }
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn shapes() -> ClassTable {
        let mut table = ClassTable::new();
        table.extend("Shape", ROOT);
        table.extend("Circle", "Shape");
        table.extend("Square", "Shape");
        table.extend("Unit", "Square");

        table.define_method("Shape", "area");
        table.define_method("Shape", "name");
        table.define_method("Square", "area");
        table.define_method("Unit", "side");
        table
    }

    #[test]
    fn ancestry_ends_at_root() {
        let table = shapes();
        assert_eq!(table.ancestry("Unit"), vec!["Unit", "Square", "Shape", ROOT]);
        assert_eq!(table.ancestry(ROOT), vec![ROOT]);
        // Unknown classes hang directly off the root
        assert_eq!(table.ancestry("Ghost"), vec!["Ghost", ROOT]);
    }

    #[test]
    fn superclass_of_root_is_root() {
        let table = shapes();
        assert_eq!(table.superclass(ROOT), ROOT);
        assert_eq!(table.superclass("Circle"), "Shape");
    }

    #[test]
    fn conformance() {
        let table = shapes();
        for class in ["Shape", "Circle", "Square", "Unit", ROOT] {
            assert!(table.conforms(class, class));
            assert!(table.conforms(class, ROOT));
        }
        assert!(table.conforms("Unit", "Shape"));
        assert!(!table.conforms("Shape", "Unit"));
        assert!(!table.conforms("Circle", "Square"));
        assert!(!table.conforms(ROOT, "Shape"));
    }

    #[test]
    fn join_finds_least_upper_bound() {
        let table = shapes();
        assert_eq!(table.join("Unit", "Square"), "Square");
        assert_eq!(table.join("Square", "Unit"), "Square");
        assert_eq!(table.join("Unit", "Circle"), "Shape");
        assert_eq!(table.join("Circle", "Ghost"), ROOT);
    }

    #[test]
    fn resolve_walks_up_the_chain() {
        let table = shapes();
        assert_eq!(table.resolve("Unit", "area"), Some("Square"));
        assert_eq!(table.resolve("Circle", "area"), Some("Shape"));
        assert_eq!(table.resolve("Unit", "name"), Some("Shape"));
        assert_eq!(table.resolve("Circle", "side"), None);
    }

    #[test]
    fn overrides_keep_their_slot() {
        let table = shapes();
        let slots = table.method_table("Unit");

        let layout = slots
            .iter()
            .map(|(m, c)| (m.as_str(), c.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            layout,
            vec![("area", "Square"), ("name", "Shape"), ("side", "Unit")]
        );
    }

    #[test]
    fn cycles_do_not_hang() {
        let mut table = ClassTable::new();
        table.extend("X", "Y");
        table.extend("Y", "X");
        assert_eq!(table.ancestry("X"), vec!["X", "Y", ROOT]);
    }

    #[test]
    fn demo_table() {
        let table = ClassTable::demo();
        assert_eq!(table.ancestry("C"), vec!["C", "B", "A", ROOT]);
        assert!(table.conforms("C", "A"));
        assert!(!table.conforms("A", "C"));
        assert_eq!(table.join("B", "C"), "B");
        for class in Class::ALL {
            assert_eq!(table.resolve(class.name(), "call"), Some(class.name()));
        }
    }
}
