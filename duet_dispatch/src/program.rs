use std::io::Write;

use colored::Colorize;
use prettytable::{row, Table};
use tracing::info;

use crate::class::{Class, Handle, Object};
use crate::error::Result;
use crate::hierarchy::ClassTable;

/// The dispatch demo: four handles `a`, `b`, `c` and `d`, all declared as `A`. The first three
/// hold an `A`, a `B` and a `C`. `d` is never assigned.
#[derive(Debug, Clone)]
pub struct Program {
    table: ClassTable,
    handles: Vec<Handle>,
}

impl Program {
    pub fn new() -> Result<Self> {
        let table = ClassTable::demo();

        let mut handles = ["a", "b", "c", "d"]
            .into_iter()
            .map(|name| Handle::new(name, Class::A))
            .collect::<Vec<_>>();

        for (handle, class) in handles.iter_mut().zip(Class::ALL) {
            handle.assign(Object::new(class), &table)?;
        }

        Ok(Self { table, handles })
    }

    pub fn table(&self) -> &ClassTable {
        &self.table
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Calls `call(x)` through every handle in order and stops at the first failure. With the
    /// demo handles this writes `A`, `B` and `C` and then fails on `d`.
    pub fn run<W: Write>(&self, x: i32, out: &mut W) -> Result<()> {
        info!(handles = self.handles.len(), x, "running dispatch demo");
        for handle in &self.handles {
            handle.call(x, out)?;
        }
        Ok(())
    }

    /// Writes which override each handle reaches, then the method table of every class.
    pub fn explain<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", "Handles".bold().underline().blue())?;

        let mut table = Table::new();
        table.add_row(row![
            "Handle".bold(),
            "Declared".bold(),
            "Runtime".bold(),
            "Runs".bold()
        ]);
        for handle in &self.handles {
            match handle.referent() {
                Some(object) => {
                    let runtime = object.class().name();
                    let runs = self
                        .table
                        .resolve(runtime, Class::METHOD)
                        .map_or_else(|| "-".to_string(), |c| format!("{c}.{}", Class::METHOD));
                    table.add_row(row![handle.name(), handle.declared(), runtime, runs]);
                }
                None => {
                    table.add_row(row![
                        handle.name(),
                        handle.declared(),
                        "None".red(),
                        "Operation on None".red()
                    ]);
                }
            }
        }
        table.print(out)?;
        writeln!(out)?;

        writeln!(out, "{}", "Method Tables".bold().underline().blue())?;

        let mut table = Table::new();
        table.add_row(row!["Class".bold(), "Ancestry".bold(), "Slots".bold()]);
        for class in Class::ALL {
            let ancestry = self.table.ancestry(class.name()).join(" -> ");
            let slots = self
                .table
                .method_table(class.name())
                .iter()
                .enumerate()
                .map(|(i, (method, owner))| format!("{i}: {method} => {owner}.{method}"))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(row![class, ancestry, slots]);
        }
        table.print(out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::DispatchError;

    #[test]
    fn handles_are_all_declared_as_a() {
        let program = Program::new().unwrap();
        let names = program
            .handles()
            .iter()
            .map(|h| h.name())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["a", "b", "c", "d"]);
        assert!(program.handles().iter().all(|h| h.declared() == Class::A));
        assert!(program.handles()[3].referent().is_none());
    }

    #[test]
    fn prints_three_labels_then_fails() {
        let program = Program::new().unwrap();
        let mut out = Vec::new();

        let err = program.run(1, &mut out).unwrap_err();
        assert_eq!(String::from_utf8(out).unwrap(), "A\nB\nC\n");
        assert!(matches!(err, DispatchError::OperationOnNone { .. }));
    }

    #[test]
    fn explain_names_the_override_of_each_handle() {
        let program = Program::new().unwrap();
        let mut out = Vec::new();
        program.explain(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let row_of = |handle: &str| {
            out.lines()
                .find(|line| line.starts_with(&format!("| {handle} ")))
                .unwrap_or_else(|| panic!("no row for handle {handle}"))
                .to_string()
        };

        for (handle, runs) in [("a", "A.call"), ("b", "B.call"), ("c", "C.call")] {
            assert!(row_of(handle).contains(runs), "{handle} should run {runs}");
        }
        assert!(row_of("d").contains("Operation on None"));
        assert!(out.contains("C -> B -> A -> object"));
        assert!(out.contains("0: call => C.call"));
    }
}
