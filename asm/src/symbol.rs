use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Error;
use arch::symbol::PREDEFINED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub addr: u16,
}

/// Outcome of `resolve_or_allocate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Bound(u16),
    Allocated(u16),
}

impl Binding {
    pub fn addr(self) -> u16 {
        match self {
            Binding::Bound(addr) | Binding::Allocated(addr) => addr,
        }
    }
}

/// Name -> address, kept in binding order. A bound name is never rebound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    /// Fresh table with the predefined registers and I/O addresses.
    pub fn new() -> Self {
        SymbolTable(
            PREDEFINED
                .iter()
                .map(|&(name, addr)| {
                    let kind = SymbolKind::Predefined;
                    (name.to_string(), Symbol { kind, addr })
                })
                .collect(),
        )
    }

    pub fn bind_label(&mut self, name: &str, addr: u16, line: usize) -> Result<(), Error> {
        if self.0.contains_key(name) {
            return Err(Error::DuplicateLabel {
                name: name.to_string(),
                line,
            });
        }
        let kind = SymbolKind::Label;
        self.0.insert(name.to_string(), Symbol { kind, addr });
        Ok(())
    }

    /// Returns the existing address, or binds `name` to `next_free`.
    /// On `Binding::Allocated` the caller advances its allocator.
    pub fn resolve_or_allocate(&mut self, name: &str, next_free: u16) -> Binding {
        match self.lookup(name) {
            Some(addr) => Binding::Bound(addr),
            None => {
                let kind = SymbolKind::Variable;
                self.0.insert(name.to_string(), Symbol { kind, addr: next_free });
                Binding::Allocated(next_free)
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|sym| sym.addr)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
