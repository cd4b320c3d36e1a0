//! Symbol tables (component C): the static register-name catalogue
//! merged at construction, and the dynamically discovered variable and
//! handler names built up during tracing.

mod catalog;

use std::collections::{HashMap, HashSet};

use crate::error::Error;

/// The read and write names a register address may carry. A catalogue
/// entry can supply either or both; later catalogues may add the face
/// the earlier ones left empty, but never overwrite a face already set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterNames {
    pub read: Option<&'static str>,
    pub write: Option<&'static str>,
}

/// The three fixed interrupt handler labels. Default to the literal
/// `"0"` for an unused (zero) vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handlers {
    pub nmi: String,
    pub reset: String,
    pub irq: String,
}

impl Default for Handlers {
    fn default() -> Self {
        Self {
            nmi: "0".to_string(),
            reset: "0".to_string(),
            irq: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTables {
    constants: HashMap<u16, RegisterNames>,
    used_constants: HashSet<u16>,
    variables: HashMap<u16, String>,
    used_variables: HashSet<u16>,
    pub handlers: Handlers,
}

impl SymbolTables {
    /// Merges the static audio/controller/video catalogues. Fails with
    /// `DuplicateSymbol` if two catalogues assign conflicting names to
    /// the same read or write face of the same address.
    pub fn new() -> Result<Self, Error> {
        let mut constants: HashMap<u16, RegisterNames> = HashMap::new();
        for entry in catalog::AUDIO
            .iter()
            .chain(catalog::CONTROLLER)
            .chain(catalog::VIDEO)
        {
            let (addr, read, write) = *entry;
            let names = constants.entry(addr).or_default();
            if let Some(r) = read {
                if names.read.is_some_and(|existing| existing != r) {
                    return Err(Error::DuplicateSymbol(addr));
                }
                names.read = Some(r);
            }
            if let Some(w) = write {
                if names.write.is_some_and(|existing| existing != w) {
                    return Err(Error::DuplicateSymbol(addr));
                }
                names.write = Some(w);
            }
        }
        Ok(Self {
            constants,
            used_constants: HashSet::new(),
            variables: HashMap::new(),
            used_variables: HashSet::new(),
            handlers: Handlers::default(),
        })
    }

    #[must_use]
    pub fn lookup(&self, addr: u16) -> Option<&RegisterNames> {
        self.constants.get(&addr)
    }

    /// Looks up the register name for the face the given read/write
    /// flags call for, marking the constant used if found.
    pub fn lookup_face(&mut self, addr: u16, reads: bool, writes: bool) -> Option<&'static str> {
        let names = self.constants.get(&addr)?;
        let name = if writes {
            names.write.or(names.read)
        } else if reads {
            names.read.or(names.write)
        } else {
            names.read.or(names.write)
        };
        if name.is_some() {
            self.used_constants.insert(addr);
        }
        name
    }

    #[must_use]
    pub fn is_constant(&self, addr: u16) -> bool {
        self.constants.contains_key(&addr)
    }

    /// Returns the synthetic variable name for `addr`, allocating
    /// `_var_<hex>` on first reference and reusing it thereafter.
    pub fn variable_name(&mut self, addr: u16) -> &str {
        self.used_variables.insert(addr);
        self.variables
            .entry(addr)
            .or_insert_with(|| format!("_var_{addr:04x}"))
    }

    /// Read-only lookup of a variable name already allocated by tracing,
    /// without allocating a new one. Used by emitters, which must not
    /// mutate symbol state.
    #[must_use]
    pub fn existing_variable_name(&self, addr: u16) -> Option<&str> {
        self.variables.get(&addr).map(String::as_str)
    }

    #[must_use]
    pub fn used_constants(&self) -> impl Iterator<Item = (u16, &RegisterNames)> {
        self.used_constants
            .iter()
            .filter_map(|addr| self.constants.get(addr).map(|n| (*addr, n)))
    }

    #[must_use]
    pub fn used_variables(&self) -> impl Iterator<Item = (u16, &str)> {
        self.used_variables
            .iter()
            .filter_map(|addr| self.variables.get(addr).map(|n| (*addr, n.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_catalogues_without_conflict() {
        let symbols = SymbolTables::new().unwrap();
        assert_eq!(symbols.lookup(0x2002).unwrap().read, Some("PPUSTATUS"));
        // $4017 read face (controller) and write face (audio) coexist.
        let joy2 = symbols.lookup(0x4017).unwrap();
        assert_eq!(joy2.read, Some("JOY2"));
        assert_eq!(joy2.write, Some("FRAME_COUNTER"));
    }

    #[test]
    fn allocates_and_reuses_variable_names() {
        let mut symbols = SymbolTables::new().unwrap();
        let first = symbols.variable_name(0x0010).to_string();
        let second = symbols.variable_name(0x0010).to_string();
        assert_eq!(first, second);
        assert_eq!(first, "_var_0010");
    }

    #[test]
    fn handlers_default_to_zero_literal() {
        let symbols = SymbolTables::new().unwrap();
        assert_eq!(symbols.handlers.nmi, "0");
        assert_eq!(symbols.handlers.irq, "0");
    }
}
