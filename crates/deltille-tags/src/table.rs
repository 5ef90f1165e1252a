//! Injectable family lookup.

use deltille_core::LatticeKind;

use crate::builtins::BUILTIN_FAMILIES;
use crate::TagFamily;

/// Set of tag families available to the renderers.
#[derive(Clone, Debug)]
pub struct CodeTable {
    families: Vec<TagFamily>,
}

impl CodeTable {
    /// Table holding exactly `families`.
    pub fn new(families: impl IntoIterator<Item = TagFamily>) -> Self {
        Self {
            families: families.into_iter().collect(),
        }
    }

    /// Table holding every built-in family.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_FAMILIES)
    }

    /// Family named `name`, regardless of lattice.
    pub fn lookup(&self, name: &str) -> Option<&TagFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Family named `name` that is usable on `lattice`.
    pub fn lookup_for(&self, name: &str, lattice: LatticeKind) -> Option<&TagFamily> {
        self.lookup(name).filter(|f| f.lattice == lattice)
    }

    /// Families usable on `lattice`, in table order.
    pub fn families_for(&self, lattice: LatticeKind) -> impl Iterator<Item = &TagFamily> + '_ {
        self.families.iter().filter(move |f| f.lattice == lattice)
    }

    pub fn families(&self) -> &[TagFamily] {
        &self.families
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::builtin()
    }
}
