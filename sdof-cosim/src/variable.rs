use std::fmt;

use itertools::Itertools;

/// Name of the interface field carrying the support excitation. It always feeds the solver's
/// root point displacement and is not subject to the allow-list.
pub const ROOT_POINT_DISPLACEMENT: &str = "SCALAR_ROOT_POINT_DISPLACEMENT";

/// Quantities that may be declared as interface data of an SDOF solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CouplingVariable {
    Force,
    Displacement,
    Reaction,
}

impl CouplingVariable {
    pub const ALLOWED: [CouplingVariable; 3] = [
        CouplingVariable::Force,
        CouplingVariable::Displacement,
        CouplingVariable::Reaction,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            CouplingVariable::Force => "SCALAR_FORCE",
            CouplingVariable::Displacement => "SCALAR_DISPLACEMENT",
            CouplingVariable::Reaction => "SCALAR_REACTION",
        }
    }

    /// Match an interface variable name against the allow-list.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALLOWED.into_iter().find(|var| var.name() == name)
    }

    pub fn allowed_names() -> [&'static str; 3] {
        Self::ALLOWED.map(|var| var.name())
    }

    /// The allow-list as a quoted list, e.g. `['SCALAR_FORCE', ...]`.
    pub fn allowed_list() -> String {
        format!(
            "[{}]",
            Self::ALLOWED
                .iter()
                .map(|var| format!("'{}'", var.name()))
                .join(", ")
        )
    }
}

impl fmt::Display for CouplingVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
