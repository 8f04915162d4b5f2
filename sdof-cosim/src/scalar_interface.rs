use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::{CouplingInterface, CouplingVariable, Error, InterfaceDatum, ROOT_POINT_DISPLACEMENT};

/// In-memory [`CouplingInterface`] holding a bounded history per scalar variable.
#[derive(Clone, Debug)]
pub struct ScalarInterface {
    buffer_size: usize,
    values: IndexMap<String, VecDeque<f64>>,
    data: Vec<InterfaceDatum>,
}

impl ScalarInterface {
    /// Create an empty interface retaining `buffer_size` steps per variable.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is 0.
    pub fn new(buffer_size: usize) -> Self {
        assert!(buffer_size > 0, "buffer_size must be > 0");
        Self {
            buffer_size,
            values: IndexMap::new(),
            data: Vec::new(),
        }
    }

    /// Create an interface with every variable an SDOF solver exchanges registered.
    pub fn for_sdof(buffer_size: usize) -> Self {
        let mut interface = Self::new(buffer_size);
        interface.register_variable(ROOT_POINT_DISPLACEMENT);
        for var in CouplingVariable::ALLOWED {
            interface.register_variable(var.name());
        }
        interface
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Register a variable, initialized to zero at all offsets. Registering twice has no effect.
    pub fn register_variable(&mut self, name: impl Into<String>) {
        let buffer_size = self.buffer_size;
        self.values
            .entry(name.into())
            .or_insert_with(|| std::iter::repeat(0.0).take(buffer_size).collect());
    }

    /// Iterate the registered variable names in registration order.
    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn add_interface_datum(&mut self, datum: InterfaceDatum) {
        self.data.push(datum);
    }

    /// Shift every variable one step back, seeding the new current value with the previous one.
    pub fn advance(&mut self) {
        for buffer in self.values.values_mut() {
            let current = buffer[0];
            buffer.push_front(current);
            buffer.truncate(self.buffer_size);
        }
    }

    fn buffer(&self, name: &str) -> Result<&VecDeque<f64>, Error> {
        self.values
            .get(name)
            .ok_or_else(|| Error::UnknownInterfaceVariable { name: name.into() })
    }

    fn out_of_range(&self, name: &str, offset: usize) -> Error {
        Error::InterfaceOffsetOutOfRange {
            name: name.into(),
            offset,
            depth: self.buffer_size,
        }
    }
}

impl CouplingInterface for ScalarInterface {
    fn get_scalar(&self, variable_name: &str, offset: usize) -> Result<f64, Error> {
        self.buffer(variable_name)?
            .get(offset)
            .copied()
            .ok_or_else(|| self.out_of_range(variable_name, offset))
    }

    fn set_scalar(&mut self, variable_name: &str, offset: usize, value: f64) -> Result<(), Error> {
        let depth = self.buffer_size;
        let slot = self
            .values
            .get_mut(variable_name)
            .ok_or_else(|| Error::UnknownInterfaceVariable {
                name: variable_name.into(),
            })?
            .get_mut(offset)
            .ok_or_else(|| Error::InterfaceOffsetOutOfRange {
                name: variable_name.into(),
                offset,
                depth,
            })?;
        *slot = value;
        Ok(())
    }

    fn list_interface_data(&self, solver_name: &str) -> Vec<InterfaceDatum> {
        self.data
            .iter()
            .filter(|datum| datum.solver_name == solver_name)
            .cloned()
            .collect()
    }
}
