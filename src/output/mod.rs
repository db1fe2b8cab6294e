use std::{fmt::Display, io::Write};

use crate::{compute::Compute, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputSpec {
    Step,
    Time,
    Compute(Compute),
}
impl Display for OutputSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputSpec::Step => String::from("step").fmt(f),
            OutputSpec::Time => String::from("time").fmt(f),
            OutputSpec::Compute(c) => c.name().fmt(f),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Usize(usize),
    Float(f64),
}
impl Value {
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Usize(v) => *v as f64,
            Value::Float(v) => *v,
        }
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Usize(v) => v.fmt(f),
            Value::Float(v) => write!(f, "{:.10e}", v),
        }
    }
}

/// Rows of observables recorded during a run
#[derive(Clone, Debug)]
pub struct Output {
    pub every: usize,
    pub values: Vec<OutputSpec>,
    rows: Vec<Vec<Value>>,
}
impl Output {
    pub fn new() -> Self {
        Self {
            every: 100,
            values: vec![
                OutputSpec::Step,
                OutputSpec::Time,
                OutputSpec::Compute(Compute::KineticEnergy),
                OutputSpec::Compute(Compute::PotentialEnergy),
                OutputSpec::Compute(Compute::TotalEnergy),
            ],
            rows: Vec::new(),
        }
    }
    pub fn with_specs(every: usize, values: Vec<OutputSpec>) -> Self {
        assert!(every > 0, "Output interval should be positive");
        Self {
            every,
            values,
            rows: Vec::new(),
        }
    }
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }
    pub fn header(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join("\t")
    }
    /// Column of values recorded for `spec`, if it is part of the output
    pub fn column(&self, spec: &OutputSpec) -> Option<Vec<f64>> {
        let idx = self.values.iter().position(|v| v == spec)?;
        Some(self.rows.iter().map(|row| row[idx].as_f64()).collect())
    }
    pub(crate) fn push(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }
    /// Writes the header and all rows as a tab-separated table
    pub fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", self.header())?;
        for row in &self.rows {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<String>>()
                .join("\t");
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}
impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
