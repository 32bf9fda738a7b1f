//! Closed-form solver for the dilution equation `C1·V1 = C2·V2`.
//!
//! A field equal to exactly `0.0` marks the unknown. Fields are inspected in
//! the fixed order `v1, c1, v2, c2` and the first zero wins. When the winner's
//! partner on the same side is also zero the result is a diagnostic message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order in which fields are checked for the unknown.
const SOLVE_ORDER: [Variable; 4] = [Variable::V1, Variable::C1, Variable::V2, Variable::C2];

const DECIMALS: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    C1,
    V1,
    C2,
    V2,
}

impl Variable {
    /// The other factor of the same side of the equation.
    fn partner(self) -> Self {
        match self {
            Self::C1 => Self::V1,
            Self::V1 => Self::C1,
            Self::C2 => Self::V2,
            Self::V2 => Self::C2,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::C1 => "C1",
            Self::V1 => "V1",
            Self::C2 => "C2",
            Self::V2 => "V2",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DilutionRequest {
    pub c1: f64,
    pub v1: f64,
    pub c2: f64,
    pub v2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DilutionOutcome {
    Solved { variable: Variable, result: f64 },
    Message { message: String },
}

impl DilutionRequest {
    pub fn new(c1: f64, v1: f64, c2: f64, v2: f64) -> Self {
        Self { c1, v1, c2, v2 }
    }

    pub fn get(&self, variable: Variable) -> f64 {
        match variable {
            Variable::C1 => self.c1,
            Variable::V1 => self.v1,
            Variable::C2 => self.c2,
            Variable::V2 => self.v2,
        }
    }

    /// Exactly `0.0` (or `-0.0`) marks the unknown; near-zero values are known.
    pub fn is_unknown(&self, variable: Variable) -> bool {
        self.get(variable) == 0.0
    }

    /// Product of the side of the equation that does not contain `variable`.
    fn opposite_product(&self, variable: Variable) -> f64 {
        match variable {
            Variable::C1 | Variable::V1 => self.c2 * self.v2,
            Variable::C2 | Variable::V2 => self.c1 * self.v1,
        }
    }
}

pub fn solve(request: &DilutionRequest) -> DilutionOutcome {
    let Some(unknown) = SOLVE_ORDER.into_iter().find(|v| request.is_unknown(*v)) else {
        return DilutionOutcome::Message {
            message: "Please leave exactly one value as 0 to calculate it.".to_string(),
        };
    };

    let partner = unknown.partner();
    if request.is_unknown(partner) {
        return DilutionOutcome::Message {
            message: format!("Cannot solve: {} is also 0", partner),
        };
    }

    let result = request.opposite_product(unknown) / request.get(partner);
    DilutionOutcome::Solved {
        variable: unknown,
        result: round4(result),
    }
}

fn round4(value: f64) -> f64 {
    let scaled = value * DECIMALS;
    // Four decimals exceed f64 precision past 1e15, and scaling can overflow to inf.
    if !scaled.is_finite() || value.abs() >= 1e15 {
        return value;
    }
    scaled.round() / DECIMALS
}
