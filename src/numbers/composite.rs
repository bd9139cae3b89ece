// Maturity number: Life Path + Expression

use crate::error::{EngineError, Result};
use crate::numbers::InsightType;
use crate::reducer::{is_reduced, reduce};

/// reduce(life_path + expression).
///
/// Both inputs must already be calculated. A missing input is a sequencing
/// error (`MissingDependency`), not bad data.
pub fn maturity(life_path: Option<u32>, expression: Option<u32>) -> Result<u32> {
    let life_path = life_path.ok_or(EngineError::MissingDependency {
        target: InsightType::Maturity,
        needed: InsightType::LifePath,
    })?;
    let expression = expression.ok_or(EngineError::MissingDependency {
        target: InsightType::Maturity,
        needed: InsightType::Expression,
    })?;

    for value in [life_path, expression] {
        if !is_reduced(value) {
            return Err(EngineError::InvalidNumber(value));
        }
    }

    reduce(life_path + expression)
}
