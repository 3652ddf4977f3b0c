use crate::{ast::types::DataType, errors::errors::SemanticErrorKind};

/// Whether a value of type `source` may be stored in a variable of type `target`.
///
/// Equal base types are assignable, and any numeric value may be stored in
/// any numeric variable, narrowing included. An `unknown` source has
/// already been reported, so it is accepted.
pub fn is_assignable(target: DataType, source: DataType) -> bool {
    if source.is_unknown() {
        return true;
    }

    target.base() == source.base() || (target.is_numeric() && source.is_numeric())
}

/// Result type of `left operator right` for `+ - * /`.
pub fn type_of_binary_arithmetic(
    left: DataType,
    operator: &str,
    right: DataType,
) -> Result<DataType, SemanticErrorKind> {
    if left.is_unknown() || right.is_unknown() {
        return Ok(DataType::Unknown);
    }

    let (l, r) = (left.base(), right.base());

    if l.is_numeric() && r.is_numeric() {
        if l == DataType::Double || r == DataType::Double {
            return Ok(DataType::Double);
        }
        return Ok(DataType::Int);
    }

    if operator == "+" && l == DataType::Str && r == DataType::Str {
        return Ok(DataType::Str);
    }

    Err(SemanticErrorKind::InvalidArithmeticOperands {
        left,
        operator: operator.to_string(),
        right,
    })
}

/// Result type of a relational comparison.
pub fn type_of_relational(
    left: DataType,
    operator: &str,
    right: DataType,
) -> Result<DataType, SemanticErrorKind> {
    if left.is_unknown() || right.is_unknown() {
        return Ok(DataType::Unknown);
    }

    if left.base() == right.base() || (left.is_numeric() && right.is_numeric()) {
        return Ok(DataType::Bool);
    }

    Err(SemanticErrorKind::InvalidRelationalOperands {
        left,
        operator: operator.to_string(),
        right,
    })
}

/// Checks a `CHECK`/`REWORK`/`CHECKLIST` condition. Integers count as truthy.
pub fn check_condition(construct: &str, condition: DataType) -> Result<(), SemanticErrorKind> {
    if condition.is_unknown() || condition.is_boolean_like() {
        Ok(())
    } else {
        Err(SemanticErrorKind::NonBooleanCondition {
            construct: construct.to_string(),
            found: condition,
        })
    }
}
