//! Create-payload validation. Every field is checked and all problems are reported together.

use crate::error::{AppError, FieldError};
use crate::model::NewEmployee;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

pub struct EmployeeValidator;

impl EmployeeValidator {
    /// Turn a JSON body into a [`NewEmployee`]. Unknown keys (including `id`) are ignored.
    pub fn parse(body: Value) -> Result<NewEmployee, AppError> {
        let obj = match body {
            Value::Object(m) => m,
            _ => {
                return Err(AppError::Validation(vec![FieldError::whole_body(
                    "model_type",
                    "Input should be a valid JSON object",
                )]))
            }
        };

        let mut errors = Vec::new();
        let employee_id = required_string(&obj, "employee_id", &mut errors);
        let name = required_string(&obj, "name", &mut errors);
        let email = required_string(&obj, "email", &mut errors);
        let department = required_string(&obj, "department", &mut errors);
        let position = required_string(&obj, "position", &mut errors);
        let base_salary = required_decimal(&obj, "base_salary", &mut errors);

        if let Some(n) = &name {
            if n.is_empty() {
                errors.push(FieldError::body("name", "string_too_short", "String should have at least 1 character"));
            }
        }

        match (employee_id, name, email, department, position, base_salary) {
            (Some(employee_id), Some(name), Some(email), Some(department), Some(position), Some(base_salary))
                if errors.is_empty() =>
            {
                Ok(NewEmployee {
                    employee_id,
                    name,
                    email,
                    department,
                    position,
                    base_salary,
                })
            }
            _ => Err(AppError::Validation(errors)),
        }
    }
}

fn required_string(obj: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::body(field, "missing", "Field required"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::body(field, "string_type", "Input should be a valid string"));
            None
        }
    }
}

fn required_decimal(obj: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<Decimal> {
    let parsed = match obj.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::body(field, "missing", "Field required"));
            return None;
        }
        Some(Value::Number(n)) => decimal_from_str(&n.to_string()).or_else(|| n.as_f64().and_then(decimal_from_f64)),
        // Numeric strings are accepted the same way the number would be.
        Some(Value::String(s)) => decimal_from_str(s.trim()),
        Some(_) => None,
    };
    if parsed.is_none() {
        errors.push(FieldError::body(field, "decimal_type", "Input should be a valid decimal"));
    }
    parsed
}

fn decimal_from_str(s: &str) -> Option<Decimal> {
    Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)).ok()
}

/// Numbers whose scale exceeds what `Decimal` holds (e.g. `1e-30`) are rounded to 28 places.
fn decimal_from_f64(f: f64) -> Option<Decimal> {
    if !f.is_finite() {
        return None;
    }
    Decimal::from_f64(f).or_else(|| Decimal::from_str(&format!("{:.28}", f)).ok())
}
