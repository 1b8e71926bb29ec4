//! Field-by-field updates from a JSON object.
//!
//! Numeric fields are coerced leniently, text fields are written raw and
//! unknown keys are skipped. Nothing here rejects a request: the report
//! only records which keys landed.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce::coerce_json_int;
use crate::error::CoreError;
use crate::form::normalize_slots;
use crate::sheet::CharacterSheet;

/// Outcome of [`apply_patch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    /// Keys written to the sheet.
    pub applied: Vec<String>,
    /// Keys that named no writable field or carried an unusable value.
    pub ignored: Vec<String>,
}

/// Borrow the body of a patch request as an object.
pub fn patch_object(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    body.as_object()
        .ok_or_else(|| CoreError::Validation("patch body must be a JSON object".to_string()))
}

/// Text form of a raw JSON value: strings as-is, `null` as empty, anything
/// else as its JSON text.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Replace a list field when `value` is an array of slot objects.
fn replace_list<T: DeserializeOwned>(target: &mut Vec<T>, value: &Value) -> bool {
    match serde_json::from_value::<Vec<T>>(value.clone()) {
        Ok(items) => {
            *target = items;
            true
        }
        Err(_) => false,
    }
}

/// Replace the whole skill map with the supplied object, coercing each
/// value to an integer (default 0).
fn replace_skills(target: &mut BTreeMap<String, i32>, value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    *target = object
        .iter()
        .map(|(skill, raw)| (skill.clone(), coerce_json_int(raw, 0)))
        .collect();
    true
}

/// Apply each `field -> value` pair in `patch` to `sheet`.
///
/// - Integer fields are coerced; unparseable values become 0.
/// - `pericias` is replaced wholesale.
/// - List fields are replaced when the value is a list of slot objects;
///   entries without a name are dropped.
/// - Text fields take the raw value.
/// - Anything else (including `id`) is ignored.
pub fn apply_patch(sheet: &mut CharacterSheet, patch: &Map<String, Value>) -> PatchReport {
    let mut report = PatchReport::default();

    for (field, value) in patch {
        let applied = if let Some(slot) = sheet.int_field_mut(field) {
            *slot = coerce_json_int(value, 0);
            true
        } else if let Some(slot) = sheet.text_field_mut(field) {
            *slot = raw_text(value);
            true
        } else {
            match field.as_str() {
                "pericias" => replace_skills(&mut sheet.pericias, value),
                "ataques" => replace_list(&mut sheet.ataques, value),
                "habilidades" => replace_list(&mut sheet.habilidades, value),
                "inventario" => replace_list(&mut sheet.inventario, value),
                "magias" => replace_list(&mut sheet.magias, value),
                _ => false,
            }
        };

        if applied {
            report.applied.push(field.clone());
        } else {
            report.ignored.push(field.clone());
        }
    }

    normalize_slots(sheet);
    report
}
