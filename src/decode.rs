use crate::error::DecodeError;
use crate::models::{PromptAnalysis, TechniqueFinding};
use crate::rubric::RubricVariant;
use serde_json::{Map, Value};

/// Decode the model's JSON verdict into a `PromptAnalysis`.
///
/// The wire shape depends on the rubric that issued the request: the
/// advanced rubric reports found/suggested techniques as `{teknik, alasan}`
/// objects, the basic rubric as bare strings. Missing keys and malformed
/// scores are rejected, never defaulted or clamped.
pub fn decode(raw_json: &str, rubric: RubricVariant) -> Result<PromptAnalysis, DecodeError> {
    let root = parse_object(raw_json)?;

    Ok(PromptAnalysis {
        score: decode_score(&root)?,
        task_category: require_str(&root, "jenis_tugas")?,
        applicable_techniques: require_str_list(&root, "teknik_sesuai")?,
        found_techniques: require_findings(&root, "teknik_ditemukan", rubric)?,
        suggested_techniques: require_findings(&root, "teknik_disarankan", rubric)?,
        strengths: require_str_list(&root, "kelebihan")?,
        weaknesses: require_str_list(&root, "kekurangan")?,
        recommendations: require_str_list(&root, "rekomendasi")?,
        improved_prompt: require_str(&root, "versi_perbaikan")?,
    })
}

/// Parse the payload as a single JSON object. If the whole payload is not
/// valid JSON, fall back to the outermost `{...}` span before giving up;
/// models occasionally wrap the object in prose despite the response format.
fn parse_object(raw: &str) -> Result<Map<String, Value>, DecodeError> {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => extract_embedded(raw)?,
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::InvalidJson(format!(
            "expected an object, got {}",
            type_name(&other)
        ))),
    }
}

fn extract_embedded(raw: &str) -> Result<Value, DecodeError> {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => serde_json::from_str(&raw[start..=end])
            .map_err(|err| DecodeError::InvalidJson(err.to_string())),
        _ => Err(DecodeError::InvalidJson(
            "no JSON object found in response".to_string(),
        )),
    }
}

fn require<'a>(root: &'a Map<String, Value>, key: &str) -> Result<&'a Value, DecodeError> {
    root.get(key)
        .ok_or_else(|| DecodeError::MissingField(key.to_string()))
}

/// `skor` must be a JSON integer within 0-100. Fractional, string-typed, or
/// out-of-range values are invalid.
fn decode_score(root: &Map<String, Value>) -> Result<u8, DecodeError> {
    let value = require(root, "skor")?;
    let score = value
        .as_i64()
        .ok_or_else(|| DecodeError::InvalidScore(value.clone()))?;

    if !(0..=100).contains(&score) {
        return Err(DecodeError::InvalidScore(value.clone()));
    }

    Ok(score as u8)
}

fn require_str(root: &Map<String, Value>, key: &str) -> Result<String, DecodeError> {
    require(root, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::WrongType {
            field: key.to_string(),
            expected: "string",
        })
}

fn require_str_list(root: &Map<String, Value>, key: &str) -> Result<Vec<String>, DecodeError> {
    require(root, key)?
        .as_array()
        .ok_or_else(|| DecodeError::WrongType {
            field: key.to_string(),
            expected: "array",
        })?
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| DecodeError::WrongType {
                    field: key.to_string(),
                    expected: "array of strings",
                })
        })
        .collect()
}

fn require_findings(
    root: &Map<String, Value>,
    key: &str,
    rubric: RubricVariant,
) -> Result<Vec<TechniqueFinding>, DecodeError> {
    require(root, key)?
        .as_array()
        .ok_or_else(|| DecodeError::WrongType {
            field: key.to_string(),
            expected: "array",
        })?
        .iter()
        .map(|entry| decode_finding(entry, key, rubric))
        .collect()
}

fn decode_finding(
    entry: &Value,
    key: &str,
    rubric: RubricVariant,
) -> Result<TechniqueFinding, DecodeError> {
    match rubric {
        RubricVariant::Basic => entry
            .as_str()
            .map(TechniqueFinding::named)
            .ok_or_else(|| DecodeError::WrongType {
                field: key.to_string(),
                expected: "array of strings",
            }),
        RubricVariant::Advanced => {
            let obj = entry.as_object().ok_or_else(|| DecodeError::WrongType {
                field: key.to_string(),
                expected: "array of objects",
            })?;

            Ok(TechniqueFinding {
                name: require_str(obj, "teknik")?,
                rationale: require_str(obj, "alasan")?,
            })
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
