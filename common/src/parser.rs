//! APIレスポンスパーサー
//!
//! レスポンス本文のJSONを `AuditResult` に変換する

use crate::error::{Error, Result};
use crate::types::{AuditResult, GroupScore, Score};
use serde_json::{Map, Value};

const CLOSEST_GROUP_KEY: &str = "closest_group";
const DISTANCES_KEY: &str = "distances";

/// レスポンス本文をパース
///
/// # Examples
/// ```
/// use bias_audit_common::parse_audit_response;
///
/// let result = parse_audit_response(r#"{"White": 0.1234}"#).unwrap();
/// assert!(matches!(result, bias_audit_common::AuditResult::GroupScores(_)));
/// ```
pub fn parse_audit_response(body: &str) -> Result<AuditResult> {
    let value: Value = serde_json::from_str(body)?;
    parse_audit_value(value)
}

/// パース済みJSONを `AuditResult` に変換
///
/// - `closest_group` キーを持つオブジェクト → ClosestGroup（`distances` 必須）
/// - その他のオブジェクト → GroupScores
/// - オブジェクト以外 → エラー
pub fn parse_audit_value(value: Value) -> Result<AuditResult> {
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::UnexpectedShape(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            )))
        }
    };

    if let Some(closest_group) = map.remove(CLOSEST_GROUP_KEY) {
        return parse_closest_group(closest_group, &mut map);
    }

    let groups = map
        .into_iter()
        .filter_map(|(group, value)| match value {
            Value::Number(n) => n.as_f64().map(|v| (group, GroupScore::Flat(v))),
            Value::Object(nested) => Some((group, GroupScore::Nested(parse_scores(nested)))),
            // 数値・オブジェクト以外は表示対象外
            _ => None,
        })
        .collect();

    Ok(AuditResult::GroupScores(groups))
}

fn parse_closest_group(closest_group: Value, map: &mut Map<String, Value>) -> Result<AuditResult> {
    let closest_group = match closest_group {
        Value::String(group) => group,
        other => {
            return Err(Error::UnexpectedShape(format!(
                "closest_group must be a string, got {}",
                json_type_name(&other)
            )))
        }
    };

    let distances = match map.remove(DISTANCES_KEY) {
        Some(Value::Object(distances)) => parse_scores(distances),
        Some(other) => {
            return Err(Error::UnexpectedShape(format!(
                "distances must be an object, got {}",
                json_type_name(&other)
            )))
        }
        None => return Err(Error::UnexpectedShape("distances is missing".into())),
    };

    Ok(AuditResult::ClosestGroup { closest_group, distances })
}

fn parse_scores(map: Map<String, Value>) -> Vec<(String, Score)> {
    map.into_iter()
        .map(|(label, value)| {
            let score = match value {
                Value::Number(n) => match n.as_f64() {
                    Some(v) => Score::Number(v),
                    None => Score::Other(Value::Number(n)),
                },
                Value::String(text) => Score::Text(text),
                other => Score::Other(other),
            };
            (label, score)
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
