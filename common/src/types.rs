//! 監査結果の型定義
//!
//! APIのレスポンスは2種類の形を取る:
//! - GroupScores: `{"White": 0.12}` または `{"result": {"White": 0.12}}`
//! - ClosestGroup: `{"closest_group": "White", "distances": {...}}`

use serde_json::{Map, Number, Value};

/// 個別スコア
#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    Number(f64),
    Text(String),
    /// 数値・文字列以外（null・配列など）。保存時に元の値へ戻せるよう保持する
    Other(Value),
}

impl Score {
    /// 表示用文字列（数値は小数4桁固定）
    pub fn display(&self) -> String {
        match self {
            Score::Number(value) => format_score(*value),
            Score::Text(text) => text.clone(),
            Score::Other(value) => value.to_string(),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Score::Number(value) => number_value(*value),
            Score::Text(text) => Value::String(text.clone()),
            Score::Other(value) => value.clone(),
        }
    }
}

/// グループ単位のスコア
#[derive(Debug, Clone, PartialEq)]
pub enum GroupScore {
    Flat(f64),
    Nested(Vec<(String, Score)>),
}

/// 監査結果
#[derive(Debug, Clone, PartialEq)]
pub enum AuditResult {
    /// グループ → スコア（またはサブグループ → スコア）
    GroupScores(Vec<(String, GroupScore)>),
    /// 最も近いグループ + 各グループとの距離
    ClosestGroup {
        closest_group: String,
        distances: Vec<(String, Score)>,
    },
}

impl AuditResult {
    /// サーバーが返した形のJSONに戻す（保存用）
    pub fn to_value(&self) -> Value {
        match self {
            AuditResult::GroupScores(groups) => {
                let map: Map<String, Value> = groups
                    .iter()
                    .map(|(group, score)| {
                        let value = match score {
                            GroupScore::Flat(v) => number_value(*v),
                            GroupScore::Nested(entries) => Value::Object(scores_to_map(entries)),
                        };
                        (group.clone(), value)
                    })
                    .collect();
                Value::Object(map)
            }
            AuditResult::ClosestGroup { closest_group, distances } => {
                let mut map = Map::new();
                map.insert("closest_group".into(), Value::String(closest_group.clone()));
                map.insert("distances".into(), Value::Object(scores_to_map(distances)));
                Value::Object(map)
            }
        }
    }
}

/// スコアを小数4桁で整形
pub fn format_score(value: f64) -> String {
    format!("{:.4}", value)
}

fn scores_to_map(entries: &[(String, Score)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(label, score)| (label.clone(), score.to_value()))
        .collect()
}

fn number_value(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_four_decimals() {
        assert_eq!(format_score(0.1234), "0.1234");
        assert_eq!(format_score(0.12), "0.1200");
        assert_eq!(format_score(1.0), "1.0000");
        assert_eq!(format_score(0.56789), "0.5679");
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::Number(0.45).display(), "0.4500");
        assert_eq!(Score::Text("n/a".to_string()).display(), "n/a");
        assert_eq!(Score::Other(Value::Null).display(), "null");
        assert_eq!(Score::Other(serde_json::json!([1, 2])).display(), "[1,2]");
    }

    #[test]
    fn test_non_string_scores_saved_as_original_json() {
        let result = AuditResult::GroupScores(vec![(
            "result".to_string(),
            GroupScore::Nested(vec![
                ("Other".to_string(), Score::Other(Value::Null)),
                ("Flag".to_string(), Score::Other(Value::Bool(true))),
                ("Note".to_string(), Score::Text("null".to_string())),
            ]),
        )]);

        let json = serde_json::to_string(&result.to_value()).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"result":{"Other":null,"Flag":true,"Note":"null"}}"#);
    }

    #[test]
    fn test_group_scores_to_value_keeps_order() {
        let result = AuditResult::GroupScores(vec![
            ("White".to_string(), GroupScore::Flat(0.5)),
            ("Black".to_string(), GroupScore::Flat(0.25)),
        ]);

        let json = serde_json::to_string(&result.to_value()).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"White":0.5,"Black":0.25}"#);
    }

    #[test]
    fn test_closest_group_to_value() {
        let result = AuditResult::ClosestGroup {
            closest_group: "Asian".to_string(),
            distances: vec![("Asian".to_string(), Score::Number(0.5))],
        };

        let value = result.to_value();
        assert_eq!(value["closest_group"], "Asian");
        assert_eq!(value["distances"]["Asian"], 0.5);
    }
}
