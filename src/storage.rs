use crate::dates::day_key;
use crate::errors::{AppError, ImportError};
use crate::models::TrackingState;
use chrono::NaiveDate;
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

/// Reads the state file, falling back to a fresh default state on any failure.
pub async fn load_state(path: &Path, today: NaiveDate) -> TrackingState {
    match fs::read(path).await {
        Ok(bytes) => match parse_state(&bytes, today) {
            Ok(state) => state,
            Err(err) => {
                error!("failed to parse data file: {err}");
                TrackingState::default_for(today)
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            TrackingState::default_for(today)
        }
        Err(err) => {
            error!("failed to read data file: {err}");
            TrackingState::default_for(today)
        }
    }
}

pub async fn persist_state(path: &Path, state: &TrackingState) -> Result<(), AppError> {
    let payload = export_state(state).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Parses an uploaded export file. The text must be UTF-8.
pub fn import_state(raw: impl AsRef<[u8]>, today: NaiveDate) -> Result<TrackingState, ImportError> {
    let text = std::str::from_utf8(raw.as_ref())?;
    parse_state(text.as_bytes(), today)
}

pub fn export_state(state: &TrackingState) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(state)
}

pub fn export_file_name(today: NaiveDate) -> String {
    format!("fitness-tracker-export-{}.json", day_key(today))
}

fn parse_state(bytes: &[u8], today: NaiveDate) -> Result<TrackingState, ImportError> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Object(stored) => Ok(TrackingState::merge_over_defaults(
            &stored,
            TrackingState::default_for(today),
        )),
        other => {
            let found = json_kind(&other);
            warn!("rejecting state blob with top-level {found}");
            Err(ImportError::InvalidShape(found))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::next_saturday;
    use std::path::PathBuf;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "fitness_tracker_{tag}_{}_{nanos}.json",
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn load_missing_file_gives_defaults() {
        let state = load_state(&temp_path("missing"), today()).await;
        assert_eq!(state, TrackingState::default_for(today()));
    }

    #[tokio::test]
    async fn load_corrupt_file_gives_defaults() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();

        let state = load_state(&path, today()).await;
        assert_eq!(state.tracking_start_date, next_saturday(today()));
        assert!(state.plank_completions.is_empty());
        assert!(state.workout_completions.is_empty());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persist_then_load_keeps_state() {
        let path = temp_path("roundtrip");
        let mut state = TrackingState::with_start(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        state.plank_completions.insert("2024-06-10".into(), true);
        state.workout_completions.insert("2024-06-11".into(), true);

        persist_state(&path, &state).await.unwrap();
        assert_eq!(load_state(&path, today()).await, state);

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn load_partial_blob_merges_defaults() {
        let path = temp_path("partial");
        fs::write(&path, br#"{ "plankCompletions": { "2024-06-10": true } }"#)
            .await
            .unwrap();

        let state = load_state(&path, today()).await;
        assert_eq!(state.tracking_start_date, next_saturday(today()));
        assert_eq!(state.plank_completions.len(), 1);
        assert!(state.workout_completions.is_empty());

        let _ = fs::remove_file(&path).await;
    }

    #[test]
    fn import_rejects_non_objects() {
        assert!(matches!(
            import_state("[1, 2, 3]", today()),
            Err(ImportError::InvalidShape("an array"))
        ));
        assert!(matches!(
            import_state("null", today()),
            Err(ImportError::InvalidShape("null"))
        ));
        assert!(matches!(
            import_state("trailing {", today()),
            Err(ImportError::Parse(_))
        ));
    }

    #[test]
    fn import_rejects_text_that_is_not_utf8() {
        let raw: &[u8] = &[b'{', 0xff, 0xfe, b'}'];
        assert!(matches!(
            import_state(raw, today()),
            Err(ImportError::Encoding(_))
        ));
    }

    #[test]
    fn exported_state_imports_unchanged() {
        let mut state = TrackingState::with_start(NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
        state.plank_completions.insert("2024-05-04".into(), true);
        let bytes = export_state(&state).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(import_state(&text, today()).unwrap(), state);
    }

    #[test]
    fn export_file_name_embeds_today() {
        assert_eq!(
            export_file_name(today()),
            "fitness-tracker-export-2024-06-12.json"
        );
    }
}
