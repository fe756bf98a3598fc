use crate::error::GeoIntError;
use crate::orchestrator::QueryOutcome;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Keeps the most recent successful outcome on disk so a later run can
/// redisplay it. Written only after a success, never cleared.
pub struct LastResultFile {
    path: PathBuf,
}

impl LastResultFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `Ok(None)` when nothing has been stored yet.
    pub fn load(&self) -> Result<Option<QueryOutcome>, GeoIntError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn store(&self, outcome: &QueryOutcome) -> Result<(), GeoIntError> {
        let text = serde_json::to_string_pretty(outcome)?;
        fs::write(&self.path, text)?;
        log::info!("💾 Last result saved to '{}'", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Domain;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("geoint-{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_file_means_no_result() {
        let file = LastResultFile::new(scratch_path("missing"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn stored_result_is_reloaded() {
        let path = scratch_path("stored");
        let file = LastResultFile::new(&path);
        let outcome = QueryOutcome {
            domain: Domain::Traffic,
            url: "https://example/ows?daily_ts='2024-01-01T00:00:00Z'".into(),
        };
        file.store(&outcome).unwrap();
        assert_eq!(file.load().unwrap(), Some(outcome));

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"domain\": \"traffic\""));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = scratch_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let err = LastResultFile::new(&path).load().unwrap_err();
        assert!(matches!(err, GeoIntError::Json(_)));
        let _ = fs::remove_file(path);
    }
}
