use crate::classifiers::TrainedModel;
use crate::persistence::ArtifactError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(unix)]
const ARTIFACT_MODE: u32 = 0o644;

/// Writes `model` to `path`, replacing any previous artifact.
///
/// The JSON is written to a temporary file next to `path` and renamed over
/// it, so readers never observe a partially written model. The artifact is
/// left world-readable (0644 on unix) for a service running as another user.
pub fn save_model<P: AsRef<Path>>(model: &TrainedModel, path: P) -> Result<(), ArtifactError> {
    let path = path.as_ref();
    let io_err = |source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;

    {
        let mut w = BufWriter::new(tmp.as_file());
        serde_json::to_writer(&mut w, model).map_err(ArtifactError::Encode)?;
        w.flush().map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(ARTIFACT_MODE))
            .map_err(io_err)?;
    }
    tmp.persist(path)?;
    Ok(())
}

/// Reads and validates the artifact at `path`.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TrainedModel, ArtifactError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let model: TrainedModel =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    model.validate().map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::{Classifier, LogisticRegression, RandomForest, RandomForestParams};
    use crate::core::features::FeatureVector;
    use crate::testing::dummies::separable_instances;
    use std::fs;
    use tempfile::tempdir;

    fn forest() -> TrainedModel {
        let mut rf = RandomForest::new(RandomForestParams {
            n_trees: 4,
            ..RandomForestParams::default()
        });
        rf.train_on_instances(&separable_instances(24));
        TrainedModel::RandomForest(rf)
    }

    #[test]
    fn save_then_load_preserves_predictions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let model = forest();

        save_model(&model, &path).unwrap();
        let loaded = load_model(&path).unwrap();

        assert_eq!(loaded, model);
        let x = FeatureVector::new(10.0, 95.0, 88.0);
        assert_eq!(loaded.predict(&x), model.predict(&x));
    }

    #[test]
    fn save_overwrites_previous_artifact_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "stale").unwrap();

        let mut lr = LogisticRegression::default();
        lr.train_on_instances(&separable_instances(24));
        save_model(&TrainedModel::LogisticRegression(lr), &path).unwrap();

        assert!(matches!(
            load_model(&path).unwrap(),
            TrainedModel::LogisticRegression(_)
        ));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn saved_artifact_is_readable_by_other_users() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        save_model(&forest(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn missing_artifact_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_model(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }

    #[test]
    fn garbage_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "{\"type\": \"random-forest\", \"params\": 3}").unwrap();
        assert!(matches!(
            load_model(&path).unwrap_err(),
            ArtifactError::Decode { .. }
        ));
    }

    #[test]
    fn structurally_valid_but_untrained_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let untrained = TrainedModel::RandomForest(RandomForest::default());
        fs::write(&path, serde_json::to_string(&untrained).unwrap()).unwrap();
        assert!(matches!(
            load_model(&path).unwrap_err(),
            ArtifactError::Invalid { .. }
        ));
    }
}
