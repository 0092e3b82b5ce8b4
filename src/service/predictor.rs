use crate::classifiers::TrainedModel;
use crate::core::features::FeatureVector;
use crate::persistence::{ArtifactError, load_model};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// Body of `POST /predict`. Every field is required.
///
/// Only a JSON object is accepted: a positional array would bind features
/// in whatever order the client sent them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictRequest {
    pub hours: f64,
    pub attendance: f64,
    pub previous_score: f64,
}

impl<'de> Deserialize<'de> for PredictRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PredictRequestVisitor)
    }
}

struct PredictRequestVisitor;

impl<'de> Visitor<'de> for PredictRequestVisitor {
    type Value = PredictRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with hours, attendance and previous_score")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut hours = None;
        let mut attendance = None;
        let mut previous_score = None;

        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.as_str() {
                "hours" => &mut hours,
                "attendance" => &mut attendance,
                "previous_score" => &mut previous_score,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            if slot.is_some() {
                return Err(de::Error::custom(format_args!("duplicate field `{key}`")));
            }
            *slot = Some(map.next_value::<f64>()?);
        }

        Ok(PredictRequest {
            hours: hours.ok_or_else(|| de::Error::missing_field("hours"))?,
            attendance: attendance.ok_or_else(|| de::Error::missing_field("attendance"))?,
            previous_score: previous_score
                .ok_or_else(|| de::Error::missing_field("previous_score"))?,
        })
    }
}

impl From<&PredictRequest> for FeatureVector {
    fn from(r: &PredictRequest) -> Self {
        FeatureVector::new(r.hours, r.attendance, r.previous_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub pass: u8,
}

/// Owns the model loaded at startup. Read-only afterwards, so handlers on
/// any worker share it without locking.
#[derive(Debug)]
pub struct PredictorService {
    model: TrainedModel,
}

impl PredictorService {
    pub fn new(model: TrainedModel) -> Self {
        Self { model }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let model = load_model(path.as_ref())?;
        log::info!(
            "loaded {} model from {}",
            model.kind().label(),
            path.as_ref().display()
        );
        Ok(Self::new(model))
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn predict(&self, request: &PredictRequest) -> PredictResponse {
        PredictResponse {
            pass: self.model.predict(&FeatureVector::from(request)),
        }
    }
}
