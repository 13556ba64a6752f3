//! Risk scoring engine — weighted-threshold scoring over a parameter
//! vector, one rule set per disease.
//!
//! Scoring is pure and stateless: identical vectors always yield identical
//! scores and classifications. The only non-determinism is the reported
//! confidence, isolated behind `ConfidenceEstimator` (see `confidence`).

pub mod confidence;
mod recommendations;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{DiseaseCatalog, DiseaseId};
use crate::validator::ParameterVector;

pub use confidence::{ConfidenceEstimator, FixedConfidence, JitterConfidence};

/// Scores strictly above this classify as high risk; 0.5 exactly is low.
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Parameter vector has {actual} values, expected {expected}")]
    VectorLength { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            other => Err(format!("Invalid risk level: {other}")),
        }
    }
}

/// One assessment outcome. Produced per submission, consumed by the
/// presentation layer or exported as a report, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk: RiskLevel,
    /// Accumulated weighted score, clamped to [0, 1].
    pub score: f64,
    /// Jittered percentage in [80, 100]; synthetic, see `confidence`.
    pub confidence: u8,
    pub message: String,
    pub recommendations: Vec<String>,
}

/// Stateless scoring engine. Holds the catalog only for parameter counts
/// and display names.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    catalog: Arc<DiseaseCatalog>,
}

impl RiskEngine {
    pub fn new(catalog: Arc<DiseaseCatalog>) -> Self {
        Self { catalog }
    }

    /// Score with the production jitter source.
    pub fn score(
        &self,
        disease: DiseaseId,
        vector: &ParameterVector,
    ) -> Result<RiskResult, EngineError> {
        self.score_with(disease, vector, &mut JitterConfidence::thread_rng())
    }

    /// Score with an injected confidence source (seeded or fixed in tests).
    pub fn score_with<C: ConfidenceEstimator>(
        &self,
        disease: DiseaseId,
        vector: &ParameterVector,
        confidence: &mut C,
    ) -> Result<RiskResult, EngineError> {
        let definition = self.catalog.get(disease);
        let expected = definition.parameters.len();
        if vector.len() != expected {
            return Err(EngineError::VectorLength {
                expected,
                actual: vector.len(),
            });
        }

        let raw = match disease {
            DiseaseId::Diabetes => diabetes_risk(vector.as_slice()),
            DiseaseId::Heart => heart_risk(vector.as_slice()),
            DiseaseId::Parkinsons => parkinsons_risk(vector.as_slice()),
        };
        let score = raw.clamp(0.0, 1.0);
        let risk = if score > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Low
        };

        let message = match risk {
            RiskLevel::High => format!(
                "Based on the provided parameters, there is an elevated risk for {}. \
                 Please consult with a healthcare professional for proper evaluation.",
                definition.name
            ),
            RiskLevel::Low => format!(
                "Based on the provided parameters, the risk for {} appears to be low. \
                 Continue maintaining healthy lifestyle habits.",
                definition.name
            ),
        };

        Ok(RiskResult {
            risk,
            score,
            confidence: confidence.estimate(),
            message,
            recommendations: recommendations::for_risk(disease, risk)
                .iter()
                .map(|r| r.to_string())
                .collect(),
        })
    }
}

/// Vector: [pregnancies, glucose, bloodpressure, skinthickness, insulin,
/// bmi, pedigree, age]. Glucose is the dominant factor.
fn diabetes_risk(values: &[f64]) -> f64 {
    let &[_pregnancies, glucose, blood_pressure, _skin_thickness, insulin, bmi, pedigree, age] =
        values
    else {
        return 0.0;
    };

    let mut risk = 0.0;

    if glucose > 140.0 {
        risk += 0.30;
    } else if glucose > 100.0 {
        risk += 0.15;
    }

    if bmi > 30.0 {
        risk += 0.20;
    } else if bmi > 25.0 {
        risk += 0.10;
    }

    if age > 45.0 {
        risk += 0.15;
    } else if age > 35.0 {
        risk += 0.10;
    }

    if blood_pressure > 90.0 {
        risk += 0.10;
    }
    if pedigree > 0.5 {
        risk += 0.10;
    }
    if insulin > 200.0 {
        risk += 0.10;
    }

    risk
}

/// Vector: [age, sex, cp, trestbps, chol, fbs, restecg, thalach, exang,
/// oldpeak, slope, ca, thal].
fn heart_risk(values: &[f64]) -> f64 {
    let &[age, sex, cp, trestbps, chol, _fbs, _restecg, _thalach, exang, oldpeak, _slope, ca, _thal] =
        values
    else {
        return 0.0;
    };

    let mut risk = 0.0;

    if age > 55.0 {
        risk += 0.20;
    } else if age > 45.0 {
        risk += 0.10;
    }

    if sex == 1.0 {
        risk += 0.10;
    }
    // cp == 3: typical angina
    if cp == 3.0 {
        risk += 0.15;
    }
    if trestbps > 140.0 {
        risk += 0.15;
    }
    if chol > 240.0 {
        risk += 0.10;
    }
    if exang == 1.0 {
        risk += 0.10;
    }
    if oldpeak > 2.0 {
        risk += 0.10;
    }
    if ca > 0.0 {
        risk += 0.10;
    }

    risk
}

/// Vector: [fo, fhi, flo, jitter, shimmer, hnr, rpde, dfa, spread1,
/// spread2, d2, ppe]. Voice instability measures dominate; HNR is the one
/// inverted factor (noise drowns harmonics at low values).
fn parkinsons_risk(values: &[f64]) -> f64 {
    let &[_fo, _fhi, _flo, jitter, shimmer, hnr, rpde, dfa, _spread1, _spread2, _d2, ppe] = values
    else {
        return 0.0;
    };

    let mut risk = 0.0;

    if jitter > 0.01 {
        risk += 0.20;
    }
    if shimmer > 0.05 {
        risk += 0.20;
    }
    if hnr < 15.0 {
        risk += 0.20;
    }
    if rpde > 0.6 {
        risk += 0.15;
    }
    if dfa > 0.8 {
        risk += 0.15;
    }
    if ppe > 0.3 {
        risk += 0.10;
    }

    risk
}
