//! Disease catalog — the static registry of assessable conditions.
//!
//! Each `DiseaseDefinition` carries an ordered list of `ParameterSpec`s.
//! The order is load-bearing: it defines the positional mapping from a
//! submitted form into the scoring vector consumed by the risk engine.
//! The catalog is built once at startup and shared by `Arc`; it is never
//! mutated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Unknown disease: {0}")]
    UnknownDisease(String),
}

/// The closed set of assessable conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseId {
    Diabetes,
    Heart,
    Parkinsons,
}

impl DiseaseId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Heart => "heart",
            Self::Parkinsons => "parkinsons",
        }
    }
}

impl std::fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DiseaseId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diabetes" => Ok(Self::Diabetes),
            "heart" => Ok(Self::Heart),
            "parkinsons" => Ok(Self::Parkinsons),
            other => Err(CatalogError::UnknownDisease(other.to_string())),
        }
    }
}

/// One clinical input field: bounds, label, requiredness.
///
/// `step` and the display strings are informational for form-rendering
/// clients; the engine never reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterSpec {
    pub id: String,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl ParameterSpec {
    /// New required parameter. Builders below fill in the rest.
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            required: true,
            min: None,
            max: None,
            step: None,
            placeholder: None,
            help: None,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// One assessable condition with its ordered parameter list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseDefinition {
    pub id: DiseaseId,
    pub name: String,
    pub description: String,
    /// Screening-card blurbs shown on the selection step.
    pub features: Vec<String>,
    /// Ordered: index i maps to position i of the scoring vector.
    pub parameters: Vec<ParameterSpec>,
}

/// Read-only registry of disease definitions, populated once at startup.
#[derive(Debug, Clone)]
pub struct DiseaseCatalog {
    diseases: Vec<DiseaseDefinition>,
}

impl DiseaseCatalog {
    /// All definitions in stable order (diabetes, heart, parkinsons).
    pub fn list(&self) -> &[DiseaseDefinition] {
        &self.diseases
    }

    /// Definition for a known id. Infallible: the id enum is closed and
    /// `builtin()` covers every variant.
    pub fn get(&self, id: DiseaseId) -> &DiseaseDefinition {
        self.diseases
            .iter()
            .find(|d| d.id == id)
            .expect("builtin catalog covers every DiseaseId")
    }

    /// Wire-side lookup by raw string id.
    pub fn get_by_str(&self, id: &str) -> Result<&DiseaseDefinition, CatalogError> {
        let id: DiseaseId = id.parse()?;
        Ok(self.get(id))
    }

    /// The literal three-entry table.
    pub fn builtin() -> Self {
        Self {
            diseases: vec![diabetes(), heart(), parkinsons()],
        }
    }
}

fn diabetes() -> DiseaseDefinition {
    DiseaseDefinition {
        id: DiseaseId::Diabetes,
        name: "Diabetes".into(),
        description: "Assess your risk of developing Type 2 diabetes based on key health indicators."
            .into(),
        features: vec![
            "Blood glucose analysis".into(),
            "BMI assessment".into(),
            "Family history evaluation".into(),
            "Lifestyle factor analysis".into(),
        ],
        parameters: vec![
            ParameterSpec::new("pregnancies", "Number of Pregnancies")
                .range(0.0, 20.0)
                .placeholder("0")
                .help("Total number of pregnancies (0 if male or never pregnant)"),
            ParameterSpec::new("glucose", "Glucose Level (mg/dL)")
                .range(0.0, 300.0)
                .placeholder("120")
                .help("Plasma glucose concentration (fasting: 70-100 mg/dL normal)"),
            ParameterSpec::new("bloodpressure", "Blood Pressure (mmHg)")
                .range(0.0, 200.0)
                .placeholder("80")
                .help("Diastolic blood pressure (normal: 60-80 mmHg)"),
            ParameterSpec::new("skinthickness", "Skin Thickness (mm)")
                .range(0.0, 100.0)
                .placeholder("20")
                .help("Triceps skin fold thickness"),
            ParameterSpec::new("insulin", "Insulin Level (\u{3bc}U/mL)")
                .range(0.0, 900.0)
                .placeholder("80")
                .help("2-Hour serum insulin (normal: 16-166 \u{3bc}U/mL)"),
            ParameterSpec::new("bmi", "BMI (kg/m\u{b2})")
                .range(10.0, 70.0)
                .step(0.1)
                .placeholder("25.0")
                .help("Body Mass Index (normal: 18.5-24.9)"),
            ParameterSpec::new("pedigree", "Diabetes Pedigree Function")
                .range(0.0, 3.0)
                .step(0.001)
                .placeholder("0.5")
                .help("Genetic predisposition score (0.0-2.5 typical range)"),
            ParameterSpec::new("age", "Age (years)")
                .range(1.0, 120.0)
                .placeholder("30")
                .help("Current age in years"),
        ],
    }
}

fn heart() -> DiseaseDefinition {
    DiseaseDefinition {
        id: DiseaseId::Heart,
        name: "Heart Disease".into(),
        description: "Evaluate your cardiovascular health and heart disease risk factors.".into(),
        features: vec![
            "Cholesterol level analysis".into(),
            "Blood pressure assessment".into(),
            "ECG interpretation".into(),
            "Exercise tolerance evaluation".into(),
        ],
        parameters: vec![
            ParameterSpec::new("age", "Age (years)")
                .range(1.0, 120.0)
                .placeholder("50")
                .help("Current age in years"),
            ParameterSpec::new("sex", "Sex (0=Female, 1=Male)")
                .range(0.0, 1.0)
                .placeholder("1")
                .help("Biological sex: 0 for female, 1 for male"),
            ParameterSpec::new("cp", "Chest Pain Type (0-3)")
                .range(0.0, 3.0)
                .placeholder("2")
                .help("0: Asymptomatic, 1: Atypical angina, 2: Non-anginal, 3: Typical angina"),
            ParameterSpec::new("trestbps", "Resting Blood Pressure (mmHg)")
                .range(80.0, 200.0)
                .placeholder("120")
                .help("Resting systolic blood pressure (normal: 90-140 mmHg)"),
            ParameterSpec::new("chol", "Cholesterol Level (mg/dL)")
                .range(100.0, 600.0)
                .placeholder("200")
                .help("Serum cholesterol (normal: <200 mg/dL)"),
            ParameterSpec::new("fbs", "Fasting Blood Sugar (0=Normal, 1=High)")
                .range(0.0, 1.0)
                .placeholder("0")
                .help("1 if fasting blood sugar > 120 mg/dL, 0 otherwise"),
            ParameterSpec::new("restecg", "Resting ECG (0-2)")
                .range(0.0, 2.0)
                .placeholder("0")
                .help("0: Normal, 1: ST-T abnormality, 2: Left ventricular hypertrophy"),
            ParameterSpec::new("thalach", "Maximum Heart Rate")
                .range(60.0, 220.0)
                .placeholder("150")
                .help("Maximum heart rate achieved during exercise"),
            ParameterSpec::new("exang", "Exercise Induced Angina (0=No, 1=Yes)")
                .range(0.0, 1.0)
                .placeholder("0")
                .help("Exercise induced angina: 0 for no, 1 for yes"),
            ParameterSpec::new("oldpeak", "ST Depression")
                .range(0.0, 10.0)
                .step(0.1)
                .placeholder("1.0")
                .help("ST depression induced by exercise relative to rest"),
            ParameterSpec::new("slope", "ST Segment Slope (0-2)")
                .range(0.0, 2.0)
                .placeholder("1")
                .help("0: Downsloping, 1: Flat, 2: Upsloping"),
            ParameterSpec::new("ca", "Major Vessels (0-4)")
                .range(0.0, 4.0)
                .placeholder("0")
                .help("Number of major vessels colored by fluoroscopy"),
            ParameterSpec::new("thal", "Thalassemia (0-3)")
                .range(0.0, 3.0)
                .placeholder("2")
                .help("0: Normal, 1: Fixed defect, 2: Reversible defect, 3: Not described"),
        ],
    }
}

fn parkinsons() -> DiseaseDefinition {
    DiseaseDefinition {
        id: DiseaseId::Parkinsons,
        name: "Parkinson's Disease".into(),
        description:
            "Analyze voice patterns and motor symptoms to assess Parkinson's disease risk.".into(),
        features: vec![
            "Voice pattern analysis".into(),
            "Motor symptom assessment".into(),
            "Tremor evaluation".into(),
            "Speech characteristic analysis".into(),
        ],
        parameters: vec![
            ParameterSpec::new("fo", "Average Vocal Frequency (Hz)")
                .range(50.0, 300.0)
                .step(0.001)
                .placeholder("150.0")
                .help("MDVP:Fo(Hz) - Average vocal fundamental frequency"),
            ParameterSpec::new("fhi", "Maximum Vocal Frequency (Hz)")
                .range(50.0, 600.0)
                .step(0.001)
                .placeholder("200.0")
                .help("MDVP:Fhi(Hz) - Maximum vocal fundamental frequency"),
            ParameterSpec::new("flo", "Minimum Vocal Frequency (Hz)")
                .range(50.0, 300.0)
                .step(0.001)
                .placeholder("100.0")
                .help("MDVP:Flo(Hz) - Minimum vocal fundamental frequency"),
            ParameterSpec::new("jitter", "Jitter Percentage (%)")
                .range(0.0, 10.0)
                .step(0.00001)
                .placeholder("0.005")
                .help("MDVP:Jitter(%) - Frequency variation measure"),
            ParameterSpec::new("shimmer", "Shimmer")
                .range(0.0, 1.0)
                .step(0.00001)
                .placeholder("0.03")
                .help("MDVP:Shimmer - Amplitude variation measure"),
            ParameterSpec::new("hnr", "Harmonics-to-Noise Ratio")
                .range(0.0, 40.0)
                .step(0.001)
                .placeholder("20.0")
                .help("HNR - Ratio of noise to tonal components in voice"),
            ParameterSpec::new("rpde", "RPDE")
                .range(0.0, 1.0)
                .step(0.000001)
                .placeholder("0.5")
                .help("Recurrence Period Density Entropy measure"),
            ParameterSpec::new("dfa", "DFA")
                .range(0.0, 1.0)
                .step(0.000001)
                .placeholder("0.7")
                .help("Detrended Fluctuation Analysis"),
            ParameterSpec::new("spread1", "Spread1")
                .range(-10.0, 0.0)
                .step(0.000001)
                .placeholder("-5.0")
                .help("Nonlinear dynamical complexity measure"),
            ParameterSpec::new("spread2", "Spread2")
                .range(0.0, 1.0)
                .step(0.000001)
                .placeholder("0.2")
                .help("Nonlinear dynamical complexity measure"),
            ParameterSpec::new("d2", "D2")
                .range(0.0, 5.0)
                .step(0.000001)
                .placeholder("2.0")
                .help("Correlation dimension"),
            ParameterSpec::new("ppe", "PPE")
                .range(0.0, 1.0)
                .step(0.000001)
                .placeholder("0.2")
                .help("Pitch Period Entropy"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_three_diseases_in_stable_order() {
        let catalog = DiseaseCatalog::builtin();
        let ids: Vec<DiseaseId> = catalog.list().iter().map(|d| d.id).collect();
        assert_eq!(
            ids,
            vec![DiseaseId::Diabetes, DiseaseId::Heart, DiseaseId::Parkinsons]
        );
    }

    #[test]
    fn parameter_counts_match_scoring_vectors() {
        let catalog = DiseaseCatalog::builtin();
        assert_eq!(catalog.get(DiseaseId::Diabetes).parameters.len(), 8);
        assert_eq!(catalog.get(DiseaseId::Heart).parameters.len(), 13);
        assert_eq!(catalog.get(DiseaseId::Parkinsons).parameters.len(), 12);
    }

    #[test]
    fn diabetes_parameter_order_is_positional() {
        let catalog = DiseaseCatalog::builtin();
        let ids: Vec<&str> = catalog
            .get(DiseaseId::Diabetes)
            .parameters
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "pregnancies",
                "glucose",
                "bloodpressure",
                "skinthickness",
                "insulin",
                "bmi",
                "pedigree",
                "age"
            ]
        );
    }

    #[test]
    fn all_builtin_parameters_are_required() {
        let catalog = DiseaseCatalog::builtin();
        for disease in catalog.list() {
            for param in &disease.parameters {
                assert!(param.required, "{}.{} should be required", disease.id, param.id);
            }
        }
    }

    #[test]
    fn parameter_ids_unique_within_disease() {
        let catalog = DiseaseCatalog::builtin();
        for disease in catalog.list() {
            let mut seen = std::collections::HashSet::new();
            for param in &disease.parameters {
                assert!(seen.insert(&param.id), "duplicate {}.{}", disease.id, param.id);
            }
        }
    }

    #[test]
    fn get_by_str_resolves_known_ids() {
        let catalog = DiseaseCatalog::builtin();
        assert_eq!(catalog.get_by_str("heart").unwrap().id, DiseaseId::Heart);
        let err = catalog.get_by_str("influenza").unwrap_err();
        assert_eq!(err, CatalogError::UnknownDisease("influenza".into()));
    }

    #[test]
    fn disease_id_round_trips_through_serde() {
        let json = serde_json::to_string(&DiseaseId::Parkinsons).unwrap();
        assert_eq!(json, "\"parkinsons\"");
        let back: DiseaseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DiseaseId::Parkinsons);
    }

    #[test]
    fn spread1_allows_negative_range() {
        let catalog = DiseaseCatalog::builtin();
        let spread1 = catalog
            .get(DiseaseId::Parkinsons)
            .parameters
            .iter()
            .find(|p| p.id == "spread1")
            .unwrap();
        assert_eq!(spread1.min, Some(-10.0));
        assert_eq!(spread1.max, Some(0.0));
    }
}
