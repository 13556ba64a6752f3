//! Plain-text assessment report — the export a user downloads after the
//! results step, and the parser that reads one back.
//!
//! The template is fixed: patient block, assessment type, results block
//! (risk uppercased), hyphen-bulleted recommendations, disclaimer,
//! generation timestamp. `parse` recovers the fields that identify an
//! assessment (name, risk level, confidence) and must round-trip exactly
//! with `render`.

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use thiserror::Error;

use crate::engine::{RiskLevel, RiskResult};
use crate::patient::PatientInfo;

#[derive(Error, Debug, PartialEq)]
pub enum ReportError {
    #[error("Report is missing the {0} field")]
    MissingField(&'static str),
    #[error("Malformed {field} value: {value}")]
    Malformed { field: &'static str, value: String },
}

/// Fields recovered from an exported report.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub patient_name: String,
    pub risk: RiskLevel,
    pub confidence: u8,
}

/// Render the downloadable report.
pub fn render(
    patient: &PatientInfo,
    disease_name: &str,
    result: &RiskResult,
    generated_at: DateTime<Utc>,
) -> String {
    let recommendations = result
        .recommendations
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\
HEALTHGUARD AI - HEALTH ASSESSMENT REPORT
=========================================

Patient Information:
- Name: {name}
- Age: {age}
- Gender: {gender}
- Assessment Date: {date}

Assessment Type: {disease}

Results:
- Risk Level: {risk}
- Confidence: {confidence}%
- Assessment: {message}

Recommendations:
{recommendations}

IMPORTANT DISCLAIMER:
This assessment is for informational purposes only and should not replace
professional medical advice, diagnosis, or treatment. Always consult with
qualified healthcare providers regarding your health concerns.

Generated by HealthGuard AI - {generated}",
        name = patient.name,
        age = patient.age,
        gender = patient.gender.report_label(),
        date = generated_at.format("%Y-%m-%d"),
        disease = disease_name,
        risk = result.risk.as_str().to_uppercase(),
        confidence = result.confidence,
        message = result.message,
        recommendations = recommendations,
        generated = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Download filename for a report generated at the given instant.
pub fn suggested_filename(generated_at: DateTime<Utc>) -> String {
    format!("healthguard-report-{}.txt", generated_at.timestamp_millis())
}

/// Parse an exported report back into its identifying fields.
pub fn parse(text: &str) -> Result<ParsedReport, ReportError> {
    let patient_name = capture(text, r"(?m)^- Name: (.+)$", "Name")?;
    let risk_raw = capture(text, r"(?m)^- Risk Level: (\S+)$", "Risk Level")?;
    let confidence_raw = capture(text, r"(?m)^- Confidence: (\d+)%$", "Confidence")?;

    let risk: RiskLevel = risk_raw.parse().map_err(|_| ReportError::Malformed {
        field: "Risk Level",
        value: risk_raw.clone(),
    })?;
    let confidence: u8 = confidence_raw.parse().map_err(|_| ReportError::Malformed {
        field: "Confidence",
        value: confidence_raw.clone(),
    })?;

    Ok(ParsedReport {
        patient_name,
        risk,
        confidence,
    })
}

fn capture(text: &str, pattern: &str, field: &'static str) -> Result<String, ReportError> {
    let re = Regex::new(pattern).unwrap();
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(ReportError::MissingField(field))
}
