//! Wizard controller — the linear assessment flow as a pure state machine.
//!
//! `apply(state, event) -> (state, effect)` with no rendering dependency:
//! the presentation layer feeds events in and interprets effects out
//! (re-render, start an assessment, show a notification). Scoring itself
//! happens outside the machine — `BeginAssessment` is handed to the host,
//! which runs Validator + Engine and feeds the outcome back as
//! `AssessmentReady` or `AssessmentFailed`. A failed assessment keeps the
//! entered parameters: the machine stays in `ParameterEntry`.

use crate::catalog::DiseaseId;
use crate::engine::RiskResult;
use crate::patient::PatientInfo;
use crate::validator::RawFields;

#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    /// Landing step: pick a condition.
    Selection,
    /// Capture name/age/gender for the report.
    PatientInfo { disease: DiseaseId },
    /// Clinical parameter form for the selected disease.
    ParameterEntry {
        disease: DiseaseId,
        patient: PatientInfo,
    },
    /// Terminal step; `Reset` starts a new assessment.
    Results {
        disease: DiseaseId,
        patient: PatientInfo,
        result: RiskResult,
    },
}

impl WizardState {
    /// Progress through the flow, for the progress bar.
    pub fn progress_percent(&self) -> u8 {
        match self {
            Self::Selection => 0,
            Self::PatientInfo { .. } => 33,
            Self::ParameterEntry { .. } => 66,
            Self::Results { .. } => 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    SelectDisease(DiseaseId),
    PatientSubmitted(PatientInfo),
    ParametersSubmitted(RawFields),
    AssessmentReady(RiskResult),
    AssessmentFailed(String),
    Back,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEffect {
    None,
    /// State changed; re-render the current step.
    Render,
    /// Run Validator + Engine for this submission and feed the outcome
    /// back as `AssessmentReady`/`AssessmentFailed`.
    BeginAssessment {
        disease: DiseaseId,
        fields: RawFields,
    },
    /// Show a dismissible notification.
    Notify(String),
}

/// Advance the machine by one event.
///
/// Unexpected events for the current state are ignored (unchanged state,
/// `Effect::None`); `Reset` returns to `Selection` from anywhere.
pub fn apply(state: WizardState, event: WizardEvent) -> (WizardState, WizardEffect) {
    use WizardEffect as Effect;
    use WizardEvent as Event;
    use WizardState as State;

    match (state, event) {
        (_, Event::Reset) => (State::Selection, Effect::Render),

        (State::Selection, Event::SelectDisease(disease)) => {
            (State::PatientInfo { disease }, Effect::Render)
        }

        (State::PatientInfo { disease }, Event::PatientSubmitted(patient)) => {
            (State::ParameterEntry { disease, patient }, Effect::Render)
        }
        (State::PatientInfo { .. }, Event::Back) => (State::Selection, Effect::Render),

        (State::ParameterEntry { disease, patient }, Event::ParametersSubmitted(fields)) => (
            State::ParameterEntry { disease, patient },
            Effect::BeginAssessment { disease, fields },
        ),
        (State::ParameterEntry { disease, patient }, Event::AssessmentReady(result)) => (
            State::Results {
                disease,
                patient,
                result,
            },
            Effect::Render,
        ),
        (State::ParameterEntry { disease, patient }, Event::AssessmentFailed(message)) => (
            State::ParameterEntry { disease, patient },
            Effect::Notify(message),
        ),
        (State::ParameterEntry { disease, .. }, Event::Back) => {
            (State::PatientInfo { disease }, Effect::Render)
        }

        // Everything else is a no-op for the current step.
        (state, _) => (state, Effect::None),
    }
}
