//! Fixed recommendation lists, one high-risk and one low-risk set per
//! disease. Selected by the same 0.5 threshold that classifies the score.

use crate::catalog::DiseaseId;
use crate::engine::RiskLevel;

pub(crate) fn for_risk(disease: DiseaseId, risk: RiskLevel) -> &'static [&'static str] {
    match (disease, risk) {
        (DiseaseId::Diabetes, RiskLevel::High) => &[
            "Schedule an immediate appointment with your healthcare provider",
            "Monitor blood glucose levels regularly",
            "Follow a low-glycemic diet with reduced sugar intake",
            "Engage in regular physical activity (150 minutes per week)",
            "Maintain a healthy weight through diet and exercise",
            "Consider diabetes education classes",
            "Monitor blood pressure and cholesterol levels",
        ],
        (DiseaseId::Diabetes, RiskLevel::Low) => &[
            "Maintain a balanced diet rich in vegetables and whole grains",
            "Exercise regularly to maintain healthy weight",
            "Get annual health screenings including glucose tests",
            "Limit processed foods and sugary beverages",
            "Stay hydrated and get adequate sleep",
            "Manage stress through relaxation techniques",
        ],
        (DiseaseId::Heart, RiskLevel::High) => &[
            "Consult a cardiologist immediately for comprehensive evaluation",
            "Monitor blood pressure and heart rate regularly",
            "Follow a heart-healthy diet low in saturated fats",
            "Take prescribed medications as directed",
            "Quit smoking and limit alcohol consumption",
            "Engage in supervised cardiac rehabilitation if recommended",
            "Learn to recognize heart attack warning signs",
        ],
        (DiseaseId::Heart, RiskLevel::Low) => &[
            "Maintain regular cardiovascular exercise",
            "Follow a Mediterranean-style diet",
            "Keep cholesterol and blood pressure in healthy ranges",
            "Avoid smoking and excessive alcohol",
            "Manage stress through healthy coping strategies",
            "Get regular heart health screenings",
        ],
        (DiseaseId::Parkinsons, RiskLevel::High) => &[
            "Consult a neurologist for comprehensive evaluation",
            "Consider speech therapy for voice-related symptoms",
            "Engage in regular physical therapy and exercise",
            "Join support groups for patients and families",
            "Maintain social connections and mental stimulation",
            "Consider occupational therapy for daily activities",
            "Stay informed about treatment options and research",
        ],
        (DiseaseId::Parkinsons, RiskLevel::Low) => &[
            "Maintain regular physical exercise and movement",
            "Practice good vocal hygiene and speech exercises",
            "Stay mentally active with puzzles and learning",
            "Get adequate sleep and manage stress",
            "Maintain social connections and activities",
            "Consider regular neurological check-ups if family history exists",
        ],
    }
}
