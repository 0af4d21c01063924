use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed, categorical profile attribute.
pub trait Attribute: Sized + Copy + FromStr<Err = ScoringError> + 'static {
    /// Intake field name as it appears on the profile.
    const FIELD: &'static str;
    /// Every value of the attribute, in declaration order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
}

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Attribute for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ScoringError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(ScoringError::InvalidAttributeValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// Student attributes

attribute_enum! {
    /// How the student prefers to learn new skills
    LearningMethod, field = "learningMethod" {
        HandsOn => "hands-on",
        StepByStep => "step-by-step",
        Independent => "independent",
    }
}

attribute_enum! {
    /// When the student wants feedback
    FeedbackPreference, field = "feedbackPreference" {
        RealTime => "real-time",
        EndOfDay => "end-of-day",
        Minimal => "minimal",
    }
}

attribute_enum! {
    StructurePreference, field = "structurePreference" {
        ClearSchedules => "clear-schedules",
        OpenEnded => "open-ended",
        GeneralGuidance => "general-guidance",
    }
}

attribute_enum! {
    /// Self-reported comfort making clinical decisions
    ClinicalComfort, field = "clinicalComfort" {
        VeryComfortable => "very-comfortable",
        SomewhatComfortable => "somewhat-comfortable",
        NotComfortable => "not-comfortable",
    }
}

attribute_enum! {
    AdditionalResources, field = "additionalResources" {
        YesLove => "yes-love",
        Occasionally => "occasionally",
        NotNecessary => "not-necessary",
    }
}

attribute_enum! {
    MentorRelationship, field = "mentorRelationship" {
        TeacherCoach => "teacher-coach",
        Collaborator => "collaborator",
        Supervisor => "supervisor",
    }
}

// Preceptor attributes

attribute_enum! {
    MentoringApproach, field = "mentoringApproach" {
        CoachGuide => "coach-guide",
        ExpectInitiative => "expect-initiative",
        SupportNeeded => "support-needed",
    }
}

attribute_enum! {
    FeedbackApproach, field = "feedbackApproach" {
        RealTime => "real-time",
        DailyCheckins => "daily-checkins",
        WeeklyWritten => "weekly-written",
    }
}

attribute_enum! {
    /// How the preceptor starts a rotation
    RotationStart, field = "rotationStart" {
        OrientGoals => "orient-goals",
        DiveInLearn => "dive-in-learn",
        ObserveAdjust => "observe-adjust",
    }
}

attribute_enum! {
    AutonomyLevel, field = "autonomyLevel" {
        HighIndependence => "high-independence",
        SharedDecisions => "shared-decisions",
        CloseSupervision => "close-supervision",
    }
}

attribute_enum! {
    LearningMaterials, field = "learningMaterials" {
        Always => "always",
        Sometimes => "sometimes",
        Rarely => "rarely",
    }
}

attribute_enum! {
    IdealDynamic, field = "idealDynamic" {
        LearnerTeacher => "learner-teacher",
        Teammates => "teammates",
        SuperviseeClinician => "supervisee-clinician",
    }
}

/// Validated student learning style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentLearningStyle {
    pub learning_method: LearningMethod,
    pub feedback_preference: FeedbackPreference,
    pub structure_preference: StructurePreference,
    pub clinical_comfort: ClinicalComfort,
    pub additional_resources: AdditionalResources,
    pub mentor_relationship: MentorRelationship,
}

/// Validated preceptor mentoring style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreceptorMentoringStyle {
    pub mentoring_approach: MentoringApproach,
    pub feedback_approach: FeedbackApproach,
    pub rotation_start: RotationStart,
    pub autonomy_level: AutonomyLevel,
    pub learning_materials: LearningMaterials,
    pub ideal_dynamic: IdealDynamic,
}

/// Student style as submitted by the profile store, not yet validated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStyleInput {
    #[serde(default)]
    pub learning_method: Option<String>,
    #[serde(default)]
    pub feedback_preference: Option<String>,
    #[serde(default)]
    pub structure_preference: Option<String>,
    #[serde(default)]
    pub clinical_comfort: Option<String>,
    #[serde(default)]
    pub additional_resources: Option<String>,
    #[serde(default)]
    pub mentor_relationship: Option<String>,
}

/// Preceptor style as submitted by the profile store, not yet validated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreceptorStyleInput {
    #[serde(default)]
    pub mentoring_approach: Option<String>,
    #[serde(default)]
    pub feedback_approach: Option<String>,
    #[serde(default)]
    pub rotation_start: Option<String>,
    #[serde(default)]
    pub autonomy_level: Option<String>,
    #[serde(default)]
    pub learning_materials: Option<String>,
    #[serde(default)]
    pub ideal_dynamic: Option<String>,
}

/// Parse one required attribute.
///
/// Blank values count as missing: unanswered intake questions arrive as `""`.
pub fn parse_attribute<A: Attribute>(value: Option<&str>) -> Result<A, ScoringError> {
    match value {
        Some(v) if !v.trim().is_empty() => v.parse(),
        _ => Err(ScoringError::IncompleteProfile { field: A::FIELD }),
    }
}

impl TryFrom<&StudentStyleInput> for StudentLearningStyle {
    type Error = ScoringError;

    fn try_from(input: &StudentStyleInput) -> Result<Self, Self::Error> {
        Ok(Self {
            learning_method: parse_attribute(input.learning_method.as_deref())?,
            feedback_preference: parse_attribute(input.feedback_preference.as_deref())?,
            structure_preference: parse_attribute(input.structure_preference.as_deref())?,
            clinical_comfort: parse_attribute(input.clinical_comfort.as_deref())?,
            additional_resources: parse_attribute(input.additional_resources.as_deref())?,
            mentor_relationship: parse_attribute(input.mentor_relationship.as_deref())?,
        })
    }
}

impl TryFrom<&PreceptorStyleInput> for PreceptorMentoringStyle {
    type Error = ScoringError;

    fn try_from(input: &PreceptorStyleInput) -> Result<Self, Self::Error> {
        Ok(Self {
            mentoring_approach: parse_attribute(input.mentoring_approach.as_deref())?,
            feedback_approach: parse_attribute(input.feedback_approach.as_deref())?,
            rotation_start: parse_attribute(input.rotation_start.as_deref())?,
            autonomy_level: parse_attribute(input.autonomy_level.as_deref())?,
            learning_materials: parse_attribute(input.learning_materials.as_deref())?,
            ideal_dynamic: parse_attribute(input.ideal_dynamic.as_deref())?,
        })
    }
}

impl From<&StudentLearningStyle> for StudentStyleInput {
    fn from(style: &StudentLearningStyle) -> Self {
        Self {
            learning_method: Some(style.learning_method.as_str().to_string()),
            feedback_preference: Some(style.feedback_preference.as_str().to_string()),
            structure_preference: Some(style.structure_preference.as_str().to_string()),
            clinical_comfort: Some(style.clinical_comfort.as_str().to_string()),
            additional_resources: Some(style.additional_resources.as_str().to_string()),
            mentor_relationship: Some(style.mentor_relationship.as_str().to_string()),
        }
    }
}

impl From<&PreceptorMentoringStyle> for PreceptorStyleInput {
    fn from(style: &PreceptorMentoringStyle) -> Self {
        Self {
            mentoring_approach: Some(style.mentoring_approach.as_str().to_string()),
            feedback_approach: Some(style.feedback_approach.as_str().to_string()),
            rotation_start: Some(style.rotation_start.as_str().to_string()),
            autonomy_level: Some(style.autonomy_level.as_str().to_string()),
            learning_materials: Some(style.learning_materials.as_str().to_string()),
            ideal_dynamic: Some(style.ideal_dynamic.as_str().to_string()),
        }
    }
}
