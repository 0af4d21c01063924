use crate::models::style::{
    AdditionalResources, AutonomyLevel, ClinicalComfort, FeedbackApproach, FeedbackPreference,
    IdealDynamic, LearningMaterials, LearningMethod, MentorRelationship, MentoringApproach,
    PreceptorMentoringStyle, RotationStart, StructurePreference, StudentLearningStyle,
};
use crate::models::{Axis, DimensionScore, MatchKind};

/// Maximum points any single dimension can award
pub const AXIS_MAX_POINTS: u8 = 2;

#[inline]
fn dimension(axis: Axis, kind: MatchKind) -> DimensionScore {
    let points = match kind {
        MatchKind::Best => AXIS_MAX_POINTS,
        MatchKind::Partial | MatchKind::Baseline => 1,
        MatchKind::Mismatch => 0,
    };

    DimensionScore {
        axis,
        kind,
        points,
        max_points: AXIS_MAX_POINTS,
    }
}

/// Learning method vs. mentoring approach
#[inline]
pub fn compare_learning_method(
    student: LearningMethod,
    preceptor: MentoringApproach,
) -> DimensionScore {
    use crate::models::style::LearningMethod as L;
    use crate::models::style::MentoringApproach as M;

    let kind = match (student, preceptor) {
        (L::HandsOn, M::CoachGuide)
        | (L::StepByStep, M::CoachGuide)
        | (L::Independent, M::ExpectInitiative) => MatchKind::Best,
        (L::HandsOn, M::SupportNeeded) | (L::Independent, M::SupportNeeded) => MatchKind::Partial,
        _ => MatchKind::Mismatch,
    };

    dimension(Axis::LearningMethod, kind)
}

/// Feedback timing
#[inline]
pub fn compare_feedback(
    student: FeedbackPreference,
    preceptor: FeedbackApproach,
) -> DimensionScore {
    use crate::models::style::FeedbackApproach as A;
    use crate::models::style::FeedbackPreference as P;

    let kind = match (student, preceptor) {
        (P::RealTime, A::RealTime)
        | (P::EndOfDay, A::DailyCheckins)
        | (P::Minimal, A::WeeklyWritten) => MatchKind::Best,
        (P::RealTime, A::DailyCheckins) | (P::EndOfDay, A::WeeklyWritten) => MatchKind::Partial,
        _ => MatchKind::Mismatch,
    };

    dimension(Axis::FeedbackTiming, kind)
}

/// Structure preference vs. how the rotation starts. Never scores zero.
#[inline]
pub fn compare_structure(student: StructurePreference, preceptor: RotationStart) -> DimensionScore {
    use crate::models::style::RotationStart as R;
    use crate::models::style::StructurePreference as S;

    let kind = match (student, preceptor) {
        (S::ClearSchedules, R::OrientGoals)
        | (S::OpenEnded, R::DiveInLearn)
        | (S::GeneralGuidance, R::ObserveAdjust) => MatchKind::Best,
        _ => MatchKind::Baseline,
    };

    dimension(Axis::Structure, kind)
}

/// Clinical comfort vs. autonomy granted
#[inline]
pub fn compare_autonomy(student: ClinicalComfort, preceptor: AutonomyLevel) -> DimensionScore {
    use crate::models::style::AutonomyLevel as A;
    use crate::models::style::ClinicalComfort as C;

    let kind = match (student, preceptor) {
        (C::VeryComfortable, A::HighIndependence)
        | (C::NotComfortable, A::CloseSupervision)
        | (C::SomewhatComfortable, A::SharedDecisions) => MatchKind::Best,
        (C::VeryComfortable, A::SharedDecisions)
        | (C::SomewhatComfortable, A::CloseSupervision) => MatchKind::Partial,
        _ => MatchKind::Mismatch,
    };

    dimension(Axis::Autonomy, kind)
}

/// Appetite for extra resources vs. how often materials are shared
#[inline]
pub fn compare_resources(
    student: AdditionalResources,
    preceptor: LearningMaterials,
) -> DimensionScore {
    use crate::models::style::AdditionalResources as R;
    use crate::models::style::LearningMaterials as M;

    let kind = match (student, preceptor) {
        (R::YesLove, M::Always)
        | (R::Occasionally, M::Sometimes)
        | (R::NotNecessary, M::Rarely) => MatchKind::Best,
        (R::YesLove, M::Sometimes) | (R::Occasionally, M::Always) => MatchKind::Partial,
        _ => MatchKind::Mismatch,
    };

    dimension(Axis::Resources, kind)
}

/// Relationship style. Never scores zero.
#[inline]
pub fn compare_relationship(
    student: MentorRelationship,
    preceptor: IdealDynamic,
) -> DimensionScore {
    use crate::models::style::IdealDynamic as D;
    use crate::models::style::MentorRelationship as R;

    let kind = match (student, preceptor) {
        (R::TeacherCoach, D::LearnerTeacher)
        | (R::Collaborator, D::Teammates)
        | (R::Supervisor, D::SuperviseeClinician) => MatchKind::Best,
        _ => MatchKind::Baseline,
    };

    dimension(Axis::Relationship, kind)
}

/// Compare every dimension, in `Axis::ALL` order
pub fn compare_all(
    student: &StudentLearningStyle,
    preceptor: &PreceptorMentoringStyle,
) -> [DimensionScore; 6] {
    [
        compare_learning_method(student.learning_method, preceptor.mentoring_approach),
        compare_feedback(student.feedback_preference, preceptor.feedback_approach),
        compare_structure(student.structure_preference, preceptor.rotation_start),
        compare_autonomy(student.clinical_comfort, preceptor.autonomy_level),
        compare_resources(student.additional_resources, preceptor.learning_materials),
        compare_relationship(student.mentor_relationship, preceptor.ideal_dynamic),
    ]
}
