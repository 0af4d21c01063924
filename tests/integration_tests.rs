// Integration tests for MentorFit ranking

use actix_web::{test as actix_test, web, App};
use async_trait::async_trait;
use mentorfit::core::{MatchRanker, RankOptions, RankingEnhancer, RankingPolicy};
use mentorfit::error::EnhancerError;
use mentorfit::models::style::*;
use mentorfit::models::{
    Candidate, EnhancedCandidate, EnhancementStatus, RankedCandidate, TierName,
};
use mentorfit::routes::{self, mentorfit::AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

fn create_student() -> StudentLearningStyle {
    StudentLearningStyle {
        learning_method: LearningMethod::HandsOn,
        feedback_preference: FeedbackPreference::RealTime,
        structure_preference: StructurePreference::ClearSchedules,
        clinical_comfort: ClinicalComfort::VeryComfortable,
        additional_resources: AdditionalResources::YesLove,
        mentor_relationship: MentorRelationship::TeacherCoach,
    }
}

fn create_preceptor() -> PreceptorMentoringStyle {
    PreceptorMentoringStyle {
        mentoring_approach: MentoringApproach::CoachGuide,
        feedback_approach: FeedbackApproach::RealTime,
        rotation_start: RotationStart::OrientGoals,
        autonomy_level: AutonomyLevel::HighIndependence,
        learning_materials: LearningMaterials::Always,
        ideal_dynamic: IdealDynamic::LearnerTeacher,
    }
}

/// Three candidates scoring raw 10, 11 and 9 against `create_student`
fn create_candidates() -> Vec<Candidate> {
    let mut raw_10 = create_preceptor();
    raw_10.feedback_approach = FeedbackApproach::DailyCheckins;
    raw_10.learning_materials = LearningMaterials::Sometimes;

    let mut raw_11 = create_preceptor();
    raw_11.learning_materials = LearningMaterials::Sometimes;

    let mut raw_9 = create_preceptor();
    raw_9.feedback_approach = FeedbackApproach::DailyCheckins;
    raw_9.learning_materials = LearningMaterials::Sometimes;
    raw_9.autonomy_level = AutonomyLevel::SharedDecisions;

    vec![
        Candidate::new("candidate-1", raw_10),
        Candidate::new("candidate-2", raw_11),
        Candidate::new("candidate-3", raw_9),
    ]
}

fn ids(matches: &[RankedCandidate]) -> Vec<&str> {
    matches.iter().map(|c| c.candidate_id.as_str()).collect()
}

struct ReverseEnhancer;

#[async_trait]
impl RankingEnhancer for ReverseEnhancer {
    fn name(&self) -> &str {
        "reverse"
    }

    async fn rerank(
        &self,
        _student: &StudentLearningStyle,
        ranked: &[RankedCandidate],
    ) -> Result<Vec<EnhancedCandidate>, EnhancerError> {
        Ok(ranked
            .iter()
            .rev()
            .map(|c| EnhancedCandidate {
                candidate_id: c.candidate_id.clone(),
                note: Some(format!("reviewed {}", c.candidate_id)),
            })
            .collect())
    }
}

/// Drops the last candidate it receives
struct DroppingEnhancer;

#[async_trait]
impl RankingEnhancer for DroppingEnhancer {
    fn name(&self) -> &str {
        "dropping"
    }

    async fn rerank(
        &self,
        _student: &StudentLearningStyle,
        ranked: &[RankedCandidate],
    ) -> Result<Vec<EnhancedCandidate>, EnhancerError> {
        Ok(ranked
            .iter()
            .take(ranked.len().saturating_sub(1))
            .map(|c| EnhancedCandidate::new(c.candidate_id.clone()))
            .collect())
    }
}

struct SlowEnhancer;

#[async_trait]
impl RankingEnhancer for SlowEnhancer {
    fn name(&self) -> &str {
        "slow"
    }

    async fn rerank(
        &self,
        _student: &StudentLearningStyle,
        ranked: &[RankedCandidate],
    ) -> Result<Vec<EnhancedCandidate>, EnhancerError> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok(ranked.iter().map(|c| EnhancedCandidate::new(c.candidate_id.clone())).collect())
    }
}

struct FailingEnhancer;

#[async_trait]
impl RankingEnhancer for FailingEnhancer {
    fn name(&self) -> &str {
        "failing"
    }

    async fn rerank(
        &self,
        _student: &StudentLearningStyle,
        _ranked: &[RankedCandidate],
    ) -> Result<Vec<EnhancedCandidate>, EnhancerError> {
        Err(EnhancerError::Unavailable("model offline".to_string()))
    }
}

#[test]
fn test_integration_tie_break_order() {
    let ranker = MatchRanker::with_default_policy();

    let ranked = ranker.rank(&create_student(), create_candidates()).unwrap();

    let normalized: Vec<u8> = ranked.iter().map(|c| c.score.normalized).collect();
    let raw: Vec<u8> = ranked.iter().map(|c| c.score.raw).collect();

    assert_eq!(ids(&ranked), vec!["candidate-2", "candidate-1", "candidate-3"]);
    assert_eq!(normalized, vec![9, 8, 8]);
    assert_eq!(raw, vec![11, 10, 9]);
}

#[test]
fn test_integration_ranking_is_stable() {
    let ranker = MatchRanker::with_default_policy();

    // Identical styles tie on every score, leaving only the id
    let candidates: Vec<Candidate> = ["p-3", "p-1", "p-2"]
        .iter()
        .map(|id| Candidate::new(*id, create_preceptor()))
        .collect();

    let first = ranker.rank(&create_student(), candidates.clone()).unwrap();
    let mut reversed = candidates;
    reversed.reverse();
    let second = ranker.rank(&create_student(), reversed).unwrap();

    assert_eq!(ids(&first), vec!["p-1", "p-2", "p-3"]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_integration_enhancer_applied() {
    let ranker = MatchRanker::with_default_policy();

    let outcome = ranker
        .rank_enhanced(
            &create_student(),
            create_candidates(),
            RankOptions::default(),
            Some(&ReverseEnhancer),
        )
        .await
        .unwrap();

    assert_eq!(ids(&outcome.matches), vec!["candidate-3", "candidate-1", "candidate-2"]);
    assert_eq!(outcome.matches[0].note.as_deref(), Some("reviewed candidate-3"));
    // Scores are never changed by the enhancer
    assert_eq!(outcome.matches[2].score.raw, 11);
    assert_eq!(
        outcome.enhancement,
        EnhancementStatus::Applied {
            enhancer: "reverse".to_string()
        }
    );
}

#[tokio::test]
async fn test_integration_enhancer_limited_to_top_k() {
    let ranker = MatchRanker::new(RankingPolicy {
        enhancement_top_k: 2,
        enhancement_timeout: Duration::from_secs(1),
    });

    let outcome = ranker
        .rank_enhanced(
            &create_student(),
            create_candidates(),
            RankOptions::default(),
            Some(&ReverseEnhancer),
        )
        .await
        .unwrap();

    assert_eq!(ids(&outcome.matches), vec!["candidate-1", "candidate-2", "candidate-3"]);
    assert_eq!(outcome.matches[2].note, None);
}

#[tokio::test]
async fn test_integration_dropped_candidate_falls_back() {
    let ranker = MatchRanker::with_default_policy();

    let outcome = ranker
        .rank_enhanced(
            &create_student(),
            create_candidates(),
            RankOptions::default(),
            Some(&DroppingEnhancer),
        )
        .await
        .unwrap();

    assert_eq!(ids(&outcome.matches), vec!["candidate-2", "candidate-1", "candidate-3"]);
    match outcome.enhancement {
        EnhancementStatus::Fallback { reason } => {
            assert!(reason.contains("contract violation"), "{}", reason);
            assert!(reason.contains("candidate-3"), "{}", reason);
        }
        other => panic!("expected fallback, got {:?}", other),
    }
}

#[tokio::test]
async fn test_integration_timeout_falls_back() {
    let ranker = MatchRanker::new(RankingPolicy {
        enhancement_top_k: 10,
        enhancement_timeout: Duration::from_millis(50),
    });

    let outcome = ranker
        .rank_enhanced(
            &create_student(),
            create_candidates(),
            RankOptions::default(),
            Some(&SlowEnhancer),
        )
        .await
        .unwrap();

    assert_eq!(ids(&outcome.matches), vec!["candidate-2", "candidate-1", "candidate-3"]);
    assert!(matches!(
        outcome.enhancement,
        EnhancementStatus::Fallback { ref reason } if reason.contains("timed out")
    ));
}

#[tokio::test]
async fn test_integration_unavailable_falls_back() {
    let ranker = MatchRanker::with_default_policy();

    let outcome = ranker
        .rank_enhanced(
            &create_student(),
            create_candidates(),
            RankOptions {
                limit: Some(2),
                min_tier: None,
            },
            Some(&FailingEnhancer),
        )
        .await
        .unwrap();

    assert_eq!(ids(&outcome.matches), vec!["candidate-2", "candidate-1"]);
    assert_eq!(outcome.total_candidates, 3);
    assert!(matches!(outcome.enhancement, EnhancementStatus::Fallback { .. }));
}

fn app_state(enhancer: Option<Arc<dyn RankingEnhancer>>) -> AppState {
    AppState {
        ranker: MatchRanker::with_default_policy(),
        enhancer,
        default_limit: 20,
        max_limit: 100,
        min_tier: None,
    }
}

fn student_json() -> Value {
    json!({
        "learningMethod": "hands-on",
        "feedbackPreference": "real-time",
        "structurePreference": "clear-schedules",
        "clinicalComfort": "very-comfortable",
        "additionalResources": "yes-love",
        "mentorRelationship": "teacher-coach"
    })
}

fn preceptor_json(materials: &str) -> Value {
    json!({
        "mentoringApproach": "coach-guide",
        "feedbackApproach": "real-time",
        "rotationStart": "orient-goals",
        "autonomyLevel": "high-independence",
        "learningMaterials": materials,
        "idealDynamic": "learner-teacher"
    })
}

#[actix_web::test]
async fn test_route_health() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_route_score() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/mentorfit/score")
        .set_json(json!({ "student": student_json(), "preceptor": preceptor_json("always") }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["score"]["raw"], 12);
    assert_eq!(body["score"]["normalized"], 10);
    assert_eq!(body["score"]["tier"]["name"], "Gold");
    assert_eq!(body["score"]["breakdown"][0]["axis"], "learningMethod");
    assert_eq!(body["score"]["breakdown"][0]["maxPoints"], 2);
}

#[actix_web::test]
async fn test_route_score_rejects_unknown_value() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/mentorfit/score")
        .set_json(json!({ "student": student_json(), "preceptor": preceptor_json("never") }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 422);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_attribute_value");
}

#[actix_web::test]
async fn test_route_rank_with_enhancer_fallback() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(Some(Arc::new(DroppingEnhancer)))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/mentorfit/rank")
        .set_json(json!({
            "studentId": "student-42",
            "student": student_json(),
            "candidates": [
                { "candidateId": "p-rarely", "style": preceptor_json("rarely") },
                { "candidateId": "p-always", "style": preceptor_json("always") },
            ],
            "enhance": true
        }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCandidates"], 2);
    assert_eq!(body["matches"][0]["candidateId"], "p-always");
    assert_eq!(body["matches"][1]["candidateId"], "p-rarely");
    assert_eq!(body["enhancement"]["status"], "fallback");
}

#[actix_web::test]
async fn test_route_rank_min_tier() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/mentorfit/rank")
        .set_json(json!({
            "student": student_json(),
            "candidates": [
                { "candidateId": "p-rarely", "style": preceptor_json("rarely") },
                { "candidateId": "p-always", "style": preceptor_json("always") },
            ],
            "minTier": TierName::Gold
        }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    // raw 10 normalizes to 8, below Gold
    assert_eq!(body["matches"].as_array().map(|m| m.len()), Some(1));
    assert_eq!(body["enhancement"]["status"], "notRequested");
}

#[actix_web::test]
async fn test_route_rank_requires_candidates() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/mentorfit/rank")
        .set_json(json!({ "student": student_json(), "candidates": [] }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_route_rank_rejects_incomplete_student() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(routes::configure_routes),
    )
    .await;

    let mut student = student_json();
    student["clinicalComfort"] = json!("");

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/mentorfit/rank")
        .set_json(json!({
            "student": student,
            "candidates": [{ "candidateId": "p-1", "style": preceptor_json("always") }]
        }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 422);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "incomplete_profile");
}
