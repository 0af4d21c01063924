use crate::core::{score_profiles, MatchRanker, RankOptions, RankingEnhancer};
use crate::error::ScoringError;
use crate::models::{
    Candidate, EnhancementStatus, ErrorResponse, HealthResponse, PreceptorMentoringStyle,
    RankRequest, RankResponse, ScoreRequest, ScoreResponse, StudentLearningStyle, TierName,
};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: MatchRanker,
    pub enhancer: Option<Arc<dyn RankingEnhancer>>,
    pub default_limit: u16,
    pub max_limit: u16,
    pub min_tier: Option<TierName>,
}

/// Configure all MentorFit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentorfit/score", web::post().to(score))
        .route("/mentorfit/rank", web::post().to(rank));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn scoring_error_response(err: &ScoringError) -> HttpResponse {
    let error = match err {
        ScoringError::InvalidAttributeValue { .. } => "invalid_attribute_value",
        ScoringError::IncompleteProfile { .. } => "incomplete_profile",
        ScoringError::DuplicateCandidate(_) => "duplicate_candidate",
    };

    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: 422,
    })
}

/// Score one student/preceptor pair
///
/// POST /api/v1/mentorfit/score
async fn score(req: web::Json<ScoreRequest>) -> impl Responder {
    match score_profiles(&req.student, &req.preceptor) {
        Ok(score) => HttpResponse::Ok().json(ScoreResponse { score }),
        Err(e) => {
            tracing::info!("Rejected score request: {}", e);
            scoring_error_response(&e)
        }
    }
}

fn parse_rank_request(
    req: &RankRequest,
) -> Result<(StudentLearningStyle, Vec<Candidate>), ScoringError> {
    let student = StudentLearningStyle::try_from(&req.student)?;
    let candidates = req
        .candidates
        .iter()
        .map(|c| {
            if c.candidate_id.trim().is_empty() {
                return Err(ScoringError::IncompleteProfile { field: "candidateId" });
            }
            PreceptorMentoringStyle::try_from(&c.style)
                .map(|style| Candidate::new(c.candidate_id.clone(), style))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((student, candidates))
}

/// Rank preceptor candidates for a student
///
/// POST /api/v1/mentorfit/rank
///
/// Request body:
/// ```json
/// {
///   "studentId": "string",
///   "student": { "learningMethod": "hands-on", ... },
///   "candidates": [
///     { "candidateId": "string", "style": { "mentoringApproach": "coach-guide", ... } }
///   ],
///   "limit": 20,
///   "minTier": "Silver",
///   "enhance": true
/// }
/// ```
async fn rank(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let student_id = req.student_id.as_deref().unwrap_or("anonymous");

    let (student, candidates) = match parse_rank_request(&req) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::info!("Rejected rank request for {}: {}", student_id, e);
            return scoring_error_response(&e);
        }
    };

    let limit = req.limit.unwrap_or(state.default_limit).min(state.max_limit) as usize;
    // The request may only tighten the configured gate
    let min_tier = match (req.min_tier, state.min_tier) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };
    let options = RankOptions {
        limit: Some(limit),
        min_tier,
    };

    let enhancer = if req.enhance { state.enhancer.as_deref() } else { None };

    tracing::info!(
        "Ranking {} candidates for student {}, limit: {}, enhance: {}",
        candidates.len(),
        student_id,
        limit,
        enhancer.is_some()
    );

    let outcome = match state
        .ranker
        .rank_enhanced(&student, candidates, options, enhancer)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::info!("Rejected rank request for {}: {}", student_id, e);
            return scoring_error_response(&e);
        }
    };

    if let EnhancementStatus::Fallback { reason } = &outcome.enhancement {
        tracing::warn!(
            "Enhancement failed for {}, using deterministic order: {}",
            student_id,
            reason
        );
    }

    HttpResponse::Ok().json(RankResponse {
        matches: outcome.matches,
        total_candidates: outcome.total_candidates,
        enhancement: outcome.enhancement,
    })
}
