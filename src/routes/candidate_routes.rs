use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        CandidateListQuery, CandidateListResponse, CandidateResponse, CreateCandidatePayload,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(
        ("searchText" = Option<String>, Query, description = "Free-text filter over name, email and phone"),
        ("sorting" = Option<String>, Query, description = "Sort key: firstname, lastname, email or phonenumber"),
        ("isDescending" = Option<bool>, Query, description = "Sort direction"),
        ("maxResultCount" = Option<i64>, Query, description = "Page size, default 10"),
        ("skipCount" = Option<i64>, Query, description = "Records to skip, default 0")
    ),
    responses(
        (status = 200, description = "Page of candidates with the total matching count", body = Json<CandidateListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let (items, total_count) = state.candidate_service.list(&query).await?;
    Ok(Json(CandidateListResponse {
        total_count,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate view, or null when no candidate has the id")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get_by_id(id).await?;
    Ok(Json(candidate.map(CandidateResponse::from)))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 200, description = "Candidate created, or updated when the email already belongs to a record"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    match state.candidate_service.get_by_email(&payload.email).await? {
        Some(existing) => {
            tracing::info!(candidate_id = %existing.id, "Create request matched an existing email, updating");
            state.candidate_service.update(existing.id, &payload).await?;
        }
        None => {
            state.candidate_service.create(&payload).await?;
        }
    }

    Ok("Candidate saved successfully.")
}

#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    request_body = CreateCandidatePayload,
    responses(
        (status = 200, description = "Candidate updated"),
        (status = 400, description = "Invalid payload or email owned by another candidate"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    if let Some(existing) = state.candidate_service.get_by_email(&payload.email).await? {
        if existing.id != id {
            return Err(Error::BadRequest(
                "Email address already in use by another candidate.".to_string(),
            ));
        }
    }

    state.candidate_service.update(id, &payload).await?;
    Ok("Candidate updated successfully.")
}

#[utoipa::path(
    delete,
    path = "/api/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate deleted"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    if state.candidate_service.get_by_id(id).await?.is_none() {
        return Err(Error::NotFound(
            "Candidate not found with the specified id.".to_string(),
        ));
    }

    state.candidate_service.delete(id).await?;
    Ok("Candidate deleted successfully.")
}
