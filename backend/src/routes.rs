use rocket::{State, get, post, put, http::Status, serde::json::{self, Json}};
use tracing::{debug, info, instrument};
use shared::{models::*, validation::validate_poll_request};
use crate::{error::ApiError, store::PollStore};

#[derive(Debug, Default)]
pub struct AppState {
    pub polls: PollStore,
}

impl AppState {
    pub fn new() -> Self {
        Self { polls: PollStore::new() }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, request), fields(poll_id = tracing::field::Empty))]
#[post("/polls", data = "<request>")]
pub async fn create_poll(
    state: &State<AppState>,
    request: Result<Json<CreatePollRequest>, json::Error<'_>>,
) -> Result<(Status, Json<Poll>), ApiError> {
    let request = request?.into_inner();
    validate_poll_request(&request)?;

    let poll = state.polls.create_poll(request)?;
    tracing::Span::current().record("poll_id", poll.id.as_str());
    info!("Created poll {} with {} options", poll.id, poll.options.len());

    Ok((Status::Created, Json(poll)))
}

#[instrument(skip(state, vote), fields(poll_id = %id))]
#[post("/polls/<id>/vote", data = "<vote>")]
pub async fn cast_vote(
    state: &State<AppState>,
    id: &str,
    vote: Result<Json<VoteRequest>, json::Error<'_>>,
) -> Result<Json<VoteOutcome>, ApiError> {
    let vote = vote?.into_inner();
    let outcome = state.polls.cast_vote(id, &vote.option_str_id, vote.user_identifier.as_deref())?;
    debug!("Vote on {} for {}: {:?}", id, vote.option_str_id, outcome);
    Ok(Json(outcome))
}

#[get("/polls/<id>/results")]
pub async fn get_results(state: &State<AppState>, id: &str) -> Result<Json<PollResults>, ApiError> {
    state.polls.get_results(id).map(Json).map_err(ApiError::from)
}

#[get("/polls/active")]
pub async fn list_active_polls(state: &State<AppState>) -> Result<Json<Vec<ActivePoll>>, ApiError> {
    state.polls.list_active_polls().map(Json).map_err(ApiError::from)
}

#[instrument(skip(state, update), fields(poll_id = %id))]
#[put("/polls/<id>/status", data = "<update>")]
pub async fn set_status(
    state: &State<AppState>,
    id: &str,
    update: Result<Json<StatusUpdateRequest>, json::Error<'_>>,
) -> Result<Json<StatusChange>, ApiError> {
    let update = update?.into_inner();
    let change = state.polls.set_status(id, update.status)?;
    info!("Poll {} status set to {}", change.poll_str_id, change.status);
    Ok(Json(change))
}
