use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{GameDto, GameFilterCriteria},
    error::AppError,
    extract::ApiQuery,
    state::AppState,
};

/// Game catalog router.
///
/// `/games/load` is matched before `/games/{id}`, so no game can be fetched
/// under the id `load`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/", get(list_games))
        .route("/games/load", get(load_games))
        .route("/games/{id}", get(get_game))
}

/// `GET /games/{id}`: One game with catalog-wide state counts.
async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameDto>, AppError> {
    Ok(Json(state.games.get_game_by_id(&id).await?))
}

/// `GET /games/load`: Import the configured CSV file.
async fn load_games(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.games.load_games_from_csv().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /games/`: Filtered, sorted page of games.
async fn list_games(
    State(state): State<AppState>,
    ApiQuery(criteria): ApiQuery<GameFilterCriteria>,
) -> Result<Json<Vec<GameDto>>, AppError> {
    Ok(Json(state.games.get_filtered_games(criteria).await?))
}
