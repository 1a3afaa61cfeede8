use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, OnConflict, Order};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use super::{GameFilter, GameRepository, PageRequest, SortDirection, SortField};
use crate::dto::GameStatistics;
use crate::entities::{GameState, game};

/// Rows per INSERT statement; keeps bind parameters well under the `SQLite` limit.
const INSERT_CHUNK_SIZE: usize = 500;

/// `SeaORM` implementation of [`GameRepository`].
#[derive(Debug, Clone)]
pub struct SeaOrmGameRepository {
    db: DatabaseConnection,
}

impl SeaOrmGameRepository {
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameRepository for SeaOrmGameRepository {
    async fn save_all(&self, games: Vec<game::Model>) -> Result<u64, DbErr> {
        if games.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        let mut written = 0;

        for chunk in games.chunks(INSERT_CHUNK_SIZE) {
            written += game::Entity::insert_many(chunk.iter().cloned().map(to_active_model))
                .on_conflict(
                    OnConflict::column(game::Column::Id)
                        .update_columns([
                            game::Column::Title,
                            game::Column::Platform,
                            game::Column::Genre,
                            game::Column::State,
                            game::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(written)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<game::Model>, DbErr> {
        game::Entity::find_by_id(id.to_string()).one(&self.db).await
    }

    async fn find_filtered(
        &self,
        filter: &GameFilter,
        page: &PageRequest,
    ) -> Result<Vec<game::Model>, DbErr> {
        let mut find = game::Entity::find();

        if !filter.is_empty() {
            find = find.filter(filter_condition(filter, self.db.get_database_backend()));
        }

        let order = match page.sort.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        find.order_by(sort_column(page.sort.field), order)
            // tiebreaker so equal sort keys never straddle two pages
            .order_by_asc(game::Column::Id)
            .offset(page.offset())
            .limit(page.size)
            .all(&self.db)
            .await
    }

    async fn count_by_state(&self, state: GameState) -> Result<u64, DbErr> {
        game::Entity::find()
            .filter(game::Column::State.eq(state.as_str()))
            .count(&self.db)
            .await
    }

    async fn count_all_states(&self) -> Result<GameStatistics, DbErr> {
        let rows: Vec<(String, i64)> = game::Entity::find()
            .select_only()
            .column(game::Column::State)
            .column_as(game::Column::Id.count(), "count")
            .group_by(game::Column::State)
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut statistics = GameStatistics::default();
        for (state, count) in rows {
            match state.parse::<GameState>() {
                Ok(state) => statistics.set(state, u64::try_from(count).unwrap_or_default()),
                Err(e) => tracing::warn!(error = %e, "Ignoring games with unknown state"),
            }
        }

        Ok(statistics)
    }
}

fn to_active_model(game: game::Model) -> game::ActiveModel {
    game::ActiveModel {
        id: ActiveValue::Set(game.id),
        title: ActiveValue::Set(game.title),
        platform: ActiveValue::Set(game.platform),
        genre: ActiveValue::Set(game.genre),
        state: ActiveValue::Set(game.state),
        created_at: ActiveValue::Set(game.created_at),
        updated_at: ActiveValue::Set(game.updated_at),
    }
}

/// OR of every supplied field: exact platform, exact genre, title substring.
///
/// The title match compares `lower(title)` against a pattern folded the way
/// the backend's `lower()` folds. `SQLite` only folds ASCII, so there the
/// match is case-insensitive for ASCII letters and exact for everything else.
fn filter_condition(filter: &GameFilter, backend: DbBackend) -> Condition {
    let mut condition = Condition::any();

    if let Some(platform) = &filter.platform {
        condition = condition.add(game::Column::Platform.eq(platform.as_str()));
    }
    if let Some(genre) = &filter.genre {
        condition = condition.add(game::Column::Genre.eq(genre.as_str()));
    }
    if let Some(title) = &filter.title {
        let pattern = format!("%{}%", escape_like(&fold_case(title, backend)));
        condition = condition.add(
            Expr::expr(Func::lower(Expr::col(game::Column::Title)))
                .like(LikeExpr::new(pattern).escape('\\')),
        );
    }

    condition
}

fn fold_case(value: &str, backend: DbBackend) -> String {
    match backend {
        DbBackend::Sqlite => value.to_ascii_lowercase(),
        _ => value.to_lowercase(),
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

const fn sort_column(field: SortField) -> game::Column {
    match field {
        SortField::UpdatedAt => game::Column::UpdatedAt,
        SortField::Title => game::Column::Title,
        SortField::Platform => game::Column::Platform,
        SortField::Genre => game::Column::Genre,
        SortField::State => game::Column::State,
    }
}
