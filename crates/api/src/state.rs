/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is the only shared handle: it is created once at startup and
/// cloned (reference counted) into every request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: noteful_db::DbPool,
}
