use async_graphql::ErrorExtensions;
use infra::StoreError;

/// Unified error type for GraphQL resolvers.
///
/// Every variant maps to an `extensions.code` so clients can tell domain
/// validation apart from collaborator failures:
///   - `Store(NotFound)` → `NOT_FOUND`
///   - `Store(Conflict)` → `CONFLICT`
///   - `Store(BadReference)` → `BAD_REFERENCE`
///   - `Store(Database)` → `INTERNAL`, logged server-side with a sanitized message
///   - `Validation` → `VALIDATION_ERROR`
#[derive(Debug)]
pub enum GqlError {
    Store(StoreError),
    Validation(String),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        GqlError::Validation(msg.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            GqlError::Store(StoreError::NotFound { .. }) => "NOT_FOUND",
            GqlError::Store(StoreError::Conflict(_)) => "CONFLICT",
            GqlError::Store(StoreError::BadReference(_)) => "BAD_REFERENCE",
            GqlError::Store(StoreError::Database(_)) => "INTERNAL",
            GqlError::Validation(_) => "VALIDATION_ERROR",
            GqlError::Custom(_) => "INTERNAL",
        }
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Store(StoreError::Database(e)) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Store(e) => write!(f, "{e}"),
            GqlError::Validation(msg) => write!(f, "{msg}"),
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<StoreError> for GqlError {
    fn from(e: StoreError) -> Self {
        GqlError::Store(e)
    }
}

impl ErrorExtensions for GqlError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Extension trait turning store and domain results into resolver results
/// carrying an error code.
///
/// Usage: `state.store.get_user(id).await.into_gql()?`
pub trait IntoGqlResult<T> {
    fn into_gql(self) -> async_graphql::Result<T>;
}

impl<T, E: Into<GqlError>> IntoGqlResult<T> for std::result::Result<T, E> {
    fn into_gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.into().extend())
    }
}
