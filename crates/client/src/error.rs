/// The repository call that failed.
///
/// Each operation has a fixed fallback message shown to the user when the
/// backend does not supply its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    VerifyId,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::List => "Error al cargar productos",
            Operation::VerifyId => "Error al verificar el ID",
            Operation::Create => "Error al guardar producto",
            Operation::Update => "Error al actualizar el producto",
            Operation::Delete => "Error al eliminar el producto",
        }
    }
}

/// Errors from the catalog REST adapter.
///
/// `Display` is the user-facing message: the backend's `message` when it
/// sent one, otherwise the operation's fallback.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The HTTP request failed (network, DNS, TLS, timeout) or the response
    /// body could not be decoded.
    #[error("{}", .operation.fallback_message())]
    Request {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL can not take an id path segment.
    #[error("{}", .operation.fallback_message())]
    InvalidUrl { operation: Operation, url: String },

    /// The backend returned a non-2xx status code.
    #[error("{message}")]
    Api {
        operation: Operation,
        status: u16,
        message: String,
    },
}

impl RepositoryError {
    pub fn operation(&self) -> Operation {
        match self {
            RepositoryError::Request { operation, .. }
            | RepositoryError::InvalidUrl { operation, .. }
            | RepositoryError::Api { operation, .. } => *operation,
        }
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RepositoryError::Api { status, .. } => Some(*status),
            RepositoryError::Request { source, .. } => source.status().map(|s| s.as_u16()),
            RepositoryError::InvalidUrl { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_backend_message() {
        let err = RepositoryError::Api {
            operation: Operation::Create,
            status: 400,
            message: "Backend fallo".into(),
        };
        assert_eq!(err.to_string(), "Backend fallo");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.operation(), Operation::Create);
    }

    #[test]
    fn fallback_messages_per_operation() {
        assert_eq!(Operation::VerifyId.fallback_message(), "Error al verificar el ID");
        assert_eq!(Operation::Create.fallback_message(), "Error al guardar producto");
        assert_eq!(Operation::Update.fallback_message(), "Error al actualizar el producto");
        assert_eq!(Operation::Delete.fallback_message(), "Error al eliminar el producto");
    }
}
