use super::types::OstrichError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Client errors carry a message that is safe to hand back verbatim.
    pub client_error: bool,
}

impl OstrichError {
    /// Classify this error into the client/server tier it belongs to.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Client errors
            OstrichError::Validation(_) => ErrorClassification {
                error_type: "ValidationError",
                client_error: true,
            },
            OstrichError::Authentication(_) => ErrorClassification {
                error_type: "AuthenticationError",
                client_error: true,
            },
            OstrichError::Permission(_) => ErrorClassification {
                error_type: "PermissionError",
                client_error: true,
            },
            OstrichError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                client_error: true,
            },
            OstrichError::Conflict(_) => ErrorClassification {
                error_type: "ConflictError",
                client_error: true,
            },

            // Server errors
            OstrichError::Config(_) => ErrorClassification {
                error_type: "ConfigurationError",
                client_error: false,
            },
            OstrichError::Token(_) => ErrorClassification {
                error_type: "TokenError",
                client_error: false,
            },
            OstrichError::PasswordHash(_) => ErrorClassification {
                error_type: "PasswordHashError",
                client_error: false,
            },
            OstrichError::Database(_) => ErrorClassification {
                error_type: "DatabaseError",
                client_error: false,
            },
            OstrichError::Io(_) => ErrorClassification {
                error_type: "IoError",
                client_error: false,
            },
            OstrichError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                client_error: false,
            },
            OstrichError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                client_error: false,
            },
            OstrichError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                client_error: false,
            },
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.classify().client_error
    }

    /// Replace a server-side error with a generic public message, logging
    /// the real cause. Client errors pass through untouched.
    pub fn mask(self, public: &str) -> OstrichError {
        if self.is_client_error() {
            return self;
        }
        let classification = self.classify();
        tracing::error!(
            error_type = classification.error_type,
            error = %self,
            "{}",
            public
        );
        OstrichError::Internal(public.to_string())
    }
}
