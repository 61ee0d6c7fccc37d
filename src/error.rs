use thiserror::Error;

/// Boxed underlying cause carried by [`Error::RequestFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Operation that failed (e.g., "get_voice", "synthesize_speech")
    pub source: Option<String>,
    /// HTTP status returned by the remote service, if a response was received
    pub status: Option<u16>,
    /// Additional detail, usually the response body of a failed call
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            source: None,
            status: None,
            details: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Error type for the client.
///
/// Every API operation fails with [`Error::RequestFailed`]; the remote status
/// class is not mapped to separate variants; inspect [`ErrorContext::status`]
/// when the distinction matters. [`Error::Configuration`] is only produced by
/// [`crate::ElevenLabsClientBuilder::build`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed: {message}{}", format_context(.context))]
    RequestFailed {
        message: String,
        context: ErrorContext,
        #[source]
        cause: Option<BoxError>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref source) = ctx.source {
        parts.push(format!("operation: {}", source));
    }
    if let Some(status) = ctx.status {
        parts.push(format!("status: {}", status));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Wrap an underlying cause into the uniform request failure.
    pub fn request_failed<E>(msg: impl Into<String>, context: ErrorContext, cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::RequestFailed {
            message: msg.into(),
            context,
            cause: Some(cause.into()),
        }
    }

    /// Request failure without a lower-level cause (e.g. a non-success status).
    pub fn request_failed_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::RequestFailed {
            message: msg.into(),
            context,
            cause: None,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::RequestFailed { context, .. } => Some(context),
            Error::Configuration { .. } => None,
        }
    }

    /// HTTP status of the failed call, when the remote service answered.
    pub fn status(&self) -> Option<u16> {
        self.context().and_then(|c| c.status)
    }
}
