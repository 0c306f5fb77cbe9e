use miette::Diagnostic;
use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Diagnostic, Debug)]
pub enum CardError {
    #[error("Drawing surface unavailable ({width}x{height})")]
    #[diagnostic(
        code(cards::surface),
        help("Card dimensions must be non-zero and at most 8192 pixels per side")
    )]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("Failed to render '{template}' card")]
    #[diagnostic(code(cards::render))]
    Render {
        template: String,
        #[source]
        source: Box<CardError>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Encode error: {message}")]
    #[diagnostic(code(cards::encode))]
    Encode { message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(cards::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(cards::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

/// Clipboard sink failures.
///
/// Kept separate from [`CardError`] so callers awaiting a clipboard write can
/// match on the denial reason without unpacking the wider error type.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard access denied: {0}")]
    #[diagnostic(code(cards::clipboard::denied))]
    Denied(String),

    #[error("Clipboard unsupported: {0}")]
    #[diagnostic(
        code(cards::clipboard::unsupported),
        help("Install wl-clipboard or xclip, or save the card with --output instead")
    )]
    Unsupported(String),

    #[error("Clipboard payload is not a PNG data URI: {0}")]
    #[diagnostic(code(cards::clipboard::data))]
    InvalidData(String),
}

impl CardError {
    /// Wrap a failure raised while rendering `template`.
    pub fn render(template: impl Into<String>, source: CardError) -> Self {
        CardError::Render {
            template: template.into(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
