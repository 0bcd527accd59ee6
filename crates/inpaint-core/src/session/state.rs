use std::sync::Arc;

use inpaint_types::{ApiKey, GeneratedImage, GenerationError, TearingStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::geometry::ProcessedImage;
use crate::mask::MaskExport;

/// User-visible step derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NoKey,
    Upload,
    Edit,
    Generating,
    Result,
}

/// Reasons a generation cannot start.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionError {
    #[error("No API key is set.")]
    MissingApiKey,
    #[error("The image is not ready yet. Please wait a moment and try again.")]
    NoImage,
    #[error("Paint over the area you want to edit first.")]
    NoMask,
    #[error("A generation is already running.")]
    AlreadyGenerating,
}

/// Everything one generation needs, captured when it starts.
///
/// The ticket also identifies the session it belongs to so a late result
/// for an abandoned session can be recognised and dropped.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    session_id: Uuid,
    api_key: ApiKey,
    image: Arc<ProcessedImage>,
    mask: Arc<MaskExport>,
    style: TearingStyle,
}

impl GenerationTicket {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn image(&self) -> &ProcessedImage {
        &self.image
    }

    pub fn mask(&self) -> &MaskExport {
        &self.mask
    }

    pub fn style(&self) -> TearingStyle {
        self.style
    }
}

/// Immutable session snapshot.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    api_key: Option<ApiKey>,
    image: Option<Arc<ProcessedImage>>,
    mask: Option<Arc<MaskExport>>,
    brush_size: u32,
    style: TearingStyle,
    generating: bool,
    result: Option<Arc<GeneratedImage>>,
    error: Option<String>,
}

impl Session {
    /// Fresh session with no key, no image and the given default brush.
    pub fn new(brush_size: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            api_key: None,
            image: None,
            mask: None,
            brush_size: brush_size.max(1),
            style: TearingStyle::default(),
            generating: false,
            result: None,
            error: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stage(&self) -> Stage {
        if self.api_key.is_none() {
            Stage::NoKey
        } else if self.image.is_none() {
            Stage::Upload
        } else if self.generating {
            Stage::Generating
        } else if self.result.is_some() {
            Stage::Result
        } else {
            Stage::Edit
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn image(&self) -> Option<&ProcessedImage> {
        self.image.as_deref()
    }

    pub fn mask(&self) -> Option<&MaskExport> {
        self.mask.as_deref()
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn style(&self) -> TearingStyle {
        self.style
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn result(&self) -> Option<&GeneratedImage> {
        self.result.as_deref()
    }

    /// Inline error message, if the last action failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn with_api_key(self, api_key: ApiKey) -> Self {
        info!("🔑 API key set ({})", api_key);
        Self { api_key: Some(api_key), error: None, ..self }
    }

    /// Forget the key. Image and mask are kept so the user can re-enter it.
    pub fn clear_api_key(self) -> Self {
        info!("API key cleared");
        Self { api_key: None, ..self }
    }

    /// Start over with a newly processed image.
    pub fn upload(self, image: ProcessedImage) -> Self {
        let id = Uuid::new_v4();
        info!(
            "🖼️ Session {} started with {}x{} ({})",
            id,
            image.width(),
            image.height(),
            image.ratio()
        );
        Self {
            id,
            image: Some(Arc::new(image)),
            mask: None,
            generating: false,
            result: None,
            error: None,
            ..self
        }
    }

    /// Record the latest mask snapshot from the canvas.
    ///
    /// Snapshots whose size differs from the current image are stale and ignored.
    pub fn mask_changed(self, mask: MaskExport) -> Self {
        let Some(image) = self.image.as_ref() else {
            debug!("Mask update ignored: no image");
            return self;
        };
        if mask.dimensions() != image.dimensions() {
            warn!(
                "Mask update ignored: {:?} does not match image {:?}",
                mask.dimensions(),
                image.dimensions()
            );
            return self;
        }
        Self { mask: Some(Arc::new(mask)), error: None, ..self }
    }

    pub fn set_brush_size(self, brush_size: u32) -> Self {
        Self { brush_size: brush_size.max(1), ..self }
    }

    pub fn select_style(self, style: TearingStyle) -> Self {
        debug!("Style selected: {}", style);
        Self { style, ..self }
    }

    /// Put an error message on the snapshot.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), ..self }
    }

    /// Check preconditions and move into the generating stage.
    ///
    /// The current snapshot is left untouched on failure so the caller can
    /// attach the error with [`Session::with_error`].
    pub fn begin_generation(&self) -> Result<(Session, GenerationTicket), SessionError> {
        if self.generating {
            return Err(SessionError::AlreadyGenerating);
        }
        let api_key = self.api_key.clone().ok_or(SessionError::MissingApiKey)?;
        let image = self.image.clone().ok_or(SessionError::NoImage)?;
        let mask = self.mask.clone().ok_or(SessionError::NoMask)?;

        let ticket = GenerationTicket { session_id: self.id, api_key, image, mask, style: self.style };
        info!("🎨 Generation started for session {} (style: {})", self.id, self.style);

        let next =
            Self { generating: true, result: None, error: None, ..self.clone() };
        Ok((next, ticket))
    }

    /// Apply a finished generation. Results for another session are dropped.
    pub fn finish_generation(
        self,
        ticket: &GenerationTicket,
        result: Result<GeneratedImage, GenerationError>,
    ) -> Self {
        if ticket.session_id != self.id || !self.generating {
            debug!(
                "Dropping stale generation result for session {} (current {})",
                ticket.session_id, self.id
            );
            return self;
        }
        match result {
            Ok(image) => {
                info!("✅ Generation finished for session {}", self.id);
                Self { generating: false, result: Some(Arc::new(image)), error: None, ..self }
            }
            Err(e) => {
                warn!("Generation failed for session {}: {}", self.id, e);
                Self { generating: false, result: None, error: Some(e.user_message()), ..self }
            }
        }
    }

    /// Leave the result view and keep editing the same image and mask.
    pub fn dismiss_result(self) -> Self {
        Self { result: None, ..self }
    }

    /// Drop image, mask and result. Key, brush and style survive.
    pub fn reset(self) -> Self {
        let id = Uuid::new_v4();
        info!("Session reset, new session {}", id);
        Self {
            id,
            image: None,
            mask: None,
            generating: false,
            result: None,
            error: None,
            ..self
        }
    }
}
