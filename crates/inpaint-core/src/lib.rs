//! # Inpaint Core
//!
//! Local half of the image-edit pipeline.
//!
//! ```text
//! upload bytes ──► upload::decode_upload ──► SourceImage
//!                                              │
//!                        geometry::normalize ◄─┘
//!                                │
//!                         ProcessedImage ──► mask::MaskCanvas ──► MaskExport
//!                                │                                   │
//!                                └──────────► session::Session ◄─────┘
//! ```
//!
//! Nothing here talks to the network; the remote call lives in
//! `inpaint-client`.

#![allow(
    clippy::redundant_else,
    reason = "Explicit else blocks improve readability in complex control flow"
)]
#![allow(
    clippy::derive_partial_eq_without_eq,
    reason = "Pixel-space types hold floats and intentionally don't implement Eq"
)]
// Test-only lints: allow panic!, float comparisons, etc. in test code
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::float_cmp,
        clippy::assertions_on_result_states
    )
)]

pub mod config;
pub mod geometry;
pub mod mask;
pub mod session;
pub mod upload;

// Re-export commonly used types
pub use config::load_config;
pub use geometry::{normalize, normalize_bytes, plan_geometry, GeometryPlan, ProcessedImage};
pub use mask::{MaskCanvas, MaskExport, PointerEvent, SurfaceRect};
pub use session::{GenerationTicket, Session, SessionError, SessionStore, Stage};
pub use upload::{decode_data_url, decode_upload, read_upload, SourceImage};
