//! Mask canvas.
//!
//! Pointer input arrives in display space (the surface may be scaled by
//! layout). Everything stored or rendered here lives in processed-image pixel
//! space, so an exported mask is always exactly the processed image's size.

mod canvas;
mod raster;
mod surface;


pub use canvas::{MaskCanvas, MaskExport, MaskStroke, PointerEvent};
pub use raster::{MaskRaster, MASK_COLOR};
pub use surface::{PixelPoint, SurfaceRect};
