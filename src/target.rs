//! The render target collaborator: the pivot handle that receives one
//! transform per tick.

use crate::error::CubeError;
use crate::projection::RenderInstruction;

/// Receives the cube's transform once per tick.
///
/// Errors are reported by the render loop and do not stop it; the next
/// tick tries again.
pub trait RenderTarget {
    /// Apply `instruction` to the pivot.
    fn apply_transform(&mut self, instruction: &RenderInstruction) -> Result<(), CubeError>;
}

/// Closures can act as render targets.
impl<F> RenderTarget for F
where
    F: FnMut(&RenderInstruction) -> Result<(), CubeError>,
{
    fn apply_transform(&mut self, instruction: &RenderInstruction) -> Result<(), CubeError> {
        self(instruction)
    }
}
