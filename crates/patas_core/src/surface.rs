//! Drawing surfaces
//!
//! The only thing the core asks of a window is that it can draw a
//! [`Primitive`]. [`RenderTarget`] is the offscreen target windows draw
//! into: it keeps the frame's primitives in submission order.

use crate::Primitive;

/// Anything that can draw a primitive
pub trait Surface {
    fn draw(&mut self, primitive: &Primitive);
}

/// Offscreen target holding one frame's draw list
#[derive(Debug, Default)]
pub struct RenderTarget {
    width: u32,
    height: u32,
    draws: Vec<Primitive>,
}

impl RenderTarget {
    /// Create a target of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            draws: Vec::new(),
        }
    }

    /// Recreate the target at a new size, dropping anything drawn so far
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether draws are accepted; a zero-sized target (minimised window) drops them
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Discard the current frame
    pub fn clear(&mut self) {
        self.draws.clear();
    }

    /// Primitives drawn since the last clear
    pub fn draws(&self) -> &[Primitive] {
        &self.draws
    }

    #[inline]
    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }
}

impl Surface for RenderTarget {
    fn draw(&mut self, primitive: &Primitive) {
        if self.is_drawable() {
            self.draws.push(primitive.clone());
        }
    }
}
