/// A single touch-driven perturbation of the fluid.
///
/// Emitters have no identity or lifetime of their own: the controller keeps
/// the ones registered since the last frame and drops them all after the
/// frame has been advanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEmitter {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    /// Packed ARGB, as handed over by `android.graphics.Color`.
    pub color: u32,
}

impl TouchEmitter {
    pub fn new(x: f32, y: f32, dx: f32, dy: f32, color: u32) -> Self {
        Self { x, y, dx, dy, color }
    }

    /// Alpha channel of the packed color.
    pub fn alpha(&self) -> u8 {
        (self.color >> 24) as u8
    }

    /// Red, green and blue channels of the packed color.
    pub fn rgb(&self) -> [u8; 3] {
        [
            (self.color >> 16) as u8,
            (self.color >> 8) as u8,
            self.color as u8,
        ]
    }
}
