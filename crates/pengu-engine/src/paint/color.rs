/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// For opaque colors (`a == 1`) premultiplied and straight representations coincide,
/// which is the common case for surface clears.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);

    /// Creates a fully opaque color. Channels are taken as-is.
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Converts to the `wgpu` clear color (`f64` channels).
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_has_unit_alpha() {
        let c = Color::opaque(0.25, 0.5, 0.75);
        assert_eq!((c.r, c.g, c.b, c.a), (0.25, 0.5, 0.75, 1.0));
    }

    #[test]
    fn black_is_opaque_zero() {
        assert_eq!(Color::BLACK, Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 });
    }

    #[test]
    fn to_wgpu_widens_channels() {
        let c = Color::opaque(0.5, 0.25, 0.0).to_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (0.5, 0.25, 0.0, 1.0));
    }
}
