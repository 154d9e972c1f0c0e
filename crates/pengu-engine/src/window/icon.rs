use std::borrow::Cow;
use std::f32::consts::TAU;

use anyhow::Result;
use winit::window::Icon;

/// Edge length of the built-in icon, in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 32;

/// Which window icon to install.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum IconPolicy {
    /// The built-in icon (see [`default_icon_rgba`]).
    #[default]
    Default,
    /// Caller-provided straight-alpha RGBA8 pixels, row-major.
    Custom {
        rgba: Vec<u8>,
        width: u32,
        height: u32,
    },
}

impl IconPolicy {
    /// Returns the pixels and dimensions this policy resolves to.
    pub fn rgba(&self) -> (Cow<'_, [u8]>, u32, u32) {
        match self {
            IconPolicy::Default => (
                Cow::Owned(default_icon_rgba()),
                DEFAULT_ICON_SIZE,
                DEFAULT_ICON_SIZE,
            ),
            IconPolicy::Custom { rgba, width, height } => (Cow::Borrowed(rgba), *width, *height),
        }
    }

    pub(crate) fn to_icon(&self) -> Result<Icon> {
        let (rgba, width, height) = self.rgba();
        Ok(Icon::from_rgba(rgba.into_owned(), width, height)?)
    }
}

/// Generates the built-in icon: a disc whose rim cycles through the same
/// three phase-shifted hues the default app animates, on a transparent
/// background.
pub fn default_icon_rgba() -> Vec<u8> {
    let size = DEFAULT_ICON_SIZE as usize;
    let center = (DEFAULT_ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = DEFAULT_ICON_SIZE as f32 / 2.0 - 1.0;

    let mut out = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;

            if dx.hypot(dy) > radius {
                out.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }

            let angle = dy.atan2(dx);
            let channel = |phase: f32| ((0.5 + 0.5 * (angle + phase).sin()) * 255.0).round() as u8;
            out.extend_from_slice(&[channel(0.0), channel(TAU / 3.0), channel(2.0 * TAU / 3.0), 255]);
        }
    }

    out
}
