use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VennError;
use crate::pattern::{MAX_SETS, MIN_SETS};

/// Default fill colors, one per set.
pub const DEFAULT_RGB: [(u8, u8, u8); 6] = [
    (92, 192, 98),
    (90, 155, 212),
    (246, 236, 86),
    (241, 90, 96),
    (255, 117, 0),
    (82, 82, 190),
];

pub const DEFAULT_ALPHA: f32 = 0.7;

const NAMED_COLORS: &[(&str, &str)] = &[
    ("b", "#0000ff"),
    ("g", "#008000"),
    ("r", "#ff0000"),
    ("c", "#00bfbf"),
    ("m", "#bf00bf"),
    ("y", "#bfbf00"),
    ("k", "#000000"),
    ("w", "#ffffff"),
    ("tab:blue", "#1f77b4"),
    ("tab:orange", "#ff7f0e"),
    ("tab:green", "#2ca02c"),
    ("tab:red", "#d62728"),
    ("tab:purple", "#9467bd"),
    ("tab:brown", "#8c564b"),
    ("tab:pink", "#e377c2"),
    ("tab:gray", "#7f7f7f"),
    ("tab:olive", "#bcbd22"),
    ("tab:cyan", "#17becf"),
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("silver", "#c0c0c0"),
    ("red", "#ff0000"),
    ("darkred", "#8b0000"),
    ("crimson", "#dc143c"),
    ("salmon", "#fa8072"),
    ("tomato", "#ff6347"),
    ("orange", "#ffa500"),
    ("darkorange", "#ff8c00"),
    ("gold", "#ffd700"),
    ("yellow", "#ffff00"),
    ("khaki", "#f0e68c"),
    ("olive", "#808000"),
    ("green", "#008000"),
    ("lime", "#00ff00"),
    ("limegreen", "#32cd32"),
    ("seagreen", "#2e8b57"),
    ("darkgreen", "#006400"),
    ("teal", "#008080"),
    ("cyan", "#00ffff"),
    ("aqua", "#00ffff"),
    ("turquoise", "#40e0d0"),
    ("skyblue", "#87ceeb"),
    ("steelblue", "#4682b4"),
    ("royalblue", "#4169e1"),
    ("blue", "#0000ff"),
    ("navy", "#000080"),
    ("indigo", "#4b0082"),
    ("purple", "#800080"),
    ("violet", "#ee82ee"),
    ("magenta", "#ff00ff"),
    ("fuchsia", "#ff00ff"),
    ("orchid", "#da70d6"),
    ("pink", "#ffc0cb"),
    ("hotpink", "#ff69b4"),
    ("brown", "#a52a2a"),
    ("chocolate", "#d2691e"),
    ("tan", "#d2b48c"),
    ("beige", "#f5f5dc"),
];

/// A color with straight (non-premultiplied) channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            alpha,
        )
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
    }
}

/// A user-supplied color: a name (`"tab:blue"`, `"salmon"`), a hex string
/// (`"#rgb"`, `"#rrggbb"`, `"#rrggbbaa"`) or RGB/RGBA channels in `0..=1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Rgb([f32; 3]),
    Rgba([f32; 4]),
    Text(String),
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Text(value.to_string())
    }
}

impl ColorSpec {
    /// Convert to RGBA; `alpha` always replaces any alpha the color carries.
    pub fn to_rgba(&self, alpha: f32) -> Result<Rgba, VennError> {
        let unsupported = || VennError::UnsupportedColor(self.describe());
        let in_range = |v: &f32| (0.0..=1.0).contains(v);

        match self {
            ColorSpec::Rgb(c) if c.iter().all(in_range) => Ok(Rgba::new(c[0], c[1], c[2], alpha)),
            ColorSpec::Rgba(c) if c.iter().all(in_range) => {
                Ok(Rgba::new(c[0], c[1], c[2], alpha))
            }
            ColorSpec::Rgb(_) | ColorSpec::Rgba(_) => Err(unsupported()),
            ColorSpec::Text(text) => {
                let key = text.trim().to_ascii_lowercase();
                let hex = if key.starts_with('#') {
                    key.as_str()
                } else {
                    NAMED_COLORS
                        .iter()
                        .find(|(name, _)| *name == key)
                        .map(|(_, hex)| *hex)
                        .ok_or_else(unsupported)?
                };
                parse_hex(hex)
                    .map(|c| c.with_alpha(alpha))
                    .ok_or_else(unsupported)
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            ColorSpec::Text(text) => text.clone(),
            ColorSpec::Rgb(c) => format!("{c:?}"),
            ColorSpec::Rgba(c) => format!("{c:?}"),
        }
    }
}

fn parse_hex(value: &str) -> Option<Rgba> {
    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut c = [0u8; 3];
            for (slot, i) in c.iter_mut().zip(0..3) {
                let v = channel(&hex[i..i + 1])?;
                *slot = v * 17;
            }
            Some(Rgba::from_rgb8(c[0], c[1], c[2], 1.0))
        }
        6 | 8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = if hex.len() == 8 {
                f32::from(channel(&hex[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Rgba::from_rgb8(r, g, b, a))
        }
        _ => None,
    }
}

/// Fill colors for `n_colors` shapes.
///
/// The palette (the default table when `None`) is rotated left by `shift`
/// and truncated to `n_colors`. A `shift` at least as long as the palette
/// leaves it unrotated.
pub fn resolve_colors(
    palette: Option<&[ColorSpec]>,
    n_colors: usize,
    shift: usize,
    alpha: f32,
) -> Result<Vec<Rgba>, VennError> {
    if !(MIN_SETS..=MAX_SETS).contains(&n_colors) {
        return Err(VennError::ColorCount(n_colors));
    }
    if shift >= MAX_SETS {
        return Err(VennError::Shift(shift));
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(VennError::Alpha(alpha));
    }

    let mut colors = match palette {
        None => DEFAULT_RGB
            .iter()
            .map(|&(r, g, b)| Rgba::from_rgb8(r, g, b, alpha))
            .collect::<Vec<_>>(),
        Some(specs) => specs
            .iter()
            .map(|spec| spec.to_rgba(alpha))
            .collect::<Result<Vec<_>, _>>()?,
    };
    debug!(
        custom = palette.is_some(),
        available = colors.len(),
        shift,
        "resolving palette"
    );

    if shift < colors.len() {
        colors.rotate_left(shift);
    }
    if colors.len() < n_colors {
        return Err(VennError::PaletteTooShort {
            available: colors.len(),
            needed: n_colors,
        });
    }
    colors.truncate(n_colors);
    Ok(colors)
}
