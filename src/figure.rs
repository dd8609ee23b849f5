//! In-memory drawing surface.
//!
//! A [`Figure`] owns a single square [`Axes`] whose data space is the unit
//! square, y pointing up. Artists are drawn in insertion order, so later
//! shapes paint over earlier ones.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colors::Rgba;
use crate::error::VennError;
use crate::fonts::TextMeasure;
use crate::geometry::EllipseSpec;
use crate::xml::{escape_xml, fmt_num};

const POINTS_PER_INCH: f32 = 72.0;

// Subplot box as fractions of the figure.
const SUBPLOT_LEFT: f32 = 0.125;
const SUBPLOT_RIGHT: f32 = 0.9;
const SUBPLOT_BOTTOM: f32 = 0.11;
const SUBPLOT_TOP: f32 = 0.88;

// Legend spacing, in multiples of the legend font size.
const LEGEND_BORDER_PAD: f32 = 0.5;
const LEGEND_INNER_PAD: f32 = 0.4;
const LEGEND_HANDLE_WIDTH: f32 = 2.0;
const LEGEND_HANDLE_GAP: f32 = 0.8;
const LEGEND_ROW_HEIGHT: f32 = 1.4;

/// Where a legend sits inside the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LegendLoc {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

const LEGEND_LOCATIONS: &[(&str, LegendLoc)] = &[
    ("upper right", LegendLoc::UpperRight),
    ("upper left", LegendLoc::UpperLeft),
    ("lower left", LegendLoc::LowerLeft),
    ("lower right", LegendLoc::LowerRight),
    ("right", LegendLoc::Right),
    ("center left", LegendLoc::CenterLeft),
    ("center right", LegendLoc::CenterRight),
    ("lower center", LegendLoc::LowerCenter),
    ("upper center", LegendLoc::UpperCenter),
    ("center", LegendLoc::Center),
];

impl LegendLoc {
    pub fn as_str(self) -> &'static str {
        LEGEND_LOCATIONS
            .iter()
            .find(|(_, loc)| *loc == self)
            .map(|(name, _)| *name)
            .unwrap_or("upper right")
    }

    /// Horizontal and vertical alignment: -1 start, 0 center, 1 end,
    /// with y counted from the top.
    fn alignment(self) -> (i8, i8) {
        match self {
            LegendLoc::UpperRight => (1, -1),
            LegendLoc::UpperLeft => (-1, -1),
            LegendLoc::LowerLeft => (-1, 1),
            LegendLoc::LowerRight => (1, 1),
            LegendLoc::Right | LegendLoc::CenterRight => (1, 0),
            LegendLoc::CenterLeft => (-1, 0),
            LegendLoc::LowerCenter => (0, 1),
            LegendLoc::UpperCenter => (0, -1),
            LegendLoc::Center => (0, 0),
        }
    }
}

impl FromStr for LegendLoc {
    type Err = VennError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        if normalized == "best" {
            return Ok(LegendLoc::UpperRight);
        }
        LEGEND_LOCATIONS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, loc)| *loc)
            .ok_or_else(|| VennError::UnknownLegendLocation(s.to_string()))
    }
}

impl TryFrom<String> for LegendLoc {
    type Error = VennError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LegendLoc> for String {
    fn from(value: LegendLoc) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub entries: Vec<(String, Rgba)>,
    pub loc: LegendLoc,
    pub font_size: f32,
}

/// Something drawn on the axes. Coordinates are in axes data space and
/// font sizes in points.
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Ellipse { spec: EllipseSpec, fill: Rgba },
    Polygon { points: Vec<(f32, f32)>, fill: Rgba },
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        color: Rgba,
    },
}

/// The single plotting region of a [`Figure`]: equal aspect, no frame,
/// no ticks, limits `[0, 1]` on both axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    artists: Vec<Artist>,
    legend: Option<Legend>,
    title: Option<(String, f32)>,
}

impl Axes {
    pub fn add_ellipse(&mut self, spec: EllipseSpec, fill: Rgba) {
        self.artists.push(Artist::Ellipse { spec, fill });
    }

    pub fn add_polygon(&mut self, points: Vec<(f32, f32)>, fill: Rgba) {
        self.artists.push(Artist::Polygon { points, fill });
    }

    /// Text centered on `(x, y)`.
    pub fn add_text(&mut self, x: f32, y: f32, text: impl Into<String>, font_size: f32) {
        self.artists.push(Artist::Text {
            x,
            y,
            text: text.into(),
            font_size,
            color: Rgba::BLACK,
        });
    }

    /// Replaces any previous legend.
    pub fn set_legend(&mut self, entries: Vec<(String, Rgba)>, loc: LegendLoc, font_size: f32) {
        self.legend = Some(Legend {
            entries,
            loc,
            font_size,
        });
    }

    pub fn set_title(&mut self, title: impl Into<String>, font_size: f32) {
        self.title = Some((title.into(), font_size));
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(|(t, _)| t.as_str())
    }
}

/// Drawing surface: a page of `figsize` inches at `dpi` holding one [`Axes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    width_in: f32,
    height_in: f32,
    dpi: f32,
    axes: Axes,
}

/// Pixel placement of the axes square.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f32,
    top: f32,
    side: f32,
    px_per_pt: f32,
}

impl Frame {
    fn x(&self, x: f32) -> f32 {
        self.left + x * self.side
    }

    fn y(&self, y: f32) -> f32 {
        self.top + (1.0 - y) * self.side
    }

    fn pt(&self, points: f32) -> f32 {
        points * self.px_per_pt
    }
}

impl Figure {
    pub fn new(figsize: (f32, f32), dpi: f32) -> Result<Self, VennError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(figsize.0) || !positive(figsize.1) {
            return Err(VennError::InvalidFigure(format!(
                "figure size must be positive, got {:?}",
                figsize
            )));
        }
        if !positive(dpi) {
            return Err(VennError::InvalidFigure(format!(
                "dpi must be positive, got {}",
                dpi
            )));
        }
        Ok(Self {
            width_in: figsize.0,
            height_in: figsize.1,
            dpi,
            axes: Axes::default(),
        })
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    /// Size in pixels.
    pub fn size_px(&self) -> (f32, f32) {
        (self.width_in * self.dpi, self.height_in * self.dpi)
    }

    fn frame(&self) -> Frame {
        let (w, h) = self.size_px();
        let box_w = (SUBPLOT_RIGHT - SUBPLOT_LEFT) * w;
        let box_h = (SUBPLOT_TOP - SUBPLOT_BOTTOM) * h;
        let side = box_w.min(box_h);
        Frame {
            left: SUBPLOT_LEFT * w + (box_w - side) / 2.0,
            top: (1.0 - SUBPLOT_TOP) * h + (box_h - side) / 2.0,
            side,
            px_per_pt: self.dpi / POINTS_PER_INCH,
        }
    }

    /// Serialise to a standalone SVG document. `measure` sizes the legend box.
    pub fn to_svg(&self, measure: &mut impl TextMeasure) -> String {
        let (w, h) = self.size_px();
        let frame = self.frame();
        let mut body = String::new();

        for artist in &self.axes.artists {
            render_artist(&mut body, artist, &frame);
        }
        if let Some(legend) = &self.axes.legend {
            render_legend(&mut body, legend, &frame, measure);
        }
        if let Some((title, font_size)) = &self.axes.title {
            let _ = write!(
                body,
                r##"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle" fill="#000000">{}</text>"##,
                fmt_num(frame.x(0.5)),
                fmt_num(frame.top - frame.pt(*font_size) * 0.5),
                fmt_num(frame.pt(*font_size)),
                escape_xml(title),
            );
        }

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}"><rect width="100%" height="100%" fill="#ffffff" />{body}</svg>"##,
            w = fmt_num(w),
            h = fmt_num(h),
            body = body,
        )
    }
}

fn fill_attrs(color: Rgba) -> String {
    format!(
        r#"fill="{}" fill-opacity="{}""#,
        color.to_hex(),
        fmt_num(color.a)
    )
}

fn render_artist(out: &mut String, artist: &Artist, frame: &Frame) {
    match artist {
        Artist::Ellipse { spec, fill } => {
            let cx = frame.x(spec.center.0);
            let cy = frame.y(spec.center.1);
            // SVG rotates clockwise in a y-down space
            let _ = write!(
                out,
                r#"<ellipse cx="{cx}" cy="{cy}" rx="{}" ry="{}" transform="rotate({} {cx} {cy})" {} />"#,
                fmt_num(spec.width * frame.side / 2.0),
                fmt_num(spec.height * frame.side / 2.0),
                fmt_num(-spec.angle),
                fill_attrs(*fill),
                cx = fmt_num(cx),
                cy = fmt_num(cy),
            );
        }
        Artist::Polygon { points, fill } => {
            let points: Vec<String> = points
                .iter()
                .map(|&(x, y)| format!("{},{}", fmt_num(frame.x(x)), fmt_num(frame.y(y))))
                .collect();
            let _ = write!(
                out,
                r#"<polygon points="{}" {} />"#,
                points.join(" "),
                fill_attrs(*fill),
            );
        }
        Artist::Text {
            x,
            y,
            text,
            font_size,
            color,
        } => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle" dominant-baseline="central" {}>{}</text>"#,
                fmt_num(frame.x(*x)),
                fmt_num(frame.y(*y)),
                fmt_num(frame.pt(*font_size)),
                fill_attrs(*color),
                escape_xml(text),
            );
        }
    }
}

fn render_legend(out: &mut String, legend: &Legend, frame: &Frame, measure: &mut impl TextMeasure) {
    if legend.entries.is_empty() {
        return;
    }

    let em = frame.pt(legend.font_size);
    let text_width = legend
        .entries
        .iter()
        .map(|(name, _)| measure.measure_text(name, em).0)
        .fold(0.0_f32, f32::max);

    let box_w = em * (2.0 * LEGEND_INNER_PAD + LEGEND_HANDLE_WIDTH + LEGEND_HANDLE_GAP) + text_width;
    let box_h = em * (2.0 * LEGEND_INNER_PAD + LEGEND_ROW_HEIGHT * legend.entries.len() as f32);
    let pad = em * LEGEND_BORDER_PAD;

    let (ha, va) = legend.loc.alignment();
    let left = match ha {
        -1 => frame.left + pad,
        0 => frame.left + (frame.side - box_w) / 2.0,
        _ => frame.left + frame.side - pad - box_w,
    };
    let top = match va {
        -1 => frame.top + pad,
        0 => frame.top + (frame.side - box_h) / 2.0,
        _ => frame.top + frame.side - pad - box_h,
    };

    let _ = write!(
        out,
        r##"<g class="legend"><rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="#ffffff" fill-opacity="0.8" stroke="#cccccc" stroke-width="1" />"##,
        fmt_num(left),
        fmt_num(top),
        fmt_num(box_w),
        fmt_num(box_h),
        fmt_num(em * 0.2),
    );

    for (i, (name, color)) in legend.entries.iter().enumerate() {
        let row_mid = top + em * (LEGEND_INNER_PAD + LEGEND_ROW_HEIGHT * (i as f32 + 0.5));
        let handle_x = left + em * LEGEND_INNER_PAD;
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {} />"#,
            fmt_num(handle_x),
            fmt_num(row_mid - em * 0.35),
            fmt_num(em * LEGEND_HANDLE_WIDTH),
            fmt_num(em * 0.7),
            fill_attrs(*color),
        );
        let _ = write!(
            out,
            r##"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" dominant-baseline="central" fill="#000000">{}</text>"##,
            fmt_num(handle_x + em * (LEGEND_HANDLE_WIDTH + LEGEND_HANDLE_GAP)),
            fmt_num(row_mid),
            fmt_num(em),
            escape_xml(name),
        );
    }
    out.push_str("</g>");
}
