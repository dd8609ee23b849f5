use tracing::{debug, warn};

use crate::colors::{ColorSpec, DEFAULT_ALPHA, resolve_colors};
use crate::error::VennError;
use crate::figure::{Figure, LegendLoc};
use crate::geometry::{ShapeSpec, label_positions_for, shapes_for};
use crate::labels::Labels;
use crate::pattern::check_set_count;

const DEFAULT_NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Everything about a diagram except its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct VennOptions {
    /// Legend entries, one per set. Empty means `A`, `B`, ...
    pub names: Vec<String>,
    /// Fill colors; `None` uses the built-in palette.
    pub palette: Option<Vec<ColorSpec>>,
    pub shift: usize,
    pub alpha: f32,
    /// Width and height in inches.
    pub figsize: (f32, f32),
    pub dpi: f32,
    /// Label font size in points.
    pub font_size: f32,
    /// `None` draws no legend.
    pub legend_loc: Option<LegendLoc>,
}

impl Default for VennOptions {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            palette: None,
            shift: 0,
            alpha: DEFAULT_ALPHA,
            figsize: (6.0, 6.0),
            dpi: 96.0,
            font_size: 13.0,
            legend_loc: Some(LegendLoc::UpperRight),
        }
    }
}

/// Number of sets the label patterns describe.
fn set_count(labels: &Labels) -> Result<usize, VennError> {
    let mut patterns = labels.keys();
    let first = patterns.next().ok_or(VennError::EmptyLabels)?.len();
    if let Some(other) = patterns.find(|p| p.len() != first) {
        return Err(VennError::MixedPatternLengths(first, other.len()));
    }
    check_set_count(first)?;
    Ok(first)
}

/// Draw a Venn diagram with `labels` placed in their regions.
///
/// Every input is validated before anything is drawn. Patterns with no
/// entry in `labels` are drawn as empty text.
pub fn venn(labels: &Labels, options: &VennOptions) -> Result<Figure, VennError> {
    let n = set_count(labels)?;

    let names: Vec<String> = if options.names.is_empty() {
        DEFAULT_NAMES[..n].iter().map(|s| s.to_string()).collect()
    } else if options.names.len() != n {
        return Err(VennError::NamesLength {
            expected: n,
            got: options.names.len(),
        });
    } else {
        options.names.clone()
    };

    if !options.font_size.is_finite() || options.font_size <= 0.0 {
        return Err(VennError::FontSize(options.font_size));
    }

    let colors = resolve_colors(
        options.palette.as_deref(),
        n,
        options.shift,
        options.alpha,
    )?;
    let shapes = shapes_for(n)?;
    let positions = label_positions_for(n)?;
    let mut figure = Figure::new(options.figsize, options.dpi)?;

    debug!(sets = n, labels = labels.len(), "rendering venn diagram");
    let axes = figure.axes_mut();

    for (shape, color) in shapes.iter().zip(&colors) {
        match shape {
            ShapeSpec::Ellipse(spec) => axes.add_ellipse(*spec, *color),
            ShapeSpec::Triangle(spec) => axes.add_polygon(spec.vertices.to_vec(), *color),
        }
    }

    for (pattern, (x, y)) in positions {
        let text = match labels.get(&pattern) {
            Some(text) => text.as_str(),
            None => {
                warn!(%pattern, "no label for pattern; drawing it blank");
                ""
            }
        };
        axes.add_text(x, y, text, options.font_size);
    }

    if let Some(loc) = options.legend_loc {
        axes.set_legend(
            names.into_iter().zip(colors).collect(),
            loc,
            options.font_size,
        );
    }

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Artist;
    use crate::labels::{Fill, compute_labels};
    use crate::pattern::Pattern;

    fn texts(figure: &Figure) -> Vec<String> {
        figure
            .axes()
            .artists()
            .iter()
            .filter_map(|a| match a {
                Artist::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn two_sets_draw_two_ellipses_and_three_labels() {
        let labels = compute_labels(&[vec![1, 2, 3], vec![2, 3, 4]], &[Fill::Number]).unwrap();
        let fig = venn(&labels, &VennOptions::default()).unwrap();

        let ellipses = fig
            .axes()
            .artists()
            .iter()
            .filter(|a| matches!(a, Artist::Ellipse { .. }))
            .count();
        assert_eq!(ellipses, 2);
        assert_eq!(texts(&fig), vec!["1", "1", "2"]);

        let legend = fig.axes().legend().unwrap();
        let names: Vec<&str> = legend.entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(legend.loc, LegendLoc::UpperRight);
    }

    #[test]
    fn six_sets_draw_triangles() {
        let sets: Vec<Vec<u32>> = (0..6).map(|i| vec![i, 100]).collect();
        let labels = compute_labels(&sets, &[Fill::Number]).unwrap();
        let fig = venn(&labels, &VennOptions::default()).unwrap();

        let polygons: Vec<&Artist> = fig
            .axes()
            .artists()
            .iter()
            .filter(|a| matches!(a, Artist::Polygon { .. }))
            .collect();
        assert_eq!(polygons.len(), 6);
        assert!(matches!(polygons[0], Artist::Polygon { points, .. } if points.len() == 3));
        assert_eq!(texts(&fig).len(), 63);
    }

    #[test]
    fn wrong_name_count_fails_before_drawing() {
        let labels = compute_labels(&[vec![1], vec![2], vec![3]], &[Fill::Number]).unwrap();
        let options = VennOptions {
            names: vec!["x".into(), "y".into()],
            ..VennOptions::default()
        };
        let err = venn(&labels, &options).unwrap_err();
        assert_eq!(err, VennError::NamesLength { expected: 3, got: 2 });
        assert!(err.is_configuration());
    }

    #[test]
    fn missing_patterns_render_blank() {
        let mut labels = Labels::new();
        labels.insert("11".parse::<Pattern>().unwrap(), "both".to_string());
        let fig = venn(&labels, &VennOptions::default()).unwrap();
        assert_eq!(texts(&fig), vec!["", "", "both"]);
    }

    #[test]
    fn custom_names_and_no_legend() {
        let labels = compute_labels(&[vec![1], vec![2]], &[Fill::Number]).unwrap();
        let options = VennOptions {
            names: vec!["left".into(), "right".into()],
            legend_loc: None,
            ..VennOptions::default()
        };
        let fig = venn(&labels, &options).unwrap();
        assert!(fig.axes().legend().is_none());
    }

    #[test]
    fn shapes_take_shifted_colors() {
        let labels = compute_labels(&[vec![1], vec![2]], &[Fill::Number]).unwrap();
        let options = VennOptions {
            shift: 2,
            ..VennOptions::default()
        };
        let fig = venn(&labels, &options).unwrap();
        let expected = resolve_colors(None, 2, 2, DEFAULT_ALPHA).unwrap();
        let fills: Vec<_> = fig
            .axes()
            .artists()
            .iter()
            .filter_map(|a| match a {
                Artist::Ellipse { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills, expected);
    }

    #[test]
    fn bad_label_maps_fail() {
        assert_eq!(
            venn(&Labels::new(), &VennOptions::default()),
            Err(VennError::EmptyLabels)
        );

        let mut labels = Labels::new();
        labels.insert("11".parse::<Pattern>().unwrap(), String::new());
        labels.insert("111".parse::<Pattern>().unwrap(), String::new());
        assert_eq!(
            venn(&labels, &VennOptions::default()),
            Err(VennError::MixedPatternLengths(2, 3))
        );
    }

    #[test]
    fn bad_alpha_or_font_size_draws_nothing() {
        let labels = compute_labels(&[vec![1], vec![2]], &[Fill::Number]).unwrap();

        let nan_alpha = VennOptions {
            alpha: f32::NAN,
            ..VennOptions::default()
        };
        assert!(matches!(
            venn(&labels, &nan_alpha),
            Err(VennError::Alpha(a)) if a.is_nan()
        ));

        let too_opaque = VennOptions {
            alpha: 2.5,
            ..VennOptions::default()
        };
        assert_eq!(venn(&labels, &too_opaque), Err(VennError::Alpha(2.5)));

        let negative_font = VennOptions {
            font_size: -5.0,
            ..VennOptions::default()
        };
        assert_eq!(venn(&labels, &negative_font), Err(VennError::FontSize(-5.0)));

        let zero_font = VennOptions {
            font_size: 0.0,
            ..VennOptions::default()
        };
        assert_eq!(venn(&labels, &zero_font), Err(VennError::FontSize(0.0)));
    }

    #[test]
    fn invalid_palette_fails() {
        let labels = compute_labels(&[vec![1], vec![2]], &[Fill::Number]).unwrap();
        let options = VennOptions {
            palette: Some(vec![ColorSpec::from("red"), ColorSpec::from("mauve-ish")]),
            ..VennOptions::default()
        };
        assert_eq!(
            venn(&labels, &options),
            Err(VennError::UnsupportedColor("mauve-ish".into()))
        );
    }
}
