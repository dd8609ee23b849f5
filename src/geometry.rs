//! Fixed shape and label-position tables for 2 to 6 sets.
//!
//! All coordinates are in normalised axes space: `(0, 0)` is the bottom-left
//! corner, `(1, 1)` the top-right. The shapes are decorative approximations
//! and do not scale with set sizes.

use crate::error::VennError;
use crate::pattern::{Pattern, check_set_count};

/// An ellipse; `angle` is a counter-clockwise rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseSpec {
    pub center: (f32, f32),
    pub width: f32,
    pub height: f32,
    pub angle: f32,
}

/// A triangle given by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSpec {
    pub vertices: [(f32, f32); 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    Ellipse(EllipseSpec),
    Triangle(TriangleSpec),
}

const fn ellipse(x: f32, y: f32, width: f32, height: f32, angle: f32) -> ShapeSpec {
    ShapeSpec::Ellipse(EllipseSpec {
        center: (x, y),
        width,
        height,
        angle,
    })
}

const fn triangle(x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> ShapeSpec {
    ShapeSpec::Triangle(TriangleSpec {
        vertices: [(x1, y1), (x2, y2), (x3, y3)],
    })
}

static SHAPES_2: [ShapeSpec; 2] = [
    ellipse(0.375, 0.5, 0.5, 0.5, 0.0),
    ellipse(0.625, 0.5, 0.5, 0.5, 0.0),
];

static SHAPES_3: [ShapeSpec; 3] = [
    ellipse(0.333, 0.633, 0.5, 0.5, 0.0),
    ellipse(0.666, 0.633, 0.5, 0.5, 0.0),
    ellipse(0.5, 0.31, 0.5, 0.5, 0.0),
];

static SHAPES_4: [ShapeSpec; 4] = [
    ellipse(0.35, 0.4, 0.72, 0.45, 140.0),
    ellipse(0.45, 0.5, 0.72, 0.45, 140.0),
    ellipse(0.544, 0.5, 0.72, 0.45, 40.0),
    ellipse(0.644, 0.4, 0.72, 0.45, 40.0),
];

static SHAPES_5: [ShapeSpec; 5] = [
    ellipse(0.428, 0.449, 0.87, 0.5, 155.0),
    ellipse(0.469, 0.543, 0.87, 0.5, 82.0),
    ellipse(0.558, 0.523, 0.87, 0.5, 10.0),
    ellipse(0.578, 0.432, 0.87, 0.5, 118.0),
    ellipse(0.489, 0.383, 0.87, 0.5, 46.0),
];

static SHAPES_6: [ShapeSpec; 6] = [
    triangle(0.637, 0.921, 0.649, 0.274, 0.188, 0.667),
    triangle(0.981, 0.769, 0.335, 0.191, 0.393, 0.671),
    triangle(0.941, 0.397, 0.292, 0.475, 0.456, 0.747),
    triangle(0.662, 0.119, 0.316, 0.548, 0.662, 0.7),
    triangle(0.309, 0.081, 0.374, 0.718, 0.681, 0.488),
    triangle(0.016, 0.626, 0.726, 0.687, 0.522, 0.327),
];

type Anchor = (u8, f32, f32);

static LABELS_2: [Anchor; 3] = [(0b01, 0.74, 0.5), (0b10, 0.26, 0.5), (0b11, 0.5, 0.5)];

static LABELS_3: [Anchor; 7] = [
    (0b001, 0.5, 0.27),
    (0b010, 0.73, 0.65),
    (0b011, 0.61, 0.46),
    (0b100, 0.27, 0.65),
    (0b101, 0.39, 0.46),
    (0b110, 0.5, 0.65),
    (0b111, 0.5, 0.51),
];

static LABELS_4: [Anchor; 15] = [
    (0b0001, 0.85, 0.42),
    (0b0010, 0.68, 0.72),
    (0b0011, 0.77, 0.59),
    (0b0100, 0.32, 0.72),
    (0b0101, 0.71, 0.3),
    (0b0110, 0.5, 0.66),
    (0b0111, 0.65, 0.5),
    (0b1000, 0.14, 0.42),
    (0b1001, 0.5, 0.17),
    (0b1010, 0.29, 0.3),
    (0b1011, 0.39, 0.24),
    (0b1100, 0.23, 0.59),
    (0b1101, 0.61, 0.24),
    (0b1110, 0.35, 0.5),
    (0b1111, 0.5, 0.38),
];

static LABELS_5: [Anchor; 31] = [
    (0b00001, 0.27, 0.11),
    (0b00010, 0.72, 0.11),
    (0b00011, 0.55, 0.13),
    (0b00100, 0.91, 0.58),
    (0b00101, 0.78, 0.64),
    (0b00110, 0.84, 0.41),
    (0b00111, 0.76, 0.55),
    (0b01000, 0.51, 0.9),
    (0b01001, 0.39, 0.15),
    (0b01010, 0.42, 0.78),
    (0b01011, 0.5, 0.15),
    (0b01100, 0.67, 0.76),
    (0b01101, 0.7, 0.71),
    (0b01110, 0.51, 0.74),
    (0b01111, 0.64, 0.67),
    (0b10000, 0.1, 0.61),
    (0b10001, 0.2, 0.31),
    (0b10010, 0.76, 0.25),
    (0b10011, 0.65, 0.23),
    (0b10100, 0.18, 0.5),
    (0b10101, 0.21, 0.37),
    (0b10110, 0.81, 0.37),
    (0b10111, 0.74, 0.4),
    (0b11000, 0.27, 0.7),
    (0b11001, 0.34, 0.25),
    (0b11010, 0.33, 0.72),
    (0b11011, 0.51, 0.22),
    (0b11100, 0.25, 0.58),
    (0b11101, 0.28, 0.39),
    (0b11110, 0.36, 0.66),
    (0b11111, 0.51, 0.47),
];

static LABELS_6: [Anchor; 63] = [
    (0b000001, 0.212, 0.562),
    (0b000010, 0.43, 0.249),
    (0b000011, 0.356, 0.444),
    (0b000100, 0.609, 0.255),
    (0b000101, 0.323, 0.546),
    (0b000110, 0.513, 0.316),
    (0b000111, 0.523, 0.348),
    (0b001000, 0.747, 0.458),
    (0b001001, 0.325, 0.492),
    (0b001010, 0.670, 0.481),
    (0b001011, 0.359, 0.478),
    (0b001100, 0.653, 0.444),
    (0b001101, 0.344, 0.526),
    (0b001110, 0.653, 0.466),
    (0b001111, 0.363, 0.503),
    (0b010000, 0.75, 0.616),
    (0b010001, 0.682, 0.654),
    (0b010010, 0.402, 0.31),
    (0b010011, 0.392, 0.421),
    (0b010100, 0.653, 0.691),
    (0b010101, 0.651, 0.644),
    (0b010110, 0.49, 0.34),
    (0b010111, 0.468, 0.399),
    (0b011000, 0.692, 0.545),
    (0b011001, 0.666, 0.592),
    (0b011010, 0.665, 0.496),
    (0b011011, 0.374, 0.47),
    (0b011100, 0.653, 0.537),
    (0b011101, 0.652, 0.579),
    (0b011110, 0.653, 0.488),
    (0b011111, 0.389, 0.486),
    (0b100000, 0.553, 0.806),
    (0b100001, 0.313, 0.604),
    (0b100010, 0.388, 0.694),
    (0b100011, 0.375, 0.633),
    (0b100100, 0.605, 0.359),
    (0b100101, 0.334, 0.555),
    (0b100110, 0.582, 0.397),
    (0b100111, 0.542, 0.372),
    (0b101000, 0.468, 0.708),
    (0b101001, 0.355, 0.572),
    (0b101010, 0.42, 0.679),
    (0b101011, 0.375, 0.597),
    (0b101100, 0.641, 0.436),
    (0b101101, 0.348, 0.538),
    (0b101110, 0.635, 0.453),
    (0b101111, 0.37, 0.548),
    (0b110000, 0.594, 0.689),
    (0b110001, 0.579, 0.67),
    (0b110010, 0.398, 0.67),
    (0b110011, 0.395, 0.653),
    (0b110100, 0.633, 0.682),
    (0b110101, 0.616, 0.656),
    (0b110110, 0.587, 0.427),
    (0b110111, 0.526, 0.415),
    (0b111000, 0.495, 0.677),
    (0b111001, 0.505, 0.648),
    (0b111010, 0.428, 0.663),
    (0b111011, 0.43, 0.631),
    (0b111100, 0.639, 0.524),
    (0b111101, 0.591, 0.604),
    (0b111110, 0.622, 0.477),
    (0b111111, 0.501, 0.523),
];

/// Shapes for `n` sets, in set order. Ellipses below six sets, triangles at six.
pub fn shapes_for(n: usize) -> Result<&'static [ShapeSpec], VennError> {
    check_set_count(n)?;
    Ok(match n {
        2 => &SHAPES_2,
        3 => &SHAPES_3,
        4 => &SHAPES_4,
        5 => &SHAPES_5,
        _ => &SHAPES_6,
    })
}

/// Text anchor of every pattern for `n` sets, in pattern order.
pub fn label_positions_for(n: usize) -> Result<Vec<(Pattern, (f32, f32))>, VennError> {
    check_set_count(n)?;
    let table: &[Anchor] = match n {
        2 => &LABELS_2,
        3 => &LABELS_3,
        4 => &LABELS_4,
        5 => &LABELS_5,
        _ => &LABELS_6,
    };
    table
        .iter()
        .map(|&(bits, x, y)| Ok((Pattern::new(n, bits)?, (x, y))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_set_count_has_complete_tables() {
        for n in 2..=6 {
            assert_eq!(shapes_for(n).unwrap().len(), n);

            let positions = label_positions_for(n).unwrap();
            let patterns: Vec<Pattern> = positions.iter().map(|(p, _)| *p).collect();
            let expected: Vec<Pattern> = Pattern::all(n).unwrap().collect();
            assert_eq!(patterns, expected, "label table for {n} sets");

            for (_, (x, y)) in positions {
                assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
            }
        }
    }

    #[test]
    fn shape_kind_depends_on_set_count() {
        for n in 2..=5 {
            assert!(
                shapes_for(n)
                    .unwrap()
                    .iter()
                    .all(|s| matches!(s, ShapeSpec::Ellipse(_)))
            );
        }
        assert!(
            shapes_for(6)
                .unwrap()
                .iter()
                .all(|s| matches!(s, ShapeSpec::Triangle(_)))
        );
    }

    #[test]
    fn triangles_read_vertex_pairs() {
        let ShapeSpec::Triangle(t) = shapes_for(6).unwrap()[0] else {
            panic!("expected triangle");
        };
        assert_eq!(t.vertices, [(0.637, 0.921), (0.649, 0.274), (0.188, 0.667)]);
    }

    #[test]
    fn out_of_range_set_counts_fail() {
        assert_eq!(shapes_for(1), Err(VennError::SetCount(1)));
        assert_eq!(label_positions_for(7).err(), Some(VennError::SetCount(7)));
    }
}
