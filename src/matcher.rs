//! Aspect matching over all unordered pairs of registered points.

use serde::{Deserialize, Serialize};

use crate::table::{AspectTable, ASPECT_VARIANTS, CONJUNCTION, CONJUNCTION_ORB_MINUTES};
use crate::{Point, Position, CIRCLE_MINUTES};

/// Shortest-arc separation between two positions on the 21600-unit circle.
/// Symmetric, zero for equal positions, never above 10800. Inputs are
/// reduced modulo the full circle first, as in [`crate::codec::decode`].
pub fn circular_distance(a: Position, b: Position) -> u32 {
    let a = a % CIRCLE_MINUTES;
    let b = b % CIRCLE_MINUTES;
    let diff = if a > b { a - b } else { b - a };
    diff.min(CIRCLE_MINUTES - diff)
}

/// One detected aspect between two points.
///
/// `orb_degrees` is the actual residual separation in degrees, never the
/// configured tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectResult {
    pub from: String,
    pub to: String,
    pub aspect: String,
    pub orb_degrees: f64,
}

impl AspectResult {
    /// Display form of the orb, e.g. `2.31°`.
    pub fn orb_display(&self) -> String {
        format!("{:.2}°", self.orb_degrees)
    }

    fn same_pair(&self, p1: &Point, p2: &Point) -> bool {
        (self.from == p1.label && self.to == p2.label)
            || (self.from == p2.label && self.to == p1.label)
    }
}

/// Computes every aspect among all unordered pairs of `points`.
///
/// A pair within Conjunction orb yields exactly one Conjunction record and
/// nothing else. Otherwise the catalog is walked in declaration order,
/// looking up the first point's row and checking the second point against
/// the found target; each pair is reported at most once per canonical
/// aspect name, first match wins.
///
/// Pure and stateless; an empty result set means no aspects formed, which
/// is a valid outcome, not a failure.
pub fn compute_aspects(points: &[Point], table: &AspectTable) -> Vec<AspectResult> {
    let mut results: Vec<AspectResult> = Vec::new();

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let p1 = &points[i];
            let p2 = &points[j];

            let diff = circular_distance(p1.position, p2.position);
            if diff <= CONJUNCTION_ORB_MINUTES {
                results.push(AspectResult {
                    from: p1.label.clone(),
                    to: p2.label.clone(),
                    aspect: CONJUNCTION.to_string(),
                    orb_degrees: diff as f64 / 60.0,
                });
                continue;
            }

            for (index, variant) in ASPECT_VARIANTS.iter().enumerate() {
                let target = match table.target(p1.position, index) {
                    Some(target) => target,
                    None => continue,
                };
                let residual = circular_distance(p2.position, target);
                if residual > variant.orb_minutes {
                    continue;
                }
                let duplicate = results
                    .iter()
                    .any(|r| r.aspect == variant.canonical && r.same_pair(p1, p2));
                if duplicate {
                    continue;
                }
                results.push(AspectResult {
                    from: p1.label.clone(),
                    to: p2.label.clone(),
                    aspect: variant.canonical.to_string(),
                    orb_degrees: residual as f64 / 60.0,
                });
            }
        }
    }

    results
}
