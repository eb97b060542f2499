//! Analytischer Hit-Test gegen die gezeichnete Kantenkurve.
//!
//! Die gezeichnete Kurve ist eine Parabel durch `visible_start`,
//! `control_point` und `visible_end`. In einem lokalen Koordinatensystem mit
//! Ursprung in `visible_start` und v-Achse entlang der Parabelachse gilt exakt
//! `v = a·u² + b·u`. Der Test transformiert den Klickpunkt in dieses System
//! und vergleicht `v` mit dem Parabelwert.

use glam::Vec2;

use super::geometry::CurveGeometry;
use super::vector::VectorExt;

/// Zusätzliche Toleranz für Rundungsfehler beim Abstandsvergleich.
///
/// Untergrenze; bei großen Koordinaten wächst die Toleranz mit, siehe
/// [`float_tolerance`].
pub const HIT_EPSILON: f32 = 1e-3;

/// Vielfaches der f32-Auflösung, das Transformation und Parabelauswertung
/// an Rundungsfehlern ansammeln dürfen.
const ROUNDING_ULPS: f32 = 32.0;

/// Unterhalb dieses Anteils der Sehnenlänge gilt die Kurve als gerade.
const STRAIGHT_RATIO: f32 = 1e-4;

/// Lokales Parabel-Koordinatensystem einer Kante.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolaFrame {
    /// Ursprung (= `visible_start`)
    pub origin: Vec2,
    /// Basisvektor quer zur Parabelachse, zeigt Richtung Kurvenende
    pub u_axis: Vec2,
    /// Basisvektor entlang der Parabelachse
    pub v_axis: Vec2,
    /// Quadratischer Koeffizient
    pub a: f32,
    /// Linearer Koeffizient
    pub b: f32,
    /// u-Koordinate von `visible_end` (Länge der Kurve in u-Richtung)
    pub span: f32,
}

impl ParabolaFrame {
    /// Baut das lokale System und löst die Koeffizienten.
    ///
    /// `None`, wenn die Kurve keine Ausdehnung quer zur Achse hat oder das
    /// 2×2-System singulär ist (Division durch `pu·qu·(pu − qu)`).
    pub fn fit(geometry: &CurveGeometry) -> Option<Self> {
        let origin = geometry.visible_start;
        let chord = geometry.visible_end - origin;
        let chord_dir = chord.unit()?;
        let chord_len = chord.length();

        // Achse der interpolierenden Parabel: C − (P0 + P2) / 2
        let bulge = geometry.control_point - (geometry.visible_start + geometry.visible_end) * 0.5;
        let v_axis = if bulge.perp_dot(chord_dir).abs() <= STRAIGHT_RATIO * chord_len {
            chord_dir.perp()
        } else {
            bulge.unit()?
        };
        let mut u_axis = -v_axis.perp();
        if u_axis.dot(chord) < 0.0 {
            u_axis = -u_axis;
        }

        let to_local = |p: Vec2| {
            let rel = p - origin;
            (rel.dot(u_axis), rel.dot(v_axis))
        };
        let (pu, pv) = to_local(geometry.control_point);
        let (qu, qv) = to_local(geometry.visible_end);

        let det = pu * qu * (pu - qu);
        if !det.is_finite() || det.abs() < f32::EPSILON {
            return None;
        }
        let a = (pv * qu - qv * pu) / det;
        let b = (pu * pu * qv - qu * qu * pv) / det;

        if !a.is_finite() || !b.is_finite() {
            return None;
        }

        Some(Self {
            origin,
            u_axis,
            v_axis,
            a,
            b,
            span: qu,
        })
    }

    /// Transformiert einen Welt-Punkt in lokale (u, v)-Koordinaten.
    pub fn to_local(&self, x: f32, y: f32) -> (f32, f32) {
        let rel = Vec2::new(x, y) - self.origin;
        (rel.dot(self.u_axis), rel.dot(self.v_axis))
    }

    /// Parabelwert an der Stelle `u`.
    pub fn eval(&self, u: f32) -> f32 {
        self.a * u * u + self.b * u
    }
}

/// Prüft, ob `(x, y)` höchstens `max_dist` neben der Kurve liegt.
///
/// Punkte innerhalb eines der beiden Nodes zählen nie als Treffer, damit ein
/// Klick auf einen Node nicht gleichzeitig die anliegende Kante trifft.
pub fn is_hit(geometry: &CurveGeometry, x: f32, y: f32, max_dist: f32) -> bool {
    if !x.is_finite() || !y.is_finite() || max_dist.is_nan() || max_dist < 0.0 {
        return false;
    }
    let tolerance = max_dist + float_tolerance(geometry);

    // Vorfilter über die Sehnen-Gerade: die Kurve liegt in der konvexen Hülle
    // von Start, Griffpunkt und Ende.
    let side = geometry.side_of_chord(x, y);
    let handle = geometry.curve_handle();
    let hull = [
        geometry.side_of_chord(geometry.visible_start.x, geometry.visible_start.y),
        geometry.side_of_chord(handle.x, handle.y),
        geometry.side_of_chord(geometry.visible_end.x, geometry.visible_end.y),
    ];
    let hull_min = hull.iter().copied().fold(f32::INFINITY, f32::min);
    let hull_max = hull.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if side < hull_min - tolerance || side > hull_max + tolerance {
        return false;
    }

    let Some(frame) = ParabolaFrame::fit(geometry) else {
        log::trace!("Hit-Test: Parabel-Anpassung degeneriert, kein Treffer");
        return false;
    };

    let (u, v) = frame.to_local(x, y);
    if (v - frame.eval(u)).abs() > tolerance {
        return false;
    }

    let l = u / frame.span;
    if !(0.0..=1.0).contains(&l) {
        return false;
    }

    let point = Vec2::new(x, y);
    point.distance(geometry.start) >= geometry.start_radius
        && point.distance(geometry.end) >= geometry.end_radius
}

/// Rundungstoleranz passend zur Größenordnung der Koordinaten.
///
/// Mindestens [`HIT_EPSILON`]; weit vom Ursprung entfernte Kanten bekommen
/// entsprechend der gröberen f32-Auflösung mehr Spielraum.
pub fn float_tolerance(geometry: &CurveGeometry) -> f32 {
    let magnitude = geometry
        .visible_start
        .abs()
        .max_element()
        .max(geometry.visible_end.abs().max_element())
        .max(geometry.control_point.abs().max_element());
    HIT_EPSILON.max(f32::EPSILON * ROUNDING_ULPS * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geometry(end: Vec2, r1: f32, r2: f32, k: f32) -> CurveGeometry {
        CurveGeometry::compute(Vec2::ZERO, end, r1, r2, k).expect("gueltige Geometrie")
    }

    #[test]
    fn test_reference_scenario() {
        let g = geometry(Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0);
        assert!(is_hit(&g, 50.0, 55.0, 5.0));
        assert!(!is_hit(&g, 50.0, 0.0, 5.0));
        assert!(!is_hit(&g, 5.0, 0.0, 5.0));
    }

    #[test]
    fn test_frame_is_chord_aligned_for_equal_radii() {
        let g = geometry(Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0);
        let frame = ParabolaFrame::fit(&g).expect("Parabel erwartet");
        assert_relative_eq!(frame.u_axis.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(frame.v_axis.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(frame.span, g.visible_end.x - g.visible_start.x, epsilon = 1e-3);
        // Scheitel bei u = span/2 liegt genau auf dem Kontrollpunkt
        let apex = frame.eval(frame.span * 0.5);
        assert_relative_eq!(apex, 60.0 - g.visible_start.y, epsilon = 1e-3);
    }

    #[test]
    fn test_points_on_curve_hit_with_zero_tolerance() {
        let cases = [
            geometry(Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0),
            geometry(Vec2::new(-40.0, 90.0), 12.0, 12.0, 30.0),
            geometry(Vec2::new(120.0, -35.0), 8.0, 20.0, 45.0),
            geometry(Vec2::new(0.0, 150.0), 15.0, 5.0, -50.0),
        ];
        for g in &cases {
            for step in 1..20 {
                let t = step as f32 / 20.0;
                let p = g.point_at(t);
                assert!(is_hit(g, p.x, p.y, 0.0), "t={} p={:?} g={:?}", t, p, g);
            }
        }
    }

    #[test]
    fn test_points_on_curve_hit_far_from_origin() {
        for offset in [1.0e4_f32, 2.0e4, -3.0e4] {
            let shift = Vec2::splat(offset);
            let cases = [
                (Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0),
                (Vec2::new(-40.0, 90.0), 12.0, 12.0, 30.0),
                (Vec2::new(120.0, -35.0), 8.0, 20.0, 45.0),
            ];
            for (end, r1, r2, k) in cases {
                let g = CurveGeometry::compute(shift, shift + end, r1, r2, k)
                    .expect("gueltige Geometrie");
                for step in 1..40 {
                    let t = step as f32 / 40.0;
                    let p = g.point_at(t);
                    assert!(is_hit(&g, p.x, p.y, 0.0), "offset={} t={} p={:?}", offset, t, p);
                }
            }

            // Toleranz bleibt klein genug, um Fehlklicks abzulehnen
            let g = CurveGeometry::compute(shift, shift + Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0)
                .expect("gueltige Geometrie");
            let apex = g.point_at(0.5);
            assert!(!is_hit(&g, apex.x, apex.y + 5.0, 1.0), "offset={}", offset);
        }
    }

    #[test]
    fn test_float_tolerance_grows_with_magnitude() {
        let near = geometry(Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0);
        assert_eq!(float_tolerance(&near), HIT_EPSILON);

        let shift = Vec2::splat(5.0e4);
        let far = CurveGeometry::compute(shift, shift + Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0)
            .expect("gueltige Geometrie");
        assert!(float_tolerance(&far) > HIT_EPSILON);
        assert!(float_tolerance(&far) < 0.5);
    }

    #[test]
    fn test_straight_edge_with_zero_curvature() {
        let g = geometry(Vec2::new(100.0, 0.0), 10.0, 20.0, 0.0);
        assert!(is_hit(&g, 50.0, 0.0, 1.0));
        assert!(is_hit(&g, 50.0, 0.8, 1.0));
        assert!(!is_hit(&g, 50.0, 3.0, 1.0));
        assert!(!is_hit(&g, 85.0, 0.0, 1.0)); // im End-Node
    }

    #[test]
    fn test_points_inside_nodes_never_hit() {
        let g = geometry(Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0);
        // Auch bei großer Toleranz kein Treffer innerhalb der Nodes
        for (x, y) in [(0.0, 0.0), (3.0, 4.0), (97.0, 4.0), (100.0, 9.0)] {
            assert!(!is_hit(&g, x, y, 50.0), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_beyond_span_is_rejected() {
        let g = geometry(Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0);
        // Parabel würde hier wieder nahe kommen, liegt aber hinter dem Kurvenende
        assert!(!is_hit(&g, 130.0, -40.0, 100.0));
        assert!(!is_hit(&g, -30.0, -40.0, 100.0));
    }

    #[test]
    fn test_negative_or_nan_tolerance_never_hits() {
        let g = geometry(Vec2::new(100.0, 0.0), 10.0, 10.0, 60.0);
        assert!(!is_hit(&g, 50.0, 60.0, -1.0));
        assert!(!is_hit(&g, 50.0, 60.0, f32::NAN));
        assert!(!is_hit(&g, f32::NAN, 60.0, 5.0));
    }

    #[test]
    fn test_fit_fails_when_span_collapses() {
        // Beide Randpunkte fallen zusammen: keine Ausdehnung in u-Richtung
        let g = geometry(Vec2::new(10.0, 0.0), 0.0, 0.0, 0.0);
        let mut collapsed = g;
        collapsed.visible_end = collapsed.visible_start;
        assert!(ParabolaFrame::fit(&collapsed).is_none());
        assert!(!is_hit(&collapsed, 0.0, 0.0, 5.0));
    }
}
