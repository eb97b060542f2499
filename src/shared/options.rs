//! Zentrale Stil-Konfiguration für Kanten.
//!
//! `EdgeStyle` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::render::Color;

// ── Geometrie ───────────────────────────────────────────────────────

/// Abstand des Kontrollpunkts von der Sehnenmitte (Welteinheiten).
pub const EDGE_CURVATURE: f32 = 60.0;

// ── Pfeil ───────────────────────────────────────────────────────────

/// Halbe Breite der Pfeilbasis.
pub const ARROW_HALF_WIDTH: f32 = 4.0;

// ── Gewichts-Label ──────────────────────────────────────────────────

/// Label-Abstand von der Kurve als Vielfaches des End-Radius (gerichtet).
pub const LABEL_OFFSET_FACTOR: f32 = 3.0;
/// Zusatzfaktor für das Label an der Sehnenmitte (ungerichtet).
pub const LABEL_MIDPOINT_SCALE: f32 = 15.0;
/// Schrift des Gewichts-Labels.
pub const LABEL_FONT: &str = "15pt Arial";

// ── Linie & Farben ──────────────────────────────────────────────────

/// Linienstärke der Kante.
pub const EDGE_LINE_WIDTH: f32 = 1.0;
/// Standard-Farbe nicht selektierter Kanten (RGBA: Schwarz).
pub const EDGE_COLOR_DEFAULT: Color = [0.0, 0.0, 0.0, 1.0];
/// Farbe selektierter Kanten (RGBA: Hellblau).
pub const EDGE_COLOR_SELECTED: Color = [0.392, 0.588, 1.0, 1.0];

// ── Selektion ───────────────────────────────────────────────────────

/// Maximaler Abstand (Welteinheiten), in dem ein Klick eine Kante trifft.
pub const EDGE_PICK_TOLERANCE: f32 = 8.0;

/// Alle zur Laufzeit änderbaren Kanten-Optionen.
/// Kann als TOML-Datei neben der Host-Anwendung gespeichert werden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeStyle {
    // ── Geometrie ───────────────────────────────────────────────
    /// Abstand des Kontrollpunkts von der Sehnenmitte
    pub curvature: f32,

    // ── Pfeil & Label ───────────────────────────────────────────
    /// Halbe Breite der Pfeilbasis
    pub arrow_half_width: f32,
    /// Label-Abstand als Vielfaches des End-Radius
    pub label_offset_factor: f32,
    /// Zusatzfaktor für Labels an der Sehnenmitte
    #[serde(default = "default_label_midpoint_scale")]
    pub label_midpoint_scale: f32,
    /// Schrift des Gewichts-Labels (CSS-Notation, z.B. "15pt Arial")
    pub label_font: String,

    // ── Linie & Farben ──────────────────────────────────────────
    /// Linienstärke
    pub line_width: f32,
    /// Farbe nicht selektierter Kanten
    pub color_default: Color,
    /// Farbe selektierter Kanten
    pub color_selected: Color,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Toleranz für Klick-Selektion
    #[serde(default = "default_pick_tolerance")]
    pub pick_tolerance: f32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            curvature: EDGE_CURVATURE,
            arrow_half_width: ARROW_HALF_WIDTH,
            label_offset_factor: LABEL_OFFSET_FACTOR,
            label_midpoint_scale: LABEL_MIDPOINT_SCALE,
            label_font: LABEL_FONT.to_string(),
            line_width: EDGE_LINE_WIDTH,
            color_default: EDGE_COLOR_DEFAULT,
            color_selected: EDGE_COLOR_SELECTED,
            pick_tolerance: EDGE_PICK_TOLERANCE,
        }
    }
}

/// Serde-Default für `label_midpoint_scale` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_label_midpoint_scale() -> f32 {
    LABEL_MIDPOINT_SCALE
}

/// Serde-Default für `pick_tolerance` (Abwärtskompatibilität).
fn default_pick_tolerance() -> f32 {
    EDGE_PICK_TOLERANCE
}

impl EdgeStyle {
    /// Lädt den Stil aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(style) => {
                    log::info!("Kanten-Stil geladen aus: {}", path.display());
                    style
                }
                Err(e) => {
                    log::warn!("Stil-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Stil-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert den Stil als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Kanten-Stil gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Farbe für eine Kante abhängig vom Selektionszustand.
    pub fn stroke_color(&self, selected: bool, edge_color: Color) -> Color {
        if selected {
            self.color_selected
        } else {
            edge_color
        }
    }
}
