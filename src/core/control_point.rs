//! Kontrollpunkte der Bézier-Kurve und ihr geordneter Speicher.

use glam::Vec2;

/// Ein vom Benutzer gesetzter Kontrollpunkt (Screen-Space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in Viewport-Pixeln (Ursprung oben links)
    pub position: Vec2,
    /// RGBA-Farbe des Punkts
    pub color: [u8; 4],
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt.
    pub fn new(position: Vec2, color: [u8; 4]) -> Self {
        Self { position, color }
    }
}

/// Geordnete Liste der Kontrollpunkte.
///
/// Die Reihenfolge ist die Einfügereihenfolge und bestimmt die Kurvenform.
/// Einzige Mutationen: anhängen und letzten Punkt entfernen.
#[derive(Debug, Clone, Default)]
pub struct ControlPointStore {
    points: Vec<ControlPoint>,
}

impl ControlPointStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt ans Ende an.
    pub fn append(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    /// Entfernt den letzten Punkt. Gibt `None` zurück, wenn der Speicher leer war.
    pub fn remove_last(&mut self) -> Option<ControlPoint> {
        self.points.pop()
    }

    /// Anzahl der Kontrollpunkte.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte in Einfügereihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }
}
