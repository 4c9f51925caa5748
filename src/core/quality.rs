//! Sampling-Dichte der Tessellierung (Samples pro Kontrollpunkt).

use std::fmt;

/// Fehler bei ungültiger Qualitätsstufe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Qualität muss mindestens 1 sein, erhalten: {0}")]
pub struct InvalidQuality(pub u32);

/// Ganzzahliger Multiplikator für die Sample-Anzahl, immer ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u32);

impl Quality {
    /// Kleinste erlaubte Qualität.
    pub const MIN: Quality = Quality(1);
    /// Startwert ohne Konfiguration.
    pub const DEFAULT: Quality = Quality(4);

    /// Validierter Konstruktor.
    pub fn new(value: u32) -> Result<Self, InvalidQuality> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(InvalidQuality(value))
        }
    }

    /// Klemmt beliebige Eingaben (z.B. aus der Konfiguration) auf ≥ 1.
    pub fn clamped(value: u32) -> Self {
        Self(value.max(1))
    }

    /// Aktueller Wert.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Erhöht um 1 (ohne Obergrenze, sättigend am Typ-Maximum).
    pub fn increase(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Verringert um 1, sofern das Ergebnis ≥ 1 bleibt.
    ///
    /// Gibt zurück, ob sich der Wert geändert hat.
    pub fn decrease(&mut self) -> bool {
        if self.0 > 1 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Quality {
    type Error = InvalidQuality;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Quality::new(0), Err(InvalidQuality(0)));
        assert_eq!(Quality::try_from(3).map(Quality::get), Ok(3));
    }

    #[test]
    fn clamped_raises_zero_to_one() {
        assert_eq!(Quality::clamped(0), Quality::MIN);
        assert_eq!(Quality::clamped(9).get(), 9);
    }

    #[test]
    fn decrease_never_goes_below_one() {
        let mut quality = Quality::clamped(3);
        assert!(quality.decrease());
        assert!(quality.decrease());
        assert_eq!(quality.get(), 1);
        for _ in 0..10 {
            assert!(!quality.decrease());
        }
        assert_eq!(quality.get(), 1);
    }

    #[test]
    fn increase_is_unbounded_but_saturates() {
        let mut quality = Quality::MIN;
        quality.increase();
        assert_eq!(quality.get(), 2);

        let mut max = Quality::clamped(u32::MAX);
        max.increase();
        assert_eq!(max.get(), u32::MAX);
    }
}
