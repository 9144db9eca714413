//! Gewichtete, ungerichtete Kante zwischen zwei Node-Indizes.

/// Eine Kante; `src`/`dest` bleiben so gespeichert wie angelegt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Erster Endpunkt (Node-Index)
    pub src: usize,
    /// Zweiter Endpunkt (Node-Index)
    pub dest: usize,
    /// Positives Gewicht
    pub weight: f32,
}

impl Edge {
    /// Erstellt eine neue Kante
    pub fn new(src: usize, dest: usize, weight: f32) -> Self {
        Self { src, dest, weight }
    }

    /// Prüft, ob die Kante den Node berührt (in beliebiger Richtung).
    pub fn touches(&self, node: usize) -> bool {
        self.src == node || self.dest == node
    }

    /// Liefert den jeweils anderen Endpunkt, falls `node` ein Endpunkt ist.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.src == node {
            Some(self.dest)
        } else if self.dest == node {
            Some(self.src)
        } else {
            None
        }
    }
}
