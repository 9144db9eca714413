//! Union-Find über Node-Indizes (Path-Halving, beliebige Wurzelzuweisung).

/// Partition von `0..len` in disjunkte Mengen.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    /// Erstellt `len` einelementige Mengen.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Anzahl der verwalteten Elemente
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Gibt `true` zurück, wenn keine Elemente verwaltet werden.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Repräsentant der Menge von `x`; halbiert dabei den Pfad.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Vereinigt die Mengen von `a` und `b`.
    ///
    /// Gibt `false` zurück, wenn beide bereits in derselben Menge lagen.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        true
    }
}
