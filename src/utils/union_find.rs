/*!
# Disjoint-set union

[`DisjointSetUnion`] partitions arbitrary labels into disjoint sets. Labels are mapped to dense
indices on first sight, so `find` and `union` run in near-constant amortized time (path
compression plus union by rank).
*/

use crate::vertex::*;

/// A union-find structure over labels of type `T`.
///
/// Unknown labels passed to [`DisjointSetUnion::find`] or [`DisjointSetUnion::union`] are
/// added as singletons first.
#[derive(Debug, Clone)]
pub struct DisjointSetUnion<T: Vertex> {
    index: VertexMap<T, usize>,
    labels: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl<T: Vertex> Default for DisjointSetUnion<T> {
    fn default() -> Self {
        Self {
            index: VertexMap::default(),
            labels: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        }
    }
}

impl<T: Vertex> DisjointSetUnion<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `x` as a singleton set. Known labels are left untouched.
    /// Returns *true* if `x` was unknown before.
    pub fn make_set(&mut self, x: T) -> bool {
        if self.index.contains_key(&x) {
            return false;
        }
        self.insert(x);
        true
    }

    /// Returns the representative of the set containing `x`
    pub fn find(&mut self, x: &T) -> &T {
        let i = self.index_of(x);
        let root = self.find_index(i);
        &self.labels[root]
    }

    /// Merges the sets of `x` and `y`. Returns *false* (and changes nothing but path lengths) if
    /// both already share a set.
    ///
    /// The root of lower rank is linked below the other one; on equal ranks the root of `y`
    /// absorbs the root of `x` and its rank grows by one.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let i = self.index_of(x);
        let j = self.index_of(y);
        let rx = self.find_index(i);
        let ry = self.find_index(j);

        if rx == ry {
            return false;
        }

        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[rx] = ry;
            self.rank[ry] += 1;
        }

        self.sets -= 1;
        true
    }

    /// Returns *true* if `x` and `y` are in the same set. Unknown labels are only in a set with
    /// themselves; they are not added.
    pub fn same_set(&mut self, x: &T, y: &T) -> bool {
        match (self.index.get(x).copied(), self.index.get(y).copied()) {
            (Some(i), Some(j)) => self.find_index(i) == self.find_index(j),
            _ => x == y,
        }
    }

    /// Read-only variant of [`DisjointSetUnion::same_set`]; walks to the roots without
    /// compressing paths.
    pub fn connected(&self, x: &T, y: &T) -> bool {
        match (self.index.get(x).copied(), self.index.get(y).copied()) {
            (Some(i), Some(j)) => self.root_of(i) == self.root_of(j),
            _ => x == y,
        }
    }

    /// Returns *true* if `x` is known
    pub fn contains(&self, x: &T) -> bool {
        self.index.contains_key(x)
    }

    /// Number of known labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> usize {
        self.sets
    }

    fn insert(&mut self, x: T) -> usize {
        let i = self.labels.len();
        self.index.insert(x.clone(), i);
        self.labels.push(x);
        self.parent.push(i);
        self.rank.push(0);
        self.sets += 1;
        i
    }

    fn index_of(&mut self, x: &T) -> usize {
        match self.index.get(x) {
            Some(&i) => i,
            None => self.insert(x.clone()),
        }
    }

    fn root_of(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    fn find_index(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut x = i;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }
}

impl<T: Vertex> FromIterator<T> for DisjointSetUnion<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut dsu = Self::new();
        for x in iter {
            dsu.make_set(x);
        }
        dsu
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn union_semantics() {
        let mut dsu = DisjointSetUnion::new();
        assert!(dsu.make_set("a"));
        assert!(!dsu.make_set("a"));
        assert_eq!(dsu.find(&"b"), &"b");
        assert_eq!(dsu.len(), 2);
        assert_eq!(dsu.number_of_sets(), 2);

        assert!(dsu.union(&"a", &"b"));
        assert!(!dsu.union(&"b", &"a"));
        assert!(!dsu.union(&"c", &"c"));
        assert_eq!(dsu.number_of_sets(), 2);

        // equal ranks: root of the second argument wins
        assert_eq!(dsu.find(&"a"), &"b");

        assert!(dsu.union(&"a", &"c"));
        assert_eq!(dsu.find(&"c"), &"b");
        assert!(dsu.same_set(&"a", &"c"));
        assert!(!dsu.same_set(&"a", &"z"));
        assert!(dsu.connected(&"c", &"a"));
        assert!(dsu.connected(&"z", &"z"));
        assert!(!dsu.connected(&"a", &"z"));
        assert!(!dsu.contains(&"z"));
        assert_eq!(dsu.number_of_sets(), 1);
    }

    #[test]
    fn compare_with_naive_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [5usize, 20, 60] {
            let mut dsu: DisjointSetUnion<usize> = (0..n).collect();
            let mut label = (0..n).collect::<Vec<_>>();

            for _ in 0..2 * n {
                let x = rng.random_range(0..n);
                let y = rng.random_range(0..n);

                let merged = dsu.union(&x, &y);
                assert_eq!(merged, label[x] != label[y]);

                let (from, to) = (label[x], label[y]);
                label.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);

                let mut distinct = label.clone();
                distinct.sort_unstable();
                distinct.dedup();
                assert_eq!(dsu.number_of_sets(), distinct.len());
            }

            for x in 0..n {
                for y in 0..n {
                    assert_eq!(dsu.connected(&x, &y), label[x] == label[y]);
                    assert_eq!(dsu.same_set(&x, &y), label[x] == label[y]);
                }
            }
        }
    }
}
