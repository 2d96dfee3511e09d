/*!
# Utilities

Provides helper structs used by the graph representations and algorithms, most importantly
[`DisjointSetUnion`](self::union_find::DisjointSetUnion) which keeps [`Forest`](crate::repr::Forest)
acyclic and drives Kruskal's algorithm.
*/

pub mod union_find;

pub use union_find::DisjointSetUnion;
