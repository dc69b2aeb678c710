use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint-set forest over hashable keys, union by size with path compression.
///
/// Groups are reported in first-insertion order so that callers picking an
/// "anchor" member get the same answer on every run.
#[derive(Debug, Clone)]
pub struct UnionFind<K> {
    parents: HashMap<K, K>,
    members: HashMap<K, Vec<K>>,
    order: Vec<K>,
}

impl<K: Clone + Eq + Hash> UnionFind<K> {
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
            members: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Registers `item` as a singleton if it is new.
    pub fn add(&mut self, item: K) {
        if self.parents.contains_key(&item) {
            return;
        }
        self.parents.insert(item.clone(), item.clone());
        self.members.insert(item.clone(), vec![item.clone()]);
        self.order.push(item);
    }

    /// Root of `item`'s set, or `None` if it was never added.
    pub fn find(&mut self, item: &K) -> Option<K> {
        let parent = self.parents.get(item)?.clone();
        if parent == *item {
            return Some(parent);
        }
        let root = self.find(&parent)?;
        self.parents.insert(item.clone(), root.clone());
        Some(root)
    }

    /// Merges the sets of `a` and `b`, adding either if unknown.
    pub fn union(&mut self, a: K, b: K) {
        self.add(a.clone());
        self.add(b.clone());
        let (Some(mut root_a), Some(mut root_b)) = (self.find(&a), self.find(&b)) else {
            return;
        };
        if root_a == root_b {
            return;
        }

        let size_a = self.members.get(&root_a).map_or(0, Vec::len);
        let size_b = self.members.get(&root_b).map_or(0, Vec::len);
        if size_a < size_b {
            std::mem::swap(&mut root_a, &mut root_b);
        }

        self.parents.insert(root_b.clone(), root_a.clone());
        let moved = self.members.remove(&root_b).unwrap_or_default();
        self.members.entry(root_a).or_default().extend(moved);
    }

    /// Connected components, ordered by their earliest-added member.
    pub fn groups(&self) -> Vec<Vec<K>> {
        let mut position: HashMap<&K, usize> = HashMap::new();
        for (index, item) in self.order.iter().enumerate() {
            position.insert(item, index);
        }

        let mut groups: Vec<Vec<K>> = self
            .members
            .values()
            .map(|group| {
                let mut group = group.clone();
                group.sort_by_key(|item| position.get(item).copied().unwrap_or(usize::MAX));
                group
            })
            .collect();
        groups.sort_by_key(|group| {
            group
                .first()
                .and_then(|item| position.get(item).copied())
                .unwrap_or(usize::MAX)
        });
        groups
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<K: Clone + Eq + Hash> Default for UnionFind<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_unknown_is_none() {
        let mut uf: UnionFind<&str> = UnionFind::new();
        assert_eq!(uf.find(&"sun"), None);
        uf.add("sun");
        assert_eq!(uf.find(&"sun"), Some("sun"));
    }

    #[test]
    fn test_transitive_union() {
        let mut uf = UnionFind::new();
        uf.union(1, 2);
        uf.union(3, 4);
        uf.union(2, 3);
        uf.add(5);

        let root = uf.find(&1);
        assert!(root.is_some());
        for item in [2, 3, 4] {
            assert_eq!(uf.find(&item), root);
        }
        assert_ne!(uf.find(&5), root);
        assert_eq!(uf.groups(), vec![vec![1, 2, 3, 4], vec![5]]);
    }

    #[test]
    fn test_smaller_set_joins_larger() {
        let mut uf = UnionFind::new();
        uf.union('a', 'b');
        uf.union('a', 'c');
        uf.add('d');
        let big_root = uf.find(&'a');
        uf.union('d', 'b');
        assert_eq!(uf.find(&'d'), big_root);
    }
}
