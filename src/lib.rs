//! An adaptive radix tree (ART): an ordered map from byte-string keys
//! to values that adapts each internal node's fan-out representation
//! (`Node4`/`Node16`/`Node48`/`Node256`) to how many children it
//! actually has, and compresses single-child chains of the key space
//! into path prefixes.
//!
//! See `SPEC_FULL.md` for the full design and `DESIGN.md` for where
//! each piece of this implementation is grounded.

mod config;
mod error;
mod node;
mod variants;

use bytes::{Bytes, BytesMut};
use slab::Slab;
use smallvec::SmallVec;

use config::{KEY_TERMINATOR, N16_SHRINK_AT, N256_SHRINK_AT, N48_SHRINK_AT, PREFIX_CAPACITY};
pub use error::ArtError;
use node::{Node, NodeBody};
use variants::{grow, shrink, Node4};

/// The result of [`ArtTree::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was not present; it has been added.
    Inserted,
    /// The key was already present; this is its previous value.
    Replaced(Bytes),
}

/// An adaptive radix tree mapping byte-string keys to [`Bytes`] values.
///
/// Internally every stored key is suffixed with a terminator byte
/// (`0x00`) so that no stored key can be a strict prefix of another —
/// see `SPEC_FULL.md` §9. Public API keys must not themselves contain
/// a `0x00` byte.
pub struct ArtTree {
    arena: Slab<Node>,
    root: Option<u32>,
    len: usize,
}

impl ArtTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        ArtTree {
            arena: Slab::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up `key`, returning a cheap clone of the stored value.
    pub fn get(&self, key: &[u8]) -> Option<Bytes> {
        let terminated = terminate(key).ok()?;
        let mut idx = self.root?;
        let mut depth = 0usize;
        loop {
            let node = &self.arena[idx as usize];
            if let Some(leaf) = node.as_leaf() {
                return if leaf.key.as_ref() == terminated.as_ref() {
                    Some(leaf.value.clone())
                } else {
                    None
                };
            }
            let mat = &node.prefix;
            if depth + mat.len() > terminated.len() || terminated[depth..depth + mat.len()] != mat[..] {
                return None;
            }
            depth += node.prefix_len as usize;
            if depth >= terminated.len() {
                return None;
            }
            let byte = terminated[depth];
            match node.find_child(byte) {
                Some(child) => {
                    idx = child;
                    depth += 1;
                }
                None => return None,
            }
        }
    }

    /// `true` if `key` is present.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `key` with `value`, returning whether the key was new
    /// or replaced an existing value.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::KeyTooLong`] if `key.len() + 1` (for the
    /// internal terminator byte) does not fit in a `u32`.
    pub fn insert(
        &mut self,
        key: impl AsRef<[u8]>,
        value: impl Into<Bytes>,
    ) -> Result<InsertOutcome, ArtError> {
        let terminated = terminate(key.as_ref())?;
        let value = value.into();
        match self.root {
            None => {
                let idx = self.arena.insert(Node::leaf(terminated, value));
                self.root = Some(idx as u32);
                self.len = 1;
                Ok(InsertOutcome::Inserted)
            }
            Some(root_idx) => Ok(self.insert_recursive(root_idx, &terminated, 0, value)),
        }
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &[u8]) -> Option<Bytes> {
        let terminated = terminate(key).ok()?;
        let root_idx = self.root?;

        if self.arena[root_idx as usize].is_leaf() {
            let matches = self.arena[root_idx as usize]
                .as_leaf()
                .map(|leaf| leaf.key.as_ref() == terminated.as_ref())
                .unwrap_or(false);
            if !matches {
                return None;
            }
            let removed = self.arena.remove(root_idx as usize);
            self.root = None;
            self.len -= 1;
            return match removed.body {
                NodeBody::Leaf(leaf) => Some(leaf.value),
                _ => unreachable!(),
            };
        }

        let mut cur_idx = root_idx;
        let mut cur_depth = 0usize;
        loop {
            let node = &self.arena[cur_idx as usize];
            let mat = &node.prefix;
            if cur_depth + mat.len() > terminated.len() || terminated[cur_depth..cur_depth + mat.len()] != mat[..] {
                return None;
            }
            let after_prefix = cur_depth + node.prefix_len as usize;
            if after_prefix >= terminated.len() {
                return None;
            }
            let byte = terminated[after_prefix];
            let child_idx = node.find_child(byte)?;
            let child_depth = after_prefix + 1;

            if self.arena[child_idx as usize].is_leaf() {
                let matches = self.arena[child_idx as usize]
                    .as_leaf()
                    .map(|leaf| leaf.key.as_ref() == terminated.as_ref())
                    .unwrap_or(false);
                if !matches {
                    return None;
                }
                let removed = self.arena.remove(child_idx as usize);
                self.arena[cur_idx as usize].remove_child(byte);
                self.len -= 1;
                self.maybe_shrink(cur_idx);
                self.collapse_single_child(cur_idx, cur_depth);
                return match removed.body {
                    NodeBody::Leaf(leaf) => Some(leaf.value),
                    _ => unreachable!(),
                };
            }

            cur_idx = child_idx;
            cur_depth = child_depth;
        }
    }

    fn insert_recursive(&mut self, idx: u32, key: &Bytes, depth: usize, value: Bytes) -> InsertOutcome {
        if self.arena[idx as usize].is_leaf() {
            return self.split_leaf(idx, key, depth, value);
        }
        let node_prefix_len = self.arena[idx as usize].prefix_len as usize;
        let matched = self.match_prefix_for_insert(idx, key, depth);
        if matched < node_prefix_len {
            self.split_internal(idx, key, depth, matched, value);
            return InsertOutcome::Inserted;
        }
        let depth = depth + node_prefix_len;
        debug_assert!(
            depth < key.len(),
            "terminator invariant guarantees a dispatch byte remains"
        );
        let byte = key[depth];
        match self.arena[idx as usize].find_child(byte) {
            Some(child_idx) => self.insert_recursive(child_idx, key, depth + 1, value),
            None => {
                let leaf_idx = self.arena.insert(Node::leaf(key.slice(0..key.len()), value));
                if self.arena[idx as usize].is_full() {
                    tracing::trace!(node = idx, "growing node to accommodate new child");
                    grow(&mut self.arena[idx as usize].body);
                }
                self.arena[idx as usize].add_child(byte, leaf_idx as u32);
                self.len += 1;
                InsertOutcome::Inserted
            }
        }
    }

    /// Splits a leaf found at `idx` into an internal divergence node,
    /// reusing `idx` for the new internal node so the caller's pointer
    /// into this slot stays valid (`DESIGN.md`, "Descent / lookup /
    /// insert / delete").
    fn split_leaf(&mut self, idx: u32, key: &Bytes, depth: usize, value: Bytes) -> InsertOutcome {
        let existing_key = self.arena[idx as usize].as_leaf().unwrap().key.clone();
        if existing_key.as_ref() == key.as_ref() {
            let leaf = match &mut self.arena[idx as usize].body {
                NodeBody::Leaf(leaf) => leaf,
                _ => unreachable!(),
            };
            let old_value = std::mem::replace(&mut leaf.value, value);
            return InsertOutcome::Replaced(old_value);
        }

        let common = common_prefix_len(&existing_key[depth..], &key[depth..]);
        let old_byte = existing_key[depth + common];
        let new_byte = key[depth + common];
        debug_assert_ne!(
            old_byte, new_byte,
            "the terminator invariant prevents one stored key from prefixing another"
        );

        tracing::trace!(node = idx, common, "splitting leaf into a new divergence node");
        let divergence = Node::internal(&key[depth..depth + common], NodeBody::Node4(Node4::new()));
        let old_leaf_node = std::mem::replace(&mut self.arena[idx as usize], divergence);
        let old_leaf_idx = self.arena.insert(old_leaf_node) as u32;
        let new_leaf_idx = self.arena.insert(Node::leaf(key.slice(0..key.len()), value)) as u32;

        self.arena[idx as usize].add_child(old_byte, old_leaf_idx);
        self.arena[idx as usize].add_child(new_byte, new_leaf_idx);
        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Splits an internal node's prefix at `matched` bytes in, when the
    /// new key diverges partway through it. Reuses `idx` for the new
    /// divergence node and moves the old node's content to a fresh slot
    /// with a rebuilt (shortened) prefix.
    fn split_internal(&mut self, idx: u32, key: &Bytes, depth: usize, matched: usize, value: Bytes) {
        let old_byte = self.node_prefix_byte(idx, depth, matched);
        let new_byte = key[depth + matched];
        debug_assert_ne!(old_byte, new_byte);

        tracing::trace!(node = idx, matched, "splitting node prefix into a new divergence node");
        let divergence = Node::internal(&key[depth..depth + matched], NodeBody::Node4(Node4::new()));
        let old_node = std::mem::replace(&mut self.arena[idx as usize], divergence);
        let old_prefix_len = old_node.prefix_len as usize;
        let old_materialized = old_node.prefix.clone();
        let old_idx = self.arena.insert(old_node) as u32;

        let new_old_prefix_len = old_prefix_len - matched - 1;
        let rebuilt = if new_old_prefix_len == 0 {
            SmallVec::new()
        } else if matched + 1 + new_old_prefix_len <= old_materialized.len() {
            SmallVec::from_slice(&old_materialized[matched + 1..matched + 1 + new_old_prefix_len])
        } else {
            let rep_key = self.representative_leaf_key(old_idx);
            let keep = new_old_prefix_len.min(PREFIX_CAPACITY);
            let mut out = SmallVec::new();
            for i in 0..keep {
                let logical_pos = matched + 1 + i;
                let b = if logical_pos < old_materialized.len() {
                    old_materialized[logical_pos]
                } else {
                    rep_key[depth + logical_pos]
                };
                out.push(b);
            }
            out
        };
        self.arena[old_idx as usize].prefix = rebuilt;
        self.arena[old_idx as usize].prefix_len = new_old_prefix_len as u32;

        let new_leaf_idx = self.arena.insert(Node::leaf(key.slice(0..key.len()), value)) as u32;

        self.arena[idx as usize].add_child(old_byte, old_idx);
        self.arena[idx as usize].add_child(new_byte, new_leaf_idx);
        self.len += 1;
    }

    /// Matches `key[depth..]` against node `idx`'s logical prefix, up
    /// to `node.prefix_len` bytes. Bytes beyond the materialized
    /// window are verified pessimistically against a representative
    /// leaf (`spec.md` §4.3) — this is only ever needed on the insert
    /// path, where getting it wrong would corrupt the tree; plain
    /// lookups skip unverified bytes optimistically instead.
    fn match_prefix_for_insert(&self, idx: u32, key: &Bytes, depth: usize) -> usize {
        let node = &self.arena[idx as usize];
        let remaining = &key[depth..];
        let mat = &node.prefix;
        let mut matched = 0;
        while matched < mat.len() && matched < remaining.len() && mat[matched] == remaining[matched] {
            matched += 1;
        }
        if matched < mat.len() || !node.is_optimistic() {
            return matched;
        }
        let full_len = node.prefix_len as usize;
        let rep_key = self.representative_leaf_key(idx);
        let mut m = matched;
        while m < full_len && depth + m < key.len() && depth + m < rep_key.len() && rep_key[depth + m] == key[depth + m] {
            m += 1;
        }
        m
    }

    /// The byte at logical position `position` of node `idx`'s prefix,
    /// where the prefix begins at absolute depth `depth` in the full
    /// key. Falls back to a representative leaf when `position` is
    /// past the materialized window.
    fn node_prefix_byte(&self, idx: u32, depth: usize, position: usize) -> u8 {
        let node = &self.arena[idx as usize];
        if position < node.prefix.len() {
            node.prefix[position]
        } else {
            let rep = self.representative_leaf_key(idx);
            rep[depth + position]
        }
    }

    /// Descends via `any_child` until a leaf is reached, returning a
    /// cheap clone of its full terminated key. Internal nodes always
    /// have at least one child.
    fn representative_leaf_key(&self, idx: u32) -> Bytes {
        let mut cur = idx;
        loop {
            let node = &self.arena[cur as usize];
            if let Some(leaf) = node.as_leaf() {
                return leaf.key.clone();
            }
            cur = node
                .any_child()
                .expect("internal nodes always have at least one child");
        }
    }

    fn maybe_shrink(&mut self, idx: u32) {
        let node = &mut self.arena[idx as usize];
        let count = node.child_count();
        let should_shrink = match &node.body {
            NodeBody::Node16(_) => count < N16_SHRINK_AT,
            NodeBody::Node48(_) => count < N48_SHRINK_AT,
            NodeBody::Node256(_) => count < N256_SHRINK_AT,
            _ => false,
        };
        if should_shrink {
            tracing::trace!(node = idx, "shrinking node after delete");
            shrink(&mut node.body);
        }
    }

    /// Collapses an internal node with exactly one remaining child
    /// into that child, merging prefixes (`spec.md` §4.6). If the
    /// child is a leaf, the leaf takes over `idx`'s slot outright,
    /// since a leaf carries its own full key and needs no inherited
    /// prefix.
    fn collapse_single_child(&mut self, idx: u32, depth: usize) {
        let Some((byte, child_idx)) = self.arena[idx as usize].single_child() else {
            return;
        };
        if self.arena[child_idx as usize].is_leaf() {
            let leaf_node = self.arena.remove(child_idx as usize);
            self.arena[idx as usize] = leaf_node;
            return;
        }

        let node_prefix_len = self.arena[idx as usize].prefix_len as usize;
        let child_prefix_len = self.arena[child_idx as usize].prefix_len as usize;
        let merged_len = node_prefix_len + 1 + child_prefix_len;
        let rep_key = self.representative_leaf_key(child_idx);
        let keep = merged_len.min(PREFIX_CAPACITY);
        let mut merged = SmallVec::new();
        for i in 0..keep {
            let b = if i < node_prefix_len {
                self.node_prefix_byte(idx, depth, i)
            } else if i == node_prefix_len {
                byte
            } else {
                rep_key[depth + i]
            };
            merged.push(b);
        }

        let child_body = std::mem::replace(
            &mut self.arena[child_idx as usize].body,
            NodeBody::Node4(Node4::new()),
        );
        self.arena.remove(child_idx as usize);
        self.arena[idx as usize].prefix = merged;
        self.arena[idx as usize].prefix_len = merged_len as u32;
        self.arena[idx as usize].body = child_body;
    }
}

impl Default for ArtTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(Bytes, Bytes)> for ArtTree {
    fn extend<T: IntoIterator<Item = (Bytes, Bytes)>>(&mut self, iter: T) {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl FromIterator<(Bytes, Bytes)> for ArtTree {
    fn from_iter<T: IntoIterator<Item = (Bytes, Bytes)>>(iter: T) -> Self {
        let mut tree = ArtTree::new();
        tree.extend(iter);
        tree
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

fn terminate(key: &[u8]) -> Result<Bytes, ArtError> {
    debug_assert!(
        !key.contains(&KEY_TERMINATOR),
        "keys must not contain the internal terminator byte"
    );
    let total_len = key
        .len()
        .checked_add(1)
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or(ArtError::KeyTooLong(key.len()))?;
    let mut buf = BytesMut::with_capacity(total_len);
    buf.extend_from_slice(key);
    buf.extend_from_slice(&[KEY_TERMINATOR]);
    Ok(buf.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_has_no_keys() {
        let tree = ArtTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.get(b"anything"), None);
    }

    #[test]
    fn insert_then_get_round_trips() {
        let mut tree = ArtTree::new();
        assert_eq!(
            tree.insert(&b"hello"[..], Bytes::from_static(b"world")).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(tree.get(b"hello"), Some(Bytes::from_static(b"world")));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn reinserting_same_key_replaces_value() {
        let mut tree = ArtTree::new();
        tree.insert(&b"k"[..], Bytes::from_static(b"v1")).unwrap();
        let outcome = tree.insert(&b"k"[..], Bytes::from_static(b"v2")).unwrap();
        assert_eq!(outcome, InsertOutcome::Replaced(Bytes::from_static(b"v1")));
        assert_eq!(tree.get(b"k"), Some(Bytes::from_static(b"v2")));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn diverging_keys_split_a_shared_prefix() {
        let mut tree = ArtTree::new();
        tree.insert(&b"team"[..], Bytes::from_static(b"1")).unwrap();
        tree.insert(&b"tear"[..], Bytes::from_static(b"2")).unwrap();
        assert_eq!(tree.get(b"team"), Some(Bytes::from_static(b"1")));
        assert_eq!(tree.get(b"tear"), Some(Bytes::from_static(b"2")));
        assert_eq!(tree.get(b"tea"), None);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn one_key_prefixing_another_is_handled_via_terminator() {
        let mut tree = ArtTree::new();
        tree.insert(&b"car"[..], Bytes::from_static(b"short")).unwrap();
        tree.insert(&b"carpet"[..], Bytes::from_static(b"long")).unwrap();
        assert_eq!(tree.get(b"car"), Some(Bytes::from_static(b"short")));
        assert_eq!(tree.get(b"carpet"), Some(Bytes::from_static(b"long")));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn node_grows_through_every_variant() {
        let mut tree = ArtTree::new();
        for b in 0..=255u16 {
            let key = [b as u8];
            tree.insert(&key[..], Bytes::from(vec![b as u8])).unwrap();
        }
        assert_eq!(tree.len(), 256);
        for b in 0..=255u16 {
            let key = [b as u8];
            assert_eq!(tree.get(&key), Some(Bytes::from(vec![b as u8])));
        }
    }

    #[test]
    fn remove_missing_key_is_a_no_op() {
        let mut tree = ArtTree::new();
        tree.insert(&b"present"[..], Bytes::from_static(b"v")).unwrap();
        assert_eq!(tree.remove(b"absent"), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn remove_collapses_single_child_chain() {
        let mut tree = ArtTree::new();
        tree.insert(&b"team"[..], Bytes::from_static(b"1")).unwrap();
        tree.insert(&b"tear"[..], Bytes::from_static(b"2")).unwrap();
        assert_eq!(tree.remove(b"tear"), Some(Bytes::from_static(b"2")));
        assert_eq!(tree.get(b"team"), Some(Bytes::from_static(b"1")));
        assert_eq!(tree.get(b"tear"), None);
        assert_eq!(tree.len(), 1);

        assert_eq!(tree.remove(b"team"), Some(Bytes::from_static(b"1")));
        assert!(tree.is_empty());
        assert_eq!(tree.get(b"team"), None);
    }

    #[test]
    fn remove_shrinks_node_back_down() {
        let mut tree = ArtTree::new();
        for b in 0..=255u16 {
            let key = [b as u8];
            tree.insert(&key[..], Bytes::from(vec![b as u8])).unwrap();
        }
        for b in 0..250u16 {
            let key = [b as u8];
            tree.remove(&key).unwrap();
        }
        assert_eq!(tree.len(), 6);
        for b in 250..=255u16 {
            let key = [b as u8];
            assert_eq!(tree.get(&key), Some(Bytes::from(vec![b as u8])));
        }
    }

    #[test]
    fn from_iterator_and_extend() {
        let mut tree: ArtTree = vec![
            (Bytes::from_static(b"a"), Bytes::from_static(b"1")),
            (Bytes::from_static(b"b"), Bytes::from_static(b"2")),
        ]
        .into_iter()
        .collect();
        tree.extend(vec![(Bytes::from_static(b"c"), Bytes::from_static(b"3"))]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(b"c"), Some(Bytes::from_static(b"3")));
    }

    fn root_node(tree: &ArtTree) -> &Node {
        &tree.arena[tree.root.expect("tree has a root") as usize]
    }

    /// `spec.md` §8 scenario 1: empty-tree insert/lookup.
    #[test]
    fn scenario_empty_tree_insert_and_lookup() {
        let mut tree = ArtTree::new();
        tree.insert(&b"test"[..], Bytes::from_static(b"testvalue")).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(b"test"), Some(Bytes::from_static(b"testvalue")));
        assert_eq!(tree.get(b"tex"), None);
        let leaf = root_node(&tree).as_leaf().expect("root is a leaf");
        assert_eq!(leaf.key.as_ref(), b"test\0");
    }

    /// `spec.md` §8 scenario 2: N4 promotes to N16 on the fifth child.
    #[test]
    fn scenario_promotion_n4_to_n16() {
        let mut tree = ArtTree::new();
        for i in 0..5u8 {
            let key = format!("key{}", i);
            tree.insert(key.as_bytes(), Bytes::from_static(b"value")).unwrap();
        }
        assert!(matches!(root_node(&tree).body, NodeBody::Node16(_)));
        for i in 0..5u8 {
            let key = format!("key{}", i);
            assert_eq!(tree.get(key.as_bytes()), Some(Bytes::from_static(b"value")));
        }
    }

    /// `spec.md` §8 scenario 3: a promotion chain N4 -> N16 -> N48 under
    /// one divergence node as 16, then 4 more, same-prefix keys arrive.
    #[test]
    fn scenario_promotion_chain_through_n48() {
        let mut tree = ArtTree::new();
        for i in 0..16u8 {
            let key = format!("grow-{}", (b'A' + i) as char);
            tree.insert(key.as_bytes(), Bytes::from_static(b"v")).unwrap();
        }
        assert!(matches!(root_node(&tree).body, NodeBody::Node16(_)));

        for i in 16..20u8 {
            let key = format!("grow-{}", (b'A' + i) as char);
            tree.insert(key.as_bytes(), Bytes::from_static(b"v")).unwrap();
        }
        assert!(matches!(root_node(&tree).body, NodeBody::Node48(_)));
        assert_eq!(tree.len(), 20);
        for i in 0..20u8 {
            let key = format!("grow-{}", (b'A' + i) as char);
            assert_eq!(tree.get(key.as_bytes()), Some(Bytes::from_static(b"v")));
        }
    }

    /// `spec.md` §8 scenario 4: common-prefix compression.
    #[test]
    fn scenario_common_prefix_compression() {
        let mut tree = ArtTree::new();
        tree.insert(&b"apple"[..], Bytes::from_static(b"v1")).unwrap();
        tree.insert(&b"appetite"[..], Bytes::from_static(b"v2")).unwrap();
        let root = root_node(&tree);
        assert_eq!(root.prefix.as_slice(), b"app");
        assert_eq!(root.prefix_len, 3);
        assert!(matches!(root.body, NodeBody::Node4(_)));
        assert_eq!(tree.get(b"apple"), Some(Bytes::from_static(b"v1")));
        assert_eq!(tree.get(b"appetite"), Some(Bytes::from_static(b"v2")));
    }

    /// `spec.md` §8 scenario 5: no common prefix at all.
    #[test]
    fn scenario_no_common_prefix() {
        let mut tree = ArtTree::new();
        tree.insert(&b"apple"[..], Bytes::from_static(b"v1")).unwrap();
        tree.insert(&b"banana"[..], Bytes::from_static(b"v2")).unwrap();
        let root = root_node(&tree);
        assert_eq!(root.prefix_len, 0);
        assert!(matches!(root.body, NodeBody::Node4(_)));
        assert!(root.find_child(b'a').is_some());
        assert!(root.find_child(b'b').is_some());
    }

    /// `spec.md` §8 scenario 6: prefix reduction during split.
    #[test]
    fn scenario_prefix_reduction_during_split() {
        let mut tree = ArtTree::new();
        tree.insert(&b"commonPartA"[..], Bytes::from_static(b"v1")).unwrap();
        tree.insert(&b"commonPartB"[..], Bytes::from_static(b"v2")).unwrap();
        let root = root_node(&tree);
        assert_eq!(root.prefix.as_slice(), b"commonPart");
        assert_eq!(root.prefix_len, 10);
    }

    #[test]
    fn long_shared_prefix_triggers_optimistic_storage() {
        let mut tree = ArtTree::new();
        let base = vec![b'x'; 40];
        let mut key_a = base.clone();
        key_a.push(b'a');
        let mut key_b = base.clone();
        key_b.push(b'b');
        tree.insert(&key_a[..], Bytes::from_static(b"A")).unwrap();
        tree.insert(&key_b[..], Bytes::from_static(b"B")).unwrap();
        assert_eq!(tree.get(&key_a), Some(Bytes::from_static(b"A")));
        assert_eq!(tree.get(&key_b), Some(Bytes::from_static(b"B")));
        assert_eq!(tree.get(&base), None);
    }
}
