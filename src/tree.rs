type Link<K> = Option<Box<TreeNode<K>>>;

#[derive(Debug)]
struct TreeNode<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// Unbalanced binary search tree: smaller keys to the left, larger to the
/// right, duplicates ignored.
#[derive(Debug)]
pub struct BinarySearchTree<K: Ord> {
    root: Link<K>,
}

impl<K: Ord> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> BinarySearchTree<K> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn insert(&mut self, key: K) {
        Self::insert_node(&mut self.root, key);
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if *key < n.key {
                node = n.left.as_deref();
            } else if *key > n.key {
                node = n.right.as_deref();
            } else {
                return true;
            }
        }
        false
    }

    /// Smallest key: the leftmost node.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Largest key: the rightmost node.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Root, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<&K> {
        let mut out = Vec::new();
        Self::preorder_node(&self.root, &mut out);
        out
    }

    /// Left subtree, root, right subtree; yields the keys in sorted order.
    pub fn inorder(&self) -> Vec<&K> {
        let mut out = Vec::new();
        Self::inorder_node(&self.root, &mut out);
        out
    }

    /// Left subtree, right subtree, root.
    pub fn postorder(&self) -> Vec<&K> {
        let mut out = Vec::new();
        Self::postorder_node(&self.root, &mut out);
        out
    }

    /// Removes a key, reporting whether it was present. A node with two
    /// children is replaced by its in-order successor, the leftmost key of
    /// the right subtree.
    pub fn remove(&mut self, key: &K) -> bool {
        Self::remove_node(&mut self.root, key)
    }

    // [private]

    fn insert_node(slot: &mut Link<K>, key: K) {
        match slot {
            None => {
                *slot = Some(Box::new(TreeNode {
                    key,
                    left: None,
                    right: None,
                }));
            }
            Some(node) => {
                if key < node.key {
                    Self::insert_node(&mut node.left, key);
                } else if key > node.key {
                    Self::insert_node(&mut node.right, key);
                }
                // equal keys are dropped
            }
        }
    }

    fn remove_node(slot: &mut Link<K>, key: &K) -> bool {
        match slot {
            None => false,
            Some(node) if *key < node.key => Self::remove_node(&mut node.left, key),
            Some(node) if *key > node.key => Self::remove_node(&mut node.right, key),
            Some(_) => {
                if let Some(mut node) = slot.take() {
                    *slot = match (node.left.take(), node.right.take()) {
                        (None, None) => None,
                        (Some(left), None) => Some(left),
                        (None, Some(right)) => Some(right),
                        (Some(left), Some(right)) => {
                            let (successor, rest) = Self::detach_min(right);
                            Some(Box::new(TreeNode {
                                key: successor,
                                left: Some(left),
                                right: rest,
                            }))
                        }
                    };
                }
                true
            }
        }
    }

    /// Splits the smallest key out of a subtree, returning it together with
    /// what remains of the subtree.
    fn detach_min(mut node: Box<TreeNode<K>>) -> (K, Link<K>) {
        match node.left.take() {
            None => (node.key, node.right.take()),
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }

    fn preorder_node<'a>(node: &'a Link<K>, out: &mut Vec<&'a K>) {
        if let Some(n) = node {
            out.push(&n.key);
            Self::preorder_node(&n.left, out);
            Self::preorder_node(&n.right, out);
        }
    }

    fn inorder_node<'a>(node: &'a Link<K>, out: &mut Vec<&'a K>) {
        if let Some(n) = node {
            Self::inorder_node(&n.left, out);
            out.push(&n.key);
            Self::inorder_node(&n.right, out);
        }
    }

    fn postorder_node<'a>(node: &'a Link<K>, out: &mut Vec<&'a K>) {
        if let Some(n) = node {
            Self::postorder_node(&n.left, out);
            Self::postorder_node(&n.right, out);
            out.push(&n.key);
        }
    }
}

#[cfg(test)]
mod test {
    use super::BinarySearchTree;

    fn sample() -> BinarySearchTree<i32> {
        let mut t = BinarySearchTree::new();
        for key in [11, 7, 15, 5, 9, 13, 20, 3, 8, 10, 12, 14, 18, 25] {
            t.insert(key);
        }
        t
    }

    fn keys(refs: Vec<&i32>) -> Vec<i32> {
        refs.into_iter().copied().collect()
    }

    #[test]
    fn inorder_is_sorted() {
        let t = sample();
        assert_eq!(
            keys(t.inorder()),
            [3, 5, 7, 8, 9, 10, 11, 12, 13, 14, 15, 18, 20, 25]
        );
    }

    #[test]
    fn preorder_and_postorder() {
        let t = sample();
        assert_eq!(
            keys(t.preorder()),
            [11, 7, 5, 3, 9, 8, 10, 15, 13, 12, 14, 20, 18, 25]
        );
        assert_eq!(
            keys(t.postorder()),
            [3, 5, 8, 10, 9, 7, 12, 14, 13, 18, 25, 20, 15, 11]
        );
    }

    #[test]
    fn min_max_contains() {
        let t = sample();
        assert_eq!(t.min(), Some(&3));
        assert_eq!(t.max(), Some(&25));
        assert!(t.contains(&13));
        assert!(!t.contains(&4));

        let empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert!(empty.is_empty());
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut t = sample();
        t.insert(9);
        assert_eq!(keys(t.inorder()).len(), 14);
    }

    #[test]
    fn remove_leaf() {
        let mut t = sample();
        assert!(t.remove(&3));
        assert!(!t.contains(&3));
        assert_eq!(
            keys(t.inorder()),
            [5, 7, 8, 9, 10, 11, 12, 13, 14, 15, 18, 20, 25]
        );
    }

    #[test]
    fn remove_node_with_one_child() {
        let mut t = sample();
        // 5 only has the left child 3, which moves up into its place
        assert!(t.remove(&5));
        assert_eq!(
            keys(t.preorder()),
            [11, 7, 3, 9, 8, 10, 15, 13, 12, 14, 20, 18, 25]
        );
    }

    #[test]
    fn remove_node_with_two_children() {
        let mut t = sample();
        assert!(t.remove(&15));
        assert!(!t.contains(&15));
        // the in-order successor 18 takes 15's place
        assert_eq!(
            keys(t.preorder()),
            [11, 7, 5, 3, 9, 8, 10, 18, 13, 12, 14, 20, 25]
        );
    }

    #[test]
    fn remove_root_until_empty() {
        let mut t = sample();
        let mut expected = keys(t.inorder());

        while let Some(&&root) = t.preorder().first() {
            assert!(t.remove(&root));
            expected.retain(|k| *k != root);
            assert_eq!(keys(t.inorder()), expected);
        }
        assert!(t.is_empty());
    }

    #[test]
    fn remove_absent_key() {
        let mut t = sample();
        assert!(!t.remove(&99));
        assert_eq!(keys(t.inorder()).len(), 14);
    }
}
