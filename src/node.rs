/// Owning link to a subtree. `None` is the empty subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// A single AVL node: a key, two owned children and the cached height of the
/// subtree rooted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Creates a leaf holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Builds a node over two existing subtrees and caches its height.
    ///
    /// No ordering or balance check is made; callers assembling trees by hand
    /// (tests, rotation fixtures) are responsible for both.
    pub fn with_children(key: K, left: Link<K>, right: Link<K>) -> Self {
        let mut node = Self {
            key,
            height: 1,
            left,
            right,
        };
        node.update();
        node
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Cached height of this subtree (a leaf is 1).
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn update(&mut self) {
        let left_height = self.left.as_ref().map_or(0, |n| n.height);
        let right_height = self.right.as_ref().map_or(0, |n| n.height);
        self.height = 1 + left_height.max(right_height);
    }

    /// Left height minus right height.
    pub fn balance_factor(&self) -> isize {
        let left_height = self.left.as_ref().map_or(0, |n| n.height as isize);
        let right_height = self.right.as_ref().map_or(0, |n| n.height as isize);
        left_height - right_height
    }
}
