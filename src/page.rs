//! Minimal page model: anchors and the canvases mounted after them.
//!
//! A widget does not look its insertion point up by itself; it is handed a
//! [`Mount`], usually an [`Anchor`] resolved from a [`Page`].

use log::debug;

use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// Anchor id used when none is configured.
pub const DEFAULT_ANCHOR_ID: &str = "elements";

/// Somewhere a canvas can be inserted.
pub trait Mount {
    /// Insert `canvas` directly after this mount point.
    fn insert_after(&mut self, canvas: &Canvas) -> Result<()>;
}

impl<M: Mount + ?Sized> Mount for &mut M {
    fn insert_after(&mut self, canvas: &Canvas) -> Result<()> {
        (**self).insert_after(canvas)
    }
}

/// A page node.
#[derive(Debug, Clone)]
pub enum Node {
    /// Container element identified by id.
    Container {
        /// Element id.
        id: String,
    },
    /// A mounted canvas.
    Canvas(Canvas),
}

/// Ordered sequence of sibling nodes.
#[derive(Debug, Clone, Default)]
pub struct Page {
    nodes: Vec<Node>,
}

impl Page {
    /// Empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page holding a single container with the given id.
    #[must_use]
    pub fn with_anchor(id: impl Into<String>) -> Self {
        let mut page = Self::new();
        page.push_container(id);
        page
    }

    /// Append a container node.
    pub fn push_container(&mut self, id: impl Into<String>) {
        self.nodes.push(Node::Container { id: id.into() });
    }

    /// Resolve the container with `id` as a mount point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorNotFound`] if no container has that id.
    pub fn anchor(&mut self, id: &str) -> Result<Anchor<'_>> {
        let index = self
            .position_of(id)
            .ok_or_else(|| Error::AnchorNotFound(id.to_string()))?;
        Ok(Anchor { page: self, index })
    }

    /// All nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mounted canvases in document order.
    pub fn canvases(&self) -> impl Iterator<Item = &Canvas> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Canvas(canvas) => Some(canvas),
            Node::Container { .. } => None,
        })
    }

    /// The page as HTML markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Container { id } => format!("<div id=\"{id}\"></div>"),
                Node::Canvas(canvas) => canvas.to_html(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| matches!(node, Node::Container { id: node_id } if node_id == id))
    }
}

/// A resolved container on a [`Page`].
#[derive(Debug)]
pub struct Anchor<'a> {
    page: &'a mut Page,
    index: usize,
}

impl Anchor<'_> {
    /// Id of the anchoring container.
    #[must_use]
    pub fn id(&self) -> &str {
        match &self.page.nodes[self.index] {
            Node::Container { id } => id,
            Node::Canvas(_) => "",
        }
    }
}

impl Mount for Anchor<'_> {
    fn insert_after(&mut self, canvas: &Canvas) -> Result<()> {
        debug!(
            "mounting {}x{} canvas after #{}",
            canvas.width(),
            canvas.height(),
            self.id()
        );
        self.page.nodes.insert(self.index + 1, Node::Canvas(canvas.clone()));
        Ok(())
    }
}
