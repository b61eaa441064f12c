use crate::settings::Widget;

/// Index of a node inside a [`WidgetTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
	/// Raw arena index.
	pub fn index(self) -> usize {
		self.0
	}
}

/// One reconciled node; points back into the flat widget stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
	/// Position of the widget in the descriptor stream.
	pub widget: usize,
	/// Heading level for titles, `None` for leaves.
	pub heading_level: Option<u32>,
	/// Child nodes in stream order.
	pub children: Vec<NodeId>,
}

/// Nested widget tree rebuilt from a flat descriptor stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetTree {
	nodes: Vec<TreeNode>,
	roots: Vec<NodeId>,
}

impl WidgetTree {
	/// Top-level nodes in stream order.
	pub fn roots(&self) -> &[NodeId] {
		&self.roots
	}

	/// Node by id, or `None` when `id` belongs to a larger tree.
	pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
		self.nodes.get(id.0)
	}

	/// Node by id.
	///
	/// # Panics
	///
	/// Panics if `id` was issued by a different tree and is out of range here.
	/// Use [`WidgetTree::get`] for ids of unknown origin.
	pub fn node(&self, id: NodeId) -> &TreeNode {
		&self.nodes[id.0]
	}

	/// Children of a node.
	///
	/// # Panics
	///
	/// Panics under the same conditions as [`WidgetTree::node`].
	pub fn children(&self, id: NodeId) -> &[NodeId] {
		&self.nodes[id.0].children
	}

	/// Total node count; equals the stream length.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the tree has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Depth-first pre-order walk yielding `(depth, node)`.
	pub fn walk(&self) -> Walk<'_> {
		Walk {
			tree: self,
			stack: self.roots.iter().rev().map(|id| (0, *id)).collect(),
		}
	}

	fn attach(&mut self, parent: Option<NodeId>, node: TreeNode) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(node);
		match parent {
			Some(parent) => self.nodes[parent.0].children.push(id),
			None => self.roots.push(id),
		}
		id
	}
}

/// Pre-order iterator over a [`WidgetTree`].
pub struct Walk<'a> {
	tree: &'a WidgetTree,
	stack: Vec<(usize, NodeId)>,
}

impl<'a> Iterator for Walk<'a> {
	type Item = (usize, &'a TreeNode);

	fn next(&mut self) -> Option<Self::Item> {
		let (depth, id) = self.stack.pop()?;
		let node = self.tree.node(id);
		self.stack.extend(node.children.iter().rev().map(|child| (depth + 1, *child)));
		Some((depth, node))
	}
}

/// Rebuild the nested widget tree from a flat descriptor stream.
///
/// Titles open a section at their heading level, closing every open section at
/// the same or a deeper level first; other widgets land in the innermost open
/// section, or at the root when none is open. Levels may skip values without
/// producing intermediate nodes.
pub fn reconcile_widgets(widgets: &[Widget]) -> WidgetTree {
	let mut tree = WidgetTree {
		nodes: Vec::with_capacity(widgets.len()),
		roots: Vec::new(),
	};
	let mut open: Vec<(NodeId, u32)> = Vec::new();

	for (index, widget) in widgets.iter().enumerate() {
		if widget.is_title() {
			let level = widget.heading_level();
			while open.last().is_some_and(|(_, top)| *top >= level) {
				open.pop();
			}
			let parent = open.last().map(|(id, _)| *id);
			let id = tree.attach(
				parent,
				TreeNode {
					widget: index,
					heading_level: Some(level),
					children: Vec::new(),
				},
			);
			open.push((id, level));
		} else {
			let parent = open.last().map(|(id, _)| *id);
			tree.attach(
				parent,
				TreeNode {
					widget: index,
					heading_level: None,
					children: Vec::new(),
				},
			);
		}
	}

	tree
}

#[cfg(test)]
mod tests;
