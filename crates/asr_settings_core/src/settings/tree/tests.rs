use crate::settings::{NodeId, Widget, WidgetTree, reconcile_widgets};

fn titles(levels: &[u32]) -> Vec<Widget> {
	levels
		.iter()
		.enumerate()
		.map(|(index, level)| Widget::title(format!("t{index}"), format!("Title {index}"), *level))
		.collect()
}

fn shape(tree: &WidgetTree) -> Vec<(usize, usize)> {
	tree.walk().map(|(depth, node)| (depth, node.widget)).collect()
}

fn child_widgets(tree: &WidgetTree, id: NodeId) -> Vec<usize> {
	tree.children(id).iter().map(|child| tree.node(*child).widget).collect()
}

#[test]
fn skipped_levels_nest_without_intermediate_nodes() {
	let tree = reconcile_widgets(&titles(&[1, 2, 1, 3, 2]));

	assert_eq!(tree.roots().len(), 2);
	let first = tree.roots()[0];
	let second = tree.roots()[1];
	assert_eq!(child_widgets(&tree, first), vec![1]);
	assert_eq!(child_widgets(&tree, second), vec![3, 4]);
	assert_eq!(tree.node(tree.children(second)[0]).heading_level, Some(3));
	assert_eq!(shape(&tree), vec![(0, 0), (1, 1), (0, 2), (1, 3), (1, 4)]);
}

#[test]
fn equal_levels_are_siblings() {
	let mut widgets = vec![Widget::title("root", "Root", 1)];
	widgets.extend(titles(&[2, 2]));
	let tree = reconcile_widgets(&widgets);

	assert_eq!(tree.roots().len(), 1);
	assert_eq!(child_widgets(&tree, tree.roots()[0]), vec![1, 2]);
	assert!(tree.children(tree.roots()[0]).iter().all(|id| tree.children(*id).is_empty()));
}

#[test]
fn first_descriptor_is_root_regardless_of_level() {
	let tree = reconcile_widgets(&titles(&[5, 0]));
	assert_eq!(shape(&tree), vec![(0, 0), (0, 1)]);
}

#[test]
fn leaves_before_any_title_sit_at_root() {
	let widgets = vec![
		Widget::bool("early", "Early", true),
		Widget::title("section", "Section", 0),
		Widget::bool("inside", "Inside", false),
		Widget::file_select("file", "File", "*.txt"),
	];
	let tree = reconcile_widgets(&widgets);

	assert_eq!(tree.roots().len(), 2);
	assert_eq!(tree.node(tree.roots()[0]).heading_level, None);
	assert_eq!(child_widgets(&tree, tree.roots()[1]), vec![2, 3]);
}

#[test]
fn leaves_attach_to_innermost_open_title() {
	let widgets = vec![
		Widget::title("a", "A", 0),
		Widget::title("b", "B", 1),
		Widget::bool("deep", "Deep", true),
		Widget::title("c", "C", 1),
		Widget::bool("next", "Next", true),
		Widget::title("d", "D", 0),
		Widget::bool("last", "Last", true),
	];
	let tree = reconcile_widgets(&widgets);

	assert_eq!(shape(&tree), vec![(0, 0), (1, 1), (2, 2), (1, 3), (2, 4), (0, 5), (1, 6)]);
	assert_eq!(tree.len(), widgets.len());
}

#[test]
fn empty_stream_yields_empty_tree() {
	let tree = reconcile_widgets(&[]);
	assert!(tree.is_empty());
	assert!(tree.roots().is_empty());
	assert_eq!(tree.walk().count(), 0);
}

fn deepest_first_child(tree: &WidgetTree) -> NodeId {
	let mut id = tree.roots()[0];
	while let Some(child) = tree.children(id).first() {
		id = *child;
	}
	id
}

#[test]
fn ids_from_a_larger_tree_are_rejected_by_get() {
	let large = reconcile_widgets(&titles(&[1, 2, 3]));
	let small = reconcile_widgets(&titles(&[1]));
	let deepest = deepest_first_child(&large);

	assert!(large.get(deepest).is_some());
	assert_eq!(small.get(deepest), None);
	assert_eq!(deepest.index(), 2);
	assert_eq!(small.get(small.roots()[0]), Some(small.node(small.roots()[0])));
}

#[test]
#[should_panic]
fn node_panics_on_a_foreign_id() {
	let large = reconcile_widgets(&titles(&[1, 2, 3]));
	let small = reconcile_widgets(&[]);
	let deepest = deepest_first_child(&large);
	let _ = small.node(deepest);
}
