//! Tree diff between two renders.
//!
//! Children are matched by `(role, key)`. A node whose kind variant,
//! role, key or image source changed is replaced wholesale; otherwise
//! text, class and style are patched in place and children are diffed.

use super::{NodeKind, Role, ViewNode};

/// One change between two trees.
///
/// `Remove` paths index into the old tree; every other path indexes into
/// the new tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    Insert { path: Vec<usize>, role: Role },
    Remove { path: Vec<usize>, role: Role },
    Replace { path: Vec<usize>, role: Role },
    SetText { path: Vec<usize>, text: String },
    SetClass { path: Vec<usize> },
    SetStyle { path: Vec<usize> },
}

/// Where the pair of nodes being compared sits in each tree.
#[derive(Default)]
struct Cursor {
    old: Vec<usize>,
    new: Vec<usize>,
}

impl Cursor {
    fn descend(&mut self, old_index: usize, new_index: usize) {
        self.old.push(old_index);
        self.new.push(new_index);
    }

    fn ascend(&mut self) {
        self.old.pop();
        self.new.pop();
    }
}

pub fn diff(old: &ViewNode, new: &ViewNode) -> Vec<Patch> {
    let mut patches = Vec::new();
    diff_node(old, new, &mut Cursor::default(), &mut patches);
    patches
}

fn same_identity(a: &ViewNode, b: &ViewNode) -> bool {
    a.role == b.role && a.key == b.key
}

fn needs_replace(old: &ViewNode, new: &ViewNode) -> bool {
    if !same_identity(old, new) || !old.kind.same_variant(&new.kind) {
        return true;
    }
    match (&old.kind, &new.kind) {
        (NodeKind::Text(_), NodeKind::Text(_)) => false,
        (a, b) => a != b,
    }
}

fn diff_node(old: &ViewNode, new: &ViewNode, at: &mut Cursor, out: &mut Vec<Patch>) {
    if needs_replace(old, new) {
        out.push(Patch::Replace { path: at.new.clone(), role: new.role });
        return;
    }
    if let (NodeKind::Text(a), NodeKind::Text(b)) = (&old.kind, &new.kind) {
        if a != b {
            out.push(Patch::SetText { path: at.new.clone(), text: b.clone() });
        }
    }
    if old.class != new.class {
        out.push(Patch::SetClass { path: at.new.clone() });
    }
    if old.style != new.style {
        out.push(Patch::SetStyle { path: at.new.clone() });
    }
    diff_children(&old.children, &new.children, at, out);
}

fn diff_children(old: &[ViewNode], new: &[ViewNode], at: &mut Cursor, out: &mut Vec<Patch>) {
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        let (a, b) = (&old[i], &new[j]);
        if same_identity(a, b) {
            at.descend(i, j);
            diff_node(a, b, at, out);
            at.ascend();
            i += 1;
            j += 1;
        } else if !old[i..].iter().any(|n| same_identity(n, b)) {
            out.push(Patch::Insert { path: child_path(&at.new, j), role: b.role });
            j += 1;
        } else if !new[j..].iter().any(|n| same_identity(n, a)) {
            out.push(Patch::Remove { path: child_path(&at.old, i), role: a.role });
            i += 1;
        } else {
            out.push(Patch::Replace { path: child_path(&at.new, j), role: b.role });
            i += 1;
            j += 1;
        }
    }
    for (index, node) in old.iter().enumerate().skip(i) {
        out.push(Patch::Remove { path: child_path(&at.old, index), role: node.role });
    }
    for (index, node) in new.iter().enumerate().skip(j) {
        out.push(Patch::Insert { path: child_path(&at.new, index), role: node.role });
    }
}

fn child_path(parent: &[usize], index: usize) -> Vec<usize> {
    let mut path = parent.to_vec();
    path.push(index);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRef;

    fn list(keys: &[&str]) -> ViewNode {
        ViewNode::column().children(
            keys.iter()
                .map(|k| ViewNode::text(*k).role(Role::RowTitle).key(*k)),
        )
    }

    #[test]
    fn identical_trees_have_no_patches() {
        assert!(diff(&list(&["a", "b"]), &list(&["a", "b"])).is_empty());
    }

    #[test]
    fn appended_child_is_one_insert() {
        let patches = diff(&list(&["a"]), &list(&["a", "b"]));
        assert_eq!(patches, vec![Patch::Insert { path: vec![1], role: Role::RowTitle }]);
    }

    #[test]
    fn removed_tail_is_one_remove() {
        let patches = diff(&list(&["a", "b"]), &list(&["a"]));
        assert_eq!(patches, vec![Patch::Remove { path: vec![1], role: Role::RowTitle }]);
    }

    #[test]
    fn middle_insert_keeps_siblings() {
        let patches = diff(&list(&["a", "c"]), &list(&["a", "b", "c"]));
        assert_eq!(patches, vec![Patch::Insert { path: vec![1], role: Role::RowTitle }]);
    }

    fn node_at<'a>(tree: &'a ViewNode, path: &[usize]) -> Option<&'a ViewNode> {
        path.iter().try_fold(tree, |node, &index| node.children.get(index))
    }

    #[test]
    fn nested_remove_uses_old_tree_path() {
        let items = |keys: &[&str]| {
            ViewNode::column().role(Role::PortfolioList).children(
                keys.iter().map(|k| ViewNode::text(*k).role(Role::RowTitle).key(*k)),
            )
        };
        let old = ViewNode::column()
            .child(ViewNode::text("name").role(Role::Name))
            .child(items(&["x", "y"]));
        let new = ViewNode::column()
            .child(ViewNode::text("@handle").role(Role::Handle))
            .child(ViewNode::text("name").role(Role::Name))
            .child(items(&["x"]));

        let patches = diff(&old, &new);
        assert_eq!(
            patches,
            vec![
                Patch::Insert { path: vec![0], role: Role::Handle },
                Patch::Remove { path: vec![1, 1], role: Role::RowTitle },
            ]
        );
        let removed = node_at(&old, &[1, 1]).unwrap();
        assert_eq!(removed.text_content(), Some("y"));
        assert_eq!(node_at(&new, &[0]).unwrap().role, Role::Handle);
    }

    #[test]
    fn text_and_style_changes_patch_in_place() {
        let old = ViewNode::text("x").role(Role::Name);
        let new = ViewNode::text("y").role(Role::Name).style("color", "red");
        assert_eq!(
            diff(&old, &new),
            vec![
                Patch::SetText { path: vec![], text: "y".to_string() },
                Patch::SetStyle { path: vec![] },
            ]
        );
    }

    #[test]
    fn changed_image_source_replaces() {
        let old = ViewNode::image(AssetRef::new("a"), "alt");
        let new = ViewNode::image(AssetRef::new("b"), "alt");
        assert_eq!(diff(&old, &new), vec![Patch::Replace { path: vec![], role: Role::Layout }]);
    }
}
