//! The display-surface contract and scene mounting.
//!
//! A [`Surface`] is whatever owns the live element tree: the browser DOM in
//! `folio-wasm`, or [`MemorySurface`] in tests and static export.

use folio_protocol::Element;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("node is not part of this surface")]
    UnknownNode,
    #[error("surface call failed: {0}")]
    Call(String),
}

pub trait Surface {
    type Node: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Create a detached element in the SVG namespace.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, SurfaceError>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node)
    -> Result<(), SurfaceError>;

    /// Swap every child of `parent` for `children` in one step. On error
    /// `parent` keeps its current children.
    fn replace_children(
        &mut self,
        parent: &Self::Node,
        children: &[Self::Node],
    ) -> Result<(), SurfaceError>;

    fn set_attribute(
        &mut self,
        node: &Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), SurfaceError>;

    fn remove_attribute(&mut self, node: &Self::Node, name: &str) -> Result<(), SurfaceError>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_text(&mut self, node: &Self::Node, text: &str) -> Result<(), SurfaceError>;
}

/// Create `element` and its subtree, detached, returning the new root.
pub fn build_detached<S: Surface>(
    surface: &mut S,
    element: &Element,
) -> Result<S::Node, SurfaceError> {
    let node = surface.create_element(&element.tag)?;
    for (name, value) in &element.attributes {
        surface.set_attribute(&node, name, &value.to_string())?;
    }
    if let Some(text) = &element.text {
        surface.set_text(&node, text)?;
    }
    for child in &element.children {
        let child_node = build_detached(surface, child)?;
        surface.append_child(&node, &child_node)?;
    }
    for animation in &element.animations {
        let anim_node = build_detached(surface, &animation.to_element())?;
        surface.append_child(&node, &anim_node)?;
    }
    Ok(node)
}

/// Replace the contents of the element with id `target_id` by the children
/// of `scene` (an `<svg>` root), copying its `viewBox`.
///
/// Returns `Ok(None)` without touching the surface when the target does not
/// exist. The new subtree is built detached and swapped in with a single
/// [`Surface::replace_children`]; on any error the target keeps its previous
/// children and `viewBox`.
pub fn mount<S: Surface>(
    surface: &mut S,
    target_id: &str,
    scene: &Element,
) -> Result<Option<S::Node>, SurfaceError> {
    let Some(target) = surface.element_by_id(target_id) else {
        tracing::debug!(target_id, "mount target missing, skipping");
        return Ok(None);
    };

    let nodes = scene
        .children
        .iter()
        .map(|child| build_detached(surface, child))
        .collect::<Result<Vec<_>, _>>()?;

    let previous_view_box = surface.attribute(&target, "viewBox");
    if let Some(view_box) = scene.get_attr("viewBox") {
        surface.set_attribute(&target, "viewBox", &view_box.to_string())?;
    }
    if let Err(e) = surface.replace_children(&target, &nodes) {
        let restored = match &previous_view_box {
            Some(view_box) => surface.set_attribute(&target, "viewBox", view_box),
            None => surface.remove_attribute(&target, "viewBox"),
        };
        if let Err(restore) = restored {
            tracing::warn!(target_id, error = %restore, "could not restore viewBox");
        }
        return Err(e);
    }
    tracing::debug!(target_id, nodes = nodes.len(), "mounted scene");
    Ok(Some(target))
}

/// Index of a node in a [`MemorySurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct MemoryNode {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// In-memory element tree with a single document root.
///
/// Nodes live in an append-only arena: detached or replaced nodes keep their
/// slot, so memory grows with every mount. Meant for tests and short-lived
/// export runs.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    nodes: Vec<MemoryNode>,
}

impl MemorySurface {
    const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![MemoryNode {
                tag: "#document".to_owned(),
                attributes: Vec::new(),
                text: None,
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    /// Attach an empty `<tag id="id">` to the document root.
    pub fn add_target(&mut self, tag: &str, id: &str) -> NodeId {
        let node = self.alloc(tag);
        self.nodes[node.0].attributes.push(("id".to_owned(), id.to_owned()));
        self.attach(Self::ROOT, node);
        node
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.tag.as_str())
    }

    /// Read a subtree back as an [`Element`]; attribute values come back as
    /// text and animation children as plain children.
    pub fn snapshot(&self, node: NodeId) -> Option<Element> {
        let n = self.nodes.get(node.0)?;
        let mut element = Element::new(n.tag.as_str());
        for (name, value) in &n.attributes {
            element.set_attr(name.as_str(), value.as_str());
        }
        element.text = n.text.clone();
        for &child in &n.children {
            element.children.push(self.snapshot(child)?);
        }
        Some(element)
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        self.nodes.push(MemoryNode {
            tag: tag.to_owned(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
            parent: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut MemoryNode, SurfaceError> {
        self.nodes.get_mut(node.0).ok_or(SurfaceError::UnknownNode)
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == candidate {
                return true;
            }
            current = self.nodes.get(n.0).and_then(|m| m.parent);
        }
        false
    }

    fn find_attached(&self, from: NodeId, id: &str) -> Option<NodeId> {
        let node = self.nodes.get(from.0)?;
        if node.attributes.iter().any(|(k, v)| k == "id" && v == id) {
            return Some(from);
        }
        node.children.iter().find_map(|&c| self.find_attached(c, id))
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MemorySurface {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_attached(Self::ROOT, id)
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, SurfaceError> {
        Ok(self.alloc(tag))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), SurfaceError> {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return Err(SurfaceError::UnknownNode);
        }
        self.attach(*parent, *child);
        Ok(())
    }

    fn replace_children(
        &mut self,
        parent: &NodeId,
        children: &[NodeId],
    ) -> Result<(), SurfaceError> {
        let known = |n: &NodeId| n.0 < self.nodes.len();
        if !known(parent) || !children.iter().all(known) {
            return Err(SurfaceError::UnknownNode);
        }
        if children.iter().any(|&c| self.is_ancestor_or_self(c, *parent)) {
            return Err(SurfaceError::Call("child would contain its parent".into()));
        }

        let previous = std::mem::take(&mut self.nodes[parent.0].children);
        for child in previous {
            self.nodes[child.0].parent = None;
        }
        for &child in children {
            self.attach(*parent, child);
        }
        Ok(())
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) -> Result<(), SurfaceError> {
        self.node_mut(*node)?.attributes.retain(|(k, _)| k != name);
        Ok(())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), SurfaceError> {
        let attributes = &mut self.node_mut(*node)?.attributes;
        match attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => attributes.push((name.to_owned(), value.to_owned())),
        }
        Ok(())
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes
            .get(node.0)?
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) -> Result<(), SurfaceError> {
        self.node_mut(*node)?.text = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::AnimationDescriptor;

    fn scene() -> Element {
        Element::new("svg")
            .attr("viewBox", "0 0 800 500")
            .child(Element::new("rect").attr("id", "bg").attr("width", 800.0))
            .child(
                Element::new("text")
                    .with_text("hi")
                    .animate(AnimationDescriptor::attribute("opacity", ["0", "1"])),
            )
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let mut surface = MemorySurface::new();
        let before = surface.nodes.len();
        let mounted = mount(&mut surface, "dataViz", &scene());
        assert!(matches!(mounted, Ok(None)));
        assert_eq!(surface.nodes.len(), before);
    }

    #[test]
    fn mount_copies_children_and_view_box() {
        let mut surface = MemorySurface::new();
        let target = surface.add_target("svg", "dataViz");
        let mounted = mount(&mut surface, "dataViz", &scene());
        assert!(matches!(mounted, Ok(Some(t)) if t == target));

        assert_eq!(surface.children(target).len(), 2);
        assert_eq!(surface.attribute(&target, "viewBox").as_deref(), Some("0 0 800 500"));
        let bg = surface.element_by_id("bg");
        assert_eq!(bg.and_then(|n| surface.attribute(&n, "width")).as_deref(), Some("800"));

        let text = surface.children(target)[1];
        assert_eq!(surface.children(text).len(), 1);
        assert_eq!(surface.tag(surface.children(text)[0]), Some("animate"));
    }

    #[test]
    fn remount_discards_previous_tree() {
        let mut surface = MemorySurface::new();
        let target = surface.add_target("svg", "dataViz");
        let _ = mount(&mut surface, "dataViz", &scene());
        let first = surface.snapshot(target);
        let _ = mount(&mut surface, "dataViz", &scene());
        assert_eq!(surface.children(target).len(), 2);
        assert_eq!(surface.snapshot(target), first);
    }

    #[test]
    fn replaced_nodes_are_no_longer_reachable_by_id() {
        let mut surface = MemorySurface::new();
        let target = surface.add_target("svg", "dataViz");
        let _ = mount(&mut surface, "dataViz", &scene());
        let old_bg = surface.element_by_id("bg");
        let _ = mount(&mut surface, "dataViz", &scene());

        let new_bg = surface.element_by_id("bg");
        assert!(old_bg.is_some() && new_bg.is_some());
        assert_ne!(old_bg, new_bg);
        assert!(old_bg.is_some_and(|n| !surface.children(target).contains(&n)));
    }

    /// `armed` fails every `replace_children`; `fail_creates_after` fails
    /// `create_element` past that many calls.
    struct FlakySurface {
        inner: MemorySurface,
        armed: bool,
        fail_creates_after: Option<usize>,
        creates: usize,
    }

    impl FlakySurface {
        fn new() -> Self {
            Self {
                inner: MemorySurface::new(),
                armed: false,
                fail_creates_after: None,
                creates: 0,
            }
        }
    }

    impl Surface for FlakySurface {
        type Node = NodeId;

        fn element_by_id(&self, id: &str) -> Option<NodeId> {
            self.inner.element_by_id(id)
        }

        fn create_element(&mut self, tag: &str) -> Result<NodeId, SurfaceError> {
            self.creates += 1;
            if self.fail_creates_after.is_some_and(|n| self.creates > n) {
                return Err(SurfaceError::Call("createElementNS".into()));
            }
            self.inner.create_element(tag)
        }

        fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), SurfaceError> {
            self.inner.append_child(parent, child)
        }

        fn replace_children(
            &mut self,
            parent: &NodeId,
            children: &[NodeId],
        ) -> Result<(), SurfaceError> {
            if self.armed {
                return Err(SurfaceError::Call("replaceChildren".into()));
            }
            self.inner.replace_children(parent, children)
        }

        fn set_attribute(
            &mut self,
            node: &NodeId,
            name: &str,
            value: &str,
        ) -> Result<(), SurfaceError> {
            self.inner.set_attribute(node, name, value)
        }

        fn remove_attribute(&mut self, node: &NodeId, name: &str) -> Result<(), SurfaceError> {
            self.inner.remove_attribute(node, name)
        }

        fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
            self.inner.attribute(node, name)
        }

        fn set_text(&mut self, node: &NodeId, text: &str) -> Result<(), SurfaceError> {
            self.inner.set_text(node, text)
        }
    }

    fn compact_scene() -> Element {
        Element::new("svg")
            .attr("viewBox", "0 0 800 560")
            .child(Element::new("rect").attr("id", "compact-bg"))
    }

    #[test]
    fn failed_swap_keeps_previous_chart() {
        let mut surface = FlakySurface::new();
        let target = surface.inner.add_target("svg", "dataViz");
        assert!(matches!(mount(&mut surface, "dataViz", &scene()), Ok(Some(_))));
        let before = surface.inner.snapshot(target);

        surface.armed = true;
        assert!(mount(&mut surface, "dataViz", &compact_scene()).is_err());

        assert_eq!(surface.inner.snapshot(target), before);
        assert_eq!(surface.inner.children(target).len(), 2);
        assert_eq!(surface.attribute(&target, "viewBox").as_deref(), Some("0 0 800 500"));
    }

    #[test]
    fn failed_swap_on_fresh_target_leaves_no_view_box() {
        let mut surface = FlakySurface::new();
        let target = surface.inner.add_target("svg", "dataViz");
        surface.armed = true;
        assert!(mount(&mut surface, "dataViz", &scene()).is_err());
        assert!(surface.inner.children(target).is_empty());
        assert_eq!(surface.attribute(&target, "viewBox"), None);
    }

    #[test]
    fn failed_build_never_touches_target() {
        let mut surface = FlakySurface::new();
        let target = surface.inner.add_target("svg", "dataViz");
        let _ = mount(&mut surface, "dataViz", &scene());
        let before = surface.inner.snapshot(target);

        surface.fail_creates_after = Some(surface.creates + 1);
        let scene = compact_scene().child(Element::new("g"));
        assert!(mount(&mut surface, "dataViz", &scene).is_err());
        assert_eq!(surface.inner.snapshot(target), before);
    }

    #[test]
    fn replace_children_rejects_cycles() {
        let mut surface = MemorySurface::new();
        let target = surface.add_target("svg", "dataViz");
        let root = MemorySurface::ROOT;
        assert!(surface.replace_children(&target, &[root]).is_err());
        assert_eq!(surface.children(root), &[target]);
    }
}
