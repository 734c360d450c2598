//! Data model for pin-jointed planar trusses.

use crate::geometry::Position;

/// Material properties shared by every link in a model.
///
/// Each scalar is independent and stays unset until an import directive
/// provides it; no invariant relates the four values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Material {
    /// Ultimate tensile strength.
    pub ultimate_strength: Option<f64>,
    /// Yield strength.
    pub yield_strength: Option<f64>,
    /// Elastic modulus.
    pub elastic_modulus: Option<f64>,
    /// Static factor of safety.
    pub static_safety_factor: Option<f64>,
}

impl Material {
    /// Build a material from the three strength values, leaving the static
    /// safety factor unset.
    #[must_use]
    pub const fn from_strengths(ultimate_strength: f64, yield_strength: f64, modulus: f64) -> Self {
        Self {
            ultimate_strength: Some(ultimate_strength),
            yield_strength: Some(yield_strength),
            elastic_modulus: Some(modulus),
            static_safety_factor: None,
        }
    }
}

/// A named joint at a fixed position.
///
/// Two nodes are equal when both the name and the position match. Name
/// uniqueness within a model is enforced by [`TrussModel::add_node`], not by
/// the type itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Identifier unique within the owning model.
    pub name: String,
    /// Location of the joint.
    pub position: Position,
}

impl Node {
    /// Create a node with the supplied name and position.
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A straight connection between two nodes, referenced by name.
///
/// Links never hold their endpoints directly; the names are resolved against
/// the owning model when geometry is derived, so a link whose endpoints do
/// not (yet) exist is representable. `length` and `angle` stay `None` until
/// a derivation pass resolves both endpoints.
#[derive(Clone, Debug)]
pub struct Link {
    /// Display name of the link.
    pub name: String,
    /// Name of the first endpoint node.
    pub start_node: String,
    /// Name of the second endpoint node.
    pub end_node: String,
    /// Derived length, set by [`TrussModel::derive_link_geometry`].
    pub length: Option<f64>,
    /// Derived planar angle in radians over `[0, 2π)`, set alongside `length`.
    pub angle: Option<f64>,
}

impl Link {
    /// Create a link joining two nodes by name, with no derived geometry.
    pub fn new(
        name: impl Into<String>,
        start_node: impl Into<String>,
        end_node: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_node: start_node.into(),
            end_node: end_node.into(),
            length: None,
            angle: None,
        }
    }

    /// Whether a derivation pass has resolved both endpoints.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        self.length.is_some() && self.angle.is_some()
    }
}

/// Equality deliberately ignores the display name: two links match when they
/// join the same node names with the same derived geometry.
impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.start_node == other.start_node
            && self.end_node == other.end_node
            && self.length == other.length
            && self.angle == other.angle
    }
}

/// Aggregate owning every entity of one truss description.
#[derive(Clone, Debug, Default)]
pub struct TrussModel {
    /// Optional title taken from the import file.
    pub title: Option<String>,
    /// Material shared by all links.
    pub material: Material,
    /// Nodes in declaration order.
    nodes: Vec<Node>,
    /// Links in declaration order.
    links: Vec<Link>,
}

impl TrussModel {
    /// Create an empty model.
    ///
    /// # Examples
    /// ```
    /// use trusskit::TrussModel;
    ///
    /// let model = TrussModel::new();
    /// assert_eq!(model.node_count(), 0);
    /// assert_eq!(model.link_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the model.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links in the model.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// All nodes in declaration order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All links in declaration order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Look up a node by name, first match in declaration order.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Whether a node with this name exists.
    #[must_use]
    pub fn has_node(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    /// Append a node, rejecting duplicate names.
    ///
    /// Returns `false` without modifying the model when a node with the same
    /// name is already present, regardless of its position.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.has_node(&node.name) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Append a link unconditionally.
    ///
    /// Duplicate links and links naming nonexistent nodes are permitted;
    /// unresolved endpoints simply leave the link unmeasured.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Derive length and planar angle for every link whose endpoints resolve.
    ///
    /// Links with an unresolved endpoint are left untouched. The pass is
    /// idempotent and safe to re-run after any mutation.
    pub fn derive_link_geometry(&mut self) {
        for index in 0..self.links.len() {
            let start = self.node(&self.links[index].start_node).map(|n| n.position);
            let end = self.node(&self.links[index].end_node).map(|n| n.position);
            if let (Some(start), Some(end)) = (start, end) {
                let displacement = end.subtract(start);
                let link = &mut self.links[index];
                link.length = Some(displacement.magnitude());
                link.angle = Some(displacement.planar_angle_radians());
            }
        }
    }
}
