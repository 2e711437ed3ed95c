//! The capability a display drawable needs in order to be positioned

use super::policy::Policy;
use super::types::Size;
use super::value::{Properties, PropertyValue};

/// A drawable that the layout engine can position.
///
/// Display backends implement this for their widget types. There has to be a
/// native part: the engine can't know on its own how much room a font or a
/// checkbox needs, so leaves report that through [`pos_minimum_size`].
///
/// [`pos_minimum_size`]: Positionable::pos_minimum_size
pub trait Positionable {
    /// How this node arranges its children. Fixed once the node is built.
    fn policy(&self) -> Policy;

    /// The node's current style properties
    fn pos_properties(&self) -> &Properties;

    /// A single style property. Override if querying everything is expensive.
    fn pos_property(&self, name: &str) -> Option<&PropertyValue> {
        self.pos_properties().get(name)
    }

    /// Child nodes in document order
    fn pos_children(&self) -> Vec<&dyn Positionable>;

    /// The smallest size the node can occupy without being squashed
    fn pos_minimum_size(&self) -> Size;

    /// A name for results and error messages
    fn pos_name(&self) -> Option<&str> {
        None
    }
}
