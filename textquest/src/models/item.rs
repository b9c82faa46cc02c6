/// Shared capability of everything a player can look at.
pub trait Examinable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Whether `get` may move this into the inventory.
    fn is_collectible(&self) -> bool;
}

/// A collectible thing. Lives in exactly one room or in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Name of the item (ie: "key"), unique within its container
    pub name: String,
    /// Text shown when examined
    pub description: String,
    /// Text shown when picked up
    pub pickup_text: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let pickup_text = format!("You pick up the {name}");
        Self {
            name,
            description: description.into(),
            pickup_text,
        }
    }

    pub fn with_pickup_text(mut self, text: impl Into<String>) -> Self {
        self.pickup_text = text.into();
        self
    }
}

impl Examinable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_collectible(&self) -> bool {
        true
    }
}

/// Fixed scenery. Can be examined, never picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub name: String,
    pub description: String,
}

impl Object {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Examinable for Object {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_collectible(&self) -> bool {
        false
    }
}
