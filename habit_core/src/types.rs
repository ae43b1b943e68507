//! Core types shared across the engine

use serde::{Deserialize, Serialize};

/// One of the four attribute dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "per")]
    Perception,
}

impl Attribute {
    /// Get all attribute dimensions
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Perception,
        ]
    }
}

/// A value for each of the four attribute dimensions
///
/// Wire names follow the service's abbreviated keys (`str`, `con`,
/// `int`, `per`); an absent dimension counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(rename = "str", default)]
    pub strength: f64,
    #[serde(rename = "con", default)]
    pub constitution: f64,
    #[serde(rename = "int", default)]
    pub intelligence: f64,
    #[serde(rename = "per", default)]
    pub perception: f64,
}

impl AttributeSet {
    /// Get the value for one dimension
    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Perception => self.perception,
        }
    }

    /// Set the value for one dimension
    pub fn set(&mut self, attribute: Attribute, value: f64) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Constitution => self.constitution = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Perception => self.perception = value,
        }
    }

    /// Add to the value for one dimension
    pub fn add(&mut self, attribute: Attribute, value: f64) {
        self.set(attribute, self.get(attribute) + value);
    }
}

/// Gear slot an item can be equipped in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipSlot {
    Weapon,
    Armor,
    Head,
    Shield,
    Back,
    Body,
    HeadAccessory,
    Eyewear,
}

impl EquipSlot {
    /// Get all gear slots
    pub fn all() -> &'static [EquipSlot] {
        &[
            EquipSlot::Weapon,
            EquipSlot::Armor,
            EquipSlot::Head,
            EquipSlot::Shield,
            EquipSlot::Back,
            EquipSlot::Body,
            EquipSlot::HeadAccessory,
            EquipSlot::Eyewear,
        ]
    }
}
