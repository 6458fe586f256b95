//! The four fixed stages of making lemonade and the descriptor the
//! renderer draws for each of them.

use serde::Serialize;

/// Opaque identifier of a presentation asset (image, text or alt text).
///
/// Resolved to real content by a [`ResourceLookup`](crate::resources::ResourceLookup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceKey(&'static str);

impl ResourceKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const IMAGE_LEMON_TREE: ResourceKey = ResourceKey::new("lemon_tree");
pub const IMAGE_LEMON_SQUEEZE: ResourceKey = ResourceKey::new("lemon_squeeze");
pub const IMAGE_LEMON_DRINK: ResourceKey = ResourceKey::new("lemon_drink");
pub const IMAGE_LEMON_RESTART: ResourceKey = ResourceKey::new("lemon_restart");

pub const TEXT_LEMON_SELECT: ResourceKey = ResourceKey::new("lemon_select");
pub const TEXT_LEMON_SQUEEZE: ResourceKey = ResourceKey::new("lemon_squeeze_text");
pub const TEXT_LEMON_DRINK: ResourceKey = ResourceKey::new("lemon_drink_text");
pub const TEXT_LEMON_EMPTY_GLASS: ResourceKey = ResourceKey::new("lemon_empty_glass");

pub const ALT_LEMON_TREE: ResourceKey = ResourceKey::new("lemon_tree_content_description");
pub const ALT_LEMON: ResourceKey = ResourceKey::new("lemon_content_description");
pub const ALT_GLASS_OF_LEMONADE: ResourceKey =
    ResourceKey::new("glass_of_lemonade_content_description");
pub const ALT_EMPTY_GLASS: ResourceKey = ResourceKey::new("empty_glass_content_description");

pub const LABEL_NEXT: &str = "Next";
pub const LABEL_RESTART: &str = "Restart";

/// One phase of the lemonade flow. Cycles Select → Squeeze → Drink → Restart → Select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Pick a lemon from the tree.
    #[default]
    Select,
    /// Squeeze the lemon a random number of times.
    Squeeze,
    /// Drink the lemonade.
    Drink,
    /// Empty glass, start over.
    Restart,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Select, Stage::Squeeze, Stage::Drink, Stage::Restart];

    /// The stage that follows this one.
    pub fn next(self) -> Stage {
        match self {
            Stage::Select => Stage::Squeeze,
            Stage::Squeeze => Stage::Drink,
            Stage::Drink => Stage::Restart,
            Stage::Restart => Stage::Select,
        }
    }

    /// 1-based position in the cycle.
    pub fn number(self) -> u8 {
        match self {
            Stage::Select => 1,
            Stage::Squeeze => 2,
            Stage::Drink => 3,
            Stage::Restart => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Stage> {
        match number {
            1 => Some(Stage::Select),
            2 => Some(Stage::Squeeze),
            3 => Some(Stage::Drink),
            4 => Some(Stage::Restart),
            _ => None,
        }
    }

    /// Whether completing this stage takes more than a single tap.
    pub fn uses_tap_count(self) -> bool {
        self == Stage::Squeeze
    }

    pub fn image_key(self) -> ResourceKey {
        match self {
            Stage::Select => IMAGE_LEMON_TREE,
            Stage::Squeeze => IMAGE_LEMON_SQUEEZE,
            Stage::Drink => IMAGE_LEMON_DRINK,
            Stage::Restart => IMAGE_LEMON_RESTART,
        }
    }

    pub fn text_key(self) -> ResourceKey {
        match self {
            Stage::Select => TEXT_LEMON_SELECT,
            Stage::Squeeze => TEXT_LEMON_SQUEEZE,
            Stage::Drink => TEXT_LEMON_DRINK,
            Stage::Restart => TEXT_LEMON_EMPTY_GLASS,
        }
    }

    pub fn alt_text_key(self) -> ResourceKey {
        match self {
            Stage::Select => ALT_LEMON_TREE,
            Stage::Squeeze => ALT_LEMON,
            Stage::Drink => ALT_GLASS_OF_LEMONADE,
            Stage::Restart => ALT_EMPTY_GLASS,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Stage::Restart => LABEL_RESTART,
            _ => LABEL_NEXT,
        }
    }
}

/// Everything the renderer needs to draw the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageDescriptor {
    pub image_key: ResourceKey,
    pub text_key: ResourceKey,
    pub alt_text_key: ResourceKey,
    pub button_label: &'static str,
    pub button_enabled: bool,
}

impl StageDescriptor {
    pub fn for_stage(stage: Stage, complete: bool) -> Self {
        Self {
            image_key: stage.image_key(),
            text_key: stage.text_key(),
            alt_text_key: stage.alt_text_key(),
            button_label: stage.button_label(),
            button_enabled: complete,
        }
    }
}
