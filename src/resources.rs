//! Resolves the opaque keys of a [`StageDescriptor`](crate::stage::StageDescriptor)
//! into text and pictures.

use std::collections::HashMap;

use crate::stage::{
    ResourceKey, ALT_EMPTY_GLASS, ALT_GLASS_OF_LEMONADE, ALT_LEMON, ALT_LEMON_TREE,
    IMAGE_LEMON_DRINK, IMAGE_LEMON_RESTART, IMAGE_LEMON_SQUEEZE, IMAGE_LEMON_TREE,
    TEXT_LEMON_DRINK, TEXT_LEMON_EMPTY_GLASS, TEXT_LEMON_SELECT, TEXT_LEMON_SQUEEZE,
};

/// Lookup service for display assets.
pub trait ResourceLookup {
    fn text(&self, key: ResourceKey) -> Option<&str>;

    /// Image as lines of text art.
    fn image(&self, key: ResourceKey) -> Option<&[&'static str]>;
}

/// Text for `key`, or the key itself when the catalog has no entry.
pub fn resolve_text<'a, L: ResourceLookup + ?Sized>(lookup: &'a L, key: ResourceKey) -> &'a str {
    lookup.text(key).unwrap_or(key.as_str())
}

const LEMON_TREE: &[&str] = &[
    r"      .-~~~~~-.      ",
    r"    .'  o   o  '.    ",
    r"   /  o  .-.  o  \   ",
    r"  |  o  (   )  o  |  ",
    r"   \   o '-' o   /   ",
    r"    '-._  |  _.-'    ",
    r"         | |         ",
    r"         | |         ",
    r"      ___|_|___      ",
];

const LEMON: &[&str] = &[
    r"                     ",
    r"        _.--._       ",
    r"     .-'      '-.    ",
    r"   <(    ::::    )>  ",
    r"     '-.      .-'    ",
    r"        '--''        ",
    r"                     ",
];

const GLASS_OF_LEMONADE: &[&str] = &[
    r"        \ \          ",
    r"     ____\_\____     ",
    r"    |~~~~~~~~~~~|    ",
    r"    | o  .  o   |    ",
    r"    |  .  o   . |    ",
    r"    | o   .  o  |    ",
    r"     \_________/     ",
];

const EMPTY_GLASS: &[&str] = &[
    r"                     ",
    r"     ___________     ",
    r"    |           |    ",
    r"    |           |    ",
    r"    |           |    ",
    r"    |           |    ",
    r"     \_________/     ",
];

/// Built-in English catalog.
pub struct EmbeddedResources {
    texts: HashMap<ResourceKey, &'static str>,
    images: HashMap<ResourceKey, &'static [&'static str]>,
}

impl Default for EmbeddedResources {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedResources {
    pub fn new() -> Self {
        let texts = HashMap::from([
            (TEXT_LEMON_SELECT, "Tap the lemon tree to select a lemon"),
            (TEXT_LEMON_SQUEEZE, "Keep tapping the lemon to squeeze it"),
            (TEXT_LEMON_DRINK, "Tap the lemonade to drink it"),
            (TEXT_LEMON_EMPTY_GLASS, "Tap the empty glass to start again"),
            (ALT_LEMON_TREE, "Lemon tree"),
            (ALT_LEMON, "Lemon"),
            (ALT_GLASS_OF_LEMONADE, "Glass of lemonade"),
            (ALT_EMPTY_GLASS, "Empty glass"),
        ]);
        let images = HashMap::from([
            (IMAGE_LEMON_TREE, LEMON_TREE),
            (IMAGE_LEMON_SQUEEZE, LEMON),
            (IMAGE_LEMON_DRINK, GLASS_OF_LEMONADE),
            (IMAGE_LEMON_RESTART, EMPTY_GLASS),
        ]);
        Self { texts, images }
    }

    /// Height of the tallest image, used to size the image panel.
    pub fn max_image_height(&self) -> usize {
        self.images.values().map(|lines| lines.len()).max().unwrap_or(0)
    }
}

impl ResourceLookup for EmbeddedResources {
    fn text(&self, key: ResourceKey) -> Option<&str> {
        self.texts.get(&key).copied()
    }

    fn image(&self, key: ResourceKey) -> Option<&[&'static str]> {
        self.images.get(&key).copied()
    }
}
