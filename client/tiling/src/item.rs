use serde::{Deserialize, Serialize};
use tile::Tile;

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Number(id) => write!(f, "{}", id),
            ItemId::Text(id) => write!(f, "{}", id),
        }
    }
}

// DisplayItem is the content shown inside an octagon tile.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub id: ItemId,
    pub title: String,
    pub image_url: String,
}

impl DisplayItem {
    pub fn list_from_json(json: &str) -> Result<Vec<DisplayItem>, String> {
        serde_json::from_str::<Vec<DisplayItem>>(json).map_err(|e| format!("invalid display items: {}", e))
    }
}

// Placement pairs a tile with the item drawn in it. Rhombus tiles never carry an item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Placement<'a> {
    #[serde(flatten)]
    pub tile: &'a Tile,
    pub item: Option<&'a DisplayItem>,
}
