extern crate console_error_panic_hook;

mod error;

pub use self::error::*;

use geometry::Point;
use std::panic;
use tiling::{Config, DisplayItem, Hover, Layout, Placement, Viewport};
use wasm_bindgen::prelude::*;

// Grid is owned by the page. It keeps the display items and the layout for the
// most recent viewport; every resize replaces the layout wholesale.
#[wasm_bindgen]
pub struct Grid {
    config: Config,
    items: Vec<DisplayItem>,
    layout: Layout,
    hover: Hover,
}

impl Grid {
    pub fn from_json(config_json: &str, items_json: &str) -> Result<Grid, Error> {
        let config = Config::from_json(config_json).map_err(Error::Config)?;
        let items = DisplayItem::list_from_json(items_json).map_err(Error::Items)?;
        if items.is_empty() {
            console::warning!("no display items, octagons will render without content");
        }
        let layout = Layout::compute(&config.geometry(), &Viewport { width: 0., height: 0. });
        Ok(Grid {
            config,
            items,
            layout,
            hover: Hover::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn hover(&self) -> Hover {
        self.hover
    }

    pub fn relayout(&mut self, viewport: &Viewport) {
        self.layout = Layout::compute(&self.config.geometry(), viewport);
        // tile indices from the old layout are meaningless now
        self.hover = Hover::leave();
        console::debug!(
            "layout", self.layout.dimensions.cols, "x", self.layout.dimensions.rows,
            "tiles", self.layout.len()
        );
    }

    pub fn placements(&self) -> Vec<Placement<'_>> {
        self.layout.assign(&self.items)
    }
}

#[wasm_bindgen]
impl Grid {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, items_json: &str) -> Result<Grid, JsValue> {
        panic::set_hook(Box::new(console_error_panic_hook::hook));
        Grid::from_json(config_json, items_json).map_err(|e| {
            console::err!(e);
            e.js_value()
        })
    }

    // resize recomputes the layout and returns the ordered placements for the host to draw
    pub fn resize(&mut self, width: f64, height: f64) -> Result<JsValue, JsValue> {
        self.relayout(&Viewport { width, height });
        JsValue::from_serde(&self.placements())
            .map_err(|e| Error::Serialize(format!("{}", e)).js_value())
    }

    #[wasm_bindgen(js_name = pointerOver)]
    pub fn pointer_over(&mut self, x: f64, y: f64) -> bool {
        self.hover = Hover::over(&self.layout, &Point(x, y));
        self.hover.has_hover()
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> bool {
        self.hover = Hover::leave();
        self.hover.has_hover()
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> usize {
        self.layout.dimensions.cols
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.layout.dimensions.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiling::ItemId;

    const ITEMS: &str = r#"[
        {"id": 0, "title": "Game 1", "imageUrl": "https://picsum.photos/seed/0/400/400"},
        {"id": 1, "title": "Game 2", "imageUrl": "https://picsum.photos/seed/123/400/400"},
        {"id": 2, "title": "Game 3", "imageUrl": "https://picsum.photos/seed/246/400/400"}
    ]"#;

    #[test]
    fn test_grid_from_json() {
        let grid = Grid::from_json(r#"{"octagonWidth": 180}"#, ITEMS).unwrap();
        assert_eq!(3, grid.items.len());
        assert!(grid.layout().is_empty());
        assert_eq!(0, grid.cols());
        assert_eq!(Hover::Idle, grid.hover());
    }

    #[test]
    fn test_grid_from_json_errors() {
        match Grid::from_json(r#"{"octagonWidth": -1}"#, ITEMS) {
            Err(Error::Config(_)) => {},
            other => panic!("expected config error, got {:?}", other.map(|grid| grid.cols())),
        }
        match Grid::from_json("", "not json") {
            Err(Error::Items(_)) => {},
            other => panic!("expected items error, got {:?}", other.map(|grid| grid.cols())),
        }
    }

    #[test]
    fn test_grid_relayout() {
        let mut grid = Grid::from_json("", ITEMS).unwrap();
        grid.relayout(&Viewport { width: 1280., height: 720. });
        assert_eq!(9, grid.cols());
        assert_eq!(5, grid.rows());

        let placements = grid.placements();
        assert_eq!(9 * 5 + 8 * 4, placements.len());
        let ids = placements
            .iter()
            .filter_map(|placement| placement.item.map(|item| item.id.clone()))
            .take(4)
            .collect::<Vec<ItemId>>();
        assert_eq!(vec![ItemId::Number(0), ItemId::Number(1), ItemId::Number(2), ItemId::Number(0)], ids);

        grid.relayout(&Viewport { width: 100., height: 100. });
        assert_eq!(2, grid.cols());
        assert_eq!(5, grid.placements().len());
    }

    #[test]
    fn test_grid_placements_json() {
        let mut grid = Grid::from_json("{}", ITEMS).unwrap();
        grid.relayout(&Viewport { width: 1., height: 1. });
        let json = serde_json::to_value(&grid.placements()).unwrap();
        assert_eq!("octagon", json[0]["kind"]);
        assert_eq!("Game 1", json[0]["item"]["title"]);
        assert_eq!("rhombus", json[1]["kind"]);
        assert!(json[1]["item"].is_null());
        assert_eq!("Game 2", json[2]["item"]["title"]);
    }

    #[test]
    fn test_grid_hover() {
        let mut grid = Grid::from_json("", ITEMS).unwrap();
        grid.relayout(&Viewport { width: 800., height: 600. });
        assert!(grid.pointer_over(90., 90.));
        assert_eq!(Hover::Octagon(0), grid.hover());
        assert!(!grid.pointer_over(180., 180.));
        assert!(grid.pointer_over(270., 90.));
        assert!(!grid.pointer_leave());

        assert!(grid.pointer_over(90., 90.));
        grid.relayout(&Viewport { width: 400., height: 400. });
        assert_eq!(Hover::Idle, grid.hover());
    }

    #[test]
    fn test_grid_without_items() {
        let mut grid = Grid::from_json("", "[]").unwrap();
        grid.relayout(&Viewport { width: 400., height: 400. });
        assert!(grid.placements().iter().all(|placement| placement.item.is_none()));
    }
}
