//! Knowledge-based Minesweeper player.
//!
//! Revealed cells become logical sentences ("exactly N of these cells are
//! mines"). The [`knowledge::KnowledgeBase`] combines them until no more
//! safe cells or mines can be deduced; the [`advisor`] then picks a known
//! safe move, or a random one when deduction runs dry.
//!
//! On `wasm32` the same engine is exported to JavaScript via wasm-bindgen.

pub mod advisor;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod knowledge;
pub mod rng;
pub mod sentence;
pub mod types;

pub use advisor::{make_random_move, make_safe_move, Move};
pub use board::{Board, MineField};
pub use config::GameConfig;
pub use error::{Result, SolverError};
pub use knowledge::KnowledgeBase;
pub use sentence::Sentence;
pub use types::{Cell, Dimensions};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;

    use crate::advisor;
    use crate::board::Board;
    use crate::config::GameConfig;
    use crate::game;
    use crate::knowledge::KnowledgeBase;
    use crate::rng::GameRng;
    use crate::types::{Cell, Dimensions};

    fn to_js_error(e: crate::error::SolverError) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn cell_object(cell: Cell) -> Result<JsValue, JsValue> {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"row".into(), &(cell.row as u32).into())?;
        js_sys::Reflect::set(&obj, &"col".into(), &(cell.col as u32).into())?;
        Ok(obj.into())
    }

    /// Interactive player: JS reveals cells and reports counts back.
    #[wasm_bindgen]
    pub struct MinesweeperAi {
        kb: KnowledgeBase,
        rng: GameRng,
    }

    #[wasm_bindgen]
    impl MinesweeperAi {
        #[wasm_bindgen(constructor)]
        pub fn new(height: usize, width: usize) -> Result<MinesweeperAi, JsValue> {
            let kb = KnowledgeBase::new(Dimensions::new(height, width)).map_err(to_js_error)?;
            Ok(MinesweeperAi { kb, rng: GameRng::new() })
        }

        #[wasm_bindgen(js_name = "addKnowledge")]
        pub fn add_knowledge(
            &mut self,
            row: usize,
            col: usize,
            count: usize,
        ) -> Result<(), JsValue> {
            self.kb
                .add_knowledge(Cell::new(row, col), count)
                .map(|_| ())
                .map_err(to_js_error)
        }

        /// Returns `{ row, col }` or `null`.
        #[wasm_bindgen(js_name = "makeSafeMove")]
        pub fn make_safe_move(&self) -> Result<JsValue, JsValue> {
            match advisor::make_safe_move(&self.kb) {
                Some(cell) => cell_object(cell),
                None => Ok(JsValue::NULL),
            }
        }

        /// Returns `{ row, col }`; throws when no move is left.
        #[wasm_bindgen(js_name = "makeRandomMove")]
        pub fn make_random_move(&mut self) -> Result<JsValue, JsValue> {
            let cell = advisor::make_random_move(&self.kb, &mut self.rng).map_err(to_js_error)?;
            cell_object(cell)
        }

        /// Moves made, confirmed safes/mines and the current sentences.
        pub fn snapshot(&self) -> Result<JsValue, JsValue> {
            serde_wasm_bindgen::to_value(&self.kb.snapshot()).map_err(JsValue::from)
        }
    }

    /// Generate a random board and let the engine play it.
    /// Returns the game report as a JS object.
    #[wasm_bindgen(js_name = "autoplay")]
    pub fn wasm_autoplay(
        height: usize,
        width: usize,
        mines: usize,
        seed: Option<u64>,
    ) -> Result<JsValue, JsValue> {
        let config = GameConfig::new(height, width, mines);
        let mut rng = match seed {
            Some(seed) => GameRng::from_seed(seed),
            None => GameRng::new(),
        };
        let board = Board::generate(&config, &mut rng).map_err(to_js_error)?;
        let report = game::play(&board, &mut rng).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&report).map_err(JsValue::from)
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM minesweeper AI ready".to_string()
    }
}
