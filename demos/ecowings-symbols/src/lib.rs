use wasm_bindgen::prelude::*;
use gesture_engine::*;

mod game;
use game::EcoWingsSymbols;

gesture_web::export_recognizer!(EcoWingsSymbols, "ecowings-symbols");
