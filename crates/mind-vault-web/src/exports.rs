use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use mind_vault::{EntityId, InputEvent, MindVault, PickEvent, PickTag};

use crate::runner::GameRunner;
use crate::storage::LocalStorageStore;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner<MindVault>>> = const { RefCell::new(None) };
}

/// Run `f` against the runner, or log and return `None` before `game_init`.
fn with_runner<R>(f: impl FnOnce(&mut GameRunner<MindVault>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::error!("game not initialized, call game_init() first");
                None
            }
        }
    })
}

/// Create the game; puzzle targets are seeded from the wall clock.
#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = js_sys::Date::now() as u64;
    let game = MindVault::with_seed(Box::new(LocalStorageStore::new()), seed);
    let runner = GameRunner::new(game);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    with_runner(|r| r.init());
    log::info!("mind-vault: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// A raycast hit on a tagged entity.
#[wasm_bindgen]
pub fn game_pick(tag: u32, slot: u32, payload: u32) {
    let Some(tag) = PickTag::from_code(tag) else {
        log::debug!("unknown pick tag {}", tag);
        return;
    };
    with_runner(|r| r.push_input(InputEvent::Pick(PickEvent::new(tag, slot, payload))));
}

/// A raycast hit resolved to an arena id.
#[wasm_bindgen]
pub fn game_pick_entity(id: u32) {
    with_runner(|r| r.push_input(InputEvent::PickEntity { id: EntityId(id) }));
}

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

#[wasm_bindgen]
pub fn game_blur() {
    with_runner(|r| r.push_input(InputEvent::Blur));
}

#[wasm_bindgen]
pub fn game_focus() {
    with_runner(|r| r.push_input(InputEvent::Focus));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const f32 {
    with_runner(|r| r.sound_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_view_json() -> String {
    with_runner(|r| r.view_json().to_owned()).unwrap_or_default()
}

// ---- Layout accessors ----

#[wasm_bindgen]
pub fn get_max_sounds() -> u32 {
    with_runner(|r| r.max_sounds()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    with_runner(|r| r.instance_floats()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_sound_floats() -> u32 {
    with_runner(|r| r.sound_floats()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_event_floats() -> u32 {
    with_runner(|r| r.event_floats()).unwrap_or(0)
}
