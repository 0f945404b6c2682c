use std::cell::Cell;
use std::env;

/// Pins the calling thread to one core, `2` unless `BENCH_PIN_CORE` names another one.
///
/// Only the first call per thread does anything. Machines with fewer cores run unpinned.
pub fn pin_thread_to_core() {
    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = const { Cell::new(false) }; }

    if AFFINITY_ALREADY_SET.get() {
        return;
    }

    let pin_core_id = env::var("BENCH_PIN_CORE")
        .ok()
        .and_then(|core| core.parse::<usize>().ok())
        .unwrap_or(2);

    if let Some(core_id) = core_affinity::get_core_ids()
        .as_ref()
        .and_then(|ids| ids.get(pin_core_id))
    {
        core_affinity::set_for_current(*core_id);
    }

    AFFINITY_ALREADY_SET.set(true);
}
