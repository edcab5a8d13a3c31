//! Tick Timer
//!
//! SysTick drives the activity countdown. The embassy time driver runs on
//! the RP2040 TIMER block, so SysTick is free for this.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;

/// Start SysTick from the core clock, interrupting every `reload + 1` cycles
pub fn start_tick(syst: &mut SYST, reload: u32) {
    syst.disable_counter();
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();

    defmt::debug!("SysTick running, reload {}", reload);
}
