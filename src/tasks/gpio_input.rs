use core::cell::RefCell;

use embassy_rp::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use static_cell::StaticCell;

use pwrkeeper::SharedInput;

use crate::config_resources::PowerSenseResources;

pub type PowerSenseMutex = Mutex<CriticalSectionRawMutex, RefCell<Input<'static>>>;

/// Handle to the sensed-power line. Clones all read the same pin.
pub type PowerSense = SharedInput<'static, CriticalSectionRawMutex, Input<'static>>;

static POWER_SENSE: StaticCell<PowerSenseMutex> = StaticCell::new();

/// Claim the sensed-power input. The line is read raw, without pull or filtering.
pub fn init_power_sense(r: PowerSenseResources) -> PowerSense {
    let pin = POWER_SENSE.init(Mutex::new(RefCell::new(Input::new(r.pin, Pull::None))));
    SharedInput::new(pin)
}
