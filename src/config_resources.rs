// Provide a mapping for the controller GPIO pins (Raspberry Pi Pico)

//
//| GPIO # | Name       | Description                                                        |
//| ------ | ---------- | ------------------------------------------------------------------ |
//| 2      | PC_ON      | Power sense input from the opto-coupler. No pull, driven directly. |
//| 3      | PC_BUTTON  | Drive for the computer's power button. Idle low, pulsed high.      |
//| 25     | STATUS_LED | On-board LED. Blinks while sensed on, steady lit while sensed off. |

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
  /// GPIO pins for the controller
  power_sense: PowerSenseResources {
    pin: PIN_2,
  },
  power_button: PowerButtonResources {
    pin: PIN_3,
  },
  status_led: StatusLedResources {
    pin: PIN_25,
  },
}
