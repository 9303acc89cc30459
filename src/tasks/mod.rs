pub(crate) mod gpio_input;
pub(crate) mod power_button;
pub(crate) mod tick;
