// src/clock.rs
// Browser wall clock. JS Date reads the local timezone.

pub fn local_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
