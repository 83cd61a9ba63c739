//! Footer year writer.

use chrono::{Datelike, Local};

use crate::dom::Host;
use crate::error::SiteError;

/// Current calendar year from the local system clock
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Write `year` into the element with id `element_id`.
pub fn write_year<H: Host>(host: &H, element_id: &str, year: i32) -> Result<(), SiteError> {
    let element = host
        .element_by_id(element_id)
        .ok_or_else(|| SiteError::not_found(format!("#{}", element_id)))?;
    host.set_text(&element, &year.to_string());
    Ok(())
}
