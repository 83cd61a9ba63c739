//! Placeholder "coming soon" action for links to unreleased apps.

use crate::dom::Host;
use crate::error::SiteError;

pub fn coming_soon<H: Host>(host: &H, message: &str) -> Result<(), SiteError> {
    host.alert(message)
}
