//! Stylesheet command.

use addcal_core::EventLinkGenerator;

use crate::error::ClientResult;

/// Print the stylesheet for class-styled buttons.
pub fn run() -> ClientResult<()> {
    println!("{}", EventLinkGenerator::style_sheet());
    Ok(())
}
