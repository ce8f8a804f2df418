//! Reports screen

use std::io::{BufRead, Write};

use super::prompt::{Menu, Prompt};
use super::Screen;
use crate::{error::AppResult, services::Library};

pub const MENU: Menu = Menu {
    title: "Reports",
    options: &[
        "Generate overdue loans report",
        "Generate popular publications report",
        "Back to main menu",
    ],
};

pub fn handle<R: BufRead, W: Write>(
    library: &Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<Screen> {
    match prompt.choose(&MENU)? {
        1 => prompt.say(library.generate_overdue_loans_report())?,
        2 => prompt.say(library.generate_popular_publications_report())?,
        _ => return Ok(Screen::Main),
    }
    Ok(Screen::Reports)
}
