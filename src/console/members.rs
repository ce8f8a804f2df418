//! Member management screen

use std::io::{BufRead, Write};

use super::prompt::{Menu, Prompt};
use super::Screen;
use crate::{
    error::{AppError, AppResult, Entity},
    models::NewMember,
    services::Library,
};

pub const MENU: Menu = Menu {
    title: "Member Management",
    options: &[
        "Add new member",
        "Search for a member",
        "Display member details",
        "Back to main menu",
    ],
};

pub fn handle<R: BufRead, W: Write>(
    library: &mut Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<Screen> {
    match prompt.choose(&MENU)? {
        1 => add_member(library, prompt)?,
        2 => search_member(library, prompt)?,
        3 => display_member(library, prompt)?,
        _ => return Ok(Screen::Main),
    }
    Ok(Screen::Members)
}

fn add_member<R: BufRead, W: Write>(
    library: &mut Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<()> {
    let input = NewMember {
        name: prompt.ask("Enter name: ")?,
        id: prompt.ask("Enter ID: ")?,
        contact_info: prompt.ask("Enter contact info: ")?,
    };
    let member = input.into_member()?;
    let id = member.id.clone();
    library.add_member(member);
    prompt.say(format!("Member {} added", id))
}

fn search_member<R: BufRead, W: Write>(
    library: &Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<()> {
    let id = prompt.ask("Enter ID: ")?;
    match library.search_member(&id) {
        Some(_) => prompt.say("Found Member"),
        None => Err(AppError::not_found(Entity::Member, id.as_str())),
    }
}

fn display_member<R: BufRead, W: Write>(
    library: &Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<()> {
    let id = prompt.ask("Enter ID to display: ")?;
    let details = library
        .search_member(&id)
        .and_then(|member| member.display_details(Some(&id)))
        .ok_or_else(|| AppError::not_found(Entity::Member, id.as_str()))?;
    prompt.say(details)
}
