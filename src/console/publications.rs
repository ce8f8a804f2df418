//! Publication management screen

use std::io::{BufRead, Write};

use super::prompt::{Menu, Prompt};
use super::Screen;
use crate::{
    error::{AppError, AppResult, Entity},
    models::{NewBook, PublicationQuery},
    services::Library,
};

pub const MENU: Menu = Menu {
    title: "Publication Management",
    options: &[
        "Add new publication",
        "Search for a publication",
        "Display publication details",
        "Back to main menu",
    ],
};

pub fn handle<R: BufRead, W: Write>(
    library: &mut Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<Screen> {
    match prompt.choose(&MENU)? {
        1 => add_publication(library, prompt)?,
        2 => search_publication(library, prompt)?,
        3 => display_publication(library, prompt)?,
        _ => return Ok(Screen::Main),
    }
    Ok(Screen::Publications)
}

fn add_publication<R: BufRead, W: Write>(
    library: &mut Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<()> {
    let input = NewBook {
        title: prompt.ask("Enter title: ")?,
        author: prompt.ask("Enter author: ")?,
        year: prompt.ask_number("Enter year: ")?,
        isbn: prompt.ask("Enter ISBN: ")?,
        book_type: prompt.ask("Enter book type: ")?,
    };
    let publication = input.into_publication()?;
    let title = publication.title().to_string();
    library.add_publication(publication);
    prompt.say(format!("Publication '{}' added", title))
}

fn search_publication<R: BufRead, W: Write>(
    library: &Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<()> {
    let query = PublicationQuery {
        title: prompt.ask_optional("Enter title (blank for any): ")?,
        author: prompt.ask_optional("Enter author (blank for any): ")?,
        book_type: prompt.ask_optional("Enter book type (blank for any): ")?,
    };
    let found = library.search_publication(&query);
    if found.is_empty() {
        return Err(AppError::not_found(Entity::Publication, "matching the filters"));
    }

    prompt.say(format!("{} publication(s) found in the library:", found.len()))?;
    for publication in found {
        prompt.say(format!(
            "- {} by {} ({})",
            publication.title(),
            publication.author(),
            publication.year()
        ))?;
    }
    Ok(())
}

fn display_publication<R: BufRead, W: Write>(
    library: &Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<()> {
    let title = prompt.ask("Enter title to display details: ")?;
    let found = library.search_publication(&PublicationQuery::by_title(title.as_str()));
    if found.is_empty() {
        return Err(AppError::not_found(Entity::Publication, format!("'{}'", title)));
    }
    for publication in found {
        prompt.say(publication)?;
        prompt.say("")?;
    }
    Ok(())
}
