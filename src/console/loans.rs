//! Loan management screen

use std::io::{BufRead, Write};

use super::prompt::{Menu, Prompt};
use super::Screen;
use crate::{
    error::{AppError, AppResult, Entity},
    models::{Member, Publication, PublicationQuery},
    services::Library,
};

pub const MENU: Menu = Menu {
    title: "Loan Management",
    options: &[
        "Lend a publication",
        "Return a publication",
        "Display loan details",
        "Back to main menu",
    ],
};

pub fn handle<R: BufRead, W: Write>(
    library: &mut Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<Screen> {
    match prompt.choose(&MENU)? {
        1 => lend(library, prompt)?,
        2 => return_publication(library, prompt)?,
        3 => display_loan(library, prompt)?,
        _ => return Ok(Screen::Main),
    }
    Ok(Screen::Loans)
}

/// Ask for a member id and a title, resolving the member.
fn ask_member_and_title<R: BufRead, W: Write>(
    library: &Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<(Member, String)> {
    let member_id = prompt.ask("Enter member ID: ")?;
    let title = prompt.ask("Enter publication title: ")?;
    let member = library
        .search_member(&member_id)
        .cloned()
        .ok_or_else(|| AppError::not_found(Entity::Member, member_id.as_str()))?;
    Ok((member, title))
}

fn lend<R: BufRead, W: Write>(library: &mut Library, prompt: &mut Prompt<R, W>) -> AppResult<()> {
    let (member, title) = ask_member_and_title(library, prompt)?;
    let candidates: Vec<Publication> = library
        .search_publication(&PublicationQuery::by_title(title.as_str()))
        .into_iter()
        .cloned()
        .collect();
    if candidates.is_empty() {
        return Err(AppError::not_found(Entity::Publication, format!("'{}'", title)));
    }

    prompt.say("Available publications:")?;
    for (idx, publication) in candidates.iter().enumerate() {
        prompt.say(format!(
            "{}. {} by {} ({})",
            idx + 1,
            publication.title(),
            publication.author(),
            publication.year()
        ))?;
    }
    let selected = &candidates[prompt.pick("Enter publication number to loan: ", candidates.len())?];

    let loan = library.lend_publication(&member, selected)?;
    prompt.say(format!(
        "Publication {} lent to {}, due {}",
        loan.publication.title(),
        loan.member.name,
        loan.due_date.format("%Y-%m-%d")
    ))
}

fn return_publication<R: BufRead, W: Write>(
    library: &mut Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<()> {
    let (member, title) = ask_member_and_title(library, prompt)?;
    let loan_id = library
        .find_loan(&member, &title)
        .map(|loan| loan.id)
        .ok_or_else(|| {
            AppError::not_found(Entity::Loan, format!("of '{}' for member {}", title, member.id))
        })?;

    let loan = library.return_loan(loan_id)?;
    prompt.say(format!(
        "Publication {} returned successfully",
        loan.publication.title()
    ))
}

fn display_loan<R: BufRead, W: Write>(
    library: &Library,
    prompt: &mut Prompt<R, W>,
) -> AppResult<()> {
    let (member, title) = ask_member_and_title(library, prompt)?;
    let loan = library.find_loan(&member, &title).ok_or_else(|| {
        AppError::not_found(Entity::Loan, format!("of '{}' for member {}", title, member.id))
    })?;
    prompt.say("Loan Details:")?;
    prompt.say(loan)
}
