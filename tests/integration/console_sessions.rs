//! Scripted console sessions

use std::io::Cursor;

use library_desk::{models::PublicationQuery, Console, Library};

fn run(library: &mut Library, script: &[&str]) -> String {
    let mut input = script.join("\n");
    input.push('\n');
    let mut out = Vec::new();
    Console::new(library, Cursor::new(input), &mut out)
        .run()
        .expect("session failed");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_register_and_display_member() {
    let mut library = Library::new();
    let out = run(
        &mut library,
        &[
            "1", "1", "Ada Lovelace", "M1", "ada@example.org", // add
            "2", "M1", // search
            "2", "M9", // search miss
            "3", "M1", // display
            "4", "5",
        ],
    );

    assert!(library.search_member("M1").is_some());
    assert!(out.contains("Member M1 added"));
    assert!(out.contains("Found Member"));
    assert!(out.contains("Member M9 not found"));
    assert!(out.contains("Name: Ada Lovelace\nID: M1\nContact Info: ada@example.org"));
    assert!(out.ends_with("Exiting program...\n"));
}

#[test]
fn test_missing_member_field_is_rejected() {
    let mut library = Library::new();
    let out = run(&mut library, &["1", "1", "Ada", "", "ada@example.org", "4", "5"]);

    assert!(library.members().is_empty());
    assert!(out.contains("Validation error: ID is required"));
}

#[test]
fn test_add_publication_with_bad_year() {
    let mut library = Library::new();
    let out = run(
        &mut library,
        &[
            "2", "1", "Dune", "Frank Herbert", "soon", // bad year
            "1", "Dune", "Frank Herbert", "1965", "978-0-441-17271-9", "Novel",
            "2", "", "Frank Herbert", "", // search by author
            "3", "Dune",
            "4", "5",
        ],
    );

    assert_eq!(library.publications().len(), 1);
    assert!(out.contains("'soon' is not a valid number"));
    assert!(out.contains("1 publication(s) found in the library:"));
    assert!(out.contains("- Dune by Frank Herbert (1965)"));
    assert!(out.contains("ISBN: 978-0-441-17271-9\nType: Novel"));
}

#[test]
fn test_lend_twice_then_return_and_relend() {
    let mut library = Library::new();
    library.seed_demo_data();
    let title = "How to Good at LOL";

    let out = run(
        &mut library,
        &[
            "3", "1", "630911143", title, "1", // lend
            "1", "630911143", title, "1", // lend again
            "3", "630911143", title, // details
            "2", "630911143", title, // return
            "1", "630911143", title, "1", // lend again
            "4", "5",
        ],
    );

    assert!(out.contains(&format!("Publication {} lent to Demo Reader", title)));
    assert!(out.contains(&format!("Publication already on loan: {}", title)));
    assert!(out.contains("Loan Details:\nMember: Demo Reader"));
    assert!(out.contains(&format!("Publication {} returned successfully", title)));
    assert_eq!(out.matches("lent to Demo Reader").count(), 2);
    assert_eq!(library.loans().len(), 1);
}

#[test]
fn test_lend_with_bad_pick() {
    let mut library = Library::new();
    library.seed_demo_data();
    let out = run(
        &mut library,
        &["3", "1", "630911143", "How to Good at LOL", "7", "4", "5"],
    );

    assert!(library.loans().is_empty());
    assert!(out.contains("Available publications:\n1. How to Good at LOL by YasuoInwza007 (2020)"));
    assert!(out.contains("Invalid choice. Please select a valid option. (7)"));
}

#[test]
fn test_return_without_loan() {
    let mut library = Library::new();
    library.seed_demo_data();
    let out = run(
        &mut library,
        &["3", "2", "630911143", "How to Good at LOL", "2", "M404", "x", "4", "5"],
    );

    assert!(out.contains("Loan of 'How to Good at LOL' for member 630911143 not found"));
    assert!(out.contains("Member M404 not found"));
}

#[test]
fn test_reports() {
    let mut library = Library::new();
    library.seed_demo_data();
    let out = run(&mut library, &["4", "1", "2", "3", "5"]);
    assert!(out.contains("No loans are currently overdue"));
    assert!(out.contains("No loans have been made yet"));

    let member = library.search_member("630911143").cloned().unwrap();
    let publication = library
        .search_publication(&PublicationQuery::by_title("How to Good at LOL"))[0]
        .clone();
    library.lend_publication(&member, &publication).unwrap();

    let out = run(&mut library, &["4", "2", "3", "5"]);
    assert!(out.contains("Popular Publications Report:\nTitle: How to Good at LOL\nNumber of Loans: 1"));
}

#[test]
fn test_session_ends_on_closed_input() {
    let mut library = Library::new();
    let out = run(&mut library, &["2", "1", "Half a book"]);
    assert!(out.contains("Enter author: "));
    assert!(!out.contains("Exiting program..."));
}
