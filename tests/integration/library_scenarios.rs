//! Library operations exercised through the public API

use chrono::{Duration, TimeZone, Utc};
use library_desk::{
    models::{Book, LoanPolicy, Member, Publication, PublicationQuery},
    AppError, Library,
};

fn book(title: &str, author: &str, book_type: &str) -> Publication {
    Book::new(title, author, 2020, format!("isbn-{}", title), book_type).into()
}

#[test]
fn test_member_lookup() {
    let mut library = Library::new();
    let members = vec![
        Member::new("Ada", "M1", "ada@example.org"),
        Member::new("Bob", "M2", "bob@example.org"),
        Member::new("Cy", "M3", "cy@example.org"),
    ];
    for m in &members {
        library.add_member(m.clone());
    }

    for m in &members {
        assert_eq!(library.search_member(&m.id), Some(m));
    }
    assert_eq!(library.search_member("M4"), None);
    assert_eq!(library.search_member(""), None);
}

#[test]
fn test_lend_return_relend() {
    let mut library = Library::new();
    let member = Member::new("Ada", "M1", "ada@example.org");
    let t1 = book("T1", "A1", "Novel");
    library.add_member(member.clone());
    library.add_publication(t1.clone());

    let loan_id = library.lend_publication(&member, &t1).unwrap().id;
    assert!(matches!(
        library.lend_publication(&member, &t1),
        Err(AppError::AlreadyOnLoan(_))
    ));

    library.return_loan(loan_id).unwrap();
    assert!(library.loans().iter().all(|loan| loan.id != loan_id));
    assert!(library.lend_publication(&member, &t1).is_ok());
}

#[test]
fn test_search_publication() {
    let mut library = Library::new();
    let all = vec![
        book("T1", "A1", "Novel"),
        book("T2", "A1", "Poetry"),
        book("T1", "A2", "Poetry"),
        book("T3", "A3", "Novel"),
    ];
    for p in &all {
        library.add_publication(p.clone());
    }

    let everything: Vec<Publication> = library
        .search_publication(&PublicationQuery::default())
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(everything, all);

    let titled: Vec<&Publication> = library.search_publication(&PublicationQuery::by_title("T1"));
    assert_eq!(titled, vec![&all[0], &all[2]]);
    assert!(library
        .search_publication(&PublicationQuery::by_title("t1"))
        .is_empty());
    assert!(library
        .search_publication(&PublicationQuery::by_title("T"))
        .is_empty());

    let query = PublicationQuery {
        author: Some("A1".into()),
        book_type: Some("Poetry".into()),
        ..Default::default()
    };
    assert_eq!(library.search_publication(&query), vec![&all[1]]);
}

#[test]
fn test_overdue_after_28_days() {
    let mut library = Library::with_policy(LoanPolicy::default());
    let member = Member::new("Ada", "M1", "ada@example.org");
    let t1 = book("T1", "A1", "Novel");
    library.add_member(member.clone());
    library.add_publication(t1.clone());

    let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    library.lend_publication_at(&member, &t1, start).unwrap();

    assert!(library.generate_overdue_loans_report_at(start).is_empty());
    assert!(library
        .generate_overdue_loans_report_at(start + Duration::days(27))
        .is_empty());
    let report = library.generate_overdue_loans_report_at(start + Duration::days(28) + Duration::hours(1));
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].title, "T1");
    assert_eq!(report.entries[0].due_date, start + Duration::days(14));
}

#[test]
fn test_popularity_groups_by_title() {
    let mut library = Library::new();
    let ada = Member::new("Ada", "M1", "ada@example.org");
    let bob = Member::new("Bob", "M2", "bob@example.org");
    let single = book("Single", "A0", "Novel");
    let first = book("T1", "A1", "Novel");
    let second = book("T1", "A2", "Novel");
    for p in [&single, &first, &second] {
        library.add_publication(p.clone());
    }

    library.lend_publication(&ada, &single).unwrap();
    library.lend_publication(&ada, &first).unwrap();
    library.lend_publication(&bob, &second).unwrap();

    let report = library.generate_popular_publications_report();
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].title, "T1");
    assert_eq!(report.entries[0].loan_count, 2);
    assert_eq!(report.entries[1].title, "Single");
    assert_eq!(report.entries[1].loan_count, 1);
}

#[test]
fn test_popularity_only_counts_active_loans() {
    let mut library = Library::new();
    let ada = Member::new("Ada", "M1", "ada@example.org");
    let t1 = book("T1", "A1", "Novel");
    library.add_publication(t1.clone());

    let loan_id = library.lend_publication(&ada, &t1).unwrap().id;
    library.return_loan(loan_id).unwrap();

    let report = library.generate_popular_publications_report();
    assert!(report.is_empty());
    assert_eq!(report.to_string(), "No loans have been made yet");
}
