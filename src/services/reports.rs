//! Loan reports

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::models::Loan;

/// One overdue loan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueEntry {
    pub title: String,
    pub member_name: String,
    pub due_date: DateTime<Utc>,
}

/// Active loans past their overdue threshold, in loan order
#[derive(Debug, Clone)]
pub struct OverdueReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<OverdueEntry>,
}

impl OverdueReport {
    pub fn from_loans<'a>(loans: impl IntoIterator<Item = &'a Loan>, now: DateTime<Utc>) -> Self {
        let entries = loans
            .into_iter()
            .filter(|loan| loan.is_overdue_at(now))
            .map(|loan| OverdueEntry {
                title: loan.publication.title().to_string(),
                member_name: loan.member.name.clone(),
                due_date: loan.due_date,
            })
            .collect();

        Self {
            generated_at: now,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for OverdueReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No loans are currently overdue");
        }
        writeln!(f, "Overdue Loans Report:")?;
        for entry in &self.entries {
            writeln!(f, "Publication: {}", entry.title)?;
            writeln!(f, "Member: {}", entry.member_name)?;
            writeln!(f, "Due Date: {}", entry.due_date.format("%Y-%m-%d"))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Loan count for one title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularEntry {
    pub title: String,
    pub loan_count: usize,
}

/// Active loans grouped by publication title, most borrowed first.
///
/// Publications sharing a title are counted together. Ties keep the order in
/// which titles first appear among the loans. Returned loans are gone from
/// the library, so they no longer count.
#[derive(Debug, Clone)]
pub struct PopularityReport {
    pub entries: Vec<PopularEntry>,
}

impl PopularityReport {
    pub fn from_loans<'a>(loans: impl IntoIterator<Item = &'a Loan>) -> Self {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for loan in loans {
            *counts.entry(loan.publication.title()).or_insert(0) += 1;
        }

        let mut entries: Vec<PopularEntry> = counts
            .into_iter()
            .map(|(title, loan_count)| PopularEntry {
                title: title.to_string(),
                loan_count,
            })
            .collect();
        // stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.loan_count.cmp(&a.loan_count));

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for PopularityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No loans have been made yet");
        }
        writeln!(f, "Popular Publications Report:")?;
        for entry in &self.entries {
            writeln!(f, "Title: {}", entry.title)?;
            writeln!(f, "Number of Loans: {}", entry.loan_count)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
