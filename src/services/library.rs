//! Library aggregate: members, catalog and active loans

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult, Entity},
    models::{Book, Loan, LoanId, LoanPolicy, Member, Publication, PublicationQuery},
    services::reports::{OverdueReport, PopularityReport},
};

/// In-memory library. Collections keep insertion order.
#[derive(Debug, Default)]
pub struct Library {
    members: Vec<Member>,
    publications: Vec<Publication>,
    loans: Vec<Loan>,
    policy: LoanPolicy,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: LoanPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Register one demo member and one demo book.
    pub fn seed_demo_data(&mut self) {
        self.add_member(Member::new("Demo Reader", "630911143", "reader@example.org"));
        self.add_publication(
            Book::new(
                "How to Good at LOL",
                "YasuoInwza007",
                2020,
                "978-0-13-458971-7",
                "Gaming",
            )
            .into(),
        );
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Active loans, oldest first
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn add_member(&mut self, member: Member) {
        tracing::info!(member_id = %member.id, "Member added");
        self.members.push(member);
    }

    /// First member registered under `member_id`
    pub fn search_member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn add_publication(&mut self, publication: Publication) {
        tracing::info!(
            publication_id = %publication.id(),
            title = %publication.title(),
            "Publication added"
        );
        self.publications.push(publication);
    }

    pub fn search_publication(&self, query: &PublicationQuery) -> Vec<&Publication> {
        self.publications
            .iter()
            .filter(|p| query.matches(p))
            .collect()
    }

    /// Lend a catalog publication to a member, stamped with the current time.
    pub fn lend_publication(
        &mut self,
        member: &Member,
        publication: &Publication,
    ) -> AppResult<&Loan> {
        self.lend_publication_at(member, publication, Utc::now())
    }

    pub fn lend_publication_at(
        &mut self,
        member: &Member,
        publication: &Publication,
        loan_date: DateTime<Utc>,
    ) -> AppResult<&Loan> {
        let publication_id = publication.id();

        if !self.publications.iter().any(|p| p.id() == publication_id) {
            tracing::warn!(%publication_id, "Lend refused: publication not in catalog");
            return Err(AppError::UnknownPublication(publication.title().to_string()));
        }

        if self
            .loans
            .iter()
            .any(|loan| loan.publication.id() == publication_id)
        {
            tracing::warn!(%publication_id, "Lend refused: publication already on loan");
            return Err(AppError::AlreadyOnLoan(publication.title().to_string()));
        }

        let loan = Loan::new(member.clone(), publication.clone(), loan_date, &self.policy)?;
        tracing::info!(
            loan_id = %loan.id,
            member_id = %member.id,
            %publication_id,
            due_date = %loan.due_date.format("%Y-%m-%d"),
            "Publication {} lent to {}",
            publication.title(),
            member.name
        );
        self.loans.push(loan);
        Ok(&self.loans[self.loans.len() - 1])
    }

    /// Close an active loan. Fails without side effects when the loan was
    /// already returned or never existed.
    pub fn return_loan(&mut self, loan_id: LoanId) -> AppResult<Loan> {
        let index = self
            .loans
            .iter()
            .position(|loan| loan.id == loan_id)
            .ok_or_else(|| AppError::not_found(Entity::Loan, loan_id.to_string()))?;

        let loan = self.loans.remove(index);
        tracing::info!(
            %loan_id,
            publication_id = %loan.publication.id(),
            "Publication {} returned",
            loan.publication.title()
        );
        Ok(loan)
    }

    /// First active loan held by `member` on a publication titled `title`.
    pub fn find_loan(&self, member: &Member, title: &str) -> Option<&Loan> {
        self.loans
            .iter()
            .find(|loan| &loan.member == member && loan.publication.title() == title)
    }

    pub fn generate_overdue_loans_report(&self) -> OverdueReport {
        self.generate_overdue_loans_report_at(Utc::now())
    }

    pub fn generate_overdue_loans_report_at(&self, now: DateTime<Utc>) -> OverdueReport {
        let report = OverdueReport::from_loans(&self.loans, now);
        tracing::debug!(overdue = report.entries.len(), "Overdue loans report generated");
        report
    }

    pub fn generate_popular_publications_report(&self) -> PopularityReport {
        let report = PopularityReport::from_loans(&self.loans);
        tracing::debug!(titles = report.entries.len(), "Popular publications report generated");
        report
    }
}
