//! Loan model and related types

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

use super::member::Member;
use super::publication::Publication;

/// Loan identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoanId(Uuid);

impl LoanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LoanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LoanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Loan period settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct LoanPolicy {
    /// Days between lending and the due date
    #[validate(range(min = 0, max = 36500, message = "Loan duration must be between 0 and 36500 days"))]
    pub duration_days: i64,
    /// Days past the due date before a loan counts as overdue
    #[validate(range(min = 0, max = 36500, message = "Overdue grace must be between 0 and 36500 days"))]
    pub overdue_grace_days: i64,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            duration_days: 14,
            overdue_grace_days: 14,
        }
    }
}

/// Active loan. Holds copies of the (immutable) member and publication
/// records; identity goes through `publication.id()`.
#[derive(Debug, Clone)]
pub struct Loan {
    pub id: LoanId,
    pub member: Member,
    pub publication: Publication,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    overdue_after: DateTime<Utc>,
}

impl Loan {
    /// Fails with `Validation` when the policy is out of range or the dates
    /// would leave the representable calendar.
    pub fn new(
        member: Member,
        publication: Publication,
        loan_date: DateTime<Utc>,
        policy: &LoanPolicy,
    ) -> AppResult<Self> {
        policy.validate()?;
        let due_date = add_days(loan_date, policy.duration_days)?;
        let overdue_after = add_days(due_date, policy.overdue_grace_days)?;

        Ok(Self {
            id: LoanId::new(),
            member,
            publication,
            loan_date,
            due_date,
            overdue_after,
        })
    }

    /// Instant after which the loan counts as overdue (due date plus grace).
    pub fn overdue_after(&self) -> DateTime<Utc> {
        self.overdue_after
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }

    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        now > self.overdue_after()
    }
}

fn add_days(date: DateTime<Utc>, days: i64) -> AppResult<DateTime<Utc>> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| {
            AppError::Validation(format!("{} days after {} is out of range", days, date))
        })
}

impl std::fmt::Display for Loan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Member: {}", self.member.name)?;
        writeln!(f, "Publication: {}", self.publication.title())?;
        writeln!(f, "Loan Date: {}", self.loan_date.format("%Y-%m-%d"))?;
        write!(f, "Due Date: {}", self.due_date.format("%Y-%m-%d"))
    }
}
