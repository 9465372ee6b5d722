//! Date of Birth Value Object
//!
//! Calendar date in `YYYY-MM-DD` form, never in the future.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AuthError, AuthResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Parse and validate against today's date (UTC)
    pub fn parse(input: &str) -> AuthResult<Self> {
        Self::parse_on(input, Utc::now().date_naive())
    }

    pub fn parse_on(input: &str, today: NaiveDate) -> AuthResult<Self> {
        let input = input.trim();
        // chrono accepts single-digit months and days; the wire format does not
        let date = (input.len() == 10)
            .then(|| NaiveDate::parse_from_str(input, DATE_FORMAT).ok())
            .flatten()
            .ok_or_else(|| {
                AuthError::Validation("Invalid date format, use YYYY-MM-DD".to_string())
            })?;

        if date > today {
            return Err(AuthError::Validation(
                "Date of birth cannot be in the future".to_string(),
            ));
        }

        Ok(Self(date))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Full years lived as of today (UTC)
    pub fn age(&self) -> u32 {
        self.age_on(Utc::now().date_naive())
    }

    /// Full years lived on `today`; one less until this year's birthday
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut years = today.year() - self.0.year();
        if (today.month(), today.day()) < (self.0.month(), self.0.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
