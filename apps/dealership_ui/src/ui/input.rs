//! Constraints the input controls apply before a submit event is produced.
//! Controllers never re-check these; the server stays the final authority.

use std::ops::RangeInclusive;

use shared::domain::{Credentials, RegistrationProfile, ReviewDraft};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const CAR_YEAR_RANGE: RangeInclusive<i32> = 1990..=2025;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    #[error("car year must be a number between 1990 and 2025")]
    CarYearOutOfRange,
}

fn required(value: &str, label: &'static str) -> Result<(), InputError> {
    if value.is_empty() {
        return Err(InputError::Required(label));
    }
    Ok(())
}

pub fn check_credentials(credentials: &Credentials) -> Result<(), InputError> {
    required(&credentials.user_name, "username")?;
    required(&credentials.password, "password")
}

pub fn check_registration(profile: &RegistrationProfile) -> Result<(), InputError> {
    required(&profile.user_name, "username")?;
    required(&profile.first_name, "first name")?;
    required(&profile.last_name, "last name")?;
    required(&profile.email, "email")?;
    required(&profile.password, "password")?;
    if profile.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(InputError::PasswordTooShort);
    }
    Ok(())
}

pub fn check_review(draft: &ReviewDraft) -> Result<(), InputError> {
    required(&draft.name, "name")?;
    required(&draft.review, "review")?;
    if draft.purchase && !draft.car_year.is_empty() {
        let in_range = draft
            .car_year
            .parse::<i32>()
            .is_ok_and(|year| CAR_YEAR_RANGE.contains(&year));
        if !in_range {
            return Err(InputError::CarYearOutOfRange);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> RegistrationProfile {
        RegistrationProfile {
            user_name: "bob".into(),
            first_name: "Bob".into(),
            last_name: "Builder".into(),
            email: "bob@example.com".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn registration_requires_every_field() {
        assert_eq!(check_registration(&profile()), Ok(()));
        let missing_email = RegistrationProfile {
            email: String::new(),
            ..profile()
        };
        assert_eq!(
            check_registration(&missing_email),
            Err(InputError::Required("email"))
        );
    }

    #[test]
    fn registration_password_minimum_is_six() {
        let short = RegistrationProfile {
            password: "abcde".into(),
            ..profile()
        };
        assert_eq!(check_registration(&short), Err(InputError::PasswordTooShort));
        let exact = RegistrationProfile {
            password: "abcdef".into(),
            ..profile()
        };
        assert_eq!(check_registration(&exact), Ok(()));
    }

    #[test]
    fn login_requires_both_fields() {
        let credentials = Credentials {
            user_name: "alice".into(),
            password: String::new(),
        };
        assert_eq!(
            check_credentials(&credentials),
            Err(InputError::Required("password"))
        );
    }

    #[test]
    fn car_year_is_only_checked_for_purchases() {
        let mut draft = ReviewDraft {
            name: "Sam".into(),
            review: "Good".into(),
            car_year: "1890".into(),
            ..ReviewDraft::default()
        };
        assert_eq!(check_review(&draft), Ok(()));

        draft.purchase = true;
        assert_eq!(check_review(&draft), Err(InputError::CarYearOutOfRange));
        draft.car_year = "2023".into();
        assert_eq!(check_review(&draft), Ok(()));
    }
}
