use std::sync::Arc;

use argon2::password_hash::{
    rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier,
    SaltString,
};
use argon2::Argon2;
use async_trait::async_trait;
use log::{info, warn};

use super::users_model::{NewUser, NewUserRecord, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::{DatabaseError, Error, Result, ValidationError};

const EMAIL_TAKEN: &str = "Email already registered";

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }

    fn validate(new_user: &NewUser) -> Result<()> {
        if new_user.name.is_empty() || new_user.email.is_empty() || new_user.password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        if new_user.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort.into());
        }
        Ok(())
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    fn verify_password(password: &str, stored_hash: &str) -> Result<()> {
        let parsed = PasswordHash::new(stored_hash)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => Error::InvalidCredentials,
                other => Error::from(other),
            })
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<User> {
        Self::validate(&new_user)?;

        // Fast path only; the unique index decides races.
        if self.repository.find_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(EMAIL_TAKEN.to_string()));
        }

        let record = NewUserRecord {
            name: new_user.name,
            email: new_user.email,
            password_hash: Self::hash_password(&new_user.password)?,
        };

        match self.repository.insert_user(record).await {
            Ok(user) => {
                info!("Registered user {}", user.id);
                Ok(user)
            }
            Err(Error::Database(DatabaseError::UniqueViolation(detail))) => {
                warn!("Concurrent registration rejected by unique index: {}", detail);
                Err(Error::ConstraintViolation(EMAIL_TAKEN.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .repository
            .find_by_email(email)?
            .ok_or(Error::InvalidCredentials)?;
        Self::verify_password(password, &user.password_hash)?;
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository
            .find_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(format!("User {user_id}")))
    }
}
