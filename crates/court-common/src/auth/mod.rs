//! Password hashing utilities

mod password;

pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordService,
};
