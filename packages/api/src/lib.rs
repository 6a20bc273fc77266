//! # API crate — client for the remote MedPubs service
//!
//! Everything the frontends need to talk to the medical-publications
//! backend lives here. The backend is an external service reached over
//! plain HTTP at a fixed host; this crate only builds requests, attaches
//! the bearer token, and maps response statuses to payloads or errors.
//! No caching, no retries, no local persistence.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — one async operation per remote action |
//! | [`models`] | Wire structs matching the backend's JSON field names |
//! | [`error`] | [`ApiError`] — the full failure taxonomy |
//! | [`token`] | Unverified access-token inspection (advisory claims only) |

pub mod client;
pub mod error;
pub mod models;
pub mod token;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    split_files, Fullname, LoginResponse, NewPublication, Profile, Publication, RegisterRequest,
    UserRecord,
};
pub use token::extract_user_id;
