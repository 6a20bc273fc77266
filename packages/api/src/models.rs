//! # Wire models for the MedPubs backend
//!
//! The backend's JSON field names are fixed (`firstName`, `dateOfBirth`,
//! `sicknessType`, `accessToken`, MongoDB-style `_id`, ...), so every
//! struct here is `#[serde(rename_all = "camelCase")]` with explicit
//! renames where camelCase is not enough.
//!
//! Response structs default most fields so a sparse body still
//! deserializes; the views only need a handful of them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload for the registration endpoint. Transient: built for one
/// submission and dropped once the call returns.
///
/// `date_of_birth` serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

/// Whatever the registration endpoint returns for the created user.
///
/// The client only uses this as a success signal, so every field is
/// optional; any reasonable 201 body deserializes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Successful login body. The token is opaque and must be stored
/// verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Read/edit projection of the remote profile. Fetched fresh on every
/// profile-page render, never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub fullname: Fullname,
}

/// The backend groups first/last name under a `fullname` object, both
/// in profile responses and in update payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fullname {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A publication record owned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sickness_type: String,
    #[serde(default)]
    pub files: Vec<String>,
    /// Owning user id, as stamped at creation.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub modified_by: Vec<String>,
}

/// Create payload for a publication.
///
/// Construct it through [`NewPublication::new`] so the `user` and
/// `modifiedBy` fields are always stamped with the same user id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublication {
    pub title: String,
    pub content: String,
    pub sickness_type: String,
    pub files: Vec<String>,
    pub user: String,
    pub modified_by: Vec<String>,
}

impl NewPublication {
    /// Build a create payload, stamping `user` and a single-element
    /// `modifiedBy` list with `user_id`.
    pub fn new(
        title: String,
        content: String,
        sickness_type: String,
        files: Vec<String>,
        user_id: &str,
    ) -> Self {
        Self {
            title,
            content,
            sickness_type,
            files,
            user: user_id.to_string(),
            modified_by: vec![user_id.to_string()],
        }
    }
}

/// Split the publication form's comma-separated files field into an
/// ordered sequence.
///
/// Deliberately a bare `split(',')`: no trimming, no URL validation.
/// `""` yields `[""]`.
pub fn split_files(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_files_ordered() {
        assert_eq!(split_files("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_files_does_not_trim() {
        assert_eq!(split_files("a, b ,c"), vec!["a", " b ", "c"]);
    }

    #[test]
    fn test_split_files_empty_input() {
        assert_eq!(split_files(""), vec![""]);
    }

    #[test]
    fn test_register_request_serializes_iso_date() {
        let req = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 2, 3).unwrap(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["dateOfBirth"], "1990-02-03");
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
    }

    #[test]
    fn test_new_publication_stamps_owner() {
        let draft = NewPublication::new(
            "t".to_string(),
            "c".to_string(),
            "flu".to_string(),
            split_files("a,b"),
            "user-1",
        );
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["user"], "user-1");
        assert_eq!(value["modifiedBy"], json!(["user-1"]));
        assert_eq!(value["sicknessType"], "flu");
        assert_eq!(value["files"], json!(["a", "b"]));
    }

    #[test]
    fn test_publication_deserializes_mongo_id() {
        let p: Publication = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Title",
            "content": "Body",
            "sicknessType": "flu",
            "files": ["u1", "u2"],
            "user": "user-1",
            "modifiedBy": ["user-1"],
        }))
        .unwrap();
        assert_eq!(p.id, "p1");
        assert_eq!(p.sickness_type, "flu");
        assert_eq!(p.files, vec!["u1", "u2"]);
    }

    #[test]
    fn test_profile_defaults_missing_fields() {
        let p: Profile = serde_json::from_value(json!({ "email": "a@b.com" })).unwrap();
        assert_eq!(p.email, "a@b.com");
        assert_eq!(p.fullname.first_name, "");
        assert_eq!(p.fullname.last_name, "");
    }
}
