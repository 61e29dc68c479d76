//! Field-by-field profile merging.
//!
//! Only the fields named in `ProfileUpdate` can change; id, password and
//! join date are never touched.

use fb_core::{ProfileUpdate, SessionUser, User};

/// Normalized optional text: trimmed, blank means "clear".
fn cleaned(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The username an update asks for, if any. Blank requests are ignored.
pub(crate) fn requested_username(updates: &ProfileUpdate) -> Option<String> {
    updates.username.as_deref().and_then(cleaned)
}

pub(crate) fn apply(user: &mut User, updates: &ProfileUpdate) {
    if let Some(name) = requested_username(updates) {
        user.username = name;
    }
    if let Some(bio) = &updates.bio {
        user.bio = cleaned(bio);
    }
    if let Some(location) = &updates.location {
        user.location = cleaned(location);
    }
    if let Some(website) = &updates.website {
        user.website = cleaned(website);
    }
    if let Some(avatar) = &updates.avatar {
        user.avatar = cleaned(avatar);
    }
}

/// Copies the denormalized display fields from the merged record.
pub(crate) fn refresh_session(session: &SessionUser, user: &User) -> SessionUser {
    SessionUser {
        name: user.username.clone(),
        bio: user.bio.clone(),
        location: user.location.clone(),
        website: user.website.clone(),
        avatar: user.avatar.clone(),
        ..session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: 7,
            username: "bob".to_string(),
            password: "pw".to_string(),
            join_date: Utc::now(),
            bio: Some("old bio".to_string()),
            location: Some("Oslo".to_string()),
            website: None,
            avatar: None,
        }
    }

    #[test]
    fn test_apply_leaves_unspecified_fields() {
        let mut record = user();
        apply(
            &mut record,
            &ProfileUpdate {
                website: Some(" https://bob.dev ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(record.username, "bob");
        assert_eq!(record.bio.as_deref(), Some("old bio"));
        assert_eq!(record.website.as_deref(), Some("https://bob.dev"));
        assert_eq!(record.password, "pw");
    }

    #[test]
    fn test_blank_clears_optional_but_not_username() {
        let mut record = user();
        apply(
            &mut record,
            &ProfileUpdate {
                username: Some("   ".to_string()),
                location: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(record.username, "bob");
        assert_eq!(record.location, None);
    }

    #[test]
    fn test_refresh_session_keeps_identity() {
        let mut record = user();
        let session = record.sanitized();
        record.username = "robert".to_string();
        record.avatar = Some("a.png".to_string());
        let refreshed = refresh_session(&session, &record);
        assert_eq!(refreshed.id, session.id);
        assert_eq!(refreshed.join_date, session.join_date);
        assert_eq!(refreshed.name, "robert");
        assert_eq!(refreshed.avatar.as_deref(), Some("a.png"));
    }
}
