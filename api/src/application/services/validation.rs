use crate::domain::posts::post::PostDraft;
use crate::domain::users::user::UserDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The post is empty")]
    EmptyPost,
    #[error("The post title is empty")]
    EmptyPostTitle,
    #[error("The post text is empty")]
    EmptyPostText,
    #[error("The user is empty")]
    EmptyUser,
    #[error("The user name is empty")]
    EmptyUserName,
    #[error("The user email is empty")]
    EmptyUserEmail,
}

/// Checks field presence in order: the post itself, then title, then text.
pub fn validate_post(post: Option<PostDraft>) -> Result<PostDraft, ValidationError> {
    tracing::debug!("post_service.validate");
    let post = post.ok_or(ValidationError::EmptyPost)?;
    if post.title.is_empty() {
        return Err(ValidationError::EmptyPostTitle);
    }
    if post.text.is_empty() {
        return Err(ValidationError::EmptyPostText);
    }
    Ok(post)
}

pub fn validate_user(user: Option<UserDraft>) -> Result<UserDraft, ValidationError> {
    tracing::debug!("user_service.validate");
    let user = user.ok_or(ValidationError::EmptyUser)?;
    if user.name.is_empty() {
        return Err(ValidationError::EmptyUserName);
    }
    if user.email.is_empty() {
        return Err(ValidationError::EmptyUserEmail);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, text: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            text: text.into(),
        }
    }

    #[test]
    fn rejects_missing_post() {
        let err = validate_post(None).unwrap_err();
        assert_eq!(err, ValidationError::EmptyPost);
        assert_eq!(err.to_string(), "The post is empty");
    }

    #[test]
    fn title_is_checked_before_text() {
        assert_eq!(
            validate_post(Some(draft("", ""))).unwrap_err(),
            ValidationError::EmptyPostTitle
        );
        assert_eq!(
            validate_post(Some(draft("hello", ""))).unwrap_err().to_string(),
            "The post text is empty"
        );
    }

    #[test]
    fn whitespace_counts_as_content() {
        let ok = validate_post(Some(draft(" ", "body"))).unwrap();
        assert_eq!(ok.title, " ");
    }

    #[test]
    fn user_checks_follow_name_then_email() {
        assert_eq!(validate_user(None).unwrap_err(), ValidationError::EmptyUser);
        let no_name = UserDraft {
            name: String::new(),
            email: "a@b.c".into(),
        };
        assert_eq!(
            validate_user(Some(no_name)).unwrap_err(),
            ValidationError::EmptyUserName
        );
        let no_email = UserDraft {
            name: "ann".into(),
            email: String::new(),
        };
        assert_eq!(
            validate_user(Some(no_email)).unwrap_err().to_string(),
            "The user email is empty"
        );
    }
}
