#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub text: String,
}

/// Client-supplied fields of a post before it has been assigned an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub text: String,
}

impl PostDraft {
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            text: self.text,
        }
    }
}
