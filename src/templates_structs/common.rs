/// Page title block rendered by `components/header.html`.
pub struct Header {
    pub title: String,
    pub description: String,
}

impl Header {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}
