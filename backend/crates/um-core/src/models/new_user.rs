use crate::ImageSource;

/// Input for creating a user. Everything but `id` and `image` is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Caller supplied id; a fresh one is generated when `None`
    pub id: Option<String>,
    pub name: String,
    pub role: String,
    pub email: String,
    pub contact: String,
    /// Optional upload; falls back to the placeholder image
    pub image: Option<ImageSource>,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.into(),
            email: email.into(),
            contact: contact.into(),
            image: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_image(mut self, image: ImageSource) -> Self {
        self.image = Some(image);
        self
    }
}
