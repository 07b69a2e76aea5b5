/// Options for one upload call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Custom name for the stored image. When unset, the source filename
    /// (if the input carries one) is used instead.
    pub name: Option<String>,
    /// Auto-deletion delay in seconds (60..=15552000). 0 keeps the image
    /// forever and is omitted from the request.
    pub expiration: u64,
}

impl UploadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn expiration(mut self, seconds: u64) -> Self {
        self.expiration = seconds;
        self
    }
}
