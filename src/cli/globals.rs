use url::Url;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub backend_url: Url,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(backend_url: Url) -> Self {
        Self { backend_url }
    }
}
