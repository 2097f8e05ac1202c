use async_trait::async_trait;

/// Object storage for uploaded files. Keys are relative paths such as
/// `profile_pics/3f2a9c1b7d4e.png`; the service decides the public URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageService: Send + Sync {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> anyhow::Result<String>;
    fn get_url(&self, key: &str) -> String;
}
