//! LocalStack test context and utilities.

use aws_sdk_s3::Client as S3Client;
use bl_s3::{S3BlobLister, S3Config, create_s3_client};

/// LocalStack test context providing an S3 client.
pub struct LocalStackTestContext {
    pub s3: S3Client,
    pub endpoint: String,
    pub region: String,
}

impl LocalStackTestContext {
    /// Create a new LocalStack test context.
    ///
    /// Uses the `LOCALSTACK_ENDPOINT` environment variable if set,
    /// otherwise defaults to `http://localhost:4566`.
    pub async fn new() -> Self {
        let endpoint = std::env::var("LOCALSTACK_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4566".to_string());
        let region = "us-east-1".to_string();

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(region.clone()))
            .endpoint_url(&endpoint)
            .credentials_provider(aws_sdk_s3::config::Credentials::new(
                "test", "test", None, None, "localstack",
            ))
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        Self {
            s3: S3Client::from_conf(s3_config),
            endpoint,
            region,
        }
    }

    /// Check if LocalStack is available and healthy.
    pub async fn is_available(&self) -> bool {
        self.s3.list_buckets().send().await.is_ok()
    }

    /// Build a lister the way the function does, pointed at LocalStack.
    pub async fn lister(&self) -> S3BlobLister {
        let config = S3Config::new()
            .with_region(&self.region)
            .with_endpoint(&self.endpoint);

        S3BlobLister::new(create_s3_client(&config).await.unwrap())
    }

    /// Create an S3 bucket for testing.
    pub async fn create_bucket(&self, name: &str) -> Result<(), aws_sdk_s3::Error> {
        let buckets = self.s3.list_buckets().send().await?;
        let exists = buckets
            .buckets()
            .iter()
            .any(|b| b.name().unwrap_or_default() == name);

        if !exists {
            self.s3.create_bucket().bucket(name).send().await?;
        }
        Ok(())
    }

    /// Upload a small object.
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: &str,
    ) -> Result<(), aws_sdk_s3::Error> {
        self.s3
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(data.as_bytes().to_vec().into())
            .content_type("text/plain")
            .send()
            .await?;
        Ok(())
    }

    /// Delete every object in a bucket, then the bucket itself.
    pub async fn delete_bucket(&self, bucket: &str) -> Result<(), aws_sdk_s3::Error> {
        let mut continuation_token: Option<String> = None;

        loop {
            let mut request = self.s3.list_objects_v2().bucket(bucket);
            if let Some(token) = &continuation_token {
                request = request.continuation_token(token);
            }

            let result = request.send().await?;
            for obj in result.contents() {
                if let Some(key) = obj.key() {
                    self.s3.delete_object().bucket(bucket).key(key).send().await?;
                }
            }

            continuation_token = result.next_continuation_token().map(str::to_string);
            if result.is_truncated() != Some(true) || continuation_token.is_none() {
                break;
            }
        }

        self.s3.delete_bucket().bucket(bucket).send().await?;
        Ok(())
    }
}
