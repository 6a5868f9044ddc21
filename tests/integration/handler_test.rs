//! End-to-end handler tests using LocalStack.

use bl_handler::{HandlerConfig, ListBlobsHandler};
use serde_json::json;

use crate::common::LocalStackTestContext;

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_handler_lists_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bl-handler-bucket";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_object(bucket, "reports/2024.csv", "year,total")
        .await
        .unwrap();
    ctx.put_object(bucket, "index.html", "<html></html>")
        .await
        .unwrap();

    let handler = ListBlobsHandler::new(HandlerConfig::new(bucket).unwrap(), ctx.lister().await);
    let response = handler.handle().await.unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"filenames": ["index.html", "reports/2024.csv"]})
    );

    ctx.delete_bucket(bucket).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_handler_empty_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bl-handler-empty";
    ctx.create_bucket(bucket).await.unwrap();

    let handler = ListBlobsHandler::new(HandlerConfig::new(bucket).unwrap(), ctx.lister().await);
    let response = handler.handle().await.unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"filenames": []})
    );

    ctx.delete_bucket(bucket).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_handler_missing_bucket_is_an_error() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let handler = ListBlobsHandler::new(
        HandlerConfig::new("bl-handler-no-such-bucket").unwrap(),
        ctx.lister().await,
    );

    let err = handler.handle().await.unwrap_err();

    assert!(!err.is_config());
    assert!(err.to_string().contains("bl-handler-no-such-bucket"));
}
