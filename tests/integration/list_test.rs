//! S3 listing integration tests using LocalStack.

use bl_error::{BlError, StorageErrorKind};
use bl_traits::BlobLister;
use futures::TryStreamExt;

use crate::common::LocalStackTestContext;

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_returns_every_object_with_metadata() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bl-list-metadata";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_object(bucket, "b.txt", "bbbb").await.unwrap();
    ctx.put_object(bucket, "a.txt", "aa").await.unwrap();
    ctx.put_object(bucket, "dir/", "").await.unwrap();

    let lister = ctx.lister().await;
    let blobs: Vec<_> = lister.list_blobs(bucket).try_collect().await.unwrap();

    // S3 returns keys in lexicographic order
    let names: Vec<_> = blobs.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "dir/"]);

    assert_eq!(blobs[0].size, Some(2));
    assert_eq!(blobs[1].size, Some(4));
    assert!(blobs.iter().all(|b| b.last_modified.is_some()));

    ctx.delete_bucket(bucket).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_follows_continuation_tokens() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    // One more than the default page size of 1000
    let bucket = "bl-list-pages";
    let count = 1001;
    ctx.create_bucket(bucket).await.unwrap();
    for i in 0..count {
        ctx.put_object(bucket, &format!("obj-{i:05}"), "x")
            .await
            .unwrap();
    }

    let lister = ctx.lister().await;
    let blobs: Vec<_> = lister.list_blobs(bucket).try_collect().await.unwrap();

    assert_eq!(blobs.len(), count);
    assert_eq!(blobs.first().map(|b| b.name.as_str()), Some("obj-00000"));
    assert_eq!(blobs.last().map(|b| b.name.as_str()), Some("obj-01000"));

    ctx.delete_bucket(bucket).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_missing_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let lister = ctx.lister().await;
    let result: Result<Vec<_>, _> = lister
        .list_blobs("bl-bucket-that-does-not-exist")
        .try_collect()
        .await;

    match result {
        Err(BlError::Storage(e)) => {
            assert_eq!(e.kind(), StorageErrorKind::BucketNotFound);
            assert_eq!(e.bucket(), "bl-bucket-that-does-not-exist");
        }
        other => panic!("expected bucket not found, got {other:?}"),
    }
}
