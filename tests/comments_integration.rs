use portfolio_rs::{CommentLimit, CommentPanel, Portfolio, PortfolioError};

use server_test_utils::shared::setup;

#[tokio::test]
async fn get_comments_respects_the_selected_limit() {
    let (client, backend) = setup().await;
    backend.seed_comments((1..=12).map(|n| format!("comment {}", n)));

    let five = client
        .get_comments(CommentLimit::Five)
        .await
        .expect("Failed to fetch comments at limit five");
    assert_eq!(five.len(), 5);
    assert_eq!(five[0], "comment 1");
    assert_eq!(five[4], "comment 5");

    let ten = client
        .get_comments(CommentLimit::Ten)
        .await
        .expect("Failed to fetch comments at limit ten");
    assert_eq!(ten.len(), 10);
    assert_eq!(ten[9], "comment 10");
}

#[tokio::test]
async fn fewer_stored_comments_than_the_limit_is_fine() {
    let (client, backend) = setup().await;
    backend.seed_comments(["only one"]);

    let comments = client
        .get_comments(CommentLimit::Ten)
        .await
        .expect("Failed to fetch comments");
    assert_eq!(comments, ["only one"]);
}

#[tokio::test]
async fn loading_appends_and_refreshing_replaces() {
    let (client, backend) = setup().await;
    backend.seed_comments(["a", "b", "c"]);

    let mut panel = CommentPanel::new();
    let loaded = panel
        .load_comments(&client)
        .await
        .expect("Initial load failed");
    assert_eq!(loaded, 3);
    assert_eq!(panel.comments(), ["a", "b", "c"]);

    // Loading again appends, the way the page fills its list.
    panel
        .load_comments(&client)
        .await
        .expect("Second load failed");
    assert_eq!(panel.comments(), ["a", "b", "c", "a", "b", "c"]);

    // Refreshing drops the old list first.
    let refreshed = panel.refresh(&client).await.expect("Refresh failed");
    assert_eq!(refreshed, 3);
    assert_eq!(panel.comments(), ["a", "b", "c"]);
}

#[tokio::test]
async fn changing_the_limit_refetches_at_the_new_size() {
    let (client, backend) = setup().await;
    backend.seed_comments((1..=12).map(|n| format!("comment {}", n)));

    let mut panel = CommentPanel::new();
    panel.load_comments(&client).await.expect("Load failed");
    assert_eq!(panel.comments().len(), 5);

    panel.set_limit(CommentLimit::Ten);
    panel.refresh(&client).await.expect("Refresh failed");
    assert_eq!(panel.comments().len(), 10);
}

#[tokio::test]
async fn created_comments_come_back_on_the_next_fetch() {
    let (client, backend) = setup().await;

    client
        .create_comment("Greetings from the test suite", CommentLimit::Five)
        .await
        .expect("Failed to create a comment");

    assert_eq!(
        backend.stored_comments(),
        ["Greetings from the test suite"]
    );

    let comments = client
        .get_comments(CommentLimit::Five)
        .await
        .expect("Failed to fetch comments after creating one");
    assert_eq!(comments, ["Greetings from the test suite"]);
}

#[tokio::test]
async fn empty_comments_are_rejected_before_any_request() {
    let (client, backend) = setup().await;

    let result = client.create_comment("   ", CommentLimit::Five).await;
    match result {
        Err(PortfolioError::InvalidInput(message)) => {
            assert!(message.contains("empty"), "Unexpected message: {}", message);
        }
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
    assert!(
        backend.stored_comments().is_empty(),
        "An empty comment reached the backend"
    );
}

#[tokio::test]
async fn deleting_clears_the_backend_and_the_panel() {
    let (client, backend) = setup().await;
    backend.seed_comments(["a", "b"]);

    let mut panel = CommentPanel::new();
    panel.load_comments(&client).await.expect("Load failed");
    assert_eq!(panel.comments().len(), 2);

    panel
        .delete_all(&client)
        .await
        .expect("Failed to delete comments");

    assert!(panel.is_empty());
    assert!(backend.stored_comments().is_empty());

    let after = client
        .get_comments(CommentLimit::Ten)
        .await
        .expect("Failed to fetch after delete");
    assert!(after.is_empty());
}

#[tokio::test]
async fn a_failed_delete_leaves_the_panel_intact() {
    let (client, backend) = setup().await;
    backend.seed_comments(["keep me"]);

    let mut panel = CommentPanel::new();
    panel.load_comments(&client).await.expect("Load failed");

    // A client rooted below a path the backend does not serve gets a 404
    // for every endpoint.
    let misrooted = Portfolio::new(&format!("{}/nope", backend.base_url))
        .expect("Failed to create the misrooted client");

    let result = panel.delete_all(&misrooted).await;
    assert!(matches!(result, Err(PortfolioError::NotFound(_))));
    assert_eq!(
        panel.comments(),
        ["keep me"],
        "A failed delete must not clear the panel"
    );
}
