// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use parley_core_client::app::event_handlers::{
    MessageEvent, MessagesEventHandler, ServerEvent, ServerEventHandler,
};
use parley_core_client::domain::messaging::models::MessageIdentity;
use parley_core_client::domain::messaging::services::{MessageReconciler, ReconciliationOutcome};
use parley_core_client::domain::shared::models::CacheKey;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_replaces_provisional_message_in_place() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![
            confirmed_message("m-a", "c1", "u2"),
            provisional_message("t1", Some("c1"), "u1"),
            confirmed_message("m-b", "c1", "u2"),
        ],
    );

    handler
        .handle_event(ServerEvent::Message(MessageEvent::Sent {
            temp_id: Some("t1".into()),
            message: confirmed_message("m1", "c1", "u1"),
        }))
        .await?;

    // Same slot, same length; the temp id is retired.
    let messages = messages_in(&test.query_cache, &CacheKey::messages("c1".into()));
    assert_eq!(
        messages
            .iter()
            .map(|m| m.identity.clone())
            .collect::<Vec<_>>(),
        vec![
            MessageIdentity::Confirmed("m-a".into()),
            MessageIdentity::Confirmed("m1".into()),
            MessageIdentity::Confirmed("m-b".into()),
        ]
    );
    assert!(!test.query_cache.is_stale(&CacheKey::messages("c1".into())));
    Ok(())
}

#[tokio::test]
async fn test_moves_pending_message_to_new_conversation() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    seed_messages(
        &test.query_cache,
        CacheKey::pending_messages(),
        vec![provisional_message("t2", None, "u1")],
    );

    handler
        .handle_event(ServerEvent::Message(MessageEvent::Sent {
            temp_id: Some("t2".into()),
            message: confirmed_message("m2", "c2", "u1"),
        }))
        .await?;

    let pending = messages_in(&test.query_cache, &CacheKey::pending_messages());
    assert_eq!(pending, vec![]);

    // A list for the confirmed conversation is created on the fly.
    let messages = messages_in(&test.query_cache, &CacheKey::messages("c2".into()));
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].identity,
        MessageIdentity::Confirmed("m2".into())
    );
    Ok(())
}

#[tokio::test]
async fn test_moves_pending_message_into_existing_conversation() -> Result<()> {
    let test = test_deps();
    let reconciler = MessageReconciler::new(test.query_cache.clone());

    seed_messages(
        &test.query_cache,
        CacheKey::pending_messages(),
        vec![provisional_message("t2", None, "u1")],
    );
    seed_messages(
        &test.query_cache,
        CacheKey::messages("c2".into()),
        vec![confirmed_message("m1", "c2", "u2")],
    );

    let outcome = reconciler.reconcile(&"t2".into(), &confirmed_message("m2", "c2", "u1"));
    assert_eq!(outcome, ReconciliationOutcome::MovedFromPending);

    let messages = messages_in(&test.query_cache, &CacheKey::messages("c2".into()));
    assert_eq!(
        messages
            .iter()
            .map(|m| m.identity.clone())
            .collect::<Vec<_>>(),
        vec![
            MessageIdentity::Confirmed("m1".into()),
            MessageIdentity::Confirmed("m2".into()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_known_conversation_wins_over_pending_slot() -> Result<()> {
    let test = test_deps();
    let reconciler = MessageReconciler::new(test.query_cache.clone());

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![provisional_message("t1", Some("c1"), "u1")],
    );
    seed_messages(
        &test.query_cache,
        CacheKey::pending_messages(),
        vec![provisional_message("t9", None, "u1")],
    );

    let outcome = reconciler.reconcile(&"t1".into(), &confirmed_message("m1", "c1", "u1"));
    assert_eq!(outcome, ReconciliationOutcome::ReplacedInPlace);

    // The unrelated pending entry is untouched.
    let pending = messages_in(&test.query_cache, &CacheKey::pending_messages());
    assert_eq!(pending.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_reconciliation_miss_reports_miss() -> Result<()> {
    let test = test_deps();
    let reconciler = MessageReconciler::new(test.query_cache.clone());

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![confirmed_message("m1", "c1", "u2")],
    );

    let outcome = reconciler.reconcile(&"t1".into(), &confirmed_message("m2", "c1", "u1"));
    assert_eq!(outcome, ReconciliationOutcome::Miss);
    Ok(())
}

#[tokio::test]
async fn test_reconciliation_miss_invalidates_conversation() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![confirmed_message("m1", "c1", "u2")],
    );

    handler
        .handle_event(ServerEvent::Message(MessageEvent::Sent {
            temp_id: Some("t-unknown".into()),
            message: confirmed_message("m2", "c1", "u1"),
        }))
        .await?;

    // The event is never dropped — consistency is restored via refetch.
    assert!(test.query_cache.is_stale(&CacheKey::messages("c1".into())));
    Ok(())
}

#[tokio::test]
async fn test_does_not_duplicate_already_confirmed_message() -> Result<()> {
    let test = test_deps();
    let reconciler = MessageReconciler::new(test.query_cache.clone());

    // The confirmation raced with a regular delivery of the same message.
    seed_messages(
        &test.query_cache,
        CacheKey::pending_messages(),
        vec![provisional_message("t2", None, "u1")],
    );
    seed_messages(
        &test.query_cache,
        CacheKey::messages("c2".into()),
        vec![confirmed_message("m2", "c2", "u1")],
    );

    let outcome = reconciler.reconcile(&"t2".into(), &confirmed_message("m2", "c2", "u1"));
    assert_eq!(outcome, ReconciliationOutcome::MovedFromPending);

    let messages = messages_in(&test.query_cache, &CacheKey::messages("c2".into()));
    assert_eq!(messages.len(), 1);
    Ok(())
}
