// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::Duration;
use pretty_assertions::assert_eq;

use parley_core_client::app::event_handlers::{
    MessageEvent, MessagesEventHandler, ReactionChange, ServerEvent, ServerEventHandler,
};
use parley_core_client::domain::messaging::models::{MessageIdentity, MessageStatus};
use parley_core_client::domain::shared::models::CacheKey;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_appends_received_message_once() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![confirmed_message("m1", "c1", "u2")],
    );

    let event = ServerEvent::Message(MessageEvent::Received {
        message: confirmed_message("m2", "c1", "u2"),
    });
    handler.handle_event(event.clone()).await?;
    handler.handle_event(event).await?;

    let messages = messages_in(&test.query_cache, &CacheKey::messages("c1".into()));
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
async fn test_ignores_received_message_without_cached_list() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    let event = ServerEvent::Message(MessageEvent::Received {
        message: confirmed_message("m1", "c1", "u2"),
    });
    handler.handle_event(event).await?;

    // The owning view is not mounted; nothing to update, nothing to create.
    assert_eq!(
        test.query_cache.get(&CacheKey::messages("c1".into())),
        None
    );
    Ok(())
}

#[tokio::test]
async fn test_bumps_unread_for_customer() -> Result<()> {
    let test = test_deps();
    test.ctx.set_current_user(Some(customer("u1")));
    let handler = MessagesEventHandler::from(&test.deps);

    seed_conversations(&test.query_cache, vec![conversation("c9")]);
    seed_messages(
        &test.query_cache,
        CacheKey::messages("c9".into()),
        vec![],
    );

    let message = confirmed_message("m1", "c9", "user-42");
    handler
        .handle_event(ServerEvent::Message(MessageEvent::Received {
            message: message.clone(),
        }))
        .await?;

    let conversations = conversations_in(&test.query_cache);
    assert_eq!(conversations[0].unread_count, 1);
    assert_eq!(conversations[0].last_message_at, Some(message.sent_at));
    assert_eq!(conversations[0].last_message, Some(message));
    Ok(())
}

#[tokio::test]
async fn test_leaves_unread_alone_for_staff() -> Result<()> {
    let test = test_deps();
    test.ctx.set_current_user(Some(staff("u1")));
    let handler = MessagesEventHandler::from(&test.deps);

    seed_conversations(&test.query_cache, vec![conversation("c9")]);

    handler
        .handle_event(ServerEvent::Message(MessageEvent::Received {
            message: confirmed_message("m1", "c9", "user-42"),
        }))
        .await?;

    // The staff-side counter is left to the summary event.
    assert_eq!(conversations_in(&test.query_cache)[0].unread_count, 0);
    Ok(())
}

#[tokio::test]
async fn test_does_not_bump_unread_for_own_message() -> Result<()> {
    let test = test_deps();
    test.ctx.set_current_user(Some(customer("u1")));
    let handler = MessagesEventHandler::from(&test.deps);

    seed_conversations(&test.query_cache, vec![conversation("c9")]);

    handler
        .handle_event(ServerEvent::Message(MessageEvent::Received {
            message: confirmed_message("m1", "c9", "u1"),
        }))
        .await?;

    assert_eq!(conversations_in(&test.query_cache)[0].unread_count, 0);
    Ok(())
}

#[tokio::test]
async fn test_marks_message_deleted_without_removing_it() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![
            confirmed_message("m1", "c1", "u2"),
            confirmed_message("m2", "c1", "u2"),
        ],
    );

    let deleted_at = test_time() + Duration::minutes(5);
    handler
        .handle_event(ServerEvent::Message(MessageEvent::Deleted {
            conversation_id: "c1".into(),
            message_id: "m1".into(),
            deleted_at,
        }))
        .await?;

    let messages = messages_in(&test.query_cache, &CacheKey::messages("c1".into()));
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].deleted_at, Some(deleted_at));
    assert!(messages[0].content.is_some());
    assert_eq!(messages[1].deleted_at, None);
    Ok(())
}

#[tokio::test]
async fn test_marks_explicit_messages_read() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![
            confirmed_message("m1", "c1", "u1"),
            confirmed_message("m2", "c1", "u1"),
        ],
    );

    let read_at = test_time() + Duration::minutes(1);
    handler
        .handle_event(ServerEvent::Message(MessageEvent::Read {
            conversation_id: "c1".into(),
            message_ids: Some(vec!["m1".into()]),
            read_by: "u2".into(),
            read_at,
        }))
        .await?;

    let messages = messages_in(&test.query_cache, &CacheKey::messages("c1".into()));
    assert_eq!(messages[0].status, MessageStatus::Read);
    assert_eq!(messages[0].read_at, Some(read_at));
    assert_eq!(messages[1].status, MessageStatus::Sent);
    Ok(())
}

#[tokio::test]
async fn test_marks_all_sent_messages_read() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    let earlier_read_at = test_time() - Duration::hours(1);
    let mut m3 = confirmed_message("m3", "c1", "u1");
    m3.mark_read(earlier_read_at);

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![
            confirmed_message("m1", "c1", "u1"),
            confirmed_message("m2", "c1", "u1"),
            m3,
        ],
    );

    let read_at = test_time() + Duration::minutes(1);
    handler
        .handle_event(ServerEvent::Message(MessageEvent::Read {
            conversation_id: "c1".into(),
            message_ids: None,
            read_by: "u2".into(),
            read_at,
        }))
        .await?;

    let messages = messages_in(&test.query_cache, &CacheKey::messages("c1".into()));
    assert!(messages
        .iter()
        .all(|m| m.status == MessageStatus::Read));
    // Already-read messages keep their original receipt.
    assert_eq!(messages[2].read_at, Some(earlier_read_at));
    assert_eq!(messages[0].read_at, Some(read_at));
    Ok(())
}

#[tokio::test]
async fn test_adds_reaction_exactly_once() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![confirmed_message("m1", "c1", "u2")],
    );

    let event = ServerEvent::Message(MessageEvent::Reaction {
        message_id: "m1".into(),
        change: ReactionChange::Added {
            reaction: reaction("u1", "👍"),
        },
    });
    handler.handle_event(event.clone()).await?;
    handler.handle_event(event).await?;

    let messages = messages_in(&test.query_cache, &CacheKey::messages("c1".into()));
    assert_eq!(messages[0].reactions, vec![reaction("u1", "👍")]);

    handler
        .handle_event(ServerEvent::Message(MessageEvent::Reaction {
            message_id: "m1".into(),
            change: ReactionChange::Removed {
                user_id: "u1".into(),
                emoji: "👍".into(),
            },
        }))
        .await?;

    let messages = messages_in(&test.query_cache, &CacheKey::messages("c1".into()));
    assert_eq!(messages[0].reactions, vec![]);
    Ok(())
}

#[tokio::test]
async fn test_applies_reaction_to_every_cached_list() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    // The same message can be visible in more than one paginated query.
    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![confirmed_message("m1", "c1", "u2")],
    );
    seed_messages(
        &test.query_cache,
        CacheKey::pending_messages(),
        vec![confirmed_message("m1", "c1", "u2")],
    );

    handler
        .handle_event(ServerEvent::Message(MessageEvent::Reaction {
            message_id: "m1".into(),
            change: ReactionChange::Added {
                reaction: reaction("u1", "🎉"),
            },
        }))
        .await?;

    for key in [
        CacheKey::messages("c1".into()),
        CacheKey::pending_messages(),
    ] {
        let messages = messages_in(&test.query_cache, &key);
        assert_eq!(messages[0].reactions, vec![reaction("u1", "🎉")]);
    }
    Ok(())
}

#[tokio::test]
async fn test_invalidates_when_confirmation_has_no_temp_id() -> Result<()> {
    let test = test_deps();
    let handler = MessagesEventHandler::from(&test.deps);

    seed_messages(
        &test.query_cache,
        CacheKey::messages("c1".into()),
        vec![confirmed_message("m1", "c1", "u1")],
    );

    handler
        .handle_event(ServerEvent::Message(MessageEvent::Sent {
            temp_id: None,
            message: confirmed_message("m2", "c1", "u1"),
        }))
        .await?;

    assert!(test.query_cache.is_stale(&CacheKey::messages("c1".into())));
    Ok(())
}
