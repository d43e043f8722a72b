use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::MessageRole;
use crate::models::ChatMessage;

use super::DATETIME_FMT;

/// Append one transcript entry.
pub fn insert_chat_message(conn: &Connection, message: &ChatMessage) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO chat_messages (id, user_id, role, content, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            message.id.to_string(),
            message.user_id.to_string(),
            message.role.as_str(),
            message.content,
            message.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Full transcript in creation order. Timestamps have second precision, so
/// rowid breaks same-second ties.
pub fn list_chat_messages(
    conn: &Connection,
    user_id: &Uuid,
) -> Result<Vec<ChatMessage>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, role, content, created_at
         FROM chat_messages
         WHERE user_id = ?1
         ORDER BY created_at ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![user_id.to_string()], row_to_chat_message)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}

fn row_to_chat_message(row: &rusqlite::Row) -> Result<ChatMessage, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let user_str: String = row.get(1)?;
    let role_str: String = row.get(2)?;
    let created_str: String = row.get(4)?;

    Ok(ChatMessage {
        id: Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        user_id: Uuid::parse_str(&user_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?,
        role: MessageRole::from_str(&role_str).unwrap_or(MessageRole::User),
        content: row.get(3)?,
        created_at: NaiveDateTime::parse_from_str(&created_str, DATETIME_FMT).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::seed_profile;
    use crate::db::sqlite::open_memory_database;

    fn make_message(user_id: Uuid, role: MessageRole, content: &str) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4(),
            user_id,
            role,
            content: content.into(),
            created_at: chrono::Local::now().naive_local(),
        }
    }

    #[test]
    fn transcript_preserves_creation_order() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);

        insert_chat_message(&conn, &make_message(user, MessageRole::User, "hello")).unwrap();
        insert_chat_message(&conn, &make_message(user, MessageRole::Assistant, "Hello!")).unwrap();
        insert_chat_message(&conn, &make_message(user, MessageRole::User, "thanks")).unwrap();

        let transcript = list_chat_messages(&conn, &user).unwrap();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].content, "hello");
        assert_eq!(transcript[1].role, MessageRole::Assistant);
        assert_eq!(transcript[2].content, "thanks");
    }

    #[test]
    fn transcript_scoped_per_user() {
        let conn = open_memory_database().unwrap();
        let user_a = seed_profile(&conn);
        let user_b = seed_profile(&conn);
        insert_chat_message(&conn, &make_message(user_a, MessageRole::User, "hi")).unwrap();

        assert_eq!(list_chat_messages(&conn, &user_a).unwrap().len(), 1);
        assert!(list_chat_messages(&conn, &user_b).unwrap().is_empty());
    }
}
