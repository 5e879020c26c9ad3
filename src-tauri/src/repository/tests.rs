//! Repository Integration Tests
//!
//! Tests against an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{Board, Card, CardPlacement, Column, HistoryAction};
    use crate::repository::{
        init_db, BoardRepository, CardPositioningOperations, CardRepository, ColumnRepository,
        HistoryRepository, OrganizationRepository, Repository,
    };
    use rusqlite::Connection;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    async fn setup_test_db() -> Arc<Mutex<Option<Connection>>> {
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        db_state.conn
    }

    /// Seed one board with default-style columns, returning (board, columns)
    async fn setup_board(conn: &Arc<Mutex<Option<Connection>>>) -> (Board, Vec<Column>) {
        let board_repo = BoardRepository::new(conn.clone());
        let column_repo = ColumnRepository::new(conn.clone());

        let board = board_repo
            .create(&Board::new(0, 1, "Sprint".to_string()))
            .await
            .expect("Failed to create board");

        let mut columns = Vec::new();
        for title in ["To Do", "Doing", "Done"] {
            let column = column_repo
                .create(&Column::new(0, board.id, title.to_string(), 0))
                .await
                .expect("Failed to create column");
            columns.push(column);
        }
        (board, columns)
    }

    #[tokio::test]
    async fn test_default_organization_seeded() {
        let conn = setup_test_db().await;
        let repo = OrganizationRepository::new(conn);

        let organizations = repo.list().await.expect("List failed");
        assert_eq!(organizations.len(), 1);
        assert_eq!(organizations[0].id, 1);
        assert_eq!(organizations[0].name, "Personal");
    }

    #[tokio::test]
    async fn test_default_organization_protected() {
        let conn = setup_test_db().await;
        let repo = OrganizationRepository::new(conn);

        assert!(repo.delete(1).await.is_err());
        assert!(repo.rename(1, "Hacked").await.is_err());
    }

    #[tokio::test]
    async fn test_create_and_delete_organization() {
        let conn = setup_test_db().await;
        let repo = OrganizationRepository::new(conn);

        let org = repo.create("Acme").await.expect("Create failed");
        assert!(org.id > 1);

        repo.rename(org.id, "Acme Corp").await.expect("Rename failed");
        let organizations = repo.list().await.unwrap();
        assert_eq!(organizations[1].name, "Acme Corp");

        repo.delete(org.id).await.expect("Delete failed");
        let organizations = repo.list().await.unwrap();
        assert_eq!(organizations.len(), 1);
    }

    #[tokio::test]
    async fn test_column_positions_are_sequential() {
        let conn = setup_test_db().await;
        let (_, columns) = setup_board(&conn).await;

        let positions: Vec<i32> = columns.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_delete_column_reindexes_remainder() {
        let conn = setup_test_db().await;
        let (board, columns) = setup_board(&conn).await;
        let column_repo = ColumnRepository::new(conn.clone());

        column_repo.delete(columns[0].id).await.expect("Delete failed");

        let remaining = column_repo.list_by_board(board.id).await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].title, "Doing");
        assert_eq!(remaining[0].position, 0);
        assert_eq!(remaining[1].position, 1);
    }

    #[tokio::test]
    async fn test_create_card_appends_to_column() {
        let conn = setup_test_db().await;
        let (board, columns) = setup_board(&conn).await;
        let card_repo = CardRepository::new(conn.clone());

        let first = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "First".to_string()))
            .await
            .unwrap();
        let second = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "Second".to_string()))
            .await
            .unwrap();

        assert_eq!(first.position, 0);
        assert_eq!(second.position, 1);
    }

    #[tokio::test]
    async fn test_update_card_payload() {
        let conn = setup_test_db().await;
        let (board, columns) = setup_board(&conn).await;
        let card_repo = CardRepository::new(conn.clone());

        let mut card = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "Original".to_string()))
            .await
            .unwrap();

        card.title = "Updated".to_string();
        card.description = Some("notes".to_string());
        card.due_date = Some("2026-09-01".to_string());
        card_repo.update(&card).await.expect("Update failed");

        let found = card_repo.find_by_id(card.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Updated");
        assert_eq!(found.description.as_deref(), Some("notes"));
        assert_eq!(found.due_date.as_deref(), Some("2026-09-01"));
    }

    #[tokio::test]
    async fn test_delete_card_closes_position_gap() {
        let conn = setup_test_db().await;
        let (board, columns) = setup_board(&conn).await;
        let card_repo = CardRepository::new(conn.clone());

        let a = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "a".to_string()))
            .await
            .unwrap();
        let _b = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "b".to_string()))
            .await
            .unwrap();
        let _c = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "c".to_string()))
            .await
            .unwrap();

        card_repo.delete(a.id).await.expect("Delete failed");

        let cards = card_repo.list_by_board(board.id).await.unwrap();
        let positions: Vec<i32> = cards.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_apply_placements_moves_across_columns() {
        let conn = setup_test_db().await;
        let (board, columns) = setup_board(&conn).await;
        let card_repo = CardRepository::new(conn.clone());

        let a = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "a".to_string()))
            .await
            .unwrap();
        let b = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "b".to_string()))
            .await
            .unwrap();
        let c = card_repo
            .create(&Card::new(0, columns[1].id, board.id, "c".to_string()))
            .await
            .unwrap();

        // Move b before c: b@doing:0, c@doing:1
        card_repo
            .apply_placements(&[
                CardPlacement { card_id: b.id, column_id: columns[1].id, position: 0 },
                CardPlacement { card_id: c.id, column_id: columns[1].id, position: 1 },
            ])
            .await
            .expect("Placements failed");

        let moved = card_repo.find_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(moved.column_id, columns[1].id);
        assert_eq!(moved.position, 0);

        let untouched = card_repo.find_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(untouched.column_id, columns[0].id);
        assert_eq!(untouched.position, 0);
    }

    #[tokio::test]
    async fn test_apply_placements_unknown_card_rolls_back() {
        let conn = setup_test_db().await;
        let (board, columns) = setup_board(&conn).await;
        let card_repo = CardRepository::new(conn.clone());

        let a = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "a".to_string()))
            .await
            .unwrap();

        let result = card_repo
            .apply_placements(&[
                CardPlacement { card_id: a.id, column_id: columns[1].id, position: 0 },
                CardPlacement { card_id: 9999, column_id: columns[1].id, position: 1 },
            ])
            .await;
        assert!(result.is_err());

        // The whole batch rolled back; a is unchanged
        let unchanged = card_repo.find_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(unchanged.column_id, columns[0].id);
    }

    #[tokio::test]
    async fn test_history_record_and_list() {
        let conn = setup_test_db().await;
        let (board, columns) = setup_board(&conn).await;
        let card_repo = CardRepository::new(conn.clone());
        let history_repo = HistoryRepository::new(conn.clone());

        let card = card_repo
            .create(&Card::new(0, columns[0].id, board.id, "tracked".to_string()))
            .await
            .unwrap();

        history_repo
            .record(card.id, HistoryAction::Created, None, Some(columns[0].id), None)
            .await
            .unwrap();
        history_repo
            .record(card.id, HistoryAction::Moved, Some(columns[0].id), Some(columns[1].id), None)
            .await
            .unwrap();

        let entries = history_repo.list_by_card(card.id).await.unwrap();
        assert_eq!(entries.len(), 2);
        // Newest first
        assert_eq!(entries[0].action, HistoryAction::Moved);
        assert_eq!(entries[0].from_column_id, Some(columns[0].id));
        assert_eq!(entries[0].to_column_id, Some(columns[1].id));
        assert_eq!(entries[1].action, HistoryAction::Created);
    }

    #[tokio::test]
    async fn test_board_delete_cascades() {
        let conn = setup_test_db().await;
        let (board, columns) = setup_board(&conn).await;
        let board_repo = BoardRepository::new(conn.clone());
        let column_repo = ColumnRepository::new(conn.clone());
        let card_repo = CardRepository::new(conn.clone());

        card_repo
            .create(&Card::new(0, columns[0].id, board.id, "gone".to_string()))
            .await
            .unwrap();

        board_repo.delete(board.id).await.expect("Delete failed");

        assert!(column_repo.list_by_board(board.id).await.unwrap().is_empty());
        assert!(card_repo.list_by_board(board.id).await.unwrap().is_empty());
    }
}
