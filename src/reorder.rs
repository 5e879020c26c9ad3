//! Card Reorder Engine
//!
//! Pure computation of drag-and-drop card moves. Given the full card
//! snapshot of a board, the dragged card and the drop target, computes the
//! sparse set of column/position reassignments that reflect the move.
//! Invalid input (unknown card, unknown target) degrades to an empty map;
//! callers treat "no changes" as "nothing to do".

use std::collections::HashMap;

use leptos_dragdrop::DropTarget;

use crate::models::{Card, CardPlacement};

/// Compute the placements for moving `active_card_id` to `target`.
///
/// Only cards whose column or position actually changed appear in the
/// result, so callers can skip redundant writes. The dragged card itself is
/// present whenever its column changed, even if its numeric position
/// happens to match its old one.
pub fn compute_reorder(
    cards: &[Card],
    active_card_id: u32,
    target: DropTarget,
) -> HashMap<u32, CardPlacement> {
    let mut updates = HashMap::new();

    let Some(active) = cards.iter().find(|c| c.id == active_card_id) else {
        return updates;
    };

    // Partition into per-column lists ordered by current position.
    // The sort is stable, so equal positions keep their input order.
    let mut columns: HashMap<u32, Vec<Card>> = HashMap::new();
    for card in cards {
        columns.entry(card.column_id).or_default().push(card.clone());
    }
    for list in columns.values_mut() {
        list.sort_by_key(|c| c.position);
    }

    // Resolve destination column and intended insertion index. The index is
    // taken before the dragged card is removed, so a self-drop lands back
    // on its own slot.
    let (dest_column_id, insert_index) = match target {
        DropTarget::Card(target_card_id) => {
            let Some(target_card) = cards.iter().find(|c| c.id == target_card_id) else {
                return updates;
            };
            let list = &columns[&target_card.column_id];
            let index = list
                .iter()
                .position(|c| c.id == target_card_id)
                .unwrap_or(list.len());
            (target_card.column_id, index)
        }
        // A column target comes from a rendered column, so it is trusted
        // even when no card of the snapshot lives there yet
        DropTarget::Column(column_id) => {
            let len = columns.get(&column_id).map_or(0, |l| l.len());
            (column_id, len)
        }
    };

    let source_column_id = active.column_id;

    // Remove the dragged card from its source list
    if let Some(source) = columns.get_mut(&source_column_id) {
        source.retain(|c| c.id != active_card_id);
    }

    // Insert it into the destination list, clamped to the post-removal length
    let mut moved = active.clone();
    moved.column_id = dest_column_id;
    let dest = columns.entry(dest_column_id).or_default();
    let index = insert_index.min(dest.len());
    dest.insert(index, moved);

    // Re-derive positions for the affected columns and emit every card
    // whose (column, position) pair changed
    let original: HashMap<u32, (u32, i32)> = cards
        .iter()
        .map(|c| (c.id, (c.column_id, c.position)))
        .collect();

    let mut affected = vec![dest_column_id];
    if source_column_id != dest_column_id {
        affected.push(source_column_id);
    }
    for column_id in affected {
        let Some(list) = columns.get(&column_id) else {
            continue;
        };
        for (i, card) in list.iter().enumerate() {
            let position = i as i32;
            if original.get(&card.id) != Some(&(column_id, position)) {
                updates.insert(
                    card.id,
                    CardPlacement {
                        card_id: card.id,
                        column_id,
                        position,
                    },
                );
            }
        }
    }

    updates
}

/// Apply placements to a snapshot copy.
///
/// Used for the drag-over preview and the optimistic store update.
/// Positions are absolute, so applying twice equals applying once.
pub fn apply_placements(cards: &[Card], updates: &HashMap<u32, CardPlacement>) -> Vec<Card> {
    let mut next: Vec<Card> = cards.to_vec();
    for card in &mut next {
        if let Some(placement) = updates.get(&card.id) {
            card.column_id = placement.column_id;
            card.position = placement.position;
        }
    }
    next.sort_by(|a, b| (a.column_id, a.position).cmp(&(b.column_id, b.position)));
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODO: u32 = 10;
    const DOING: u32 = 20;
    const DONE: u32 = 30;

    fn make_card(id: u32, column_id: u32, position: i32) -> Card {
        Card {
            id,
            column_id,
            board_id: 1,
            title: format!("Card {}", id),
            description: None,
            due_date: None,
            position,
            created_at: None,
            updated_at: None,
        }
    }

    /// a@todo:0, b@todo:1, c@doing:0, d@doing:1
    fn two_column_board() -> Vec<Card> {
        vec![
            make_card(1, TODO, 0),
            make_card(2, TODO, 1),
            make_card(3, DOING, 0),
            make_card(4, DOING, 1),
        ]
    }

    /// Sorted positions of one column, for checking the contiguity invariant
    fn column_positions(cards: &[Card], column_id: u32) -> Vec<i32> {
        let mut positions: Vec<i32> = cards
            .iter()
            .filter(|c| c.column_id == column_id)
            .map(|c| c.position)
            .collect();
        positions.sort();
        positions
    }

    #[test]
    fn test_moves_card_between_columns_and_updates_positions() {
        let cards = two_column_board();

        // Move b onto c: b inserted before c in doing
        let updates = compute_reorder(&cards, 2, DropTarget::Card(3));

        assert_eq!(updates.len(), 3);
        assert_eq!(updates[&2], CardPlacement { card_id: 2, column_id: DOING, position: 0 });
        assert_eq!(updates[&3], CardPlacement { card_id: 3, column_id: DOING, position: 1 });
        assert_eq!(updates[&4], CardPlacement { card_id: 4, column_id: DOING, position: 2 });
        // a keeps todo:0, so it is not emitted
        assert!(!updates.contains_key(&1));
    }

    #[test]
    fn test_within_column_reorder() {
        let cards = vec![
            make_card(1, TODO, 0),
            make_card(2, TODO, 1),
            make_card(3, TODO, 2),
        ];

        // Move c onto a: new order [c, a, b]
        let updates = compute_reorder(&cards, 3, DropTarget::Card(1));

        assert_eq!(updates.len(), 3);
        assert_eq!(updates[&3].position, 0);
        assert_eq!(updates[&1].position, 1);
        assert_eq!(updates[&2].position, 2);
        assert!(updates.values().all(|p| p.column_id == TODO));
    }

    #[test]
    fn test_append_to_empty_column() {
        let cards = vec![make_card(1, TODO, 0)];

        let updates = compute_reorder(&cards, 1, DropTarget::Column(DONE));

        // Position 0 is numerically unchanged, but the column changed,
        // so the moved card must still be emitted
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[&1], CardPlacement { card_id: 1, column_id: DONE, position: 0 });
    }

    #[test]
    fn test_drop_on_own_column_appends_at_end() {
        let cards = two_column_board();

        // Drop a onto the empty area of its own column: a goes last
        let updates = compute_reorder(&cards, 1, DropTarget::Column(TODO));

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[&1].position, 1);
        assert_eq!(updates[&2].position, 0);
    }

    #[test]
    fn test_self_drop_is_noop() {
        let cards = two_column_board();

        for id in [1, 2, 3, 4] {
            let updates = compute_reorder(&cards, id, DropTarget::Card(id));
            assert!(updates.is_empty(), "self-drop of {} must be a no-op", id);
        }
    }

    #[test]
    fn test_unknown_active_card_is_noop() {
        let cards = two_column_board();
        let updates = compute_reorder(&cards, 999, DropTarget::Card(3));
        assert!(updates.is_empty());
    }

    #[test]
    fn test_unknown_target_card_is_noop() {
        let cards = two_column_board();
        let updates = compute_reorder(&cards, 1, DropTarget::Card(999));
        assert!(updates.is_empty());
    }

    #[test]
    fn test_empty_snapshot_is_noop() {
        let updates = compute_reorder(&[], 1, DropTarget::Column(TODO));
        assert!(updates.is_empty());
    }

    #[test]
    fn test_position_contiguity_after_apply() {
        let cards = two_column_board();

        let updates = compute_reorder(&cards, 2, DropTarget::Card(3));
        let next = apply_placements(&cards, &updates);

        assert_eq!(column_positions(&next, TODO), vec![0]);
        assert_eq!(column_positions(&next, DOING), vec![0, 1, 2]);
    }

    #[test]
    fn test_contiguity_holds_across_chained_moves() {
        let mut cards = vec![
            make_card(1, TODO, 0),
            make_card(2, TODO, 1),
            make_card(3, TODO, 2),
            make_card(4, DOING, 0),
        ];

        let moves = [
            (3, DropTarget::Card(4)),
            (1, DropTarget::Column(DONE)),
            (4, DropTarget::Card(2)),
        ];
        for (active, target) in moves {
            let updates = compute_reorder(&cards, active, target);
            cards = apply_placements(&cards, &updates);
            for column_id in [TODO, DOING, DONE] {
                let positions = column_positions(&cards, column_id);
                let expected: Vec<i32> = (0..positions.len() as i32).collect();
                assert_eq!(positions, expected, "column {} not contiguous", column_id);
            }
        }
    }

    #[test]
    fn test_same_input_yields_same_output() {
        let cards = two_column_board();

        let first = compute_reorder(&cards, 2, DropTarget::Card(3));
        let second = compute_reorder(&cards, 2, DropTarget::Card(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_applying_twice_equals_applying_once() {
        let cards = two_column_board();

        let updates = compute_reorder(&cards, 2, DropTarget::Card(3));
        let once = apply_placements(&cards, &updates);
        let twice = apply_placements(&once, &updates);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_thrashing_after_apply() {
        let cards = two_column_board();

        // After the move lands, the pointer hovers the moved card itself
        let updates = compute_reorder(&cards, 2, DropTarget::Card(3));
        let next = apply_placements(&cards, &updates);

        let again = compute_reorder(&next, 2, DropTarget::Card(2));
        assert!(again.is_empty());
    }

    #[test]
    fn test_payload_untouched_by_apply() {
        let mut cards = two_column_board();
        cards[1].description = Some("keep me".to_string());
        cards[1].due_date = Some("2026-12-01".to_string());

        let updates = compute_reorder(&cards, 2, DropTarget::Card(3));
        let next = apply_placements(&cards, &updates);

        let moved = next.iter().find(|c| c.id == 2).unwrap();
        assert_eq!(moved.description.as_deref(), Some("keep me"));
        assert_eq!(moved.due_date.as_deref(), Some("2026-12-01"));
        assert_eq!(moved.title, "Card 2");
    }
}
