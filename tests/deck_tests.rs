//! Deck integration tests: construction, transfers between decks and the
//! two-player demo scenario.

use card_deck::{Card, CardFace, Deck, DeckError, Rank, Suit};

fn faces(deck: &Deck) -> Vec<CardFace> {
    deck.iter().map(Card::face).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_standard_deck_has_52_distinct_orders() {
    let deck = Deck::standard(0, "Std").unwrap();
    assert_eq!(deck.len(), 52);

    let mut orders: Vec<u32> = deck.iter().map(Card::order).collect();
    orders.sort_unstable();
    orders.dedup();
    assert_eq!(orders.len(), 52, "order keys must be pairwise distinct");
}

#[test]
fn test_shuffled_standard_deck_still_has_distinct_orders() {
    let mut deck = Deck::standard(0, "Std").unwrap();
    deck.shuffle_default();

    let mut orders: Vec<u32> = deck.iter().map(Card::order).collect();
    orders.sort_unstable();
    orders.dedup();
    assert_eq!(orders.len(), 52);
}

#[test]
fn test_standard_deck_joker_counts() {
    for jokers in [0, 1, 2, 5] {
        let deck = Deck::standard(jokers, "Std").unwrap();
        assert_eq!(deck.len(), 52 + jokers);
        assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), jokers);
    }
}

#[test]
fn test_standard_deck_is_deterministic() {
    let a = Deck::standard(2, "A").unwrap();
    let b = Deck::standard(2, "B").unwrap();
    assert_eq!(faces(&a), faces(&b));
}

#[test]
fn test_standard_deck_points() {
    let deck = Deck::standard(1, "Std").unwrap();
    let total: u32 = deck.iter().map(Card::point).sum();
    // 4 suits * (1 + ... + 13) + one joker
    assert_eq!(total, 4 * 91 + 100);
}

#[test]
fn test_name_validation() {
    assert!(Deck::new("").is_ok());
    assert!(Deck::new("Player 1").is_ok());
    assert!(Deck::new("ten chars!").is_ok());

    let err = Deck::new("eleven char").unwrap_err();
    assert!(matches!(err, DeckError::InvalidArgument(_)));
    assert!(Deck::from_cards("eleven char", [Card::joker()]).is_err());
}

// =============================================================================
// Transfers
// =============================================================================

#[test]
fn test_add_top_remove_top_roundtrip() {
    let mut deck = Deck::standard(0, "Std").unwrap();
    let len = deck.len();

    let card = Card::playing(Rank::Five, Suit::Spades);
    let id = card.id();
    deck.add_top(card);
    assert_eq!(deck.len(), len + 1);

    let back = deck.remove_top().unwrap();
    assert_eq!(back.id(), id);
    assert_eq!(deck.len(), len);
}

#[test]
fn test_move_every_card() {
    let mut from = Deck::standard(2, "From").unwrap();
    let mut to = Deck::new("To").unwrap();

    let ids: Vec<_> = from.iter().map(Card::id).collect();
    for id in &ids {
        from.move_card(*id, &mut to).unwrap();
    }

    assert!(from.is_empty());
    let moved: Vec<_> = to.iter().map(Card::id).collect();
    assert_eq!(moved, ids);
}

#[test]
fn test_move_twice_fails_second_time() {
    let mut a = Deck::standard(0, "A").unwrap();
    let mut b = Deck::new("B").unwrap();
    let id = a[0].id();

    a.move_card(id, &mut b).unwrap();
    assert_eq!(a.move_card(id, &mut b), Err(DeckError::NotFound(id)));
    assert_eq!(b.len(), 1);
}

#[test]
fn test_errors_leave_deck_untouched() {
    let mut deck = Deck::new("Empty").unwrap();

    assert_eq!(deck.remove_top().unwrap_err(), DeckError::EmptyDeck);
    assert_eq!(
        deck.peek(0).unwrap_err(),
        DeckError::IndexOutOfRange { index: 0, len: 0 }
    );
    assert!(deck.is_empty());
}

// =============================================================================
// Demo Scenario
// =============================================================================

#[test]
fn test_two_aces_ordered_hearts_first() {
    let deck = Deck::from_cards(
        "Player 1",
        [Card::playing(Rank::Ace, Suit::Clubs), Card::playing(Rank::Ace, Suit::Hearts)],
    )
    .unwrap();

    assert_eq!(
        faces(&deck),
        vec![
            CardFace::playing(Rank::Ace, Suit::Hearts),
            CardFace::playing(Rank::Ace, Suit::Clubs),
        ]
    );
}

#[test]
fn test_transfer_between_players() {
    let mut player1 = Deck::from_cards(
        "Player 1",
        [Card::playing(Rank::Ace, Suit::Clubs), Card::playing(Rank::Ace, Suit::Hearts)],
    )
    .unwrap();
    let mut player2 = Deck::new("Player 2").unwrap();

    let first = player1.remove_top().unwrap();
    let second = player1.remove_top().unwrap();
    let (first_id, second_id) = (first.id(), second.id());
    player2.add_top(first);
    player2.add_top(second);

    assert!(player1.is_empty());
    assert_eq!(player1.render(true), "Player 1  [---]\n");

    // Reverse of the source order: the top card left first.
    let ids: Vec<_> = player2.iter().map(Card::id).collect();
    assert_eq!(ids, vec![first_id, second_id]);
    assert_eq!(player2.render(true), "Player 2  [♣ A][♥ A]\n");
}
