//! Third-card rules (Punto Banco tableau).

/// Player takes a third card on 0-5 and stands on 6-7. Naturals are handled
/// before this is consulted.
pub fn player_draws(player_total: u8) -> bool {
    player_total <= 5
}

/// Banker's tableau, keyed on the banker total and the point value of the
/// player's third card (`None` when the player stood).
pub fn banker_draws(banker_total: u8, player_third: Option<u8>) -> bool {
    debug_assert!(banker_total <= 9);
    debug_assert!(player_third.map_or(true, |p3| p3 <= 9));
    match (banker_total, player_third) {
        (0..=5, None) => true,
        (_, None) => false,
        (0..=2, Some(_)) => true,
        (3, Some(p3)) => p3 != 8,
        (4, Some(p3)) => (2..=7).contains(&p3),
        (5, Some(p3)) => (4..=7).contains(&p3),
        (6, Some(p3)) => matches!(p3, 6 | 7),
        (_, Some(_)) => false,
    }
}
