//! Generation of unique product identifiers.
use rand::Rng;
use shelf_core::{format_id, is_well_formed, ID_MAX, ID_MIN};
use std::collections::HashSet;

/// Generate an identifier `P` + 8 digits that isn't in `existing`, and record it there.
///
/// The payload is drawn uniformly from `[ID_MIN, ID_MAX]` and redrawn on every clash. The retry
/// loop is unbounded: it only terminates if `existing` leaves part of the ~9×10^7 payloads free,
/// which any realistic inventory does.
pub fn generate_identifier<R: Rng>(rng: &mut R, existing: &mut HashSet<String>) -> String {
    loop {
        let id = format_id(rng.random_range(ID_MIN..=ID_MAX));
        debug_assert!(is_well_formed(&id), "Generated a malformed identifier {:?}", id);
        if !existing.contains(&id) {
            existing.insert(id.clone());
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_identifiers_are_unique_and_well_formed() {
        let mut rng = ChaCha20Rng::from_os_rng();
        let mut existing = HashSet::new();

        let ids: Vec<String> = (0..10_000)
            .map(|_| generate_identifier(&mut rng, &mut existing))
            .collect();

        assert_eq!(existing.len(), ids.len());
        for id in &ids {
            assert!(is_well_formed(id), "Identifier: {}", id);
            assert!((ID_MIN..=ID_MAX).contains(&id[1..].parse::<u64>().unwrap()));
            assert!(existing.contains(id));
        }
    }

    #[test]
    fn test_skips_existing() {
        let mut existing = HashSet::new();
        let first = generate_identifier(&mut ChaCha20Rng::seed_from_u64(5), &mut existing);

        // The same stream would yield `first` again, the generator has to skip it.
        let second = generate_identifier(&mut ChaCha20Rng::seed_from_u64(5), &mut existing);

        assert_ne!(first, second);
        assert_eq!(existing.len(), 2);
    }

    #[test]
    fn test_respects_foreign_identifiers() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let expected = generate_identifier(&mut rng.clone(), &mut HashSet::new());

        let mut existing = HashSet::from([expected.clone()]);
        let id = generate_identifier(&mut rng, &mut existing);

        assert_ne!(id, expected);
        assert!(existing.contains(&expected));
    }
}
