//! Data generation utilities useful for testing and benchmarking.
use rand::distr::Alphanumeric;
use rand::Rng;
use shelf_core::{format_id, ProductRecord, ID_MAX, ID_MIN};
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates a vector of **unique** random values of the type, in generation order.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Vec<Self>
    where
        Self: Hash + Eq + Clone,
    {
        let mut seen = HashSet::new();
        let mut values = Vec::with_capacity(size);
        while values.len() < size {
            let value = Self::generate(rng, params);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        values
    }
}

/// Parameters for [`Generate`] implementations that generate numeric values.
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    /// Creates a new instance of [`NumParams`] with the specified minimum and maximum values.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type
            {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_num!(u32, i64, u64);

/// Parameters for [`Generate`] implementations that generate strings.
pub struct StringParams {
    min_length: usize,
    max_length: usize,
}

impl StringParams {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for StringParams {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 32,
        }
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        let iter = rng.sample_iter(&Alphanumeric);
        iter.take(length).map(char::from).collect()
    }
}

/// Parameters for generating [`ProductRecord`]s.
pub struct RecordParams {
    /// Range of identifier payloads, both ends inclusive.
    pub payload: NumParams<u64>,
    pub text: StringParams,
    pub quantity: NumParams<i64>,
}

impl Default for RecordParams {
    fn default() -> Self {
        Self {
            payload: NumParams::new(ID_MIN, ID_MAX),
            text: StringParams::default(),
            quantity: NumParams::new(0, 1000),
        }
    }
}

impl<R: Rng> Generate<R> for ProductRecord {
    type GenerateParams = RecordParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let payload = u64::generate(rng, &params.payload);
        let name = String::generate(rng, &params.text);
        let category = String::generate(rng, &params.text);
        let price = (rng.random_range(0.0..1000.0_f64) * 100.0).round() / 100.0;
        let quantity = i64::generate(rng, &params.quantity);
        ProductRecord::new(format_id(payload), name, category, price, quantity)
    }
}

/// Generates `size` records with pairwise distinct identifiers.
///
/// Payloads are drawn from `params.payload`, so narrowing it is a cheap way to force collisions.
pub fn generate_records<R: Rng>(
    rng: &mut R,
    params: &RecordParams,
    size: usize,
) -> Vec<ProductRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(size);
    while records.len() < size {
        let record = ProductRecord::generate(rng, params);
        if seen.insert(record.id().to_owned()) {
            records.push(record);
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use shelf_core::is_well_formed;

    #[test]
    fn test_generate_records_unique_and_well_formed() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let records = generate_records(&mut rng, &RecordParams::default(), 500);

        let ids: HashSet<&str> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), 500);
        assert!(records.iter().all(|r| is_well_formed(r.id())));
    }

    #[test]
    fn test_generate_records_respects_payload_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let params = RecordParams {
            payload: NumParams::new(100, 120),
            ..Default::default()
        };
        let records = generate_records(&mut rng, &params, 21);

        for record in &records {
            let payload: u64 = record.id()[1..].parse().unwrap();
            assert!((100..=120).contains(&payload), "Record: {:?}", record);
        }
    }

    #[test]
    fn test_generate_many_unique() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let values = u32::generate_many(&mut rng, &NumParams::new(0, 9), 10);

        let unique: HashSet<u32> = values.iter().copied().collect();
        assert_eq!(unique.len(), 10);
    }
}
