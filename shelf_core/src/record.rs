//! Inventory record type and its partial update.
use std::fmt::{Display, Formatter};

/// A single inventory record keyed by its identifier.
///
/// The identifier never changes after construction. The other fields can only be changed through
/// a mutable borrow, which callers only get from the table that owns the record.
///
/// Neither `price` nor `quantity` is range-checked: a negative value is stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    id: String,
    name: String,
    category: String,
    price: f64,
    quantity: i64,
}

impl ProductRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replace every field except the identifier with the ones of `other`.
    pub fn overwrite_with(&mut self, other: ProductRecord) {
        debug_assert_eq!(self.id, other.id, "Overwriting a record with a foreign identifier.");
        self.name = other.name;
        self.category = other.category;
        self.price = other.price;
        self.quantity = other.quantity;
    }

    /// Apply the fields present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: RecordUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
    }
}

impl Display for ProductRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Type: {}, Price: RM{:.2}, Qty: {}",
            self.id, self.name, self.category, self.price, self.quantity
        )
    }
}

/// Partial update of a [`ProductRecord`].
///
/// Every field is independently optional, `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl RecordUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let record = ProductRecord::new("P12345678", "Baby Soap", "Bathing", 12.5, 40);
        assert_eq!(
            record.to_string(),
            "ID: P12345678, Name: Baby Soap, Type: Bathing, Price: RM12.50, Qty: 40"
        );
    }

    #[test]
    fn test_apply_partial_update() {
        let mut record = ProductRecord::new("P12345678", "Baby Soap", "Bathing", 12.5, 40);
        record.apply(RecordUpdate::new().quantity(5));

        assert_eq!(record.quantity(), 5);
        assert_eq!(record.name(), "Baby Soap");
        assert_eq!(record.category(), "Bathing");
        assert_eq!(record.price(), 12.5);

        record.apply(RecordUpdate::new().name("Baby Oil").category("Healthcare").price(-1.0));
        assert_eq!(record.name(), "Baby Oil");
        assert_eq!(record.category(), "Healthcare");
        assert_eq!(record.price(), -1.0);
        assert_eq!(record.id(), "P12345678");
    }

    #[test]
    fn test_empty_update_is_noop() {
        let original = ProductRecord::new("P12345678", "Baby Soap", "Bathing", 12.5, 40);
        let mut record = original.clone();
        let update = RecordUpdate::new();

        assert_eq!(update, RecordUpdate::default());
        record.apply(update);
        assert_eq!(record, original);
    }

    #[test]
    fn test_overwrite_keeps_identifier() {
        let mut record = ProductRecord::new("P12345678", "Baby Soap", "Bathing", 12.5, 40);
        record.overwrite_with(ProductRecord::new("P12345678", "Baby Bib", "Clothing", 3.0, 1));

        assert_eq!(record, ProductRecord::new("P12345678", "Baby Bib", "Clothing", 3.0, 1));
    }
}
