use stockroom_core::{DomainError, DomainResult, Entity, PartNumber};

use crate::part::{Part, PartUpdate};

/// Ordered in-memory collection of parts.
///
/// Lookups are linear scans over a `Vec`, which keeps iteration in insertion
/// order for serialization. Part numbers are unique at all times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    parts: Vec<Part>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-parsed parts, rejecting duplicate part numbers.
    pub fn from_parts(parts: impl IntoIterator<Item = Part>) -> DomainResult<Self> {
        let mut store = Self::new();
        for part in parts {
            store.add(part)?;
        }
        Ok(store)
    }

    /// Replace the current contents with parsed inventory records.
    ///
    /// The load is all-or-nothing: on the first malformed (including blank) or
    /// duplicate record the error is returned and the store keeps its previous
    /// contents. Returns the number of parts loaded.
    pub fn load<I, S>(&mut self, records: I) -> DomainResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parts = Vec::new();
        for record in records {
            parts.push(Part::from_record(record.as_ref())?);
        }

        let loaded = Self::from_parts(parts)?;
        *self = loaded;
        Ok(self.len())
    }

    pub fn find(&self, part_number: &PartNumber) -> Option<&Part> {
        self.parts.iter().find(|p| p.id() == part_number)
    }

    pub fn exists(&self, part_number: &PartNumber) -> bool {
        self.position(part_number).is_some()
    }

    /// Append a new part.
    pub fn add(&mut self, part: Part) -> DomainResult<()> {
        if self.exists(part.part_number()) {
            return Err(DomainError::duplicate(part.part_number().clone()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Replace the matched part's slot with an updated record and return it.
    pub fn update(&mut self, part_number: &PartNumber, update: PartUpdate) -> DomainResult<&Part> {
        let idx = self
            .position(part_number)
            .ok_or_else(|| DomainError::not_found(part_number.clone()))?;

        self.parts[idx] = self.parts[idx].with_update(update);
        Ok(&self.parts[idx])
    }

    /// Remove a part, preserving the order of the remaining ones.
    pub fn remove(&mut self, part_number: &PartNumber) -> DomainResult<Part> {
        let idx = self
            .position(part_number)
            .ok_or_else(|| DomainError::not_found(part_number.clone()))?;
        Ok(self.parts.remove(idx))
    }

    /// Read-only view in store order.
    pub fn snapshot(&self) -> &[Part] {
        &self.parts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Inventory records in store order.
    pub fn to_records(&self) -> Vec<String> {
        self.parts.iter().map(Part::to_record).collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn clear(&mut self) {
        self.parts.clear();
    }

    fn position(&self, part_number: &PartNumber) -> Option<usize> {
        self.parts.iter().position(|p| p.id() == part_number)
    }
}

impl<'a> IntoIterator for &'a InventoryStore {
    type Item = &'a Part;
    type IntoIter = core::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Price;

    fn pn(s: &str) -> PartNumber {
        PartNumber::new(s).unwrap()
    }

    fn part(number: &str, description: &str, price: &str) -> Part {
        Part::new(pn(number), description, Price::parse(price).unwrap())
    }

    fn seeded() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.load(["P1,Widget,9.99", "P2,Gadget,4.50"]).unwrap();
        store
    }

    #[test]
    fn load_preserves_record_order() {
        let store = seeded();
        let numbers: Vec<&str> = store.iter().map(|p| p.part_number().as_str()).collect();
        assert_eq!(numbers, vec!["P1", "P2"]);
    }

    #[test]
    fn load_rejects_blank_records() {
        let mut store = InventoryStore::new();
        let err = store.load(["P1,Widget,9.99", "", "P2,Gadget,4.50"]).unwrap_err();
        match err {
            DomainError::Format(_) => {}
            _ => panic!("Expected Format error for blank record"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn load_keeps_description_padding() {
        let mut store = InventoryStore::new();
        store.load(["P1, Blue widget ,9.99"]).unwrap();
        assert_eq!(store.find(&pn("P1")).unwrap().description(), " Blue widget ");
        assert_eq!(store.to_records(), vec!["P1, Blue widget ,9.99"]);
    }

    #[test]
    fn load_replaces_existing_contents() {
        let mut store = seeded();
        store.load(["P9,Bolt,0.10"]).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.exists(&pn("P1")));
        assert!(store.exists(&pn("P9")));
    }

    #[test]
    fn failed_load_keeps_previous_contents() {
        let mut store = seeded();
        let before = store.clone();

        let err = store.load(["P7,Nut,1.00", "P8,Washer,-2.00"]).unwrap_err();
        match err {
            DomainError::Format(_) => {}
            _ => panic!("Expected Format error for negative price"),
        }
        assert_eq!(store, before);
    }

    #[test]
    fn load_rejects_duplicate_part_numbers() {
        let mut store = InventoryStore::new();
        let err = store.load(["P1,Widget,9.99", "P1,Other,1.00"]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateKey(pn("P1")));
        assert!(store.is_empty());
    }

    #[test]
    fn find_returns_matching_part() {
        let store = seeded();
        assert_eq!(store.find(&pn("P2")).unwrap().description(), "Gadget");
        assert!(store.find(&pn("P3")).is_none());
    }

    #[test]
    fn add_rejects_duplicates_without_mutation() {
        let mut store = seeded();
        let before = store.clone();

        let err = store.add(part("P1", "Other", "1.00")).unwrap_err();
        assert_eq!(err, DomainError::DuplicateKey(pn("P1")));
        assert_eq!(store, before);
    }

    #[test]
    fn update_replaces_only_the_target() {
        let mut store = seeded();
        let updated = store
            .update(&pn("P1"), PartUpdate::Price(Price::parse("10.99").unwrap()))
            .unwrap();
        assert_eq!(updated.price().value(), 10.99);

        assert_eq!(store.find(&pn("P2")).unwrap(), &part("P2", "Gadget", "4.50"));
        assert_eq!(store.snapshot()[0].part_number().as_str(), "P1");
    }

    #[test]
    fn update_missing_part_is_not_found() {
        let mut store = seeded();
        let err = store
            .update(&pn("P9"), PartUpdate::Description("x".to_string()))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound(pn("P9")));
    }

    #[test]
    fn remove_preserves_order_of_remaining_parts() {
        let mut store = seeded();
        store.add(part("P3", "Gizmo", "2.00")).unwrap();

        let removed = store.remove(&pn("P2")).unwrap();
        assert_eq!(removed.description(), "Gadget");
        assert_eq!(store.to_records(), vec!["P1,Widget,9.99", "P3,Gizmo,2.0"]);

        assert_eq!(store.remove(&pn("P2")).unwrap_err(), DomainError::NotFound(pn("P2")));
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = seeded();
        store.clear();
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::collection::{btree_set, vec};
        use proptest::prelude::*;

        proptest! {
            /// Property: adding distinct part numbers grows the store by exactly that many
            /// and keeps insertion order.
            #[test]
            fn distinct_adds_are_all_present(numbers in btree_set("[A-Z][A-Z0-9]{0,7}", 0..40)) {
                let mut store = InventoryStore::new();
                let numbers: Vec<String> = numbers.into_iter().collect();
                for n in &numbers {
                    store.add(part(n, "item", "1.0")).unwrap();
                }

                prop_assert_eq!(store.len(), numbers.len());
                for (stored, n) in store.iter().zip(&numbers) {
                    prop_assert_eq!(stored.part_number().as_str(), n.as_str());
                    prop_assert!(store.exists(&pn(n)));
                }
            }

            /// Property: part numbers stay unique whatever the add order.
            #[test]
            fn part_numbers_stay_unique(numbers in vec("[A-C][0-2]", 0..60)) {
                let mut store = InventoryStore::new();
                for n in &numbers {
                    let _ = store.add(part(n, "item", "1.0"));
                }

                let mut seen = std::collections::HashSet::new();
                for p in store.iter() {
                    prop_assert!(seen.insert(p.part_number().clone()));
                }
            }
        }
    }
}
