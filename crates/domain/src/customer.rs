//! Customer aggregate.

use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::{DomainError, Item, Person, Result, Transaction};

/// A customer of the tavern.
///
/// The `Person` is the root entity, so the person's ID is the identity of
/// the whole aggregate. A customer owns the items it holds and the history
/// of its transactions; neither is shared with other aggregates.
///
/// `Customer::default()` is the zero value: nil ID, empty name, empty
/// collections. Storage adapters start from it and fill it in through the
/// setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    person: Person,
    products: Vec<Item>,
    transactions: Vec<Transaction>,
}

impl Customer {
    /// Creates a customer with a fresh ID.
    ///
    /// Fails with [`DomainError::InvalidPerson`] when the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidPerson);
        }

        Ok(Self {
            person: Person::new(CustomerId::new(), name),
            products: Vec::new(),
            transactions: Vec::new(),
        })
    }

    pub fn id(&self) -> CustomerId {
        self.person.id
    }

    pub fn set_id(&mut self, id: CustomerId) {
        self.person.id = id;
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.person.name = name.into();
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Items the customer holds, in the order they were added.
    pub fn products(&self) -> &[Item] {
        &self.products
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn add_product(&mut self, item: Item) {
        self.products.push(item);
    }

    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;

    #[test]
    fn test_new_customer_has_name_and_empty_collections() {
        let customer = Customer::new("Donald").unwrap();

        assert_eq!(customer.name(), "Donald");
        assert!(!customer.id().is_nil());
        assert!(customer.products().is_empty());
        assert!(customer.transactions().is_empty());
    }

    #[test]
    fn test_empty_name_is_invalid_person() {
        assert_eq!(Customer::new(""), Err(DomainError::InvalidPerson));
        assert_eq!(Customer::new("   "), Err(DomainError::InvalidPerson));
    }

    #[test]
    fn test_every_customer_gets_its_own_id() {
        let ids: std::collections::HashSet<_> = (0..100)
            .map(|i| Customer::new(format!("guest-{i}")).unwrap().id())
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_setters_work_on_zero_value() {
        let mut customer = Customer::default();
        assert!(customer.id().is_nil());

        let id = CustomerId::new();
        customer.set_id(id);
        customer.set_name("Percy");

        assert_eq!(customer.id(), id);
        assert_eq!(customer.name(), "Percy");
        assert_eq!(customer.person().id, id);
    }

    #[test]
    fn test_owned_collections_keep_insertion_order() {
        let mut customer = Customer::new("Donald").unwrap();
        let beer = Item::new("Beer", "Healthy Beverage");
        let wine = Item::new("Wine", "Healthy Snacks");
        customer.add_product(beer.clone());
        customer.add_product(wine.clone());

        let other = CustomerId::new();
        customer.record_transaction(Transaction::new(Money::from_cents(199), customer.id(), other));

        assert_eq!(customer.products(), &[beer, wine]);
        assert_eq!(customer.transactions().len(), 1);
        assert_eq!(customer.transactions()[0].to(), other);
    }
}
