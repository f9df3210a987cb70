//! Keyed validation of a whole record.
//!
//! A [`Contract`] is an immutable collection of keyed rules. Each call to
//! [`Contract::validate`] returns a new contract that shares the rules of
//! the receiver, so a contract can be extended in several directions and
//! shared freely between threads.
//!
//! [`Contract::check`] runs every rule and reports one map from key to the
//! errors found under that key.
//!
//! # Examples
//!
//! ```rust
//! use mayak::validation::Contract;
//! use mayak::validation::primitives::{greater_than, length_less_than_or_equal_to, not_empty};
//!
//! struct Order {
//!     sku: String,
//!     quantity: u32,
//! }
//!
//! let contract = Contract::new()
//!     .validate(not_empty::<String>(), "sku", |order: &Order| order.sku.clone())
//!     .validate(length_less_than_or_equal_to::<String>(8), "sku", |order: &Order| order.sku.clone())
//!     .validate(greater_than(0), "quantity", |order: &Order| order.quantity);
//!
//! assert!(contract.check(&Order { sku: "A-1".into(), quantity: 2 }).is_valid());
//!
//! let result = contract.check(&Order { sku: "ABCDEFGHIJ".into(), quantity: 0 });
//! let errors = &result.errors()[0];
//! assert_eq!(errors["sku"], vec!["Length 10 should be less than or equal to 8"]);
//! assert_eq!(errors["quantity"], vec!["Value 0 should be greater than 0"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::rule::Rule;
use super::validation_result::{NonEmptyErrors, ValidationResult};
use crate::typeclass::Semigroup;

/// Errors grouped by the key of the rule that produced them.
pub type KeyedErrors<K, E> = BTreeMap<K, Vec<E>>;

struct Node<V, K, E> {
    key: K,
    rule: Rule<V, (K, E)>,
    next: Option<Arc<Node<V, K, E>>>,
}

/// An immutable set of keyed rules over values of type `V`.
pub struct Contract<V, K, E> {
    head: Option<Arc<Node<V, K, E>>>,
    length: usize,
}

impl<V, K, E> Contract<V, K, E>
where
    V: 'static,
    K: Ord + Clone + Send + Sync + 'static,
    E: 'static,
{
    /// Creates a contract with no rules.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns a new contract that also checks `projection(value)` with
    /// `rule`, reporting its errors under `key`.
    ///
    /// The receiver is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::Contract;
    /// use mayak::validation::primitives::positive;
    ///
    /// let empty: Contract<(i32, i32), &str, String> = Contract::new();
    /// let first = empty.validate(positive(), "x", |point: &(i32, i32)| point.0);
    /// let both = first.validate(positive(), "y", |point: &(i32, i32)| point.1);
    ///
    /// assert_eq!((empty.len(), first.len(), both.len()), (0, 1, 2));
    /// assert!(first.check(&(1, -1)).is_valid());
    /// assert!(both.check(&(1, -1)).is_invalid());
    /// ```
    #[must_use]
    pub fn validate<U, P>(&self, rule: Rule<U, E>, key: K, projection: P) -> Self
    where
        U: 'static,
        P: Fn(&V) -> U + Send + Sync + 'static,
    {
        let keyed = rule.transform(projection).with_key(key.clone());
        Self {
            head: Some(Arc::new(Node {
                key,
                rule: keyed,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Runs every rule and groups their errors by key.
    ///
    /// The result is `Valid` when every rule passes, and otherwise `Invalid`
    /// with exactly one map. Errors under one key keep the order in which
    /// their rules were added.
    pub fn check(&self, value: &V) -> ValidationResult<KeyedErrors<K, E>> {
        self.rules()
            .map(|rule| Rule::with_keys_aggregated(rule).check(value))
            .fold(ValidationResult::Valid, |accumulated, result| {
                accumulated.combine_with(result, merge_keyed)
            })
    }

    /// The whole contract as a single rule, for nesting in other contracts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::Contract;
    /// use mayak::validation::primitives::not_empty;
    ///
    /// struct Address { city: String }
    /// struct Customer { address: Address }
    ///
    /// let address = Contract::new()
    ///     .validate(not_empty::<String>(), "city", |a: &Address| a.city.clone());
    ///
    /// let customer = Contract::new().validate(
    ///     address.to_rule().map_errors(|errors| format!("{errors:?}")),
    ///     "address",
    ///     |c: &Customer| Address { city: c.address.city.clone() },
    /// );
    ///
    /// let result = customer.check(&Customer { address: Address { city: String::new() } });
    /// assert_eq!(
    ///     result.errors()[0]["address"],
    ///     vec![r#"{"city": ["Value should not be empty"]}"#]
    /// );
    /// ```
    pub fn to_rule(&self) -> Rule<V, KeyedErrors<K, E>> {
        let contract = self.clone();
        Rule::new(move |value| contract.check(value))
    }

    /// The keyed rules registered under `key`, in insertion order.
    pub fn rules_for(&self, key: &K) -> Vec<Rule<V, (K, E)>> {
        let mut rules: Vec<Rule<V, (K, E)>> = self
            .nodes()
            .filter(|node| node.key == *key)
            .map(|node| node.rule.clone())
            .collect();
        rules.reverse();
        rules
    }

    /// Every keyed rule, in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule<V, (K, E)>> {
        let mut nodes: Vec<&Node<V, K, E>> = self.nodes().collect();
        nodes.reverse();
        nodes.into_iter().map(|node| &node.rule)
    }

    /// The number of rules.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the contract has no rules.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The distinct keys, in order.
    pub fn keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = self.nodes().map(|node| node.key.clone()).collect();
        keys.sort();
        keys.dedup();
        keys
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<V, K, E>> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }
}

fn merge_keyed<K: Ord, E>(
    left: NonEmptyErrors<KeyedErrors<K, E>>,
    right: NonEmptyErrors<KeyedErrors<K, E>>,
) -> NonEmptyErrors<KeyedErrors<K, E>> {
    let merged = left
        .into_iter()
        .chain(right)
        .reduce(BTreeMap::combine)
        .unwrap_or_default();
    NonEmptyErrors::new(merged)
}

impl<V, K, E> Clone for Contract<V, K, E> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<V, K, E> Default for Contract<V, K, E>
where
    V: 'static,
    K: Ord + Clone + Send + Sync + 'static,
    E: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K, E> fmt::Debug for Contract<V, K, E>
where
    V: 'static,
    K: Ord + Clone + Send + Sync + fmt::Debug + 'static,
    E: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Contract")
            .field("keys", &self.keys())
            .field("rules", &self.length)
            .finish()
    }
}

static_assertions::assert_impl_all!(Contract<String, &'static str, String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::primitives::{greater_than_or_equal_to, not_empty};
    use rstest::rstest;

    #[derive(Debug)]
    struct Account {
        email: String,
        age: u32,
    }

    fn account_contract() -> Contract<Account, &'static str, String> {
        Contract::new()
            .validate(not_empty::<String>(), "email", |account: &Account| {
                account.email.clone()
            })
            .validate(greater_than_or_equal_to(18), "age", |account: &Account| {
                account.age
            })
    }

    #[rstest]
    fn check_reports_one_error_per_key() {
        let result = account_contract().check(&Account {
            email: String::new(),
            age: 15,
        });

        assert_eq!(
            result.errors(),
            [BTreeMap::from([
                ("age", vec!["Value 15 should be greater than or equal to 18".to_string()]),
                ("email", vec!["Value should not be empty".to_string()]),
            ])]
        );
    }

    #[rstest]
    fn check_is_valid_when_every_rule_passes() {
        let result = account_contract().check(&Account {
            email: "a@b.c".to_string(),
            age: 30,
        });
        assert!(result.is_valid());
    }

    #[rstest]
    fn errors_under_one_key_keep_insertion_order() {
        let contract = Contract::new()
            .validate(
                Rule::predicate(|_: &i32| false, |_| "first".to_string()),
                "value",
                |value: &i32| *value,
            )
            .validate(
                Rule::predicate(|_: &i32| false, |_| "second".to_string()),
                "value",
                |value: &i32| *value,
            );

        let result = contract.check(&0);

        assert_eq!(result.errors()[0]["value"], vec!["first", "second"]);
    }

    #[rstest]
    fn validate_leaves_the_receiver_unchanged() {
        let base = account_contract();
        let extended = base.validate(not_empty::<String>(), "name", |account: &Account| {
            account.email.clone()
        });

        assert_eq!(base.len(), 2);
        assert_eq!(extended.len(), 3);
        assert_eq!(base.keys(), vec!["age", "email"]);
        assert_eq!(extended.keys(), vec!["age", "email", "name"]);
    }

    #[rstest]
    fn rules_for_returns_keyed_rules() {
        let contract = account_contract();
        let email_rules = contract.rules_for(&"email");
        let account = Account {
            email: String::new(),
            age: 40,
        };

        assert_eq!(email_rules.len(), 1);
        assert_eq!(
            email_rules[0].check(&account).errors(),
            [("email", "Value should not be empty".to_string())]
        );
        assert!(contract.rules_for(&"missing").is_empty());
    }

    #[rstest]
    fn rules_for_keeps_insertion_order() {
        let contract = Contract::new()
            .validate(
                Rule::predicate(|_: &i32| false, |_| "first".to_string()),
                "k",
                |value: &i32| *value,
            )
            .validate(
                Rule::predicate(|_: &i32| false, |_| "second".to_string()),
                "k",
                |value: &i32| *value,
            );

        let errors: Vec<String> = contract
            .rules_for(&"k")
            .iter()
            .flat_map(|rule| rule.check(&0).into_errors())
            .map(|(_, error)| error)
            .collect();

        assert_eq!(errors, vec!["first", "second"]);
    }

    #[rstest]
    fn empty_contract_is_valid() {
        let contract: Contract<i32, &str, String> = Contract::default();
        assert!(contract.is_empty());
        assert!(contract.check(&1).is_valid());
    }

    #[rstest]
    fn debug_lists_keys() {
        let debug = format!("{:?}", account_contract());
        assert!(debug.contains("\"age\""));
        assert!(debug.contains("\"email\""));
    }
}
