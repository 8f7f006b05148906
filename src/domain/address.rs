use std::str::FromStr;

use crate::domain::validation::ValidationError;
use crate::domain::value::Address;

/// Separator between addresses in a raw multi-address string.
pub const ADDRESS_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Ordered, non-empty list of destination addresses.
pub struct AddressList(Vec<Address>);

impl AddressList {
    /// Wrap already validated addresses, rejecting an empty list.
    pub fn new(addresses: Vec<Address>) -> Result<Self, ValidationError> {
        if addresses.is_empty() {
            return Err(ValidationError::Empty {
                field: Address::FIELD,
            });
        }
        Ok(Self(addresses))
    }

    /// Single-address list.
    pub fn one(address: Address) -> Self {
        Self(vec![address])
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never `true` for a list built through [`AddressList::new`] or [`format_addresses`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.0.iter()
    }
}

impl FromStr for AddressList {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        format_addresses(raw)
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split a comma-joined address string into trimmed, non-empty addresses.
///
/// Order is preserved and blank pieces are skipped. Fails when no address remains.
pub fn format_addresses(raw: &str) -> Result<AddressList, ValidationError> {
    let addresses = raw
        .split(ADDRESS_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(Address::new)
        .collect::<Result<Vec<_>, _>>()?;
    AddressList::new(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(list: &AddressList) -> Vec<&str> {
        list.iter().map(Address::as_str).collect()
    }

    #[test]
    fn splits_trims_and_keeps_order() {
        let list = format_addresses(" +1555000001 ,+1555000002,  555123 ").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(raw(&list), vec!["+1555000001", "+1555000002", "555123"]);
    }

    #[test]
    fn single_address_without_delimiter() {
        let list = format_addresses("+15551234567").unwrap();
        assert_eq!(raw(&list), vec!["+15551234567"]);
    }

    #[test]
    fn blank_pieces_are_dropped() {
        let list = format_addresses(",a@example.com,, ,b@example.com,").unwrap();
        assert_eq!(raw(&list), vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn empty_results_are_rejected() {
        for input in ["", ",,", "  ", " , , "] {
            assert_eq!(
                format_addresses(input).unwrap_err(),
                ValidationError::Empty {
                    field: Address::FIELD
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn from_str_uses_the_formatter() {
        let list: AddressList = "1, 2".parse().unwrap();
        assert_eq!(raw(&list), vec!["1", "2"]);
        assert!("".parse::<AddressList>().is_err());
    }

    #[test]
    fn new_rejects_empty_vec() {
        assert!(AddressList::new(Vec::new()).is_err());
        let one = AddressList::one(Address::new("x").unwrap());
        assert!(!one.is_empty());
    }
}
