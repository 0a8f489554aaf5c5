use serde::{Deserialize, Serialize};
use std::fmt;

/// 参照レコードの予約番号
pub const REFERENCE_BOOKING_NUMBER: &str = "123-456";
/// 参照レコードの顧客名
pub const REFERENCE_CUSTOMER_NAME: &str = "Klaus";
/// 参照レコードの顧客姓
pub const REFERENCE_CUSTOMER_SURNAME: &str = "Heisler";

/// 予約番号
///
/// 書式の制約は持たない。比較は大文字小文字を区別する完全一致のみ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingNumber(String);

impl BookingNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BookingNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 顧客 - 予約に埋め込まれる値オブジェクト
///
/// 識別子を持たず、フィールドの等価性のみで比較される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub surname: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }
}

/// 予約の参照レコード（予約番号と顧客の組）
///
/// リポジトリが保持する「正しい」本人確認情報。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_number: BookingNumber,
    pub customer: Customer,
}

impl BookingRecord {
    pub fn new(booking_number: impl Into<BookingNumber>, customer: Customer) -> Self {
        Self {
            booking_number: booking_number.into(),
            customer,
        }
    }

    /// 固定の参照レコード（123-456 / Klaus Heisler）
    pub fn reference() -> Self {
        Self::new(
            REFERENCE_BOOKING_NUMBER,
            Customer::new(REFERENCE_CUSTOMER_NAME, REFERENCE_CUSTOMER_SURNAME),
        )
    }

    /// 本人確認の三つ組がこのレコードと完全一致するか
    ///
    /// どのフィールドが不一致かは区別しない。
    pub fn matches(&self, booking_number: &BookingNumber, customer: &Customer) -> bool {
        self.booking_number == *booking_number && self.customer == *customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_number_display() {
        let number = BookingNumber::new("123-456");
        assert_eq!(number.to_string(), "123-456");
        assert_eq!(number.as_str(), "123-456");
    }

    #[test]
    fn test_customer_equality_by_fields() {
        let klaus = Customer::new("Klaus", "Heisler");
        assert_eq!(klaus, Customer::new("Klaus", "Heisler"));
        assert_ne!(klaus, Customer::new("klaus", "Heisler"));
    }

    #[test]
    fn test_reference_record_matches_exact_triple() {
        let record = BookingRecord::reference();
        assert!(record.matches(
            &BookingNumber::new("123-456"),
            &Customer::new("Klaus", "Heisler")
        ));
    }

    #[test]
    fn test_reference_record_rejects_any_mismatch() {
        let record = BookingRecord::reference();
        let number = BookingNumber::new("123-456");
        let klaus = Customer::new("Klaus", "Heisler");

        assert!(!record.matches(&BookingNumber::new("999-999"), &klaus));
        assert!(!record.matches(&number, &Customer::new("Hans", "Heisler")));
        assert!(!record.matches(&number, &Customer::new("Klaus", "Muller")));
        // 大文字小文字・前後の空白は区別する
        assert!(!record.matches(&number, &Customer::new("KLAUS", "Heisler")));
        assert!(!record.matches(&number, &Customer::new("Klaus ", "Heisler")));
        assert!(!record.matches(&BookingNumber::new(""), &Customer::new("", "")));
    }

    #[test]
    fn test_customer_serializes_as_name_and_surname() {
        let json = serde_json::to_value(Customer::new("Klaus", "Heisler")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Klaus", "surname": "Heisler"}));
    }
}
