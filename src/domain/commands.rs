use serde::{Deserialize, Serialize};

use super::{BookingNumber, Customer};

/// コマンド：予約詳細を取得する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBookingDetails {
    pub booking_number: BookingNumber,
    pub customer_name: String,
    pub customer_surname: String,
}

impl GetBookingDetails {
    pub fn new(
        booking_number: impl Into<BookingNumber>,
        customer_name: impl Into<String>,
        customer_surname: impl Into<String>,
    ) -> Self {
        Self {
            booking_number: booking_number.into(),
            customer_name: customer_name.into(),
            customer_surname: customer_surname.into(),
        }
    }

    pub fn customer(&self) -> Customer {
        Customer::new(self.customer_name.clone(), self.customer_surname.clone())
    }
}

/// コマンド：予約をキャンセルする
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBooking {
    pub booking_number: BookingNumber,
    pub customer_name: String,
    pub customer_surname: String,
}

impl CancelBooking {
    pub fn new(
        booking_number: impl Into<BookingNumber>,
        customer_name: impl Into<String>,
        customer_surname: impl Into<String>,
    ) -> Self {
        Self {
            booking_number: booking_number.into(),
            customer_name: customer_name.into(),
            customer_surname: customer_surname.into(),
        }
    }

    pub fn customer(&self) -> Customer {
        Customer::new(self.customer_name.clone(), self.customer_surname.clone())
    }
}
