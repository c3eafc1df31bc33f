// Payment policy: the smallest payment the ledger accepts, as a fraction of
// the outstanding balance at the time of payment.

pub const DEFAULT_MINIMUM_PAYMENT_RATIO: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentPolicy {
    pub minimum_ratio: f64,
}

impl Default for PaymentPolicy {
    fn default() -> Self {
        Self {
            minimum_ratio: DEFAULT_MINIMUM_PAYMENT_RATIO,
        }
    }
}

impl PaymentPolicy {
    pub fn new(minimum_ratio: f64) -> Self {
        Self { minimum_ratio }
    }

    pub fn minimum_payment(&self, balance: f64) -> f64 {
        self.minimum_ratio * balance
    }

    pub fn accepts(&self, payment: f64, balance: f64) -> bool {
        payment >= self.minimum_payment(balance)
    }
}
