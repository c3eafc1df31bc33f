// Event payload: PaymentAcceptedV1.
//
// `balance_before` is the outstanding balance the minimum was checked against.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct PaymentAcceptedV1 {
    pub student_id: String,
    pub amount: f64,
    pub balance_before: f64,
}
