// Command data type for a payment against a student's outstanding balance.

#[derive(Debug, Clone, PartialEq)]
pub struct MakePayment {
    pub student_id: String,
    pub amount: f64,
}
