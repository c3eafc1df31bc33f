// Pure decision function for payments.
//
// Responsibilities
// - Reject a payment below the policy minimum of the current balance.
// - Accept overpayment; the balance may go negative.

use crate::modules::registration::core::errors::RegistrationError;
use crate::modules::registration::core::events::RegistrationEvent;
use crate::modules::registration::core::events::v1::payment_accepted::PaymentAcceptedV1;
use crate::modules::registration::core::policy::PaymentPolicy;
use crate::modules::registration::core::state::RegistryState;
use crate::modules::registration::use_cases::make_payment::command::MakePayment;

pub fn decide_payment(
    state: &RegistryState,
    policy: &PaymentPolicy,
    command: MakePayment,
) -> Result<Vec<RegistrationEvent>, RegistrationError> {
    let student = state
        .student(&command.student_id)
        .ok_or_else(|| RegistrationError::student_not_found(&command.student_id))?;

    if !policy.accepts(command.amount, student.balance) {
        return Err(RegistrationError::InsufficientPayment {
            payment: command.amount,
            minimum: policy.minimum_payment(student.balance),
        });
    }

    Ok(vec![RegistrationEvent::PaymentAcceptedV1(PaymentAcceptedV1 {
        student_id: command.student_id,
        amount: command.amount,
        balance_before: student.balance,
    })])
}
