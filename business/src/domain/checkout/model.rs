use std::collections::HashSet;
use std::sync::Mutex;

use super::errors::CheckoutError;
use crate::domain::cart::model::{CartId, CartSession};
use crate::domain::order::model::{NewOrder, OrderItem, OrderStatus};
use crate::domain::shared::contact::{is_valid_email, is_valid_phone};
use crate::domain::shared::text::non_blank;

/// Checkout form as typed by the customer. Nothing here is validated yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl CustomerInfo {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_none()
    }
}

/// Customer details that passed validation, already trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCustomer {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutField {
    Name,
    Phone,
    Email,
    Cart,
}

impl std::fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutField::Name => write!(f, "name"),
            CheckoutField::Phone => write!(f, "phone"),
            CheckoutField::Email => write!(f, "email"),
            CheckoutField::Cart => write!(f, "cart"),
        }
    }
}

/// Checkout state of a cart as other requests observe it. Validation and
/// the outcome of a submission are only visible in the checkout result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    Submitting,
}

impl std::fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutState::Idle => write!(f, "idle"),
            CheckoutState::Submitting => write!(f, "submitting"),
        }
    }
}

/// Field rules for the checkout form. Fields are checked in order
/// name, phone, email and the first failure is reported.
#[derive(Debug, Clone, Copy)]
pub struct CustomerValidator {
    pub validate_phone_format: bool,
}

impl Default for CustomerValidator {
    fn default() -> Self {
        Self {
            validate_phone_format: true,
        }
    }
}

impl CustomerValidator {
    pub fn validate(&self, customer: &CustomerInfo) -> Result<ValidatedCustomer, CheckoutError> {
        let name = customer.name.trim();
        if name.is_empty() {
            return Err(CheckoutError::validation(CheckoutField::Name));
        }

        let phone = customer.phone.trim();
        if phone.is_empty() || (self.validate_phone_format && !is_valid_phone(phone)) {
            return Err(CheckoutError::validation(CheckoutField::Phone));
        }

        let email = non_blank(customer.email.clone());
        if let Some(email) = &email
            && !is_valid_email(email)
        {
            return Err(CheckoutError::validation(CheckoutField::Email));
        }

        Ok(ValidatedCustomer {
            name: name.to_string(),
            phone: phone.to_string(),
            email,
        })
    }
}

/// Builds the order payload from the session's current cart. The items are
/// copies, so later catalog edits never reach a submitted order.
pub fn assemble_order(
    session: &CartSession,
    customer: ValidatedCustomer,
) -> Result<NewOrder, CheckoutError> {
    if session.cart.is_empty() {
        return Err(CheckoutError::validation(CheckoutField::Cart));
    }

    let items = session
        .cart
        .lines()
        .iter()
        .map(|line| OrderItem {
            id: line.item.id.clone(),
            name: line.item.name.clone(),
            price: line.item.price.clone(),
            quantity: line.quantity,
        })
        .collect();

    Ok(NewOrder {
        business_id: session.business_id.clone(),
        customer_name: customer.name,
        customer_phone: customer.phone,
        customer_email: customer.email,
        items,
        total_amount: session.cart.total(),
        currency: session.currency.clone(),
        status: OrderStatus::Pending,
    })
}

/// Per-cart exclusive permits. Checkout holds one from its first cart read
/// until the cart is reset; cart edits hold one for their read-modify-write.
/// At most one permit exists per cart.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: Mutex<HashSet<CartId>>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` when another operation already holds `cart_id`.
    pub fn try_acquire(&self, cart_id: CartId) -> Option<SubmissionPermit<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if in_flight.insert(cart_id) {
            Some(SubmissionPermit {
                guard: self,
                cart_id,
            })
        } else {
            None
        }
    }

    pub fn is_submitting(&self, cart_id: CartId) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&cart_id)
    }

    pub fn state_of(&self, cart_id: CartId) -> CheckoutState {
        if self.is_submitting(cart_id) {
            CheckoutState::Submitting
        } else {
            CheckoutState::Idle
        }
    }

    fn release(&self, cart_id: CartId) {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&cart_id);
    }
}

/// Held for the duration of one submission; dropping it releases the cart.
#[derive(Debug)]
pub struct SubmissionPermit<'a> {
    guard: &'a SubmissionGuard,
    cart_id: CartId,
}

impl SubmissionPermit<'_> {
    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }
}

impl Drop for SubmissionPermit<'_> {
    fn drop(&mut self) {
        self.guard.release(self.cart_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::model::{MenuItem, MenuItemId};
    use crate::domain::shared::value_objects::{BusinessId, CurrencyCode};
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn customer(name: &str, phone: &str, email: Option<&str>) -> CustomerInfo {
        CustomerInfo {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.map(str::to_string),
        }
    }

    fn field_of(result: Result<ValidatedCustomer, CheckoutError>) -> Option<CheckoutField> {
        result.err().and_then(|e| e.field())
    }

    #[test]
    fn should_reject_blank_name_first() {
        let validator = CustomerValidator::default();

        assert_eq!(
            field_of(validator.validate(&customer("   ", "", None))),
            Some(CheckoutField::Name)
        );
    }

    #[test]
    fn should_reject_blank_phone() {
        let validator = CustomerValidator {
            validate_phone_format: false,
        };

        assert_eq!(
            field_of(validator.validate(&customer("Ada", "  ", None))),
            Some(CheckoutField::Phone)
        );
    }

    #[test]
    fn should_reject_malformed_phone_when_format_check_enabled() {
        let validator = CustomerValidator::default();

        assert_eq!(
            field_of(validator.validate(&customer("Ada", "12345", None))),
            Some(CheckoutField::Phone)
        );
    }

    #[test]
    fn should_accept_any_phone_when_format_check_disabled() {
        let validator = CustomerValidator {
            validate_phone_format: false,
        };

        assert!(validator.validate(&customer("Ada", "ext. 12", None)).is_ok());
    }

    #[test]
    fn should_reject_malformed_email() {
        let validator = CustomerValidator::default();

        assert_eq!(
            field_of(validator.validate(&customer("Ada", "08012345678", Some("ada@")))),
            Some(CheckoutField::Email)
        );
    }

    #[test]
    fn should_trim_validated_fields() {
        let validator = CustomerValidator::default();

        let validated = validator
            .validate(&customer(" Ada ", " +234 801 234 5678 ", Some("  ")))
            .unwrap();

        assert_eq!(validated.name, "Ada");
        assert_eq!(validated.phone, "+234 801 234 5678");
        assert_eq!(validated.email, None);
    }

    #[test]
    fn should_assemble_order_from_cart_snapshot() {
        let mut session = CartSession::new(
            BusinessId::new("owner-1"),
            CurrencyCode::parse("NGN").unwrap(),
        );
        let rice = MenuItem::from_repository(
            MenuItemId::new("rice"),
            "Jollof Rice".to_string(),
            BigDecimal::from_str("1500").unwrap(),
            Some("Smoky".to_string()),
            None,
            None,
        );
        session.cart.add_item(&rice);
        session.cart.add_item(&rice);

        let order = assemble_order(
            &session,
            ValidatedCustomer {
                name: "Ada".to_string(),
                phone: "08012345678".to_string(),
                email: None,
            },
        )
        .unwrap();

        assert_eq!(order.business_id.as_str(), "owner-1");
        assert_eq!(order.currency.as_str(), "NGN");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total_amount, BigDecimal::from(3000));
    }

    #[test]
    fn should_reject_assembly_for_empty_cart() {
        let session = CartSession::new(BusinessId::new("owner-1"), CurrencyCode::default());

        let result = assemble_order(
            &session,
            ValidatedCustomer {
                name: "Ada".to_string(),
                phone: "08012345678".to_string(),
                email: None,
            },
        );

        assert_eq!(result.err().and_then(|e| e.field()), Some(CheckoutField::Cart));
    }

    #[test]
    fn should_allow_single_permit_per_cart() {
        let guard = SubmissionGuard::new();
        let cart_id = CartId::new();

        let permit = guard.try_acquire(cart_id);
        assert!(permit.is_some());
        assert!(guard.try_acquire(cart_id).is_none());
        assert_eq!(guard.state_of(cart_id), CheckoutState::Submitting);

        assert!(guard.try_acquire(CartId::new()).is_some());
    }

    #[test]
    fn should_release_permit_on_drop() {
        let guard = SubmissionGuard::new();
        let cart_id = CartId::new();

        drop(guard.try_acquire(cart_id));

        assert!(!guard.is_submitting(cart_id));
        assert!(guard.try_acquire(cart_id).is_some());
    }

    #[test]
    fn should_clear_customer_info() {
        let mut info = customer("Ada", "08012345678", Some("ada@example.com"));

        info.clear();

        assert!(info.is_empty());
    }
}
