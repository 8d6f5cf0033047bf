// Pure decision function for setting the quantity of a cart entry.
//
// Rules, in order
// - A non-positive amount changes nothing.
// - An empty stock, or an amount above the stock, is out of stock.
// - A product missing from the cart is not found.
// - Otherwise the entry holds exactly the requested amount.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::product::Stock;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use std::num::NonZeroU32;

pub fn decide_update_amount(
    cart: &Cart,
    command: UpdateProductAmount,
    stock: Stock,
) -> Result<Cart, DecideError> {
    let product_id = command.product_id;
    if command.is_noop() {
        return Ok(cart.clone());
    }
    if stock.amount == 0 || command.amount > i64::from(stock.amount) {
        return Err(DecideError::OutOfStock { product_id });
    }

    u32::try_from(command.amount)
        .ok()
        .and_then(NonZeroU32::new)
        .and_then(|amount| cart.with_amount(product_id, amount))
        .ok_or(DecideError::ProductNotFound { product_id })
}

#[cfg(test)]
mod update_product_amount_decide_tests {
    use super::*;
    use crate::tests::fixtures::products::{cart_of, sneaker};
    use rstest::{fixture, rstest};

    #[fixture]
    fn cart() -> Cart {
        cart_of(vec![sneaker(1, 2), sneaker(2, 1)])
    }

    fn update(product_id: u64, amount: i64) -> UpdateProductAmount {
        UpdateProductAmount { product_id, amount }
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    fn it_should_set_the_amount_absolutely(cart: Cart, #[case] amount: i64) {
        let next = decide_update_amount(&cart, update(1, amount), Stock { amount: 5 }).unwrap();
        assert_eq!(i64::from(next.find(1).unwrap().amount), amount);
        assert_eq!(next.find(2), cart.find(2));
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn it_should_leave_the_cart_unchanged_for_non_positive_amounts(
        cart: Cart,
        #[case] amount: i64,
    ) {
        let next = decide_update_amount(&cart, update(1, amount), Stock { amount: 0 }).unwrap();
        assert_eq!(next, cart);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(10, 5)]
    fn it_should_reject_amounts_above_the_stock(
        cart: Cart,
        #[case] amount: i64,
        #[case] in_stock: u32,
    ) {
        let decision = decide_update_amount(&cart, update(1, amount), Stock { amount: in_stock });
        assert_eq!(decision, Err(DecideError::OutOfStock { product_id: 1 }));
    }

    #[rstest]
    fn it_should_reject_a_product_that_is_not_in_the_cart(cart: Cart) {
        let decision = decide_update_amount(&cart, update(9, 2), Stock { amount: 5 });
        assert_eq!(decision, Err(DecideError::ProductNotFound { product_id: 9 }));
    }
}
