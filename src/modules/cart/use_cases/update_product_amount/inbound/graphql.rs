use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::cart::application::messages::CartOperation;
use crate::modules::cart::use_cases::get_cart::inbound::graphql::GqlCart;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shell::graphql::{cart_error, parse_product_id};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateProductAmountMutation;

#[Object]
impl UpdateProductAmountMutation {
    async fn update_product_amount(
        &self,
        context: &Context<'_>,
        product_id: ID,
        amount: i64,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateProductAmount {
            product_id: parse_product_id(&product_id)?,
            amount,
        };

        state
            .store
            .update_product_amount(command)
            .await
            .map(|cart| GqlCart::from(&cart))
            .map_err(|e| cart_error(CartOperation::UpdateProductAmount, &e))
    }
}
