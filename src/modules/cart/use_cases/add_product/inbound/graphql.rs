use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::cart::application::messages::CartOperation;
use crate::modules::cart::use_cases::get_cart::inbound::graphql::GqlCart;
use crate::shell::graphql::{cart_error, parse_product_id};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddProductMutation;

#[Object]
impl AddProductMutation {
    async fn add_product(&self, context: &Context<'_>, product_id: ID) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let product_id = parse_product_id(&product_id)?;

        state
            .store
            .add_product(product_id)
            .await
            .map(|cart| GqlCart::from(&cart))
            .map_err(|e| cart_error(CartOperation::AddProduct, &e))
    }
}
