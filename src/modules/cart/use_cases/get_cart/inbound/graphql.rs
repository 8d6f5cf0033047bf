use async_graphql::{Context, ID, Json, Object, SimpleObject};
use serde_json::{Map, Value};

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::Product;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlCartProduct {
    pub id: ID,
    pub amount: i64,
    pub details: Json<Map<String, Value>>,
}

impl From<&Product> for GqlCartProduct {
    fn from(p: &Product) -> Self {
        Self {
            id: ID(p.id.to_string()),
            amount: i64::from(p.amount),
            details: Json(p.details.clone()),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCart {
    pub products: Vec<GqlCartProduct>,
    pub units: i64,
    pub total: f64,
}

impl From<&Cart> for GqlCart {
    fn from(cart: &Cart) -> Self {
        Self {
            products: cart.products().iter().map(Into::into).collect(),
            units: i64::try_from(cart.total_units()).unwrap_or(i64::MAX),
            total: cart.total(),
        }
    }
}

#[derive(Default)]
pub struct CartQuery;

#[Object]
impl CartQuery {
    async fn cart(&self, context: &Context<'_>) -> GqlCart {
        let state = context.data_unchecked::<AppState>();
        GqlCart::from(&state.store.cart().await)
    }
}
