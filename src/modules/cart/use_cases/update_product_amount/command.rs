// Request to set the quantity of a cart entry to an absolute value.
//
// Not persisted. `amount` is taken as sent by the UI and may be zero or
// negative; such requests are ignored by the store.

use crate::modules::cart::core::product::ProductId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn is_noop(&self) -> bool {
        self.amount <= 0
    }
}
