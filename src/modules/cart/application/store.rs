// Cart store: the single owner of the cart value.
//
// Responsibilities
// - Load the cart once from durable storage.
// - For each mutation: read the stock, run the pure decider, persist the new
//   cart, then swap it in memory.
// - Notify the user on every failure and hand the typed error back to the caller.
//
// Concurrency
// - Each mutation works on the snapshot taken when it starts. Overlapping
//   mutations are not serialized; the last one to finish wins.
// - The in-memory cart is only replaced after the storage write succeeded, so
//   memory and storage agree whenever an operation returns.

use crate::modules::cart::adapters::outbound::inventory::Inventory;
use crate::modules::cart::application::errors::CartError;
use crate::modules::cart::application::messages::{CartOperation, user_message};
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::add_product::decide::{AddDecision, decide_add};
use crate::modules::cart::use_cases::remove_product::decide::decide_remove;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::update_product_amount::decide::decide_update_amount;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::storage::{KeyValueStorage, StorageError};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const DEFAULT_STORAGE_NAMESPACE: &str = "@RocketShoes";

pub fn cart_storage_key(namespace: &str) -> String {
    format!("{namespace}:cart")
}

pub struct CartStore {
    storage_key: String,
    inventory: Arc<dyn Inventory>,
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
    cart: RwLock<Cart>,
}

impl CartStore {
    /// Reads the stored cart. A missing slot starts empty; so does a stored
    /// value that cannot be read back as a valid cart.
    pub async fn load(
        storage_key: impl Into<String>,
        inventory: Arc<dyn Inventory>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StorageError> {
        let storage_key = storage_key.into();
        let cart = match storage.get(&storage_key).await? {
            None => Cart::new(),
            Some(stored) => serde_json::from_str(&stored).unwrap_or_else(|err| {
                tracing::warn!(
                    key = %storage_key,
                    error = %err,
                    "discarding unreadable stored cart"
                );
                Cart::new()
            }),
        };
        tracing::info!(key = %storage_key, products = cart.len(), "cart loaded");

        Ok(Self {
            storage_key,
            inventory,
            storage,
            notifier,
            cart: RwLock::new(cart),
        })
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub async fn cart(&self) -> Cart {
        self.cart.read().await.clone()
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let snapshot = self.cart().await;
        let result = self.try_add_product(&snapshot, product_id).await;
        self.settle(CartOperation::AddProduct, result).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let snapshot = self.cart().await;
        let result = match decide_remove(&snapshot, product_id) {
            Ok(next) => self.commit(next).await,
            Err(rejection) => Err(rejection.into()),
        };
        self.settle(CartOperation::RemoveProduct, result).await
    }

    /// Sets the amount of an entry. Non-positive amounts are ignored without
    /// any remote call or notification.
    #[tracing::instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        command: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let snapshot = self.cart().await;
        if command.is_noop() {
            tracing::debug!("ignoring non-positive amount");
            return Ok(snapshot);
        }
        let result = self.try_update_product_amount(&snapshot, command).await;
        self.settle(CartOperation::UpdateProductAmount, result).await
    }

    async fn try_add_product(
        &self,
        snapshot: &Cart,
        product_id: ProductId,
    ) -> Result<Cart, CartError> {
        let stock = self.inventory.stock(product_id).await?;
        let next = match decide_add(snapshot, product_id, stock)? {
            AddDecision::Increment { cart } => cart,
            AddDecision::Append(pending) => {
                let record = self.inventory.product(pending.product_id()).await?;
                pending.complete(record)?
            }
        };
        self.commit(next).await
    }

    async fn try_update_product_amount(
        &self,
        snapshot: &Cart,
        command: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let stock = self.inventory.stock(command.product_id).await?;
        let next = decide_update_amount(snapshot, command, stock)?;
        self.commit(next).await
    }

    async fn commit(&self, next: Cart) -> Result<Cart, CartError> {
        let serialized = serde_json::to_string(&next)?;
        self.storage.set(&self.storage_key, &serialized).await?;
        *self.cart.write().await = next.clone();
        Ok(next)
    }

    async fn settle(
        &self,
        operation: CartOperation,
        result: Result<Cart, CartError>,
    ) -> Result<Cart, CartError> {
        match result {
            Ok(cart) => {
                tracing::info!(
                    ?operation,
                    products = cart.len(),
                    units = cart.total_units(),
                    "cart updated"
                );
                Ok(cart)
            }
            Err(err) => {
                tracing::warn!(?operation, error = %err, "cart operation failed");
                self.notifier
                    .error(user_message(operation, err.kind()))
                    .await;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod cart_store_tests {
    use super::*;
    use crate::modules::cart::adapters::outbound::inventory::in_memory::InMemoryInventory;
    use crate::modules::cart::application::errors::FailureKind;
    use crate::modules::cart::application::messages::{
        ADD_PRODUCT_FAILED, OUT_OF_STOCK, PRODUCT_NOT_FOUND, REMOVE_PRODUCT_FAILED,
        UPDATE_AMOUNT_FAILED,
    };
    use crate::modules::cart::core::decision::DecideError;
    use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
    use crate::shared::infrastructure::storage::in_memory::InMemoryStorage;
    use crate::tests::fixtures::products::{cart_of, catalog_sneaker, sneaker};
    use rstest::{fixture, rstest};

    const KEY: &str = "@RocketShoes:cart";

    struct Harness {
        store: CartStore,
        inventory: Arc<InMemoryInventory>,
        storage: Arc<InMemoryStorage>,
        notifier: Arc<InMemoryNotifier>,
    }

    impl Harness {
        async fn with(inventory: InMemoryInventory, storage: InMemoryStorage) -> Self {
            let inventory = Arc::new(inventory);
            let storage = Arc::new(storage);
            let notifier = Arc::new(InMemoryNotifier::new());
            let store = CartStore::load(KEY, inventory.clone(), storage.clone(), notifier.clone())
                .await
                .expect("load failed");
            Self {
                store,
                inventory,
                storage,
                notifier,
            }
        }

        async fn stored_cart(&self) -> Option<Cart> {
            self.storage
                .get(KEY)
                .await
                .unwrap()
                .map(|s| serde_json::from_str(&s).unwrap())
        }
    }

    #[fixture]
    fn inventory() -> InMemoryInventory {
        InMemoryInventory::new()
            .with_product(catalog_sneaker(1), 5)
            .with_product(catalog_sneaker(2), 2)
            .with_product(catalog_sneaker(99), 0)
            .with_stock(7, 4)
    }

    fn stored(cart: &Cart) -> InMemoryStorage {
        InMemoryStorage::new().with_entry(KEY, serde_json::to_string(cart).unwrap())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_empty_without_a_stored_cart(inventory: InMemoryInventory) {
        let harness = Harness::with(inventory, InMemoryStorage::new()).await;
        assert!(harness.store.cart().await.is_empty());
        assert_eq!(harness.store.storage_key(), KEY);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_the_stored_cart(inventory: InMemoryInventory) {
        let cart = cart_of(vec![sneaker(2, 1), sneaker(1, 3)]);
        let harness = Harness::with(inventory, stored(&cart)).await;
        assert_eq!(harness.store.cart().await, cart);
    }

    #[rstest]
    #[case("not-json")]
    #[case(r#"[{"id":1,"amount":1},{"id":1,"amount":2}]"#)]
    #[tokio::test]
    async fn it_should_discard_an_unreadable_stored_cart(
        inventory: InMemoryInventory,
        #[case] stored: &str,
    ) {
        let storage = InMemoryStorage::new().with_entry(KEY, stored);
        let harness = Harness::with(inventory, storage).await;
        assert!(harness.store.cart().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_load_when_storage_is_offline(inventory: InMemoryInventory) {
        let storage = InMemoryStorage::new();
        storage.toggle_offline();
        let result = CartStore::load(
            KEY,
            Arc::new(inventory),
            Arc::new(storage),
            Arc::new(InMemoryNotifier::new()),
        )
        .await;
        assert!(result.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_a_new_product_and_persist_it(inventory: InMemoryInventory) {
        let harness = Harness::with(inventory, InMemoryStorage::new()).await;

        let cart = harness.store.add_product(1).await.expect("add failed");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.products()[0].id, 1);
        assert_eq!(cart.products()[0].amount, 1);
        assert_eq!(harness.store.cart().await, cart);
        assert_eq!(harness.stored_cart().await, Some(cart));
        assert!(harness.notifier.messages().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_increment_an_existing_product_only(inventory: InMemoryInventory) {
        let before = cart_of(vec![sneaker(1, 2), sneaker(2, 1)]);
        let harness = Harness::with(inventory, stored(&before)).await;

        let cart = harness.store.add_product(1).await.expect("add failed");

        assert_eq!(cart, cart_of(vec![sneaker(1, 3), sneaker(2, 1)]));
        assert_eq!(cart.find(2), before.find(2));
        assert_eq!(harness.stored_cart().await, Some(cart));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_block_adding_beyond_the_stock(inventory: InMemoryInventory) {
        let before = cart_of(vec![sneaker(2, 2)]);
        let harness = Harness::with(inventory, stored(&before)).await;

        let err = harness.store.add_product(2).await.unwrap_err();

        assert!(matches!(
            err,
            CartError::Rejected(DecideError::OutOfStock { product_id: 2 })
        ));
        assert_eq!(harness.store.cart().await, before);
        assert_eq!(harness.stored_cart().await, Some(before));
        assert_eq!(harness.notifier.messages().await, vec![OUT_OF_STOCK]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_block_adding_a_product_without_stock(inventory: InMemoryInventory) {
        let harness = Harness::with(inventory, InMemoryStorage::new()).await;

        let err = harness.store.add_product(99).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::OutOfStock);
        assert!(harness.store.cart().await.is_empty());
        assert_eq!(harness.stored_cart().await, None);
        assert_eq!(harness.notifier.messages().await, vec![OUT_OF_STOCK]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_insert_a_product_missing_from_the_catalog(
        inventory: InMemoryInventory,
    ) {
        let harness = Harness::with(inventory, InMemoryStorage::new()).await;

        let err = harness.store.add_product(7).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::ProductNotFound);
        assert!(harness.store.cart().await.is_empty());
        assert_eq!(harness.notifier.messages().await, vec![PRODUCT_NOT_FOUND]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_add_when_the_inventory_is_offline(inventory: InMemoryInventory) {
        let harness = Harness::with(inventory, InMemoryStorage::new()).await;
        harness.inventory.toggle_offline();

        let err = harness.store.add_product(1).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::OperationFailed);
        assert!(harness.store.cart().await.is_empty());
        assert_eq!(harness.notifier.messages().await, vec![ADD_PRODUCT_FAILED]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_memory_unchanged_when_the_storage_write_fails(
        inventory: InMemoryInventory,
    ) {
        let before = cart_of(vec![sneaker(1, 1)]);
        let harness = Harness::with(inventory, stored(&before)).await;
        harness.storage.toggle_offline();

        let err = harness.store.add_product(1).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::OperationFailed);
        assert_eq!(harness.store.cart().await, before);
        harness.storage.toggle_offline();
        assert_eq!(harness.stored_cart().await, Some(before));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_remove_when_the_storage_write_fails(inventory: InMemoryInventory) {
        let before = cart_of(vec![sneaker(1, 2), sneaker(2, 1)]);
        let harness = Harness::with(inventory, stored(&before)).await;
        harness.storage.toggle_offline();

        let err = harness.store.remove_product(1).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::OperationFailed);
        assert_eq!(harness.store.cart().await, before);
        harness.storage.toggle_offline();
        assert_eq!(harness.stored_cart().await, Some(before));
        assert_eq!(harness.notifier.messages().await, vec![REMOVE_PRODUCT_FAILED]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_amount_update_when_the_storage_write_fails(
        inventory: InMemoryInventory,
    ) {
        let before = cart_of(vec![sneaker(1, 4)]);
        let harness = Harness::with(inventory, stored(&before)).await;
        harness.storage.toggle_offline();

        let err = harness
            .store
            .update_product_amount(UpdateProductAmount {
                product_id: 1,
                amount: 2,
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::OperationFailed);
        assert_eq!(harness.store.cart().await, before);
        harness.storage.toggle_offline();
        assert_eq!(harness.stored_cart().await, Some(before));
        assert_eq!(harness.notifier.messages().await, vec![UPDATE_AMOUNT_FAILED]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_follow_the_stock_read_at_each_add(inventory: InMemoryInventory) {
        let harness = Harness::with(inventory, stored(&cart_of(vec![sneaker(1, 4)]))).await;

        harness.inventory.set_stock(1, 4).await;
        let err = harness.store.add_product(1).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::OutOfStock);

        harness.inventory.set_stock(1, 3).await;
        let cart = harness.store.add_product(1).await.expect("add failed");
        assert_eq!(cart, cart_of(vec![sneaker(1, 5)]));
        assert_eq!(harness.stored_cart().await, Some(cart));
        assert_eq!(harness.notifier.messages().await, vec![OUT_OF_STOCK]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_a_product_and_persist_it(inventory: InMemoryInventory) {
        let before = cart_of(vec![sneaker(1, 1), sneaker(2, 2)]);
        let harness = Harness::with(inventory, stored(&before)).await;

        let cart = harness.store.remove_product(1).await.expect("remove failed");

        assert_eq!(cart, cart_of(vec![sneaker(2, 2)]));
        assert_eq!(cart.find(2), before.find(2));
        assert_eq!(harness.stored_cart().await, Some(cart));
        assert_eq!(harness.inventory.stock_reads(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_removing_a_product_not_in_the_cart(inventory: InMemoryInventory) {
        let harness = Harness::with(inventory, InMemoryStorage::new()).await;

        let err = harness.store.remove_product(5).await.unwrap_err();

        assert!(matches!(
            err,
            CartError::Rejected(DecideError::ProductNotFound { product_id: 5 })
        ));
        assert!(harness.store.cart().await.is_empty());
        assert_eq!(harness.notifier.messages().await, vec![REMOVE_PRODUCT_FAILED]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_set_the_amount_absolutely(inventory: InMemoryInventory) {
        let harness = Harness::with(inventory, stored(&cart_of(vec![sneaker(1, 4)]))).await;

        let cart = harness
            .store
            .update_product_amount(UpdateProductAmount {
                product_id: 1,
                amount: 2,
            })
            .await
            .expect("update failed");

        assert_eq!(cart, cart_of(vec![sneaker(1, 2)]));
        assert_eq!(harness.stored_cart().await, Some(cart));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[tokio::test]
    async fn it_should_ignore_non_positive_amounts(
        inventory: InMemoryInventory,
        #[case] amount: i64,
    ) {
        let before = cart_of(vec![sneaker(1, 3)]);
        let harness = Harness::with(inventory, stored(&before)).await;

        let cart = harness
            .store
            .update_product_amount(UpdateProductAmount {
                product_id: 1,
                amount,
            })
            .await
            .expect("no-op must not fail");

        assert_eq!(cart, before);
        assert_eq!(
            harness.storage.get(KEY).await.unwrap(),
            Some(serde_json::to_string(&before).unwrap())
        );
        assert_eq!(harness.inventory.stock_reads(), 0);
        assert!(harness.notifier.messages().await.is_empty());
    }

    #[rstest]
    #[case(1, 10, OUT_OF_STOCK)]
    #[case(99, 1, OUT_OF_STOCK)]
    #[case(2, 1, PRODUCT_NOT_FOUND)]
    #[case(404, 1, UPDATE_AMOUNT_FAILED)]
    #[tokio::test]
    async fn it_should_reject_invalid_amount_updates(
        inventory: InMemoryInventory,
        #[case] product_id: u64,
        #[case] amount: i64,
        #[case] expected_message: &str,
    ) {
        let before = cart_of(vec![sneaker(1, 2)]);
        let harness = Harness::with(inventory, stored(&before)).await;

        let result = harness
            .store
            .update_product_amount(UpdateProductAmount { product_id, amount })
            .await;

        assert!(result.is_err());
        assert_eq!(harness.store.cart().await, before);
        assert_eq!(harness.stored_cart().await, Some(before));
        assert_eq!(harness.notifier.messages().await, vec![expected_message]);
    }
}
