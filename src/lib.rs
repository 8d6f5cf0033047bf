pub mod shared {
    pub mod infrastructure {
        pub mod notifier;
        pub mod storage;
    }
}

pub mod modules {
    pub mod cart {
        pub mod core {
            pub mod cart;
            pub mod decision;
            pub mod product;
        }
        pub mod use_cases {
            pub mod add_product {
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_product {
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_product_amount {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_cart {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod summary;
            }
        }
        pub mod application {
            pub mod errors;
            pub mod messages;
            pub mod store;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod inventory;
            }
        }
    }
}

pub mod shell;
