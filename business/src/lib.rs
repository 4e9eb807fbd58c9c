pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod create;
        pub mod get;
        pub mod set_customer;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod place_order;
    }
    pub mod menu {
        pub mod get;
        pub mod save;
    }
    pub mod order {
        pub mod list;
        pub mod watch;
    }
    pub mod storefront {
        pub mod get;
        pub mod update;
    }
    pub mod team {
        pub mod add;
        pub mod list;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod contact;
        pub mod text;
        pub mod value_objects;
    }
    pub mod menu {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get;
            pub mod save;
        }
    }
    pub mod storefront {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get;
            pub mod update;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod create;
            pub mod get;
            pub mod set_customer;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod feed;
        pub mod model;
        pub mod repository;
        pub mod subscription;
        pub mod use_cases {
            pub mod list;
            pub mod watch;
        }
    }
    pub mod team {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod list;
            pub mod remove;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
