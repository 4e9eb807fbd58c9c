pub mod db;
pub mod errors;
pub mod json;
pub mod cart {
    pub mod memory;
}
pub mod order {
    pub mod entity;
    pub mod listener;
    pub mod repository;
}
pub mod storefront {
    pub mod entity;
    pub mod repository;
}
pub mod team {
    pub mod entity;
    pub mod repository;
}
