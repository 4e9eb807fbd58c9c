use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Storefront,
    Carts,
    Checkout,
    Orders,
    Menu,
    Team,
}
