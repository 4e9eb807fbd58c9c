use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::memory::InMemoryCartSessionRepository;
use persistence::order::listener::PgOrderSubscriber;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::storefront::repository::StoreCustomizationRepositoryPostgres;
use persistence::team::repository::TeamMemberRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::set_customer::SetCartCustomerUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::menu::get::GetMenuUseCaseImpl;
use business::application::menu::save::SaveMenuUseCaseImpl;
use business::application::order::list::ListOrdersUseCaseImpl;
use business::application::order::watch::WatchOrdersUseCaseImpl;
use business::application::storefront::get::GetStorefrontUseCaseImpl;
use business::application::storefront::update::UpdateCustomizationUseCaseImpl;
use business::application::team::add::AddTeamMemberUseCaseImpl;
use business::application::team::list::ListTeamMembersUseCaseImpl;
use business::application::team::remove::RemoveTeamMemberUseCaseImpl;
use business::domain::checkout::model::SubmissionGuard;

use crate::api::cart::routes::CartApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::menu::routes::MenuApi;
use crate::api::order::routes::OrderApi;
use crate::api::storefront::routes::StorefrontApi;
use crate::api::team::routes::TeamApi;
use crate::config::checkout_config::CheckoutConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub storefront_api: StorefrontApi,
    pub menu_api: MenuApi,
    pub cart_api: CartApi,
    pub checkout_api: CheckoutApi,
    pub order_api: OrderApi,
    pub team_api: TeamApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, checkout: &CheckoutConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let store_repository = Arc::new(StoreCustomizationRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let order_subscriber = Arc::new(PgOrderSubscriber::new(pool.clone()));
        let team_repository = Arc::new(TeamMemberRepositoryPostgres::new(pool));
        let cart_repository = Arc::new(InMemoryCartSessionRepository::new(checkout.cart_session_ttl));
        let submission_guard = Arc::new(SubmissionGuard::new());

        // Storefront and menu use cases
        let get_storefront_use_case = Arc::new(GetStorefrontUseCaseImpl {
            repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let update_customization_use_case = Arc::new(UpdateCustomizationUseCaseImpl {
            repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let get_menu_use_case = Arc::new(GetMenuUseCaseImpl {
            repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let save_menu_use_case = Arc::new(SaveMenuUseCaseImpl {
            repository: store_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            stores: store_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            stores: store_repository,
            guard: submission_guard.clone(),
            logger: logger.clone(),
        });
        let update_cart_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            guard: submission_guard.clone(),
            logger: logger.clone(),
        });
        let set_cart_customer_use_case = Arc::new(SetCartCustomerUseCaseImpl {
            repository: cart_repository.clone(),
            guard: submission_guard.clone(),
            logger: logger.clone(),
        });

        // Checkout and order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            carts: cart_repository,
            orders: order_repository.clone(),
            guard: submission_guard.clone(),
            validator: checkout.validator(),
            logger: logger.clone(),
        });
        let list_orders_use_case = Arc::new(ListOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let watch_orders_use_case = Arc::new(WatchOrdersUseCaseImpl {
            repository: order_repository,
            subscriber: order_subscriber,
            logger: logger.clone(),
        });

        // Team use cases
        let list_team_members_use_case = Arc::new(ListTeamMembersUseCaseImpl {
            repository: team_repository.clone(),
            logger: logger.clone(),
        });
        let add_team_member_use_case = Arc::new(AddTeamMemberUseCaseImpl {
            repository: team_repository.clone(),
            logger: logger.clone(),
        });
        let remove_team_member_use_case = Arc::new(RemoveTeamMemberUseCaseImpl {
            repository: team_repository,
            logger,
        });

        Self {
            health_api,
            storefront_api: StorefrontApi::new(get_storefront_use_case, update_customization_use_case),
            menu_api: MenuApi::new(get_menu_use_case, save_menu_use_case),
            cart_api: CartApi::new(
                create_cart_use_case,
                get_cart_use_case,
                add_cart_item_use_case,
                update_cart_quantity_use_case,
                set_cart_customer_use_case,
                submission_guard,
            ),
            checkout_api: CheckoutApi::new(place_order_use_case),
            order_api: OrderApi::new(list_orders_use_case, watch_orders_use_case),
            team_api: TeamApi::new(
                list_team_members_use_case,
                add_team_member_use_case,
                remove_team_member_use_case,
            ),
        }
    }
}
