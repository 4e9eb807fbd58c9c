use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::list::{ListOrdersParams, ListOrdersUseCase};

pub struct ListOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListOrdersUseCase for ListOrdersUseCaseImpl {
    async fn execute(&self, params: ListOrdersParams) -> Result<Vec<Order>, OrderError> {
        self.logger
            .debug(&format!("Listing orders for business {}", params.business_id));

        let orders = self
            .repository
            .list_by_business(&params.business_id)
            .await?;
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockOrderRepo, business_id, mock_logger, order_from};

    #[tokio::test]
    async fn should_return_orders_as_stored() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_list_by_business()
            .returning(|_| Ok(vec![order_from("Newest"), order_from("Oldest")]));

        let use_case = ListOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(ListOrdersParams {
                business_id: business_id(),
            })
            .await
            .unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].customer_name, "Newest");
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_list_by_business()
            .returning(|_| Err(RepositoryError::database("timeout")));

        let use_case = ListOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListOrdersParams {
                business_id: business_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::Repository(_)));
    }
}
